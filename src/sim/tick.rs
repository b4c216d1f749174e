//! Fixed timestep simulation tick
//!
//! Advances the game by one step. Each step reads the actor as committed by
//! the previous step, computes the next actor, runs the obstacle pass against
//! the previous actor box and only then commits. The ground check and the
//! collision test therefore see last step's position, one step behind the
//! integrated one.

use glam::Vec2;

use super::input::Intent;
use super::state::GameState;
use crate::settings::Settings;

/// What a single call to [`tick`] did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    /// Game already over; nothing changed
    Halted,
    /// Normal step, score advanced
    Advanced,
    /// The actor hit an obstacle this step; game is now over
    Collided,
}

/// Apply a mapped input to the actor. Velocity and the jumping flag change
/// together so no step can observe one without the other.
pub fn apply_intent(state: &mut GameState, intent: &Intent) {
    if let Some(vx) = intent.vx {
        state.actor.vel.x = vx;
    }
    if let Some(vy) = intent.vy {
        state.actor.vel.y = vy;
    }
    if intent.begin_jump {
        state.actor.jumping = true;
    }
}

/// Advance the game state by one fixed step
pub fn tick(state: &mut GameState, settings: &Settings) -> StepOutcome {
    if state.game_over {
        return StepOutcome::Halted;
    }

    let prev = state.actor;
    let mut next = prev;

    // Gravity, then position with the updated velocity
    next.vel.y += settings.gravity_accel;
    next.pos.x = prev.pos.x + next.vel.x;
    next.pos.y = (prev.pos.y + next.vel.y).min(settings.ground_level);

    // Inverted bounds pin to max_x
    if let Some((min_x, max_x)) = settings.track_bounds {
        next.pos.x = next.pos.x.max(min_x).min(max_x);
    }

    // Landing uses last step's y
    if prev.is_grounded(settings.ground_level) {
        next.jumping = false;
        next.vel.y = 0.0;
    }

    // Scroll, collide, cull in one pass. Collision is tested first so an
    // obstacle leaving the track can still end the game.
    let actor_box = prev.bounds(Vec2::new(settings.actor_width, settings.actor_height));
    let mut collided = false;
    state.obstacles.retain_mut(|obstacle| {
        obstacle.pos.x -= settings.obstacle_speed;
        if obstacle.bounds().overlaps(&actor_box) {
            collided = true;
            return false;
        }
        obstacle.pos.x > settings.cull_x
    });

    state.actor = next;
    state.time_ticks += 1;

    if collided {
        state.game_over = true;
        log::info!(
            "Collision at tick {}, final score {}",
            state.time_ticks,
            state.score
        );
        StepOutcome::Collided
    } else {
        state.score += 1;
        StepOutcome::Advanced
    }
}
