//! Demo-mode autopilot
//!
//! Jumps when an obstacle in the actor's lane is about to arrive. The jump
//! only lands one step later, so the obstacle must still be at least one
//! scroll step away when the key is pressed.

use super::input::InputKey;
use super::state::GameState;
use crate::settings::Settings;

/// How many scroll steps ahead to start looking
const LOOKAHEAD_STEPS: f32 = 3.0;

/// Pick an input for the current state, if any
pub fn suggest_input(state: &GameState, settings: &Settings) -> Option<InputKey> {
    let actor = &state.actor;
    if state.game_over || actor.jumping || !actor.is_grounded(settings.ground_level) {
        return None;
    }

    let front = actor.pos.x + settings.actor_width;
    let top = actor.pos.y;
    let bottom = actor.pos.y + settings.actor_height;
    let nearest = settings.obstacle_speed;
    let farthest = settings.obstacle_speed * LOOKAHEAD_STEPS;

    let threat = state.obstacles.iter().any(|o| {
        let gap = o.pos.x - front;
        let in_lane = o.pos.y < bottom && o.pos.y + o.size.y > top;
        in_lane && gap >= nearest && gap < farthest
    });

    threat.then_some(InputKey::JumpSpace)
}
