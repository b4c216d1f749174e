//! Game state and core simulation types
//!
//! Everything the simulation mutates lives in [`GameState`]. The presentation
//! layer never borrows it across a frame; it reads a [`Snapshot`] instead.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::collision::Aabb;
use crate::consts::*;
use crate::settings::Settings;

/// The player-controlled runner
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Actor {
    pub pos: Vec2,
    pub vel: Vec2,
    /// Set when a jump starts, cleared once the actor was grounded last step
    pub jumping: bool,
}

impl Actor {
    /// An actor at rest at the given position
    pub fn at_rest(pos: Vec2) -> Self {
        Self {
            pos,
            vel: Vec2::ZERO,
            jumping: false,
        }
    }

    /// Bounding box anchored at the actor's position
    pub fn bounds(&self, size: Vec2) -> Aabb {
        Aabb::new(self.pos, size)
    }

    /// Whether the actor sits on (or past) the ground line
    #[inline]
    pub fn is_grounded(&self, ground_level: f32) -> bool {
        self.pos.y >= ground_level
    }
}

/// A scrolling obstacle (identified only by its slot in the obstacle list)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Obstacle {
    pub pos: Vec2,
    pub size: Vec2,
}

impl Obstacle {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            pos: Vec2::new(x, y),
            size: Vec2::new(width, height),
        }
    }

    pub fn bounds(&self) -> Aabb {
        Aabb::new(self.pos, self.size)
    }
}

/// Complete simulation state
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    pub actor: Actor,
    /// Live obstacles in spawn order
    pub obstacles: Vec<Obstacle>,
    pub score: u64,
    pub game_over: bool,
    /// Steps advanced since the last reset
    pub time_ticks: u64,
    /// Where the actor returns to on reset
    start: Vec2,
}

impl Default for GameState {
    fn default() -> Self {
        Self::with_start(Vec2::new(ACTOR_START_X, ACTOR_START_Y))
    }
}

impl GameState {
    /// Fresh state using the start position from settings
    pub fn new(settings: &Settings) -> Self {
        Self::with_start(Vec2::new(settings.start_x, settings.start_y))
    }

    fn with_start(start: Vec2) -> Self {
        Self {
            actor: Actor::at_rest(start),
            obstacles: Vec::new(),
            score: 0,
            game_over: false,
            time_ticks: 0,
            start,
        }
    }

    /// Restore the initial values. Calling it again changes nothing.
    pub fn reset(&mut self) {
        *self = Self::with_start(self.start);
    }

    /// Append a spawned obstacle unless the optional live cap is reached.
    /// Returns whether it was added.
    pub fn push_obstacle(&mut self, obstacle: Obstacle, cap: Option<usize>) -> bool {
        if cap.is_some_and(|max| self.obstacles.len() >= max) {
            log::debug!(
                "Obstacle cap reached ({} live), dropping spawn",
                self.obstacles.len()
            );
            return false;
        }
        self.obstacles.push(obstacle);
        true
    }

    /// Copy out what the presentation layer needs for one frame
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            actor_pos: self.actor.pos,
            actor_vel: self.actor.vel,
            jumping: self.actor.jumping,
            obstacles: self.obstacles.clone(),
            score: self.score,
            game_over: self.game_over,
            time_ticks: self.time_ticks,
        }
    }
}

/// Read-only, owned view of one fully-stepped state
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub actor_pos: Vec2,
    pub actor_vel: Vec2,
    pub jumping: bool,
    pub obstacles: Vec<Obstacle>,
    pub score: u64,
    pub game_over: bool,
    pub time_ticks: u64,
}
