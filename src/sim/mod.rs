//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Injected, seedable RNG only
//! - Stable iteration order (spawn order)
//! - No rendering or platform dependencies

pub mod autopilot;
pub mod collision;
pub mod input;
pub mod spawner;
pub mod state;
pub mod tick;

pub use autopilot::suggest_input;
pub use collision::{Aabb, aabb_overlap};
pub use input::{InputKey, Intent, map_input};
pub use spawner::{Spawner, spawn_obstacle};
pub use state::{Actor, GameState, Obstacle, Snapshot};
pub use tick::{StepOutcome, apply_intent, tick};
