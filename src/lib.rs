//! Ground Runner - A side-scrolling obstacle dodging game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, obstacles, collisions, game state)
//! - `session`: Fixed-timestep driver clocking the simulation and the spawner
//! - `settings`: Tunable game constants with validation

pub mod session;
pub mod settings;
pub mod sim;

pub use session::Session;
pub use settings::{Settings, SettingsError};

/// Game configuration constants (defaults for [`Settings`])
pub mod consts {
    /// Nominal simulation rate (steps per second)
    pub const STEP_RATE_HZ: f32 = 60.0;
    /// Maximum substeps per update to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;
    /// Key presses held between steps before new ones are dropped
    pub const MAX_PENDING_INPUTS: usize = 32;

    /// Downward acceleration added to vy every step
    pub const GRAVITY: f32 = 0.5;
    /// Vertical velocity kick applied when a jump starts
    pub const JUMP_IMPULSE: f32 = -200.0;
    /// The y-coordinate the actor cannot go past
    pub const GROUND_LEVEL: f32 = 240.0;

    /// Horizontal velocity overrides for left/right input
    pub const LEFT_SPEED: f32 = -5.0;
    pub const RIGHT_SPEED: f32 = 10.0;

    /// Actor bounding box
    pub const ACTOR_WIDTH: f32 = 50.0;
    pub const ACTOR_HEIGHT: f32 = 70.0;
    /// Actor start position
    pub const ACTOR_START_X: f32 = 50.0;
    pub const ACTOR_START_Y: f32 = 200.0;

    /// Obstacles scroll left by this much every step
    pub const OBSTACLE_SPEED: f32 = 30.0;
    /// Obstacles at or left of this x are culled
    pub const CULL_X: f32 = -50.0;
    /// Wall-clock time between obstacle spawns
    pub const SPAWN_INTERVAL_MS: f32 = 2000.0;
    /// Shortest spawn interval accepted
    pub const MIN_SPAWN_INTERVAL_MS: f32 = 1.0;

    /// Spawn band: y = ground - U{0..SPAWN_Y_JITTER} - SPAWN_Y_OFFSET
    pub const SPAWN_Y_JITTER: u32 = 80;
    pub const SPAWN_Y_OFFSET: f32 = 20.0;
    /// Obstacle width = MIN + U{0..JITTER}
    pub const OBSTACLE_MIN_WIDTH: f32 = 50.0;
    pub const OBSTACLE_WIDTH_JITTER: u32 = 50;
    /// Obstacle height = MIN + U{0..JITTER}
    pub const OBSTACLE_MIN_HEIGHT: f32 = 30.0;
    pub const OBSTACLE_HEIGHT_JITTER: u32 = 30;

    /// Track width used when the host never reports a viewport
    pub const DEFAULT_VIEWPORT_WIDTH: f32 = 800.0;
}
