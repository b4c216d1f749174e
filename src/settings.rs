//! Game settings and tunables
//!
//! Every constant the simulation reads lives here so a host can tweak the
//! feel of the game without recompiling. Settings are validated once, when a
//! [`Session`](crate::Session) is built; the simulation itself never checks them.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::*;

/// Reasons a settings value is rejected
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("{field} must be a finite number")]
    NotFinite { field: &'static str },
    #[error("{field} must be greater than zero (got {value})")]
    NonPositive { field: &'static str, value: f32 },
    #[error("{field} must be at least {min} (got {value})")]
    TooSmall {
        field: &'static str,
        value: f32,
        min: f32,
    },
    #[error("{field} must not be negative (got {value})")]
    Negative { field: &'static str, value: f32 },
    #[error("{field} random range must not be empty")]
    EmptyRange { field: &'static str },
    #[error("start y {start_y} is past ground level {ground_level}")]
    StartBelowGround { start_y: f32, ground_level: f32 },
    #[error("track bounds [{min}, {max}] must satisfy min < max and contain start x {start_x}")]
    InvalidTrackBounds { min: f32, max: f32, start_x: f32 },
    #[error("max obstacles must be at least 1 when set")]
    ZeroObstacleCap,
    #[error("malformed settings json: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("failed to access settings file {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Game tunables
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Settings {
    // === Physics ===
    /// Added to vy every step
    pub gravity_accel: f32,
    /// vy set by a jump (negative moves toward smaller y)
    pub jump_impulse: f32,
    /// Actor y never goes past this
    pub ground_level: f32,
    /// vx set by a left press
    pub left_speed: f32,
    /// vx set by a right press
    pub right_speed: f32,

    // === Actor ===
    pub actor_width: f32,
    pub actor_height: f32,
    pub start_x: f32,
    pub start_y: f32,

    // === Obstacles ===
    /// x decrement per step
    pub obstacle_speed: f32,
    /// Obstacles at or left of this x are dropped
    pub cull_x: f32,
    /// Wall-clock milliseconds between spawns
    pub spawn_interval_ms: f32,
    pub spawn_y_jitter: u32,
    pub spawn_y_offset: f32,
    pub obstacle_min_width: f32,
    pub obstacle_width_jitter: u32,
    pub obstacle_min_height: f32,
    pub obstacle_height_jitter: u32,

    // === Timing ===
    pub step_rate_hz: f32,

    // === Environment ===
    /// Track width; new obstacles appear here
    pub viewport_width: f32,
    /// Seed for the spawn RNG
    pub seed: u64,

    // === Hardening (off by default) ===
    /// Clamp actor x into [min, max]
    pub track_bounds: Option<(f32, f32)>,
    /// Refuse spawns once this many obstacles are live
    pub max_obstacles: Option<usize>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            gravity_accel: GRAVITY,
            jump_impulse: JUMP_IMPULSE,
            ground_level: GROUND_LEVEL,
            left_speed: LEFT_SPEED,
            right_speed: RIGHT_SPEED,

            actor_width: ACTOR_WIDTH,
            actor_height: ACTOR_HEIGHT,
            start_x: ACTOR_START_X,
            start_y: ACTOR_START_Y,

            obstacle_speed: OBSTACLE_SPEED,
            cull_x: CULL_X,
            spawn_interval_ms: SPAWN_INTERVAL_MS,
            spawn_y_jitter: SPAWN_Y_JITTER,
            spawn_y_offset: SPAWN_Y_OFFSET,
            obstacle_min_width: OBSTACLE_MIN_WIDTH,
            obstacle_width_jitter: OBSTACLE_WIDTH_JITTER,
            obstacle_min_height: OBSTACLE_MIN_HEIGHT,
            obstacle_height_jitter: OBSTACLE_HEIGHT_JITTER,

            step_rate_hz: STEP_RATE_HZ,

            viewport_width: DEFAULT_VIEWPORT_WIDTH,
            seed: 0,

            track_bounds: None,
            max_obstacles: None,
        }
    }
}

impl Settings {
    /// Default settings with a specific spawn seed
    pub fn with_seed(seed: u64) -> Self {
        Self {
            seed,
            ..Self::default()
        }
    }

    /// Length of one simulation step in milliseconds
    pub fn step_ms(&self) -> f64 {
        1000.0 / self.step_rate_hz as f64
    }

    /// Check every value is in range
    pub fn validate(&self) -> Result<(), SettingsError> {
        let finite = [
            ("gravityAccel", self.gravity_accel),
            ("jumpImpulse", self.jump_impulse),
            ("groundLevel", self.ground_level),
            ("leftSpeed", self.left_speed),
            ("rightSpeed", self.right_speed),
            ("startX", self.start_x),
            ("startY", self.start_y),
            ("cullX", self.cull_x),
            ("spawnYOffset", self.spawn_y_offset),
        ];
        for (field, value) in finite {
            if !value.is_finite() {
                return Err(SettingsError::NotFinite { field });
            }
        }

        let positive = [
            ("stepRateHz", self.step_rate_hz),
            ("spawnIntervalMs", self.spawn_interval_ms),
            ("actorWidth", self.actor_width),
            ("actorHeight", self.actor_height),
            ("obstacleMinWidth", self.obstacle_min_width),
            ("obstacleMinHeight", self.obstacle_min_height),
            ("viewportWidth", self.viewport_width),
        ];
        for (field, value) in positive {
            if !value.is_finite() {
                return Err(SettingsError::NotFinite { field });
            }
            if value <= 0.0 {
                return Err(SettingsError::NonPositive { field, value });
            }
        }

        crate::sim::spawner::check_interval(self.spawn_interval_ms)?;

        if !self.obstacle_speed.is_finite() {
            return Err(SettingsError::NotFinite {
                field: "obstacleSpeed",
            });
        }
        if self.obstacle_speed < 0.0 {
            return Err(SettingsError::Negative {
                field: "obstacleSpeed",
                value: self.obstacle_speed,
            });
        }

        let ranges = [
            ("spawnYJitter", self.spawn_y_jitter),
            ("obstacleWidthJitter", self.obstacle_width_jitter),
            ("obstacleHeightJitter", self.obstacle_height_jitter),
        ];
        for (field, span) in ranges {
            if span == 0 {
                return Err(SettingsError::EmptyRange { field });
            }
        }

        if self.start_y > self.ground_level {
            return Err(SettingsError::StartBelowGround {
                start_y: self.start_y,
                ground_level: self.ground_level,
            });
        }

        if let Some((min, max)) = self.track_bounds {
            let ordered = min.is_finite() && max.is_finite() && min < max;
            if !ordered || self.start_x < min || self.start_x > max {
                return Err(SettingsError::InvalidTrackBounds {
                    min,
                    max,
                    start_x: self.start_x,
                });
            }
        }

        if self.max_obstacles == Some(0) {
            return Err(SettingsError::ZeroObstacleCap);
        }

        Ok(())
    }

    /// Parse and validate settings from JSON (missing keys use defaults)
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        let settings: Self = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Serialize to pretty JSON
    pub fn to_json(&self) -> Result<String, SettingsError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Load settings from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| SettingsError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let settings = Self::from_json(&json)?;
        log::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    /// Save settings to a JSON file
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), SettingsError> {
        let path = path.as_ref();
        std::fs::write(path, self.to_json()?).map_err(|source| SettingsError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        log::info!("Settings saved to {}", path.display());
        Ok(())
    }
}
