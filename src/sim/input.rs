//! Input mapping
//!
//! Turns a discrete key press into an [`Intent`]: which velocity components
//! to overwrite and whether a jump begins. The mapping is pure; the engine
//! applies the result in [`apply_intent`](super::tick::apply_intent).

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::settings::Settings;

/// Recognized inputs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InputKey {
    Left,
    Right,
    JumpUp,
    JumpSpace,
    Other,
}

impl InputKey {
    /// Map a browser-style key name (`KeyboardEvent.key`)
    pub fn from_key_name(name: &str) -> Self {
        match name {
            "ArrowLeft" => InputKey::Left,
            "ArrowRight" => InputKey::Right,
            "ArrowUp" => InputKey::JumpUp,
            " " | "Space" | "Spacebar" => InputKey::JumpSpace,
            _ => InputKey::Other,
        }
    }

    pub fn is_jump(&self) -> bool {
        matches!(self, InputKey::JumpUp | InputKey::JumpSpace)
    }
}

/// Velocity change requested by one input event.
///
/// Components are overrides, not additions: pressing left twice leaves vx at
/// the left speed. `None` leaves that component untouched.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Intent {
    pub vx: Option<f32>,
    pub vy: Option<f32>,
    /// Mark the actor as jumping in the same update as `vy`
    pub begin_jump: bool,
}

impl Intent {
    /// Ignored or unrecognized input
    pub const NONE: Intent = Intent {
        vx: None,
        vy: None,
        begin_jump: false,
    };

    pub fn is_noop(&self) -> bool {
        *self == Self::NONE
    }

    /// The intent as a {dx, dy} record, zero where nothing is overridden
    pub fn delta(&self) -> Vec2 {
        Vec2::new(self.vx.unwrap_or(0.0), self.vy.unwrap_or(0.0))
    }
}

/// Map a key to an intent given whether the actor is already mid-jump
pub fn map_input(key: InputKey, jumping: bool, settings: &Settings) -> Intent {
    match key {
        InputKey::Left => Intent {
            vx: Some(settings.left_speed),
            ..Intent::NONE
        },
        InputKey::Right => Intent {
            vx: Some(settings.right_speed),
            ..Intent::NONE
        },
        InputKey::JumpUp | InputKey::JumpSpace if !jumping => Intent {
            vy: Some(settings.jump_impulse),
            begin_jump: true,
            ..Intent::NONE
        },
        InputKey::JumpUp | InputKey::JumpSpace | InputKey::Other => Intent::NONE,
    }
}
