//! Game session driver
//!
//! Owns the simulation state and clocks two independent producers from one
//! stream of elapsed wall time: the fixed-rate step and the spawn interval.
//! Key presses are queued and drained at the start of the next step, so an
//! intent never straddles a step boundary.

use rand::Rng;
use rand_pcg::Pcg32;

use crate::consts::{MAX_PENDING_INPUTS, MAX_SUBSTEPS};
use crate::settings::{Settings, SettingsError};
use crate::sim::{
    GameState, InputKey, Snapshot, Spawner, StepOutcome, apply_intent, map_input, tick,
};

/// What one call to [`Session::update`] did
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UpdateReport {
    pub steps: u32,
    pub spawned: usize,
    /// The game ended during this update
    pub collided: bool,
}

/// A running game: state, spawner, input queue and step clock
#[derive(Debug, Clone)]
pub struct Session<R = Pcg32> {
    settings: Settings,
    state: GameState,
    spawner: Spawner<R>,
    pending: Vec<InputKey>,
    accumulator_ms: f64,
    viewport_width: f32,
}

impl Session<Pcg32> {
    /// Validate settings and start a session seeded from `settings.seed`
    pub fn new(settings: Settings) -> Result<Self, SettingsError> {
        settings.validate()?;
        let spawner = Spawner::seeded(settings.seed, settings.spawn_interval_ms)?;
        Self::with_spawner(settings, spawner)
    }
}

impl<R: Rng> Session<R> {
    /// Start a session with a caller-supplied random source
    pub fn with_rng(settings: Settings, rng: R) -> Result<Self, SettingsError> {
        settings.validate()?;
        let spawner = Spawner::new(rng, settings.spawn_interval_ms)?;
        Self::with_spawner(settings, spawner)
    }

    fn with_spawner(settings: Settings, spawner: Spawner<R>) -> Result<Self, SettingsError> {
        log::info!(
            "Session starting: {} Hz steps, spawn every {} ms, seed {}",
            settings.step_rate_hz,
            settings.spawn_interval_ms,
            settings.seed
        );
        Ok(Self {
            state: GameState::new(&settings),
            viewport_width: settings.viewport_width,
            spawner,
            pending: Vec::new(),
            accumulator_ms: 0.0,
            settings,
        })
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn is_over(&self) -> bool {
        self.state.game_over
    }

    /// Consistent copy of the last fully-stepped state
    pub fn snapshot(&self) -> Snapshot {
        self.state.snapshot()
    }

    pub fn viewport_width(&self) -> f32 {
        self.viewport_width
    }

    /// Track width reported by the host; new obstacles appear here
    pub fn set_viewport_width(&mut self, width: f32) {
        if width.is_finite() && width > 0.0 {
            self.viewport_width = width;
        } else {
            log::warn!("Ignoring invalid viewport width {}", width);
        }
    }

    /// Queue a key press for the next step. Returns false if it was dropped.
    pub fn press(&mut self, key: InputKey) -> bool {
        if self.state.game_over {
            log::debug!("Ignoring {:?} while game over", key);
            return false;
        }
        if self.pending.len() >= MAX_PENDING_INPUTS {
            log::debug!("Input queue full, dropping {:?}", key);
            return false;
        }
        self.pending.push(key);
        true
    }

    /// Map and apply every queued key, in arrival order
    fn drain_input(&mut self) {
        for key in self.pending.drain(..) {
            let intent = map_input(key, self.state.actor.jumping, &self.settings);
            apply_intent(&mut self.state, &intent);
        }
    }

    /// Run exactly one simulation step, draining queued input first
    pub fn step(&mut self) -> StepOutcome {
        if self.state.game_over {
            return StepOutcome::Halted;
        }
        self.drain_input();
        tick(&mut self.state, &self.settings)
    }

    /// Advance wall time by `dt_ms`, spawning and stepping as due
    pub fn update(&mut self, dt_ms: f64) -> UpdateReport {
        let mut report = UpdateReport::default();
        if !(dt_ms.is_finite() && dt_ms > 0.0) {
            return report;
        }

        report.spawned = self.spawner.update(
            dt_ms,
            &mut self.state,
            &self.settings,
            self.viewport_width,
        );

        if self.state.game_over {
            self.accumulator_ms = 0.0;
            return report;
        }

        let step_ms = self.settings.step_ms();
        self.accumulator_ms += dt_ms;

        while self.accumulator_ms >= step_ms && report.steps < MAX_SUBSTEPS {
            self.accumulator_ms -= step_ms;
            report.steps += 1;
            if self.step() == StepOutcome::Collided {
                report.collided = true;
                self.accumulator_ms = 0.0;
                return report;
            }
        }

        if self.accumulator_ms >= step_ms {
            log::warn!(
                "Falling behind: dropping {:.1} ms of simulation time",
                self.accumulator_ms - self.accumulator_ms % step_ms
            );
            self.accumulator_ms %= step_ms;
        }

        report
    }

    /// User-triggered restart. Only allowed once the game is over.
    pub fn restart(&mut self) -> bool {
        if !self.state.game_over {
            log::debug!("Restart ignored: game still running");
            return false;
        }
        let final_score = self.state.score;
        self.state.reset();
        self.pending.clear();
        self.accumulator_ms = 0.0;
        log::info!("Game restarted (previous score {})", final_score);
        true
    }
}
