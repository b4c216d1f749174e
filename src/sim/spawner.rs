//! Obstacle spawner
//!
//! Runs on its own wall-clock interval, independent of the step rate. The
//! random source is injected so spawns are reproducible under a seed.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::state::{GameState, Obstacle};
use crate::consts::MIN_SPAWN_INTERVAL_MS;
use crate::settings::{Settings, SettingsError};

/// Uniform draw from `0..span`; an empty span yields 0
fn jitter<R: Rng>(rng: &mut R, span: u32) -> f32 {
    if span == 0 {
        return 0.0;
    }
    rng.random_range(0..span) as f32
}

/// Build one obstacle at `x` with a random vertical offset and size
pub fn spawn_obstacle<R: Rng>(rng: &mut R, settings: &Settings, x: f32) -> Obstacle {
    let y_jitter = jitter(rng, settings.spawn_y_jitter);
    let width_jitter = jitter(rng, settings.obstacle_width_jitter);
    let height_jitter = jitter(rng, settings.obstacle_height_jitter);

    Obstacle::new(
        x,
        settings.ground_level - y_jitter - settings.spawn_y_offset,
        settings.obstacle_min_width + width_jitter,
        settings.obstacle_min_height + height_jitter,
    )
}

pub(crate) fn check_interval(interval_ms: f32) -> Result<(), SettingsError> {
    let field = "spawnIntervalMs";
    if !interval_ms.is_finite() {
        return Err(SettingsError::NotFinite { field });
    }
    if interval_ms <= 0.0 {
        return Err(SettingsError::NonPositive {
            field,
            value: interval_ms,
        });
    }
    if interval_ms < MIN_SPAWN_INTERVAL_MS {
        return Err(SettingsError::TooSmall {
            field,
            value: interval_ms,
            min: MIN_SPAWN_INTERVAL_MS,
        });
    }
    Ok(())
}

/// Fixed-interval obstacle generator
#[derive(Debug, Clone)]
pub struct Spawner<R = Pcg32> {
    rng: R,
    interval_ms: f64,
    /// Time since the last firing
    elapsed_ms: f64,
    /// Total firings (including spawns refused by the obstacle cap)
    fired: u64,
}

impl Spawner<Pcg32> {
    /// Spawner driven by a seeded PCG stream
    pub fn seeded(seed: u64, interval_ms: f32) -> Result<Self, SettingsError> {
        Self::new(Pcg32::seed_from_u64(seed), interval_ms)
    }
}

impl<R: Rng> Spawner<R> {
    /// Rejects intervals that are not finite or shorter than
    /// [`MIN_SPAWN_INTERVAL_MS`]
    pub fn new(rng: R, interval_ms: f32) -> Result<Self, SettingsError> {
        check_interval(interval_ms)?;
        Ok(Self {
            rng,
            interval_ms: interval_ms as f64,
            elapsed_ms: 0.0,
            fired: 0,
        })
    }

    pub fn fired(&self) -> u64 {
        self.fired
    }

    /// Milliseconds until the next firing
    pub fn time_until_next(&self) -> f64 {
        (self.interval_ms - self.elapsed_ms).max(0.0)
    }

    /// Advance the clock, appending one obstacle per elapsed interval.
    /// Returns how many were added to `state`.
    pub fn update(
        &mut self,
        dt_ms: f64,
        state: &mut GameState,
        settings: &Settings,
        viewport_width: f32,
    ) -> usize {
        if dt_ms <= 0.0 {
            return 0;
        }
        self.elapsed_ms += dt_ms;

        let mut added = 0;
        while self.elapsed_ms >= self.interval_ms {
            self.elapsed_ms -= self.interval_ms;
            self.fired += 1;

            let obstacle = spawn_obstacle(&mut self.rng, settings, viewport_width);
            if state.push_obstacle(obstacle, settings.max_obstacles) {
                log::debug!(
                    "Spawned obstacle #{} at ({}, {}) size {}x{}",
                    self.fired,
                    obstacle.pos.x,
                    obstacle.pos.y,
                    obstacle.size.x,
                    obstacle.size.y
                );
                added += 1;
            }
        }
        added
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spawn_ranges() {
        let settings = Settings::default();
        let mut rng = Pcg32::seed_from_u64(12345);
        for _ in 0..500 {
            let o = spawn_obstacle(&mut rng, &settings, 1024.0);
            assert_eq!(o.pos.x, 1024.0);
            // 240 - [0, 80) - 20
            assert!(o.pos.y > 140.0 && o.pos.y <= 220.0);
            assert!(o.size.x >= 50.0 && o.size.x < 100.0);
            assert!(o.size.y >= 30.0 && o.size.y < 60.0);
            // Integer draws
            assert_eq!(o.pos.y.fract(), 0.0);
            assert_eq!(o.size.x.fract(), 0.0);
            assert_eq!(o.size.y.fract(), 0.0);
        }
    }

    #[test]
    fn test_seeded_spawns_reproducible() {
        let settings = Settings::default();
        let mut a = Pcg32::seed_from_u64(99);
        let mut b = Pcg32::seed_from_u64(99);
        for _ in 0..20 {
            assert_eq!(
                spawn_obstacle(&mut a, &settings, 800.0),
                spawn_obstacle(&mut b, &settings, 800.0)
            );
        }
    }

    #[test]
    fn test_fires_on_interval() {
        let settings = Settings::default();
        let mut state = GameState::default();
        let mut spawner = Spawner::seeded(1, settings.spawn_interval_ms).expect("valid interval");

        assert_eq!(spawner.update(1999.0, &mut state, &settings, 800.0), 0);
        assert!(state.obstacles.is_empty());
        assert!((spawner.time_until_next() - 1.0).abs() < 1e-9);

        assert_eq!(spawner.update(1.0, &mut state, &settings, 800.0), 1);
        assert_eq!(state.obstacles.len(), 1);
        assert_eq!(state.obstacles[0].pos.x, 800.0);
    }

    #[test]
    fn test_catches_up_missed_intervals() {
        let settings = Settings::default();
        let mut state = GameState::default();
        let mut spawner = Spawner::seeded(1, settings.spawn_interval_ms).expect("valid interval");

        assert_eq!(spawner.update(6500.0, &mut state, &settings, 640.0), 3);
        assert_eq!(spawner.fired(), 3);
        assert!((spawner.time_until_next() - 1500.0).abs() < 1e-9);
    }

    #[test]
    fn test_respects_obstacle_cap() {
        let settings = Settings {
            max_obstacles: Some(2),
            ..Default::default()
        };
        let mut state = GameState::default();
        let mut spawner = Spawner::seeded(3, settings.spawn_interval_ms).expect("valid interval");

        assert_eq!(spawner.update(10_000.0, &mut state, &settings, 800.0), 2);
        assert_eq!(state.obstacles.len(), 2);
        assert_eq!(spawner.fired(), 5);
    }

    #[test]
    fn test_ignores_non_positive_dt() {
        let settings = Settings::default();
        let mut state = GameState::default();
        let mut spawner = Spawner::seeded(1, settings.spawn_interval_ms).expect("valid interval");
        assert_eq!(spawner.update(-5000.0, &mut state, &settings, 800.0), 0);
        assert_eq!(spawner.update(0.0, &mut state, &settings, 800.0), 0);
        assert!((spawner.time_until_next() - 2000.0).abs() < 1e-9);
    }

    #[test]
    fn test_custom_rng_injection() {
        // A constant-output generator pins every draw to zero
        struct Zeros;
        impl rand::RngCore for Zeros {
            fn next_u32(&mut self) -> u32 {
                0
            }
            fn next_u64(&mut self) -> u64 {
                0
            }
            fn fill_bytes(&mut self, dst: &mut [u8]) {
                dst.fill(0);
            }
        }

        let settings = Settings::default();
        let mut state = GameState::default();
        let mut spawner = Spawner::new(Zeros, 100.0).expect("valid interval");
        spawner.update(100.0, &mut state, &settings, 500.0);
        assert_eq!(state.obstacles, vec![Obstacle::new(500.0, 220.0, 50.0, 30.0)]);
    }

    #[test]
    fn test_rejects_bad_intervals() {
        assert!(matches!(
            Spawner::seeded(1, 0.0),
            Err(SettingsError::NonPositive { .. })
        ));
        assert!(matches!(
            Spawner::seeded(1, -2000.0),
            Err(SettingsError::NonPositive { .. })
        ));
        assert!(matches!(
            Spawner::seeded(1, f32::NAN),
            Err(SettingsError::NotFinite { .. })
        ));
        assert!(matches!(
            Spawner::seeded(1, f32::INFINITY),
            Err(SettingsError::NotFinite { .. })
        ));
        assert!(matches!(
            Spawner::seeded(1, 1e-30),
            Err(SettingsError::TooSmall { .. })
        ));
        assert!(Spawner::seeded(1, MIN_SPAWN_INTERVAL_MS).is_ok());
    }

    #[test]
    fn test_shortest_interval_update_returns() {
        let settings = Settings::default();
        let mut state = GameState::default();
        let mut spawner = Spawner::seeded(1, MIN_SPAWN_INTERVAL_MS).expect("valid interval");
        let added = spawner.update(16.0, &mut state, &settings, 800.0);
        assert_eq!(added, 16);
    }

    #[test]
    fn test_empty_jitter_does_not_panic() {
        let settings = Settings {
            spawn_y_jitter: 0,
            obstacle_width_jitter: 0,
            obstacle_height_jitter: 0,
            ..Default::default()
        };
        let mut rng = Pcg32::seed_from_u64(5);
        let o = spawn_obstacle(&mut rng, &settings, 800.0);
        assert_eq!(o, Obstacle::new(800.0, 220.0, 50.0, 30.0));
    }
}
