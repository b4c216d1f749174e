//! Ground Runner entry point
//!
//! Headless native driver: runs a session at a fixed display frame rate,
//! optionally letting the autopilot play, and reports the outcome.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use ground_runner::sim::suggest_input;
use ground_runner::{Session, Settings};

#[derive(Parser, Debug)]
#[command(author, version, about = "Headless side-scrolling runner simulation", long_about = None)]
struct Args {
    /// JSON settings file (missing keys fall back to defaults)
    #[arg(long)]
    settings: Option<PathBuf>,
    /// Override the spawn seed
    #[arg(long)]
    seed: Option<u64>,
    /// Simulated wall time to run for
    #[arg(long, default_value_t = 30.0)]
    seconds: f64,
    /// Display frames per second driving the session
    #[arg(long, default_value_t = 60.0)]
    fps: f64,
    /// Let the demo autopilot press jump
    #[arg(long)]
    autopilot: bool,
    /// Restart this many times after a game over
    #[arg(long, default_value_t = 0)]
    restarts: u32,
    /// Print the final snapshot as JSON
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    if !(args.fps.is_finite() && args.fps > 0.0) {
        anyhow::bail!("--fps must be positive (got {})", args.fps);
    }

    let mut settings = match &args.settings {
        Some(path) => Settings::load(path)
            .with_context(|| format!("loading settings from {}", path.display()))?,
        None => Settings::default(),
    };
    if let Some(seed) = args.seed {
        settings.seed = seed;
    }

    let mut session = Session::new(settings).context("invalid settings")?;
    log::info!("Ground Runner (headless) starting...");

    let frame_ms = 1000.0 / args.fps;
    let frames = (args.seconds * args.fps).max(0.0) as u64;
    let mut restarts_left = args.restarts;
    let mut scores = Vec::new();

    for frame in 0..frames {
        if args.autopilot {
            if let Some(key) = suggest_input(session.state(), session.settings()) {
                session.press(key);
            }
        }

        let report = session.update(frame_ms);
        if report.collided {
            let score = session.state().score;
            log::info!("Game over at frame {} with score {}", frame, score);
            scores.push(score);
            if restarts_left == 0 {
                break;
            }
            restarts_left -= 1;
            session.restart();
        }
    }

    let snapshot = session.snapshot();
    if args.json {
        let json = serde_json::to_string_pretty(&snapshot).context("serializing snapshot")?;
        println!("{json}");
    } else {
        for (i, score) in scores.iter().enumerate() {
            println!("game {}: score {}", i + 1, score);
        }
        let status = if snapshot.game_over { "game over" } else { "running" };
        println!(
            "final: score {} after {} ticks ({}), {} obstacles live",
            snapshot.score,
            snapshot.time_ticks,
            status,
            snapshot.obstacles.len()
        );
    }

    Ok(())
}
