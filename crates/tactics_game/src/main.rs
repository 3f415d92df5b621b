//! Grid tactics session host.
//!
//! Runs headless: a JSON session script stands in for the window's event
//! stream. Each scripted frame goes through the same fixed-timestep path a
//! windowed host would use:
//!
//!   1. sync key and pointer state into `InputState`
//!   2. route UI buttons to the active scene
//!   3. `begin_frame()` then `while should_step()` update the director
//!
//! The session ends when the script runs out or a scene hands over to the
//! engine-owned main menu or game-over screen.

mod animation;
mod config;
mod controller;
mod scenes;
mod script;
mod session;
mod world;

use std::path::{Path, PathBuf};

use config::{load_config_or_default, CONFIG_PATH, SCRIPT_PATH};
use scenes::Director;
use script::load_script_from_path;
use session::Session;

fn run(script_path: &Path) -> Result<(), String> {
    let config = load_config_or_default(Path::new(CONFIG_PATH))?;
    let script = load_script_from_path(script_path)?;
    log::info!(
        "Loaded script '{}' ({} steps, start {:?})",
        script_path.display(),
        script.steps.len(),
        script.start
    );

    let fixed_dt_us = config.fixed_dt_us;
    let director = Director::new(config, script.start)?;
    let mut session = Session::new(director, fixed_dt_us, script.frame_dt_us());
    let report = session.run(&script.expanded_frames())?;

    log::info!(
        "Session finished after {} frames / {} fixed steps in {:?}{}: {}",
        report.frames,
        report.fixed_steps,
        report.scene,
        if report.ended { " (engine-owned)" } else { "" },
        report.summary
    );
    Ok(())
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    log::info!("Grid tactics session starting...");

    let script_path = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(SCRIPT_PATH));

    if let Err(err) = run(&script_path) {
        log::error!("{err}");
        std::process::exit(1);
    }
}
