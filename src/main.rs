//! Rotating wireframe cube (default binary).
//!
//! Draws straight into the terminal with cursor-positioning escape sequences
//! until SIGINT, then restores the screen and exits with status 0.

use std::io;

use anyhow::{Context, Result};
use log::info;
use signal_hook::consts::SIGINT;

use tui_cube::term::{AnimationState, Canvas, FrameLoop, InterruptFlag};
use tui_cube::types::Config;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let config = Config::default();
    let interrupt = InterruptFlag::new();
    signal_hook::flag::register(SIGINT, interrupt.handle())
        .context("failed to install SIGINT handler")?;

    let canvas = Canvas::new(io::stdout(), &config);
    let mut frame_loop = FrameLoop::new(
        config,
        canvas,
        AnimationState::from_config(&config),
        interrupt,
    )?;

    let summary = frame_loop.run()?;
    info!("rendered {} frames", summary.frames);
    Ok(())
}
