//! FrameLoop: the fixed-rate animation cycle.
//!
//! Each frame: clear, border, rotate, edges, one flush, then a blocking sleep of
//! `1/fps`. The interrupt flag is checked only at the top of an iteration, so a
//! frame in progress always completes.

use std::io::Write;
use std::thread;
use std::time::Duration;

use anyhow::{ensure, Context, Result};
use log::{debug, info, trace};

use crate::canvas::Canvas;
use crate::core::{draw_axes, draw_cube, tumble, Cube};
use crate::interrupt::InterruptFlag;
use crate::types::Config;

/// State carried from one frame to the next.
#[derive(Debug, Clone, PartialEq)]
pub struct AnimationState {
    pub cube: Cube,
    pub frames: u64,
}

impl AnimationState {
    pub fn new(cube: Cube) -> Self {
        Self { cube, frames: 0 }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(Cube::new(config.cube_size))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopState {
    Running,
    Stopped,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    pub frames: u64,
}

pub struct FrameLoop<W: Write> {
    config: Config,
    interval: Duration,
    canvas: Canvas<W>,
    state: AnimationState,
    interrupt: InterruptFlag,
    loop_state: LoopState,
}

impl<W: Write> FrameLoop<W> {
    pub fn new(
        config: Config,
        canvas: Canvas<W>,
        state: AnimationState,
        interrupt: InterruptFlag,
    ) -> Result<Self> {
        let interval = validate(&config)?;
        Ok(Self {
            config,
            interval,
            canvas,
            state,
            interrupt,
            loop_state: LoopState::Running,
        })
    }

    pub fn state(&self) -> &AnimationState {
        &self.state
    }

    pub fn loop_state(&self) -> LoopState {
        self.loop_state
    }

    pub fn canvas(&self) -> &Canvas<W> {
        &self.canvas
    }

    pub fn into_canvas(self) -> Canvas<W> {
        self.canvas
    }

    /// Advance the cube one step and draw it, flushing once.
    pub fn render_frame(&mut self) -> Result<()> {
        self.canvas.clear()?;
        self.canvas.draw_border()?;

        tumble(&mut self.state.cube, self.config.rotation_step);

        if self.config.show_axes {
            draw_axes(&self.config.bounds, &mut self.canvas)?;
        }
        draw_cube(&self.state.cube, &mut self.canvas)?;

        self.canvas.flush()?;
        self.state.frames += 1;
        trace!("frame {} flushed", self.state.frames);
        Ok(())
    }

    /// Run until interrupted, then restore the terminal.
    ///
    /// Cleanup runs exactly once, including when entering the terminal or a
    /// frame fails; that error is returned after the terminal is restored.
    pub fn run(&mut self) -> Result<RunSummary> {
        ensure!(
            self.loop_state == LoopState::Running,
            "frame loop has already stopped"
        );

        if let Err(e) = self.canvas.enter() {
            // Part of the enter sequence may already be on the terminal.
            self.loop_state = LoopState::Stopped;
            let _ = self.canvas.exit();
            return Err(e);
        }
        let result = self.run_frames();

        self.loop_state = LoopState::Stopped;
        let cleanup = self.canvas.exit();
        info!("stopped after {} frames", self.state.frames);

        result?;
        cleanup?;
        Ok(RunSummary {
            frames: self.state.frames,
        })
    }

    fn run_frames(&mut self) -> Result<()> {
        debug!(
            "running at {} fps ({:?} per frame)",
            self.config.fps, self.interval
        );

        while !self.interrupt.is_requested() {
            self.render_frame()?;
            thread::sleep(self.interval);
        }
        debug!("interrupt observed");
        Ok(())
    }
}

/// Check `config` and return the pause between frames.
fn validate(config: &Config) -> Result<Duration> {
    ensure!(
        config.fps.is_finite() && config.fps > 0.0,
        "fps must be positive, got {}",
        config.fps
    );
    ensure!(
        config.cols >= 2 && config.rows >= 2,
        "grid must be at least 2x2, got {}x{}",
        config.cols,
        config.rows
    );
    let b = &config.bounds;
    ensure!(
        b.left != b.right && b.top != b.bot,
        "logical window is degenerate: {:?}",
        b
    );
    ensure!(config.cell_width >= 1, "cell width must be at least 1");
    ensure!(
        config.cube_size.is_finite() && config.cube_size > 0.0,
        "cube size must be positive, got {}",
        config.cube_size
    );
    config
        .frame_interval()
        .with_context(|| format!("fps {} gives an unrepresentable frame interval", config.fps))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frame_loop(config: Config) -> Result<FrameLoop<Vec<u8>>> {
        let canvas = Canvas::new(Vec::<u8>::new(), &config);
        FrameLoop::new(
            config,
            canvas,
            AnimationState::from_config(&config),
            InterruptFlag::new(),
        )
    }

    #[test]
    fn rejects_invalid_config() {
        let bad = [
            Config {
                fps: 0.0,
                ..Config::default()
            },
            Config {
                fps: f32::NAN,
                ..Config::default()
            },
            Config {
                cols: 1,
                ..Config::default()
            },
            Config {
                cell_width: 0,
                ..Config::default()
            },
            Config {
                cube_size: -1.0,
                ..Config::default()
            },
        ];
        for config in bad {
            assert!(frame_loop(config).is_err(), "{config:?} accepted");
        }

        let mut config = Config::default();
        config.bounds.right = config.bounds.left;
        assert!(frame_loop(config).is_err());
    }

    #[test]
    fn rejects_frame_rate_too_slow_for_a_duration() {
        let config = Config {
            fps: 1e-30,
            ..Config::default()
        };
        let err = frame_loop(config).err().expect("tiny fps accepted");
        assert!(err.to_string().contains("frame interval"), "{err}");

        // Slow but representable rates are still fine.
        let config = Config {
            fps: 0.001,
            ..Config::default()
        };
        assert!(frame_loop(config).is_ok());
    }

    #[test]
    fn render_frame_rotates_and_counts() {
        let mut fl = frame_loop(Config::default()).unwrap();
        let start = fl.state().cube;
        fl.render_frame().unwrap();
        assert_eq!(fl.state().frames, 1);
        assert_ne!(fl.state().cube, start);
        assert!(fl.canvas().pending().is_empty());
        assert!(fl.canvas().get_ref().starts_with(b"\x1B[2J\x1B[H"));
    }

    #[test]
    fn axes_are_drawn_when_enabled() {
        let mut plain = frame_loop(Config::default()).unwrap();
        plain.render_frame().unwrap();

        let mut with_axes = frame_loop(Config {
            show_axes: true,
            ..Config::default()
        })
        .unwrap();
        with_axes.render_frame().unwrap();

        assert!(with_axes.canvas().get_ref().len() > plain.canvas().get_ref().len());
    }

    #[test]
    fn run_refuses_to_restart() {
        let mut fl = frame_loop(Config::default()).unwrap();
        fl.interrupt.request();
        fl.run().unwrap();
        assert_eq!(fl.loop_state(), LoopState::Stopped);
        assert!(fl.run().is_err());
    }
}
