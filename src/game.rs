//! The control loop
//!
//! One iteration per tick: drain input, advance the ball, log, render, sleep.
//! While the ball is at rest the frame is left alone so the instructions
//! stay on screen, but the loop still sleeps a tick between polls.

use std::io;

use crate::diagnostics::DiagnosticLog;
use crate::platform::Terminal;
use crate::renderer::{render_and_pace, show_instructions};
use crate::sim::{Ball, Phase, Signal, SimulationConfig, advance_tick, apply_keypress};

/// A running simulation bound to a terminal
pub struct Game<T: Terminal> {
    terminal: T,
    config: SimulationConfig,
    ball: Ball,
    diagnostics: Option<DiagnosticLog>,
    /// Phase of the most recent tick (`None` before the first)
    phase: Option<Phase>,
    time_ticks: u64,
}

impl<T: Terminal> Game<T> {
    /// Set up a game on `terminal`, deriving the physics from its grid size
    pub fn new(terminal: T) -> io::Result<Self> {
        let (lines, cols) = terminal.grid_size()?;
        Ok(Self::with_config(terminal, SimulationConfig::from_grid(lines, cols)))
    }

    pub fn with_config(terminal: T, config: SimulationConfig) -> Self {
        let ball = Ball::new(&config);
        Self {
            terminal,
            config,
            ball,
            diagnostics: None,
            phase: None,
            time_ticks: 0,
        }
    }

    /// Record every active tick to `diagnostics`
    pub fn with_diagnostics(mut self, diagnostics: DiagnosticLog) -> Self {
        self.diagnostics = Some(diagnostics);
        self
    }

    pub fn ball(&self) -> &Ball {
        &self.ball
    }

    pub fn ball_mut(&mut self) -> &mut Ball {
        &mut self.ball
    }

    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    pub fn phase(&self) -> Option<Phase> {
        self.phase
    }

    pub fn time_ticks(&self) -> u64 {
        self.time_ticks
    }

    pub fn terminal(&self) -> &T {
        &self.terminal
    }

    /// Apply every key waiting in the input buffer
    ///
    /// Stops at the first quit key; anything queued after it is left unread.
    pub fn drain_input(&mut self) -> io::Result<Signal> {
        while let Some(key) = self.terminal.poll_key()? {
            if apply_keypress(Some(key), &mut self.ball, &self.config) == Signal::Quit {
                log::info!("Quit requested at tick {}", self.time_ticks);
                return Ok(Signal::Quit);
            }
        }
        Ok(Signal::Continue)
    }

    /// Run one tick of the loop
    pub fn step(&mut self) -> io::Result<Signal> {
        if self.drain_input()? == Signal::Quit {
            return Ok(Signal::Quit);
        }

        let phase = advance_tick(&mut self.ball, &self.config);
        self.time_ticks += 1;
        let previous = self.phase.replace(phase);
        if previous != Some(phase) {
            log::debug!("Tick {}: {:?} -> {:?}", self.time_ticks, previous, phase);
        }

        let resting = phase == Phase::AtRest && previous == Some(Phase::AtRest);
        if !resting {
            self.log_state(phase);
        }

        match phase {
            Phase::AtRest => {
                if !resting {
                    show_instructions(&mut self.terminal)?;
                }
                self.terminal.sleep(self.config.tick_interval);
            }
            Phase::Airborne | Phase::Rolling => {
                render_and_pace(&mut self.terminal, &self.ball, &self.config)?;
            }
        }
        Ok(Signal::Continue)
    }

    /// Run until the player quits
    pub fn run(&mut self) -> io::Result<()> {
        log::info!(
            "Starting on a {}x{} grid (gravity {:.3} cells/tick²)",
            self.config.cols,
            self.config.lines,
            self.config.gravity_accel
        );
        show_instructions(&mut self.terminal)?;
        while self.step()? == Signal::Continue {}
        log::info!("Stopped after {} ticks", self.time_ticks);
        Ok(())
    }

    fn log_state(&mut self, phase: Phase) {
        let Some(diagnostics) = self.diagnostics.as_mut() else {
            return;
        };
        if let Err(e) = diagnostics.log_state(self.time_ticks, phase, &self.ball) {
            log::warn!("Diagnostic log write failed, disabling it: {}", e);
            self.diagnostics = None;
        }
    }
}
