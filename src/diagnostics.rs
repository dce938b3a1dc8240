//! Per-tick diagnostic log
//!
//! Enabled with `--debug`. Writes one JSON object per line: a `start` record
//! with the physics configuration, then a `tick` record for every tick the
//! ball moved. Each record is flushed as soon as it is written so the file
//! is complete even if the process is killed.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use serde::Serialize;

use crate::sim::{Ball, Phase, SimulationConfig};

#[derive(Debug, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
enum Record<'a> {
    Start {
        config: &'a SimulationConfig,
    },
    Tick {
        tick: u64,
        phase: Phase,
        x: f32,
        y: f32,
        v_up: f32,
        v_right: f32,
    },
}

/// Line-delimited JSON state log
///
/// The default writer type is boxed so a game can hold a file log or any
/// other sink behind one type.
pub struct DiagnosticLog<W: Write = Box<dyn Write>> {
    writer: W,
    records: u64,
}

impl DiagnosticLog {
    /// Create (or truncate) the log file at `path`
    pub fn create(path: &Path, config: &SimulationConfig) -> io::Result<Self> {
        let file = File::create(path)?;
        log::info!("Writing diagnostics to {}", path.display());
        Self::new(Box::new(BufWriter::new(file)), config)
    }
}

impl<W: Write> DiagnosticLog<W> {
    /// Wrap `writer` and write the start record
    pub fn new(writer: W, config: &SimulationConfig) -> io::Result<Self> {
        let mut log = Self { writer, records: 0 };
        log.write(&Record::Start { config })?;
        Ok(log)
    }

    /// Record the ball's state after `tick`
    pub fn log_state(&mut self, tick: u64, phase: Phase, ball: &Ball) -> io::Result<()> {
        self.write(&Record::Tick {
            tick,
            phase,
            x: ball.pos.x,
            y: ball.pos.y,
            v_up: ball.v_up(),
            v_right: ball.v_right(),
        })
    }

    /// Records written so far, including the start record
    pub fn records(&self) -> u64 {
        self.records
    }

    pub fn into_inner(self) -> W {
        self.writer
    }

    fn write(&mut self, record: &Record<'_>) -> io::Result<()> {
        serde_json::to_writer(&mut self.writer, record)?;
        self.writer.write_all(b"\n")?;
        self.writer.flush()?;
        self.records += 1;
        Ok(())
    }
}
