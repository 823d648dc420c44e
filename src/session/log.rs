//! Session log: one JSON record per line.
//!
//! The log is best-effort. A write failure closes it and play continues.

use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;

use crate::core::LockEvent;
use crate::types::Position;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum LogRecord<'a> {
    SessionStart {
        seed: u32,
    },
    Lock {
        piece: &'static str,
        cells: &'a [Position],
        rows_cleared: u32,
        score: u32,
    },
    GameOver {
        score: u32,
        rows_cleared: u32,
        pieces: u32,
    },
    Quit {
        score: u32,
    },
}

impl<'a> From<&'a LockEvent> for LogRecord<'a> {
    fn from(ev: &'a LockEvent) -> Self {
        LogRecord::Lock {
            piece: ev.kind.as_str(),
            cells: &ev.cells,
            rows_cleared: ev.rows_cleared,
            score: ev.score,
        }
    }
}

#[derive(Default)]
pub struct SessionLog {
    out: Option<BufWriter<File>>,
    buf: Vec<u8>,
}

impl SessionLog {
    /// A log that records nothing
    pub fn disabled() -> Self {
        Self::default()
    }

    /// Append to `path`, creating it if needed
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .with_context(|| format!("open session log {}", path.display()))?;
        Ok(Self {
            out: Some(BufWriter::new(file)),
            buf: Vec::with_capacity(256),
        })
    }

    pub fn is_enabled(&self) -> bool {
        self.out.is_some()
    }

    pub fn record(&mut self, rec: &LogRecord<'_>) {
        let Some(out) = self.out.as_mut() else {
            return;
        };

        self.buf.clear();
        if serde_json::to_writer(&mut self.buf, rec).is_err() {
            return;
        }
        self.buf.push(b'\n');
        if out.write_all(&self.buf).is_err() {
            self.out = None;
        }
    }

    pub fn flush(&mut self) {
        if let Some(out) = self.out.as_mut() {
            if out.flush().is_err() {
                self.out = None;
            }
        }
    }
}

impl Drop for SessionLog {
    fn drop(&mut self) {
        self.flush();
    }
}
