//! ck-logging: append-only NDJSON match log.
//!
//! One JSON object per line, written as play happens, for post-game
//! review. This is an observability artifact, not restorable state; the
//! engine never reads it back.

use std::fs::OpenOptions;
use std::io::{BufWriter, Write};
use std::path::Path;
use std::time::{SystemTime, UNIX_EPOCH};

use serde::Serialize;
use thiserror::Error;

use ck_core::{Player, CRICKET_TARGETS, NUM_CRICKET};

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Match log schema version.
pub const LOG_SCHEMA_VERSION: u32 = 1;

#[derive(Debug, Error)]
pub enum NdjsonError {
    #[error("io: {0}")]
    Io(#[from] std::io::Error),
    #[error("json: {0}")]
    Json(#[from] serde_json::Error),
}

pub fn now_ms() -> u64 {
    let d = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default();
    d.as_millis() as u64
}

/// Hash of the config snapshot recorded in the match-started event.
pub fn hash_config_bytes(bytes: &[u8]) -> String {
    blake3::hash(bytes).to_hex().to_string()
}

#[derive(Debug, Clone, Serialize)]
pub struct MatchStartedV1 {
    pub event: &'static str,
    pub schema_version: u32,
    pub ts_ms: u64,
    pub players: Vec<String>,
    pub max_rounds: u32,
    pub config_hash: Option<String>,
}

impl MatchStartedV1 {
    pub fn new(players: Vec<String>, max_rounds: u32, config_hash: Option<String>) -> Self {
        Self {
            event: "match_started",
            schema_version: LOG_SCHEMA_VERSION,
            ts_ms: now_ms(),
            players,
            max_rounds,
            config_hash,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ThrowEventV1 {
    pub event: &'static str,
    pub ts_ms: u64,
    pub round: u32,
    pub total_turns: u32,
    /// Seat of the thrower; absent when the cursor was between seats.
    pub seat: Option<usize>,
    pub target: String,
    pub multiplier: u8,
    /// "applied", "game_ended", or "ignored".
    pub outcome: &'static str,
}

impl ThrowEventV1 {
    pub fn new(
        round: u32,
        total_turns: u32,
        seat: Option<usize>,
        target: String,
        multiplier: u8,
        outcome: &'static str,
    ) -> Self {
        Self {
            event: "throw",
            ts_ms: now_ms(),
            round,
            total_turns,
            seat,
            target,
            multiplier,
            outcome,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct UndoEventV1 {
    pub event: &'static str,
    pub ts_ms: u64,
    /// False when there was nothing to undo.
    pub undone: bool,
}

impl UndoEventV1 {
    pub fn new(undone: bool) -> Self {
        Self {
            event: "undo",
            ts_ms: now_ms(),
            undone,
        }
    }
}

/// One roster entry of the final standings.
#[derive(Debug, Clone, Serialize)]
pub struct FinalStandingV1 {
    pub name: String,
    pub total: f64,
    /// Cricket marks in display order (20..15, Bull).
    pub marks: [u8; NUM_CRICKET],
}

impl FinalStandingV1 {
    pub fn from_player(p: &Player) -> Self {
        let mut marks = [0u8; NUM_CRICKET];
        for (i, t) in CRICKET_TARGETS.iter().enumerate() {
            marks[i] = p.score.marks_on(*t);
        }
        Self {
            name: p.name.clone(),
            total: p.score.total,
            marks,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct MatchEndedV1 {
    pub event: &'static str,
    pub ts_ms: u64,
    pub rounds_played: u32,
    pub total_turns: u32,
    /// Seat order, unsorted; ranking is a display concern.
    pub standings: Vec<FinalStandingV1>,
}

impl MatchEndedV1 {
    pub fn new(rounds_played: u32, total_turns: u32, players: &[Player]) -> Self {
        Self {
            event: "match_ended",
            ts_ms: now_ms(),
            rounds_played,
            total_turns,
            standings: players.iter().map(FinalStandingV1::from_player).collect(),
        }
    }
}

/// Append-only NDJSON writer with periodic flushing.
pub struct NdjsonWriter {
    w: BufWriter<std::fs::File>,
    written_since_flush: usize,
    flush_every: usize,
}

impl NdjsonWriter {
    /// Open for append, flushing every `flush_every` events (0 flushes on
    /// every event).
    pub fn open_append_with_flush(
        path: impl AsRef<Path>,
        flush_every: usize,
    ) -> Result<Self, NdjsonError> {
        let f = OpenOptions::new().create(true).append(true).open(path)?;
        Ok(Self {
            w: BufWriter::new(f),
            written_since_flush: 0,
            flush_every,
        })
    }

    pub fn write_event<T: Serialize>(&mut self, event: &T) -> Result<(), NdjsonError> {
        let line = serde_json::to_string(event)?;
        self.w.write_all(line.as_bytes())?;
        self.w.write_all(b"\n")?;
        self.written_since_flush += 1;
        if self.written_since_flush >= self.flush_every.max(1) {
            self.flush()?;
        }
        Ok(())
    }

    pub fn flush(&mut self) -> Result<(), NdjsonError> {
        self.w.flush()?;
        self.written_since_flush = 0;
        Ok(())
    }
}
