//! Undo history: full state snapshots, most recent on top.

use crate::state::GameState;

/// Everything needed to rewind one throw: an independent deep copy of the
/// pre-throw state plus the multiplier the throw used.
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot {
    pub state: GameState,
    pub multiplier: u8,
}

/// LIFO stack of snapshots. No redo: a popped snapshot is gone, and a new
/// throw after an undo starts a fresh branch.
#[derive(Debug, Default)]
pub struct HistoryStack {
    entries: Vec<Snapshot>,
}

impl HistoryStack {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, snapshot: Snapshot) {
        self.entries.push(snapshot);
    }

    /// Remove and return the most recent snapshot; `None` when empty.
    pub fn pop(&mut self) -> Option<Snapshot> {
        self.entries.pop()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
