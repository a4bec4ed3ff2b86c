//! ck-controller: the single entry point the presentation layer talks to.
//!
//! Owns the live [`GameState`] and the undo history, runs the scoring and
//! turn rules on each throw, and notifies the end-of-game collaborator
//! exactly once per match. Nothing here raises errors: malformed input
//! and calls in the wrong phase degrade to no-ops, matching the
//! absorb-don't-report contract of the rules.

use ck_core::{advance, apply_throw, GameState, HistoryStack, Multiplier, Snapshot, Target};

pub use ck_core::Player;

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// End-of-game collaborator. Passed in at construction instead of being
/// wired up as ad hoc callbacks.
pub trait GameObserver {
    /// Called exactly once per match with the final, unsorted roster.
    /// Sorting for display is the presentation layer's business.
    fn on_end_game(&mut self, players: &[Player]);

    /// Called when the match is discarded via [`GameController::restart`].
    fn on_restart(&mut self) {}
}

/// What happened to a submitted throw.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThrowOutcome {
    /// Scored and counters advanced.
    Applied,
    /// Scored, and this throw ended the match.
    GameEnded,
    /// Absorbed without any state change (bad input, no match running,
    /// or the match is already over).
    Ignored,
}

/// Orchestration over the core rules; no game logic of its own.
pub struct GameController<O: GameObserver> {
    state: Option<GameState>,
    history: HistoryStack,
    observer: O,
    ended: bool,
    /// Multiplier factor of the most recent applied throw; the snapshot
    /// records the factor its throw used, and undo restores it.
    multiplier: u8,
}

impl<O: GameObserver> GameController<O> {
    pub fn new(observer: O) -> Self {
        Self {
            state: None,
            history: HistoryStack::new(),
            observer,
            ended: false,
            multiplier: 1,
        }
    }

    /// Begin a new match. Blank names become `Player N`; a zero round
    /// limit falls back to the default of 20.
    pub fn start(&mut self, names: &[String], max_rounds: u32) {
        self.state = Some(GameState::new(names, max_rounds));
        self.history.clear();
        self.ended = false;
        self.multiplier = 1;
    }

    /// Apply one throw: snapshot, score, advance.
    pub fn apply_throw(&mut self, target: Target, mult: Multiplier) -> ThrowOutcome {
        if self.ended {
            return ThrowOutcome::Ignored;
        }
        let Some(state) = self.state.as_ref() else {
            return ThrowOutcome::Ignored;
        };

        self.history.push(Snapshot {
            state: state.clone(),
            multiplier: mult.factor(),
        });

        let next = apply_throw(state, target, mult);
        let (next, game_ended) = advance(next);
        self.state = Some(next);
        self.multiplier = mult.factor();

        if game_ended {
            self.ended = true;
            let players = self.state.as_ref().map(|s| s.players.clone()).unwrap_or_default();
            self.observer.on_end_game(&players);
            ThrowOutcome::GameEnded
        } else {
            ThrowOutcome::Applied
        }
    }

    /// Throw from raw numeric input. Falsy or out-of-range values are
    /// absorbed: no state change, no history entry.
    pub fn apply_raw(&mut self, target: i64, mult: i64) -> ThrowOutcome {
        match (Target::from_value(target), Multiplier::from_value(mult)) {
            (Some(t), Some(m)) => self.apply_throw(t, m),
            _ => ThrowOutcome::Ignored,
        }
    }

    /// Revert the most recent throw, restoring every state field plus the
    /// multiplier that throw used. No-op (returns false) on empty history,
    /// before `start`, or after the match has ended.
    pub fn undo(&mut self) -> bool {
        if self.ended || self.state.is_none() {
            return false;
        }
        let Some(snapshot) = self.history.pop() else {
            return false;
        };
        self.multiplier = snapshot.multiplier;
        self.state = Some(snapshot.state);
        true
    }

    /// Discard the match and history, returning to the pre-game phase.
    pub fn restart(&mut self) {
        self.state = None;
        self.history.clear();
        self.ended = false;
        self.multiplier = 1;
        self.observer.on_restart();
    }

    /// Read-only view of the live state, for rendering.
    pub fn state(&self) -> Option<&GameState> {
        self.state.as_ref()
    }

    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    pub fn is_ended(&self) -> bool {
        self.ended
    }

    /// Factor of the most recent applied (or undone) throw.
    pub fn multiplier(&self) -> u8 {
        self.multiplier
    }

    pub fn observer(&self) -> &O {
        &self.observer
    }
}
