//! Canonical game state: per-player boards, turn cursor, round counters.

use crate::target::Target;

/// Cricket targets in display order (highest first, Bull last).
pub const CRICKET_TARGETS: [Target; 7] = [
    Target::Number(20),
    Target::Number(19),
    Target::Number(18),
    Target::Number(17),
    Target::Number(16),
    Target::Number(15),
    Target::Bull,
];

pub const NUM_CRICKET: usize = CRICKET_TARGETS.len();

/// Index of a cricket target in [`CRICKET_TARGETS`], `None` for the open set.
pub fn cricket_slot(target: Target) -> Option<usize> {
    CRICKET_TARGETS.iter().position(|t| *t == target)
}

/// Per-player board: mark counts for the cricket set plus the running total.
///
/// Marks never exceed 3; the scoring rules clamp on overflow. The total is
/// `f64` because the all-opponents-closed overflow rule halves the value,
/// which can leave a fractional score.
#[derive(Debug, Clone, PartialEq)]
pub struct PlayerScore {
    /// Mark counts, ordered as [`CRICKET_TARGETS`].
    pub marks: [u8; NUM_CRICKET],
    pub total: f64,
}

impl PlayerScore {
    pub fn new() -> Self {
        Self {
            marks: [0; NUM_CRICKET],
            total: 0.0,
        }
    }

    /// Marks on `target`; 0 for open-set targets (they never accrue marks).
    pub fn marks_on(&self, target: Target) -> u8 {
        cricket_slot(target).map_or(0, |i| self.marks[i])
    }

    pub fn set_marks(&mut self, target: Target, marks: u8) {
        if let Some(i) = cricket_slot(target) {
            self.marks[i] = marks;
        }
    }

    /// A cricket number is closed once it carries three marks.
    pub fn is_closed(&self, target: Target) -> bool {
        self.marks_on(target) >= 3
    }
}

impl Default for PlayerScore {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Player {
    pub name: String,
    pub score: PlayerScore,
}

impl Player {
    /// Build a player for 1-based seat `seat`; blank names fall back to
    /// `Player <seat>`.
    pub fn new(name: &str, seat: usize) -> Self {
        let trimmed = name.trim();
        let name = if trimmed.is_empty() {
            format!("Player {}", seat)
        } else {
            trimmed.to_string()
        };
        Self {
            name,
            score: PlayerScore::new(),
        }
    }
}

/// Default round limit when none (or zero) is supplied.
pub const DEFAULT_MAX_ROUNDS: u32 = 20;

/// Full state of one match.
///
/// Mutated only through [`crate::scoring::apply_throw`] and
/// [`crate::turn::advance`]; the presentation layer gets read access only.
#[derive(Debug, Clone, PartialEq)]
pub struct GameState {
    pub players: Vec<Player>,
    /// Player cursor. The turn-advance rule steps this by +0.5 (the
    /// literal observed behavior, kept as-is), so only integral values
    /// address a seat; see [`GameState::current_seat`].
    pub current_player_index: f64,
    /// Throws taken so far in the active turn, 0..=2 before a throw lands.
    pub throws_this_turn: u8,
    /// Monotonic throw counter, informational only.
    pub total_turns: u32,
    /// 1-based round counter; held at `max_rounds` once the game ends.
    pub round: u32,
    pub max_rounds: u32,
}

impl GameState {
    /// Fresh match for the given roster. `max_rounds == 0` falls back to
    /// the default of 20.
    pub fn new(names: &[String], max_rounds: u32) -> Self {
        let players = names
            .iter()
            .enumerate()
            .map(|(i, n)| Player::new(n, i + 1))
            .collect();
        let max_rounds = if max_rounds == 0 {
            DEFAULT_MAX_ROUNDS
        } else {
            max_rounds
        };
        Self {
            players,
            current_player_index: 0.0,
            throws_this_turn: 0,
            total_turns: 0,
            round: 1,
            max_rounds,
        }
    }

    /// Seat addressed by the cursor, if the cursor is integral and in range.
    pub fn current_seat(&self) -> Option<usize> {
        if self.current_player_index.fract() != 0.0 || self.current_player_index < 0.0 {
            return None;
        }
        let i = self.current_player_index as usize;
        (i < self.players.len()).then_some(i)
    }

    pub fn current_player(&self) -> Option<&Player> {
        self.current_seat().map(|i| &self.players[i])
    }
}
