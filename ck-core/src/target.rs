//! Board targets and throw multipliers.
//!
//! The cricket set is 15..=20 plus Bull; everything else (1..=14, Miss)
//! only adds raw points and never closes.

use std::fmt;

/// A spot on the board a throw can be recorded against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Target {
    /// Numbered segment 1..=20.
    Number(u8),
    Bull,
    Miss,
}

impl Target {
    /// Point value of this target. Both Bull and Miss are worth 25;
    /// a recorded miss really does add points in the observed ruleset.
    pub fn value(&self) -> f64 {
        match self {
            Target::Number(n) => *n as f64,
            Target::Bull | Target::Miss => 25.0,
        }
    }

    /// True for targets that close after three marks (15..=20, Bull).
    pub fn is_cricket(&self) -> bool {
        match self {
            Target::Number(n) => (15..=20).contains(n),
            Target::Bull => true,
            Target::Miss => false,
        }
    }

    /// Map a raw numeric input to a numbered target.
    ///
    /// Zero, negatives, and anything above 20 yield `None`; callers
    /// treat that as "ignore the input", never as an error.
    pub fn from_value(v: i64) -> Option<Target> {
        if (1..=20).contains(&v) {
            Some(Target::Number(v as u8))
        } else {
            None
        }
    }

    /// Parse a textual target key ("20", "bull", "miss").
    pub fn from_key(key: &str) -> Option<Target> {
        match key.trim().to_ascii_lowercase().as_str() {
            "bull" | "b" => Some(Target::Bull),
            "miss" | "m" => Some(Target::Miss),
            other => other.parse::<i64>().ok().and_then(Target::from_value),
        }
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Target::Number(n) => write!(f, "{}", n),
            Target::Bull => write!(f, "Bull"),
            Target::Miss => write!(f, "Miss"),
        }
    }
}

/// Throw multiplier (single/double/triple).
///
/// Bull is conventionally single or double only; the scoring rules
/// handle any multiplier the same way regardless of target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Multiplier {
    Single,
    Double,
    Triple,
}

impl Multiplier {
    pub fn factor(&self) -> u8 {
        match self {
            Multiplier::Single => 1,
            Multiplier::Double => 2,
            Multiplier::Triple => 3,
        }
    }

    /// Map 1/2/3 to a multiplier; anything else is ignored upstream.
    pub fn from_value(v: i64) -> Option<Multiplier> {
        match v {
            1 => Some(Multiplier::Single),
            2 => Some(Multiplier::Double),
            3 => Some(Multiplier::Triple),
            _ => None,
        }
    }
}

impl fmt::Display for Multiplier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "x{}", self.factor())
    }
}
