//! ck-core: Cricket darts rules, scoring, state representation, and configuration.

pub mod config;
pub mod history;
pub mod scoring;
pub mod state;
pub mod target;
pub mod turn;

pub use config::{Config, ConfigError, GameConfig, LoggingConfig};
pub use history::{HistoryStack, Snapshot};
pub use scoring::apply_throw;
pub use state::{cricket_slot, GameState, Player, PlayerScore, CRICKET_TARGETS, NUM_CRICKET};
pub use target::{Multiplier, Target};
pub use turn::advance;

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn version_is_nonempty() {
        assert!(!VERSION.is_empty());
    }
}

#[cfg(test)]
mod scoring_tests;
#[cfg(test)]
mod state_tests;
