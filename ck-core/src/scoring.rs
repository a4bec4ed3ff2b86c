//! Scoring rules: one throw in, an updated roster out.
//!
//! This module is the single place that applies the cricket scoring rules.
//! It is a pure transformation over a copy of the state; the caller is
//! responsible for snapshotting beforehand and for advancing the turn
//! afterwards.
//!
//! Two oddities of the observed ruleset are kept deliberately:
//! - overflow marks on a still-open number credit points to the opponents
//!   who have not closed it, not to the thrower
//! - when every opponent has closed, overflow is worth half value, which
//!   can leave fractional totals

use crate::state::GameState;
use crate::target::{Multiplier, Target};

/// Apply one throw for the player under the cursor, returning the new state.
///
/// Never mutates `state`. Turn/round counters are untouched here; run
/// [`crate::turn::advance`] on the result. If the cursor does not address
/// a seat (fractional cursor), no score changes.
pub fn apply_throw(state: &GameState, target: Target, mult: Multiplier) -> GameState {
    let mut next = state.clone();
    let Some(cur) = state.current_seat() else {
        return next;
    };

    let value = target.value();
    let factor = mult.factor();

    if !target.is_cricket() {
        next.players[cur].score.total += value * factor as f64;
        return next;
    }

    let hits = next.players[cur].score.marks_on(target);
    // Evaluated before this throw lands, exactly as the rules read.
    let others_open = next
        .players
        .iter()
        .enumerate()
        .any(|(i, p)| i != cur && !p.score.is_closed(target));

    if hits < 3 {
        let tentative = hits + factor;
        let extra = tentative.saturating_sub(3);
        next.players[cur].score.set_marks(target, tentative.min(3));

        if extra > 0 {
            if others_open {
                credit_open_opponents(&mut next, cur, target, value * extra as f64);
            } else {
                next.players[cur].score.total += value * extra as f64 / 2.0;
            }
        }
    } else if others_open {
        credit_open_opponents(&mut next, cur, target, value * factor as f64);
    } else {
        next.players[cur].score.total += value * factor as f64;
    }

    next
}

/// Give every opponent `unit * (3 - marks)` points on `target`; closed
/// opponents get a zero delta.
fn credit_open_opponents(state: &mut GameState, cur: usize, target: Target, unit: f64) {
    for (i, p) in state.players.iter_mut().enumerate() {
        if i == cur {
            continue;
        }
        let open = 3u8.saturating_sub(p.score.marks_on(target));
        p.score.total += unit * open as f64;
    }
}
