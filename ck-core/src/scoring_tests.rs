use crate::scoring::apply_throw;
use crate::state::GameState;
use crate::target::{Multiplier, Target};

fn fresh(players: usize) -> GameState {
    GameState::new(&vec![String::new(); players], 20)
}

#[test]
fn open_set_adds_raw_points_to_thrower_only() {
    let s = fresh(2);
    let next = apply_throw(&s, Target::Number(5), Multiplier::Triple);
    assert_eq!(next.players[0].score.total, 15.0);
    assert_eq!(next.players[1].score.total, 0.0);
    assert_eq!(next.players[0].score.marks, [0; 7]);
}

#[test]
fn miss_scores_like_a_25() {
    // A recorded miss adds points; kept as observed.
    let s = fresh(2);
    let next = apply_throw(&s, Target::Miss, Multiplier::Double);
    assert_eq!(next.players[0].score.total, 50.0);
    assert_eq!(next.players[1].score.total, 0.0);
}

#[test]
fn triple_closes_a_fresh_number_with_no_bonus() {
    let s = fresh(1);
    let next = apply_throw(&s, Target::Number(20), Multiplier::Triple);
    assert_eq!(next.players[0].score.marks_on(Target::Number(20)), 3);
    assert_eq!(next.players[0].score.total, 0.0);
}

#[test]
fn overflow_credits_opponents_who_are_still_open() {
    let mut s = fresh(3);
    s.players[0].score.set_marks(Target::Number(19), 2);
    s.players[2].score.set_marks(Target::Number(19), 3);

    // hits=2, factor=3 -> tentative=5, extra=2, marks clamp to 3.
    let next = apply_throw(&s, Target::Number(19), Multiplier::Triple);
    assert_eq!(next.players[0].score.marks_on(Target::Number(19)), 3);
    assert_eq!(next.players[0].score.total, 0.0);
    // open opponent: 19 * 2 * (3 - 0) = 114
    assert_eq!(next.players[1].score.total, 114.0);
    // closed opponent gets the zero delta
    assert_eq!(next.players[2].score.total, 0.0);
}

#[test]
fn overflow_halves_when_all_opponents_closed() {
    let mut s = fresh(2);
    s.players[0].score.set_marks(Target::Number(19), 2);
    s.players[1].score.set_marks(Target::Number(19), 3);

    // hits=2, factor=2 -> extra=1; all others closed -> 19 * 1 / 2 = 9.5
    let next = apply_throw(&s, Target::Number(19), Multiplier::Double);
    assert_eq!(next.players[0].score.marks_on(Target::Number(19)), 3);
    assert_eq!(next.players[0].score.total, 9.5);
    assert_eq!(next.players[1].score.total, 0.0);
}

#[test]
fn hit_on_closed_number_credits_open_opponents() {
    let mut s = fresh(2);
    s.players[0].score.set_marks(Target::Number(20), 3);
    s.players[1].score.set_marks(Target::Number(20), 1);

    // 20 * 2 * (3 - 1) = 80 to the open opponent, nothing to the thrower.
    let next = apply_throw(&s, Target::Number(20), Multiplier::Double);
    assert_eq!(next.players[0].score.total, 0.0);
    assert_eq!(next.players[1].score.total, 80.0);
    assert_eq!(next.players[0].score.marks_on(Target::Number(20)), 3);
}

#[test]
fn hit_on_closed_number_scores_thrower_when_all_closed() {
    let mut s = fresh(2);
    s.players[0].score.set_marks(Target::Bull, 3);
    s.players[1].score.set_marks(Target::Bull, 3);

    let next = apply_throw(&s, Target::Bull, Multiplier::Double);
    assert_eq!(next.players[0].score.total, 50.0);
    assert_eq!(next.players[1].score.total, 0.0);
}

#[test]
fn bull_counts_marks_like_a_cricket_number() {
    let s = fresh(2);
    let next = apply_throw(&s, Target::Bull, Multiplier::Double);
    assert_eq!(next.players[0].score.marks_on(Target::Bull), 2);
    assert_eq!(next.players[0].score.total, 0.0);
}

#[test]
fn apply_throw_never_mutates_its_input() {
    let mut s = fresh(2);
    s.players[0].score.set_marks(Target::Number(19), 2);
    let before = s.clone();
    let _ = apply_throw(&s, Target::Number(19), Multiplier::Triple);
    assert_eq!(s, before);
}

#[test]
fn fractional_cursor_changes_no_scores() {
    let mut s = fresh(2);
    s.current_player_index = 0.5;
    let next = apply_throw(&s, Target::Number(20), Multiplier::Triple);
    assert_eq!(next, s);

    let next = apply_throw(&s, Target::Number(5), Multiplier::Single);
    assert_eq!(next, s);
}
