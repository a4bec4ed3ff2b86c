use crate::state::{cricket_slot, GameState, Player, PlayerScore, CRICKET_TARGETS};
use crate::target::Target;

fn names(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| s.to_string()).collect()
}

#[test]
fn blank_names_fall_back_to_seat_labels() {
    let s = GameState::new(&names(&["", "  ", "Maya"]), 20);
    assert_eq!(s.players[0].name, "Player 1");
    assert_eq!(s.players[1].name, "Player 2");
    assert_eq!(s.players[2].name, "Maya");
}

#[test]
fn fresh_state_counters() {
    let s = GameState::new(&names(&["a", "b"]), 15);
    assert_eq!(s.current_player_index, 0.0);
    assert_eq!(s.throws_this_turn, 0);
    assert_eq!(s.total_turns, 0);
    assert_eq!(s.round, 1);
    assert_eq!(s.max_rounds, 15);
}

#[test]
fn zero_max_rounds_falls_back_to_default() {
    let s = GameState::new(&names(&["a"]), 0);
    assert_eq!(s.max_rounds, 20);
}

#[test]
fn current_seat_requires_integral_in_range_cursor() {
    let mut s = GameState::new(&names(&["a", "b"]), 20);
    assert_eq!(s.current_seat(), Some(0));
    assert_eq!(s.current_player().unwrap().name, "a");

    s.current_player_index = 1.0;
    assert_eq!(s.current_seat(), Some(1));

    // Half-step cursor addresses no seat.
    s.current_player_index = 0.5;
    assert_eq!(s.current_seat(), None);
    assert!(s.current_player().is_none());

    s.current_player_index = 2.0;
    assert_eq!(s.current_seat(), None);
}

#[test]
fn cricket_slots_cover_exactly_the_cricket_set() {
    for t in CRICKET_TARGETS {
        assert!(t.is_cricket());
        assert!(cricket_slot(t).is_some());
    }
    assert_eq!(cricket_slot(Target::Number(14)), None);
    assert_eq!(cricket_slot(Target::Miss), None);
}

#[test]
fn marks_helpers_ignore_open_targets() {
    let mut score = PlayerScore::new();
    score.set_marks(Target::Number(5), 2);
    assert_eq!(score.marks_on(Target::Number(5)), 0);

    score.set_marks(Target::Bull, 2);
    assert_eq!(score.marks_on(Target::Bull), 2);
    assert!(!score.is_closed(Target::Bull));
    score.set_marks(Target::Bull, 3);
    assert!(score.is_closed(Target::Bull));
}

#[test]
fn player_names_are_trimmed() {
    let p = Player::new("  Maya  ", 1);
    assert_eq!(p.name, "Maya");
}
