use super::*;

const FEN_A: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";
const FEN_B: &str = "rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b KQkq e3 0 1";

#[test]
fn test_flag_set_on_third_occurrence() {
    let mut tracker = RepetitionTracker::new();
    tracker.record(FEN_A);
    assert!(!tracker.threefold());
    tracker.record(FEN_A);
    assert!(!tracker.threefold());
    tracker.record(FEN_A);
    assert!(tracker.threefold());
}

#[test]
fn test_distinct_positions_do_not_accumulate() {
    let mut tracker = RepetitionTracker::new();
    tracker.record(FEN_A);
    tracker.record(FEN_B);
    tracker.record(FEN_A);
    tracker.record(FEN_B);
    assert!(!tracker.threefold());
}

#[test]
fn test_move_counters_do_not_distinguish() {
    // Same position, different halfmove/fullmove fields: same reduced key.
    let mut tracker = RepetitionTracker::new();
    tracker.record("8/8/8/8/8/4k3/8/4K3 w - - 0 1");
    tracker.record("8/8/8/8/8/4k3/8/4K3 w - - 12 40");
    tracker.record("8/8/8/8/8/4k3/8/4K3 w - - 30 57");
    assert!(tracker.threefold());
}

#[test]
fn test_side_to_move_distinguishes() {
    let mut tracker = RepetitionTracker::new();
    tracker.record("8/8/8/8/8/4k3/8/4K3 w - - 0 1");
    tracker.record("8/8/8/8/8/4k3/8/4K3 b - - 0 1");
    tracker.record("8/8/8/8/8/4k3/8/4K3 w - - 0 1");
    tracker.record("8/8/8/8/8/4k3/8/4K3 b - - 0 1");
    assert!(!tracker.threefold());
}

#[test]
fn test_flag_is_one_shot() {
    let mut tracker = RepetitionTracker::new();
    for _ in 0..5 {
        tracker.record(FEN_A);
    }
    assert!(tracker.threefold());
}
