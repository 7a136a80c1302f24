// Host-side tests for win-condition bookkeeping.

use claw_core::SessionStats;

#[test]
fn three_wins_in_four_attempts_completes() {
    let mut stats = SessionStats::new(3);
    let sequence = [true, false, true, true];
    for (i, success) in sequence.iter().enumerate() {
        let completed = stats.record(*success);
        if i < 3 {
            assert!(!completed);
            assert!(!stats.is_complete(), "complete too early at {i}");
        } else {
            assert!(completed);
        }
    }
    assert_eq!(stats.attempts, 4);
    assert_eq!(stats.successes, 3);
    assert!(stats.is_complete());
}

#[test]
fn completion_is_reported_once() {
    let mut stats = SessionStats::new(1);
    assert!(stats.record(true));
    assert!(!stats.record(true));
    assert!(stats.is_complete());
}

#[test]
fn reset_keeps_threshold() {
    let mut stats = SessionStats::new(3);
    stats.record(true);
    stats.record(false);
    stats.reset();
    assert_eq!(stats, SessionStats::new(3));
}
