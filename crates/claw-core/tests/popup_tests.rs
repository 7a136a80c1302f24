// Host-side tests for popup display deadlines.

use claw_core::{Outcome, Popup, PopupMessage, LOLLIPOP, TEDDY_BEAR};
use instant::Instant;
use std::time::Duration;

const SHOW_FOR: Duration = Duration::from_millis(2000);

#[test]
fn message_clears_after_its_duration() {
    let t0 = Instant::now();
    let mut popup = Popup::default();
    popup.show(PopupMessage::from_outcome(&Outcome::Miss), t0, SHOW_FOR);
    assert!(!popup.expire(t0 + Duration::from_millis(1999)));
    assert!(popup.message().is_some());
    assert!(popup.expire(t0 + SHOW_FOR));
    assert!(popup.message().is_none());
    assert!(!popup.expire(t0 + Duration::from_millis(5000)));
}

#[test]
fn newer_message_is_not_cleared_by_a_stale_deadline() {
    let t0 = Instant::now();
    let mut popup = Popup::default();
    popup.show(
        PopupMessage::from_outcome(&Outcome::Prize(TEDDY_BEAR)),
        t0,
        SHOW_FOR,
    );
    let t1 = t0 + Duration::from_millis(1500);
    popup.show(
        PopupMessage::from_outcome(&Outcome::Prize(LOLLIPOP)),
        t1,
        SHOW_FOR,
    );
    // The first message's deadline passes; the second must survive it.
    assert!(!popup.expire(t0 + SHOW_FOR));
    assert_eq!(popup.message().map(|m| m.text.as_str()), Some(LOLLIPOP.name));
    assert_eq!(popup.deadline(), Some(t1 + SHOW_FOR));
    assert!(popup.expire(t1 + SHOW_FOR));
}

#[test]
fn message_reflects_outcome() {
    let hit = PopupMessage::from_outcome(&Outcome::Prize(TEDDY_BEAR));
    assert!(hit.success);
    assert_eq!(hit.icon, TEDDY_BEAR.icon);
    let miss = PopupMessage::from_outcome(&Outcome::Miss);
    assert!(!miss.success);
}
