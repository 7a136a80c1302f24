// Host-side tests for tuning constants and their relationships.

use claw_core::constants::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn ranges_contain_the_origin() {
    assert!(X_MIN < 0.0 && X_MAX > 0.0);
    assert!(Z_MIN < 0.0 && Z_MAX > 0.0);
    assert!(MOVE_STEP > 0.0 && MOVE_STEP < (X_MAX - X_MIN));
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn smoothing_parameters_converge() {
    assert!(SMOOTHING_DAMPING > 0.0 && SMOOTHING_DAMPING <= 1.0);
    assert!(SMOOTHING_EPSILON > 0.0);
    assert!(SMOOTHING_EPSILON < (BASE_Y - GRAB_DEPTH_Y).abs());
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn catalog_bounds_are_ordered() {
    assert!(0.0 < CATALOG_MISS_BOUND);
    assert!(CATALOG_MISS_BOUND < CATALOG_PRIZE_A_BOUND);
    assert!(CATALOG_PRIZE_A_BOUND < CATALOG_PRIZE_B_BOUND);
    assert!(CATALOG_PRIZE_B_BOUND < 1.0);
    assert!(COIN_FLIP_BOUND > 0.0 && COIN_FLIP_BOUND < 1.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn popup_clears_before_the_next_report() {
    // A popup must be gone before a following grab could report again.
    assert!(POPUP_MS <= CATALOG_DESCEND_MS + CATALOG_ASCEND_MS);
    assert!(POPUP_MS <= CHALLENGE_DESCEND_MS + CHALLENGE_ASCEND_MS);
    assert!(WIN_THRESHOLD >= 1);
}
