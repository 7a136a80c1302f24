//! Gameplay tuning constants.
//!
//! Both presets in [`crate::config`] are built from these values; keep magic
//! numbers here rather than in the state machines.

// Lateral movement (scene units per frame)
pub const MOVE_STEP: f32 = 0.05;
pub const X_MIN: f32 = -0.7;
pub const X_MAX: f32 = 0.7;
pub const Z_MIN: f32 = -0.7;
pub const Z_MAX: f32 = 0.4; // the prize chute sits at the front

// Vertical travel
pub const BASE_Y: f32 = 0.0;
pub const GRAB_DEPTH_Y: f32 = -1.0;
pub const SMOOTHING_DAMPING: f32 = 0.06; // fraction of remaining distance per frame
pub const SMOOTHING_EPSILON: f32 = 0.01; // snap to target below this distance

// Phase timing (milliseconds of wall clock)
pub const CATALOG_DESCEND_MS: u64 = 1500;
pub const CATALOG_ASCEND_MS: u64 = 1500;
pub const CHALLENGE_DESCEND_MS: u64 = 1000;
pub const CHALLENGE_ASCEND_MS: u64 = 1000;
pub const POPUP_MS: u64 = 2000;

// Outcome table bounds for the prize catalog: [0, 0.4) miss, then 20% each
pub const CATALOG_MISS_BOUND: f64 = 0.4;
pub const CATALOG_PRIZE_A_BOUND: f64 = 0.6;
pub const CATALOG_PRIZE_B_BOUND: f64 = 0.8;
pub const COIN_FLIP_BOUND: f64 = 0.5;

// Win condition
pub const WIN_THRESHOLD: u32 = 3;
