//! Game configuration: one core parameterized by movement bounds, grab
//! timing, the outcome table and the optional win rule.

use crate::constants::*;
use crate::outcome::{OutcomeTable, MYSTERY_BOX};
use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum ConfigError {
    #[error("outcome table has no entries")]
    EmptyOutcomeTable,
    #[error("outcome bound at index {index} is not increasing within (0, 1]")]
    OutcomeBoundsNotIncreasing { index: usize },
    #[error("outcome table ends at {last}, expected 1.0")]
    OutcomeTableIncomplete { last: f64 },
    #[error("{axis} range [{min}, {max}] is empty")]
    EmptyRange { axis: char, min: f32, max: f32 },
    #[error("movement step must be positive and finite, got {0}")]
    InvalidStep(f32),
    #[error("smoothing damping must be in (0, 1], got {0}")]
    InvalidDamping(f32),
    #[error("smoothing epsilon must be positive, got {0}")]
    InvalidEpsilon(f32),
    #[error("{0} duration must be non-zero")]
    ZeroDuration(&'static str),
    #[error("win threshold must be at least 1")]
    ZeroThreshold,
}

/// Which preset a session was built from; shown in logs and the page title.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Variant {
    PrizeCatalog,
    Challenge,
}

impl Variant {
    /// Parse a `?variant=` query value. Unknown values fall back to the
    /// prize catalog.
    pub fn from_query(value: Option<&str>) -> Self {
        match value.map(str::trim) {
            Some(v) if v.eq_ignore_ascii_case("challenge") => Variant::Challenge,
            _ => Variant::PrizeCatalog,
        }
    }

    pub fn config(self) -> GameConfig {
        match self {
            Variant::PrizeCatalog => GameConfig::prize_catalog(),
            Variant::Challenge => GameConfig::challenge(),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MovementConfig {
    pub step: f32,
    pub x_range: (f32, f32),
    pub z_range: (f32, f32),
}

impl Default for MovementConfig {
    fn default() -> Self {
        Self {
            step: MOVE_STEP,
            x_range: (X_MIN, X_MAX),
            z_range: (Z_MIN, Z_MAX),
        }
    }
}

/// How the claw's y follows its target.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum VerticalMotion {
    /// Jump straight to the target.
    Immediate,
    /// Close `damping` of the remaining gap each frame, snapping once within
    /// `epsilon`.
    Smoothed { damping: f32, epsilon: f32 },
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GrabTiming {
    pub base_y: f32,
    pub depth_y: f32,
    pub descend: Duration,
    pub ascend: Duration,
    pub motion: VerticalMotion,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WinRule {
    pub threshold: u32,
}

#[derive(Clone, Debug, PartialEq)]
pub struct GameConfig {
    pub variant: Variant,
    pub movement: MovementConfig,
    pub grab: GrabTiming,
    pub outcomes: OutcomeTable,
    pub popup_duration: Duration,
    pub win: Option<WinRule>,
    pub lateral_during_grab: bool,
    pub reset_position_on_restart: bool,
}

impl GameConfig {
    /// Three prizes, smoothed descent, no win condition.
    pub fn prize_catalog() -> Self {
        Self {
            variant: Variant::PrizeCatalog,
            movement: MovementConfig::default(),
            grab: GrabTiming {
                base_y: BASE_Y,
                depth_y: GRAB_DEPTH_Y,
                descend: Duration::from_millis(CATALOG_DESCEND_MS),
                ascend: Duration::from_millis(CATALOG_ASCEND_MS),
                motion: VerticalMotion::Smoothed {
                    damping: SMOOTHING_DAMPING,
                    epsilon: SMOOTHING_EPSILON,
                },
            },
            outcomes: OutcomeTable::prize_catalog(),
            popup_duration: Duration::from_millis(POPUP_MS),
            win: None,
            lateral_during_grab: true,
            reset_position_on_restart: false,
        }
    }

    /// Coin-flip grabs, three wins completes the session.
    pub fn challenge() -> Self {
        Self {
            variant: Variant::Challenge,
            movement: MovementConfig::default(),
            grab: GrabTiming {
                base_y: BASE_Y,
                depth_y: GRAB_DEPTH_Y,
                descend: Duration::from_millis(CHALLENGE_DESCEND_MS),
                ascend: Duration::from_millis(CHALLENGE_ASCEND_MS),
                motion: VerticalMotion::Immediate,
            },
            outcomes: OutcomeTable::coin_flip(MYSTERY_BOX),
            popup_duration: Duration::from_millis(POPUP_MS),
            win: Some(WinRule {
                threshold: WIN_THRESHOLD,
            }),
            lateral_during_grab: false,
            reset_position_on_restart: false,
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let m = &self.movement;
        if !(m.step.is_finite() && m.step > 0.0) {
            return Err(ConfigError::InvalidStep(m.step));
        }
        for (axis, (min, max)) in [('x', m.x_range), ('z', m.z_range)] {
            if min.is_nan() || max.is_nan() || min > max {
                return Err(ConfigError::EmptyRange { axis, min, max });
            }
        }
        if let VerticalMotion::Smoothed { damping, epsilon } = self.grab.motion {
            if damping.is_nan() || damping <= 0.0 || damping > 1.0 {
                return Err(ConfigError::InvalidDamping(damping));
            }
            if epsilon.is_nan() || epsilon <= 0.0 {
                return Err(ConfigError::InvalidEpsilon(epsilon));
            }
        }
        if self.grab.descend.is_zero() {
            return Err(ConfigError::ZeroDuration("descend"));
        }
        if self.grab.ascend.is_zero() {
            return Err(ConfigError::ZeroDuration("ascend"));
        }
        if self.popup_duration.is_zero() {
            return Err(ConfigError::ZeroDuration("popup"));
        }
        if let Some(WinRule { threshold: 0 }) = self.win {
            return Err(ConfigError::ZeroThreshold);
        }
        Ok(())
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::prize_catalog()
    }
}
