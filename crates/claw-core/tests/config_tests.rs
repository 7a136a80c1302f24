// Host-side tests for configuration presets and validation.

use claw_core::{
    ConfigError, GameConfig, MovementConfig, Variant, VerticalMotion, WinRule,
};
use std::time::Duration;

#[test]
fn presets_are_valid() {
    assert_eq!(GameConfig::prize_catalog().validate(), Ok(()));
    assert_eq!(GameConfig::challenge().validate(), Ok(()));
    assert_eq!(GameConfig::default().variant, Variant::PrizeCatalog);
}

#[test]
fn presets_differ_where_the_variants_differ() {
    let catalog = GameConfig::prize_catalog();
    let challenge = GameConfig::challenge();
    assert_eq!(catalog.win, None);
    assert_eq!(challenge.win, Some(WinRule { threshold: 3 }));
    assert_eq!(catalog.outcomes.entries().len(), 4);
    assert_eq!(challenge.outcomes.entries().len(), 2);
    assert!(matches!(catalog.grab.motion, VerticalMotion::Smoothed { .. }));
    assert_eq!(challenge.grab.motion, VerticalMotion::Immediate);
    assert_eq!(catalog.grab.descend, Duration::from_millis(1500));
    assert_eq!(challenge.grab.descend, Duration::from_millis(1000));
    assert!(!catalog.reset_position_on_restart);
    assert!(!challenge.reset_position_on_restart);
}

#[test]
fn variant_from_query() {
    assert_eq!(Variant::from_query(Some("challenge")), Variant::Challenge);
    assert_eq!(Variant::from_query(Some(" Challenge ")), Variant::Challenge);
    assert_eq!(Variant::from_query(Some("prizes")), Variant::PrizeCatalog);
    assert_eq!(Variant::from_query(None), Variant::PrizeCatalog);
    assert_eq!(Variant::Challenge.config().variant, Variant::Challenge);
}

#[test]
fn validation_errors() {
    let base = GameConfig::prize_catalog();

    let mut c = base.clone();
    c.movement = MovementConfig {
        x_range: (0.5, -0.5),
        ..MovementConfig::default()
    };
    assert!(matches!(
        c.validate(),
        Err(ConfigError::EmptyRange { axis: 'x', .. })
    ));

    let mut c = base.clone();
    c.movement.step = 0.0;
    assert_eq!(c.validate(), Err(ConfigError::InvalidStep(0.0)));

    let mut c = base.clone();
    c.grab.motion = VerticalMotion::Smoothed {
        damping: 1.5,
        epsilon: 0.01,
    };
    assert_eq!(c.validate(), Err(ConfigError::InvalidDamping(1.5)));

    let mut c = base.clone();
    c.grab.motion = VerticalMotion::Smoothed {
        damping: 0.06,
        epsilon: 0.0,
    };
    assert_eq!(c.validate(), Err(ConfigError::InvalidEpsilon(0.0)));

    let mut c = base.clone();
    c.grab.ascend = Duration::ZERO;
    assert_eq!(c.validate(), Err(ConfigError::ZeroDuration("ascend")));

    let mut c = base.clone();
    c.popup_duration = Duration::ZERO;
    assert_eq!(c.validate(), Err(ConfigError::ZeroDuration("popup")));

    let mut c = base;
    c.win = Some(WinRule { threshold: 0 });
    assert_eq!(c.validate(), Err(ConfigError::ZeroThreshold));
}

#[test]
fn errors_render_readable_messages() {
    let msg = ConfigError::OutcomeTableIncomplete { last: 0.9 }.to_string();
    assert!(msg.contains("0.9"));
    assert_eq!(
        ConfigError::ZeroDuration("descend").to_string(),
        "descend duration must be non-zero"
    );
}
