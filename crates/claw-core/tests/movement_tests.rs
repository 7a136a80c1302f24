// Host-side tests for lateral movement and vertical smoothing.

use claw_core::{smooth_toward, step_lateral, HeldActions, MovementConfig};
use glam::Vec3;

fn held(forward: bool, backward: bool, left: bool, right: bool) -> HeldActions {
    HeldActions {
        forward,
        backward,
        left,
        right,
    }
}

#[test]
fn no_held_action_leaves_position_unchanged() {
    let cfg = MovementConfig::default();
    let pos = Vec3::new(0.3, -0.2, -0.1);
    assert_eq!(step_lateral(pos, HeldActions::default(), &cfg), pos);
}

#[test]
fn single_step_moves_by_step_on_the_right_axis() {
    let cfg = MovementConfig::default();
    let p = step_lateral(Vec3::ZERO, held(true, false, false, false), &cfg);
    assert!((p.z + cfg.step).abs() < 1e-6);
    assert_eq!(p.x, 0.0);

    let p = step_lateral(Vec3::ZERO, held(false, false, false, true), &cfg);
    assert!((p.x - cfg.step).abs() < 1e-6);
    assert_eq!(p.z, 0.0);
}

#[test]
fn opposite_directions_cancel_within_a_tick() {
    let cfg = MovementConfig::default();
    let p = step_lateral(Vec3::ZERO, held(true, true, true, true), &cfg);
    assert!(p.x.abs() < 1e-6);
    assert!(p.z.abs() < 1e-6);
}

#[test]
fn movement_never_touches_y() {
    let cfg = MovementConfig::default();
    let p = step_lateral(Vec3::new(0.0, -0.75, 0.0), held(true, false, true, false), &cfg);
    assert_eq!(p.y, -0.75);
}

#[test]
fn clamp_is_absorbing_under_sustained_input() {
    let cfg = MovementConfig::default();
    let combos = [
        held(true, false, true, false),
        held(true, false, false, true),
        held(false, true, true, false),
        held(false, true, false, true),
    ];
    for h in combos {
        let mut p = Vec3::ZERO;
        for tick in 0..500 {
            p = step_lateral(p, h, &cfg);
            assert!(
                (-0.7..=0.7).contains(&p.x),
                "x={} out of range at tick {tick}",
                p.x
            );
            assert!(
                (-0.7..=0.4).contains(&p.z),
                "z={} out of range at tick {tick}",
                p.z
            );
        }
    }
}

#[test]
fn asymmetric_z_range_stops_at_the_front() {
    let cfg = MovementConfig::default();
    let mut p = Vec3::ZERO;
    for _ in 0..100 {
        p = step_lateral(p, held(false, true, false, false), &cfg);
    }
    assert_eq!(p.z, 0.4);
    for _ in 0..100 {
        p = step_lateral(p, held(true, false, false, false), &cfg);
    }
    assert_eq!(p.z, -0.7);
}

#[test]
fn smoothing_is_monotone_and_snaps_exactly() {
    let mut y = 0.0_f32;
    let mut frames = 0;
    while y != -1.0 {
        let next = smooth_toward(y, -1.0, 0.06, 0.01);
        assert!(next < y, "not monotone at frame {frames}: {y} -> {next}");
        assert!(next >= -1.0, "overshot at frame {frames}: {next}");
        y = next;
        frames += 1;
        assert!(frames < 1000, "smoothing did not converge");
    }
    assert_eq!(y, -1.0);
    // 0.94^n drops below 0.01 after 75 frames, then one snap frame
    assert_eq!(frames, 76);
}

#[test]
fn smoothing_upward_mirrors_downward() {
    let mut y = -1.0_f32;
    for _ in 0..200 {
        let next = smooth_toward(y, 0.0, 0.06, 0.01);
        assert!(next >= y && next <= 0.0);
        y = next;
    }
    assert_eq!(y, 0.0);
}

#[test]
fn smoothing_at_target_is_stable() {
    assert_eq!(smooth_toward(-1.0, -1.0, 0.06, 0.01), -1.0);
    assert_eq!(smooth_toward(-0.995, -1.0, 0.06, 0.01), -1.0);
}
