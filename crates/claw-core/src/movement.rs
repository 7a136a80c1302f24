use crate::config::MovementConfig;
use crate::input::HeldActions;
use glam::Vec3;

/// Apply one frame of lateral movement. Every held direction is applied
/// before clamping; y is left untouched.
pub fn step_lateral(pos: Vec3, held: HeldActions, cfg: &MovementConfig) -> Vec3 {
    if !held.any() {
        return pos;
    }
    let mut x = pos.x;
    let mut z = pos.z;
    if held.forward {
        z -= cfg.step;
    }
    if held.backward {
        z += cfg.step;
    }
    if held.left {
        x -= cfg.step;
    }
    if held.right {
        x += cfg.step;
    }
    Vec3::new(
        x.clamp(cfg.x_range.0, cfg.x_range.1),
        pos.y,
        z.clamp(cfg.z_range.0, cfg.z_range.1),
    )
}

/// One frame of exponential smoothing toward `target`, snapping exactly onto
/// it once the remaining gap is below `epsilon`.
#[inline]
pub fn smooth_toward(y: f32, target: f32, damping: f32, epsilon: f32) -> f32 {
    if (target - y).abs() < epsilon {
        target
    } else {
        y + (target - y) * damping
    }
}
