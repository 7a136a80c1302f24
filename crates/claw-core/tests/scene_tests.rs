// Host-side tests for the claw rig and camera.

use claw_core::{
    Camera, ClawRig, Scene, SceneError, SceneNode, CLAW_BASE_NODE, CLAW_NODE, RAIL_HEIGHT,
    TRACK_NODE,
};
use glam::{Mat4, Vec3};

#[test]
fn cabinet_resolves_rig() {
    let scene = Scene::cabinet();
    let rig = ClawRig::resolve(&scene).unwrap();
    assert_eq!(scene.node(rig.claw).name, CLAW_NODE);
    assert_eq!(scene.node(rig.claw_base).name, CLAW_BASE_NODE);
    assert_eq!(scene.node(rig.track).name, TRACK_NODE);
}

#[test]
fn pose_places_each_part() {
    let mut scene = Scene::cabinet();
    let rig = ClawRig::resolve(&scene).unwrap();
    let pos = Vec3::new(0.4, -0.6, -0.3);
    rig.pose(&mut scene, pos);
    assert_eq!(
        scene.node(rig.claw).translation,
        Vec3::new(0.4, -0.6 + RAIL_HEIGHT, -0.3)
    );
    assert_eq!(
        scene.node(rig.claw_base).translation,
        Vec3::new(0.4, RAIL_HEIGHT, -0.3)
    );
    assert_eq!(
        scene.node(rig.track).translation,
        Vec3::new(0.0, RAIL_HEIGHT, -0.3)
    );
}

#[test]
fn missing_part_is_reported_at_build_time() {
    let mut scene = Scene::new(Mat4::IDENTITY);
    scene.push(SceneNode {
        name: CLAW_NODE,
        translation: Vec3::ZERO,
        pivot: Vec3::ZERO,
        size: Vec3::ONE,
        color: [1.0, 1.0, 1.0],
    });
    assert_eq!(
        ClawRig::resolve(&scene),
        Err(SceneError::MissingNode(CLAW_BASE_NODE))
    );
}

#[test]
fn instances_cover_every_node() {
    let scene = Scene::cabinet();
    let instances: Vec<_> = scene.instances().collect();
    assert_eq!(instances.len(), scene.len());
    assert!(!scene.is_empty());
    assert!(instances.iter().all(|i| i.model.is_finite()));
    assert!(instances.iter().all(|i| i.color[3] == 1.0));
}

#[test]
fn camera_sees_the_cabinet_center() {
    let cam = Camera::looking_at_cabinet(16.0 / 9.0);
    let clip = cam.view_proj() * cam.target.extend(1.0);
    let ndc = clip.truncate() / clip.w;
    assert!(ndc.x.abs() < 1e-4 && ndc.y.abs() < 1e-4);
    assert!(ndc.z > 0.0 && ndc.z < 1.0);
}
