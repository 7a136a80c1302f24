//! Scene description shared with the renderer: a flat list of box nodes under
//! one model transform, a typed handle to the three moving parts of the claw,
//! and the camera.
//!
//! Nothing here touches a graphics API. The web frontend turns
//! [`Scene::instances`] into GPU instance data each frame.

use glam::{Mat4, Vec3};
use thiserror::Error;

/// Height of the rail the claw hangs from, in model space.
pub const RAIL_HEIGHT: f32 = 2.85;
/// Model placement inside the world.
pub const MODEL_OFFSET: Vec3 = Vec3::new(0.0, -1.5, 0.0);
pub const MODEL_SCALE: f32 = 0.6;

pub const CLAW_NODE: &str = "claw";
pub const CLAW_BASE_NODE: &str = "clawBase";
pub const TRACK_NODE: &str = "track";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SceneError {
    #[error("scene has no node named `{0}`")]
    MissingNode(&'static str),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

/// An axis-aligned box. `pivot` shifts the box relative to `translation` so a
/// part can hang below the point it is positioned by.
#[derive(Clone, Debug)]
pub struct SceneNode {
    pub name: &'static str,
    pub translation: Vec3,
    pub pivot: Vec3,
    pub size: Vec3,
    pub color: [f32; 3],
}

impl SceneNode {
    fn new(name: &'static str, translation: Vec3, size: Vec3, color: [f32; 3]) -> Self {
        Self {
            name,
            translation,
            pivot: Vec3::ZERO,
            size,
            color,
        }
    }

    fn with_pivot(mut self, pivot: Vec3) -> Self {
        self.pivot = pivot;
        self
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Instance {
    pub model: Mat4,
    pub color: [f32; 4],
}

#[derive(Clone, Debug)]
pub struct Scene {
    pub model_transform: Mat4,
    nodes: Vec<SceneNode>,
}

impl Scene {
    pub fn new(model_transform: Mat4) -> Self {
        Self {
            model_transform,
            nodes: Vec::new(),
        }
    }

    pub fn push(&mut self, node: SceneNode) -> NodeId {
        self.nodes.push(node);
        NodeId(self.nodes.len() - 1)
    }

    pub fn find(&self, name: &str) -> Option<NodeId> {
        self.nodes.iter().position(|n| n.name == name).map(NodeId)
    }

    pub fn node(&self, id: NodeId) -> &SceneNode {
        &self.nodes[id.0]
    }

    pub fn set_translation(&mut self, id: NodeId, translation: Vec3) {
        self.nodes[id.0].translation = translation;
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// World transform and color of every node.
    pub fn instances(&self) -> impl Iterator<Item = Instance> + '_ {
        self.nodes.iter().map(move |n| Instance {
            model: self.model_transform
                * Mat4::from_translation(n.translation + n.pivot)
                * Mat4::from_scale(n.size),
            color: [n.color[0], n.color[1], n.color[2], 1.0],
        })
    }

    /// The claw machine cabinet: floor, posts, roof, prize pile, chute and
    /// the three moving parts.
    pub fn cabinet() -> Self {
        let mut scene = Scene::new(
            Mat4::from_translation(MODEL_OFFSET) * Mat4::from_scale(Vec3::splat(MODEL_SCALE)),
        );
        let frame = [0.85, 0.2, 0.35];
        let metal = [0.75, 0.78, 0.82];

        scene.push(SceneNode::new(
            "floor",
            Vec3::new(0.0, 0.05, 0.0),
            Vec3::new(2.0, 0.1, 1.8),
            [0.18, 0.16, 0.22],
        ));
        for (x, z) in [(-1.0, -0.9), (1.0, -0.9), (-1.0, 0.9), (1.0, 0.9)] {
            scene.push(SceneNode::new(
                "post",
                Vec3::new(x, 1.6, z),
                Vec3::new(0.06, 3.2, 0.06),
                frame,
            ));
        }
        scene.push(SceneNode::new(
            "roof",
            Vec3::new(0.0, 3.2, 0.0),
            Vec3::new(2.06, 0.08, 1.86),
            frame,
        ));
        scene.push(SceneNode::new(
            "chute",
            Vec3::new(0.75, 0.35, 0.65),
            Vec3::new(0.4, 0.5, 0.4),
            [0.3, 0.3, 0.36],
        ));
        let pile = [
            (Vec3::new(-0.5, 0.22, -0.3), [0.76, 0.52, 0.3]),
            (Vec3::new(-0.1, 0.22, -0.5), [0.95, 0.45, 0.7]),
            (Vec3::new(0.3, 0.22, -0.2), [0.98, 0.85, 0.25]),
            (Vec3::new(-0.3, 0.22, 0.1), [0.45, 0.8, 0.95]),
            (Vec3::new(0.1, 0.42, -0.35), [0.6, 0.9, 0.5]),
        ];
        for (pos, color) in pile {
            scene.push(SceneNode::new("prize", pos, Vec3::splat(0.24), color));
        }

        scene.push(SceneNode::new(
            TRACK_NODE,
            Vec3::new(0.0, RAIL_HEIGHT, 0.0),
            Vec3::new(1.9, 0.06, 0.08),
            metal,
        ));
        scene.push(SceneNode::new(
            CLAW_BASE_NODE,
            Vec3::new(0.0, RAIL_HEIGHT, 0.0),
            Vec3::new(0.22, 0.12, 0.22),
            [0.3, 0.32, 0.38],
        ));
        scene.push(
            SceneNode::new(
                CLAW_NODE,
                Vec3::new(0.0, RAIL_HEIGHT, 0.0),
                Vec3::new(0.16, 0.3, 0.16),
                metal,
            )
            .with_pivot(Vec3::new(0.0, -0.25, 0.0)),
        );
        scene
    }
}

/// Typed handle to the parts that follow the claw position. Resolved once
/// when the scene is built.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ClawRig {
    pub claw: NodeId,
    pub claw_base: NodeId,
    pub track: NodeId,
}

impl ClawRig {
    pub fn resolve(scene: &Scene) -> Result<Self, SceneError> {
        let lookup = |name: &'static str| scene.find(name).ok_or(SceneError::MissingNode(name));
        Ok(Self {
            claw: lookup(CLAW_NODE)?,
            claw_base: lookup(CLAW_BASE_NODE)?,
            track: lookup(TRACK_NODE)?,
        })
    }

    /// Place the moving parts for claw position `pos`. The base rides the
    /// rail, the rail slides along z, and only the claw follows y.
    pub fn pose(&self, scene: &mut Scene, pos: Vec3) {
        scene.set_translation(self.claw, Vec3::new(pos.x, pos.y + RAIL_HEIGHT, pos.z));
        scene.set_translation(self.claw_base, Vec3::new(pos.x, RAIL_HEIGHT, pos.z));
        scene.set_translation(self.track, Vec3::new(0.0, RAIL_HEIGHT, pos.z));
    }
}

/// Simple right-handed camera description with perspective projection.
#[derive(Clone, Debug)]
pub struct Camera {
    pub eye: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    pub aspect: f32,
    pub fovy_radians: f32,
    pub znear: f32,
    pub zfar: f32,
}

impl Camera {
    /// Framing used by the game: slightly above and in front of the cabinet.
    pub fn looking_at_cabinet(aspect: f32) -> Self {
        Self {
            eye: Vec3::new(0.0, 0.9, 4.2),
            target: Vec3::new(0.0, -0.4, 0.0),
            up: Vec3::Y,
            aspect,
            fovy_radians: std::f32::consts::FRAC_PI_4,
            znear: 0.1,
            zfar: 100.0,
        }
    }

    /// Compute the clip-space projection matrix.
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fovy_radians, self.aspect, self.znear, self.zfar)
    }
    /// Compute the view matrix that transforms world to view space.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, self.up)
    }

    pub fn view_proj(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }
}
