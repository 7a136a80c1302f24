pub mod config;
pub mod constants;
pub mod grab;
pub mod input;
pub mod movement;
pub mod outcome;
pub mod popup;
pub mod scene;
pub mod session;
pub mod stats;

pub static SCENE_WGSL: &str = include_str!("../shaders/scene.wgsl");

pub use config::*;
pub use grab::*;
pub use input::*;
pub use movement::*;
pub use outcome::*;
pub use popup::*;
pub use scene::*;
pub use session::*;
pub use stats::*;
