/// Page element ids and rendering constants for the web frontend.
///
/// Gameplay tuning lives in `claw_core::constants`; this file only covers
/// what the browser side needs to find elements and light the scene.
// Page elements
pub const CANVAS_ID: &str = "app-canvas";
pub const POPUP_ID: &str = "popup";
pub const POPUP_ICON_ID: &str = "popup-icon";
pub const POPUP_TEXT_ID: &str = "popup-text";
pub const INSTRUCTIONS_ID: &str = "instructions";
pub const HUD_ID: &str = "hud";
pub const COMPLETE_OVERLAY_ID: &str = "complete-overlay";
pub const COMPLETE_SUMMARY_ID: &str = "complete-summary";
pub const RESTART_BUTTON_ID: &str = "restart-button";

// Query parameter selecting the game variant
pub const VARIANT_PARAM: &str = "variant";

// Lighting
pub const LIGHT_DIR: [f32; 3] = [-0.4, -1.0, -0.6]; // direction the light travels
pub const AMBIENT: f32 = 0.35;

// Transparent so the page's arcade background shows through
pub const CLEAR_COLOR: wgpu::Color = wgpu::Color {
    r: 0.0,
    g: 0.0,
    b: 0.0,
    a: 0.0,
};

pub const DEPTH_FORMAT: wgpu::TextureFormat = wgpu::TextureFormat::Depth32Float;
