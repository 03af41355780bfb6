// DOM hooks and rendering tuning for the web front-end.

// Element ids looked up at mount time
pub const BOOK_CONTAINER_ID: &str = "book-section";
pub const SPARKLES_CONTAINER_ID: &str = "sparkles-overlay";
pub const CURSOR_ELEMENT_ID: &str = "custom-cursor";

// Class toggled on the cursor element while it should not be drawn
pub const HIDDEN_CLASS: &str = "is-hidden";

// Delay before re-measuring after an orientation change (ms)
pub const ORIENTATION_SETTLE_MS: i32 = 100;

// Sprite diameter in framebuffer pixels for a unit-size particle at distance 1
pub const SPARKLE_POINT_SCALE: f32 = 300.0;

// Book lighting: ambient 0x222222 plus a white directional light from the camera side
pub const BOOK_AMBIENT: f32 = 0x22 as f32 / 255.0;
pub const BOOK_LIGHT_DIR: [f32; 3] = [0.0, 0.0, 1.0];

// Per-face colours in mesh face order: +X edge, -X spine, +Y top, -Y bottom, +Z front, -Z back
pub const BOOK_FACE_COLORS: [[f32; 3]; 6] = [
    [0.93, 0.90, 0.82],
    [0.36, 0.13, 0.16],
    [0.93, 0.90, 0.82],
    [0.93, 0.90, 0.82],
    [0.55, 0.18, 0.22],
    [0.45, 0.15, 0.19],
];

// Both canvases composite over the page
pub const CLEAR_COLOR: [f64; 4] = [0.0, 0.0, 0.0, 0.0];
