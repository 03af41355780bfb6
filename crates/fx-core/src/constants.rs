// Shared tuning constants for the book and sparkle effects.

// Camera
pub const CAMERA_FOV_DEG: f32 = 75.0;
pub const CAMERA_NEAR: f32 = 0.1;
pub const CAMERA_FAR: f32 = 1000.0;
pub const BOOK_CAMERA_Z: f32 = 6.0; // eye distance from the book at the origin
pub const SPARKLE_CAMERA_Z: f32 = 5.0;

// Book geometry (world units)
pub const BOOK_WIDTH: f32 = 3.5;
pub const BOOK_HEIGHT: f32 = 5.0;
pub const BOOK_DEPTH: f32 = 0.5;

// Rotation and hover tilt
pub const ROTATION_SPEED: f64 = 0.7; // radians per second (~full turn in ~9s)
pub const TILT_X_GAIN: f64 = 0.35; // up/down tilt, radians per NDC unit
pub const TILT_Y_GAIN: f64 = 0.5; // left/right tilt, radians per NDC unit
pub const TILT_SMOOTHING: f64 = 0.08; // per-tick pull toward the target angle

// Responsive scale breakpoints (CSS px of the book container)
pub const SMALL_MOBILE_MAX_WIDTH: f32 = 400.0;
pub const MOBILE_MAX_WIDTH: f32 = 550.0;
pub const SMALL_MOBILE_WIDTH_FRACTION: f32 = 0.75;
pub const MOBILE_HEIGHT_FRACTION: f32 = 0.55; // book height vs visible height
pub const DESKTOP_WIDTH_FRACTIONS: [(f32, f32); 5] = [
    (550.0, 0.18),
    (768.0, 0.22),
    (1000.0, 0.28),
    (1280.0, 0.35),
    (1600.0, 0.42),
];

// Sparkle trail
pub const SPARKLE_CAPACITY: usize = 50;
pub const SPARKLE_SPAWN_INTERVAL_MS: f64 = 20.0;
pub const SPARKLE_PLANE_Z: f32 = 0.0;
pub const SPAWN_ORDER_EPSILON: f32 = 0.001; // keeps same-tick particles ordered
pub const UNUSED_SPAWN_TIME: f32 = -1.0;
