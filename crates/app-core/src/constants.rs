use glam::Vec3;

// Shared scene/animation tuning constants used by both web and native frontends.

// Decorations
pub const DECORATION_BOUND: f32 = 30.0; // half-width of the cube decorations are scattered in
pub const DONUT_COUNT: usize = 500;
pub const SQUARE_COUNT: usize = 900;
pub const DODECAHEDRON_COUNT: usize = 100;

// Decoration geometry
pub const DONUT_RADIUS: f32 = 0.2;
pub const DONUT_TUBE: f32 = 0.1;
pub const DONUT_RADIAL_SEGMENTS: u32 = 32;
pub const DONUT_TUBULAR_SEGMENTS: u32 = 64;
pub const SQUARE_SIZE: f32 = 0.3;
pub const DODECAHEDRON_RADIUS: f32 = 0.5;

// Camera
pub const CAMERA_START: [f32; 3] = [1.0, 1.0, 30.0];
pub const CAMERA_FOV_DEGREES: f32 = 75.0;
pub const CAMERA_ZNEAR: f32 = 0.1;
pub const CAMERA_ZFAR: f32 = 100.0;
pub const ORBIT_RADIUS: f32 = 5.0; // distance the pointer-driven camera keeps from the target
pub const ORBIT_DAMPING_FACTOR: f32 = 0.05;

// Intro dolly
pub const INTRO_THRESHOLD_Z: f32 = 5.0; // intro settles once camera z is at or below this
pub const INTRO_STEP_Z: f32 = 0.4; // z travelled per display refresh

// Text
pub const TEXT_CONTENT: &str = "The symphonic sounds of nature \n awaken every cell in my body and, \n in that moment, without a doubt, \n I am truly alive.";
pub const TEXT_SIZE: f32 = 0.5;
pub const TEXT_DEPTH: f32 = 0.2;
pub const TEXT_CURVE_SEGMENTS: u32 = 8;
pub const TEXT_BEVEL_THICKNESS: f32 = 0.1;
pub const TEXT_BEVEL_SIZE: f32 = 0.03;
pub const TEXT_BEVEL_OFFSET: f32 = 0.0;
pub const TEXT_BEVEL_SEGMENTS: u32 = 5;

// Assets
pub const FONT_PATH: &str = "fonts/helvetiker_regular.typeface.json";

// Renderer
pub const CLEAR_COLOR_HEX: &str = "#212121";
pub const MAX_PIXEL_RATIO: f64 = 2.0;

// Randomness
pub const DEFAULT_SEED: u64 = 42;

#[inline]
pub fn camera_start_vec3() -> Vec3 {
    Vec3::from(CAMERA_START)
}
