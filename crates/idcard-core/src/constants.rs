// Shared physics/visual tuning constants used by both web and native frontends.

// Card spring (per axis)
pub const CARD_SPRING_DAMPING: f32 = 12.0;
pub const CARD_SPRING_STIFFNESS: f32 = 150.0;
pub const CARD_SPRING_MASS: f32 = 1.2;

// Below this displacement and speed a spring snaps to its target
pub const SPRING_REST_EPSILON: f32 = 0.01;

// Largest step fed to the integrator; longer gaps are split into sub-steps
pub const MAX_TICK_STEP_SEC: f32 = 1.0 / 30.0;

// Drag bounds around the rest position (px)
pub const DRAG_BOUND_TOP: f32 = -120.0;
pub const DRAG_BOUND_LEFT: f32 = -160.0;
pub const DRAG_BOUND_RIGHT: f32 = 160.0;
pub const DRAG_BOUND_BOTTOM: f32 = 120.0;
pub const DRAG_ELASTIC: f32 = 0.2; // fraction of each bound allowed as overshoot

// Derived visual state
pub const ROTATION_PER_PX: f32 = 0.05; // degrees of extra spin per px of distance
pub const SCALE_PER_PX: f32 = 0.0008; // shrink per px of distance
pub const IDLE_SCALE: f32 = 1.0;
pub const DRAG_SCALE: f32 = 1.05;
pub const MIN_SCALE: f32 = 0.5;

// Tether (elastic ribbon)
pub const TETHER_TENSION: f32 = 0.3;
pub const TETHER_REST_OFFSET: [f32; 2] = [0.0, 100.0]; // card rest point relative to anchor
pub const TETHER_STRETCH_DISTANCE: f32 = 40.0;
pub const TETHER_WIDTH_RELAXED: f32 = 4.0;
pub const TETHER_WIDTH_STRETCHED: f32 = 3.0;
pub const TETHER_COLOR: &str = "#FF9800";
pub const TETHER_ANCHOR_TOP: f32 = 20.0; // anchor y in viewport px
pub const TETHER_ANCHOR_X_FRACTION: f32 = 0.5; // anchor x as a share of viewport width

// Tilt ("distort mesh") around the card
pub const TILT_SPRING_DAMPING: f32 = 15.0;
pub const TILT_SPRING_STIFFNESS: f32 = 150.0;
pub const TILT_SPRING_MASS: f32 = 0.1;
pub const TILT_INPUT_RANGE: f32 = 100.0; // px of pointer offset mapped to full tilt
pub const TILT_MAX_DEG: f32 = 2.0;
pub const TILT_ACTIVE_SCALE: f32 = 1.02;

// Torus knot decoration
pub const KNOT_RADIUS: f32 = 10.0;
pub const KNOT_TUBE: f32 = 3.0;
pub const KNOT_TUBULAR_SEGMENTS: u32 = 100;
pub const KNOT_RADIAL_SEGMENTS: u32 = 16;
pub const KNOT_P: u32 = 2;
pub const KNOT_Q: u32 = 3;

pub const KNOT_COLOR: [f32; 3] = [1.0, 0.42, 0.42]; // 0xff6b6b
pub const KNOT_SPECULAR: [f32; 3] = [0.0, 0.25, 0.5]; // 0x004080
pub const KNOT_SHININESS: f32 = 60.0;
pub const AMBIENT_INTENSITY: f32 = 0.5;
pub const POINT_LIGHT_INTENSITY: f32 = 1.0;
pub const POINT_LIGHT_POSITION: [f32; 3] = [5.0, 5.0, 5.0];

// Knot camera
pub const KNOT_CAMERA_DISTANCE: f32 = 30.0;
pub const KNOT_CAMERA_FOV_DEG: f32 = 75.0;
pub const KNOT_CAMERA_ZNEAR: f32 = 0.1;
pub const KNOT_CAMERA_ZFAR: f32 = 1000.0;
pub const AUTO_ROTATE_SPEED: f32 = 2.0; // 2.0 => one orbit every 30 s
