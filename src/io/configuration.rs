//! Default wall parameters, tuning constants and rendering settings

// Default wall and brick values in millimetres
/// Default wall width
pub const DEFAULT_WALL_WIDTH: f64 = 2300.0;
/// Default wall height
pub const DEFAULT_WALL_HEIGHT: f64 = 2000.0;
/// Default brick length
pub const DEFAULT_BRICK_LENGTH: f64 = 210.0;
/// Default brick width (depth into the wall)
pub const DEFAULT_BRICK_WIDTH: f64 = 100.0;
/// Default brick height
pub const DEFAULT_BRICK_HEIGHT: f64 = 50.0;
/// Default head joint thickness
pub const DEFAULT_HEAD_JOINT: f64 = 10.0;
/// Default bed joint thickness
pub const DEFAULT_BED_JOINT: f64 = 12.5;

/// Fixed seed for reproducible wild bond layouts
pub const DEFAULT_SEED: u64 = 42;

// Lengths closer than this are treated as equal
/// Comparison tolerance for positions and lengths in millimetres
pub const LENGTH_TOLERANCE: f64 = 1e-6;

// Wild bond constraints
/// Maximum run of full bricks in a wild bond course
pub const WILD_MAX_CONSECUTIVE_FULL: usize = 5;
/// Maximum run of half bricks in a wild bond course
pub const WILD_MAX_CONSECUTIVE_HALF: usize = 1;
/// Number of identical courses beneath a joint that counts as a repeating pattern
pub const WILD_PATTERN_LIMIT: usize = 4;
/// How many courses below a candidate the pattern guard inspects
pub const WILD_PATTERN_LOOKAHEAD: usize = 6;

// Scheduler tuning
/// Distance, in modules, at which a center window steps twice away from the right pyramid
pub const PYRAMID_PROXIMITY_MODULES: f64 = 1.5;

// Rendering
/// Pixels per millimetre
pub const DEFAULT_SCALE: f64 = 0.4;
/// Canvas background
pub const BACKGROUND_COLOR: [u8; 4] = [0xf0, 0xf0, 0xf0, 0xff];
/// Fill for bricks without a stride
pub const BRICK_COLOR: [u8; 4] = [0xf6, 0xf2, 0xf1, 0xff];
/// Brick outline
pub const MORTAR_COLOR: [u8; 4] = [0xcb, 0xbd, 0xbb, 0xff];
/// Fill for bricks built in the single unbounded stride
pub const BUILT_COLOR: [u8; 4] = [0x58, 0x41, 0x3d, 0xff];

// Output settings
/// Default path of the rendered plan
pub const DEFAULT_OUTPUT: &str = "wall_plan.png";
/// Bricks laid between two animation frames
pub const DEFAULT_FRAME_STEP: usize = 1;
/// Delay between GIF animation frames
pub const GIF_FRAME_DELAY_MS: u32 = 80;
/// Minimum frame delay that viewers reliably support (in milliseconds)
pub const VIEWER_MIN_FRAME_DELAY_MS: u32 = 50;
/// How many frame delays the finished wall stays on screen
pub const FINAL_FRAME_HOLD: u32 = 25;
