// constants.rs - Fixed values for the counter, the celebration and the window
//
// None of these are user-configurable. The settings file only covers
// window geometry and logging.

// ============================================================================
// Counter
// ============================================================================

/// The cap. Once the count reaches this value the increment control is inert.
pub const MAX_COUNT: u8 = 10;

// ============================================================================
// Celebration burst
// ============================================================================

/// Number of confetti pieces launched when the cap is reached
pub const BURST_PARTICLE_COUNT: usize = 100;

/// Width of the launch cone in degrees
pub const BURST_SPREAD_DEGREES: f32 = 70.0;

/// Launch direction in degrees (90 = straight up)
pub const BURST_ANGLE_DEGREES: f32 = 90.0;

/// Burst origin as a fraction of the viewport (x, y)
pub const BURST_ORIGIN: (f32, f32) = (0.5, 0.6);

/// Initial speed in logical pixels per tick
pub const BURST_START_VELOCITY: f32 = 45.0;

/// Speed multiplier applied every tick
pub const BURST_DECAY: f32 = 0.9;

/// Downward pull per tick (scaled by 3 when particles are spawned)
pub const BURST_GRAVITY: f32 = 1.0;

/// Horizontal drift per tick
pub const BURST_DRIFT: f32 = 0.0;

/// How many ticks a piece of confetti lives
pub const BURST_LIFETIME_TICKS: u32 = 200;

/// Size multiplier for each piece
pub const BURST_SCALAR: f32 = 1.0;

/// Confetti palette (RGB)
pub const CONFETTI_COLORS: [[u8; 3]; 7] = [
    [0x26, 0xcc, 0xff],
    [0xa2, 0x5a, 0xfd],
    [0xff, 0x5e, 0x7e],
    [0x88, 0xff, 0x5a],
    [0xfc, 0xff, 0x42],
    [0xff, 0xa6, 0x2d],
    [0xff, 0x36, 0xff],
];

/// Interval between animation frames while confetti is on screen
pub const ANIMATION_TICK_MS: u64 = 16;

// ============================================================================
// Window
// ============================================================================

pub const DEFAULT_WIDTH: u32 = 960;
pub const DEFAULT_HEIGHT: u32 = 720;
pub const MIN_WIDTH: u32 = 420;
pub const MIN_HEIGHT: u32 = 480;

/// Application name shown in the header and used for the config directory
pub const APP_NAME: &str = "Achievement Counter";
pub const CONFIG_DIR_NAME: &str = "AchievementCounter";
