//! Application-level configuration constants.

// Game
pub const DEFAULT_MAX_TIME_SECS: u32 = 90;
pub const TIME_CHOICES_SECS: [u32; 5] = [60, 75, 90, 105, 120];
pub const LOW_TIME_THRESHOLD_SECS: u32 = 10;
pub const TICK_INTERVAL_MS: u32 = 1_000;

// Tones
pub const PRESS_FREQUENCY_HZ: f32 = 440.0;
pub const PRESS_FADE_SECS: f64 = 1.0;
pub const WARNING_FREQUENCY_HZ: f32 = 1_000.0;
pub const WARNING_DURATION_SECS: f64 = 0.15;
pub const EXPIRY_FREQUENCY_HZ: f32 = 500.0;
pub const EXPIRY_DURATION_SECS: f64 = 1.0;
pub const TONE_GAIN: f32 = 0.5;
pub const FADE_FLOOR_GAIN: f32 = 0.000_01;

// Logging
pub const LOG_LEVEL: log::Level = log::Level::Info;
