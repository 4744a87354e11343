//! Shared constants for the widgets

use std::time::Duration;

/// Animation frame interval for smooth 60fps animations (16ms)
pub const ANIMATION_FRAME_INTERVAL: Duration = Duration::from_millis(16);

/// Full rotation sweep of the loader rectangles per step, in degrees
pub const ROTATION_SWEEP_DEG: f64 = 180.0;

/// Opacity bounds of the text pulse (255 -> 100 -> 255)
pub const PULSE_ALPHA_MAX: i32 = 255;
pub const PULSE_ALPHA_MIN: i32 = 100;

/// One full opacity pulse takes this long
pub const PULSE_PERIOD: Duration = Duration::from_millis(1000);

/// Binary-search iterations for the text-fit procedure.
/// 10 halvings of the [0, 100] size range give ~0.1pt resolution.
pub const TEXT_FIT_ITERATIONS: u32 = 10;

/// Upper bound of the text-fit search range, in points
pub const TEXT_FIT_MAX_SIZE: f64 = 100.0;
