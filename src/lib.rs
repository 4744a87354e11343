//! game-loader: animated loading-indicator widgets for GTK4
//!
//! This library provides two self-contained Cairo-drawn widgets:
//! - `RotatingLoader`: four pulsing dots and a rotating cross, cycling
//!   through a six-phase animation
//! - `PulsingText`: a label that pulses its opacity and fits its font
//!   size to a fixed width

pub mod core;
pub mod types;
pub mod ui;
pub mod widgets;

// Re-export commonly used types
pub use types::{Color, LoaderConfig, PulsingTextConfig};
pub use widgets::{PulsingText, RotatingLoader};
