//! Configuration and color types

mod color;
mod config;

pub use color::Color;
pub use config::{LoaderConfig, PulsingTextConfig};
