//! GTK widget layer: animation state wired to DrawingAreas

mod pulsing_text;
mod rotating_loader;

pub use pulsing_text::PulsingText;
pub use rotating_loader::RotatingLoader;
