//! Widget configuration types
//!
//! All values are logical pixels. Configuration is consumed as-is: out of
//! range values draw degenerate geometry but never crash.

use serde::{Deserialize, Serialize};

use crate::types::Color;

fn default_dot_side() -> f64 {
    6.0
}

fn default_circle_radius() -> f64 {
    2.5
}

fn default_margin() -> f64 {
    16.0
}

fn default_start_delay_ms() -> u64 {
    1000
}

fn default_duration_ms() -> u64 {
    300
}

fn default_scale_to() -> f64 {
    1.3
}

fn default_loader_color() -> Color {
    Color::from_argb_u32(0xFFE1E3E6)
}

/// Rotating loader configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LoaderConfig {
    /// Side of each of the four square dots
    #[serde(default = "default_dot_side")]
    pub dot_side: f64,

    /// Corner radius of every shape
    #[serde(default = "default_circle_radius")]
    pub circle_radius: f64,

    /// Gap between the rectangle block and the dot block
    #[serde(default = "default_margin")]
    pub margin: f64,

    /// Pause before each full cycle restarts (before phase 0)
    #[serde(default = "default_start_delay_ms")]
    pub start_delay_ms: u64,

    /// Duration of one animation step
    #[serde(default = "default_duration_ms")]
    pub duration_ms: u64,

    /// Peak scale of a growing dot
    #[serde(default = "default_scale_to")]
    pub scale_to: f64,

    /// Fill color of all shapes
    #[serde(default = "default_loader_color")]
    pub color: Color,
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self {
            dot_side: default_dot_side(),
            circle_radius: default_circle_radius(),
            margin: default_margin(),
            start_delay_ms: default_start_delay_ms(),
            duration_ms: default_duration_ms(),
            scale_to: default_scale_to(),
            color: default_loader_color(),
        }
    }
}

fn default_label() -> String {
    "Loading".to_string()
}

fn default_font_family() -> String {
    "Sans".to_string()
}

/// Pulsing text configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PulsingTextConfig {
    /// Label text, fixed for the lifetime of the widget
    #[serde(default = "default_label")]
    pub label: String,

    /// Text color; the pulse animates its alpha
    #[serde(default)]
    pub color: Color,

    #[serde(default = "default_font_family")]
    pub font_family: String,
}

impl Default for PulsingTextConfig {
    fn default() -> Self {
        Self {
            label: default_label(),
            color: Color::default(),
            font_family: default_font_family(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loader_defaults_match_contract() {
        let c = LoaderConfig::default();
        assert_eq!(c.dot_side, 6.0);
        assert_eq!(c.circle_radius, 2.5);
        assert_eq!(c.margin, 16.0);
        assert_eq!(c.start_delay_ms, 1000);
        assert_eq!(c.duration_ms, 300);
        assert_eq!(c.scale_to, 1.3);
        assert_eq!(c.color.to_rgba8(), (0xE1, 0xE3, 0xE6, 0xFF));
    }

    #[test]
    fn loader_config_fills_missing_fields() {
        let c: LoaderConfig = serde_json::from_str(r#"{"margin": 8.0}"#).unwrap();
        assert_eq!(c.margin, 8.0);
        assert_eq!(c.dot_side, 6.0);
        assert_eq!(c.duration_ms, 300);
    }

    #[test]
    fn text_defaults() {
        let c = PulsingTextConfig::default();
        assert_eq!(c.label, "Loading");
        assert_eq!(c.font_family, "Sans");
        assert_eq!(c.color, Color::default());
    }

    #[test]
    fn config_serde_round_trip() {
        let c = LoaderConfig {
            margin: 20.0,
            scale_to: 1.5,
            ..Default::default()
        };
        let json = serde_json::to_string(&c).unwrap();
        let back: LoaderConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, c);
    }
}
