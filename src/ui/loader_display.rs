//! Rotating loader rendering
//!
//! Pure Cairo drawing for the six-shape loader: four rounded square dots
//! arranged top/right/bottom/left around a center, plus a horizontal and a
//! vertical rounded rectangle forming a cross next to them. The widget
//! layer owns the animation state and hands a `LoaderFrame` per draw.

use cairo::Context;

use crate::types::{Color, LoaderConfig};

/// Width of the cross rectangles (their long side)
pub const RECT_WIDTH: f64 = 22.0;

/// Padding between the drawing and the widget edge
pub const MINI_MARGIN: f64 = 2.0;

/// Gap between opposing dots
pub const BETWEEN_CIRCLES: f64 = 10.0;

/// Fixed layout derived once from a `LoaderConfig`.
///
/// Everything here is a pure function of the config; two loaders with the
/// same config always produce identical geometry.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LoaderGeometry {
    pub dot_side: f64,
    pub dot_radius: f64,
    pub circle_radius: f64,
    pub rect_width: f64,
    pub rect_height: f64,
    /// x distance from the origin to where the dot block starts
    pub till_circles: f64,
    pub mini_margin: f64,
    pub between_circles: f64,
    pub desired_width: f64,
    pub desired_height: f64,
}

impl LoaderGeometry {
    pub fn from_config(config: &LoaderConfig) -> Self {
        let dot_side = config.dot_side;
        let rect_height = dot_side;
        let till_circles = MINI_MARGIN + config.margin + RECT_WIDTH;
        Self {
            dot_side,
            dot_radius: dot_side / 2.0,
            circle_radius: config.circle_radius,
            rect_width: RECT_WIDTH,
            rect_height,
            till_circles,
            mini_margin: MINI_MARGIN,
            between_circles: BETWEEN_CIRCLES,
            desired_width: 2.0 * MINI_MARGIN
                + config.margin
                + RECT_WIDTH
                + dot_side * 2.0
                + BETWEEN_CIRCLES,
            desired_height: RECT_WIDTH + 2.0 * MINI_MARGIN,
        }
    }

    /// Top-left corner of each dot, in widget coordinates.
    fn dot_origin(&self, dot: DotPosition) -> (f64, f64) {
        let across = (self.between_circles + self.dot_side) / 2.0;
        let midway = self.mini_margin + (self.dot_side + self.between_circles) / 2.0;
        match dot {
            DotPosition::Top => (self.till_circles + across, self.mini_margin),
            DotPosition::Right => (
                self.till_circles + self.dot_side + self.between_circles,
                midway,
            ),
            DotPosition::Bottom => (
                self.till_circles + across,
                self.mini_margin + self.dot_side + self.between_circles,
            ),
            DotPosition::Left => (self.till_circles, midway),
        }
    }

    /// Inset of the cross rectangles along their short axis.
    fn big_margin(&self) -> f64 {
        self.mini_margin + (self.rect_width - self.rect_height) / 2.0
    }
}

/// The four dots, in draw order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DotPosition {
    Top,
    Right,
    Bottom,
    Left,
}

pub const DOT_DRAW_ORDER: [DotPosition; 4] = [
    DotPosition::Top,
    DotPosition::Right,
    DotPosition::Bottom,
    DotPosition::Left,
];

/// How a dot responds to the live scale value in the current phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScaleRole {
    None,
    /// Scaled by the live value
    Grow,
    /// Scaled by `scale_to + 1 - live`, the complementary shrink curve
    Shrink,
}

/// Per-phase role lookup. Dot `d` (Top=0 .. Left=3) grows during phase
/// `d + 1` and shrinks during phase `d + 2`; phases 0 and 5 grow nothing,
/// so the pulse hands off around the ring and then rests.
pub fn scale_role(phase: u8, dot: DotPosition) -> ScaleRole {
    let grow_phase = match dot {
        DotPosition::Top => 1,
        DotPosition::Right => 2,
        DotPosition::Bottom => 3,
        DotPosition::Left => 4,
    };
    if phase == grow_phase {
        ScaleRole::Grow
    } else if phase == grow_phase + 1 {
        ScaleRole::Shrink
    } else {
        ScaleRole::None
    }
}

/// Animated values for one rendered frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LoaderFrame {
    /// Current step of the cycle, 0..=5
    pub phase: u8,
    /// Rectangle rotation in degrees, 0..=180; only visible in phase 0
    pub rotation_deg: f64,
    /// Live dot scale, 1..=scale_to; only visible in phases 1..=4
    pub scale: f64,
    /// Peak scale, needed for the complementary shrink curve
    pub scale_to: f64,
}

/// Draw a rounded rectangle path
fn rounded_rectangle(cr: &Context, x: f64, y: f64, width: f64, height: f64, radius: f64) {
    let r = radius.min(width / 2.0).min(height / 2.0).max(0.0);

    cr.new_sub_path();
    cr.arc(x + width - r, y + r, r, -std::f64::consts::FRAC_PI_2, 0.0);
    cr.arc(x + width - r, y + height - r, r, 0.0, std::f64::consts::FRAC_PI_2);
    cr.arc(
        x + r,
        y + height - r,
        r,
        std::f64::consts::FRAC_PI_2,
        std::f64::consts::PI,
    );
    cr.arc(
        x + r,
        y + r,
        r,
        std::f64::consts::PI,
        3.0 * std::f64::consts::FRAC_PI_2,
    );
    cr.close_path();
}

/// Draw one dot with its phase-conditional scale applied about its center.
fn draw_dot(
    cr: &Context,
    geo: &LoaderGeometry,
    frame: &LoaderFrame,
    dot: DotPosition,
) -> Result<(), cairo::Error> {
    cr.save()?;

    let (x, y) = geo.dot_origin(dot);
    cr.translate(x, y);

    let factor = match scale_role(frame.phase, dot) {
        ScaleRole::Grow => Some(frame.scale),
        ScaleRole::Shrink => Some(frame.scale_to + 1.0 - frame.scale),
        ScaleRole::None => None,
    };
    if let Some(s) = factor {
        // Scale about the dot's own center
        cr.translate(geo.dot_radius, geo.dot_radius);
        cr.scale(s, s);
        cr.translate(-geo.dot_radius, -geo.dot_radius);
    }

    rounded_rectangle(cr, 0.0, 0.0, geo.dot_side, geo.dot_side, geo.circle_radius);
    cr.fill()?;

    cr.restore()
}

/// Draw one cross rectangle, rotated about its own center during phase 0.
fn draw_rect(
    cr: &Context,
    geo: &LoaderGeometry,
    frame: &LoaderFrame,
    horizontal: bool,
) -> Result<(), cairo::Error> {
    cr.save()?;

    let big = geo.big_margin();
    let (x, y, w, h) = if horizontal {
        (geo.mini_margin, big, geo.rect_width, geo.rect_height)
    } else {
        (big, geo.mini_margin, geo.rect_height, geo.rect_width)
    };

    if frame.phase == 0 {
        let (cx, cy) = (x + w / 2.0, y + h / 2.0);
        cr.translate(cx, cy);
        cr.rotate(frame.rotation_deg.to_radians());
        cr.translate(-cx, -cy);
    }

    rounded_rectangle(cr, x, y, w, h, geo.circle_radius);
    cr.fill()?;

    cr.restore()
}

/// Render one frame of the loader.
///
/// Draw order: top dot, right dot, bottom dot, left dot, horizontal rect,
/// vertical rect. Each shape saves and restores the context so transforms
/// never leak into the next shape.
pub fn render_loader(
    cr: &Context,
    geo: &LoaderGeometry,
    color: &Color,
    frame: &LoaderFrame,
) -> Result<(), cairo::Error> {
    color.apply_to_cairo(cr);

    for dot in DOT_DRAW_ORDER {
        draw_dot(cr, geo, frame, dot)?;
    }
    draw_rect(cr, geo, frame, true)?;
    draw_rect(cr, geo, frame, false)?;

    Ok(())
}
