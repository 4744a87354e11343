//! Pulsing text rendering and text-fit sizing
//!
//! Text is measured and drawn through Pango rather than Cairo's toy font
//! API, which leaks font caches. The fit procedure itself is generic over
//! a measure closure so it can be exercised without a Pango context.

use cairo::Context;
use pango::FontDescription;
use pangocairo::functions::{create_layout, show_layout};

use crate::core::{TEXT_FIT_ITERATIONS, TEXT_FIT_MAX_SIZE};
use crate::types::PulsingTextConfig;

/// Fixed desired size of the pulsing text widget
pub const TEXT_DESIRED_WIDTH: f64 = 64.0;
pub const TEXT_DESIRED_HEIGHT: f64 = 40.0;

/// Baseline sits at this fraction of the widget height
const BASELINE_FRACTION: f64 = 0.75;

/// Find the largest font size in [0, `TEXT_FIT_MAX_SIZE`] whose measured
/// width does not exceed `max_width`.
///
/// Ten halvings of the search range converge to ~0.1pt resolution. The
/// lower bound is returned, so the result never overshoots `max_width`
/// as long as `measure` is monotone in the size.
pub fn fit_text_size<F>(max_width: f64, measure: F) -> f64
where
    F: Fn(f64) -> f64,
{
    let mut low = 0.0_f64;
    let mut high = TEXT_FIT_MAX_SIZE;
    for _ in 0..TEXT_FIT_ITERATIONS {
        let mid = (low + high) / 2.0;
        if measure(mid) > max_width {
            high = mid;
        } else {
            low = mid;
        }
    }
    low
}

fn layout_for(cr: &Context, text: &str, family: &str, size: f64) -> pango::Layout {
    let mut desc = FontDescription::new();
    desc.set_family(family);
    desc.set_size((size * pango::SCALE as f64) as i32);

    let layout = create_layout(cr);
    layout.set_font_description(Some(&desc));
    layout.set_text(text);
    layout
}

/// Logical width of `text` at the given font size, in pixels.
pub fn measure_text_width(cr: &Context, text: &str, family: &str, size: f64) -> f64 {
    let layout = layout_for(cr, text, family, size);
    let (_, logical) = layout.extents();
    logical.width() as f64 / pango::SCALE as f64
}

/// Fit the configured label to the widget's fixed desired width.
pub fn fit_label_size(cr: &Context, config: &PulsingTextConfig) -> f64 {
    fit_text_size(TEXT_DESIRED_WIDTH, |size| {
        measure_text_width(cr, &config.label, &config.font_family, size)
    })
}

/// Draw the label at the current pulse opacity.
///
/// The baseline sits at 75% of the fixed desired height, with no
/// horizontal offset. `alpha` is the animated 100..=255 opacity.
pub fn render_pulsing_text(
    cr: &Context,
    config: &PulsingTextConfig,
    font_size: f64,
    alpha: i32,
) -> Result<(), cairo::Error> {
    cr.save()?;

    config
        .color
        .with_alpha(config.color.a * alpha as f64 / 255.0)
        .apply_to_cairo(cr);

    let layout = layout_for(cr, &config.label, &config.font_family, font_size);
    let baseline = layout.baseline() as f64 / pango::SCALE as f64;
    cr.move_to(0.0, TEXT_DESIRED_HEIGHT * BASELINE_FRACTION - baseline);
    show_layout(cr, &layout);

    cr.restore()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fit_converges_on_a_linear_measure() {
        // width = 2 * size, bound 64 -> exact answer 32
        let size = fit_text_size(64.0, |s| s * 2.0);
        assert!(size <= 32.0);
        assert!(size > 32.0 - TEXT_FIT_MAX_SIZE / 1024.0);
    }

    #[test]
    fn fitted_size_never_exceeds_the_bound() {
        let measure = |s: f64| s * 3.7 + 1.0;
        for bound in [1.5, 10.0, 64.0, 250.0] {
            let size = fit_text_size(bound, measure);
            assert!(measure(size) <= bound, "bound {bound}");
        }
    }

    #[test]
    fn next_resolution_step_overshoots() {
        let measure = |s: f64| s * 2.0;
        let bound = 64.0;
        let size = fit_text_size(bound, measure);
        let epsilon = TEXT_FIT_MAX_SIZE / 2f64.powi(TEXT_FIT_ITERATIONS as i32);
        assert!(measure(size + epsilon) > bound);
    }

    #[test]
    fn impossible_bound_collapses_to_zero() {
        // even size 0 is too wide: search pins to the low end of the range
        let size = fit_text_size(5.0, |_| 100.0);
        assert!(size < TEXT_FIT_MAX_SIZE / 2f64.powi(TEXT_FIT_ITERATIONS as i32));
    }

    #[test]
    fn huge_bound_saturates_near_the_range_top() {
        let size = fit_text_size(1e9, |s| s);
        assert!(size >= TEXT_FIT_MAX_SIZE - TEXT_FIT_MAX_SIZE / 1024.0);
    }
}
