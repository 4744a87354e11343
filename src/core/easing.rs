//! Easing curves for animation timelines
//!
//! The loader steps use a cubic bezier curve (the CSS "ease" family), the
//! text pulse is linear. Bezier evaluation solves the parametric x-curve
//! for t with Newton iteration, falling back to bisection when the slope
//! is too flat for Newton to converge.

/// Maps an input time fraction in [0, 1] to an output progress fraction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Easing {
    Linear,
    /// Cubic bezier with endpoints (0,0) and (1,1) and the given control points
    CubicBezier { x1: f64, y1: f64, x2: f64, y2: f64 },
}

/// The loader's per-step curve: cubic-bezier(0.25, 0.1, 0.25, 1.0)
pub const STEP_CURVE: Easing = Easing::CubicBezier {
    x1: 0.25,
    y1: 0.1,
    x2: 0.25,
    y2: 1.0,
};

const NEWTON_ITERATIONS: u32 = 8;
const NEWTON_MIN_SLOPE: f64 = 1e-6;
const BISECT_ITERATIONS: u32 = 32;
const BISECT_EPSILON: f64 = 1e-7;

impl Easing {
    /// Evaluate the curve at `t`, clamped to [0, 1].
    pub fn ease(&self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match *self {
            Easing::Linear => t,
            Easing::CubicBezier { x1, y1, x2, y2 } => {
                sample(solve_curve_x(t, x1, x2), y1, y2)
            }
        }
    }
}

/// One-dimensional cubic bezier with endpoints 0 and 1: B(t) given both
/// control values. Used for both the x and y component curves.
fn sample(t: f64, c1: f64, c2: f64) -> f64 {
    let omt = 1.0 - t;
    3.0 * omt * omt * t * c1 + 3.0 * omt * t * t * c2 + t * t * t
}

fn sample_derivative(t: f64, c1: f64, c2: f64) -> f64 {
    let omt = 1.0 - t;
    3.0 * omt * omt * c1 + 6.0 * omt * t * (c2 - c1) + 3.0 * t * t * (1.0 - c2)
}

/// Find the parameter t where the x-curve equals `x`.
fn solve_curve_x(x: f64, x1: f64, x2: f64) -> f64 {
    // Newton-Raphson first; x is a good initial guess for well-behaved curves
    let mut t = x;
    for _ in 0..NEWTON_ITERATIONS {
        let err = sample(t, x1, x2) - x;
        if err.abs() < BISECT_EPSILON {
            return t;
        }
        let slope = sample_derivative(t, x1, x2);
        if slope.abs() < NEWTON_MIN_SLOPE {
            break;
        }
        t -= err / slope;
    }
    if (0.0..=1.0).contains(&t) && (sample(t, x1, x2) - x).abs() < BISECT_EPSILON {
        return t;
    }

    // Bisection fallback; the x-curve is monotone for control x values in [0, 1]
    let (mut lo, mut hi) = (0.0_f64, 1.0_f64);
    t = x;
    for _ in 0..BISECT_ITERATIONS {
        let err = sample(t, x1, x2) - x;
        if err.abs() < BISECT_EPSILON {
            break;
        }
        if err > 0.0 {
            hi = t;
        } else {
            lo = t;
        }
        t = (lo + hi) / 2.0;
    }
    t
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn linear_is_identity() {
        let e = Easing::Linear;
        for i in 0..=10 {
            let t = i as f64 / 10.0;
            assert!((e.ease(t) - t).abs() < 1e-12);
        }
    }

    #[test]
    fn endpoints_are_exact() {
        assert!((STEP_CURVE.ease(0.0)).abs() < 1e-6);
        assert!((STEP_CURVE.ease(1.0) - 1.0).abs() < 1e-6);
    }

    #[test]
    fn input_is_clamped() {
        assert!((STEP_CURVE.ease(-0.5)).abs() < 1e-6);
        assert!((STEP_CURVE.ease(1.5) - 1.0).abs() < 1e-6);
    }

    #[test]
    fn step_curve_is_monotone_and_bounded() {
        let mut prev = 0.0;
        for i in 0..=100 {
            let y = STEP_CURVE.ease(i as f64 / 100.0);
            assert!((-1e-6..=1.0 + 1e-6).contains(&y), "out of range at {i}: {y}");
            assert!(y >= prev - 1e-6, "not monotone at {i}: {y} < {prev}");
            prev = y;
        }
    }

    #[test]
    fn step_curve_eases_out() {
        // cubic-bezier(0.25, 0.1, 0.25, 1.0) is well past linear at midpoint
        assert!(STEP_CURVE.ease(0.5) > 0.6);
    }
}
