//! Timing functions (easing curves) for dot animations.
//!
//! Every stage of the press sequence picks one of the named curves below.
//! They are CSS-style cubic beziers, solved for `x` with a few Newton steps.
//!
//! ## Named curves
//!
//! - [`TimingFunction::DIAMOND`] - outward push of the dots on press
//! - [`TimingFunction::FAST_OUT_SLOW_IN`] - scale changes and the line spread
//! - [`TimingFunction::FAST_OUT_LINEAR_IN`] - the collapse into the home glyph
//! - [`TimingFunction::RETRACT`] - the reversal back to rest and the dots
//!   regaining full size
//! - [`TimingFunction::HOME_DISAPPEAR`] - the home glyph shrinking away
//!
//! ## Example
//!
//! ```
//! use dotpress::animation::TimingFunction;
//!
//! let curve = TimingFunction::FAST_OUT_SLOW_IN;
//! assert_eq!(curve.evaluate(0.0), 0.0);
//! assert!(curve.evaluate(0.5) > 0.5);
//! ```

/// Timing function that controls the animation curve
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum TimingFunction {
    /// CSS cubic-bezier curve (x1, y1, x2, y2)
    CubicBezier(f32, f32, f32, f32),
}

impl TimingFunction {
    pub const DIAMOND: Self = TimingFunction::CubicBezier(0.2, 0.0, 0.2, 1.0);
    pub const FAST_OUT_SLOW_IN: Self = TimingFunction::CubicBezier(0.4, 0.0, 0.2, 1.0);
    pub const FAST_OUT_LINEAR_IN: Self = TimingFunction::CubicBezier(0.4, 0.0, 1.0, 1.0);
    /// Also used for the dots growing back during the collapse
    pub const RETRACT: Self = TimingFunction::CubicBezier(0.4, 0.0, 0.0, 1.0);
    pub const HOME_DISAPPEAR: Self = TimingFunction::CubicBezier(0.8, 0.0, 1.0, 1.0);

    /// Evaluate the timing function at time t (0.0 to 1.0)
    /// Returns the interpolation factor
    pub fn evaluate(&self, t: f32) -> f32 {
        let TimingFunction::CubicBezier(x1, y1, x2, y2) = *self;
        cubic_bezier(t, x1, y1, x2, y2)
    }
}

/// Cubic bezier curve evaluation
/// Simplified implementation assuming x1, x2 are in [0, 1]
fn cubic_bezier(t: f32, x1: f32, y1: f32, x2: f32, y2: f32) -> f32 {
    if t <= 0.0 {
        return 0.0;
    }
    if t >= 1.0 {
        return 1.0;
    }
    // Use Newton-Raphson to solve for t given x
    let mut current_t = t;
    for _ in 0..8 {
        let current_x = cubic_bezier_x(current_t, x1, x2);
        let current_slope = cubic_bezier_slope(current_t, x1, x2);
        if current_slope.abs() < 1e-6 {
            break;
        }
        current_t -= (current_x - t) / current_slope;
    }
    cubic_bezier_y(current_t.clamp(0.0, 1.0), y1, y2)
}

fn cubic_bezier_x(t: f32, x1: f32, x2: f32) -> f32 {
    let t2 = t * t;
    let t3 = t2 * t;
    let mt = 1.0 - t;
    let mt2 = mt * mt;
    3.0 * mt2 * t * x1 + 3.0 * mt * t2 * x2 + t3
}

fn cubic_bezier_y(t: f32, y1: f32, y2: f32) -> f32 {
    let t2 = t * t;
    let t3 = t2 * t;
    let mt = 1.0 - t;
    let mt2 = mt * mt;
    3.0 * mt2 * t * y1 + 3.0 * mt * t2 * y2 + t3
}

fn cubic_bezier_slope(t: f32, x1: f32, x2: f32) -> f32 {
    let mt = 1.0 - t;
    3.0 * mt * mt * x1 + 6.0 * mt * t * (x2 - x1) + 3.0 * t * t * (1.0 - x2)
}
