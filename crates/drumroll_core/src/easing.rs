//! Easing functions for settle transitions

/// Easing function type
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum Easing {
    Linear,
    /// Fast start, gentle arrival at the snap point
    #[default]
    EaseOut,
    EaseInOut,
    CubicBezier(f32, f32, f32, f32),
}

impl Easing {
    /// Apply the easing function to a progress value (0.0 to 1.0)
    pub fn apply(&self, t: f32) -> f32 {
        match self {
            Easing::Linear => t,
            Easing::EaseOut => 1.0 - (1.0 - t).powi(3),
            Easing::EaseInOut => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
                }
            }
            Easing::CubicBezier(x1, y1, x2, y2) => cubic_bezier_ease(t, *x1, *y1, *x2, *y2),
        }
    }
}

/// Cubic bezier easing (CSS `cubic-bezier` semantics).
///
/// Solves bezier_x(p) == t by bisection, which always converges and is
/// plenty accurate for pixel interpolation.
fn cubic_bezier_ease(t: f32, x1: f32, y1: f32, x2: f32, y2: f32) -> f32 {
    if t <= 0.0 {
        return 0.0;
    }
    if t >= 1.0 {
        return 1.0;
    }

    let x = t as f64;
    let mut lo = 0.0_f64;
    let mut hi = 1.0_f64;
    let mut p = x;
    for _ in 0..32 {
        let sample = bezier_axis(p, x1 as f64, x2 as f64);
        if (sample - x).abs() < 1e-6 {
            break;
        }
        if sample < x {
            lo = p;
        } else {
            hi = p;
        }
        p = (lo + hi) * 0.5;
    }

    bezier_axis(p, y1 as f64, y2 as f64) as f32
}

/// Evaluate one axis of the cubic bezier at parameter t (endpoints 0 and 1)
#[inline]
fn bezier_axis(t: f64, p1: f64, p2: f64) -> f64 {
    let u = 1.0 - t;
    3.0 * u * u * t * p1 + 3.0 * u * t * t * p2 + t * t * t
}
