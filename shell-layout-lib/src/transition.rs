use core::fmt;
use serde::{Deserialize, Serialize};

const NEWTON_ITERATIONS: usize = 8;
const BISECTION_ITERATIONS: usize = 32;
const SOLVE_EPSILON: f32 = 1e-6;

/// Timing curve of a transition. The named curves are the CSS keywords.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Easing {
    Linear,
    EaseIn,
    EaseOut,
    EaseInOut,
    CubicBezier { x1: f32, y1: f32, x2: f32, y2: f32 },
}

impl Easing {
    fn control_points(self) -> Option<(f32, f32, f32, f32)> {
        match self {
            Easing::Linear => None,
            Easing::EaseIn => Some((0.42, 0.0, 1.0, 1.0)),
            Easing::EaseOut => Some((0.0, 0.0, 0.58, 1.0)),
            Easing::EaseInOut => Some((0.42, 0.0, 0.58, 1.0)),
            Easing::CubicBezier { x1, y1, x2, y2 } => Some((x1, y1, x2, y2)),
        }
    }

    /// Eased progress for linear progress `t`.
    #[must_use]
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        if t <= 0.0 {
            return 0.0;
        }
        if t >= 1.0 {
            return 1.0;
        }
        match self.control_points() {
            None => t,
            Some((x1, y1, x2, y2)) => {
                let s = solve_bezier_x(t, x1.clamp(0.0, 1.0), x2.clamp(0.0, 1.0));
                bezier(s, y1, y2)
            }
        }
    }
}

impl fmt::Display for Easing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Easing::Linear => write!(f, "linear"),
            Easing::EaseIn => write!(f, "ease-in"),
            Easing::EaseOut => write!(f, "ease-out"),
            Easing::EaseInOut => write!(f, "ease-in-out"),
            Easing::CubicBezier { x1, y1, x2, y2 } => {
                write!(f, "cubic-bezier({x1}, {y1}, {x2}, {y2})")
            }
        }
    }
}

// One coordinate of a cubic bezier anchored at 0 and 1.
fn bezier(s: f32, p1: f32, p2: f32) -> f32 {
    let inv = 1.0 - s;
    3.0 * inv * inv * s * p1 + 3.0 * inv * s * s * p2 + s * s * s
}

fn bezier_derivative(s: f32, p1: f32, p2: f32) -> f32 {
    let inv = 1.0 - s;
    3.0 * inv * inv * p1 + 6.0 * inv * s * (p2 - p1) + 3.0 * s * s * (1.0 - p2)
}

fn solve_bezier_x(x: f32, x1: f32, x2: f32) -> f32 {
    let mut s = x;
    for _ in 0..NEWTON_ITERATIONS {
        let err = bezier(s, x1, x2) - x;
        if err.abs() < SOLVE_EPSILON {
            return s;
        }
        let slope = bezier_derivative(s, x1, x2);
        if slope.abs() < SOLVE_EPSILON {
            break;
        }
        s -= err / slope;
    }

    let (mut lo, mut hi) = (0.0_f32, 1.0_f32);
    s = x;
    for _ in 0..BISECTION_ITERATIONS {
        let current = bezier(s, x1, x2);
        if (current - x).abs() < SOLVE_EPSILON {
            break;
        }
        if current < x {
            lo = s;
        } else {
            hi = s;
        }
        s = (lo + hi) / 2.0;
    }
    s
}

/// Timing of a property change.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Transition {
    pub duration_ms: f64,
    pub delay_ms: f64,
    pub easing: Easing,
}

/// Timing shared by every layout movement (sidebars opening, content making
/// room for them), so panels and content move together.
pub const LAYOUT_ANIMATION_TRANSITION: Transition = Transition {
    duration_ms: 250.0,
    delay_ms: 0.0,
    easing: Easing::EaseInOut,
};

impl Default for Transition {
    fn default() -> Self {
        LAYOUT_ANIMATION_TRANSITION
    }
}

impl Transition {
    #[must_use]
    pub fn instant() -> Self {
        Transition {
            duration_ms: 0.0,
            delay_ms: 0.0,
            easing: Easing::Linear,
        }
    }

    #[must_use]
    pub fn total_ms(&self) -> f64 {
        self.delay_ms.max(0.0) + self.duration_ms.max(0.0)
    }

    /// Eased progress in `[0, 1]` after `elapsed_ms` of the transition.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn progress(&self, elapsed_ms: f64) -> f32 {
        let active = elapsed_ms - self.delay_ms.max(0.0);
        if active <= 0.0 {
            return if self.duration_ms <= 0.0 && elapsed_ms >= self.total_ms() {
                1.0
            } else {
                0.0
            };
        }
        if self.duration_ms <= 0.0 {
            return 1.0;
        }
        let linear = (active / self.duration_ms).min(1.0) as f32;
        self.easing.apply(linear)
    }

    /// CSS `transition` shorthand for `property`.
    #[must_use]
    pub fn css(&self, property: &str) -> String {
        format!(
            "{property} {}ms {} {}ms",
            self.duration_ms, self.easing, self.delay_ms
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_easing_endpoints() {
        for easing in [
            Easing::Linear,
            Easing::EaseIn,
            Easing::EaseOut,
            Easing::EaseInOut,
            Easing::CubicBezier {
                x1: 0.2,
                y1: 1.4,
                x2: 0.6,
                y2: 1.0,
            },
        ] {
            assert_eq!(easing.apply(0.0), 0.0);
            assert_eq!(easing.apply(1.0), 1.0);
            assert_eq!(easing.apply(-3.0), 0.0);
            assert_eq!(easing.apply(3.0), 1.0);
        }
    }

    #[test]
    fn test_linear_is_identity() {
        assert_abs_diff_eq!(Easing::Linear.apply(0.3), 0.3);
    }

    #[test]
    fn test_ease_in_out_is_symmetric() {
        assert_abs_diff_eq!(Easing::EaseInOut.apply(0.5), 0.5, epsilon = 1e-4);
        let a = Easing::EaseInOut.apply(0.2);
        let b = Easing::EaseInOut.apply(0.8);
        assert_abs_diff_eq!(a + b, 1.0, epsilon = 1e-4);
    }

    #[test]
    fn test_ease_in_starts_slow_ease_out_starts_fast() {
        assert!(Easing::EaseIn.apply(0.25) < 0.25);
        assert!(Easing::EaseOut.apply(0.25) > 0.25);
    }

    #[test]
    fn test_easing_is_monotonic() {
        let mut last = 0.0;
        for step in 0..=100u8 {
            let value = Easing::EaseInOut.apply(f32::from(step) / 100.0);
            assert!(value >= last - 1e-5);
            last = value;
        }
    }

    #[test]
    fn test_progress_with_delay() {
        let transition = Transition {
            duration_ms: 100.0,
            delay_ms: 50.0,
            easing: Easing::Linear,
        };
        assert_eq!(transition.progress(0.0), 0.0);
        assert_eq!(transition.progress(50.0), 0.0);
        assert_abs_diff_eq!(transition.progress(100.0), 0.5);
        assert_eq!(transition.progress(150.0), 1.0);
        assert_eq!(transition.progress(1000.0), 1.0);
        assert_abs_diff_eq!(transition.total_ms(), 150.0);
    }

    #[test]
    fn test_instant_transition_completes_immediately() {
        assert_eq!(Transition::instant().progress(0.0), 1.0);
    }

    #[test]
    fn test_shared_transition_is_default() {
        assert_eq!(Transition::default(), LAYOUT_ANIMATION_TRANSITION);
        assert_eq!(
            LAYOUT_ANIMATION_TRANSITION.css("width"),
            "width 250ms ease-in-out 0ms"
        );
    }

    #[test]
    fn test_deserialize_transition() {
        let transition: Transition =
            serde_json::from_str(r#"{"duration_ms": 400, "easing": "ease-out"}"#).unwrap();
        assert_eq!(transition.easing, Easing::EaseOut);
        assert_eq!(transition.duration_ms, 400.0);
        assert_eq!(transition.delay_ms, 0.0);

        let custom: Transition = serde_json::from_str(
            r#"{"easing": {"cubic-bezier": {"x1": 0.4, "y1": 0.0, "x2": 0.2, "y2": 1.0}}}"#,
        )
        .unwrap();
        assert_eq!(
            custom.easing.to_string(),
            "cubic-bezier(0.4, 0, 0.2, 1)"
        );
    }
}
