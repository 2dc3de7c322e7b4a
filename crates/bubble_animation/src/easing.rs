//! Easing functions for animations

/// Easing function type
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum Easing {
    #[default]
    Linear,
    EaseIn,
    EaseOut,
    EaseInOut,
    /// Elastic overshoot: flies past 1.0 and settles back. The tension
    /// parameter controls how far past the target the curve swings.
    Overshoot(f32),
}

impl Easing {
    /// Apply the easing function to a progress value (0.0 to 1.0).
    ///
    /// `Overshoot` intentionally returns values above 1.0 mid-flight; callers
    /// interpolating positions must not clamp the result.
    pub fn apply(&self, t: f32) -> f32 {
        match self {
            Easing::Linear => t,
            Easing::EaseIn => t * t * t,
            Easing::EaseOut => 1.0 - (1.0 - t).powi(3),
            Easing::EaseInOut => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
                }
            }
            Easing::Overshoot(tension) => {
                let t = t - 1.0;
                (tension + 1.0) * t * t * t + tension * t * t + 1.0
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoints_are_exact() {
        for easing in [
            Easing::Linear,
            Easing::EaseIn,
            Easing::EaseOut,
            Easing::EaseInOut,
            Easing::Overshoot(5.0),
        ] {
            assert!((easing.apply(0.0)).abs() < 1e-6, "{easing:?} at 0");
            assert!((easing.apply(1.0) - 1.0).abs() < 1e-6, "{easing:?} at 1");
        }
    }

    #[test]
    fn test_overshoot_exceeds_target_mid_flight() {
        let easing = Easing::Overshoot(5.0);
        // (k+1)(t-1)^3 + k(t-1)^2 + 1 at t = 0.8 with k = 5: 1.152
        let v = easing.apply(0.8);
        assert!(v > 1.0, "expected overshoot, got {v}");
        assert!((v - 1.152).abs() < 1e-4);
    }

    #[test]
    fn test_linear_is_identity() {
        assert_eq!(Easing::Linear.apply(0.25), 0.25);
        assert_eq!(Easing::Linear.apply(0.75), 0.75);
    }
}
