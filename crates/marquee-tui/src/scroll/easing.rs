use marquee_core::EasingType;

/// Easing curves over normalized progress
pub trait EasingTypeExt {
    /// Map progress in [0, 1] to eased progress in [0, 1]
    fn apply(&self, t: f64) -> f64;
}

impl EasingTypeExt for EasingType {
    fn apply(&self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        let remaining = 1.0 - t;
        match self {
            // Snap at the end of the duration
            EasingType::None => {
                if t >= 1.0 {
                    1.0
                } else {
                    0.0
                }
            }
            EasingType::Linear => t,
            EasingType::Cubic => 1.0 - remaining * remaining * remaining,
            EasingType::Quintic => 1.0 - remaining.powi(5),
            EasingType::EaseOut if t >= 1.0 => 1.0,
            EasingType::EaseOut => 1.0 - (-10.0 * t).exp2(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CURVES: [EasingType; 4] = [
        EasingType::Linear,
        EasingType::Cubic,
        EasingType::Quintic,
        EasingType::EaseOut,
    ];

    #[test]
    fn test_curves_start_at_zero_and_end_at_one() {
        for curve in CURVES {
            assert!(curve.apply(0.0).abs() < 1e-9, "{:?}", curve);
            assert!((curve.apply(1.0) - 1.0).abs() < 1e-9, "{:?}", curve);
        }
    }

    #[test]
    fn test_none_snaps() {
        assert_eq!(EasingType::None.apply(0.99), 0.0);
        assert_eq!(EasingType::None.apply(1.0), 1.0);
    }

    #[test]
    fn test_ease_out_front_loads_motion() {
        let halfway = EasingType::Linear.apply(0.5);
        assert!(EasingType::Cubic.apply(0.5) > halfway);
        assert!(EasingType::Quintic.apply(0.5) > EasingType::Cubic.apply(0.5));
    }

    #[test]
    fn test_out_of_range_progress_is_clamped() {
        assert_eq!(EasingType::Linear.apply(-0.5), 0.0);
        assert_eq!(EasingType::Linear.apply(3.0), 1.0);
    }
}
