//! Easing curve application.
//!
//! The `Easing` enum lives in folio-core so it can be named in the config
//! file; the math lives here with the rest of the motion code.

pub use folio_core::Easing;

/// Extension trait mapping a progress value through an easing curve.
pub trait EasingExt {
    /// Apply the curve to `t` in `[0, 1]`, returning a value in `[0, 1]`.
    fn apply(&self, t: f64) -> f64;
}

impl EasingExt for Easing {
    #[inline]
    fn apply(&self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::None => {
                if t < 1.0 {
                    0.0
                } else {
                    1.0
                }
            }
            Easing::Linear => t,
            Easing::CubicOut => {
                let inv = 1.0 - t;
                1.0 - inv * inv * inv
            }
            Easing::QuintOut => {
                let inv = 1.0 - t;
                1.0 - inv * inv * inv * inv * inv
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CURVES: [Easing; 4] = [
        Easing::None,
        Easing::Linear,
        Easing::CubicOut,
        Easing::QuintOut,
    ];

    #[test]
    fn test_endpoints() {
        for easing in CURVES {
            // None jumps at the end, everything else starts at 0
            if easing != Easing::None {
                assert!(easing.apply(0.0).abs() < 1e-9, "{:?} at t=0", easing);
            }
            assert!((easing.apply(1.0) - 1.0).abs() < 1e-9, "{:?} at t=1", easing);
        }
    }

    #[test]
    fn test_monotonic() {
        for easing in [Easing::Linear, Easing::CubicOut, Easing::QuintOut] {
            let mut prev = 0.0;
            for i in 0..=20 {
                let v = easing.apply(i as f64 / 20.0);
                assert!(v >= prev, "{:?} not monotonic at step {}", easing, i);
                prev = v;
            }
        }
    }

    #[test]
    fn test_out_of_range_input_clamps() {
        assert_eq!(Easing::Linear.apply(-0.5), 0.0);
        assert_eq!(Easing::Linear.apply(1.5), 1.0);
    }
}
