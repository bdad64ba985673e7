//! # Falloff Kernels
//!
//! Pure weight functions mapping distance-from-influence-point and brush
//! radius to a displacement weight.

use config::constants::{GAUSS_FALLOFF_BASE, GAUSS_FALLOFF_EXPONENT, GAUSS_FALLOFF_OFFSET};
use serde::{Deserialize, Serialize};

/// Selectable falloff kernel for the sculpt brush.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Falloff {
    /// `clamp01(1 - d/r)`: straight ramp to zero at the radius.
    Linear,
    /// `clamp01(360^(-(d/r)^2.5 - 0.01))`: a soft bell. The constant
    /// offset keeps the peak slightly below 1 even at zero distance.
    #[default]
    Gauss,
    /// `1 - d²/r²`: a sharp spike. Deliberately unclamped; callers
    /// pre-filter to `d <= r`, and the mildly negative lift just inside
    /// the boundary is accepted behavior.
    Needle,
}

impl Falloff {
    /// Evaluates the kernel weight for a vertex at `distance` from the
    /// influence point with the given brush `radius`.
    pub fn weight(self, distance: f64, radius: f64) -> f64 {
        match self {
            Falloff::Linear => clamp01(1.0 - distance / radius),
            Falloff::Gauss => clamp01(
                GAUSS_FALLOFF_BASE
                    .powf(-(distance / radius).powf(GAUSS_FALLOFF_EXPONENT) - GAUSS_FALLOFF_OFFSET),
            ),
            Falloff::Needle => 1.0 - (distance * distance) / (radius * radius),
        }
    }
}

fn clamp01(value: f64) -> f64 {
    value.clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOLERANCE: f64 = 1e-12;

    #[test]
    fn test_linear_closed_form() {
        assert!((Falloff::Linear.weight(0.0, 2.0) - 1.0).abs() < TOLERANCE);
        assert!((Falloff::Linear.weight(1.0, 2.0) - 0.5).abs() < TOLERANCE);
        assert!(Falloff::Linear.weight(2.0, 2.0).abs() < TOLERANCE);
        // Clamped beyond the radius
        assert_eq!(Falloff::Linear.weight(5.0, 2.0), 0.0);
    }

    #[test]
    fn test_needle_closed_form() {
        assert!((Falloff::Needle.weight(0.0, 2.0) - 1.0).abs() < TOLERANCE);
        assert!((Falloff::Needle.weight(1.0, 2.0) - 0.75).abs() < TOLERANCE);
        assert!(Falloff::Needle.weight(2.0, 2.0).abs() < TOLERANCE);
        // Unclamped past the boundary
        assert!(Falloff::Needle.weight(3.0, 2.0) < 0.0);
    }

    #[test]
    fn test_gauss_peak_is_its_maximum() {
        // The constant offset keeps the peak below 1: 360^(-0.01)
        let peak = Falloff::Gauss.weight(0.0, 1.0);
        let expected = 360.0f64.powf(-0.01);
        assert!((peak - expected).abs() < TOLERANCE);
        assert!(peak < 1.0 && peak > 0.9);

        // Monotonically decreasing toward the radius
        let mut previous = peak;
        for step in 1..=10 {
            let w = Falloff::Gauss.weight(step as f64 * 0.1, 1.0);
            assert!(w <= previous);
            previous = w;
        }
    }

    #[test]
    fn test_gauss_stays_in_unit_range() {
        for step in 0..=20 {
            let w = Falloff::Gauss.weight(step as f64 * 0.1, 1.0);
            assert!((0.0..=1.0).contains(&w));
        }
    }
}
