//! Golden-ratio spiral.
use std::f64::consts::TAU;

use glam::DVec2;
use rand::RngCore;

use crate::pattern::params::ParamBag;
use crate::pattern::{trace_curve, ElementPosition, PatternGenerator, PatternInput};

/// Golden ratio `(1 + √5) / 2`.
pub const PHI: f64 = 1.618_033_988_749_895;

/// Spiral whose distance grows as `φ^(2·i/count) · scale` over `turns` revolutions.
#[derive(Debug, Clone, PartialEq)]
pub struct FibonacciPattern {
    pub scale: f64,
    pub turns: f64,
    pub rotation: f64,
}

impl Default for FibonacciPattern {
    fn default() -> Self {
        Self {
            scale: 5.0,
            turns: 12.0,
            rotation: 0.0,
        }
    }
}

impl FibonacciPattern {
    pub fn from_params(params: &ParamBag) -> Self {
        let d = Self::default();
        Self {
            scale: params.number_or("scale", d.scale),
            turns: params.number_or("turns", d.turns),
            rotation: params.number_or("rotation", d.rotation),
        }
    }
}

impl PatternGenerator for FibonacciPattern {
    fn generate(&self, input: &PatternInput, _rng: &mut dyn RngCore) -> Vec<ElementPosition> {
        let count = input.count;
        if count == 0 || input.is_degenerate() {
            return Vec::new();
        }

        let center = input.center();
        let ratio = |i: usize| i as f64 / count as f64;
        let point = |i: usize| {
            let r = ratio(i);
            let angle = self.rotation + TAU * r * self.turns;
            let dist = PHI.powf(2.0 * r) * self.scale;
            center + dist * DVec2::new(angle.cos(), angle.sin())
        };

        trace_curve(input, false, point, |i| 4.0 + ratio(i) * 12.0)
    }
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;
    use crate::pattern::test_support::input;
    use crate::pattern::Shape;

    #[test]
    fn phi_matches_its_definition() {
        assert!((PHI - (1.0 + 5f64.sqrt()) / 2.0).abs() < 1e-15);
    }

    #[test]
    fn first_point_sits_at_scale_from_center() {
        let mut rng = StdRng::seed_from_u64(1);
        let out = FibonacciPattern::default().generate(&input(200.0, 200.0, 20, Shape::Lines), &mut rng);
        assert_eq!(out.len(), 20);
        assert_eq!((out[0].x, out[0].y), (105.0, 100.0));
        assert_eq!(out[0].size, 4.0);
        assert!(out[19].end.is_none());
        assert!(out[18].end.is_some());
    }
}
