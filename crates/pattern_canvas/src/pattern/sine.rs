//! Sine wave across the canvas width.
use glam::DVec2;
use rand::RngCore;

use crate::pattern::params::ParamBag;
use crate::pattern::{trace_curve, ElementPosition, PatternGenerator, PatternInput};

/// Samples `y = h/2 + amplitude · sin(frequency · x + phase)` at evenly spaced `x`.
#[derive(Debug, Clone, PartialEq)]
pub struct SinePattern {
    pub amplitude: f64,
    pub frequency: f64,
    pub phase: f64,
}

impl Default for SinePattern {
    fn default() -> Self {
        Self {
            amplitude: 100.0,
            frequency: 0.05,
            phase: 0.0,
        }
    }
}

impl SinePattern {
    pub fn from_params(params: &ParamBag) -> Self {
        let d = Self::default();
        Self {
            amplitude: params.number_or("amplitude", d.amplitude),
            frequency: params.number_or("frequency", d.frequency),
            phase: params.number_or("phase", d.phase),
        }
    }
}

impl PatternGenerator for SinePattern {
    fn generate(&self, input: &PatternInput, _rng: &mut dyn RngCore) -> Vec<ElementPosition> {
        if input.count == 0 || input.is_degenerate() {
            return Vec::new();
        }

        let step = input.width() / input.count as f64;
        let mid = input.height() / 2.0;
        let point = |i: usize| {
            let x = i as f64 * step;
            DVec2::new(x, mid + self.amplitude * (self.frequency * x + self.phase).sin())
        };

        trace_curve(input, false, point, |_| 8.0)
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
    fn samples_span_the_width_and_stay_open() {
        let mut rng = StdRng::seed_from_u64(1);
        let out = SinePattern::default().generate(&input(400.0, 200.0, 4, Shape::Lines), &mut rng);
        assert_eq!(out.len(), 4);
        let xs: Vec<f64> = out.iter().map(|e| e.x).collect();
        assert_eq!(xs, vec![0.0, 100.0, 200.0, 300.0]);
        assert_eq!(out[0].y, 100.0);
        assert_eq!(out[2].end_x(), Some(300.0));
        assert!(out[3].end.is_none());
        assert!(out.iter().all(|e| e.size == 8.0));
    }

    #[test]
    fn zero_count_is_empty() {
        let mut rng = StdRng::seed_from_u64(1);
        assert!(SinePattern::default()
            .generate(&input(400.0, 200.0, 0, Shape::Lines), &mut rng)
            .is_empty());
    }
}
