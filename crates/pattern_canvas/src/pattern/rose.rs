//! Rose (rhodonea) curve.
use std::f64::consts::TAU;

use glam::DVec2;
use rand::RngCore;
use tracing::warn;

use crate::pattern::params::ParamBag;
use crate::pattern::{trace_curve, ElementPosition, PatternGenerator, PatternInput};

/// Polar curve `r = S·(a·cos(kθ) + b)/(a + b)` traced over `n` turns, `S = min(w, h)/3`.
///
/// Closed when drawn as lines. `a + b == 0` has no normalization and yields nothing.
#[derive(Debug, Clone, PartialEq)]
pub struct RosePattern {
    pub a: f64,
    pub b: f64,
    pub n: f64,
    pub k: f64,
}

impl Default for RosePattern {
    fn default() -> Self {
        Self {
            a: 1.0,
            b: 1.0,
            n: 2.0,
            k: 1.0,
        }
    }
}

impl RosePattern {
    pub fn from_params(params: &ParamBag) -> Self {
        let d = Self::default();
        Self {
            a: params.number_or("a", d.a),
            b: params.number_or("b", d.b),
            n: params.number_or("n", d.n),
            k: params.number_or("k", d.k),
        }
    }
}

impl PatternGenerator for RosePattern {
    fn generate(&self, input: &PatternInput, _rng: &mut dyn RngCore) -> Vec<ElementPosition> {
        let count = input.count;
        if count == 0 || input.is_degenerate() {
            return Vec::new();
        }
        let norm = self.a + self.b;
        if norm == 0.0 {
            warn!(
                "Rose parameters a = {} and b = {} cancel out; skipping.",
                self.a, self.b
            );
            return Vec::new();
        }

        let center = input.center();
        let scale = input.width().min(input.height()) / 3.0;
        let step = TAU * self.n / count as f64;
        let point = |i: usize| {
            let theta = i as f64 * step;
            let r = scale * (self.a * (self.k * theta).cos() + self.b) / norm;
            center + r * DVec2::new(theta.cos(), theta.sin())
        };

        trace_curve(input, true, point, |i| 6.0 + (i as f64 / count as f64) * 6.0)
    }
}
