//! Lissajous figure.
use std::f64::consts::TAU;

use glam::DVec2;
use rand::RngCore;

use crate::pattern::params::ParamBag;
use crate::pattern::{trace_curve, ElementPosition, PatternGenerator, PatternInput};

/// `x = cx + scale·sin(a·t + δ)`, `y = cy + scale·sin(b·t)` for `t ∈ [0, 2π)`. Closed.
#[derive(Debug, Clone, PartialEq)]
pub struct LissajousPattern {
    pub a: f64,
    pub b: f64,
    pub delta: f64,
    pub scale: f64,
}

impl Default for LissajousPattern {
    fn default() -> Self {
        Self {
            a: 3.0,
            b: 4.0,
            delta: 0.0,
            scale: 150.0,
        }
    }
}

impl LissajousPattern {
    pub fn from_params(params: &ParamBag) -> Self {
        let d = Self::default();
        Self {
            a: params.number_or("a", d.a),
            b: params.number_or("b", d.b),
            delta: params.number_or("delta", d.delta),
            scale: params.number_or("scale", d.scale),
        }
    }
}

impl PatternGenerator for LissajousPattern {
    fn generate(&self, input: &PatternInput, _rng: &mut dyn RngCore) -> Vec<ElementPosition> {
        if input.count == 0 || input.is_degenerate() {
            return Vec::new();
        }

        let center = input.center();
        let step = TAU / input.count as f64;
        let point = |i: usize| {
            let t = i as f64 * step;
            center
                + self.scale * DVec2::new((self.a * t + self.delta).sin(), (self.b * t).sin())
        };

        trace_curve(input, true, point, |_| 8.0)
    }
}
