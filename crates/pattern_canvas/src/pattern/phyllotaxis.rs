//! Sunflower-like phyllotaxis arrangement.
use std::f64::consts::PI;

use glam::DVec2;
use rand::RngCore;

use crate::pattern::params::ParamBag;
use crate::pattern::{ElementPosition, PatternGenerator, PatternInput};

/// Connect only every n-th element forward when drawing lines.
const LINE_STRIDE: usize = 5;

/// Golden angle `π(3 − √5)` in radians.
pub fn golden_angle() -> f64 {
    PI * (3.0 - 5f64.sqrt())
}

/// Point `i` sits at `θ = i·ga·n`, `r = S·√i·k` with `S = min(w, h)/25`.
#[derive(Debug, Clone, PartialEq)]
pub struct PhyllotaxisPattern {
    pub n: f64,
    pub k: f64,
}

impl Default for PhyllotaxisPattern {
    fn default() -> Self {
        Self { n: 1.0, k: 1.0 }
    }
}

impl PhyllotaxisPattern {
    pub fn from_params(params: &ParamBag) -> Self {
        let d = Self::default();
        Self {
            n: params.number_or("n", d.n),
            k: params.number_or("k", d.k),
        }
    }
}

impl PatternGenerator for PhyllotaxisPattern {
    fn generate(&self, input: &PatternInput, _rng: &mut dyn RngCore) -> Vec<ElementPosition> {
        let count = input.count;
        if count == 0 || input.is_degenerate() {
            return Vec::new();
        }

        let center = input.center();
        let scale = input.width().min(input.height()) / 25.0;
        let ga = golden_angle();
        let point = |i: usize| {
            let fi = i as f64;
            let theta = fi * ga * self.n;
            let r = scale * fi.sqrt() * self.k;
            center + r * DVec2::new(theta.cos(), theta.sin())
        };

        (0..count)
            .map(|i| {
                let p = point(i);
                let end = (input.connects() && i + 1 < count && i % LINE_STRIDE == 0)
                    .then(|| point(i + 1));
                let size = 4.0 + 8.0 * (i as f64 / count as f64).sqrt();
                ElementPosition::new(p.x, p.y, size).with_end(end)
            })
            .collect()
    }
}
