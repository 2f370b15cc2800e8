//! Points evenly spaced on a circle, optionally with radial jitter.
use std::f64::consts::TAU;

use glam::DVec2;
use rand::RngCore;

use crate::pattern::params::ParamBag;
use crate::pattern::scale::size_scale_factor;
use crate::pattern::{rand01, ElementPosition, PatternGenerator, PatternInput};

/// Circle around the canvas center; a closed curve when drawn as lines.
///
/// With `radius_variation > 0` every point draws its own radius from
/// `radius ± radius_variation` and a size bonus of up to `8·s`. With no variation
/// no random numbers are drawn at all.
#[derive(Debug, Clone, PartialEq)]
pub struct CircularPattern {
    pub radius: f64,
    pub radius_variation: f64,
    pub angle_offset: f64,
}

impl Default for CircularPattern {
    fn default() -> Self {
        Self {
            radius: 150.0,
            radius_variation: 0.0,
            angle_offset: 0.0,
        }
    }
}

impl CircularPattern {
    pub fn new(radius: f64) -> Self {
        Self {
            radius,
            ..Default::default()
        }
    }

    pub fn with_variation(mut self, radius_variation: f64) -> Self {
        self.radius_variation = radius_variation;
        self
    }

    pub fn with_angle_offset(mut self, angle_offset: f64) -> Self {
        self.angle_offset = angle_offset;
        self
    }

    pub fn from_params(params: &ParamBag) -> Self {
        let d = Self::default();
        Self {
            radius: params.number_or("radius", d.radius),
            radius_variation: params.number_or("radiusVariation", d.radius_variation),
            angle_offset: params.number_or("angleOffset", d.angle_offset),
        }
    }
}

impl PatternGenerator for CircularPattern {
    fn generate(&self, input: &PatternInput, rng: &mut dyn RngCore) -> Vec<ElementPosition> {
        let count = input.count;
        if count == 0 || input.is_degenerate() {
            return Vec::new();
        }

        let center = input.center();
        let step = TAU / count as f64;
        let s = size_scale_factor(input.width(), input.height());
        let base_size = 8.0 * s;
        let size_variation = 8.0 * s;
        let jitter = self.radius_variation > 0.0;

        let on_circle = |radius: f64, i: usize| {
            let angle = self.angle_offset + i as f64 * step;
            center + radius * DVec2::new(angle.cos(), angle.sin())
        };

        let mut out = Vec::with_capacity(count);
        for i in 0..count {
            let radius = if jitter {
                self.radius + (rand01(rng) * 2.0 - 1.0) * self.radius_variation
            } else {
                self.radius
            };
            let size = if jitter {
                base_size + rand01(rng) * size_variation
            } else {
                base_size
            };

            let p = on_circle(radius, i);
            // The segment keeps this point's radius; the last one wraps to angle index 0.
            let end = input
                .connects()
                .then(|| on_circle(radius, if i + 1 < count { i + 1 } else { 0 }));
            out.push(ElementPosition::new(p.x, p.y, size).with_end(end));
        }
        out
    }
}
