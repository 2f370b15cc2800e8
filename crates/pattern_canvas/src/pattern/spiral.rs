//! Archimedean spiral growing out of the canvas center.
use glam::DVec2;
use rand::RngCore;

use crate::pattern::params::ParamBag;
use crate::pattern::scale::size_scale_factor;
use crate::pattern::{ElementPosition, PatternGenerator, PatternInput};

/// Point `i` sits at angle `i · rotation` and radius `spacing · i · expansion`.
///
/// Element sizes grow from `6·s` to `16·s` where `s` is the canvas scale factor.
#[derive(Debug, Clone, PartialEq)]
pub struct SpiralPattern {
    pub spacing: f64,
    pub rotation: f64,
    pub expansion: f64,
}

impl Default for SpiralPattern {
    fn default() -> Self {
        Self {
            spacing: 10.0,
            rotation: 0.1,
            expansion: 0.2,
        }
    }
}

impl SpiralPattern {
    pub fn from_params(params: &ParamBag) -> Self {
        let d = Self::default();
        Self {
            spacing: params.number_or("spacing", d.spacing),
            rotation: params.number_or("rotation", d.rotation),
            expansion: params.number_or("expansion", d.expansion),
        }
    }

    fn point(&self, center: DVec2, i: usize) -> DVec2 {
        let fi = i as f64;
        let angle = fi * self.rotation;
        let radius = self.spacing * (fi * self.expansion);
        center + radius * DVec2::new(angle.cos(), angle.sin())
    }
}

impl PatternGenerator for SpiralPattern {
    fn generate(&self, input: &PatternInput, _rng: &mut dyn RngCore) -> Vec<ElementPosition> {
        let count = input.count;
        if count == 0 || input.is_degenerate() {
            return Vec::new();
        }

        let center = input.center();
        let s = size_scale_factor(input.width(), input.height());
        let base_size = 6.0 * s;
        let size_variation = 10.0 * s;

        let mut out = Vec::with_capacity(count);
        for i in 0..count {
            let p = self.point(center, i);
            // The last point has no successor; its end repeats the point itself.
            let end = input
                .connects()
                .then(|| if i + 1 < count { self.point(center, i + 1) } else { p });
            let size = base_size + (i as f64 / count as f64) * size_variation;
            out.push(ElementPosition::new(p.x, p.y, size).with_end(end));
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;
    use crate::pattern::test_support::{assert_close, input};
    use crate::pattern::Shape;

    #[test]
    fn first_point_is_the_center() {
        let mut rng = StdRng::seed_from_u64(1);
        let out = SpiralPattern::default().generate(&input(1280.0, 720.0, 10, Shape::Circles), &mut rng);
        assert_eq!(out.len(), 10);
        assert_eq!((out[0].x, out[0].y), (640.0, 360.0));
        assert!((out[0].size - 6.0).abs() < 1e-12);
        assert!((out[9].size - 15.0).abs() < 1e-9);
    }

    #[test]
    fn last_point_connects_to_itself_not_the_first() {
        let mut rng = StdRng::seed_from_u64(1);
        let out = SpiralPattern::default().generate(&input(800.0, 800.0, 50, Shape::Lines), &mut rng);
        let last = out.last().unwrap();
        assert_close(last.end.unwrap(), last.position());
        assert_ne!(last.end.unwrap(), out[0].position());
        assert_close(out[10].end.unwrap(), out[11].position());
    }

    #[test]
    fn is_deterministic() {
        let mut a = StdRng::seed_from_u64(1);
        let mut b = StdRng::seed_from_u64(99);
        let spiral = SpiralPattern::default();
        let inp = input(640.0, 480.0, 200, Shape::Lines);
        assert_eq!(spiral.generate(&inp, &mut a), spiral.generate(&inp, &mut b));
    }
}
