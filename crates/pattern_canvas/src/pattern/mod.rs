//! Parametric pattern generators producing ordered drawable elements.
//!
//! Every method implements [`PatternGenerator`]. The dispatcher in [`method`] turns a
//! loosely typed [`DrawingMethodSpec`] into a typed [`MethodConfig`] and runs the
//! matching generator.
use std::fmt;
use std::str::FromStr;

use glam::DVec2;
use mint::Vector2;
use rand::RngCore;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::render::color::Color;

pub mod circular;
pub mod custom;
pub mod fibonacci;
pub mod grid;
pub mod lissajous;
pub mod method;
pub mod params;
pub mod phyllotaxis;
pub mod rose;
pub mod scale;
pub mod sine;
pub mod spiral;

pub use circular::CircularPattern;
pub use custom::{
    CustomPattern, CustomPatternRegistry, CustomPoint, CustomProcedure, FnProcedure,
};
pub use fibonacci::FibonacciPattern;
pub use grid::GridPattern;
pub use lissajous::LissajousPattern;
pub use method::{generate_positions, MethodConfig};
pub use params::{DrawingMethodSpec, MethodKind, ParamBag, ParamValue};
pub use phyllotaxis::PhyllotaxisPattern;
pub use rose::RosePattern;
pub use scale::size_scale_factor;
pub use sine::SinePattern;
pub use spiral::SpiralPattern;

/// Primitive used to draw every element of a pass.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Shape {
    #[default]
    Circles,
    Rectangles,
    Lines,
}

impl Shape {
    pub fn as_str(self) -> &'static str {
        match self {
            Shape::Circles => "circles",
            Shape::Rectangles => "rectangles",
            Shape::Lines => "lines",
        }
    }
}

impl FromStr for Shape {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "circles" => Ok(Shape::Circles),
            "rectangles" => Ok(Shape::Rectangles),
            "lines" => Ok(Shape::Lines),
            other => Err(Error::InvalidConfig(format!("unknown shape '{other}'"))),
        }
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One drawable element: position, size and an optional segment end point.
///
/// `end` is only set when the pass draws [`Shape::Lines`] and the generator defines a
/// successor for this index.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ElementPosition {
    pub x: f64,
    pub y: f64,
    pub size: f64,
    pub end: Option<DVec2>,
}

impl ElementPosition {
    pub fn new(x: f64, y: f64, size: f64) -> Self {
        Self {
            x,
            y,
            size,
            end: None,
        }
    }

    pub fn with_end(mut self, end: Option<DVec2>) -> Self {
        self.end = end;
        self
    }

    pub fn position(&self) -> DVec2 {
        DVec2::new(self.x, self.y)
    }

    pub fn end_x(&self) -> Option<f64> {
        self.end.map(|e| e.x)
    }

    pub fn end_y(&self) -> Option<f64> {
        self.end.map(|e| e.y)
    }

    /// True when all coordinates, including the end point, are finite.
    pub fn is_finite(&self) -> bool {
        self.x.is_finite()
            && self.y.is_finite()
            && self.size.is_finite()
            && self.end.is_none_or(|e| e.is_finite())
    }
}

/// Inputs shared by every generator for one pass.
#[derive(Clone, Copy, Debug)]
pub struct PatternInput {
    /// Canvas width and height in pixels.
    pub extent: Vector2<f64>,
    /// Target element count.
    pub count: usize,
    pub shape: Shape,
    pub color: Color,
}

impl PatternInput {
    pub fn new(width: f64, height: f64, count: usize, shape: Shape, color: Color) -> Self {
        Self {
            extent: Vector2 {
                x: width,
                y: height,
            },
            count,
            shape,
            color,
        }
    }

    pub fn width(&self) -> f64 {
        self.extent.x
    }

    pub fn height(&self) -> f64 {
        self.extent.y
    }

    pub fn center(&self) -> DVec2 {
        DVec2::from(self.extent) * 0.5
    }

    pub fn connects(&self) -> bool {
        self.shape == Shape::Lines
    }

    /// True when the extent cannot hold any element.
    pub fn is_degenerate(&self) -> bool {
        let (w, h) = (self.extent.x, self.extent.y);
        !(w.is_finite() && h.is_finite()) || w <= 0.0 || h <= 0.0
    }
}

/// Trait for pattern generation.
pub trait PatternGenerator: Send + Sync {
    fn generate(&self, input: &PatternInput, rng: &mut dyn RngCore) -> Vec<ElementPosition>;
}

/// Build the element list for a sampled curve `point(i)`.
///
/// `closed` makes the last element connect back to `point(0)`; otherwise the last
/// element carries no end point. Ends are only produced when the input draws lines.
pub(crate) fn trace_curve<F>(
    input: &PatternInput,
    closed: bool,
    mut point: F,
    size: impl Fn(usize) -> f64,
) -> Vec<ElementPosition>
where
    F: FnMut(usize) -> DVec2,
{
    let count = input.count;
    let mut out = Vec::with_capacity(count);
    for i in 0..count {
        let p = point(i);
        let end = if !input.connects() {
            None
        } else if i + 1 < count {
            Some(point(i + 1))
        } else if closed {
            Some(point(0))
        } else {
            None
        };
        out.push(ElementPosition::new(p.x, p.y, size(i)).with_end(end));
    }
    out
}

/// Generate a random float in the range [0, 1).
#[inline]
pub(crate) fn rand01(rng: &mut dyn RngCore) -> f64 {
    (rng.next_u64() >> 11) as f64 * (1.0 / (1u64 << 53) as f64)
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;

    /// Shorthand for a black input used throughout generator tests.
    pub fn input(width: f64, height: f64, count: usize, shape: Shape) -> PatternInput {
        PatternInput::new(width, height, count, shape, Color::BLACK)
    }

    pub fn assert_close(a: DVec2, b: DVec2) {
        assert!(
            (a - b).length() < 1e-9,
            "expected {a:?} to be within 1e-9 of {b:?}"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FixedRng {
        value: u64,
    }

    impl RngCore for FixedRng {
        fn next_u32(&mut self) -> u32 {
            self.value as u32
        }

        fn next_u64(&mut self) -> u64 {
            self.value
        }

        fn fill_bytes(&mut self, dest: &mut [u8]) {
            let bytes = self.value.to_le_bytes();
            for (i, b) in dest.iter_mut().enumerate() {
                *b = bytes[i % 8];
            }
        }
    }

    #[test]
    fn rand01_stays_below_one() {
        let mut rng = FixedRng { value: u64::MAX };
        let r = rand01(&mut rng);
        assert!(r < 1.0);
        assert!(r > 0.999_999);

        let mut rng = FixedRng { value: 0 };
        assert_eq!(rand01(&mut rng), 0.0);
    }

    #[test]
    fn shape_parses_lowercase_names() {
        assert_eq!("lines".parse::<Shape>().unwrap(), Shape::Lines);
        assert_eq!(Shape::Rectangles.to_string(), "rectangles");
        assert!("fractals".parse::<Shape>().is_err());
    }

    #[test]
    fn trace_curve_open_and_closed() {
        let input = test_support::input(10.0, 10.0, 3, Shape::Lines);
        let point = |i: usize| DVec2::new(i as f64, 0.0);

        let open = trace_curve(&input, false, point, |_| 1.0);
        assert_eq!(open[0].end, Some(DVec2::new(1.0, 0.0)));
        assert_eq!(open[2].end, None);

        let closed = trace_curve(&input, true, point, |_| 1.0);
        assert_eq!(closed[2].end, Some(DVec2::new(0.0, 0.0)));
    }

    #[test]
    fn trace_curve_skips_ends_for_filled_shapes() {
        let input = test_support::input(10.0, 10.0, 3, Shape::Circles);
        let out = trace_curve(&input, true, |i| DVec2::splat(i as f64), |_| 1.0);
        assert!(out.iter().all(|e| e.end.is_none()));
    }

    #[test]
    fn degenerate_extent_detection() {
        assert!(test_support::input(0.0, 10.0, 1, Shape::Circles).is_degenerate());
        assert!(test_support::input(10.0, f64::NAN, 1, Shape::Circles).is_degenerate());
        assert!(!test_support::input(1.0, 1.0, 1, Shape::Circles).is_degenerate());
    }
}
