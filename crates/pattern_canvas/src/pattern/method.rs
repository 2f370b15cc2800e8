//! Typed method configuration and the generation entry point.
use rand::RngCore;

use crate::pattern::custom::CustomPatternRegistry;
use crate::pattern::params::{DrawingMethodSpec, MethodKind, ParamBag};
use crate::pattern::scale::size_scale_factor;
use crate::pattern::{
    CircularPattern, ElementPosition, FibonacciPattern, GridPattern, LissajousPattern,
    PatternGenerator, PatternInput, PhyllotaxisPattern, RosePattern, Shape, SinePattern,
    SpiralPattern,
};
use crate::render::color::Color;

/// Parameter key naming the registered procedure of the `custom` method.
pub const CUSTOM_FUNCTION_KEY: &str = "function";

/// Fully defaulted configuration for one drawing method.
#[derive(Debug, Clone, PartialEq)]
pub enum MethodConfig {
    Grid(GridPattern),
    Sine(SinePattern),
    Spiral(SpiralPattern),
    Circular(CircularPattern),
    Fibonacci(FibonacciPattern),
    Lissajous(LissajousPattern),
    Rose(RosePattern),
    Phyllotaxis(PhyllotaxisPattern),
    Custom { function: String },
}

impl Default for MethodConfig {
    fn default() -> Self {
        MethodConfig::Spiral(SpiralPattern::default())
    }
}

impl MethodConfig {
    /// Distance parameters pre-scaled by the canvas scale factor, per method.
    fn scaled_keys(kind: MethodKind) -> &'static [&'static str] {
        match kind {
            MethodKind::Sine => &["amplitude"],
            MethodKind::Spiral => &["spacing"],
            MethodKind::Circular => &["radius", "radiusVariation"],
            MethodKind::Fibonacci | MethodKind::Lissajous => &["scale"],
            _ => &[],
        }
    }

    /// Build a config from raw parameters without any canvas scaling.
    pub fn from_params(kind: MethodKind, params: &ParamBag) -> Self {
        match kind {
            MethodKind::Grid => MethodConfig::Grid(GridPattern::from_params(params)),
            MethodKind::Sine => MethodConfig::Sine(SinePattern::from_params(params)),
            MethodKind::Spiral => MethodConfig::Spiral(SpiralPattern::from_params(params)),
            MethodKind::Circular => MethodConfig::Circular(CircularPattern::from_params(params)),
            MethodKind::Fibonacci => {
                MethodConfig::Fibonacci(FibonacciPattern::from_params(params))
            }
            MethodKind::Lissajous => {
                MethodConfig::Lissajous(LissajousPattern::from_params(params))
            }
            MethodKind::Rose => MethodConfig::Rose(RosePattern::from_params(params)),
            MethodKind::Phyllotaxis => {
                MethodConfig::Phyllotaxis(PhyllotaxisPattern::from_params(params))
            }
            MethodKind::Custom => MethodConfig::Custom {
                function: params.text(CUSTOM_FUNCTION_KEY).unwrap_or_default().to_owned(),
            },
        }
    }

    /// Build a config for a `width × height` canvas.
    ///
    /// Explicitly supplied distance parameters are multiplied by the canvas scale
    /// factor first; defaults stay as documented.
    pub fn for_canvas(spec: &DrawingMethodSpec, width: f64, height: f64) -> Self {
        let keys = Self::scaled_keys(spec.kind);
        if keys.is_empty() {
            return Self::from_params(spec.kind, &spec.params);
        }
        let factor = size_scale_factor(width, height);
        Self::from_params(spec.kind, &spec.params.scaled(keys, factor))
    }

    pub fn kind(&self) -> MethodKind {
        match self {
            MethodConfig::Grid(_) => MethodKind::Grid,
            MethodConfig::Sine(_) => MethodKind::Sine,
            MethodConfig::Spiral(_) => MethodKind::Spiral,
            MethodConfig::Circular(_) => MethodKind::Circular,
            MethodConfig::Fibonacci(_) => MethodKind::Fibonacci,
            MethodConfig::Lissajous(_) => MethodKind::Lissajous,
            MethodConfig::Rose(_) => MethodKind::Rose,
            MethodConfig::Phyllotaxis(_) => MethodKind::Phyllotaxis,
            MethodConfig::Custom { .. } => MethodKind::Custom,
        }
    }

    /// Run the configured generator.
    pub fn generate(
        &self,
        input: &PatternInput,
        customs: &CustomPatternRegistry,
        rng: &mut dyn RngCore,
    ) -> Vec<ElementPosition> {
        match self {
            MethodConfig::Grid(g) => g.generate(input, rng),
            MethodConfig::Sine(g) => g.generate(input, rng),
            MethodConfig::Spiral(g) => g.generate(input, rng),
            MethodConfig::Circular(g) => g.generate(input, rng),
            MethodConfig::Fibonacci(g) => g.generate(input, rng),
            MethodConfig::Lissajous(g) => g.generate(input, rng),
            MethodConfig::Rose(g) => g.generate(input, rng),
            MethodConfig::Phyllotaxis(g) => g.generate(input, rng),
            MethodConfig::Custom { function } => customs.pattern(function).generate(input, rng),
        }
    }
}

/// Generate the element sequence for one pass.
///
/// Never fails: degenerate input and failing custom procedures produce an empty or
/// partial sequence.
#[allow(clippy::too_many_arguments)]
pub fn generate_positions(
    width: f64,
    height: f64,
    count: usize,
    shape: Shape,
    color: Color,
    method: &DrawingMethodSpec,
    customs: &CustomPatternRegistry,
    rng: &mut dyn RngCore,
) -> Vec<ElementPosition> {
    let input = PatternInput::new(width, height, count, shape, color);
    MethodConfig::for_canvas(method, width, height).generate(&input, customs, rng)
}
