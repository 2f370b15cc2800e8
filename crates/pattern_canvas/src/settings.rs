//! Per-pass input snapshot.
use rand::RngCore;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::pattern::custom::CustomPatternRegistry;
use crate::pattern::method::MethodConfig;
use crate::pattern::params::DrawingMethodSpec;
use crate::pattern::{ElementPosition, PatternInput, Shape};
use crate::presets::{MAX_CANVAS_SIZE, MIN_CANVAS_SIZE};
use crate::render::color::Color;

/// Everything needed to generate and draw one pass.
///
/// Without a drawing method the spiral method with its defaults is used.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
#[derive(Clone, Debug, PartialEq)]
pub struct Settings {
    #[cfg_attr(feature = "serde", serde(default))]
    pub shape: Shape,
    pub color: Color,
    /// Target element count. Grid ignores it, custom procedures may return fewer.
    pub count: usize,
    pub canvas_width: u32,
    pub canvas_height: u32,
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub drawing_method: Option<DrawingMethodSpec>,
}

impl Default for Settings {
    fn default() -> Self {
        Self::new(800, 600)
    }
}

impl Settings {
    /// Thirty blue circles on a `width × height` canvas.
    pub fn new(canvas_width: u32, canvas_height: u32) -> Self {
        Self {
            shape: Shape::Circles,
            color: Color::rgb(0x34, 0x98, 0xdb),
            count: 30,
            canvas_width,
            canvas_height,
            drawing_method: None,
        }
    }

    pub fn with_shape(mut self, shape: Shape) -> Self {
        self.shape = shape;
        self
    }

    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    /// Sets the color from a CSS hex string.
    pub fn with_color_hex(self, hex: &str) -> Result<Self> {
        Ok(self.with_color(Color::from_hex(hex)?))
    }

    pub fn with_count(mut self, count: usize) -> Self {
        self.count = count;
        self
    }

    pub fn with_canvas_size(mut self, width: u32, height: u32) -> Self {
        self.canvas_width = width;
        self.canvas_height = height;
        self
    }

    pub fn with_method(mut self, method: DrawingMethodSpec) -> Self {
        self.drawing_method = Some(method);
        self
    }

    /// Checks the canvas extent against the accepted size range.
    pub fn validate(&self) -> Result<()> {
        let range = MIN_CANVAS_SIZE..=MAX_CANVAS_SIZE;
        if !range.contains(&self.canvas_width) || !range.contains(&self.canvas_height) {
            return Err(Error::InvalidConfig(format!(
                "canvas size {}x{} outside {MIN_CANVAS_SIZE}..={MAX_CANVAS_SIZE}",
                self.canvas_width, self.canvas_height
            )));
        }
        Ok(())
    }

    /// The selected method, or spiral with defaults.
    pub fn method(&self) -> DrawingMethodSpec {
        self.drawing_method.clone().unwrap_or_default()
    }

    /// Typed configuration of the selected method for this canvas.
    pub fn method_config(&self) -> MethodConfig {
        MethodConfig::for_canvas(
            &self.method(),
            self.canvas_width as f64,
            self.canvas_height as f64,
        )
    }

    pub fn pattern_input(&self) -> PatternInput {
        PatternInput::new(
            self.canvas_width as f64,
            self.canvas_height as f64,
            self.count,
            self.shape,
            self.color,
        )
    }

    /// Generate the element sequence for these settings.
    pub fn generate(
        &self,
        customs: &CustomPatternRegistry,
        rng: &mut dyn RngCore,
    ) -> Vec<ElementPosition> {
        self.method_config()
            .generate(&self.pattern_input(), customs, rng)
    }
}
