//! Canvas size presets, size limits, method defaults and style presets.
use std::f64::consts::TAU;

use crate::pattern::custom::{CustomPatternRegistry, CustomPoint};
use crate::pattern::method::CUSTOM_FUNCTION_KEY;
use crate::pattern::params::{DrawingMethodSpec, MethodKind, ParamBag};
use crate::pattern::Shape;
use crate::render::color::Color;
use crate::settings::Settings;

/// Smallest accepted canvas edge in pixels.
pub const MIN_CANVAS_SIZE: u32 = 50;
/// Largest accepted canvas edge in pixels.
pub const MAX_CANVAS_SIZE: u32 = 5000;

/// Name of the built-in custom procedure placing elements on a ring.
pub const RING_PROCEDURE: &str = "ring";

/// A named canvas size.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SizePreset {
    pub name: &'static str,
    pub width: u32,
    pub height: u32,
}

pub const SIZE_PRESETS: [SizePreset; 7] = [
    SizePreset {
        name: "A4 Landscape",
        width: 842,
        height: 595,
    },
    SizePreset {
        name: "A4 Portrait",
        width: 595,
        height: 842,
    },
    SizePreset {
        name: "A3 Landscape",
        width: 1191,
        height: 842,
    },
    SizePreset {
        name: "A3 Portrait",
        width: 842,
        height: 1191,
    },
    SizePreset {
        name: "Square",
        width: 800,
        height: 800,
    },
    SizePreset {
        name: "HD",
        width: 1280,
        height: 720,
    },
    SizePreset {
        name: "4K",
        width: 3840,
        height: 2160,
    },
];

/// Look up a size preset by case-insensitive name.
pub fn find_size_preset(name: &str) -> Option<SizePreset> {
    SIZE_PRESETS
        .iter()
        .find(|p| p.name.eq_ignore_ascii_case(name.trim()))
        .copied()
}

/// The preset matching `width × height` exactly, if any.
pub fn size_preset_for(width: u32, height: u32) -> Option<SizePreset> {
    SIZE_PRESETS
        .iter()
        .find(|p| p.width == width && p.height == height)
        .copied()
}

/// Documented default parameters of `kind`.
pub fn default_params(kind: MethodKind) -> ParamBag {
    let bag = ParamBag::new();
    match kind {
        MethodKind::Grid => bag
            .with("columns", 5.0)
            .with("rows", 5.0)
            .with("offsetX", 0.0)
            .with("offsetY", 0.0),
        MethodKind::Sine => bag
            .with("amplitude", 100.0)
            .with("frequency", 0.05)
            .with("phase", 0.0),
        MethodKind::Spiral => bag
            .with("spacing", 10.0)
            .with("rotation", 0.1)
            .with("expansion", 0.2),
        MethodKind::Circular => bag
            .with("radius", 150.0)
            .with("radiusVariation", 0.0)
            .with("angleOffset", 0.0),
        MethodKind::Fibonacci => bag
            .with("scale", 5.0)
            .with("turns", 12.0)
            .with("rotation", 0.0),
        MethodKind::Lissajous => bag
            .with("a", 3.0)
            .with("b", 4.0)
            .with("delta", 0.0)
            .with("scale", 150.0),
        MethodKind::Rose => bag
            .with("a", 1.0)
            .with("b", 1.0)
            .with("n", 2.0)
            .with("k", 1.0),
        MethodKind::Phyllotaxis => bag.with("n", 1.0).with("k", 1.0),
        MethodKind::Custom => bag.with(CUSTOM_FUNCTION_KEY, RING_PROCEDURE),
    }
}

/// A method spec carrying the documented defaults of `kind`.
pub fn default_method(kind: MethodKind) -> DrawingMethodSpec {
    DrawingMethodSpec::new(kind).with_params(default_params(kind))
}

/// Registry holding the built-in custom procedures.
///
/// `ring` places `count` elements on a circle of radius `min(w, h) / 3` around the
/// center with sizes `10 + 5·sin(i / 2)`.
pub fn builtin_customs() -> CustomPatternRegistry {
    let mut registry = CustomPatternRegistry::new();
    registry.register_fn(RING_PROCEDURE, |width, height, count, _color| {
        let radius = width.min(height) / 3.0;
        let step = TAU / count.max(1) as f64;
        Ok((0..count)
            .map(|i| {
                let angle = i as f64 * step;
                CustomPoint::sized(
                    width / 2.0 + radius * angle.cos(),
                    height / 2.0 + radius * angle.sin(),
                    10.0 + 5.0 * (i as f64 * 0.5).sin(),
                )
            })
            .collect())
    });
    registry
}

/// A named settings snapshot.
#[derive(Clone, Debug)]
pub struct StylePreset {
    pub name: &'static str,
    pub settings: Settings,
}

/// Ready-made looks on an 800×600 canvas.
pub fn style_presets() -> Vec<StylePreset> {
    let preset = |name, shape, color, count| StylePreset {
        name,
        settings: Settings::new(800, 600)
            .with_shape(shape)
            .with_color(color)
            .with_count(count),
    };
    vec![
        preset("Bubbles", Shape::Circles, Color::rgb(0x34, 0x98, 0xdb), 30),
        preset("Neon Grid", Shape::Rectangles, Color::rgb(0xff, 0x00, 0xff), 50),
        preset("Lasers", Shape::Lines, Color::rgb(0xff, 0x33, 0x00), 70),
        preset("Starfield", Shape::Circles, Color::WHITE, 100),
    ]
}
