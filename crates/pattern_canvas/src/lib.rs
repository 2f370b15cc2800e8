#![forbid(unsafe_code)]
//! pattern_canvas: Parametric pattern generators with an incremental, cancellable canvas renderer.
//!
//! Modules:
//! - pattern: generators (grid, sine, spiral, circular, fibonacci, lissajous, rose, phyllotaxis, custom)
//! - render: drawing surfaces, the RGBA pixel canvas and per-element drawing
//! - schedule: batch pacing, passes, events, the tick-driven scheduler and sessions
//! - settings / presets: per-pass input snapshots, size presets and method defaults
//!
//! For examples and docs, see README and docs.rs.
pub mod error;
pub mod pattern;
pub mod presets;
pub mod render;
pub mod schedule;
pub mod settings;

/// Convenient re-exports for common types. Import with `use pattern_canvas::prelude::*;`.
pub mod prelude {
    pub use crate::error::{Error, Result};
    pub use crate::pattern::{
        generate_positions, size_scale_factor, CircularPattern, CustomPattern,
        CustomPatternRegistry, CustomPoint, CustomProcedure, DrawingMethodSpec, ElementPosition,
        FibonacciPattern, FnProcedure, GridPattern, LissajousPattern, MethodConfig, MethodKind,
        ParamBag, ParamValue, PatternGenerator, PatternInput, PhyllotaxisPattern, RosePattern,
        Shape, SinePattern, SpiralPattern,
    };
    pub use crate::presets::{
        builtin_customs, default_method, default_params, find_size_preset, style_presets,
        SizePreset, StylePreset, MAX_CANVAS_SIZE, MIN_CANVAS_SIZE, SIZE_PRESETS,
    };
    pub use crate::render::{
        draw_element, Color, DrawCommand, PixelCanvas, RecordingSurface, Surface,
    };
    pub use crate::schedule::{
        BatchPlan, EventSink, FnSink, FrameQueue, IncrementalScheduler, MultiSink, PassId,
        PassState, RenderEvent, RenderEventKind, RenderSession, ScheduleConfig, TickHost,
        TickOutcome, TickTicket, VecSink,
    };
    pub use crate::settings::Settings;
}
