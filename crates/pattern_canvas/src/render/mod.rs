//! Surfaces, colors, and the primitive renderer.
pub mod canvas;
pub mod color;
pub mod primitive;
pub mod surface;

pub use canvas::PixelCanvas;
pub use color::Color;
pub use primitive::draw_element;
pub use surface::{DrawCommand, RecordingSurface, Surface};
