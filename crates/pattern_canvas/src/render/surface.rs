//! Drawing surface trait and a recording implementation.
//!
//! This module defines how a 2D target integrates with the renderer:
//! - Provide custom targets by implementing [`Surface`].
//! - Inspect what was drawn with [`RecordingSurface`].
use glam::DVec2;

use crate::render::color::Color;

/// A mutable 2D drawing target in pixel coordinates, origin at the top-left.
///
/// Implementors clip anything outside their extent.
pub trait Surface {
    /// Width and height in pixels.
    fn extent(&self) -> (u32, u32);

    /// Reset every pixel to the surface's background.
    fn clear(&mut self);

    /// Fill a disc centered at `center`.
    fn fill_circle(&mut self, center: DVec2, radius: f64, color: Color);

    /// Fill an axis-aligned rectangle with top-left corner `min`.
    fn fill_rect(&mut self, min: DVec2, size: DVec2, color: Color);

    /// Stroke a straight segment with butt caps.
    fn stroke_line(&mut self, from: DVec2, to: DVec2, width: f64, color: Color);
}

/// A single primitive call captured by [`RecordingSurface`].
#[derive(Clone, Debug, PartialEq)]
pub enum DrawCommand {
    Clear,
    Circle {
        center: DVec2,
        radius: f64,
        color: Color,
    },
    Rect {
        min: DVec2,
        size: DVec2,
        color: Color,
    },
    Line {
        from: DVec2,
        to: DVec2,
        width: f64,
        color: Color,
    },
}

/// Surface that records calls instead of rasterizing them.
#[derive(Clone, Debug, Default)]
pub struct RecordingSurface {
    width: u32,
    height: u32,
    commands: Vec<DrawCommand>,
}

impl RecordingSurface {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            commands: Vec::new(),
        }
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Number of recorded primitives, ignoring clears.
    pub fn draw_count(&self) -> usize {
        self.commands
            .iter()
            .filter(|c| !matches!(c, DrawCommand::Clear))
            .count()
    }

    pub fn into_inner(self) -> Vec<DrawCommand> {
        self.commands
    }
}

impl Surface for RecordingSurface {
    fn extent(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    fn clear(&mut self) {
        self.commands.push(DrawCommand::Clear);
    }

    fn fill_circle(&mut self, center: DVec2, radius: f64, color: Color) {
        self.commands.push(DrawCommand::Circle {
            center,
            radius,
            color,
        });
    }

    fn fill_rect(&mut self, min: DVec2, size: DVec2, color: Color) {
        self.commands.push(DrawCommand::Rect { min, size, color });
    }

    fn stroke_line(&mut self, from: DVec2, to: DVec2, width: f64, color: Color) {
        self.commands.push(DrawCommand::Line {
            from,
            to,
            width,
            color,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recording_surface_counts_primitives_only() {
        let mut s = RecordingSurface::new(10, 10);
        s.clear();
        s.fill_circle(DVec2::new(1.0, 1.0), 2.0, Color::BLACK);
        s.stroke_line(DVec2::ZERO, DVec2::ONE, 1.0, Color::WHITE);
        assert_eq!(s.commands().len(), 3);
        assert_eq!(s.draw_count(), 2);
        assert_eq!(s.extent(), (10, 10));
    }
}
