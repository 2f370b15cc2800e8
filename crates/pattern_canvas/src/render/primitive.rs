//! Drawing a single element as a primitive.
use glam::DVec2;

use crate::pattern::{ElementPosition, Shape};
use crate::render::color::Color;
use crate::render::surface::Surface;

/// Draws `element` onto `surface` as the given shape in a single color.
///
/// Lines need an end point; elements without one are skipped silently. Stroke width is
/// a third of the element size.
pub fn draw_element(
    surface: &mut dyn Surface,
    element: &ElementPosition,
    shape: Shape,
    color: Color,
) {
    match shape {
        Shape::Circles => surface.fill_circle(element.position(), element.size, color),
        Shape::Rectangles => {
            let half = element.size / 2.0;
            surface.fill_rect(
                DVec2::new(element.x - half, element.y - half),
                DVec2::splat(element.size),
                color,
            );
        }
        Shape::Lines => {
            if let Some(end) = element.end {
                surface.stroke_line(element.position(), end, element.size / 3.0, color);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::surface::{DrawCommand, RecordingSurface};

    const RED: Color = Color::rgb(255, 0, 0);

    #[test]
    fn circle_uses_size_as_radius() {
        let mut s = RecordingSurface::new(100, 100);
        draw_element(&mut s, &ElementPosition::new(10.0, 20.0, 5.0), Shape::Circles, RED);
        assert_eq!(
            s.commands(),
            &[DrawCommand::Circle {
                center: DVec2::new(10.0, 20.0),
                radius: 5.0,
                color: RED,
            }]
        );
    }

    #[test]
    fn rectangle_is_centered_on_the_element() {
        let mut s = RecordingSurface::new(100, 100);
        draw_element(&mut s, &ElementPosition::new(10.0, 20.0, 4.0), Shape::Rectangles, RED);
        assert_eq!(
            s.commands(),
            &[DrawCommand::Rect {
                min: DVec2::new(8.0, 18.0),
                size: DVec2::new(4.0, 4.0),
                color: RED,
            }]
        );
    }

    #[test]
    fn line_needs_an_end_point() {
        let mut s = RecordingSurface::new(100, 100);
        let open = ElementPosition::new(1.0, 1.0, 9.0);
        draw_element(&mut s, &open, Shape::Lines, RED);
        assert_eq!(s.draw_count(), 0);

        let segment = open.with_end(Some(DVec2::new(5.0, 1.0)));
        draw_element(&mut s, &segment, Shape::Lines, RED);
        assert_eq!(
            s.commands(),
            &[DrawCommand::Line {
                from: DVec2::new(1.0, 1.0),
                to: DVec2::new(5.0, 1.0),
                width: 3.0,
                color: RED,
            }]
        );
    }
}
