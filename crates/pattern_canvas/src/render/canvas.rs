//! CPU raster surface backed by an RGBA8 buffer.
use glam::DVec2;

use crate::render::color::Color;
use crate::render::surface::Surface;

/// A row-major RGBA8 pixel buffer implementing [`Surface`].
///
/// Coverage is decided by pixel centers; colors are composited source-over.
#[derive(Clone, Debug)]
pub struct PixelCanvas {
    pub width: u32,
    pub height: u32,
    background: Color,
    data: Vec<u8>,
}

impl PixelCanvas {
    /// Create a transparent canvas.
    pub fn new(width: u32, height: u32) -> Self {
        Self::with_background(width, height, Color::TRANSPARENT)
    }

    /// Create a canvas that clears to `background`.
    pub fn with_background(width: u32, height: u32, background: Color) -> Self {
        let len = (width as usize) * (height as usize);
        let mut data = Vec::with_capacity(len * 4);
        for _ in 0..len {
            data.extend_from_slice(&background.to_array());
        }
        Self {
            width,
            height,
            background,
            data,
        }
    }

    pub fn background(&self) -> Color {
        self.background
    }

    /// Raw RGBA bytes, row-major, 4 bytes per pixel.
    pub fn as_raw(&self) -> &[u8] {
        &self.data
    }

    pub fn into_raw(self) -> Vec<u8> {
        self.data
    }

    /// Color at pixel `(x, y)`, or `None` outside the canvas.
    pub fn pixel(&self, x: u32, y: u32) -> Option<Color> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let idx = self.index(x, y);
        let p = &self.data[idx..idx + 4];
        Some(Color::rgba(p[0], p[1], p[2], p[3]))
    }

    /// Count pixels that differ from the background.
    pub fn painted_pixels(&self) -> usize {
        let bg = self.background.to_array();
        self.data.chunks_exact(4).filter(|p| *p != bg).count()
    }

    #[inline]
    fn index(&self, x: u32, y: u32) -> usize {
        ((y as usize) * (self.width as usize) + x as usize) * 4
    }

    fn blend(&mut self, x: u32, y: u32, color: Color) {
        let idx = self.index(x, y);
        let dst = &mut self.data[idx..idx + 4];

        if color.a == 255 {
            dst.copy_from_slice(&color.to_array());
            return;
        }
        if color.a == 0 {
            return;
        }

        let sa = color.a as f32 / 255.0;
        let da = dst[3] as f32 / 255.0;
        let out_a = sa + da * (1.0 - sa);
        let mix = |s: u8, d: u8| -> u8 {
            let v = (s as f32 * sa + d as f32 * da * (1.0 - sa)) / out_a;
            v.round().clamp(0.0, 255.0) as u8
        };
        dst[0] = mix(color.r, dst[0]);
        dst[1] = mix(color.g, dst[1]);
        dst[2] = mix(color.b, dst[2]);
        dst[3] = (out_a * 255.0).round().clamp(0.0, 255.0) as u8;
    }

    /// Pixel index range whose centers may fall inside `[lo, hi]` along one axis.
    fn span(lo: f64, hi: f64, limit: u32) -> Option<(u32, u32)> {
        if limit == 0 || !lo.is_finite() || !hi.is_finite() || hi < lo {
            return None;
        }
        let start = (lo - 0.5).ceil().max(0.0);
        let end = (hi - 0.5).floor().min(limit as f64 - 1.0);
        if end < start {
            return None;
        }
        Some((start as u32, end as u32))
    }
}

impl Surface for PixelCanvas {
    fn extent(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    fn clear(&mut self) {
        let bg = self.background.to_array();
        for px in self.data.chunks_exact_mut(4) {
            px.copy_from_slice(&bg);
        }
    }

    fn fill_circle(&mut self, center: DVec2, radius: f64, color: Color) {
        if radius.is_nan() || radius <= 0.0 {
            return;
        }
        let Some((x0, x1)) = Self::span(center.x - radius, center.x + radius, self.width) else {
            return;
        };
        let Some((y0, y1)) = Self::span(center.y - radius, center.y + radius, self.height) else {
            return;
        };

        let r2 = radius * radius;
        for y in y0..=y1 {
            let dy = y as f64 + 0.5 - center.y;
            for x in x0..=x1 {
                let dx = x as f64 + 0.5 - center.x;
                if dx * dx + dy * dy <= r2 {
                    self.blend(x, y, color);
                }
            }
        }
    }

    fn fill_rect(&mut self, min: DVec2, size: DVec2, color: Color) {
        if size.is_nan() || size.x <= 0.0 || size.y <= 0.0 {
            return;
        }
        let max = min + size;
        let Some((x0, x1)) = Self::span(min.x, max.x, self.width) else {
            return;
        };
        let Some((y0, y1)) = Self::span(min.y, max.y, self.height) else {
            return;
        };

        for y in y0..=y1 {
            let cy = y as f64 + 0.5;
            if cy >= max.y {
                continue;
            }
            for x in x0..=x1 {
                if x as f64 + 0.5 < max.x {
                    self.blend(x, y, color);
                }
            }
        }
    }

    fn stroke_line(&mut self, from: DVec2, to: DVec2, width: f64, color: Color) {
        let d = to - from;
        let len2 = d.length_squared();
        if width.is_nan() || width <= 0.0 || len2.is_nan() || len2 <= 0.0 {
            return;
        }
        let half = width * 0.5;
        let len = len2.sqrt();

        let lo = from.min(to) - DVec2::splat(half);
        let hi = from.max(to) + DVec2::splat(half);
        let Some((x0, x1)) = Self::span(lo.x, hi.x, self.width) else {
            return;
        };
        let Some((y0, y1)) = Self::span(lo.y, hi.y, self.height) else {
            return;
        };

        for y in y0..=y1 {
            for x in x0..=x1 {
                let p = DVec2::new(x as f64 + 0.5, y as f64 + 0.5) - from;
                // Butt caps: only the slab between the two endpoints is covered.
                let t = p.dot(d) / len2;
                if !(0.0..=1.0).contains(&t) {
                    continue;
                }
                let dist = p.perp_dot(d).abs() / len;
                if dist <= half {
                    self.blend(x, y, color);
                }
            }
        }
    }
}
