//! Canvas-size normalization for size and spacing sensitive methods.

/// Reference resolution the default parameters were tuned for.
pub const BASE_RESOLUTION: (f64, f64) = (1280.0, 720.0);

/// Ratio of the canvas diagonal to the [`BASE_RESOLUTION`] diagonal.
///
/// Returns `0.0` for non-finite input so callers never scale by NaN.
pub fn size_scale_factor(width: f64, height: f64) -> f64 {
    let current = width.hypot(height);
    let base = BASE_RESOLUTION.0.hypot(BASE_RESOLUTION.1);
    let factor = current / base;
    if factor.is_finite() {
        factor
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_resolution_has_unit_scale() {
        assert!((size_scale_factor(1280.0, 720.0) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn scale_is_linear_in_the_diagonal() {
        let s = size_scale_factor(3840.0, 2160.0);
        assert!((s - 3.0).abs() < 1e-12);
        assert_eq!(size_scale_factor(0.0, 0.0), 0.0);
        assert_eq!(size_scale_factor(f64::INFINITY, 1.0), 0.0);
    }
}
