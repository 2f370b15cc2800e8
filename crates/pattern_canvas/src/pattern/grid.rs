//! Regular grid pattern.
use glam::DVec2;
use rand::RngCore;
use tracing::warn;

use crate::pattern::params::ParamBag;
use crate::pattern::{rand01, ElementPosition, PatternGenerator, PatternInput};

/// Upper bound on `columns` and `rows` read from parameters.
pub const MAX_GRID_AXIS: usize = 1000;

/// Upper bound on the number of cells a grid may produce.
pub const MAX_GRID_CELLS: usize = 250_000;

/// Regular `columns × rows` grid inset by one cell on every side.
///
/// The element count of the input is ignored; the grid always yields
/// `columns * rows` elements. Lines connect neighbours within a row only.
#[derive(Debug, Clone, PartialEq)]
pub struct GridPattern {
    pub columns: usize,
    pub rows: usize,
    pub offset_x: f64,
    pub offset_y: f64,
}

impl Default for GridPattern {
    fn default() -> Self {
        Self {
            columns: 5,
            rows: 5,
            offset_x: 0.0,
            offset_y: 0.0,
        }
    }
}

impl GridPattern {
    pub fn new(columns: usize, rows: usize) -> Self {
        Self {
            columns,
            rows,
            ..Default::default()
        }
    }

    pub fn with_offset(mut self, offset_x: f64, offset_y: f64) -> Self {
        self.offset_x = offset_x;
        self.offset_y = offset_y;
        self
    }

    pub fn from_params(params: &ParamBag) -> Self {
        let d = Self::default();
        Self {
            columns: params.count_or("columns", d.columns).min(MAX_GRID_AXIS),
            rows: params.count_or("rows", d.rows).min(MAX_GRID_AXIS),
            offset_x: params.number_or("offsetX", d.offset_x),
            offset_y: params.number_or("offsetY", d.offset_y),
        }
    }
}

impl PatternGenerator for GridPattern {
    fn generate(&self, input: &PatternInput, rng: &mut dyn RngCore) -> Vec<ElementPosition> {
        if input.is_degenerate() || self.columns == 0 || self.rows == 0 {
            return Vec::new();
        }

        let cells = self
            .columns
            .checked_mul(self.rows)
            .filter(|n| *n <= MAX_GRID_CELLS);
        let Some(cells) = cells else {
            warn!(
                "Grid of {}x{} exceeds {} cells; drawing nothing.",
                self.columns, self.rows, MAX_GRID_CELLS
            );
            return Vec::new();
        };

        let cell_w = input.width() / (self.columns as f64 + 1.0);
        let cell_h = input.height() / (self.rows as f64 + 1.0);
        let cell = |col: usize, row: usize| {
            DVec2::new(
                (col + 1) as f64 * cell_w + self.offset_x,
                (row + 1) as f64 * cell_h + self.offset_y,
            )
        };

        let mut out = Vec::with_capacity(cells);
        for row in 0..self.rows {
            for col in 0..self.columns {
                let p = cell(col, row);
                let end = (input.connects() && col + 1 < self.columns).then(|| cell(col + 1, row));
                let size = 10.0 + rand01(rng) * 10.0;
                out.push(ElementPosition::new(p.x, p.y, size).with_end(end));
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;
    use crate::pattern::test_support::input;
    use crate::pattern::Shape;

    #[test]
    fn four_by_two_grid_on_800_by_600() {
        let mut rng = StdRng::seed_from_u64(1);
        let grid = GridPattern::new(4, 2);
        let out = grid.generate(&input(800.0, 600.0, 8, Shape::Lines), &mut rng);

        assert_eq!(out.len(), 8);
        let xs: Vec<f64> = out[..4].iter().map(|e| e.x).collect();
        assert_eq!(xs, vec![160.0, 320.0, 480.0, 640.0]);
        assert!(out[..4].iter().all(|e| e.y == 200.0));
        assert!(out[4..].iter().all(|e| e.y == 400.0));

        // Three horizontal segments per row, none crossing rows.
        for row in out.chunks(4) {
            assert_eq!(row.iter().filter(|e| e.end.is_some()).count(), 3);
            assert!(row[3].end.is_none());
            for e in row.iter().filter_map(|e| e.end.map(|end| (e.y, end))) {
                assert_eq!(e.0, e.1.y);
            }
        }
        assert_eq!(out[0].end, Some(DVec2::new(320.0, 200.0)));
    }

    #[test]
    fn count_is_ignored() {
        let mut rng = StdRng::seed_from_u64(2);
        let out = GridPattern::default().generate(&input(500.0, 500.0, 3, Shape::Circles), &mut rng);
        assert_eq!(out.len(), 25);
        assert!(out.iter().all(|e| e.end.is_none()));
    }

    #[test]
    fn sizes_jitter_within_range() {
        let mut rng = StdRng::seed_from_u64(3);
        let out = GridPattern::default().generate(&input(500.0, 500.0, 0, Shape::Circles), &mut rng);
        assert!(out.iter().all(|e| (10.0..20.0).contains(&e.size)));
    }

    #[test]
    fn offsets_shift_every_cell() {
        let mut rng = StdRng::seed_from_u64(4);
        let grid = GridPattern::new(1, 1).with_offset(5.0, -5.0);
        let out = grid.generate(&input(100.0, 100.0, 1, Shape::Circles), &mut rng);
        assert_eq!((out[0].x, out[0].y), (55.0, 45.0));
    }

    #[test]
    fn from_params_uses_defaults_for_missing_keys() {
        let grid = GridPattern::from_params(&ParamBag::new().with("columns", 4));
        assert_eq!(grid.columns, 4);
        assert_eq!(grid.rows, 5);
    }

    #[test]
    fn huge_counts_are_clamped_from_params() {
        let params = ParamBag::new().with("columns", 1e300).with("rows", 1e5);
        let grid = GridPattern::from_params(&params);
        assert_eq!((grid.columns, grid.rows), (MAX_GRID_AXIS, MAX_GRID_AXIS));

        let mut rng = StdRng::seed_from_u64(6);
        let out = GridPattern::from_params(&ParamBag::new().with("columns", 1e300).with("rows", 1))
            .generate(&input(800.0, 600.0, 8, Shape::Lines), &mut rng);
        assert_eq!(out.len(), MAX_GRID_AXIS);
        assert!(out.iter().all(ElementPosition::is_finite));
    }

    #[test]
    fn oversized_grid_is_empty() {
        let mut rng = StdRng::seed_from_u64(7);
        let inp = input(800.0, 600.0, 8, Shape::Lines);
        assert!(GridPattern::new(usize::MAX, 2).generate(&inp, &mut rng).is_empty());
        assert!(GridPattern::new(100_000, 100_000).generate(&inp, &mut rng).is_empty());
    }

    #[test]
    fn degenerate_extent_is_empty() {
        let mut rng = StdRng::seed_from_u64(5);
        let out = GridPattern::default().generate(&input(0.0, 100.0, 1, Shape::Lines), &mut rng);
        assert!(out.is_empty());
    }
}
