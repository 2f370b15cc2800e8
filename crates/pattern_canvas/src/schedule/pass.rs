//! State of a single render pass.
use std::fmt;
use std::ops::Range;
use std::time::Instant;

use crate::pattern::{ElementPosition, Shape};
use crate::render::color::Color;

/// Identifier of a render pass, unique per scheduler.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PassId(pub u64);

impl fmt::Display for PassId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "pass#{}", self.0)
    }
}

/// Lifecycle of the scheduler's current pass.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PassState {
    #[default]
    Idle,
    Running,
    Completed,
    Cancelled,
}

/// Elements of one pass plus the drawing cursor.
#[derive(Debug)]
pub struct RenderPass {
    pub id: PassId,
    pub elements: Vec<ElementPosition>,
    pub shape: Shape,
    pub color: Color,
    pub cursor: usize,
    pub batch_size: usize,
    pub started_at: Instant,
    pub cancelled: bool,
}

impl RenderPass {
    pub fn new(
        id: PassId,
        elements: Vec<ElementPosition>,
        shape: Shape,
        color: Color,
        batch_size: usize,
    ) -> Self {
        Self {
            id,
            elements,
            shape,
            color,
            cursor: 0,
            batch_size: batch_size.max(1),
            started_at: Instant::now(),
            cancelled: false,
        }
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn is_finished(&self) -> bool {
        self.cursor >= self.elements.len()
    }

    /// True while the pass may still draw.
    pub fn is_live(&self) -> bool {
        !self.cancelled && !self.is_finished()
    }

    /// `round(cursor / len · 100)`; an empty pass counts as complete.
    pub fn progress_percent(&self) -> u8 {
        let len = self.elements.len();
        if len == 0 {
            return 100;
        }
        let pct = (self.cursor.min(len) as f64 / len as f64 * 100.0).round();
        pct as u8
    }

    /// Index range of the next batch, clamped to the remaining elements.
    pub fn next_batch(&self) -> Range<usize> {
        let start = self.cursor.min(self.elements.len());
        let end = (start + self.batch_size).min(self.elements.len());
        start..end
    }
}
