//! Pacing configuration and per-pass batch sizing.
use std::time::Duration;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Configuration for pacing a render pass across ticks.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq)]
pub struct ScheduleConfig {
    /// Wall-clock time a pass should take. Advisory only.
    pub target_duration: Duration,
    /// Expected host ticks per second.
    pub tick_rate: f64,
    /// Element count above which batches grow by `ceil(len / threshold)`.
    pub large_count_threshold: usize,
}

impl Default for ScheduleConfig {
    fn default() -> Self {
        Self {
            target_duration: Duration::from_millis(2500),
            tick_rate: 60.0,
            large_count_threshold: 1000,
        }
    }
}

impl ScheduleConfig {
    /// Creates a new [`ScheduleConfig`] with the default pacing.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the target duration.
    pub fn with_target_duration(mut self, target_duration: Duration) -> Self {
        self.target_duration = target_duration;
        self
    }

    /// Sets the tick rate.
    pub fn with_tick_rate(mut self, tick_rate: f64) -> Self {
        self.tick_rate = tick_rate;
        self
    }

    /// Sets the large-count threshold.
    pub fn with_large_count_threshold(mut self, large_count_threshold: usize) -> Self {
        self.large_count_threshold = large_count_threshold;
        self
    }

    /// Validates the configuration, returning an error if invalid.
    pub fn validate(&self) -> Result<()> {
        if self.target_duration.is_zero() {
            return Err(Error::InvalidConfig("target_duration must be > 0".into()));
        }
        if !(self.tick_rate.is_finite() && self.tick_rate > 0.0) {
            return Err(Error::InvalidConfig("tick_rate must be finite and > 0".into()));
        }
        if self.large_count_threshold == 0 {
            return Err(Error::InvalidConfig(
                "large_count_threshold must be > 0".into(),
            ));
        }
        Ok(())
    }

    /// Ticks that fit into the target duration, e.g. `2500 / (1000 / 60) = 150`.
    pub fn total_ticks(&self) -> f64 {
        // Same as `ms / (1000 / rate)`, without the inexact tick length.
        self.target_duration.as_secs_f64() * self.tick_rate
    }
}

/// Batch sizing for one pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BatchPlan {
    /// Elements in the pass.
    pub len: usize,
    /// Batch size before large-count compensation.
    pub base_batch: usize,
    /// Large-count multiplier, `1` at or below the threshold.
    pub multiplier: usize,
    /// Elements drawn per tick.
    pub batch_size: usize,
}

impl BatchPlan {
    pub fn new(len: usize, config: &ScheduleConfig) -> Self {
        let total_ticks = config.total_ticks();
        let base = if total_ticks.is_finite() && total_ticks > 0.0 {
            (len as f64 / total_ticks).ceil() as usize
        } else {
            len
        };
        let base_batch = base.max(1);

        let threshold = config.large_count_threshold.max(1);
        let multiplier = if len > threshold {
            len.div_ceil(threshold)
        } else {
            1
        };

        Self {
            len,
            base_batch,
            multiplier,
            batch_size: base_batch * multiplier,
        }
    }

    /// Ticks that draw at least one element.
    pub fn drawing_ticks(&self) -> usize {
        self.len.div_ceil(self.batch_size)
    }
}
