//! Event types and sinks for observing render passes.
//!
//! This module defines [`RenderEvent`] and a set of sinks to emit, collect, or forward
//! events while a pass is driven by [`crate::schedule::scheduler::IncrementalScheduler`]
//! or [`crate::schedule::session::RenderSession`].
use std::time::Duration;

use crate::schedule::pass::PassId;

/// Describes events emitted while rendering.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq)]
pub enum RenderEvent {
    /// Emitted when a pass is created.
    PassStarted {
        pass: PassId,
        /// Number of elements to draw.
        elements: usize,
        /// Elements drawn per tick.
        batch_size: usize,
    },

    /// Emitted at the start of every live tick with the start-of-tick position, and once
    /// more with `100` on completion.
    Progress {
        pass: PassId,
        /// Percentage in `[0, 100]`.
        percent: u8,
    },

    /// Emitted after a tick drew its batch.
    BatchDrawn {
        pass: PassId,
        /// Index of the first element in the batch.
        start: usize,
        /// Elements drawn in this tick.
        count: usize,
    },

    /// Emitted once every element of the pass has been drawn.
    Completed {
        pass: PassId,
        /// Elements drawn by the pass.
        drawn: usize,
        /// Wall-clock time since the pass started.
        elapsed: Duration,
    },

    /// Emitted when a running pass is superseded or cancelled.
    Cancelled {
        pass: PassId,
        /// Elements drawn before cancellation.
        drawn: usize,
    },
}

/// Discriminant of [`RenderEvent`] used for filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RenderEventKind {
    PassStarted,
    Progress,
    BatchDrawn,
    Completed,
    Cancelled,
}

impl RenderEvent {
    pub fn kind(&self) -> RenderEventKind {
        match self {
            RenderEvent::PassStarted { .. } => RenderEventKind::PassStarted,
            RenderEvent::Progress { .. } => RenderEventKind::Progress,
            RenderEvent::BatchDrawn { .. } => RenderEventKind::BatchDrawn,
            RenderEvent::Completed { .. } => RenderEventKind::Completed,
            RenderEvent::Cancelled { .. } => RenderEventKind::Cancelled,
        }
    }

    pub fn pass(&self) -> PassId {
        match self {
            RenderEvent::PassStarted { pass, .. }
            | RenderEvent::Progress { pass, .. }
            | RenderEvent::BatchDrawn { pass, .. }
            | RenderEvent::Completed { pass, .. }
            | RenderEvent::Cancelled { pass, .. } => *pass,
        }
    }
}

/// A generic event sink that accepts [`RenderEvent`]s.
pub trait EventSink {
    fn send(&mut self, event: RenderEvent);

    /// Whether events of `kind` should be built and sent at all.
    #[inline]
    fn wants(&self, _kind: RenderEventKind) -> bool {
        true
    }
}

/// A no-op event sink.
impl EventSink for () {
    #[inline]
    fn send(&mut self, _event: RenderEvent) {}

    #[inline]
    fn wants(&self, _kind: RenderEventKind) -> bool {
        false
    }
}

/// An event sink that forwards to a user-provided closure.
pub struct FnSink<F>
where
    F: FnMut(RenderEvent),
{
    f: F,
}

impl<F> FnSink<F>
where
    F: FnMut(RenderEvent),
{
    pub fn new(f: F) -> Self {
        Self { f }
    }
}

impl<F> EventSink for FnSink<F>
where
    F: FnMut(RenderEvent),
{
    #[inline]
    fn send(&mut self, event: RenderEvent) {
        (self.f)(event);
    }
}

/// An event sink that collects all events in a `Vec`.
#[derive(Default)]
pub struct VecSink {
    events: Vec<RenderEvent>,
}

impl VecSink {
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    pub fn into_inner(self) -> Vec<RenderEvent> {
        self.events
    }

    pub fn as_slice(&self) -> &[RenderEvent] {
        &self.events
    }

    pub fn clear(&mut self) {
        self.events.clear();
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Progress percentages in emission order.
    pub fn progress(&self) -> Vec<u8> {
        self.events
            .iter()
            .filter_map(|e| match e {
                RenderEvent::Progress { percent, .. } => Some(*percent),
                _ => None,
            })
            .collect()
    }
}

impl EventSink for VecSink {
    #[inline]
    fn send(&mut self, event: RenderEvent) {
        self.events.push(event);
    }
}

/// Fan-out sink that forwards each event to all contained sinks.
pub struct MultiSink<S: EventSink> {
    pub(crate) sinks: Vec<S>,
}

impl<S: EventSink> MultiSink<S> {
    pub fn new() -> Self {
        Self { sinks: Vec::new() }
    }

    pub fn with_sinks(sinks: Vec<S>) -> Self {
        Self { sinks }
    }

    pub fn push(&mut self, sink: S) {
        self.sinks.push(sink);
    }

    pub fn into_inner(self) -> Vec<S> {
        self.sinks
    }
}

impl<S: EventSink> Default for MultiSink<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: EventSink> EventSink for MultiSink<S> {
    fn send(&mut self, event: RenderEvent) {
        let Some((last, rest)) = self.sinks.split_last_mut() else {
            return;
        };
        for sink in rest {
            if sink.wants(event.kind()) {
                sink.send(event.clone());
            }
        }
        if last.wants(event.kind()) {
            last.send(event);
        }
    }

    fn wants(&self, kind: RenderEventKind) -> bool {
        self.sinks.iter().any(|s| s.wants(kind))
    }
}
