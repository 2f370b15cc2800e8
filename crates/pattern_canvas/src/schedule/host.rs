//! Host-side tick abstraction.
//!
//! The scheduler never loops on its own. After each batch it asks a [`TickHost`] for
//! another callback, the way a browser is asked for the next animation frame. The host
//! later hands the [`TickTicket`] back to
//! [`IncrementalScheduler::tick`](crate::schedule::scheduler::IncrementalScheduler::tick).
use std::collections::VecDeque;

use crate::schedule::pass::PassId;

/// A scheduled callback for one pass.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TickTicket {
    pub pass: PassId,
}

/// Something that can schedule a future tick.
pub trait TickHost {
    fn request_tick(&mut self, ticket: TickTicket);

    /// Drop queued tickets of `pass`. Hosts that cannot revoke callbacks may ignore this;
    /// the scheduler rejects stale tickets anyway.
    fn cancel_ticks(&mut self, _pass: PassId) {}
}

/// FIFO of pending tickets, drained one per frame.
#[derive(Debug, Default)]
pub struct FrameQueue {
    pending: VecDeque<TickTicket>,
}

impl FrameQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Next ticket to fire, if any.
    pub fn pop(&mut self) -> Option<TickTicket> {
        self.pending.pop_front()
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}

impl TickHost for FrameQueue {
    fn request_tick(&mut self, ticket: TickTicket) {
        self.pending.push_back(ticket);
    }

    fn cancel_ticks(&mut self, pass: PassId) {
        self.pending.retain(|t| t.pass != pass);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frame_queue_is_fifo_and_revocable() {
        let mut q = FrameQueue::new();
        q.request_tick(TickTicket { pass: PassId(1) });
        q.request_tick(TickTicket { pass: PassId(2) });
        q.request_tick(TickTicket { pass: PassId(1) });
        q.cancel_ticks(PassId(1));
        assert_eq!(q.len(), 1);
        assert_eq!(q.pop(), Some(TickTicket { pass: PassId(2) }));
        assert!(q.is_empty());
    }
}
