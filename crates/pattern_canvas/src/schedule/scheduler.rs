//! Incremental, cancellable drawing of an element sequence across host ticks.
use tracing::{debug, info};

use crate::error::Result;
use crate::pattern::{ElementPosition, Shape};
use crate::render::color::Color;
use crate::render::primitive::draw_element;
use crate::render::surface::Surface;
use crate::schedule::events::{EventSink, RenderEvent, RenderEventKind};
use crate::schedule::host::{TickHost, TickTicket};
use crate::schedule::pass::{PassId, PassState, RenderPass};
use crate::schedule::plan::{BatchPlan, ScheduleConfig};

/// Result of handing a ticket to [`IncrementalScheduler::tick`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TickOutcome {
    /// The ticket belongs to a superseded, cancelled, or finished pass. Nothing was drawn.
    Stale,
    /// A batch was drawn and another tick was requested.
    Drew {
        start: usize,
        count: usize,
        progress: u8,
    },
    /// The pass finished during this tick; no further tick was requested.
    Completed { drawn: usize },
}

/// Draws one pass at a time, a bounded batch per tick.
///
/// Starting a new pass cancels the running one; tickets of the old pass that still
/// fire are rejected before they can touch the surface.
#[derive(Debug)]
pub struct IncrementalScheduler {
    config: ScheduleConfig,
    active: Option<RenderPass>,
    state: PassState,
    progress: u8,
    next_id: u64,
}

impl Default for IncrementalScheduler {
    fn default() -> Self {
        Self::new(ScheduleConfig::default())
    }
}

impl IncrementalScheduler {
    /// Scheduler with `config` as given. Degenerate pacing still draws every element,
    /// at worst in a single tick; use [`Self::try_new`] to reject it instead.
    pub fn new(config: ScheduleConfig) -> Self {
        Self {
            config,
            active: None,
            state: PassState::Idle,
            progress: 0,
            next_id: 1,
        }
    }

    pub fn try_new(config: ScheduleConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::new(config))
    }

    pub fn config(&self) -> &ScheduleConfig {
        &self.config
    }

    pub fn state(&self) -> PassState {
        self.state
    }

    /// Last reported progress in `[0, 100]`.
    pub fn progress(&self) -> u8 {
        self.progress
    }

    /// True while a pass has ticks outstanding.
    pub fn is_drawing(&self) -> bool {
        self.state == PassState::Running
    }

    /// Id of the most recent pass, whatever its state.
    pub fn current_pass(&self) -> Option<PassId> {
        self.active.as_ref().map(|p| p.id)
    }

    /// Begin drawing `elements`, superseding any running pass.
    pub fn start(
        &mut self,
        elements: Vec<ElementPosition>,
        shape: Shape,
        color: Color,
        host: &mut dyn TickHost,
        sink: &mut dyn EventSink,
    ) -> PassId {
        self.cancel(host, sink);

        let plan = BatchPlan::new(elements.len(), &self.config);
        let id = PassId(self.next_id);
        self.next_id += 1;

        info!(
            "Drawing {} elements with batch size {}.",
            plan.len, plan.batch_size
        );

        self.active = Some(RenderPass::new(id, elements, shape, color, plan.batch_size));
        self.state = PassState::Running;
        self.progress = 0;

        if sink.wants(RenderEventKind::PassStarted) {
            sink.send(RenderEvent::PassStarted {
                pass: id,
                elements: plan.len,
                batch_size: plan.batch_size,
            });
        }
        host.request_tick(TickTicket { pass: id });
        id
    }

    /// Cancel the running pass, if any. Returns `true` if a pass was cancelled.
    pub fn cancel(&mut self, host: &mut dyn TickHost, sink: &mut dyn EventSink) -> bool {
        let Some(pass) = self.active.as_mut() else {
            return false;
        };
        if self.state != PassState::Running || pass.cancelled {
            return false;
        }

        pass.cancelled = true;
        self.state = PassState::Cancelled;
        host.cancel_ticks(pass.id);
        debug!(
            "Cancelled {} after {} of {} elements.",
            pass.id,
            pass.cursor,
            pass.len()
        );
        if sink.wants(RenderEventKind::Cancelled) {
            sink.send(RenderEvent::Cancelled {
                pass: pass.id,
                drawn: pass.cursor,
            });
        }
        true
    }

    /// Run one tick for `ticket`: draw the next batch or finish the pass.
    pub fn tick(
        &mut self,
        ticket: TickTicket,
        surface: &mut dyn Surface,
        host: &mut dyn TickHost,
        sink: &mut dyn EventSink,
    ) -> TickOutcome {
        let running = self.state == PassState::Running;
        let Some(pass) = self.active.as_mut().filter(|p| p.id == ticket.pass) else {
            debug!("Ignoring tick for superseded {}.", ticket.pass);
            return TickOutcome::Stale;
        };
        if pass.cancelled || !running {
            debug!("Ignoring tick for inactive {}.", ticket.pass);
            return TickOutcome::Stale;
        }

        if pass.is_finished() {
            let drawn = finish(pass, sink);
            self.progress = 100;
            self.state = PassState::Completed;
            return TickOutcome::Completed { drawn };
        }

        let progress = pass.progress_percent();
        if sink.wants(RenderEventKind::Progress) {
            sink.send(RenderEvent::Progress {
                pass: pass.id,
                percent: progress,
            });
        }

        let batch = pass.next_batch();
        for element in &pass.elements[batch.clone()] {
            draw_element(surface, element, pass.shape, pass.color);
        }
        pass.cursor = batch.end;

        if sink.wants(RenderEventKind::BatchDrawn) {
            sink.send(RenderEvent::BatchDrawn {
                pass: pass.id,
                start: batch.start,
                count: batch.len(),
            });
        }

        if pass.is_finished() {
            let drawn = finish(pass, sink);
            self.progress = 100;
            self.state = PassState::Completed;
            return TickOutcome::Completed { drawn };
        }

        host.request_tick(ticket);
        self.progress = progress;
        TickOutcome::Drew {
            start: batch.start,
            count: batch.len(),
            progress,
        }
    }
}

fn finish(pass: &RenderPass, sink: &mut dyn EventSink) -> usize {
    let elapsed = pass.started_at.elapsed();
    info!("Drawing completed in {}ms.", elapsed.as_millis());

    if sink.wants(RenderEventKind::Progress) {
        sink.send(RenderEvent::Progress {
            pass: pass.id,
            percent: 100,
        });
    }
    if sink.wants(RenderEventKind::Completed) {
        sink.send(RenderEvent::Completed {
            pass: pass.id,
            drawn: pass.cursor,
            elapsed,
        });
    }
    pass.cursor
}
