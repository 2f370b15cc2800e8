//! Incremental drawing of element sequences across host ticks.
//!
//! A pass draws a bounded batch per tick so that a pass of any size takes roughly
//! [`ScheduleConfig::target_duration`]. Restarting cancels the running pass; its queued
//! tickets are rejected before touching the surface.
pub mod events;
pub mod host;
pub mod pass;
pub mod plan;
pub mod scheduler;
pub mod session;

pub use events::{EventSink, FnSink, MultiSink, RenderEvent, RenderEventKind, VecSink};
pub use host::{FrameQueue, TickHost, TickTicket};
pub use pass::{PassId, PassState, RenderPass};
pub use plan::{BatchPlan, ScheduleConfig};
pub use scheduler::{IncrementalScheduler, TickOutcome};
pub use session::RenderSession;
