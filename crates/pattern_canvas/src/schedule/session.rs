//! Owner of a surface plus everything needed to draw settings onto it.
use rand::RngCore;
use tracing::debug;

use crate::error::Result;
use crate::pattern::custom::CustomPatternRegistry;
use crate::presets::builtin_customs;
use crate::render::surface::Surface;
use crate::schedule::events::EventSink;
use crate::schedule::host::FrameQueue;
use crate::schedule::pass::{PassId, PassState};
use crate::schedule::plan::ScheduleConfig;
use crate::schedule::scheduler::{IncrementalScheduler, TickOutcome};
use crate::settings::Settings;

/// Drives passes on one surface with a cooperative frame queue.
///
/// ```
/// use pattern_canvas::prelude::*;
/// use rand::rngs::StdRng;
/// use rand::SeedableRng;
///
/// let mut session = RenderSession::new(PixelCanvas::new(200, 200), StdRng::seed_from_u64(7));
/// let mut sink = VecSink::new();
/// session.submit(&Settings::new(200, 200), &mut sink).unwrap();
/// session.run_to_completion(&mut sink);
/// assert_eq!(session.progress(), 100);
/// ```
pub struct RenderSession<S: Surface, R: RngCore> {
    surface: S,
    rng: R,
    scheduler: IncrementalScheduler,
    queue: FrameQueue,
    customs: CustomPatternRegistry,
}

impl<S: Surface, R: RngCore> RenderSession<S, R> {
    /// New session with the default pacing and the built-in custom procedures.
    pub fn new(surface: S, rng: R) -> Self {
        Self {
            surface,
            rng,
            scheduler: IncrementalScheduler::default(),
            queue: FrameQueue::new(),
            customs: builtin_customs(),
        }
    }

    /// Replaces the pacing configuration. Any running pass is dropped.
    pub fn with_schedule(mut self, config: ScheduleConfig) -> Result<Self> {
        self.scheduler = IncrementalScheduler::try_new(config)?;
        self.queue = FrameQueue::new();
        Ok(self)
    }

    pub fn customs(&self) -> &CustomPatternRegistry {
        &self.customs
    }

    pub fn customs_mut(&mut self) -> &mut CustomPatternRegistry {
        &mut self.customs
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn into_surface(self) -> S {
        self.surface
    }

    pub fn scheduler(&self) -> &IncrementalScheduler {
        &self.scheduler
    }

    pub fn progress(&self) -> u8 {
        self.scheduler.progress()
    }

    pub fn is_drawing(&self) -> bool {
        self.scheduler.is_drawing()
    }

    pub fn state(&self) -> PassState {
        self.scheduler.state()
    }

    /// Ticks waiting to fire.
    pub fn pending_frames(&self) -> usize {
        self.queue.len()
    }

    /// Validate `settings`, generate its elements, clear the surface and start a pass.
    ///
    /// A pass still running is cancelled first. Invalid settings leave the current pass
    /// untouched.
    pub fn submit(&mut self, settings: &Settings, sink: &mut dyn EventSink) -> Result<PassId> {
        settings.validate()?;
        let elements = settings.generate(&self.customs, &mut self.rng);
        debug!(
            "Generated {} elements with {}.",
            elements.len(),
            settings.method().kind
        );

        self.scheduler.cancel(&mut self.queue, sink);
        self.surface.clear();
        Ok(self.scheduler.start(
            elements,
            settings.shape,
            settings.color,
            &mut self.queue,
            sink,
        ))
    }

    /// Fire the next queued tick, if any.
    pub fn pump_frame(&mut self, sink: &mut dyn EventSink) -> Option<TickOutcome> {
        let ticket = self.queue.pop()?;
        Some(
            self.scheduler
                .tick(ticket, &mut self.surface, &mut self.queue, sink),
        )
    }

    /// Fire queued ticks until none are left. Returns the number of frames pumped.
    pub fn run_to_completion(&mut self, sink: &mut dyn EventSink) -> usize {
        let mut frames = 0;
        while self.pump_frame(sink).is_some() {
            frames += 1;
        }
        frames
    }

    /// Stop the running pass. Returns `true` if one was running.
    pub fn cancel(&mut self, sink: &mut dyn EventSink) -> bool {
        self.scheduler.cancel(&mut self.queue, sink)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::pattern::params::{DrawingMethodSpec, MethodKind};
    use crate::pattern::Shape;
    use crate::render::canvas::PixelCanvas;
    use crate::render::color::Color;
    use crate::render::surface::{DrawCommand, RecordingSurface};
    use crate::schedule::events::{RenderEvent, VecSink};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn session() -> RenderSession<RecordingSurface, StdRng> {
        RenderSession::new(RecordingSurface::new(800, 600), StdRng::seed_from_u64(11))
    }

    #[test]
    fn submit_draws_every_generated_element() {
        let mut s = session();
        let mut sink = VecSink::new();
        let settings = Settings::new(800, 600).with_count(40);
        s.submit(&settings, &mut sink).unwrap();
        assert!(s.is_drawing());

        let frames = s.run_to_completion(&mut sink);
        assert_eq!(frames, 40);
        assert_eq!(s.surface().draw_count(), 40);
        assert_eq!(s.progress(), 100);
        assert_eq!(s.state(), PassState::Completed);
        assert!(matches!(
            s.surface().commands().first(),
            Some(DrawCommand::Clear)
        ));
    }

    #[test]
    fn invalid_settings_are_rejected_before_drawing() {
        let mut s = session();
        let mut sink = VecSink::new();
        let err = s.submit(&Settings::new(10, 600), &mut sink).unwrap_err();
        assert!(matches!(err, Error::InvalidConfig(_)));
        assert!(sink.is_empty());
        assert_eq!(s.pending_frames(), 0);
        assert!(s.surface().commands().is_empty());
    }

    #[test]
    fn resubmitting_mid_pass_restarts_on_a_clear_surface() {
        let mut s = session();
        let mut sink = VecSink::new();
        let first = s
            .submit(&Settings::new(800, 600).with_count(100), &mut sink)
            .unwrap();
        for _ in 0..5 {
            s.pump_frame(&mut sink);
        }

        let second = s
            .submit(
                &Settings::new(800, 600)
                    .with_count(10)
                    .with_shape(Shape::Rectangles),
                &mut sink,
            )
            .unwrap();
        assert_ne!(first, second);
        assert_eq!(s.pending_frames(), 1);
        s.run_to_completion(&mut sink);

        let commands = s.surface().commands();
        let last_clear = commands
            .iter()
            .rposition(|c| matches!(c, DrawCommand::Clear))
            .unwrap();
        let after: Vec<_> = commands[last_clear + 1..].iter().collect();
        assert_eq!(after.len(), 10);
        assert!(after.iter().all(|c| matches!(c, DrawCommand::Rect { .. })));

        assert!(sink
            .as_slice()
            .iter()
            .any(|e| matches!(e, RenderEvent::Cancelled { pass, .. } if *pass == first)));
    }

    #[test]
    fn builtin_ring_is_available_to_custom_settings() {
        let mut s = session();
        let settings = Settings::new(800, 600)
            .with_count(16)
            .with_method(DrawingMethodSpec::new(MethodKind::Custom).with_param("function", "ring"));
        s.submit(&settings, &mut ()).unwrap();
        s.run_to_completion(&mut ());
        assert_eq!(s.surface().draw_count(), 16);
    }

    #[test]
    fn empty_custom_result_completes_without_drawing() {
        let mut s = session();
        s.customs_mut().register_fn("nothing", |_, _, _, _| Ok(Vec::new()));
        let settings = Settings::new(800, 600).with_method(
            DrawingMethodSpec::new(MethodKind::Custom).with_param("function", "nothing"),
        );
        let mut sink = VecSink::new();
        s.submit(&settings, &mut sink).unwrap();
        assert_eq!(s.run_to_completion(&mut sink), 1);
        assert_eq!(s.surface().draw_count(), 0);
        assert_eq!(sink.progress(), vec![100]);
    }

    #[test]
    fn pixels_are_painted_on_a_real_canvas() {
        let canvas = PixelCanvas::with_background(200, 200, Color::WHITE);
        let mut s = RenderSession::new(canvas, StdRng::seed_from_u64(5));
        let settings = Settings::new(200, 200)
            .with_color(Color::BLACK)
            .with_method(DrawingMethodSpec::new(MethodKind::Circular).with_param("radius", 60.0));
        s.submit(&settings, &mut ()).unwrap();
        s.run_to_completion(&mut ());
        assert!(s.surface().painted_pixels() > 0);
    }

    #[test]
    fn cancel_stops_the_queue() {
        let mut s = session();
        s.submit(&Settings::default(), &mut ()).unwrap();
        assert!(s.cancel(&mut ()));
        assert_eq!(s.pending_frames(), 0);
        assert!(s.pump_frame(&mut ()).is_none());
        assert_eq!(s.state(), PassState::Cancelled);
    }

    #[test]
    fn with_schedule_validates_config() {
        let bad = ScheduleConfig::new().with_large_count_threshold(0);
        assert!(session().with_schedule(bad).is_err());
    }
}
