use pattern_canvas::prelude::*;
use pattern_canvas_examples::{init_tracing, output_dir, save_canvas_png};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::info;

/// Changes settings halfway through a pass. The first pass stops drawing at once and
/// only the second one ends up on the canvas.
fn main() -> anyhow::Result<()> {
    init_tracing();

    let mut session = RenderSession::new(
        PixelCanvas::with_background(1191, 842, Color::WHITE),
        StdRng::seed_from_u64(99),
    );
    let mut sink = VecSink::new();

    let first = Settings::new(1191, 842)
        .with_count(3000)
        .with_shape(Shape::Circles)
        .with_color(Color::from_hex("#3498db")?)
        .with_method(default_method(MethodKind::Phyllotaxis));
    let second = first
        .clone()
        .with_count(360)
        .with_shape(Shape::Lines)
        .with_color(Color::from_hex("#e84393")?)
        .with_method(
            DrawingMethodSpec::new(MethodKind::Rose)
                .with_param("n", 4.0)
                .with_param("k", 5.0),
        );

    let first_id = session.submit(&first, &mut sink)?;
    let mut frames = 0;
    while session.progress() < 50 && session.pump_frame(&mut sink).is_some() {
        frames += 1;
    }
    info!("{first_id} reached {}% after {frames} frames", session.progress());

    let second_id = session.submit(&second, &mut sink)?;
    let frames = session.run_to_completion(&mut sink);
    info!("{second_id} finished after {frames} frames");

    let cancelled = sink
        .as_slice()
        .iter()
        .any(|e| matches!(e, RenderEvent::Cancelled { pass, .. } if *pass == first_id));
    anyhow::ensure!(cancelled, "{first_id} was not cancelled");

    save_canvas_png(
        session.surface(),
        output_dir()?.join("render-restart.png"),
    )?;
    Ok(())
}
