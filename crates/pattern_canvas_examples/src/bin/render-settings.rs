use std::path::PathBuf;
use std::thread;
use std::time::Duration;

use pattern_canvas::prelude::*;
use pattern_canvas_examples::{init_tracing, load_settings, output_dir, save_canvas_png};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::info;

const FRAME: Duration = Duration::from_millis(16);

/// Renders a RON settings file frame by frame, logging progress every quarter.
///
/// Usage: `render-settings [path/to/settings.ron]`
fn main() -> anyhow::Result<()> {
    init_tracing();

    let path = std::env::args().nth(1).map(PathBuf::from).unwrap_or_else(|| {
        PathBuf::from(format!(
            "{}/settings/lasers-rose.ron",
            env!("CARGO_MANIFEST_DIR")
        ))
    });
    let settings = load_settings(&path)?;

    let canvas = PixelCanvas::with_background(
        settings.canvas_width,
        settings.canvas_height,
        Color::from_hex("#0b0c10")?,
    );
    let mut session = RenderSession::new(canvas, StdRng::seed_from_u64(2024));

    let mut last_quarter = None;
    let mut sink = FnSink::new(|event: RenderEvent| match event {
        RenderEvent::Progress { percent, .. } => {
            let quarter = percent / 25;
            if last_quarter != Some(quarter) {
                last_quarter = Some(quarter);
                info!("progress {percent}%");
            }
        }
        RenderEvent::Completed { drawn, elapsed, .. } => {
            info!("{drawn} elements in {:.2}s", elapsed.as_secs_f64());
        }
        _ => {}
    });

    session.submit(&settings, &mut sink)?;
    while session.pump_frame(&mut sink).is_some() {
        thread::sleep(FRAME);
    }

    let stem = path
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("settings");
    save_canvas_png(
        session.surface(),
        output_dir()?.join(format!("render-settings-{stem}.png")),
    )?;
    Ok(())
}
