use pattern_canvas::prelude::*;
use pattern_canvas_examples::{init_tracing, output_dir, save_canvas_png};
use rand::rngs::StdRng;
use rand::SeedableRng;

const WIDTH: u32 = 1280;
const HEIGHT: u32 = 720;

fn main() -> anyhow::Result<()> {
    init_tracing();
    let out = output_dir()?;
    let background = Color::from_hex("#111418")?;

    for (kind, shape, color) in gallery() {
        let settings = Settings::new(WIDTH, HEIGHT)
            .with_count(if kind == MethodKind::Phyllotaxis { 600 } else { 120 })
            .with_shape(shape)
            .with_color(Color::from_hex(color)?)
            .with_method(default_method(kind));

        let canvas = PixelCanvas::with_background(WIDTH, HEIGHT, background);
        let mut session = RenderSession::new(canvas, StdRng::seed_from_u64(42));
        session.submit(&settings, &mut ())?;
        session.run_to_completion(&mut ());

        let path = out.join(format!("patterns-gallery-{kind}-{shape}.png"));
        save_canvas_png(session.surface(), path)?;
    }

    Ok(())
}

fn gallery() -> Vec<(MethodKind, Shape, &'static str)> {
    vec![
        (MethodKind::Grid, Shape::Rectangles, "#ff00ff"),
        (MethodKind::Grid, Shape::Lines, "#ff00ff"),
        (MethodKind::Sine, Shape::Lines, "#ff3300"),
        (MethodKind::Spiral, Shape::Circles, "#3498db"),
        (MethodKind::Spiral, Shape::Lines, "#3498db"),
        (MethodKind::Circular, Shape::Lines, "#00cc66"),
        (MethodKind::Fibonacci, Shape::Circles, "#f1c40f"),
        (MethodKind::Lissajous, Shape::Lines, "#e67e22"),
        (MethodKind::Rose, Shape::Lines, "#e84393"),
        (MethodKind::Phyllotaxis, Shape::Circles, "#ffffff"),
        (MethodKind::Phyllotaxis, Shape::Lines, "#ffffff"),
        (MethodKind::Custom, Shape::Circles, "#9b59b6"),
    ]
}
