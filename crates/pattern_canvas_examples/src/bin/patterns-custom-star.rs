use std::f64::consts::TAU;

use glam::DVec2;
use pattern_canvas::prelude::*;
use pattern_canvas_examples::{init_tracing, output_dir, save_canvas_png};
use rand::rngs::StdRng;
use rand::SeedableRng;

const SIZE: u32 = 800;
const POINTS: f64 = 5.0;

fn main() -> anyhow::Result<()> {
    init_tracing();

    let mut session = RenderSession::new(
        PixelCanvas::with_background(SIZE, SIZE, Color::WHITE),
        StdRng::seed_from_u64(7),
    );

    // Star outline: radius alternates between the outer and inner ring.
    session
        .customs_mut()
        .register_fn("star", |width, height, count, _color| {
            if count < 2 {
                return Err(Error::Other("a star needs at least two points".into()));
            }
            let center = DVec2::new(width, height) * 0.5;
            let outer = width.min(height) * 0.4;
            Ok((0..count)
                .map(|i| {
                    let t = i as f64 / count as f64;
                    let wave = (t * TAU * POINTS).cos() * 0.5 + 0.5;
                    let radius = outer * (0.45 + 0.55 * wave);
                    let p = center + DVec2::from_angle(t * TAU) * radius;
                    CustomPoint::sized(p.x, p.y, 4.0 + 10.0 * wave)
                })
                .collect())
        });

    let out = output_dir()?;
    for (shape, name) in [(Shape::Circles, "circles"), (Shape::Lines, "lines")] {
        let settings = Settings::new(SIZE, SIZE)
            .with_count(250)
            .with_shape(shape)
            .with_color(Color::from_hex("#2c3e50")?)
            .with_method(
                DrawingMethodSpec::new(MethodKind::Custom).with_param("function", "star"),
            );
        session.submit(&settings, &mut ())?;
        session.run_to_completion(&mut ());
        save_canvas_png(
            session.surface(),
            out.join(format!("patterns-custom-star-{name}.png")),
        )?;
    }

    Ok(())
}
