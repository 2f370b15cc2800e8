use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use anyhow::Context;
use image::{ImageBuffer, Rgba};
use pattern_canvas::prelude::*;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Registry};

static TRACING: OnceLock<()> = OnceLock::new();

/// Installs a formatting subscriber filtered by `RUST_LOG`, defaulting to `info`.
///
/// Calling it more than once is harmless.
pub fn init_tracing() {
    if TRACING.set(()).is_err() {
        return;
    }
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let fmt_layer = tracing_subscriber::fmt::layer().with_target(false);
    Registry::default().with(filter).with(fmt_layer).init();
}

/// Directory the binaries write into: `$PATTERN_CANVAS_OUT` or `./out`.
pub fn output_dir() -> anyhow::Result<PathBuf> {
    let dir = std::env::var_os("PATTERN_CANVAS_OUT")
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("out"));
    std::fs::create_dir_all(&dir)
        .with_context(|| format!("creating output directory {}", dir.display()))?;
    Ok(dir)
}

/// Writes the canvas as an 8-bit RGBA PNG.
pub fn save_canvas_png(canvas: &PixelCanvas, path: impl AsRef<Path>) -> anyhow::Result<()> {
    let path = path.as_ref();
    let img: ImageBuffer<Rgba<u8>, Vec<u8>> =
        ImageBuffer::from_raw(canvas.width, canvas.height, canvas.as_raw().to_vec())
            .context("canvas buffer does not match its extent")?;
    img.save(path)
        .with_context(|| format!("writing {}", path.display()))?;
    info!(
        "Saved {}x{} canvas to {}",
        canvas.width,
        canvas.height,
        path.display()
    );
    Ok(())
}
