#![forbid(unsafe_code)]

mod export;
mod settings_file;

pub use export::{init_tracing, output_dir, save_canvas_png};
pub use settings_file::load_settings;
