//! Example: Render a wave to a PNG file.
//!
//! Renders a default three-wave configuration, or one read from a JSON file.
//!
//! Run with:
//!     cargo run --example render_png -- [config.json] [output.png]

use std::path::PathBuf;

use anyhow::Context;
use audiowave::{render_to_pixmap, resolve_exact, Color, WaveConfig};

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut args = std::env::args().skip(1);
    let config = match args.next() {
        Some(path) => {
            let json = std::fs::read_to_string(&path)
                .with_context(|| format!("Failed to read config {}", path))?;
            WaveConfig::from_json(&json).with_context(|| format!("Invalid config {}", path))?
        }
        None => WaveConfig {
            bar_background_color: Color::rgb(0, 255, 136),
            bar_stroke_color: Color::rgb(0, 96, 48),
            ..WaveConfig::default().with_counts(3, 9).with_spacing(0.6)
        },
    };
    let output_path = PathBuf::from(args.next().unwrap_or_else(|| "wave.png".to_string()));

    let (width, height) = (640, 160);
    let layout = resolve_exact(&config, width as f32, height as f32);
    log::info!(
        "Rendering {} waves x {} bars at {}x{} (bar width {:.2}, max height {:.2})",
        layout.num_of_wave,
        layout.num_of_bar,
        width,
        height,
        layout.bar_width,
        layout.max_bar_height
    );

    let surface = render_to_pixmap(&config, width, height, Color::rgb(16, 16, 24))?;
    surface
        .save_png(&output_path)
        .with_context(|| format!("Failed to write {}", output_path.display()))?;

    log::info!("Done! Output: {}", output_path.display());
    Ok(())
}
