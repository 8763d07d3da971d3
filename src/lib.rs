//! Audiowave Core
//!
//! Procedural geometry for a decorative "audio wave" visual: rows of rounded
//! bars grouped into repeated waves, each rising toward its center and falling
//! away symmetrically, like a mirrored level meter. The shape is a pure
//! function of the configuration; no audio is involved.
//!
//! # Features
//!
//! - Layout resolution that fits any number of bars into the available width
//! - Lazy, deterministic bar geometry with symmetric triangular heights
//! - Solid or background-aware (cut-out) paint styles
//! - A `RenderSurface` trait for host canvases, plus a tiny-skia software surface
//! - A dirty-flag `WaveView` for hosts that measure and draw on demand
//! - Python bindings via PyO3 (when `python` feature is enabled)

pub mod render;
pub mod view;
pub mod wave;

// Re-export commonly used types
pub use render::{
    draw_bars, render_to_pixmap, DrawCall, Paint, PixmapSurface, RecordingSurface, RenderError,
    RenderSurface,
};
pub use view::{Insets, MeasuredSize, WaveView};
pub use wave::{
    bar_heights, generate, resolve, resolve_exact, style_for, Bar, BarKind, BarRect, BarStyle,
    Bars, Color, ConfigError, FillMode, MeasureMode, MeasureSpec, ResolvedLayout, StrokeStyle,
    WaveConfig,
};

// Python bindings (only when python feature is enabled)
#[cfg(feature = "python")]
mod python_bindings {
    use crate::render::render_to_pixmap;
    use crate::wave::{self, Color, WaveConfig};
    use pyo3::exceptions::PyRuntimeError;
    use pyo3::prelude::*;

    fn parse_config(config_json: &str) -> PyResult<WaveConfig> {
        WaveConfig::from_json(config_json).map_err(|e| PyRuntimeError::new_err(e.to_string()))
    }

    /// Resolve the layout for an exact surface size.
    ///
    /// Returns `(width, height, bar_width, max_bar_height)`.
    #[pyfunction]
    #[pyo3(signature = (config_json, width, height))]
    fn resolve_layout(config_json: &str, width: f32, height: f32) -> PyResult<(f32, f32, f32, f32)> {
        let config = parse_config(config_json)?;
        let layout = wave::resolve_exact(&config, width, height);
        Ok((layout.width, layout.height, layout.bar_width, layout.max_bar_height))
    }

    /// Generate bar rectangles as `(left, top, right, bottom, is_center)` tuples.
    #[pyfunction]
    #[pyo3(signature = (config_json, width, height))]
    fn generate_bars(
        config_json: &str,
        width: f32,
        height: f32,
    ) -> PyResult<Vec<(f32, f32, f32, f32, bool)>> {
        let config = parse_config(config_json)?;
        let layout = wave::resolve_exact(&config, width, height);
        Ok(wave::generate(&config, &layout, width, height)
            .map(|bar| {
                let r = bar.rect;
                (r.left, r.top, r.right, r.bottom, bar.is_center())
            })
            .collect())
    }

    /// Render the wave to a PNG file.
    #[pyfunction]
    #[pyo3(signature = (config_json, width, height, output_path, background="#00000000"))]
    fn render_png(
        py: Python<'_>,
        config_json: &str,
        width: u32,
        height: u32,
        output_path: &str,
        background: &str,
    ) -> PyResult<()> {
        let config = parse_config(config_json)?;
        let background = Color::from_hex(background)
            .ok_or_else(|| PyRuntimeError::new_err(format!("Invalid background: {}", background)))?;
        let output = output_path.to_string();

        py.detach(|| {
            render_to_pixmap(&config, width, height, background)
                .and_then(|surface| surface.save_png(&output))
        })
        .map_err(|e| PyRuntimeError::new_err(e.to_string()))
    }

    /// Default configuration as JSON.
    #[pyfunction]
    fn default_config_json() -> PyResult<String> {
        WaveConfig::default()
            .to_json()
            .map_err(|e| PyRuntimeError::new_err(e.to_string()))
    }

    /// Audiowave Python module
    #[pymodule]
    pub fn audiowave(m: &Bound<'_, PyModule>) -> PyResult<()> {
        m.add("__version__", env!("CARGO_PKG_VERSION"))?;
        m.add_function(wrap_pyfunction!(resolve_layout, m)?)?;
        m.add_function(wrap_pyfunction!(generate_bars, m)?)?;
        m.add_function(wrap_pyfunction!(render_png, m)?)?;
        m.add_function(wrap_pyfunction!(default_config_json, m)?)?;
        Ok(())
    }
}

#[cfg(feature = "python")]
pub use python_bindings::*;
