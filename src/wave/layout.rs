//! Layout resolution.
//!
//! Turns a [`WaveConfig`] and the space offered by the host into concrete
//! pixel sizes: bar width, spacing, effective bar heights and the resolved
//! surface size.

use super::WaveConfig;

/// How the host constrains one axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MeasureMode {
    /// The surface will be exactly `size` long on this axis.
    #[default]
    Exact,
    /// The surface may be at most `size` long; content size is used.
    AtMost,
    /// No constraint; `size` is ignored.
    Unspecified,
}

/// Available size on one axis together with its [`MeasureMode`].
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct MeasureSpec {
    pub size: f32,
    pub mode: MeasureMode,
}

impl MeasureSpec {
    pub fn exact(size: f32) -> Self {
        Self {
            size,
            mode: MeasureMode::Exact,
        }
    }

    pub fn at_most(size: f32) -> Self {
        Self {
            size,
            mode: MeasureMode::AtMost,
        }
    }

    pub fn unspecified() -> Self {
        Self {
            size: 0.0,
            mode: MeasureMode::Unspecified,
        }
    }

    pub fn is_exact(&self) -> bool {
        self.mode == MeasureMode::Exact
    }
}

/// Pixel-space sizing derived from a configuration and the available bounds.
///
/// Holds the counts it was resolved for, so geometry generated from it always
/// agrees with its sizes.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ResolvedLayout {
    pub num_of_wave: u32,
    pub num_of_bar: u32,
    pub bar_width: f32,
    /// Gap between adjacent bars. Waves are separated by the same gap.
    pub spacing: f32,
    pub max_bar_height: f32,
    pub min_bar_height: f32,
    /// Height added per bar moving from the wave edge toward its center.
    pub height_step: f32,
    /// Width of a single wave.
    pub wave_content_width: f32,
    /// Natural width of all waves including the gaps between them.
    pub content_width: f32,
    pub content_height: f32,
    /// Resolved surface width.
    pub width: f32,
    /// Resolved surface height.
    pub height: f32,
}

impl ResolvedLayout {
    /// Layout of a configuration with no bars.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.total_bar_count() == 0
    }

    pub fn total_bar_count(&self) -> u32 {
        self.num_of_bar.saturating_mul(self.num_of_wave)
    }

    pub fn total_spacing_count(&self) -> u32 {
        self.total_bar_count().saturating_sub(1)
    }

    /// Width of all waves placed side by side with one gap between each pair.
    pub fn wave_group_width(&self) -> f32 {
        let wave_gaps = self.num_of_wave.saturating_sub(1) as f32;
        self.num_of_wave as f32 * self.wave_content_width + wave_gaps * self.spacing
    }
}

/// Resolve the layout for the given bounds.
///
/// Never fails: negative or non-finite inputs are clamped to zero and an
/// empty configuration resolves to [`ResolvedLayout::empty`].
///
/// # Example
/// ```
/// use audiowave::{resolve, MeasureSpec, WaveConfig};
///
/// let config = WaveConfig::default().with_counts(1, 5);
/// let layout = resolve(&config, MeasureSpec::exact(90.0), MeasureSpec::exact(40.0));
/// assert_eq!(layout.bar_width, 10.0);
/// assert_eq!(layout.max_bar_height, 40.0);
/// ```
pub fn resolve(config: &WaveConfig, width: MeasureSpec, height: MeasureSpec) -> ResolvedLayout {
    let total_bar_count = config.total_bar_count();
    if total_bar_count == 0 {
        return ResolvedLayout::empty();
    }
    let total_spacing_count = total_bar_count - 1;

    let spacing_multiply = non_negative(config.bar_spacing_width_multiply);
    let max_bar_width = non_negative(config.max_bar_width);

    let bar_width = match width.mode {
        MeasureMode::Unspecified => max_bar_width,
        MeasureMode::Exact | MeasureMode::AtMost => {
            let slots = total_bar_count as f32 + total_spacing_count as f32 * spacing_multiply;
            (non_negative(width.size) / slots).min(max_bar_width)
        }
    };
    debug_assert!(bar_width <= max_bar_width);
    let spacing = bar_width * spacing_multiply;

    let min_bar_height = non_negative(config.min_bar_height);
    let max_bar_height = if config.auto_bar_max_height && height.mode != MeasureMode::Unspecified
    {
        non_negative(height.size)
    } else {
        non_negative(config.max_bar_height)
    };
    let half_bar_count = (config.num_of_bar / 2).max(1);
    let height_step = (max_bar_height - min_bar_height) / half_bar_count as f32;

    let wave_content_width = config.num_of_bar as f32 * bar_width
        + config.num_of_bar.saturating_sub(1) as f32 * spacing;
    let content_width = total_bar_count as f32 * bar_width + total_spacing_count as f32 * spacing;
    let content_height = min_bar_height.max(max_bar_height);

    ResolvedLayout {
        num_of_wave: config.num_of_wave,
        num_of_bar: config.num_of_bar,
        bar_width,
        spacing,
        max_bar_height,
        min_bar_height,
        height_step,
        wave_content_width,
        content_width,
        content_height,
        width: if width.is_exact() {
            non_negative(width.size)
        } else {
            content_width
        },
        height: if height.is_exact() {
            non_negative(height.size)
        } else {
            content_height
        },
    }
}

/// Resolve with both axes fixed to the given surface size.
pub fn resolve_exact(config: &WaveConfig, width: f32, height: f32) -> ResolvedLayout {
    resolve(config, MeasureSpec::exact(width), MeasureSpec::exact(height))
}

fn non_negative(value: f32) -> f32 {
    if value.is_finite() {
        value.max(0.0)
    } else {
        0.0
    }
}
