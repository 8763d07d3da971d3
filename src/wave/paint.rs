//! Paint style selection for bars.

use super::{Color, WaveConfig};

/// How a bar's interior is painted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FillMode {
    /// Opaque (or translucent) colour, blended over existing content.
    Solid(Color),
    /// Clears existing content so whatever lies behind the surface shows
    /// through the bar.
    Cutout,
}

/// Outline drawn around every bar.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StrokeStyle {
    pub color: Color,
    /// Line width in pixels. Zero draws a hairline.
    pub width: f32,
}

/// Complete paint description shared by all bars of one render pass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BarStyle {
    pub fill: FillMode,
    pub stroke: StrokeStyle,
    pub corner_radius: f32,
}

/// Resolve the bar style for a configuration snapshot.
pub fn style_for(config: &WaveConfig) -> BarStyle {
    let fill = if config.bar_use_background_aware {
        FillMode::Cutout
    } else {
        FillMode::Solid(config.bar_background_color)
    };

    BarStyle {
        fill,
        stroke: StrokeStyle {
            color: config.bar_stroke_color,
            width: clamp_size(config.bar_stroke_width),
        },
        corner_radius: clamp_size(config.bar_corner_radius),
    }
}

fn clamp_size(value: f32) -> f32 {
    if value.is_finite() {
        value.max(0.0)
    } else {
        0.0
    }
}
