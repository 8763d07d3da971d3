//! Drawing generated bars onto a surface.
//!
//! This module provides:
//! - The [`RenderSurface`] trait a host canvas implements
//! - [`draw_bars`], which issues one fill and one stroke per bar
//! - [`RecordingSurface`] for replaying or inspecting draw calls
//! - A tiny-skia backed [`PixmapSurface`] for software rendering

pub mod pixmap;

pub use pixmap::{render_to_pixmap, PixmapSurface, RenderError};

use crate::wave::{Bar, BarRect, BarStyle, FillMode, StrokeStyle};

/// Paint applied by a single draw call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Paint {
    Fill(FillMode),
    Stroke(StrokeStyle),
}

/// A 2D canvas able to draw rounded rectangles.
pub trait RenderSurface {
    fn draw_rounded_rect(&mut self, rect: BarRect, corner_radius: f32, paint: &Paint);
}

/// Draw every bar, fill first and then stroke. Returns the number of bars drawn.
pub fn draw_bars<S, I>(surface: &mut S, bars: I, style: &BarStyle) -> usize
where
    S: RenderSurface + ?Sized,
    I: IntoIterator<Item = Bar>,
{
    let fill = Paint::Fill(style.fill);
    let stroke = Paint::Stroke(style.stroke);

    let mut drawn = 0;
    for bar in bars {
        surface.draw_rounded_rect(bar.rect, style.corner_radius, &fill);
        surface.draw_rounded_rect(bar.rect, style.corner_radius, &stroke);
        drawn += 1;
    }
    drawn
}

/// One recorded call to [`RenderSurface::draw_rounded_rect`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DrawCall {
    pub rect: BarRect,
    pub corner_radius: f32,
    pub paint: Paint,
}

/// Surface that records draw calls instead of rasterizing them.
#[derive(Debug, Clone, Default)]
pub struct RecordingSurface {
    pub calls: Vec<DrawCall>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fills(&self) -> impl Iterator<Item = &DrawCall> {
        self.calls
            .iter()
            .filter(|call| matches!(call.paint, Paint::Fill(_)))
    }

    pub fn strokes(&self) -> impl Iterator<Item = &DrawCall> {
        self.calls
            .iter()
            .filter(|call| matches!(call.paint, Paint::Stroke(_)))
    }

    /// Replay the recorded calls onto another surface.
    pub fn replay<S: RenderSurface + ?Sized>(&self, target: &mut S) {
        for call in &self.calls {
            target.draw_rounded_rect(call.rect, call.corner_radius, &call.paint);
        }
    }
}

impl RenderSurface for RecordingSurface {
    fn draw_rounded_rect(&mut self, rect: BarRect, corner_radius: f32, paint: &Paint) {
        self.calls.push(DrawCall {
            rect,
            corner_radius,
            paint: *paint,
        });
    }
}
