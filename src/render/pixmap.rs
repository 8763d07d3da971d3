//! Software rendering onto a tiny-skia pixmap.

use std::path::Path;

use tiny_skia::{BlendMode, FillRule, PathBuilder, Pixmap, Rect, Stroke, Transform};

use super::{draw_bars, Paint, RenderSurface};
use crate::wave::{generate, resolve_exact, style_for, BarRect, Color, FillMode, WaveConfig};

/// Control point distance for a quarter circle drawn with one cubic.
const CIRCLE_KAPPA: f32 = 0.552_284_8;

/// Errors that can occur while rasterizing or exporting.
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("Invalid surface size: {width}x{height}")]
    InvalidSize { width: u32, height: u32 },
    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),
}

/// RGBA surface rasterized in software.
pub struct PixmapSurface {
    pixmap: Pixmap,
}

impl PixmapSurface {
    /// Create a fully transparent surface.
    pub fn new(width: u32, height: u32) -> Result<Self, RenderError> {
        let pixmap = Pixmap::new(width, height).ok_or(RenderError::InvalidSize { width, height })?;
        Ok(Self { pixmap })
    }

    pub fn width(&self) -> u32 {
        self.pixmap.width()
    }

    pub fn height(&self) -> u32 {
        self.pixmap.height()
    }

    /// Paint the whole surface with one colour.
    pub fn fill(&mut self, color: Color) {
        self.pixmap.fill(to_skia(color));
    }

    /// Un-premultiplied colour of one pixel.
    pub fn pixel(&self, x: u32, y: u32) -> Option<Color> {
        if x >= self.width() || y >= self.height() {
            return None;
        }
        let c = self.pixmap.pixel(x, y)?.demultiply();
        Some(Color::rgba(c.red(), c.green(), c.blue(), c.alpha()))
    }

    pub fn pixmap(&self) -> &Pixmap {
        &self.pixmap
    }

    /// Copy the surface into an un-premultiplied RGBA image.
    pub fn to_rgba_image(&self) -> Result<image::RgbaImage, RenderError> {
        let mut data = Vec::with_capacity(self.pixmap.data().len());
        for pixel in self.pixmap.pixels() {
            let c = pixel.demultiply();
            data.extend_from_slice(&[c.red(), c.green(), c.blue(), c.alpha()]);
        }

        let (width, height) = (self.width(), self.height());
        image::RgbaImage::from_raw(width, height, data)
            .ok_or(RenderError::InvalidSize { width, height })
    }

    /// Write the surface as a PNG file.
    pub fn save_png<P: AsRef<Path>>(&self, path: P) -> Result<(), RenderError> {
        let image = self.to_rgba_image()?;
        image.save_with_format(path.as_ref(), image::ImageFormat::Png)?;
        log::debug!("Saved {}x{} PNG to {}", self.width(), self.height(), path.as_ref().display());
        Ok(())
    }
}

impl RenderSurface for PixmapSurface {
    fn draw_rounded_rect(&mut self, rect: BarRect, corner_radius: f32, paint: &Paint) {
        let Some(bounds) = Rect::from_ltrb(rect.left, rect.top, rect.right, rect.bottom) else {
            log::trace!("Skipping invalid bar rect {:?}", rect);
            return;
        };
        let Some(path) = rounded_rect_path(bounds, corner_radius) else {
            return;
        };

        let mut skia_paint = tiny_skia::Paint {
            anti_alias: true,
            ..Default::default()
        };

        match paint {
            Paint::Fill(fill) => {
                if rect.is_empty() {
                    return;
                }
                match fill {
                    FillMode::Solid(color) => skia_paint.set_color(to_skia(*color)),
                    FillMode::Cutout => skia_paint.blend_mode = BlendMode::Clear,
                }
                self.pixmap.fill_path(
                    &path,
                    &skia_paint,
                    FillRule::Winding,
                    Transform::identity(),
                    None,
                );
            }
            Paint::Stroke(stroke) => {
                skia_paint.set_color(to_skia(stroke.color));
                let stroke = Stroke {
                    width: stroke.width,
                    ..Default::default()
                };
                self.pixmap.stroke_path(
                    &path,
                    &skia_paint,
                    &stroke,
                    Transform::identity(),
                    None,
                );
            }
        }
    }
}

/// Resolve, generate and draw a configuration onto a new pixmap of the given
/// size, on top of `background`.
pub fn render_to_pixmap(
    config: &WaveConfig,
    width: u32,
    height: u32,
    background: Color,
) -> Result<PixmapSurface, RenderError> {
    let mut surface = PixmapSurface::new(width, height)?;
    surface.fill(background);

    let (w, h) = (width as f32, height as f32);
    let layout = resolve_exact(config, w, h);
    let drawn = draw_bars(&mut surface, generate(config, &layout, w, h), &style_for(config));
    log::debug!("Rendered {} bars onto {}x{} pixmap", drawn, width, height);

    Ok(surface)
}

fn to_skia(color: Color) -> tiny_skia::Color {
    tiny_skia::Color::from_rgba8(color.r, color.g, color.b, color.a)
}

/// Rounded rectangle with circular corners. The radius is clamped to half the
/// shorter side.
fn rounded_rect_path(rect: Rect, radius: f32) -> Option<tiny_skia::Path> {
    let (x, y, w, h) = (rect.x(), rect.y(), rect.width(), rect.height());
    let r = radius.min(w / 2.0).min(h / 2.0);
    if r <= 0.0 {
        return Some(PathBuilder::from_rect(rect));
    }
    let k = r * CIRCLE_KAPPA;

    let mut pb = PathBuilder::new();
    pb.move_to(x + r, y);
    pb.line_to(x + w - r, y);
    pb.cubic_to(x + w - r + k, y, x + w, y + r - k, x + w, y + r);
    pb.line_to(x + w, y + h - r);
    pb.cubic_to(x + w, y + h - r + k, x + w - r + k, y + h, x + w - r, y + h);
    pb.line_to(x + r, y + h);
    pb.cubic_to(x + r - k, y + h, x, y + h - r + k, x, y + h - r);
    pb.line_to(x, y + r);
    pb.cubic_to(x, y + r - k, x + r - k, y, x + r, y);
    pb.close();
    pb.finish()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_size_is_rejected() {
        assert!(matches!(
            PixmapSurface::new(0, 10),
            Err(RenderError::InvalidSize { width: 0, height: 10 })
        ));
    }

    #[test]
    fn test_fill_sets_every_pixel() {
        let mut surface = PixmapSurface::new(4, 3).unwrap();
        surface.fill(Color::rgb(0, 0, 255));
        assert_eq!(surface.pixel(0, 0), Some(Color::rgb(0, 0, 255)));
        assert_eq!(surface.pixel(3, 2), Some(Color::rgb(0, 0, 255)));
        assert_eq!(surface.pixel(4, 0), None);
    }

    #[test]
    fn test_pixel_out_of_range_does_not_wrap() {
        let mut surface = PixmapSurface::new(4, 3).unwrap();
        surface.fill(Color::rgb(0, 0, 255));
        // Flat index of (5, 0) lies inside the buffer on the next row.
        assert_eq!(surface.pixel(5, 0), None);
        assert_eq!(surface.pixel(0, 3), None);
        assert_eq!(surface.pixel(3, 2), Some(Color::rgb(0, 0, 255)));
    }

    #[test]
    fn test_solid_and_cutout_fill() {
        let mut surface = PixmapSurface::new(40, 20).unwrap();
        surface.fill(Color::rgb(255, 0, 0));

        let solid = Paint::Fill(FillMode::Solid(Color::WHITE));
        surface.draw_rounded_rect(BarRect::new(0.0, 0.0, 20.0, 20.0), 0.0, &solid);
        let cutout = Paint::Fill(FillMode::Cutout);
        surface.draw_rounded_rect(BarRect::new(20.0, 0.0, 40.0, 20.0), 0.0, &cutout);

        assert_eq!(surface.pixel(10, 10), Some(Color::WHITE));
        assert_eq!(surface.pixel(30, 10).map(|c| c.a), Some(0));
    }

    #[test]
    fn test_corner_radius_rounds_corners() {
        let mut surface = PixmapSurface::new(20, 20).unwrap();
        let solid = Paint::Fill(FillMode::Solid(Color::WHITE));
        surface.draw_rounded_rect(BarRect::new(0.0, 0.0, 20.0, 20.0), 10.0, &solid);

        assert_eq!(surface.pixel(0, 0).map(|c| c.a), Some(0));
        assert_eq!(surface.pixel(10, 10), Some(Color::WHITE));
    }

    #[test]
    fn test_empty_fill_is_skipped() {
        let mut surface = PixmapSurface::new(10, 10).unwrap();
        let solid = Paint::Fill(FillMode::Solid(Color::WHITE));
        surface.draw_rounded_rect(BarRect::new(2.0, 5.0, 8.0, 5.0), 4.0, &solid);
        assert!(surface.pixmap().pixels().iter().all(|p| p.alpha() == 0));
    }
}
