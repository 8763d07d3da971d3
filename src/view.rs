//! Host element owning a wave configuration.
//!
//! [`WaveView`] keeps the configuration together with a dirty flag. Setters
//! only record the change; the next `measure`, `bars` or `draw` call notices
//! the stale layout and resolves it again before producing geometry.

use crate::render::{draw_bars, RenderSurface};
use crate::wave::{
    generate, resolve, style_for, Bars, Color, MeasureSpec, ResolvedLayout, WaveConfig,
};

/// Padding around the wave content, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Insets {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl Insets {
    pub fn uniform(value: f32) -> Self {
        Self {
            left: value,
            top: value,
            right: value,
            bottom: value,
        }
    }

    pub fn horizontal(&self) -> f32 {
        self.left + self.right
    }

    pub fn vertical(&self) -> f32 {
        self.top + self.bottom
    }
}

/// Pixel size reported back to the layout host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MeasuredSize {
    pub width: u32,
    pub height: u32,
}

/// Wave visual bound to a host that measures and draws it.
#[derive(Debug, Clone)]
pub struct WaveView {
    config: WaveConfig,
    padding: Insets,
    layout: Option<ResolvedLayout>,
    last_specs: Option<(MeasureSpec, MeasureSpec)>,
    /// Surface size the layout was resolved for when no measure pass ran.
    resolved_surface: Option<(f32, f32)>,
    layout_stale: bool,
    redraw_pending: bool,
}

impl Default for WaveView {
    fn default() -> Self {
        Self::new(WaveConfig::default())
    }
}

macro_rules! setter {
    ($(#[$meta:meta])* $name:ident, $field:ident: $ty:ty) => {
        $(#[$meta])*
        pub fn $name(&mut self, value: $ty) {
            if self.config.$field != value {
                self.config.$field = value;
                self.invalidate();
            }
        }
    };
}

impl WaveView {
    pub fn new(config: WaveConfig) -> Self {
        Self {
            config,
            padding: Insets::default(),
            layout: None,
            last_specs: None,
            resolved_surface: None,
            layout_stale: true,
            redraw_pending: true,
        }
    }

    pub fn config(&self) -> &WaveConfig {
        &self.config
    }

    pub fn padding(&self) -> Insets {
        self.padding
    }

    pub fn set_padding(&mut self, padding: Insets) {
        if self.padding != padding {
            self.padding = padding;
            self.invalidate();
        }
    }

    /// Replace the whole configuration.
    pub fn set_config(&mut self, config: WaveConfig) {
        if self.config != config {
            self.config = config;
            self.invalidate();
        }
    }

    /// Edit the configuration in place.
    pub fn update_config<F: FnOnce(&mut WaveConfig)>(&mut self, f: F) {
        let mut config = self.config.clone();
        f(&mut config);
        self.set_config(config);
    }

    setter!(set_num_of_wave, num_of_wave: u32);
    setter!(set_num_of_bar, num_of_bar: u32);
    setter!(
        /// Has no visible effect while `auto_bar_max_height` is set.
        set_max_bar_height,
        max_bar_height: f32
    );
    setter!(set_min_bar_height, min_bar_height: f32);
    setter!(set_max_bar_width, max_bar_width: f32);
    setter!(set_bar_spacing_width_multiply, bar_spacing_width_multiply: f32);
    setter!(set_auto_bar_max_height, auto_bar_max_height: bool);
    setter!(set_bar_use_background_aware, bar_use_background_aware: bool);
    setter!(set_bar_background_color, bar_background_color: Color);
    setter!(set_bar_stroke_color, bar_stroke_color: Color);
    setter!(set_bar_stroke_width, bar_stroke_width: f32);
    setter!(set_bar_corner_radius, bar_corner_radius: f32);

    /// True when the configuration changed since the last layout pass.
    pub fn needs_layout(&self) -> bool {
        self.layout_stale
    }

    /// True when the configuration changed since the last draw.
    pub fn needs_redraw(&self) -> bool {
        self.redraw_pending
    }

    /// Layout from the most recent pass, if it is still current.
    pub fn layout(&self) -> Option<&ResolvedLayout> {
        if self.layout_stale {
            None
        } else {
            self.layout.as_ref()
        }
    }

    /// Resolve the layout for the space offered by the host.
    ///
    /// Padding is taken out of the available space before resolving and added
    /// back on axes that are not fixed by the host. Sizes are truncated to
    /// whole pixels per term.
    pub fn measure(&mut self, width: MeasureSpec, height: MeasureSpec) -> MeasuredSize {
        self.last_specs = Some((width, height));
        self.resolved_surface = None;
        let layout = self.resolve_with(width, height);

        if layout.is_empty() {
            return MeasuredSize::default();
        }

        let measured_width = if width.is_exact() {
            width.size.max(0.0) as u32
        } else {
            let bars = (layout.total_bar_count() as f32 * layout.bar_width) as u32;
            let gaps = (layout.total_spacing_count() as f32 * layout.spacing) as u32;
            bars + gaps + self.padding.horizontal().max(0.0) as u32
        };
        let measured_height = if height.is_exact() {
            height.size.max(0.0) as u32
        } else {
            layout.content_height as u32 + self.padding.vertical().max(0.0) as u32
        };

        MeasuredSize {
            width: measured_width,
            height: measured_height,
        }
    }

    /// Geometry for a surface of the given size, resolving first if stale.
    ///
    /// Without a prior `measure`, a surface of a different size than the last
    /// one also triggers a new layout pass.
    pub fn bars(&mut self, surface_width: f32, surface_height: f32) -> Bars {
        let layout = self.current_layout(surface_width, surface_height);
        generate(&self.config, &layout, surface_width, surface_height)
    }

    /// Draw every bar onto `surface`. Returns the number of bars drawn.
    pub fn draw<S: RenderSurface + ?Sized>(
        &mut self,
        surface: &mut S,
        surface_width: f32,
        surface_height: f32,
    ) -> usize {
        let bars = self.bars(surface_width, surface_height);
        let drawn = draw_bars(surface, bars, &style_for(&self.config));
        self.redraw_pending = false;
        log::trace!("Drew {} bars", drawn);
        drawn
    }

    fn invalidate(&mut self) {
        self.layout_stale = true;
        self.redraw_pending = true;
    }

    fn current_layout(&mut self, surface_width: f32, surface_height: f32) -> ResolvedLayout {
        let surface = (surface_width, surface_height);
        let resized = self.last_specs.is_none() && self.resolved_surface != Some(surface);

        match self.layout {
            Some(layout) if !self.layout_stale && !resized => layout,
            _ => match self.last_specs {
                Some((width, height)) => self.resolve_with(width, height),
                None => {
                    let layout = self.resolve_with(
                        MeasureSpec::exact(surface_width),
                        MeasureSpec::exact(surface_height),
                    );
                    self.resolved_surface = Some(surface);
                    layout
                }
            },
        }
    }

    fn resolve_with(&mut self, width: MeasureSpec, height: MeasureSpec) -> ResolvedLayout {
        let inner_width = MeasureSpec {
            size: width.size - self.padding.horizontal(),
            ..width
        };
        let inner_height = MeasureSpec {
            size: height.size - self.padding.vertical(),
            ..height
        };

        let layout = resolve(&self.config, inner_width, inner_height);
        log::debug!(
            "Resolved layout: {} waves x {} bars, bar width {:.2}, spacing {:.2}, max height {:.2}",
            layout.num_of_wave,
            layout.num_of_bar,
            layout.bar_width,
            layout.spacing,
            layout.max_bar_height
        );

        self.layout = Some(layout);
        self.layout_stale = false;
        layout
    }
}
