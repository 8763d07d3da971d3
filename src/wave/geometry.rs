//! Bar geometry generation.
//!
//! Produces the rectangle of every bar from a [`ResolvedLayout`]. Within a
//! wave heights follow a triangular profile: they grow from the outer edges
//! toward the center bar(s), and every bar shares the wave's horizontal
//! centerline.

use std::iter::FusedIterator;

use super::{ResolvedLayout, WaveConfig};

/// Axis-aligned rectangle in surface coordinates (y grows downward).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct BarRect {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl BarRect {
    pub fn new(left: f32, top: f32, right: f32, bottom: f32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    pub fn width(&self) -> f32 {
        self.right - self.left
    }

    pub fn height(&self) -> f32 {
        self.bottom - self.top
    }

    pub fn center_x(&self) -> f32 {
        (self.left + self.right) * 0.5
    }

    pub fn center_y(&self) -> f32 {
        (self.top + self.bottom) * 0.5
    }

    /// True when the rectangle covers no area.
    pub fn is_empty(&self) -> bool {
        !(self.width() > 0.0 && self.height() > 0.0)
    }
}

/// Position of a bar relative to its wave's peak.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BarKind {
    /// Left of the peak, growing toward it.
    Leading,
    /// At the peak, drawn at full height.
    Center,
    /// Right of the peak, mirroring the leading side.
    Trailing,
}

/// One generated bar.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bar {
    /// Wave this bar belongs to, counted from the left.
    pub wave: u32,
    /// Index within the wave, counted from the left.
    pub index: u32,
    pub kind: BarKind,
    pub rect: BarRect,
    /// Draw with the cut-out fill instead of a solid colour.
    pub background_aware: bool,
}

impl Bar {
    pub fn is_center(&self) -> bool {
        self.kind == BarKind::Center
    }

    pub fn height(&self) -> f32 {
        self.rect.height()
    }
}

/// Classify bar `index` of a wave with `num_of_bar` bars.
///
/// Odd counts have one center bar at `n / 2`; even counts have two, at
/// `n / 2 - 1` and `n / 2`.
pub fn bar_kind(index: u32, num_of_bar: u32) -> BarKind {
    let center = num_of_bar / 2;
    let first_center = if num_of_bar % 2 == 0 {
        center.saturating_sub(1)
    } else {
        center
    };

    if index < first_center {
        BarKind::Leading
    } else if index <= center {
        BarKind::Center
    } else {
        BarKind::Trailing
    }
}

/// Index counted from the nearer outer edge of the wave.
fn edge_index(index: u32, num_of_bar: u32, kind: BarKind) -> u32 {
    match kind {
        BarKind::Trailing => num_of_bar - index - 1,
        BarKind::Leading | BarKind::Center => index,
    }
}

/// Lazy sequence of bars, wave by wave and left to right.
///
/// Bars are computed on demand from the captured layout. Clone the sequence
/// before iterating, or call [`generate`] again, to walk it a second time.
#[derive(Debug, Clone)]
pub struct Bars {
    layout: ResolvedLayout,
    first_offset_left: f32,
    offset_top: f32,
    background_aware: bool,
    position: usize,
    total: usize,
}

impl Bars {
    fn bar_at(&self, position: usize) -> Bar {
        let layout = &self.layout;
        let num_of_bar = layout.num_of_bar;
        let wave = (position / num_of_bar as usize) as u32;
        let index = (position % num_of_bar as usize) as u32;
        let kind = bar_kind(index, num_of_bar);

        let offset_left =
            self.first_offset_left + wave as f32 * (layout.wave_content_width + layout.spacing);
        let left = index as f32 * layout.spacing + index as f32 * layout.bar_width + offset_left;
        let right = left + layout.bar_width;

        let (top, bottom) = match kind {
            BarKind::Center => (self.offset_top, self.offset_top + layout.max_bar_height),
            BarKind::Leading | BarKind::Trailing => {
                let d = edge_index(index, num_of_bar, kind) as f32;
                let half_step = layout.height_step / 2.0;
                let top = half_step * (num_of_bar / 2) as f32 - d * half_step + self.offset_top;
                (top, top + layout.min_bar_height + d * layout.height_step)
            }
        };

        Bar {
            wave,
            index,
            kind,
            rect: BarRect::new(left, top, right, bottom),
            background_aware: self.background_aware,
        }
    }
}

impl Iterator for Bars {
    type Item = Bar;

    fn next(&mut self) -> Option<Bar> {
        if self.position >= self.total {
            return None;
        }
        let bar = self.bar_at(self.position);
        self.position += 1;
        Some(bar)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.total - self.position;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Bars {}

impl FusedIterator for Bars {}

/// Generate every bar for a surface of the given size.
///
/// Counts and sizes come from `layout`; `config` only decides the paint
/// flag carried by each bar. Waves are centered as a group horizontally and
/// each wave is centered vertically.
///
/// # Example
/// ```
/// use audiowave::{generate, resolve_exact, WaveConfig};
///
/// let config = WaveConfig::default().with_counts(1, 5).with_bar_heights(0.0, 100.0);
/// let layout = resolve_exact(&config, 90.0, 100.0);
/// let heights: Vec<f32> = generate(&config, &layout, 90.0, 100.0)
///     .map(|bar| bar.height())
///     .collect();
/// assert_eq!(heights, vec![0.0, 50.0, 100.0, 50.0, 0.0]);
/// ```
pub fn generate(
    config: &WaveConfig,
    layout: &ResolvedLayout,
    surface_width: f32,
    surface_height: f32,
) -> Bars {
    let total = layout.total_bar_count() as usize;

    Bars {
        layout: *layout,
        first_offset_left: (surface_width - layout.wave_group_width()) / 2.0,
        offset_top: (surface_height - layout.max_bar_height) / 2.0,
        background_aware: config.bar_use_background_aware,
        position: 0,
        total,
    }
}

/// Heights of the bars of one wave, left to right.
pub fn bar_heights(layout: &ResolvedLayout) -> Vec<f32> {
    let num_of_bar = layout.num_of_bar;
    if layout.is_empty() {
        return Vec::new();
    }
    (0..num_of_bar)
        .map(|index| match bar_kind(index, num_of_bar) {
            BarKind::Center => layout.max_bar_height,
            kind => {
                let d = edge_index(index, num_of_bar, kind) as f32;
                layout.min_bar_height + d * layout.height_step
            }
        })
        .collect()
}
