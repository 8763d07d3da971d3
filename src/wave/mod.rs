//! Wave layout and geometry.
//!
//! Data flows one way through the submodules:
//! - `params`: the [`WaveConfig`] snapshot
//! - `layout`: resolves bar width, spacing and heights for the available bounds
//! - `geometry`: generates the rectangle of every bar
//! - `paint`: picks the fill and stroke style shared by all bars

mod geometry;
mod layout;
mod paint;
mod params;

pub use geometry::{bar_heights, bar_kind, generate, Bar, BarKind, BarRect, Bars};
pub use layout::{resolve, resolve_exact, MeasureMode, MeasureSpec, ResolvedLayout};
pub use paint::{style_for, BarStyle, FillMode, StrokeStyle};
pub use params::*;
