//! Wave configuration types.
//!
//! Contains every sizing and paint parameter of the wave visual, plus the
//! colour type they use.

use std::fmt;

use serde::{Deserialize, Serialize};

pub const DEFAULT_NUM_OF_WAVE: u32 = 1;
pub const DEFAULT_NUM_OF_BAR: u32 = 5;
pub const DEFAULT_SPACING_WIDTH_MULTIPLY: f32 = 1.0;
pub const DEFAULT_MAX_BAR_WIDTH: f32 = 20.0;
pub const DEFAULT_MIN_BAR_HEIGHT: f32 = 0.0;
pub const DEFAULT_MAX_BAR_HEIGHT: f32 = 0.0;
pub const DEFAULT_BAR_STROKE_WIDTH: f32 = 1.0;
pub const DEFAULT_BAR_CORNER_RADIUS: f32 = 8.0;

/// Errors that can occur while loading a configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid configuration JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Invalid color: {0}")]
    InvalidColor(String),
}

// ============================================================================
// Color
// ============================================================================

/// 8-bit RGBA colour, not premultiplied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const WHITE: Self = Self::rgba(255, 255, 255, 255);
    pub const BLACK: Self = Self::rgba(0, 0, 0, 255);
    pub const TRANSPARENT: Self = Self::rgba(0, 0, 0, 0);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Parse `#rrggbb` or `#rrggbbaa` (leading `#` optional).
    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.trim_start_matches('#');
        if (hex.len() != 6 && hex.len() != 8) || !hex.is_ascii() {
            return None;
        }
        let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
        let a = if hex.len() == 8 { channel(6)? } else { 255 };
        Some(Self::rgba(channel(0)?, channel(2)?, channel(4)?, a))
    }

    pub fn is_opaque(&self) -> bool {
        self.a == 255
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}{:02x}", self.r, self.g, self.b, self.a)
    }
}

impl TryFrom<String> for Color {
    type Error = ConfigError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Color::from_hex(&value).ok_or(ConfigError::InvalidColor(value))
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.to_string()
    }
}

// ============================================================================
// Wave configuration
// ============================================================================

/// Parameters for the wave visual.
///
/// Immutable for the duration of one render pass. Counts are unsigned; any
/// negative or non-finite float is clamped during layout rather than rejected.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WaveConfig {
    /// Number of wave groups drawn side by side.
    pub num_of_wave: u32,
    /// Number of bars in each wave.
    pub num_of_bar: u32,
    /// Height of the center bar(s). Replaced by the available height when
    /// `auto_bar_max_height` is set.
    pub max_bar_height: f32,
    /// Height of the outermost bars.
    pub min_bar_height: f32,
    /// Upper bound on bar width; the resolved width shrinks to fit.
    pub max_bar_width: f32,
    /// Gap between bars (and between waves) as a multiple of bar width.
    pub bar_spacing_width_multiply: f32,
    /// Derive `max_bar_height` from the available height on every layout pass.
    pub auto_bar_max_height: bool,
    /// Cut bars out of the existing surface instead of painting a colour.
    pub bar_use_background_aware: bool,
    pub bar_background_color: Color,
    pub bar_stroke_color: Color,
    pub bar_stroke_width: f32,
    pub bar_corner_radius: f32,
}

impl Default for WaveConfig {
    fn default() -> Self {
        Self {
            num_of_wave: DEFAULT_NUM_OF_WAVE,
            num_of_bar: DEFAULT_NUM_OF_BAR,
            max_bar_height: DEFAULT_MAX_BAR_HEIGHT,
            min_bar_height: DEFAULT_MIN_BAR_HEIGHT,
            max_bar_width: DEFAULT_MAX_BAR_WIDTH,
            bar_spacing_width_multiply: DEFAULT_SPACING_WIDTH_MULTIPLY,
            auto_bar_max_height: true,
            bar_use_background_aware: false,
            bar_background_color: Color::WHITE,
            bar_stroke_color: Color::BLACK,
            bar_stroke_width: DEFAULT_BAR_STROKE_WIDTH,
            bar_corner_radius: DEFAULT_BAR_CORNER_RADIUS,
        }
    }
}

impl WaveConfig {
    /// Parse a configuration from JSON. Missing fields take their defaults.
    ///
    /// # Example
    /// ```
    /// use audiowave::WaveConfig;
    ///
    /// let config = WaveConfig::from_json(r#"{ "num_of_bar": 7 }"#).unwrap();
    /// assert_eq!(config.num_of_bar, 7);
    /// assert_eq!(config.num_of_wave, 1);
    /// ```
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Total number of bars across all waves.
    pub fn total_bar_count(&self) -> u32 {
        self.num_of_bar.saturating_mul(self.num_of_wave)
    }

    /// True when nothing would be drawn.
    pub fn is_empty(&self) -> bool {
        self.total_bar_count() == 0
    }

    pub fn with_counts(mut self, num_of_wave: u32, num_of_bar: u32) -> Self {
        self.num_of_wave = num_of_wave;
        self.num_of_bar = num_of_bar;
        self
    }

    /// Fixed bar heights; turns off `auto_bar_max_height`.
    pub fn with_bar_heights(mut self, min_bar_height: f32, max_bar_height: f32) -> Self {
        self.min_bar_height = min_bar_height;
        self.max_bar_height = max_bar_height;
        self.auto_bar_max_height = false;
        self
    }

    pub fn with_max_bar_width(mut self, max_bar_width: f32) -> Self {
        self.max_bar_width = max_bar_width;
        self
    }

    pub fn with_spacing(mut self, bar_spacing_width_multiply: f32) -> Self {
        self.bar_spacing_width_multiply = bar_spacing_width_multiply;
        self
    }
}
