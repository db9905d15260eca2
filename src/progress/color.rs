use std::fmt;
use std::str::FromStr;

use ratatui::style::Color;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::timer::phase::PhaseKind;

/// A 24-bit color, written as `#rrggbb` in config files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const RED: Rgb = Rgb::new(0xff, 0, 0);
    /// The break color the app has always used: half-intensity green.
    pub const DARK_GREEN: Rgb = Rgb::new(0, 0x80, 0);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// This color at `alpha` opacity, composited over a black background.
    ///
    /// Terminals have no alpha channel, so the blend is baked into the RGB
    /// value. `alpha` is clamped to 0.0..=1.0.
    pub fn with_opacity(self, alpha: f64) -> Self {
        let alpha = if alpha.is_nan() {
            0.0
        } else {
            alpha.clamp(0.0, 1.0)
        };
        let scale = |c: u8| (f64::from(c) * alpha).round() as u8;
        Self::new(scale(self.r), scale(self.g), scale(self.b))
    }
}

impl FromStr for Rgb {
    type Err = ConfigError;

    /// Only `#rrggbb` is accepted. ratatui's parser also takes color names
    /// and palette indices, which have no fixed RGB value.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ConfigError::InvalidColor {
            value: s.to_string(),
        };

        let s = s.trim();
        let hex = s.strip_prefix('#').ok_or_else(invalid)?;
        if hex.len() != 6 || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(invalid());
        }

        match Color::from_str(s) {
            Ok(Color::Rgb(r, g, b)) => Ok(Self::new(r, g, b)),
            _ => Err(invalid()),
        }
    }
}

impl TryFrom<String> for Rgb {
    type Error = ConfigError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Rgb> for String {
    fn from(color: Rgb) -> Self {
        color.to_string()
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl From<Rgb> for Color {
    fn from(color: Rgb) -> Self {
        Color::Rgb(color.r, color.g, color.b)
    }
}

/// Fill colors for each phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub work: Rgb,
    pub rest: Rgb,
}

impl Palette {
    pub fn color_of(&self, phase: PhaseKind) -> Rgb {
        match phase {
            PhaseKind::Work => self.work,
            PhaseKind::Break => self.rest,
        }
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            work: Rgb::RED,
            rest: Rgb::DARK_GREEN,
        }
    }
}
