//! Color handling for burst palettes.
//!
//! Palettes arrive as hex text (`"#26ccff"`) in presets, so colors serialize
//! as hex strings rather than float tuples.

use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// RGBA color.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color {
    /// Red component (0-1).
    pub r: f32,
    /// Green component (0-1).
    pub g: f32,
    /// Blue component (0-1).
    pub b: f32,
    /// Alpha component (0-1).
    pub a: f32,
}

/// The stock palette sampled when a config does not supply its own.
pub const DEFAULT_PALETTE: [Color; 5] = [
    Color::hex(0x26_cc_ff_ff), // sky
    Color::hex(0xa2_5a_fd_ff), // violet
    Color::hex(0xff_5e_7e_ff), // rose
    Color::hex(0x88_ff_5a_ff), // lime
    Color::hex(0xfc_ff_42_ff), // gold
];

impl Color {
    /// Solid white.
    pub const WHITE: Self = Self::rgba(1.0, 1.0, 1.0, 1.0);

    /// Creates a color from RGBA values (0-1).
    #[must_use]
    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Creates a color from RGB values (0-1) with full alpha.
    #[must_use]
    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self::rgba(r, g, b, 1.0)
    }

    /// Creates a color from hex value (0xRRGGBBAA).
    #[must_use]
    pub const fn hex(hex: u32) -> Self {
        let r = ((hex >> 24) & 0xFF) as f32 / 255.0;
        let g = ((hex >> 16) & 0xFF) as f32 / 255.0;
        let b = ((hex >> 8) & 0xFF) as f32 / 255.0;
        let a = (hex & 0xFF) as f32 / 255.0;
        Self::rgba(r, g, b, a)
    }

    /// Returns a new color with different alpha.
    #[must_use]
    pub const fn with_alpha(self, a: f32) -> Self {
        Self::rgba(self.r, self.g, self.b, a)
    }

    /// Converts to array format.
    #[must_use]
    pub const fn to_array(self) -> [f32; 4] {
        [self.r, self.g, self.b, self.a]
    }

    /// Parses a `#rrggbb` or `#rrggbbaa` hex string.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidConfig`] when the string is not a
    /// well-formed hex color.
    pub fn parse(text: &str) -> EngineResult<Self> {
        let digits = text.strip_prefix('#').unwrap_or(text);
        if digits.len() != 6 && digits.len() != 8 {
            return Err(EngineError::InvalidConfig(format!(
                "hex color must be 6 or 8 digits: {text:?}"
            )));
        }

        let byte = |range: std::ops::Range<usize>| -> EngineResult<f32> {
            let value = u8::from_str_radix(&digits[range], 16).map_err(|_| {
                EngineError::InvalidConfig(format!("invalid hex color: {text:?}"))
            })?;
            Ok(f32::from(value) / 255.0)
        };

        let r = byte(0..2)?;
        let g = byte(2..4)?;
        let b = byte(4..6)?;
        let a = if digits.len() == 8 { byte(6..8)? } else { 1.0 };
        Ok(Self::rgba(r, g, b, a))
    }

    /// Formats as a `#rrggbb` or `#rrggbbaa` hex string.
    #[must_use]
    pub fn to_hex_string(self) -> String {
        let to_byte = |c: f32| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
        if (self.a - 1.0).abs() < f32::EPSILON {
            format!(
                "#{:02x}{:02x}{:02x}",
                to_byte(self.r),
                to_byte(self.g),
                to_byte(self.b)
            )
        } else {
            format!(
                "#{:02x}{:02x}{:02x}{:02x}",
                to_byte(self.r),
                to_byte(self.g),
                to_byte(self.b),
                to_byte(self.a)
            )
        }
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::WHITE
    }
}

impl TryFrom<String> for Color {
    type Error = EngineError;

    fn try_from(text: String) -> EngineResult<Self> {
        Self::parse(&text)
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.to_hex_string()
    }
}
