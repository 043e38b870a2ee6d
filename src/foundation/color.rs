use crate::foundation::error::{QrMarkError, QrMarkResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Opaque sRGB color, 8 bits per channel.
///
/// Serialized as a `#rrggbb` string, the form produced by color pickers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb8 {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
}

impl Rgb8 {
    /// Pure black.
    pub const BLACK: Self = Self::new(0, 0, 0);
    /// Pure white.
    pub const WHITE: Self = Self::new(255, 255, 255);

    /// Build a color from its channels.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse `#rrggbb` or `#rgb` (the leading `#` is optional, hex digits are case-insensitive).
    pub fn parse_hex(s: &str) -> QrMarkResult<Self> {
        let s = s.trim();
        let digits = s.strip_prefix('#').unwrap_or(s);

        fn hex_byte(pair: &str) -> QrMarkResult<u8> {
            u8::from_str_radix(pair, 16)
                .map_err(|_| QrMarkError::validation(format!("invalid hex byte \"{pair}\"")))
        }

        if !digits.is_ascii() {
            return Err(QrMarkError::validation(format!(
                "hex color must be ascii, got \"{s}\""
            )));
        }

        match digits.len() {
            6 => Ok(Self::new(
                hex_byte(&digits[0..2])?,
                hex_byte(&digits[2..4])?,
                hex_byte(&digits[4..6])?,
            )),
            3 => {
                let nib = |i: usize| hex_byte(&digits[i..i + 1]).map(|v| v * 17);
                Ok(Self::new(nib(0)?, nib(1)?, nib(2)?))
            }
            _ => Err(QrMarkError::validation(format!(
                "hex color must be #RRGGBB or #RGB, got \"{s}\""
            ))),
        }
    }

    /// Lowercase `#rrggbb` form.
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Opaque RGBA8 pixel.
    pub fn to_rgba8(self) -> [u8; 4] {
        [self.r, self.g, self.b, 255]
    }
}

impl fmt::Display for Rgb8 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl FromStr for Rgb8 {
    type Err = QrMarkError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_hex(s)
    }
}

impl Serialize for Rgb8 {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Rgb8 {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::parse_hex(&s).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/color.rs"]
mod tests;
