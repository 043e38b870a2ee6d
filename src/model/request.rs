use crate::foundation::color::Rgb8;
use crate::foundation::error::{QrMarkError, QrMarkResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Payload encoded in place of an empty string.
pub const PLACEHOLDER_PAYLOAD: &str = "SIDDIQ-STUDIO";

/// Payload used when no content has been entered yet.
pub const DEFAULT_PAYLOAD: &str = "ANYTHING WORTH HAVING TAKES TIME";

/// QR error-correction level.
///
/// Higher levels tolerate more obscured modules; `H` (about 30% recovery) is the only level that
/// reliably survives a center mark at the larger overlay sizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum EcLevel {
    /// ~7% recovery.
    L,
    /// ~15% recovery.
    M,
    /// ~25% recovery.
    Q,
    /// ~30% recovery.
    #[default]
    H,
}

impl EcLevel {
    pub(crate) fn to_qrcode(self) -> qrcode::EcLevel {
        match self {
            Self::L => qrcode::EcLevel::L,
            Self::M => qrcode::EcLevel::M,
            Self::Q => qrcode::EcLevel::Q,
            Self::H => qrcode::EcLevel::H,
        }
    }
}

impl fmt::Display for EcLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::L => "L",
            Self::M => "M",
            Self::Q => "Q",
            Self::H => "H",
        };
        f.write_str(s)
    }
}

impl FromStr for EcLevel {
    type Err = QrMarkError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "L" => Ok(Self::L),
            "M" => Ok(Self::M),
            "Q" => Ok(Self::Q),
            "H" => Ok(Self::H),
            other => Err(QrMarkError::validation(format!(
                "unknown error correction level \"{other}\" (expected L, M, Q or H)"
            ))),
        }
    }
}

/// Everything the encoder needs to produce the base matrix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodingRequest {
    /// Text or URL to encode. Empty means [`PLACEHOLDER_PAYLOAD`].
    pub payload: String,
    /// Requested display size in pixels. Only validated; renders always come out at the
    /// working resolution, and callers resample with [`CompositedImage::scaled_to`].
    ///
    /// [`CompositedImage::scaled_to`]: crate::CompositedImage::scaled_to
    pub target_pixel_size: u32,
    /// Quiet zone width in modules.
    pub quiet_margin: u32,
    /// Dark module color.
    pub foreground: Rgb8,
    /// Light module and quiet zone color.
    pub background: Rgb8,
    /// Error-correction level passed to the encoder.
    pub level: EcLevel,
}

impl Default for EncodingRequest {
    fn default() -> Self {
        Self {
            payload: DEFAULT_PAYLOAD.to_owned(),
            target_pixel_size: 400,
            quiet_margin: 2,
            foreground: Rgb8::BLACK,
            background: Rgb8::WHITE,
            level: EcLevel::H,
        }
    }
}

impl EncodingRequest {
    /// Request for `payload` with default colors, margin and level.
    pub fn new(payload: impl Into<String>) -> Self {
        Self {
            payload: payload.into(),
            ..Self::default()
        }
    }

    /// Builder-style color override.
    pub fn with_colors(mut self, foreground: Rgb8, background: Rgb8) -> Self {
        self.foreground = foreground;
        self.background = background;
        self
    }

    /// Builder-style level override.
    pub fn with_level(mut self, level: EcLevel) -> Self {
        self.level = level;
        self
    }

    /// The string actually handed to the encoder.
    pub fn effective_payload(&self) -> &str {
        if self.payload.is_empty() {
            PLACEHOLDER_PAYLOAD
        } else {
            &self.payload
        }
    }

    /// Check request invariants.
    pub fn validate(&self) -> QrMarkResult<()> {
        if self.target_pixel_size == 0 {
            return Err(QrMarkError::validation(
                "target_pixel_size must be greater than 0",
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/model/request.rs"]
mod tests;
