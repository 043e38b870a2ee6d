use crate::foundation::error::{QrMarkError, QrMarkResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

/// Smallest accepted overlay edge, as a fraction of the working resolution.
pub const MIN_RELATIVE_SIZE: f64 = 0.10;
/// Largest accepted overlay edge, as a fraction of the working resolution.
pub const MAX_RELATIVE_SIZE: f64 = 0.35;

/// Outline used for both the quiet-zone mask and the clipped mark image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MarkShape {
    /// Axis-aligned square.
    #[default]
    Square,
    /// Disk.
    Circle,
    /// Square with rounded corners.
    Rounded,
    /// Regular hexagon, pointy side up.
    Hexagon,
    /// Regular octagon with axis-aligned sides.
    Octagon,
    /// Square rotated by 45 degrees.
    Diamond,
}

impl MarkShape {
    /// All shapes, in declaration order.
    pub const ALL: [Self; 6] = [
        Self::Square,
        Self::Circle,
        Self::Rounded,
        Self::Hexagon,
        Self::Octagon,
        Self::Diamond,
    ];

    /// Lowercase identifier, as used in config files and on the command line.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Square => "square",
            Self::Circle => "circle",
            Self::Rounded => "rounded",
            Self::Hexagon => "hexagon",
            Self::Octagon => "octagon",
            Self::Diamond => "diamond",
        }
    }
}

impl fmt::Display for MarkShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MarkShape {
    type Err = QrMarkError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|shape| shape.as_str() == s)
            .ok_or_else(|| QrMarkError::validation(format!("unknown mark shape \"{s}\"")))
    }
}

/// Where the mark image comes from.
#[derive(Clone, PartialEq)]
pub enum OverlaySource {
    /// Encoded image bytes (PNG, JPEG, ...).
    Bytes(Vec<u8>),
    /// Encoded image file on disk, read at render time.
    Path(PathBuf),
    /// `data:` URL with a base64 payload, as produced by browser file readers.
    DataUrl(String),
    /// Already decoded straight-alpha bitmap.
    Decoded(image::RgbaImage),
}

impl fmt::Debug for OverlaySource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bytes(b) => f.debug_tuple("Bytes").field(&b.len()).finish(),
            Self::Path(p) => f.debug_tuple("Path").field(p).finish(),
            Self::DataUrl(u) => f
                .debug_tuple("DataUrl")
                .field(&u.split(',').next().unwrap_or_default())
                .finish(),
            Self::Decoded(img) => f
                .debug_tuple("Decoded")
                .field(&img.dimensions())
                .finish(),
        }
    }
}

/// Centered mark composited over the matrix.
#[derive(Debug, Clone, PartialEq)]
pub struct OverlaySpec {
    /// Image to draw.
    pub source: OverlaySource,
    /// Mark edge as a fraction of the working resolution, in `[0.10, 0.35]`.
    pub relative_size: f64,
    /// Mask and clip outline.
    pub shape: MarkShape,
    /// Quiet-zone padding around the mark, in pixels at the 400px reference size.
    pub padding_pixels: u32,
}

impl OverlaySpec {
    /// Validated overlay description.
    pub fn new(
        source: OverlaySource,
        relative_size: f64,
        shape: MarkShape,
        padding_pixels: u32,
    ) -> QrMarkResult<Self> {
        let spec = Self {
            source,
            relative_size,
            shape,
            padding_pixels,
        };
        spec.validate()?;
        Ok(spec)
    }

    /// Check that `relative_size` lies in `[MIN_RELATIVE_SIZE, MAX_RELATIVE_SIZE]`.
    pub fn validate(&self) -> QrMarkResult<()> {
        if !(MIN_RELATIVE_SIZE..=MAX_RELATIVE_SIZE).contains(&self.relative_size) {
            return Err(QrMarkError::validation(format!(
                "overlay relative_size must be within [{MIN_RELATIVE_SIZE}, {MAX_RELATIVE_SIZE}], got {}",
                self.relative_size
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/model/overlay.rs"]
mod tests;
