use crate::foundation::error::{QrMarkError, QrMarkResult};
use image::RgbaImage;

/// Final square raster produced by a render.
///
/// Straight-alpha RGBA8. Since the base matrix is opaque, every pixel of a finished render has
/// alpha 255.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CompositedImage {
    pixels: RgbaImage,
}

impl CompositedImage {
    pub(crate) fn from_rgba(pixels: RgbaImage) -> Self {
        Self { pixels }
    }

    /// Build from raw straight-alpha RGBA8 bytes.
    pub fn from_raw(size: u32, data: Vec<u8>) -> QrMarkResult<Self> {
        RgbaImage::from_raw(size, size, data)
            .map(Self::from_rgba)
            .ok_or_else(|| QrMarkError::validation("rgba buffer length does not match size"))
    }

    /// Edge length in pixels.
    pub fn size(&self) -> u32 {
        self.pixels.width()
    }

    /// RGBA8 pixel at `(x, y)`. Panics when out of bounds.
    pub fn pixel(&self, x: u32, y: u32) -> [u8; 4] {
        self.pixels.get_pixel(x, y).0
    }

    /// Tightly packed, row-major RGBA8 bytes.
    pub fn as_raw(&self) -> &[u8] {
        self.pixels.as_raw()
    }

    /// Borrow as an `image` buffer.
    pub fn as_image(&self) -> &RgbaImage {
        &self.pixels
    }

    /// Consume into an `image` buffer.
    pub fn into_image(self) -> RgbaImage {
        self.pixels
    }

    /// Resample to `target` pixels per side for display.
    ///
    /// Returns a clone when the size already matches.
    pub fn scaled_to(&self, target: u32) -> QrMarkResult<Self> {
        if target == 0 {
            return Err(QrMarkError::validation("display size must be greater than 0"));
        }
        if target == self.size() {
            return Ok(self.clone());
        }
        let resized = image::imageops::resize(
            &self.pixels,
            target,
            target,
            image::imageops::FilterType::Lanczos3,
        );
        Ok(Self::from_rgba(resized))
    }
}

/// Pixmap helpers shared by the compositor.
pub(crate) fn pixmap_from_premul_bytes(
    bytes: &[u8],
    width: u32,
    height: u32,
) -> QrMarkResult<vello_cpu::Pixmap> {
    let w: u16 = width
        .try_into()
        .map_err(|_| QrMarkError::validation("pixmap width exceeds u16"))?;
    let h: u16 = height
        .try_into()
        .map_err(|_| QrMarkError::validation("pixmap height exceeds u16"))?;
    if bytes.len()
        != (width as usize)
            .saturating_mul(height as usize)
            .saturating_mul(4)
    {
        return Err(QrMarkError::validation("pixmap byte len mismatch"));
    }
    let pixels = bytes
        .chunks_exact(4)
        .map(|px| vello_cpu::peniko::color::PremulRgba8::from_u8_array([px[0], px[1], px[2], px[3]]))
        .collect::<Vec<_>>();
    Ok(vello_cpu::Pixmap::from_parts_with_opacity(
        pixels, w, h, true,
    ))
}

#[cfg(test)]
#[path = "../../tests/unit/render/surface.rs"]
mod tests;
