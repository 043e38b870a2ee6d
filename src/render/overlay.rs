use crate::foundation::error::{QrMarkError, QrMarkResult};
use crate::foundation::math::premultiply_rgba8_in_place;
use crate::model::overlay::OverlaySource;
use base64::Engine as _;
use std::sync::Arc;

/// Decoded mark image, premultiplied RGBA8.
#[derive(Clone, Debug)]
pub struct PreparedImage {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// Tightly packed, row-major premultiplied RGBA8.
    pub rgba8_premul: Arc<Vec<u8>>,
}

/// Load and decode an overlay source.
///
/// Every failure (unreadable file, bad data URL, undecodable bytes, empty image) maps to
/// [`QrMarkError::OverlayDecodeFailed`].
pub fn load_overlay(source: &OverlaySource) -> QrMarkResult<PreparedImage> {
    let rgba = match source {
        OverlaySource::Decoded(img) => img.clone(),
        OverlaySource::Bytes(bytes) => decode_bytes(bytes)?,
        OverlaySource::Path(path) => {
            let bytes = std::fs::read(path).map_err(|e| {
                QrMarkError::overlay_decode(format!(
                    "failed to read overlay '{}': {e}",
                    path.display()
                ))
            })?;
            decode_bytes(&bytes)?
        }
        OverlaySource::DataUrl(url) => decode_bytes(&data_url_bytes(url)?)?,
    };

    let (width, height) = rgba.dimensions();
    if width == 0 || height == 0 {
        return Err(QrMarkError::overlay_decode("overlay image is empty"));
    }
    if width > u32::from(u16::MAX) || height > u32::from(u16::MAX) {
        return Err(QrMarkError::overlay_decode(format!(
            "overlay image too large: {width}x{height}"
        )));
    }

    let mut rgba8_premul = rgba.into_raw();
    premultiply_rgba8_in_place(&mut rgba8_premul);
    Ok(PreparedImage {
        width,
        height,
        rgba8_premul: Arc::new(rgba8_premul),
    })
}

fn decode_bytes(bytes: &[u8]) -> QrMarkResult<image::RgbaImage> {
    let dyn_img = image::load_from_memory(bytes)
        .map_err(|e| QrMarkError::overlay_decode(format!("decode overlay image: {e}")))?;
    Ok(dyn_img.to_rgba8())
}

/// Extract the payload of a base64 `data:` URL.
pub(crate) fn data_url_bytes(url: &str) -> QrMarkResult<Vec<u8>> {
    let rest = url
        .trim()
        .strip_prefix("data:")
        .ok_or_else(|| QrMarkError::overlay_decode("not a data URL"))?;
    let (header, payload) = rest
        .split_once(',')
        .ok_or_else(|| QrMarkError::overlay_decode("data URL has no payload"))?;
    if !header.ends_with(";base64") {
        return Err(QrMarkError::overlay_decode(
            "only base64 data URLs are supported",
        ));
    }
    base64::engine::general_purpose::STANDARD
        .decode(payload.trim())
        .map_err(|e| QrMarkError::overlay_decode(format!("data URL base64: {e}")))
}

#[cfg(test)]
#[path = "../../tests/unit/render/overlay.rs"]
mod tests;
