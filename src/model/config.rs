use crate::foundation::color::Rgb8;
use crate::foundation::error::{QrMarkError, QrMarkResult};
use crate::model::overlay::{MarkShape, OverlaySource, OverlaySpec};
use crate::model::request::{DEFAULT_PAYLOAD, EcLevel, EncodingRequest};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Mark padding used when the configured value is zero.
pub const DEFAULT_LOGO_PADDING: u32 = 12;

/// JSON-facing generator state.
///
/// Field names follow the studio form (`fgColor`, `imageSize`, ...). Every field is optional in
/// the file; missing ones take the defaults from [`QrConfig::default`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct QrConfig {
    /// Text or URL to encode.
    pub value: String,
    /// Requested display size in pixels, carried into `EncodingRequest::target_pixel_size`.
    /// Validated but not applied to the render.
    pub size: u32,
    /// Dark module color.
    pub fg_color: Rgb8,
    /// Light module color, also used for the mark's quiet zone.
    pub bg_color: Rgb8,
    /// Error-correction level.
    pub level: EcLevel,
    /// Whether the center mark is drawn.
    pub include_image: bool,
    /// Mark image: a `data:` URL or a path relative to the config's directory.
    pub image_src: Option<String>,
    /// Mark edge in percent of the working resolution (10..=35).
    pub image_size: u32,
    /// Quiet zone width in modules.
    pub margin: u32,
    /// Mark padding in pixels at the 400px reference size. Zero means the default.
    pub logo_padding: u32,
    /// Mark outline.
    pub logo_shape: MarkShape,
}

impl Default for QrConfig {
    fn default() -> Self {
        Self {
            value: DEFAULT_PAYLOAD.to_owned(),
            size: 400,
            fg_color: Rgb8::BLACK,
            bg_color: Rgb8::WHITE,
            level: EcLevel::H,
            include_image: false,
            image_src: None,
            image_size: 22,
            margin: 2,
            logo_padding: DEFAULT_LOGO_PADDING,
            logo_shape: MarkShape::Square,
        }
    }
}

impl QrConfig {
    /// Parse a config from a JSON reader.
    pub fn from_reader<R: std::io::Read>(r: R) -> QrMarkResult<Self> {
        serde_json::from_reader(r)
            .map_err(|e| QrMarkError::validation(format!("parse config JSON: {e}")))
    }

    /// Parse a config from a JSON file on disk.
    pub fn from_path(path: impl AsRef<Path>) -> QrMarkResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            QrMarkError::validation(format!("open config JSON '{}': {e}", path.display()))
        })?;
        Self::from_reader(BufReader::new(f))
    }

    /// Build the encoder request.
    pub fn to_request(&self) -> QrMarkResult<EncodingRequest> {
        let req = EncodingRequest {
            payload: self.value.clone(),
            target_pixel_size: self.size,
            quiet_margin: self.margin,
            foreground: self.fg_color,
            background: self.bg_color,
            level: self.level,
        };
        req.validate()?;
        Ok(req)
    }

    /// Build the overlay, if the config asks for one.
    ///
    /// Relative image paths resolve against `assets_root`. The image itself is not read here;
    /// load and decode failures surface during rendering.
    pub fn to_overlay(&self, assets_root: &Path) -> QrMarkResult<Option<OverlaySpec>> {
        let src = match self.image_src.as_deref().map(str::trim) {
            Some(s) if self.include_image && !s.is_empty() => s,
            _ => return Ok(None),
        };

        let source = if src.starts_with("data:") {
            OverlaySource::DataUrl(src.to_owned())
        } else {
            OverlaySource::Path(assets_root.join(src))
        };

        let padding = if self.logo_padding == 0 {
            DEFAULT_LOGO_PADDING
        } else {
            self.logo_padding
        };

        OverlaySpec::new(
            source,
            f64::from(self.image_size) / 100.0,
            self.logo_shape,
            padding,
        )
        .map(Some)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/model/config.rs"]
mod tests;
