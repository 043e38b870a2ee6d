use crate::foundation::error::{QrMarkError, QrMarkResult};
use crate::render::surface::CompositedImage;
use std::io::Cursor;

/// Product prefix of default export file names.
pub const DEFAULT_PRODUCT: &str = "siddiq-studio";

/// Encoded PNG plus the file name it should be saved under.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportedPng {
    /// Sanitized file name ending in `.png`.
    pub filename: String,
    /// PNG byte stream.
    pub bytes: Vec<u8>,
}

/// `<product>-<theme-id>-qr.png`.
pub fn default_export_filename(product: &str, theme_id: &str) -> String {
    format!("{}-{}-qr.png", sanitize(product), sanitize(theme_id))
}

/// Serialize `image` to PNG.
///
/// An empty `filename_hint` falls back to [`default_export_filename`] with the default product
/// and theme.
pub fn export_png(image: &CompositedImage, filename_hint: &str) -> QrMarkResult<ExportedPng> {
    if image.size() == 0 || image.as_raw().is_empty() {
        return Err(QrMarkError::export("image has not been rendered"));
    }

    let mut bytes = Vec::new();
    image
        .as_image()
        .write_to(&mut Cursor::new(&mut bytes), image::ImageFormat::Png)
        .map_err(|e| QrMarkError::export(format!("encode png: {e}")))?;

    let filename = export_filename(filename_hint);
    tracing::debug!(%filename, bytes = bytes.len(), "exported png");
    Ok(ExportedPng { filename, bytes })
}

fn export_filename(hint: &str) -> String {
    let hint = hint.trim();
    let stem = hint
        .strip_suffix(".png")
        .or_else(|| hint.strip_suffix(".PNG"))
        .unwrap_or(hint);
    let stem = sanitize(stem);
    if stem.is_empty() {
        return default_export_filename(DEFAULT_PRODUCT, "absolute");
    }
    format!("{stem}.png")
}

/// Keep `[A-Za-z0-9._-]`, map whitespace to `-`, drop everything else.
fn sanitize(s: &str) -> String {
    s.trim()
        .chars()
        .filter_map(|c| match c {
            c if c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-') => Some(c),
            c if c.is_whitespace() => Some('-'),
            _ => None,
        })
        .collect::<String>()
        .trim_start_matches('.')
        .to_owned()
}

#[cfg(test)]
#[path = "../../tests/unit/export/png.rs"]
mod tests;
