use crate::foundation::error::{QrMarkError, QrMarkResult};
use crate::model::request::EncodingRequest;
use image::{Rgba, RgbaImage};

/// Module grid produced by the encoder, before rasterization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleGrid {
    /// Modules per side (21 for version 1, +4 per version).
    pub width: usize,
    /// Row-major dark flags.
    pub dark: Vec<bool>,
}

impl ModuleGrid {
    /// Whether module `(x, y)` is dark. Out-of-range coordinates are light.
    pub fn is_dark(&self, x: usize, y: usize) -> bool {
        x < self.width && y < self.width && self.dark[y * self.width + x]
    }
}

/// Encode the request's effective payload at the request's correction level.
pub fn encode_modules(request: &EncodingRequest) -> QrMarkResult<ModuleGrid> {
    let payload = request.effective_payload();
    let code = qrcode::QrCode::with_error_correction_level(
        payload.as_bytes(),
        request.level.to_qrcode(),
    )
    .map_err(|e| match e {
        qrcode::types::QrError::DataTooLong => QrMarkError::EncodingCapacityExceeded {
            level: request.level,
            payload_bytes: payload.len(),
        },
        other => QrMarkError::Other(anyhow::anyhow!("qr encode failed: {other}")),
    })?;

    let width = code.width();
    let dark = code
        .to_colors()
        .into_iter()
        .map(|c| c == qrcode::Color::Dark)
        .collect();
    Ok(ModuleGrid { width, dark })
}

/// Rasterize `grid` into a `resolution × resolution` opaque image.
///
/// The symbol plus `quiet_margin` modules on each side is stretched over the full canvas with a
/// fractional scale; each pixel takes the color of the module its top-left corner falls into.
/// Pixels in the margin are background.
pub fn rasterize(grid: &ModuleGrid, request: &EncodingRequest, resolution: u32) -> RgbaImage {
    let fg = Rgba(request.foreground.to_rgba8());
    let bg = Rgba(request.background.to_rgba8());
    let mut img = RgbaImage::from_pixel(resolution, resolution, bg);
    if grid.width == 0 {
        return img;
    }

    let total_modules = grid.width as f64 + 2.0 * f64::from(request.quiet_margin);
    let scale = f64::from(resolution) / total_modules;
    let scaled_margin = f64::from(request.quiet_margin) * scale;
    let inner_end = f64::from(resolution) - scaled_margin;
    let last = grid.width - 1;

    let module_at = |p: u32| -> Option<usize> {
        let p = f64::from(p);
        if p < scaled_margin || p >= inner_end {
            return None;
        }
        Some((((p - scaled_margin) / scale).floor() as usize).min(last))
    };

    let cols: Vec<Option<usize>> = (0..resolution).map(module_at).collect();
    for (y, row) in img.rows_mut().enumerate() {
        let Some(my) = module_at(y as u32) else {
            continue;
        };
        for (px, mx) in row.zip(&cols) {
            if let Some(mx) = *mx
                && grid.is_dark(mx, my)
            {
                *px = fg;
            }
        }
    }
    img
}

/// Encode and rasterize in one step.
pub fn encode_matrix(request: &EncodingRequest, resolution: u32) -> QrMarkResult<RgbaImage> {
    let grid = encode_modules(request)?;
    tracing::debug!(
        modules = grid.width,
        level = %request.level,
        resolution,
        "encoded base matrix"
    );
    Ok(rasterize(&grid, request, resolution))
}

#[cfg(test)]
#[path = "../../tests/unit/encode/matrix.rs"]
mod tests;
