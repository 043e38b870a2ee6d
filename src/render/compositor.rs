use crate::encode::matrix::encode_matrix;
use crate::foundation::color::Rgb8;
use crate::foundation::error::{QrMarkError, QrMarkResult};
use crate::foundation::math::premul_over_in_place;
use crate::model::overlay::{MarkShape, OverlaySpec};
use crate::model::request::{EcLevel, EncodingRequest};
use crate::render::overlay::{PreparedImage, load_overlay};
use crate::render::shape::bezpath_to_cpu;
use crate::render::surface::{CompositedImage, pixmap_from_premul_bytes};
use kurbo::Point;
use std::sync::Arc;

/// Working resolution used when none is configured.
pub const DEFAULT_WORKING_RESOLUTION: u32 = 1000;

/// Canvas size at which `OverlaySpec::padding_pixels` is expressed.
pub const PADDING_REFERENCE: f64 = 400.0;

/// Compositor configuration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CompositorOpts {
    /// Edge length of every rendered image, in pixels.
    pub working_resolution: u32,
    /// Canvas size the overlay padding is specified against.
    pub padding_reference: f64,
}

impl Default for CompositorOpts {
    fn default() -> Self {
        Self {
            working_resolution: DEFAULT_WORKING_RESOLUTION,
            padding_reference: PADDING_REFERENCE,
        }
    }
}

impl CompositorOpts {
    /// Return options with a different working resolution.
    pub fn with_working_resolution(mut self, resolution: u32) -> Self {
        self.working_resolution = resolution;
        self
    }
}

/// Placement of the center mark on the working canvas.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OverlayGeometry {
    /// Canvas center.
    pub center: Point,
    /// Edge of the mark image.
    pub overlay_edge: f64,
    /// Padding converted from the reference size to the working resolution.
    pub scaled_padding: f64,
    /// Edge of the background-filled mask, `overlay_edge + scaled_padding`.
    pub mask_edge: f64,
}

impl OverlayGeometry {
    /// Geometry of `overlay` on a `resolution`-sized canvas.
    pub fn compute(resolution: u32, overlay: &OverlaySpec, padding_reference: f64) -> Self {
        let res = f64::from(resolution);
        let overlay_edge = res * overlay.relative_size;
        let scaled_padding = f64::from(overlay.padding_pixels) * res / padding_reference;
        Self {
            center: Point::new(res / 2.0, res / 2.0),
            overlay_edge,
            scaled_padding,
            mask_edge: overlay_edge + scaled_padding,
        }
    }
}

/// A finished render plus the overlay failure it recovered from, if any.
#[derive(Debug)]
pub struct RenderOutcome {
    /// The composited image.
    pub image: CompositedImage,
    /// Set when an overlay was requested but could not be drawn; `image` is then the bare matrix.
    pub overlay_error: Option<QrMarkError>,
}

/// Renders matrices and composites the optional center mark.
#[derive(Debug, Clone, Default)]
pub struct Compositor {
    opts: CompositorOpts,
}

impl Compositor {
    /// Build a compositor, validating its options.
    pub fn new(opts: CompositorOpts) -> QrMarkResult<Self> {
        if opts.working_resolution == 0 || opts.working_resolution > u32::from(u16::MAX) {
            return Err(QrMarkError::validation(format!(
                "working_resolution must be within 1..={}, got {}",
                u16::MAX,
                opts.working_resolution
            )));
        }
        if !(opts.padding_reference.is_finite() && opts.padding_reference > 0.0) {
            return Err(QrMarkError::validation(
                "padding_reference must be a positive number",
            ));
        }
        Ok(Self { opts })
    }

    /// Options this compositor was built with.
    pub fn opts(&self) -> CompositorOpts {
        self.opts
    }

    /// Render `request`, compositing `overlay` when given.
    ///
    /// Overlay load failures are logged and the bare matrix is returned; use
    /// [`Compositor::render_detailed`] to observe them.
    pub fn render(
        &self,
        request: &EncodingRequest,
        overlay: Option<&OverlaySpec>,
    ) -> QrMarkResult<CompositedImage> {
        self.render_detailed(request, overlay).map(|o| o.image)
    }

    /// Render and report whether the overlay step fell back.
    #[tracing::instrument(
        skip_all,
        fields(resolution = self.opts.working_resolution, overlay = overlay.is_some())
    )]
    pub fn render_detailed(
        &self,
        request: &EncodingRequest,
        overlay: Option<&OverlaySpec>,
    ) -> QrMarkResult<RenderOutcome> {
        request.validate()?;
        if let Some(o) = overlay {
            o.validate()?;
        }

        let resolution = self.opts.working_resolution;
        let mut base = encode_matrix(request, resolution)?;

        let Some(overlay) = overlay else {
            return Ok(RenderOutcome {
                image: CompositedImage::from_rgba(base),
                overlay_error: None,
            });
        };

        if request.level != EcLevel::H {
            tracing::warn!(
                level = %request.level,
                relative_size = overlay.relative_size,
                "center mark over a code below level H may not scan"
            );
        }

        let layer = load_overlay(&overlay.source).and_then(|mark| {
            let geom = OverlayGeometry::compute(resolution, overlay, self.opts.padding_reference);
            tracing::debug!(
                overlay_edge = geom.overlay_edge,
                scaled_padding = geom.scaled_padding,
                mask_edge = geom.mask_edge,
                shape = %overlay.shape,
                "compositing center mark"
            );
            draw_overlay_layer(resolution, &geom, overlay.shape, request.background, &mark)
        });

        let overlay_error = match layer {
            Ok(layer) => {
                // The base is opaque, so straight and premultiplied bytes coincide.
                if !premul_over_in_place(&mut base, layer.data_as_u8_slice()) {
                    return Err(QrMarkError::Other(anyhow::anyhow!(
                        "overlay layer does not match canvas size"
                    )));
                }
                None
            }
            Err(e) => {
                tracing::warn!(error = %e, "center mark skipped, rendering bare matrix");
                Some(e)
            }
        };

        Ok(RenderOutcome {
            image: CompositedImage::from_rgba(base),
            overlay_error,
        })
    }
}

/// Render the mask and the clipped mark into a transparent layer the size of the canvas.
fn draw_overlay_layer(
    resolution: u32,
    geom: &OverlayGeometry,
    shape: MarkShape,
    background: Rgb8,
    mark: &PreparedImage,
) -> QrMarkResult<vello_cpu::Pixmap> {
    let size: u16 = resolution
        .try_into()
        .map_err(|_| QrMarkError::validation("working resolution exceeds u16"))?;
    let mut ctx = vello_cpu::RenderContext::new(size, size);
    ctx.set_blend_mode(vello_cpu::peniko::BlendMode::default());
    ctx.set_transform(vello_cpu::kurbo::Affine::IDENTITY);

    ctx.set_paint_transform(vello_cpu::kurbo::Affine::IDENTITY);
    ctx.set_paint(vello_cpu::peniko::Color::from_rgba8(
        background.r,
        background.g,
        background.b,
        255,
    ));
    ctx.fill_path(&bezpath_to_cpu(&shape.path(geom.center, geom.mask_edge)));

    // Filling the inner outline with an image paint clips the stretched mark to the shape.
    let pixmap = pixmap_from_premul_bytes(&mark.rgba8_premul, mark.width, mark.height)?;
    let edge = geom.overlay_edge;
    let origin = (geom.center.x - edge / 2.0, geom.center.y - edge / 2.0);
    ctx.set_paint(vello_cpu::Image {
        image: vello_cpu::ImageSource::Pixmap(Arc::new(pixmap)),
        sampler: vello_cpu::peniko::ImageSampler::default(),
    });
    ctx.set_paint_transform(
        vello_cpu::kurbo::Affine::translate(origin)
            * vello_cpu::kurbo::Affine::scale_non_uniform(
                edge / f64::from(mark.width),
                edge / f64::from(mark.height),
            ),
    );
    ctx.fill_path(&bezpath_to_cpu(&shape.path(geom.center, edge)));
    ctx.set_paint_transform(vello_cpu::kurbo::Affine::IDENTITY);

    ctx.flush();
    let mut layer = vello_cpu::Pixmap::new(size, size);
    ctx.render_to_pixmap(&mut layer);
    Ok(layer)
}

#[cfg(test)]
#[path = "../../tests/unit/render/compositor.rs"]
mod tests;
