//! qrmark renders QR codes with an optional centered mark and exports them as PNG.
//!
//! The pipeline is a single synchronous call:
//!
//! - Describe the code with an [`EncodingRequest`] (payload, colors, margin, level)
//! - Optionally describe a center mark with an [`OverlaySpec`]
//! - Render with a [`Compositor`] into a [`CompositedImage`]
//! - Serialize with [`export_png`]
//!
//! [`RenderSession`] adds request sequencing for callers that re-render on every input change,
//! possibly from several threads.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod encode;
mod export;
mod foundation;
mod model;
mod render;
mod session;

pub use crate::encode::matrix::{ModuleGrid, encode_matrix, encode_modules, rasterize};
pub use crate::export::png::{DEFAULT_PRODUCT, ExportedPng, default_export_filename, export_png};
pub use crate::foundation::color::Rgb8;
pub use crate::foundation::error::{QrMarkError, QrMarkResult};
pub use crate::model::config::{DEFAULT_LOGO_PADDING, QrConfig};
pub use crate::model::overlay::{
    MAX_RELATIVE_SIZE, MIN_RELATIVE_SIZE, MarkShape, OverlaySource, OverlaySpec,
};
pub use crate::model::request::{DEFAULT_PAYLOAD, EcLevel, EncodingRequest, PLACEHOLDER_PAYLOAD};
pub use crate::model::suggestion::StyleSuggestion;
pub use crate::model::theme::ThemeConfig;
pub use crate::render::compositor::{
    Compositor, CompositorOpts, DEFAULT_WORKING_RESOLUTION, OverlayGeometry, PADDING_REFERENCE,
    RenderOutcome,
};
pub use crate::render::overlay::{PreparedImage, load_overlay};
pub use crate::render::shape::ROUNDED_CORNER_FRACTION;
pub use crate::render::surface::CompositedImage;
pub use crate::session::{OutputSlot, RenderSession, RenderTicket, SessionRender};
pub use kurbo::{BezPath, Point};
