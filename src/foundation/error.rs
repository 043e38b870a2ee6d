use crate::model::request::EcLevel;

/// Convenience result type used across qrmark.
pub type QrMarkResult<T> = Result<T, QrMarkError>;

/// Error taxonomy for rendering and exporting marked codes.
#[derive(thiserror::Error, Debug)]
pub enum QrMarkError {
    /// The payload does not fit into a QR symbol at the requested correction level.
    #[error("encoding capacity exceeded: {payload_bytes} bytes do not fit at level {level}")]
    EncodingCapacityExceeded {
        /// Correction level the encode was attempted at.
        level: EcLevel,
        /// Payload length in bytes.
        payload_bytes: usize,
    },

    /// The overlay image could not be loaded or decoded.
    ///
    /// `Compositor::render` does not return this; it falls back to the bare matrix.
    #[error("overlay decode failed: {0}")]
    OverlayDecodeFailed(String),

    /// Raster serialization of a composited image failed.
    #[error("export serialization failed: {0}")]
    ExportSerializationFailed(String),

    /// Invalid user-provided request, overlay or config data.
    #[error("validation error: {0}")]
    Validation(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl QrMarkError {
    /// Build a [`QrMarkError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`QrMarkError::OverlayDecodeFailed`] value.
    pub fn overlay_decode(msg: impl Into<String>) -> Self {
        Self::OverlayDecodeFailed(msg.into())
    }

    /// Build a [`QrMarkError::ExportSerializationFailed`] value.
    pub fn export(msg: impl Into<String>) -> Self {
        Self::ExportSerializationFailed(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
