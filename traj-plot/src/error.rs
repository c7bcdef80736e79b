use thiserror::Error;

/// Failures of the animated GIF exporter
#[derive(Debug, Error)]
pub enum ExportError {
    /// Invalid trajectory data or frame window
    #[error(transparent)]
    Trajectory(#[from] common::TrajError),

    /// The plotting backend rejected a drawing operation
    #[error("frame rendering failed: {0}")]
    Draw(String),

    /// GIF encoding or frame image decoding failed
    #[error(transparent)]
    Image(#[from] image::ImageError),

    /// Filesystem access failed
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Erase the backend-specific plotters error type
pub(crate) fn draw_err(e: impl std::error::Error) -> ExportError {
    ExportError::Draw(e.to_string())
}
