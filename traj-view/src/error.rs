use thiserror::Error;

/// Failures of the interactive viewer
#[derive(Debug, Error)]
pub enum ViewerError {
    /// Trajectory resolution from the table failed
    #[error(transparent)]
    Trajectory(#[from] common::TrajError),

    /// The native window could not be created or run
    #[error(transparent)]
    Window(#[from] eframe::Error),
}
