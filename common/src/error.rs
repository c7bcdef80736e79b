use thiserror::Error;

/// Failures of the shared trajectory data model
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TrajError {
    /// A column lookup by name found nothing
    #[error("unknown column: {0}")]
    UnknownColumn(String),

    /// A trajectory's x and y sequences differ in length
    #[error("x/y length mismatch for \"{label}\": {x_len} != {y_len}")]
    LengthMismatch {
        /// Display label of the offending trajectory
        label: String,
        /// Length of the x sequence
        x_len: usize,
        /// Length of the y sequence
        y_len: usize,
    },

    /// More default-colored series requested than the palette holds
    #[error("{requested} series requested but the palette has {available} colors; pass explicit colors")]
    PaletteExhausted {
        /// Number of series the caller asked for
        requested: usize,
        /// Number of palette entries
        available: usize,
    },

    /// A frame index lies outside a trajectory's valid range
    #[error("frame index {index} out of range for \"{label}\" (len {len})")]
    FrameOutOfRange {
        /// The offending frame index
        index: usize,
        /// Display label of the trajectory
        label: String,
        /// Length of the trajectory
        len: usize,
    },
}
