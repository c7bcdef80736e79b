//! Shared data model for the trajectory visualization crates

#![deny(unused_imports, unused_crate_dependencies)]
#![warn(missing_docs)]

mod color;
mod error;
mod frame_window;
mod table;
mod trajectory;

pub use color::{default_colors, Color, BLACK, PALETTE};
pub use error::TrajError;
pub use frame_window::FrameWindow;
pub use table::Table;
pub use trajectory::{default_labels, Trajectory};

/// A sequence of (x, y) points ready for drawing
pub type Path = Vec<[f64; 2]>;
