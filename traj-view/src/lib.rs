#[macro_use]
extern crate log;

mod error;
mod options;
mod viewer;

pub use error::ViewerError;
pub use options::ViewerOptions;
pub use viewer::{dynamic_trajectory_plot, TrajectoryViewer};
