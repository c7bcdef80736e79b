#[macro_use]
extern crate log;

mod config;
mod error;
mod frame;
mod gif_export;

pub use config::GifConfig;
pub use error::ExportError;
pub use gif_export::{create_animated_trajectory_gif, GifExport};
