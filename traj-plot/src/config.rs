use std::{path::PathBuf, time::Duration};

use common::FrameWindow;

/// Parameters of an animated GIF export
#[derive(Debug, Clone)]
pub struct GifConfig {
    /// The frame window to render
    pub window: FrameWindow,
    /// Pixel dimensions of each frame
    pub dims: (u32, u32),
    /// Output path of the assembled GIF
    pub gif_name: PathBuf,
    /// Display duration of each frame
    pub frame_duration: Duration,
    /// Whether to delete the per-frame images once the GIF is assembled
    pub cleanup: bool,
}

impl Default for GifConfig {
    fn default() -> Self {
        Self {
            window: FrameWindow::default(),
            dims: (800, 600),
            gif_name: PathBuf::from("animated_plot.gif"),
            frame_duration: Duration::from_millis(100),
            cleanup: true,
        }
    }
}
