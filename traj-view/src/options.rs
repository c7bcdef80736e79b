use common::Color;

/// Options accepted by [`dynamic_trajectory_plot`](crate::dynamic_trajectory_plot)
#[derive(Debug, Clone)]
pub struct ViewerOptions {
    /// Legend labels, one per column pair; "Trajectory N" when `None`
    pub labels: Option<Vec<String>>,
    /// Display colors, one per column pair; palette prefix when `None`
    pub colors: Option<Vec<Color>>,
    /// First selectable frame index
    pub start: usize,
    /// Last selectable frame index, inclusive.
    /// Defaults to the last valid index of the first trajectory's x column.
    pub end: Option<usize>,
    /// Slider step size
    pub step: usize,
    /// Window width in pixels
    pub width: f32,
    /// Window height in pixels
    pub height: f32,
    /// Window and chart title
    pub title: String,
}

impl Default for ViewerOptions {
    fn default() -> Self {
        Self {
            labels: None,
            colors: None,
            start: 0,
            end: None,
            step: 1,
            width: 800.0,
            height: 600.0,
            title: "Dynamic Trajectory Plot".to_string(),
        }
    }
}
