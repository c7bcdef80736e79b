/// The (start, end, step) triple selecting which frame indices are rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameWindow {
    /// First frame index of the window
    pub start: usize,
    /// End of the window, exclusive for the exporter
    pub end: usize,
    /// Stride between rendered frames
    pub step: usize,
}

impl FrameWindow {
    /// Create a new frame window
    #[inline(always)]
    pub const fn new(start: usize, end: usize, step: usize) -> Self {
        Self { start, end, step }
    }

    /// The indices the exporter renders: `start + step`, `start + 2 * step`, .. `< end`.
    /// The window start itself is never rendered, so a zero-length initial path
    /// does not produce a frame. A zero step yields no indices.
    pub fn interior_indices(&self) -> Vec<usize> {
        if self.step == 0 {
            return Vec::new();
        }
        (self.start + self.step..self.end)
            .step_by(self.step)
            .collect()
    }
}

impl Default for FrameWindow {
    fn default() -> Self {
        Self::new(0, 50_000, 50)
    }
}
