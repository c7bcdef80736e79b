use crate::TrajError;

/// An RGB display color
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    /// Red channel
    pub r: u8,
    /// Green channel
    pub g: u8,
    /// Blue channel
    pub b: u8,
}

impl Color {
    /// Create a new color from its RGB channels
    #[inline(always)]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// The marker color used for current-position markers
pub const BLACK: Color = Color::new(0, 0, 0);

/// Fixed palette used when no explicit colors are given.
/// Order matters: series without an explicit color take palette entries front to back.
pub const PALETTE: [Color; 8] = [
    Color::new(0, 0, 255),     // blue
    Color::new(255, 0, 0),     // red
    Color::new(0, 128, 0),     // green
    Color::new(255, 165, 0),   // orange
    Color::new(128, 0, 128),   // purple
    Color::new(165, 42, 42),   // brown
    Color::new(255, 192, 203), // pink
    Color::new(128, 128, 128), // gray
];

/// The first `n` palette colors, or `PaletteExhausted` when more series
/// than palette entries are requested without explicit colors
pub fn default_colors(n: usize) -> Result<Vec<Color>, TrajError> {
    if n > PALETTE.len() {
        return Err(TrajError::PaletteExhausted {
            requested: n,
            available: PALETTE.len(),
        });
    }
    Ok(PALETTE[..n].to_vec())
}
