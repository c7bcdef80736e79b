use crate::{Color, Path, Table, TrajError};

/// A named, colored pair of equal-length position sequences
#[derive(Debug, Clone)]
pub struct Trajectory {
    label: String,
    color: Color,
    xs: Vec<f64>,
    ys: Vec<f64>,
}

impl Trajectory {
    /// Create a new trajectory from raw position sequences.
    /// The x and y sequences must have identical length.
    pub fn new(
        label: impl Into<String>,
        color: Color,
        xs: Vec<f64>,
        ys: Vec<f64>,
    ) -> Result<Self, TrajError> {
        let label = label.into();
        if xs.len() != ys.len() {
            return Err(TrajError::LengthMismatch {
                label,
                x_len: xs.len(),
                y_len: ys.len(),
            });
        }
        Ok(Self {
            label,
            color,
            xs,
            ys,
        })
    }

    /// Resolve a trajectory from a pair of table columns
    pub fn from_table(
        table: &Table,
        x_col: &str,
        y_col: &str,
        label: impl Into<String>,
        color: Color,
    ) -> Result<Self, TrajError> {
        let xs = table.column(x_col)?.to_vec();
        let ys = table.column(y_col)?.to_vec();
        Self::new(label, color, xs, ys)
    }

    /// Display label
    #[inline(always)]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Display color
    #[inline(always)]
    pub fn color(&self) -> Color {
        self.color
    }

    /// Number of positions in the trajectory
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.xs.len()
    }

    /// Whether the trajectory holds no positions
    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.xs.is_empty()
    }

    /// The x sequence
    #[inline(always)]
    pub fn xs(&self) -> &[f64] {
        &self.xs
    }

    /// The y sequence
    #[inline(always)]
    pub fn ys(&self) -> &[f64] {
        &self.ys
    }

    /// The cumulative path over the half-open index range `from..to`.
    /// Bounds are clamped to the trajectory length.
    pub fn path_between(&self, from: usize, to: usize) -> Path {
        let to = to.min(self.len());
        let from = from.min(to);
        self.xs[from..to]
            .iter()
            .zip(&self.ys[from..to])
            .map(|(&x, &y)| [x, y])
            .collect()
    }

    /// The cumulative path from the first position up to (excluding) index `i`
    #[inline(always)]
    pub fn path_until(&self, i: usize) -> Path {
        self.path_between(0, i)
    }

    /// The exact position at frame index `i`
    pub fn position(&self, i: usize) -> Result<[f64; 2], TrajError> {
        if i >= self.len() {
            return Err(TrajError::FrameOutOfRange {
                index: i,
                label: self.label.clone(),
                len: self.len(),
            });
        }
        Ok([self.xs[i], self.ys[i]])
    }
}

/// Auto-generated legend labels: "Trajectory 1" .. "Trajectory n"
pub fn default_labels(n: usize) -> Vec<String> {
    (1..=n).map(|i| format!("Trajectory {}", i)).collect()
}
