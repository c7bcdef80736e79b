use std::collections::HashMap;

use crate::TrajError;

/// Column-keyed tabular data, as a caller holds it after parsing.
/// No loading or parsing happens here.
#[derive(Debug, Clone, Default)]
pub struct Table {
    columns: HashMap<String, Vec<f64>>,
}

impl Table {
    /// Create an empty table
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a named column, replacing any previous column of that name
    pub fn insert_column(&mut self, name: impl Into<String>, values: Vec<f64>) {
        self.columns.insert(name.into(), values);
    }

    /// Look up a column by name
    pub fn column(&self, name: &str) -> Result<&[f64], TrajError> {
        self.columns
            .get(name)
            .map(Vec::as_slice)
            .ok_or_else(|| TrajError::UnknownColumn(name.to_string()))
    }

    /// Number of columns
    #[inline(always)]
    pub fn num_columns(&self) -> usize {
        self.columns.len()
    }

    /// Whether the table holds no columns
    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }
}

impl FromIterator<(String, Vec<f64>)> for Table {
    fn from_iter<I: IntoIterator<Item = (String, Vec<f64>)>>(iter: I) -> Self {
        Self {
            columns: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn column_lookup() {
        if let Err(_) = pretty_env_logger::try_init() {}

        let mut table = Table::new();
        table.insert_column("pos_x", vec![0.0, 1.0, 2.0]);

        assert_eq!(table.column("pos_x").unwrap(), &[0.0, 1.0, 2.0]);
        assert_eq!(
            table.column("pos_y"),
            Err(TrajError::UnknownColumn("pos_y".to_string()))
        );
    }
}
