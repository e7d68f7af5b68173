//! Chart construction options.

use crate::format::FormatSpec;

/// Options for building a [`Chart`](crate::chart::Chart).
///
/// | field | default |
/// |-------|---------|
/// | `x_format` | `%v` |
/// | `y_format` | `%v` |
/// | `rows` | derived from `columns`, or the number of values if neither is set |
/// | `columns` | derived from `rows`, or 1 if neither is set |
///
/// A count of zero is the same as leaving it unset.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChartOptions {
    pub x_format: FormatSpec,
    pub y_format: FormatSpec,
    pub rows: Option<usize>,
    pub columns: Option<usize>,
}

impl ChartOptions {
    pub fn new() -> ChartOptions {
        ChartOptions::default()
    }

    pub fn with_x_format(mut self, spec: FormatSpec) -> ChartOptions {
        self.x_format = spec;
        self
    }

    pub fn with_y_format(mut self, spec: FormatSpec) -> ChartOptions {
        self.y_format = spec;
        self
    }

    /// Renders X values with `x_digits` and Y values with `y_digits`
    /// fraction digits.
    pub fn with_fraction_digits(self, x_digits: usize, y_digits: usize) -> ChartOptions {
        self.with_x_format(FormatSpec::fixed(x_digits))
            .with_y_format(FormatSpec::fixed(y_digits))
    }

    pub fn with_rows(mut self, rows: usize) -> ChartOptions {
        self.rows = Some(rows);
        self
    }

    pub fn with_columns(mut self, columns: usize) -> ChartOptions {
        self.columns = Some(columns);
        self
    }

    /// Resolves `(rows, columns)` for `len` values.
    ///
    /// When only one count is set, the other is the smallest count that
    /// fits every value. When both are set they are used as given, even if
    /// the grid is too small to hold every value.
    pub fn dimensions(&self, len: usize) -> (usize, usize) {
        let rows = self.rows.filter(|&n| n > 0);
        let columns = self.columns.filter(|&n| n > 0);
        match (rows, columns) {
            (None, None) => (len, 1),
            (Some(rows), None) => (rows, len.div_ceil(rows)),
            (None, Some(columns)) => (len.div_ceil(columns), columns),
            (Some(rows), Some(columns)) => (rows, columns),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dimensions() {
        let options = ChartOptions::new();
        assert_eq!(options.dimensions(100), (100, 1));
        assert_eq!(options.clone().with_rows(33).dimensions(100), (33, 4));
        assert_eq!(options.clone().with_columns(3).dimensions(100), (34, 3));
        assert_eq!(options.clone().with_columns(4).dimensions(100), (25, 4));
        assert_eq!(
            options.clone().with_rows(25).with_columns(5).dimensions(100),
            (25, 5)
        );
        assert_eq!(
            options.clone().with_rows(26).with_columns(6).dimensions(100),
            (26, 6)
        );
    }

    #[test]
    fn test_explicit_grid_may_truncate() {
        let options = ChartOptions::new().with_rows(3).with_columns(2);
        assert_eq!(options.dimensions(100), (3, 2));
    }

    #[test]
    fn test_zero_counts_are_unset() {
        let options = ChartOptions::new().with_rows(0).with_columns(4);
        assert_eq!(options.dimensions(10), (3, 4));
        let options = ChartOptions::new().with_rows(0).with_columns(0);
        assert_eq!(options.dimensions(10), (10, 1));
    }

    #[test]
    fn test_empty() {
        assert_eq!(ChartOptions::new().dimensions(0), (0, 1));
        assert_eq!(ChartOptions::new().with_columns(4).dimensions(0), (0, 4));
    }

    #[test]
    fn test_fraction_digits() {
        let options = ChartOptions::new().with_fraction_digits(3, 4);
        assert_eq!(options.x_format.as_str(), "%.3f");
        assert_eq!(options.y_format.as_str(), "%.4f");
    }
}
