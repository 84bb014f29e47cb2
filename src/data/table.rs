//! In-memory representation of a parsed simulator export.

/// Values of one column, typed by inference over every cell.
#[derive(Debug, Clone, PartialEq)]
pub enum ColumnData {
    /// Every non-empty cell parsed as a float; empty cells are NaN.
    Numeric(Vec<f64>),
    /// At least one cell was not a number; cells kept verbatim.
    Text(Vec<String>),
}

impl ColumnData {
    /// Infers the column type from raw (already trimmed) cells.
    pub fn infer(cells: Vec<String>) -> Self {
        let parsed: Option<Vec<f64>> = cells
            .iter()
            .map(|c| {
                if c.is_empty() {
                    Some(f64::NAN)
                } else {
                    c.parse::<f64>().ok()
                }
            })
            .collect();
        match parsed {
            Some(values) => Self::Numeric(values),
            None => Self::Text(cells),
        }
    }

    pub fn len(&self) -> usize {
        match self {
            Self::Numeric(v) => v.len(),
            Self::Text(v) => v.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the values if this is a numeric column.
    pub fn as_numeric(&self) -> Option<&[f64]> {
        match self {
            Self::Numeric(v) => Some(v),
            Self::Text(_) => None,
        }
    }
}

/// One named column.
#[derive(Debug, Clone, PartialEq)]
pub struct Column {
    /// Header text exactly as it appeared in the file, units included.
    pub name: String,
    pub data: ColumnData,
}

/// A rectangular, header-named table.
///
/// Column names are unique and every column has [`Table::row_count`] values.
/// Construct through [`Table::from_rows`]; the table is read-only afterwards.
///
/// # Examples
///
/// ```
/// use dss_scivis::data::Table;
///
/// let table = Table::from_rows(
///     vec!["hour".into(), "t(sec)".into()],
///     vec![vec!["0".into(), "0.001".into()]],
/// )
/// .unwrap();
/// assert_eq!(table.row_count(), 1);
/// assert_eq!(table.column("t(sec)").and_then(|c| c.data.as_numeric()), Some(&[0.001][..]));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    columns: Vec<Column>,
    rows: usize,
}

impl Table {
    /// Builds a table from a header and row-major cells.
    ///
    /// # Errors
    ///
    /// Returns a description of the problem if the header is blank, holds a
    /// duplicate name, or a row has a different width than the header.
    pub fn from_rows(header: Vec<String>, rows: Vec<Vec<String>>) -> Result<Self, String> {
        if header.iter().all(String::is_empty) {
            return Err("missing header row".to_string());
        }
        for (i, name) in header.iter().enumerate() {
            if header[..i].contains(name) {
                return Err(format!("duplicate column name \"{name}\""));
            }
        }

        let width = header.len();
        let mut cells: Vec<Vec<String>> = vec![Vec::with_capacity(rows.len()); width];
        let row_count = rows.len();
        for (row_no, row) in rows.into_iter().enumerate() {
            if row.len() != width {
                return Err(format!(
                    "record {} has {} field(s), header has {width}",
                    row_no + 1,
                    row.len()
                ));
            }
            for (col, cell) in cells.iter_mut().zip(row) {
                col.push(cell);
            }
        }

        let columns = header
            .into_iter()
            .zip(cells)
            .map(|(name, cells)| Column {
                name,
                data: ColumnData::infer(cells),
            })
            .collect();

        Ok(Self {
            columns,
            rows: row_count,
        })
    }

    /// Columns in file order.
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// Header names in file order.
    pub fn column_names(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().map(|c| c.name.as_str())
    }

    /// Looks up a column by its exact header text.
    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.name == name)
    }

    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    pub fn row_count(&self) -> usize {
        self.rows
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(v: &[&str]) -> Vec<String> {
        v.iter().map(|s| (*s).to_string()).collect()
    }

    #[test]
    fn infers_numeric_with_scientific_notation() {
        let data = ColumnData::infer(strings(&["2.00E+09", "-9.26E-05", "60"]));
        assert_eq!(data, ColumnData::Numeric(vec![2.0e9, -9.26e-5, 60.0]));
    }

    #[test]
    fn mixed_column_stays_text() {
        let data = ColumnData::infer(strings(&["1.0", "gen1"]));
        assert_eq!(data, ColumnData::Text(strings(&["1.0", "gen1"])));
    }

    #[test]
    fn empty_cells_become_nan() {
        let data = ColumnData::infer(strings(&["1.0", ""]));
        let values = data.as_numeric().map(<[f64]>::to_vec).unwrap_or_default();
        assert_eq!(values.len(), 2);
        assert!(values[1].is_nan());
    }

    #[test]
    fn rejects_duplicate_header() {
        let err = Table::from_rows(strings(&["a", "b", "a"]), vec![]);
        assert!(err.is_err_and(|e| e.contains("duplicate")));
    }

    #[test]
    fn rejects_ragged_rows() {
        let err = Table::from_rows(strings(&["a", "b"]), vec![strings(&["1", "2", "3"])]);
        assert!(err.is_err_and(|e| e.contains("record 1")));
    }

    #[test]
    fn header_only_table_has_zero_rows() {
        let table = Table::from_rows(strings(&["hour", "t(sec)"]), vec![]).expect("valid");
        assert_eq!(table.row_count(), 0);
        assert_eq!(table.column_count(), 2);
    }
}
