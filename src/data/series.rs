//! Time-series views over a loaded table.

use super::table::Table;
use crate::error::SeriesError;

/// Column index of the time axis (`t(sec)`); column 0 is the hour index.
pub const TIME_AXIS_INDEX: usize = 1;

/// One numeric column interpreted as values over time.
#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    /// Full header text, e.g. `"Theta (Deg)"`.
    pub name: String,
    pub values: Vec<f64>,
}

impl Series {
    /// Header text without a trailing parenthesized unit.
    ///
    /// ```
    /// use dss_scivis::data::Series;
    ///
    /// let s = Series { name: "dSpeed (Deg/sec)".into(), values: vec![] };
    /// assert_eq!(s.short_name(), "dSpeed");
    /// ```
    pub fn short_name(&self) -> &str {
        short_name(&self.name)
    }
}

/// Strips a trailing `" (unit)"` from a column name.
pub fn short_name(name: &str) -> &str {
    let trimmed = name.trim_end();
    if trimmed.ends_with(')') {
        if let Some(open) = trimmed.rfind('(') {
            let stem = trimmed[..open].trim_end();
            if !stem.is_empty() {
                return stem;
            }
        }
    }
    trimmed
}

/// A time axis plus the series plotted against it.
///
/// Every series has the time axis' length. Rebuild with
/// [`TimeSeriesSet::select`] whenever the selection changes.
#[derive(Debug, Clone, PartialEq)]
pub struct TimeSeriesSet {
    pub time: Series,
    pub series: Vec<Series>,
}

impl TimeSeriesSet {
    /// Selects `variables` from `table` (all quantities when empty).
    ///
    /// The time axis is always included; naming it in `variables` is
    /// accepted and has no further effect. Selected series keep the order of
    /// `variables`, or the table order when selecting everything.
    ///
    /// # Errors
    ///
    /// * [`SeriesError::MissingTimeAxis`] - fewer than two columns
    /// * [`SeriesError::UnknownVariable`] - a name matches no header
    /// * [`SeriesError::NonNumeric`] - the time axis or a selected column
    ///   holds text
    pub fn select<S: AsRef<str>>(table: &Table, variables: &[S]) -> Result<Self, SeriesError> {
        let columns = table.columns();
        if columns.len() <= TIME_AXIS_INDEX {
            return Err(SeriesError::MissingTimeAxis {
                columns: columns.len(),
            });
        }

        let numeric = |name: &str| -> Result<Series, SeriesError> {
            let column = table
                .column(name)
                .ok_or_else(|| SeriesError::UnknownVariable {
                    name: name.to_string(),
                })?;
            let values = column
                .data
                .as_numeric()
                .ok_or_else(|| SeriesError::NonNumeric {
                    name: name.to_string(),
                })?;
            Ok(Series {
                name: column.name.clone(),
                values: values.to_vec(),
            })
        };

        let time_name = columns[TIME_AXIS_INDEX].name.as_str();
        let time = numeric(time_name)?;

        let series = if variables.is_empty() {
            columns[TIME_AXIS_INDEX + 1..]
                .iter()
                .map(|c| numeric(&c.name))
                .collect::<Result<Vec<_>, _>>()?
        } else {
            variables
                .iter()
                .map(|v| v.as_ref())
                .filter(|name| *name != time_name)
                .map(numeric)
                .collect::<Result<Vec<_>, _>>()?
        };

        Ok(Self { time, series })
    }

    /// Number of plotted series, excluding the time axis.
    pub fn len(&self) -> usize {
        self.series.len()
    }

    pub fn is_empty(&self) -> bool {
        self.series.is_empty()
    }

    /// Finds a series by full header text or by [`Series::short_name`].
    pub fn get(&self, name: &str) -> Option<&Series> {
        self.series
            .iter()
            .find(|s| s.name == name)
            .or_else(|| self.series.iter().find(|s| s.short_name() == name))
    }
}
