//! Error types for loading, series selection, and option resolution.

use std::path::PathBuf;

use thiserror::Error;

use crate::data::Delimiter;
use crate::options::OptionValue;

/// Failure to turn a dataset name into a [`crate::data::Table`].
#[derive(Debug, Error)]
pub enum LoadError {
    /// The name carries an extension other than `.csv`.
    #[error("invalid file type: {name}")]
    InvalidFileType { name: String },
    /// The resolved path does not exist or is not a regular file.
    #[error("file does not exist: {}", path.display())]
    FileNotFound { path: PathBuf },
    /// The file exists but cannot be opened for reading.
    #[error("file is not readable: {}: {source}", path.display())]
    FileNotReadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// Both the comma and the tab parse attempts failed; `reason` is from the
    /// last attempt.
    #[error("malformed table in {} ({delimiter} attempt): {reason}", path.display())]
    MalformedTable {
        path: PathBuf,
        delimiter: Delimiter,
        reason: String,
    },
}

/// Failure to derive a time-series view from a table.
#[derive(Debug, Error)]
pub enum SeriesError {
    #[error("table has {columns} column(s); a time axis needs at least 2")]
    MissingTimeAxis { columns: usize },
    #[error("unknown variable \"{name}\"")]
    UnknownVariable { name: String },
    #[error("column \"{name}\" is not numeric")]
    NonNumeric { name: String },
}

/// Failure to resolve or interpret plot options.
#[derive(Debug, Error)]
pub enum OptionError {
    #[error("unrecognized option: {key}")]
    UnrecognizedOption { key: String },
    #[error("invalid value for option {key}: {value} ({reason})")]
    InvalidOptionType {
        key: String,
        value: OptionValue,
        reason: String,
    },
}
