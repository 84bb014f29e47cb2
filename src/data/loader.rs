//! Dataset loading: name normalization, access checks, and delimiter fallback.

use std::fmt;
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use log::debug;

use super::table::Table;
use crate::error::LoadError;

/// Canonical suffix of simulator exports.
pub const CANONICAL_EXTENSION: &str = "csv";

/// Field delimiters the loader knows how to read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Delimiter {
    Comma,
    Tab,
}

impl Delimiter {
    /// Attempt order used by [`load`].
    pub const FALLBACK_ORDER: [Self; 2] = [Self::Comma, Self::Tab];

    pub fn as_byte(self) -> u8 {
        match self {
            Self::Comma => b',',
            Self::Tab => b'\t',
        }
    }

    fn other(self) -> Self {
        match self {
            Self::Comma => Self::Tab,
            Self::Tab => Self::Comma,
        }
    }
}

impl fmt::Display for Delimiter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Comma => f.write_str("comma"),
            Self::Tab => f.write_str("tab"),
        }
    }
}

/// Maps a dataset name to the path [`load`] reads.
///
/// A name without an extension gets `.csv` appended; a `.csv` extension (any
/// case) is kept as is.
///
/// # Errors
///
/// Returns [`LoadError::InvalidFileType`] for any other extension.
pub fn resolve_path(name: &str) -> Result<PathBuf, LoadError> {
    let path = Path::new(name);
    match path.extension() {
        None => Ok(PathBuf::from(format!("{name}.{CANONICAL_EXTENSION}"))),
        Some(ext) if ext.eq_ignore_ascii_case(CANONICAL_EXTENSION) => Ok(path.to_path_buf()),
        _ => Err(LoadError::InvalidFileType {
            name: name.to_string(),
        }),
    }
}

/// Loads a dataset by name.
///
/// The file is parsed as comma-delimited first and, if that fails for any
/// reason, once more as tab-delimited. Every call re-reads the file.
///
/// # Errors
///
/// * [`LoadError::InvalidFileType`] - the name has a non-`.csv` extension
/// * [`LoadError::FileNotFound`] - the resolved path is not a regular file
/// * [`LoadError::FileNotReadable`] - the file exists but cannot be read
/// * [`LoadError::MalformedTable`] - both parse attempts failed; carries the
///   tab attempt's reason
pub fn load(name: &str) -> Result<Table, LoadError> {
    let path = resolve_path(name)?;
    let bytes = read_checked(&path)?;

    let mut last_failure = None;
    for delimiter in Delimiter::FALLBACK_ORDER {
        match parse_delimited(&bytes, delimiter) {
            Ok(table) => {
                debug!(
                    "loaded {} as {delimiter}-delimited: {} columns x {} rows",
                    path.display(),
                    table.column_count(),
                    table.row_count()
                );
                return Ok(table);
            }
            Err(reason) => {
                debug!("{delimiter} parse of {} failed: {reason}", path.display());
                last_failure = Some((delimiter, reason));
            }
        }
    }

    let (delimiter, reason) =
        last_failure.unwrap_or((Delimiter::Tab, "no parse attempted".to_string()));
    Err(LoadError::MalformedTable {
        path,
        delimiter,
        reason,
    })
}

/// Existence is checked before readability so the two failures stay distinct.
fn read_checked(path: &Path) -> Result<Vec<u8>, LoadError> {
    if !path.is_file() {
        return Err(LoadError::FileNotFound {
            path: path.to_path_buf(),
        });
    }
    let not_readable = |source| LoadError::FileNotReadable {
        path: path.to_path_buf(),
        source,
    };
    let mut file = File::open(path).map_err(not_readable)?;
    let mut bytes = Vec::new();
    file.read_to_end(&mut bytes).map_err(not_readable)?;
    Ok(bytes)
}

/// Parses delimited text with a header row using exactly one delimiter.
///
/// Fields are trimmed before type inference; header names are kept
/// verbatim. A single-column result whose header contains the other
/// delimiter is reported as a delimiter mismatch rather than accepted.
///
/// # Errors
///
/// Returns a human-readable reason when the input is not a rectangular,
/// uniquely-headed table in this delimiter.
pub fn parse_delimited(bytes: &[u8], delimiter: Delimiter) -> Result<Table, String> {
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(delimiter.as_byte())
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::Fields)
        .from_reader(bytes);

    let header: Vec<String> = reader
        .headers()
        .map_err(|e| e.to_string())?
        .iter()
        .map(str::to_string)
        .collect();

    if let [only] = header.as_slice() {
        let other = char::from(delimiter.other().as_byte());
        if only.contains(other) {
            return Err(format!(
                "header \"{}\" looks {}-delimited",
                only.escape_debug(),
                delimiter.other()
            ));
        }
    }

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|e| e.to_string())?;
        rows.push(record.iter().map(str::to_string).collect());
    }

    Table::from_rows(header, rows)
}
