//! Dynamically typed option values.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// A value supplied for a plot option.
///
/// Deserializes untagged from JSON or TOML, so `2`, `"k-"`, `[0, 4, 59, 61]`
/// and `{ Frequency = [0, 4, 59, 61] }` all map to the obvious variant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OptionValue {
    None,
    Bool(bool),
    Number(f64),
    Text(String),
    Seq(Vec<OptionValue>),
    Map(BTreeMap<String, OptionValue>),
}

impl OptionValue {
    /// Name of the variant, used in error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Bool(_) => "boolean",
            Self::Number(_) => "number",
            Self::Text(_) => "string",
            Self::Seq(_) => "sequence",
            Self::Map(_) => "mapping",
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_seq(&self) -> Option<&[OptionValue]> {
        match self {
            Self::Seq(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_map(&self) -> Option<&BTreeMap<String, OptionValue>> {
        match self {
            Self::Map(m) => Some(m),
            _ => None,
        }
    }

    pub fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }

    /// Parses a command-line value: JSON when it parses, otherwise text.
    ///
    /// ```
    /// use dss_scivis::options::OptionValue;
    ///
    /// assert_eq!(OptionValue::parse_cli("2.5"), OptionValue::Number(2.5));
    /// assert_eq!(OptionValue::parse_cli("semilogy"), OptionValue::Text("semilogy".into()));
    /// ```
    pub fn parse_cli(raw: &str) -> Self {
        serde_json::from_str(raw).unwrap_or_else(|_| Self::Text(raw.to_string()))
    }
}

impl From<f64> for OptionValue {
    fn from(n: f64) -> Self {
        Self::Number(n)
    }
}

impl From<bool> for OptionValue {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl From<&str> for OptionValue {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<String> for OptionValue {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl<T: Into<OptionValue>> From<Vec<T>> for OptionValue {
    fn from(v: Vec<T>) -> Self {
        Self::Seq(v.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<OptionValue>> From<Option<T>> for OptionValue {
    fn from(v: Option<T>) -> Self {
        v.map_or(Self::None, Into::into)
    }
}

impl fmt::Display for OptionValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::None => f.write_str("None"),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Number(n) => write!(f, "{n}"),
            Self::Text(s) => write!(f, "{s:?}"),
            Self::Seq(items) => {
                f.write_str("[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{item}")?;
                }
                f.write_str("]")
            }
            Self::Map(entries) => {
                f.write_str("{")?;
                for (i, (k, v)) in entries.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{k:?}: {v}")?;
                }
                f.write_str("}")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn json_values_map_to_variants() {
        let v: OptionValue = serde_json::from_str(r#"{"Theta": [0, 4, null, 100]}"#)
            .expect("valid JSON");
        let limits = v.as_map().and_then(|m| m.get("Theta")).and_then(OptionValue::as_seq);
        assert_eq!(
            limits,
            Some(
                &[
                    OptionValue::Number(0.0),
                    OptionValue::Number(4.0),
                    OptionValue::None,
                    OptionValue::Number(100.0),
                ][..]
            )
        );
    }

    #[test]
    fn cli_values_fall_back_to_text() {
        assert_eq!(OptionValue::parse_cli("true"), OptionValue::Bool(true));
        assert_eq!(OptionValue::parse_cli("k-"), OptionValue::Text("k-".into()));
        assert_eq!(OptionValue::parse_cli(r#""10""#), OptionValue::Text("10".into()));
    }

    #[test]
    fn display_is_readable() {
        let v = OptionValue::from(vec![Some(1.0), None]);
        assert_eq!(v.to_string(), "[1, None]");
    }
}
