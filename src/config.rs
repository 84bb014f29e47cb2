//! TOML-based plot configuration.

use std::fmt;
use std::fs;
use std::path::Path;

use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer};
use thiserror::Error;

use crate::options::{OptionValue, RenderDefaults};

/// Top-level plot configuration parsed from TOML.
///
/// Every section is optional. Load from TOML with
/// [`PlotConfig::from_toml_file`]; `PlotConfig::default()` is the empty
/// configuration.
///
/// ```toml
/// [render]
/// line_width = 2.0
///
/// [selection]
/// variables = ["t(sec)", "Frequency (Hz)", "Theta (Deg)"]
///
/// [options]
/// plottype = "semilogy"
/// axislim = { Frequency = [0, 4, 59, 61] }
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PlotConfig {
    /// Rendering host defaults.
    #[serde(default)]
    pub render: RenderDefaults,
    /// Which columns to plot.
    #[serde(default)]
    pub selection: SelectionConfig,
    /// Option overrides in file order, validated later by
    /// [`crate::options::resolve`].
    #[serde(default, deserialize_with = "ordered_options")]
    pub options: Vec<(String, OptionValue)>,
}

/// Reads the `[options]` table as key/value pairs in document order.
fn ordered_options<'de, D>(deserializer: D) -> Result<Vec<(String, OptionValue)>, D::Error>
where
    D: Deserializer<'de>,
{
    struct OrderedOptions;

    impl<'de> Visitor<'de> for OrderedOptions {
        type Value = Vec<(String, OptionValue)>;

        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("a table of plot options")
        }

        fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
            let mut options = Vec::with_capacity(map.size_hint().unwrap_or(0));
            while let Some(entry) = map.next_entry::<String, OptionValue>()? {
                options.push(entry);
            }
            Ok(options)
        }
    }

    deserializer.deserialize_map(OrderedOptions)
}

/// Column selection.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SelectionConfig {
    /// Header names to plot; empty selects every quantity.
    pub variables: Vec<String>,
}

/// A rejected configuration value, named by its TOML path.
#[derive(Debug, Error)]
#[error("config error: {field}: {message}")]
pub struct ConfigError {
    /// Dotted field path (e.g., `"render.line_width"`).
    pub field: String,
    /// What the value violates.
    pub message: String,
}

impl PlotConfig {
    /// Parses a configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Fails when the file is unreadable or is not valid plot configuration.
    pub fn from_toml_file(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|e| ConfigError {
            field: "config".to_string(),
            message: format!("cannot read \"{}\": {e}", path.display()),
        })?;
        Self::from_toml_str(&content)
    }

    /// Parses a configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Fails on malformed TOML, unknown sections, or unknown keys.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        toml::from_str(s).map_err(|e| ConfigError {
            field: "toml".to_string(),
            message: e.to_string(),
        })
    }

    /// Checks value constraints; an empty list means the configuration is usable.
    ///
    /// Option names and values are not checked here; that happens when the
    /// options are resolved against the plotted series.
    pub fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();

        let lw = self.render.line_width;
        if !(lw.is_finite() && lw > 0.0) {
            errors.push(ConfigError {
                field: "render.line_width".into(),
                message: format!("must be a positive number, got {lw}"),
            });
        }

        for (i, name) in self.selection.variables.iter().enumerate() {
            if name.trim().is_empty() {
                errors.push(ConfigError {
                    field: format!("selection.variables[{i}]"),
                    message: "must not be blank".into(),
                });
            }
        }

        errors
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::DEFAULT_LINE_WIDTH;

    #[test]
    fn empty_toml_uses_defaults() {
        let cfg = PlotConfig::from_toml_str("").expect("empty config is valid");
        assert_eq!(cfg.render.line_width, DEFAULT_LINE_WIDTH);
        assert!(cfg.selection.variables.is_empty());
        assert!(cfg.options.is_empty());
        assert!(cfg.validate().is_empty());
    }

    #[test]
    fn full_toml_parses() {
        let toml = r#"
[render]
line_width = 2.0

[selection]
variables = ["t(sec)", "Frequency (Hz)"]

[options]
plottype = "semilogy"
markersize = 6
markerlabel = ["gen1"]
axislim = { Frequency = [0, 4, 59, 61] }
"#;
        let cfg = PlotConfig::from_toml_str(toml).expect("valid TOML should parse");
        assert_eq!(cfg.render.line_width, 2.0);
        assert_eq!(cfg.selection.variables, ["t(sec)", "Frequency (Hz)"]);
        let keys: Vec<&str> = cfg.options.iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(keys, ["plottype", "markersize", "markerlabel", "axislim"]);
        assert_eq!(cfg.options[0].1, OptionValue::Text("semilogy".into()));
        assert_eq!(cfg.options[1].1, OptionValue::Number(6.0));
        assert!(matches!(cfg.options[3].1, OptionValue::Map(_)));
    }

    #[test]
    fn options_keep_file_order() {
        let toml = r#"
[options]
PlotType = "loglog"
alpha = 0.5
plottype = "semilogx"
"#;
        let cfg = PlotConfig::from_toml_str(toml).expect("valid TOML should parse");
        let keys: Vec<&str> = cfg.options.iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(keys, ["PlotType", "alpha", "plottype"]);

        let resolved = crate::options::resolve(1, cfg.options, &cfg.render).expect("valid");
        let plot_type = resolved.get(crate::options::OptionKey::PlotType);
        assert_eq!(plot_type.as_str(), Some("semilogx"));
    }

    #[test]
    fn first_bad_option_in_file_is_reported() {
        let toml = r#"
[options]
markerlabel = "gen1"
bogus = 1
"#;
        let cfg = PlotConfig::from_toml_str(toml).expect("valid TOML should parse");
        let err = crate::options::resolve(1, cfg.options, &cfg.render);
        assert!(matches!(
            err,
            Err(crate::error::OptionError::InvalidOptionType { key, .. }) if key == "markerlabel"
        ));
    }

    #[test]
    fn unknown_section_is_rejected() {
        let result = PlotConfig::from_toml_str("[figure]\nsize = [8, 6]\n");
        assert!(result.is_err());
    }

    #[test]
    fn unknown_render_field_is_rejected() {
        let result = PlotConfig::from_toml_str("[render]\nfont_size = 12\n");
        assert!(result.is_err());
    }

    #[test]
    fn validation_catches_bad_line_width() {
        let mut cfg = PlotConfig::default();
        cfg.render.line_width = 0.0;
        let errors = cfg.validate();
        assert!(errors.iter().any(|e| e.field == "render.line_width"));
    }

    #[test]
    fn validation_catches_blank_variable() {
        let mut cfg = PlotConfig::default();
        cfg.selection.variables = vec!["Vd".into(), " ".into()];
        let errors = cfg.validate();
        assert!(errors.iter().any(|e| e.field == "selection.variables[1]"));
    }
}
