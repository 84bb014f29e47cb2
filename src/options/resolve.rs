//! Default table, override merging, and per-option validation.

use std::collections::BTreeMap;

use serde::Deserialize;

use super::key::OptionKey;
use super::value::OptionValue;
use crate::error::OptionError;

/// Line width used when the rendering host has no configured value.
pub const DEFAULT_LINE_WIDTH: f64 = 1.5;

/// Settings of the rendering host that feed into option defaults.
///
/// Injected into [`resolve`] instead of read from process-wide state.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RenderDefaults {
    /// Default line width (`linewidth` option).
    pub line_width: f64,
}

impl Default for RenderDefaults {
    fn default() -> Self {
        Self {
            line_width: DEFAULT_LINE_WIDTH,
        }
    }
}

/// Fully resolved plot options.
///
/// Holds a value for every [`OptionKey`]; nothing outside the vocabulary can
/// be stored.
#[derive(Debug, Clone, PartialEq)]
pub struct OptionSet {
    values: BTreeMap<OptionKey, OptionValue>,
}

impl OptionSet {
    /// The documented defaults for a plot of `series_count` series.
    pub fn defaults(series_count: usize, host: &RenderDefaults) -> Self {
        use OptionKey::*;

        let empty = || OptionValue::Seq(Vec::new());
        let text = |s: &str| OptionValue::Text(s.to_string());

        let values = OptionKey::ALL
            .iter()
            .map(|&key| {
                let value = match key {
                    Alpha => OptionValue::Number(1.0),
                    AxisLim => OptionValue::Seq(vec![OptionValue::None; series_count]),
                    AxesLabel | AxisMax | AxisMin | CmapZData | Ticks | XTickLabelPos
                    | YTickLabelPos => empty(),
                    Colormap => text("on"),
                    IndexX | IndexY => OptionValue::None,
                    LineSpec => text("k-"),
                    LineWidth => OptionValue::Number(host.line_width),
                    LocationColorbar => text("NorthOutside"),
                    MarkerColor => text("r"),
                    MarkerDisplayed => text("line"),
                    MarkerLabel | TitleColorbar => text(""),
                    MarkerLabelColor => text("k"),
                    MarkerLegend | Overlay => text("off"),
                    MarkerSize => OptionValue::Number(10.0),
                    MarkerSymbol => text("o"),
                    PlotType => text("linear"),
                };
                (key, value)
            })
            .collect();

        Self { values }
    }

    /// Value of `key`.
    pub fn get(&self, key: OptionKey) -> &OptionValue {
        const NONE: &OptionValue = &OptionValue::None;
        self.values.get(&key).unwrap_or(NONE)
    }

    /// All options in vocabulary order.
    pub fn iter(&self) -> impl Iterator<Item = (OptionKey, &OptionValue)> {
        self.values.iter().map(|(k, v)| (*k, v))
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

type Validator = fn(&OptionValue) -> Result<(), String>;

/// Options whose overrides carry a type constraint.
const VALIDATORS: &[(OptionKey, Validator)] = &[
    (OptionKey::CmapZData, not_text_or_bool),
    (OptionKey::MarkerLabel, seq_or_map),
];

fn not_text_or_bool(value: &OptionValue) -> Result<(), String> {
    match value {
        OptionValue::Text(_) | OptionValue::Bool(_) => {
            Err(format!("cannot be a {}", value.type_name()))
        }
        _ => Ok(()),
    }
}

fn seq_or_map(value: &OptionValue) -> Result<(), String> {
    match value {
        OptionValue::Seq(_) | OptionValue::Map(_) => Ok(()),
        _ => Err(format!(
            "expected a sequence or mapping, got a {}",
            value.type_name()
        )),
    }
}

/// Merges `overrides` into the defaults for `series_count` series.
///
/// Option names are matched case-insensitively. Overrides are applied in
/// iteration order and resolution stops at the first unrecognized name or
/// rejected value.
///
/// # Errors
///
/// * [`OptionError::UnrecognizedOption`] - a name outside the vocabulary
/// * [`OptionError::InvalidOptionType`] - `cmapzdata` given a string or
///   boolean, or `markerlabel` given anything but a sequence or mapping
///
/// # Examples
///
/// ```
/// use dss_scivis::options::{resolve, OptionKey, OptionValue, RenderDefaults};
///
/// let overrides = [("PlotType", OptionValue::from("semilogy"))];
/// let options = resolve(3, overrides, &RenderDefaults::default()).unwrap();
/// assert_eq!(options.get(OptionKey::PlotType).as_str(), Some("semilogy"));
/// ```
pub fn resolve<I, K>(
    series_count: usize,
    overrides: I,
    host: &RenderDefaults,
) -> Result<OptionSet, OptionError>
where
    I: IntoIterator<Item = (K, OptionValue)>,
    K: AsRef<str>,
{
    let mut options = OptionSet::defaults(series_count, host);

    for (name, value) in overrides {
        let name = name.as_ref().to_lowercase();
        let key: OptionKey = name
            .parse()
            .map_err(|()| OptionError::UnrecognizedOption { key: name.clone() })?;

        if let Some((_, validate)) = VALIDATORS.iter().find(|(k, _)| *k == key) {
            validate(&value).map_err(|reason| OptionError::InvalidOptionType {
                key: name.clone(),
                value: value.clone(),
                reason,
            })?;
        }

        options.values.insert(key, value);
    }

    Ok(options)
}
