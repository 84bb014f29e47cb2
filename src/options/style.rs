//! Typed view of a resolved [`OptionSet`] for the rendering routine.

use super::key::OptionKey;
use super::resolve::OptionSet;
use super::value::OptionValue;
use crate::data::TimeSeriesSet;
use crate::error::OptionError;

/// Axis scaling selected by `plottype`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlotType {
    Linear,
    LogLog,
    SemiLogX,
    SemiLogY,
}

impl PlotType {
    pub fn log_x(self) -> bool {
        matches!(self, Self::LogLog | Self::SemiLogX)
    }

    pub fn log_y(self) -> bool {
        matches!(self, Self::LogLog | Self::SemiLogY)
    }
}

/// Continuous line or discrete markers (`markerdisplayed`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkerDisplay {
    Line,
    Marker,
}

/// Single-letter colour codes accepted in `linespec`, `markercolor` and
/// `markerlabelcolor`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorCode {
    Blue,
    Green,
    Red,
    Cyan,
    Magenta,
    Yellow,
    Black,
    White,
}

impl ColorCode {
    fn from_char(c: char) -> Option<Self> {
        Some(match c {
            'b' => Self::Blue,
            'g' => Self::Green,
            'r' => Self::Red,
            'c' => Self::Cyan,
            'm' => Self::Magenta,
            'y' => Self::Yellow,
            'k' => Self::Black,
            'w' => Self::White,
            _ => return None,
        })
    }
}

/// `[xmin, xmax, ymin, ymax]`; `None` leaves the bound to the data.
pub type AxisLimits = [Option<f64>; 4];

/// Everything the renderer needs, decoded and checked.
#[derive(Debug, Clone, PartialEq)]
pub struct PlotStyle {
    pub alpha: f64,
    pub line_color: ColorCode,
    pub dashed: bool,
    pub line_width: f64,
    pub marker_color: ColorCode,
    pub marker_display: MarkerDisplay,
    pub marker_symbol: char,
    pub marker_size: f64,
    pub legend: bool,
    pub plot_type: PlotType,
    /// Y-axis title per series; falls back to the series name.
    pub axes_labels: Vec<String>,
    /// Limits per series, same order as the [`TimeSeriesSet`].
    pub axis_limits: Vec<AxisLimits>,
}

fn invalid(key: OptionKey, value: &OptionValue, reason: impl Into<String>) -> OptionError {
    OptionError::InvalidOptionType {
        key: key.as_str().to_string(),
        value: value.clone(),
        reason: reason.into(),
    }
}

fn number(options: &OptionSet, key: OptionKey) -> Result<f64, OptionError> {
    let value = options.get(key);
    value
        .as_f64()
        .ok_or_else(|| invalid(key, value, "expected a number"))
}

fn text(options: &OptionSet, key: OptionKey) -> Result<&str, OptionError> {
    let value = options.get(key);
    value
        .as_str()
        .ok_or_else(|| invalid(key, value, "expected a string"))
}

fn switch(options: &OptionSet, key: OptionKey) -> Result<bool, OptionError> {
    match text(options, key)? {
        "on" => Ok(true),
        "off" => Ok(false),
        _ => Err(invalid(key, options.get(key), "expected \"on\" or \"off\"")),
    }
}

fn color(options: &OptionSet, key: OptionKey) -> Result<ColorCode, OptionError> {
    let s = text(options, key)?;
    let mut chars = s.chars();
    match (chars.next().and_then(ColorCode::from_char), chars.next()) {
        (Some(c), None) => Ok(c),
        _ => Err(invalid(key, options.get(key), "expected one of bgrcmykw")),
    }
}

/// Splits a line specification such as `"k-"` or `"r--"` into colour and
/// dash flag.
fn line_spec(options: &OptionSet) -> Result<(ColorCode, bool), OptionError> {
    let key = OptionKey::LineSpec;
    let spec = text(options, key)?;
    let mut color = ColorCode::Black;
    let mut style = spec;
    if let Some(first) = spec.chars().next() {
        if let Some(c) = ColorCode::from_char(first) {
            color = c;
            style = &spec[first.len_utf8()..];
        }
    }
    match style {
        "" | "-" => Ok((color, false)),
        "--" | ":" | "-." => Ok((color, true)),
        _ => Err(invalid(key, options.get(key), "unrecognized line style")),
    }
}

fn limits_entry(value: &OptionValue) -> Result<AxisLimits, OptionError> {
    let key = OptionKey::AxisLim;
    match value {
        OptionValue::None => Ok([None; 4]),
        OptionValue::Seq(items) if items.len() == 4 => {
            let mut out = [None; 4];
            for (slot, item) in out.iter_mut().zip(items) {
                *slot = match item {
                    OptionValue::None => None,
                    OptionValue::Number(n) => Some(*n),
                    _ => return Err(invalid(key, value, "limits must be numbers or None")),
                };
            }
            Ok(out)
        }
        _ => Err(invalid(key, value, "expected [xmin, xmax, ymin, ymax]")),
    }
}

/// Per-series limits from a positional list or a name-keyed mapping.
fn axis_limits(options: &OptionSet, set: &TimeSeriesSet) -> Result<Vec<AxisLimits>, OptionError> {
    let key = OptionKey::AxisLim;
    let value = options.get(key);
    match value {
        OptionValue::Seq(entries) => set
            .series
            .iter()
            .enumerate()
            .map(|(i, _)| entries.get(i).map_or(Ok([None; 4]), limits_entry))
            .collect(),
        OptionValue::Map(entries) => set
            .series
            .iter()
            .map(|s| {
                entries
                    .get(&s.name)
                    .or_else(|| entries.get(s.short_name()))
                    .map_or(Ok([None; 4]), limits_entry)
            })
            .collect(),
        OptionValue::None => Ok(vec![[None; 4]; set.len()]),
        _ => Err(invalid(key, value, "expected a sequence or mapping")),
    }
}

impl PlotStyle {
    /// Decodes `options` for plotting `set`.
    ///
    /// # Errors
    ///
    /// Returns [`OptionError::InvalidOptionType`] for the first option whose
    /// value the renderer cannot interpret.
    pub fn from_options(options: &OptionSet, set: &TimeSeriesSet) -> Result<Self, OptionError> {
        use OptionKey as K;

        let (line_color, dashed) = line_spec(options)?;

        let marker_display = match text(options, K::MarkerDisplayed)? {
            "line" => MarkerDisplay::Line,
            "marker" => MarkerDisplay::Marker,
            _ => {
                return Err(invalid(
                    K::MarkerDisplayed,
                    options.get(K::MarkerDisplayed),
                    "expected \"line\" or \"marker\"",
                ));
            }
        };

        let plot_type = match text(options, K::PlotType)? {
            "linear" => PlotType::Linear,
            "loglog" => PlotType::LogLog,
            "semilogx" => PlotType::SemiLogX,
            "semilogy" => PlotType::SemiLogY,
            _ => {
                return Err(invalid(
                    K::PlotType,
                    options.get(K::PlotType),
                    "expected linear, loglog, semilogx or semilogy",
                ));
            }
        };

        let marker_symbol = text(options, K::MarkerSymbol)?
            .chars()
            .next()
            .ok_or_else(|| invalid(K::MarkerSymbol, options.get(K::MarkerSymbol), "empty symbol"))?;

        let labels = options.get(K::AxesLabel);
        let given: Vec<&str> = match labels {
            OptionValue::Seq(items) => items
                .iter()
                .map(|v| {
                    v.as_str()
                        .ok_or_else(|| invalid(K::AxesLabel, labels, "labels must be strings"))
                })
                .collect::<Result<_, _>>()?,
            OptionValue::None => Vec::new(),
            _ => return Err(invalid(K::AxesLabel, labels, "expected a sequence of strings")),
        };
        let axes_labels = set
            .series
            .iter()
            .enumerate()
            .map(|(i, s)| given.get(i).map_or_else(|| s.name.clone(), |l| (*l).to_string()))
            .collect();

        Ok(Self {
            alpha: number(options, K::Alpha)?,
            line_color,
            dashed,
            line_width: number(options, K::LineWidth)?,
            marker_color: color(options, K::MarkerColor)?,
            marker_display,
            marker_symbol,
            marker_size: number(options, K::MarkerSize)?,
            legend: switch(options, K::MarkerLegend)?,
            plot_type,
            axes_labels,
            axis_limits: axis_limits(options, set)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{Series, TimeSeriesSet};
    use crate::options::{RenderDefaults, resolve};

    fn demo_set() -> TimeSeriesSet {
        let series = |name: &str| Series {
            name: name.to_string(),
            values: vec![60.0, 60.1],
        };
        TimeSeriesSet {
            time: series("t(sec)"),
            series: vec![series("Frequency (Hz)"), series("Theta (Deg)")],
        }
    }

    fn style_for(overrides: Vec<(&str, OptionValue)>) -> Result<PlotStyle, OptionError> {
        let set = demo_set();
        let options = resolve(set.len(), overrides, &RenderDefaults::default())?;
        PlotStyle::from_options(&options, &set)
    }

    #[test]
    fn defaults_decode() {
        let style = style_for(vec![]).expect("defaults are valid");
        assert_eq!(style.line_color, ColorCode::Black);
        assert!(!style.dashed);
        assert_eq!(style.marker_display, MarkerDisplay::Line);
        assert_eq!(style.plot_type, PlotType::Linear);
        assert!(!style.legend);
        assert_eq!(style.axes_labels, ["Frequency (Hz)", "Theta (Deg)"]);
        assert_eq!(style.axis_limits, vec![[None; 4]; 2]);
    }

    #[test]
    fn limits_by_short_name() {
        let limits: OptionValue = serde_json::from_str(r#"{"Frequency": [0, 4, 59, 61]}"#)
            .expect("valid JSON");
        let style = style_for(vec![("axislim", limits)]).expect("valid limits");
        assert_eq!(
            style.axis_limits[0],
            [Some(0.0), Some(4.0), Some(59.0), Some(61.0)]
        );
        assert_eq!(style.axis_limits[1], [None; 4]);
    }

    #[test]
    fn dashed_red_line_spec() {
        let style = style_for(vec![("linespec", "r--".into())]).expect("valid spec");
        assert_eq!(style.line_color, ColorCode::Red);
        assert!(style.dashed);
    }

    #[test]
    fn unknown_plot_type_is_rejected() {
        let err = style_for(vec![("plottype", "polar".into())]);
        assert!(matches!(
            err,
            Err(OptionError::InvalidOptionType { key, .. }) if key == "plottype"
        ));
    }

    #[test]
    fn semilogy_scales_y_only() {
        let style = style_for(vec![("plottype", "semilogy".into())]).expect("valid");
        assert!(!style.plot_type.log_x());
        assert!(style.plot_type.log_y());
    }
}
