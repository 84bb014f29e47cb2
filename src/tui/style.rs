//! Colour and marker mapping plus axis scaling helpers.

use ratatui::style::Color;
use ratatui::symbols::Marker;

use crate::options::{AxisLimits, ColorCode};

/// Title bar foreground.
pub const HEADER_FG: Color = Color::White;
/// Title bar background.
pub const HEADER_BG: Color = Color::DarkGray;
/// Footer help text color.
pub const FOOTER_FG: Color = Color::DarkGray;

/// Terminal colour for a colour code. Black maps to the terminal's default
/// foreground so it stays visible on dark backgrounds.
pub fn color(code: ColorCode) -> Color {
    match code {
        ColorCode::Blue => Color::Blue,
        ColorCode::Green => Color::Green,
        ColorCode::Red => Color::Red,
        ColorCode::Cyan => Color::Cyan,
        ColorCode::Magenta => Color::Magenta,
        ColorCode::Yellow => Color::Yellow,
        ColorCode::Black => Color::Reset,
        ColorCode::White => Color::White,
    }
}

/// Closest terminal glyph for a marker symbol.
pub fn marker(symbol: char) -> Marker {
    match symbol {
        'o' | '.' | ',' | '*' => Marker::Dot,
        's' | 'D' | 'd' | 'p' | 'h' => Marker::Block,
        '|' | '_' | '^' | 'v' => Marker::Bar,
        _ => Marker::HalfBlock,
    }
}

/// Maps a value onto a log10 axis; non-positive values have no position.
pub fn scale(value: f64, log: bool) -> Option<f64> {
    if !value.is_finite() {
        return None;
    }
    if !log {
        return Some(value);
    }
    (value > 0.0).then(|| value.log10())
}

/// Chart points in plot coordinates, dropping values that cannot be placed.
pub fn points(time: &[f64], values: &[f64], log_x: bool, log_y: bool) -> Vec<(f64, f64)> {
    time.iter()
        .zip(values)
        .filter_map(|(&t, &v)| Some((scale(t, log_x)?, scale(v, log_y)?)))
        .collect()
}

/// Bounds along one axis: explicit limits win, missing ends come from the
/// data. With `pad` the data-derived range gets 10% padding on both sides.
pub fn bounds(
    data: impl Iterator<Item = f64>,
    limits: [Option<f64>; 2],
    log: bool,
    pad: bool,
) -> [f64; 2] {
    let (min, max) = data.fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
        (lo.min(v), hi.max(v))
    });
    let (mut lo, mut hi) = if min.is_finite() && max.is_finite() {
        let range = (max - min).max(0.1);
        let margin = if pad { range * 0.1 } else { 0.0 };
        (min - margin, max + margin)
    } else {
        (-1.0, 1.0)
    };
    if let Some(l) = limits[0].and_then(|l| scale(l, log)) {
        lo = l;
    }
    if let Some(h) = limits[1].and_then(|h| scale(h, log)) {
        hi = h;
    }
    if hi <= lo {
        hi = lo + 1.0;
    }
    [lo, hi]
}

/// X and Y bounds for one series chart.
pub fn chart_bounds(
    points: &[(f64, f64)],
    limits: &AxisLimits,
    log_x: bool,
    log_y: bool,
) -> ([f64; 2], [f64; 2]) {
    let x = bounds(points.iter().map(|p| p.0), [limits[0], limits[1]], log_x, false);
    let y = bounds(points.iter().map(|p| p.1), [limits[2], limits[3]], log_y, true);
    (x, y)
}

/// Axis tick label; log axes show the underlying value.
pub fn tick_label(value: f64, log: bool) -> String {
    if log {
        format!("{:.3e}", 10f64.powf(value))
    } else {
        format!("{value:.3}")
    }
}
