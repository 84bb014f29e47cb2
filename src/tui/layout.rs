//! Figure layout: a title bar and one chart per series.

use std::ops::Range;

use ratatui::buffer::Buffer;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{
    Axis, Block, Borders, Chart, Dataset, GraphType, LegendPosition, Paragraph, Widget,
};

use super::style;
use crate::data::TimeSeriesSet;
use crate::options::{MarkerDisplay, PlotStyle};

/// A set of series with its decoded style, ready to draw.
pub struct Figure<'a> {
    pub title: &'a str,
    pub set: &'a TimeSeriesSet,
    pub style: &'a PlotStyle,
    /// Indices of the series drawn, one chart each.
    pub visible: Range<usize>,
    /// Footer hint; `None` for saved figures.
    pub footer: Option<&'a str>,
}

impl Widget for &Figure<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let footer_rows = u16::from(self.footer.is_some());
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),           // title
                Constraint::Min(3),              // charts
                Constraint::Length(footer_rows), // footer
            ])
            .split(area);

        render_header(self, chunks[0], buf);
        render_charts(self, chunks[1], buf);
        if let Some(hint) = self.footer {
            Paragraph::new(Line::from(Span::styled(
                hint,
                Style::default().fg(style::FOOTER_FG),
            )))
            .render(chunks[2], buf);
        }
    }
}

fn render_header(fig: &Figure<'_>, area: Rect, buf: &mut Buffer) {
    let header = Line::from(vec![
        Span::styled(
            format!(" {} ", fig.title),
            Style::default()
                .fg(style::HEADER_FG)
                .bg(style::HEADER_BG)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(format!(
            " │ series {}-{} of {} │ {} rows ",
            fig.visible.start + 1,
            fig.visible.end,
            fig.set.len(),
            fig.set.time.values.len(),
        )),
    ]);
    Paragraph::new(header).render(area, buf);
}

fn render_charts(fig: &Figure<'_>, area: Rect, buf: &mut Buffer) {
    let count = fig.visible.len();
    if count == 0 {
        Paragraph::new("  no series selected").render(area, buf);
        return;
    }
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(vec![Constraint::Ratio(1, count as u32); count])
        .split(area);

    for (slot, index) in rows.iter().zip(fig.visible.clone()) {
        render_series(fig, index, *slot, buf);
    }
}

/// One series against time, honoring scaling, limits and marker options.
fn render_series(fig: &Figure<'_>, index: usize, area: Rect, buf: &mut Buffer) {
    let (Some(series), Some(limits)) = (fig.set.series.get(index), fig.style.axis_limits.get(index))
    else {
        return;
    };
    let st = fig.style;
    let log_x = st.plot_type.log_x();
    let log_y = st.plot_type.log_y();

    let data = style::points(&fig.set.time.values, &series.values, log_x, log_y);
    let (x_bounds, y_bounds) = style::chart_bounds(&data, limits, log_x, log_y);

    let dataset = match st.marker_display {
        MarkerDisplay::Line => Dataset::default()
            .graph_type(GraphType::Line)
            .marker(ratatui::symbols::Marker::Braille)
            .style(Style::default().fg(style::color(st.line_color))),
        MarkerDisplay::Marker => Dataset::default()
            .graph_type(GraphType::Scatter)
            .marker(style::marker(st.marker_symbol))
            .style(Style::default().fg(style::color(st.marker_color))),
    }
    .name(series.name.clone())
    .data(&data);

    let y_title = st
        .axes_labels
        .get(index)
        .map_or(series.name.as_str(), String::as_str);

    let chart = Chart::new(vec![dataset])
        .block(Block::default().borders(Borders::ALL))
        .legend_position(st.legend.then_some(LegendPosition::TopRight))
        .x_axis(
            Axis::default()
                .title(fig.set.time.name.as_str())
                .bounds(x_bounds)
                .labels(vec![
                    style::tick_label(x_bounds[0], log_x),
                    style::tick_label(x_bounds[1], log_x),
                ]),
        )
        .y_axis(
            Axis::default()
                .title(y_title)
                .bounds(y_bounds)
                .labels(vec![
                    style::tick_label(y_bounds[0], log_y),
                    style::tick_label(y_bounds[1], log_y),
                ]),
        );

    chart.render(area, buf);
}
