//! Viewer state for the interactive figure.

/// Minimum terminal rows given to one chart before paging kicks in.
pub const MIN_CHART_ROWS: u16 = 8;

/// Paging state over the series of a figure.
#[derive(Debug, Clone)]
pub struct Viewer {
    /// Total number of series in the figure.
    pub series: usize,
    /// Series shown per page.
    pub per_page: usize,
    /// Zero-based page index.
    pub page: usize,
    /// Whether the user has requested quit.
    pub quit: bool,
}

impl Viewer {
    /// Creates a viewer fitting as many charts as `chart_rows` allows.
    pub fn new(series: usize, chart_rows: u16) -> Self {
        let mut viewer = Self {
            series,
            per_page: 1,
            page: 0,
            quit: false,
        };
        viewer.resize(chart_rows);
        viewer
    }

    /// Recomputes the page size after a terminal resize.
    pub fn resize(&mut self, chart_rows: u16) {
        self.per_page = usize::from(chart_rows / MIN_CHART_ROWS).clamp(1, self.series.max(1));
        self.page = self.page.min(self.pages() - 1);
    }

    /// Number of pages, at least one.
    pub fn pages(&self) -> usize {
        self.series.div_ceil(self.per_page).max(1)
    }

    /// Series indices on the current page.
    pub fn visible(&self) -> std::ops::Range<usize> {
        let start = self.page * self.per_page;
        start..(start + self.per_page).min(self.series)
    }

    pub fn next_page(&mut self) {
        if self.page + 1 < self.pages() {
            self.page += 1;
        }
    }

    pub fn prev_page(&mut self) {
        self.page = self.page.saturating_sub(1);
    }
}
