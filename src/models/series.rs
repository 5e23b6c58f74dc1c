/// One labelled value in a display series.
#[derive(Debug, Clone, PartialEq)]
pub struct SeriesPoint {
    pub label: String,
    pub value: f64,
}

impl SeriesPoint {
    pub fn new(label: impl Into<String>, value: f64) -> Self {
        Self {
            label: label.into(),
            value,
        }
    }
}

/// An ordered label/value series ready for a chart or table.
///
/// Insertion order is significant: it defines the x-axis and legend order.
/// A series is immutable once produced; callers rebuild it when the source
/// payload or the active filters change.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ChartSeries {
    points: Vec<SeriesPoint>,
}

impl ChartSeries {
    pub fn new(points: Vec<SeriesPoint>) -> Self {
        Self { points }
    }

    /// Builds a series by zipping labels with values, truncating to the
    /// shorter side when the backend returns mismatched lengths.
    pub fn from_pairs<L, I>(labels: I, values: &[f64]) -> Self
    where
        L: Into<String>,
        I: IntoIterator<Item = L>,
    {
        let points = labels
            .into_iter()
            .zip(values.iter())
            .map(|(label, &value)| SeriesPoint::new(label, value))
            .collect();
        Self { points }
    }

    pub fn points(&self) -> &[SeriesPoint] {
        &self.points
    }

    pub fn labels(&self) -> Vec<String> {
        self.points.iter().map(|p| p.label.clone()).collect()
    }

    pub fn values(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.value).collect()
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn total(&self) -> f64 {
        self.points.iter().map(|p| p.value).sum()
    }
}

/// Page window over a list, with the page clamped into range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaginationState {
    pub page: usize,
    pub page_size: usize,
}

impl PaginationState {
    pub fn new(page: usize, page_size: usize) -> Self {
        Self {
            page: page.max(1),
            page_size: page_size.max(1),
        }
    }

    /// Number of pages needed for `len` rows. Zero rows still occupy one
    /// (empty) page so the clamp invariant `1 <= page` holds.
    pub fn total_pages(&self, len: usize) -> usize {
        len.div_ceil(self.page_size).max(1)
    }

    /// Returns a copy with `page` clamped to `[1, total_pages]`. Applied on
    /// every data change so a shrink never leaves the view past the end.
    pub fn clamped(&self, len: usize) -> Self {
        Self {
            page: self.page.clamp(1, self.total_pages(len)),
            page_size: self.page_size,
        }
    }

    /// Start/end row indices of the (clamped) current page.
    pub fn bounds(&self, len: usize) -> (usize, usize) {
        let clamped = self.clamped(len);
        let start = (clamped.page - 1) * clamped.page_size;
        let end = (start + clamped.page_size).min(len);
        (start.min(len), end)
    }
}

impl Default for PaginationState {
    fn default() -> Self {
        Self {
            page: 1,
            page_size: crate::config::Config::DEFAULT_PAGE_SIZE,
        }
    }
}
