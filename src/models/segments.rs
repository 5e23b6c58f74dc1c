use std::collections::BTreeMap;

use super::series::{ChartSeries, SeriesPoint};

/// Fixed slice palette, applied by slice index modulo the palette length so
/// extra backend buckets wrap around instead of failing.
pub const SEGMENT_PALETTE: [&str; 6] = [
    "#ef4444", // red
    "#fbbf24", // amber
    "#34d399", // green
    "#60a5fa", // blue
    "#818cf8", // indigo
    "#f472b6", // pink
];

/// Canonical display order for churn-likelihood buckets. Buckets the backend
/// invents beyond these are appended after, alphabetically.
pub const CANONICAL_SEGMENTS: [&str; 3] = ["High Risk", "Medium Risk", "Low Risk"];

/// A churn-likelihood bucket name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    High,
    Medium,
    Low,
    Other(String),
}

impl Segment {
    pub fn from_name(name: &str) -> Self {
        match name {
            "High Risk" => Segment::High,
            "Medium Risk" => Segment::Medium,
            "Low Risk" => Segment::Low,
            other => Segment::Other(other.to_string()),
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Segment::High => "High Risk",
            Segment::Medium => "Medium Risk",
            Segment::Low => "Low Risk",
            Segment::Other(name) => name,
        }
    }

    /// Position in the canonical priority order; unrecognized buckets sort
    /// after all canonical ones.
    fn priority(&self) -> usize {
        match self {
            Segment::High => 0,
            Segment::Medium => 1,
            Segment::Low => 2,
            Segment::Other(_) => CANONICAL_SEGMENTS.len(),
        }
    }
}

/// One displayed slice of the segmentation breakdown.
#[derive(Debug, Clone, PartialEq)]
pub struct SegmentSlice {
    pub segment: Segment,
    pub count: f64,
    /// Rounded percentage share of the total.
    pub share: u32,
    pub color: &'static str,
}

/// Ordered, colored view of the `/api/churn_segmentation` counts.
///
/// Slice order follows the canonical priority list, not whatever order the
/// backend happened to serialize, so the chart looks the same on every
/// reload.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SegmentBreakdown {
    slices: Vec<SegmentSlice>,
}

impl SegmentBreakdown {
    pub fn from_counts(counts: &BTreeMap<String, f64>) -> Self {
        let mut segments: Vec<Segment> = counts.keys().map(|k| Segment::from_name(k)).collect();
        // BTreeMap iteration is alphabetical, so unrecognized buckets keep a
        // deterministic relative order after the canonical ones.
        segments.sort_by_key(Segment::priority);

        let total: f64 = counts.values().sum();
        let slices = segments
            .into_iter()
            .enumerate()
            .map(|(i, segment)| {
                let count = counts.get(segment.name()).copied().unwrap_or(0.0);
                let share = (count / total.max(1.0) * 100.0).round() as u32;
                SegmentSlice {
                    segment,
                    count,
                    share,
                    color: SEGMENT_PALETTE[i % SEGMENT_PALETTE.len()],
                }
            })
            .collect();

        Self { slices }
    }

    pub fn slices(&self) -> &[SegmentSlice] {
        &self.slices
    }

    pub fn is_empty(&self) -> bool {
        self.slices.is_empty()
    }

    pub fn total(&self) -> f64 {
        self.slices.iter().map(|s| s.count).sum()
    }

    pub fn series(&self) -> ChartSeries {
        ChartSeries::new(
            self.slices
                .iter()
                .map(|s| SeriesPoint::new(s.segment.name(), s.count))
                .collect(),
        )
    }

    pub fn colors(&self) -> Vec<&'static str> {
        self.slices.iter().map(|s| s.color).collect()
    }
}
