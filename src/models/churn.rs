use chrono::NaiveDate;
use serde::Deserialize;

use super::sales::deserialize_flexible_id;
use super::series::ChartSeries;

/// One customer row from the churn model, highest risk first.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ChurnCustomer {
    #[serde(default, deserialize_with = "deserialize_flexible_id")]
    pub customer_id: String,
    /// Model output in `[0, 1]`.
    #[serde(default)]
    pub churn_probability: f64,
    #[serde(default, deserialize_with = "deserialize_optional_date")]
    pub last_purchase_date: Option<NaiveDate>,
    #[serde(default)]
    pub total_cancellations: u32,
    #[serde(default)]
    pub subscription_status: String,
}

impl ChurnCustomer {
    /// Risk score as a whole percentage for display.
    pub fn score(&self) -> u32 {
        (self.churn_probability.clamp(0.0, 1.0) * 100.0).round() as u32
    }

    pub fn last_purchase_label(&self) -> String {
        self.last_purchase_date
            .map_or_else(|| "—".to_string(), |d| d.format("%Y-%m-%d").to_string())
    }
}

/// Monthly counts of predicted churners.
#[derive(Debug, Clone, PartialEq, Deserialize, Default)]
pub struct ChurnTrends {
    #[serde(default)]
    pub months: Vec<String>,
    #[serde(default)]
    pub churn_counts: Vec<f64>,
}

impl ChurnTrends {
    pub fn series(&self) -> ChartSeries {
        ChartSeries::from_pairs(self.months.iter().cloned(), &self.churn_counts)
    }

    pub fn is_empty(&self) -> bool {
        self.churn_counts.is_empty()
    }
}

/// Aggregate churn figures for the summary card.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ChurnStats {
    #[serde(default)]
    pub cancelled_count: u64,
    #[serde(default)]
    pub cancelled_percentage: f64,
    #[serde(default)]
    pub total_entries: Option<u64>,
}

/// Parses `%Y-%m-%d`; anything missing or malformed becomes `None` rather
/// than failing the whole row.
fn deserialize_optional_date<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    Ok(raw.and_then(|s| NaiveDate::parse_from_str(&s, "%Y-%m-%d").ok()))
}
