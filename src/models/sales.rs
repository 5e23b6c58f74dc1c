use serde::Deserialize;

use super::series::ChartSeries;

/// Headline figures for the sales stat cards.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct MainKpis {
    #[serde(default)]
    pub total_revenue: f64,
    #[serde(default)]
    pub total_orders: u64,
    #[serde(default)]
    pub average_order_value: f64,
    #[serde(default)]
    pub churn_rate: f64,
}

/// Recent historical sales plus the model forecast that extends them.
#[derive(Debug, Clone, PartialEq, Deserialize, Default)]
pub struct FullSalesView {
    #[serde(default)]
    pub historical_dates: Vec<String>,
    #[serde(default)]
    pub historical_sales: Vec<f64>,
    #[serde(default)]
    pub forecast_dates: Vec<String>,
    #[serde(default)]
    pub forecast_sales: Vec<f64>,
}

impl FullSalesView {
    pub fn historical_series(&self) -> ChartSeries {
        ChartSeries::from_pairs(self.historical_dates.iter().cloned(), &self.historical_sales)
    }

    pub fn forecast_series(&self) -> ChartSeries {
        ChartSeries::from_pairs(self.forecast_dates.iter().cloned(), &self.forecast_sales)
    }

    pub fn is_empty(&self) -> bool {
        self.historical_sales.is_empty() && self.forecast_sales.is_empty()
    }
}

/// One row of the top-products ranking.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TopProduct {
    #[serde(default)]
    pub product_name: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub total_sales: f64,
}

/// 30-day demand prediction for one product.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct DemandForecast {
    #[serde(default, deserialize_with = "deserialize_flexible_id")]
    pub product_id: String,
    #[serde(default)]
    pub product_name: String,
    #[serde(default)]
    pub forecasted_demand_30_days: u32,
}

/// Units sold in one calendar month.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct MonthlySales {
    #[serde(default)]
    pub month: String,
    #[serde(default)]
    pub total_quantity: f64,
}

/// Units sold in one calendar year.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct YearlySales {
    #[serde(default, deserialize_with = "deserialize_flexible_id")]
    pub year: String,
    #[serde(default)]
    pub total_quantity: f64,
}

pub fn monthly_series(rows: &[MonthlySales]) -> ChartSeries {
    let values: Vec<f64> = rows.iter().map(|r| r.total_quantity).collect();
    ChartSeries::from_pairs(rows.iter().map(|r| r.month.clone()), &values)
}

pub fn yearly_series(rows: &[YearlySales]) -> ChartSeries {
    let values: Vec<f64> = rows.iter().map(|r| r.total_quantity).collect();
    ChartSeries::from_pairs(rows.iter().map(|r| r.year.clone()), &values)
}

/// Accepts a JSON string or number and yields it as a display string.
/// Some endpoints serialize identifiers either way depending on the source
/// column type.
pub(crate) fn deserialize_flexible_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::de::Error;

    let value = serde_json::Value::deserialize(deserializer)?;
    match value {
        serde_json::Value::String(s) => Ok(s),
        serde_json::Value::Number(n) => Ok(n.to_string()),
        serde_json::Value::Null => Ok(String::new()),
        other => Err(D::Error::custom(format!(
            "expected string or number, got {other}"
        ))),
    }
}
