use std::collections::BTreeMap;

use serde::Deserialize;
use serde::de::DeserializeOwned;

use crate::models::{
    churn::{ChurnCustomer, ChurnStats, ChurnTrends},
    error::AppError,
    filters::FilterState,
    sales::{DemandForecast, FullSalesView, MainKpis, MonthlySales, TopProduct, YearlySales},
};

// API CONFIGURATION
/// Configuration for the dashboard backend client.
///
/// The base URL is required deployment configuration (the backend may live
/// on a different host than the static bundle), so the builder refuses to
/// produce a config without one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    base_url: String,
}

impl ApiConfig {
    /// Creates a builder for constructing an `ApiConfig`.
    pub fn builder() -> ApiConfigBuilder {
        ApiConfigBuilder::default()
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Constructs the full URL for an endpoint path plus query parameters.
    pub fn endpoint_url(&self, path: &str, query: &[(&str, String)]) -> String {
        let mut url = format!("{}{}", self.base_url, path);
        for (i, (name, value)) in query.iter().enumerate() {
            let sep = if i == 0 { '?' } else { '&' };
            url.push(sep);
            url.push_str(name);
            url.push('=');
            url.push_str(&urlencoding::encode(value));
        }
        url
    }
}

// API CONFIGURATION BUILDER
/// Builder for constructing an `ApiConfig`.
#[derive(Debug, Default)]
pub struct ApiConfigBuilder {
    base_url: Option<String>,
}

impl ApiConfigBuilder {
    /// Sets the backend base URL (trailing slash tolerated).
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Builds the `ApiConfig`; fails when no base URL was provided.
    pub fn build(self) -> Result<ApiConfig, AppError> {
        let base_url = self
            .base_url
            .map(|url| url.trim_end_matches('/').to_string())
            .filter(|url| !url.is_empty())
            .ok_or_else(|| AppError::Config("Backend base URL is required".to_string()))?;

        Ok(ApiConfig { base_url })
    }
}

// DASHBOARD CLIENT
/// HTTP client for the analytics backend.
pub struct DashboardClient {
    http: reqwest::Client,
    config: ApiConfig,
}

impl DashboardClient {
    /// Creates a new client for the given configuration.
    pub fn with_config(config: ApiConfig) -> Result<Self, AppError> {
        let http = reqwest::Client::builder()
            .build()
            .map_err(|e| AppError::Config(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self { http, config })
    }

    /// Returns a reference to the client's configuration.
    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    /// Headline KPI figures for the stat cards.
    pub async fn fetch_main_kpis(&self) -> Result<MainKpis, AppError> {
        self.fetch("/api/main_kpis", &[]).await
    }

    /// Historical sales plus a forecast for the next `days` days.
    pub async fn fetch_full_sales_view(&self, days: u32) -> Result<FullSalesView, AppError> {
        self.fetch("/api/full_sales_view", &[("days", days.to_string())])
            .await
    }

    /// Highest-grossing products, optionally narrowed by the active facets.
    pub async fn fetch_top_products(
        &self,
        filters: &FilterState,
    ) -> Result<Vec<TopProduct>, AppError> {
        let mut query = Vec::new();
        if let Some(category) = filters.category.code() {
            query.push(("category", category.to_string()));
        }
        if let Some(region) = filters.region.code() {
            query.push(("region", region.to_string()));
        }
        self.fetch("/api/top_products", &query).await
    }

    /// 30-day demand predictions for the best-selling products.
    pub async fn fetch_demand_forecast(&self) -> Result<Vec<DemandForecast>, AppError> {
        self.fetch("/api/product_demand_forecast", &[]).await
    }

    /// Units sold per calendar month.
    pub async fn fetch_monthly_sales(&self) -> Result<Vec<MonthlySales>, AppError> {
        self.fetch("/api/monthly_sales", &[]).await
    }

    /// Units sold per calendar year.
    pub async fn fetch_yearly_sales(&self) -> Result<Vec<YearlySales>, AppError> {
        self.fetch("/api/yearly_sales", &[]).await
    }

    /// The `count` customers the model considers most likely to churn.
    pub async fn fetch_churn_customers(&self, count: usize) -> Result<Vec<ChurnCustomer>, AppError> {
        self.fetch("/api/predict_churn", &[("count", count.to_string())])
            .await
    }

    /// Monthly counts of predicted churners.
    pub async fn fetch_churn_trends(&self) -> Result<ChurnTrends, AppError> {
        self.fetch("/api/churn_trends", &[]).await
    }

    /// Customer counts per churn-likelihood bucket. The map is keyed by the
    /// backend's bucket names; display ordering is applied later by
    /// `SegmentBreakdown`.
    pub async fn fetch_segmentation(&self) -> Result<BTreeMap<String, f64>, AppError> {
        self.fetch("/api/churn_segmentation", &[]).await
    }

    /// Aggregate churn figures for the summary card.
    pub async fn fetch_churn_stats(&self) -> Result<ChurnStats, AppError> {
        self.fetch("/api/db_stats", &[]).await
    }

    /// Uploads a spreadsheet of new order data for ingestion.
    pub async fn upload_dataset(
        &self,
        file_name: String,
        bytes: Vec<u8>,
    ) -> Result<UploadReceipt, AppError> {
        let url = self.config.endpoint_url("/api/upload_data", &[]);
        let part = reqwest::multipart::Part::bytes(bytes).file_name(file_name);
        let form = reqwest::multipart::Form::new().part("file", part);

        let response = self
            .http
            .post(&url)
            .multipart(form)
            .send()
            .await
            .map_err(classify_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(AppError::Status(status.as_u16()));
        }

        response
            .json()
            .await
            .map_err(|e| AppError::Parse(e.to_string()))
    }

    /// Executes a single GET and decodes the JSON body.
    async fn fetch<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T, AppError> {
        let url = self.config.endpoint_url(path, query);

        let response = self.http.get(&url).send().await.map_err(classify_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(AppError::Status(status.as_u16()));
        }

        response
            .json()
            .await
            .map_err(|e| AppError::Parse(e.to_string()))
    }
}

/// Confirmation returned by the upload endpoint.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct UploadReceipt {
    #[serde(default)]
    pub message: String,
}

/// Collapses a reqwest error into the transport arm of the taxonomy. The
/// detail rides along for the console; the leading text is what users see.
fn classify_error(error: reqwest::Error) -> AppError {
    AppError::Connect(error.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::filters::{Category, Region};

    #[test]
    fn test_builder_requires_base_url() {
        assert!(ApiConfig::builder().build().is_err());
        assert!(ApiConfig::builder().base_url("").build().is_err());
    }

    #[test]
    fn test_builder_strips_trailing_slash() {
        let config = ApiConfig::builder()
            .base_url("http://backend:5000/")
            .build()
            .unwrap();
        assert_eq!(config.base_url(), "http://backend:5000");
    }

    #[test]
    fn test_endpoint_url_without_query() {
        let config = ApiConfig::builder()
            .base_url("http://backend:5000")
            .build()
            .unwrap();
        assert_eq!(
            config.endpoint_url("/api/main_kpis", &[]),
            "http://backend:5000/api/main_kpis"
        );
    }

    #[test]
    fn test_endpoint_url_with_query() {
        let config = ApiConfig::builder()
            .base_url("http://backend:5000")
            .build()
            .unwrap();
        let url = config.endpoint_url("/api/full_sales_view", &[("days", "90".to_string())]);
        assert_eq!(url, "http://backend:5000/api/full_sales_view?days=90");
    }

    #[test]
    fn test_endpoint_url_encodes_values() {
        let config = ApiConfig::builder()
            .base_url("http://backend:5000")
            .build()
            .unwrap();
        let url = config.endpoint_url(
            "/api/top_products",
            &[
                ("category", "Electronics".to_string()),
                ("region", "North America".to_string()),
            ],
        );
        assert_eq!(
            url,
            "http://backend:5000/api/top_products?category=Electronics&region=North%20America"
        );
    }

    #[test]
    fn test_filter_facets_map_to_query_codes() {
        let filters = FilterState::default()
            .with_category(Category::Electronics)
            .with_region(Region::All);
        assert_eq!(filters.category.code(), Some("Electronics"));
        assert_eq!(filters.region.code(), None);
    }
}
