use crate::models::error::AppError;

/// Configuration constants for the application
pub struct Config;

impl Config {
    /// Name of the document meta tag carrying the backend base URL.
    pub const API_BASE_META: &'static str = "dashboard-api-base";

    /// Rows per page in the churn customer table.
    pub const DEFAULT_PAGE_SIZE: usize = 10;

    /// Choices offered by the customer-count selector.
    pub const CUSTOMER_COUNT_CHOICES: [usize; 5] = [10, 20, 30, 50, 100];

    /// Forecast horizons offered by the sales chart (days).
    pub const FORECAST_DAY_CHOICES: [u32; 2] = [90, 365];

    /// Seed for the deterministic placeholder rows shown while the backend
    /// has no customer data yet.
    pub const PLACEHOLDER_SEED: u64 = 0x5eed_cafe;
}

/// Reads the backend base URL from `<meta name="dashboard-api-base">`.
///
/// The base URL is required deployment configuration; there is no baked-in
/// default to fall back on.
pub fn api_base_url() -> Result<String, AppError> {
    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| AppError::Config("No document available".to_string()))?;

    let selector = format!("meta[name=\"{}\"]", Config::API_BASE_META);
    let content = document
        .query_selector(&selector)
        .ok()
        .flatten()
        .and_then(|meta| meta.get_attribute("content"))
        .map(|url| url.trim().trim_end_matches('/').to_string())
        .filter(|url| !url.is_empty());

    content.ok_or_else(|| {
        AppError::Config(format!(
            "Backend base URL not configured; set <meta name=\"{}\">",
            Config::API_BASE_META
        ))
    })
}
