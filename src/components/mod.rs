pub mod chart_panel;
pub mod churn_page;
pub mod churn_summary;
pub mod churn_table;
pub mod demand_forecast;
pub mod filter_panel;
pub mod forecast_chart;
pub mod kpi_cards;
pub mod nav;
pub mod remote_view;
pub mod sales_page;
pub mod segmentation;
pub mod sparkline;
pub mod theme_toggle;
pub mod top_products;
pub mod trends_chart;
pub mod upload;

pub use nav::NavBar;
pub use theme_toggle::ThemeToggle;
