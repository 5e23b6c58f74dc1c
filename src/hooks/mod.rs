pub mod use_api;
pub mod use_churn;
pub mod use_remote;
pub mod use_sales;
pub mod use_section;
pub mod use_theme;
