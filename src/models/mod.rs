pub mod churn;
pub mod error;
pub mod filters;
pub mod sales;
pub mod segments;
pub mod series;
