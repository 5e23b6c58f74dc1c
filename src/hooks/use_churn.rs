use yew::prelude::*;

use crate::models::churn::{ChurnCustomer, ChurnStats, ChurnTrends};
use crate::models::segments::SegmentBreakdown;
use crate::services::api::DashboardClient;

use super::use_api::use_api_config;
use super::use_remote::{RemoteHandle, use_remote};

/// The `count` customers most likely to churn. Changing the count issues a
/// fresh request; a stale response never lands.
#[hook]
pub fn use_churn_customers(count: usize) -> RemoteHandle<Vec<ChurnCustomer>> {
    let config = use_api_config();
    use_remote((config, count), |(config, count)| async move {
        DashboardClient::with_config(config)?
            .fetch_churn_customers(count)
            .await
    })
}

#[hook]
pub fn use_churn_trends() -> RemoteHandle<ChurnTrends> {
    let config = use_api_config();
    use_remote(config, |config| async move {
        DashboardClient::with_config(config)?.fetch_churn_trends().await
    })
}

/// Segmentation counts already shaped for display: canonical slice order
/// and palette colors applied.
#[hook]
pub fn use_segmentation() -> RemoteHandle<SegmentBreakdown> {
    let config = use_api_config();
    use_remote(config, |config| async move {
        let counts = DashboardClient::with_config(config)?
            .fetch_segmentation()
            .await?;
        Ok(SegmentBreakdown::from_counts(&counts))
    })
}

#[hook]
pub fn use_churn_stats() -> RemoteHandle<ChurnStats> {
    let config = use_api_config();
    use_remote(config, |config| async move {
        DashboardClient::with_config(config)?.fetch_churn_stats().await
    })
}
