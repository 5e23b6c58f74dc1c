use yew::prelude::*;

use crate::models::filters::{FilterState, TimeFrame};
use crate::models::sales::{
    DemandForecast, FullSalesView, MainKpis, TopProduct, monthly_series, yearly_series,
};
use crate::models::series::ChartSeries;
use crate::services::api::DashboardClient;

use super::use_api::use_api_config;
use super::use_remote::{RemoteHandle, use_remote};

#[hook]
pub fn use_main_kpis() -> RemoteHandle<MainKpis> {
    let config = use_api_config();
    use_remote(config, |config| async move {
        DashboardClient::with_config(config)?.fetch_main_kpis().await
    })
}

/// Historical sales plus a forecast over the chosen horizon. Changing the
/// horizon cancels the in-flight request and starts over.
#[hook]
pub fn use_sales_view(days: u32) -> RemoteHandle<FullSalesView> {
    let config = use_api_config();
    use_remote((config, days), |(config, days)| async move {
        DashboardClient::with_config(config)?
            .fetch_full_sales_view(days)
            .await
    })
}

#[hook]
pub fn use_top_products(filters: FilterState) -> RemoteHandle<Vec<TopProduct>> {
    let config = use_api_config();
    use_remote((config, filters), |(config, filters)| async move {
        DashboardClient::with_config(config)?
            .fetch_top_products(&filters)
            .await
    })
}

/// Sales trend at the requested granularity, already normalized into a
/// label/value series.
#[hook]
pub fn use_trend_sales(time_frame: TimeFrame) -> RemoteHandle<ChartSeries> {
    let config = use_api_config();
    use_remote((config, time_frame), |(config, time_frame)| async move {
        let client = DashboardClient::with_config(config)?;
        match time_frame {
            TimeFrame::Monthly => Ok(monthly_series(&client.fetch_monthly_sales().await?)),
            TimeFrame::Yearly => Ok(yearly_series(&client.fetch_yearly_sales().await?)),
        }
    })
}

#[hook]
pub fn use_demand_forecast() -> RemoteHandle<Vec<DemandForecast>> {
    let config = use_api_config();
    use_remote(config, |config| async move {
        DashboardClient::with_config(config)?
            .fetch_demand_forecast()
            .await
    })
}
