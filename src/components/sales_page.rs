use yew::prelude::*;

use crate::components::demand_forecast::DemandForecastCard;
use crate::components::filter_panel::FilterPanel;
use crate::components::forecast_chart::ForecastChart;
use crate::components::kpi_cards::KpiCards;
use crate::components::top_products::TopProducts;
use crate::components::trends_chart::TrendsChart;
use crate::models::filters::FilterState;

/// Sales forecasting section. Owns the filter state; every widget below
/// runs its own independent fetch pipeline.
#[function_component(SalesPage)]
pub fn sales_page() -> Html {
    let filters = use_state(FilterState::default);

    let on_filters_change = {
        let filters = filters.clone();
        Callback::from(move |next: FilterState| filters.set(next))
    };

    html! {
        <div class="page">
            <div class="page-header">
                <h1>{"Sales Forecasting Dashboard"}</h1>
                <p>{"Monitor and predict your sales performance"}</p>
            </div>
            <KpiCards />
            <FilterPanel filters={*filters} on_change={on_filters_change} />
            <TopProducts filters={*filters} />
            <ForecastChart />
            <TrendsChart filters={*filters} />
            <DemandForecastCard />
        </div>
    }
}
