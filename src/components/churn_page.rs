use yew::prelude::*;

use crate::components::churn_summary::{ChurnRiskSummary, ChurnTrendCard};
use crate::components::churn_table::ChurnTable;
use crate::components::segmentation::Segmentation;

/// Churn prediction section. Widgets fail independently: a broken endpoint
/// shows its own inline error without affecting the siblings.
#[function_component(ChurnPage)]
pub fn churn_page() -> Html {
    html! {
        <div class="page">
            <div class="page-header">
                <h1>{"Churn Prediction Dashboard"}</h1>
                <p>{"Monitor and analyze customer churn risk"}</p>
            </div>
            <ChurnTable />
            <div class="two-column">
                <ChurnTrendCard />
                <ChurnRiskSummary />
            </div>
            <Segmentation />
        </div>
    }
}
