use yew::prelude::*;

use crate::components::remote_view::{SectionCard, render_remote};
use crate::components::sparkline::Sparkline;
use crate::hooks::use_churn::{use_churn_stats, use_churn_trends};
use crate::models::churn::{ChurnStats, ChurnTrends};

/// Aggregate churn figures: total churned customers and the churn rate.
#[function_component(ChurnRiskSummary)]
pub fn churn_risk_summary() -> Html {
    let handle = use_churn_stats();

    html! {
        <SectionCard title={"Churn Risk Summary"}>
            {
                render_remote(
                    &handle,
                    |stats: &ChurnStats| stats.cancelled_count == 0 && stats.total_entries.is_none(),
                    |stats| html! {
                        <div class="kpi-grid narrow">
                            <div class="kpi-card">
                                <h3>{"Total churn"}</h3>
                                <p class="kpi-value">{stats.cancelled_count}</p>
                            </div>
                            <div class="kpi-card accent">
                                <h3>{"Churn rate"}</h3>
                                <p class="kpi-value">{format!("{:.1}%", stats.cancelled_percentage)}</p>
                            </div>
                            if let Some(total) = stats.total_entries {
                                <div class="kpi-card">
                                    <h3>{"Customers"}</h3>
                                    <p class="kpi-value">{total}</p>
                                </div>
                            }
                        </div>
                    },
                )
            }
        </SectionCard>
    }
}

/// Monthly counts of predicted churners as a red trend line.
#[function_component(ChurnTrendCard)]
pub fn churn_trend_card() -> Html {
    let handle = use_churn_trends();

    html! {
        <SectionCard
            title={"Churn Rate Trends"}
            subtitle={"Predicted churners per month"}
        >
            {
                render_remote(&handle, ChurnTrends::is_empty, |trends| {
                    let series = trends.series();
                    let edge_labels = match (series.points().first(), series.points().last()) {
                        (Some(first), Some(last)) => {
                            Some((first.label.clone(), last.label.clone()))
                        }
                        _ => None,
                    };
                    html! {
                        <Sparkline
                            values={series.values()}
                            color={"#ef4444".to_string()}
                            {edge_labels}
                        />
                    }
                })
            }
        </SectionCard>
    }
}
