use yew::prelude::*;

use crate::components::remote_view::render_remote;
use crate::hooks::use_sales::use_main_kpis;
use crate::models::sales::MainKpis;

/// Compact form for headline figures: 2400000 -> "2.4M".
fn compact(value: f64) -> String {
    let magnitude = value.abs();
    if magnitude >= 1_000_000.0 {
        format!("{:.1}M", value / 1_000_000.0)
    } else if magnitude >= 10_000.0 {
        format!("{:.1}K", value / 1_000.0)
    } else {
        format!("{value:.0}")
    }
}

/// Headline KPI stat cards sourced from `/api/main_kpis`.
#[function_component(KpiCards)]
pub fn kpi_cards() -> Html {
    let handle = use_main_kpis();

    render_remote(
        &handle,
        |kpis: &MainKpis| kpis.total_orders == 0 && kpis.total_revenue == 0.0,
        |kpis| {
            html! {
                <div class="kpi-grid">
                    <div class="kpi-card">
                        <h3>{"Total Revenue"}</h3>
                        <p class="kpi-value">{format!("${}", compact(kpis.total_revenue))}</p>
                        <p class="kpi-period">{"all recorded orders"}</p>
                    </div>
                    <div class="kpi-card">
                        <h3>{"Total Orders"}</h3>
                        <p class="kpi-value">{compact(kpis.total_orders as f64)}</p>
                        <p class="kpi-period">{"orders placed"}</p>
                    </div>
                    <div class="kpi-card">
                        <h3>{"Average Order Value"}</h3>
                        <p class="kpi-value">{format!("${:.2}", kpis.average_order_value)}</p>
                        <p class="kpi-period">{"per order"}</p>
                    </div>
                    <div class="kpi-card accent">
                        <h3>{"Churn Rate"}</h3>
                        <p class="kpi-value">{format!("{:.1}%", kpis.churn_rate)}</p>
                        <p class="kpi-period">{"predicted churners"}</p>
                    </div>
                </div>
            }
        },
    )
}

#[cfg(test)]
mod tests {
    use super::compact;

    #[test]
    fn test_compact_millions() {
        assert_eq!(compact(2_400_000.0), "2.4M");
    }

    #[test]
    fn test_compact_thousands() {
        assert_eq!(compact(89_200.0), "89.2K");
    }

    #[test]
    fn test_compact_small_values() {
        assert_eq!(compact(950.0), "950");
    }
}
