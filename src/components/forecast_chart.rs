use yew::prelude::*;

use crate::components::remote_view::{SectionCard, render_remote};
use crate::components::sparkline::path_for_range;
use crate::config::Config;
use crate::hooks::use_sales::use_sales_view;
use crate::models::sales::FullSalesView;

const VIEWBOX_WIDTH: f64 = 1000.0;
const VIEWBOX_HEIGHT: f64 = 260.0;
const PADDING: f64 = 10.0;
const LINE_COLOR: &str = "#3b82f6";

/// Historical sales with the model forecast drawn as a dashed continuation,
/// both scaled against the combined value range.
#[function_component(ForecastChart)]
pub fn forecast_chart() -> Html {
    let days = use_state(|| Config::FORECAST_DAY_CHOICES[0]);
    let handle = use_sales_view(*days);

    let horizon_buttons = Config::FORECAST_DAY_CHOICES
        .iter()
        .map(|&choice| {
            let days = days.clone();
            let class = if *days == choice {
                "toggle-button active"
            } else {
                "toggle-button"
            };
            let onclick = Callback::from(move |_| days.set(choice));
            let label = if choice >= 365 { "Next Year" } else { "Next Quarter" };
            html! { <button {class} {onclick} key={choice}>{label}</button> }
        })
        .collect::<Html>();

    html! {
        <SectionCard
            title={format!("Historical Sales & {}-Day Forecast", *days)}
            subtitle={"Daily sales with the projected continuation"}
        >
            <div class="toggle-row">{horizon_buttons}</div>
            {
                render_remote(&handle, FullSalesView::is_empty, |view| {
                    render_forecast_svg(view)
                })
            }
        </SectionCard>
    }
}

fn render_forecast_svg(view: &FullSalesView) -> Html {
    let historical = &view.historical_sales;
    let forecast = &view.forecast_sales;

    // One shared scale, so the dashed segment continues the solid one
    // rather than re-normalizing to its own range.
    let (min, max) = historical
        .iter()
        .chain(forecast.iter())
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| {
            (lo.min(v), hi.max(v))
        });

    let total = (historical.len() + forecast.len()).max(1) as f64;
    let split_x = VIEWBOX_WIDTH * historical.len() as f64 / total;

    let historical_path = path_for_range(
        historical,
        min,
        max,
        0.0,
        split_x,
        VIEWBOX_HEIGHT,
        PADDING,
    );
    let forecast_path = path_for_range(
        forecast,
        min,
        max,
        split_x,
        VIEWBOX_WIDTH - split_x,
        VIEWBOX_HEIGHT,
        PADDING,
    );

    let first_label = view.historical_dates.first().cloned().unwrap_or_default();
    let last_label = view
        .forecast_dates
        .last()
        .or(view.historical_dates.last())
        .cloned()
        .unwrap_or_default();

    html! {
        <div class="forecast-chart">
            <svg
                viewbox={format!("0 0 {VIEWBOX_WIDTH} {VIEWBOX_HEIGHT}")}
                preserveAspectRatio="none"
                style={format!("width: 100%; height: {VIEWBOX_HEIGHT}px; display: block;")}
            >
                <path
                    d={historical_path}
                    fill="none"
                    stroke={LINE_COLOR}
                    stroke-width="2.5"
                    stroke-linejoin="round"
                    vector-effect="non-scaling-stroke"
                />
                <path
                    d={forecast_path}
                    fill="none"
                    stroke={LINE_COLOR}
                    stroke-width="2.5"
                    stroke-dasharray="7 5"
                    stroke-linejoin="round"
                    vector-effect="non-scaling-stroke"
                />
            </svg>
            <div class="sparkline-labels">
                <span>{first_label}</span>
                <span>{last_label}</span>
            </div>
            <div class="forecast-legend">
                <span class="legend-line solid"></span>{"Historical daily sales"}
                <span class="legend-line dashed"></span>{"Forecast"}
            </div>
        </div>
    }
}
