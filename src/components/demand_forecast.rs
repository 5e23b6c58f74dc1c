use yew::prelude::*;

use crate::components::remote_view::{SectionCard, render_remote};
use crate::hooks::use_sales::use_demand_forecast;
use crate::models::sales::DemandForecast;
use crate::normalize::{SortOrder, sort_by_value};

/// 30-day demand predictions for the best-selling products.
#[function_component(DemandForecastCard)]
pub fn demand_forecast_card() -> Html {
    let handle = use_demand_forecast();

    html! {
        <SectionCard
            title={"Demand Forecast (Next 30 Days)"}
            subtitle={"Predicted units to sell"}
        >
            {
                render_remote(&handle, Vec::is_empty, |forecasts: &std::rc::Rc<Vec<DemandForecast>>| {
                    let mut rows = (**forecasts).clone();
                    sort_by_value(
                        &mut rows,
                        |f| f64::from(f.forecasted_demand_30_days),
                        SortOrder::Descending,
                    );

                    html! {
                        <table class="data-table">
                            <thead>
                                <tr>
                                    <th>{"Product"}</th>
                                    <th>{"Product ID"}</th>
                                    <th class="numeric">{"Predicted Units"}</th>
                                </tr>
                            </thead>
                            <tbody>
                                {
                                    rows.iter().map(|forecast| {
                                        let name = if forecast.product_name.is_empty() {
                                            forecast.product_id.clone()
                                        } else {
                                            forecast.product_name.clone()
                                        };
                                        html! {
                                            <tr key={forecast.product_id.clone()}>
                                                <td class="emphasis">{name}</td>
                                                <td>{&forecast.product_id}</td>
                                                <td class="numeric accent">
                                                    {format!("{} units", forecast.forecasted_demand_30_days)}
                                                </td>
                                            </tr>
                                        }
                                    }).collect::<Html>()
                                }
                            </tbody>
                        </table>
                    }
                })
            }
        </SectionCard>
    }
}
