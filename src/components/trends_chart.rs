use yew::prelude::*;

use crate::components::chart_panel::{ChartPanel, ChartSpec};
use crate::components::remote_view::{SectionCard, render_remote};
use crate::hooks::use_sales::use_trend_sales;
use crate::models::filters::{FilterState, TimeFrame};
use crate::models::series::ChartSeries;

#[derive(Properties, PartialEq)]
pub struct TrendsChartProps {
    pub filters: FilterState,
}

/// Units-sold trend at the granularity chosen in the filter panel.
#[function_component(TrendsChart)]
pub fn trends_chart(props: &TrendsChartProps) -> Html {
    let time_frame = props.filters.time_frame;
    let handle = use_trend_sales(time_frame);

    let title = match time_frame {
        TimeFrame::Monthly => "Monthly Sales Trend",
        TimeFrame::Yearly => "Yearly Sales Trend",
    };

    html! {
        <SectionCard title={title} subtitle={"Total quantity sold"}>
            {
                render_remote(&handle, ChartSeries::is_empty, move |series| {
                    let spec = ChartSpec::Trend {
                        title: title.to_string(),
                        series: (**series).clone(),
                        color: "#60a5fa",
                    };
                    html! { <ChartPanel id="sales-trend-chart" {spec} /> }
                })
            }
        </SectionCard>
    }
}
