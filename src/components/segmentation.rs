use yew::prelude::*;

use crate::components::chart_panel::{ChartPanel, ChartSpec};
use crate::components::remote_view::{SectionCard, render_remote};
use crate::hooks::use_churn::use_segmentation;
use crate::models::segments::SegmentBreakdown;

/// Doughnut of customers per churn-likelihood bucket, with a percentage
/// legend and detailed counts. Slice order and colors come from
/// `SegmentBreakdown`, so the view is identical on every reload regardless
/// of backend serialization order.
#[function_component(Segmentation)]
pub fn segmentation() -> Html {
    let handle = use_segmentation();

    html! {
        <SectionCard
            title={"Customer Segmentation by Churn Likelihood"}
            subtitle={"Share of customers per risk bucket"}
        >
            {
                render_remote(&handle, SegmentBreakdown::is_empty, |breakdown| {
                    let spec = ChartSpec::Breakdown {
                        title: String::new(),
                        breakdown: (**breakdown).clone(),
                    };
                    html! {
                        <div class="segmentation-layout">
                            <ChartPanel id="segmentation-chart" {spec} height={280} />
                            <div class="segmentation-detail">
                                <ul class="segment-legend">
                                    {
                                        breakdown.slices().iter().map(|slice| {
                                            html! {
                                                <li key={slice.segment.name().to_string()}>
                                                    <span
                                                        class="segment-dot"
                                                        style={format!("background: {};", slice.color)}
                                                    />
                                                    <span class="emphasis">{slice.segment.name()}</span>
                                                    <span class="segment-share">
                                                        {format!("{}% ({})", slice.share, slice.count)}
                                                    </span>
                                                </li>
                                            }
                                        }).collect::<Html>()
                                    }
                                </ul>
                                <p class="segment-total">
                                    {format!("{} customers scored", breakdown.total())}
                                </p>
                            </div>
                        </div>
                    }
                })
            }
        </SectionCard>
    }
}
