use web_sys::HtmlSelectElement;
use yew::prelude::*;

use crate::models::filters::{Category, FilterState, Region, TimeFrame};

#[derive(Properties, PartialEq)]
pub struct FilterPanelProps {
    pub filters: FilterState,
    pub on_change: Callback<FilterState>,
}

/// Facet selectors for the sales page. The whole `FilterState` is replaced
/// on every change; children receive it read-only.
#[function_component(FilterPanel)]
pub fn filter_panel(props: &FilterPanelProps) -> Html {
    let on_time_frame = {
        let filters = props.filters;
        let on_change = props.on_change.clone();
        Callback::from(move |e: Event| {
            let target: HtmlSelectElement = e.target_unchecked_into();
            if let Ok(time_frame) = target.value().parse::<TimeFrame>() {
                on_change.emit(filters.with_time_frame(time_frame));
            }
        })
    };

    let on_category = {
        let filters = props.filters;
        let on_change = props.on_change.clone();
        Callback::from(move |e: Event| {
            let target: HtmlSelectElement = e.target_unchecked_into();
            if let Ok(category) = target.value().parse::<Category>() {
                on_change.emit(filters.with_category(category));
            }
        })
    };

    let on_region = {
        let filters = props.filters;
        let on_change = props.on_change.clone();
        Callback::from(move |e: Event| {
            let target: HtmlSelectElement = e.target_unchecked_into();
            if let Ok(region) = target.value().parse::<Region>() {
                on_change.emit(filters.with_region(region));
            }
        })
    };

    let on_reset = {
        let on_change = props.on_change.clone();
        Callback::from(move |_| on_change.emit(FilterState::default()))
    };

    html! {
        <div class="filter-panel">
            <label>
                {"Trend"}
                <select onchange={on_time_frame} aria-label="Select trend granularity">
                    {
                        TimeFrame::all().iter().map(|tf| {
                            let selected = *tf == props.filters.time_frame;
                            html! {
                                <option value={tf.label()} {selected}>{tf.label()}</option>
                            }
                        }).collect::<Html>()
                    }
                </select>
            </label>
            <label>
                {"Category"}
                <select onchange={on_category} aria-label="Select product category">
                    {
                        Category::all().iter().map(|c| {
                            let selected = *c == props.filters.category;
                            html! {
                                <option value={c.code().unwrap_or("all")} {selected}>{c.label()}</option>
                            }
                        }).collect::<Html>()
                    }
                </select>
            </label>
            <label>
                {"Region"}
                <select onchange={on_region} aria-label="Select sales region">
                    {
                        Region::all().iter().map(|r| {
                            let selected = *r == props.filters.region;
                            html! {
                                <option value={r.code().unwrap_or("all")} {selected}>{r.label()}</option>
                            }
                        }).collect::<Html>()
                    }
                </select>
            </label>
            <button class="filter-reset" onclick={on_reset}>{"Reset"}</button>
        </div>
    }
}
