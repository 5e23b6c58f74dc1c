use std::rc::Rc;

use yew::prelude::*;

use crate::hooks::use_remote::{RemoteHandle, RemoteResource};

/// Renders exactly one of the mutually exclusive views for a resource:
/// spinner, inline error with a retry action, an explicit "no data" state,
/// or the populated content. While loading, nothing from a previous success
/// is shown.
pub fn render_remote<T, E, R>(handle: &RemoteHandle<T>, is_empty: E, render: R) -> Html
where
    T: PartialEq,
    E: Fn(&T) -> bool,
    R: Fn(&Rc<T>) -> Html,
{
    match &handle.resource {
        RemoteResource::Idle | RemoteResource::Loading => html! {
            <div class="status loading">
                <div class="spinner"></div>
                <p>{"Loading data..."}</p>
            </div>
        },
        RemoteResource::Error(message) => {
            let refresh = handle.refresh.clone();
            let onclick = Callback::from(move |_| refresh.emit(()));
            html! {
                <div class="status error">
                    <p>{"❌ Error: "}{message}</p>
                    <button class="retry-button" {onclick}>{"Retry"}</button>
                </div>
            }
        }
        RemoteResource::Success(data) if is_empty(data) => html! {
            <div class="status no-data">
                <p>{"No data available"}</p>
            </div>
        },
        RemoteResource::Success(data) => render(data),
    }
}

#[derive(Properties, PartialEq)]
pub struct SectionCardProps {
    pub title: AttrValue,
    #[prop_or_default]
    pub subtitle: Option<AttrValue>,
    #[prop_or_default]
    pub children: Html,
}

/// Shared card chrome for dashboard widgets.
#[function_component(SectionCard)]
pub fn section_card(props: &SectionCardProps) -> Html {
    html! {
        <div class="section-card">
            <div class="section-card-header">
                <h2>{props.title.clone()}</h2>
                if let Some(subtitle) = &props.subtitle {
                    <p class="section-card-subtitle">{subtitle.clone()}</p>
                }
            </div>
            {props.children.clone()}
        </div>
    }
}
