use yew::prelude::*;

use crate::components::churn_page::ChurnPage;
use crate::components::sales_page::SalesPage;
use crate::components::upload::UploadPage;
use crate::components::{NavBar, ThemeToggle};
use crate::hooks::use_section::{Section, use_section};
use crate::services::api::ApiConfig;

#[function_component(App)]
pub fn app() -> Html {
    let section_handle = use_section();

    // The base URL is required deployment configuration; resolve it once.
    let config = use_memo((), |_| {
        crate::config::api_base_url()
            .and_then(|url| ApiConfig::builder().base_url(url).build())
    });

    let body = match &*config {
        Err(e) => html! {
            <div class="status error config-error">
                <p>{"❌ "}{e.to_string()}</p>
            </div>
        },
        Ok(config) => {
            let active = section_handle.section;
            // Only the active section's subtree is mounted; switching away
            // drops its state and cancels its in-flight fetches.
            let section_view = match active {
                Section::SalesForecast => html! { <SalesPage /> },
                Section::ChurnPrediction => html! { <ChurnPage /> },
                Section::Upload => html! { <UploadPage /> },
            };
            html! {
                <ContextProvider<ApiConfig> context={config.clone()}>
                    <NavBar active={active} on_select={section_handle.set_section.clone()} />
                    {section_view}
                </ContextProvider<ApiConfig>>
            }
        }
    };

    html! {
        <div class="app-container">
            <header class="app-header">
                <h1>{"Insight Dashboard"}</h1>
                <ThemeToggle />
            </header>

            <main class="app-main">
                {body}
            </main>

            <style>
                {include_str!("style.css")}
            </style>
        </div>
    }
}
