use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::components::remote_view::SectionCard;
use crate::hooks::use_api::use_api_config;
use crate::models::error::AppError;
use crate::services::api::{ApiConfig, DashboardClient, UploadReceipt};

#[derive(Clone, PartialEq)]
enum UploadPhase {
    Idle,
    Uploading,
    Done(String),
    Failed(String),
}

async fn send_file(config: ApiConfig, file: web_sys::File) -> Result<UploadReceipt, AppError> {
    let name = file.name();
    let file = gloo_file::File::from(file);
    let bytes = gloo_file::futures::read_as_bytes(&file)
        .await
        .map_err(|e| AppError::Data(format!("Could not read file: {e}")))?;

    DashboardClient::with_config(config)?
        .upload_dataset(name, bytes)
        .await
}

/// Spreadsheet upload for new order data. Accepts Excel files only; the
/// backend re-trains from the ingested rows on its own schedule.
#[function_component(UploadPage)]
pub fn upload_page() -> Html {
    let config = use_api_config();
    let phase = use_state(|| UploadPhase::Idle);

    let on_change = {
        let phase = phase.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let Some(file) = input.files().and_then(|list| list.get(0)) else {
                return;
            };

            let name = file.name();
            if !(name.ends_with(".xls") || name.ends_with(".xlsx")) {
                phase.set(UploadPhase::Failed(
                    "Please choose an Excel file (.xls or .xlsx)".to_string(),
                ));
                return;
            }

            phase.set(UploadPhase::Uploading);
            let phase = phase.clone();
            let config = config.clone();
            spawn_local(async move {
                match send_file(config, file).await {
                    Ok(receipt) => phase.set(UploadPhase::Done(receipt.message)),
                    Err(e) => phase.set(UploadPhase::Failed(e.to_string())),
                }
            });
        })
    };

    html! {
        <SectionCard
            title={"Upload Order Data"}
            subtitle={"Add an Excel export of new orders to the dataset"}
        >
            <div class="upload-area">
                <input
                    type="file"
                    accept=".xls,.xlsx"
                    onchange={on_change}
                    disabled={*phase == UploadPhase::Uploading}
                    aria-label="Choose spreadsheet"
                />
                {
                    match &*phase {
                        UploadPhase::Idle => html! {},
                        UploadPhase::Uploading => html! {
                            <div class="status loading">
                                <div class="spinner"></div>
                                <p>{"Uploading..."}</p>
                            </div>
                        },
                        UploadPhase::Done(message) => html! {
                            <div class="status success"><p>{"✅ "}{message}</p></div>
                        },
                        UploadPhase::Failed(message) => html! {
                            <div class="status error"><p>{"❌ Error: "}{message}</p></div>
                        },
                    }
                }
            </div>
        </SectionCard>
    }
}
