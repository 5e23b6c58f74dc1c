use yew::prelude::*;

use crate::services::api::ApiConfig;

/// Returns the backend configuration provided at the application root.
#[hook]
pub fn use_api_config() -> ApiConfig {
    use_context::<ApiConfig>().expect("ApiConfig context not provided")
}
