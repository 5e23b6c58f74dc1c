use gloo_storage::Storage;
use serde::{Deserialize, Serialize};
use yew::prelude::*;

/// Top-level dashboard sections. Exactly one is mounted at a time;
/// switching away unmounts the subtree and discards its state, including
/// in-flight requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Section {
    #[default]
    SalesForecast,
    ChurnPrediction,
    Upload,
}

impl Section {
    pub fn label(&self) -> &'static str {
        match self {
            Section::SalesForecast => "Sales Forecast",
            Section::ChurnPrediction => "Churn Prediction",
            Section::Upload => "Upload",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Section::SalesForecast => "📊",
            Section::ChurnPrediction => "🔄",
            Section::Upload => "📤",
        }
    }

    /// All sections in navigation order.
    pub fn all() -> &'static [Section] {
        &[
            Section::SalesForecast,
            Section::ChurnPrediction,
            Section::Upload,
        ]
    }
}

/// Handle returned by `use_section` hook
#[derive(Clone, PartialEq)]
pub struct SectionHandle {
    pub section: Section,
    pub set_section: Callback<Section>,
}

/// Custom hook for the active section, persisted to localStorage so a
/// reload lands on the same view.
#[hook]
pub fn use_section() -> SectionHandle {
    let section = use_state(|| load_section_preference().unwrap_or_default());

    // Effect: Persist section to localStorage on change
    {
        let section_value = *section;
        use_effect_with(section_value, move |section| {
            save_section_preference(*section);
            || ()
        });
    }

    let set_section = {
        let section = section.clone();
        Callback::from(move |new_section| section.set(new_section))
    };

    SectionHandle {
        section: *section,
        set_section,
    }
}

fn load_section_preference() -> Option<Section> {
    gloo_storage::LocalStorage::get("section").ok()
}

fn save_section_preference(section: Section) {
    if let Err(e) = gloo_storage::LocalStorage::set("section", section) {
        web_sys::console::warn_1(&format!("Failed to save section: {e:?}").into());
    }
}
