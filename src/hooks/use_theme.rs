use gloo_storage::Storage;
use serde::{Deserialize, Serialize};
use yew::prelude::*;

/// Color scheme preference
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    fn attribute(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }
}

/// Handle returned by `use_theme` hook
#[derive(Clone, PartialEq)]
pub struct ThemeHandle {
    pub theme: Theme,
    pub toggle: Callback<()>,
}

impl ThemeHandle {
    pub fn is_dark(&self) -> bool {
        self.theme == Theme::Dark
    }
}

/// Light/dark toggle persisted to localStorage; first visit follows the
/// system preference.
#[hook]
pub fn use_theme() -> ThemeHandle {
    let theme = use_state(|| load_theme_preference().unwrap_or_else(detect_system_preference));

    // Effect: apply to the DOM and persist on change
    {
        let theme_value = *theme;
        use_effect_with(theme_value, move |theme| {
            apply_theme_to_dom(*theme);
            save_theme_preference(*theme);
            || ()
        });
    }

    let toggle = {
        let theme = theme.clone();
        Callback::from(move |()| {
            let next = match *theme {
                Theme::Dark => Theme::Light,
                Theme::Light => Theme::Dark,
            };
            theme.set(next);
        })
    };

    ThemeHandle {
        theme: *theme,
        toggle,
    }
}

fn detect_system_preference() -> Theme {
    web_sys::window()
        .and_then(|w| w.match_media("(prefers-color-scheme: dark)").ok().flatten())
        .map_or(Theme::Light, |mq| {
            if mq.matches() { Theme::Dark } else { Theme::Light }
        })
}

/// Sets the `data-theme` attribute on `<html>`; style.css keys off it.
fn apply_theme_to_dom(theme: Theme) {
    if let Some(html) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
    {
        let _ = html.set_attribute("data-theme", theme.attribute());
    }
}

fn load_theme_preference() -> Option<Theme> {
    gloo_storage::LocalStorage::get("theme").ok()
}

fn save_theme_preference(theme: Theme) {
    if let Err(e) = gloo_storage::LocalStorage::set("theme", theme) {
        web_sys::console::warn_1(&format!("Failed to save theme: {e:?}").into());
    }
}
