use yew::prelude::*;

use crate::hooks::use_section::Section;

#[derive(Properties, PartialEq)]
pub struct NavBarProps {
    pub active: Section,
    pub on_select: Callback<Section>,
}

/// Top navigation tabs. Selecting a tab swaps which section subtree is
/// mounted; the previous section's state (and any in-flight fetches) is
/// discarded, not hidden.
#[function_component(NavBar)]
pub fn nav_bar(props: &NavBarProps) -> Html {
    html! {
        <nav class="nav-bar">
            {
                Section::all().iter().map(|&section| {
                    let on_select = props.on_select.clone();
                    let onclick = Callback::from(move |_| on_select.emit(section));
                    let class = if section == props.active {
                        "nav-tab active"
                    } else {
                        "nav-tab"
                    };
                    html! {
                        <button {class} {onclick} key={section.label()}>
                            <span class="nav-icon">{section.icon()}</span>
                            {section.label()}
                        </button>
                    }
                }).collect::<Html>()
            }
        </nav>
    }
}
