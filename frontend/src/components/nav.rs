use yew::prelude::*;

use crate::config;
use crate::scroll::geometry::DomViewport;
use crate::scroll::sections::link_target;

/// (section id, label) pairs, in page order.
pub const NAV_LINKS: [(&str, &str); 3] = [
    ("hero", "Home"),
    ("features", "Features"),
    ("pricing", "Pricing"),
];

/// Smooth-scrolls to `#section_id`, leaving room for the fixed header.
/// Returns false if the section is not on the page.
pub fn scroll_to_section(section_id: &str) -> bool {
    let Some(viewport) = DomViewport::current() else {
        return false;
    };
    let section = viewport
        .window()
        .document()
        .and_then(|document| document.get_element_by_id(section_id));
    match section {
        Some(section) => {
            viewport.scroll_to_element(&section, config::HEADER_OFFSET_PX);
            true
        }
        None => {
            log::debug!("No section #{} to scroll to", section_id);
            false
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct NavProps {
    /// Id of the section currently in view; empty when none is.
    pub active: String,
    pub on_signup: Callback<MouseEvent>,
}

#[function_component(Nav)]
pub fn nav(props: &NavProps) -> Html {
    let NavProps { active, on_signup } = props;

    html! {
        <nav class="top-nav">
            <div class="nav-content">
                <a class="nav-logo" href="#hero">{"NOVA"}</a>
                <div class="nav-right">
                    { for NAV_LINKS.iter().map(|(id, label)| {
                        let id = *id;
                        let onclick = Callback::from(move |e: MouseEvent| {
                            e.prevent_default();
                            scroll_to_section(id);
                        });
                        html! {
                            <a
                                href={link_target(id)}
                                class={classes!("nav-link", (active.as_str() == id).then(|| "active"))}
                                {onclick}
                            >
                                {*label}
                            </a>
                        }
                    }) }
                    <button class="btn-signup" onclick={on_signup.clone()}>{"Sign Up"}</button>
                </div>
            </div>
        </nav>
    }
}
