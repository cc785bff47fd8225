use gloo_events::EventListener;
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement, MouseEvent};
use yew::prelude::*;

use crate::config;

pub fn glow_size(hovering: bool) -> f64 {
    if hovering {
        config::GLOW_HOVER_SIZE_PX
    } else {
        config::GLOW_SIZE_PX
    }
}

fn over_interactive(target: Option<web_sys::EventTarget>) -> bool {
    target
        .and_then(|t| t.dyn_into::<Element>().ok())
        .and_then(|el| el.closest(config::INTERACTIVE_SELECTOR).ok().flatten())
        .is_some()
}

fn set_size(glow: &HtmlElement, px: f64) {
    let style = glow.style();
    let value = format!("{}px", px);
    let _ = style.set_property("width", &value);
    let _ = style.set_property("height", &value);
}

/// Soft glow that trails the pointer and grows over links, buttons, cards and inputs.
#[function_component(CursorGlow)]
pub fn cursor_glow() -> Html {
    let glow_ref = use_node_ref();

    {
        let glow_ref = glow_ref.clone();
        use_effect_with_deps(
            move |_| {
                let listeners = web_sys::window()
                    .and_then(|w| w.document())
                    .zip(glow_ref.cast::<HtmlElement>())
                    .map(|(document, glow)| {
                        let follow = {
                            let glow = glow.clone();
                            EventListener::new(&document, "mousemove", move |event| {
                                let Some(event) = event.dyn_ref::<MouseEvent>() else {
                                    return;
                                };
                                let style = glow.style();
                                let _ = style.set_property("left", &format!("{}px", event.client_x()));
                                let _ = style.set_property("top", &format!("{}px", event.client_y()));
                                let _ = style.set_property("display", "block");
                            })
                        };
                        let grow = {
                            let glow = glow.clone();
                            EventListener::new(&document, "mouseover", move |event| {
                                set_size(&glow, glow_size(over_interactive(event.target())));
                            })
                        };
                        let shrink = EventListener::new(&document, "mouseout", move |event| {
                            let related = event
                                .dyn_ref::<MouseEvent>()
                                .and_then(|e| e.related_target());
                            set_size(&glow, glow_size(over_interactive(related)));
                        });
                        [follow, grow, shrink]
                    });
                if listeners.is_none() {
                    log::debug!("Cursor glow disabled: no document");
                }
                move || drop(listeners)
            },
            (),
        );
    }

    html! {
        <div class="cursor-glow" ref={glow_ref}>
            <style>
                {r#"
                    .cursor-glow {
                        position: fixed;
                        width: 20px;
                        height: 20px;
                        border-radius: 50%;
                        background: radial-gradient(circle, rgba(139, 92, 246, 0.5), transparent);
                        pointer-events: none;
                        z-index: 9999;
                        transform: translate(-50%, -50%);
                        transition: width 0.3s ease, height 0.3s ease;
                        display: none;
                    }
                "#}
            </style>
        </div>
    }
}
