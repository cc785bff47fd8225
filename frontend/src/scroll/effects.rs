use gloo_events::EventListener;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement, KeyboardEvent};
use yew::Callback;

use crate::config;
use crate::scroll::dispatch::{AnimationFrameScheduler, ScrollDispatcher};
use crate::scroll::geometry::DomViewport;
use crate::scroll::parallax::ParallaxUpdater;
use crate::scroll::reveal::RevealObserver;
use crate::scroll::sections::SectionTracker;

/// Everything the landing page wires to scrolling and the keyboard. Dropping
/// it detaches the listeners, disconnects the observer and cancels a pending
/// scroll frame.
pub struct PageEffects {
    _dispatcher: ScrollDispatcher<AnimationFrameScheduler>,
    _reveal: Option<RevealObserver>,
    _listeners: Vec<EventListener>,
}

impl PageEffects {
    /// `on_active` receives the id of the current section (or `""`) every frame.
    pub fn install(progress_bar: Option<HtmlElement>, on_active: Callback<String>) -> Option<Self> {
        let viewport = DomViewport::current()?;
        let document = viewport.window().document()?;

        let tracker = SectionTracker::measure(&document, config::NAV_THRESHOLD_PX);
        let mut parallax = ParallaxUpdater::from_document(&document, progress_bar);
        log::debug!(
            "Scroll effects: {} sections, {} parallax layers",
            tracker.sections().len(),
            parallax.layer_count()
        );

        let dispatcher = {
            let viewport = viewport.clone();
            ScrollDispatcher::new(AnimationFrameScheduler::default(), move || viewport.scroll_offset())
        };
        dispatcher.subscribe(move |state| on_active.emit(tracker.update(state.offset).to_string()));
        {
            let viewport = viewport.clone();
            dispatcher.subscribe(move |state| {
                parallax.update(state.offset, viewport.scrollable_height());
            });
        }

        let on_scroll = {
            let dispatcher = dispatcher.clone();
            EventListener::new(viewport.window(), "scroll", move |_| dispatcher.notify())
        };
        dispatcher.run_now();

        let reveal = match RevealObserver::attach(&document) {
            Ok(reveal) => {
                log::debug!("{} elements waiting to reveal", reveal.pending());
                Some(reveal)
            }
            Err(err) => {
                log::warn!("Entry animations disabled: {:?}", err);
                None
            }
        };

        log::info!("Page effects installed");
        Some(Self {
            _dispatcher: dispatcher,
            _reveal: reveal,
            _listeners: vec![on_scroll, escape_blurs_focus(&document)],
        })
    }
}

fn escape_blurs_focus(document: &Document) -> EventListener {
    let target = document.clone();
    EventListener::new(document, "keydown", move |event| {
        let is_escape = event
            .dyn_ref::<KeyboardEvent>()
            .map_or(false, |e| e.key() == "Escape");
        if !is_escape {
            return;
        }
        if let Some(active) = target
            .active_element()
            .and_then(|el| el.dyn_into::<HtmlElement>().ok())
        {
            let _ = active.blur();
        }
    })
}
