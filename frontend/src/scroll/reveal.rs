use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::js_sys::Array;
use web_sys::{
    Document, Element, HtmlElement, IntersectionObserver, IntersectionObserverEntry,
    IntersectionObserverInit,
};

use crate::config;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RevealState {
    Pending,
    Visible,
}

/// Fire-once reveal bookkeeping for a set of element handles.
///
/// Every registered handle starts `Pending` and moves to `Visible` on its first
/// intersecting notification. `Visible` is terminal: later notifications for the
/// same handle, intersecting or not, are ignored.
#[derive(Debug)]
pub struct RevealRegistry<H> {
    entries: Vec<(H, RevealState)>,
}

impl<H> Default for RevealRegistry<H> {
    fn default() -> Self {
        Self { entries: Vec::new() }
    }
}

impl<H: PartialEq> RevealRegistry<H> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns false if the handle was already known.
    pub fn register(&mut self, handle: H) -> bool {
        if self.state(&handle).is_some() {
            return false;
        }
        self.entries.push((handle, RevealState::Pending));
        true
    }

    pub fn state(&self, handle: &H) -> Option<RevealState> {
        self.entries
            .iter()
            .find(|(h, _)| h == handle)
            .map(|(_, state)| *state)
    }

    /// Returns true exactly once per handle: when it first intersects.
    pub fn on_intersect(&mut self, handle: &H, is_intersecting: bool) -> bool {
        if !is_intersecting {
            return false;
        }
        match self.entries.iter_mut().find(|(h, _)| h == handle) {
            Some((_, state @ RevealState::Pending)) => {
                *state = RevealState::Visible;
                true
            }
            _ => false,
        }
    }

    pub fn pending(&self) -> usize {
        self.entries
            .iter()
            .filter(|(_, state)| *state == RevealState::Pending)
            .count()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Hidden starting style applied before an element is observed.
const HIDDEN_STYLE: [(&str, &str); 3] = [
    ("opacity", "0"),
    ("transform", "translateY(30px)"),
    ("transition", "opacity 0.6s ease, transform 0.6s ease"),
];

/// Swaps the inline hidden style for the reveal class so the transition runs
/// and later inline transforms (card tilt) still apply.
fn reveal(element: &Element) {
    let _ = element.class_list().add_1(config::REVEAL_CLASS);
    if let Some(html) = element.dyn_ref::<HtmlElement>() {
        let style = html.style();
        let _ = style.remove_property("opacity");
        let _ = style.remove_property("transform");
    }
}

/// Browser side of the entry animation: one `IntersectionObserver` feeding a
/// `RevealRegistry<Element>`. Disconnects on drop.
pub struct RevealObserver {
    observer: IntersectionObserver,
    registry: Rc<RefCell<RevealRegistry<Element>>>,
    _callback: Closure<dyn FnMut(Array, IntersectionObserver)>,
}

impl RevealObserver {
    pub fn attach(document: &Document) -> Result<Self, JsValue> {
        let registry = Rc::new(RefCell::new(RevealRegistry::new()));

        let callback = {
            let registry = Rc::clone(&registry);
            Closure::wrap(Box::new(move |entries: Array, observer: IntersectionObserver| {
                for entry in entries.iter() {
                    let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                        continue;
                    };
                    let target = entry.target();
                    if registry.borrow_mut().on_intersect(&target, entry.is_intersecting()) {
                        reveal(&target);
                        observer.unobserve(&target);
                    }
                }
            }) as Box<dyn FnMut(Array, IntersectionObserver)>)
        };

        let init = IntersectionObserverInit::new();
        init.set_threshold(&JsValue::from_f64(config::REVEAL_RATIO));
        init.set_root_margin(config::REVEAL_ROOT_MARGIN);
        let observer =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)?;

        let revealer = Self {
            observer,
            registry,
            _callback: callback,
        };

        let nodes = document.query_selector_all(config::REVEAL_SELECTOR)?;
        for index in 0..nodes.length() {
            if let Some(element) = nodes.item(index).and_then(|n| n.dyn_into::<Element>().ok()) {
                revealer.observe(element);
            }
        }
        log::debug!("Reveal observer watching {} elements", revealer.registry.borrow().len());
        Ok(revealer)
    }

    /// Hides the element and starts observing it in the same turn, so it never
    /// paints in its final position first. Elements already known to the
    /// registry, pending or revealed, are left untouched.
    pub fn observe(&self, element: Element) {
        if !self.registry.borrow_mut().register(element.clone()) {
            return;
        }
        if let Some(html) = element.dyn_ref::<HtmlElement>() {
            let style = html.style();
            for (property, value) in HIDDEN_STYLE {
                let _ = style.set_property(property, value);
            }
        }
        self.observer.observe(&element);
    }

    pub fn pending(&self) -> usize {
        self.registry.borrow().pending()
    }
}

impl Drop for RevealObserver {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_intersection_reveals() {
        let mut registry = RevealRegistry::new();
        registry.register("card-1");
        assert_eq!(registry.state(&"card-1"), Some(RevealState::Pending));

        assert!(registry.on_intersect(&"card-1", true));
        assert_eq!(registry.state(&"card-1"), Some(RevealState::Visible));
    }

    #[test]
    fn reveal_fires_at_most_once() {
        let mut registry = RevealRegistry::new();
        registry.register("card-1");

        assert!(registry.on_intersect(&"card-1", true));
        assert!(!registry.on_intersect(&"card-1", true));
        assert!(!registry.on_intersect(&"card-1", false));
        assert!(!registry.on_intersect(&"card-1", true));
        assert_eq!(registry.state(&"card-1"), Some(RevealState::Visible));
    }

    #[test]
    fn non_intersecting_leaves_element_pending() {
        let mut registry = RevealRegistry::new();
        registry.register("hero-text");

        assert!(!registry.on_intersect(&"hero-text", false));
        assert_eq!(registry.state(&"hero-text"), Some(RevealState::Pending));
        assert_eq!(registry.pending(), 1);
    }

    #[test]
    fn unknown_handles_are_ignored() {
        let mut registry: RevealRegistry<&str> = RevealRegistry::new();
        assert!(!registry.on_intersect(&"ghost", true));
        assert!(registry.is_empty());
    }

    #[test]
    fn re_registering_a_visible_element_does_not_reset_it() {
        let mut registry = RevealRegistry::new();
        assert!(registry.register(7));
        registry.on_intersect(&7, true);

        assert!(!registry.register(7));
        assert_eq!(registry.state(&7), Some(RevealState::Visible));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn second_registration_of_a_pending_element_is_rejected() {
        let mut registry = RevealRegistry::new();
        assert!(registry.register("signup"));
        assert!(!registry.register("signup"));

        assert_eq!(registry.len(), 1);
        assert!(registry.on_intersect(&"signup", true));
    }

    #[test]
    fn elements_reveal_independently() {
        let mut registry = RevealRegistry::new();
        for id in ["a", "b", "c"] {
            registry.register(id);
        }

        registry.on_intersect(&"b", true);
        assert_eq!(registry.pending(), 2);
        assert_eq!(registry.state(&"a"), Some(RevealState::Pending));
        assert_eq!(registry.state(&"b"), Some(RevealState::Visible));
    }
}
