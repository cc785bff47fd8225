use web_sys::{Element, Window};

/// Top edge of an element measured from the top edge of the viewport.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewportPosition {
    pub top: f64,
}

/// Viewport-relative box of an element, as reported by `getBoundingClientRect`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ElementBounds {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl ElementBounds {
    /// Translates a viewport point into coordinates local to this box.
    pub fn local_point(&self, client_x: f64, client_y: f64) -> (f64, f64) {
        (client_x - self.left, client_y - self.top)
    }
}

/// Document offset that puts an element `header_offset` pixels below the viewport top.
pub fn scroll_target(position: ViewportPosition, scroll_offset: f64, header_offset: f64) -> f64 {
    position.top + scroll_offset - header_offset
}

/// Scrollable distance of the document; never negative.
pub fn scrollable_height(scroll_height: f64, client_height: f64) -> f64 {
    (scroll_height - client_height).max(0.0)
}

/// Live reads against the browser window. Nothing here is cached: layout may
/// have changed since the previous call.
#[derive(Clone)]
pub struct DomViewport {
    window: Window,
}

impl DomViewport {
    pub fn new(window: Window) -> Self {
        Self { window }
    }

    pub fn current() -> Option<Self> {
        web_sys::window().map(Self::new)
    }

    pub fn window(&self) -> &Window {
        &self.window
    }

    pub fn scroll_offset(&self) -> f64 {
        self.window.scroll_y().unwrap_or(0.0)
    }

    pub fn scrollable_height(&self) -> f64 {
        self.window
            .document()
            .and_then(|document| document.document_element())
            .map(|root| {
                scrollable_height(f64::from(root.scroll_height()), f64::from(root.client_height()))
            })
            .unwrap_or(0.0)
    }

    pub fn position(&self, element: &Element) -> ViewportPosition {
        ViewportPosition {
            top: element.get_bounding_client_rect().top(),
        }
    }

    pub fn bounds(&self, element: &Element) -> ElementBounds {
        let rect = element.get_bounding_client_rect();
        ElementBounds {
            left: rect.left(),
            top: rect.top(),
            width: rect.width(),
            height: rect.height(),
        }
    }

    /// Smooth-scrolls so `element` sits `header_offset` pixels below the viewport top.
    pub fn scroll_to_element(&self, element: &Element, header_offset: f64) {
        let top = scroll_target(self.position(element), self.scroll_offset(), header_offset);
        let options = web_sys::ScrollToOptions::new();
        options.set_top(top);
        options.set_behavior(web_sys::ScrollBehavior::Smooth);
        self.window.scroll_to_with_scroll_to_options(&options);
    }
}
