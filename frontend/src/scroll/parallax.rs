use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement};

use crate::config;

/// Translation and rotation for one decorative layer.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LayerTransform {
    pub translate_y: f64,
    pub rotate_deg: f64,
}

impl LayerTransform {
    pub fn css(&self) -> String {
        format!("translateY({}px) rotate({}deg)", self.translate_y, self.rotate_deg)
    }
}

/// Everything the scroll position drives on one frame.
#[derive(Clone, Debug, PartialEq)]
pub struct ParallaxFrame {
    pub background_y: f64,
    pub layers: Vec<LayerTransform>,
    pub progress: f64,
}

impl ParallaxFrame {
    pub fn compute(scroll_offset: f64, layer_count: usize, scrollable_height: f64) -> Self {
        let rotate_deg = scroll_offset * config::LAYER_ROTATION;
        let layers = (0..layer_count)
            .map(|index| LayerTransform {
                translate_y: scroll_offset * layer_speed(index),
                rotate_deg,
            })
            .collect();

        Self {
            background_y: scroll_offset * config::BACKGROUND_SPEED,
            layers,
            progress: progress_ratio(scroll_offset, scrollable_height),
        }
    }

    pub fn background_css(&self) -> String {
        format!("translateY({}px)", self.background_y)
    }

    pub fn progress_css(&self) -> String {
        format!("scaleX({})", self.progress)
    }
}

/// Speed coefficient of the decorative layer at `index`.
pub fn layer_speed(index: usize) -> f64 {
    (index + 1) as f64 * config::LAYER_SPEED_STEP
}

/// Fraction of the document scrolled, in `[0, 1]`. A page that fits in the
/// viewport has nothing to scroll and reports 0.
pub fn progress_ratio(scroll_offset: f64, scrollable_height: f64) -> f64 {
    if scrollable_height <= 0.0 || !scrollable_height.is_finite() {
        return 0.0;
    }
    (scroll_offset / scrollable_height).clamp(0.0, 1.0)
}

/// An element whose `transform` is rewritten only when the value changes.
struct StyledTarget {
    element: HtmlElement,
    last: Option<String>,
}

impl StyledTarget {
    fn new(element: HtmlElement) -> Self {
        Self { element, last: None }
    }

    fn set_transform(&mut self, value: String) {
        if self.last.as_deref() == Some(value.as_str()) {
            return;
        }
        let _ = self.element.style().set_property("transform", &value);
        self.last = Some(value);
    }
}

/// Writes `ParallaxFrame`s to the page. Any of the targets may be missing.
pub struct ParallaxUpdater {
    background: Option<StyledTarget>,
    layers: Vec<StyledTarget>,
    progress_bar: Option<StyledTarget>,
}

impl ParallaxUpdater {
    pub fn new(
        background: Option<HtmlElement>,
        layers: Vec<HtmlElement>,
        progress_bar: Option<HtmlElement>,
    ) -> Self {
        Self {
            background: background.map(StyledTarget::new),
            layers: layers.into_iter().map(StyledTarget::new).collect(),
            progress_bar: progress_bar.map(StyledTarget::new),
        }
    }

    /// Finds `.hero .hero-bg` and every `.orbital-line`.
    pub fn from_document(document: &Document, progress_bar: Option<HtmlElement>) -> Self {
        let background = document
            .query_selector(".hero .hero-bg")
            .ok()
            .flatten()
            .and_then(|el| el.dyn_into::<HtmlElement>().ok());

        let mut layers = Vec::new();
        if let Ok(nodes) = document.query_selector_all(".orbital-line") {
            for index in 0..nodes.length() {
                if let Some(el) = nodes.item(index).and_then(|n| n.dyn_into::<HtmlElement>().ok()) {
                    layers.push(el);
                }
            }
        }
        if background.is_none() {
            log::debug!("No hero background found, skipping background parallax");
        }
        Self::new(background, layers, progress_bar)
    }

    pub fn layer_count(&self) -> usize {
        self.layers.len()
    }

    pub fn apply(&mut self, frame: &ParallaxFrame) {
        if let Some(background) = self.background.as_mut() {
            background.set_transform(frame.background_css());
        }
        for (target, transform) in self.layers.iter_mut().zip(&frame.layers) {
            target.set_transform(transform.css());
        }
        if let Some(bar) = self.progress_bar.as_mut() {
            bar.set_transform(frame.progress_css());
        }
    }

    pub fn update(&mut self, scroll_offset: f64, scrollable_height: f64) {
        let frame = ParallaxFrame::compute(scroll_offset, self.layer_count(), scrollable_height);
        self.apply(&frame);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn background_moves_at_half_speed() {
        let frame = ParallaxFrame::compute(400.0, 0, 1_000.0);
        assert_eq!(frame.background_y, 200.0);
        assert_eq!(frame.background_css(), "translateY(200px)");
    }

    #[test]
    fn layers_scale_translation_but_share_rotation() {
        let frame = ParallaxFrame::compute(100.0, 3, 1_000.0);
        let translations: Vec<f64> = frame.layers.iter().map(|l| l.translate_y).collect();
        assert!((translations[0] - 20.0).abs() < 1e-9);
        assert!((translations[1] - 40.0).abs() < 1e-9);
        assert!((translations[2] - 60.0).abs() < 1e-9);
        for layer in &frame.layers {
            assert!((layer.rotate_deg - 10.0).abs() < 1e-9);
        }
    }

    #[test]
    fn layer_css_format() {
        let layer = LayerTransform { translate_y: 40.0, rotate_deg: 20.0 };
        assert_eq!(layer.css(), "translateY(40px) rotate(20deg)");
    }

    #[test]
    fn progress_boundaries() {
        assert_eq!(progress_ratio(0.0, 1_000.0), 0.0);
        assert_eq!(progress_ratio(500.0, 1_000.0), 0.5);
        assert_eq!(progress_ratio(1_000.0, 1_000.0), 1.0);
    }

    #[test]
    fn progress_is_zero_when_nothing_scrolls() {
        assert_eq!(progress_ratio(0.0, 0.0), 0.0);
        assert_eq!(progress_ratio(120.0, 0.0), 0.0);
        assert_eq!(progress_ratio(120.0, -10.0), 0.0);
    }

    #[test]
    fn progress_clamps_overscroll() {
        assert_eq!(progress_ratio(-40.0, 1_000.0), 0.0);
        assert_eq!(progress_ratio(1_080.0, 1_000.0), 1.0);
        assert_eq!(ParallaxFrame::compute(250.0, 0, 1_000.0).progress_css(), "scaleX(0.25)");
    }

    proptest! {
        #[test]
        fn compute_is_pure(offset in -1_000.0f64..20_000.0, layers in 0usize..8, height in 0.0f64..20_000.0) {
            let first = ParallaxFrame::compute(offset, layers, height);
            let second = ParallaxFrame::compute(offset, layers, height);
            prop_assert_eq!(first, second);
        }

        #[test]
        fn progress_stays_in_unit_range(offset in -1_000.0f64..20_000.0, height in -10.0f64..20_000.0) {
            let ratio = progress_ratio(offset, height);
            prop_assert!((0.0..=1.0).contains(&ratio));
        }
    }
}
