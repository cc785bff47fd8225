use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement};

/// A page section measured once after mount.
#[derive(Clone, Debug, PartialEq)]
pub struct TrackedSection {
    pub id: String,
    pub top: f64,
    pub height: f64,
}

impl TrackedSection {
    pub fn new(id: impl Into<String>, top: f64, height: f64) -> Self {
        Self {
            id: id.into(),
            top,
            height,
        }
    }
}

/// Returns the id of the last section (in document order) whose
/// threshold-adjusted top has been scrolled past, or `""` when none has.
pub fn active_section(scroll_offset: f64, sections: &[TrackedSection], threshold: f64) -> &str {
    let mut current = "";
    for section in sections {
        if scroll_offset >= section.top - threshold {
            current = &section.id;
        }
    }
    current
}

/// Read-only view over the page's sections, in document order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SectionTracker {
    sections: Vec<TrackedSection>,
    threshold: f64,
}

impl SectionTracker {
    pub fn new(sections: Vec<TrackedSection>, threshold: f64) -> Self {
        Self { sections, threshold }
    }

    /// Measures every `section[id]` in the document.
    pub fn measure(document: &Document, threshold: f64) -> Self {
        let mut sections = Vec::new();
        if let Ok(nodes) = document.query_selector_all("section[id]") {
            for index in 0..nodes.length() {
                let Some(element) = nodes
                    .item(index)
                    .and_then(|node| node.dyn_into::<HtmlElement>().ok())
                else {
                    continue;
                };
                sections.push(TrackedSection::new(
                    element.id(),
                    f64::from(element.offset_top()),
                    f64::from(element.client_height()),
                ));
            }
        }
        log::debug!("Measured {} sections", sections.len());
        Self::new(sections, threshold)
    }

    pub fn sections(&self) -> &[TrackedSection] {
        &self.sections
    }

    pub fn update(&self, scroll_offset: f64) -> &str {
        active_section(scroll_offset, &self.sections, self.threshold)
    }
}

/// The `href` a nav link must carry to be highlighted for `section_id`.
pub fn link_target(section_id: &str) -> String {
    format!("#{}", section_id)
}
