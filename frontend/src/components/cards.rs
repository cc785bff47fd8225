use gloo_timers::callback::Timeout;
use web_sys::HtmlElement;
use yew::prelude::*;

use crate::config;
use crate::scroll::geometry::{DomViewport, ElementBounds};

pub const REST_TRANSFORM: &str = "perspective(1000px) rotateX(0) rotateY(0) translateY(0)";

/// 3D tilt toward the pointer, in degrees.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tilt {
    pub rotate_x: f64,
    pub rotate_y: f64,
}

impl Tilt {
    /// `x`/`y` are pointer coordinates local to a `width` by `height` card.
    pub fn from_pointer(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            rotate_x: (y - height / 2.0) / config::TILT_DIVISOR,
            rotate_y: (width / 2.0 - x) / config::TILT_DIVISOR,
        }
    }

    pub fn css(&self) -> String {
        format!(
            "perspective(1000px) rotateX({}deg) rotateY({}deg) translateY(-{}px)",
            self.rotate_x,
            self.rotate_y,
            config::CARD_LIFT_PX
        )
    }
}

/// Square ripple box centred on the click point, large enough to cover the card.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ripple {
    pub size: f64,
    pub left: f64,
    pub top: f64,
}

impl Ripple {
    pub fn at(x: f64, y: f64, bounds: &ElementBounds) -> Self {
        let size = bounds.width.max(bounds.height);
        Self {
            size,
            left: x - size / 2.0,
            top: y - size / 2.0,
        }
    }

    pub fn css(&self) -> String {
        format!(
            "position: absolute; border-radius: 50%; background: rgba(139, 92, 246, 0.5); \
             transform: scale(0); animation: ripple 0.6s ease-out; pointer-events: none; \
             width: {size}px; height: {size}px; left: {left}px; top: {top}px;",
            size = self.size,
            left = self.left,
            top = self.top
        )
    }
}

fn spawn_ripple(card: &HtmlElement, ripple: Ripple) {
    let Some(document) = card.owner_document() else {
        return;
    };
    let Ok(element) = document.create_element("div") else {
        return;
    };
    let _ = element.set_attribute("class", "ripple");
    let _ = element.set_attribute("style", &ripple.css());
    if card.append_child(&element).is_err() {
        return;
    }
    Timeout::new(config::RIPPLE_MS, move || element.remove()).forget();
}

#[derive(Properties, PartialEq)]
pub struct FeatureCardProps {
    pub icon: AttrValue,
    pub title: AttrValue,
    pub description: AttrValue,
}

#[function_component(FeatureCard)]
pub fn feature_card(props: &FeatureCardProps) -> Html {
    let card_ref = use_node_ref();

    let bounds = {
        let card_ref = card_ref.clone();
        move || {
            let card = card_ref.cast::<HtmlElement>()?;
            let viewport = DomViewport::current()?;
            let bounds = viewport.bounds(&card);
            Some((card, bounds))
        }
    };

    let onmousemove = {
        let bounds = bounds.clone();
        Callback::from(move |e: MouseEvent| {
            let Some((card, rect)) = bounds() else { return };
            let (x, y) = rect.local_point(f64::from(e.client_x()), f64::from(e.client_y()));
            let tilt = Tilt::from_pointer(x, y, rect.width, rect.height);
            let _ = card.style().set_property("transform", &tilt.css());
        })
    };

    let onmouseleave = {
        let card_ref = card_ref.clone();
        Callback::from(move |_: MouseEvent| {
            if let Some(card) = card_ref.cast::<HtmlElement>() {
                let _ = card.style().set_property("transform", REST_TRANSFORM);
            }
        })
    };

    let onclick = Callback::from(move |e: MouseEvent| {
        let Some((card, rect)) = bounds() else { return };
        let (x, y) = rect.local_point(f64::from(e.client_x()), f64::from(e.client_y()));
        let _ = card.style().set_property("position", "relative");
        spawn_ripple(&card, Ripple::at(x, y, &rect));
    });

    html! {
        <div class="card" ref={card_ref} {onmousemove} {onmouseleave} {onclick}>
            <div class="card-icon">{ props.icon.clone() }</div>
            <h3 class="card-title">{ props.title.clone() }</h3>
            <p class="card-description">{ props.description.clone() }</p>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn centre_of_card_is_flat() {
        let tilt = Tilt::from_pointer(150.0, 100.0, 300.0, 200.0);
        assert_eq!(tilt, Tilt { rotate_x: 0.0, rotate_y: 0.0 });
    }

    #[test]
    fn corners_tilt_toward_pointer() {
        let top_left = Tilt::from_pointer(0.0, 0.0, 300.0, 200.0);
        assert_eq!(top_left, Tilt { rotate_x: -10.0, rotate_y: 15.0 });

        let bottom_right = Tilt::from_pointer(300.0, 200.0, 300.0, 200.0);
        assert_eq!(bottom_right, Tilt { rotate_x: 10.0, rotate_y: -15.0 });
    }

    #[test]
    fn tilt_css_lifts_card() {
        let tilt = Tilt { rotate_x: 5.0, rotate_y: -2.5 };
        assert_eq!(
            tilt.css(),
            "perspective(1000px) rotateX(5deg) rotateY(-2.5deg) translateY(-10px)"
        );
    }

    #[test]
    fn ripple_is_centred_on_click_and_covers_card() {
        let bounds = ElementBounds { left: 0.0, top: 0.0, width: 300.0, height: 200.0 };
        let ripple = Ripple::at(60.0, 40.0, &bounds);
        assert_eq!(ripple, Ripple { size: 300.0, left: -90.0, top: -110.0 });
    }
}
