use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement, Window};

pub const CONTENT_RATE: f64 = 0.3;
pub const VISUAL_RATE: f64 = 0.2;

/// One parallax update: vertical offsets for the hero layers and the
/// content opacity, all derived from the scroll distance.
pub struct ParallaxFrame {
    pub content_offset: f64,
    pub content_opacity: f64,
    pub visual_offset: f64,
}

/// `None` once the hero is scrolled past one viewport height; callers stop
/// writing styles there, leaving the last applied transform in place.
pub fn frame(scroll_y: f64, viewport_height: f64) -> Option<ParallaxFrame> {
    if viewport_height <= 0.0 || scroll_y >= viewport_height {
        return None;
    }
    Some(ParallaxFrame {
        content_offset: scroll_y * CONTENT_RATE,
        content_opacity: 1.0 - scroll_y / viewport_height,
        visual_offset: scroll_y * VISUAL_RATE,
    })
}

/// Registers the hero parallax listener. Deliberately undebounced: the
/// effect tracks the scroll position continuously.
pub fn init(window: &Window, document: &Document) {
    let content = query_hero_part(document, ".hero-content");
    let visual = query_hero_part(document, ".hero-visual");
    if content.is_none() && visual.is_none() {
        log::debug!("parallax: no hero layers in the page");
        return;
    }

    let callback = Closure::wrap(Box::new({
        let window = window.clone();
        move || {
            let scroll_y = window.page_y_offset().unwrap_or(0.0);
            let viewport_height = window.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
            let parallax = match frame(scroll_y, viewport_height) {
                Some(parallax) => parallax,
                None => return,
            };
            if let Some(content) = &content {
                let style = content.style();
                let _ = style.set_property("transform", &format!("translateY({}px)", parallax.content_offset));
                let _ = style.set_property("opacity", &parallax.content_opacity.to_string());
            }
            if let Some(visual) = &visual {
                let _ = visual
                    .style()
                    .set_property("transform", &format!("translateY({}px)", parallax.visual_offset));
            }
        }
    }) as Box<dyn FnMut()>);
    let _ = window.add_event_listener_with_callback("scroll", callback.as_ref().unchecked_ref());
    callback.forget();
}

fn query_hero_part(document: &Document, selector: &str) -> Option<HtmlElement> {
    document
        .query_selector(selector)
        .ok()
        .flatten()
        .and_then(|element| element.dyn_into::<HtmlElement>().ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn at_rest_nothing_is_offset() {
        let parallax = frame(0.0, 900.0).unwrap();
        assert_eq!(parallax.content_offset, 0.0);
        assert_eq!(parallax.content_opacity, 1.0);
        assert_eq!(parallax.visual_offset, 0.0);
    }

    #[test]
    fn layers_move_at_their_own_rates() {
        let parallax = frame(100.0, 900.0).unwrap();
        assert_eq!(parallax.content_offset, 30.0);
        assert_eq!(parallax.visual_offset, 20.0);
    }

    #[test]
    fn content_fades_linearly_over_one_viewport() {
        let parallax = frame(450.0, 900.0).unwrap();
        assert!((parallax.content_opacity - 0.5).abs() < 1e-9);
    }

    #[test]
    fn no_update_at_or_past_one_viewport_height() {
        assert!(frame(900.0, 900.0).is_none());
        assert!(frame(5000.0, 900.0).is_none());
    }

    #[test]
    fn degenerate_viewport_height_disables_the_effect() {
        assert!(frame(10.0, 0.0).is_none());
    }
}
