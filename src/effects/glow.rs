use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement, MouseEvent};

/// Pointer position relative to the card's own top-left corner.
pub fn relative_position(client_x: f64, client_y: f64, rect_left: f64, rect_top: f64) -> (f64, f64) {
    (client_x - rect_left, client_y - rect_top)
}

/// Radial highlight centered under the pointer, fixed color and fade radius.
pub fn glow_background(x: f64, y: f64) -> String {
    format!(
        "radial-gradient(circle at {}px {}px, rgba(99, 102, 241, 0.2) 0%, transparent 50%)",
        x, y
    )
}

/// Follows the pointer across each `.project-card` with its glow layer.
/// Cards without a glow child are skipped.
pub fn init(document: &Document) {
    let cards = match document.query_selector_all(".project-card") {
        Ok(cards) => cards,
        Err(_) => return,
    };
    for i in 0..cards.length() {
        let card = match cards.item(i).and_then(|node| node.dyn_into::<HtmlElement>().ok()) {
            Some(card) => card,
            None => continue,
        };
        let glow = card
            .query_selector(".project-bg-glow")
            .ok()
            .flatten()
            .and_then(|element| element.dyn_into::<HtmlElement>().ok());
        let glow = match glow {
            Some(glow) => glow,
            None => continue,
        };

        let callback = {
            let card = card.clone();
            Closure::wrap(Box::new(move |event: MouseEvent| {
                let rect = card.get_bounding_client_rect();
                let (x, y) = relative_position(
                    event.client_x() as f64,
                    event.client_y() as f64,
                    rect.left(),
                    rect.top(),
                );
                let _ = glow.style().set_property("background", &glow_background(x, y));
            }) as Box<dyn FnMut(MouseEvent)>)
        };
        let _ = card.add_event_listener_with_callback("mousemove", callback.as_ref().unchecked_ref());
        callback.forget();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pointer_position_is_card_relative() {
        assert_eq!(relative_position(340.0, 510.0, 300.0, 480.0), (40.0, 30.0));
    }

    #[test]
    fn gradient_centers_on_the_relative_position() {
        let background = glow_background(40.0, 30.0);
        assert!(background.starts_with("radial-gradient(circle at 40px 30px"));
        assert!(background.contains("rgba(99, 102, 241, 0.2) 0%"));
        assert!(background.ends_with("transparent 50%)"));
    }
}
