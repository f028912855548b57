use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement, MouseEvent};

/// Gap kept between the pointer and the tooltip's near corner.
pub const POINTER_OFFSET: f64 = 15.0;

const TOOLTIP_ID: &str = "tooltip";

/// Viewport metrics sampled when the tooltip is (re)positioned.
pub struct Viewport {
    pub width: f64,
    pub height: f64,
    pub scroll_x: f64,
    pub scroll_y: f64,
}

/// Page coordinates for the tooltip's top-left corner. Each axis flips to
/// the far side of the pointer independently when its near side would
/// overflow the scrolled viewport edge. The two decisions are independent,
/// so a tooltip pinched into a corner can still clip one edge — known
/// limitation, kept as-is.
pub fn placement(page_x: f64, page_y: f64, width: f64, height: f64, viewport: &Viewport) -> (f64, f64) {
    let mut x = page_x + POINTER_OFFSET;
    let mut y = page_y + POINTER_OFFSET;

    if x + width > viewport.width + viewport.scroll_x {
        x = page_x - width - POINTER_OFFSET;
    }
    if y + height > viewport.height + viewport.scroll_y {
        y = page_y - height - POINTER_OFFSET;
    }

    (x, y)
}

/// Binds the shared tooltip surface to every `[data-tooltip]` target.
/// Listeners live for the page lifetime.
pub fn init(document: &Document) {
    let tooltip = match surface(document) {
        Some(tooltip) => tooltip,
        None => {
            log::debug!("tooltip: no #{} element in the page", TOOLTIP_ID);
            return;
        }
    };

    let targets = match document.query_selector_all("[data-tooltip]") {
        Ok(targets) => targets,
        Err(_) => return,
    };
    for i in 0..targets.length() {
        if let Some(target) = targets.item(i).and_then(|node| node.dyn_into::<HtmlElement>().ok()) {
            attach(&target, &tooltip);
        }
    }
}

/// Hides the shared tooltip; its stale content is invisible until the next
/// show overwrites it.
pub fn hide(document: &Document) {
    if let Some(tooltip) = document.get_element_by_id(TOOLTIP_ID) {
        let _ = tooltip.class_list().remove_1("visible");
    }
}

fn surface(document: &Document) -> Option<HtmlElement> {
    document
        .get_element_by_id(TOOLTIP_ID)
        .and_then(|element| element.dyn_into::<HtmlElement>().ok())
}

fn attach(target: &HtmlElement, tooltip: &HtmlElement) {
    let enter = {
        let target = target.clone();
        let tooltip = tooltip.clone();
        Closure::wrap(Box::new(move |event: MouseEvent| {
            let text = match target.get_attribute("data-tooltip") {
                Some(text) if !text.is_empty() => text,
                _ => return,
            };
            tooltip.set_text_content(Some(&text));
            let _ = tooltip.class_list().add_1("visible");
            position(&event, &tooltip);
        }) as Box<dyn FnMut(MouseEvent)>)
    };
    let _ = target.add_event_listener_with_callback("mouseenter", enter.as_ref().unchecked_ref());
    enter.forget();

    let moved = {
        let tooltip = tooltip.clone();
        Closure::wrap(Box::new(move |event: MouseEvent| {
            if tooltip.class_list().contains("visible") {
                position(&event, &tooltip);
            }
        }) as Box<dyn FnMut(MouseEvent)>)
    };
    let _ = target.add_event_listener_with_callback("mousemove", moved.as_ref().unchecked_ref());
    moved.forget();

    let leave = {
        let tooltip = tooltip.clone();
        Closure::wrap(Box::new(move |_: MouseEvent| {
            let _ = tooltip.class_list().remove_1("visible");
        }) as Box<dyn FnMut(MouseEvent)>)
    };
    let _ = target.add_event_listener_with_callback("mouseleave", leave.as_ref().unchecked_ref());
    leave.forget();
}

fn position(event: &MouseEvent, tooltip: &HtmlElement) {
    let window = match web_sys::window() {
        Some(window) => window,
        None => return,
    };

    // The rendered size depends on the current content, so it is read live.
    let rect = tooltip.get_bounding_client_rect();
    let viewport = Viewport {
        width: window.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(0.0),
        height: window.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(0.0),
        scroll_x: window.page_x_offset().unwrap_or(0.0),
        scroll_y: window.page_y_offset().unwrap_or(0.0),
    };

    let (x, y) = placement(
        event.page_x() as f64,
        event.page_y() as f64,
        rect.width(),
        rect.height(),
        &viewport,
    );
    let style = tooltip.style();
    let _ = style.set_property("left", &format!("{}px", x));
    let _ = style.set_property("top", &format!("{}px", y));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn viewport() -> Viewport {
        Viewport { width: 1280.0, height: 720.0, scroll_x: 0.0, scroll_y: 0.0 }
    }

    #[test]
    fn sits_below_right_of_pointer_when_it_fits() {
        let (x, y) = placement(100.0, 200.0, 150.0, 40.0, &viewport());
        assert_eq!((x, y), (115.0, 215.0));
    }

    #[test]
    fn flips_left_when_right_edge_would_overflow() {
        let (x, y) = placement(1200.0, 200.0, 150.0, 40.0, &viewport());
        assert_eq!(x, 1200.0 - 150.0 - POINTER_OFFSET);
        assert_eq!(y, 215.0);
    }

    #[test]
    fn flips_up_when_bottom_edge_would_overflow() {
        let (x, y) = placement(100.0, 700.0, 150.0, 40.0, &viewport());
        assert_eq!(x, 115.0);
        assert_eq!(y, 700.0 - 40.0 - POINTER_OFFSET);
    }

    #[test]
    fn axes_flip_independently_in_a_corner() {
        let (x, y) = placement(1270.0, 715.0, 150.0, 40.0, &viewport());
        assert_eq!(x, 1270.0 - 150.0 - POINTER_OFFSET);
        assert_eq!(y, 715.0 - 40.0 - POINTER_OFFSET);
    }

    #[test]
    fn horizontal_flip_threshold_is_exact() {
        // x + 15 + width == viewport right edge: still fits, no flip.
        let (x, _) = placement(1115.0, 100.0, 150.0, 40.0, &viewport());
        assert_eq!(x, 1130.0);
        // One pixel further and the right edge overflows.
        let (x, _) = placement(1116.0, 100.0, 150.0, 40.0, &viewport());
        assert_eq!(x, 1116.0 - 150.0 - POINTER_OFFSET);
    }

    #[test]
    fn scrolled_viewport_moves_the_flip_edges() {
        let scrolled = Viewport { width: 1280.0, height: 720.0, scroll_x: 400.0, scroll_y: 1000.0 };
        // Would overflow an unscrolled viewport, but fits the scrolled one.
        let (x, y) = placement(1400.0, 1500.0, 150.0, 40.0, &scrolled);
        assert_eq!((x, y), (1415.0, 1515.0));
    }
}
