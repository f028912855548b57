use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

/// Share of an element that must be visible before it reveals.
pub const VISIBILITY_THRESHOLD: f64 = 0.15;

/// Elements have to cross 50px above the true viewport bottom to count.
pub const ROOT_MARGIN: &str = "0px 0px -50px 0px";

/// Observes every `.scroll-reveal` element and marks it `visible` the first
/// time it intersects. The class is never removed and the elements are
/// never un-observed; both subscriptions last the page lifetime.
pub fn init(document: &Document) {
    let targets = match document.query_selector_all(".scroll-reveal") {
        Ok(targets) => targets,
        Err(_) => return,
    };
    if targets.length() == 0 {
        return;
    }

    let callback = Closure::wrap(Box::new(
        move |entries: Vec<IntersectionObserverEntry>, _observer: IntersectionObserver| {
            for entry in entries {
                if entry.is_intersecting() {
                    let _ = entry.target().class_list().add_1("visible");
                }
            }
        },
    ) as Box<dyn FnMut(Vec<IntersectionObserverEntry>, IntersectionObserver)>);

    let mut options = IntersectionObserverInit::new();
    options.threshold(&JsValue::from(VISIBILITY_THRESHOLD));
    options.root_margin(ROOT_MARGIN);

    let observer = match IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options) {
        Ok(observer) => observer,
        Err(_) => return,
    };
    callback.forget();

    for i in 0..targets.length() {
        if let Some(element) = targets.item(i).and_then(|node| node.dyn_into::<Element>().ok()) {
            observer.observe(&element);
        }
    }
}
