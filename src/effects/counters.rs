use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, HtmlElement, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

/// The whole counter group starts once half of an observed counter shows.
pub const GROUP_VISIBILITY_THRESHOLD: f64 = 0.5;

const DURATION_MS: f64 = 2000.0;
const FRAME_MS: f64 = 16.0;

/// Frame-paced count-up from zero. The increment assumes ~16ms frames, so
/// real elapsed time can exceed 2000ms under load.
pub struct CounterAnimation {
    current: f64,
    step: f64,
    target: f64,
}

impl CounterAnimation {
    pub fn new(target: f64) -> Self {
        Self {
            current: 0.0,
            step: target / (DURATION_MS / FRAME_MS),
            target,
        }
    }

    /// Advances one frame and returns the value to display plus whether
    /// the terminal value was reached. The terminal frame snaps to the
    /// exact target.
    pub fn tick(&mut self) -> (f64, bool) {
        self.current += self.step;
        if self.current < self.target {
            (self.current.floor(), false)
        } else {
            self.current = self.target;
            (self.target, true)
        }
    }
}

/// Counters labelled as uptime render as percentages, everything else as
/// an open-ended tally.
pub fn suffix(label: &str) -> &'static str {
    if label.contains("Uptime") {
        "%"
    } else {
        "+"
    }
}

pub fn render(value: f64, suffix: &str) -> String {
    format!("{}{}", value, suffix)
}

/// Flips the group guard on the first intersecting trigger; later triggers
/// report `false` so the animation plays at most once per page lifetime.
pub fn should_start(animated: &Cell<bool>, any_intersecting: bool) -> bool {
    if any_intersecting && !animated.get() {
        animated.set(true);
        true
    } else {
        false
    }
}

pub fn init(document: &Document) {
    let nodes = match document.query_selector_all(".counter") {
        Ok(nodes) => nodes,
        Err(_) => return,
    };
    let mut counters = Vec::new();
    for i in 0..nodes.length() {
        if let Some(counter) = nodes.item(i).and_then(|node| node.dyn_into::<HtmlElement>().ok()) {
            counters.push(counter);
        }
    }
    if counters.is_empty() {
        return;
    }

    let animated = Rc::new(Cell::new(false));
    let callback = Closure::wrap(Box::new({
        let counters = counters.clone();
        move |entries: Vec<IntersectionObserverEntry>, _observer: IntersectionObserver| {
            let any_intersecting = entries.iter().any(|entry| entry.is_intersecting());
            if should_start(&animated, any_intersecting) {
                for counter in &counters {
                    animate_counter(counter);
                }
            }
        }
    }) as Box<dyn FnMut(Vec<IntersectionObserverEntry>, IntersectionObserver)>);

    let mut options = IntersectionObserverInit::new();
    options.threshold(&JsValue::from(GROUP_VISIBILITY_THRESHOLD));

    let observer = match IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options) {
        Ok(observer) => observer,
        Err(_) => return,
    };
    callback.forget();

    for counter in &counters {
        observer.observe(counter);
    }
}

fn animate_counter(element: &HtmlElement) {
    let target = match element.get_attribute("data-target").and_then(|raw| raw.parse::<f64>().ok()) {
        Some(target) => target,
        None => {
            log::debug!("counter without a usable data-target, skipping");
            return;
        }
    };
    let label = element
        .next_element_sibling()
        .and_then(|sibling| sibling.text_content())
        .unwrap_or_default();
    let suffix = suffix(&label);

    let mut animation = CounterAnimation::new(target);
    let element = element.clone();

    // Self-rescheduling frame loop; the closure releases itself once the
    // target is reached.
    let handle: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let scheduler = handle.clone();
    *handle.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        let (value, done) = animation.tick();
        element.set_text_content(Some(&render(value, suffix)));
        if !done {
            request_frame(&scheduler);
        } else {
            let _ = scheduler.borrow_mut().take();
        }
    }) as Box<dyn FnMut()>));
    request_frame(&handle);
}

fn request_frame(handle: &Rc<RefCell<Option<Closure<dyn FnMut()>>>>) {
    let window = match web_sys::window() {
        Some(window) => window,
        None => return,
    };
    if let Some(closure) = handle.borrow().as_ref() {
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn displayed_value_is_non_decreasing_and_ends_exactly_on_target() {
        let mut animation = CounterAnimation::new(100.0);
        let mut previous = -1.0;
        let mut frames = 0;
        loop {
            let (value, done) = animation.tick();
            assert!(value >= previous);
            previous = value;
            frames += 1;
            assert!(frames <= 200, "animation never terminated");
            if done {
                assert_eq!(value, 100.0);
                break;
            }
        }
        // target / (2000 / 16) steps of the full value
        assert!((120..=130).contains(&frames));
    }

    #[test]
    fn zero_target_finishes_on_the_first_frame() {
        let mut animation = CounterAnimation::new(0.0);
        assert_eq!(animation.tick(), (0.0, true));
    }

    #[test]
    fn intermediate_frames_floor_the_running_value() {
        let mut animation = CounterAnimation::new(100.0);
        let (value, done) = animation.tick();
        assert!(!done);
        assert_eq!(value, 0.0); // 0.8 floors to 0
    }

    #[test]
    fn uptime_labels_render_percent_everything_else_a_plus() {
        assert_eq!(suffix("Uptime Guarantee"), "%");
        assert_eq!(suffix("Projects Delivered"), "+");
        assert_eq!(suffix(""), "+");
    }

    #[test]
    fn render_concatenates_value_and_suffix() {
        assert_eq!(render(41.0, "+"), "41+");
        assert_eq!(render(99.0, "%"), "99%");
    }

    #[test]
    fn group_animation_starts_at_most_once() {
        let animated = Cell::new(false);
        assert!(!should_start(&animated, false));
        assert!(should_start(&animated, true));
        // Repeated observer triggers are ignored from here on.
        assert!(!should_start(&animated, true));
        assert!(!should_start(&animated, true));
    }
}
