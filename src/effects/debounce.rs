use std::cell::RefCell;
use std::rc::Rc;
use gloo_timers::callback::Timeout;

/// Quiet window for the scroll-driven nav updates.
pub const SCROLL_QUIET_MS: u32 = 10;

/// Trailing-edge debounce: every call replaces the outstanding timeout
/// (dropping a gloo `Timeout` cancels it), so `f` runs once per quiet
/// window no matter how large the event burst was.
pub fn trailing<F: Fn() + 'static>(delay_ms: u32, f: F) -> impl Fn() {
    let pending: Rc<RefCell<Option<Timeout>>> = Rc::new(RefCell::new(None));
    let f = Rc::new(f);
    move || {
        let f = f.clone();
        *pending.borrow_mut() = Some(Timeout::new(delay_ms, move || f()));
    }
}
