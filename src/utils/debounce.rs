use gloo::events::EventListener;
use gloo_timers::callback::Timeout;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys::window;

/// Creates a debounced window-resize listener.
///
/// Resize fires continuously while the window is dragged; re-rendering a
/// chart on every event is wasted work. The callback only runs once
/// `delay_ms` passes with no further resize events.
///
/// The returned `EventListener` must be kept alive for the component's
/// lifetime; dropping it detaches the listener.
pub fn debounced_resize_listener<F>(callback: F, delay_ms: u32) -> EventListener
where
    F: Fn() + 'static,
{
    let pending: Rc<RefCell<Option<Timeout>>> = Rc::new(RefCell::new(None));
    let callback = Rc::new(callback);

    EventListener::new(&window().unwrap(), "resize", move |_| {
        if let Some(handle) = pending.borrow_mut().take() {
            drop(handle);
        }

        let cb = callback.clone();
        let handle = Timeout::new(delay_ms, move || cb());
        *pending.borrow_mut() = Some(handle);
    })
}
