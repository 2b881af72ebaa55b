use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::{Array, Reflect};
use web_sys::{
    Element, EventTarget, IntersectionObserver, IntersectionObserverEntry,
    IntersectionObserverInit,
};

/// A registered handler. Dropping it (or calling `cancel`) unregisters it.
pub struct Subscription {
    teardown: Option<Box<dyn FnOnce()>>,
}

impl Subscription {
    pub fn new(teardown: impl FnOnce() + 'static) -> Self {
        Self {
            teardown: Some(Box::new(teardown)),
        }
    }

    pub fn cancel(mut self) {
        self.release();
    }

    fn release(&mut self) {
        if let Some(teardown) = self.teardown.take() {
            teardown();
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.release();
    }
}

impl std::fmt::Debug for Subscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscription")
            .field("active", &self.teardown.is_some())
            .finish()
    }
}

/// Attach `handler` to `event` on `target` until the subscription is dropped.
pub fn listen(
    target: &EventTarget,
    event: &'static str,
    handler: impl FnMut() + 'static,
) -> Result<Subscription, JsValue> {
    let callback = Closure::wrap(Box::new(handler) as Box<dyn FnMut()>);
    target.add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())?;

    let target = target.clone();
    Ok(Subscription::new(move || {
        if let Err(e) =
            target.remove_event_listener_with_callback(event, callback.as_ref().unchecked_ref())
        {
            log::warn!("Failed to remove {} listener: {:?}", event, e);
        }
    }))
}

/// Watch `element` and report every intersection change to `on_change`.
pub fn observe_intersection(
    element: &Element,
    threshold: f64,
    root_margin: &str,
    mut on_change: impl FnMut(bool) + 'static,
) -> Result<Subscription, JsValue> {
    let callback = Closure::wrap(Box::new(move |entries: Array, _observer: IntersectionObserver| {
        for entry in entries.iter() {
            let entry: IntersectionObserverEntry = entry.unchecked_into();
            on_change(entry.is_intersecting());
        }
    }) as Box<dyn FnMut(Array, IntersectionObserver)>);

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(threshold));
    options.set_root_margin(root_margin);

    let observer =
        IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;
    observer.observe(element);

    Ok(Subscription::new(move || {
        observer.disconnect();
        drop(callback);
    }))
}

/// Whether `<img loading>` is understood by this browser.
pub fn supports_native_lazy_loading() -> bool {
    let Some(window) = web_sys::window() else {
        return false;
    };
    Reflect::get(&window, &JsValue::from_str("HTMLImageElement"))
        .and_then(|class| Reflect::get(&class, &JsValue::from_str("prototype")))
        .and_then(|prototype| Reflect::has(&prototype, &JsValue::from_str("loading")))
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    #[test]
    fn test_subscription_runs_teardown_once_on_cancel() {
        let calls = Rc::new(Cell::new(0));
        let counter = Rc::clone(&calls);
        let subscription = Subscription::new(move || counter.set(counter.get() + 1));
        subscription.cancel();
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn test_subscription_runs_teardown_on_drop() {
        let calls = Rc::new(Cell::new(0));
        {
            let counter = Rc::clone(&calls);
            let _subscription = Subscription::new(move || counter.set(counter.get() + 1));
        }
        assert_eq!(calls.get(), 1);
    }
}
