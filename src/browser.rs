//! Thin wrappers over the DOM APIs the navbar needs.
//!
//! Everything that calls into the browser is compiled for wasm32 only; on
//! other targets (tests, SSR) the helpers report that no browser is present.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Event, EventTarget};

use crate::error::{NavError, NavResult};

/// An event listener that is removed when dropped.
pub struct EventListenerGuard {
    target: EventTarget,
    event: &'static str,
    callback: Closure<dyn FnMut(Event)>,
}

impl EventListenerGuard {
    pub fn listen(
        target: &EventTarget,
        event: &'static str,
        handler: impl FnMut(Event) + 'static,
    ) -> NavResult<Self> {
        let callback = Closure::<dyn FnMut(Event)>::new(handler);
        target
            .add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())
            .map_err(NavError::from_js)?;
        tracing::debug!(event, "listener attached");

        Ok(Self {
            target: target.clone(),
            event,
            callback,
        })
    }
}

impl Drop for EventListenerGuard {
    fn drop(&mut self) {
        let function: &js_sys::Function = self.callback.as_ref().unchecked_ref();
        match self.target.remove_event_listener_with_callback(self.event, function) {
            Ok(()) => tracing::debug!(event = self.event, "listener detached"),
            Err(err) => tracing::warn!(event = self.event, error = %NavError::from_js(err), "failed to detach listener"),
        }
    }
}

#[cfg(target_arch = "wasm32")]
pub fn window() -> NavResult<web_sys::Window> {
    web_sys::window().ok_or(NavError::NoBrowser("window"))
}

#[cfg(not(target_arch = "wasm32"))]
pub fn window() -> NavResult<web_sys::Window> {
    Err(NavError::NoBrowser("window"))
}

/// Current `window.innerWidth`, if running in a browser.
pub fn viewport_width() -> Option<f64> {
    window().ok()?.inner_width().ok()?.as_f64()
}

/// A property of `window`, skipping `undefined` and `null`.
pub fn window_global(name: &str) -> Option<JsValue> {
    let window = window().ok()?;
    js_sys::Reflect::get(&window, &JsValue::from_str(name))
        .ok()
        .filter(|value| !value.is_undefined() && !value.is_null())
}

/// True when `target` lies outside `root`.
pub fn is_outside(root: &web_sys::Element, target: Option<EventTarget>) -> bool {
    let node = target.and_then(|t| t.dyn_into::<web_sys::Node>().ok());
    !root.contains(node.as_ref())
}
