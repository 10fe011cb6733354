use leptos::ev::EventDescriptor;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{AddEventListenerOptions, Event};

use crate::domain::logging::LogComponent;
use crate::log_debug;

#[derive(Clone, Debug)]
pub struct EventOptions {
    pub passive: bool,
    pub capture: bool,
    pub once: bool,
}

impl Default for EventOptions {
    fn default() -> Self {
        Self { passive: true, capture: false, once: false }
    }
}

impl EventOptions {
    pub fn run_once() -> Self {
        Self { once: true, ..Self::default() }
    }
}

/// Owns the JS closure of a registered listener
pub struct WindowEventListenerHandle {
    callback: Closure<dyn FnMut(Event)>,
}

impl WindowEventListenerHandle {
    /// Keep the listener alive for the rest of the page's life.
    pub fn forget(self) {
        self.callback.forget();
    }
}

pub fn window_event_listener_with_options<E>(
    event: E,
    options: &EventOptions,
    mut cb: impl FnMut(E::EventType) + 'static,
) -> WindowEventListenerHandle
where
    E: EventDescriptor + 'static,
    E::EventType: JsCast,
{
    let opts = AddEventListenerOptions::new();
    opts.set_passive(options.passive);
    opts.set_capture(options.capture);
    opts.set_once(options.once);

    let event_name = event.name().into_owned();
    let callback = Closure::wrap(Box::new(move |ev: Event| {
        cb(ev.unchecked_into::<E::EventType>());
    }) as Box<dyn FnMut(Event)>);

    if let Some(window) = web_sys::window() {
        let _ = window.add_event_listener_with_callback_and_add_event_listener_options(
            &event_name,
            callback.as_ref().unchecked_ref(),
            &opts,
        );
    }

    WindowEventListenerHandle { callback }
}

/// `document.readyState == "complete"`
pub fn document_is_complete() -> bool {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return false;
    };
    js_sys::Reflect::get(&document, &JsValue::from_str("readyState"))
        .ok()
        .and_then(|state| state.as_string())
        .is_some_and(|state| state == "complete")
}

/// Run `cb` once the window has finished loading, or right away if it
/// already has.
pub fn on_page_load(cb: impl FnOnce() + 'static) {
    if document_is_complete() {
        log_debug!(LogComponent::Presentation("PageLoad"), "Document already complete");
        cb();
        return;
    }

    let mut cb = Some(cb);
    window_event_listener_with_options(leptos::ev::load, &EventOptions::run_once(), move |_| {
        log_debug!(LogComponent::Presentation("PageLoad"), "Window load event fired");
        if let Some(cb) = cb.take() {
            cb();
        }
    })
    .forget();
}
