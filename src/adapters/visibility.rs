use std::cell::Cell;
use std::rc::Rc;

use futures::channel::mpsc;
use futures::StreamExt;
use leptos::ev;
use leptos::prelude::{on_cleanup, window, window_event_listener};
use web_sys::Element;

use pf_core::ports::{VisibilityObserverPort, VisibilityStream};
use pf_core::reveal::{visible_fraction, Rect, Viewport, VisibilityGate};

/// Viewport intersection measured from `getBoundingClientRect` on every
/// window scroll and resize.
///
/// Must be called inside a reactive owner: the listeners are removed and the
/// stream ends when that owner is cleaned up.
#[derive(Debug, Clone, Copy)]
pub struct DomVisibilityObserver {
    threshold: f64,
}

impl DomVisibilityObserver {
    pub fn new(threshold: f64) -> Self {
        Self { threshold }
    }
}

impl VisibilityObserverPort for DomVisibilityObserver {
    type Target = Element;

    fn observe(&self, target: Element) -> VisibilityStream {
        let (tx, rx) = mpsc::unbounded::<bool>();
        let closer = tx.clone();
        let gate = Cell::new(VisibilityGate::new(self.threshold));

        let check = Rc::new(move || {
            let mut current = gate.get();
            if let Some(visible) = current.update(measure(&target)) {
                let _ = tx.unbounded_send(visible);
            }
            gate.set(current);
        });

        check();

        let on_scroll = check.clone();
        let scroll = window_event_listener(ev::scroll, move |_| on_scroll());
        let on_resize = check;
        let resize = window_event_listener(ev::resize, move |_| on_resize());

        on_cleanup(move || {
            scroll.remove();
            resize.remove();
            closer.close_channel();
        });

        rx.boxed_local()
    }
}

fn measure(element: &Element) -> f64 {
    let bounds = element.get_bounding_client_rect();
    let rect = Rect {
        top: bounds.top(),
        left: bounds.left(),
        width: bounds.width(),
        height: bounds.height(),
    };
    visible_fraction(rect, viewport())
}

fn viewport() -> Viewport {
    let window = window();
    let dimension = |value: Result<wasm_bindgen::JsValue, wasm_bindgen::JsValue>| {
        value.ok().and_then(|v| v.as_f64()).unwrap_or(0.0)
    };
    Viewport {
        width: dimension(window.inner_width()),
        height: dimension(window.inner_height()),
    }
}
