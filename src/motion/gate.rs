use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::{Array, Reflect};
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry};

/// One-shot latch for "this region has been visible at least once".
/// Once fired it never reverts.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Gate {
    triggered: bool,
}

impl Gate {
    pub fn new() -> Self {
        Self { triggered: false }
    }

    /// Latches the gate. Returns true only on the false -> true transition,
    /// so repeat notifications cannot produce a second state change.
    pub fn fire(&mut self) -> bool {
        if self.triggered {
            return false;
        }
        self.triggered = true;
        true
    }

    pub fn has_triggered(&self) -> bool {
        self.triggered
    }
}

/// Watches a region and invokes a handler the first time any part of it
/// intersects the viewport, then stops observing. The underlying observer is
/// released either on first fire or on drop, whichever comes first.
pub struct ViewportWatcher {
    observer: Option<IntersectionObserver>,
    _callback: Option<Closure<dyn FnMut(Array, IntersectionObserver)>>,
}

impl ViewportWatcher {
    pub fn watch<F: Fn() + 'static>(target: &Element, on_first_visible: F) -> Self {
        let handler: Rc<dyn Fn()> = Rc::new(on_first_visible);

        // If the observation primitive is missing, reveal immediately rather
        // than leaving content hidden forever.
        let available = web_sys::window()
            .map(|window| {
                Reflect::has(window.as_ref(), &JsValue::from_str("IntersectionObserver"))
                    .unwrap_or(false)
            })
            .unwrap_or(false);
        if !available {
            gloo_console::log!("IntersectionObserver unavailable, showing content without animation");
            handler();
            return Self::inert();
        }

        let gate = Rc::new(RefCell::new(Gate::new()));
        let callback = {
            let handler = handler.clone();
            Closure::wrap(Box::new(move |entries: Array, observer: IntersectionObserver| {
                let intersecting = entries.iter().any(|entry| {
                    entry
                        .dyn_into::<IntersectionObserverEntry>()
                        .map(|entry| entry.is_intersecting())
                        .unwrap_or(false)
                });
                if intersecting && gate.borrow_mut().fire() {
                    // One-shot: scrolling away and back must not re-fire.
                    observer.disconnect();
                    handler();
                }
            }) as Box<dyn FnMut(Array, IntersectionObserver)>)
        };

        match IntersectionObserver::new(callback.as_ref().unchecked_ref()) {
            Ok(observer) => {
                observer.observe(target);
                Self {
                    observer: Some(observer),
                    _callback: Some(callback),
                }
            }
            Err(_) => {
                handler();
                Self::inert()
            }
        }
    }

    fn inert() -> Self {
        Self {
            observer: None,
            _callback: None,
        }
    }
}

impl Drop for ViewportWatcher {
    fn drop(&mut self) {
        if let Some(observer) = self.observer.take() {
            observer.disconnect();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Gate;

    #[test]
    fn gate_starts_closed() {
        assert!(!Gate::new().has_triggered());
    }

    #[test]
    fn gate_latches_on_first_fire() {
        let mut gate = Gate::new();
        assert!(gate.fire());
        assert!(gate.has_triggered());
    }

    #[test]
    fn repeat_fires_produce_no_second_transition() {
        let mut gate = Gate::new();
        assert!(gate.fire());
        assert!(!gate.fire());
        assert!(!gate.fire());
        assert!(gate.has_triggered());
    }
}
