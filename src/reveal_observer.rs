use std::cell::RefCell;
use std::rc::Rc;

use js_sys::Array;
use nautilus_core::Reveal;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;

type ObserverCallback = Closure<dyn FnMut(Array, IntersectionObserver)>;

/// Watches one element until it first crosses `threshold`. Disconnects on drop.
struct RevealObserver {
    observer: IntersectionObserver,
    _callback: ObserverCallback,
}

impl RevealObserver {
    fn attach(element: &Element, threshold: f64, on_reveal: Callback<()>) -> Result<Self, JsValue> {
        let reveal = Rc::new(RefCell::new(Reveal::new(threshold)));
        let callback = Closure::wrap(Box::new(
            move |entries: Array, observer: IntersectionObserver| {
                for entry in entries.iter() {
                    let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                        continue;
                    };
                    let flipped = reveal
                        .borrow_mut()
                        .observe(entry.is_intersecting(), entry.intersection_ratio());
                    if flipped {
                        observer.disconnect();
                        on_reveal.emit(());
                        return;
                    }
                }
            },
        ) as Box<dyn FnMut(Array, IntersectionObserver)>);

        let init = IntersectionObserverInit::new();
        init.set_threshold(&JsValue::from_f64(threshold));
        let observer =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)?;
        observer.observe(element);
        Ok(Self {
            observer,
            _callback: callback,
        })
    }
}

impl Drop for RevealObserver {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

/// Returns a ref to attach to the element and whether it has been revealed yet.
#[hook]
pub(crate) fn use_reveal(threshold: f64) -> (NodeRef, bool) {
    let node = use_node_ref();
    let visible = use_state(|| false);
    {
        let node = node.clone();
        let visible = visible.clone();
        use_effect_with(threshold, move |threshold| {
            let observer = node.cast::<Element>().and_then(|element| {
                let on_reveal = {
                    let visible = visible.clone();
                    Callback::from(move |_| visible.set(true))
                };
                match RevealObserver::attach(&element, *threshold, on_reveal) {
                    Ok(observer) => Some(observer),
                    Err(err) => {
                        gloo::console::warn!("intersection observer unavailable", err);
                        visible.set(true);
                        None
                    }
                }
            });
            move || drop(observer)
        });
    }
    (node, *visible)
}
