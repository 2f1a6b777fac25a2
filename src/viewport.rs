use gloo::events::EventListener;
use nautilus_core::{ScrollMetrics, ViewportCommand};
use yew::prelude::*;

pub(crate) fn read_scroll_metrics() -> Option<ScrollMetrics> {
    let window = web_sys::window()?;
    let scrolled = window.scroll_y().ok()?;
    let viewport_height = window.inner_height().ok()?.as_f64()?;
    let document_height = window.document()?.document_element()?.scroll_height();
    Some(ScrollMetrics::measure(
        scrolled,
        f64::from(document_height),
        viewport_height,
    ))
}

pub(crate) fn apply(command: ViewportCommand) {
    match command {
        ViewportCommand::ScrollToTop => scroll_to_top(),
    }
}

fn scroll_to_top() {
    let Some(window) = web_sys::window() else {
        return;
    };
    window.scroll_to_with_x_and_y(0.0, 0.0);
}

/// Scroll-derived metrics, refreshed on every window scroll event.
#[hook]
pub(crate) fn use_scroll_metrics() -> ScrollMetrics {
    let metrics = use_state(ScrollMetrics::default);
    {
        let metrics = metrics.clone();
        use_effect_with((), move |_| {
            let listener = web_sys::window().map(|window| {
                EventListener::new(&window, "scroll", move |_event| {
                    if let Some(next) = read_scroll_metrics() {
                        metrics.set(next);
                    }
                })
            });
            move || drop(listener)
        });
    }
    *metrics
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn stretch_document(height_px: u32) -> Option<web_sys::HtmlElement> {
        let document = web_sys::window()?.document()?;
        let body = document.body()?;
        let spacer = document.create_element("div").ok()?;
        spacer
            .set_attribute("style", &format!("height: {height_px}px"))
            .ok()?;
        body.append_child(&spacer).ok()?;
        Some(body)
    }

    #[wasm_bindgen_test]
    fn metrics_track_window_scroll() {
        stretch_document(5000).expect("document body");
        let window = web_sys::window().expect("window");
        window.scroll_to_with_x_and_y(0.0, 600.0);
        let metrics = read_scroll_metrics().expect("metrics");
        assert!(metrics.progress > 0.0 && metrics.progress <= 100.0);
        assert_eq!(metrics.rotation_deg, window.scroll_y().expect("scroll y") * 0.1);
    }

    #[wasm_bindgen_test]
    fn scroll_to_top_resets_offset() {
        stretch_document(5000).expect("document body");
        let window = web_sys::window().expect("window");
        window.scroll_to_with_x_and_y(0.0, 900.0);
        apply(ViewportCommand::ScrollToTop);
        assert_eq!(window.scroll_y().expect("scroll y"), 0.0);
        assert_eq!(read_scroll_metrics().expect("metrics").progress, 0.0);
    }
}
