//! Small window helpers. Every function is a no-op (or returns zero) when no
//! window is available, so callers never need to gate on the target.

use std::cell::Cell;
use std::rc::Rc;

use leptos::ev;
use leptos::prelude::*;
use web_sys::{ScrollBehavior, ScrollIntoViewOptions};

/// The document scroll offset, shared through context.
#[derive(Debug, Clone, Copy)]
pub struct ScrollPosition(pub ReadSignal<f64>);

pub fn scroll_y() -> f64 {
    web_sys::window()
        .and_then(|w| w.scroll_y().ok())
        .unwrap_or(0.0)
}

pub fn viewport_height() -> f64 {
    web_sys::window()
        .and_then(|w| w.inner_height().ok())
        .and_then(|h| h.as_f64())
        .unwrap_or(0.0)
}

/// Monotonic clock in seconds.
pub fn now_seconds() -> f64 {
    web_sys::window()
        .and_then(|w| w.performance())
        .map(|p| p.now() / 1000.0)
        .unwrap_or(0.0)
}

/// Open `url` in a new browsing context.
pub fn open_external(url: &str) {
    let Some(window) = web_sys::window() else {
        return;
    };
    if let Err(err) = window.open_with_url_and_target(url, "_blank") {
        tracing::warn!(?err, "could not open external link");
    }
}

/// Smooth-scroll the element with `id` into view.
pub fn scroll_to_id(id: &str) {
    let Some(element) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(id))
    else {
        tracing::debug!(id, "scroll target not found");
        return;
    };
    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    element.scroll_into_view_with_scroll_into_view_options(&options);
}

pub fn scroll_to_top() {
    if let Some(window) = web_sys::window() {
        window.scroll_to_with_x_and_y(0.0, 0.0);
    }
}

/// Track the document scroll offset, sampled at most once per frame.
pub fn use_scroll_y() -> ReadSignal<f64> {
    let (scroll, set_scroll) = signal(0.0);

    Effect::new(move |_| {
        let sample = move || {
            let y = scroll_y();
            if scroll.get_untracked() != y {
                set_scroll.set(y);
            }
        };
        sample();

        let queued = Rc::new(Cell::new(false));
        let handle = window_event_listener(ev::scroll, move |_| {
            if queued.replace(true) {
                return;
            }
            let queued = Rc::clone(&queued);
            request_animation_frame(move || {
                queued.set(false);
                sample();
            });
        });
        on_cleanup(move || handle.remove());
    });

    scroll
}

/// The shared scroll offset from context, or a fresh tracker outside an app
/// tree.
pub fn use_scroll_position() -> ReadSignal<f64> {
    match use_context::<ScrollPosition>() {
        Some(ScrollPosition(scroll)) => scroll,
        None => use_scroll_y(),
    }
}
