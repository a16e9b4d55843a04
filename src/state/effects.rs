//! Page Effects
//!
//! Imperative browser wiring that lives outside the component tree: scroll
//! parallax, the fade-in intersection observer, progress-bar replay, and
//! smooth scroll-to-top.

use std::cell::RefCell;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

thread_local! {
    static OBSERVER: RefCell<Option<IntersectionObserver>> = RefCell::new(None);
}

/// Parallax: translate the header against the scroll position.
pub fn setup_scroll_animations() {
    let Some(window) = web_sys::window() else {
        return;
    };

    let win = window.clone();
    let closure = Closure::wrap(Box::new(move |_: web_sys::Event| {
        let scrolled = win.page_y_offset().unwrap_or(0.0);
        let rate = scrolled * -0.5;

        if let Some(doc) = win.document() {
            if let Ok(Some(header)) = doc.query_selector(".header") {
                if let Ok(header) = header.dyn_into::<web_sys::HtmlElement>() {
                    let _ = header
                        .style()
                        .set_property("transform", &format!("translateY({}px)", rate * 0.1));
                }
            }
        }
    }) as Box<dyn FnMut(_)>);
    let _ = window.add_event_listener_with_callback("scroll", closure.as_ref().unchecked_ref());
    closure.forget();
}

/// Create the fade-in observer and watch any cards already in the document.
pub fn setup_intersection_observer() {
    let callback = Closure::wrap(Box::new(
        move |entries: js_sys::Array, _observer: IntersectionObserver| {
            for entry in entries.iter() {
                let entry: IntersectionObserverEntry = entry.unchecked_into();
                if entry.is_intersecting() {
                    let _ = entry.target().class_list().add_1("fade-in");
                }
            }
        },
    )
        as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>);

    let mut options = IntersectionObserverInit::new();
    options.threshold(&JsValue::from_f64(0.1));

    let Ok(observer) =
        IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)
    else {
        return;
    };
    callback.forget();

    OBSERVER.with(|cell| *cell.borrow_mut() = Some(observer));
    observe_project_cards();
}

/// (Re-)observe every project card; called again after the grid renders.
pub fn observe_project_cards() {
    let Some(doc) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    let Ok(cards) = doc.query_selector_all(".project-card") else {
        return;
    };

    OBSERVER.with(|cell| {
        if let Some(observer) = cell.borrow().as_ref() {
            for i in 0..cards.length() {
                if let Some(card) = cards.item(i) {
                    if let Ok(card) = card.dyn_into::<web_sys::Element>() {
                        observer.observe(&card);
                    }
                }
            }
        }
    });
}

/// Restart the shimmer animation on every progress fill.
pub fn replay_progress_animation() {
    let Some(doc) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    let Ok(fills) = doc.query_selector_all(".progress-fill") else {
        return;
    };

    for i in 0..fills.length() {
        let Some(node) = fills.item(i) else {
            continue;
        };
        let Ok(fill) = node.dyn_into::<web_sys::HtmlElement>() else {
            continue;
        };
        let style = fill.style();
        let _ = style.set_property("animation", "none");
        fill.offset_height(); // force reflow so the animation restarts
        let _ = style.set_property("animation", "shimmer 2s infinite");
    }
}

/// Smooth-scroll the window back to the top.
pub fn scroll_to_top() {
    if let Some(window) = web_sys::window() {
        let mut options = web_sys::ScrollToOptions::new();
        options.top(0.0);
        options.behavior(web_sys::ScrollBehavior::Smooth);
        window.scroll_to_with_scroll_to_options(&options);
    }
}
