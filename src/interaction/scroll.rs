//! Scroll helpers: depth math shared by the popup scheduler and the
//! scroll-to-top button, plus the smooth-scroll moves every "navigate to
//! section" action resolves to.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::Closure;
use wasm_bindgen::JsCast;
use web_sys::{ScrollBehavior, ScrollIntoViewOptions, ScrollToOptions};

/// Fraction of the scrollable range that has been scrolled, clamped to
/// `[0, 1]`. A document shorter than the viewport counts as fully scrolled.
pub fn scroll_depth(scroll_top: f64, document_height: f64, viewport_height: f64) -> f64 {
    let scrollable = document_height - viewport_height;
    if scrollable <= 0.0 {
        return 1.0;
    }
    (scroll_top / scrollable).clamp(0.0, 1.0)
}

/// Current scroll depth of the page, `None` outside a browser.
pub fn current_scroll_depth() -> Option<f64> {
    let window = web_sys::window()?;
    let scroll_top = window.scroll_y().ok()?;
    let viewport = window.inner_height().ok()?.as_f64()?;
    let document = window.document()?.document_element()?;
    Some(scroll_depth(scroll_top, document.scroll_height() as f64, viewport))
}

pub fn current_scroll_top() -> f64 {
    web_sys::window()
        .and_then(|w| w.scroll_y().ok())
        .unwrap_or(0.0)
}

pub fn viewport_height() -> f64 {
    web_sys::window()
        .and_then(|w| w.inner_height().ok())
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0)
}

/// Smooth-scroll to the section carrying the given anchor id. Unknown ids
/// are ignored.
pub fn scroll_to_section(id: &str) {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    let Some(element) = document.get_element_by_id(id) else {
        return;
    };
    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    element.scroll_into_view_with_scroll_into_view_options(&options);
}

pub fn scroll_to_top() {
    let Some(window) = web_sys::window() else {
        return;
    };
    let options = ScrollToOptions::new();
    options.set_top(0.0);
    options.set_behavior(ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&options);
}

/// Window scroll subscription that any of its holders can tear down.
/// Clones share the handle, so a timer callback can remove the listener the
/// moment it has no further use for it while the component keeps the
/// original for its unmount cleanup.
#[derive(Clone, Default)]
pub struct ScrollListener {
    callback: Rc<RefCell<Option<Closure<dyn FnMut()>>>>,
}

impl ScrollListener {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `handler` for window scroll events, replacing whatever this
    /// handle currently holds.
    pub fn attach(&self, handler: impl FnMut() + 'static) {
        self.detach();
        let callback = Closure::<dyn FnMut()>::new(handler);
        if let Some(window) = web_sys::window() {
            let _ = window
                .add_event_listener_with_callback("scroll", callback.as_ref().unchecked_ref());
        }
        *self.callback.borrow_mut() = Some(callback);
    }

    /// Remove and drop the listener. Idempotent.
    pub fn detach(&self) {
        if let Some(callback) = self.callback.borrow_mut().take() {
            if let Some(window) = web_sys::window() {
                let _ = window.remove_event_listener_with_callback(
                    "scroll",
                    callback.as_ref().unchecked_ref(),
                );
            }
        }
    }

    pub fn is_attached(&self) -> bool {
        self.callback.borrow().is_some()
    }
}

/// True when the event target (or an ancestor) matches `selector`. Used by
/// the cursor's delegated hover matching.
pub fn event_target_matches(event: &web_sys::Event, selector: &str) -> bool {
    event
        .target()
        .and_then(|t| t.dyn_into::<web_sys::Element>().ok())
        .and_then(|el| el.closest(selector).ok().flatten())
        .is_some()
}

#[cfg(test)]
mod tests {
    use super::scroll_depth;

    #[test]
    fn depth_is_linear_in_scrollable_range() {
        assert_eq!(scroll_depth(0.0, 4000.0, 1000.0), 0.0);
        assert_eq!(scroll_depth(1500.0, 4000.0, 1000.0), 0.5);
        assert_eq!(scroll_depth(3000.0, 4000.0, 1000.0), 1.0);
    }

    #[test]
    fn depth_clamps_overscroll() {
        // Rubber-band overscroll on touch devices can exceed the range.
        assert_eq!(scroll_depth(3500.0, 4000.0, 1000.0), 1.0);
        assert_eq!(scroll_depth(-40.0, 4000.0, 1000.0), 0.0);
    }

    #[test]
    fn short_document_counts_as_full_depth() {
        assert_eq!(scroll_depth(0.0, 800.0, 1000.0), 1.0);
        assert_eq!(scroll_depth(0.0, 1000.0, 1000.0), 1.0);
    }
}
