//! Reference-counted body scroll lock for modal overlays.
//!
//! The document body's overflow is global, mutable state with a single
//! writer at a time. `ScrollLock` scopes it: `acquire()` suspends page
//! scroll while any guard is alive, and dropping the last guard restores
//! it, including on abnormal component teardown. The count lives in a
//! static atomic; the wasm main thread is the only writer.

use std::sync::atomic::{AtomicUsize, Ordering};

static LOCK_COUNT: AtomicUsize = AtomicUsize::new(0);

#[must_use = "scroll stays locked only while the guard is alive"]
pub struct ScrollLock {
    _private: (),
}

impl ScrollLock {
    pub fn acquire() -> Self {
        if LOCK_COUNT.fetch_add(1, Ordering::Relaxed) == 0 {
            set_body_overflow(Some("hidden"));
        }
        Self { _private: () }
    }

    /// Number of live guards, mostly for tests.
    pub fn active() -> usize {
        LOCK_COUNT.load(Ordering::Relaxed)
    }
}

impl Drop for ScrollLock {
    fn drop(&mut self) {
        if LOCK_COUNT.fetch_sub(1, Ordering::Relaxed) == 1 {
            set_body_overflow(None);
        }
    }
}

fn set_body_overflow(value: Option<&str>) {
    let Some(body) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.body())
    else {
        return;
    };
    let style = body.style();
    let result = match value {
        Some(v) => style.set_property("overflow", v),
        None => style.remove_property("overflow").map(|_| ()),
    };
    if result.is_err() {
        gloo_console::log!("scroll lock: failed to update body overflow");
    }
}
