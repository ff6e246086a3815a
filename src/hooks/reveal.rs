//! Visibility orchestrator: a one-way reveal latch per section.
//!
//! Each major section owns an independent instance; sections reveal on
//! their own as the user scrolls, with no cross-section ordering. Once the
//! latch is true it stays true for the life of the component, even when the
//! element scrolls back out of view.

use wasm_bindgen::prelude::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;

/// Crossing callbacks can report a ratio a hair under the registered
/// threshold, so the latch compares with a small slack.
const RATIO_TOLERANCE: f64 = 1e-3;

/// One-way latch fed with intersection observations.
#[derive(Debug, Default)]
struct RevealLatch {
    revealed: bool,
}

impl RevealLatch {
    /// Feed one observation. Returns true only on the flip, so the caller
    /// knows when to stop observing.
    ///
    /// The observer's initial callback reports the mount-time snapshot even
    /// when only a sliver of the element intersects, so intersecting alone
    /// is not enough; the reported ratio has to meet the threshold.
    fn observe(&mut self, threshold: f64, is_intersecting: bool, ratio: f64) -> bool {
        if self.revealed {
            return false;
        }
        if is_intersecting && ratio + RATIO_TOLERANCE >= threshold {
            self.revealed = true;
            return true;
        }
        false
    }

    fn revealed(&self) -> bool {
        self.revealed
    }
}

/// Latches true the first time `node`'s visible fraction meets `threshold`.
///
/// If the element is already inside the threshold at mount, the observer's
/// initial callback latches it. If the observation facility is unavailable,
/// the section defaults to visible rather than staying permanently hidden.
#[hook]
pub fn use_reveal(node: NodeRef, threshold: f64) -> bool {
    let revealed = use_state_eq(|| false);

    {
        let revealed = revealed.clone();
        use_effect_with_deps(
            move |(node, threshold)| {
                let mut observer = None;
                let mut callback = None;

                if let Some(element) = node.cast::<Element>() {
                    let handle = revealed.clone();
                    let threshold = *threshold;
                    let mut latch = RevealLatch::default();
                    let cb = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
                        move |entries: js_sys::Array, obs: IntersectionObserver| {
                            for entry in entries.iter() {
                                let entry: IntersectionObserverEntry = entry.unchecked_into();
                                if latch.observe(
                                    threshold,
                                    entry.is_intersecting(),
                                    entry.intersection_ratio(),
                                ) {
                                    handle.set(true);
                                    // The latch never resets; stop observing.
                                    obs.disconnect();
                                    break;
                                }
                            }
                        },
                    );
                    let options = IntersectionObserverInit::new();
                    options.set_threshold(&JsValue::from_f64(threshold));
                    match IntersectionObserver::new_with_options(
                        cb.as_ref().unchecked_ref(),
                        &options,
                    ) {
                        Ok(obs) => {
                            obs.observe(&element);
                            observer = Some(obs);
                            callback = Some(cb);
                        }
                        Err(_) => {
                            // Fail open: no observer means no reveal event
                            // would ever come.
                            revealed.set(true);
                        }
                    }
                } else {
                    revealed.set(true);
                }

                move || {
                    if let Some(obs) = observer {
                        obs.disconnect();
                    }
                    drop(callback);
                }
            },
            (node, threshold),
        );
    }

    *revealed
}

#[cfg(test)]
mod tests {
    use super::RevealLatch;

    #[test]
    fn latch_flips_once_at_threshold() {
        let mut latch = RevealLatch::default();
        assert!(!latch.observe(0.3, true, 0.1));
        assert!(latch.observe(0.3, true, 0.31));
        assert!(latch.revealed());
        // Later observations change nothing, the flip already happened.
        assert!(!latch.observe(0.3, true, 0.9));
        assert!(latch.revealed());
    }

    #[test]
    fn leaving_the_viewport_never_reverts() {
        let mut latch = RevealLatch::default();
        assert!(latch.observe(0.2, true, 0.5));
        latch.observe(0.2, false, 0.0);
        latch.observe(0.2, false, 0.0);
        assert!(latch.revealed());
    }

    #[test]
    fn initial_snapshot_below_threshold_does_not_latch() {
        // An element 5% visible at mount reports intersecting with a ratio
        // under the registered threshold.
        let mut latch = RevealLatch::default();
        assert!(!latch.observe(0.3, true, 0.05));
        assert!(!latch.revealed());
    }

    #[test]
    fn crossing_report_just_under_threshold_still_latches() {
        let mut latch = RevealLatch::default();
        assert!(latch.observe(0.3, true, 0.2999));
    }
}
