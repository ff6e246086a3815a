//! Shared "is narrow viewport" signal. Every responsive consumer (hero
//! media, nav choice, gallery mode) reads this hook so they all flip on the
//! same breakpoint in the same resize cycle.

use wasm_bindgen::prelude::Closure;
use wasm_bindgen::JsCast;
use yew::prelude::*;

use crate::config;

#[hook]
pub fn use_is_mobile() -> bool {
    let is_mobile = use_state_eq(config::is_narrow_viewport);

    {
        let is_mobile = is_mobile.clone();
        use_effect_with_deps(
            move |_| {
                let window = web_sys::window();
                let callback = Closure::<dyn FnMut()>::new(move || {
                    is_mobile.set(config::is_narrow_viewport());
                });
                if let Some(win) = window.as_ref() {
                    let _ = win.add_event_listener_with_callback(
                        "resize",
                        callback.as_ref().unchecked_ref(),
                    );
                }
                move || {
                    if let Some(win) = window {
                        let _ = win.remove_event_listener_with_callback(
                            "resize",
                            callback.as_ref().unchecked_ref(),
                        );
                    }
                }
            },
            (),
        );
    }

    *is_mobile
}
