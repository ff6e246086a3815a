#![cfg(target_arch = "wasm32")]

use std::cell::Cell;
use std::rc::Rc;

use gloo_timers::future::TimeoutFuture;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;

use velvet_shaker::components::footer::Footer;
use velvet_shaker::interaction::scroll::{
    current_scroll_depth, event_target_matches, ScrollListener,
};
use velvet_shaker::interaction::scroll_lock::ScrollLock;
use velvet_shaker::pages::home::Home;

wasm_bindgen_test_configure!(run_in_browser);

fn mount<C>() -> (yew::AppHandle<C>, web_sys::Element)
where
    C: yew::html::BaseComponent,
    C::Properties: Default,
{
    let document = web_sys::window().and_then(|w| w.document()).unwrap();
    let host = document.create_element("div").unwrap();
    document.body().unwrap().append_child(&host).unwrap();
    let app = yew::Renderer::<C>::with_root(host.clone()).render();
    (app, host)
}

fn dispatch_bubbling(target: &web_sys::EventTarget, kind: &str) {
    let init = web_sys::EventInit::new();
    init.set_bubbles(true);
    init.set_cancelable(true);
    let event = web_sys::Event::new_with_event_init_dict(kind, &init).unwrap();
    target.dispatch_event(&event).unwrap();
}

#[wasm_bindgen_test]
fn scroll_lock_holds_until_last_guard_drops() {
    let body = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.body())
        .unwrap();
    let overflow = || body.style().get_property_value("overflow").unwrap();

    {
        let _outer = ScrollLock::acquire();
        assert_eq!(overflow(), "hidden");
        {
            let _inner = ScrollLock::acquire();
            assert_eq!(overflow(), "hidden");
        }
        // Inner guard released, outer still holds the page.
        assert_eq!(overflow(), "hidden");
        assert_eq!(ScrollLock::active(), 1);
    }
    assert_eq!(overflow(), "");
    assert_eq!(ScrollLock::active(), 0);
}

#[wasm_bindgen_test]
fn delegated_match_walks_up_from_nested_target() {
    let document = web_sys::window().and_then(|w| w.document()).unwrap();
    let wrapper = document.create_element("div").unwrap();
    wrapper.set_inner_html(
        "<button><span id=\"nested-in-button\">x</span></button>\
         <span id=\"plain-span\">y</span>",
    );
    document.body().unwrap().append_child(&wrapper).unwrap();

    let matched = Rc::new(Cell::new(false));
    let cb = {
        let matched = matched.clone();
        Closure::<dyn FnMut(web_sys::Event)>::new(move |e: web_sys::Event| {
            matched.set(event_target_matches(&e, "a, button, [data-cursor-hover]"));
        })
    };

    let dispatch_on = |id: &str| {
        let el = document.get_element_by_id(id).unwrap();
        el.add_event_listener_with_callback("pointerover", cb.as_ref().unchecked_ref())
            .unwrap();
        let event = web_sys::Event::new("pointerover").unwrap();
        el.dispatch_event(&event).unwrap();
    };

    dispatch_on("nested-in-button");
    assert!(matched.get(), "span inside a button should match via closest()");

    matched.set(false);
    dispatch_on("plain-span");
    assert!(!matched.get(), "span outside any hover target should not match");

    wrapper.remove();
    drop(cb);
}

#[wasm_bindgen_test]
fn scroll_depth_is_available_and_clamped() {
    let depth = current_scroll_depth().unwrap();
    assert!((0.0..=1.0).contains(&depth));
}

#[wasm_bindgen_test]
fn scroll_listener_detaches_and_stays_detached() {
    let hits = Rc::new(Cell::new(0u32));
    let listener = ScrollListener::new();
    {
        let hits = hits.clone();
        listener.attach(move || hits.set(hits.get() + 1));
    }
    assert!(listener.is_attached());

    let window = web_sys::window().unwrap();
    let fire = || {
        let event = web_sys::Event::new("scroll").unwrap();
        window.dispatch_event(&event).unwrap();
    };

    fire();
    assert_eq!(hits.get(), 1);

    // A clone shares the handle, the way a timer callback holds one.
    listener.clone().detach();
    assert!(!listener.is_attached());
    fire();
    assert_eq!(hits.get(), 1, "detached listener must not fire again");

    // Detaching twice is fine.
    listener.detach();
    fire();
    assert_eq!(hits.get(), 1);
}

#[wasm_bindgen_test]
async fn nav_controls_never_render_simultaneously() {
    let (app, host) = mount::<Home>();
    TimeoutFuture::new(100).await;

    let exactly_one = |host: &web_sys::Element| {
        let desktop = host.query_selector(".hero-nav-links").unwrap().is_some();
        let orbital = host.query_selector(".orbital-root").unwrap().is_some();
        assert_ne!(
            desktop, orbital,
            "desktop nav and orbital menu must swap, never coexist"
        );
    };
    exactly_one(&host);

    // A resize re-samples the viewport; the invariant has to survive it.
    let event = web_sys::Event::new("resize").unwrap();
    web_sys::window().unwrap().dispatch_event(&event).unwrap();
    TimeoutFuture::new(100).await;
    exactly_one(&host);

    app.destroy();
    host.remove();
}

#[wasm_bindgen_test]
async fn newsletter_resubmit_supersedes_pending_confirmation_timer() {
    let (app, host) = mount::<Footer>();
    TimeoutFuture::new(50).await;

    let form = host.query_selector("form").unwrap().unwrap();
    let message = || host.query_selector(".footer-submit-message").unwrap();

    dispatch_bubbling(&form, "submit");
    TimeoutFuture::new(500).await;
    // Second submit lands while the first roundtrip is still pending; it
    // replaces the timer, so the confirmation shifts to one second from now.
    dispatch_bubbling(&form, "submit");
    TimeoutFuture::new(700).await;
    assert!(
        message().is_none(),
        "superseded timer must not show the confirmation early"
    );

    TimeoutFuture::new(500).await;
    assert!(message().is_some(), "confirmation appears after the roundtrip");

    // And the confirmation clears itself three seconds later.
    TimeoutFuture::new(3_300).await;
    assert!(message().is_none());

    app.destroy();
    host.remove();
}
