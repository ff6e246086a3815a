use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::HtmlElement;
use yew::prelude::*;

use crate::interaction::scroll::event_target_matches;

/// Elements that make the cursor ring swell when hovered. Matched with
/// `closest()` from the event target, so one pair of document-level
/// listeners covers elements added after mount too.
const HOVER_TARGETS: &str = "a, button, [data-cursor-hover], input[type=\"submit\"]";

/// Two-layer custom cursor: a dot that tracks the pointer tightly and a
/// ring that trails behind it. Positions are written straight to the
/// element styles so pointer movement never re-renders the component.
#[function_component(PointerCursor)]
pub fn pointer_cursor() -> Html {
    let dot = use_node_ref();
    let ring = use_node_ref();
    // Stays hidden until the first pointer movement, otherwise both
    // layers would sit at the origin on page load.
    let visible = use_state_eq(|| false);

    {
        let dot = dot.clone();
        let ring = ring.clone();
        let visible = visible.clone();
        use_effect_with_deps(
            move |_| {
                let document = web_sys::window().and_then(|w| w.document());

                let move_cb = {
                    let dot = dot.clone();
                    let ring = ring.clone();
                    Closure::<dyn FnMut(web_sys::MouseEvent)>::new(
                        move |e: web_sys::MouseEvent| {
                            visible.set(true);
                            let transform = format!(
                                "translate3d({}px, {}px, 0) translate(-50%, -50%)",
                                e.client_x(),
                                e.client_y()
                            );
                            for node in [&dot, &ring] {
                                if let Some(el) = node.cast::<HtmlElement>() {
                                    let _ = el.style().set_property("transform", &transform);
                                }
                            }
                        },
                    )
                };

                let over_cb = {
                    let ring = ring.clone();
                    Closure::<dyn FnMut(web_sys::Event)>::new(move |e: web_sys::Event| {
                        if event_target_matches(&e, HOVER_TARGETS) {
                            if let Some(el) = ring.cast::<HtmlElement>() {
                                let _ = el.class_list().add_1("cursor-hover");
                            }
                        }
                    })
                };

                let out_cb = {
                    let ring = ring.clone();
                    Closure::<dyn FnMut(web_sys::Event)>::new(move |e: web_sys::Event| {
                        if event_target_matches(&e, HOVER_TARGETS) {
                            if let Some(el) = ring.cast::<HtmlElement>() {
                                let _ = el.class_list().remove_1("cursor-hover");
                            }
                        }
                    })
                };

                if let Some(document) = document.as_ref() {
                    let _ = document.add_event_listener_with_callback(
                        "mousemove",
                        move_cb.as_ref().unchecked_ref(),
                    );
                    let _ = document.add_event_listener_with_callback(
                        "pointerover",
                        over_cb.as_ref().unchecked_ref(),
                    );
                    let _ = document.add_event_listener_with_callback(
                        "pointerout",
                        out_cb.as_ref().unchecked_ref(),
                    );
                }

                move || {
                    if let Some(document) = web_sys::window().and_then(|w| w.document()) {
                        let _ = document.remove_event_listener_with_callback(
                            "mousemove",
                            move_cb.as_ref().unchecked_ref(),
                        );
                        let _ = document.remove_event_listener_with_callback(
                            "pointerover",
                            over_cb.as_ref().unchecked_ref(),
                        );
                        let _ = document.remove_event_listener_with_callback(
                            "pointerout",
                            out_cb.as_ref().unchecked_ref(),
                        );
                    }
                    drop(move_cb);
                    drop(over_cb);
                    drop(out_cb);
                }
            },
            (),
        );
    }

    let css = r#"
        .cursor-dot,
        .cursor-ring {
            position: fixed;
            top: 0;
            left: 0;
            pointer-events: none;
            z-index: 100;
            border-radius: 50%;
            opacity: 0;
        }
        .cursor-dot {
            width: 4px;
            height: 4px;
            background: #ff1493;
            mix-blend-mode: difference;
            transition: transform 0.1s ease-out, opacity 0.3s;
        }
        .cursor-ring {
            width: 30px;
            height: 30px;
            border: 1px solid #ff1493;
            background: rgba(255, 20, 147, 0);
            mix-blend-mode: difference;
            transition:
                transform 0.3s ease-out,
                width 0.3s,
                height 0.3s,
                background 0.3s,
                opacity 0.3s;
        }
        .cursor-ring.cursor-hover {
            width: 45px;
            height: 45px;
            background: rgba(255, 20, 147, 0.1);
        }
        .cursor-visible {
            opacity: 1;
        }
        @media (hover: none), (pointer: coarse) {
            .cursor-dot,
            .cursor-ring {
                display: none;
            }
        }
    "#;

    html! {
        <>
            <style>{css}</style>
            <div ref={dot} class={classes!("cursor-dot", (*visible).then_some("cursor-visible"))}></div>
            <div ref={ring} class={classes!("cursor-ring", (*visible).then_some("cursor-visible"))}></div>
        </>
    }
}
