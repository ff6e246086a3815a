use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use yew::prelude::*;

use crate::config;
use crate::interaction::engagement::{EngagementScheduler, ScrollAction};
use crate::interaction::scroll;
use crate::interaction::scroll_lock::ScrollLock;

/// Engagement popup. Presented at most once per page load, triggered by
/// whichever comes first: 30 seconds on the page, or reaching 75% scroll
/// depth and settling there for a second. While visible the page behind
/// it cannot scroll.
#[function_component(EngagementPopup)]
pub fn engagement_popup() -> Html {
    let visible = use_state_eq(|| false);
    let body_lock = use_mut_ref(|| None::<ScrollLock>);

    {
        let visible = visible.clone();
        use_effect_with_deps(
            move |_| {
                let scheduler = Rc::new(RefCell::new(EngagementScheduler::new()));
                let debounce = Rc::new(RefCell::new(None::<Timeout>));
                let fallback = Rc::new(RefCell::new(None::<Timeout>));
                let listener = scroll::ScrollListener::new();

                // Whichever trigger fires first cancels the loser's pending
                // timer and detaches the scroll listener on the spot; the
                // scheduler latch makes a late callback inert anyway.
                *fallback.borrow_mut() = Some({
                    let scheduler = scheduler.clone();
                    let visible = visible.clone();
                    let debounce = debounce.clone();
                    let listener = listener.clone();
                    Timeout::new(config::POPUP_TIMER_MS, move || {
                        if scheduler.borrow_mut().on_timer_elapsed() {
                            debounce.borrow_mut().take();
                            listener.detach();
                            visible.set(true);
                        }
                    })
                });

                let handle_depth = {
                    let debounce = debounce.clone();
                    let fallback = fallback.clone();
                    let listener = listener.clone();
                    move || {
                        let Some(depth) = scroll::current_scroll_depth() else {
                            return;
                        };
                        match scheduler.borrow_mut().on_scroll(depth) {
                            ScrollAction::StartDebounce => {
                                let scheduler = scheduler.clone();
                                let visible = visible.clone();
                                let fallback = fallback.clone();
                                let listener = listener.clone();
                                *debounce.borrow_mut() = Some(Timeout::new(
                                    config::POPUP_SCROLL_DEBOUNCE_MS,
                                    move || {
                                        if scheduler.borrow_mut().on_debounce_elapsed() {
                                            fallback.borrow_mut().take();
                                            listener.detach();
                                            visible.set(true);
                                        }
                                    },
                                ));
                            }
                            ScrollAction::CancelDebounce => {
                                debounce.borrow_mut().take();
                            }
                            ScrollAction::None => {}
                        }
                    }
                };

                // The page may already load past the threshold (e.g. a
                // restored scroll position), so sample once before waiting
                // for scroll events.
                handle_depth();
                listener.attach(handle_depth);

                move || {
                    fallback.borrow_mut().take();
                    debounce.borrow_mut().take();
                    listener.detach();
                }
            },
            (),
        );
    }

    {
        let body_lock = body_lock.clone();
        use_effect_with_deps(
            move |shown: &bool| {
                if *shown {
                    gloo_console::log!("engagement popup presented");
                    *body_lock.borrow_mut() = Some(ScrollLock::acquire());
                } else {
                    body_lock.borrow_mut().take();
                }
                || ()
            },
            *visible,
        );
    }

    let dismiss = {
        let visible = visible.clone();
        Callback::from(move |_: MouseEvent| visible.set(false))
    };

    let on_card_click = Callback::from(|e: MouseEvent| e.stop_propagation());

    let on_contact = {
        let visible = visible.clone();
        Callback::from(move |_: MouseEvent| {
            if let Some(window) = web_sys::window() {
                let _ = window.open_with_url_and_target(config::CONTACT_PROFILE_URL, "_blank");
            }
            visible.set(false);
        })
    };

    if !*visible {
        return html! {};
    }

    let css = r#"
        .popup-backdrop {
            position: fixed;
            inset: 0;
            z-index: 90;
            display: flex;
            align-items: center;
            justify-content: center;
            padding: 1.5rem;
            background: rgba(0, 0, 0, 0.8);
            backdrop-filter: blur(8px);
            animation: popup-fade-in 0.3s ease-out;
        }
        .popup-card {
            position: relative;
            max-width: 28rem;
            width: 100%;
            padding: 2.5rem 2rem;
            text-align: center;
            border-radius: 1.5rem;
            border: 1px solid rgba(236, 72, 153, 0.3);
            background: linear-gradient(to bottom right, #18181b, #000);
            box-shadow: 0 25px 60px rgba(236, 72, 153, 0.15);
            animation: popup-rise 0.4s cubic-bezier(0.34, 1.56, 0.64, 1);
        }
        .popup-close {
            position: absolute;
            top: 1rem;
            right: 1rem;
            width: 2rem;
            height: 2rem;
            color: #6b7280;
            font-size: 1.25rem;
            line-height: 1;
            transition: color 0.3s;
        }
        .popup-close:hover {
            color: #fff;
        }
        .popup-emoji {
            font-size: 3rem;
            margin-bottom: 1rem;
        }
        .popup-title {
            font-family: "Playfair Display", Georgia, serif;
            font-size: 1.75rem;
            margin-bottom: 0.75rem;
            background: linear-gradient(to right, #f472b6, #c084fc);
            -webkit-background-clip: text;
            background-clip: text;
            color: transparent;
        }
        .popup-text {
            color: #9ca3af;
            line-height: 1.7;
            margin-bottom: 1.75rem;
        }
        .popup-author {
            color: #f472b6;
            font-weight: 600;
        }
        .popup-cta {
            display: inline-block;
            padding: 0.9rem 2.25rem;
            border-radius: 9999px;
            background: linear-gradient(to right, #ec4899, #a855f7);
            color: #fff;
            font-weight: 700;
            transition: transform 0.3s, box-shadow 0.3s;
        }
        .popup-cta:hover {
            transform: scale(1.05);
            box-shadow: 0 10px 30px rgba(236, 72, 153, 0.4);
        }
        .popup-dismiss {
            display: block;
            margin: 1rem auto 0;
            color: #6b7280;
            font-size: 0.9rem;
            transition: color 0.3s;
        }
        .popup-dismiss:hover {
            color: #d1d5db;
        }
        @keyframes popup-fade-in {
            from { opacity: 0; }
            to { opacity: 1; }
        }
        @keyframes popup-rise {
            from { opacity: 0; transform: translateY(2rem) scale(0.95); }
            to { opacity: 1; transform: translateY(0) scale(1); }
        }
    "#;

    html! {
        <div class="popup-backdrop" onclick={dismiss.clone()}>
            <style>{css}</style>
            <div class="popup-card" onclick={on_card_click}>
                <button
                    class="popup-close"
                    onclick={dismiss.clone()}
                    aria-label="Chiudi"
                    data-cursor-hover=""
                >
                    {"✕"}
                </button>
                <div class="popup-emoji">{"🍸"}</div>
                <h3 class="popup-title">{"Ti è Piaciuto?"}</h3>
                <p class="popup-text">
                    {"Questo è un sito dimostrativo creato da "}
                    <span class="popup-author">{"Alex"}</span>
                    {". Se ti piace questo design e vuoi qualcosa di simile per \
                      il tuo business, contattami!"}
                </p>
                <button class="popup-cta" onclick={on_contact} data-cursor-hover="">
                    {"Contattami su Facebook"}
                </button>
                <button class="popup-dismiss" onclick={dismiss} data-cursor-hover="">
                    {"No grazie, continuo a esplorare"}
                </button>
            </div>
        </div>
    }
}
