use yew::prelude::*;

use crate::config;
use crate::interaction::scroll;

/// Back-to-top button. Hidden near the top of the page, fades in once the
/// reader has scrolled past one and a half viewports.
#[function_component(ScrollTopButton)]
pub fn scroll_top_button() -> Html {
    let shown = use_state_eq(|| false);

    {
        let shown = shown.clone();
        use_effect_with_deps(
            move |_| {
                let update = move || {
                    let threshold = config::SCROLL_TOP_VIEWPORTS * scroll::viewport_height();
                    shown.set(scroll::current_scroll_top() > threshold);
                };
                update();

                let listener = scroll::ScrollListener::new();
                listener.attach(update);
                move || listener.detach()
            },
            (),
        );
    }

    let onclick = Callback::from(|_: MouseEvent| scroll::scroll_to_top());

    let css = r#"
        .scroll-top-button {
            position: fixed;
            bottom: 1.5rem;
            left: 1.5rem;
            z-index: 70;
            width: 3rem;
            height: 3rem;
            border-radius: 50%;
            border: 1px solid rgba(236, 72, 153, 0.4);
            background: rgba(24, 24, 27, 0.9);
            color: #f472b6;
            font-size: 1.2rem;
            opacity: 0;
            transform: translateY(1rem);
            pointer-events: none;
            transition: opacity 0.3s, transform 0.3s;
        }
        .scroll-top-button.scroll-top-shown {
            opacity: 1;
            transform: translateY(0);
            pointer-events: auto;
        }
        .scroll-top-button:hover {
            background: rgba(236, 72, 153, 0.15);
        }
    "#;

    html! {
        <>
            <style>{css}</style>
            <button
                class={classes!("scroll-top-button", (*shown).then_some("scroll-top-shown"))}
                {onclick}
                aria-label="Torna su"
                data-cursor-hover=""
            >
                {"↑"}
            </button>
        </>
    }
}
