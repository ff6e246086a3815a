use yew::prelude::*;

use crate::config;

/// Dismissible banner pinned to the top of the page reminding visitors
/// that the venue is fictional. Renders nothing once closed.
#[function_component(DisclaimerBanner)]
pub fn disclaimer_banner() -> Html {
    let closed = use_state_eq(|| false);

    let onclick = {
        let closed = closed.clone();
        Callback::from(move |_: MouseEvent| closed.set(true))
    };

    if *closed {
        return html! {};
    }

    let css = r#"
        .disclaimer-banner {
            position: fixed;
            top: 0;
            left: 0;
            right: 0;
            z-index: 85;
            display: flex;
            align-items: center;
            justify-content: center;
            gap: 0.75rem;
            padding: 0.5rem 3rem 0.5rem 1rem;
            background: rgba(24, 24, 27, 0.95);
            border-bottom: 1px solid rgba(236, 72, 153, 0.25);
            backdrop-filter: blur(8px);
            color: #9ca3af;
            font-size: 0.8rem;
            text-align: center;
        }
        .disclaimer-banner strong {
            color: #f472b6;
        }
        .disclaimer-banner a {
            color: #4ade80;
            text-decoration: underline;
        }
        .disclaimer-close {
            position: absolute;
            right: 0.75rem;
            top: 50%;
            transform: translateY(-50%);
            width: 1.5rem;
            height: 1.5rem;
            color: #6b7280;
            transition: color 0.3s;
        }
        .disclaimer-close:hover {
            color: #fff;
        }
    "#;

    html! {
        <div class="disclaimer-banner">
            <style>{css}</style>
            <p>
                {"🎨 "}
                <strong>{"Sito Demo"}</strong>
                {" · Vuoi un design unico per il tuo locale? "}
                <a
                    href={config::CONTACT_PROFILE_URL}
                    target="_blank"
                    rel="noopener noreferrer"
                >
                    {"Contattami su Facebook"}
                </a>
            </p>
            <button
                class="disclaimer-close"
                {onclick}
                aria-label="Chiudi avviso"
                data-cursor-hover=""
            >
                {"✕"}
            </button>
        </div>
    }
}
