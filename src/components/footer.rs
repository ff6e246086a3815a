use gloo_timers::callback::Timeout;
use wasm_bindgen::JsCast;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::config;

/// Site footer: tagline, info grid, social links, the newsletter form with
/// its simulated submit, legal links and designer credit. The newsletter
/// performs no I/O; the 1 s delay and 3 s message clear mimic a roundtrip.
#[function_component(Footer)]
pub fn footer() -> Html {
    let email = use_state(String::new);
    let is_submitting = use_state_eq(|| false);
    let submit_message = use_state(|| None::<String>);
    // One slot per fake-roundtrip phase; overwriting a slot cancels the
    // stale pending timer, dropping on unmount cancels the rest.
    let submit_timer = use_mut_ref(|| None::<Timeout>);
    let clear_timer = use_mut_ref(|| None::<Timeout>);

    let on_email = {
        let email = email.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(input) = e.target().and_then(|t| t.dyn_into::<HtmlInputElement>().ok()) {
                email.set(input.value());
            }
        })
    };

    let onsubmit = {
        let email = email.clone();
        let is_submitting = is_submitting.clone();
        let submit_message = submit_message.clone();
        let submit_timer = submit_timer.clone();
        let clear_timer = clear_timer.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            is_submitting.set(true);
            let email = email.clone();
            let is_submitting = is_submitting.clone();
            let submit_message = submit_message.clone();
            let clear_timer = clear_timer.clone();
            *submit_timer.borrow_mut() = Some(Timeout::new(1_000, move || {
                submit_message.set(Some("✨ Benvenuto nell'Inner Circle!".to_string()));
                email.set(String::new());
                is_submitting.set(false);
                let submit_message = submit_message.clone();
                *clear_timer.borrow_mut() = Some(Timeout::new(3_000, move || {
                    submit_message.set(None);
                }));
            }));
        })
    };

    let css = r#"
        .footer-container {
            position: relative;
            background: #000;
            padding: 5rem 0 3rem;
            overflow: hidden;
        }
        .footer-fade-top {
            position: absolute;
            top: 0;
            left: 0;
            right: 0;
            height: 10rem;
            background: linear-gradient(to bottom, #000, rgba(0,0,0,0.7), transparent);
            pointer-events: none;
        }
        .footer-content {
            position: relative;
            z-index: 1;
            max-width: 80rem;
            margin: 0 auto;
            padding: 0 1.5rem;
            text-align: center;
        }
        .footer-title {
            font-family: "Playfair Display", Georgia, serif;
            font-size: 1.9rem;
            margin-bottom: 1rem;
        }
        .footer-tagline {
            font-family: "Caveat", cursive;
            font-size: 1.25rem;
            line-height: 2;
            letter-spacing: 0.02em;
            color: #9ca3af;
            font-style: italic;
            padding: 0.5rem 0;
        }
        .footer-info-grid {
            display: grid;
            gap: 2rem;
            margin: 3rem 0;
        }
        @media (min-width: 768px) {
            .footer-info-grid { grid-template-columns: repeat(3, 1fr); }
        }
        .footer-column-title {
            font-weight: 600;
            margin-bottom: 0.75rem;
        }
        .footer-column-text {
            color: #9ca3af;
            line-height: 1.7;
        }
        .footer-interactive {
            display: grid;
            gap: 3rem;
            margin-bottom: 3rem;
        }
        @media (min-width: 768px) {
            .footer-interactive { grid-template-columns: repeat(2, 1fr); }
        }
        .footer-social-heading,
        .footer-newsletter-heading {
            font-weight: 600;
            margin-bottom: 0.75rem;
        }
        .footer-social-links {
            display: flex;
            gap: 1.5rem;
            justify-content: center;
        }
        .footer-social-links a {
            color: #9ca3af;
            transition: color 0.3s, transform 0.3s;
            display: inline-block;
        }
        .footer-social-links a:hover {
            color: #f472b6;
            transform: scale(1.1);
        }
        .footer-newsletter-subtext {
            color: #6b7280;
            font-size: 0.9rem;
            margin-bottom: 1rem;
        }
        .footer-input-wrapper {
            display: flex;
            max-width: 24rem;
            margin: 0 auto;
            border: 1px solid rgba(55, 65, 81, 0.7);
            border-radius: 9999px;
            overflow: hidden;
            background: rgba(0, 0, 0, 0.5);
        }
        .footer-email-input {
            flex: 1;
            background: transparent;
            border: none;
            outline: none;
            color: #fff;
            font: inherit;
            padding: 0.75rem 1.25rem;
        }
        .footer-email-input::placeholder {
            color: #6b7280;
        }
        .footer-submit-button {
            padding: 0.75rem 1.5rem;
            background: linear-gradient(to right, #ec4899, #a855f7);
            color: #fff;
            font-weight: 600;
            transition: opacity 0.3s;
        }
        .footer-submit-button:disabled {
            opacity: 0.6;
        }
        .footer-submit-message {
            margin-top: 0.75rem;
            color: #4ade80;
        }
        .footer-copyright {
            border-top: 1px solid #1f2937;
            padding-top: 2rem;
            color: #9ca3af;
            font-size: 0.85rem;
        }
        .footer-legal-links {
            margin-top: 0.75rem;
            display: flex;
            gap: 0.75rem;
            justify-content: center;
            color: #6b7280;
        }
        .footer-legal-links a:hover {
            color: #d1d5db;
        }
        .footer-credit {
            margin-top: 1.5rem;
            padding-top: 1.5rem;
            border-top: 1px solid #1f2937;
        }
        .footer-credit-name {
            background: linear-gradient(to right, #f472b6, #c084fc);
            -webkit-background-clip: text;
            background-clip: text;
            color: transparent;
            font-weight: 800;
        }
        .footer-credit-note {
            color: #6b7280;
            font-size: 0.85rem;
            font-style: italic;
            margin-top: 0.5rem;
        }
    "#;

    let social = |label: &'static str| {
        html! {
            <a
                href={config::CONTACT_PROFILE_URL}
                target="_blank"
                rel="noopener noreferrer"
                aria-label={label}
            >
                {label}
            </a>
        }
    };

    html! {
        <footer class="footer-container">
            <style>{css}</style>
            <div class="footer-fade-top"></div>

            <div class="footer-content">
                <h3 class="footer-title">{"L'Underground"}</h3>
                <p class="footer-tagline">
                    {"\"Dove ogni cocktail racconta una storia, e ogni storia diventa una leggenda.\""}
                </p>

                <div class="footer-info-grid">
                    <div>
                        <h4 class="footer-column-title" style="color:#f472b6;">{"Indirizzo"}</h4>
                        <p class="footer-column-text">
                            {"Via Panisperna, 101"}<br />
                            {"Quartiere Monti, Roma 00184"}
                        </p>
                    </div>
                    <div>
                        <h4 class="footer-column-title" style="color:#4ade80;">{"Orari"}</h4>
                        <p class="footer-column-text">
                            {"Lun - Gio: 18:00 - 02:00"}<br />
                            {"Ven - Sab: 18:00 - 04:00"}
                        </p>
                    </div>
                    <div>
                        <h4 class="footer-column-title" style="color:#c084fc;">{"Contatti"}</h4>
                        <p class="footer-column-text">
                            {"+39 06 1234 5678"}<br />
                            {"info@velvetshaker.it"}
                        </p>
                    </div>
                </div>

                <div class="footer-interactive">
                    <div>
                        <h5 class="footer-social-heading">{"Connettiti Con Noi"}</h5>
                        <div class="footer-social-links">
                            { social("Instagram") }
                            { social("Facebook") }
                            { social("X") }
                            { social("TikTok") }
                        </div>
                    </div>

                    <div>
                        <h5 class="footer-newsletter-heading">{"Join the Inner Circle"}</h5>
                        <p class="footer-newsletter-subtext">
                            {"Ricevi inviti esclusivi e aggiornamenti segreti"}
                        </p>
                        <form {onsubmit}>
                            <div class="footer-input-wrapper">
                                <input
                                    type="email"
                                    class="footer-email-input"
                                    value={(*email).clone()}
                                    oninput={on_email}
                                    placeholder="la.tua@email.com"
                                    required=true
                                    disabled={*is_submitting}
                                />
                                <button
                                    type="submit"
                                    class="footer-submit-button"
                                    disabled={*is_submitting}
                                    data-cursor-hover=""
                                >
                                    { if *is_submitting { "..." } else { "Submit" } }
                                </button>
                            </div>
                            if let Some(message) = submit_message.as_ref() {
                                <p class="footer-submit-message">{message.clone()}</p>
                            }
                        </form>
                    </div>
                </div>

                <div class="footer-copyright">
                    <p>{"© 2025 L'Underground. Tutti i diritti riservati."}</p>
                    <div class="footer-legal-links">
                        <a href="#privacy">{"Privacy Policy"}</a>
                        <span>{"•"}</span>
                        <a href="#terms">{"Termini di Servizio"}</a>
                    </div>
                    <div class="footer-credit">
                        <p>
                            {"Designed by "}
                            <a
                                href={config::CONTACT_PROFILE_URL}
                                target="_blank"
                                rel="noopener noreferrer"
                                class="footer-credit-name"
                            >
                                {"Alex"}
                            </a>
                        </p>
                        <p class="footer-credit-note">
                            {"Questo è un sito dimostrativo - Contattami per il tuo progetto!"}
                        </p>
                    </div>
                </div>
            </div>
        </footer>
    }
}
