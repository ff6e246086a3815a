use serde::Serialize;
use wasm_bindgen::JsCast;
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::config;
use crate::hooks::use_reveal;

/// Payload of a reservation submit. Nothing leaves the browser: the form is
/// a local-only acknowledgment, and this struct is the extension point
/// where a real booking call would slot in.
#[derive(Serialize)]
struct ReservationRequest {
    name: String,
    email: String,
    phone: String,
    date: String,
    time: String,
    guests: String,
    requests: String,
}

const TIME_SLOTS: [&str; 6] = ["18:00", "19:00", "20:00", "21:00", "22:00", "23:00"];
const GUEST_CHOICES: [(&str, &str); 6] = [
    ("1", "1 Ospite"),
    ("2", "2 Ospiti"),
    ("3", "3 Ospiti"),
    ("4", "4 Ospiti"),
    ("5", "5 Ospiti"),
    ("6+", "6+ Ospiti"),
];

/// Chapter three: the reservation form. Required fields rely on HTML
/// semantics only; submit logs the serialized payload and shows a local
/// confirmation.
#[function_component(LegendBegins)]
pub fn legend_begins() -> Html {
    let section = use_node_ref();
    let revealed = use_reveal(section.clone(), 0.2);

    let name = use_state(String::new);
    let email = use_state(String::new);
    let phone = use_state(String::new);
    let date = use_state(String::new);
    let time = use_state(String::new);
    let guests = use_state(String::new);
    let requests = use_state(String::new);
    let confirmation = use_state(|| None::<String>);

    fn input_handler(state: UseStateHandle<String>) -> Callback<InputEvent> {
        Callback::from(move |e: InputEvent| {
            if let Some(input) = e.target().and_then(|t| t.dyn_into::<HtmlInputElement>().ok()) {
                state.set(input.value());
            }
        })
    }

    fn select_handler(state: UseStateHandle<String>) -> Callback<Event> {
        Callback::from(move |e: Event| {
            if let Some(select) = e.target().and_then(|t| t.dyn_into::<HtmlSelectElement>().ok())
            {
                state.set(select.value());
            }
        })
    }

    let on_requests = {
        let requests = requests.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(area) = e
                .target()
                .and_then(|t| t.dyn_into::<HtmlTextAreaElement>().ok())
            {
                requests.set(area.value());
            }
        })
    };

    let onsubmit = {
        let name = name.clone();
        let email = email.clone();
        let phone = phone.clone();
        let date = date.clone();
        let time = time.clone();
        let guests = guests.clone();
        let requests = requests.clone();
        let confirmation = confirmation.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let payload = ReservationRequest {
                name: (*name).clone(),
                email: (*email).clone(),
                phone: (*phone).clone(),
                date: (*date).clone(),
                time: (*time).clone(),
                guests: (*guests).clone(),
                requests: (*requests).clone(),
            };
            match serde_json::to_string(&payload) {
                Ok(json) => gloo_console::log!("reservation request:", json),
                Err(err) => gloo_console::log!("reservation serialize failed:", err.to_string()),
            }
            confirmation.set(Some(
                "La tua leggenda inizia! Ti contatteremo entro 24 ore per confermare la tua \
                 prenotazione."
                    .to_string(),
            ));
        })
    };

    let css = r#"
        .legend-begins {
            position: relative;
            min-height: 100vh;
            background: linear-gradient(to bottom, #000, #111827, #000);
            padding: 5rem 0;
        }
        .reserve-top-fade {
            position: absolute;
            top: 0;
            left: 0;
            right: 0;
            height: 10rem;
            background: linear-gradient(to bottom, #000, rgba(0,0,0,0.7), transparent);
            z-index: 2;
            pointer-events: none;
        }
        .reserve-glow {
            position: absolute;
            border-radius: 9999px;
            filter: blur(64px);
            animation: reserve-breathe 4s ease-in-out infinite alternate;
            pointer-events: none;
        }
        .reserve-glow-pink {
            top: 25%;
            left: 25%;
            width: 24rem;
            height: 24rem;
            background: radial-gradient(circle, rgba(236, 72, 153, 0.05), transparent 70%);
        }
        .reserve-glow-green {
            bottom: 25%;
            right: 25%;
            width: 20rem;
            height: 20rem;
            background: radial-gradient(circle, rgba(74, 222, 128, 0.05), transparent 70%);
            animation-delay: 2s;
        }
        @keyframes reserve-breathe {
            from { opacity: 0.6; }
            to { opacity: 1; }
        }
        .reserve-content {
            position: relative;
            z-index: 3;
            max-width: 80rem;
            margin: 0 auto;
            padding: 0 1.5rem;
        }
        .reserve-reveal {
            opacity: 0;
            transform: translateY(2rem);
            transition: opacity 1s, transform 1s;
        }
        .reserve-revealed .reserve-reveal {
            opacity: 1;
            transform: translateY(0);
        }
        .reserve-header {
            text-align: center;
            margin-bottom: 5rem;
        }
        .reserve-kicker {
            font-size: 0.85rem;
            letter-spacing: 0.2em;
            text-transform: uppercase;
            color: #c084fc;
            font-weight: 300;
            margin-bottom: 1rem;
        }
        .reserve-title {
            font-family: "Playfair Display", Georgia, serif;
            font-size: clamp(2.5rem, 6vw, 4.5rem);
            line-height: 1.1;
            margin-bottom: 1.5rem;
        }
        .reserve-title-accent {
            background: linear-gradient(to right, #c084fc, #f472b6, #4ade80);
            -webkit-background-clip: text;
            background-clip: text;
            color: transparent;
            text-shadow: 0 0 30px rgba(147, 51, 234, 0.5);
        }
        .reserve-subtitle {
            font-size: 1.25rem;
            color: #9ca3af;
            max-width: 48rem;
            margin: 0 auto;
        }
        .reserve-form {
            max-width: 56rem;
            margin: 0 auto;
            display: flex;
            flex-direction: column;
            gap: 2rem;
        }
        .reserve-row-2 {
            display: grid;
            gap: 1.5rem;
            transition-delay: 0.3s;
        }
        .reserve-row-3 {
            display: grid;
            gap: 1.5rem;
            transition-delay: 0.5s;
        }
        @media (min-width: 768px) {
            .reserve-row-2 { grid-template-columns: repeat(2, 1fr); }
            .reserve-row-3 { grid-template-columns: repeat(3, 1fr); }
        }
        .reserve-field label {
            display: block;
            font-size: 0.85rem;
            font-weight: 500;
            letter-spacing: 0.05em;
            text-transform: uppercase;
            margin-bottom: 0.5rem;
        }
        .reserve-field input,
        .reserve-field select,
        .reserve-field textarea {
            width: 100%;
            background: rgba(0, 0, 0, 0.5);
            backdrop-filter: blur(4px);
            border: 1px solid rgba(55, 65, 81, 0.5);
            border-radius: 0.75rem;
            padding: 1rem;
            color: #fff;
            font: inherit;
            outline: none;
            transition: border-color 0.3s, box-shadow 0.3s;
        }
        .reserve-field ::placeholder {
            color: #6b7280;
        }
        .reserve-field textarea {
            resize: none;
        }
        .field-pink label { color: #f472b6; }
        .field-pink :focus { border-color: #f472b6; box-shadow: 0 0 20px rgba(255, 20, 147, 0.2); }
        .field-green label { color: #4ade80; }
        .field-green :focus { border-color: #4ade80; box-shadow: 0 0 20px rgba(0, 255, 0, 0.2); }
        .field-purple label { color: #c084fc; }
        .field-purple :focus { border-color: #c084fc; box-shadow: 0 0 20px rgba(147, 51, 234, 0.2); }
        .field-cyan label { color: #22d3ee; }
        .field-cyan :focus { border-color: #22d3ee; box-shadow: 0 0 20px rgba(34, 211, 238, 0.2); }
        .field-orange label { color: #fb923c; }
        .field-orange :focus { border-color: #fb923c; box-shadow: 0 0 20px rgba(251, 146, 60, 0.2); }
        .field-yellow label { color: #facc15; }
        .field-yellow :focus { border-color: #facc15; box-shadow: 0 0 20px rgba(250, 204, 21, 0.2); }
        .reserve-phone { transition-delay: 0.4s; }
        .reserve-requests { transition-delay: 0.6s; }
        .reserve-submit-row {
            text-align: center;
            padding-top: 2rem;
            transition-delay: 0.7s;
        }
        .reserve-submit {
            padding: 1rem 3rem;
            background: linear-gradient(to right, rgba(236, 72, 153, 0.2), rgba(168, 85, 247, 0.2), rgba(34, 197, 94, 0.2));
            backdrop-filter: blur(4px);
            border: 2px solid rgba(244, 114, 182, 0.5);
            border-radius: 9999px;
            color: #fff;
            font-weight: 700;
            font-size: 1.25rem;
            text-shadow: 0 0 20px rgba(255, 20, 147, 0.5);
            display: inline-flex;
            align-items: center;
            gap: 0.75rem;
            transition: transform 0.3s, border-color 0.3s;
        }
        .reserve-submit:hover {
            transform: scale(1.05);
            border-color: #f472b6;
        }
        .reserve-confirmation {
            text-align: center;
            color: #4ade80;
            font-size: 1.1rem;
            text-shadow: 0 0 10px rgba(0, 255, 0, 0.4);
        }
    "#;

    html! {
        <section
            ref={section}
            id={config::SECTION_RESERVE}
            class={classes!("legend-begins", revealed.then_some("reserve-revealed"))}
        >
            <style>{css}</style>
            <div class="reserve-top-fade"></div>
            <div class="reserve-glow reserve-glow-pink"></div>
            <div class="reserve-glow reserve-glow-green"></div>

            <div class="reserve-content">
                <div class="reserve-reveal reserve-header">
                    <div class="reserve-kicker">{"Capitolo Tre"}</div>
                    <h2 class="reserve-title">
                        <span>{"La Tua Leggenda"}</span>
                        <br />
                        <span class="reserve-title-accent">{"Inizia"}</span>
                    </h2>
                    <p class="reserve-subtitle">
                        {"Entra nell'underground. Prenota il tuo posto al bar dove nascono le storie."}
                    </p>
                </div>

                <form class="reserve-form" {onsubmit}>
                    <div class="reserve-reveal reserve-row-2">
                        <div class="reserve-field field-pink">
                            <label for="reserve-name">{"Nome *"}</label>
                            <input
                                id="reserve-name"
                                type="text"
                                required=true
                                value={(*name).clone()}
                                oninput={input_handler(name.clone())}
                                placeholder="Inserisci il tuo nome"
                            />
                        </div>
                        <div class="reserve-field field-green">
                            <label for="reserve-email">{"Email *"}</label>
                            <input
                                id="reserve-email"
                                type="email"
                                required=true
                                value={(*email).clone()}
                                oninput={input_handler(email.clone())}
                                placeholder="tua@email.com"
                            />
                        </div>
                    </div>

                    <div class="reserve-reveal reserve-phone reserve-field field-purple">
                        <label for="reserve-phone">{"Telefono"}</label>
                        <input
                            id="reserve-phone"
                            type="tel"
                            value={(*phone).clone()}
                            oninput={input_handler(phone.clone())}
                            placeholder="(+39) 123-456-7890"
                        />
                    </div>

                    <div class="reserve-reveal reserve-row-3">
                        <div class="reserve-field field-cyan">
                            <label for="reserve-date">{"Data *"}</label>
                            <input
                                id="reserve-date"
                                type="date"
                                required=true
                                value={(*date).clone()}
                                oninput={input_handler(date.clone())}
                            />
                        </div>
                        <div class="reserve-field field-orange">
                            <label for="reserve-time">{"Orario *"}</label>
                            <select
                                id="reserve-time"
                                required=true
                                onchange={select_handler(time.clone())}
                            >
                                <option value="" selected={time.is_empty()}>
                                    {"Seleziona orario"}
                                </option>
                                { for TIME_SLOTS.iter().map(|slot| html! {
                                    <option value={*slot} selected={*slot == time.as_str()}>{*slot}</option>
                                }) }
                            </select>
                        </div>
                        <div class="reserve-field field-yellow">
                            <label for="reserve-guests">{"Ospiti *"}</label>
                            <select
                                id="reserve-guests"
                                required=true
                                onchange={select_handler(guests.clone())}
                            >
                                <option value="" selected={guests.is_empty()}>
                                    {"Numero di persone"}
                                </option>
                                { for GUEST_CHOICES.iter().map(|(value, label)| html! {
                                    <option value={*value} selected={*value == guests.as_str()}>{*label}</option>
                                }) }
                            </select>
                        </div>
                    </div>

                    <div class="reserve-reveal reserve-requests reserve-field field-pink">
                        <label for="reserve-requests">{"Richieste Speciali"}</label>
                        <textarea
                            id="reserve-requests"
                            rows="4"
                            value={(*requests).clone()}
                            oninput={on_requests}
                            placeholder="Occasioni speciali, restrizioni alimentari, preferenze per i posti..."
                        />
                    </div>

                    if let Some(message) = confirmation.as_ref() {
                        <p class="reserve-confirmation">{message.clone()}</p>
                    }

                    <div class="reserve-reveal reserve-submit-row">
                        <button type="submit" class="reserve-submit" data-cursor-hover="">
                            {"Entra nell'Underground"}
                            <span aria-hidden="true">{"→"}</span>
                        </button>
                    </div>
                </form>
            </div>
        </section>
    }
}
