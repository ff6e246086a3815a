use yew::prelude::*;

use crate::config;
use crate::hooks::use_reveal;

/// Where to find us: address and hours, the dark-themed map embed, and the
/// contact column. The map iframe is read-only and re-themed with CSS
/// filters; the social links all resolve to the single external profile.
#[function_component(RendezvousPoint)]
pub fn rendezvous_point() -> Html {
    let section = use_node_ref();
    let revealed = use_reveal(section.clone(), 0.3);

    let css = r#"
        .rendezvous {
            position: relative;
            background: linear-gradient(to bottom, #000, #111827, #000);
            padding: 5rem 0 8rem;
        }
        .rendezvous-texture {
            position: absolute;
            inset: 0;
            opacity: 0.05;
            background-image:
                linear-gradient(rgba(255, 20, 147, 0.1) 1px, transparent 1px),
                linear-gradient(90deg, rgba(0, 255, 0, 0.1) 1px, transparent 1px);
            background-size: 50px 50px;
            pointer-events: none;
        }
        .rendezvous-content {
            position: relative;
            z-index: 2;
            max-width: 80rem;
            margin: 0 auto;
            padding: 0 1.5rem;
            opacity: 0;
            transform: translateY(2.5rem);
            transition: opacity 0.8s cubic-bezier(0.22, 1, 0.36, 1),
                        transform 0.8s cubic-bezier(0.22, 1, 0.36, 1);
        }
        .rendezvous-revealed .rendezvous-content {
            opacity: 1;
            transform: translateY(0);
        }
        .rendezvous-item {
            opacity: 0;
            transform: translateY(1.25rem);
            transition: opacity 0.6s cubic-bezier(0.22, 1, 0.36, 1),
                        transform 0.6s cubic-bezier(0.22, 1, 0.36, 1);
        }
        .rendezvous-revealed .rendezvous-item {
            opacity: 1;
            transform: translateY(0);
        }
        .rendezvous-header {
            text-align: center;
            margin-bottom: 4rem;
        }
        .rendezvous-kicker {
            font-family: "Caveat", cursive;
            font-size: 1.1rem;
            letter-spacing: 0.1em;
            line-height: 2;
            text-transform: uppercase;
            color: #ff1493;
            font-weight: 300;
            margin-bottom: 1rem;
        }
        .rendezvous-title {
            font-family: "Playfair Display", Georgia, serif;
            font-size: clamp(2.5rem, 5vw, 3.75rem);
            margin-bottom: 1rem;
        }
        .rendezvous-subtitle {
            font-size: 1.1rem;
            color: #9ca3af;
            max-width: 42rem;
            margin: 0 auto;
        }
        .rendezvous-grid {
            display: grid;
            gap: 3rem;
            align-items: start;
            text-align: center;
        }
        @media (min-width: 768px) {
            .rendezvous-grid {
                grid-template-columns: repeat(3, 1fr);
                text-align: left;
            }
            .rendezvous-contact-col {
                text-align: right;
            }
        }
        .rendezvous-col-title {
            font-family: "Playfair Display", Georgia, serif;
            font-size: 1.5rem;
            margin-bottom: 1rem;
        }
        .rendezvous-address p,
        .rendezvous-hours p {
            color: #9ca3af;
            line-height: 1.7;
        }
        .rendezvous-hours {
            margin-top: 1rem;
            padding-top: 1rem;
            border-top: 1px solid #374151;
            font-size: 0.9rem;
        }
        .rendezvous-hours span {
            color: #ff1493;
            font-weight: 500;
        }
        .rendezvous-map-frame {
            position: relative;
            aspect-ratio: 16 / 9;
            border: 1px solid #374151;
            border-radius: 0.5rem;
            overflow: hidden;
            box-shadow: 0 10px 25px rgba(0, 0, 0, 0.5);
            transition: box-shadow 0.3s;
        }
        .rendezvous-map-frame:hover {
            box-shadow: 0 20px 40px rgba(0, 0, 0, 0.7);
        }
        .rendezvous-map-frame iframe {
            width: 100%;
            height: 100%;
            border: 0;
            filter: invert(1) hue-rotate(180deg) contrast(0.95) brightness(0.9);
        }
        .rendezvous-map-shade {
            position: absolute;
            inset: 0;
            pointer-events: none;
            background: linear-gradient(to top, rgba(0, 0, 0, 0.2), transparent);
        }
        .rendezvous-map-caption {
            text-align: center;
            font-size: 0.75rem;
            color: #6b7280;
            margin-top: 0.75rem;
            font-style: italic;
        }
        .rendezvous-contact p.hint {
            color: #6b7280;
            font-size: 0.85rem;
            margin-bottom: 0.25rem;
        }
        .rendezvous-contact a {
            color: #d1d5db;
            transition: color 0.3s;
        }
        .rendezvous-contact a:hover {
            color: #ff1493;
        }
        .rendezvous-contact-block {
            margin-bottom: 0.75rem;
        }
        .rendezvous-social {
            margin-top: 1rem;
            padding-top: 1rem;
            border-top: 1px solid #374151;
        }
        .rendezvous-social-links {
            display: flex;
            gap: 1rem;
            justify-content: center;
        }
        @media (min-width: 768px) {
            .rendezvous-social-links {
                justify-content: flex-end;
            }
        }
        .rendezvous-social-links a {
            color: #9ca3af;
            font-size: 0.95rem;
        }
        .rendezvous-social-links a:hover {
            color: #4ade80;
        }
        .rendezvous-divider {
            margin-top: 4rem;
            padding-top: 2rem;
            border-top: 1px solid #1f2937;
            text-align: center;
            color: #6b7280;
            font-size: 0.85rem;
        }
        .rendezvous-divider span {
            color: #ff1493;
        }
    "#;

    let social_link = |label: &'static str| {
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

    let delay = |i: usize| format!("transition-delay: {}ms;", 200 + i * 200);

    html! {
        <section
            ref={section}
            id={config::SECTION_LOCATION}
            class={classes!("rendezvous", revealed.then_some("rendezvous-revealed"))}
        >
            <style>{css}</style>
            <div class="rendezvous-texture"></div>

            <div class="rendezvous-content">
                <div class="rendezvous-item rendezvous-header" style={delay(0)}>
                    <div class="rendezvous-kicker">{"Il Punto d'Incontro"}</div>
                    <h2 class="rendezvous-title">{"Dove Trovarci"}</h2>
                    <p class="rendezvous-subtitle">
                        {"Nel cuore pulsante di Roma, dove l'ombra incontra la luce"}
                    </p>
                </div>

                <div class="rendezvous-grid">
                    <div class="rendezvous-item" style={delay(1)}>
                        <h4 class="rendezvous-col-title" style="color:#f472b6;">
                            {"Indirizzo & Orari"}
                        </h4>
                        <div class="rendezvous-address">
                            <p>
                                {"Via Panisperna, 101"}<br />
                                {"00184 Roma RM"}<br />
                                {"Quartiere Monti"}
                            </p>
                        </div>
                        <div class="rendezvous-hours">
                            <p><span>{"Lun - Gio:"}</span>{" 18:00 - 02:00"}</p>
                            <p><span>{"Ven - Sab:"}</span>{" 18:00 - 04:00"}</p>
                            <p><span>{"Domenica:"}</span>{" Chiuso"}</p>
                        </div>
                    </div>

                    <div class="rendezvous-item" style={delay(2)}>
                        <div class="rendezvous-map-frame">
                            <iframe
                                src={config::MAP_EMBED_URL}
                                loading="lazy"
                                referrerpolicy="no-referrer-when-downgrade"
                                title="Velvet Shaker Location"
                            />
                            <div class="rendezvous-map-shade"></div>
                        </div>
                        <p class="rendezvous-map-caption">{"Quartiere Monti - Centro Storico"}</p>
                    </div>

                    <div class="rendezvous-item rendezvous-contact-col rendezvous-contact" style={delay(3)}>
                        <h4 class="rendezvous-col-title" style="color:#4ade80;">{"Contatti"}</h4>
                        <div class="rendezvous-contact-block">
                            <p class="hint">{"Telefono"}</p>
                            <a href="tel:+390612345678">{"+39 06 1234 5678"}</a>
                        </div>
                        <div class="rendezvous-contact-block">
                            <p class="hint">{"Email"}</p>
                            <a href="mailto:info@velvetshaker.it">{"info@velvetshaker.it"}</a>
                        </div>
                        <div class="rendezvous-social">
                            <p class="hint">{"Social"}</p>
                            <div class="rendezvous-social-links">
                                { social_link("Instagram") }
                                { social_link("Facebook") }
                            </div>
                        </div>
                    </div>
                </div>

                <div class="rendezvous-item rendezvous-divider" style={delay(4)}>
                    <p>
                        <span>{"⚡"}</span>
                        {" Accesso riservato ai maggiori di 18 anni "}
                        <span>{"⚡"}</span>
                    </p>
                </div>
            </div>
        </section>
    }
}
