use yew::prelude::*;

use crate::components::play_video;
use crate::config;
use crate::hooks::use_reveal;
use crate::interaction::scroll::scroll_to_section;

/// Chapter one: story text over a looping pour video. The whole section
/// reveals through one latch; the text column staggers in via per-item
/// transition delays, and the video only starts once the section is on
/// screen.
#[function_component(CinematicStory)]
pub fn cinematic_story() -> Html {
    let section = use_node_ref();
    let video = use_node_ref();
    let revealed = use_reveal(section.clone(), 0.3);

    {
        let video = video.clone();
        use_effect_with_deps(
            move |revealed| {
                if *revealed {
                    play_video(&video);
                }
                || ()
            },
            revealed,
        );
    }

    let on_explore = Callback::from(|e: MouseEvent| {
        e.prevent_default();
        scroll_to_section(config::SECTION_MENU);
    });

    let css = r#"
        .cinematic-story {
            position: relative;
            min-height: 100vh;
            background: linear-gradient(to bottom, #111827, #111827, #000);
            display: flex;
            align-items: center;
            overflow: hidden;
        }
        .story-top-fade {
            position: absolute;
            top: 0;
            left: 0;
            right: 0;
            height: 10rem;
            background: linear-gradient(to bottom, #111827, rgba(17, 24, 39, 0.7), transparent);
            z-index: 2;
            pointer-events: none;
        }
        .story-video {
            position: absolute;
            inset: 0;
            overflow: hidden;
        }
        .story-video video {
            position: absolute;
            inset: 0;
            width: 100%;
            height: 100%;
            object-fit: cover;
        }
        .story-video-shade {
            position: absolute;
            inset: 0;
            background:
                linear-gradient(to right, rgba(0,0,0,0.7), rgba(0,0,0,0.4), rgba(0,0,0,0.7)),
                linear-gradient(to bottom, transparent, rgba(0,0,0,0.2), rgba(0,0,0,0.6));
        }
        .story-grid {
            position: relative;
            z-index: 3;
            display: grid;
            gap: 4rem;
            align-items: center;
            min-height: 100vh;
            padding: 5rem 1.5rem;
            max-width: 80rem;
            margin: 0 auto;
        }
        @media (min-width: 1024px) {
            .story-grid {
                grid-template-columns: 1fr 1fr;
                gap: 6rem;
                padding: 5rem 2rem;
            }
        }
        .story-item {
            opacity: 0;
            transform: translateY(1.5rem);
            transition: opacity 0.8s cubic-bezier(0.25, 0.1, 0.25, 1),
                        transform 0.8s cubic-bezier(0.25, 0.1, 0.25, 1);
        }
        .story-revealed .story-item {
            opacity: 1;
            transform: translateY(0);
        }
        .story-kicker {
            font-size: 0.85rem;
            letter-spacing: 0.2em;
            text-transform: uppercase;
            color: #f472b6;
            font-weight: 300;
            margin-bottom: 1rem;
        }
        .story-title {
            font-family: "Playfair Display", Georgia, serif;
            font-size: clamp(2.5rem, 5vw, 3.75rem);
            line-height: 1.1;
            margin-bottom: 2rem;
        }
        .story-title-accent {
            display: block;
            background: linear-gradient(to right, #f472b6, #c084fc, #4ade80);
            -webkit-background-clip: text;
            background-clip: text;
            color: transparent;
            text-shadow: 0 0 30px rgba(255, 20, 147, 0.5);
        }
        .story-paragraphs p {
            color: #d1d5db;
            font-size: 1.15rem;
            line-height: 1.7;
            margin-bottom: 1.5rem;
        }
        .story-liquid {
            color: #f472b6;
            font-weight: 500;
            display: inline-block;
            background-image: linear-gradient(90deg, #f472b6, #ec4899, #db2777, #ec4899, #f472b6);
            background-size: 200% auto;
            -webkit-background-clip: text;
            background-clip: text;
            animation: story-liquid-flow 3s ease-in-out 2.5s infinite alternate;
        }
        @keyframes story-liquid-flow {
            from { background-position: 0% 50%; }
            to { background-position: 100% 50%; }
        }
        .story-pulse {
            color: #4ade80;
            font-weight: 500;
            display: inline-block;
            animation: story-pulse-glow 2.5s ease-in-out 2.5s infinite alternate;
        }
        @keyframes story-pulse-glow {
            0% { transform: scale(1); text-shadow: 0 0 8px rgba(0, 255, 0, 0.4); }
            50% { transform: scale(1.05); text-shadow: 0 0 16px rgba(0, 255, 0, 0.7); }
            100% { transform: scale(1); text-shadow: 0 0 8px rgba(0, 255, 0, 0.4); }
        }
        .story-transcendent {
            color: #c084fc;
            font-weight: 500;
            display: inline-block;
            animation: story-fade-breathe 2s ease-in-out 2.5s infinite alternate;
        }
        @keyframes story-fade-breathe {
            from { opacity: 1; }
            to { opacity: 0.7; }
        }
        .story-cta {
            margin-top: 2rem;
            padding: 1rem 2rem;
            background: linear-gradient(to right, rgba(236, 72, 153, 0.2), rgba(168, 85, 247, 0.2));
            backdrop-filter: blur(4px);
            border: 1px solid rgba(244, 114, 182, 0.5);
            border-radius: 9999px;
            color: #f472b6;
            font-weight: 500;
            display: inline-flex;
            align-items: center;
            gap: 0.5rem;
            transition: transform 0.3s, border-color 0.3s, background 0.3s;
        }
        .story-cta:hover {
            transform: scale(1.05);
            border-color: #f472b6;
            background: rgba(236, 72, 153, 0.1);
        }
        .story-focus {
            opacity: 0;
            transform: translateX(3rem) scale(0.95);
            transition: opacity 1.2s ease-out, transform 1.2s ease-out;
        }
        .story-revealed .story-focus {
            opacity: 1;
            transform: translateX(0) scale(1);
        }
        .story-focus-glow {
            position: absolute;
            inset: -1rem;
            background: linear-gradient(to bottom right, rgba(236, 72, 153, 0.2), rgba(168, 85, 247, 0.1), rgba(34, 197, 94, 0.2));
            border-radius: 1rem;
            filter: blur(24px);
        }
        .story-focus-card {
            position: relative;
            background: rgba(0, 0, 0, 0.2);
            backdrop-filter: blur(4px);
            border-radius: 1rem;
            padding: 3rem;
            text-align: center;
        }
        .story-focus-card h3 {
            font-family: "Playfair Display", Georgia, serif;
            font-size: 1.8rem;
            margin-bottom: 1.5rem;
        }
        .story-focus-card > p {
            color: #9ca3af;
            line-height: 1.7;
        }
        .story-stats {
            display: grid;
            grid-template-columns: repeat(3, 1fr);
            gap: 1.5rem;
            margin-top: 1.5rem;
            padding-top: 1.5rem;
            border-top: 1px solid rgba(236, 72, 153, 0.2);
        }
        .story-stat-value {
            font-size: 1.5rem;
            font-weight: 700;
        }
        .story-stat-label {
            font-size: 0.7rem;
            color: #6b7280;
            text-transform: uppercase;
            letter-spacing: 0.05em;
        }
        .story-bottom-fade {
            position: absolute;
            bottom: 0;
            left: 0;
            right: 0;
            height: 10rem;
            background: linear-gradient(to bottom, transparent, rgba(0,0,0,0.5), #000);
            z-index: 4;
            pointer-events: none;
        }
    "#;

    // Sequential reveal: each item waits a little longer than the previous.
    let delay = |i: usize| format!("transition-delay: {}ms;", 100 + i * 150);

    html! {
        <section
            ref={section}
            id={config::SECTION_STORY}
            class={classes!("cinematic-story", revealed.then_some("story-revealed"))}
        >
            <style>{css}</style>
            <div class="story-top-fade"></div>

            <div class="story-video">
                <video ref={video} muted=true loop=true playsinline=true>
                    <source src="/assets/spinning-cocktail.mp4" type="video/mp4" />
                </video>
                <div class="story-video-shade"></div>
            </div>

            <div class="story-grid">
                <div>
                    <div class="story-item story-kicker" style={delay(0)}>{"Capitolo Uno"}</div>
                    <h2 class="story-title">
                        <span class="story-item" style={delay(1)}>{"L'Arte della"}</span>
                        <span class="story-item story-title-accent" style={delay(2)}>{"Poesia Liquida"}</span>
                    </h2>
                    <div class="story-paragraphs">
                        <p class="story-item" style={delay(3)}>
                            {"Nelle profondità dell'underground cittadino, dove il neon sanguina \
                              attraverso mattoni e malta, abbiamo scoperto qualcosa di straordinario. \
                              Non solo un bar, ma un santuario dove "}
                            <span class="story-liquid">{"l'arte liquida"}</span>
                            {" trascende l'ordinario."}
                        </p>
                        <p class="story-item" style={delay(4)}>
                            {"Ogni cocktail nasce come una visione, un'armonia di sapori che racconta \
                              una storia più antica del tempo stesso. I nostri mixologist non versano \
                              semplicemente drink; loro "}
                            <span class="story-pulse">{"coreografano esperienze"}</span>
                            {" che risvegliano sensi dormienti."}
                        </p>
                        <p class="story-item" style={delay(5)}>
                            {"Osserva il rituale dispiegarsi. La misura precisa. Il mescolare \
                              deliberato. Il momento in cui elementi separati diventano qualcosa di "}
                            <span class="story-transcendent">{"trascendente"}</span>
                            {". Qui è dove inizia la tua storia."}
                        </p>
                    </div>
                    <div class="story-item" style={delay(6)}>
                        <button class="story-cta" onclick={on_explore} data-cursor-hover="">
                            {"Esplora la Nostra Arte"}
                            <span aria-hidden="true">{"→"}</span>
                        </button>
                    </div>
                </div>

                <div class="story-focus">
                    <div class="story-focus-glow"></div>
                    <div class="story-focus-card">
                        <h3>{"Ogni Goccia Conta"}</h3>
                        <p>
                            {"La precisione incontra la passione in ogni versata. Dietro il vetro, \
                              assistere alla meditazione della mixology."}
                        </p>
                        <div class="story-stats">
                            <div>
                                <div class="story-stat-value" style="color:#f472b6;">{"15+"}</div>
                                <div class="story-stat-label">{"Anni di Esperienza"}</div>
                            </div>
                            <div>
                                <div class="story-stat-value" style="color:#c084fc;">{"50+"}</div>
                                <div class="story-stat-label">{"Cocktail Signature"}</div>
                            </div>
                            <div>
                                <div class="story-stat-value" style="color:#4ade80;">{"∞"}</div>
                                <div class="story-stat-label">{"Storie Create"}</div>
                            </div>
                        </div>
                    </div>
                </div>
            </div>

            <div class="story-bottom-fade"></div>
        </section>
    }
}
