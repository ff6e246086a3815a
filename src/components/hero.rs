use gloo_timers::callback::Timeout;
use yew::prelude::*;

use crate::components::play_video;
use crate::config;
use crate::hooks::use_is_mobile;
use crate::interaction::scroll::scroll_to_section;

const HERO_VIDEO: &str = "/assets/bar-hero.mp4";
const HERO_VIDEO_VERTICAL: &str = "/assets/bar-hero-vertical.mp4";
const HERO_POSTER: &str = "/assets/bar-hero-poster.jpg";
const SMOKE_VIDEO: &str = "/assets/smoke-diffusion.mp4";

/// Full-viewport cinematic hero: looping bar footage, a one-shot smoke
/// overlay blended on top, color-grading layers, and the top navigation.
/// Narrow viewports load the vertical video variant; the orbital menu takes
/// over navigation there, so the inline nav only renders on wide viewports.
#[function_component(CinematicHero)]
pub fn cinematic_hero() -> Html {
    let is_mobile = use_is_mobile();
    let is_loaded = use_state_eq(|| false);
    let hero_video = use_node_ref();
    let smoke_video = use_node_ref();

    {
        let is_loaded = is_loaded.clone();
        let hero_video = hero_video.clone();
        let smoke_video = smoke_video.clone();
        use_effect_with_deps(
            move |_| {
                // Entrance animations start shortly after mount so the first
                // paint happens against the hidden state.
                let entrance = Timeout::new(500, move || is_loaded.set(true));
                play_video(&hero_video);
                play_video(&smoke_video);
                move || drop(entrance)
            },
            (),
        );
    }

    let nav_link = |label: &'static str, section: &'static str| {
        let onclick = Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            scroll_to_section(section);
        });
        html! {
            <a href={format!("#{}", section)} class="hero-nav-link" {onclick}>{label}</a>
        }
    };

    let css = r#"
        .cinematic-hero {
            position: relative;
            min-height: 100vh;
            display: flex;
            align-items: center;
            justify-content: center;
            overflow: hidden;
            background: #000;
        }
        .hero-layer {
            position: absolute;
            inset: 0;
        }
        .hero-layer video {
            position: absolute;
            inset: 0;
            width: 100%;
            height: 100%;
            object-fit: cover;
        }
        .hero-smoke video {
            mix-blend-mode: screen;
            opacity: 0.6;
        }
        .hero-grade {
            pointer-events: none;
            background:
                radial-gradient(circle at 15% 15%, rgba(255, 20, 147, 0.10), transparent 30%),
                radial-gradient(circle at 85% 85%, rgba(0, 255, 0, 0.08), transparent 25%);
        }
        .hero-vignette {
            pointer-events: none;
            background: radial-gradient(ellipse at center, transparent 50%, rgba(0, 0, 0, 0.75) 100%);
        }
        .hero-bottom-fade {
            position: absolute;
            left: 0;
            right: 0;
            bottom: 0;
            height: 10rem;
            background: linear-gradient(to bottom, transparent, rgba(17, 24, 39, 0.5), #111827);
            pointer-events: none;
            z-index: 4;
        }
        .hero-nav {
            position: absolute;
            top: 0;
            left: 0;
            right: 0;
            z-index: 5;
            padding: 1.5rem 2rem;
            display: flex;
            justify-content: space-between;
            align-items: center;
            max-width: 80rem;
            margin: 0 auto;
        }
        .hero-brand {
            font-family: "Playfair Display", Georgia, serif;
            font-size: 1.5rem;
            color: #ff1493;
            text-shadow: 0 0 10px #ff1493, 0 0 20px #ff1493, 0 0 30px #ff1493;
            transition: opacity 1s, transform 1s;
        }
        .hero-nav-links {
            display: flex;
            gap: 2rem;
            transition: opacity 1s, transform 1s;
            transition-delay: 0.3s;
        }
        .hero-nav-link {
            color: #fff;
            font-size: 1.1rem;
            font-weight: 500;
            text-shadow: 0 0 5px rgba(255, 255, 255, 0.8);
            transition: color 0.3s;
        }
        .hero-nav-link:hover {
            color: #4ade80;
        }
        .hero-hidden-up {
            opacity: 0;
            transform: translateY(-1rem);
        }
        .hero-shown {
            opacity: 1;
            transform: translateY(0);
        }
        .hero-scroll-hint {
            position: absolute;
            bottom: 2rem;
            left: 50%;
            transform: translateX(-50%);
            z-index: 5;
            display: flex;
            flex-direction: column;
            align-items: center;
            color: #ff1493;
            transition: opacity 1s, margin-top 1s;
            transition-delay: 1.8s;
        }
        .hero-scroll-hint span {
            font-size: 0.8rem;
            letter-spacing: 0.1em;
            margin-bottom: 0.5rem;
            text-shadow: 0 0 10px #ff1493;
        }
        .hero-scroll-mouse {
            width: 1.5rem;
            height: 2.5rem;
            border: 2px solid #ff1493;
            border-radius: 9999px;
            box-shadow: 0 0 10px #ff1493;
            display: flex;
            justify-content: center;
        }
        .hero-scroll-wheel {
            width: 0.25rem;
            height: 0.75rem;
            border-radius: 9999px;
            margin-top: 0.5rem;
            background: #ff1493;
            animation: hero-bounce 1.2s infinite;
        }
        @keyframes hero-bounce {
            0%, 100% { transform: translateY(0); }
            50% { transform: translateY(0.4rem); }
        }
        .hero-hint-hidden {
            opacity: 0;
        }
    "#;

    let loaded_class = |hidden: &'static str| {
        if *is_loaded {
            "hero-shown"
        } else {
            hidden
        }
    };

    let video_src = if is_mobile { HERO_VIDEO_VERTICAL } else { HERO_VIDEO };

    html! {
        <div class="cinematic-hero">
            <style>{css}</style>

            // Base footage loops continuously.
            <div class="hero-layer">
                <video
                    ref={hero_video}
                    key={video_src}
                    autoplay=true
                    muted=true
                    loop=true
                    playsinline=true
                    poster={HERO_POSTER}
                >
                    <source src={video_src} type="video/mp4" />
                </video>
            </div>

            // Smoke plays once; its black background disappears under
            // mix-blend-screen.
            <div class="hero-layer hero-smoke">
                <video ref={smoke_video} autoplay=true muted=true playsinline=true>
                    <source src={SMOKE_VIDEO} type="video/mp4" />
                </video>
            </div>

            <div class="hero-layer hero-grade"></div>
            <div class="hero-layer hero-vignette"></div>
            <div class="hero-bottom-fade"></div>

            <nav class="hero-nav">
                <div class={classes!("hero-brand", loaded_class("hero-hidden-up"))}>
                    {"Il Velvet Shaker"}
                </div>
                if !is_mobile {
                    <div class={classes!("hero-nav-links", loaded_class("hero-hidden-up"))}>
                        { nav_link("Storia", config::SECTION_STORY) }
                        { nav_link("Menu", config::SECTION_MENU) }
                        { nav_link("Prenota", config::SECTION_RESERVE) }
                    </div>
                }
            </nav>

            <div class={classes!("hero-scroll-hint", loaded_class("hero-hint-hidden"))}>
                <span>{"Scorri per esplorare"}</span>
                <div class="hero-scroll-mouse">
                    <div class="hero-scroll-wheel"></div>
                </div>
            </div>
        </div>
    }
}
