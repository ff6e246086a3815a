use yew::prelude::*;

use crate::config;
use crate::interaction::scroll::scroll_to_section;

const MENU_LINKS: [(&str, &str, &str); 5] = [
    ("Storia", "📖", config::SECTION_STORY),
    ("Gallery", "📸", config::SECTION_GALLERY),
    ("Menu", "🍸", config::SECTION_MENU),
    ("Dove Trovarci", "📍", config::SECTION_LOCATION),
    ("Prenota", "🥂", config::SECTION_RESERVE),
];

/// Floating navigation orb for narrow viewports. Tapping it fans out one
/// button per section; picking one collapses the menu and smooth-scrolls
/// to the target.
#[function_component(OrbitalMenu)]
pub fn orbital_menu() -> Html {
    let open = use_state_eq(|| false);

    let toggle = {
        let open = open.clone();
        Callback::from(move |_: MouseEvent| open.set(!*open))
    };

    let close = {
        let open = open.clone();
        Callback::from(move |_: MouseEvent| open.set(false))
    };

    let link = |index: usize, label: &'static str, icon: &'static str, target: &'static str| {
        let open = open.clone();
        let onclick = Callback::from(move |_: MouseEvent| {
            open.set(false);
            scroll_to_section(target);
        });
        // Expansion staggers outward from the orb; collapse reverses it.
        let delay = format!("transition-delay: {}ms;", index * 50);
        html! {
            <button
                key={label}
                class="orbital-link"
                style={delay}
                {onclick}
                data-cursor-hover=""
            >
                <span class="orbital-link-icon">{icon}</span>
                <span class="orbital-link-label">{label}</span>
            </button>
        }
    };

    let css = r#"
        .orbital-root {
            position: fixed;
            bottom: 1.5rem;
            right: 1.5rem;
            z-index: 80;
        }
        .orbital-backdrop {
            position: fixed;
            inset: 0;
            background: rgba(0, 0, 0, 0.6);
            backdrop-filter: blur(4px);
            opacity: 0;
            pointer-events: none;
            transition: opacity 0.3s;
        }
        .orbital-root.orbital-open .orbital-backdrop {
            opacity: 1;
            pointer-events: auto;
        }
        .orbital-links {
            position: absolute;
            bottom: 4.5rem;
            right: 0;
            display: flex;
            flex-direction: column;
            align-items: flex-end;
            gap: 0.75rem;
        }
        .orbital-link {
            display: flex;
            align-items: center;
            gap: 0.6rem;
            padding: 0.6rem 1.1rem;
            border-radius: 9999px;
            border: 1px solid rgba(236, 72, 153, 0.3);
            background: rgba(24, 24, 27, 0.95);
            color: #e5e7eb;
            font-size: 0.9rem;
            white-space: nowrap;
            opacity: 0;
            transform: translateY(0.75rem) scale(0.9);
            pointer-events: none;
            transition: opacity 0.3s, transform 0.3s;
        }
        .orbital-root.orbital-open .orbital-link {
            opacity: 1;
            transform: translateY(0) scale(1);
            pointer-events: auto;
        }
        .orbital-link-icon {
            font-size: 1.1rem;
        }
        .orbital-toggle {
            position: relative;
            width: 3.5rem;
            height: 3.5rem;
            border-radius: 50%;
            background: linear-gradient(to bottom right, #ec4899, #a855f7);
            color: #fff;
            font-size: 1.4rem;
            box-shadow: 0 10px 30px rgba(236, 72, 153, 0.4);
            transition: transform 0.3s cubic-bezier(0.34, 1.56, 0.64, 1);
        }
        .orbital-root.orbital-open .orbital-toggle {
            transform: rotate(45deg);
        }
    "#;

    html! {
        <div class={classes!("orbital-root", (*open).then_some("orbital-open"))}>
            <style>{css}</style>
            <div class="orbital-backdrop" onclick={close}></div>
            <div class="orbital-links">
                { for MENU_LINKS
                    .iter()
                    .enumerate()
                    .map(|(i, (label, icon, target))| link(i, label, icon, target)) }
            </div>
            <button
                class="orbital-toggle"
                onclick={toggle}
                aria-label="Menu di navigazione"
                data-cursor-hover=""
            >
                {"✦"}
            </button>
        </div>
    }
}
