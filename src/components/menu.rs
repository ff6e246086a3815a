use web_sys::HtmlElement;
use yew::prelude::*;

use crate::config;
use crate::hooks::use_reveal;
use crate::interaction::scroll::scroll_to_section;

/// A menu entry is a static literal; there is no menu backend.
#[derive(Clone, PartialEq)]
pub struct Cocktail {
    pub name: &'static str,
    pub price: &'static str,
    pub ingredients: &'static str,
    pub story: &'static str,
    /// Two gradient stops for the card's accent color.
    pub color: (&'static str, &'static str),
}

pub fn cocktails() -> Vec<Cocktail> {
    vec![
        Cocktail {
            name: "Sogni Neon",
            price: "€18",
            ingredients: "Vodka, Blue Curaçao, Lime, Sciroppo Elettrico",
            story: "Un viaggio luminescente attraverso sapori sintetici",
            color: ("#22d3ee", "#3b82f6"),
        },
        Cocktail {
            name: "Ribellione Rosa",
            price: "€20",
            ingredients: "Gin, Lampone, Rosa, Polvere Neon",
            story: "Dolce sfida in forma liquida",
            color: ("#f472b6", "#d946ef"),
        },
        Cocktail {
            name: "Macchina Verde",
            price: "€22",
            ingredients: "Assenzio, Chartreuse, Lime, Estratto Luminoso",
            story: "Energia elettrica che scorre nelle tue vene",
            color: ("#4ade80", "#10b981"),
        },
        Cocktail {
            name: "Foschia Viola",
            price: "€19",
            ingredients: "Whiskey, Mora, Violetta, Fumo",
            story: "Perso nella mistica dell'underground",
            color: ("#c084fc", "#8b5cf6"),
        },
        Cocktail {
            name: "Effervescenza Cromata",
            price: "€21",
            ingredients: "Champagne, Foglia d'Argento, Agrumi, Scintilla",
            story: "Bollicine con ribellione metallica",
            color: ("#9ca3af", "#64748b"),
        },
        Cocktail {
            name: "Underground Dorato",
            price: "€25",
            ingredients: "Rum Invecchiato, Scaglie d'Oro, Miele, Fuoco",
            story: "Il gioiello della corona del lusso liquido",
            color: ("#facc15", "#f97316"),
        },
    ]
}

/// Map a pointer position over the card to the 3D tilt angles, ±15° on each
/// axis. X tilts around the horizontal axis (toward the pointer), Y is
/// inverted so the card leans away from it.
fn tilt_angles(x: f64, y: f64, width: f64, height: f64) -> (f64, f64) {
    if width <= 0.0 || height <= 0.0 {
        return (0.0, 0.0);
    }
    let rotate_x = (y / height).clamp(0.0, 1.0) * 30.0 - 15.0;
    let rotate_y = 15.0 - (x / width).clamp(0.0, 1.0) * 30.0;
    (rotate_x, rotate_y)
}

#[derive(Properties, PartialEq)]
struct CocktailCardProps {
    cocktail: Cocktail,
}

#[function_component(CocktailCard)]
fn cocktail_card(props: &CocktailCardProps) -> Html {
    let card = use_node_ref();

    let onmousemove = {
        let card = card.clone();
        Callback::from(move |e: MouseEvent| {
            let Some(el) = card.cast::<HtmlElement>() else {
                return;
            };
            let rect = el.get_bounding_client_rect();
            let (rx, ry) = tilt_angles(
                e.client_x() as f64 - rect.left(),
                e.client_y() as f64 - rect.top(),
                rect.width(),
                rect.height(),
            );
            let style = el.style();
            let _ = style.set_property("transition", "transform 0.15s ease-out");
            let _ = style.set_property(
                "transform",
                &format!("perspective(1000px) rotateX({rx:.2}deg) rotateY({ry:.2}deg) scale(1.05)"),
            );
        })
    };

    let onmouseleave = {
        let card = card.clone();
        Callback::from(move |_: MouseEvent| {
            let Some(el) = card.cast::<HtmlElement>() else {
                return;
            };
            let style = el.style();
            let _ = style.set_property(
                "transition",
                "transform 0.8s cubic-bezier(0.34, 1.56, 0.64, 1)",
            );
            let _ = style.set_property(
                "transform",
                "perspective(1000px) rotateX(0deg) rotateY(0deg) scale(1)",
            );
        })
    };

    let (from, to) = props.cocktail.color;
    let accent = format!("background: linear-gradient(to bottom right, {from}, {to});");
    let name_style = format!(
        "background: linear-gradient(to right, {from}, {to}); \
         -webkit-background-clip: text; background-clip: text; color: transparent;"
    );

    html! {
        <div
            ref={card}
            class="cocktail-card"
            data-cursor-hover=""
            {onmousemove}
            {onmouseleave}
        >
            <div class="cocktail-card-glow" style={accent.clone()}></div>
            <div class="cocktail-card-body">
                <div class="cocktail-card-head">
                    <h3 class="cocktail-name" style={name_style}>{props.cocktail.name}</h3>
                    <span class="cocktail-price">{props.cocktail.price}</span>
                </div>
                <p class="cocktail-ingredients">{props.cocktail.ingredients}</p>
                <div class="cocktail-story">
                    <p>{props.cocktail.story}</p>
                </div>
                <div class="cocktail-underline" style={accent}></div>
            </div>
        </div>
    }
}

/// Chapter two: the cocktail grid. Revealed through one latch at 20%
/// visibility; cards stagger in 100 ms apart.
#[function_component(UndergroundMenu)]
pub fn underground_menu() -> Html {
    let section = use_node_ref();
    let revealed = use_reveal(section.clone(), 0.2);

    let on_reserve = Callback::from(|e: MouseEvent| {
        e.prevent_default();
        scroll_to_section(config::SECTION_RESERVE);
    });

    let css = r#"
        .underground-menu {
            position: relative;
            min-height: 100vh;
            background: linear-gradient(to bottom, #000, #111827, #000);
            padding: 5rem 0;
        }
        .menu-grid-bg {
            position: absolute;
            inset: 0;
            opacity: 0.1;
            background-image:
                linear-gradient(rgba(255, 20, 147, 0.2) 1px, transparent 1px),
                linear-gradient(90deg, rgba(0, 255, 0, 0.2) 1px, transparent 1px);
            background-size: 100px 100px;
            pointer-events: none;
        }
        .menu-top-fade {
            position: absolute;
            top: 0;
            left: 0;
            right: 0;
            height: 10rem;
            background: linear-gradient(to bottom, #000, rgba(0,0,0,0.7), transparent);
            z-index: 2;
            pointer-events: none;
        }
        .menu-content {
            position: relative;
            z-index: 3;
            max-width: 80rem;
            margin: 0 auto;
            padding: 0 1.5rem;
        }
        .menu-reveal {
            opacity: 0;
            transform: translateY(3rem);
            transition: opacity 1s, transform 1s;
        }
        .menu-revealed .menu-reveal {
            opacity: 1;
            transform: translateY(0);
        }
        .menu-header {
            text-align: center;
            margin-bottom: 5rem;
        }
        .menu-kicker {
            font-size: 0.85rem;
            letter-spacing: 0.2em;
            text-transform: uppercase;
            color: #4ade80;
            font-weight: 300;
            margin-bottom: 1rem;
        }
        .menu-title {
            font-family: "Playfair Display", Georgia, serif;
            font-size: clamp(2.5rem, 6vw, 4.5rem);
            line-height: 1.1;
            margin-bottom: 1.5rem;
        }
        .menu-title-accent {
            background: linear-gradient(to right, #4ade80, #22d3ee, #f472b6);
            -webkit-background-clip: text;
            background-clip: text;
            color: transparent;
            text-shadow: 0 0 30px rgba(0, 255, 0, 0.5);
        }
        .menu-subtitle {
            font-size: 1.25rem;
            color: #9ca3af;
            max-width: 48rem;
            margin: 0 auto;
        }
        .menu-grid {
            display: grid;
            gap: 2rem;
        }
        @media (min-width: 768px) {
            .menu-grid { grid-template-columns: repeat(2, 1fr); }
        }
        @media (min-width: 1024px) {
            .menu-grid { grid-template-columns: repeat(3, 1fr); gap: 2.5rem; }
        }
        .cocktail-card {
            position: relative;
            background: rgba(0, 0, 0, 0.5);
            backdrop-filter: blur(4px);
            border: 1px solid rgba(55, 65, 81, 0.5);
            border-radius: 1rem;
            padding: 2rem;
            transform-style: preserve-3d;
            will-change: transform;
        }
        .cocktail-card-glow {
            position: absolute;
            inset: 0;
            border-radius: 1rem;
            opacity: 0;
            transition: opacity 0.5s;
            pointer-events: none;
        }
        .cocktail-card:hover .cocktail-card-glow {
            opacity: 0.1;
        }
        .cocktail-card-body {
            position: relative;
            z-index: 1;
        }
        .cocktail-card-head {
            display: flex;
            justify-content: space-between;
            align-items: flex-start;
            margin-bottom: 1.5rem;
        }
        .cocktail-name {
            font-family: "Playfair Display", Georgia, serif;
            font-size: 1.5rem;
            transition: transform 0.3s;
        }
        .cocktail-card:hover .cocktail-name {
            transform: scale(1.05);
        }
        .cocktail-price {
            font-size: 1.5rem;
            font-weight: 700;
        }
        .cocktail-ingredients {
            color: #d1d5db;
            line-height: 1.6;
            margin-bottom: 1.5rem;
        }
        .cocktail-story {
            border-top: 1px solid rgba(55, 65, 81, 0.5);
            padding-top: 1.5rem;
        }
        .cocktail-story p {
            color: #9ca3af;
            font-size: 0.85rem;
            font-style: italic;
        }
        .cocktail-underline {
            height: 4px;
            border-radius: 9999px;
            margin-top: 1.5rem;
            opacity: 0;
            transition: opacity 0.3s;
        }
        .cocktail-card:hover .cocktail-underline {
            opacity: 1;
        }
        .menu-cta-row {
            text-align: center;
            margin-top: 5rem;
            transition-delay: 0.5s;
        }
        .menu-cta {
            padding: 1rem 2.5rem;
            background: linear-gradient(to right, rgba(236, 72, 153, 0.2), rgba(34, 197, 94, 0.2));
            backdrop-filter: blur(4px);
            border: 1px solid rgba(244, 114, 182, 0.5);
            border-radius: 9999px;
            color: #fff;
            font-weight: 500;
            display: inline-flex;
            align-items: center;
            gap: 0.75rem;
            transition: transform 0.3s, border-color 0.3s;
        }
        .menu-cta:hover {
            transform: scale(1.05);
            border-color: #f472b6;
        }
        .menu-bottom-fade {
            position: absolute;
            bottom: 0;
            left: 0;
            right: 0;
            height: 10rem;
            background: linear-gradient(to bottom, transparent, rgba(0,0,0,0.7), #000);
            z-index: 2;
            pointer-events: none;
        }
    "#;

    html! {
        <section
            ref={section}
            id={config::SECTION_MENU}
            class={classes!("underground-menu", revealed.then_some("menu-revealed"))}
        >
            <style>{css}</style>
            <div class="menu-grid-bg"></div>
            <div class="menu-top-fade"></div>

            <div class="menu-content">
                <div class="menu-reveal menu-header">
                    <div class="menu-kicker">{"Capitolo Due"}</div>
                    <h2 class="menu-title">
                        <span>{"Il Menu"}</span>
                        <br />
                        <span class="menu-title-accent">{"Underground"}</span>
                    </h2>
                    <p class="menu-subtitle">
                        {"Sei capolavori liquidi che definiscono l'esperienza underground"}
                    </p>
                </div>

                <div class="menu-grid">
                    { for cocktails().into_iter().enumerate().map(|(i, cocktail)| html! {
                        <div
                            key={cocktail.name}
                            class="menu-reveal"
                            style={format!("transition-delay: {}ms;", i * 100)}
                        >
                            <CocktailCard {cocktail} />
                        </div>
                    }) }
                </div>

                <div class="menu-reveal menu-cta-row">
                    <button class="menu-cta" onclick={on_reserve} data-cursor-hover="">
                        {"Inizia la Tua Leggenda"}
                        <span aria-hidden="true">{"→"}</span>
                    </button>
                </div>
            </div>

            <div class="menu-bottom-fade"></div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn menu_lists_six_signature_cocktails() {
        let list = cocktails();
        assert_eq!(list.len(), 6);
        for c in &list {
            assert!(c.price.starts_with('€'));
            assert!(!c.ingredients.is_empty());
            assert!(!c.story.is_empty());
        }
    }

    #[test]
    fn tilt_is_centered_and_bounded() {
        assert_eq!(tilt_angles(150.0, 100.0, 300.0, 200.0), (0.0, 0.0));
        // Top-left corner leans back-left.
        assert_eq!(tilt_angles(0.0, 0.0, 300.0, 200.0), (-15.0, 15.0));
        // Bottom-right corner leans forward-right.
        assert_eq!(tilt_angles(300.0, 200.0, 300.0, 200.0), (15.0, -15.0));
        // Pointer coordinates outside the rect stay clamped.
        assert_eq!(tilt_angles(400.0, -50.0, 300.0, 200.0), (-15.0, -15.0));
    }

    #[test]
    fn degenerate_rect_does_not_tilt() {
        assert_eq!(tilt_angles(10.0, 10.0, 0.0, 0.0), (0.0, 0.0));
    }
}
