use web_sys::{Element, PointerEvent};
use yew::prelude::*;

use crate::config;
use crate::hooks::use_is_mobile;
use crate::interaction::drag::{wrap_offset, DragStart, CLICK_SUPPRESS_MS};

const GALLERY_IMAGES: [&str; 7] = [
    "/assets/images/bartender.jpg",
    "/assets/images/mixing-drinks.jpg",
    "/assets/images/cocktail-img.jpg",
    "/assets/images/inside-showcase-bar.jpg",
    "/assets/images/bar-diverse-drinks.jpg",
    "/assets/images/hanging-glasses.jpg",
    "/assets/images/spritz.jpg",
];

/// The image sequence rendered twice back to back. Items i and N+i must
/// reference the same source so the loop point is imperceptible.
fn looped_sources() -> Vec<&'static str> {
    GALLERY_IMAGES
        .iter()
        .chain(GALLERY_IMAGES.iter())
        .copied()
        .collect()
}

#[derive(Properties, PartialEq)]
struct GalleryImageProps {
    src: &'static str,
    index: usize,
}

#[function_component(GalleryImage)]
fn gallery_image(props: &GalleryImageProps) -> Html {
    html! {
        <div class="gallery-image-container">
            <img
                src={props.src}
                class="gallery-image"
                alt={format!("Gallery {}", props.index + 1)}
                draggable="false"
            />
            <div class="gallery-overlay"></div>
            <div class="gallery-frame-number">
                <span>{format!("{:02}", props.index + 1)}</span>
            </div>
        </div>
    }
}

/// Infinite-looking photo reel. Wide viewports run a constant-speed CSS
/// marquee over the duplicated sequence; narrow viewports switch to direct
/// pointer drag with explicit wrap math at the copy boundary, plus a short
/// suppression window so releasing a drag does not fire a click.
#[function_component(Gallery)]
pub fn gallery() -> Html {
    let is_mobile = use_is_mobile();
    let container = use_node_ref();
    let drag = use_mut_ref(|| None::<DragStart>);
    let suppress_click = use_mut_ref(|| false);
    let suppress_timer = use_mut_ref(|| None::<gloo_timers::callback::Timeout>);

    let onpointerdown = {
        let container = container.clone();
        let drag = drag.clone();
        Callback::from(move |e: PointerEvent| {
            let Some(el) = container.cast::<Element>() else {
                return;
            };
            let _ = el.set_pointer_capture(e.pointer_id());
            *drag.borrow_mut() = Some(DragStart::new(
                e.client_x() as f64,
                el.scroll_left() as f64,
            ));
        })
    };

    let onpointermove = {
        let container = container.clone();
        let drag = drag.clone();
        Callback::from(move |e: PointerEvent| {
            let Some(start) = *drag.borrow() else {
                return;
            };
            let Some(el) = container.cast::<Element>() else {
                return;
            };
            let loop_width = el.scroll_width() as f64 / 2.0;
            let offset = wrap_offset(start.offset_at(e.client_x() as f64), loop_width);
            el.set_scroll_left(offset as i32);
        })
    };

    let end_drag = {
        let drag = drag.clone();
        let suppress_click = suppress_click.clone();
        let suppress_timer = suppress_timer.clone();
        Callback::from(move |_: PointerEvent| {
            if drag.borrow_mut().take().is_none() {
                return;
            }
            *suppress_click.borrow_mut() = true;
            let flag = suppress_click.clone();
            *suppress_timer.borrow_mut() = Some(gloo_timers::callback::Timeout::new(
                CLICK_SUPPRESS_MS,
                move || *flag.borrow_mut() = false,
            ));
        })
    };

    let onclick = {
        let suppress_click = suppress_click.clone();
        Callback::from(move |e: MouseEvent| {
            if *suppress_click.borrow() {
                e.prevent_default();
                e.stop_propagation();
            }
        })
    };

    let css = r#"
        .gallery-container {
            position: relative;
            background: #000;
            padding: 4rem 0;
            overflow: hidden;
        }
        .gallery-fade {
            position: absolute;
            top: 0;
            bottom: 0;
            width: 8rem;
            z-index: 2;
            pointer-events: none;
        }
        .gallery-fade-left {
            left: 0;
            background: linear-gradient(to right, #000, transparent);
        }
        .gallery-fade-right {
            right: 0;
            background: linear-gradient(to left, #000, transparent);
        }
        .gallery-viewport {
            overflow: hidden;
        }
        .gallery-track {
            display: flex;
            gap: 1.5rem;
            width: max-content;
        }
        .gallery-marquee .gallery-track {
            animation: gallery-scroll 45s linear infinite;
        }
        .gallery-marquee:hover .gallery-track {
            animation-play-state: paused;
        }
        @keyframes gallery-scroll {
            from { transform: translateX(0); }
            to { transform: translateX(-50%); }
        }
        .gallery-draggable {
            touch-action: pan-y;
        }
        .gallery-image-container {
            position: relative;
            width: 20rem;
            height: 14rem;
            flex-shrink: 0;
            border-radius: 0.75rem;
            overflow: hidden;
            border: 1px solid rgba(255, 20, 147, 0.2);
        }
        .gallery-image {
            width: 100%;
            height: 100%;
            object-fit: cover;
            user-select: none;
        }
        .gallery-overlay {
            position: absolute;
            inset: 0;
            opacity: 0.3;
            mix-blend-mode: overlay;
            backdrop-filter: sepia(0.2) contrast(1.1);
            pointer-events: none;
        }
        .gallery-frame-number {
            position: absolute;
            bottom: 0.5rem;
            right: 0.75rem;
            font-size: 0.75rem;
            letter-spacing: 0.15em;
            color: rgba(255, 20, 147, 0.8);
            text-shadow: 0 0 8px rgba(255, 20, 147, 0.6);
        }
        @media (max-width: 768px) {
            .gallery-image-container {
                width: 16rem;
                height: 11rem;
            }
        }
    "#;

    let mode_class = if is_mobile {
        "gallery-draggable"
    } else {
        "gallery-marquee"
    };

    let sources = looped_sources();
    let n = GALLERY_IMAGES.len();

    html! {
        <section id={config::SECTION_GALLERY} class={classes!("gallery-container", mode_class)}>
            <style>{css}</style>
            <div class="gallery-fade gallery-fade-left"></div>
            <div class="gallery-fade gallery-fade-right"></div>

            <div
                class="gallery-viewport"
                ref={container}
                onpointerdown={is_mobile.then_some(onpointerdown)}
                onpointermove={is_mobile.then_some(onpointermove)}
                onpointerup={is_mobile.then(|| end_drag.clone())}
                onpointercancel={is_mobile.then_some(end_drag)}
                {onclick}
            >
                <div class="gallery-track">
                    { for sources.iter().enumerate().map(|(i, src)| html! {
                        <GalleryImage key={i} src={*src} index={i % n} />
                    }) }
                </div>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn track_renders_each_source_exactly_twice() {
        let sources = looped_sources();
        let n = GALLERY_IMAGES.len();
        assert_eq!(sources.len(), 2 * n);
        for i in 0..n {
            assert_eq!(sources[i], sources[n + i]);
        }
    }

    #[test]
    fn copies_are_adjacent_and_in_order() {
        let sources = looped_sources();
        let n = GALLERY_IMAGES.len();
        assert_eq!(&sources[..n], &GALLERY_IMAGES[..]);
        assert_eq!(&sources[n..], &GALLERY_IMAGES[..]);
    }
}
