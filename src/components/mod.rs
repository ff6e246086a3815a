pub mod cursor;
pub mod disclaimer;
pub mod footer;
pub mod gallery;
pub mod hero;
pub mod location;
pub mod menu;
pub mod orbital_menu;
pub mod popup;
pub mod reserve;
pub mod scroll_top;
pub mod story;

use wasm_bindgen_futures::JsFuture;
use web_sys::HtmlVideoElement;
use yew::NodeRef;

/// Kick off playback of a background video, discarding autoplay rejections.
/// Browsers that refuse autoplay leave the poster frame showing, which is
/// the intended degraded look.
pub(crate) fn play_video(node: &NodeRef) {
    let Some(video) = node.cast::<HtmlVideoElement>() else {
        return;
    };
    match video.play() {
        Ok(promise) => {
            wasm_bindgen_futures::spawn_local(async move {
                if JsFuture::from(promise).await.is_err() {
                    gloo_console::log!("video autoplay rejected, keeping poster frame");
                }
            });
        }
        Err(_) => {
            gloo_console::log!("video playback unavailable");
        }
    }
}
