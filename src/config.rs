//! Site-wide constants. Every component reads these instead of hardcoding
//! breakpoints, section ids or external URLs, so the contract in one place
//! stays the contract everywhere.

/// Viewports narrower than this are "mobile": vertical hero video, orbital
/// menu instead of the desktop nav, drag-scrolled gallery.
pub const MOBILE_BREAKPOINT_PX: f64 = 768.0;

/// In-page anchor ids. External links may target these, so they are stable.
pub const SECTION_STORY: &str = "story";
pub const SECTION_GALLERY: &str = "gallery";
pub const SECTION_MENU: &str = "menu";
pub const SECTION_LOCATION: &str = "location";
pub const SECTION_RESERVE: &str = "reserve";

/// Single external profile all social/contact actions resolve to.
pub const CONTACT_PROFILE_URL: &str = "https://www.facebook.com/ax.m826";

/// Read-only map embed, re-themed to dark via CSS filters on the iframe.
pub const MAP_EMBED_URL: &str = "https://www.google.com/maps/embed?pb=!1m18!1m12!1m3!1d2969.833501170243!2d12.49134951540916!3d41.89553197922089!2m3!1f0!2f0!3f0!3m2!1i1024!2i768!4f13.1!3m3!1m2!1s0x132f61b3531b2c45%3A0x242421334526719f!2sVia%20Panisperna%2C%20101%2C%2000184%20Roma%20RM!5e0!3m2!1sen!2sit!4v1668602752103!5m2!1sen!2sit";

/// Fixed fallback trigger for the engagement popup.
pub const POPUP_TIMER_MS: u32 = 30_000;

/// Scroll depth that arms the popup's debounce timer.
pub const POPUP_SCROLL_DEPTH: f64 = 0.75;

/// How long the depth must hold before the popup presents.
pub const POPUP_SCROLL_DEBOUNCE_MS: u32 = 1_000;

/// The scroll-to-top button appears past this many viewport heights.
pub const SCROLL_TOP_VIEWPORTS: f64 = 1.5;

pub fn viewport_width() -> f64 {
    web_sys::window()
        .and_then(|w| w.inner_width().ok())
        .and_then(|v| v.as_f64())
        .unwrap_or(MOBILE_BREAKPOINT_PX)
}

pub fn is_narrow_viewport() -> bool {
    viewport_width() < MOBILE_BREAKPOINT_PX
}
