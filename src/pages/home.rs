use yew::prelude::*;

use crate::components::cursor::PointerCursor;
use crate::components::disclaimer::DisclaimerBanner;
use crate::components::footer::Footer;
use crate::components::gallery::Gallery;
use crate::components::hero::CinematicHero;
use crate::components::location::RendezvousPoint;
use crate::components::menu::UndergroundMenu;
use crate::components::orbital_menu::OrbitalMenu;
use crate::components::popup::EngagementPopup;
use crate::components::reserve::LegendBegins;
use crate::components::scroll_top::ScrollTopButton;
use crate::components::story::CinematicStory;
use crate::hooks::use_is_mobile;

/// The whole site is one page: the sections in reading order plus the
/// fixed overlays (cursor, banner, popup, orb, back-to-top).
#[function_component(Home)]
pub fn home() -> Html {
    let is_mobile = use_is_mobile();

    html! {
        <div style="background: #000; color: #fff; min-height: 100vh;">
            <PointerCursor />
            <DisclaimerBanner />

            <CinematicHero />
            <CinematicStory />
            <Gallery />
            <UndergroundMenu />
            <RendezvousPoint />
            <LegendBegins />
            <Footer />

            if is_mobile {
                <OrbitalMenu />
            }
            <EngagementPopup />
            <ScrollTopButton />
        </div>
    }
}
