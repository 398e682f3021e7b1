use dioxus::prelude::*;

use ui::components::app_navbar::{register_nav, NavBuilder};
use ui::components::AppNavbar;
use ui::views::{About, Analysis, Analytics, Data, Home};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(WebNavbar)]
    #[route("/")]
    Home {},
    #[route("/data")]
    Data {},
    #[route("/analytics")]
    Analytics {},
    #[route("/analysis")]
    Analysis {},
    #[route("/about")]
    About {},
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn nav_home(label: &str) -> Element {
    rsx!(Link {
        class: "navbar__link",
        to: Route::Home {},
        "{label}"
    })
}
fn nav_data(label: &str) -> Element {
    rsx!(Link {
        class: "navbar__link",
        to: Route::Data {},
        "{label}"
    })
}
fn nav_analytics(label: &str) -> Element {
    rsx!(Link {
        class: "navbar__link",
        to: Route::Analytics {},
        "{label}"
    })
}
fn nav_analysis(label: &str) -> Element {
    rsx!(Link {
        class: "navbar__link",
        to: Route::Analysis {},
        "{label}"
    })
}
fn nav_about(label: &str) -> Element {
    rsx!(Link {
        class: "navbar__link",
        to: Route::About {},
        "{label}"
    })
}

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    {
        ui::i18n::init();
        // Register localized navigation builder
        register_nav(NavBuilder {
            home: nav_home,
            data: nav_data,
            analytics: nav_analytics,
            analysis: nav_analysis,
            about: nav_about,
        });
    }

    rsx! {
        // Global app resources
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        Router::<Route> {}
    }
}

/// A web-specific Router around the shared `AppNavbar` component
/// which allows us to use the web-specific `Route` enum.
#[component]
fn WebNavbar() -> Element {
    rsx! {
        AppNavbar { }
        Outlet::<Route> {}
    }
}
