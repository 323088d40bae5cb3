use dioxus::prelude::*;

use ui::{AppProvider, ToastHost};
use views::{Customers, Login, Users};

mod views;

pub const DEFAULT_LANG: &str = "en";

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[route("/")]
    Root {},
    // Bare login is the session-invalidation entry point; it forwards to the
    // localized page.
    #[route("/login")]
    LoginRoot {},
    #[route("/:lang/login")]
    Login { lang: String },
    #[route("/:lang/users")]
    Users { lang: String },
    #[route("/:lang/customers")]
    Customers { lang: String },
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        AppProvider {
            ToastHost {}
            Router::<Route> {}
        }
    }
}

/// Redirect `/` to the localized users list.
#[component]
fn Root() -> Element {
    let nav = use_navigator();
    nav.replace(Route::Users {
        lang: DEFAULT_LANG.to_string(),
    });
    rsx! {}
}

#[component]
fn LoginRoot() -> Element {
    let nav = use_navigator();
    nav.replace(Route::Login {
        lang: DEFAULT_LANG.to_string(),
    });
    rsx! {}
}
