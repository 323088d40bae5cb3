//! Top navigation bar.

use dioxus::prelude::*;

use crate::auth_redirect::{login_path, replace_location};
use crate::context::use_session;

#[component]
pub fn Navbar(children: Element) -> Element {
    rsx! {
        header {
            class: "navbar",
            div { class: "navbar-brand", "Back Office" }
            nav {
                class: "navbar-links",
                {children}
            }
        }
    }
}

/// Clears the session and replace-navigates to the login page.
#[component]
pub fn LogoutButton(lang: String) -> Element {
    let session = use_session();

    let onclick = move |_| {
        api::auth::logout(&session);
        replace_location(&login_path(&lang));
    };

    rsx! {
        button {
            class: "btn navbar-logout",
            onclick,
            "Log out"
        }
    }
}
