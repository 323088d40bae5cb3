use dioxus::prelude::*;

use ui::{AuthGuard, LogoutButton, Navbar, UsersTable};

use crate::Route;

#[component]
pub fn Users(lang: String) -> Element {
    rsx! {
        AuthGuard {
            lang: lang.clone(),
            Navbar {
                Link {
                    class: "navbar-link",
                    to: Route::Users { lang: lang.clone() },
                    "Users"
                }
                Link {
                    class: "navbar-link",
                    to: Route::Customers { lang: lang.clone() },
                    "Customers"
                }
                LogoutButton { lang: lang.clone() }
            }
            main {
                class: "page",
                UsersTable {}
            }
        }
    }
}
