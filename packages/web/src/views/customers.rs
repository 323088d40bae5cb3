use dioxus::prelude::*;

use ui::{AuthGuard, CustomersTable, LogoutButton, Navbar};

use crate::Route;

#[component]
pub fn Customers(lang: String) -> Element {
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
                CustomersTable {}
            }
        }
    }
}
