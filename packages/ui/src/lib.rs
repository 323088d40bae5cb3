//! This crate contains all shared UI for the workspace.

// Re-export icon library
pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}

mod context;
pub use context::{use_api, use_session, AppProvider};

mod auth_guard;
pub use auth_guard::{AuthCheck, AuthGuard};

mod auth_redirect;
pub use auth_redirect::{login_path, login_redirect_target, AuthRedirect};

mod notifications;
pub use notifications::{notify, use_notifications, Notifications, Toast, ToastHost, ToastLevel};

mod debounce;
pub use debounce::{use_debounced, DebounceGate, DEFAULT_SEARCH_DEBOUNCE_MS};

mod users;
pub use users::{use_user_store, UserStore};

mod customers;
pub use customers::{use_customer_store, CustomerStore};

mod users_table;
pub use users_table::UsersTable;

mod customers_table;
pub use customers_table::CustomersTable;

mod user_drawer;
pub use user_drawer::UserDrawer;

mod customer_drawer;
pub use customer_drawer::CustomerDrawer;

mod navbar;
pub use navbar::{LogoutButton, Navbar};
