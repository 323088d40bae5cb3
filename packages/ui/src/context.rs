//! Application-wide context: session, API client, resource stores.
//!
//! Everything with process-wide lifetime is created here, once, when the app
//! mounts — nothing reaches for ambient globals. Components grab what they
//! need with [`use_session`]/[`use_api`] or the per-resource store hooks.

use dioxus::prelude::*;
use std::sync::Arc;

use api::{Client, SessionContext};
use store::{CollectionState, Customer, User};

use crate::customers::CustomerStore;
use crate::notifications::Notifications;
use crate::users::UserStore;

/// The process-wide session handle.
pub fn use_session() -> Arc<SessionContext> {
    use_context::<Arc<SessionContext>>()
}

/// The shared API client.
pub fn use_api() -> Client {
    use_context::<Client>()
}

/// Provider component that owns the session, the API client, the toast
/// queue, and one resource store per resource type. Wrap the router with it.
#[component]
pub fn AppProvider(children: Element) -> Element {
    let session = use_hook(api::make_session);
    let client = use_hook(|| api::make_client(session.clone()));

    use_context_provider(|| session.clone());
    use_context_provider(|| client.clone());

    let toasts = use_context_provider(|| Signal::new(Notifications::default()));

    let users_state = use_signal(CollectionState::<User>::new);
    let users_revision = use_signal(|| 0u64);
    use_context_provider(|| UserStore::new(users_state, users_revision, client.clone(), toasts));

    let customers_state = use_signal(CollectionState::<Customer>::new);
    let customers_revision = use_signal(|| 0u64);
    use_context_provider(|| {
        CustomerStore::new(customers_state, customers_revision, client.clone(), toasts)
    });

    rsx! {
        {children}
    }
}
