//! Signal-backed store for the user collection.
//!
//! The reactive glue between [`store::CollectionState`] and the API: each
//! action begins a transition synchronously, performs the round-trip in a
//! spawned task, and settles the state when it resolves. Mutations bump the
//! `revision` signal the list controller subscribes to — that bump, not a
//! local patch of `items`, is what refreshes the table.

use dioxus::prelude::*;

use api::Client;
use store::{CollectionState, FetchParams, NewUser, User, UserUpdate};

use crate::notifications::{notify, Notifications, ToastLevel};

const FETCH_USERS_FALLBACK: &str = "Failed to fetch users";
const FETCH_USER_FALLBACK: &str = "Failed to fetch user";
const CREATE_USER_FALLBACK: &str = "Failed to create user";
const UPDATE_USER_FALLBACK: &str = "Failed to update user";
const DELETE_USER_FALLBACK: &str = "Failed to delete user";

pub fn use_user_store() -> UserStore {
    use_context::<UserStore>()
}

#[derive(Clone)]
pub struct UserStore {
    pub state: Signal<CollectionState<User>>,
    /// Mutation revision; list controllers refetch when it changes.
    pub revision: Signal<u64>,
    client: Client,
    toasts: Signal<Notifications>,
}

impl UserStore {
    pub fn new(
        state: Signal<CollectionState<User>>,
        revision: Signal<u64>,
        client: Client,
        toasts: Signal<Notifications>,
    ) -> Self {
        Self {
            state,
            revision,
            client,
            toasts,
        }
    }

    fn bump_revision(mut revision: Signal<u64>, state: &Signal<CollectionState<User>>) {
        revision.set(state.peek().mutation_revision());
    }

    /// Fetch a collection page. In-flight requests are never aborted; the
    /// ticket fence discards whichever completions are no longer current.
    pub fn fetch(&self, params: FetchParams) {
        let mut state = self.state;
        let client = self.client.clone();
        let ticket = state.write().begin_fetch(params);
        spawn(async move {
            match api::users::fetch_users(&client, &ticket.params).await {
                Ok(page) => {
                    state.write().finish_fetch(&ticket, page);
                }
                Err(error) => {
                    tracing::warn!("fetching users failed: {error}");
                    state
                        .write()
                        .fail_fetch(&ticket, error.user_message(FETCH_USERS_FALLBACK));
                }
            }
        });
    }

    pub fn fetch_one(&self, id: String) {
        let mut state = self.state;
        let client = self.client.clone();
        state.write().begin_request();
        spawn(async move {
            match api::users::fetch_user(&client, &id).await {
                Ok(user) => state.write().finish_fetch_one(user),
                Err(error) => {
                    tracing::warn!("fetching user {id} failed: {error}");
                    state
                        .write()
                        .fail_request(error.user_message(FETCH_USER_FALLBACK));
                }
            }
        });
    }

    pub fn create(&self, draft: NewUser) {
        let mut state = self.state;
        let revision = self.revision;
        let client = self.client.clone();
        let mut toasts = self.toasts;
        state.write().begin_request();
        spawn(async move {
            match api::users::create_user(&client, &draft).await {
                Ok(user) => {
                    state.write().finish_create(user);
                    Self::bump_revision(revision, &state);
                    notify(&mut toasts, ToastLevel::Success, "User created successfully");
                }
                Err(error) => {
                    let message = error.user_message(CREATE_USER_FALLBACK);
                    state.write().fail_request(message.clone());
                    notify(&mut toasts, ToastLevel::Error, &message);
                }
            }
        });
    }

    pub fn update(&self, id: String, changes: UserUpdate) {
        let mut state = self.state;
        let revision = self.revision;
        let client = self.client.clone();
        let mut toasts = self.toasts;
        state.write().begin_request();
        spawn(async move {
            match api::users::update_user(&client, &id, &changes).await {
                Ok(user) => {
                    state.write().finish_update(user);
                    Self::bump_revision(revision, &state);
                    notify(&mut toasts, ToastLevel::Success, "User updated successfully");
                }
                Err(error) => {
                    let message = error.user_message(UPDATE_USER_FALLBACK);
                    state.write().fail_request(message.clone());
                    notify(&mut toasts, ToastLevel::Error, &message);
                }
            }
        });
    }

    pub fn delete(&self, id: String) {
        let mut state = self.state;
        let revision = self.revision;
        let client = self.client.clone();
        let mut toasts = self.toasts;
        state.write().begin_request();
        spawn(async move {
            match api::users::delete_user(&client, &id).await {
                Ok(deleted) => {
                    state.write().finish_delete(deleted);
                    Self::bump_revision(revision, &state);
                    notify(&mut toasts, ToastLevel::Success, "User deleted successfully");
                }
                Err(error) => {
                    let message = error.user_message(DELETE_USER_FALLBACK);
                    state.write().fail_request(message.clone());
                    notify(&mut toasts, ToastLevel::Error, &message);
                }
            }
        });
    }
}
