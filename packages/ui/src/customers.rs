//! Signal-backed store for the customer collection. Mirrors
//! [`crate::users::UserStore`]; see there for the transition rules.

use dioxus::prelude::*;

use api::Client;
use store::{CollectionState, Customer, CustomerUpdate, FetchParams, NewCustomer};

use crate::notifications::{notify, Notifications, ToastLevel};

const FETCH_CUSTOMERS_FALLBACK: &str = "Failed to fetch customers";
const FETCH_CUSTOMER_FALLBACK: &str = "Failed to fetch customer";
const CREATE_CUSTOMER_FALLBACK: &str = "Failed to create customer";
const UPDATE_CUSTOMER_FALLBACK: &str = "Failed to update customer";
const DELETE_CUSTOMER_FALLBACK: &str = "Failed to delete customer";

pub fn use_customer_store() -> CustomerStore {
    use_context::<CustomerStore>()
}

#[derive(Clone)]
pub struct CustomerStore {
    pub state: Signal<CollectionState<Customer>>,
    /// Mutation revision; list controllers refetch when it changes.
    pub revision: Signal<u64>,
    client: Client,
    toasts: Signal<Notifications>,
}

impl CustomerStore {
    pub fn new(
        state: Signal<CollectionState<Customer>>,
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

    fn bump_revision(mut revision: Signal<u64>, state: &Signal<CollectionState<Customer>>) {
        revision.set(state.peek().mutation_revision());
    }

    pub fn fetch(&self, params: FetchParams) {
        let mut state = self.state;
        let client = self.client.clone();
        let ticket = state.write().begin_fetch(params);
        spawn(async move {
            match api::customers::fetch_customers(&client, &ticket.params).await {
                Ok(page) => {
                    state.write().finish_fetch(&ticket, page);
                }
                Err(error) => {
                    tracing::warn!("fetching customers failed: {error}");
                    state
                        .write()
                        .fail_fetch(&ticket, error.user_message(FETCH_CUSTOMERS_FALLBACK));
                }
            }
        });
    }

    pub fn fetch_one(&self, id: String) {
        let mut state = self.state;
        let client = self.client.clone();
        state.write().begin_request();
        spawn(async move {
            match api::customers::fetch_customer(&client, &id).await {
                Ok(customer) => state.write().finish_fetch_one(customer),
                Err(error) => {
                    tracing::warn!("fetching customer {id} failed: {error}");
                    state
                        .write()
                        .fail_request(error.user_message(FETCH_CUSTOMER_FALLBACK));
                }
            }
        });
    }

    pub fn create(&self, draft: NewCustomer) {
        let mut state = self.state;
        let revision = self.revision;
        let client = self.client.clone();
        let mut toasts = self.toasts;
        state.write().begin_request();
        spawn(async move {
            match api::customers::create_customer(&client, &draft).await {
                Ok(customer) => {
                    state.write().finish_create(customer);
                    Self::bump_revision(revision, &state);
                    notify(
                        &mut toasts,
                        ToastLevel::Success,
                        "Customer created successfully",
                    );
                }
                Err(error) => {
                    let message = error.user_message(CREATE_CUSTOMER_FALLBACK);
                    state.write().fail_request(message.clone());
                    notify(&mut toasts, ToastLevel::Error, &message);
                }
            }
        });
    }

    pub fn update(&self, id: String, changes: CustomerUpdate) {
        let mut state = self.state;
        let revision = self.revision;
        let client = self.client.clone();
        let mut toasts = self.toasts;
        state.write().begin_request();
        spawn(async move {
            match api::customers::update_customer(&client, &id, &changes).await {
                Ok(customer) => {
                    state.write().finish_update(customer);
                    Self::bump_revision(revision, &state);
                    notify(
                        &mut toasts,
                        ToastLevel::Success,
                        "Customer updated successfully",
                    );
                }
                Err(error) => {
                    let message = error.user_message(UPDATE_CUSTOMER_FALLBACK);
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
            match api::customers::delete_customer(&client, &id).await {
                Ok(deleted) => {
                    state.write().finish_delete(deleted);
                    Self::bump_revision(revision, &state);
                    notify(
                        &mut toasts,
                        ToastLevel::Success,
                        "Customer deleted successfully",
                    );
                }
                Err(error) => {
                    let message = error.user_message(DELETE_CUSTOMER_FALLBACK);
                    state.write().fail_request(message.clone());
                    notify(&mut toasts, ToastLevel::Error, &message);
                }
            }
        });
    }
}
