//! Customer list view. Same shape as the users table, without column
//! filters; the search box uses the slower observed debounce window.

use dioxus::prelude::*;

use store::{Customer, FetchParams};

use crate::customer_drawer::CustomerDrawer;
use crate::debounce::use_debounced;
use crate::icons::{FaPenToSquare, FaPlus, FaTrash};
use crate::use_customer_store;
use crate::Icon;

const PAGE_SIZES: [u32; 3] = [10, 25, 50];
const SEARCH_DEBOUNCE_MS: u32 = 1000;

#[component]
pub fn CustomersTable() -> Element {
    let store = use_customer_store();
    let revision = store.revision;

    let mut params = use_signal(FetchParams::default);
    let mut raw_search = use_signal(String::new);
    let committed_search = use_debounced(raw_search.into(), SEARCH_DEBOUNCE_MS);

    let mut show_add = use_signal(|| false);
    let mut edit_target = use_signal(|| Option::<Customer>::None);
    let mut confirm_delete = use_signal(|| Option::<Customer>::None);

    use_effect(move || {
        let search = committed_search();
        if params.peek().search != search {
            let mut current = params.write();
            current.search = search;
            current.page = 1;
        }
    });

    let fetch_store = store.clone();
    use_effect(move || {
        let _revision = revision();
        let current = params();
        fetch_store.fetch(current);
    });

    let edit_store = store.clone();
    let on_edit = use_callback(move |customer: Customer| {
        edit_store.fetch_one(customer.id.clone());
        edit_target.set(Some(customer));
    });
    let on_delete_request =
        use_callback(move |customer: Customer| confirm_delete.set(Some(customer)));
    let delete_store = store.clone();
    let on_delete_confirmed = use_callback(move |customer: Customer| {
        delete_store.delete(customer.id);
        confirm_delete.set(None);
    });

    let snapshot = store.state.read().clone();
    let current = params();
    let pages = snapshot.pagination.pages;

    let on_prev = move |_| {
        if params.peek().page > 1 {
            params.write().page -= 1;
        }
    };
    let on_next = move |_| {
        if params.peek().page < pages {
            params.write().page += 1;
        }
    };
    let on_page_size = move |evt: FormEvent| {
        if let Ok(size) = evt.value().parse::<u32>() {
            let mut current = params.write();
            current.page_size = size;
            current.page = 1;
        }
    };

    rsx! {
        section {
            class: "list-view",

            header {
                class: "list-toolbar",
                h2 { "Customers" }
                div {
                    class: "list-controls",
                    input {
                        class: "search-input",
                        r#type: "search",
                        placeholder: "Search customers...",
                        value: raw_search(),
                        oninput: move |evt| raw_search.set(evt.value()),
                    }
                    button {
                        class: "btn btn--primary",
                        onclick: move |_| show_add.set(true),
                        Icon { icon: FaPlus, width: 12, height: 12 }
                        "Add customer"
                    }
                }
            }

            if let Some(error) = snapshot.error.clone() {
                div { class: "list-error", "{error}" }
            }

            table {
                class: "data-table",
                thead {
                    tr {
                        th { "Name" }
                        th { "Email" }
                        th { "Phone" }
                        th { "Company" }
                        th { "City" }
                        th { class: "actions-col", "Actions" }
                    }
                }
                tbody {
                    if snapshot.is_loading() && snapshot.items.is_empty() {
                        tr { td { colspan: 6, class: "table-note", "Loading..." } }
                    } else if snapshot.items.is_empty() {
                        tr { td { colspan: 6, class: "table-note", "No data available" } }
                    } else {
                        for customer in snapshot.items.clone() {
                            CustomerRow {
                                key: "{customer.id}",
                                customer: customer.clone(),
                                on_edit,
                                on_delete: on_delete_request,
                            }
                        }
                    }
                }
            }

            footer {
                class: "list-footer",
                span {
                    class: "list-total",
                    "{snapshot.pagination.total} customers"
                }
                div {
                    class: "pager",
                    select {
                        class: "filter-select",
                        value: "{current.page_size}",
                        onchange: on_page_size,
                        for size in PAGE_SIZES {
                            option { value: "{size}", "{size} / page" }
                        }
                    }
                    button {
                        class: "btn",
                        disabled: current.page <= 1,
                        onclick: on_prev,
                        "Previous"
                    }
                    span { class: "pager-page", "Page {current.page} of {pages}" }
                    button {
                        class: "btn",
                        disabled: current.page >= pages,
                        onclick: on_next,
                        "Next"
                    }
                }
            }

            if show_add() {
                CustomerDrawer {
                    editing: None::<Customer>,
                    on_close: move |_| show_add.set(false),
                }
            }
            if let Some(customer) = edit_target() {
                CustomerDrawer {
                    editing: Some(customer),
                    on_close: move |_| edit_target.set(None),
                }
            }
            if let Some(customer) = confirm_delete() {
                ConfirmDelete {
                    customer,
                    on_confirm: on_delete_confirmed,
                    on_cancel: move |_| confirm_delete.set(None),
                }
            }
        }
    }
}

#[component]
fn CustomerRow(
    customer: Customer,
    on_edit: EventHandler<Customer>,
    on_delete: EventHandler<Customer>,
) -> Element {
    let edit_customer = customer.clone();
    let delete_customer = customer.clone();
    let phone = customer.phone.clone().unwrap_or_default();
    let company = customer.company.clone().unwrap_or_default();
    let city = customer.city.clone().unwrap_or_default();

    rsx! {
        tr {
            td { "{customer.full_name()}" }
            td { "{customer.email}" }
            td { "{phone}" }
            td { "{company}" }
            td { "{city}" }
            td {
                class: "actions-col",
                button {
                    class: "icon-btn",
                    title: "Edit",
                    onclick: move |_| on_edit.call(edit_customer.clone()),
                    Icon { icon: FaPenToSquare, width: 14, height: 14 }
                }
                button {
                    class: "icon-btn icon-btn--danger",
                    title: "Delete",
                    onclick: move |_| on_delete.call(delete_customer.clone()),
                    Icon { icon: FaTrash, width: 14, height: 14 }
                }
            }
        }
    }
}

#[component]
fn ConfirmDelete(
    customer: Customer,
    on_confirm: EventHandler<Customer>,
    on_cancel: EventHandler<()>,
) -> Element {
    let name = customer.full_name();
    let confirm_customer = customer.clone();

    rsx! {
        div {
            class: "modal-backdrop",
            div {
                class: "modal",
                h3 { "Confirm deletion" }
                p { "Delete {name}? This cannot be undone." }
                div {
                    class: "modal-actions",
                    button {
                        class: "btn btn--danger",
                        onclick: move |_| on_confirm.call(confirm_customer.clone()),
                        "Delete"
                    }
                    button {
                        class: "btn",
                        onclick: move |_| on_cancel.call(()),
                        "Cancel"
                    }
                }
            }
        }
    }
}
