//! User list view: server-driven table with filters, debounced search,
//! pagination, and row actions.

use dioxus::prelude::*;

use store::{FetchParams, FilterMap, User, UserRole};

use crate::debounce::{use_debounced, DEFAULT_SEARCH_DEBOUNCE_MS};
use crate::icons::{FaPenToSquare, FaPlus, FaTrash};
use crate::use_user_store;
use crate::user_drawer::UserDrawer;
use crate::Icon;

const PAGE_SIZES: [u32; 3] = [10, 25, 50];

fn set_filter(filters: &mut FilterMap, key: &str, value: String) {
    if value.is_empty() {
        filters.remove(key);
    } else {
        filters.insert(key.to_string(), value);
    }
}

#[component]
pub fn UsersTable() -> Element {
    let store = use_user_store();
    let revision = store.revision;

    let mut params = use_signal(FetchParams::default);
    let mut raw_search = use_signal(String::new);
    let committed_search = use_debounced(raw_search.into(), DEFAULT_SEARCH_DEBOUNCE_MS);

    let mut show_add = use_signal(|| false);
    let mut edit_target = use_signal(|| Option::<User>::None);
    let mut confirm_delete = use_signal(|| Option::<User>::None);

    // Fold the committed search into the params; a changed search resets to
    // the first page.
    use_effect(move || {
        let search = committed_search();
        if params.peek().search != search {
            let mut current = params.write();
            current.search = search;
            current.page = 1;
        }
    });

    // The one place fetches are issued: params changed, or a mutation
    // settled and bumped the revision.
    let fetch_store = store.clone();
    use_effect(move || {
        let _revision = revision();
        let current = params();
        fetch_store.fetch(current);
    });

    let edit_store = store.clone();
    let on_edit = use_callback(move |user: User| {
        edit_store.fetch_one(user.id.clone());
        edit_target.set(Some(user));
    });
    let on_delete_request = use_callback(move |user: User| confirm_delete.set(Some(user)));
    let delete_store = store.clone();
    let on_delete_confirmed = use_callback(move |user: User| {
        delete_store.delete(user.id);
        confirm_delete.set(None);
    });

    let snapshot = store.state.read().clone();
    let current = params();
    let pages = snapshot.pagination.pages;
    let role_value = current.filters.get("role").cloned().unwrap_or_default();
    let status_value = current.filters.get("status").cloned().unwrap_or_default();

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
    let on_role = move |evt: FormEvent| {
        let mut current = params.write();
        set_filter(&mut current.filters, "role", evt.value());
        current.page = 1;
    };
    let on_status = move |evt: FormEvent| {
        let mut current = params.write();
        set_filter(&mut current.filters, "status", evt.value());
        current.page = 1;
    };

    rsx! {
        section {
            class: "list-view",

            header {
                class: "list-toolbar",
                h2 { "Users" }
                div {
                    class: "list-controls",
                    input {
                        class: "search-input",
                        r#type: "search",
                        placeholder: "Search users...",
                        value: raw_search(),
                        oninput: move |evt| raw_search.set(evt.value()),
                    }
                    select {
                        class: "filter-select",
                        value: role_value,
                        onchange: on_role,
                        option { value: "", "All roles" }
                        for role in UserRole::ALL {
                            option { value: role.as_str(), "{role.label()}" }
                        }
                    }
                    select {
                        class: "filter-select",
                        value: status_value,
                        onchange: on_status,
                        option { value: "", "All statuses" }
                        option { value: "active", "Active" }
                        option { value: "inactive", "Inactive" }
                    }
                    button {
                        class: "btn btn--primary",
                        onclick: move |_| show_add.set(true),
                        Icon { icon: FaPlus, width: 12, height: 12 }
                        "Add user"
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
                        th { "Role" }
                        th { "Status" }
                        th { class: "actions-col", "Actions" }
                    }
                }
                tbody {
                    if snapshot.is_loading() && snapshot.items.is_empty() {
                        tr { td { colspan: 5, class: "table-note", "Loading..." } }
                    } else if snapshot.items.is_empty() {
                        tr { td { colspan: 5, class: "table-note", "No data available" } }
                    } else {
                        for user in snapshot.items.clone() {
                            UserRow {
                                key: "{user.id}",
                                user: user.clone(),
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
                    "{snapshot.pagination.total} users"
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
                UserDrawer {
                    editing: None::<User>,
                    on_close: move |_| show_add.set(false),
                }
            }
            if let Some(user) = edit_target() {
                UserDrawer {
                    editing: Some(user),
                    on_close: move |_| edit_target.set(None),
                }
            }
            if let Some(user) = confirm_delete() {
                ConfirmDelete {
                    user,
                    on_confirm: on_delete_confirmed,
                    on_cancel: move |_| confirm_delete.set(None),
                }
            }
        }
    }
}

#[component]
fn UserRow(user: User, on_edit: EventHandler<User>, on_delete: EventHandler<User>) -> Element {
    let edit_user = user.clone();
    let delete_user = user.clone();
    let status_class = if user.is_active {
        "chip chip--active"
    } else {
        "chip chip--inactive"
    };
    let status_label = if user.is_active { "Active" } else { "Inactive" };

    rsx! {
        tr {
            td { "{user.full_name()}" }
            td { "{user.email}" }
            td { "{user.role.label()}" }
            td {
                span { class: status_class, "{status_label}" }
            }
            td {
                class: "actions-col",
                button {
                    class: "icon-btn",
                    title: "Edit",
                    onclick: move |_| on_edit.call(edit_user.clone()),
                    Icon { icon: FaPenToSquare, width: 14, height: 14 }
                }
                button {
                    class: "icon-btn icon-btn--danger",
                    title: "Delete",
                    onclick: move |_| on_delete.call(delete_user.clone()),
                    Icon { icon: FaTrash, width: 14, height: 14 }
                }
            }
        }
    }
}

/// Deletion never fires from the row icon directly; it goes through this
/// confirmation step.
#[component]
pub(crate) fn ConfirmDelete(
    user: User,
    on_confirm: EventHandler<User>,
    on_cancel: EventHandler<()>,
) -> Element {
    let name = user.full_name();
    let confirm_user = user.clone();

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
                        onclick: move |_| on_confirm.call(confirm_user.clone()),
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
