//! Add/edit drawer for users.
//!
//! Validation happens here, before dispatch: a draft with missing required
//! fields never reaches the network. Passwords are write-only — required on
//! create, and on edit only sent when a replacement was typed.

use dioxus::prelude::*;

use store::{NewUser, User, UserRole, UserUpdate};

use crate::use_user_store;

#[component]
pub fn UserDrawer(editing: Option<User>, on_close: EventHandler<()>) -> Element {
    let store = use_user_store();

    let (init_first, init_last, init_email, init_role, init_active) = match &editing {
        Some(user) => (
            user.first_name.clone(),
            user.last_name.clone(),
            user.email.clone(),
            Some(user.role),
            user.is_active,
        ),
        None => (String::new(), String::new(), String::new(), None, true),
    };
    let editing_id = editing.as_ref().map(|user| user.id.clone());
    let title = if editing_id.is_some() {
        "Edit User"
    } else {
        "Add User"
    };

    let mut first_name = use_signal(|| init_first);
    let mut last_name = use_signal(|| init_last);
    let mut email = use_signal(|| init_email);
    let mut role = use_signal(|| init_role);
    let mut is_active = use_signal(|| init_active);
    let mut password = use_signal(String::new);
    let mut missing = use_signal(Vec::<&'static str>::new);

    let role_value = role().map(UserRole::as_str).unwrap_or("");

    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let draft = NewUser {
            first_name: first_name(),
            last_name: last_name(),
            email: email(),
            role: role(),
            is_active: is_active(),
            password: password(),
        };
        let mut required = draft.missing_fields();
        if editing_id.is_some() {
            // An untouched password on edit means "keep the current one".
            required.retain(|field| *field != "password");
        }
        if !required.is_empty() {
            missing.set(required);
            return;
        }
        missing.set(Vec::new());

        match editing_id.clone() {
            Some(id) => {
                let changes = UserUpdate {
                    first_name: Some(draft.first_name),
                    last_name: Some(draft.last_name),
                    email: Some(draft.email),
                    role: draft.role,
                    is_active: Some(draft.is_active),
                    password: (!draft.password.is_empty()).then_some(draft.password),
                };
                store.update(id, changes);
            }
            None => store.create(draft),
        }
        on_close.call(());
    };

    rsx! {
        div {
            class: "drawer-backdrop",
            onclick: move |_| on_close.call(()),
        }
        aside {
            class: "drawer",
            header {
                class: "drawer-header",
                h3 { "{title}" }
                button {
                    class: "icon-btn",
                    onclick: move |_| on_close.call(()),
                    "×"
                }
            }
            form {
                class: "drawer-form",
                onsubmit: on_submit,

                div {
                    class: "form-field",
                    label { "First name" }
                    input {
                        r#type: "text",
                        value: first_name(),
                        oninput: move |evt| first_name.set(evt.value()),
                    }
                    if missing().contains(&"firstName") {
                        span { class: "field-error", "This field is required." }
                    }
                }
                div {
                    class: "form-field",
                    label { "Last name" }
                    input {
                        r#type: "text",
                        value: last_name(),
                        oninput: move |evt| last_name.set(evt.value()),
                    }
                    if missing().contains(&"lastName") {
                        span { class: "field-error", "This field is required." }
                    }
                }
                div {
                    class: "form-field",
                    label { "Email" }
                    input {
                        r#type: "email",
                        value: email(),
                        oninput: move |evt| email.set(evt.value()),
                    }
                    if missing().contains(&"email") {
                        span { class: "field-error", "This field is required." }
                    }
                }
                div {
                    class: "form-field",
                    label { "Role" }
                    select {
                        value: role_value,
                        onchange: move |evt| role.set(UserRole::parse(&evt.value())),
                        option { value: "", "Select a role" }
                        for option_role in UserRole::ALL {
                            option { value: option_role.as_str(), "{option_role.label()}" }
                        }
                    }
                    if missing().contains(&"role") {
                        span { class: "field-error", "This field is required." }
                    }
                }
                div {
                    class: "form-field",
                    label { "Status" }
                    select {
                        value: if is_active() { "active" } else { "inactive" },
                        onchange: move |evt| is_active.set(evt.value() == "active"),
                        option { value: "active", "Active" }
                        option { value: "inactive", "Inactive" }
                    }
                }
                div {
                    class: "form-field",
                    label { "Password" }
                    input {
                        r#type: "password",
                        placeholder: if editing.is_some() { "Leave blank to keep" } else { "" },
                        value: password(),
                        oninput: move |evt| password.set(evt.value()),
                    }
                    if missing().contains(&"password") {
                        span { class: "field-error", "This field is required." }
                    }
                }

                div {
                    class: "form-actions",
                    button {
                        r#type: "submit",
                        class: "btn btn--primary",
                        "Save"
                    }
                    button {
                        r#type: "button",
                        class: "btn",
                        onclick: move |_| on_close.call(()),
                        "Cancel"
                    }
                }
            }
        }
    }
}
