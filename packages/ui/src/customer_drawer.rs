//! Add/edit drawer for customers. Same validation contract as the user
//! drawer: required fields are checked here and an invalid draft never
//! reaches the network.

use dioxus::prelude::*;

use store::{Customer, CustomerUpdate, NewCustomer};

use crate::use_customer_store;

fn optional(value: String) -> Option<String> {
    (!value.is_empty()).then_some(value)
}

#[component]
pub fn CustomerDrawer(editing: Option<Customer>, on_close: EventHandler<()>) -> Element {
    let store = use_customer_store();

    let initial = editing.clone().unwrap_or_else(|| Customer {
        id: String::new(),
        first_name: String::new(),
        last_name: String::new(),
        email: String::new(),
        phone: None,
        company: None,
        gst_no: None,
        address: None,
        city: None,
        notes: None,
    });
    let editing_id = editing
        .as_ref()
        .map(|customer| customer.id.clone());
    let title = if editing_id.is_some() {
        "Edit Customer"
    } else {
        "Add Customer"
    };

    let init_first = initial.first_name.clone();
    let init_last = initial.last_name.clone();
    let init_email = initial.email.clone();
    let init_phone = initial.phone.clone().unwrap_or_default();
    let init_company = initial.company.clone().unwrap_or_default();
    let init_gst = initial.gst_no.clone().unwrap_or_default();
    let init_address = initial.address.clone().unwrap_or_default();
    let init_city = initial.city.clone().unwrap_or_default();
    let init_notes = initial.notes.clone().unwrap_or_default();

    let mut first_name = use_signal(|| init_first);
    let mut last_name = use_signal(|| init_last);
    let mut email = use_signal(|| init_email);
    let mut phone = use_signal(|| init_phone);
    let mut company = use_signal(|| init_company);
    let mut gst_no = use_signal(|| init_gst);
    let mut address = use_signal(|| init_address);
    let mut city = use_signal(|| init_city);
    let mut notes = use_signal(|| init_notes);
    let mut missing = use_signal(Vec::<&'static str>::new);

    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let draft = NewCustomer {
            first_name: first_name(),
            last_name: last_name(),
            email: email(),
            phone: phone(),
            company: optional(company()),
            gst_no: optional(gst_no()),
            address: address(),
            city: city(),
            notes: optional(notes()),
        };
        let required = draft.missing_fields();
        if !required.is_empty() {
            missing.set(required);
            return;
        }
        missing.set(Vec::new());

        match editing_id.clone() {
            Some(id) => {
                let changes = CustomerUpdate {
                    first_name: Some(draft.first_name),
                    last_name: Some(draft.last_name),
                    email: Some(draft.email),
                    phone: Some(draft.phone),
                    company: draft.company,
                    gst_no: draft.gst_no,
                    address: Some(draft.address),
                    city: Some(draft.city),
                    notes: draft.notes,
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
                    label { "Phone" }
                    input {
                        r#type: "tel",
                        value: phone(),
                        oninput: move |evt| phone.set(evt.value()),
                    }
                    if missing().contains(&"phone") {
                        span { class: "field-error", "This field is required." }
                    }
                }
                div {
                    class: "form-field",
                    label { "Company" }
                    input {
                        r#type: "text",
                        value: company(),
                        oninput: move |evt| company.set(evt.value()),
                    }
                }
                div {
                    class: "form-field",
                    label { "GST number" }
                    input {
                        r#type: "text",
                        value: gst_no(),
                        oninput: move |evt| gst_no.set(evt.value()),
                    }
                }
                div {
                    class: "form-field",
                    label { "Address" }
                    input {
                        r#type: "text",
                        value: address(),
                        oninput: move |evt| address.set(evt.value()),
                    }
                    if missing().contains(&"address") {
                        span { class: "field-error", "This field is required." }
                    }
                }
                div {
                    class: "form-field",
                    label { "City" }
                    input {
                        r#type: "text",
                        value: city(),
                        oninput: move |evt| city.set(evt.value()),
                    }
                    if missing().contains(&"city") {
                        span { class: "field-error", "This field is required." }
                    }
                }
                div {
                    class: "form-field",
                    label { "Notes" }
                    textarea {
                        value: notes(),
                        oninput: move |evt| notes.set(evt.value()),
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
