//! Login page: email/password against the external API.

use dioxus::prelude::*;

use ui::{use_api, use_session};

#[component]
pub fn Login(lang: String) -> Element {
    let client = use_api();
    let session = use_session();
    let nav = use_navigator();

    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut submitting = use_signal(|| false);

    // Already signed in: straight to the dashboard.
    let home = format!("/{lang}/users");
    let effect_home = home.clone();
    use_effect(move || {
        if session.is_authenticated() {
            nav.replace(effect_home.as_str());
        }
    });

    let submit_home = home;
    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let email_value = email().trim().to_string();
        let password_value = password();
        if email_value.is_empty() || password_value.is_empty() {
            error.set(Some("Email and password are required.".to_string()));
            return;
        }

        let client = client.clone();
        let home = submit_home.clone();
        submitting.set(true);
        error.set(None);
        spawn(async move {
            match api::auth::login(&client, &email_value, &password_value).await {
                Ok(user) => {
                    tracing::info!("signed in as {}", user.email);
                    let target = redirect_to_from_query().unwrap_or(home);
                    nav.replace(target.as_str());
                }
                Err(err) => {
                    error.set(Some(err.user_message("Login failed")));
                }
            }
            submitting.set(false);
        });
    };

    rsx! {
        div {
            class: "login-container",
            div {
                class: "login-card",
                h1 { "Back Office" }
                p { class: "login-subtitle", "Sign in to your account" }

                if let Some(message) = error() {
                    div { class: "login-error", "{message}" }
                }

                form {
                    class: "login-form",
                    onsubmit: on_submit,
                    div {
                        class: "form-field",
                        label { "Email" }
                        input {
                            r#type: "email",
                            placeholder: "you@company.com",
                            value: email(),
                            oninput: move |evt| email.set(evt.value()),
                        }
                    }
                    div {
                        class: "form-field",
                        label { "Password" }
                        input {
                            r#type: "password",
                            value: password(),
                            oninput: move |evt| password.set(evt.value()),
                        }
                    }
                    button {
                        r#type: "submit",
                        class: "btn btn--primary login-submit",
                        disabled: submitting(),
                        if submitting() { "Signing in..." } else { "Sign in" }
                    }
                }
            }
        }
    }
}

/// `redirectTo` query parameter left by the auth redirect, if any.
fn redirect_to_from_query() -> Option<String> {
    #[cfg(target_arch = "wasm32")]
    {
        let search = web_sys::window()?.location().search().ok()?;
        let params = web_sys::UrlSearchParams::new_with_str(&search).ok()?;
        params.get("redirectTo").filter(|target| !target.is_empty())
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        None
    }
}
