//! Redirect for unauthenticated visitors.

use dioxus::prelude::*;

/// Localized home page, where a bare login (no return address) makes sense.
pub const HOME_PATH: &str = "/users";

/// Localized login path.
pub fn login_path(lang: &str) -> String {
    format!("/{lang}/login")
}

fn home_path(lang: &str) -> String {
    format!("/{lang}{HOME_PATH}")
}

/// Where an unauthenticated visitor on `current_path` should be sent.
///
/// Standing on the login or home page already ⇒ the bare login path.
/// Anywhere else ⇒ the login path carrying the original path verbatim as a
/// `redirectTo` query parameter, so the login flow can return the visitor to
/// where they started.
pub fn login_redirect_target(lang: &str, current_path: &str) -> String {
    let login = login_path(lang);
    if current_path == login || current_path == home_path(lang) {
        login
    } else {
        format!("{login}?redirectTo={current_path}")
    }
}

/// Replace-navigates to the login page. Replace semantics on purpose: the
/// back button must not return to the guarded page.
#[component]
pub fn AuthRedirect(lang: String) -> Element {
    use_effect(move || {
        let target = login_redirect_target(&lang, &current_pathname());
        replace_location(&target);
    });

    rsx! {}
}

fn current_pathname() -> String {
    #[cfg(target_arch = "wasm32")]
    {
        web_sys::window()
            .and_then(|window| window.location().pathname().ok())
            .unwrap_or_else(|| "/".to_string())
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        "/".to_string()
    }
}

pub(crate) fn replace_location(target: &str) {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.location().replace(target);
        }
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        tracing::info!("replace navigation to {target}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn login_and_home_redirect_to_the_bare_login_path() {
        assert_eq!(login_redirect_target("en", "/en/login"), "/en/login");
        assert_eq!(login_redirect_target("en", "/en/users"), "/en/login");
    }

    #[test]
    fn other_paths_carry_a_verbatim_return_address() {
        assert_eq!(
            login_redirect_target("en", "/en/customers"),
            "/en/login?redirectTo=/en/customers"
        );
        assert_eq!(
            login_redirect_target("fr", "/fr/customers/c1"),
            "/fr/login?redirectTo=/fr/customers/c1"
        );
    }
}
