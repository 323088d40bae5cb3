//! Gate around protected content.

use dioxus::prelude::*;

use crate::auth_redirect::AuthRedirect;
use crate::context::use_session;

/// Guard state. Starts at `Checking` and resolves exactly once, on mount,
/// from a synchronous token read. There is no automatic re-check: a full
/// remount re-evaluates, which matches the hard navigation session teardown
/// performs.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AuthCheck {
    Checking,
    Authenticated,
    Unauthenticated,
}

impl AuthCheck {
    pub fn resolve(token_present: bool) -> Self {
        if token_present {
            AuthCheck::Authenticated
        } else {
            AuthCheck::Unauthenticated
        }
    }
}

/// Renders `children` only for an authenticated session.
///
/// While the check is pending nothing renders — no flash of protected
/// content, no premature redirect. An unauthenticated session delegates to
/// [`AuthRedirect`].
#[component]
pub fn AuthGuard(lang: String, children: Element) -> Element {
    let session = use_session();
    let mut check = use_signal(|| AuthCheck::Checking);

    use_effect(move || {
        check.set(AuthCheck::resolve(session.is_authenticated()));
    });

    match check() {
        AuthCheck::Checking => rsx! {},
        AuthCheck::Authenticated => rsx! {
            {children}
        },
        AuthCheck::Unauthenticated => rsx! {
            AuthRedirect { lang }
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_on_token_presence() {
        assert_eq!(AuthCheck::resolve(true), AuthCheck::Authenticated);
        assert_eq!(AuthCheck::resolve(false), AuthCheck::Unauthenticated);
    }
}
