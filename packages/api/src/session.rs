//! # Process-wide session context
//!
//! [`SessionContext`] owns the authentication token and the cached user
//! snapshot. It is created once at startup, handed to the UI through context,
//! and is the only writer of session state besides the login flow: the HTTP
//! client and the auth guard read it, and [`SessionContext::invalidate`]
//! tears it down.
//!
//! Storage and navigation are platform concerns behind [`SessionBackend`]:
//!
//! - [`BrowserBackend`] (web): the token lives in a cookie with a 7-day
//!   expiry, the user snapshot in local storage, and teardown ends in a full
//!   `window.location` navigation to `/login` — a hard load that discards
//!   all in-memory state on purpose.
//! - [`MemoryBackend`]: in-memory backend for tests and native tooling;
//!   records redirects instead of performing them.
//!
//! Storage failures silently no-op: a browser with cookies disabled degrades
//! to "not signed in" rather than crashing.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

/// Cookie holding the opaque auth token.
pub const TOKEN_KEY: &str = "auth_token";
/// Local-storage key for the cached user snapshot.
pub const USER_SNAPSHOT_KEY: &str = "user";
/// Token expiry horizon.
pub const TOKEN_TTL_DAYS: u32 = 7;
/// Where an invalidated session lands.
pub const LOGIN_PATH: &str = "/login";

/// Platform half of the session: durable storage plus hard navigation.
pub trait SessionBackend {
    fn read_token(&self) -> Option<String>;
    fn write_token(&self, token: &str);
    fn clear_token(&self);
    fn write_user_snapshot(&self, json: &str);
    fn clear_user_snapshot(&self);
    /// Full page navigation, not a client-side route change.
    fn hard_redirect(&self, path: &str);
}

impl<B: SessionBackend + ?Sized> SessionBackend for Arc<B> {
    fn read_token(&self) -> Option<String> {
        (**self).read_token()
    }
    fn write_token(&self, token: &str) {
        (**self).write_token(token);
    }
    fn clear_token(&self) {
        (**self).clear_token();
    }
    fn write_user_snapshot(&self, json: &str) {
        (**self).write_user_snapshot(json);
    }
    fn clear_user_snapshot(&self) {
        (**self).clear_user_snapshot();
    }
    fn hard_redirect(&self, path: &str) {
        (**self).hard_redirect(path);
    }
}

pub struct SessionContext {
    backend: Box<dyn SessionBackend>,
    invalidated: AtomicBool,
}

impl SessionContext {
    pub fn new(backend: impl SessionBackend + 'static) -> Self {
        Self {
            backend: Box::new(backend),
            invalidated: AtomicBool::new(false),
        }
    }

    /// Current token, if any. Pure read.
    pub fn token(&self) -> Option<String> {
        self.backend.read_token()
    }

    pub fn is_authenticated(&self) -> bool {
        self.token().is_some()
    }

    /// Persist a fresh login: token plus user snapshot. Re-arms the
    /// invalidation latch so a later auth failure tears down again.
    pub fn establish(&self, token: &str, user_json: &str) {
        self.backend.write_token(token);
        self.backend.write_user_snapshot(user_json);
        self.invalidated.store(false, Ordering::SeqCst);
    }

    /// Voluntary logout: clears stored state without navigating. The caller
    /// decides where to go next.
    pub fn clear(&self) {
        self.backend.clear_token();
        self.backend.clear_user_snapshot();
    }

    /// Tear down an invalid session: clear the token, drop the cached user
    /// snapshot, and hard-navigate to the login entry point.
    ///
    /// Idempotent under concurrent failures — when several in-flight requests
    /// all come back 401, only the first performs the teardown; the rest are
    /// no-ops. On the web the hard navigation reloads the app, which re-arms
    /// the latch implicitly; long-lived native shells re-arm via
    /// [`SessionContext::establish`] on the next login.
    pub fn invalidate(&self) {
        if self.invalidated.swap(true, Ordering::SeqCst) {
            return;
        }
        tracing::warn!("invalid session, clearing credentials and redirecting to login");
        self.backend.clear_token();
        self.backend.clear_user_snapshot();
        self.backend.hard_redirect(LOGIN_PATH);
    }
}

/// Cookie + local storage + `window.location` backend for the web build.
#[cfg(target_arch = "wasm32")]
pub struct BrowserBackend;

#[cfg(target_arch = "wasm32")]
impl BrowserBackend {
    fn html_document() -> Option<web_sys::HtmlDocument> {
        use wasm_bindgen::JsCast;
        web_sys::window()?.document()?.dyn_into().ok()
    }

    fn local_storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok().flatten()
    }
}

#[cfg(target_arch = "wasm32")]
impl SessionBackend for BrowserBackend {
    fn read_token(&self) -> Option<String> {
        let cookies = Self::html_document()?.cookie().ok()?;
        cookies.split(';').find_map(|pair| {
            let (key, value) = pair.trim().split_once('=')?;
            (key == TOKEN_KEY && !value.is_empty()).then(|| value.to_string())
        })
    }

    fn write_token(&self, token: &str) {
        if let Some(document) = Self::html_document() {
            let max_age = TOKEN_TTL_DAYS * 24 * 60 * 60;
            let _ = document.set_cookie(&format!(
                "{TOKEN_KEY}={token}; max-age={max_age}; path=/; samesite=lax"
            ));
        }
    }

    fn clear_token(&self) {
        if let Some(document) = Self::html_document() {
            let _ = document.set_cookie(&format!("{TOKEN_KEY}=; max-age=0; path=/"));
        }
    }

    fn write_user_snapshot(&self, json: &str) {
        if let Some(storage) = Self::local_storage() {
            let _ = storage.set_item(USER_SNAPSHOT_KEY, json);
        }
    }

    fn clear_user_snapshot(&self) {
        if let Some(storage) = Self::local_storage() {
            let _ = storage.remove_item(USER_SNAPSHOT_KEY);
        }
    }

    fn hard_redirect(&self, path: &str) {
        if let Some(window) = web_sys::window() {
            let _ = window.location().set_href(path);
        }
    }
}

/// In-memory [`SessionBackend`] for tests and native tooling.
#[derive(Debug, Default)]
pub struct MemoryBackend {
    token: Mutex<Option<String>>,
    snapshot: Mutex<Option<String>>,
    redirects: Mutex<Vec<String>>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn snapshot(&self) -> Option<String> {
        self.snapshot.lock().unwrap().clone()
    }

    /// Redirects recorded instead of performed.
    pub fn redirects(&self) -> Vec<String> {
        self.redirects.lock().unwrap().clone()
    }
}

impl SessionBackend for MemoryBackend {
    fn read_token(&self) -> Option<String> {
        self.token.lock().unwrap().clone()
    }

    fn write_token(&self, token: &str) {
        *self.token.lock().unwrap() = Some(token.to_string());
    }

    fn clear_token(&self) {
        *self.token.lock().unwrap() = None;
    }

    fn write_user_snapshot(&self, json: &str) {
        *self.snapshot.lock().unwrap() = Some(json.to_string());
    }

    fn clear_user_snapshot(&self) {
        *self.snapshot.lock().unwrap() = None;
    }

    fn hard_redirect(&self, path: &str) {
        tracing::info!("redirect to {path}");
        self.redirects.lock().unwrap().push(path.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn establish_makes_the_session_readable() {
        let backend = Arc::new(MemoryBackend::new());
        let session = SessionContext::new(backend.clone());
        assert!(!session.is_authenticated());

        session.establish("tok-1", r#"{"_id":"u1"}"#);
        assert_eq!(session.token().as_deref(), Some("tok-1"));
        assert_eq!(backend.snapshot().as_deref(), Some(r#"{"_id":"u1"}"#));
    }

    #[test]
    fn invalidate_clears_everything_and_redirects_once() {
        let backend = Arc::new(MemoryBackend::new());
        let session = SessionContext::new(backend.clone());
        session.establish("tok-1", "{}");

        session.invalidate();
        session.invalidate();

        assert_eq!(session.token(), None);
        assert_eq!(backend.snapshot(), None);
        assert_eq!(backend.redirects(), vec![LOGIN_PATH.to_string()]);
    }

    #[test]
    fn a_new_login_rearms_the_invalidation_latch() {
        let backend = Arc::new(MemoryBackend::new());
        let session = SessionContext::new(backend.clone());

        session.establish("tok-1", "{}");
        session.invalidate();
        session.establish("tok-2", "{}");
        session.invalidate();

        assert_eq!(backend.redirects().len(), 2);
    }

    #[test]
    fn clear_logs_out_without_navigating() {
        let backend = Arc::new(MemoryBackend::new());
        let session = SessionContext::new(backend.clone());
        session.establish("tok-1", "{}");

        session.clear();

        assert_eq!(session.token(), None);
        assert!(backend.redirects().is_empty());
    }
}
