//! # API crate — session, transport, and endpoint wrappers
//!
//! Everything the UI needs to talk to the Back Office REST API. The actual
//! server is an external collaborator; this crate owns the client half of the
//! contract: bearer-token attachment, response envelope normalization, and
//! the invalid-session teardown.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`config`] | API base URL, from the build-time `API_URL` env var |
//! | [`session`] | Process-wide session context: token cookie, cached user snapshot, idempotent invalidation |
//! | [`http`] | `HttpTransport` trait with a browser `fetch` impl and an in-memory queue impl for tests |
//! | [`client`] | `ApiClient`: bearer credentials on every request, `{message}` error decoding, invalid-session detection |
//! | [`envelope`] | Collection envelopes and the pagination normalization adapter |
//! | [`auth`] | Login/logout against `/auth/login` |
//! | [`users`], [`customers`] | Endpoint wrappers per resource |

pub mod auth;
pub mod client;
pub mod config;
pub mod customers;
pub mod envelope;
pub mod error;
pub mod http;
pub mod session;
pub mod users;

use std::sync::Arc;

pub use client::ApiClient;
pub use config::ApiConfig;
pub use error::ApiError;
pub use session::{MemoryBackend, SessionBackend, SessionContext};

#[cfg(target_arch = "wasm32")]
pub use session::BrowserBackend;

/// Transport used outside of tests on each platform.
#[cfg(target_arch = "wasm32")]
pub type PlatformTransport = http::FetchTransport;
#[cfg(not(target_arch = "wasm32"))]
pub type PlatformTransport = http::QueueTransport;

/// The client type the UI passes around.
pub type Client = ApiClient<PlatformTransport>;

/// Create the platform-appropriate session context.
///
/// - **Web**: cookie + local storage + `window.location`
/// - **Native** (tooling, tests): in-memory backend
pub fn make_session() -> Arc<SessionContext> {
    #[cfg(target_arch = "wasm32")]
    {
        Arc::new(SessionContext::new(session::BrowserBackend))
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        Arc::new(SessionContext::new(session::MemoryBackend::new()))
    }
}

/// Create the platform-appropriate API client for the given session.
pub fn make_client(session: Arc<SessionContext>) -> Client {
    ApiClient::new(ApiConfig::from_env(), session, PlatformTransport::default())
}
