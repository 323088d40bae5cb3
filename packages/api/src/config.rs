//! API endpoint configuration.

/// Where the REST API lives.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiConfig {
    pub base_url: String,
}

impl ApiConfig {
    pub const DEFAULT_BASE_URL: &'static str = "http://localhost:5000/api";

    /// Base URL from the build-time `API_URL` env var, falling back to the
    /// local development server.
    pub fn from_env() -> Self {
        Self {
            base_url: option_env!("API_URL")
                .unwrap_or(Self::DEFAULT_BASE_URL)
                .to_string(),
        }
    }

    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    /// Absolute URL for an API path (`/users?...`).
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), path)
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::from_env()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn joins_paths_without_doubling_slashes() {
        let config = ApiConfig::with_base_url("http://localhost:5000/api/");
        assert_eq!(
            config.url("/users/u1"),
            "http://localhost:5000/api/users/u1"
        );
    }
}
