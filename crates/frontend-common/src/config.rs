//! Frontend configuration

use std::time::Duration;

/// Authentication configuration
pub struct AuthConfig;

impl AuthConfig {
    /// Durable storage slot holding the raw bearer token
    pub const TOKEN_KEY: &'static str = "token";

    /// Durable storage slot holding the JSON-encoded user profile
    pub const USER_KEY: &'static str = "user";

    /// Token expiry check interval in milliseconds
    pub const TOKEN_CHECK_INTERVAL_MS: u32 = 60_000; // 1 minute

    /// Upper bound on a login round trip
    pub const LOGIN_TIMEOUT: Duration = Duration::from_secs(15);

    /// A credential this close to its `exp` is already treated as expired
    pub const EXPIRY_SKEW_SECS: i64 = 30;
}

/// Runtime configuration of the application
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FrontendConfig {
    /// Backend origin without trailing slash; empty when none could be resolved
    pub backend_url: String,
    pub login_timeout: Duration,
}

impl FrontendConfig {
    /// Resolve the configuration for the running page.
    ///
    /// The backend URL comes from `SENSO_BACKEND_URL` at build time, then the
    /// window origin. When neither is available the URL stays empty and
    /// building the API clients fails with a configuration error.
    pub fn from_env() -> Self {
        let backend_url = resolve_backend_url(option_env!("SENSO_BACKEND_URL"), window_origin());
        Self {
            backend_url,
            login_timeout: AuthConfig::LOGIN_TIMEOUT,
        }
    }

    pub fn with_backend_url(backend_url: impl Into<String>) -> Self {
        Self {
            backend_url: normalize(&backend_url.into()),
            login_timeout: AuthConfig::LOGIN_TIMEOUT,
        }
    }
}

fn window_origin() -> Option<String> {
    #[cfg(target_arch = "wasm32")]
    {
        web_sys::window().and_then(|window| window.location().origin().ok())
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        None
    }
}

fn normalize(url: &str) -> String {
    url.trim().trim_end_matches('/').to_string()
}

fn resolve_backend_url(compiled: Option<&str>, origin: Option<String>) -> String {
    compiled
        .map(normalize)
        .filter(|url| !url.is_empty())
        .or_else(|| origin.map(|origin| normalize(&origin)))
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compiled_url_wins_over_origin() {
        let url = resolve_backend_url(
            Some("https://api.karaokesenso.com/"),
            Some("http://localhost:3000".into()),
        );
        assert_eq!(url, "https://api.karaokesenso.com");
    }

    #[test]
    fn blank_compiled_url_falls_back_to_origin() {
        let url = resolve_backend_url(Some("  "), Some("http://localhost:3000".into()));
        assert_eq!(url, "http://localhost:3000");
    }

    #[test]
    fn nothing_configured_leaves_url_empty() {
        assert_eq!(resolve_backend_url(None, None), "");
    }
}
