/// Fallback backend base URL for local development.
pub const DEFAULT_BACKEND_URL: &str = "http://localhost:5000";

/// Public Gemini REST endpoint.
pub const DEFAULT_GEMINI_API_URL: &str = "https://generativelanguage.googleapis.com";

/// Gemini model used for summaries unless overridden.
pub const DEFAULT_GEMINI_MODEL: &str = "gemini-1.5-flash";

/// Server configuration loaded from environment variables.
///
/// All fields have sensible defaults suitable for local development.
/// In production, override via environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// Inbound request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Timeout for each outbound backend/Gemini call in seconds (default: `25`).
    pub upstream_timeout_secs: u64,
    /// Base URL of the item backend, without a trailing slash.
    pub backend_url: String,
    /// Gemini summary settings.
    pub gemini: GeminiConfig,
}

/// Settings for the server-side summary call.
#[derive(Debug, Clone)]
pub struct GeminiConfig {
    /// Server-held key. `None` disables `/api/generate-summary`.
    pub api_key: Option<String>,
    pub model: String,
    pub api_url: String,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                 | Default                                   |
    /// |-------------------------|-------------------------------------------|
    /// | `HOST`                  | `0.0.0.0`                                 |
    /// | `PORT`                  | `3000`                                    |
    /// | `CORS_ORIGINS`          | `http://localhost:3001`                   |
    /// | `REQUEST_TIMEOUT_SECS`  | `30`                                      |
    /// | `UPSTREAM_TIMEOUT_SECS` | `25`                                      |
    /// | `BACKEND_URL`           | `NEXT_PUBLIC_API_URL`, else `http://localhost:5000` |
    /// | `GEMINI_API_KEY`        | unset                                     |
    /// | `GEMINI_MODEL`          | `gemini-1.5-flash`                        |
    /// | `GEMINI_API_URL`        | `https://generativelanguage.googleapis.com` |
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "3000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let cors_origins: Vec<String> = std::env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| "http://localhost:3001".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let upstream_timeout_secs: u64 = std::env::var("UPSTREAM_TIMEOUT_SECS")
            .unwrap_or_else(|_| "25".into())
            .parse()
            .expect("UPSTREAM_TIMEOUT_SECS must be a valid u64");

        let backend_url = resolve_backend_url(|key| std::env::var(key).ok());

        let gemini = GeminiConfig {
            api_key: std::env::var("GEMINI_API_KEY")
                .ok()
                .filter(|k| !k.trim().is_empty()),
            model: std::env::var("GEMINI_MODEL").unwrap_or_else(|_| DEFAULT_GEMINI_MODEL.into()),
            api_url: trim_base_url(
                &std::env::var("GEMINI_API_URL")
                    .unwrap_or_else(|_| DEFAULT_GEMINI_API_URL.into()),
            ),
        };

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            upstream_timeout_secs,
            backend_url,
            gemini,
        }
    }
}

/// Pick the backend base URL: `BACKEND_URL`, then `NEXT_PUBLIC_API_URL`,
/// then [`DEFAULT_BACKEND_URL`]. Blank values are skipped.
pub fn resolve_backend_url(lookup: impl Fn(&str) -> Option<String>) -> String {
    let url = ["BACKEND_URL", "NEXT_PUBLIC_API_URL"]
        .into_iter()
        .filter_map(|key| lookup(key))
        .find(|value| !value.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_BACKEND_URL.into());
    trim_base_url(&url)
}

/// Strip whitespace and trailing slashes so paths can be appended directly.
pub fn trim_base_url(url: &str) -> String {
    url.trim().trim_end_matches('/').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing_slashes_removed() {
        assert_eq!(trim_base_url(" http://api.local:5000// "), "http://api.local:5000");
    }

    fn env_of(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let pairs: Vec<(String, String)> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| pairs.iter().find(|(k, _)| k == key).map(|(_, v)| v.clone())
    }

    #[test]
    fn backend_url_prefers_backend_url() {
        let lookup = env_of(&[
            ("BACKEND_URL", "http://primary:5000/"),
            ("NEXT_PUBLIC_API_URL", "http://public:5000"),
        ]);
        assert_eq!(resolve_backend_url(lookup), "http://primary:5000");
    }

    #[test]
    fn backend_url_falls_back_to_public_api_url() {
        let lookup = env_of(&[("NEXT_PUBLIC_API_URL", "http://public:5000")]);
        assert_eq!(resolve_backend_url(lookup), "http://public:5000");

        let blank_primary = env_of(&[
            ("BACKEND_URL", "  "),
            ("NEXT_PUBLIC_API_URL", "http://public:5000"),
        ]);
        assert_eq!(resolve_backend_url(blank_primary), "http://public:5000");
    }

    #[test]
    fn backend_url_defaults_when_unset() {
        assert_eq!(resolve_backend_url(env_of(&[])), DEFAULT_BACKEND_URL);
    }

    #[test]
    fn clean_url_unchanged() {
        assert_eq!(trim_base_url(DEFAULT_BACKEND_URL), DEFAULT_BACKEND_URL);
    }
}
