use thiserror::Error;

const DEFAULT_BASE_URL: &str = "https://public.api.hospitable.com/v2";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable {0}")]
    MissingVar(&'static str),
}

/// Process-level context passed to every component that talks to the API.
/// Built once in `main`; nothing reads the environment after startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// Bearer token for the Hospitable API
    pub api_key: String,
    /// API base URL, overridable for tests and staging
    pub base_url: String,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        let api_key = std::env::var("HOSPITABLE_API_KEY")
            .map_err(|_| ConfigError::MissingVar("HOSPITABLE_API_KEY"))?;
        let base_url =
            std::env::var("HOSPITABLE_API_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        Ok(Self { api_key, base_url })
    }

    /// Config pointing at a non-default endpoint, with the given credential
    pub fn with_base_url(api_key: impl Into<String>, base_url: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: base_url.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn with_base_url_overrides_endpoint() {
        let config = Config::with_base_url("token", "http://localhost:9999");
        assert_eq!(config.api_key, "token");
        assert_eq!(config.base_url, "http://localhost:9999");
    }
}
