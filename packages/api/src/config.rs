//! API base URL configuration.
//!
//! The browser build has no process environment, so `API_URL` is baked in at
//! compile time there. Native builds read it at run time, after loading `.env`.

pub const DEFAULT_API_URL: &str = "http://localhost:5000/api";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiConfig {
    base_url: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::new(DEFAULT_API_URL)
    }
}

impl ApiConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim().trim_end_matches('/').to_string();
        Self { base_url }
    }

    /// Resolve `API_URL`, falling back to [`DEFAULT_API_URL`].
    pub fn from_env() -> Self {
        #[cfg(target_arch = "wasm32")]
        {
            Self::new(option_env!("API_URL").unwrap_or(DEFAULT_API_URL))
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            dotenvy::dotenv().ok();
            match std::env::var("API_URL") {
                Ok(url) if !url.trim().is_empty() => Self::new(url),
                _ => Self::default(),
            }
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Join an endpoint path (`/clients`) onto the base URL.
    pub fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_base_url() {
        assert_eq!(ApiConfig::default().base_url(), "http://localhost:5000/api");
    }

    #[test]
    fn test_url_joins_without_double_slashes() {
        let config = ApiConfig::new("https://api.example.com/api/ ");
        assert_eq!(config.base_url(), "https://api.example.com/api");
        assert_eq!(config.url("/clients"), "https://api.example.com/api/clients");
        assert_eq!(config.url("projects/client/c1"), "https://api.example.com/api/projects/client/c1");
    }
}
