//! Construction-time settings for [`crate::Catalog`].

use std::time::Duration;

use crate::client::DEFAULT_BASE_URL;

/// Environment variable that overrides the base URL in [`CatalogConfig::from_env`].
pub const BASE_URL_ENV: &str = "GUTENDEX_BASE_URL";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogConfig {
    /// Root of the catalog service, e.g. `https://gutendex.com`.
    pub base_url: String,
    /// Upper bound on each request, including text downloads.
    pub timeout: Option<Duration>,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: None,
        }
    }
}

impl CatalogConfig {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.to_string(),
            ..Self::default()
        }
    }

    /// Default settings with the base URL taken from `GUTENDEX_BASE_URL` when set.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        match lookup(BASE_URL_ENV).filter(|url| !url.trim().is_empty()) {
            Some(url) => Self::new(url.trim()),
            None => Self::default(),
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_uses_public_instance() {
        let config = CatalogConfig::default();
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert!(config.timeout.is_none());
    }

    #[test]
    fn lookup_overrides_base_url() {
        let config = CatalogConfig::from_lookup(|key| {
            assert_eq!(key, BASE_URL_ENV);
            Some(" http://localhost:8000 ".to_string())
        });
        assert_eq!(config.base_url, "http://localhost:8000");
    }

    #[test]
    fn blank_lookup_falls_back() {
        assert_eq!(CatalogConfig::from_lookup(|_| Some(String::new())), CatalogConfig::default());
        assert_eq!(CatalogConfig::from_lookup(|_| None), CatalogConfig::default());
    }

    #[test]
    fn timeout_builder() {
        let config = CatalogConfig::new("http://x").with_timeout(Duration::from_secs(5));
        assert_eq!(config.timeout, Some(Duration::from_secs(5)));
    }
}
