// Runtime configuration for the IoT Signal Monitor
use crate::ism_models::{HttpSignalSource, ISMError, Result};
use reqwest::Url;
use std::time::Duration;

pub const DEFAULT_API_URL: &str = "https://prayalabs.com/rest/api/iot";
pub const DEFAULT_RELAY_URL: &str = "https://api.allorigins.win/raw";
pub const DEFAULT_REFRESH_SECS: u64 = 30;

/// Where to fetch from and how often to auto-refresh.
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub api_url: String,
    /// Relay base URL; the target goes into its `url` query parameter.
    pub proxy_url: Option<String>,
    /// `None` keeps the HTTP client's own default.
    pub request_timeout: Option<Duration>,
    pub refresh_interval: Duration,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            proxy_url: None,
            request_timeout: None,
            refresh_interval: Duration::from_secs(DEFAULT_REFRESH_SECS),
        }
    }
}

impl AppConfig {
    pub fn with_api_url(mut self, api_url: impl Into<String>) -> Self {
        self.api_url = api_url.into();
        self
    }

    pub fn with_proxy(mut self, proxy_url: Option<String>) -> Self {
        self.proxy_url = proxy_url.filter(|p| !p.trim().is_empty());
        self
    }

    pub fn with_timeout_secs(mut self, secs: Option<u64>) -> Self {
        self.request_timeout = secs.map(Duration::from_secs);
        self
    }

    pub fn with_refresh_secs(mut self, secs: u64) -> Self {
        self.refresh_interval = Duration::from_secs(secs.max(1));
        self
    }

    /// URL actually requested: the API itself, or the relay wrapping it.
    pub fn request_url(&self) -> Result<Url> {
        let target = Url::parse(&self.api_url)
            .map_err(|e| ISMError::ConfigError(format!("Invalid API URL '{}': {}", self.api_url, e)))?;

        match &self.proxy_url {
            None => Ok(target),
            Some(proxy) => Url::parse_with_params(proxy, &[("url", target.as_str())])
                .map_err(|e| ISMError::ConfigError(format!("Invalid proxy URL '{}': {}", proxy, e))),
        }
    }

    pub fn build_source(&self) -> Result<HttpSignalSource> {
        let url = self.request_url()?;
        log::debug!("Signal source: {}", url);
        HttpSignalSource::new(url, self.request_timeout)
    }
}
