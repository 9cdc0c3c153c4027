// ABOUTME: Configuration options for the directory scraper and its fluent builder.
// ABOUTME: ScraperBuilder constructs YellowPagesScraper instances with custom settings.

use std::collections::HashMap;
use std::time::Duration;

use crate::client::YellowPagesScraper;
use crate::error::ScrapeError;

pub const DEFAULT_BASE_URL: &str = "https://www.yellowpages.com";
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0";

/// Configuration options for the scraper.
#[derive(Debug, Clone)]
pub struct Options {
    pub city: String,
    pub state: String,
    pub base_url: String,
    pub user_agent: String,
    pub timeout: Duration,
    pub max_pages: u32,
    /// Pause between consecutive result pages of one query.
    pub page_delay: Duration,
    pub headers: HashMap<String, String>,
    pub http_client: Option<reqwest::Client>,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            city: "Philadelphia".to_string(),
            state: "PA".to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            timeout: Duration::from_secs(20),
            max_pages: 1,
            page_delay: Duration::ZERO,
            headers: HashMap::new(),
            http_client: None,
        }
    }
}

/// Builder for constructing scrapers with custom configuration.
#[derive(Debug, Clone, Default)]
pub struct ScraperBuilder {
    opts: Options,
}

impl ScraperBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn city(mut self, city: impl Into<String>) -> Self {
        self.opts.city = city.into();
        self
    }

    pub fn state(mut self, state: impl Into<String>) -> Self {
        self.opts.state = state.into();
        self
    }

    /// Point the scraper at a different host, e.g. a local mirror.
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.opts.base_url = base_url.into();
        self
    }

    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.opts.user_agent = user_agent.into();
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.opts.timeout = timeout;
        self
    }

    /// Number of result pages to walk per query. Values below 1 are raised to 1.
    pub fn max_pages(mut self, max_pages: u32) -> Self {
        self.opts.max_pages = max_pages.max(1);
        self
    }

    pub fn page_delay(mut self, delay: Duration) -> Self {
        self.opts.page_delay = delay;
        self
    }

    /// Add a custom header to all requests.
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.opts.headers.insert(key.into(), value.into());
        self
    }

    /// Use a preconfigured HTTP client; timeout and user agent are then up to it.
    pub fn http_client(mut self, client: reqwest::Client) -> Self {
        self.opts.http_client = Some(client);
        self
    }

    pub fn build(self) -> Result<YellowPagesScraper, ScrapeError> {
        YellowPagesScraper::new(self.opts)
    }
}
