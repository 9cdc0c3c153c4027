// ABOUTME: The YellowPagesScraper that walks paginated search results for a query.
// ABOUTME: Fetches each result page, extracts listings, and stops at the first empty or missing page.

use tracing::{debug, info, warn};

use leadscout_leads::Lead;

use crate::error::ScrapeError;
use crate::extract::{parse_listings, ParsedPage};
use crate::options::{Options, ScraperBuilder};
use crate::resource::{fetch, FetchOptions};
use crate::search_url::build_search_url;

/// Scrapes directory listings for one city/state.
#[derive(Debug, Clone)]
pub struct YellowPagesScraper {
    opts: Options,
    http_client: reqwest::Client,
}

impl YellowPagesScraper {
    pub fn builder() -> ScraperBuilder {
        ScraperBuilder::new()
    }

    /// Create a scraper with the given options.
    pub fn new(opts: Options) -> Result<Self, ScrapeError> {
        let http_client = match opts.http_client.clone() {
            Some(client) => client,
            None => reqwest::Client::builder()
                .user_agent(&opts.user_agent)
                .timeout(opts.timeout)
                .gzip(true)
                .brotli(true)
                .deflate(true)
                .build()
                .map_err(|e| {
                    ScrapeError::fetch(
                        &opts.base_url,
                        "Build",
                        Some(anyhow::anyhow!("failed to build HTTP client: {}", e)),
                    )
                })?,
        };
        Ok(Self { opts, http_client })
    }

    pub fn options(&self) -> &Options {
        &self.opts
    }

    /// URL of a given result page for a query.
    pub fn search_url(&self, query: &str, page: u32) -> String {
        build_search_url(&self.opts.base_url, &self.opts.city, &self.opts.state, query, page)
    }

    /// Extract leads from an already-downloaded result page.
    pub fn parse_page(&self, html: &str, query: &str) -> ParsedPage {
        parse_listings(html, query, &self.opts.base_url)
    }

    /// Fetch leads for a query across up to `max_pages` result pages.
    pub async fn fetch(&self, query: &str) -> Result<Vec<Lead>, ScrapeError> {
        self.fetch_pages(query, self.opts.max_pages).await
    }

    /// Fetch leads for a query, walking pages `1..=max_pages`.
    ///
    /// Stops early when a page answers with an error status or contains no
    /// listing blocks.
    pub async fn fetch_pages(&self, query: &str, max_pages: u32) -> Result<Vec<Lead>, ScrapeError> {
        let mut leads = Vec::new();

        for page in 1..=max_pages.max(1) {
            if page > 1 && !self.opts.page_delay.is_zero() {
                tokio::time::sleep(self.opts.page_delay).await;
            }

            let url = self.search_url(query, page);
            let Some(html) = self.get_listing_page(&url).await? else {
                break;
            };

            let parsed = self.parse_page(&html, query);
            if parsed.result_count == 0 {
                debug!(query, page, "no listings on page, stopping");
                break;
            }
            debug!(
                query,
                page,
                listings = parsed.result_count,
                skipped = parsed.skipped(),
                "parsed result page"
            );
            leads.extend(parsed.leads);
        }

        info!(query, leads = leads.len(), "query complete");
        Ok(leads)
    }

    async fn get_listing_page(&self, url: &str) -> Result<Option<String>, ScrapeError> {
        let fetch_opts = FetchOptions {
            headers: self.opts.headers.clone(),
        };
        let result = fetch(&self.http_client, url, &fetch_opts).await?;
        if !result.is_success() {
            warn!(url, status = result.status, "result page unavailable");
            return Ok(None);
        }
        Ok(Some(result.text()))
    }
}
