// ABOUTME: Directory scraping library that turns search result pages into leads.
// ABOUTME: Re-exports the public API: YellowPagesScraper, ScraperBuilder, Options, ScrapeError, ErrorCode.

//! Yellow Pages scraper for leadscout.
//!
//! Fetches paginated search results for a city/state and query and maps each
//! listing onto a [`leadscout_leads::Lead`].
//!
//! # Example
//!
//! ```no_run
//! use leadscout_yellowpages::{ScrapeError, YellowPagesScraper};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), ScrapeError> {
//!     let scraper = YellowPagesScraper::builder()
//!         .city("Philadelphia")
//!         .state("PA")
//!         .max_pages(2)
//!         .build()?;
//!     let leads = scraper.fetch("digital marketing").await?;
//!     println!("{} leads", leads.len());
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod error;
pub mod extract;
pub mod options;
pub mod resource;
pub mod search_url;

pub use crate::client::YellowPagesScraper;
pub use crate::error::{ErrorCode, ScrapeError};
pub use crate::extract::{parse_listings, ParsedPage};
pub use crate::options::{Options, ScraperBuilder};
pub use crate::search_url::{build_search_url, slugify};
