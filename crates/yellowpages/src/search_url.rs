// ABOUTME: Search URL construction for directory result pages.
// ABOUTME: Slugifies city/state and query text into the directory's path scheme.

use once_cell::sync::Lazy;
use regex::Regex;

static NON_SLUG_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^a-z0-9-]+").expect("valid slug regex"));

/// Lowercases and replaces each run of non `[a-z0-9-]` characters with a dash.
pub fn slugify(value: &str) -> String {
    let lowered = value.trim().to_lowercase();
    NON_SLUG_RE
        .replace_all(&lowered, "-")
        .trim_matches('-')
        .to_string()
}

/// Builds `{base}/{city-state}/{query}`, adding `?page=N` after the first page.
pub fn build_search_url(base_url: &str, city: &str, state: &str, query: &str, page: u32) -> String {
    let location_slug = slugify(&format!("{}-{}", city, state));
    let query_slug = slugify(query);
    let base = format!(
        "{}/{}/{}",
        base_url.trim_end_matches('/'),
        location_slug,
        query_slug
    );
    if page > 1 {
        format!("{}?page={}", base, page)
    } else {
        base
    }
}
