// ABOUTME: Extracts Lead records from directory search result HTML.
// ABOUTME: Maps listing DOM fields (name, snippet, categories, rating, analytics) onto Lead attributes.

//! Listing extraction.
//!
//! Each `div.result` block on a search page becomes at most one [`Lead`]. Extraction
//! fails soft: a block without a business name yields nothing, and malformed
//! analytics JSON is treated as an empty map.
//!
//! Key behaviors:
//! - Text is whitespace-normalized (runs collapsed to single spaces, trimmed).
//! - Empty text counts as absent.
//! - Website links are resolved against the scraper's base URL.

use once_cell::sync::Lazy;
use regex::Regex;
use scraper::{ElementRef, Html, Selector};
use serde_json::Value;
use url::Url;

use leadscout_leads::{Lead, Metadata};

pub const SOURCE_TAG: &str = "yellowpages";

/// Star-rating CSS classes and the rating they encode.
const RATING_CLASSES: &[(&str, f64)] = &[
    ("zero", 0.0),
    ("one", 1.0),
    ("onehalf", 1.5),
    ("two", 2.0),
    ("twohalf", 2.5),
    ("three", 3.0),
    ("threehalf", 3.5),
    ("four", 4.0),
    ("fourhalf", 4.5),
    ("five", 5.0),
];

fn compile(css: &str) -> Selector {
    Selector::parse(css).expect("static selector is valid")
}

static RESULT_SEL: Lazy<Selector> = Lazy::new(|| compile("div.result"));
static NAME_SEL: Lazy<Selector> = Lazy::new(|| compile("a.business-name span"));
static SNIPPET_SEL: Lazy<Selector> = Lazy::new(|| compile(".snippet"));
static PROMO_SEL: Lazy<Selector> = Lazy::new(|| compile(".promo-title"));
static CATEGORIES_SEL: Lazy<Selector> = Lazy::new(|| compile(".categories"));
static CATEGORY_LINK_SEL: Lazy<Selector> = Lazy::new(|| compile("a"));
static PHONE_SEL: Lazy<Selector> = Lazy::new(|| compile(".phones"));
static WEBSITE_SEL: Lazy<Selector> = Lazy::new(|| compile("a.track-visit-website"));
static RATING_SEL: Lazy<Selector> = Lazy::new(|| compile(".result-rating"));
static REVIEW_COUNT_SEL: Lazy<Selector> = Lazy::new(|| compile(".result-rating span.count"));
static ADDRESS_SEL: Lazy<Selector> = Lazy::new(|| compile(".street-address"));
static LOCALITY_SEL: Lazy<Selector> = Lazy::new(|| compile(".locality"));

static DIGITS_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\d+").expect("valid digits regex"));

/// Leads extracted from one search page plus the number of listing blocks seen.
#[derive(Debug, Clone, Default)]
pub struct ParsedPage {
    pub result_count: usize,
    pub leads: Vec<Lead>,
}

impl ParsedPage {
    /// Listing blocks that produced no lead (no business name).
    pub fn skipped(&self) -> usize {
        self.result_count - self.leads.len()
    }
}

/// Parses every `div.result` listing on a search page.
pub fn parse_listings(html: &str, query: &str, base_url: &str) -> ParsedPage {
    let doc = Html::parse_document(html);
    let base = Url::parse(base_url).ok();
    let mut page = ParsedPage::default();
    for item in doc.select(&RESULT_SEL) {
        page.result_count += 1;
        if let Some(lead) = parse_result(item, query, base.as_ref()) {
            page.leads.push(lead);
        }
    }
    page
}

/// Converts one listing block into a lead, or `None` when it has no business name.
pub fn parse_result(item: ElementRef<'_>, query: &str, base: Option<&Url>) -> Option<Lead> {
    let name = select_text(item, &NAME_SEL)?;

    let address = select_text(item, &ADDRESS_SEL);
    let locality = select_text(item, &LOCALITY_SEL);

    let mut extras = Metadata::new();
    extras.insert("query".to_string(), Value::from(query));
    extras.insert(
        "address".to_string(),
        address.clone().map_or(Value::Null, Value::from),
    );

    Some(Lead {
        name,
        location: build_location(address, locality),
        description: select_text(item, &SNIPPET_SEL).or_else(|| select_text(item, &PROMO_SEL)),
        phone: select_text(item, &PHONE_SEL),
        website: parse_website(item, base),
        categories: parse_categories(item),
        source: SOURCE_TAG.to_string(),
        rating: parse_rating(item),
        review_count: parse_review_count(item),
        analytics: load_analytics(item.value().attr("data-analytics")),
        extras,
        estimated_budget: None,
        growth_score: None,
    })
}

fn normalize_whitespace(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn element_text(el: ElementRef<'_>) -> String {
    el.text().collect::<String>()
}

/// Normalized text of the first match, or `None` if absent or blank.
fn select_text(item: ElementRef<'_>, selector: &Selector) -> Option<String> {
    let el = item.select(selector).next()?;
    let text = normalize_whitespace(&element_text(el));
    if text.is_empty() {
        None
    } else {
        Some(text)
    }
}

/// Parses the `data-analytics` attribute; anything but a JSON object becomes empty.
pub fn load_analytics(raw: Option<&str>) -> Metadata {
    let Some(raw) = raw.map(str::trim).filter(|s| !s.is_empty()) else {
        return Metadata::new();
    };
    match serde_json::from_str::<Value>(raw) {
        Ok(Value::Object(map)) => map.into_iter().collect(),
        _ => Metadata::new(),
    }
}

/// One category per link when the block has links, otherwise one per text line.
fn parse_categories(item: ElementRef<'_>) -> Vec<String> {
    let Some(el) = item.select(&CATEGORIES_SEL).next() else {
        return Vec::new();
    };

    let linked: Vec<String> = el
        .select(&CATEGORY_LINK_SEL)
        .map(|a| normalize_whitespace(&element_text(a)))
        .filter(|c| !c.is_empty())
        .collect();
    if !linked.is_empty() {
        return linked;
    }

    element_text(el)
        .split('\n')
        .map(normalize_whitespace)
        .filter(|c| !c.is_empty())
        .collect()
}

fn parse_website(item: ElementRef<'_>, base: Option<&Url>) -> Option<String> {
    let href = item
        .select(&WEBSITE_SEL)
        .next()?
        .value()
        .attr("href")
        .map(str::trim)
        .filter(|h| !h.is_empty())?;

    let resolved = match base {
        Some(base) => base.join(href).map(|u| u.to_string()).ok(),
        None => Url::parse(href).map(|u| u.to_string()).ok(),
    };
    Some(resolved.unwrap_or_else(|| href.to_string()))
}

/// Maps the first recognized star class on `.result-rating` to a rating.
pub fn rating_from_classes<'a>(classes: impl IntoIterator<Item = &'a str>) -> Option<f64> {
    classes.into_iter().find_map(|class| {
        RATING_CLASSES
            .iter()
            .find(|(name, _)| *name == class)
            .map(|(_, rating)| *rating)
    })
}

fn parse_rating(item: ElementRef<'_>) -> Option<f64> {
    let el = item.select(&RATING_SEL).next()?;
    rating_from_classes(el.value().classes())
}

/// First run of digits in the text, e.g. "(27)" -> 27.
pub fn review_count_from_text(text: &str) -> Option<u32> {
    DIGITS_RE.find(text)?.as_str().parse().ok()
}

fn parse_review_count(item: ElementRef<'_>) -> Option<u32> {
    let el = item.select(&REVIEW_COUNT_SEL).next()?;
    review_count_from_text(&element_text(el))
}

fn build_location(address: Option<String>, locality: Option<String>) -> Option<String> {
    let parts: Vec<String> = [address, locality].into_iter().flatten().collect();
    if parts.is_empty() {
        None
    } else {
        Some(parts.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    const BASE: &str = "https://www.yellowpages.com";

    fn parse_one(html: &str) -> Option<Lead> {
        let doc = Html::parse_fragment(html);
        let item = doc.select(&RESULT_SEL).next().expect("fixture has a result block");
        let base = Url::parse(BASE).unwrap();
        parse_result(item, "digital marketing", Some(&base))
    }

    #[test]
    fn extracts_core_fields() {
        let html = r#"
            <div class="result" data-analytics='{"adclick": true}'>
              <a class="business-name"><span>Growth Agency</span></a>
              <div class="snippet">We help companies grow.</div>
              <div class="categories">Marketing Consultants
Business Coaches</div>
              <div class="phones">(555) 123-4567</div>
              <a class="track-visit-website" href="/growth-agency">Website</a>
              <div class="street-address">123 Market St</div>
              <div class="locality">Philadelphia, PA</div>
            </div>
        "#;
        let lead = parse_one(html).expect("lead");
        assert_eq!(lead.name, "Growth Agency");
        assert_eq!(lead.description.as_deref(), Some("We help companies grow."));
        assert_eq!(lead.phone.as_deref(), Some("(555) 123-4567"));
        assert_eq!(
            lead.website.as_deref(),
            Some("https://www.yellowpages.com/growth-agency")
        );
        assert_eq!(lead.location.as_deref(), Some("123 Market St, Philadelphia, PA"));
        assert_eq!(lead.categories, vec!["Marketing Consultants", "Business Coaches"]);
        assert_eq!(lead.source, "yellowpages");
        assert_eq!(lead.analytics.get("adclick"), Some(&json!(true)));
        assert_eq!(lead.extras.get("query"), Some(&json!("digital marketing")));
        assert_eq!(lead.extras.get("address"), Some(&json!("123 Market St")));
        assert!(lead.growth_score.is_none());
    }

    #[test]
    fn listing_without_name_is_skipped() {
        let html = r#"<div class="result"><div class="snippet">Anonymous</div></div>"#;
        assert!(parse_one(html).is_none());
    }

    #[test]
    fn promo_title_backs_up_missing_snippet() {
        let html = r#"
            <div class="result">
              <a class="business-name"><span>Promo Co</span></a>
              <div class="promo-title">Creative branding studio</div>
            </div>
        "#;
        let lead = parse_one(html).unwrap();
        assert_eq!(lead.description.as_deref(), Some("Creative branding studio"));
        assert!(lead.location.is_none());
        assert_eq!(lead.extras.get("address"), Some(&Value::Null));
    }

    #[test]
    fn linked_categories_are_split_per_link() {
        let html = r#"
            <div class="result">
              <a class="business-name"><span>Linked</span></a>
              <div class="categories"><a href="/a">Venture Capital</a><a href="/b">Investment Advisory</a></div>
            </div>
        "#;
        let lead = parse_one(html).unwrap();
        assert_eq!(lead.categories, vec!["Venture Capital", "Investment Advisory"]);
    }

    #[test]
    fn rating_and_review_count() {
        let html = r#"
            <div class="result">
              <a class="business-name"><span>Rated</span></a>
              <div class="result-rating fourhalf"><span class="count">(27)</span></div>
            </div>
        "#;
        let lead = parse_one(html).unwrap();
        assert_eq!(lead.rating, Some(4.5));
        assert_eq!(lead.review_count, Some(27));
    }

    #[test]
    fn malformed_analytics_is_empty() {
        let html = r#"
            <div class="result" data-analytics='{not json'>
              <a class="business-name"><span>Broken</span></a>
            </div>
        "#;
        let lead = parse_one(html).unwrap();
        assert!(lead.analytics.is_empty());
    }

    #[test]
    fn load_analytics_rejects_non_objects() {
        assert!(load_analytics(None).is_empty());
        assert!(load_analytics(Some("   ")).is_empty());
        assert!(load_analytics(Some("[1, 2]")).is_empty());
        assert!(load_analytics(Some("true")).is_empty());
        let map = load_analytics(Some(r#"{"adclick": 1, "listing_id": "abc"}"#));
        assert_eq!(map.len(), 2);
    }

    #[test]
    fn rating_classes_map_to_values() {
        assert_eq!(rating_from_classes(["result-rating", "threehalf"]), Some(3.5));
        assert_eq!(rating_from_classes(["result-rating", "five"]), Some(5.0));
        assert_eq!(rating_from_classes(["result-rating"]), None);
    }

    #[test]
    fn review_count_takes_first_number() {
        assert_eq!(review_count_from_text("(12 reviews)"), Some(12));
        assert_eq!(review_count_from_text("no reviews"), None);
        assert_eq!(review_count_from_text("99999999999999"), None);
    }

    #[test]
    fn parse_listings_counts_blocks_and_leads() {
        let html = r#"
            <html><body>
              <div class="result"><a class="business-name"><span>One</span></a></div>
              <div class="result"><span>nameless</span></div>
              <div class="result"><a class="business-name"><span>Two</span></a></div>
            </body></html>
        "#;
        let page = parse_listings(html, "q", BASE);
        assert_eq!(page.result_count, 3);
        assert_eq!(page.skipped(), 1);
        let names: Vec<&str> = page.leads.iter().map(|l| l.name.as_str()).collect();
        assert_eq!(names, vec!["One", "Two"]);
    }

    #[test]
    fn absolute_website_is_kept() {
        let html = r#"
            <div class="result">
              <a class="business-name"><span>Abs</span></a>
              <a class="track-visit-website" href="https://abs.example/">Website</a>
            </div>
        "#;
        assert_eq!(parse_one(html).unwrap().website.as_deref(), Some("https://abs.example/"));
    }
}
