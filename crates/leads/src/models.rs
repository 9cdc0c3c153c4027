// ABOUTME: Data models for leads produced by directory scraping.
// ABOUTME: Defines Lead, BudgetRange, and the identity key used for deduplication.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Free-form key/value metadata attached to a lead (analytics, extras).
pub type Metadata = BTreeMap<String, Value>;

/// Analytics key set by the directory when a listing carries paid ad clicks.
pub const AD_CLICK_KEY: &str = "adclick";

/// Estimated project budget bracket, inclusive on both ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BudgetRange {
    pub low: u32,
    pub high: u32,
}

impl BudgetRange {
    pub const fn new(low: u32, high: u32) -> Self {
        Self { low, high }
    }

    /// Returns true if this bracket intersects `[minimum, maximum]`.
    ///
    /// Partial overlap is enough; the bracket does not need to fit inside the window.
    pub fn overlaps(&self, minimum: u32, maximum: u32) -> bool {
        self.low <= maximum && self.high >= minimum
    }
}

impl From<(u32, u32)> for BudgetRange {
    fn from((low, high): (u32, u32)) -> Self {
        Self { low, high }
    }
}

/// A candidate business extracted from one directory listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Lead {
    pub name: String,
    pub location: Option<String>,
    pub description: Option<String>,
    pub phone: Option<String>,
    pub website: Option<String>,
    pub categories: Vec<String>,
    pub source: String,
    pub rating: Option<f64>,
    pub review_count: Option<u32>,
    pub analytics: Metadata,
    pub extras: Metadata,
    pub estimated_budget: Option<BudgetRange>,
    pub growth_score: Option<f64>,
}

impl Default for Lead {
    fn default() -> Self {
        Self {
            name: String::new(),
            location: None,
            description: None,
            phone: None,
            website: None,
            categories: Vec::new(),
            source: "unknown".to_string(),
            rating: None,
            review_count: None,
            analytics: Metadata::new(),
            extras: Metadata::new(),
            estimated_budget: None,
            growth_score: None,
        }
    }
}

impl Lead {
    /// Create a lead with only a name; every other field takes its default.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = Some(phone.into());
        self
    }

    pub fn with_website(mut self, website: impl Into<String>) -> Self {
        self.website = Some(website.into());
        self
    }

    pub fn with_categories<I, S>(mut self, categories: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.categories = categories.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = source.into();
        self
    }

    pub fn with_rating(mut self, rating: f64) -> Self {
        self.rating = Some(rating);
        self
    }

    pub fn with_review_count(mut self, review_count: u32) -> Self {
        self.review_count = Some(review_count);
        self
    }

    pub fn with_analytic(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.analytics.insert(key.into(), value.into());
        self
    }

    pub fn with_extra(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.extras.insert(key.into(), value.into());
        self
    }

    pub fn with_growth_score(mut self, score: f64) -> Self {
        self.growth_score = Some(score);
        self
    }

    /// Key used to detect duplicate listings: lowercased name plus trimmed phone.
    ///
    /// Leads sharing a name but not a phone number are distinct.
    pub fn identity_key(&self) -> String {
        format!(
            "{}::{}",
            self.name.to_lowercase(),
            self.phone.as_deref().unwrap_or("").trim()
        )
    }

    /// Returns true if the listing's analytics report advertising clicks.
    pub fn has_ad_clicks(&self) -> bool {
        self.analytics.get(AD_CLICK_KEY).is_some_and(is_truthy)
    }
}

/// JSON truthiness: null, false, zero, and empty containers are false.
fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(a) => !a.is_empty(),
        Value::Object(o) => !o.is_empty(),
    }
}
