// ABOUTME: Heuristic growth scoring for leads based on listing completeness and keywords.
// ABOUTME: Produces a normalized score in [0, 1] rounded to three decimals.

//! Growth scoring.
//!
//! A lead's growth score is a weighted sum of independent signals (ad clicks,
//! website, phone, review and rating tiers, categories, description, keyword hits)
//! divided by the largest sum the weights can produce. A lead that hits every
//! signal therefore scores exactly 1.0, and one with only a name scores 0.0.
//!
//! Keyword sets are part of the scorer rather than globals, so callers (and tests)
//! can substitute their own vocabulary.

use aho_corasick::AhoCorasick;
use once_cell::sync::Lazy;

use crate::models::Lead;

/// Category keywords that suggest a marketing, consulting, or investment business.
pub const DEFAULT_CATEGORY_KEYWORDS: &[&str] = &[
    "marketing",
    "consultant",
    "agency",
    "design",
    "development",
    "software",
    "venture",
    "capital",
    "investment",
    "coworking",
    "accelerator",
    "branding",
    "creative",
    "studio",
    "strategy",
];

/// Description keywords that suggest a business values growth and will invest in it.
pub const DEFAULT_GROWTH_KEYWORDS: &[&str] = &[
    "growth",
    "marketing",
    "digital",
    "branding",
    "consulting",
    "innovation",
    "strategy",
    "venture",
    "capital",
    "accelerator",
    "coworking",
    "design",
    "development",
    "creative",
];

static DEFAULT_SCORER: Lazy<GrowthScorer> = Lazy::new(GrowthScorer::default);

/// Returns the process-wide scorer built from the default weights and keywords.
pub fn default_scorer() -> &'static GrowthScorer {
    &DEFAULT_SCORER
}

/// Scores a lead with the default weights and keyword sets.
pub fn estimate_growth_score(lead: &Lead) -> f64 {
    DEFAULT_SCORER.score(lead)
}

/// A case-insensitive substring matcher over a fixed set of keywords.
#[derive(Debug, Clone)]
pub struct KeywordSet {
    keywords: Vec<String>,
    automaton: Option<AhoCorasick>,
}

impl KeywordSet {
    pub fn new<I, S>(keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let keywords: Vec<String> = keywords
            .into_iter()
            .map(|k| k.as_ref().trim().to_lowercase())
            .filter(|k| !k.is_empty())
            .collect();
        let automaton = if keywords.is_empty() {
            None
        } else {
            AhoCorasick::new(&keywords).ok()
        };
        Self {
            keywords,
            automaton,
        }
    }

    /// Returns true if any keyword occurs anywhere in `text`, ignoring case.
    pub fn matches(&self, text: &str) -> bool {
        match &self.automaton {
            Some(ac) => ac.is_match(&text.to_lowercase()),
            None => false,
        }
    }

    pub fn keywords(&self) -> &[String] {
        &self.keywords
    }

    pub fn is_empty(&self) -> bool {
        self.keywords.is_empty()
    }
}

/// Bonus contributed by each scoring signal.
///
/// Tier lists are `(minimum, bonus)` pairs; the first tier whose minimum the value
/// reaches wins, so list them highest minimum first.
#[derive(Debug, Clone, PartialEq)]
pub struct Weights {
    pub ad_click: f64,
    pub website: f64,
    pub phone: f64,
    pub review_tiers: Vec<(u32, f64)>,
    pub rating_tiers: Vec<(f64, f64)>,
    pub categorized: f64,
    pub category_keyword: f64,
    pub described: f64,
    pub growth_keyword: f64,
}

impl Default for Weights {
    fn default() -> Self {
        Self {
            ad_click: 0.25,
            website: 0.35,
            phone: 0.10,
            review_tiers: vec![(20, 0.30), (10, 0.25), (5, 0.20), (1, 0.10)],
            rating_tiers: vec![(4.5, 0.25), (4.0, 0.20), (3.5, 0.15)],
            categorized: 0.10,
            category_keyword: 0.25,
            described: 0.10,
            growth_keyword: 0.25,
        }
    }
}

impl Weights {
    /// Sum of the largest bonus every signal can contribute.
    ///
    /// Accumulated in the same order as [`GrowthScorer::raw_score`] so a lead that
    /// hits every signal divides to exactly 1.0.
    pub fn max_score(&self) -> f64 {
        let mut total = 0.0;
        total += self.ad_click;
        total += self.website;
        total += self.phone;
        total += best_bonus(self.review_tiers.iter().map(|(_, b)| *b));
        total += best_bonus(self.rating_tiers.iter().map(|(_, b)| *b));
        total += self.categorized;
        total += self.category_keyword;
        total += self.described;
        total += self.growth_keyword;
        total
    }

    fn review_bonus(&self, review_count: u32) -> f64 {
        self.review_tiers
            .iter()
            .find(|(min, _)| review_count >= *min)
            .map_or(0.0, |(_, bonus)| *bonus)
    }

    fn rating_bonus(&self, rating: f64) -> f64 {
        self.rating_tiers
            .iter()
            .find(|(min, _)| rating >= *min)
            .map_or(0.0, |(_, bonus)| *bonus)
    }
}

fn best_bonus(bonuses: impl Iterator<Item = f64>) -> f64 {
    bonuses.fold(0.0, f64::max)
}

/// Computes growth scores from a set of weights and keyword vocabularies.
#[derive(Debug, Clone)]
pub struct GrowthScorer {
    weights: Weights,
    category_keywords: KeywordSet,
    growth_keywords: KeywordSet,
}

impl Default for GrowthScorer {
    fn default() -> Self {
        Self::new(
            Weights::default(),
            KeywordSet::new(DEFAULT_CATEGORY_KEYWORDS),
            KeywordSet::new(DEFAULT_GROWTH_KEYWORDS),
        )
    }
}

impl GrowthScorer {
    pub fn new(weights: Weights, category_keywords: KeywordSet, growth_keywords: KeywordSet) -> Self {
        Self {
            weights,
            category_keywords,
            growth_keywords,
        }
    }

    pub fn with_weights(mut self, weights: Weights) -> Self {
        self.weights = weights;
        self
    }

    pub fn with_category_keywords(mut self, keywords: KeywordSet) -> Self {
        self.category_keywords = keywords;
        self
    }

    pub fn with_growth_keywords(mut self, keywords: KeywordSet) -> Self {
        self.growth_keywords = keywords;
        self
    }

    pub fn weights(&self) -> &Weights {
        &self.weights
    }

    /// Scores a lead in [0, 1], rounded to three decimals. Does not mutate the lead.
    pub fn score(&self, lead: &Lead) -> f64 {
        let max_score = self.weights.max_score();
        if max_score <= 0.0 {
            return 0.0;
        }
        let normalized = (self.raw_score(lead) / max_score).min(1.0);
        round3(normalized)
    }

    /// Unnormalized weighted sum of the signals the lead exhibits.
    pub fn raw_score(&self, lead: &Lead) -> f64 {
        let w = &self.weights;
        let categories_text = lead.categories.join(" ").to_lowercase();
        let description_text = lead.description.as_deref().unwrap_or("").to_lowercase();

        let mut score = 0.0;
        if lead.has_ad_clicks() {
            score += w.ad_click;
        }
        if is_present(lead.website.as_deref()) {
            score += w.website;
        }
        if is_present(lead.phone.as_deref()) {
            score += w.phone;
        }
        if let Some(reviews) = lead.review_count {
            score += w.review_bonus(reviews);
        }
        if let Some(rating) = lead.rating {
            score += w.rating_bonus(rating);
        }
        if !lead.categories.is_empty() {
            score += w.categorized;
        }
        if self.category_keywords.matches(&categories_text) {
            score += w.category_keyword;
        }
        if !description_text.is_empty() {
            score += w.described;
        }
        if self.growth_keywords.matches(&description_text) {
            score += w.growth_keyword;
        }
        score
    }
}

fn is_present(value: Option<&str>) -> bool {
    value.is_some_and(|v| !v.is_empty())
}

fn round3(value: f64) -> f64 {
    (value * 1000.0).round() / 1000.0
}
