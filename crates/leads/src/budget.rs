// ABOUTME: Maps growth scores to estimated project budget brackets.
// ABOUTME: Provides the threshold ladder and the caching estimate_budget_range helper.

use crate::models::{BudgetRange, Lead};
use crate::scoring::{default_scorer, GrowthScorer};

/// One rung of the budget ladder: scores at or above `threshold` map to `range`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BudgetTier {
    pub threshold: f64,
    pub range: BudgetRange,
}

impl BudgetTier {
    pub const fn new(threshold: f64, low: u32, high: u32) -> Self {
        Self {
            threshold,
            range: BudgetRange::new(low, high),
        }
    }
}

const DEFAULT_TIERS: [BudgetTier; 4] = [
    BudgetTier::new(0.65, 4500, 6500),
    BudgetTier::new(0.45, 3200, 5200),
    BudgetTier::new(0.35, 2600, 4000),
    BudgetTier::new(0.25, 1800, 3000),
];

/// Ordered score thresholds, highest first. Scores under the lowest rung get no bracket.
#[derive(Debug, Clone, PartialEq)]
pub struct BudgetLadder {
    tiers: Vec<BudgetTier>,
}

impl Default for BudgetLadder {
    fn default() -> Self {
        Self {
            tiers: DEFAULT_TIERS.to_vec(),
        }
    }
}

impl BudgetLadder {
    /// Builds a ladder from tiers in any order.
    pub fn new(mut tiers: Vec<BudgetTier>) -> Self {
        tiers.sort_by(|a, b| b.threshold.total_cmp(&a.threshold));
        Self { tiers }
    }

    pub fn tiers(&self) -> &[BudgetTier] {
        &self.tiers
    }

    /// Returns the bracket of the highest tier the score reaches, if any.
    pub fn classify(&self, score: f64) -> Option<BudgetRange> {
        self.tiers
            .iter()
            .find(|tier| score >= tier.threshold)
            .map(|tier| tier.range)
    }
}

/// Estimates a lead's budget bracket using the default scorer and ladder.
///
/// Reuses `lead.growth_score` when it is already set; otherwise computes it. Either
/// way the score is written back onto the lead.
pub fn estimate_budget_range(lead: &mut Lead) -> Option<BudgetRange> {
    estimate_budget_range_with(lead, default_scorer(), &BudgetLadder::default())
}

/// Same as [`estimate_budget_range`] with an explicit scorer and ladder.
pub fn estimate_budget_range_with(
    lead: &mut Lead,
    scorer: &GrowthScorer,
    ladder: &BudgetLadder,
) -> Option<BudgetRange> {
    let score = match lead.growth_score {
        Some(score) => score,
        None => scorer.score(lead),
    };
    lead.growth_score = Some(score);
    ladder.classify(score)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classify_default_ladder() {
        let ladder = BudgetLadder::default();
        assert_eq!(ladder.classify(0.8), Some(BudgetRange::new(4500, 6500)));
        assert_eq!(ladder.classify(0.5), Some(BudgetRange::new(3200, 5200)));
        assert_eq!(ladder.classify(0.4), Some(BudgetRange::new(2600, 4000)));
        assert_eq!(ladder.classify(0.3), Some(BudgetRange::new(1800, 3000)));
        assert_eq!(ladder.classify(0.1), None);
    }

    #[test]
    fn thresholds_are_inclusive() {
        let ladder = BudgetLadder::default();
        assert_eq!(ladder.classify(0.65), Some(BudgetRange::new(4500, 6500)));
        assert_eq!(ladder.classify(0.45), Some(BudgetRange::new(3200, 5200)));
        assert_eq!(ladder.classify(0.25), Some(BudgetRange::new(1800, 3000)));
        assert_eq!(ladder.classify(0.249), None);
    }

    #[test]
    fn default_brackets_ascend_with_thresholds() {
        let tiers = BudgetLadder::default().tiers().to_vec();
        for pair in tiers.windows(2) {
            assert!(pair[0].threshold > pair[1].threshold);
            assert!(pair[0].range.low > pair[1].range.low);
            assert!(pair[0].range.high > pair[1].range.high);
        }
    }

    #[test]
    fn new_sorts_tiers_highest_first() {
        let ladder = BudgetLadder::new(vec![
            BudgetTier::new(0.2, 100, 200),
            BudgetTier::new(0.8, 900, 1000),
        ]);
        assert_eq!(ladder.tiers()[0].threshold, 0.8);
        assert_eq!(ladder.classify(0.9), Some(BudgetRange::new(900, 1000)));
        assert_eq!(ladder.classify(0.5), Some(BudgetRange::new(100, 200)));
    }

    #[test]
    fn estimate_uses_cached_score() {
        let mut lead = Lead::new("Cached").with_growth_score(0.8);
        assert_eq!(estimate_budget_range(&mut lead), Some(BudgetRange::new(4500, 6500)));
        assert_eq!(lead.growth_score, Some(0.8));
    }

    #[test]
    fn estimate_computes_and_persists_missing_score() {
        let mut lead = Lead::new("Fresh").with_website("https://fresh.example");
        assert_eq!(estimate_budget_range(&mut lead), None);
        assert_eq!(lead.growth_score, Some(0.179));
    }

    #[test]
    fn estimate_is_idempotent() {
        let mut lead = Lead::new("Twice")
            .with_website("https://twice.example")
            .with_categories(["Marketing Agency"])
            .with_rating(4.6);
        let first = estimate_budget_range(&mut lead);
        let second = estimate_budget_range(&mut lead);
        assert_eq!(first, second);
        assert!(first.is_some());
    }

    #[test]
    fn estimate_does_not_set_budget_field() {
        let mut lead = Lead::new("x").with_growth_score(0.5);
        estimate_budget_range(&mut lead);
        assert!(lead.estimated_budget.is_none());
    }
}
