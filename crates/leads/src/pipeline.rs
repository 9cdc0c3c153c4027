// ABOUTME: End-to-end lead processing: dedup, budget filter, and ranking.
// ABOUTME: Bundles the scorer, ladder, and window so the CLI runs one configured pass.

use tracing::{debug, info};

use crate::budget::BudgetLadder;
use crate::dedup::deduplicate;
use crate::filter::{apply_budget_filter_with, BudgetWindow};
use crate::models::Lead;
use crate::scoring::GrowthScorer;

/// Sorts leads by growth score, highest first. Stable; unscored leads count as 0.
pub fn rank_by_growth(mut leads: Vec<Lead>) -> Vec<Lead> {
    leads.sort_by(|a, b| {
        let a = a.growth_score.unwrap_or(0.0);
        let b = b.growth_score.unwrap_or(0.0);
        b.total_cmp(&a)
    });
    leads
}

/// Counts observed while running a [`Pipeline`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PipelineStats {
    pub input: usize,
    pub unique: usize,
    pub kept: usize,
}

impl PipelineStats {
    pub fn duplicates(&self) -> usize {
        self.input - self.unique
    }

    pub fn rejected(&self) -> usize {
        self.unique - self.kept
    }
}

#[derive(Debug, Clone, Default)]
pub struct Pipeline {
    pub scorer: GrowthScorer,
    pub ladder: BudgetLadder,
    pub window: BudgetWindow,
}

impl Pipeline {
    pub fn new(window: BudgetWindow) -> Self {
        Self {
            window,
            ..Default::default()
        }
    }

    pub fn with_scorer(mut self, scorer: GrowthScorer) -> Self {
        self.scorer = scorer;
        self
    }

    pub fn with_ladder(mut self, ladder: BudgetLadder) -> Self {
        self.ladder = ladder;
        self
    }

    /// Deduplicates, filters to the budget window, and ranks by growth score.
    pub fn run(&self, leads: Vec<Lead>) -> (Vec<Lead>, PipelineStats) {
        let input = leads.len();

        let unique = deduplicate(leads);
        let unique_count = unique.len();
        debug!(input, unique = unique_count, "deduplicated leads");

        let kept = apply_budget_filter_with(unique, self.window, &self.scorer, &self.ladder);
        let stats = PipelineStats {
            input,
            unique: unique_count,
            kept: kept.len(),
        };
        info!(
            input = stats.input,
            duplicates = stats.duplicates(),
            rejected = stats.rejected(),
            kept = stats.kept,
            minimum = self.window.minimum,
            maximum = self.window.maximum,
            "budget filter applied"
        );

        (rank_by_growth(kept), stats)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::BudgetRange;
    use pretty_assertions::assert_eq;

    #[test]
    fn rank_orders_descending_and_is_stable() {
        let leads = vec![
            Lead::new("a").with_growth_score(0.4),
            Lead::new("b").with_growth_score(0.9),
            Lead::new("c"),
            Lead::new("d").with_growth_score(0.4),
        ];
        let ranked: Vec<String> = rank_by_growth(leads).into_iter().map(|l| l.name).collect();
        assert_eq!(ranked, vec!["b", "a", "d", "c"]);
    }

    #[test]
    fn run_dedups_filters_and_ranks() {
        let leads = vec![
            Lead::new("Mid").with_phone("1").with_growth_score(0.5),
            Lead::new("Top").with_phone("2").with_growth_score(0.7),
            Lead::new("mid").with_phone("1").with_growth_score(0.4),
            Lead::new("Weak").with_phone("3").with_growth_score(0.1),
        ];
        let (kept, stats) = Pipeline::new(BudgetWindow::new(3000, 5000)).run(leads);

        assert_eq!(
            stats,
            PipelineStats {
                input: 4,
                unique: 3,
                kept: 2
            }
        );
        assert_eq!(stats.duplicates(), 1);
        assert_eq!(stats.rejected(), 1);
        assert_eq!(kept[0].name, "Top");
        assert_eq!(kept[0].estimated_budget, Some(BudgetRange::new(4500, 6500)));
        assert_eq!(kept[1].name, "Mid");
    }

    #[test]
    fn run_on_empty_batch() {
        let (kept, stats) = Pipeline::default().run(Vec::new());
        assert!(kept.is_empty());
        assert_eq!(stats, PipelineStats::default());
    }
}
