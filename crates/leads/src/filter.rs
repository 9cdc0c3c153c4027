// ABOUTME: Budget window filtering for scored leads.
// ABOUTME: Keeps leads whose estimated bracket overlaps the requested budget window.

use crate::budget::{estimate_budget_range_with, BudgetLadder};
use crate::models::{BudgetRange, Lead};
use crate::scoring::{default_scorer, GrowthScorer};

/// Caller-requested budget window, inclusive on both ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BudgetWindow {
    pub minimum: u32,
    pub maximum: u32,
}

impl Default for BudgetWindow {
    fn default() -> Self {
        Self {
            minimum: 3000,
            maximum: 5000,
        }
    }
}

impl BudgetWindow {
    pub const fn new(minimum: u32, maximum: u32) -> Self {
        Self { minimum, maximum }
    }

    pub fn admits(&self, range: &BudgetRange) -> bool {
        range.overlaps(self.minimum, self.maximum)
    }
}

/// Filters leads to those whose bracket overlaps `[minimum, maximum]`, using the
/// default scorer and ladder.
pub fn apply_budget_filter<I>(leads: I, minimum: u32, maximum: u32) -> Vec<Lead>
where
    I: IntoIterator<Item = Lead>,
{
    apply_budget_filter_with(
        leads,
        BudgetWindow::new(minimum, maximum),
        default_scorer(),
        &BudgetLadder::default(),
    )
}

/// Filters leads against `window`, preserving input order.
///
/// Every lead has `growth_score` and `estimated_budget` written before the
/// keep/drop decision. Leads without a bracket are dropped.
pub fn apply_budget_filter_with<I>(
    leads: I,
    window: BudgetWindow,
    scorer: &GrowthScorer,
    ladder: &BudgetLadder,
) -> Vec<Lead>
where
    I: IntoIterator<Item = Lead>,
{
    leads
        .into_iter()
        .filter_map(|mut lead| {
            let estimated = estimate_budget_range_with(&mut lead, scorer, ladder);
            lead.estimated_budget = estimated;
            match estimated {
                Some(range) if window.admits(&range) => Some(lead),
                _ => None,
            }
        })
        .collect()
}
