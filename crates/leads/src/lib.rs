// ABOUTME: Core lead processing library for leadscout.
// ABOUTME: Provides the lead model, growth scoring, budget estimation, filtering, dedup, and export.

//! Leadscout core - turns raw directory listings into ranked, budget-qualified leads.
//!
//! The pipeline is synchronous and works on small in-memory batches:
//! [`deduplicate`] collapses repeated listings, [`apply_budget_filter`] scores each
//! lead and keeps those whose budget bracket overlaps the requested window, and
//! [`rank_by_growth`] orders the survivors for export.
//!
//! # Example
//!
//! ```
//! use leadscout_leads::{apply_budget_filter, deduplicate, rank_by_growth, Lead};
//!
//! let leads = vec![
//!     Lead::new("Acme Growth").with_website("https://acme.example"),
//!     Lead::new("Quiet Shop"),
//! ];
//! let leads = rank_by_growth(apply_budget_filter(deduplicate(leads), 3000, 5000));
//! assert!(leads.iter().all(|lead| lead.estimated_budget.is_some()));
//! ```

pub mod budget;
pub mod dedup;
pub mod error;
pub mod export;
pub mod filter;
pub mod models;
pub mod pipeline;
pub mod scoring;

pub use budget::{estimate_budget_range, estimate_budget_range_with, BudgetLadder, BudgetTier};
pub use dedup::deduplicate;
pub use error::ExportError;
pub use export::{write_csv, write_csv_file, write_json, write_json_file, LeadRecord, CSV_FIELDS};
pub use filter::{apply_budget_filter, apply_budget_filter_with, BudgetWindow};
pub use models::{BudgetRange, Lead, Metadata};
pub use pipeline::{rank_by_growth, Pipeline, PipelineStats};
pub use scoring::{estimate_growth_score, GrowthScorer, KeywordSet, Weights};
