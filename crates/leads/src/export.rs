// ABOUTME: Flat export records and CSV/JSON writers for processed leads.
// ABOUTME: Flattens categories and budget brackets; verbose mode adds raw analytics and extras.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use serde::Serialize;

use crate::error::ExportError;
use crate::models::{Lead, Metadata};

/// CSV header, in column order.
pub const CSV_FIELDS: [&str; 12] = [
    "name",
    "location",
    "description",
    "phone",
    "website",
    "categories",
    "source",
    "rating",
    "review_count",
    "estimated_budget_low",
    "estimated_budget_high",
    "growth_score",
];

/// One lead flattened for export.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LeadRecord {
    pub name: String,
    pub location: Option<String>,
    pub description: Option<String>,
    pub phone: Option<String>,
    pub website: Option<String>,
    pub categories: String,
    pub source: String,
    pub rating: Option<f64>,
    pub review_count: Option<u32>,
    pub estimated_budget_low: Option<u32>,
    pub estimated_budget_high: Option<u32>,
    pub growth_score: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub analytics: Option<Metadata>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extras: Option<Metadata>,
}

impl LeadRecord {
    pub fn from_lead(lead: &Lead, include_raw: bool) -> Self {
        Self {
            name: lead.name.clone(),
            location: lead.location.clone(),
            description: lead.description.clone(),
            phone: lead.phone.clone(),
            website: lead.website.clone(),
            categories: lead.categories.join(", "),
            source: lead.source.clone(),
            rating: lead.rating,
            review_count: lead.review_count,
            estimated_budget_low: lead.estimated_budget.map(|b| b.low),
            estimated_budget_high: lead.estimated_budget.map(|b| b.high),
            growth_score: lead.growth_score,
            analytics: include_raw.then(|| lead.analytics.clone()),
            extras: include_raw.then(|| lead.extras.clone()),
        }
    }

    /// Cells in [`CSV_FIELDS`] order; absent values become empty cells.
    pub fn csv_row(&self) -> [String; 12] {
        [
            self.name.clone(),
            opt_cell(&self.location),
            opt_cell(&self.description),
            opt_cell(&self.phone),
            opt_cell(&self.website),
            self.categories.clone(),
            self.source.clone(),
            opt_cell(&self.rating),
            opt_cell(&self.review_count),
            opt_cell(&self.estimated_budget_low),
            opt_cell(&self.estimated_budget_high),
            opt_cell(&self.growth_score),
        ]
    }
}

impl From<&Lead> for LeadRecord {
    fn from(lead: &Lead) -> Self {
        Self::from_lead(lead, false)
    }
}

fn opt_cell<T: ToString>(value: &Option<T>) -> String {
    value.as_ref().map(ToString::to_string).unwrap_or_default()
}

/// Writes a header row followed by one row per lead.
pub fn write_csv<W: Write>(leads: &[Lead], writer: W) -> Result<(), ExportError> {
    let mut csv_writer = csv::WriterBuilder::new().from_writer(writer);
    csv_writer.write_record(CSV_FIELDS)?;
    for lead in leads {
        csv_writer.write_record(LeadRecord::from(lead).csv_row())?;
    }
    csv_writer.flush()?;
    Ok(())
}

/// Writes leads as a pretty-printed JSON array.
pub fn write_json<W: Write>(leads: &[Lead], mut writer: W, include_raw: bool) -> Result<(), ExportError> {
    let records: Vec<LeadRecord> = leads
        .iter()
        .map(|lead| LeadRecord::from_lead(lead, include_raw))
        .collect();
    serde_json::to_writer_pretty(&mut writer, &records)?;
    writer.flush()?;
    Ok(())
}

pub fn write_csv_file(leads: &[Lead], path: &Path) -> Result<(), ExportError> {
    let file = File::create(path)?;
    write_csv(leads, BufWriter::new(file))
}

pub fn write_json_file(leads: &[Lead], path: &Path, include_raw: bool) -> Result<(), ExportError> {
    let file = File::create(path)?;
    write_json(leads, BufWriter::new(file), include_raw)
}
