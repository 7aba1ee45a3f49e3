//! Drug reference table.
//!
//! An immutable, ordered mapping from drug identifier to [`DrugRecord`]. The
//! table is supplied externally (JSON) or taken from the built-in defaults, and
//! is never mutated once loaded.

mod search;
mod seed;

pub use search::*;
pub use seed::builtin_records;

use std::collections::HashMap;
use std::path::Path;

use thiserror::Error;

use crate::models::{DrugRecord, Language};

/// Formulary errors.
#[derive(Error, Debug)]
pub enum FormularyError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Duplicate drug id: {0}")]
    DuplicateId(String),

    #[error("Drug record with empty id: {0}")]
    EmptyId(String),
}

pub type FormularyResult<T> = Result<T, FormularyError>;

/// Read-only drug reference table.
#[derive(Debug, Clone)]
pub struct Formulary {
    records: Vec<DrugRecord>,
    index: HashMap<String, usize>,
}

impl Default for Formulary {
    fn default() -> Self {
        Self::builtin()
    }
}

impl Formulary {
    /// Build a table from records, rejecting empty or duplicate identifiers.
    pub fn new(records: Vec<DrugRecord>) -> FormularyResult<Self> {
        let mut index = HashMap::with_capacity(records.len());
        for (pos, record) in records.iter().enumerate() {
            if record.id.trim().is_empty() {
                return Err(FormularyError::EmptyId(record.generic_name.clone()));
            }
            if index.insert(record.id.clone(), pos).is_some() {
                return Err(FormularyError::DuplicateId(record.id.clone()));
            }
        }
        Ok(Self { records, index })
    }

    /// The built-in reference table.
    pub fn builtin() -> Self {
        let records = builtin_records();
        let index = records
            .iter()
            .enumerate()
            .map(|(pos, r)| (r.id.clone(), pos))
            .collect();
        Self { records, index }
    }

    /// Parse a table from a JSON array of records.
    pub fn from_json(json: &str) -> FormularyResult<Self> {
        let records: Vec<DrugRecord> = serde_json::from_str(json)?;
        let formulary = Self::new(records)?;
        tracing::debug!(drugs = formulary.len(), "Loaded formulary from JSON");
        Ok(formulary)
    }

    /// Load a table from a JSON file.
    pub fn from_path<P: AsRef<Path>>(path: P) -> FormularyResult<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Serialize to canonical JSON (table order) for fingerprinting.
    pub fn to_canonical_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(&self.records)
    }

    /// Resolve a drug by exact identifier.
    pub fn get(&self, id: &str) -> Option<&DrugRecord> {
        self.index.get(id).map(|&pos| &self.records[pos])
    }

    /// Check whether an identifier exists in the table.
    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    /// All records in table order.
    pub fn records(&self) -> &[DrugRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Records grouped by English category, in first-seen category order.
    pub fn grouped_by_category(&self) -> Vec<(&str, Vec<&DrugRecord>)> {
        let mut groups: Vec<(&str, Vec<&DrugRecord>)> = Vec::new();
        for record in &self.records {
            let category = record.category.en.as_str();
            match groups.iter_mut().find(|(c, _)| *c == category) {
                Some((_, members)) => members.push(record),
                None => groups.push((category, vec![record])),
            }
        }
        groups
    }

    /// Distinct category names in the given language, in first-seen order.
    pub fn categories(&self, lang: Language) -> Vec<&str> {
        let mut categories: Vec<&str> = Vec::new();
        for record in &self.records {
            let category = record.category.get(lang);
            if !categories.contains(&category) {
                categories.push(category);
            }
        }
        categories
    }
}
