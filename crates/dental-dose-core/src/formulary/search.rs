//! Drug browser queries: name/brand filtering and "did you mean" suggestions.

use strsim::jaro_winkler;

use super::Formulary;
use crate::models::{DrugRecord, Language};

/// Maximum number of suggestions returned for an unknown identifier.
const MAX_SUGGESTIONS: usize = 3;

/// Minimum similarity for a suggestion.
const MIN_SIMILARITY: f64 = 0.80;

/// Filter for browsing the drug table.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DrugQuery {
    /// Substring matched against generic and brand names (empty = everything)
    pub text: String,
    /// Category to restrict to, in `lang` (None = all categories)
    pub category: Option<String>,
    /// Language the category is expressed in
    pub lang: Language,
}

impl DrugQuery {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Self::default()
        }
    }

    pub fn with_category(mut self, category: impl Into<String>, lang: Language) -> Self {
        self.category = Some(category.into());
        self.lang = lang;
        self
    }

    fn matches(&self, drug: &DrugRecord) -> bool {
        let category_ok = match &self.category {
            None => true,
            Some(category) => drug.category.get(self.lang) == category,
        };
        category_ok && drug.matches_name(self.text.trim())
    }
}

impl Formulary {
    /// Records matching the query, in table order.
    pub fn search(&self, query: &DrugQuery) -> Vec<&DrugRecord> {
        self.records()
            .iter()
            .filter(|d| query.matches(d))
            .collect()
    }

    /// Closest known identifiers for an unknown one.
    ///
    /// Compares against both identifiers and generic names. Used for prompts
    /// only; resolution itself is always an exact match.
    pub fn suggest(&self, unknown: &str) -> Vec<&DrugRecord> {
        let query = unknown.trim().to_lowercase();
        if query.is_empty() {
            return Vec::new();
        }

        let mut scored: Vec<(f64, &DrugRecord)> = self
            .records()
            .iter()
            .map(|d| {
                let id_score = jaro_winkler(&query, &d.id.to_lowercase());
                let name_score = jaro_winkler(&query, &d.generic_name.to_lowercase());
                (id_score.max(name_score), d)
            })
            .filter(|(score, _)| *score >= MIN_SIMILARITY)
            .collect();

        scored.sort_by(|a, b| b.0.partial_cmp(&a.0).unwrap_or(std::cmp::Ordering::Equal));

        scored
            .into_iter()
            .take(MAX_SUGGESTIONS)
            .map(|(_, d)| d)
            .collect()
    }
}
