//! Reference table loading.
//!
//! Either table can be swapped for a JSON file; the other keeps its built-in
//! default.

use std::path::Path;

use anyhow::{Context, Result};
use dental_dose_core::{DosingRuleTable, Formulary};

/// The two read-only tables a calculation runs against.
pub struct Tables {
    pub formulary: Formulary,
    pub rules: DosingRuleTable,
}

impl Tables {
    pub fn load(formulary_path: Option<&Path>, rules_path: Option<&Path>) -> Result<Self> {
        let formulary = match formulary_path {
            Some(path) => Formulary::from_path(path)
                .with_context(|| format!("failed to load formulary from {}", path.display()))?,
            None => Formulary::builtin(),
        };

        let rules = match rules_path {
            Some(path) => DosingRuleTable::from_path(path)
                .with_context(|| format!("failed to load dosing rules from {}", path.display()))?,
            None => DosingRuleTable::new(),
        };

        tracing::debug!(
            drugs = formulary.len(),
            rules = rules.len(),
            "Reference tables ready"
        );

        Ok(Self { formulary, rules })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_builtin() {
        let tables = Tables::load(None, None).unwrap();
        assert!(!tables.formulary.is_empty());
        assert!(!tables.rules.is_empty());
    }

    #[test]
    fn test_missing_file_has_context() {
        let err = Tables::load(Some(Path::new("/nonexistent/drugs.json")), None)
            .err()
            .unwrap();
        assert!(err.to_string().contains("failed to load formulary"));
    }
}
