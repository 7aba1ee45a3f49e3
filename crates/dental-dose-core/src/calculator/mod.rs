//! Dose calculator.
//!
//! Pipeline: Weight Normalization → Drug Resolution → Dosing Dispatch
//!
//! Every call is a pure derivation from its inputs and the two read-only
//! tables; nothing is cached between calls.

mod dispatcher;
mod normalizer;
mod rules;

pub use dispatcher::*;
pub use normalizer::*;
pub use rules::*;

use sha2::{Digest, Sha256};
use thiserror::Error;

use crate::formulary::Formulary;
use crate::models::{CalculationInput, CalculationResult, DrugRecord, WeightUnit};

/// Reasons a calculation produced nothing to show.
///
/// Neither is a failure for the user: the first is a prompt to enter a weight,
/// the second cannot occur when the selector is populated from the same table.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CalculationError {
    #[error("Enter a positive patient weight (got {0:?})")]
    InsufficientInput(String),

    #[error("Unknown drug id: {0}")]
    UnknownDrug(String),
}

pub type CalculationOutcome<T> = Result<T, CalculationError>;

/// Calculator over a drug table and a dosing-rule table.
pub struct Calculator<'a> {
    formulary: &'a Formulary,
    dispatcher: DoseDispatcher<'a>,
}

impl<'a> Calculator<'a> {
    /// Create a calculator over the given tables.
    pub fn new(formulary: &'a Formulary, rules: &'a DosingRuleTable) -> Self {
        Self {
            formulary,
            dispatcher: DoseDispatcher::new(rules),
        }
    }

    /// Resolve a drug by exact identifier.
    pub fn resolve(&self, drug_id: &str) -> CalculationOutcome<&'a DrugRecord> {
        self.formulary
            .get(drug_id)
            .ok_or_else(|| CalculationError::UnknownDrug(drug_id.to_string()))
    }

    /// Calculate, reporting why nothing could be computed.
    pub fn try_calculate(
        &self,
        weight: &str,
        unit: WeightUnit,
        drug_id: &str,
    ) -> CalculationOutcome<CalculationResult> {
        let weight_kg = normalize_weight(weight, unit)
            .ok_or_else(|| CalculationError::InsufficientInput(weight.to_string()))?;
        let drug = self.resolve(drug_id)?;
        Ok(self.dispatcher.dispatch(weight_kg, drug))
    }

    /// Calculate; `None` means there is nothing to show yet.
    pub fn calculate(&self, weight: &str, unit: WeightUnit, drug_id: &str) -> Option<CalculationResult> {
        self.try_calculate(weight, unit, drug_id).ok()
    }

    /// Calculate from a bundled input.
    pub fn calculate_input(&self, input: &CalculationInput) -> Option<CalculationResult> {
        self.calculate(&input.weight, input.unit, &input.drug_id)
    }

    /// Calculate for a weight already in kilograms.
    pub fn calculate_kg(&self, weight_kg: f64, drug_id: &str) -> CalculationOutcome<CalculationResult> {
        if !(weight_kg.is_finite() && weight_kg > 0.0) {
            return Err(CalculationError::InsufficientInput(weight_kg.to_string()));
        }
        let drug = self.resolve(drug_id)?;
        Ok(self.dispatcher.dispatch(weight_kg, drug))
    }
}

/// SHA-256 (hex) over the canonical JSON of both tables.
///
/// Identifies the exact data version a result was computed against.
pub fn table_fingerprint(
    formulary: &Formulary,
    rules: &DosingRuleTable,
) -> Result<String, serde_json::Error> {
    let mut hasher = Sha256::new();
    hasher.update(formulary.to_canonical_json()?.as_bytes());
    hasher.update(b"\n");
    hasher.update(rules.to_canonical_json()?.as_bytes());
    Ok(hex::encode(hasher.finalize()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::DailyAmount;

    #[test]
    fn test_insufficient_input() {
        let formulary = Formulary::builtin();
        let rules = DosingRuleTable::new();
        let calc = Calculator::new(&formulary, &rules);

        assert_eq!(
            calc.try_calculate("", WeightUnit::Kg, "la1"),
            Err(CalculationError::InsufficientInput(String::new()))
        );
        assert!(calc.calculate("-3", WeightUnit::Kg, "la1").is_none());
    }

    #[test]
    fn test_unknown_drug() {
        let formulary = Formulary::builtin();
        let rules = DosingRuleTable::new();
        let calc = Calculator::new(&formulary, &rules);

        assert_eq!(
            calc.try_calculate("20", WeightUnit::Kg, "zz1"),
            Err(CalculationError::UnknownDrug("zz1".into()))
        );
    }

    #[test]
    fn test_weight_checked_before_drug() {
        let formulary = Formulary::builtin();
        let rules = DosingRuleTable::new();
        let calc = Calculator::new(&formulary, &rules);

        assert!(matches!(
            calc.try_calculate("abc", WeightUnit::Kg, "zz1"),
            Err(CalculationError::InsufficientInput(_))
        ));
    }

    #[test]
    fn test_rule_for_drug_missing_from_formulary() {
        let formulary = Formulary::new(Vec::new()).unwrap();
        let rules = DosingRuleTable::new();
        let calc = Calculator::new(&formulary, &rules);

        assert!(calc.calculate("20", WeightUnit::Kg, "la1").is_none());
    }

    #[test]
    fn test_calculate_input() {
        let formulary = Formulary::builtin();
        let rules = DosingRuleTable::new();
        let calc = Calculator::new(&formulary, &rules);

        let input = CalculationInput::new("15", WeightUnit::Kg, "ab1");
        match calc.calculate_input(&input) {
            Some(CalculationResult::PediatricDailyDose { amount, .. }) => {
                assert_eq!(
                    amount,
                    DailyAmount::Range {
                        min_mg: 300.0,
                        max_mg: 750.0
                    }
                );
            }
            other => panic!("expected daily dose, got {:?}", other),
        }
    }

    #[test]
    fn test_calculate_kg_rejects_non_positive() {
        let formulary = Formulary::builtin();
        let rules = DosingRuleTable::new();
        let calc = Calculator::new(&formulary, &rules);

        assert!(calc.calculate_kg(0.0, "la1").is_err());
        assert!(calc.calculate_kg(f64::NAN, "la1").is_err());
        assert!(calc.calculate_kg(20.0, "la1").is_ok());
    }

    #[test]
    fn test_fingerprint_deterministic_and_sensitive() {
        let formulary = Formulary::builtin();
        let rules = DosingRuleTable::new();

        let a = table_fingerprint(&formulary, &rules).unwrap();
        let b = table_fingerprint(&formulary, &rules).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.len(), 64);

        let empty = DosingRuleTable::empty();
        let c = table_fingerprint(&formulary, &empty).unwrap();
        assert_ne!(a, c);
    }
}
