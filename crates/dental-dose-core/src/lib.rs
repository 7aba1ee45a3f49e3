//! Dental Dose Core Library
//!
//! Weight-based dose calculator and drug reference table for dental practice.
//!
//! # Architecture
//!
//! ```text
//! weight text + unit ──► Weight Normalizer ──► kg
//!                                               │
//! drug id ──────────────► Drug Resolver ──► DrugRecord
//!                              ▲                │
//!                          Formulary            ▼
//!                                        Dosing Dispatcher ◄── DosingRuleTable
//!                                               │
//!                                               ▼
//!                                       CalculationResult
//!                                               │
//!                                     Result Renderer (UI)
//! ```
//!
//! # Core Principle
//!
//! **A missing result is not an error.** Invalid weight or unknown drug means
//! "nothing to show yet", and drugs without a weight-based rule fall back to
//! their static reference dose.
//!
//! # Modules
//!
//! - [`models`]: Domain types (DrugRecord, CalculationResult, etc.)
//! - [`formulary`]: Read-only drug reference table with browser queries
//! - [`calculator`]: Weight normalizer, drug resolver, dosing dispatcher and rule table
//! - [`export`]: Calculation report export

pub mod calculator;
pub mod export;
pub mod formulary;
pub mod models;

// Re-export commonly used types
pub use calculator::{
    table_fingerprint, CalculationError, Calculator, DoseDispatcher, DosingRule, DosingRuleTable,
};
pub use export::CalculationReport;
pub use formulary::{DrugQuery, Formulary};
pub use models::{
    BilingualText, CalculationInput, CalculationResult, DailyAmount, DrugRecord, Language,
    RegimenStep, WeightUnit,
};

// UniFFI setup - using proc macros
uniffi::setup_scaffolding!();

use std::sync::Arc;

// =========================================================================
// FFI Error Type
// =========================================================================

#[derive(Debug, thiserror::Error, uniffi::Error)]
pub enum DentalDoseError {
    #[error("Insufficient input: {0}")]
    InsufficientInput(String),

    #[error("Unknown drug: {0}")]
    UnknownDrug(String),

    #[error("Invalid data: {0}")]
    InvalidData(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl From<CalculationError> for DentalDoseError {
    fn from(e: CalculationError) -> Self {
        match e {
            CalculationError::InsufficientInput(w) => DentalDoseError::InsufficientInput(w),
            CalculationError::UnknownDrug(id) => DentalDoseError::UnknownDrug(id),
        }
    }
}

impl From<formulary::FormularyError> for DentalDoseError {
    fn from(e: formulary::FormularyError) -> Self {
        DentalDoseError::InvalidData(e.to_string())
    }
}

impl From<calculator::RulesError> for DentalDoseError {
    fn from(e: calculator::RulesError) -> Self {
        DentalDoseError::InvalidData(e.to_string())
    }
}

impl From<serde_json::Error> for DentalDoseError {
    fn from(e: serde_json::Error) -> Self {
        DentalDoseError::SerializationError(e.to_string())
    }
}

// =========================================================================
// Factory Functions (exported to FFI)
// =========================================================================

/// Open the calculator with the built-in tables.
#[uniffi::export]
pub fn open_builtin() -> Result<Arc<DentalDoseCore>, DentalDoseError> {
    DentalDoseCore::with_tables(Formulary::builtin(), DosingRuleTable::new()).map(Arc::new)
}

/// Open the calculator with externally supplied JSON tables.
#[uniffi::export]
pub fn open_with_tables(
    formulary_json: String,
    rules_json: String,
) -> Result<Arc<DentalDoseCore>, DentalDoseError> {
    let formulary = Formulary::from_json(&formulary_json)?;
    let rules = DosingRuleTable::from_json(&rules_json)?;
    DentalDoseCore::with_tables(formulary, rules).map(Arc::new)
}

// =========================================================================
// Main API Object
// =========================================================================

/// Read-only calculator handle for FFI. Tables never change after opening,
/// so no locking is needed.
#[derive(uniffi::Object)]
pub struct DentalDoseCore {
    formulary: Formulary,
    rules: DosingRuleTable,
    fingerprint: String,
}

impl DentalDoseCore {
    fn with_tables(formulary: Formulary, rules: DosingRuleTable) -> Result<Self, DentalDoseError> {
        let fingerprint = table_fingerprint(&formulary, &rules)?;
        Ok(Self {
            formulary,
            rules,
            fingerprint,
        })
    }

    fn calculator(&self) -> Calculator<'_> {
        Calculator::new(&self.formulary, &self.rules)
    }
}

#[uniffi::export]
impl DentalDoseCore {
    // =========================================================================
    // Calculator Operations
    // =========================================================================

    /// Calculate a dose; `None` means there is nothing to show yet.
    pub fn calculate(
        &self,
        weight: String,
        unit: FfiWeightUnit,
        drug_id: String,
    ) -> Option<FfiCalculationResult> {
        self.calculator()
            .calculate(&weight, unit.into(), &drug_id)
            .map(|r| r.into())
    }

    /// Calculate a dose, reporting why nothing could be computed.
    pub fn try_calculate(
        &self,
        weight: String,
        unit: FfiWeightUnit,
        drug_id: String,
    ) -> Result<FfiCalculationResult, DentalDoseError> {
        let result = self
            .calculator()
            .try_calculate(&weight, unit.into(), &drug_id)?;
        Ok(result.into())
    }

    /// Calculate and export a self-describing JSON report.
    pub fn report_json(
        &self,
        weight: String,
        unit: FfiWeightUnit,
        drug_id: String,
    ) -> Result<String, DentalDoseError> {
        let input = CalculationInput::new(weight, unit.into(), drug_id);
        let result = self
            .calculator()
            .try_calculate(&input.weight, input.unit, &input.drug_id)?;
        let weight_kg = calculator::normalize_weight(&input.weight, input.unit)
            .ok_or_else(|| DentalDoseError::InsufficientInput(input.weight.clone()))?;
        let report = CalculationReport::new(&input, weight_kg, &self.fingerprint, result);
        Ok(report.to_json()?)
    }

    // =========================================================================
    // Drug Table Operations
    // =========================================================================

    /// Get a drug by identifier.
    pub fn get_drug(&self, drug_id: String) -> Option<FfiDrug> {
        self.formulary.get(&drug_id).map(|d| d.clone().into())
    }

    /// All drugs in table order.
    pub fn list_drugs(&self) -> Vec<FfiDrug> {
        self.formulary
            .records()
            .iter()
            .map(|d| d.clone().into())
            .collect()
    }

    /// Search by generic/brand name, optionally within one category.
    pub fn search_drugs(
        &self,
        query: String,
        category: Option<String>,
        lang: FfiLanguage,
    ) -> Vec<FfiDrug> {
        let drug_query = DrugQuery {
            text: query,
            category,
            lang: lang.into(),
        };
        self.formulary
            .search(&drug_query)
            .into_iter()
            .map(|d| d.clone().into())
            .collect()
    }

    /// Distinct categories in the given language.
    pub fn categories(&self, lang: FfiLanguage) -> Vec<String> {
        self.formulary
            .categories(lang.into())
            .into_iter()
            .map(String::from)
            .collect()
    }

    /// Close matches for an unknown drug identifier.
    pub fn suggest_drugs(&self, unknown: String) -> Vec<FfiDrug> {
        self.formulary
            .suggest(&unknown)
            .into_iter()
            .map(|d| d.clone().into())
            .collect()
    }

    /// Fingerprint of the loaded tables.
    pub fn fingerprint(&self) -> String {
        self.fingerprint.clone()
    }
}

// =========================================================================
// FFI Types
// =========================================================================

/// FFI-safe weight unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, uniffi::Enum)]
pub enum FfiWeightUnit {
    Kg,
    Lb,
}

impl From<FfiWeightUnit> for WeightUnit {
    fn from(unit: FfiWeightUnit) -> Self {
        match unit {
            FfiWeightUnit::Kg => WeightUnit::Kg,
            FfiWeightUnit::Lb => WeightUnit::Lb,
        }
    }
}

/// FFI-safe display language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, uniffi::Enum)]
pub enum FfiLanguage {
    En,
    Ar,
}

impl From<FfiLanguage> for Language {
    fn from(lang: FfiLanguage) -> Self {
        match lang {
            FfiLanguage::En => Language::En,
            FfiLanguage::Ar => Language::Ar,
        }
    }
}

/// FFI-safe drug record.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiDrug {
    pub id: String,
    pub generic_name: String,
    pub brand_names: Vec<String>,
    pub category_en: String,
    pub category_ar: String,
    pub description_en: String,
    pub description_ar: String,
    pub dose_en: Option<String>,
    pub dose_ar: Option<String>,
}

impl From<DrugRecord> for FfiDrug {
    fn from(drug: DrugRecord) -> Self {
        let (dose_en, dose_ar) = match drug.dose {
            Some(dose) => (Some(dose.en), Some(dose.ar)),
            None => (None, None),
        };
        Self {
            id: drug.id,
            generic_name: drug.generic_name,
            brand_names: drug.brand_names,
            category_en: drug.category.en,
            category_ar: drug.category.ar,
            description_en: drug.description.en,
            description_ar: drug.description.ar,
            dose_en,
            dose_ar,
        }
    }
}

/// FFI-safe daily amount.
#[derive(Debug, Clone, PartialEq, uniffi::Enum)]
pub enum FfiDailyAmount {
    Single { mg: f64 },
    Range { min_mg: f64, max_mg: f64 },
}

impl From<DailyAmount> for FfiDailyAmount {
    fn from(amount: DailyAmount) -> Self {
        match amount {
            DailyAmount::Single { mg } => FfiDailyAmount::Single { mg },
            DailyAmount::Range { min_mg, max_mg } => FfiDailyAmount::Range { min_mg, max_mg },
        }
    }
}

/// FFI-safe regimen step.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiRegimenStep {
    pub label: String,
    pub value: String,
}

impl From<RegimenStep> for FfiRegimenStep {
    fn from(step: RegimenStep) -> Self {
        Self {
            label: step.label,
            value: step.value,
        }
    }
}

/// FFI-safe calculation result.
#[derive(Debug, Clone, uniffi::Enum)]
pub enum FfiCalculationResult {
    Reference {
        drug: FfiDrug,
    },
    Anesthetic {
        drug: FfiDrug,
        max_mg: f64,
        max_cartridges: f64,
        mg_per_cartridge: f64,
        formula: String,
    },
    PediatricDailyDose {
        drug: FfiDrug,
        amount: FfiDailyAmount,
        notes: String,
    },
    PediatricSingleDose {
        drug: FfiDrug,
        min_dose_mg: f64,
        max_dose_mg: f64,
        frequency: String,
        daily_max_mg: Option<f64>,
        notes: String,
    },
    Regimen {
        drug: FfiDrug,
        steps: Vec<FfiRegimenStep>,
        notes: String,
    },
}

impl From<CalculationResult> for FfiCalculationResult {
    fn from(result: CalculationResult) -> Self {
        match result {
            CalculationResult::Reference { drug } => FfiCalculationResult::Reference {
                drug: drug.into(),
            },
            CalculationResult::Anesthetic {
                drug,
                max_mg,
                max_cartridges,
                mg_per_cartridge,
                formula,
            } => FfiCalculationResult::Anesthetic {
                drug: drug.into(),
                max_mg,
                max_cartridges,
                mg_per_cartridge,
                formula,
            },
            CalculationResult::PediatricDailyDose {
                drug,
                amount,
                notes,
            } => FfiCalculationResult::PediatricDailyDose {
                drug: drug.into(),
                amount: amount.into(),
                notes,
            },
            CalculationResult::PediatricSingleDose {
                drug,
                min_dose_mg,
                max_dose_mg,
                frequency,
                daily_max_mg,
                notes,
            } => FfiCalculationResult::PediatricSingleDose {
                drug: drug.into(),
                min_dose_mg,
                max_dose_mg,
                frequency,
                daily_max_mg,
                notes,
            },
            CalculationResult::Regimen { drug, steps, notes } => FfiCalculationResult::Regimen {
                drug: drug.into(),
                steps: steps.into_iter().map(|s| s.into()).collect(),
                notes,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ffi_calculate_anesthetic() {
        let core = open_builtin().unwrap();
        let result = core.calculate("70".into(), FfiWeightUnit::Kg, "la4".into());

        match result {
            Some(FfiCalculationResult::Anesthetic {
                max_mg,
                max_cartridges,
                drug,
                ..
            }) => {
                assert_eq!(max_mg, 90.0);
                assert_eq!(max_cartridges, 10.0);
                assert_eq!(drug.generic_name, "Bupivacaine 0.5%");
            }
            other => panic!("expected anesthetic, got {:?}", other),
        }
    }

    #[test]
    fn test_ffi_try_calculate_errors() {
        let core = open_builtin().unwrap();

        let err = core
            .try_calculate("".into(), FfiWeightUnit::Kg, "la1".into())
            .unwrap_err();
        assert!(matches!(err, DentalDoseError::InsufficientInput(_)));

        let err = core
            .try_calculate("20".into(), FfiWeightUnit::Kg, "nope".into())
            .unwrap_err();
        assert!(matches!(err, DentalDoseError::UnknownDrug(_)));
    }

    #[test]
    fn test_ffi_reference_carries_bilingual_dose() {
        let core = open_builtin().unwrap();
        match core.calculate("60".into(), FfiWeightUnit::Kg, "cs1".into()) {
            Some(FfiCalculationResult::Reference { drug }) => {
                assert_eq!(drug.dose_en.as_deref(), Some("4-8mg pre-op"));
                assert_eq!(drug.dose_ar.as_deref(), Some("4-8 مجم قبل الجراحة"));
            }
            other => panic!("expected reference, got {:?}", other),
        }
    }

    #[test]
    fn test_ffi_search_and_categories() {
        let core = open_builtin().unwrap();

        let results = core.search_drugs("panadol".into(), None, FfiLanguage::En);
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].id, "an4");

        let categories = core.categories(FfiLanguage::Ar);
        assert!(categories.contains(&"مطهر".to_string()));
    }

    #[test]
    fn test_open_with_tables() {
        let formulary_json = r#"[{
            "id": "x1",
            "generic_name": "Test Anesthetic",
            "category": {"en": "Local Anesthetic", "ar": "مخدر موضعي"},
            "description": {"en": "", "ar": ""}
        }]"#;
        let rules_json =
            r#"{"x1": {"kind": "anesthetic", "mg_per_kg": 4, "max_mg": 300, "mg_per_cartridge": 36}}"#;

        let core = open_with_tables(formulary_json.into(), rules_json.into()).unwrap();
        assert_eq!(core.list_drugs().len(), 1);
        assert_ne!(core.fingerprint(), open_builtin().unwrap().fingerprint());

        match core.calculate("10".into(), FfiWeightUnit::Kg, "x1".into()) {
            Some(FfiCalculationResult::Anesthetic { max_mg, max_cartridges, .. }) => {
                assert_eq!(max_mg, 40.0);
                assert_eq!(max_cartridges, 1.1);
            }
            other => panic!("expected anesthetic, got {:?}", other),
        }
    }

    #[test]
    fn test_open_with_invalid_tables() {
        let result = open_with_tables("not json".into(), "{}".into());
        assert!(matches!(result, Err(DentalDoseError::InvalidData(_))));
    }

    #[test]
    fn test_report_json() {
        let core = open_builtin().unwrap();
        let json = core
            .report_json("10".into(), FfiWeightUnit::Lb, "ab1".into())
            .unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["metadata"]["unit"], "lb");
        assert_eq!(value["metadata"]["table_fingerprint"], core.fingerprint().as_str());
        assert_eq!(value["result"]["type"], "pediatric_daily");
    }
}
