//! Calculation input and result models.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::DrugRecord;

/// Pounds to kilograms.
pub const LB_TO_KG: f64 = 0.453592;

/// Unit the patient weight was entered in.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum WeightUnit {
    #[default]
    Kg,
    Lb,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown weight unit: {0}")]
pub struct WeightUnitParseError(pub String);

impl WeightUnit {
    /// Multiplier that converts a weight in this unit to kilograms.
    pub fn to_kg_factor(self) -> f64 {
        match self {
            WeightUnit::Kg => 1.0,
            WeightUnit::Lb => LB_TO_KG,
        }
    }

    /// Short label ("kg" / "lb").
    pub fn as_str(self) -> &'static str {
        match self {
            WeightUnit::Kg => "kg",
            WeightUnit::Lb => "lb",
        }
    }
}

impl std::fmt::Display for WeightUnit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for WeightUnit {
    type Err = WeightUnitParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "kg" | "kgs" | "kilogram" | "kilograms" => Ok(WeightUnit::Kg),
            "lb" | "lbs" | "pound" | "pounds" => Ok(WeightUnit::Lb),
            _ => Err(WeightUnitParseError(s.to_string())),
        }
    }
}

/// Raw calculator input as entered by the user.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CalculationInput {
    /// Weight text exactly as typed
    pub weight: String,
    /// Unit of the typed weight
    pub unit: WeightUnit,
    /// Selected drug identifier
    pub drug_id: String,
}

impl CalculationInput {
    pub fn new(weight: impl Into<String>, unit: WeightUnit, drug_id: impl Into<String>) -> Self {
        Self {
            weight: weight.into(),
            unit,
            drug_id: drug_id.into(),
        }
    }
}

/// Total daily amount for a pediatric agent.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "snake_case")]
pub enum DailyAmount {
    /// One daily value (mg/day)
    Single { mg: f64 },
    /// A daily range (mg/day)
    Range { min_mg: f64, max_mg: f64 },
}

/// One labeled step in a multi-day regimen.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RegimenStep {
    /// Day-group label (e.g., "Day 1", "Days 2-5")
    pub label: String,
    /// Pre-composed dose text (e.g., "250 mg (Once daily)")
    pub value: String,
}

/// Outcome of a dose calculation.
///
/// Exactly one variant is produced per valid input.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type")]
pub enum CalculationResult {
    /// No weight-based formula applies; show the static label dose.
    #[serde(rename = "reference")]
    Reference { drug: DrugRecord },

    /// Local anesthetic maximum safe dose, cartridge-quantized.
    #[serde(rename = "anesthetic")]
    Anesthetic {
        drug: DrugRecord,
        /// Ceiling-clamped maximum in mg (not rounded)
        max_mg: f64,
        /// Cartridges, truncated to one decimal place
        max_cartridges: f64,
        /// Drug content of one cartridge in mg
        mg_per_cartridge: f64,
        /// Human-readable formula (e.g., "7mg/kg (Max 500mg)")
        formula: String,
    },

    /// Total daily mg for pediatric antibiotics and neuro agents.
    #[serde(rename = "pediatric_daily")]
    PediatricDailyDose {
        drug: DrugRecord,
        amount: DailyAmount,
        notes: String,
    },

    /// Per-administration dose range for analgesics and antiemetics.
    #[serde(rename = "pediatric_dose")]
    PediatricSingleDose {
        drug: DrugRecord,
        min_dose_mg: f64,
        max_dose_mg: f64,
        frequency: String,
        daily_max_mg: Option<f64>,
        notes: String,
    },

    /// Multi-day dosing schedule.
    #[serde(rename = "regimen")]
    Regimen {
        drug: DrugRecord,
        steps: Vec<RegimenStep>,
        notes: String,
    },
}

impl CalculationResult {
    /// The drug this result was computed for.
    pub fn drug(&self) -> &DrugRecord {
        match self {
            CalculationResult::Reference { drug }
            | CalculationResult::Anesthetic { drug, .. }
            | CalculationResult::PediatricDailyDose { drug, .. }
            | CalculationResult::PediatricSingleDose { drug, .. }
            | CalculationResult::Regimen { drug, .. } => drug,
        }
    }

    /// Variant tag, matching the serialized `type` field.
    pub fn kind(&self) -> &'static str {
        match self {
            CalculationResult::Reference { .. } => "reference",
            CalculationResult::Anesthetic { .. } => "anesthetic",
            CalculationResult::PediatricDailyDose { .. } => "pediatric_daily",
            CalculationResult::PediatricSingleDose { .. } => "pediatric_dose",
            CalculationResult::Regimen { .. } => "regimen",
        }
    }

    /// Check if a weight-based computation was performed.
    pub fn is_computed(&self) -> bool {
        !matches!(self, CalculationResult::Reference { .. })
    }
}
