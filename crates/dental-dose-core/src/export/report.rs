//! Self-describing calculation report for hand-off to other systems.

use serde::{Deserialize, Serialize};

use crate::models::{CalculationInput, CalculationResult, WeightUnit};

/// Report format version.
pub const REPORT_FORMAT_VERSION: &str = "1.0";

/// Report metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportMetadata {
    /// Export format version
    pub format_version: String,
    /// Generation timestamp (RFC 3339)
    pub generated_at: String,
    /// Fingerprint of the drug and rule tables used
    pub table_fingerprint: String,
    /// Weight text as entered
    pub weight: String,
    /// Unit the weight was entered in
    pub unit: WeightUnit,
    /// Weight after conversion to kilograms
    pub weight_kg: f64,
    /// Selected drug identifier
    pub drug_id: String,
}

/// A computed result with the context needed to reproduce it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalculationReport {
    pub metadata: ReportMetadata,
    pub result: CalculationResult,
}

impl CalculationReport {
    /// Wrap a result. The timestamp is stamped here, never on the result.
    pub fn new(
        input: &CalculationInput,
        weight_kg: f64,
        table_fingerprint: &str,
        result: CalculationResult,
    ) -> Self {
        Self {
            metadata: ReportMetadata {
                format_version: REPORT_FORMAT_VERSION.to_string(),
                generated_at: chrono::Utc::now().to_rfc3339(),
                table_fingerprint: table_fingerprint.to_string(),
                weight: input.weight.clone(),
                unit: input.unit,
                weight_kg,
                drug_id: input.drug_id.clone(),
            },
            result,
        }
    }

    /// Export to JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}
