//! Per-identifier dosing strategy table.
//!
//! Every computed dose comes from one tagged [`DosingRule`] keyed by drug
//! identifier. Rules carry the pharmacological constants; the dispatcher only
//! evaluates them. The built-in table can be replaced by a JSON file without
//! touching dispatch logic.

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Rule table errors.
#[derive(Error, Debug)]
pub enum RulesError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid rule for {id}: {reason}")]
    Invalid { id: String, reason: String },
}

pub type RulesResult<T> = Result<T, RulesError>;

/// Local anesthetic maximum-dose constants.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AnestheticRule {
    /// Weight-based ceiling (mg/kg)
    pub mg_per_kg: f64,
    /// Absolute ceiling regardless of weight (mg)
    pub max_mg: f64,
    /// Drug content of one 1.8 mL cartridge (mg)
    pub mg_per_cartridge: f64,
}

/// Daily rate, either one value or a range (mg/kg/day).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "snake_case")]
pub enum DailyRate {
    Single(f64),
    Range { min: f64, max: f64 },
}

/// Pediatric total-daily-dose constants.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DailyDoseRule {
    pub rate: DailyRate,
    pub notes: String,
}

/// One day-group of a regimen.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RegimenStepRule {
    /// Day-group label (e.g., "Day 1")
    pub label: String,
    /// Rate for this day-group (mg/kg)
    pub mg_per_kg: f64,
    /// Text appended after the mg amount (e.g., "(Once daily)")
    #[serde(default)]
    pub suffix: String,
}

/// Multi-day regimen constants.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RegimenRule {
    pub steps: Vec<RegimenStepRule>,
    pub notes: String,
}

/// Rounding applied to per-dose amounts.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum DosePrecision {
    /// Nearest whole mg, half up
    #[default]
    WholeMg,
    /// One decimal place
    TenthMg,
}

impl DosePrecision {
    pub fn apply(self, mg: f64) -> f64 {
        match self {
            DosePrecision::WholeMg => round_half_up(mg),
            DosePrecision::TenthMg => round_half_up(mg * 10.0) / 10.0,
        }
    }
}

/// Daily cap accompanying a per-dose rule.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DailyCapRule {
    /// Weight-based daily cap (mg/kg/day)
    pub mg_per_kg: f64,
    /// Absolute daily ceiling (mg/day)
    #[serde(default)]
    pub max_mg: Option<f64>,
}

/// Per-administration (not daily) dose constants.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SingleDoseRule {
    pub min_mg_per_kg: f64,
    pub max_mg_per_kg: f64,
    #[serde(default)]
    pub precision: DosePrecision,
    /// Absolute per-dose ceiling (mg)
    #[serde(default)]
    pub max_dose_mg: Option<f64>,
    #[serde(default)]
    pub daily_cap: Option<DailyCapRule>,
    /// Frequency label (e.g., "q6-8h")
    pub frequency: String,
    pub notes: String,
}

/// Dosing strategy for one drug identifier.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DosingRule {
    Anesthetic(AnestheticRule),
    DailyDose(DailyDoseRule),
    Regimen(RegimenRule),
    SingleDose(SingleDoseRule),
    /// Explicit fallback to the static label dose
    Reference,
}

impl DosingRule {
    /// Rule kind, matching the serialized `kind` field.
    pub fn kind(&self) -> &'static str {
        match self {
            DosingRule::Anesthetic(_) => "anesthetic",
            DosingRule::DailyDose(_) => "daily_dose",
            DosingRule::Regimen(_) => "regimen",
            DosingRule::SingleDose(_) => "single_dose",
            DosingRule::Reference => "reference",
        }
    }

    fn validate(&self, id: &str) -> RulesResult<()> {
        let check = |name: &str, value: f64| -> RulesResult<()> {
            if value.is_finite() && value >= 0.0 {
                Ok(())
            } else {
                Err(RulesError::Invalid {
                    id: id.to_string(),
                    reason: format!("{} must be a finite non-negative number, got {}", name, value),
                })
            }
        };

        match self {
            DosingRule::Anesthetic(rule) => {
                check("mg_per_kg", rule.mg_per_kg)?;
                check("max_mg", rule.max_mg)?;
                check("mg_per_cartridge", rule.mg_per_cartridge)?;
                if rule.mg_per_cartridge <= 0.0 {
                    return Err(RulesError::Invalid {
                        id: id.to_string(),
                        reason: "mg_per_cartridge must be positive".into(),
                    });
                }
            }
            DosingRule::DailyDose(rule) => match rule.rate {
                DailyRate::Single(rate) => check("rate", rate)?,
                DailyRate::Range { min, max } => {
                    check("rate.min", min)?;
                    check("rate.max", max)?;
                }
            },
            DosingRule::Regimen(rule) => {
                if rule.steps.is_empty() {
                    return Err(RulesError::Invalid {
                        id: id.to_string(),
                        reason: "regimen has no steps".into(),
                    });
                }
                for step in &rule.steps {
                    check("steps.mg_per_kg", step.mg_per_kg)?;
                }
            }
            DosingRule::SingleDose(rule) => {
                check("min_mg_per_kg", rule.min_mg_per_kg)?;
                check("max_mg_per_kg", rule.max_mg_per_kg)?;
                if let Some(max) = rule.max_dose_mg {
                    check("max_dose_mg", max)?;
                }
                if let Some(cap) = &rule.daily_cap {
                    check("daily_cap.mg_per_kg", cap.mg_per_kg)?;
                    if let Some(max) = cap.max_mg {
                        check("daily_cap.max_mg", max)?;
                    }
                }
            }
            DosingRule::Reference => {}
        }
        Ok(())
    }
}

/// Standard half-up rounding to the nearest integer.
///
/// Weights are positive, so `f64::round` (half away from zero) is half-up here.
pub fn round_half_up(value: f64) -> f64 {
    value.round()
}

/// Identifier → rule lookup.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(transparent)]
pub struct DosingRuleTable {
    rules: BTreeMap<String, DosingRule>,
}

impl Default for DosingRuleTable {
    fn default() -> Self {
        Self::new()
    }
}

impl DosingRuleTable {
    /// Create a table with the built-in rules.
    pub fn new() -> Self {
        Self {
            rules: Self::default_rules(),
        }
    }

    /// Create an empty table (every drug falls back to its reference dose).
    pub fn empty() -> Self {
        Self {
            rules: BTreeMap::new(),
        }
    }

    /// Parse and validate a table from JSON.
    pub fn from_json(json: &str) -> RulesResult<Self> {
        let table: Self = serde_json::from_str(json)?;
        for (id, rule) in &table.rules {
            rule.validate(id)?;
        }
        tracing::debug!(rules = table.rules.len(), "Loaded dosing rules from JSON");
        Ok(table)
    }

    /// Load and validate a table from a JSON file.
    pub fn from_path<P: AsRef<Path>>(path: P) -> RulesResult<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Serialize to canonical JSON (sorted by identifier) for fingerprinting.
    pub fn to_canonical_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Look up the rule for an identifier.
    pub fn get(&self, id: &str) -> Option<&DosingRule> {
        self.rules.get(id)
    }

    /// Add or replace a rule after validating it.
    pub fn insert(&mut self, id: &str, rule: DosingRule) -> RulesResult<()> {
        rule.validate(id)?;
        self.rules.insert(id.to_string(), rule);
        Ok(())
    }

    /// Iterate over (identifier, rule) pairs in identifier order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &DosingRule)> {
        self.rules.iter().map(|(id, rule)| (id.as_str(), rule))
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Default dosing rules.
    fn default_rules() -> BTreeMap<String, DosingRule> {
        let mut map = BTreeMap::new();

        let anesthetic = |mg_per_kg: f64, max_mg: f64, mg_per_cartridge: f64| {
            DosingRule::Anesthetic(AnestheticRule {
                mg_per_kg,
                max_mg,
                mg_per_cartridge,
            })
        };
        let daily_range = |min: f64, max: f64, notes: &str| {
            DosingRule::DailyDose(DailyDoseRule {
                rate: DailyRate::Range { min, max },
                notes: notes.into(),
            })
        };
        let daily_single = |rate: f64, notes: &str| {
            DosingRule::DailyDose(DailyDoseRule {
                rate: DailyRate::Single(rate),
                notes: notes.into(),
            })
        };

        // Local anesthetics (standard 1.8 mL cartridge)
        map.insert("la1".into(), anesthetic(7.0, 500.0, 36.0)); // Lidocaine 2%
        map.insert("la2".into(), anesthetic(7.0, 500.0, 72.0)); // Articaine 4%
        map.insert("la3".into(), anesthetic(6.6, 400.0, 54.0)); // Mepivacaine 3%
        map.insert("la4".into(), anesthetic(2.0, 90.0, 9.0)); // Bupivacaine 0.5%
        map.insert("la5".into(), anesthetic(8.0, 600.0, 72.0)); // Prilocaine 4%

        // Oral antibiotics
        map.insert(
            "ab1".into(),
            daily_range(
                20.0,
                50.0,
                "Divided every 8 hours (TID). For severe infections, up to 90mg/kg/day.",
            ),
        );
        map.insert(
            "ab2".into(),
            daily_range(
                20.0,
                40.0,
                "Based on Amoxicillin component. Divided q12h or q8h depending on formulation.",
            ),
        );
        map.insert(
            "ab3".into(),
            daily_range(8.0, 20.0, "Divided into 3 or 4 equal doses (q6h or q8h)."),
        );
        map.insert(
            "ab4".into(),
            DosingRule::Regimen(RegimenRule {
                steps: vec![
                    RegimenStepRule {
                        label: "Day 1".into(),
                        mg_per_kg: 10.0,
                        suffix: "(Once daily)".into(),
                    },
                    RegimenStepRule {
                        label: "Days 2-5".into(),
                        mg_per_kg: 5.0,
                        suffix: "(Once daily)".into(),
                    },
                ],
                notes: "Oral suspension. Administer 1 hour before or 2 hours after a meal.".into(),
            }),
        );
        map.insert(
            "ab5".into(),
            daily_single(30.0, "Divided into 3-4 doses (q6-8h). Avoid alcohol."),
        );

        // Injectable antibiotics
        map.insert(
            "ab8".into(),
            daily_range(50.0, 75.0, "Given IV/IM once daily (q24h). Max 2g/day generally."),
        );
        map.insert(
            "ab9".into(),
            daily_range(
                50.0,
                100.0,
                "Divided q6-8h. Up to 150-200 mg/kg/day for severe meningitis.",
            ),
        );
        map.insert(
            "ab10".into(),
            daily_range(
                150.0,
                300.0,
                "Dosage based on Ampicillin component. Divided q6h.",
            ),
        );
        map.insert(
            "ab11".into(),
            daily_single(
                100.0,
                "50 mg/kg every 12 hours. For meningitis/severe: every 8 hours.",
            ),
        );

        // Neurological agents
        map.insert(
            "neur1".into(),
            daily_range(
                10.0,
                30.0,
                "Titrate slowly. Start 10-15 mg/kg/day, up to 35-50 mg/kg/day. Divided TID.",
            ),
        );
        map.insert(
            "neur2".into(),
            daily_single(
                40.0,
                "Start 20 mg/kg/day (divided BID), increase to 40-60 mg/kg/day.",
            ),
        );

        // Antiemetics
        map.insert(
            "ae1".into(),
            DosingRule::SingleDose(SingleDoseRule {
                min_mg_per_kg: 0.1,
                max_mg_per_kg: 0.1,
                precision: DosePrecision::TenthMg,
                max_dose_mg: None,
                daily_cap: None,
                frequency: "q8h".into(),
                notes: "0.1 mg/kg IV/PO (Max 4mg/dose for children < 15kg).".into(),
            }),
        );
        map.insert(
            "ae2".into(),
            DosingRule::SingleDose(SingleDoseRule {
                min_mg_per_kg: 0.1,
                max_mg_per_kg: 0.1,
                precision: DosePrecision::TenthMg,
                max_dose_mg: None,
                daily_cap: Some(DailyCapRule {
                    mg_per_kg: 0.5,
                    max_mg: None,
                }),
                frequency: "q8h".into(),
                notes: "Caution: Risk of EPS in children. Max 0.5 mg/kg/day.".into(),
            }),
        );
        map.insert(
            "ae3".into(),
            DosingRule::SingleDose(SingleDoseRule {
                min_mg_per_kg: 0.25,
                max_mg_per_kg: 0.25,
                precision: DosePrecision::TenthMg,
                max_dose_mg: None,
                daily_cap: Some(DailyCapRule {
                    mg_per_kg: 2.4,
                    max_mg: None,
                }),
                frequency: "3-4 times daily".into(),
                notes: "Max 2.4 mg/kg/day.".into(),
            }),
        );

        // Analgesics
        map.insert(
            "an1".into(),
            DosingRule::SingleDose(SingleDoseRule {
                min_mg_per_kg: 5.0,
                max_mg_per_kg: 10.0,
                precision: DosePrecision::WholeMg,
                max_dose_mg: None,
                daily_cap: Some(DailyCapRule {
                    mg_per_kg: 40.0,
                    max_mg: Some(2400.0),
                }),
                frequency: "q6-8h".into(),
                notes: "Max 40mg/kg/day. Do not exceed 400mg/dose for children.".into(),
            }),
        );
        map.insert(
            "an4".into(),
            DosingRule::SingleDose(SingleDoseRule {
                min_mg_per_kg: 10.0,
                max_mg_per_kg: 15.0,
                precision: DosePrecision::WholeMg,
                max_dose_mg: None,
                daily_cap: None,
                frequency: "q4-6h".into(),
                notes: "Max 5 doses in 24 hours. Do not exceed 4g/day (Adults) or 75mg/kg/day (Child).".into(),
            }),
        );

        map
    }
}
