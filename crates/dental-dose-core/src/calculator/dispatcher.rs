//! Dosing dispatcher.
//!
//! Precedence:
//! 1. Local anesthetic category: anesthetic rule, otherwise reference dose
//! 2. Any other drug: the rule registered for its identifier
//! 3. No rule: reference dose (static label text, no computation)

use crate::models::{CalculationResult, DailyAmount, DrugRecord, RegimenStep};

use super::rules::{
    round_half_up, AnestheticRule, DailyDoseRule, DailyRate, DosingRule, DosingRuleTable,
    RegimenRule, SingleDoseRule,
};

/// Maps a normalized weight and a resolved drug to exactly one result.
pub struct DoseDispatcher<'a> {
    rules: &'a DosingRuleTable,
}

impl<'a> DoseDispatcher<'a> {
    pub fn new(rules: &'a DosingRuleTable) -> Self {
        Self { rules }
    }

    /// Compute the result for a drug at the given weight (kg, > 0).
    pub fn dispatch(&self, weight_kg: f64, drug: &DrugRecord) -> CalculationResult {
        let rule = self.rules.get(&drug.id);

        let result = match (drug.is_local_anesthetic(), rule) {
            (true, Some(DosingRule::Anesthetic(rule))) => anesthetic(weight_kg, drug, rule),
            (true, _) => reference(drug),
            (false, Some(DosingRule::Anesthetic(rule))) => anesthetic(weight_kg, drug, rule),
            (false, Some(DosingRule::DailyDose(rule))) => daily_dose(weight_kg, drug, rule),
            (false, Some(DosingRule::Regimen(rule))) => regimen(weight_kg, drug, rule),
            (false, Some(DosingRule::SingleDose(rule))) => single_dose(weight_kg, drug, rule),
            (false, Some(DosingRule::Reference)) | (false, None) => reference(drug),
        };

        tracing::debug!(
            drug_id = %drug.id,
            rule = rule.map(|r| r.kind()).unwrap_or("none"),
            result = result.kind(),
            "Dispatched dose calculation"
        );

        result
    }
}

fn reference(drug: &DrugRecord) -> CalculationResult {
    CalculationResult::Reference { drug: drug.clone() }
}

fn anesthetic(weight_kg: f64, drug: &DrugRecord, rule: &AnestheticRule) -> CalculationResult {
    let max_mg = (weight_kg * rule.mg_per_kg).min(rule.max_mg);
    // Truncate to one decimal, never rounding up past a safe quantity
    let max_cartridges = ((max_mg / rule.mg_per_cartridge) * 10.0).floor() / 10.0;

    CalculationResult::Anesthetic {
        drug: drug.clone(),
        max_mg,
        max_cartridges,
        mg_per_cartridge: rule.mg_per_cartridge,
        formula: format!("{}mg/kg (Max {}mg)", rule.mg_per_kg, rule.max_mg),
    }
}

fn daily_dose(weight_kg: f64, drug: &DrugRecord, rule: &DailyDoseRule) -> CalculationResult {
    let amount = match rule.rate {
        DailyRate::Single(rate) => DailyAmount::Single {
            mg: round_half_up(weight_kg * rate),
        },
        DailyRate::Range { min, max } => DailyAmount::Range {
            min_mg: round_half_up(weight_kg * min),
            max_mg: round_half_up(weight_kg * max),
        },
    };

    CalculationResult::PediatricDailyDose {
        drug: drug.clone(),
        amount,
        notes: rule.notes.clone(),
    }
}

fn regimen(weight_kg: f64, drug: &DrugRecord, rule: &RegimenRule) -> CalculationResult {
    let steps = rule
        .steps
        .iter()
        .map(|step| {
            let mg = round_half_up(weight_kg * step.mg_per_kg);
            let value = if step.suffix.is_empty() {
                format!("{} mg", mg)
            } else {
                format!("{} mg {}", mg, step.suffix)
            };
            RegimenStep {
                label: step.label.clone(),
                value,
            }
        })
        .collect();

    CalculationResult::Regimen {
        drug: drug.clone(),
        steps,
        notes: rule.notes.clone(),
    }
}

fn single_dose(weight_kg: f64, drug: &DrugRecord, rule: &SingleDoseRule) -> CalculationResult {
    let per_dose = |rate: f64| {
        let raw = match rule.max_dose_mg {
            Some(ceiling) => (weight_kg * rate).min(ceiling),
            None => weight_kg * rate,
        };
        rule.precision.apply(raw)
    };

    let daily_max_mg = rule.daily_cap.as_ref().map(|cap| {
        let raw = match cap.max_mg {
            Some(ceiling) => (weight_kg * cap.mg_per_kg).min(ceiling),
            None => weight_kg * cap.mg_per_kg,
        };
        round_half_up(raw)
    });

    CalculationResult::PediatricSingleDose {
        drug: drug.clone(),
        min_dose_mg: per_dose(rule.min_mg_per_kg),
        max_dose_mg: per_dose(rule.max_mg_per_kg),
        frequency: rule.frequency.clone(),
        daily_max_mg,
        notes: rule.notes.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculator::rules::{DailyCapRule, DosePrecision, RegimenStepRule};
    use crate::models::BilingualText;

    fn drug(id: &str, category: &str) -> DrugRecord {
        DrugRecord::new(id.into(), id.into(), BilingualText::new(category, category))
    }

    #[test]
    fn test_lidocaine_20kg() {
        let rules = DosingRuleTable::new();
        let dispatcher = DoseDispatcher::new(&rules);

        match dispatcher.dispatch(20.0, &drug("la1", "Local Anesthetic")) {
            CalculationResult::Anesthetic {
                max_mg,
                max_cartridges,
                mg_per_cartridge,
                formula,
                ..
            } => {
                assert_eq!(max_mg, 140.0);
                assert_eq!(max_cartridges, 3.8);
                assert_eq!(mg_per_cartridge, 36.0);
                assert_eq!(formula, "7mg/kg (Max 500mg)");
            }
            other => panic!("expected anesthetic, got {:?}", other),
        }
    }

    #[test]
    fn test_mepivacaine_formula_keeps_decimal() {
        let rules = DosingRuleTable::new();
        let dispatcher = DoseDispatcher::new(&rules);

        match dispatcher.dispatch(10.0, &drug("la3", "Local Anesthetic")) {
            CalculationResult::Anesthetic { formula, .. } => {
                assert_eq!(formula, "6.6mg/kg (Max 400mg)");
            }
            other => panic!("expected anesthetic, got {:?}", other),
        }
    }

    #[test]
    fn test_unknown_anesthetic_falls_back_to_reference() {
        let rules = DosingRuleTable::new();
        let dispatcher = DoseDispatcher::new(&rules);

        let result = dispatcher.dispatch(20.0, &drug("la9", "Local Anesthetic"));
        assert!(matches!(result, CalculationResult::Reference { .. }));
    }

    #[test]
    fn test_anesthetic_category_ignores_other_rule_kinds() {
        let mut rules = DosingRuleTable::empty();
        rules
            .insert(
                "la9",
                DosingRule::DailyDose(DailyDoseRule {
                    rate: DailyRate::Single(10.0),
                    notes: String::new(),
                }),
            )
            .unwrap();
        let dispatcher = DoseDispatcher::new(&rules);

        let result = dispatcher.dispatch(20.0, &drug("la9", "Local Anesthetic"));
        assert!(matches!(result, CalculationResult::Reference { .. }));
    }

    #[test]
    fn test_metronidazole_single_daily_value() {
        let rules = DosingRuleTable::new();
        let dispatcher = DoseDispatcher::new(&rules);

        match dispatcher.dispatch(12.0, &drug("ab5", "Antibiotic")) {
            CalculationResult::PediatricDailyDose { amount, notes, .. } => {
                assert_eq!(amount, DailyAmount::Single { mg: 360.0 });
                assert!(notes.contains("Avoid alcohol"));
            }
            other => panic!("expected daily dose, got {:?}", other),
        }
    }

    #[test]
    fn test_regimen_without_suffix() {
        let mut rules = DosingRuleTable::empty();
        rules
            .insert(
                "x1",
                DosingRule::Regimen(RegimenRule {
                    steps: vec![RegimenStepRule {
                        label: "Day 1".into(),
                        mg_per_kg: 2.0,
                        suffix: String::new(),
                    }],
                    notes: String::new(),
                }),
            )
            .unwrap();
        let dispatcher = DoseDispatcher::new(&rules);

        match dispatcher.dispatch(10.0, &drug("x1", "Antibiotic")) {
            CalculationResult::Regimen { steps, .. } => {
                assert_eq!(steps[0].value, "20 mg");
            }
            other => panic!("expected regimen, got {:?}", other),
        }
    }

    #[test]
    fn test_single_dose_ceilings() {
        let mut rules = DosingRuleTable::empty();
        rules
            .insert(
                "x1",
                DosingRule::SingleDose(SingleDoseRule {
                    min_mg_per_kg: 5.0,
                    max_mg_per_kg: 10.0,
                    precision: DosePrecision::WholeMg,
                    max_dose_mg: Some(400.0),
                    daily_cap: Some(DailyCapRule {
                        mg_per_kg: 40.0,
                        max_mg: Some(2400.0),
                    }),
                    frequency: "q6-8h".into(),
                    notes: String::new(),
                }),
            )
            .unwrap();
        let dispatcher = DoseDispatcher::new(&rules);

        match dispatcher.dispatch(70.0, &drug("x1", "Analgesic")) {
            CalculationResult::PediatricSingleDose {
                min_dose_mg,
                max_dose_mg,
                daily_max_mg,
                ..
            } => {
                assert_eq!(min_dose_mg, 350.0);
                assert_eq!(max_dose_mg, 400.0);
                assert_eq!(daily_max_mg, Some(2400.0));
            }
            other => panic!("expected single dose, got {:?}", other),
        }
    }

    #[test]
    fn test_explicit_reference_rule() {
        let mut rules = DosingRuleTable::empty();
        rules.insert("cs1", DosingRule::Reference).unwrap();
        let dispatcher = DoseDispatcher::new(&rules);

        let result = dispatcher.dispatch(30.0, &drug("cs1", "Corticosteroid"));
        assert!(matches!(result, CalculationResult::Reference { .. }));
    }
}
