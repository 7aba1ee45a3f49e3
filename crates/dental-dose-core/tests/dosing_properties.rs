//! Property tests for the dose calculator.

use dental_dose_core::calculator::{AnestheticRule, Calculator, DosingRule, DosingRuleTable};
use dental_dose_core::formulary::Formulary;
use dental_dose_core::models::{CalculationResult, WeightUnit, LB_TO_KG};
use proptest::prelude::*;

const ANESTHETIC_IDS: [&str; 5] = ["la1", "la2", "la3", "la4", "la5"];

fn anesthetic_rule(rules: &DosingRuleTable, id: &str) -> AnestheticRule {
    match rules.get(id) {
        Some(DosingRule::Anesthetic(rule)) => rule.clone(),
        other => panic!("{} has no anesthetic rule: {:?}", id, other),
    }
}

proptest! {
    #[test]
    fn anesthetic_ceiling_never_exceeded(weight in 0.1f64..500.0, idx in 0usize..5) {
        let formulary = Formulary::builtin();
        let rules = DosingRuleTable::new();
        let calc = Calculator::new(&formulary, &rules);
        let id = ANESTHETIC_IDS[idx];
        let rule = anesthetic_rule(&rules, id);

        let result = calc.calculate_kg(weight, id).unwrap();
        match result {
            CalculationResult::Anesthetic { max_mg, max_cartridges, mg_per_cartridge, .. } => {
                let expected = (weight * rule.mg_per_kg).min(rule.max_mg);
                prop_assert_eq!(max_mg, expected);
                prop_assert!(max_mg <= rule.max_mg);
                // Truncation is downward-biased
                prop_assert!(max_cartridges * mg_per_cartridge <= max_mg + 1e-9);
                prop_assert!(max_cartridges >= 0.0);
                // Never more than one tenth of a cartridge below the exact quantity
                prop_assert!(max_mg / mg_per_cartridge - max_cartridges < 0.1 + 1e-9);
            }
            other => prop_assert!(false, "unexpected result kind {}", other.kind()),
        }
    }

    #[test]
    fn calculation_is_idempotent(weight in 0.1f64..200.0, lb in any::<bool>(), idx in 0usize..37) {
        let formulary = Formulary::builtin();
        let rules = DosingRuleTable::new();
        let calc = Calculator::new(&formulary, &rules);
        let id = formulary.records()[idx].id.clone();
        let unit = if lb { WeightUnit::Lb } else { WeightUnit::Kg };
        let text = weight.to_string();

        let first = calc.calculate(&text, unit, &id);
        let second = calc.calculate(&text, unit, &id);
        prop_assert!(first.is_some());
        prop_assert_eq!(first, second);
    }

    #[test]
    fn pounds_match_converted_kilograms(weight in 1.0f64..300.0, idx in 0usize..5) {
        let formulary = Formulary::builtin();
        let rules = DosingRuleTable::new();
        let calc = Calculator::new(&formulary, &rules);
        let id = ANESTHETIC_IDS[idx];

        let from_lb = calc.calculate(&weight.to_string(), WeightUnit::Lb, id).unwrap();
        let from_kg = calc.calculate_kg(weight * LB_TO_KG, id).unwrap();
        match (from_lb, from_kg) {
            (
                CalculationResult::Anesthetic { max_mg: a, .. },
                CalculationResult::Anesthetic { max_mg: b, .. },
            ) => prop_assert!((a - b).abs() < 1e-6),
            _ => prop_assert!(false, "expected anesthetic results"),
        }
    }

    #[test]
    fn non_positive_weight_yields_nothing(weight in -1000.0f64..=0.0, idx in 0usize..37) {
        let formulary = Formulary::builtin();
        let rules = DosingRuleTable::new();
        let calc = Calculator::new(&formulary, &rules);
        let id = &formulary.records()[idx].id;

        prop_assert!(calc.calculate(&weight.to_string(), WeightUnit::Kg, id).is_none());
        prop_assert!(calc.calculate(&weight.to_string(), WeightUnit::Lb, id).is_none());
    }

    #[test]
    fn non_numeric_weight_yields_nothing(text in "[a-zA-Z ]{0,12}") {
        let formulary = Formulary::builtin();
        let rules = DosingRuleTable::new();
        let calc = Calculator::new(&formulary, &rules);

        prop_assume!(text.trim().parse::<f64>().is_err());
        for drug in formulary.records() {
            prop_assert!(calc.calculate(&text, WeightUnit::Kg, &drug.id).is_none());
        }
    }

    #[test]
    fn unknown_identifier_yields_nothing(weight in 0.1f64..200.0, id in "zz[0-9]{1,3}") {
        let formulary = Formulary::builtin();
        let rules = DosingRuleTable::new();
        let calc = Calculator::new(&formulary, &rules);

        prop_assert!(calc.calculate(&weight.to_string(), WeightUnit::Kg, &id).is_none());
    }

    #[test]
    fn daily_ranges_are_ordered(weight in 0.1f64..150.0) {
        let formulary = Formulary::builtin();
        let rules = DosingRuleTable::new();
        let calc = Calculator::new(&formulary, &rules);

        for drug in formulary.records() {
            match calc.calculate_kg(weight, &drug.id).unwrap() {
                CalculationResult::PediatricDailyDose {
                    amount: dental_dose_core::models::DailyAmount::Range { min_mg, max_mg },
                    ..
                } => prop_assert!(min_mg <= max_mg, "{}: {} > {}", drug.id, min_mg, max_mg),
                CalculationResult::PediatricSingleDose { min_dose_mg, max_dose_mg, .. } => {
                    prop_assert!(min_dose_mg <= max_dose_mg, "{}", drug.id)
                }
                _ => {}
            }
        }
    }
}
