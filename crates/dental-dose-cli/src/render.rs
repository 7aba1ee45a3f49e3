//! Text templates for calculation results and drug records.

use std::fmt::Write;

use dental_dose_core::{CalculationResult, DailyAmount, DrugRecord, Language};

const CLINICAL_WARNING: &str = "Calculations are for reference only. Always adjust for patient \
history (cardiac, renal, hepatic) and follow the manufacturer's prescribing information.";

/// Prompt shown while no valid weight has been entered.
pub fn awaiting_input() -> String {
    "Enter patient weight to see calculation results.".to_string()
}

/// Message for an identifier missing from the table, with suggestions.
pub fn unknown_drug(id: &str, suggestions: &[&DrugRecord]) -> String {
    let mut out = format!("Unknown drug id: {}", id);
    if !suggestions.is_empty() {
        let names: Vec<String> = suggestions
            .iter()
            .map(|d| format!("{} ({})", d.id, d.generic_name))
            .collect();
        let _ = write!(out, ". Did you mean: {}?", names.join(", "));
    }
    out
}

/// One-line listing entry.
pub fn drug_line(drug: &DrugRecord, lang: Language) -> String {
    let dose = drug.dose.as_ref().map(|d| d.get(lang)).unwrap_or("-");
    format!(
        "{:<6} {:<26} {:<24} {}",
        drug.id,
        drug.generic_name,
        drug.category.get(lang),
        dose
    )
}

/// Full bilingual record.
pub fn drug_detail(drug: &DrugRecord) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{} [{}]", drug.generic_name, drug.id);
    if !drug.brand_names.is_empty() {
        let _ = writeln!(out, "Brands:      {}", drug.brand_names.join(", "));
    }
    let _ = writeln!(out, "Category:    {} / {}", drug.category.en, drug.category.ar);
    let _ = writeln!(out, "Description: {}", drug.description.en);
    let _ = writeln!(out, "             {}", drug.description.ar);
    if let Some(dose) = &drug.dose {
        let _ = writeln!(out, "Dose:        {}", dose.en);
        let _ = write!(out, "             {}", dose.ar);
    }
    out.trim_end().to_string()
}

/// Render a result with the template for its variant.
pub fn result(result: &CalculationResult) -> String {
    let mut out = String::new();

    match result {
        CalculationResult::Anesthetic {
            drug,
            max_mg,
            max_cartridges,
            mg_per_cartridge,
            formula,
        } => {
            let _ = writeln!(out, "Maximum Safe Dose: {}", drug.generic_name);
            let _ = writeln!(out, "Local Anesthetic (Standard 1.8ml)");
            let _ = writeln!(out);
            let _ = writeln!(out, "  Cartridges:    {}", max_cartridges);
            let _ = writeln!(out, "  Total mg:      {:.0} mg", max_mg);
            let _ = writeln!(out, "  Formula Used:  {}", formula);
            let _ = writeln!(out, "  Concentration: {}mg / cartridge", mg_per_cartridge);
            let _ = writeln!(out);
            let _ = writeln!(
                out,
                "*For cardiac patients using epinephrine, limit to 2 cartridges (0.04mg Epi) \
                 regardless of weight-based calculation."
            );
        }
        CalculationResult::PediatricDailyDose {
            drug,
            amount,
            notes,
        } => {
            let _ = writeln!(out, "Pediatric Daily Dosage: {}", drug.generic_name);
            let _ = writeln!(out);
            let _ = writeln!(out, "  Total Daily Amount: {}", daily_amount(amount));
            let _ = writeln!(out);
            let _ = writeln!(out, "Administration Instructions: {}", notes);
        }
        CalculationResult::PediatricSingleDose {
            drug,
            min_dose_mg,
            max_dose_mg,
            frequency,
            daily_max_mg,
            notes,
        } => {
            let _ = writeln!(out, "Single Dose Range: {}", drug.generic_name);
            let _ = writeln!(out);
            let _ = writeln!(out, "  Amount Per Dose: {} - {} mg", min_dose_mg, max_dose_mg);
            let _ = writeln!(out, "  Frequency:       {}", frequency);
            if let Some(daily_max) = daily_max_mg {
                let _ = writeln!(out, "  Daily Max:       {} mg/day", daily_max);
            }
            let _ = writeln!(out);
            let _ = writeln!(out, "{}", notes);
        }
        CalculationResult::Regimen { drug, steps, notes } => {
            let _ = writeln!(out, "Treatment Regimen: {}", drug.generic_name);
            let _ = writeln!(out);
            for step in steps {
                let _ = writeln!(out, "  {:<10} {}", step.label, step.value);
            }
            let _ = writeln!(out);
            let _ = writeln!(out, "{}", notes);
        }
        CalculationResult::Reference { drug } => {
            let _ = writeln!(out, "Standard Dosage: {}", drug.generic_name);
            let _ = writeln!(
                out,
                "Weight-based calculation is not standard for this medication in general \
                 dental practice. Please refer to the standard dosage below."
            );
            let _ = writeln!(out);
            match &drug.dose {
                Some(dose) => {
                    let _ = writeln!(out, "  {}", dose.en);
                    let _ = writeln!(out, "  {}", dose.ar);
                }
                None => {
                    let _ = writeln!(out, "  No label dose on file.");
                }
            }
        }
    }

    let _ = writeln!(out);
    let _ = write!(out, "Clinical Warning: {}", CLINICAL_WARNING);
    out
}

fn daily_amount(amount: &DailyAmount) -> String {
    match amount {
        DailyAmount::Single { mg } => format!("{} mg/day", mg),
        DailyAmount::Range { min_mg, max_mg } => format!("{} - {} mg/day", min_mg, max_mg),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dental_dose_core::{Calculator, DosingRuleTable, Formulary, WeightUnit};

    fn render(weight: &str, drug_id: &str) -> String {
        let formulary = Formulary::builtin();
        let rules = DosingRuleTable::new();
        let calc = Calculator::new(&formulary, &rules);
        result(&calc.calculate(weight, WeightUnit::Kg, drug_id).unwrap())
    }

    #[test]
    fn test_anesthetic_template() {
        let text = render("20", "la1");
        assert!(text.contains("Cartridges:    3.8"));
        assert!(text.contains("Total mg:      140 mg"));
        assert!(text.contains("7mg/kg (Max 500mg)"));
        assert!(text.contains("36mg / cartridge"));
    }

    #[test]
    fn test_daily_template() {
        let text = render("15", "ab1");
        assert!(text.contains("300 - 750 mg/day"));
        assert!(text.contains("Divided every 8 hours"));
    }

    #[test]
    fn test_single_dose_template() {
        let text = render("20", "an1");
        assert!(text.contains("100 - 200 mg"));
        assert!(text.contains("Daily Max:       800 mg/day"));
    }

    #[test]
    fn test_single_dose_without_cap() {
        let text = render("15", "an4");
        assert!(!text.contains("Daily Max"));
    }

    #[test]
    fn test_regimen_template() {
        let text = render("25", "ab4");
        assert!(text.contains("Day 1"));
        assert!(text.contains("250 mg (Once daily)"));
        assert!(text.contains("125 mg (Once daily)"));
    }

    #[test]
    fn test_reference_template_is_bilingual() {
        let text = render("60", "cs1");
        assert!(text.contains("4-8mg pre-op"));
        assert!(text.contains("4-8 مجم قبل الجراحة"));
    }

    #[test]
    fn test_unknown_drug_with_suggestions() {
        let formulary = Formulary::builtin();
        let message = unknown_drug("Ibuprofin", &formulary.suggest("Ibuprofin"));
        assert!(message.starts_with("Unknown drug id: Ibuprofin"));
        assert!(message.contains("an1 (Ibuprofen)"));

        assert_eq!(unknown_drug("zz", &[]), "Unknown drug id: zz");
    }

    #[test]
    fn test_drug_line_language() {
        let formulary = Formulary::builtin();
        let drug = formulary.get("ab1").unwrap();
        assert!(drug_line(drug, Language::En).contains("Antibiotic"));
        assert!(drug_line(drug, Language::Ar).contains("مضاد حيوي"));
    }
}
