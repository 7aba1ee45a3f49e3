//! Weight normalizer.
//!
//! Turns user-entered weight text plus a unit into kilograms. Anything that is
//! not a finite positive number yields `None` ("nothing to show yet"), never an
//! error. No upper bound is enforced.

use crate::models::WeightUnit;

/// Parse a weight string and convert it to kilograms.
pub fn normalize_weight(text: &str, unit: WeightUnit) -> Option<f64> {
    let value = parse_weight(text)?;
    Some(value * unit.to_kg_factor())
}

/// Parse a weight string to a finite positive number.
pub fn parse_weight(text: &str) -> Option<f64> {
    let value: f64 = text.trim().parse().ok()?;
    if value.is_finite() && value > 0.0 {
        Some(value)
    } else {
        None
    }
}
