//! Calculation report export.

mod report;

pub use report::*;
