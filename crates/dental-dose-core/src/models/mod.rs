//! Domain models for the dental dose calculator.

mod calculation;
mod drug;

pub use calculation::*;
pub use drug::*;
