// ============================================================================
// Money Module
// Fixed-point MZN amounts stored as integer centavos
// ============================================================================
//
// This module provides:
// - Money: an amount in Mozambican Metical, stored as i64 centavos
// - MoneyError: error types for parsing and arithmetic
//
// Design principles:
// - All arithmetic runs on the integer centavo count
// - Floating point only enters at from_mzn/multiply and leaves at to_mzn
// - Rounding is always half away from zero
// - Splits and percentages never lose or invent a centavo

mod amount;
mod errors;

pub use amount::Money;
pub use errors::{MoneyError, MoneyResult};
