//! Money calculation utilities using rust_decimal for precision
//!
//! Monetary values are stored as `f64` on the models; every calculation
//! goes through `Decimal` and is rounded to 2 decimal places (half-up)
//! before being converted back for storage.

use rust_decimal::prelude::*;

use crate::utils::AppError;

/// Rounding strategy for monetary values (2 decimal places, half-up)
const DECIMAL_PLACES: u32 = 2;

/// Tolerance for monetary comparisons (0.01)
pub const MONEY_TOLERANCE: Decimal = Decimal::from_parts(1, 0, 0, false, 2);

/// Maximum allowed amount for any single monetary field (€1,000,000)
const MAX_AMOUNT: f64 = 1_000_000.0;

/// Convert an f64 to Decimal, rejecting NaN/Infinity
fn to_decimal(value: f64, field: &str) -> Result<Decimal, AppError> {
    if !value.is_finite() {
        return Err(AppError::validation(format!(
            "{field} must be a finite number, got {value}"
        )));
    }
    Decimal::from_f64(value)
        .ok_or_else(|| AppError::validation(format!("{field} is not representable: {value}")))
}

/// Validate a monetary amount: finite, non-negative, below the cap
pub fn validate_amount(value: f64, field: &str) -> Result<(), AppError> {
    to_decimal(value, field)?;
    if value < 0.0 {
        return Err(AppError::validation(format!(
            "{field} must be non-negative, got {value}"
        )));
    }
    if value > MAX_AMOUNT {
        return Err(AppError::validation(format!(
            "{field} exceeds maximum allowed ({MAX_AMOUNT}), got {value}"
        )));
    }
    Ok(())
}

/// Round to 2 decimal places, half-up
pub fn round2(value: f64) -> f64 {
    Decimal::from_f64(value)
        .map(|d| {
            d.round_dp_with_strategy(DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero)
                .to_f64()
                .unwrap_or(value)
        })
        .unwrap_or(value)
}

/// unit_price * quantity, rounded
pub fn line_total(unit_price: f64, quantity: i32) -> f64 {
    let d = Decimal::from_f64(unit_price).unwrap_or_default() * Decimal::from(quantity);
    d.round_dp_with_strategy(DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero)
        .to_f64()
        .unwrap_or(0.0)
}

/// Sum a sequence of amounts through Decimal, rounded once at the end
pub fn sum(amounts: impl IntoIterator<Item = f64>) -> f64 {
    let total: Decimal = amounts
        .into_iter()
        .filter_map(Decimal::from_f64)
        .sum();
    total
        .round_dp_with_strategy(DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero)
        .to_f64()
        .unwrap_or(0.0)
}

/// Compare two amounts within MONEY_TOLERANCE
pub fn approx_eq(a: f64, b: f64) -> bool {
    match (Decimal::from_f64(a), Decimal::from_f64(b)) {
        (Some(da), Some(db)) => (da - db).abs() <= MONEY_TOLERANCE,
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round2_half_up() {
        assert_eq!(round2(10.005), 10.01);
        assert_eq!(round2(10.004), 10.0);
    }

    #[test]
    fn line_total_is_exact() {
        // 0.1 * 3 through f64 would drift; through Decimal it must not
        assert_eq!(line_total(0.1, 3), 0.3);
        assert_eq!(line_total(19.99, 7), 139.93);
    }

    #[test]
    fn sum_avoids_float_drift() {
        assert_eq!(sum([0.1, 0.2, 0.3]), 0.6);
    }

    #[test]
    fn approx_eq_respects_tolerance() {
        assert!(approx_eq(100.0, 100.01));
        assert!(!approx_eq(100.0, 100.02));
    }

    #[test]
    fn validate_amount_rejects_bad_values() {
        assert!(validate_amount(f64::NAN, "price").is_err());
        assert!(validate_amount(-1.0, "price").is_err());
        assert!(validate_amount(2_000_000.0, "price").is_err());
        assert!(validate_amount(49.5, "price").is_ok());
    }
}
