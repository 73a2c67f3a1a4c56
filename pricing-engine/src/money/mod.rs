//! Money calculation utilities using rust_decimal for precision
//!
//! All calculations are done using `Decimal` internally, then converted to `f64`
//! (rounded to 2 decimal places) at the API boundary.
//!
//! Conversion from `f64` goes through the shortest decimal string of the value,
//! so `1.005_f64` is treated as `1.005` rather than its binary expansion
//! `1.00499999999999989...`, and half-up rounding gives `1.01`.

use rust_decimal::prelude::*;

/// Rounding strategy for monetary values (2 decimal places, half-up)
const DECIMAL_PLACES: u32 = 2;
const ROUNDING: RoundingStrategy = RoundingStrategy::MidpointAwayFromZero;

/// Tolerance for monetary comparisons (0.01)
pub const MONEY_TOLERANCE: Decimal = Decimal::from_parts(1, 0, 0, false, 2);

/// Round a currency amount to 2 decimal places (half-up).
///
/// Idempotent: `round2(round2(x)) == round2(x)`.
/// `NaN` and infinities are returned unchanged.
pub fn round2(value: f64) -> f64 {
    if !value.is_finite() {
        return value;
    }
    match parse_decimal(value) {
        Some(d) => to_f64(d),
        // Beyond Decimal range (|x| > ~7.9e28): cents are below f64 resolution
        None => (value * 100.0).round() / 100.0,
    }
}

/// Convert f64 to Decimal for calculation
///
/// Non-finite input is logged and treated as zero so a corrupt catalog value
/// cannot poison a whole quote.
#[inline]
pub fn to_decimal(value: f64) -> Decimal {
    if !value.is_finite() {
        tracing::error!(value = ?value, "Non-finite f64 in monetary calculation, defaulting to zero");
        return Decimal::ZERO;
    }
    parse_decimal(value)
        .or_else(|| Decimal::from_f64(value))
        .unwrap_or_default()
}

/// Convert Decimal back to f64, rounded to 2 decimal places
#[inline]
pub fn to_f64(value: Decimal) -> f64 {
    round_money(value).to_f64().unwrap_or_default()
}

/// Round a Decimal to 2 decimal places without leaving Decimal
#[inline]
pub fn round_money(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(DECIMAL_PLACES, ROUNDING)
}

/// Sum money values in Decimal
pub fn sum<I>(values: I) -> Decimal
where
    I: IntoIterator<Item = f64>,
{
    values.into_iter().map(to_decimal).fold(Decimal::ZERO, add)
}

/// Overflow-safe multiply; results beyond Decimal range are logged and zeroed
pub fn mul(a: Decimal, b: Decimal) -> Decimal {
    a.checked_mul(b).unwrap_or_else(|| overflow("multiply", a, b))
}

/// Overflow-safe add, same policy as [`mul`]
pub fn add(a: Decimal, b: Decimal) -> Decimal {
    a.checked_add(b).unwrap_or_else(|| overflow("add", a, b))
}

/// Overflow-safe subtract, same policy as [`mul`]
pub fn sub(a: Decimal, b: Decimal) -> Decimal {
    a.checked_sub(b).unwrap_or_else(|| overflow("subtract", a, b))
}

/// Compare two amounts within [`MONEY_TOLERANCE`]
pub fn nearly_equal(a: f64, b: f64) -> bool {
    round_money(to_decimal(a))
        .checked_sub(round_money(to_decimal(b)))
        .is_some_and(|diff| diff.abs() <= MONEY_TOLERANCE)
}

fn overflow(op: &str, a: Decimal, b: Decimal) -> Decimal {
    tracing::error!(%a, %b, op, "Decimal overflow in price calculation, defaulting to zero");
    Decimal::ZERO
}

fn parse_decimal(value: f64) -> Option<Decimal> {
    Decimal::from_str(&value.to_string()).ok()
}
