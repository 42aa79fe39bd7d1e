//! Reading and printing the numbers found in interval bounds.
//!
//! Bounds are stored as `f64`.  Whether the interval is in the integer or the
//! float domain is tracked separately by the interval itself, and only
//! changes how numbers are printed and which values are accepted by
//! membership tests.

use crate::errors::{IntervalError, Result};

/// Reads a number matched by the literal grammar (`-?[0-9]+(\.[0-9]+)?`).
/// Returns the value, and whether it was written with a fractional part.
/// Numbers too large for an `f64` are rejected.
pub(crate) fn read_number(text: &str, expr: &str) -> Result<(f64, bool)> {
    let value = text
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| IntervalError::InvalidExpression {
            expr: expr.to_string(),
            position: 0,
        })?;
    Ok((canonical(value), text.contains('.')))
}

/// Folds -0.0 into 0.0, so that "-0" and "0" denote the same bound.
pub(crate) fn canonical(value: f64) -> f64 {
    value + 0.0
}

pub(crate) fn is_whole(value: f64) -> bool {
    value.fract() == 0.0
}

/// Formats a bound.  In the float domain, at least one decimal digit is
/// always printed, so that `[1.0,2.0]` and `[1,2]` remain distinguishable.
pub(crate) fn format_number(value: f64, allows_float: bool) -> String {
    if allows_float && is_whole(value) {
        format!("{value}.0")
    } else {
        format!("{value}")
    }
}
