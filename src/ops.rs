//! The nine calculator operations.
//!
//! Every function is pure. Operations that are total on the reals return a
//! plain `f64`; the three with a restricted domain return
//! `Result<f64, DomainError>` so callers can never mistake a failure for a
//! number.

use crate::models::DomainError;

/// `x + y`
pub fn add(x: f64, y: f64) -> f64 {
    x + y
}

/// `x - y`
pub fn subtract(x: f64, y: f64) -> f64 {
    x - y
}

/// `x * y`
pub fn multiply(x: f64, y: f64) -> f64 {
    x * y
}

/// `x / y`, rejecting a zero divisor regardless of the numerator.
pub fn divide(x: f64, y: f64) -> Result<f64, DomainError> {
    if y == 0.0 {
        return Err(DomainError::DivisionByZero);
    }
    Ok(x / y)
}

/// `x` raised to `y`.
///
/// `power(0, 0)` is 1. A negative base with a fractional exponent is not
/// rejected; it yields NaN as `f64::powf` does.
pub fn power(x: f64, y: f64) -> f64 {
    x.powf(y)
}

/// Square root of a non-negative number. Zero is inside the domain.
pub fn square_root(x: f64) -> Result<f64, DomainError> {
    if x < 0.0 {
        return Err(DomainError::NegativeSquareRoot);
    }
    Ok(x.sqrt())
}

/// Sine of `x` radians.
pub fn sine(x: f64) -> f64 {
    x.sin()
}

/// Cosine of `x` radians.
pub fn cosine(x: f64) -> f64 {
    x.cos()
}

/// Natural logarithm. Zero and negative inputs are rejected identically.
pub fn logarithm(x: f64) -> Result<f64, DomainError> {
    if x <= 0.0 {
        return Err(DomainError::NonPositiveLogarithm);
    }
    Ok(x.ln())
}
