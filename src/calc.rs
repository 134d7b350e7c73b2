//! Arithmetic core
//!
//! The four pure operations the API exposes. Division is the only fallible
//! one; everything else is total over `i64`.

use thiserror::Error;

/// Errors produced by the arithmetic operations
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CalcError {
    #[error("Cannot divide by zero")]
    DivisionByZero,
}

/// Add two numbers
pub const fn add(a: i64, b: i64) -> i64 {
    a + b
}

/// Subtract the second number from the first
pub const fn subtract(a: i64, b: i64) -> i64 {
    a - b
}

/// Multiply two numbers
pub const fn multiply(a: i64, b: i64) -> i64 {
    a * b
}

/// Divide the first number by the second.
///
/// Integer operands, floating-point quotient. A zero divisor is rejected
/// before the division happens.
pub fn divide(a: i64, b: i64) -> Result<f64, CalcError> {
    if b == 0 {
        return Err(CalcError::DivisionByZero);
    }
    Ok(a as f64 / b as f64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add() {
        assert_eq!(add(10, 5), 15);
        assert_eq!(add(-3, 7), 4);
        assert_eq!(add(0, 0), 0);
    }

    #[test]
    fn test_subtract() {
        assert_eq!(subtract(20, 8), 12);
        assert_eq!(subtract(5, 9), -4);
    }

    #[test]
    fn test_multiply() {
        assert_eq!(multiply(6, 7), 42);
        assert_eq!(multiply(-4, 3), -12);
        assert_eq!(multiply(123, 0), 0);
    }

    #[test]
    fn test_divide() {
        assert_eq!(divide(50, 5), Ok(10.0));
        assert_eq!(divide(1, 2), Ok(0.5));
        assert_eq!(divide(-9, 3), Ok(-3.0));
    }

    #[test]
    fn test_divide_by_zero() {
        assert_eq!(divide(5, 0), Err(CalcError::DivisionByZero));
        assert_eq!(divide(0, 0), Err(CalcError::DivisionByZero));
    }

    #[test]
    fn test_divide_by_zero_message() {
        assert_eq!(
            CalcError::DivisionByZero.to_string(),
            "Cannot divide by zero"
        );
    }
}
