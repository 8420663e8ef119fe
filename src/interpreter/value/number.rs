use std::ops::{Add, Mul, Sub};

use crate::util::num::{format_real, i64_to_f64};

/// A numeric constant: either an exact integer or a real.
///
/// Integer arithmetic is exact as long as it fits in an `i64`; results that
/// would overflow, and any operation involving a real, are promoted to
/// `Real`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Number {
    /// A 64-bit signed integer.
    Integer(i64),
    /// A 64-bit floating-point number.
    Real(f64),
}

impl From<i64> for Number {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<i32> for Number {
    fn from(value: i32) -> Self {
        Self::Integer(i64::from(value))
    }
}

impl From<f64> for Number {
    fn from(value: f64) -> Self {
        Self::Real(value)
    }
}

impl Number {
    /// Converts the number to an `f64`, promoting integers.
    ///
    /// # Example
    /// ```
    /// use symbra::interpreter::value::number::Number;
    ///
    /// assert_eq!(Number::Integer(3).as_real(), 3.0);
    /// assert_eq!(Number::Real(0.5).as_real(), 0.5);
    /// ```
    #[must_use]
    pub const fn as_real(self) -> f64 {
        match self {
            Self::Integer(n) => i64_to_f64(n),
            Self::Real(r) => r,
        }
    }

    /// Returns `true` if the number is numerically zero (`0`, `0.0` or
    /// `-0.0`).
    #[must_use]
    pub fn is_zero(self) -> bool {
        match self {
            Self::Integer(n) => n == 0,
            Self::Real(r) => r == 0.0,
        }
    }

    /// Returns `true` if the number is numerically one (`1` or `1.0`).
    #[must_use]
    pub fn is_one(self) -> bool {
        match self {
            Self::Integer(n) => n == 1,
            Self::Real(r) => r == 1.0,
        }
    }

    /// Applies a checked integer operation, or the real counterpart when
    /// either side is real or the integer result overflows.
    fn combine(self,
               other: Self,
               checked: fn(i64, i64) -> Option<i64>,
               real: fn(f64, f64) -> f64)
               -> Self {
        if let (Self::Integer(a), Self::Integer(b)) = (self, other)
           && let Some(result) = checked(a, b)
        {
            return Self::Integer(result);
        }
        Self::Real(real(self.as_real(), other.as_real()))
    }
}

impl Add for Number {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        self.combine(rhs, i64::checked_add, |a, b| a + b)
    }
}

impl Sub for Number {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        self.combine(rhs, i64::checked_sub, |a, b| a - b)
    }
}

impl Mul for Number {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        self.combine(rhs, i64::checked_mul, |a, b| a * b)
    }
}

impl std::fmt::Display for Number {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Integer(n) => write!(f, "{n}"),
            Self::Real(r) => write!(f, "{}", format_real(*r)),
        }
    }
}
