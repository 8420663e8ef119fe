use crate::{
    error::EvalError,
    interpreter::{
        evaluator::core::{EvalResult, Evaluator},
        value::number::Number,
    },
    util::num::i64_to_u32_exponent,
};

impl Evaluator<'_> {
    /// Evaluates an exponentiation operation.
    ///
    /// Integer–integer exponentiation with a non-negative exponent uses
    /// checked arithmetic and falls back to real exponentiation on overflow.
    /// In all other cases, operands are promoted to reals and evaluated with
    /// `powf`.
    ///
    /// # Parameters
    /// - `base`: The base value.
    /// - `exponent`: The exponent value.
    ///
    /// # Errors
    /// Returns `NumericDomain` when the result is not a finite real number:
    /// a zero base with a negative exponent, a negative base with a
    /// fractional exponent, or a result too large to represent.
    pub(crate) fn eval_pow(base: Number, exponent: Number) -> EvalResult<Number> {
        if let (Number::Integer(b), Number::Integer(e)) = (base, exponent)
           && let Some(e) = i64_to_u32_exponent(e)
           && let Some(result) = b.checked_pow(e)
        {
            return Ok(Number::Integer(result));
        }

        if base.is_zero() && exponent.as_real() < 0.0 {
            return Err(EvalError::NumericDomain { details: format!("{base} cannot be raised to the negative power {exponent}") });
        }

        let (b, e) = (base.as_real(), exponent.as_real());
        let result = b.powf(e);

        if result.is_nan() {
            return Err(EvalError::NumericDomain { details: format!("{base} raised to {exponent} is not real") });
        }
        if result.is_infinite() && b.is_finite() && e.is_finite() {
            return Err(EvalError::NumericDomain { details: format!("{base} raised to {exponent} is too large") });
        }

        Ok(Number::Real(result))
    }
}
