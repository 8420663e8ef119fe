use crate::{
    ast::{Expr, OperatorKind},
    error::EvalError,
    interpreter::{
        evaluator::core::{EvalResult, Evaluator},
        value::number::Number,
    },
};

impl Evaluator<'_> {
    /// Applies an operator's numeric function to fully evaluated operands.
    ///
    /// `Add` sums and `Multiply` multiplies all operands. `Subtract`,
    /// `Divide` and `Power` combine their two operands. Division always
    /// produces a real, and the denominator is checked for zero before
    /// dividing. Power delegates to [`Evaluator::eval_pow`].
    ///
    /// # Parameters
    /// - `kind`: The operator.
    /// - `operands`: The evaluated operands, in order.
    /// - `expr`: The node being evaluated, used in error messages.
    ///
    /// # Returns
    /// An `EvalResult<Number>` containing the computed value.
    ///
    /// `operands` must come from an arity-checked [`Operation`](crate::ast::Operation).
    pub(crate) fn apply(kind: OperatorKind, operands: &[Number], expr: &Expr) -> EvalResult<Number> {
        use OperatorKind::{Add, Divide, Multiply, Power, Subtract};

        match (kind, operands) {
            (Add, operands) => Ok(operands.iter().fold(Number::Integer(0), |acc, n| acc + *n)),
            (Multiply, operands) => Ok(operands.iter().fold(Number::Integer(1), |acc, n| acc * *n)),
            (Subtract, [left, right]) => Ok(*left - *right),
            (Divide, [numerator, denominator]) => {
                if denominator.is_zero() {
                    return Err(EvalError::DivisionByZero { expression: expr.to_string() });
                }
                Ok(Number::Real(numerator.as_real() / denominator.as_real()))
            },
            (Power, [base, exponent]) => Self::eval_pow(*base, *exponent),
            (Subtract | Divide | Power, _) => unreachable!(),
        }
    }
}
