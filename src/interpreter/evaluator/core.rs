use tracing::{debug, trace};

use crate::{
    ast::{Expr, Operation},
    error::EvalError,
    interpreter::value::core::{Bindings, Value},
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or an
/// `EvalError` describing the failure.
pub type EvalResult<T> = Result<T, EvalError>;

/// Evaluates expression trees under a fixed set of bindings.
///
/// The evaluator holds no state of its own besides a borrowed binding map,
/// so one tree can be evaluated any number of times, with different
/// evaluators, without side effects.
///
/// ## Usage
///
/// ```
/// use symbra::{
///     interpreter::{evaluator::core::Evaluator, value::core::{Bindings, Value}},
///     parse,
/// };
///
/// let expr = parse("x + 2 * y").unwrap();
/// let bindings = Bindings::from([("x".to_string(), Value::from(3)),
///                                ("y".to_string(), Value::from(4))]);
///
/// let value = Evaluator::new(&bindings).eval(&expr).unwrap();
/// assert_eq!(value, Value::from(11));
/// ```
pub struct Evaluator<'b> {
    bindings: &'b Bindings,
}

impl<'b> Evaluator<'b> {
    /// Creates an evaluator over `bindings`.
    #[must_use]
    pub const fn new(bindings: &'b Bindings) -> Self {
        Self { bindings }
    }

    /// Evaluates an expression bottom-up.
    ///
    /// Literals evaluate to themselves. Bound symbols evaluate to their
    /// numeric value; unbound symbols stay symbolic. An operator whose
    /// operands all evaluate to numbers yields the operator's numeric result;
    /// otherwise a new operator node of the same kind is built over the
    /// evaluated operands.
    ///
    /// # Errors
    /// - `BindingType` if a symbol is bound to a non-numeric value.
    /// - `DivisionByZero` if a denominator evaluates to zero.
    /// - `NumericDomain` if a power has no real result.
    pub fn eval(&self, expr: &Expr) -> EvalResult<Value> {
        let value = self.eval_node(expr)?;
        match &value {
            Value::Number(n) => debug!(result = %n, "evaluated to number"),
            Value::Expr(e) => debug!(residual = %e, "evaluated to residual expression"),
        }
        Ok(value)
    }

    fn eval_node(&self, expr: &Expr) -> EvalResult<Value> {
        match expr {
            Expr::Literal(n) => Ok(Value::Number(*n)),
            Expr::Symbol(name) => self.eval_symbol(name, expr),
            Expr::Operator(op) => self.eval_operation(op, expr),
        }
    }

    /// Looks up a symbol in the bindings.
    ///
    /// # Parameters
    /// - `name`: The symbol name.
    /// - `expr`: The symbol node itself, returned unchanged when unbound.
    fn eval_symbol(&self, name: &str, expr: &Expr) -> EvalResult<Value> {
        match self.bindings.get(name) {
            Some(value) => {
                let n = value.as_number()
                             .ok_or_else(|| EvalError::BindingType { name:  name.to_string(),
                                                                     found: value.to_string(), })?;
                trace!(symbol = name, value = %n, "resolved binding");
                Ok(Value::Number(n))
            },
            None => Ok(Value::Expr(expr.clone())),
        }
    }

    /// Evaluates every operand, then either applies the operator or rebuilds
    /// it over the partially evaluated operands.
    fn eval_operation(&self, op: &Operation, expr: &Expr) -> EvalResult<Value> {
        let values = op.operands()
                       .iter()
                       .map(|operand| self.eval_node(operand))
                       .collect::<EvalResult<Vec<_>>>()?;

        let numbers = values.iter().map(Value::as_number).collect::<Option<Vec<_>>>();

        match numbers {
            Some(numbers) => Self::apply(op.kind(), &numbers, expr).map(Value::Number),
            None => {
                let operands = values.into_iter().map(Value::into_expr).collect();
                Ok(Value::Expr(op.with_operands(operands)))
            },
        }
    }
}
