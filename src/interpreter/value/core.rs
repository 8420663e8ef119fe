use std::collections::HashMap;

use crate::{ast::Expr, interpreter::value::number::Number};

/// A mapping from symbol name to the value bound to it.
///
/// The same map type serves both as evaluation bindings, where every value
/// must be numeric, and as a substitution map, where values may be arbitrary
/// expressions.
pub type Bindings = HashMap<String, Value>;

/// The outcome of evaluating an expression, and the value type of bindings.
///
/// Evaluation yields a `Number` when every symbol in the tree is bound and a
/// residual `Expr` otherwise.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// A fully computed numeric result.
    Number(Number),
    /// A residual expression tree that still contains unbound symbols.
    Expr(Expr),
}

impl From<Number> for Value {
    fn from(n: Number) -> Self {
        Self::Number(n)
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Self::Number(Number::Integer(v))
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Self::Number(Number::from(v))
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Number(Number::Real(v))
    }
}

impl From<Expr> for Value {
    fn from(e: Expr) -> Self {
        Self::Expr(e)
    }
}

impl Value {
    /// Returns the numeric content of the value, if it has one.
    ///
    /// A bare literal expression counts as numeric.
    ///
    /// # Example
    /// ```
    /// use symbra::{
    ///     ast::Expr,
    ///     interpreter::value::{core::Value, number::Number},
    /// };
    ///
    /// assert_eq!(Value::from(2).as_number(), Some(Number::Integer(2)));
    /// assert_eq!(Value::from(Expr::literal(1.5)).as_number(),
    ///            Some(Number::Real(1.5)));
    /// assert_eq!(Value::from(Expr::symbol("x")).as_number(), None);
    /// ```
    #[must_use]
    pub const fn as_number(&self) -> Option<Number> {
        match self {
            Self::Number(n) | Self::Expr(Expr::Literal(n)) => Some(*n),
            Self::Expr(_) => None,
        }
    }

    /// Returns `true` if the value is a number.
    #[must_use]
    pub const fn is_numeric(&self) -> bool {
        self.as_number().is_some()
    }

    /// Converts the value into an expression, wrapping numbers in a literal.
    #[must_use]
    pub fn into_expr(self) -> Expr {
        match self {
            Self::Number(n) => Expr::Literal(n),
            Self::Expr(e) => e,
        }
    }

    /// Like [`Value::into_expr`], but borrows. Expression values share their
    /// subtrees with `self`.
    #[must_use]
    pub fn to_expr(&self) -> Expr {
        self.clone().into_expr()
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Expr(e) => write!(f, "{e}"),
        }
    }
}
