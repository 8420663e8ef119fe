use crate::{
    ast::{Expr, Operation, OperatorKind},
    interpreter::value::number::Number,
};

impl Expr {
    /// Simplifies the expression in a single bottom-up pass.
    ///
    /// Operands are simplified first, then one identity rule is applied at
    /// the current node; the rewritten result is not simplified again.
    ///
    /// - `Add`: drops literal `0` operands; yields `0` if none remain and
    ///   the sole survivor if one remains.
    /// - `Multiply`: yields `0` if any operand is literal `0`; otherwise
    ///   drops literal `1` operands, yielding `1` if none remain and the sole
    ///   survivor if one remains.
    /// - `Power`: `b^1` is `b`; `b^0` and `1^e` are `1`.
    /// - `Subtract`, `Divide`: rebuilt over the simplified operands, with no
    ///   identity elimination.
    ///
    /// Subtrees that no rule touches are shared with `self`.
    ///
    /// # Example
    /// ```
    /// use symbra::parse;
    ///
    /// let expr = parse("(x * 1 + 0) ^ 1").unwrap();
    /// assert_eq!(expr.simplify().to_string(), "x");
    ///
    /// let expr = parse("(x - 0) / 1").unwrap();
    /// assert_eq!(expr.simplify().to_string(), "((x) - (0)) / (1)");
    /// ```
    #[must_use]
    pub fn simplify(&self) -> Self {
        match self {
            Self::Literal(_) | Self::Symbol(_) => self.clone(),
            Self::Operator(op) => {
                let operands = op.operands().iter().map(Self::simplify).collect();
                match op.kind() {
                    OperatorKind::Add => simplify_sum(op, operands),
                    OperatorKind::Multiply => simplify_product(op, operands),
                    OperatorKind::Power => simplify_power(op, operands),
                    OperatorKind::Subtract | OperatorKind::Divide => op.with_operands(operands),
                }
            },
        }
    }
}

fn is_literal(expr: &Expr, test: fn(Number) -> bool) -> bool {
    match expr {
        Expr::Literal(n) => test(*n),
        _ => false,
    }
}

fn simplify_sum(op: &Operation, operands: Vec<Expr>) -> Expr {
    let mut survivors: Vec<Expr> = operands.into_iter()
                                           .filter(|e| !is_literal(e, Number::is_zero))
                                           .collect();
    match survivors.len() {
        0 => Expr::literal(0),
        1 => survivors.remove(0),
        _ => op.with_operands(survivors),
    }
}

fn simplify_product(op: &Operation, operands: Vec<Expr>) -> Expr {
    if operands.iter().any(|e| is_literal(e, Number::is_zero)) {
        return Expr::literal(0);
    }
    let mut survivors: Vec<Expr> = operands.into_iter()
                                           .filter(|e| !is_literal(e, Number::is_one))
                                           .collect();
    match survivors.len() {
        0 => Expr::literal(1),
        1 => survivors.remove(0),
        _ => op.with_operands(survivors),
    }
}

fn simplify_power(op: &Operation, operands: Vec<Expr>) -> Expr {
    if let [base, exponent] = operands.as_slice() {
        if is_literal(exponent, Number::is_one) {
            return base.clone();
        }
        if is_literal(exponent, Number::is_zero) || is_literal(base, Number::is_one) {
            return Expr::literal(1);
        }
    }
    op.with_operands(operands)
}
