use crate::{
    ast::Expr,
    interpreter::value::core::{Bindings, Value},
};

impl Expr {
    /// Replaces every symbol whose name is a key of `map` with the mapped
    /// value.
    ///
    /// Numbers become literals and expressions are inserted as subtrees.
    /// Symbols without an entry pass through unchanged. Every operator is
    /// rebuilt with the same kind and the same number of operands, and
    /// subtrees containing no substituted symbol are shared with `self`.
    ///
    /// # Example
    /// ```
    /// use symbra::{
    ///     ast::Expr,
    ///     interpreter::value::core::{Bindings, Value},
    ///     parse,
    /// };
    ///
    /// let expr = parse("x + y").unwrap();
    /// let map = Bindings::from([("x".to_string(), Value::from(Expr::symbol("z")))]);
    /// assert_eq!(expr.substitute(&map).to_string(), "z + y");
    ///
    /// let map = Bindings::from([("y".to_string(), parse("a * b").unwrap().into())]);
    /// assert_eq!(expr.substitute(&map).to_string(), "x + (a * b)");
    /// ```
    #[must_use]
    pub fn substitute(&self, map: &Bindings) -> Self {
        match self {
            Self::Symbol(name) => map.get(&**name).map_or_else(|| self.clone(), Value::to_expr),
            Self::Literal(_) => self.clone(),
            Self::Operator(op) => {
                let operands = op.operands()
                                 .iter()
                                 .map(|operand| operand.substitute(map))
                                 .collect();
                op.with_operands(operands)
            },
        }
    }
}
