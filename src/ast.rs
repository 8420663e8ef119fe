use std::{
    collections::BTreeSet,
    hash::{Hash, Hasher},
    sync::Arc,
};

use crate::{error::ArityError, interpreter::value::number::Number};

/// Represents an arithmetic operator.
///
/// `Add` and `Multiply` are variadic; `Subtract`, `Divide` and `Power` are
/// strictly binary.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum OperatorKind {
    /// Addition (`+`)
    Add,
    /// Subtraction (`-`)
    Subtract,
    /// Multiplication (`*`)
    Multiply,
    /// Division (`/`)
    Divide,
    /// Exponentiation (`^`)
    Power,
}

impl OperatorKind {
    /// Returns `true` for the operators that accept any positive number of
    /// operands.
    ///
    /// # Example
    /// ```
    /// use symbra::ast::OperatorKind;
    ///
    /// assert!(OperatorKind::Add.is_variadic());
    /// assert!(!OperatorKind::Power.is_variadic());
    /// ```
    #[must_use]
    pub const fn is_variadic(self) -> bool {
        matches!(self, Self::Add | Self::Multiply)
    }

    /// The source symbol of the operator.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Subtract => "-",
            Self::Multiply => "*",
            Self::Divide => "/",
            Self::Power => "^",
        }
    }

    const fn accepts(self, count: usize) -> bool {
        if self.is_variadic() { count >= 1 } else { count == 2 }
    }
}

impl std::fmt::Display for OperatorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// An operator applied to an ordered list of operands.
///
/// The operand list can only be set through [`Expr::operator`] or the binary
/// constructors, so its length always matches what the operator kind allows.
/// Operands live behind an `Arc`, so cloning an operation is cheap and trees
/// derived from it share unchanged subtrees.
#[derive(Debug, Clone)]
pub struct Operation {
    kind:     OperatorKind,
    operands: Arc<[Expr]>,
}

impl Operation {
    /// The operator kind.
    #[must_use]
    pub const fn kind(&self) -> OperatorKind {
        self.kind
    }

    /// The operands, in order.
    #[must_use]
    pub fn operands(&self) -> &[Expr] {
        &self.operands
    }

    /// Builds an operation of the same kind over `operands`.
    ///
    /// When every new operand is the very node already stored at the same
    /// position, the existing operation is reused instead of allocating.
    /// Callers must pass an operand count the kind accepts.
    pub(crate) fn with_operands(&self, operands: Vec<Expr>) -> Expr {
        let unchanged = operands.len() == self.operands.len()
                        && operands.iter()
                                   .zip(self.operands.iter())
                                   .all(|(new, old)| new.is_same_node(old));
        if unchanged {
            Expr::Operator(self.clone())
        } else {
            Expr::from_parts(self.kind, operands)
        }
    }
}

/// An immutable expression tree.
///
/// Leaves are numeric literals or named symbols; internal nodes are
/// operators. Trees are never modified after construction: evaluation,
/// simplification and substitution all derive new trees that share every
/// untouched subtree with the original.
///
/// Equality and hashing are defined on the canonical rendering produced by
/// `Display`, so `x + y` and `y + x` compare unequal.
#[derive(Debug, Clone)]
pub enum Expr {
    /// A numeric constant.
    Literal(Number),
    /// An unbound variable, identified by its name.
    Symbol(Arc<str>),
    /// An operator node.
    Operator(Operation),
}

impl Expr {
    /// Creates a literal node.
    ///
    /// # Example
    /// ```
    /// use symbra::ast::Expr;
    ///
    /// assert_eq!(Expr::literal(2).to_string(), "2");
    /// assert_eq!(Expr::literal(2.0).to_string(), "2.0");
    /// ```
    pub fn literal(value: impl Into<Number>) -> Self {
        Self::Literal(value.into())
    }

    /// Creates a symbol node.
    pub fn symbol(name: impl Into<Arc<str>>) -> Self {
        Self::Symbol(name.into())
    }

    /// Creates an operator node, checking the operand count.
    ///
    /// `Add` and `Multiply` take one or more operands; `Subtract`, `Divide`
    /// and `Power` take exactly two.
    ///
    /// # Errors
    /// Returns an [`ArityError`] if the operand count does not fit the kind.
    ///
    /// # Example
    /// ```
    /// use symbra::ast::{Expr, OperatorKind};
    ///
    /// let sum = Expr::operator(OperatorKind::Add,
    ///                          vec![Expr::symbol("a"), Expr::symbol("b"), Expr::literal(1)]);
    /// assert_eq!(sum.unwrap().to_string(), "a + b + 1");
    ///
    /// let bad = Expr::operator(OperatorKind::Divide, vec![Expr::literal(1)]);
    /// assert!(bad.is_err());
    /// ```
    pub fn operator(kind: OperatorKind, operands: Vec<Self>) -> Result<Self, ArityError> {
        if kind.accepts(operands.len()) {
            Ok(Self::from_parts(kind, operands))
        } else {
            Err(ArityError { kind,
                             found: operands.len() })
        }
    }

    /// Creates `left + right`.
    #[must_use]
    pub fn add(left: Self, right: Self) -> Self {
        Self::from_parts(OperatorKind::Add, vec![left, right])
    }

    /// Creates `left - right`.
    #[must_use]
    pub fn sub(left: Self, right: Self) -> Self {
        Self::from_parts(OperatorKind::Subtract, vec![left, right])
    }

    /// Creates `left * right`.
    #[must_use]
    pub fn mul(left: Self, right: Self) -> Self {
        Self::from_parts(OperatorKind::Multiply, vec![left, right])
    }

    /// Creates `numerator / denominator`.
    #[must_use]
    pub fn div(numerator: Self, denominator: Self) -> Self {
        Self::from_parts(OperatorKind::Divide, vec![numerator, denominator])
    }

    /// Creates `base ^ exponent`.
    #[must_use]
    pub fn pow(base: Self, exponent: Self) -> Self {
        Self::from_parts(OperatorKind::Power, vec![base, exponent])
    }

    /// Builds an operator node without checking the operand count.
    ///
    /// Only used where the count is already known to fit the kind.
    pub(crate) fn from_parts(kind: OperatorKind, operands: Vec<Self>) -> Self {
        debug_assert!(kind.accepts(operands.len()));
        Self::Operator(Operation { kind,
                                   operands: operands.into() })
    }

    /// Returns the literal value if this node is a number.
    #[must_use]
    pub const fn as_number(&self) -> Option<Number> {
        match self {
            Self::Literal(n) => Some(*n),
            _ => None,
        }
    }

    /// Returns `true` if this node is an operator.
    #[must_use]
    pub const fn is_operator(&self) -> bool {
        matches!(self, Self::Operator(_))
    }

    /// Collects the names of every symbol that occurs in the tree.
    ///
    /// An expression with no free symbols always evaluates to a number.
    ///
    /// # Example
    /// ```
    /// use symbra::parse;
    ///
    /// let expr = parse("x * (y + x) ^ 2").unwrap();
    /// let names: Vec<String> = expr.free_symbols().into_iter().collect();
    /// assert_eq!(names, ["x", "y"]);
    /// ```
    #[must_use]
    pub fn free_symbols(&self) -> BTreeSet<String> {
        let mut names = BTreeSet::new();
        self.collect_symbols(&mut names);
        names
    }

    fn collect_symbols(&self, names: &mut BTreeSet<String>) {
        match self {
            Self::Literal(_) => {},
            Self::Symbol(name) => {
                names.insert(name.to_string());
            },
            Self::Operator(op) => {
                for operand in op.operands() {
                    operand.collect_symbols(names);
                }
            },
        }
    }

    /// Returns `true` if both handles point at the same node, without
    /// comparing contents.
    pub(crate) fn is_same_node(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Literal(a), Self::Literal(b)) => match (a, b) {
                (Number::Integer(x), Number::Integer(y)) => x == y,
                (Number::Real(x), Number::Real(y)) => x.to_bits() == y.to_bits(),
                _ => false,
            },
            (Self::Symbol(a), Self::Symbol(b)) => Arc::ptr_eq(a, b),
            (Self::Operator(a), Self::Operator(b)) => {
                a.kind == b.kind && Arc::ptr_eq(&a.operands, &b.operands)
            },
            _ => false,
        }
    }
}

/// Writes an operand of `+` or `*`, parenthesized if it is an operator.
fn write_joined_operand(f: &mut std::fmt::Formatter<'_>, operand: &Expr) -> std::fmt::Result {
    if operand.is_operator() {
        write!(f, "({operand})")
    } else {
        write!(f, "{operand}")
    }
}

impl std::fmt::Display for Expr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Literal(n) => write!(f, "{n}"),
            Self::Symbol(name) => write!(f, "{name}"),
            Self::Operator(op) => match (op.kind, op.operands()) {
                (OperatorKind::Add | OperatorKind::Multiply, operands) => {
                    let separator = format!(" {} ", op.kind);
                    for (i, operand) in operands.iter().enumerate() {
                        if i > 0 {
                            f.write_str(&separator)?;
                        }
                        write_joined_operand(f, operand)?;
                    }
                    Ok(())
                },
                (OperatorKind::Subtract, [left, right]) => write!(f, "({left}) - ({right})"),
                (OperatorKind::Divide, [left, right]) => write!(f, "({left}) / ({right})"),
                (OperatorKind::Power, [base, exponent]) => write!(f, "({base})^({exponent})"),
                (kind, operands) => unreachable!("'{kind}' built with {} operands", operands.len()),
            },
        }
    }
}

impl PartialEq for Expr {
    fn eq(&self, other: &Self) -> bool {
        self.is_same_node(other) || self.to_string() == other.to_string()
    }
}

impl Eq for Expr {}

impl Hash for Expr {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.to_string().hash(state);
    }
}
