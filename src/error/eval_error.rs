#[derive(Debug, Clone, PartialEq)]
/// Represents all errors that can occur during evaluation.
pub enum EvalError {
    /// The right operand of a division evaluated to zero.
    DivisionByZero {
        /// Canonical rendering of the division being evaluated.
        expression: String,
    },
    /// A power has no real result (or no finite one).
    NumericDomain {
        /// Details describing why the result is undefined.
        details: String,
    },
    /// A binding supplied for a symbol is not a number.
    BindingType {
        /// The name of the symbol.
        name:  String,
        /// Canonical rendering of the value that was bound.
        found: String,
    },
}

impl std::fmt::Display for EvalError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DivisionByZero { expression } => {
                write!(f, "Error: Division by zero in {expression}.")
            },
            Self::NumericDomain { details } => {
                write!(f, "Error: Result is not a real number: {details}.")
            },
            Self::BindingType { name, found } => write!(f,
                                                        "Error: Value for symbol '{name}' must be numeric, found {found}."),
        }
    }
}

impl std::error::Error for EvalError {}
