use crate::ast::OperatorKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// An operator node was built with an operand count its kind does not allow.
pub struct ArityError {
    /// The operator being built.
    pub kind:  OperatorKind,
    /// The number of operands supplied.
    pub found: usize,
}

impl std::fmt::Display for ArityError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let expected = if self.kind.is_variadic() {
            "at least 1"
        } else {
            "exactly 2"
        };
        write!(f,
               "Error: Operator '{}' takes {expected} operands, but {} were given.",
               self.kind, self.found)
    }
}

impl std::error::Error for ArityError {}
