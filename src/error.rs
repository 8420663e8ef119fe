/// Lexical errors.
///
/// Raised by the tokenizer when a character in the input cannot begin any
/// token.
pub mod lex_error;
/// Parsing errors.
///
/// Defines all error types that can occur while turning a token stream into
/// an expression tree: trailing tokens, mismatched parentheses, tokens that
/// cannot start a factor, and input that ends too early.
pub mod parse_error;
/// Evaluation errors.
///
/// Contains all error types that can be raised while computing a numeric
/// value from an expression tree: division by zero, undefined real powers and
/// bindings that are not numbers.
pub mod eval_error;
/// Construction errors.
///
/// Raised when an operator node is built with an operand count its kind does
/// not allow.
pub mod arity_error;

pub use arity_error::ArityError;
pub use eval_error::EvalError;
pub use lex_error::LexicalError;
pub use parse_error::ParseError;

/// Any error the engine can produce.
///
/// Callers that drive the whole pipeline (parse, substitute, evaluate) and
/// only need to report failures can use this type with `?`.
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// The input could not be tokenized or parsed.
    Parse(ParseError),
    /// The expression could not be evaluated.
    Eval(EvalError),
    /// An operator node was built with the wrong number of operands.
    Arity(ArityError),
}

impl From<LexicalError> for Error {
    fn from(error: LexicalError) -> Self {
        Self::Parse(ParseError::Lexical(error))
    }
}

impl From<ParseError> for Error {
    fn from(error: ParseError) -> Self {
        Self::Parse(error)
    }
}

impl From<EvalError> for Error {
    fn from(error: EvalError) -> Self {
        Self::Eval(error)
    }
}

impl From<ArityError> for Error {
    fn from(error: ArityError) -> Self {
        Self::Arity(error)
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Parse(e) => write!(f, "{e}"),
            Self::Eval(e) => write!(f, "{e}"),
            Self::Arity(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Parse(e) => Some(e),
            Self::Eval(e) => Some(e),
            Self::Arity(e) => Some(e),
        }
    }
}
