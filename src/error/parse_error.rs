use crate::error::LexicalError;

#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur during lexing or parsing.
pub enum ParseError {
    /// The tokenizer rejected a character before parsing began.
    Lexical(LexicalError),
    /// A complete expression was parsed but tokens remain.
    UnexpectedTrailingToken {
        /// The extra token.
        token:    String,
        /// Byte offset of the token in the source.
        position: usize,
    },
    /// An opening parenthesis was not closed at the matching nesting level.
    MismatchedParentheses {
        /// Byte offset of the unmatched `(`.
        position: usize,
    },
    /// Reached the end of input while a factor was expected.
    UnexpectedEndOfInput {
        /// Byte offset of the end of the source.
        position: usize,
    },
    /// A token that cannot start a factor was found where one was expected.
    InvalidToken {
        /// The token encountered.
        token:    String,
        /// Byte offset of the token in the source.
        position: usize,
    },
}

impl ParseError {
    /// Byte offset in the source where the error was detected.
    ///
    /// ```
    /// use symbra::parse;
    ///
    /// let err = parse("1 + )").unwrap_err();
    /// assert_eq!(err.position(), 4);
    /// ```
    #[must_use]
    pub const fn position(&self) -> usize {
        match self {
            Self::Lexical(LexicalError { position, .. })
            | Self::UnexpectedTrailingToken { position, .. }
            | Self::MismatchedParentheses { position }
            | Self::UnexpectedEndOfInput { position }
            | Self::InvalidToken { position, .. } => *position,
        }
    }
}

impl From<LexicalError> for ParseError {
    fn from(error: LexicalError) -> Self {
        Self::Lexical(error)
    }
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Lexical(e) => write!(f, "{e}"),

            Self::UnexpectedTrailingToken { token, position } => write!(f,
                                                                        "Error at position {position}: Unexpected trailing token: {token}."),

            Self::MismatchedParentheses { position } => write!(f,
                                                               "Error at position {position}: Mismatched parentheses, '(' is never closed."),

            Self::UnexpectedEndOfInput { position } => {
                write!(f, "Error at position {position}: Unexpected end of input.")
            },

            Self::InvalidToken { token, position } => write!(f,
                                                             "Error at position {position}: Invalid token in expression: {token}."),
        }
    }
}

impl std::error::Error for ParseError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Lexical(e) => Some(e),
            _ => None,
        }
    }
}
