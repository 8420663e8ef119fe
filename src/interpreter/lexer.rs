use logos::Logos;
use tracing::trace;

use crate::error::LexicalError;

/// Represents a lexical token in the source input.
/// A token is a minimal but meaningful unit of text produced by the lexer.
/// This enum defines all recognized tokens in the language.
#[derive(Logos, Debug, PartialEq, Eq, Clone)]
pub enum Token {
    /// Numeric literal tokens, such as `42` or `3.14`, kept as source text.
    #[regex(r"[0-9]+(\.[0-9]+)?", |lex| lex.slice().to_string())]
    Number(String),
    /// Identifier tokens; symbol names such as `x` or `side_length`.
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*", |lex| lex.slice().to_string())]
    Identifier(String),
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `^`
    #[token("^")]
    Caret,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// Spaces, tabs, feeds and line breaks.
    #[regex(r"[ \t\r\n\f]+", logos::skip)]
    Ignored,
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number(text) | Self::Identifier(text) => write!(f, "{text}"),
            Self::Plus => write!(f, "+"),
            Self::Minus => write!(f, "-"),
            Self::Star => write!(f, "*"),
            Self::Slash => write!(f, "/"),
            Self::Caret => write!(f, "^"),
            Self::LParen => write!(f, "("),
            Self::RParen => write!(f, ")"),
            Self::Ignored => Ok(()),
        }
    }
}

/// A token paired with the byte offset where it starts in the source.
pub type Spanned = (Token, usize);

/// Splits `source` into tokens, left to right, skipping whitespace.
///
/// Numbers are one or more digits optionally followed by `.` and more
/// digits; identifiers are a letter or underscore followed by letters,
/// digits or underscores; operators and parentheses are single characters.
///
/// # Errors
/// Returns a [`LexicalError`] naming the first character that cannot begin
/// a token, and its position.
///
/// # Example
/// ```
/// use symbra::interpreter::lexer::{Token, tokenize};
///
/// let tokens = tokenize("x1 ^ 2.5").unwrap();
/// assert_eq!(tokens,
///            vec![(Token::Identifier("x1".to_string()), 0),
///                 (Token::Caret, 3),
///                 (Token::Number("2.5".to_string()), 5)]);
///
/// let err = tokenize("2 $ 3").unwrap_err();
/// assert_eq!((err.character, err.position), ('$', 2));
/// ```
pub fn tokenize(source: &str) -> Result<Vec<Spanned>, LexicalError> {
    let mut tokens = Vec::new();
    let mut lexer = Token::lexer(source);

    while let Some(token) = lexer.next() {
        let position = lexer.span().start;
        if let Ok(tok) = token {
            trace!(token = %tok, position, "scanned token");
            tokens.push((tok, position));
        } else {
            let character = lexer.slice().chars().next().unwrap_or_default();
            return Err(LexicalError { character,
                                      position });
        }
    }

    Ok(tokens)
}
