use std::iter::Peekable;

use tracing::debug;

use crate::{
    ast::Expr,
    error::ParseError,
    interpreter::{
        lexer::{Spanned, Token, tokenize},
        parser::binary::parse_additive,
    },
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Parses a full expression.
///
/// This is the entry point for expression parsing.
/// It begins at the lowest-precedence level, addition, and recursively
/// descends through the precedence hierarchy.
///
/// Grammar: `expression := term (("+" | "-") term)*`
///
/// # Parameters
/// - `tokens`: Token iterator providing `(Token, position)` pairs.
/// - `end`: Byte length of the source, reported when input runs out.
///
/// # Returns
/// The parsed expression node.
pub fn parse_expression<'a, I>(tokens: &mut Peekable<I>, end: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)>
{
    parse_additive(tokens, end)
}

/// Parses a complete token sequence into a single expression.
///
/// Every token must be consumed; a token left over after the expression is
/// complete is an error.
///
/// # Errors
/// - `UnexpectedTrailingToken` if tokens remain after the expression.
/// - Propagates any error from [`parse_expression`].
///
/// # Example
/// ```
/// use symbra::{
///     error::ParseError,
///     interpreter::{lexer::tokenize, parser::core::parse_tokens},
/// };
///
/// let tokens = tokenize("1 + 2 3").unwrap();
/// let err = parse_tokens(&tokens, 7).unwrap_err();
/// assert!(matches!(err, ParseError::UnexpectedTrailingToken { position: 6, .. }));
/// ```
pub fn parse_tokens(tokens: &[Spanned], end: usize) -> ParseResult<Expr> {
    let mut iter = tokens.iter().peekable();
    let expr = parse_expression(&mut iter, end)?;

    if let Some((token, position)) = iter.next() {
        return Err(ParseError::UnexpectedTrailingToken { token:    token.to_string(),
                                                         position: *position, });
    }

    Ok(expr)
}

/// Tokenizes and parses `source` into an expression tree.
///
/// # Errors
/// Returns `ParseError::Lexical` if tokenization fails, and any grammar
/// error from [`parse_tokens`].
pub fn parse_source(source: &str) -> ParseResult<Expr> {
    let tokens = tokenize(source)?;
    debug!(count = tokens.len(), "tokenized expression");

    let expr = parse_tokens(&tokens, source.len())?;
    debug!(expression = %expr, "parsed expression");

    Ok(expr)
}
