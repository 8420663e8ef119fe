use std::iter::Peekable;

use crate::{
    ast::Expr,
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::core::{ParseResult, parse_expression},
        value::number::Number,
    },
};

/// Parses a factor: the atoms of the expression grammar.
///
/// Grammar:
/// ```text
///     factor := NUMBER
///             | IDENTIFIER
///             | "(" expression ")"
/// ```
/// # Parameters
/// - `tokens`: Token iterator positioned at the start of a factor.
/// - `end`: Byte length of the source.
///
/// # Returns
/// The parsed [`Expr`] or a `ParseError` on failure.
///
/// # Errors
/// - `UnexpectedEndOfInput` if there are no tokens left.
/// - `InvalidToken` if the next token cannot start a factor.
/// - `MismatchedParentheses` if a `(` is not closed by a `)` at the same
///   nesting level.
pub fn parse_factor<'a, I>(tokens: &mut Peekable<I>, end: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)>
{
    let (token, position) = tokens.next()
                                  .ok_or(ParseError::UnexpectedEndOfInput { position: end })?;

    match token {
        Token::Number(text) => parse_number(text, *position),
        Token::Identifier(name) => Ok(Expr::symbol(name.as_str())),
        Token::LParen => parse_grouping(tokens, *position, end),
        tok => Err(ParseError::InvalidToken { token:    tok.to_string(),
                                              position: *position, }),
    }
}

/// Parses the inside of a parenthesized expression, up to and including the
/// closing `)`.
///
/// # Parameters
/// - `tokens`: Token iterator positioned just after `(`.
/// - `open`: Position of the opening `(`.
/// - `end`: Byte length of the source.
fn parse_grouping<'a, I>(tokens: &mut Peekable<I>, open: usize, end: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)>
{
    let expr = parse_expression(tokens, end)?;
    match tokens.next() {
        Some((Token::RParen, _)) => Ok(expr),
        _ => Err(ParseError::MismatchedParentheses { position: open }),
    }
}

/// Converts the text of a number token into a literal.
///
/// Integers that do not fit in an `i64` are read as reals.
fn parse_number(text: &str, position: usize) -> ParseResult<Expr> {
    if !text.contains('.')
       && let Ok(n) = text.parse::<i64>()
    {
        return Ok(Expr::Literal(Number::Integer(n)));
    }

    text.parse::<f64>()
        .map(|r| Expr::Literal(Number::Real(r)))
        .map_err(|_| ParseError::InvalidToken { token: text.to_string(),
                                                position })
}
