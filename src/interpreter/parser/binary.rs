use std::iter::Peekable;

use crate::{
    ast::{Expr, OperatorKind},
    interpreter::{
        lexer::Token,
        parser::{core::ParseResult, factor::parse_factor},
    },
};

/// Parses addition and subtraction expressions.
///
/// Handles left-associative binary operators: `+` and `-`.
///
/// The rule is: `expression := term (("+" | "-") term)*`
///
/// # Parameters
/// - `tokens`: Token stream with position information.
/// - `end`: Byte length of the source.
///
/// # Returns
/// An `Add`/`Subtract` tree folded left to right.
pub fn parse_additive<'a, I>(tokens: &mut Peekable<I>, end: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)>
{
    let mut left = parse_multiplicative(tokens, end)?;
    loop {
        if let Some((token, _)) = tokens.peek()
           && let Some(kind) = token_to_operator(token)
           && matches!(kind, OperatorKind::Add | OperatorKind::Subtract)
        {
            tokens.next();
            let right = parse_multiplicative(tokens, end)?;
            left = Expr::from_parts(kind, vec![left, right]);
            continue;
        }
        break;
    }
    Ok(left)
}

/// Parses multiplication-level expressions.
///
/// Handles left-associative operators: `*` and `/`.
///
/// The rule is: `term := power (("*" | "/") power)*`
///
/// # Parameters
/// - `tokens`: Token stream with position information.
/// - `end`: Byte length of the source.
///
/// # Returns
/// A `Multiply`/`Divide` tree combining power-level nodes.
pub fn parse_multiplicative<'a, I>(tokens: &mut Peekable<I>, end: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)>
{
    let mut left = parse_power(tokens, end)?;
    loop {
        if let Some((token, _)) = tokens.peek()
           && let Some(kind) = token_to_operator(token)
           && matches!(kind, OperatorKind::Multiply | OperatorKind::Divide)
        {
            tokens.next();
            let right = parse_power(tokens, end)?;
            left = Expr::from_parts(kind, vec![left, right]);
            continue;
        }
        break;
    }
    Ok(left)
}

/// Parses exponentiation expressions.
///
/// Exponentiation is right-associative: the right operand is parsed by
/// recursing into this rule before the node is built, so `a ^ b ^ c` parses
/// as `a ^ (b ^ c)`.
///
/// The rule is: `power := factor ("^" power)?`
///
/// # Parameters
/// - `tokens`: Token stream.
/// - `end`: Byte length of the source.
///
/// # Returns
/// A `Power` node, or the factor itself when no `^` follows.
pub fn parse_power<'a, I>(tokens: &mut Peekable<I>, end: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)>
{
    let base = parse_factor(tokens, end)?;
    if let Some((Token::Caret, _)) = tokens.peek() {
        tokens.next();
        let exponent = parse_power(tokens, end)?;
        return Ok(Expr::pow(base, exponent));
    }
    Ok(base)
}

/// Maps a token to its corresponding operator.
///
/// Returns `Some(OperatorKind)` for `+`, `-`, `*`, `/` and `^`, and `None`
/// for all other tokens.
///
/// # Example
/// ```
/// use symbra::{
///     ast::OperatorKind,
///     interpreter::{lexer::Token, parser::binary::token_to_operator},
/// };
///
/// assert_eq!(token_to_operator(&Token::Plus), Some(OperatorKind::Add));
/// assert_eq!(token_to_operator(&Token::LParen), None);
/// ```
#[must_use]
pub const fn token_to_operator(token: &Token) -> Option<OperatorKind> {
    match token {
        Token::Plus => Some(OperatorKind::Add),
        Token::Minus => Some(OperatorKind::Subtract),
        Token::Star => Some(OperatorKind::Multiply),
        Token::Slash => Some(OperatorKind::Divide),
        Token::Caret => Some(OperatorKind::Power),
        _ => None,
    }
}
