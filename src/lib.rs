//! # symbra
//!
//! symbra is a symbolic arithmetic engine written in Rust.
//! It parses infix expressions into immutable expression trees, evaluates
//! them fully or partially under symbol bindings, simplifies them with
//! algebraic identities, and substitutes symbols with numbers or other trees.
//!
//! ```
//! use symbra::{Bindings, Value, evaluate, parse};
//!
//! let expr = parse("x + 2 * y").unwrap();
//!
//! let bindings = Bindings::from([("x".to_string(), Value::from(3)),
//!                                ("y".to_string(), Value::from(4))]);
//! assert_eq!(evaluate(&expr, &bindings).unwrap(), Value::from(11));
//!
//! let partial = Bindings::from([("y".to_string(), Value::from(4))]);
//! assert_eq!(evaluate(&expr, &partial).unwrap().to_string(), "x + 8");
//! ```

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use tracing::debug;

pub use crate::{
    ast::{Expr, OperatorKind},
    error::{ArityError, Error, EvalError, LexicalError, ParseError},
    interpreter::{
        lexer::Token,
        value::{
            core::{Bindings, Value},
            number::Number,
        },
    },
};
use crate::interpreter::{evaluator::core::Evaluator, lexer, parser::core::parse_source};

/// Defines the structure of parsed expressions.
///
/// This module declares the `Expr` enum and related types that represent an
/// arithmetic formula as a tree. Trees are built by the parser or by the
/// constructors on `Expr`, and are immutable afterwards.
///
/// # Responsibilities
/// - Defines literal, symbol and operator nodes.
/// - Enforces operator arity at construction time.
/// - Provides the canonical rendering used for display and equality.
pub mod ast;
/// Provides unified error types for tokenizing, parsing and evaluation.
///
/// This module defines all errors that can be raised while scanning,
/// parsing, building or evaluating expressions. It standardizes error
/// reporting and carries source positions or offending values for context.
///
/// # Responsibilities
/// - Defines error types for all failure modes (lexer, parser, evaluator,
///   construction).
/// - Attaches positions and detailed messages for context.
/// - Supports integration with standard error handling traits.
pub mod error;
/// Orchestrates the processing of expressions.
///
/// This module ties together lexing, parsing, evaluation and value
/// representations to provide the complete engine.
///
/// # Responsibilities
/// - Coordinates all core components: lexer, parser, evaluator, and value
///   types.
/// - Manages the flow of data and errors between phases.
pub mod interpreter;
/// General utilities for numeric conversion and formatting.
///
/// This module provides helpers used by the numeric tower: promotion of
/// integers to reals, narrowing of exponents, and rendering reals in a form
/// the tokenizer reads back.
pub mod util;

/// Splits `text` into tokens, skipping whitespace.
///
/// # Errors
/// Returns a [`LexicalError`] naming the first character that does not begin
/// a valid token.
///
/// # Examples
/// ```
/// use symbra::{Token, tokenize};
///
/// assert_eq!(tokenize("(a+1)").unwrap(),
///            vec![Token::LParen,
///                 Token::Identifier("a".to_string()),
///                 Token::Plus,
///                 Token::Number("1".to_string()),
///                 Token::RParen]);
/// assert!(tokenize("a % b").is_err());
/// ```
pub fn tokenize(text: &str) -> Result<Vec<Token>, LexicalError> {
    let tokens = lexer::tokenize(text)?;
    Ok(tokens.into_iter().map(|(token, _)| token).collect())
}

/// Parses `text` into an expression tree.
///
/// `+`/`-` bind loosest and `*`/`/` tighter, both left-associative; `^`
/// binds tightest and is right-associative. The whole input must form a
/// single expression.
///
/// # Errors
/// Returns a [`ParseError`]; lexical failures are wrapped in
/// [`ParseError::Lexical`].
///
/// # Examples
/// ```
/// use symbra::parse;
///
/// assert_eq!(parse("2 ^ 3 ^ 2").unwrap().to_string(), "(2)^((3)^(2))");
/// assert_eq!(parse("a - b - c").unwrap().to_string(), "((a) - (b)) - (c)");
/// assert!(parse("(1 + 2").is_err());
/// ```
pub fn parse(text: &str) -> Result<Expr, ParseError> {
    parse_source(text)
}

/// Alias of [`parse`], for callers that think in terms of building a tree.
///
/// # Examples
/// ```
/// assert_eq!(symbra::build_tree("x * (y + 1)").unwrap().to_string(), "x * (y + 1)");
/// ```
pub fn build_tree(text: &str) -> Result<Expr, ParseError> {
    parse(text)
}

/// Evaluates `expr` under `bindings`.
///
/// Returns [`Value::Number`] when every symbol in the tree is bound, and a
/// residual [`Value::Expr`] with all computable subtrees folded otherwise.
/// The tree itself is never modified.
///
/// # Errors
/// Returns an [`EvalError`] on division by zero, a power with no real
/// result, or a binding that is not numeric.
pub fn evaluate(expr: &Expr, bindings: &Bindings) -> Result<Value, EvalError> {
    Evaluator::new(bindings).eval(expr)
}

/// Parses and evaluates `text` in one step.
///
/// # Examples
/// ```
/// use symbra::{Bindings, Value, evaluate_str};
///
/// let bindings = Bindings::from([("x".to_string(), Value::from(1)),
///                                ("y".to_string(), Value::from(3))]);
/// assert_eq!(evaluate_str("(x + 2) * y", &bindings).unwrap(), Value::from(9));
/// assert!(evaluate_str("1 / x", &Bindings::from([("x".to_string(), Value::from(0))])).is_err());
/// ```
pub fn evaluate_str(text: &str, bindings: &Bindings) -> Result<Value, Error> {
    let expr = parse(text)?;
    Ok(evaluate(&expr, bindings)?)
}

/// Simplifies `expr` with one bottom-up pass of identity rules.
///
/// See [`Expr::simplify`] for the rules applied.
#[must_use]
pub fn simplify(expr: &Expr) -> Expr {
    let simplified = expr.simplify();
    debug!(before = %expr, after = %simplified, "simplified expression");
    simplified
}

/// Replaces the symbols named in `map` with the mapped numbers or trees.
///
/// See [`Expr::substitute`].
#[must_use]
pub fn substitute(expr: &Expr, map: &Bindings) -> Expr {
    expr.substitute(map)
}

/// Renders `expr` in canonical form.
///
/// `+` and `*` join their operands, parenthesizing operator operands;
/// `-`, `/` and `^` parenthesize both operands. Two expressions are equal
/// exactly when their renderings are.
///
/// # Examples
/// ```
/// use symbra::{parse, render};
///
/// assert_eq!(render(&parse("x - 2").unwrap()), "(x) - (2)");
/// assert_eq!(render(&parse("x * (y + 1)").unwrap()), "x * (y + 1)");
/// ```
#[must_use]
pub fn render(expr: &Expr) -> String {
    expr.to_string()
}
