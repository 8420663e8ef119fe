/// The evaluator module computes results from expression trees.
///
/// The evaluator traverses a tree bottom-up under a set of bindings and
/// produces either a number or a partially evaluated residual tree. It also
/// hosts the tree-to-tree transforms: simplification and substitution.
///
/// # Responsibilities
/// - Applies the numeric function of each operator once its operands are
///   numbers.
/// - Rewrites trees with identity-based simplification and substitution.
/// - Reports evaluation errors such as division by zero or non-real powers.
pub mod evaluator;
/// The lexer module tokenizes source text for further parsing.
///
/// The lexer reads the raw expression string and produces a sequence of
/// tokens: numbers, identifiers, the five arithmetic operators, and
/// parentheses. This is the first stage of the pipeline.
///
/// # Responsibilities
/// - Converts the input character stream into tokens with source positions.
/// - Skips whitespace.
/// - Reports lexical errors for characters that begin no token.
pub mod lexer;
/// The parser module builds the expression tree from tokens.
///
/// The parser processes the token stream produced by the lexer with
/// recursive descent, one function per precedence level, and constructs an
/// [`crate::ast::Expr`].
///
/// # Responsibilities
/// - Honours operator precedence and associativity.
/// - Validates grammar, reporting errors with source positions.
/// - Ensures the whole input is consumed.
pub mod parser;
/// The value module defines the data types produced by evaluation.
///
/// This module declares the numeric tower and the number-or-expression value
/// type used both for evaluation results and for bindings.
///
/// # Responsibilities
/// - Defines `Number` with promoting arithmetic between integers and reals.
/// - Defines `Value` and the `Bindings` map.
pub mod value;
