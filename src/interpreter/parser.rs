/// Parser entry points.
///
/// Provides the top-level expression parser, the whole-input check for
/// trailing tokens, and the combined tokenize-and-parse routine.
pub mod core;

/// Binary operator parsing.
///
/// Implements the precedence levels for `+`/`-`, `*`/`/` and `^`, including
/// left-associative folding and right-associative exponentiation.
pub mod binary;

/// Factor parsing.
///
/// Handles the atoms of the grammar: number literals, identifiers and
/// parenthesized sub-expressions.
pub mod factor;
