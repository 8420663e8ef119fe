/// Core evaluation logic.
///
/// Contains the [`core::Evaluator`], which walks a tree bottom-up under a set
/// of bindings and yields a number or a partially evaluated residual tree.
pub mod core;

/// Numeric operator evaluation.
///
/// Implements the numeric function of every operator once all of its
/// operands are numbers, including the explicit zero-denominator check.
pub mod operator;

/// Exponentiation.
///
/// Computes powers with checked integer arithmetic where possible and real
/// exponentiation otherwise, rejecting results that are not real numbers.
pub mod power;

/// Identity-based simplification.
///
/// A single bottom-up rewrite pass removing additive and multiplicative
/// identities and trivial powers.
pub mod simplify;

/// Symbol substitution.
///
/// Replaces named symbols with numbers or other expression trees, preserving
/// the arity of every operator.
pub mod substitute;
