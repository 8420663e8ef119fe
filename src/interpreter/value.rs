/// Evaluation results and bindings.
///
/// Declares [`core::Value`], the number-or-residual-tree result of evaluation,
/// and the [`core::Bindings`] map that supplies symbol values.
pub mod core;
/// The numeric tower.
///
/// Declares [`number::Number`], an integer or real constant, along with the
/// promoting arithmetic used by the evaluator.
pub mod number;
