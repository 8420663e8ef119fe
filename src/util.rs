/// Numeric conversion and formatting helpers.
///
/// This module provides the conversions the numeric tower needs when an
/// integer result has to be promoted to a real, when an exponent has to be
/// narrowed for checked integer exponentiation, and when a real has to be
/// written back out in a form the tokenizer accepts again.
pub mod num;
