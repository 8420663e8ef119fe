/// Converts an `i64` to the nearest `f64`.
///
/// Integers whose magnitude exceeds `2^53` are rounded to the nearest
/// representable real, which is the promotion mixed integer/real
/// arithmetic wants.
///
/// ## Example
/// ```
/// use symbra::util::num::i64_to_f64;
///
/// assert_eq!(i64_to_f64(42), 42.0);
/// assert_eq!(i64_to_f64(-7), -7.0);
/// ```
#[allow(clippy::cast_precision_loss)]
#[must_use]
pub const fn i64_to_f64(value: i64) -> f64 {
    value as f64
}

/// Converts an `i64` exponent to `u32` for checked integer exponentiation.
///
/// ## Returns
/// - `Some(u32)` if the value is non-negative and fits.
/// - `None` otherwise; the caller falls back to real exponentiation.
///
/// ## Example
/// ```
/// use symbra::util::num::i64_to_u32_exponent;
///
/// assert_eq!(i64_to_u32_exponent(45), Some(45));
/// assert_eq!(i64_to_u32_exponent(-1), None);
/// assert_eq!(i64_to_u32_exponent(i64::MAX), None);
/// ```
#[must_use]
pub fn i64_to_u32_exponent(value: i64) -> Option<u32> {
    u32::try_from(value).ok()
}

/// Formats a real number in positional notation with a fractional part.
///
/// Integral reals keep a trailing `.0` so they remain distinguishable from
/// integers, and exponent notation is never produced, so a non-negative
/// finite result always reads back as a single number token.
///
/// ## Example
/// ```
/// use symbra::util::num::format_real;
///
/// assert_eq!(format_real(2.0), "2.0");
/// assert_eq!(format_real(0.5), "0.5");
/// assert_eq!(format_real(1e-7), "0.0000001");
/// assert_eq!(format_real(1e20), "100000000000000000000.0");
/// ```
#[must_use]
pub fn format_real(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 {
        format!("{value:.1}")
    } else {
        format!("{value}")
    }
}
