/// Reduces a 64-bit intermediate into the signed 32-bit range.
///
/// The value is masked to its low 32 bits and reinterpreted as a
/// two's-complement signed integer, mapping the unsigned range `[0, 2^32)`
/// onto `[-2^31, 2^31)`. Every evaluation step that can overflow 32 bits
/// passes its result through this function before returning it or feeding it
/// to an enclosing operation.
///
/// The function is idempotent: `wrap(wrap(x) as i64) == wrap(x)`.
///
/// ## Parameters
/// - `value`: The 64-bit intermediate to reduce.
///
/// ## Returns
/// The wrapped value in `[-2^31, 2^31 - 1]`.
///
/// ## Example
/// ```
/// use exprgen::util::int32::wrap;
///
/// assert_eq!(wrap(7), 7);
/// assert_eq!(wrap(1 << 31), i32::MIN);
/// assert_eq!(wrap(i64::from(i32::MIN) - 1), i32::MAX);
/// assert_eq!(wrap(1 << 32), 0);
/// ```
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss, clippy::cast_possible_wrap)]
pub const fn wrap(value: i64) -> i32 {
    ((value & 0xffff_ffff) as u32) as i32
}

/// Divides with truncation toward negative infinity.
///
/// Floor division differs from Rust's `/` (which truncates toward zero)
/// whenever the operands have opposite signs and the division is inexact.
/// This matches the target evaluator's semantics exactly and must not be
/// "fixed" to C-style truncation.
///
/// The divisor must be nonzero; the evaluator checks before calling.
///
/// ## Example
/// ```
/// use exprgen::util::int32::floor_div;
///
/// assert_eq!(floor_div(7, 2), 3);
/// assert_eq!(floor_div(-7, 2), -4);
/// assert_eq!(floor_div(7, -2), -4);
/// assert_eq!(floor_div(-7, -2), 3);
/// ```
#[must_use]
pub const fn floor_div(lhs: i64, rhs: i64) -> i64 {
    let quotient = lhs / rhs;
    if lhs % rhs != 0 && (lhs < 0) != (rhs < 0) {
        quotient - 1
    } else {
        quotient
    }
}

/// Computes the remainder matching [`floor_div`].
///
/// The result has the sign of the divisor, so the identity
/// `lhs == floor_div(lhs, rhs) * rhs + floor_mod(lhs, rhs)` holds.
///
/// The divisor must be nonzero; the evaluator checks before calling.
///
/// ## Example
/// ```
/// use exprgen::util::int32::floor_mod;
///
/// assert_eq!(floor_mod(7, 2), 1);
/// assert_eq!(floor_mod(-7, 2), 1);
/// assert_eq!(floor_mod(7, -2), -1);
/// assert_eq!(floor_mod(-7, -2), -1);
/// ```
#[must_use]
pub const fn floor_mod(lhs: i64, rhs: i64) -> i64 {
    let remainder = lhs % rhs;
    if remainder != 0 && (remainder < 0) != (rhs < 0) {
        remainder + rhs
    } else {
        remainder
    }
}
