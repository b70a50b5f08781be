use crate::{ast::UnaryOperator, util::int32::wrap};

/// Evaluates a unary operation on a 32-bit value.
///
/// Supported operators:
/// - `Plus`: the identity.
/// - `Negate`: arithmetic negation, wrapped (so `-i32::MIN` stays
///   `i32::MIN`).
/// - `BitNot`: bitwise complement.
/// - `Not`: logical NOT, yielding 0/1.
///
/// Unary evaluation is total; no operator can fail.
///
/// # Example
/// ```
/// use exprgen::{ast::UnaryOperator, eval::unary::eval_unary};
///
/// assert_eq!(eval_unary(UnaryOperator::Negate, 5), -5);
/// assert_eq!(eval_unary(UnaryOperator::Negate, i32::MIN), i32::MIN);
/// assert_eq!(eval_unary(UnaryOperator::BitNot, 0), -1);
/// assert_eq!(eval_unary(UnaryOperator::Not, 42), 0);
/// ```
#[must_use]
#[allow(clippy::cast_lossless)]
pub const fn eval_unary(op: UnaryOperator, value: i32) -> i32 {
    match op {
        UnaryOperator::Plus => value,
        UnaryOperator::Negate => wrap(-(value as i64)),
        UnaryOperator::BitNot => !value,
        UnaryOperator::Not => (value == 0) as i32,
    }
}
