use crate::{
    ast::BinaryOperator,
    error::EvalError,
    eval::core::EvalResult,
    util::int32::{floor_div, floor_mod, wrap},
};

/// Evaluates a binary operation between two 32-bit values.
///
/// Arithmetic operations are computed on 64-bit intermediates and wrapped
/// back into the signed 32-bit range. Division and modulo use floor
/// semantics (truncation toward negative infinity) and reject a zero right
/// operand. Shifts are computed on 64-bit intermediates after checking that
/// the amount lies in `[0, 32]`; the right shift is arithmetic. Comparison
/// and logical operators yield 0/1, and the logical operators do not
/// short-circuit (both operands are already evaluated on entry).
///
/// # Parameters
/// - `op`: The operator.
/// - `lhs`: Left operand.
/// - `rhs`: Right operand.
///
/// # Returns
/// An `EvalResult<i32>` containing the wrapped result.
///
/// # Example
/// ```
/// use exprgen::{ast::BinaryOperator, eval::binary::eval_binary};
///
/// assert_eq!(eval_binary(BinaryOperator::Add, i32::MAX, 1), Ok(i32::MIN));
/// assert_eq!(eval_binary(BinaryOperator::Div, -7, 2), Ok(-4));
/// assert_eq!(eval_binary(BinaryOperator::Less, 2, 3), Ok(1));
/// assert!(eval_binary(BinaryOperator::Mod, 1, 0).is_err());
/// ```
pub fn eval_binary(op: BinaryOperator, lhs: i32, rhs: i32) -> EvalResult<i32> {
    use BinaryOperator::{
        Add, And, BitAnd, BitOr, BitXor, Div, Equal, Greater, GreaterEqual, Less, LessEqual, Mod,
        Mul, NotEqual, Or, ShiftLeft, ShiftRight, Sub,
    };

    let left = i64::from(lhs);
    let right = i64::from(rhs);

    match op {
        Add => Ok(wrap(left + right)),
        Sub => Ok(wrap(left - right)),
        Mul => Ok(wrap(left * right)),
        Div => {
            if rhs == 0 {
                return Err(EvalError::DivisionByZero);
            }
            Ok(wrap(floor_div(left, right)))
        },
        Mod => {
            if rhs == 0 {
                return Err(EvalError::DivisionByZero);
            }
            Ok(wrap(floor_mod(left, right)))
        },
        BitAnd => Ok(lhs & rhs),
        BitOr => Ok(lhs | rhs),
        BitXor => Ok(lhs ^ rhs),
        ShiftLeft | ShiftRight => {
            if !(0..=32).contains(&rhs) {
                return Err(EvalError::ShiftOutOfRange { amount: rhs });
            }
            let shifted = match op {
                ShiftLeft => left << rhs,
                _ => left >> rhs,
            };
            Ok(wrap(shifted))
        },
        And => Ok(i32::from(lhs != 0 && rhs != 0)),
        Or => Ok(i32::from(lhs != 0 || rhs != 0)),
        Less => Ok(i32::from(lhs < rhs)),
        Greater => Ok(i32::from(lhs > rhs)),
        LessEqual => Ok(i32::from(lhs <= rhs)),
        GreaterEqual => Ok(i32::from(lhs >= rhs)),
        Equal => Ok(i32::from(lhs == rhs)),
        NotEqual => Ok(i32::from(lhs != rhs)),
    }
}
