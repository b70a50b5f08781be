#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Represents the recoverable conditions that can occur during evaluation.
///
/// Both variants arise only while evaluating a freshly generated tree that
/// has not yet passed the assembler's validity filter. They are data
/// conditions, not defects: the assembler discards the whole candidate
/// tree/environment pair and regenerates it from scratch. Neither error ever
/// propagates past the public generation entry points.
pub enum EvalError {
    /// The right operand of `/` or `%` evaluated to zero.
    DivisionByZero,
    /// The right operand of `<<` or `>>` evaluated outside `[0, 32]`.
    ShiftOutOfRange {
        /// The evaluated shift amount.
        amount: i32,
    },
}

impl std::fmt::Display for EvalError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DivisionByZero => write!(f, "Division or modulo by zero."),
            Self::ShiftOutOfRange { amount } => write!(f,
                                                       "Shift amount {amount} is outside the allowed range [0, 32]."),
        }
    }
}

impl std::error::Error for EvalError {}
