/// Evaluation errors.
///
/// Defines the recoverable conditions that can arise while evaluating a
/// freshly generated, not-yet-validated expression tree: division by zero and
/// out-of-range shift amounts. The assembler catches both and regenerates the
/// candidate case.
pub mod eval_error;
/// Generation errors.
///
/// Contains the fatal conditions surfaced by the test-case assembler, such as
/// exhausting the retry budget while discarding invalid candidates.
pub mod gen_error;

pub use eval_error::EvalError;
pub use gen_error::GenError;
