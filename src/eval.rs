/// Binary operator evaluation logic.
///
/// Handles all binary operations: wraparound arithmetic, floor division and
/// modulo, bitwise operations, range-checked shifts, comparisons and
/// non-short-circuiting logical operators.
pub mod binary;

/// Unary operator evaluation logic.
///
/// Implements the unary operations: identity, wraparound negation, bitwise
/// complement and logical NOT.
pub mod unary;

/// Core evaluation logic and the variable environment.
///
/// Contains the environment type, the evaluator result alias and the
/// exhaustive evaluation dispatch over the expression node variants.
pub mod core;

/// Numeric-substituted rendering.
///
/// Renders a tree into the canonical target-language text with every
/// variable replaced by its bound value, mirroring what the
/// evaluator-under-test is expected to compute.
pub mod render;
