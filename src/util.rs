/// 32-bit wraparound arithmetic helpers.
///
/// This module provides the reduction of wide intermediate results into the
/// signed 32-bit range, plus floor-semantics division and modulo. Every
/// arithmetic step of the evaluator that can overflow 32 bits passes through
/// these helpers.
pub mod int32;
