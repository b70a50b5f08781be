//! # exprgen
//!
//! exprgen synthesizes random arithmetic/logical expressions together with
//! their expected evaluated result, for use as fixtures that validate an
//! external C-like expression evaluator. Every fixture pairs the source text
//! the evaluator-under-test parses with an order-preserving variable
//! environment and a numeric-substituted expression the harness compares
//! against.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use crate::{
    error::GenError,
    generator::{
        grammar::Grammar,
        testcase::{DEFAULT_BUDGET, TestCase, generate_cases},
    },
};

/// Defines the structure of generated expressions.
///
/// This module declares the `Expr` enum and the operator types that represent
/// expression trees. Trees are built by the generator and traversed by the
/// evaluator and renderer.
///
/// # Responsibilities
/// - Defines the closed set of expression node variants.
/// - Defines the binary and unary operator sets of the target language.
/// - Provides the display stringification consumed by the external parser.
pub mod ast;
/// Provides unified error types for evaluation and generation.
///
/// This module defines all errors that can be raised while evaluating a
/// candidate tree or assembling a suite of fixtures. Evaluation errors are
/// recoverable data conditions; generation errors are fatal.
///
/// # Responsibilities
/// - Defines error enums for the recoverable evaluation conditions.
/// - Defines the fatal conditions surfaced by the assembler.
/// - Supports integration with standard error handling traits.
pub mod error;
/// The eval module computes results and renders expression trees.
///
/// The evaluator traverses an expression tree, applies 32-bit wraparound
/// arithmetic, and produces either the numeric result or one of the
/// recoverable evaluation errors. The renderer produces the
/// numeric-substituted textual form of the same tree.
///
/// # Responsibilities
/// - Evaluates expression trees against a variable environment.
/// - Reports division by zero and out-of-range shift amounts.
/// - Renders trees with variables substituted by their bound values.
pub mod eval;
/// The generator module builds random expression trees and fixtures.
///
/// The generator constructs depth-bounded random trees from a configurable
/// grammar, synthesizes variable environments, and assembles validated
/// test-case records, discarding candidates that would fault during
/// evaluation.
///
/// # Responsibilities
/// - Builds random trees under a size budget, collecting referenced names.
/// - Assigns each discovered variable a random 32-bit value.
/// - Filters out division-by-zero and shift-range faults by regeneration.
pub mod generator;
/// General utilities for 32-bit wraparound arithmetic.
///
/// This module provides the numeric helpers used by every evaluation step:
/// reduction of wide intermediates into the signed 32-bit range and floor
/// division/modulo.
///
/// # Responsibilities
/// - Reduce 64-bit intermediates to signed 32-bit two's-complement values.
/// - Provide floor-semantics division and modulo for nonzero divisors.
pub mod util;

/// Generates a suite of expression fixtures.
///
/// This function assembles `count` validated test cases over the full grammar
/// with the default size budget, followed by one sentinel record so a consumer
/// can detect the end of the list without a separate count. Candidate cases
/// that would divide by zero or shift out of range are discarded and
/// regenerated; they never appear in the returned suite.
///
/// # Errors
/// Returns an error if too many candidate cases in a row had to be discarded.
///
/// # Examples
/// ```
/// use exprgen::generator::testcase::TestCase;
///
/// let suite = exprgen::generate_suite(4).unwrap();
///
/// assert_eq!(suite.len(), 5);
/// assert!(suite.last().is_some_and(TestCase::is_sentinel));
/// assert!(suite[..4].iter().all(|case| !case.is_sentinel()));
/// ```
pub fn generate_suite(count: usize) -> Result<Vec<TestCase>, GenError> {
    let mut rng = rand::rng();
    generate_cases(count, &Grammar::full(), DEFAULT_BUDGET, &mut rng)
}
