/// Grammar configuration.
///
/// Represents the operator and node-kind sets as data tables on a single
/// configuration struct, so reduced and extended operator sets drive the same
/// generator code instead of parallel code paths.
pub mod grammar;

/// Random expression tree construction.
///
/// Builds depth-bounded random trees from a grammar, drawing identifiers,
/// zero-biased constants and node kinds, and collecting the set of free
/// variable names the tree references.
pub mod expr;

/// Environment synthesis.
///
/// Assigns each collected variable name a random 32-bit value, preserving
/// first-discovery order.
pub mod environment;

/// Test case assembly.
///
/// Drives generation, rejects candidates that would fault during evaluation,
/// and packages validated cases into serializable records terminated by a
/// sentinel.
pub mod testcase;
