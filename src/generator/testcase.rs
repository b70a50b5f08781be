use indexmap::IndexSet;
use rand::Rng;
use serde::Serialize;

use crate::{
    error::{EvalError, GenError},
    eval::core::Environment,
    generator::{environment::synthesize_environment, expr::random_expr, grammar::Grammar},
};

/// Default size budget for generated trees.
pub const DEFAULT_BUDGET: u32 = 18;

/// Maximum consecutive discarded candidates before generation aborts.
///
/// In practice the rejection rate is bounded by the shrinking probability of
/// zero divisors and out-of-range shift amounts, so this ceiling is never
/// reached by a sane grammar; hitting it is reported as a fatal error rather
/// than looping forever.
pub const MAX_DISCARDS: usize = 10_000;

/// One validated expression fixture.
///
/// A record pairs the source text the evaluator-under-test parses with the
/// variable bindings to install beforehand and the expected result. The
/// expected result is itself a valid numeric expression over the same
/// grammar (e.g. `3 + -5`), not a single literal: the consuming harness
/// evaluates it natively and compares against the parser's output.
///
/// Records are constructed once by the assembler from a validated
/// tree/environment pair and are immutable afterwards; serialization for
/// embedding is left to the consumer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TestCase {
    /// The source expression, with variable names.
    pub expr:    String,
    /// The variable bindings, in first-discovery order.
    pub environ: Environment,
    /// The expected result as a numeric expression.
    pub result:  String,
}

impl TestCase {
    /// The terminating record closing a suite.
    ///
    /// All fields represent "no more data", so a consumer can detect the end
    /// of an embedded list without a separate count.
    #[must_use]
    pub fn sentinel() -> Self {
        Self { expr:    String::new(),
               environ: Environment::new(),
               result:  String::new(), }
    }

    /// Returns `true` if this is the terminating record.
    #[must_use]
    pub fn is_sentinel(&self) -> bool {
        self.expr.is_empty() && self.environ.is_empty() && self.result.is_empty()
    }
}

/// Generates one validated test case.
///
/// Loops: generate a tree over the size budget, synthesize an environment
/// for the names it references, and attempt evaluation. A candidate that
/// divides by zero or shifts out of range is discarded *wholly* — tree and
/// environment both — and regenerated from scratch, preserving uniform
/// randomness; patching only the failing subtree would bias the output. A
/// surviving candidate is rendered into its source and numeric forms and
/// packaged.
///
/// # Errors
/// Returns `GenError::RetriesExhausted` after [`MAX_DISCARDS`] consecutive
/// discards.
///
/// # Example
/// ```
/// use rand::SeedableRng;
///
/// use exprgen::generator::{grammar::Grammar, testcase::generate_case};
///
/// let mut rng = rand::rngs::StdRng::seed_from_u64(7);
/// let case = generate_case(&Grammar::full(), 18, &mut rng).unwrap();
///
/// assert!(!case.is_sentinel());
/// assert!(!case.expr.is_empty());
/// ```
pub fn generate_case(grammar: &Grammar,
                     budget: u32,
                     rng: &mut impl Rng)
                     -> Result<TestCase, GenError> {
    for _ in 0..MAX_DISCARDS {
        let mut variables = IndexSet::new();
        let tree = random_expr(grammar, budget, &mut variables, rng);
        let environ = synthesize_environment(&variables, rng);

        match tree.evaluate(&environ) {
            Ok(_) => {
                let result = tree.render(&environ);
                return Ok(TestCase { expr: tree.to_string(),
                                     environ,
                                     result });
            },
            Err(EvalError::DivisionByZero | EvalError::ShiftOutOfRange { .. }) => {},
        }
    }

    Err(GenError::RetriesExhausted { attempts: MAX_DISCARDS })
}

/// Generates a suite of `count` validated cases plus one sentinel.
///
/// Each case starts from a fresh empty variable sink and environment;
/// nothing is shared between generations.
///
/// # Errors
/// Returns `GenError::RetriesExhausted` if any single case exhausts its
/// retry budget.
pub fn generate_cases(count: usize,
                      grammar: &Grammar,
                      budget: u32,
                      rng: &mut impl Rng)
                      -> Result<Vec<TestCase>, GenError> {
    let mut cases = Vec::with_capacity(count + 1);
    for _ in 0..count {
        cases.push(generate_case(grammar, budget, rng)?);
    }
    cases.push(TestCase::sentinel());
    Ok(cases)
}
