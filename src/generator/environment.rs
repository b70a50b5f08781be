use indexmap::IndexSet;
use rand::Rng;

use crate::{eval::core::Environment, generator::expr::random_value};

/// Synthesizes an environment for a set of collected variable names.
///
/// Every name receives an independent random 32-bit value, drawn with the
/// same zero bias as constant leaves. The binding order follows the sink's
/// iteration order, which is first-discovery order during tree generation,
/// so the fixture's binding list is deterministic for a given tree and
/// randomness source.
///
/// ## Example
/// ```
/// use indexmap::IndexSet;
/// use rand::SeedableRng;
///
/// use exprgen::generator::environment::synthesize_environment;
///
/// let mut rng = rand::rngs::StdRng::seed_from_u64(7);
/// let variables: IndexSet<String> = ["b", "a"].into_iter().map(String::from).collect();
/// let environment = synthesize_environment(&variables, &mut rng);
///
/// let names: Vec<&str> = environment.iter().map(|(name, _)| name).collect();
/// assert_eq!(names, ["b", "a"]);
/// ```
#[must_use]
pub fn synthesize_environment(variables: &IndexSet<String>, rng: &mut impl Rng) -> Environment {
    let mut environment = Environment::new();
    for name in variables {
        environment.bind(name.clone(), random_value(rng));
    }
    environment
}
