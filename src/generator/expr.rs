use indexmap::IndexSet;
use rand::Rng;

use crate::{
    ast::Expr,
    generator::grammar::{Grammar, NodeKind},
};

/// Characters an identifier may start with.
const IDENT_START: &[u8] = b"_abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";
/// Characters an identifier may continue with.
const IDENT_CONTINUE: &[u8] =
    b"_abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// Probability that a freshly drawn constant or binding value is exactly 0.
///
/// Zero is disproportionately likely to stress zero-related edge cases:
/// division, conditionals, truthiness.
const ZERO_BIAS: f64 = 0.1;

fn pick<T: Copy>(choices: &[T], rng: &mut impl Rng) -> T {
    choices[rng.random_range(0..choices.len())]
}

/// Builds the node-kind table for the current budget stage. The staged
/// restriction is the termination guarantee: composite kinds disappear as
/// the budget runs out. Kinds whose operator table is empty are never
/// offered, so a reduced grammar can disable them outright.
fn node_kinds(grammar: &Grammar, budget: u32) -> Vec<NodeKind> {
    let mut kinds = Vec::with_capacity(6);
    if budget > 0 {
        if !grammar.binary_operators.is_empty() {
            kinds.push(NodeKind::Binary);
        }
        if !grammar.unary_operators.is_empty() {
            kinds.push(NodeKind::Unary);
        }
        if budget > 2 && grammar.conditionals {
            kinds.push(NodeKind::Conditional);
        }
        kinds.push(NodeKind::Paren);
    }
    kinds.push(NodeKind::Variable);
    kinds.push(NodeKind::Const);
    kinds
}

/// Draws a random 32-bit value with a bias toward zero.
///
/// Yields 0 with probability [`ZERO_BIAS`], otherwise a value uniform over
/// the full signed 32-bit range. Used for constant leaves and for the values
/// the environment synthesizer assigns.
pub fn random_value(rng: &mut impl Rng) -> i32 {
    if rng.random::<f64>() < ZERO_BIAS {
        return 0;
    }
    rng.random()
}

/// Draws a random identifier.
///
/// The first character comes from the letter/underscore class, followed by
/// zero to eight characters from the alphanumeric/underscore class. Two
/// independently drawn identifiers may coincide; callers must treat equal
/// names as the same logical variable.
///
/// ## Example
/// ```
/// use rand::SeedableRng;
///
/// use exprgen::generator::expr::random_identifier;
///
/// let mut rng = rand::rngs::StdRng::seed_from_u64(7);
/// let name = random_identifier(&mut rng);
///
/// assert!(!name.is_empty());
/// assert!(name.len() <= 9);
/// ```
pub fn random_identifier(rng: &mut impl Rng) -> String {
    let mut name = String::new();
    name.push(char::from(pick(IDENT_START, rng)));
    for _ in 0..rng.random_range(0..=8) {
        name.push(char::from(pick(IDENT_CONTINUE, rng)));
    }
    name
}

/// Builds a random expression tree under a size budget.
///
/// One budget unit is consumed per recursive call. While the remaining
/// budget is above 2, all node kinds enabled by the grammar are drawn
/// uniformly; at budget 1 or 2 the conditional is excluded so the tree
/// cannot nest ternaries right before the floor; at budget 0 only leaves
/// are drawn. Without this staged restriction, unrestricted branching could
/// blow the depth bound.
///
/// Every generated `Variable` leaf inserts its name into `variables`, an
/// order-preserving set recording first-discovery order. The order matters:
/// the environment synthesizer follows it, which keeps fixture output
/// deterministic.
///
/// # Parameters
/// - `grammar`: The node-kind and operator tables to draw from.
/// - `budget`: Remaining size budget.
/// - `variables`: Sink collecting referenced variable names in
///   first-discovery order.
/// - `rng`: Randomness source.
///
/// # Returns
/// The root of the generated tree.
pub fn random_expr(grammar: &Grammar,
                   budget: u32,
                   variables: &mut IndexSet<String>,
                   rng: &mut impl Rng)
                   -> Expr {
    match pick(&node_kinds(grammar, budget), rng) {
        NodeKind::Binary => {
            let op = pick(&grammar.binary_operators, rng);
            let left = random_expr(grammar, budget - 1, variables, rng);
            let right = random_expr(grammar, budget - 1, variables, rng);
            Expr::binary(left, op, right)
        },
        NodeKind::Unary => {
            let op = pick(&grammar.unary_operators, rng);
            Expr::unary(op, random_expr(grammar, budget - 1, variables, rng))
        },
        NodeKind::Conditional => {
            let condition = random_expr(grammar, budget - 1, variables, rng);
            let then_branch = random_expr(grammar, budget - 1, variables, rng);
            let else_branch = random_expr(grammar, budget - 1, variables, rng);
            Expr::conditional(condition, then_branch, else_branch)
        },
        NodeKind::Paren => Expr::paren(random_expr(grammar, budget - 1, variables, rng)),
        NodeKind::Variable => {
            let name = random_identifier(rng);
            variables.insert(name.clone());
            Expr::variable(name)
        },
        NodeKind::Const => Expr::constant(random_value(rng)),
    }
}
