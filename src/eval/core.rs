use indexmap::IndexMap;
use serde::Serialize;

use crate::{
    ast::Expr,
    error::EvalError,
    eval::{binary::eval_binary, unary::eval_unary},
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or an
/// `EvalError` describing the recoverable condition that was hit.
pub type EvalResult<T> = Result<T, EvalError>;

/// Stores the variable bindings a tree is evaluated and rendered against.
///
/// The environment maps variable names to 32-bit signed values and preserves
/// insertion order, which is the order variable names were first discovered
/// during generation. Order preservation is what makes the emitted binding
/// list deterministic; an unordered map would silently break it.
///
/// Looking up an unbound name yields 0, never an error. This is a deliberate
/// policy of the target evaluator, replicated here for both evaluation and
/// rendering.
///
/// ## Example
/// ```
/// use exprgen::eval::core::Environment;
///
/// let mut environment = Environment::new();
/// environment.bind("x", 7);
///
/// assert_eq!(environment.lookup("x"), 7);
/// assert_eq!(environment.lookup("unbound"), 0);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Environment {
    bindings: IndexMap<String, i32>,
}

impl Environment {
    /// Creates an empty environment.
    #[must_use]
    pub fn new() -> Self {
        Self { bindings: IndexMap::new() }
    }

    /// Binds a name to a value, replacing any previous binding.
    ///
    /// A name keeps its original insertion position when rebound.
    pub fn bind(&mut self, name: impl Into<String>, value: i32) {
        self.bindings.insert(name.into(), value);
    }

    /// Looks up the value bound to `name`, or 0 if the name is unbound.
    #[must_use]
    pub fn lookup(&self, name: &str) -> i32 {
        self.bindings.get(name).copied().unwrap_or(0)
    }

    /// Returns the number of bindings.
    #[must_use]
    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    /// Returns `true` if the environment holds no bindings.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    /// Iterates over the bindings in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, i32)> {
        self.bindings.iter().map(|(name, value)| (name.as_str(), *value))
    }
}

impl<S: Into<String>> FromIterator<(S, i32)> for Environment {
    fn from_iter<I: IntoIterator<Item = (S, i32)>>(iter: I) -> Self {
        let mut environment = Self::new();
        for (name, value) in iter {
            environment.bind(name, value);
        }
        environment
    }
}

impl Expr {
    /// Evaluates the tree against an environment.
    ///
    /// Children are evaluated recursively, the operator is applied, and every
    /// result that can overflow 32 bits is wrapped into the signed 32-bit
    /// range. Logical operators evaluate both operands unconditionally and
    /// yield 0/1; comparisons yield 0/1. A conditional evaluates its
    /// condition and *both* branches, then returns the branch selected by the
    /// condition's truthiness (nonzero selects the then-branch).
    ///
    /// # Errors
    /// Returns `EvalError::DivisionByZero` when the right operand of `/` or
    /// `%` evaluates to zero, and `EvalError::ShiftOutOfRange` when a shift
    /// amount evaluates outside `[0, 32]`. Both are recoverable conditions
    /// the assembler handles by regenerating the candidate case; a tree that
    /// has passed the assembler's filter never returns either.
    ///
    /// # Example
    /// ```
    /// use exprgen::{
    ///     ast::{BinaryOperator, Expr, UnaryOperator},
    ///     eval::core::Environment,
    /// };
    ///
    /// let expr = Expr::binary(Expr::constant(3),
    ///                         BinaryOperator::Add,
    ///                         Expr::unary(UnaryOperator::Negate, Expr::constant(5)));
    ///
    /// assert_eq!(expr.evaluate(&Environment::new()), Ok(-2));
    /// ```
    pub fn evaluate(&self, environment: &Environment) -> EvalResult<i32> {
        match self {
            Self::Const { value } => Ok(*value),
            Self::Variable { name } => Ok(environment.lookup(name)),
            Self::Unary { op, expr } => Ok(eval_unary(*op, expr.evaluate(environment)?)),
            Self::Binary { left, op, right } => {
                let lhs = left.evaluate(environment)?;
                let rhs = right.evaluate(environment)?;
                eval_binary(*op, lhs, rhs)
            },
            Self::Conditional { condition,
                                then_branch,
                                else_branch, } => {
                // Both branches are always evaluated, whatever the condition.
                let condition = condition.evaluate(environment)?;
                let then_value = then_branch.evaluate(environment)?;
                let else_value = else_branch.evaluate(environment)?;
                Ok(if condition == 0 { else_value } else { then_value })
            },
            Self::Paren { expr } => expr.evaluate(environment),
        }
    }
}
