use crate::{ast::Expr, eval::core::Environment};

impl Expr {
    /// Renders the tree into the canonical target-language text with every
    /// variable substituted by its bound value.
    ///
    /// The rendered text is a fully constant-folded numeric expression
    /// mirroring what the evaluator-under-test is expected to compute: a
    /// `Variable` renders as the literal value bound in the environment (or
    /// `0` when unbound), never as its name. Binary operators and the
    /// conditional's `?`/`:` are separated by single spaces, unary operators
    /// prefix their operand directly, and parenthesized nodes wrap their
    /// inner render in literal parentheses.
    ///
    /// The source form with variable *names* — the text the external parser
    /// consumes — comes from the `Display` impl instead.
    ///
    /// # Example
    /// ```
    /// use exprgen::{ast::Expr, eval::core::Environment};
    ///
    /// let environment = Environment::from_iter([("x", 7)]);
    /// let expr = Expr::variable("x");
    ///
    /// assert_eq!(expr.to_string(), "x");
    /// assert_eq!(expr.render(&environment), "7");
    /// ```
    #[must_use]
    pub fn render(&self, environment: &Environment) -> String {
        match self {
            Self::Const { value } => value.to_string(),
            Self::Variable { name } => environment.lookup(name).to_string(),
            Self::Unary { op, expr } => format!("{op}{}", expr.render(environment)),
            Self::Binary { left, op, right } => format!("{} {op} {}",
                                                        left.render(environment),
                                                        right.render(environment)),
            Self::Conditional { condition,
                                then_branch,
                                else_branch, } => format!("{} ? {} : {}",
                                                          condition.render(environment),
                                                          then_branch.render(environment),
                                                          else_branch.render(environment)),
            Self::Paren { expr } => format!("({})", expr.render(environment)),
        }
    }
}
