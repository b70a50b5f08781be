/// An abstract syntax tree (AST) node representing a generated expression.
///
/// `Expr` covers all node variants the generator can produce: integer
/// constants, variable references, unary and binary operations, the ternary
/// conditional, and an explicit parenthesized wrapper. Each node exclusively
/// owns its children, so a tree is owned top-down from its root.
///
/// Two structural traversals exist over this closed set: evaluation against
/// an environment (`Expr::evaluate`) and numeric-substituted rendering
/// (`Expr::render`). The `Display` impl produces the source form with
/// variable *names*, which is the text the evaluator-under-test parses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expr {
    /// A 32-bit signed integer constant.
    Const {
        /// The constant value.
        value: i32,
    },
    /// Reference to an environment variable by name.
    Variable {
        /// Name of the variable.
        name: String,
    },
    /// A unary operation (e.g. negation).
    Unary {
        /// The unary operator to apply.
        op:   UnaryOperator,
        /// The operand expression.
        expr: Box<Self>,
    },
    /// A binary operation (addition, comparison, shift, etc.).
    Binary {
        /// Left operand.
        left:  Box<Self>,
        /// The operator.
        op:    BinaryOperator,
        /// Right operand.
        right: Box<Self>,
    },
    /// Ternary conditional expression (`condition ? then : else`).
    Conditional {
        /// The condition expression.
        condition:   Box<Self>,
        /// Expression selected if the condition is nonzero.
        then_branch: Box<Self>,
        /// Expression selected if the condition is zero.
        else_branch: Box<Self>,
    },
    /// An explicitly parenthesized expression.
    ///
    /// Semantically transparent: it only affects the textual forms.
    Paren {
        /// The wrapped expression.
        expr: Box<Self>,
    },
}

impl Expr {
    /// Creates a constant node.
    #[must_use]
    pub const fn constant(value: i32) -> Self {
        Self::Const { value }
    }

    /// Creates a variable reference node.
    #[must_use]
    pub fn variable(name: impl Into<String>) -> Self {
        Self::Variable { name: name.into() }
    }

    /// Creates a unary operation node.
    #[must_use]
    pub fn unary(op: UnaryOperator, expr: Self) -> Self {
        Self::Unary { op,
                      expr: Box::new(expr), }
    }

    /// Creates a binary operation node.
    ///
    /// ## Example
    /// ```
    /// use exprgen::ast::{BinaryOperator, Expr, UnaryOperator};
    ///
    /// let expr = Expr::binary(Expr::constant(3),
    ///                         BinaryOperator::Add,
    ///                         Expr::unary(UnaryOperator::Negate, Expr::constant(5)));
    ///
    /// assert_eq!(expr.to_string(), "3 + -5");
    /// ```
    #[must_use]
    pub fn binary(left: Self, op: BinaryOperator, right: Self) -> Self {
        Self::Binary { left: Box::new(left),
                       op,
                       right: Box::new(right), }
    }

    /// Creates a ternary conditional node.
    #[must_use]
    pub fn conditional(condition: Self, then_branch: Self, else_branch: Self) -> Self {
        Self::Conditional { condition:   Box::new(condition),
                            then_branch: Box::new(then_branch),
                            else_branch: Box::new(else_branch), }
    }

    /// Creates a parenthesized node.
    #[must_use]
    pub fn paren(expr: Self) -> Self {
        Self::Paren { expr: Box::new(expr) }
    }
}

impl std::fmt::Display for Expr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Const { value } => write!(f, "{value}"),
            Self::Variable { name } => write!(f, "{name}"),
            Self::Unary { op, expr } => write!(f, "{op}{expr}"),
            Self::Binary { left, op, right } => write!(f, "{left} {op} {right}"),
            Self::Conditional { condition,
                                then_branch,
                                else_branch, } => {
                write!(f, "{condition} ? {then_branch} : {else_branch}")
            },
            Self::Paren { expr } => write!(f, "({expr})"),
        }
    }
}

/// Represents a binary operator of the target language.
///
/// Binary operators include arithmetic, bitwise, shift, comparison and
/// logical operations. Logical operators do not short-circuit; both operands
/// are always evaluated.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BinaryOperator {
    /// Addition (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication (`*`)
    Mul,
    /// Division (`/`), floor semantics
    Div,
    /// Modulo (`%`), floor semantics
    Mod,
    /// Bitwise and (`&`)
    BitAnd,
    /// Bitwise or (`|`)
    BitOr,
    /// Bitwise exclusive or (`^`)
    BitXor,
    /// Logical and (`&&`), non-short-circuiting
    And,
    /// Logical or (`||`), non-short-circuiting
    Or,
    /// Less than (`<`)
    Less,
    /// Greater than (`>`)
    Greater,
    /// Less than or equal (`<=`)
    LessEqual,
    /// Greater than or equal (`>=`)
    GreaterEqual,
    /// Equal to (`==`)
    Equal,
    /// Not equal to (`!=`)
    NotEqual,
    /// Left shift (`<<`)
    ShiftLeft,
    /// Arithmetic right shift (`>>`)
    ShiftRight,
}

/// Represents a unary operator of the target language.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum UnaryOperator {
    /// Unary plus (`+x`), the identity.
    Plus,
    /// Arithmetic negation (`-x`).
    Negate,
    /// Bitwise complement (`~x`).
    BitNot,
    /// Logical NOT (`!x`).
    Not,
}

impl std::fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        use BinaryOperator::{
            Add, And, BitAnd, BitOr, BitXor, Div, Equal, Greater, GreaterEqual, Less, LessEqual,
            Mod, Mul, NotEqual, Or, ShiftLeft, ShiftRight, Sub,
        };
        let operator = match self {
            Add => "+",
            Sub => "-",
            Mul => "*",
            Div => "/",
            Mod => "%",
            BitAnd => "&",
            BitOr => "|",
            BitXor => "^",
            And => "&&",
            Or => "||",
            Less => "<",
            Greater => ">",
            LessEqual => "<=",
            GreaterEqual => ">=",
            Equal => "==",
            NotEqual => "!=",
            ShiftLeft => "<<",
            ShiftRight => ">>",
        };
        write!(f, "{operator}")
    }
}

impl std::fmt::Display for UnaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let operator = match self {
            Self::Plus => "+",
            Self::Negate => "-",
            Self::BitNot => "~",
            Self::Not => "!",
        };
        write!(f, "{operator}")
    }
}
