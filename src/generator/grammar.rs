use crate::ast::{BinaryOperator, UnaryOperator};

/// The node kinds the generator chooses between.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum NodeKind {
    /// A binary operation with two subtrees.
    Binary,
    /// A unary operation with one subtree.
    Unary,
    /// A ternary conditional with three subtrees.
    Conditional,
    /// A parenthesized subtree.
    Paren,
    /// A variable leaf.
    Variable,
    /// A constant leaf.
    Const,
}

/// The full binary operator set of the target language.
pub const FULL_BINARY_OPERATORS: &[BinaryOperator] = &[BinaryOperator::Add,
                                                       BinaryOperator::Sub,
                                                       BinaryOperator::Mul,
                                                       BinaryOperator::Div,
                                                       BinaryOperator::Mod,
                                                       BinaryOperator::BitAnd,
                                                       BinaryOperator::BitOr,
                                                       BinaryOperator::BitXor,
                                                       BinaryOperator::And,
                                                       BinaryOperator::Or,
                                                       BinaryOperator::Less,
                                                       BinaryOperator::Greater,
                                                       BinaryOperator::LessEqual,
                                                       BinaryOperator::GreaterEqual,
                                                       BinaryOperator::Equal,
                                                       BinaryOperator::NotEqual,
                                                       BinaryOperator::ShiftLeft,
                                                       BinaryOperator::ShiftRight];

/// The full unary operator set of the target language.
pub const FULL_UNARY_OPERATORS: &[UnaryOperator] = &[UnaryOperator::Plus,
                                                     UnaryOperator::Negate,
                                                     UnaryOperator::BitNot,
                                                     UnaryOperator::Not];

/// The reduced arithmetic-only binary operator set.
pub const BASIC_BINARY_OPERATORS: &[BinaryOperator] = &[BinaryOperator::Add,
                                                        BinaryOperator::Sub,
                                                        BinaryOperator::Mul,
                                                        BinaryOperator::Div];

/// The reduced unary operator set.
pub const BASIC_UNARY_OPERATORS: &[UnaryOperator] = &[UnaryOperator::Plus, UnaryOperator::Negate];

/// Configures the expression forms the generator may produce.
///
/// The grammar is data, not code: the operator tables and the conditional
/// switch select what the single generator procedure can build, so a reduced
/// operator set and the full one share one code path instead of being
/// maintained as near-identical copies.
///
/// An empty operator table disables its node kind entirely: the generator
/// never offers binary (or unary) nodes when there is no operator to put in
/// them.
///
/// ## Example
/// ```
/// use exprgen::generator::grammar::Grammar;
///
/// let full = Grammar::full();
/// let basic = Grammar::basic();
///
/// assert!(full.conditionals);
/// assert!(!basic.conditionals);
/// assert!(basic.binary_operators.len() < full.binary_operators.len());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grammar {
    /// Binary operators the generator may pick, uniformly.
    pub binary_operators: Vec<BinaryOperator>,
    /// Unary operators the generator may pick, uniformly.
    pub unary_operators:  Vec<UnaryOperator>,
    /// Whether ternary conditional nodes may be generated.
    pub conditionals:     bool,
}

impl Grammar {
    /// The complete grammar: every operator, conditionals included.
    #[must_use]
    pub fn full() -> Self {
        Self { binary_operators: FULL_BINARY_OPERATORS.to_vec(),
               unary_operators:  FULL_UNARY_OPERATORS.to_vec(),
               conditionals:     true, }
    }

    /// The reduced grammar: `+ - * /`, unary `+ -`, no conditionals.
    #[must_use]
    pub fn basic() -> Self {
        Self { binary_operators: BASIC_BINARY_OPERATORS.to_vec(),
               unary_operators:  BASIC_UNARY_OPERATORS.to_vec(),
               conditionals:     false, }
    }
}

impl Default for Grammar {
    fn default() -> Self {
        Self::full()
    }
}
