use exprgen::{
    ast::{BinaryOperator, Expr, UnaryOperator},
    eval::{binary::eval_binary, core::Environment},
    generator::{
        environment::synthesize_environment,
        expr::{random_expr, random_value},
        grammar::Grammar,
        testcase::{DEFAULT_BUDGET, TestCase, generate_case, generate_cases},
    },
    util::int32::wrap,
};
use indexmap::IndexSet;
use rand::{SeedableRng, rngs::StdRng};

fn rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

fn div_by_zero() -> Expr {
    Expr::binary(Expr::constant(1), BinaryOperator::Div, Expr::constant(0))
}

/// Collects variable names in left-to-right, depth-first first-seen order.
fn collect_variables(expr: &Expr, seen: &mut Vec<String>) {
    match expr {
        Expr::Const { .. } => {},
        Expr::Variable { name } => {
            if !seen.contains(name) {
                seen.push(name.clone());
            }
        },
        Expr::Unary { expr, .. } | Expr::Paren { expr } => collect_variables(expr, seen),
        Expr::Binary { left, right, .. } => {
            collect_variables(left, seen);
            collect_variables(right, seen);
        },
        Expr::Conditional { condition,
                            then_branch,
                            else_branch, } => {
            collect_variables(condition, seen);
            collect_variables(then_branch, seen);
            collect_variables(else_branch, seen);
        },
    }
}

/// Substitutes every variable by its bound value, yielding the constant tree
/// whose display form is the numeric render.
fn fold_variables(expr: &Expr, environment: &Environment) -> Expr {
    match expr {
        Expr::Const { value } => Expr::constant(*value),
        Expr::Variable { name } => Expr::constant(environment.lookup(name)),
        Expr::Unary { op, expr } => Expr::unary(*op, fold_variables(expr, environment)),
        Expr::Binary { left, op, right } => Expr::binary(fold_variables(left, environment),
                                                         *op,
                                                         fold_variables(right, environment)),
        Expr::Conditional { condition,
                            then_branch,
                            else_branch, } => {
            Expr::conditional(fold_variables(condition, environment),
                              fold_variables(then_branch, environment),
                              fold_variables(else_branch, environment))
        },
        Expr::Paren { expr } => Expr::paren(fold_variables(expr, environment)),
    }
}

fn max_depth(expr: &Expr) -> usize {
    match expr {
        Expr::Const { .. } | Expr::Variable { .. } => 1,
        Expr::Unary { expr, .. } | Expr::Paren { expr } => 1 + max_depth(expr),
        Expr::Binary { left, right, .. } => 1 + max_depth(left).max(max_depth(right)),
        Expr::Conditional { condition,
                            then_branch,
                            else_branch, } => {
            1 + max_depth(condition).max(max_depth(then_branch))
                                    .max(max_depth(else_branch))
        },
    }
}

#[test]
fn addition_with_negated_operand() {
    let expr = Expr::binary(Expr::constant(3),
                            BinaryOperator::Add,
                            Expr::unary(UnaryOperator::Negate, Expr::constant(5)));
    let environment = Environment::new();

    assert_eq!(expr.to_string(), "3 + -5");
    assert_eq!(expr.render(&environment), "3 + -5");
    assert_eq!(expr.evaluate(&environment), Ok(-2));
}

#[test]
fn variables_render_as_their_bound_value() {
    let environment = Environment::from_iter([("x", 7)]);
    let expr = Expr::variable("x");

    assert_eq!(expr.to_string(), "x");
    assert_eq!(expr.render(&environment), "7");
    assert_eq!(expr.evaluate(&environment), Ok(7));
}

#[test]
fn unbound_variables_default_to_zero() {
    let environment = Environment::new();
    let expr = Expr::variable("missing");

    assert_eq!(expr.evaluate(&environment), Ok(0));
    assert_eq!(expr.render(&environment), "0");
}

#[test]
fn wrap_boundaries_and_idempotence() {
    assert_eq!(wrap(1 << 31), i32::MIN);
    assert_eq!(wrap(i64::from(i32::MIN) - 1), i32::MAX);
    assert_eq!(wrap(0), 0);
    assert_eq!(wrap(i64::from(i32::MAX)), i32::MAX);

    for value in [0_i64, 1, -1, 1 << 31, -(1 << 31) - 1, i64::MAX, i64::MIN, 0x1_2345_6789] {
        let wrapped = wrap(value);
        assert!((i64::from(i32::MIN)..=i64::from(i32::MAX)).contains(&i64::from(wrapped)));
        assert_eq!(wrap(i64::from(wrapped)), wrapped, "wrap is not idempotent for {value}");
    }
}

#[test]
fn division_truncates_toward_negative_infinity() {
    assert_eq!(eval_binary(BinaryOperator::Div, 7, 2), Ok(3));
    assert_eq!(eval_binary(BinaryOperator::Div, -7, 2), Ok(-4));
    assert_eq!(eval_binary(BinaryOperator::Div, 7, -2), Ok(-4));
    assert_eq!(eval_binary(BinaryOperator::Div, -7, -2), Ok(3));

    assert_eq!(eval_binary(BinaryOperator::Mod, 7, 2), Ok(1));
    assert_eq!(eval_binary(BinaryOperator::Mod, -7, 2), Ok(1));
    assert_eq!(eval_binary(BinaryOperator::Mod, 7, -2), Ok(-1));
    assert_eq!(eval_binary(BinaryOperator::Mod, -7, -2), Ok(-1));
}

#[test]
fn division_overflow_wraps() {
    assert_eq!(eval_binary(BinaryOperator::Div, i32::MIN, -1), Ok(i32::MIN));
    assert_eq!(eval_binary(BinaryOperator::Mul, i32::MIN, -1), Ok(i32::MIN));
    assert_eq!(eval_binary(BinaryOperator::Add, i32::MAX, 1), Ok(i32::MIN));
    assert_eq!(eval_binary(BinaryOperator::Sub, i32::MIN, 1), Ok(i32::MAX));
}

#[test]
fn division_and_modulo_by_zero_are_recoverable_errors() {
    assert!(eval_binary(BinaryOperator::Div, 1, 0).is_err());
    assert!(eval_binary(BinaryOperator::Mod, -5, 0).is_err());
}

#[test]
fn shift_amounts_are_range_checked() {
    assert!(eval_binary(BinaryOperator::ShiftLeft, 1, 33).is_err());
    assert!(eval_binary(BinaryOperator::ShiftLeft, 1, -1).is_err());
    assert!(eval_binary(BinaryOperator::ShiftRight, 1, i32::MIN).is_err());

    assert_eq!(eval_binary(BinaryOperator::ShiftLeft, 1, 4), Ok(16));
    assert_eq!(eval_binary(BinaryOperator::ShiftLeft, 1, 32), Ok(0));
    assert_eq!(eval_binary(BinaryOperator::ShiftRight, -8, 2), Ok(-2));
    assert_eq!(eval_binary(BinaryOperator::ShiftRight, -1, 32), Ok(-1));
    assert_eq!(eval_binary(BinaryOperator::ShiftRight, i32::MAX, 32), Ok(0));
}

#[test]
fn comparison_and_logical_results_are_boolean() {
    let operators = [BinaryOperator::And,
                     BinaryOperator::Or,
                     BinaryOperator::Less,
                     BinaryOperator::Greater,
                     BinaryOperator::LessEqual,
                     BinaryOperator::GreaterEqual,
                     BinaryOperator::Equal,
                     BinaryOperator::NotEqual];
    let samples = [i32::MIN, -7, -1, 0, 1, 7, i32::MAX];

    for op in operators {
        for lhs in samples {
            for rhs in samples {
                let result = eval_binary(op, lhs, rhs).unwrap();
                assert!(result == 0 || result == 1,
                        "{lhs} {op} {rhs} produced non-boolean {result}");
            }
        }
    }
}

#[test]
fn logical_operators_do_not_short_circuit() {
    // The target evaluator computes both operands, so a faulting right
    // operand is an error even when the left operand already decides the
    // outcome.
    let and = Expr::binary(Expr::constant(0), BinaryOperator::And, div_by_zero());
    let or = Expr::binary(Expr::constant(1), BinaryOperator::Or, div_by_zero());

    assert!(and.evaluate(&Environment::new()).is_err());
    assert!(or.evaluate(&Environment::new()).is_err());
}

#[test]
fn conditionals_evaluate_both_branches() {
    let expr = Expr::conditional(Expr::constant(1), Expr::constant(2), div_by_zero());
    assert!(expr.evaluate(&Environment::new()).is_err());

    let expr = Expr::conditional(Expr::constant(0), Expr::constant(2), Expr::constant(3));
    assert_eq!(expr.evaluate(&Environment::new()), Ok(3));
    assert_eq!(expr.to_string(), "0 ? 2 : 3");
}

#[test]
fn parentheses_are_semantically_transparent() {
    let expr = Expr::paren(Expr::binary(Expr::constant(2),
                                        BinaryOperator::Mul,
                                        Expr::constant(3)));
    let environment = Environment::new();

    assert_eq!(expr.evaluate(&environment), Ok(6));
    assert_eq!(expr.to_string(), "(2 * 3)");
    assert_eq!(expr.render(&environment), "(2 * 3)");
}

#[test]
fn repeated_names_share_one_binding() {
    let expr = Expr::binary(Expr::variable("b"),
                            BinaryOperator::Add,
                            Expr::binary(Expr::variable("a"),
                                         BinaryOperator::Add,
                                         Expr::variable("b")));

    let mut seen = Vec::new();
    collect_variables(&expr, &mut seen);
    assert_eq!(seen, ["b", "a"]);

    let environment = Environment::from_iter([("b", 10), ("a", 1)]);
    assert_eq!(expr.evaluate(&environment), Ok(21));
    assert_eq!(expr.render(&environment), "10 + 1 + 10");
}

#[test]
fn environment_order_matches_first_discovery_order() {
    let mut rng = rng(0x5eed);
    let grammar = Grammar::full();

    for _ in 0..200 {
        let mut variables = IndexSet::new();
        let tree = random_expr(&grammar, DEFAULT_BUDGET, &mut variables, &mut rng);

        let mut seen = Vec::new();
        collect_variables(&tree, &mut seen);

        let sink_order: Vec<&str> = variables.iter().map(String::as_str).collect();
        assert_eq!(sink_order, seen, "sink order diverged from traversal order");
    }
}

#[test]
fn generated_trees_respect_the_size_budget() {
    let mut rng = rng(42);
    let grammar = Grammar::full();

    for _ in 0..200 {
        let mut variables = IndexSet::new();
        let tree = random_expr(&grammar, DEFAULT_BUDGET, &mut variables, &mut rng);
        let depth = max_depth(&tree);
        assert!(depth <= DEFAULT_BUDGET as usize + 1,
                "tree of depth {depth} exceeds the budget");
    }
}

#[test]
fn basic_grammar_stays_within_its_operator_set() {
    fn check(expr: &Expr) {
        match expr {
            Expr::Const { .. } | Expr::Variable { .. } => {},
            Expr::Unary { op, expr } => {
                assert!(matches!(op, UnaryOperator::Plus | UnaryOperator::Negate));
                check(expr);
            },
            Expr::Binary { left, op, right } => {
                assert!(matches!(op,
                                 BinaryOperator::Add
                                 | BinaryOperator::Sub
                                 | BinaryOperator::Mul
                                 | BinaryOperator::Div));
                check(left);
                check(right);
            },
            Expr::Conditional { .. } => panic!("basic grammar generated a conditional"),
            Expr::Paren { expr } => check(expr),
        }
    }

    let mut rng = rng(7);
    let grammar = Grammar::basic();

    for _ in 0..200 {
        let mut variables = IndexSet::new();
        check(&random_expr(&grammar, DEFAULT_BUDGET, &mut variables, &mut rng));
    }
}

#[test]
fn rendered_text_reevaluates_to_the_same_result() {
    let mut rng = rng(0xbeef);
    let grammar = Grammar::full();
    let mut checked = 0;

    for _ in 0..500 {
        let mut variables = IndexSet::new();
        let tree = random_expr(&grammar, DEFAULT_BUDGET, &mut variables, &mut rng);
        let environment = synthesize_environment(&variables, &mut rng);

        // Invalid candidates are the assembler's concern; here only
        // survivors need to be self-consistent.
        let Ok(expected) = tree.evaluate(&environment) else {
            continue;
        };

        let folded = fold_variables(&tree, &environment);
        assert_eq!(folded.to_string(),
                   tree.render(&environment),
                   "numeric render diverged from the value-substituted tree");
        assert_eq!(folded.evaluate(&environment), Ok(expected));
        checked += 1;
    }

    assert!(checked > 100, "too few valid candidates to be meaningful");
}

#[test]
fn empty_operator_tables_disable_those_nodes() {
    fn check(expr: &Expr) {
        match expr {
            Expr::Const { .. } | Expr::Variable { .. } => {},
            Expr::Paren { expr } => check(expr),
            Expr::Unary { .. } => panic!("generated a unary node without unary operators"),
            Expr::Binary { .. } => panic!("generated a binary node without binary operators"),
            Expr::Conditional { .. } => panic!("generated a conditional without conditionals"),
        }
    }

    let mut rng = rng(3);
    let grammar = Grammar { binary_operators: Vec::new(),
                            unary_operators:  Vec::new(),
                            conditionals:     false, };

    for _ in 0..200 {
        let mut variables = IndexSet::new();
        check(&random_expr(&grammar, DEFAULT_BUDGET, &mut variables, &mut rng));
    }
}

#[test]
fn assembled_cases_are_valid_and_consistent() {
    let mut rng = rng(0xca5e);
    let grammar = Grammar::full();

    for _ in 0..200 {
        let case = generate_case(&grammar, DEFAULT_BUDGET, &mut rng).unwrap();
        assert!(!case.is_sentinel());
        assert!(!case.expr.is_empty());
        assert!(!case.result.is_empty());
    }
}

#[test]
fn suites_end_with_exactly_one_sentinel() {
    let mut rng = rng(1);
    let suite = generate_cases(1024, &Grammar::full(), DEFAULT_BUDGET, &mut rng).unwrap();

    assert_eq!(suite.len(), 1025);
    assert!(suite.last().is_some_and(TestCase::is_sentinel));
    assert_eq!(suite.iter().filter(|case| case.is_sentinel()).count(), 1);
}

#[test]
fn constants_are_biased_toward_zero() {
    let mut rng = rng(99);
    let zeros = (0..10_000).filter(|_| random_value(&mut rng) == 0).count();

    // 1-in-10 bias plus the sliver of genuinely random zeros.
    assert!((800..=1200).contains(&zeros), "unexpected zero count {zeros}");
}

#[test]
fn records_serialize_with_ordered_bindings() {
    let environment = Environment::from_iter([("zz", 3), ("aa", -1)]);
    let case = TestCase { expr:    "zz + aa".to_string(),
                          environ: environment,
                          result:  "3 + -1".to_string(), };

    let json = serde_json::to_string(&case).unwrap();
    assert_eq!(json, r#"{"expr":"zz + aa","environ":{"zz":3,"aa":-1},"result":"3 + -1"}"#);
}
