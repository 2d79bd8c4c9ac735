//! Module to simplify expressions.
//!
//! [`simplify`] normalizes an expression bottom-up: the children of a node are simplified first,
//! then the rules in [`rules`] are applied at the node until none of them matches. The result is
//! a fixed point of the rule table, so simplifying twice gives the same expression as simplifying
//! once.
//!
//! The rules only recognize fixed syntactic shapes, such as a constant zero operand. They do not
//! collect terms across different subtrees. The opt-in [`RuleSet::Extended`] adds the
//! same-subtree rules `a-a = 0` and `a+a = 2*a`.

pub mod rules;
pub mod step;

use crate::step::StepCollector;
use step::Step;
use super::expr::Expr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Which rule table the simplifier applies.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum RuleSet {
    /// Constant folding and the identity rules for `0`, `1`, and negation.
    ///
    /// This is the default option.
    #[default]
    Baseline,

    /// The baseline rules, plus cancellation and combination of identical operands: `a-a = 0`
    /// and `a+a = 2*a`.
    Extended,
}

/// Base implementation of the simplification algorithm.
fn inner_simplify_with(
    expr: &Expr,
    rule_set: RuleSet,
    step_collector: &mut dyn StepCollector<Step>,
) -> Expr {
    let mut expr = match expr {
        Expr::Constant(_) | Expr::Variable(_) => expr.clone(),
        Expr::Negation(operand) => {
            -inner_simplify_with(operand, rule_set, step_collector)
        },
        Expr::Binary(op, lhs, rhs) => Expr::binary(
            *op,
            inner_simplify_with(lhs, rule_set, step_collector),
            inner_simplify_with(rhs, rule_set, step_collector),
        ),
    };

    // every rule returns either a leaf, an already simplified child, or a new node over already
    // simplified children, so only this node needs to be revisited
    while let Some(new_expr) = rules::all(&expr, rule_set, step_collector) {
        expr = new_expr;
    }

    expr
}

/// Simplify the given expression with the baseline rules.
pub fn simplify(expr: &Expr) -> Expr {
    inner_simplify_with(expr, RuleSet::Baseline, &mut ())
}

/// Simplify the given expression with the given rule table.
pub fn simplify_with(expr: &Expr, rule_set: RuleSet) -> Expr {
    inner_simplify_with(expr, rule_set, &mut ())
}

/// Simplify the given expression with the baseline rules. The steps taken by the simplifier are
/// collected and returned alongside the result, in the order they were applied.
pub fn simplify_with_steps(expr: &Expr) -> (Expr, Vec<Step>) {
    let mut steps = Vec::new();
    let expr = inner_simplify_with(expr, RuleSet::Baseline, &mut steps);
    (expr, steps)
}

#[cfg(test)]
mod tests {
    use isolate_parser::parser::{expr::Expr as AstExpr, token::op::BinOpKind, Parser};
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;
    use super::*;

    fn parse(input: &str) -> Expr {
        Parser::new(input).try_parse_full::<AstExpr>().unwrap().into()
    }

    #[test]
    fn fold_constants() {
        assert_eq!(simplify(&parse("2 * 3 + 4")), Expr::constant(10.0));
        assert_eq!(simplify(&parse("6 - 3")), Expr::constant(3.0));
        assert_eq!(simplify(&parse("3 / 60")), Expr::constant(3.0 / 60.0));
    }

    #[test]
    fn division_by_zero_propagates() {
        assert_eq!(simplify(&parse("1 / 0")), Expr::constant(f64::INFINITY));
        assert_eq!(simplify(&parse("-1 / 0")), Expr::constant(f64::NEG_INFINITY));
        assert_eq!(simplify(&parse("0 / 0 + x")), Expr::constant(f64::NAN) + Expr::variable("x"));
    }

    #[test]
    fn negation_rules() {
        assert_eq!(simplify(&parse("-3")), Expr::constant(-3.0));
        assert_eq!(simplify(&parse("--x")), Expr::variable("x"));
        assert_eq!(simplify(&parse("---x")), -Expr::variable("x"));
        assert_eq!(simplify(&parse("-(-(3))")), Expr::constant(3.0));
    }

    #[test]
    fn add_rules() {
        assert_eq!(simplify(&parse("0 + x")), Expr::variable("x"));
        assert_eq!(simplify(&parse("x + 0")), Expr::variable("x"));
        assert_eq!(simplify(&parse("x - 0")), Expr::variable("x"));
        assert_eq!(simplify(&parse("0 - x")), -Expr::variable("x"));
        assert_eq!(simplify(&parse("0 - -x")), Expr::variable("x"));
    }

    #[test]
    fn multiply_rules() {
        assert_eq!(simplify(&parse("0 * (x + y)")), Expr::constant(0.0));
        assert_eq!(simplify(&parse("(x + y) * 0")), Expr::constant(0.0));
        assert_eq!(simplify(&parse("1 * x * 1")), Expr::variable("x"));
        assert_eq!(simplify(&parse("0 / x")), Expr::constant(0.0));
        assert_eq!(simplify(&parse("x / 1")), parse("x / 1"));
    }

    #[test]
    fn nested_rules() {
        // the inner product collapses to zero, which then lets the sum collapse too
        assert_eq!(simplify(&parse("1 * (3 + 0 * (x - y)) * 1")), Expr::constant(3.0));
        assert_eq!(simplify(&parse("y - (10 - 0)")), parse("y - 10"));
    }

    #[test]
    fn no_term_collection() {
        assert_eq!(simplify(&parse("x - x")), parse("x - x"));
        assert_eq!(simplify(&parse("x + x")), parse("x + x"));
        assert_eq!(simplify(&parse("x + 1 + 1")), parse("x + 1 + 1"));
    }

    #[test]
    fn extended_rules() {
        assert_eq!(simplify_with(&parse("x - x"), RuleSet::Extended), Expr::constant(0.0));
        assert_eq!(
            simplify_with(&parse("(a * b) + (a * b)"), RuleSet::Extended),
            Expr::constant(2.0) * parse("a * b"),
        );
        assert_eq!(simplify_with(&parse("(x - x) * y + 4"), RuleSet::Extended), Expr::constant(4.0));
        assert_eq!(simplify_with(&parse("x - y"), RuleSet::Extended), parse("x - y"));
    }

    #[test]
    fn collected_steps() {
        let (expr, steps) = simplify_with_steps(&parse("0 + x * 1 - 0"));
        assert_eq!(expr, Expr::variable("x"));
        assert_eq!(steps, vec![Step::MultiplyOne, Step::AddZero, Step::SubtractZero]);

        let (_, steps) = simplify_with_steps(&parse("x + y"));
        assert!(steps.is_empty());
    }

    /// Generates arbitrary expressions over a few variables and small constants, including zero
    /// and one so that the identity rules get exercised.
    fn arb_expr() -> impl Strategy<Value = Expr> {
        let leaf = prop_oneof![
            (-3i32..=3).prop_map(|n| Expr::constant(n as f64)),
            prop::sample::select(vec!["x", "y", "z"]).prop_map(Expr::variable),
        ];
        leaf.prop_recursive(6, 48, 2, |inner| {
            prop_oneof![
                inner.clone().prop_map(|e| -e),
                (inner.clone(), inner.clone()).prop_map(|(l, r)| l + r),
                (inner.clone(), inner.clone()).prop_map(|(l, r)| l - r),
                (inner.clone(), inner.clone()).prop_map(|(l, r)| l * r),
                (inner.clone(), inner).prop_map(|(l, r)| l / r),
            ]
        })
    }

    fn arb_op() -> impl Strategy<Value = BinOpKind> {
        prop_oneof![
            Just(BinOpKind::Add),
            Just(BinOpKind::Sub),
            Just(BinOpKind::Mul),
            Just(BinOpKind::Div),
        ]
    }

    proptest! {
        #[test]
        fn idempotent(expr in arb_expr()) {
            let once = simplify(&expr);
            prop_assert_eq!(simplify(&once), once);
        }

        #[test]
        fn idempotent_extended(expr in arb_expr()) {
            let once = simplify_with(&expr, RuleSet::Extended);
            prop_assert_eq!(simplify_with(&once, RuleSet::Extended), once);
        }

        #[test]
        fn folds_finite_constants(a in -1e6f64..1e6, b in -1e6f64..1e6, op in arb_op()) {
            prop_assume!(op != BinOpKind::Div || b != 0.0);
            let expr = Expr::binary(op, Expr::constant(a), Expr::constant(b));
            prop_assert_eq!(simplify(&expr), Expr::constant(op.eval(a, b)));
        }
    }
}
