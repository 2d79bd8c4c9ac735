//! Implementation of the simplification rules.
//!
//! Each rule in this module is a function that takes the expression to simplify as an argument,
//! and returns `Some(expr)` with the rewritten expression if the rule applies at the root of
//! `expr`, or `None` if it does not. Rules never look below the children of the root; the driver
//! in [`super`] has already simplified those.

pub mod add;
pub mod constant;
pub mod multiply;
pub mod negate;

use crate::{algebra::pattern::do_constant, step::StepCollector};
use super::{Expr, RuleSet, step::Step};

/// Returns true if the expression is the constant `value`.
pub(crate) fn is_constant_value(expr: &Expr, value: f64) -> bool {
    do_constant(expr, |c| (c == value).then_some(())).is_some()
}

/// Applies the first matching rule of the given rule table.
///
/// Constant folding is tried first, so identity rules such as `0*a = 0` never hide the IEEE-754
/// result of an operation on two constants.
pub fn all(
    expr: &Expr,
    rule_set: RuleSet,
    step_collector: &mut dyn StepCollector<Step>,
) -> Option<Expr> {
    let baseline = constant::all(expr, step_collector)
        .or_else(|| negate::all(expr, step_collector))
        .or_else(|| add::all(expr, step_collector))
        .or_else(|| multiply::all(expr, step_collector));

    match rule_set {
        RuleSet::Baseline => baseline,
        RuleSet::Extended => baseline.or_else(|| add::like_terms(expr, step_collector)),
    }
}
