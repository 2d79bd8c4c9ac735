//! Rules for negation.

use crate::{
    algebra::{expr::Expr, pattern::do_negation, simplify::step::Step},
    step::StepCollector,
};

/// `--a = a`
pub fn double_negation(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    let opt = do_negation(expr, |operand| {
        do_negation(operand, |inner| Some(inner.clone()))
    })?;

    step_collector.push(Step::DoubleNegation);
    Some(opt)
}

/// Applies all negation rules.
pub fn all(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    double_negation(expr, step_collector)
}
