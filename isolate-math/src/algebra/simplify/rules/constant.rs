//! Rules that evaluate operations on constants.

use crate::{
    algebra::{
        expr::Expr,
        pattern::{do_binary, do_constant, do_negation},
        simplify::step::Step,
    },
    step::StepCollector,
};

/// `2+3 = 5`
///
/// The operation is carried out in IEEE-754 double precision as-is, so `1/0` folds to infinity
/// and `0/0` to NaN.
pub fn fold_constants(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    let opt = do_binary(expr, |op, lhs, rhs| {
        do_constant(lhs, |a| {
            do_constant(rhs, |b| Some(Expr::constant(op.eval(a, b))))
        })
    })?;

    step_collector.push(Step::FoldConstants);
    Some(opt)
}

/// `-(3) = -3`
pub fn negate_constant(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    let opt = do_negation(expr, |operand| {
        do_constant(operand, |value| Some(Expr::constant(-value)))
    })?;

    step_collector.push(Step::NegateConstant);
    Some(opt)
}

/// Applies all constant rules.
pub fn all(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    fold_constants(expr, step_collector)
        .or_else(|| negate_constant(expr, step_collector))
}
