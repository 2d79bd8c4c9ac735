//! Simplification rules for expressions involving addition and subtraction.

use isolate_parser::parser::token::op::BinOpKind;
use crate::{
    algebra::{
        expr::Expr,
        pattern::do_binary_op,
        simplify::{rules::is_constant_value, step::Step},
    },
    step::StepCollector,
};

/// `0+a = a`
/// `a+0 = a`
pub fn add_zero(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    let opt = do_binary_op(expr, BinOpKind::Add, |lhs, rhs| {
        if is_constant_value(lhs, 0.0) {
            Some(rhs.clone())
        } else if is_constant_value(rhs, 0.0) {
            Some(lhs.clone())
        } else {
            None
        }
    })?;

    // only record the step once the rule is known to apply
    step_collector.push(Step::AddZero);
    Some(opt)
}

/// `a-0 = a`
pub fn subtract_zero(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    let opt = do_binary_op(expr, BinOpKind::Sub, |lhs, rhs| {
        is_constant_value(rhs, 0.0).then(|| lhs.clone())
    })?;

    step_collector.push(Step::SubtractZero);
    Some(opt)
}

/// `0-a = -a`
pub fn subtract_from_zero(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    let opt = do_binary_op(expr, BinOpKind::Sub, |lhs, rhs| {
        is_constant_value(lhs, 0.0).then(|| -rhs.clone())
    })?;

    step_collector.push(Step::SubtractFromZero);
    Some(opt)
}

/// `a-a = 0`
pub fn cancel_like_terms(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    let opt = do_binary_op(expr, BinOpKind::Sub, |lhs, rhs| {
        (lhs == rhs).then(|| Expr::constant(0.0))
    })?;

    step_collector.push(Step::CancelLikeTerms);
    Some(opt)
}

/// `a+a = 2*a`
pub fn combine_like_terms(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    let opt = do_binary_op(expr, BinOpKind::Add, |lhs, rhs| {
        (lhs == rhs).then(|| Expr::constant(2.0) * lhs.clone())
    })?;

    step_collector.push(Step::CombineLikeTerms);
    Some(opt)
}

/// Applies all baseline addition and subtraction rules.
pub fn all(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    add_zero(expr, step_collector)
        .or_else(|| subtract_zero(expr, step_collector))
        .or_else(|| subtract_from_zero(expr, step_collector))
}

/// Applies the rules that compare both operands of a sum or difference for equality. These are
/// only part of [`RuleSet::Extended`](crate::algebra::simplify::RuleSet::Extended).
pub fn like_terms(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    cancel_like_terms(expr, step_collector)
        .or_else(|| combine_like_terms(expr, step_collector))
}
