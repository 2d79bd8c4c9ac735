//! Simplification rules for expressions involving multiplication and division.

use isolate_parser::parser::token::op::BinOpKind;
use crate::{
    algebra::{
        expr::Expr,
        pattern::do_binary_op,
        simplify::{rules::is_constant_value, step::Step},
    },
    step::StepCollector,
};

/// `0*a = 0`
/// `a*0 = 0`
pub fn multiply_zero(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    let opt = do_binary_op(expr, BinOpKind::Mul, |lhs, rhs| {
        (is_constant_value(lhs, 0.0) || is_constant_value(rhs, 0.0))
            .then(|| Expr::constant(0.0))
    })?;

    step_collector.push(Step::MultiplyZero);
    Some(opt)
}

/// `1*a = a`
/// `a*1 = a`
pub fn multiply_one(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    let opt = do_binary_op(expr, BinOpKind::Mul, |lhs, rhs| {
        if is_constant_value(lhs, 1.0) {
            Some(rhs.clone())
        } else if is_constant_value(rhs, 1.0) {
            Some(lhs.clone())
        } else {
            None
        }
    })?;

    step_collector.push(Step::MultiplyOne);
    Some(opt)
}

/// `0/a = 0`
pub fn divide_zero(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    let opt = do_binary_op(expr, BinOpKind::Div, |lhs, _| {
        is_constant_value(lhs, 0.0).then(|| Expr::constant(0.0))
    })?;

    step_collector.push(Step::DivideZero);
    Some(opt)
}

/// Applies all multiplication and division rules.
pub fn all(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    multiply_zero(expr, step_collector)
        .or_else(|| multiply_one(expr, step_collector))
        .or_else(|| divide_zero(expr, step_collector))
}
