//! Isolates a variable in an equation by searching over rearrangements of it.
//!
//! Starting from `lhs = rhs`, the solver repeatedly undoes one operation on either side by
//! applying its inverse to the other side, such as turning `l + r = t` into `l = t - r`. Each
//! rearrangement is a [`Job`]. Jobs are simplified and explored breadth-first through a
//! [`JobQueue`], which drops any equation (or its mirror) seen before. The search stops as soon
//! as a job has the form `target = <expression not containing target>`.
//!
//! Because exploration is breadth-first, the returned solution comes from a shortest chain of
//! rearrangements. Each call owns its own queue, so independent calls can run on different
//! threads without coordination.

pub mod error;
pub mod options;
pub mod queue;

use isolate_parser::parser::token::op::BinOpKind;
use log::{debug, trace};
use super::{
    expr::Expr,
    pattern::{do_binary, do_constant, do_named_variable, do_negation, do_variable, first_of},
    simplify::{simplify_with, RuleSet},
};

pub use error::{NonFiniteSolution, SolveError, Unsolvable};
pub use options::{SolveOptions, SolveOptionsBuilder};
pub use queue::{Job, JobQueue};

/// A successful solve.
#[derive(Debug, Clone, PartialEq)]
pub struct Solution {
    /// The isolated value of the target variable.
    pub value: Expr,

    /// The chain of jobs leading from the initial equation to the accepted one.
    pub derivation: Vec<Job>,

    /// The number of jobs dequeued during the search.
    pub explored: usize,
}

/// If `side` is the target variable and `other` does not mention it, returns `other`.
fn isolated<'a>(target: &str, side: &Expr, other: &'a Expr) -> Option<&'a Expr> {
    do_named_variable(side, target, || (!other.contains_variable(target)).then_some(other))
}

/// Returns the jobs obtained by moving the outermost operation of `side` onto `other`, in the
/// equation `side = other`.
fn rewrite(target: &str, side: &Expr, other: &Expr) -> Vec<Job> {
    first_of(side, &[
        // nothing left to undo
        &|expr| do_named_variable(expr, target, || Some(Vec::new())),

        // -x = t  =>  x = -t
        &|expr| do_negation(expr, |operand| {
            Some(vec![Job::new(operand.clone(), -other.clone())])
        }),

        &|expr| do_binary(expr, |op, lhs, rhs| {
            let (lhs, rhs, other) = (lhs.clone(), rhs.clone(), other.clone());
            Some(match op {
                // l + r = t  =>  l = t - r,  r = t - l
                BinOpKind::Add => vec![
                    Job::new(lhs.clone(), other.clone() - rhs.clone()),
                    Job::new(rhs, other - lhs),
                ],
                // l - r = t  =>  l = t + r,  -r = t - l
                BinOpKind::Sub => vec![
                    Job::new(lhs.clone(), other.clone() + rhs.clone()),
                    Job::new(-rhs, other - lhs),
                ],
                // l * r = t  =>  l = t / r,  r = t / l
                BinOpKind::Mul => vec![
                    Job::new(lhs.clone(), other.clone() / rhs.clone()),
                    Job::new(rhs, other / lhs),
                ],
                // l / r = t  =>  l = t * r,  1 / r = t / l
                BinOpKind::Div => vec![
                    Job::new(lhs.clone(), other.clone() * rhs.clone()),
                    Job::new(Expr::constant(1.0) / rhs, other / lhs),
                ],
            })
        }),

        // a leaf with no structure to move: c = t  =>  0 = t - c
        &|expr| do_constant(expr, |_| Some(vec![Job::new(Expr::constant(0.0), other.clone() - expr.clone())])),
        &|expr| do_variable(expr, |_| Some(vec![Job::new(Expr::constant(0.0), other.clone() - expr.clone())])),
    ]).unwrap_or_default()
}

/// Isolates `target` in the equation `lhs = rhs` with the default [`SolveOptions`], returning the
/// simplified value of `target`.
///
/// ```
/// use isolate_math::{solve_for, Expr};
///
/// let lhs = Expr::constant(2.0) * Expr::variable("x");
/// let value = solve_for("x", &lhs, &Expr::constant(8.0)).unwrap();
/// assert_eq!(value, Expr::constant(4.0));
/// ```
pub fn solve_for(target: &str, lhs: &Expr, rhs: &Expr) -> Result<Expr, SolveError> {
    solve_for_with(target, lhs, rhs, &SolveOptions::default()).map(|solution| solution.value)
}

/// Isolates `target` in the equation `lhs = rhs` with the given options.
pub fn solve_for_with(
    target: &str,
    lhs: &Expr,
    rhs: &Expr,
    options: &SolveOptions,
) -> Result<Solution, SolveError> {
    let rules = options.rules;
    let simplified = |job: Job| Job::new(simplify_with(&job.lhs, rules), simplify_with(&job.rhs, rules));

    let mut queue = JobQueue::new();
    let initial = simplified(Job::new(lhs.clone(), rhs.clone()));
    debug!("solving for `{}` in {}", target, initial);
    queue.push(initial, None);

    let mut explored = 0;
    while explored < options.max_iterations {
        let Some(index) = queue.pop() else {
            break;
        };
        explored += 1;

        let job = queue.job(index).clone();
        trace!("exploring job {}: {}", index, job);

        let value = isolated(target, &job.lhs, &job.rhs)
            .or_else(|| isolated(target, &job.rhs, &job.lhs));
        if let Some(value) = value {
            debug!("isolated `{}` after {} jobs: {}", target, explored, value);
            if options.reject_non_finite && !value.is_finite() {
                return Err(NonFiniteSolution {
                    target: target.to_string(),
                    value: value.clone(),
                }.into());
            }

            return Ok(Solution {
                value: value.clone(),
                derivation: queue.derivation(index),
                explored,
            });
        }

        let candidates = rewrite(target, &job.lhs, &job.rhs)
            .into_iter()
            .chain(rewrite(target, &job.rhs, &job.lhs));
        for candidate in candidates {
            let candidate = simplified(candidate);
            if queue.has_seen(&candidate) {
                trace!("skipping duplicate job: {}", candidate);
                continue;
            }
            queue.push(candidate, Some(index));
        }
    }

    debug!(
        "gave up isolating `{}` after {} jobs ({} admitted, {} pending)",
        target, explored, queue.admitted(), queue.pending(),
    );
    Err(Unsolvable {
        target: target.to_string(),
        explored,
    }.into())
}
