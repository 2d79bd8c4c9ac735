//! The deduplicating, breadth-first work list of equations explored by the solver.

use std::{collections::{HashSet, VecDeque}, fmt};
use super::super::expr::Expr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// An equation-in-progress: a pair of expressions asserted to be equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Job {
    /// The left-hand side of the equation.
    pub lhs: Expr,

    /// The right-hand side of the equation.
    pub rhs: Expr,
}

impl Job {
    /// Creates a new job for the equation `lhs = rhs`.
    pub fn new(lhs: Expr, rhs: Expr) -> Self {
        Self { lhs, rhs }
    }

    /// Returns the same equation with both sides swapped.
    pub fn mirrored(&self) -> Self {
        Self {
            lhs: self.rhs.clone(),
            rhs: self.lhs.clone(),
        }
    }
}

impl fmt::Display for Job {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} = {}", self.lhs, self.rhs)
    }
}

/// A job admitted into the queue, along with the job it was derived from.
#[derive(Debug, Clone)]
struct Node {
    job: Job,
    parent: Option<usize>,
}

/// A FIFO queue of jobs that admits every equation at most once.
///
/// A job is rejected if it, or its mirror, was admitted before, since `a = b` and `b = a` are the
/// same equation. Rejected jobs are dropped; there is no way to remove a job from the seen-set.
///
/// Admitted jobs are kept for the lifetime of the queue and addressed by their admission index,
/// so that the chain of jobs leading to a solution can be recovered with
/// [`JobQueue::derivation`].
#[derive(Debug, Default)]
pub struct JobQueue {
    /// Every admitted job, in admission order.
    nodes: Vec<Node>,

    /// Indices into `nodes` of the jobs that have not been popped yet.
    frontier: VecDeque<usize>,

    /// Every admitted job, for deduplication.
    seen: HashSet<Job>,
}

impl JobQueue {
    /// Creates an empty queue.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if the job or its mirror has been admitted.
    pub fn has_seen(&self, job: &Job) -> bool {
        self.seen.contains(job) || self.seen.contains(&job.mirrored())
    }

    /// Offers a job to the queue, derived from the job at index `parent`. Returns `true` if the
    /// job was admitted, or `false` if it was a duplicate.
    pub fn push(&mut self, job: Job, parent: Option<usize>) -> bool {
        if self.has_seen(&job) {
            return false;
        }

        self.seen.insert(job.clone());
        self.frontier.push_back(self.nodes.len());
        self.nodes.push(Node { job, parent });
        true
    }

    /// Removes the oldest pending job from the queue, returning its index.
    pub fn pop(&mut self) -> Option<usize> {
        self.frontier.pop_front()
    }

    /// Returns the admitted job with the given index.
    ///
    /// # Panics
    ///
    /// Panics if no job was admitted with that index.
    pub fn job(&self, index: usize) -> &Job {
        &self.nodes[index].job
    }

    /// Returns the chain of jobs from the first admitted job to the job with the given index.
    pub fn derivation(&self, index: usize) -> Vec<Job> {
        let mut chain = Vec::new();
        let mut current = Some(index);
        while let Some(index) = current {
            let node = &self.nodes[index];
            chain.push(node.job.clone());
            current = node.parent;
        }
        chain.reverse();
        chain
    }

    /// Returns the number of jobs admitted so far.
    pub fn admitted(&self) -> usize {
        self.nodes.len()
    }

    /// Returns the number of jobs waiting to be popped.
    pub fn pending(&self) -> usize {
        self.frontier.len()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;

    fn job(lhs: &str, rhs: f64) -> Job {
        Job::new(Expr::variable(lhs), Expr::constant(rhs))
    }

    #[test]
    fn fifo_order() {
        let mut queue = JobQueue::new();
        assert!(queue.push(job("a", 1.0), None));
        assert!(queue.push(job("b", 2.0), None));
        assert!(queue.push(job("c", 3.0), None));

        let popped = std::iter::from_fn(|| queue.pop())
            .collect::<Vec<_>>();
        assert_eq!(popped, vec![0, 1, 2]);
        assert_eq!(queue.job(1), &job("b", 2.0));
        assert_eq!(queue.pending(), 0);
    }

    #[test]
    fn rejects_duplicates_and_mirrors() {
        let mut queue = JobQueue::new();
        assert!(queue.push(job("x", 8.0), None));
        assert!(!queue.push(job("x", 8.0), None));
        assert!(!queue.push(job("x", 8.0).mirrored(), Some(0)));
        assert!(queue.push(job("x", 4.0), Some(0)));

        assert_eq!(queue.admitted(), 2);
        assert_eq!(queue.pending(), 2);
    }

    #[test]
    fn rejects_after_pop() {
        let mut queue = JobQueue::new();
        queue.push(job("x", 8.0), None);
        assert_eq!(queue.pop(), Some(0));
        assert!(!queue.push(job("x", 8.0), Some(0)));
        assert_eq!(queue.pop(), None);
    }

    #[test]
    fn mirror_of_symmetric_job() {
        let same = Job::new(Expr::variable("x"), Expr::variable("x"));
        assert_eq!(same.mirrored(), same);

        let mut queue = JobQueue::new();
        assert!(queue.push(same.clone(), None));
        assert!(!queue.push(same, None));
    }

    #[test]
    fn derivation_chain() {
        let mut queue = JobQueue::new();
        queue.push(job("a", 1.0), None);
        queue.push(job("b", 2.0), Some(0));
        queue.push(job("c", 3.0), Some(0));
        queue.push(job("d", 4.0), Some(2));

        assert_eq!(queue.derivation(3), vec![job("a", 1.0), job("c", 3.0), job("d", 4.0)]);
        assert_eq!(queue.derivation(0), vec![job("a", 1.0)]);
    }

    #[test]
    fn display() {
        let job = Job::new(Expr::variable("x") * Expr::constant(2.0), Expr::constant(8.0));
        assert_eq!(job.to_string(), "(x * 2) = 8");
    }
}
