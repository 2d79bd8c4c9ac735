use crate::algebra::simplify::RuleSet;

/// Options that control the solver's search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SolveOptions {
    /// The maximum number of jobs to dequeue before giving up with
    /// [`Unsolvable`](super::error::Unsolvable).
    ///
    /// The default is `100`.
    pub max_iterations: usize,

    /// The rule table used to simplify every job before it is offered to the queue.
    ///
    /// The default is [`RuleSet::Baseline`].
    pub rules: RuleSet,

    /// Whether a solution containing an infinite or NaN constant is reported as
    /// [`NonFiniteSolution`](super::error::NonFiniteSolution) instead of being returned.
    ///
    /// Constant folding uses plain IEEE-754 arithmetic, so an equation such as `x * 0 = 1` can
    /// "solve" to `x = inf`. By default such solutions are returned as-is.
    pub reject_non_finite: bool,
}

impl Default for SolveOptions {
    fn default() -> Self {
        Self {
            max_iterations: 100,
            rules: RuleSet::default(),
            reject_non_finite: false,
        }
    }
}

impl SolveOptions {
    /// Wraps the given [`SolveOptions`] into a builder for further customization.
    pub fn into_builder(self) -> SolveOptionsBuilder {
        SolveOptionsBuilder(self)
    }
}

/// Helper struct to build a [`SolveOptions`] struct.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SolveOptionsBuilder(SolveOptions);

impl SolveOptionsBuilder {
    /// Creates a new builder with the default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the maximum number of jobs to dequeue. See [`SolveOptions::max_iterations`].
    pub fn max_iterations(mut self, max_iterations: usize) -> Self {
        self.0.max_iterations = max_iterations;
        self
    }

    /// Sets the rule table used to simplify jobs. See [`RuleSet`] for more information.
    pub fn rules(mut self, rules: RuleSet) -> Self {
        self.0.rules = rules;
        self
    }

    /// Sets whether non-finite solutions are rejected. See [`SolveOptions::reject_non_finite`].
    pub fn reject_non_finite(mut self, reject_non_finite: bool) -> Self {
        self.0.reject_non_finite = reject_non_finite;
        self
    }

    /// Builds the [`SolveOptions`] struct.
    pub fn build(self) -> SolveOptions {
        self.0
    }
}
