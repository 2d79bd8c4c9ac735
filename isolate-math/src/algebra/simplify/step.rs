#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Possible simplification steps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Step {
    /// `2+3 = 5`
    /// `1/0 = inf`
    FoldConstants,

    /// `-(3) = -3`
    NegateConstant,

    /// `--a = a`
    DoubleNegation,

    /// `0+a = a`
    /// `a+0 = a`
    AddZero,

    /// `a-0 = a`
    SubtractZero,

    /// `0-a = -a`
    SubtractFromZero,

    /// `0*a = 0`
    /// `a*0 = 0`
    MultiplyZero,

    /// `1*a = a`
    /// `a*1 = a`
    MultiplyOne,

    /// `0/a = 0`
    DivideZero,

    /// `a-a = 0`
    CancelLikeTerms,

    /// `a+a = 2*a`
    CombineLikeTerms,
}
