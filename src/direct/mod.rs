//! Minimization via Direct Function Comparison, i.e. derivativeless
//!
//! Scalar line searches and the random search method built on them.

mod golden;
pub use golden::*;
mod random;
pub use random::*;

/// A scalar minimizer over a bracketing interval.
///
/// `search(func, a, b)` returns an approximate minimizer of `func` on
/// `[a, b]`. The function is evaluated sequentially, so it may carry state.
/// Any closure `Fn(&mut dyn FnMut(S) -> S, S, S) -> S` is a line search.
pub trait LineSearch<S> {
    fn search(&self, func: &mut dyn FnMut(S) -> S, a: S, b: S) -> S;
}

impl<S, F> LineSearch<S> for F
where
    F: Fn(&mut dyn FnMut(S) -> S, S, S) -> S,
{
    #[inline]
    fn search(&self, func: &mut dyn FnMut(S) -> S, a: S, b: S) -> S {
        self(func, a, b)
    }
}
