//! First Order Methods for Smooth Minimization
//!
//! For minimizing a "smooth" objective function, $`f`$, over a feasible set
//! $`\mathcal{C}`$ using only its gradient $`\nabla f`$ (projected gradient
//! descent) or a linear minimization oracle over $`\mathcal{C}`$
//! (conditional gradient, also known as Frank-Wolfe).
//!
//! Both methods are driven by an explicit step size schedule (see
//! [`crate::schedule`]) rather than a Lipschitz constant, so the caller
//! decides the number of iterations and the step sizes up front.
//!
//! Both also accept a user callback `(x, iter) -> bool`, evaluated at
//! `(x0, 0)` and then after each iteration. If it returns `true` the method
//! terminates early. Pass [`nop`] to run the whole schedule.

mod gd;
pub use gd::*;
mod fw;
pub use fw::*;

use ndarray::ArrayView;

/// Do nothing function for optional user callback (returns false)
#[allow(clippy::needless_pass_by_value)]
pub fn nop<T, D>(_x: ArrayView<T, D>, _itr: usize) -> bool {
    false
}
