//! Proximal Operators
//!
//! The proximal operator of a function $`g`$ with weight $`\lambda`$ is
//! ```math
//! \mathrm{prox}_{\lambda g}(y) = \mathrm{arg}\!\min_\theta \frac12 \|y - \theta\|_2^2 + \lambda g(\theta)
//! ```
//! A projection is the proximal operator of a constraint set, so a prox with
//! a fixed weight can be used wherever a [`Projection`](crate::operator::Projection)
//! is expected. Passing one to [`gradient_descent`](crate::smooth::gradient_descent)
//! gives the proximal gradient method.
//!
//! The solvers for these problems are external numerical kernels; this
//! module defines the calling convention and checks the arguments before
//! handing them over.

mod fused_lasso;
pub use fused_lasso::*;
