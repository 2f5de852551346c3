//! 1D Fused Lasso

use crate::error::{ProxError, ProxResult};
use crate::operator::Projection;
use ndarray::prelude::*;
use ndarray::NdFloat;
use tracing::trace;

/// A solver for the 1D fused lasso problem
/// ```math
/// \min_\theta \frac12 \sum_{i=1}^n (y_i - \theta_i)^2
///     + \lambda \sum_{i=1}^{n-1} |\theta_i - \theta_{i+1}|
/// ```
///
/// The kernel receives `y` and `theta` of equal length and writes the
/// minimizer into `theta` in place. The usual implementation is Johnson's
/// O(n) dynamic program, linked from native code; any closure
/// `Fn(&[f64], f64, &mut [f64])` can stand in for it.
pub trait FusedLassoKernel {
    fn prox_dp(&self, y: &[f64], lam: f64, theta: &mut [f64]);
}

impl<F> FusedLassoKernel for F
where
    F: Fn(&[f64], f64, &mut [f64]),
{
    #[inline]
    fn prox_dp(&self, y: &[f64], lam: f64, theta: &mut [f64]) {
        self(y, lam, theta)
    }
}

fn check_len(name: &'static str, expected: usize, found: usize) -> ProxResult<()> {
    if found == expected {
        Ok(())
    } else {
        Err(ProxError::LengthMismatch {
            name,
            expected,
            found,
        })
    }
}

fn check_lambda(lam: f64) -> ProxResult<()> {
    if lam.is_finite() && lam >= 0. {
        Ok(())
    } else {
        Err(ProxError::InvalidLambda { lam })
    }
}

/// Run `kernel` on a problem of length `n`, writing the solution into `theta`.
///
/// `y` and `theta` must both have length `n`, `theta` must be contiguous
/// and `lam` finite and nonnegative. A strided `y` is copied to a contiguous
/// buffer first. Nothing is written to `theta` if the arguments are
/// rejected.
pub fn prox_dp<K>(
    kernel: &K,
    n: usize,
    y: ArrayView1<f64>,
    lam: f64,
    mut theta: ArrayViewMut1<f64>,
) -> ProxResult<()>
where
    K: FusedLassoKernel + ?Sized,
{
    check_len("y", n, y.len())?;
    check_len("theta", n, theta.len())?;
    check_lambda(lam)?;

    let y_std = y.as_standard_layout();
    let y_buf = y_std
        .as_slice()
        .ok_or(ProxError::NonContiguous { name: "y" })?;
    let theta_buf = theta
        .as_slice_mut()
        .ok_or(ProxError::NonContiguous { name: "theta" })?;

    trace!(n, lam, "fused lasso kernel call");
    kernel.prox_dp(y_buf, lam, theta_buf);
    Ok(())
}

/// Value of the fused lasso objective at `theta`.
///
/// # Panics
/// if `y` and `theta` differ in length
pub fn fused_lasso_objective<S: NdFloat>(y: ArrayView1<S>, lam: S, theta: ArrayView1<S>) -> S {
    let half = S::from(0.5).unwrap();
    let fit = (&y - &theta).mapv(|r| r * r).sum() * half;
    if theta.len() < 2 {
        return fit;
    }
    let tv = (&theta.slice(s![1..]) - &theta.slice(s![..-1]))
        .mapv(|d| d.abs())
        .sum();
    fit + lam * tv
}

/// The fused lasso proximal operator with a fixed weight, usable as a
/// [`Projection`].
///
/// For proximal gradient with step size $`t`$ on $`f(\theta) + \lambda
/// \mathrm{TV}(\theta)`$, build it with `lam` $`= t\lambda`$.
#[derive(Clone, Debug)]
pub struct FusedLassoProx<K> {
    kernel: K,
    lam: f64,
}

impl<K: FusedLassoKernel> FusedLassoProx<K> {
    pub fn new(kernel: K, lam: f64) -> ProxResult<Self> {
        check_lambda(lam)?;
        Ok(FusedLassoProx { kernel, lam })
    }

    #[must_use]
    pub fn lam(&self) -> f64 {
        self.lam
    }

    /// Solve the problem for `y` into a new array.
    pub fn apply(&self, y: ArrayView1<f64>) -> Array1<f64> {
        let y = y.to_vec();
        let mut theta = vec![0.; y.len()];
        self.kernel.prox_dp(&y, self.lam, &mut theta);
        Array1::from(theta)
    }
}

impl<K: FusedLassoKernel> Projection<f64> for FusedLassoProx<K> {
    fn project(&self, x: Array1<f64>) -> Array1<f64> {
        self.apply(x.view())
    }
}
