use super::{GoldenSection, LineSearch};
use crate::trajectory::Trajectory;
use ndarray::prelude::*;
use ndarray::NdFloat;
use ndarray_rand::rand::Rng;
use ndarray_rand::rand_distr::{Distribution, Normal, StandardNormal};
use ndarray_rand::RandomExt;
use tracing::{debug, trace};

/// Random Search
///
/// Each iteration samples a direction with independent normal components,
/// scales it to unit length and moves along it by the step a line search
/// picks on `[lower, upper]`.
///
/// Algorithm
/// ---------
/// ```math
/// \begin{aligned}
/// d_i &\sim \mathcal{N}(0, \sigma^2 I), \quad d_i \leftarrow d_i / \|d_i\|_2 \\
/// \eta_i &\approx \mathrm{arg}\!\min_{\eta \in [\ell, u]} f(x_i + \eta d_i) \\
/// x_{i+1} &= x_i + \eta_i d_i
/// \end{aligned}
/// ```
///
/// The defaults are $`\sigma = 100`$ and $`[\ell, u] = [-1, 1]`$. A sampled
/// direction of zero norm is not guarded against.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RandomSearch<S> {
    sigma: S,
    lower: S,
    upper: S,
}

impl<S: NdFloat> Default for RandomSearch<S> {
    fn default() -> Self {
        RandomSearch {
            sigma: S::from(100.).unwrap(),
            lower: -S::one(),
            upper: S::one(),
        }
    }
}

impl<S: NdFloat> RandomSearch<S> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Standard deviation of each direction component before normalizing.
    ///
    /// # Panics
    /// if `sigma` is not finite and positive
    #[must_use]
    pub fn with_sigma(mut self, sigma: S) -> Self {
        assert!(
            sigma.is_finite() && sigma > S::zero(),
            "sigma must be finite and positive"
        );
        self.sigma = sigma;
        self
    }

    /// Step interval handed to the line search.
    #[must_use]
    pub fn with_interval(mut self, lower: S, upper: S) -> Self {
        self.lower = lower;
        self.upper = upper;
        self
    }

    #[must_use]
    pub fn sigma(&self) -> S {
        self.sigma
    }

    #[must_use]
    pub fn interval(&self) -> (S, S) {
        (self.lower, self.upper)
    }

    /// Run `num_steps` iterations from `x0`, drawing directions from `rng`.
    ///
    /// Returns all `num_steps + 1` iterates, starting with `x0`. The same
    /// generator state always gives the same trajectory.
    pub fn run<R>(
        &self,
        oracle: impl Fn(ArrayView1<S>) -> S,
        x0: ArrayView1<S>,
        num_steps: usize,
        line_search: &impl LineSearch<S>,
        rng: &mut R,
    ) -> Trajectory<S>
    where
        R: Rng + ?Sized,
        StandardNormal: Distribution<S>,
    {
        let normal = Normal::new(S::zero(), self.sigma).unwrap();
        let mut x = x0.to_owned();
        let mut xs = Trajectory::new(x.clone(), None);

        for iter in 1..=num_steps {
            let mut dir: Array1<S> = Array::random_using(x.raw_dim(), normal, &mut *rng);
            let norm = dir.dot(&dir).sqrt();
            dir /= norm;

            let eta = line_search.search(
                &mut |step: S| oracle((&x + &(&dir * step)).view()),
                self.lower,
                self.upper,
            );
            x.scaled_add(eta, &dir);
            trace!(iter, eta = %eta, "random search step");
            xs.push(x.clone());
        }
        debug!(num_steps, "random search finished");
        xs
    }
}

/// Random Search with the default [`RandomSearch`] settings
///
/// Parameters
/// ----------
/// - __oracle:__       objective to minimize
/// - __x0:__           initial point
/// - __num_steps:__    number of iterations
/// - __line_search:__  e.g. [`GoldenSection`]
/// - __rng:__          source of random directions, seed it for reproducible runs
pub fn random_search<S, R>(
    oracle: impl Fn(ArrayView1<S>) -> S,
    x0: ArrayView1<S>,
    num_steps: usize,
    line_search: &impl LineSearch<S>,
    rng: &mut R,
) -> Trajectory<S>
where
    S: NdFloat,
    R: Rng + ?Sized,
    StandardNormal: Distribution<S>,
{
    RandomSearch::default().run(oracle, x0, num_steps, line_search, rng)
}

/// [`random_search`] with the default [`GoldenSection`] line search.
pub fn random_search_golden<S, R>(
    oracle: impl Fn(ArrayView1<S>) -> S,
    x0: ArrayView1<S>,
    num_steps: usize,
    rng: &mut R,
) -> Trajectory<S>
where
    S: NdFloat,
    R: Rng + ?Sized,
    StandardNormal: Distribution<S>,
{
    random_search(oracle, x0, num_steps, &GoldenSection::default(), rng)
}
