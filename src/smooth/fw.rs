use crate::trajectory::Trajectory;
use ndarray::prelude::*;
use ndarray::NdFloat;
use tracing::{debug, trace};

/// Conditional Gradient (Frank-Wolfe) with a step size schedule
///
/// Instead of projecting, each iteration moves toward the point returned by
/// a linear minimization oracle over the feasible set $`\mathcal{C}`$. For
/// steps in $`[0, 1]`$ every iterate is a convex combination of `x0` and
/// oracle outputs, so it stays feasible whenever `x0` is.
///
/// Algorithm
/// ---------
/// ```math
/// \begin{aligned}
/// v_i &= \mathrm{arg}\!\min_{v \in \mathcal{C}} \langle \nabla f(x_i), v \rangle \\
/// x_{i+1} &= x_i + \gamma_i (v_i - x_i)
/// \end{aligned}
/// ```
///
/// Parameters
/// ----------
/// - __oracle:__       maps x to $`v`$, typically `|x| simplex_vertex(grad(x).view())`
/// - __x0:__           initial point
/// - __steps:__        step sizes $`\gamma_i`$, e.g. [`open_loop`](crate::schedule::open_loop)
/// - __num_to_keep:__  if `Some(k)`, only the last k iterates are kept
/// - __callback:__     User-defined function to be evaluated with two arguments (x,iter).
///                      It is evaluated at (x0,0) and then after each iteration.
///                      If it returns True, the function terminates early.
///
/// # Panics
/// if `oracle` returns an array whose shape differs from its argument
pub fn conditional_gradient<S: NdFloat>(
    oracle: impl Fn(ArrayView1<S>) -> Array1<S>,
    x0: ArrayView1<S>,
    steps: impl IntoIterator<Item = S>,
    num_to_keep: Option<usize>,
    mut callback: impl FnMut(ArrayView1<S>, usize) -> bool,
) -> Trajectory<S> {
    let mut x = x0.to_owned();
    let mut xs = Trajectory::new(x.clone(), num_to_keep);

    if callback(x.view(), 0) {
        return xs;
    }
    for (iter, step) in (1..).zip(steps) {
        let mut dir = oracle(x.view());
        dir -= &x;
        x.scaled_add(step, &dir);
        trace!(iter, step = %step, "conditional gradient step");
        xs.push(x.clone());
        if callback(x.view(), iter) {
            break;
        }
    }
    debug!(kept = xs.len(), "conditional gradient finished");
    xs
}

/// Index of the first minimum of `g`, or 0 if `g` is empty.
fn argmin_by<S: NdFloat>(g: ArrayView1<S>, key: impl Fn(S) -> S) -> usize {
    let mut best = 0;
    for (i, &gi) in g.indexed_iter() {
        if key(gi) < key(g[best]) {
            best = i;
        }
    }
    best
}

/// Linear minimization oracle of the probability simplex
/// $`\{v \geq 0 : \sum_i v_i = 1\}`$.
///
/// Returns the vertex $`e_j`$ with $`j = \mathrm{arg}\!\min_i g_i`$, the
/// first such index on ties.
pub fn simplex_vertex<S: NdFloat>(g: ArrayView1<S>) -> Array1<S> {
    let mut v = Array1::zeros(g.raw_dim());
    if !g.is_empty() {
        v[argmin_by(g, |gi| gi)] = S::one();
    }
    v
}

/// Linear minimization oracle of the $`\ell_1`$ ball of radius `radius`.
///
/// Returns $`-r\,\mathrm{sign}(g_j) e_j`$ with $`j = \mathrm{arg}\!\max_i |g_i|`$.
/// A zero gradient gives the zero vector.
pub fn l1_ball_vertex<S: NdFloat>(g: ArrayView1<S>, radius: S) -> Array1<S> {
    let mut v = Array1::zeros(g.raw_dim());
    if !g.is_empty() {
        let j = argmin_by(g, |gi| -gi.abs());
        if g[j] != S::zero() {
            v[j] = -radius * g[j].signum();
        }
    }
    v
}

/// Linear minimization oracle of the Euclidean ball of radius `radius`.
///
/// Returns $`-r\,g / \|g\|_2`$, or the zero vector if $`g = 0`$.
pub fn l2_ball_vertex<S: NdFloat>(g: ArrayView1<S>, radius: S) -> Array1<S> {
    let norm = g.dot(&g).sqrt();
    if norm > S::zero() {
        g.mapv(|gi| -radius * gi / norm)
    } else {
        Array1::zeros(g.raw_dim())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schedule::{constant, open_loop};
    use crate::smooth::nop;
    use approx::assert_abs_diff_eq;

    #[test]
    fn oracles() {
        let g = array![0.5, -2., 1., -2.];
        assert_eq!(simplex_vertex(g.view()), array![0., 1., 0., 0.]);
        assert_eq!(l1_ball_vertex(g.view(), 3.), array![0., 3., 0., 0.]);
        assert_abs_diff_eq!(
            l2_ball_vertex(array![3., -4.].view(), 2.),
            array![-1.2, 1.6],
            epsilon = 1e-12
        );

        let zero = Array1::<f64>::zeros(3);
        assert_eq!(l1_ball_vertex(zero.view(), 1.), zero);
        assert_eq!(l2_ball_vertex(zero.view(), 1.), zero);
    }

    #[test]
    fn first_full_step_hits_vertex() {
        let x0 = array![0.25, 0.25, 0.5];
        let xs = conditional_gradient(
            |_x| array![0., 1., 0.],
            x0.view(),
            open_loop(1),
            None,
            nop,
        );
        assert_eq!(xs.len(), 2);
        assert_eq!(xs[0], x0);
        assert_eq!(xs[1], array![0., 1., 0.]);
    }

    #[test]
    fn fixed_oracle_point_is_fixed() {
        let x0 = array![1., -1.];
        let xs = conditional_gradient(|x| x.to_owned(), x0.view(), constant(0.3, 5), Some(2), nop);
        assert_eq!(xs.len(), 2);
        for x in &xs {
            assert_eq!(x, &x0);
        }
    }

    #[test]
    fn simplex_quadratic_stays_feasible() {
        const NITER: usize = 500;
        let p = array![0.2, 0.5, 0.3];
        let f = |x: ArrayView1<f64>| (&x - &p).mapv(|r| r * r).sum();
        let grad = |x: ArrayView1<f64>| (&x - &p) * 2.;

        let x0 = array![1., 0., 0.];
        let xs = conditional_gradient(
            |x| simplex_vertex(grad(x).view()),
            x0.view(),
            open_loop(NITER),
            None,
            |x, _iter| {
                assert!(x.iter().all(|&xi| xi >= 0.));
                assert_abs_diff_eq!(x.sum(), 1., epsilon = 1e-12);
                false
            },
        );
        assert_eq!(xs.len(), NITER + 1);
        // O(1/k) primal gap bound: 2 L diam^2 / (k + 2)
        assert!(f(xs.last().unwrap().view()) < 0.02);
    }

    #[test]
    fn l2_ball_linear_objective() {
        // min <c, x> over the unit ball is -c / |c|
        let c = array![1., 2., 2.];
        let xs = conditional_gradient(
            |_x| l2_ball_vertex(c.view(), 1.),
            Array1::zeros(3).view(),
            open_loop(200),
            Some(1),
            nop,
        );
        assert_abs_diff_eq!(
            xs.last().unwrap(),
            &array![-1. / 3., -2. / 3., -2. / 3.],
            epsilon = 1e-12
        );
    }
}
