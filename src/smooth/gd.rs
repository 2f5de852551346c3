use crate::operator::Projection;
use crate::trajectory::Trajectory;
use ndarray::prelude::*;
use ndarray::NdFloat; // includes LinalgScalar and ScalarOperand
use tracing::{debug, trace};

/// Projected Gradient Descent with a step size schedule
///
/// Also known as the projected gradient method. With the
/// [`Identity`](crate::operator::Identity) projection it is plain gradient
/// descent.
///
/// Algorithm
/// ---------
/// ```math
/// x_{i+1} = P_{\mathcal{C}}\left( x_i - \gamma_i \nabla f(x_i) \right)
/// ```
///
/// Parameters
/// ----------
/// - __grad:__         function that computes gradient g(x), same shape as x
/// - __proj:__         projection onto the feasible set
/// - __x0:__           initial guess
/// - __steps:__        step sizes $`\gamma_i`$, one per iteration, consumed in order
/// - __num_to_keep:__  if `Some(k)`, only the last k iterates are kept
/// - __callback:__     User-defined function to be evaluated with two arguments (x,iter).
///                      It is evaluated at (x0,0) and then after each iteration.
///                      If it returns True, the function terminates early.
///
/// Returns the iterates, starting with `x0`. Without early termination or
/// truncation the trajectory has one more entry than `steps`.
///
/// # Panics
/// if `grad` returns an array whose shape differs from its argument
pub fn gradient_descent<S: NdFloat>(
    grad: impl Fn(ArrayView1<S>) -> Array1<S>,
    proj: &impl Projection<S>,
    x0: ArrayView1<S>,
    steps: impl IntoIterator<Item = S>,
    num_to_keep: Option<usize>,
    mut callback: impl FnMut(ArrayView1<S>, usize) -> bool,
) -> Trajectory<S> {
    let mut x = x0.to_owned();
    let mut xs = Trajectory::new(x.clone(), num_to_keep);

    if callback(x.view(), 0) {
        return xs;
    };
    for (iter, step) in (1..).zip(steps) {
        let g = grad(x.view());
        let mut y = x;
        y.scaled_add(-step, &g);
        x = proj.project(y);
        trace!(iter, step = %step, "projected gradient step");
        xs.push(x.clone());
        if callback(x.view(), iter) {
            break;
        };
    }
    debug!(kept = xs.len(), "gradient descent finished");
    xs
}

#[cfg(test)]
mod tests {
    #![allow(non_snake_case)]

    use super::*;
    use crate::operator::{Clip, Identity, L2Ball};
    use crate::schedule::constant;
    use crate::smooth::nop;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_gd_like_1d() {
        let a = 10.;
        let y = array![50.];
        let x0 = array![19.];
        let xs = gradient_descent(
            |x| a * (a * &x - &y),
            &Identity::new(),
            x0.view(),
            constant(0.01, 20),
            None,
            nop,
        );
        assert_eq!(xs.len(), 21);
        assert_eq!(xs[0], x0);
        assert_abs_diff_eq!(xs.last().unwrap(), &array![5.], epsilon = 1e-10);
    }

    #[test]
    fn gradient_descent_simple_regression() {
        const NITER: usize = 100;
        let A = array![[10., 0.], [0., 20.]];
        let y = array![50., 100.];
        let x0 = array![19., 44.];
        let mut finished = false;
        let xs = gradient_descent(
            |x| A.t().dot(&(A.dot(&x) - &y)),
            &Identity::new(),
            x0.view(),
            constant(1. / 400., NITER),
            None,
            |_x, iter| {
                assert!(iter <= NITER);
                if iter == NITER {
                    finished = true;
                }
                false
            },
        );
        assert!(finished);
        assert_eq!(xs.len(), NITER + 1);
        assert_abs_diff_eq!(xs.last().unwrap(), &array![5., 5.], epsilon = 1e-6);
    }

    #[test]
    fn zero_gradient_is_fixed_point() {
        let x0 = array![1.5, -2.0, 0.25];
        let xs = gradient_descent(
            |x| Array1::zeros(x.len()),
            &Identity::new(),
            x0.view(),
            vec![0.1, 1.0, 10.0],
            None,
            nop,
        );
        assert_eq!(xs.len(), 4);
        for x in &xs {
            assert_eq!(x, &x0);
        }
    }

    #[test]
    fn truncation_keeps_latest() {
        let x0 = array![0.];
        // grad = -1 so every step of size 1 moves by +1
        let grad = |x: ArrayView1<f64>| Array1::from_elem(x.len(), -1.);
        let xs = gradient_descent(grad, &Identity::new(), x0.view(), constant(1., 10), Some(3), nop);
        let kept: Vec<f64> = xs.iter().map(|x| x[0]).collect();
        assert_eq!(kept, vec![8., 9., 10.]);

        // a bound larger than the run keeps everything
        let xs = gradient_descent(grad, &Identity::new(), x0.view(), constant(1., 2), Some(10), nop);
        assert_eq!(xs.len(), 3);
        assert_eq!(xs[0], x0);
    }

    #[test]
    fn empty_schedule() {
        let x0 = array![3., 4.];
        let xs = gradient_descent(|x| x.to_owned(), &Identity::new(), x0.view(), vec![], Some(1), nop);
        assert_eq!(xs.into_vec(), vec![x0]);
    }

    #[test]
    fn projected_onto_ball() {
        let p = array![3., 4.];
        let xs = gradient_descent(
            |x| (&x - &p) * 2.,
            &L2Ball::new(1.),
            array![0., 0.].view(),
            constant(0.25, 100),
            Some(1),
            nop,
        );
        assert_abs_diff_eq!(xs.last().unwrap(), &array![0.6, 0.8], epsilon = 1e-10);
    }

    #[test]
    fn projected_onto_box() {
        let p = array![-2., 0.5, 3.];
        let box_proj = Clip::new(0., 1.);
        let xs = gradient_descent(
            |x| &x - &p,
            &box_proj,
            array![0.5, 0.5, 0.5].view(),
            constant(0.5, 80),
            None,
            |x, _iter| {
                assert!(x.iter().all(|&xi| (0. ..=1.).contains(&xi)));
                false
            },
        );
        assert_abs_diff_eq!(xs.last().unwrap(), &array![0., 0.5, 1.], epsilon = 1e-10);
    }

    #[test]
    fn callback_stops_early() {
        let x0 = array![0.];
        let xs = gradient_descent(
            |x| Array1::from_elem(x.len(), -1.),
            &Identity::new(),
            x0.view(),
            constant(1., 10),
            None,
            |_x, iter| iter == 4,
        );
        assert_eq!(xs.len(), 5);
        assert_eq!(xs.last(), Some(&array![4.]));

        let xs = gradient_descent(|x| x.to_owned(), &Identity::new(), x0.view(), constant(1., 10), None, |_x, _| true);
        assert_eq!(xs.len(), 1);
    }
}

#[cfg(all(rustc_nightly, test))]
mod benches {
    use super::*;
    use crate::operator::Identity;
    use crate::schedule::constant;
    use crate::smooth::nop;
    use test::Bencher;

    #[bench]
    fn gd_quadratic_100(b: &mut Bencher) {
        let p = Array1::linspace(-1., 1., 100);
        let x0 = Array1::zeros(100);
        b.iter(|| {
            gradient_descent(|x| &x - &p, &Identity::new(), x0.view(), constant(0.5, 100), Some(1), nop)
        });
    }
}
