use super::LineSearch;
use ndarray::NdFloat;
use tracing::debug;

/// Golden Section Search
///
/// Minimizes a scalar function _func_ by iteratively shrinking the interval
/// given by _a_, _b_ by the golden ratio until the two interior points are
/// within _tol_ of each other. See
/// [Wikipedia](https://en.wikipedia.org/wiki/Golden-section_search)
/// for more info.
///
/// _func_ should be strictly unimodal on `[a, b]`. When `func(c) == func(d)`
/// the interval shrinks to `[c, b]`. Both interior points are recomputed from
/// the bracket on every iteration, never carried over.
///
/// There is no iteration cap. The interval shrinks by $`1/\varphi`$ per step,
/// so a `tol` below the floating point spacing of `a` and `b` never
/// terminates. Neither is `a < b` checked: `a == b` returns `a` at once, and
/// a reversed interval still shrinks but brackets nothing in particular.
pub fn golden_ss<S>(mut func: impl FnMut(S) -> S, a: S, b: S, tol: S) -> S
where
    S: NdFloat,
{
    // phi = (1 + sqrt(5)) / 2 = 1.6180339887498949
    let gr = S::from((1. + 5.0_f64.sqrt()) / 2.).unwrap();

    let (mut a, mut b) = (a, b);
    let mut c = b - (b - a) / gr;
    let mut d = a + (b - a) / gr;
    let mut iters = 0usize;
    while (c - d).abs() > tol {
        if func(c) < func(d) {
            b = d;
        } else {
            a = c;
        }
        c = b - (b - a) / gr;
        d = a + (b - a) / gr;
        iters += 1;
    }
    debug!(iters, a = %a, b = %b, "golden section search converged");
    (b + a) / S::from(2).unwrap()
}

/// [`golden_ss`] as a [`LineSearch`], with a fixed tolerance.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GoldenSection<S> {
    pub tol: S,
}

impl<S: NdFloat> GoldenSection<S> {
    #[must_use]
    pub fn new(tol: S) -> Self {
        GoldenSection { tol }
    }
}

impl<S: NdFloat> Default for GoldenSection<S> {
    /// Tolerance of `1e-5`.
    fn default() -> Self {
        GoldenSection {
            tol: S::from(1e-5).unwrap(),
        }
    }
}

impl<S: NdFloat> LineSearch<S> for GoldenSection<S> {
    fn search(&self, func: &mut dyn FnMut(S) -> S, a: S, b: S) -> S {
        golden_ss(func, a, b, self.tol)
    }
}


#[cfg(all(rustc_nightly, test))]
mod benches {
    use super::*;
    use test::Bencher;

    #[bench]
    fn golden_ss_quadratic(b: &mut Bencher) {
        b.iter(|| golden_ss(|x: f64| (x - 3.).powi(2), 0., 10., 1e-8));
    }
}
