//! Step Size Schedules
//!
//! A schedule is any `IntoIterator` of step sizes; one entry is consumed per
//! iteration and its length sets the number of iterations. A plain `Vec` or
//! array works, and the constructors here build the common ones lazily.

use num_traits::Float;

/// `n` copies of `step`.
pub fn constant<S: Float>(step: S, n: usize) -> impl Iterator<Item = S> + Clone {
    std::iter::repeat(step).take(n)
}

/// The open-loop Frank-Wolfe schedule $`\gamma_k = \frac{2}{k+2}`$ for `k = 0..n`.
///
/// The first step is exactly one, so conditional gradient jumps straight to
/// the first oracle point.
pub fn open_loop<S: Float>(n: usize) -> impl Iterator<Item = S> + Clone {
    let two = S::from(2.).unwrap();
    (0..n).map(move |k| two / (S::from(k).unwrap() + two))
}

/// Diminishing steps $`\gamma_k = \frac{c}{\sqrt{k+1}}`$ for `k = 0..n`.
pub fn inverse_sqrt<S: Float>(c: S, n: usize) -> impl Iterator<Item = S> + Clone {
    (0..n).map(move |k| c / (S::from(k).unwrap() + S::one()).sqrt())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn constant_length() {
        let steps: Vec<f64> = constant(0.1, 4).collect();
        assert_eq!(steps, vec![0.1; 4]);
        assert_eq!(constant(1f32, 0).count(), 0);
    }

    #[test]
    fn open_loop_values() {
        let steps: Vec<f64> = open_loop(4).collect();
        assert_eq!(steps[0], 1.0);
        assert_abs_diff_eq!(steps[1], 2. / 3.);
        assert_abs_diff_eq!(steps[2], 0.5);
        assert_abs_diff_eq!(steps[3], 0.4);
    }

    #[test]
    fn inverse_sqrt_values() {
        let steps: Vec<f64> = inverse_sqrt(2.0, 4).collect();
        assert_abs_diff_eq!(steps[0], 2.0);
        assert_abs_diff_eq!(steps[3], 1.0);
        assert!(steps.windows(2).all(|w| w[1] < w[0]));
    }
}
