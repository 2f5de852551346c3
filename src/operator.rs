//! Projections onto Feasible Sets
//!
//! Projected methods map each trial point back onto the feasible set with a
//! [`Projection`]. Any closure `Fn(Array1<S>) -> Array1<S>` is a projection,
//! and a few common sets are provided as types. [`Identity`] turns projected
//! gradient descent into plain gradient descent.

use std::marker::PhantomData;

use ndarray::prelude::*;
use ndarray::NdFloat;

/// A map from points to points of the same shape, applied after each step.
///
/// The point is passed by value so implementations can work in place.
pub trait Projection<S> {
    fn project(&self, x: Array1<S>) -> Array1<S>;
}

impl<S, F> Projection<S> for F
where
    F: Fn(Array1<S>) -> Array1<S>,
{
    #[inline]
    fn project(&self, x: Array1<S>) -> Array1<S> {
        self(x)
    }
}

/// The do-nothing projection, for unconstrained problems.
#[derive(Clone, Copy, Debug, Default)]
pub struct Identity<A> {
    phantom: PhantomData<*const A>,
}

impl<A> Identity<A> {
    #[must_use]
    pub fn new() -> Identity<A> {
        Identity {
            phantom: PhantomData,
        }
    }
}

impl<A> Projection<A> for Identity<A> {
    #[inline]
    fn project(&self, x: Array1<A>) -> Array1<A> {
        x
    }
}

/// Elementwise clipping onto the box $`[\ell, u]^n`$.
///
/// Use an infinite bound for a one-sided constraint, e.g. the nonnegative
/// orthant is `Clip::new(0., f64::INFINITY)`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Clip<S> {
    pub lower: S,
    pub upper: S,
}

impl<S: NdFloat> Clip<S> {
    /// # Panics
    /// if `lower > upper`
    #[must_use]
    pub fn new(lower: S, upper: S) -> Self {
        assert!(lower <= upper, "empty box: lower bound exceeds upper bound");
        Clip { lower, upper }
    }
}

impl<S: NdFloat> Projection<S> for Clip<S> {
    fn project(&self, mut x: Array1<S>) -> Array1<S> {
        let (lower, upper) = (self.lower, self.upper);
        x.mapv_inplace(|xi| xi.max(lower).min(upper));
        x
    }
}

/// Radial projection onto the Euclidean ball $`\{x : \|x - c\|_2 \leq r\}`$.
#[derive(Clone, Debug, PartialEq)]
pub struct L2Ball<S> {
    pub center: Option<Array1<S>>,
    pub radius: S,
}

impl<S: NdFloat> L2Ball<S> {
    /// Ball of `radius` around the origin.
    ///
    /// # Panics
    /// if `radius` is negative
    #[must_use]
    pub fn new(radius: S) -> Self {
        assert!(radius >= S::zero(), "ball radius must be nonnegative");
        L2Ball {
            center: None,
            radius,
        }
    }

    /// Move the ball to `center`.
    #[must_use]
    pub fn with_center(mut self, center: Array1<S>) -> Self {
        self.center = Some(center);
        self
    }
}

impl<S: NdFloat> Projection<S> for L2Ball<S> {
    fn project(&self, mut x: Array1<S>) -> Array1<S> {
        if let Some(c) = &self.center {
            x -= c;
        }
        let norm = x.dot(&x).sqrt();
        if norm > self.radius {
            x *= self.radius / norm;
        }
        if let Some(c) = &self.center {
            x += c;
        }
        x
    }
}
