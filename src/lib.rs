//! The `ndarray-fom` crate provides classical first-order optimization
//! routines for functions of a one-dimensional `ndarray`.
//!
//! It includes:
//! - Projected Gradient Descent with a step-size schedule
//! - Conditional Gradient (Frank-Wolfe) with linear minimization oracles
//! - Golden Section Search
//! - Random Search along sampled directions
//! - a checked calling convention for 1D fused-lasso proximal kernels
//!
//! Every routine takes its callbacks (gradients, oracles, projections,
//! line searches, random number generators) as explicit arguments, so each
//! call is self contained and reproducible. Iterative methods return a
//! [`Trajectory`](trajectory::Trajectory) of iterates, which can be bounded
//! to keep only the most recent points.
//!
//! Progress is reported through the `tracing` crate at `trace` and `debug`
//! level; install a subscriber in the host program to see it.

#![cfg_attr(all(rustc_nightly, test), feature(test))]
#[cfg(all(rustc_nightly, test))]
extern crate test;

pub mod direct;
pub mod error;
pub mod operator;
pub mod prox;
pub mod schedule;
pub mod smooth;
pub mod trajectory;
