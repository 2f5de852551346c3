//! Sequences of Iterates
//!
//! Iterative methods in this crate record the points they visit in a
//! [`Trajectory`]. A trajectory can be bounded so that only the most recent
//! `K` iterates are kept; older iterates are dropped from the front as new
//! ones are pushed, so memory use stays fixed for long runs.

use std::collections::VecDeque;
use std::ops::Index;

use ndarray::prelude::*;

/// Ordered iterates of an optimization method, oldest first.
///
/// A trajectory always holds at least one point: it is created from the
/// initial guess and only ever grows or slides.
#[derive(Clone, Debug, PartialEq)]
pub struct Trajectory<S> {
    iterates: VecDeque<Array1<S>>,
    capacity: Option<usize>,
}

impl<S> Trajectory<S> {
    /// Start a trajectory at `x0`.
    ///
    /// With `num_to_keep = Some(k)` only the last `k` iterates are retained.
    /// `None` and `Some(0)` both keep every iterate.
    pub fn new(x0: Array1<S>, num_to_keep: Option<usize>) -> Self {
        let capacity = num_to_keep.filter(|&k| k > 0);
        let mut iterates = VecDeque::new();
        iterates.push_back(x0);
        Trajectory { iterates, capacity }
    }

    /// Append an iterate, evicting the oldest one if the trajectory is full.
    pub fn push(&mut self, x: Array1<S>) {
        if let Some(k) = self.capacity {
            while self.iterates.len() >= k {
                self.iterates.pop_front();
            }
        }
        self.iterates.push_back(x);
    }

    /// Maximum number of retained iterates, if bounded.
    #[must_use]
    pub fn capacity(&self) -> Option<usize> {
        self.capacity
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.iterates.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.iterates.is_empty()
    }

    /// Oldest retained iterate.
    #[must_use]
    pub fn first(&self) -> Option<&Array1<S>> {
        self.iterates.front()
    }

    /// Most recent iterate.
    #[must_use]
    pub fn last(&self) -> Option<&Array1<S>> {
        self.iterates.back()
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Array1<S>> {
        self.iterates.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Array1<S>> + '_ {
        self.iterates.iter()
    }

    /// Consume the trajectory, returning the iterates oldest first.
    #[must_use]
    pub fn into_vec(self) -> Vec<Array1<S>> {
        self.iterates.into()
    }
}

impl<S> Index<usize> for Trajectory<S> {
    type Output = Array1<S>;

    fn index(&self, index: usize) -> &Self::Output {
        &self.iterates[index]
    }
}

impl<S> IntoIterator for Trajectory<S> {
    type Item = Array1<S>;
    type IntoIter = std::collections::vec_deque::IntoIter<Array1<S>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iterates.into_iter()
    }
}

impl<'a, S> IntoIterator for &'a Trajectory<S> {
    type Item = &'a Array1<S>;
    type IntoIter = std::collections::vec_deque::Iter<'a, Array1<S>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iterates.iter()
    }
}
