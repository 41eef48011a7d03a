//! A deduplicated, lexicographically ordered set of points.

use std::collections::BTreeSet;

use crate::point::Point;
use crate::sweep_line::SweepLine;

/// The traversal direction to feed points into a [`SweepLine`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Order {
    /// Ascending by x then y.
    LeftToRight,
    /// Descending by x then y.
    RightToLeft,
}

/// A set of points with duplicates removed, ordered by [`Point`]'s total
/// order. Backed by a `BTreeSet` so both traversal directions and insertion
/// are all `O(log n)`.
#[derive(Debug, Clone)]
pub struct SortedPointSet {
    points: BTreeSet<Point>,
}

impl SortedPointSet {
    /// Builds a set from an input list, dropping duplicates.
    pub fn of(points: impl IntoIterator<Item = Point>) -> Self {
        SortedPointSet {
            points: points.into_iter().collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Ascending traversal, x primary then y.
    pub fn ascending(&self) -> impl Iterator<Item = Point> + '_ {
        self.points.iter().copied()
    }

    /// Descending traversal, x primary then y.
    pub fn descending(&self) -> impl Iterator<Item = Point> + '_ {
        self.points.iter().rev().copied()
    }

    pub fn as_vec(&self) -> Vec<Point> {
        self.ascending().collect()
    }

    /// Feeds this set's points into `sweep_line` in the given traversal
    /// order.
    pub fn apply(&self, sweep_line: &mut SweepLine, order: Order) {
        match order {
            Order::LeftToRight => {
                for p in self.ascending() {
                    sweep_line.discover(p);
                }
            }
            Order::RightToLeft => {
                for p in self.descending() {
                    sweep_line.discover(p);
                }
            }
        }
    }
}
