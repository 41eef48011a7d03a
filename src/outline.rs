//! The four-region contour polygon of a point set, built from two opposite
//! sweeps of a [`SortedPointSet`].

use crate::error::{EngineError, Result};
use crate::point::Point;
use crate::sorted_point_set::{Order, SortedPointSet};
use crate::sweep_line::SweepLine;

/// One of the four arcs of a convex hull between its extreme points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Region {
    Nw,
    Ne,
    Se,
    Sw,
}

impl Region {
    pub const ALL: [Region; 4] = [Region::Nw, Region::Ne, Region::Se, Region::Sw];
}

/// The contour polygon of a point set: a superset of its convex hull,
/// represented as four chains keyed by [`Region`].
///
/// Invariant: `nw[0] == sw.last()`, `nw.last() == ne[0]`,
/// `ne.last() == se[0]`, `se.last() == sw[0]`: the four chains share
/// endpoints at the extreme points, closing into a single ring.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outline {
    nw: Vec<Point>,
    ne: Vec<Point>,
    se: Vec<Point>,
    sw: Vec<Point>,
}

impl Outline {
    /// Builds the outline of `set` via a left-to-right and a right-to-left
    /// sweep. Requires `set.len() > 3`.
    pub fn of(set: &SortedPointSet) -> Result<Outline> {
        if set.len() <= 3 {
            return Err(EngineError::precondition(format!(
                "Outline::of requires more than 3 distinct points, got {}",
                set.len()
            )));
        }

        let mut left_to_right = SweepLine::new();
        set.apply(&mut left_to_right, Order::LeftToRight);
        let (left_upper, left_lower) = left_to_right.into_chains();

        let mut right_to_left = SweepLine::new();
        set.apply(&mut right_to_left, Order::RightToLeft);
        let (right_upper, right_lower) = right_to_left.into_chains();

        let mut ne = right_upper;
        ne.reverse();

        let mut sw = left_lower;
        sw.reverse();

        Ok(Outline {
            nw: left_upper,
            ne,
            se: right_lower,
            sw,
        })
    }

    pub fn part(&self, region: Region) -> &[Point] {
        match region {
            Region::Nw => &self.nw,
            Region::Ne => &self.ne,
            Region::Se => &self.se,
            Region::Sw => &self.sw,
        }
    }
}
