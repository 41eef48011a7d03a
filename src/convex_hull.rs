//! The top-level, incrementally updatable convex hull.

use std::collections::HashSet;

use crate::hull_part::ConvexHullPart;
use crate::outline::{Outline, Region};
use crate::point::Point;
use crate::sorted_point_set::SortedPointSet;

/// Either a small hull (fewer than 4 points, stored verbatim) or a big hull
/// (four straightened [`ConvexHullPart`]s plus the [`Outline`] they were
/// built from, kept around so [`ConvexHull::update`] can tell which regions
/// changed).
#[derive(Debug, Clone, PartialEq, Eq)]
enum State {
    Small(Vec<Point>),
    Big {
        outline: Outline,
        nw: ConvexHullPart,
        ne: ConvexHullPart,
        se: ConvexHullPart,
        sw: ConvexHullPart,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConvexHull {
    state: State,
}

impl ConvexHull {
    /// Sorts and deduplicates `points`; builds a `Small` hull below 4
    /// points, otherwise a `Big` hull from a freshly built [`Outline`].
    ///
    /// Never fails: an empty or tiny input simply yields a `Small` hull
    /// containing whatever was given.
    pub fn build(points: &[Point]) -> ConvexHull {
        let set = SortedPointSet::of(points.iter().copied());
        ConvexHull {
            state: Self::state_from(&set),
        }
    }

    /// Rebuilds the hull from `points`. Region chains that are unchanged
    /// from the previous build (structurally equal) reuse their previously
    /// computed [`ConvexHullPart`] rather than re-straightening them.
    pub fn update(&self, points: &[Point]) -> ConvexHull {
        let set = SortedPointSet::of(points.iter().copied());

        let old_outline = match &self.state {
            State::Big { outline, .. } => Some(outline),
            State::Small(_) => None,
        };

        if set.len() < 4 {
            return ConvexHull {
                state: State::Small(set.as_vec()),
            };
        }

        let new_outline = match Outline::of(&set) {
            Ok(outline) => outline,
            Err(_) => unreachable!("set.len() >= 4 was just checked"),
        };

        let part_for = |region: Region| -> ConvexHullPart {
            let new_chain = new_outline.part(region);
            if let Some(old_outline) = old_outline {
                if old_outline.part(region) == new_chain {
                    if let State::Big { nw, ne, se, sw, .. } = &self.state {
                        return match region {
                            Region::Nw => nw.clone(),
                            Region::Ne => ne.clone(),
                            Region::Se => se.clone(),
                            Region::Sw => sw.clone(),
                        };
                    }
                }
            }
            ConvexHullPart::calculate(new_chain)
        };

        ConvexHull {
            state: State::Big {
                nw: part_for(Region::Nw),
                ne: part_for(Region::Ne),
                se: part_for(Region::Se),
                sw: part_for(Region::Sw),
                outline: new_outline,
            },
        }
    }

    /// The hull's points in clockwise screen order, with duplicates removed
    /// (keeping the first occurrence). For `Big` hulls this is the
    /// concatenation of `NW, NE, SE, SW`.
    pub fn points(&self) -> Vec<Point> {
        let raw: Vec<Point> = match &self.state {
            State::Small(points) => points.clone(),
            State::Big { nw, ne, se, sw, .. } => nw
                .points()
                .iter()
                .chain(ne.points())
                .chain(se.points())
                .chain(sw.points())
                .copied()
                .collect(),
        };

        let mut seen = HashSet::with_capacity(raw.len());
        raw.into_iter().filter(|p| seen.insert(*p)).collect()
    }

    pub fn is_small(&self) -> bool {
        matches!(self.state, State::Small(_))
    }

    fn state_from(set: &SortedPointSet) -> State {
        if set.len() < 4 {
            return State::Small(set.as_vec());
        }
        let outline = Outline::of(set).unwrap_or_else(|_| {
            unreachable!("set.len() >= 4 guarantees Outline::of succeeds")
        });
        State::Big {
            nw: ConvexHullPart::calculate(outline.part(Region::Nw)),
            ne: ConvexHullPart::calculate(outline.part(Region::Ne)),
            se: ConvexHullPart::calculate(outline.part(Region::Se)),
            sw: ConvexHullPart::calculate(outline.part(Region::Sw)),
            outline,
        }
    }
}
