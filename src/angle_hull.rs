//! The rotating-caterpillar walk that turns a convex hull into the sequence
//! of arcs forming its α-angle hull.

use std::f64::consts::PI;

use crate::angle::Angle;
use crate::arc::{angle_of, angle_of4, Arc};
use crate::circular_list::{CircularList, Entry};
use crate::convex_hull::ConvexHull;
use crate::determinant::determinant;
use crate::error::{EngineError, Result};
use crate::point::Point;

/// Which member of an emitted arc pair a consumer wants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CuttingStrategy {
    /// Arcs preserved to overlap their neighbors (no sub-pixel gaps, but
    /// boundary overlap).
    Uncut,
    /// Arcs trimmed by ρ_s/ρ_e to approximately abut (no overlap, but
    /// possible sub-pixel gaps).
    Cut,
}

/// The ordered sequence of arc pairs `(uncut, cut)` making up an α-angle
/// hull. Always closed: [`generate_angle_hull`] only returns a value once
/// the caterpillar walk has revisited both of its starting entries.
#[derive(Debug, Clone)]
pub struct AngleHull {
    arcs: Vec<(Arc, Arc)>,
}

impl AngleHull {
    pub fn len(&self) -> usize {
        self.arcs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.arcs.is_empty()
    }

    /// The hull is closed iff the walk terminated; since [`generate_angle_hull`]
    /// never returns a value for a walk that didn't, this is always `true`.
    pub fn is_closed(&self) -> bool {
        true
    }

    pub fn arcs(&self) -> &[(Arc, Arc)] {
        &self.arcs
    }

    /// Maps `collector` over one arc per pair, `strategy` choosing the
    /// uncut or cut member. Restartable: each call produces a fresh
    /// iterator from the stored arc pairs.
    pub fn map_with<'a, T>(
        &'a self,
        strategy: CuttingStrategy,
        mut collector: impl FnMut(&Arc) -> T + 'a,
    ) -> impl Iterator<Item = T> + 'a {
        self.arcs.iter().map(move |(uncut, cut)| {
            let arc = match strategy {
                CuttingStrategy::Uncut => uncut,
                CuttingStrategy::Cut => cut,
            };
            collector(arc)
        })
    }
}

/// The walk's "angle comparison test": `(D > 0) ∧ (θ ≥ α)`, where
/// `D = Determinant(b−a, d−c, ORIGIN)` and `θ = angle_of(a, b, c, d)`.
fn wvt(a: &Entry, b: &Entry, c: &Entry, d: &Entry, alpha: Angle) -> bool {
    let ba = b.get().subtract(a.get());
    let dc = d.get().subtract(c.get());
    let determinant_positive = determinant(ba, dc, Point::ORIGIN) > 0;
    let theta = angle_of4(a.get(), b.get(), c.get(), d.get());
    determinant_positive && theta >= alpha.radians()
}

/// The walk never runs longer than this many steps. A correct caterpillar
/// walk over a convex hull always closes well before this; tripping it
/// indicates a broken invariant rather than a slow but valid hull.
const MAX_WALK_STEPS: usize = 1_000_000;

/// Builds the α-angle hull of `hull`'s convex hull points.
///
/// Fails with a `PreconditionError` if `alpha` is outside `(0°, 180°)`, or
/// if `hull` has fewer than 4 distinct points (a straight line or smaller
/// hull has no well-defined angle hull).
pub fn generate_angle_hull(hull: &ConvexHull, alpha: Angle) -> Result<AngleHull> {
    if !(alpha.radians() > 0.0 && alpha.radians() < PI) {
        return Err(EngineError::precondition(format!(
            "aperture must lie strictly within (0, pi) radians, got {}",
            alpha.radians()
        )));
    }

    let mut points = hull.points();
    points.reverse();

    if points.len() < 4 {
        return Err(EngineError::precondition(format!(
            "angle hull requires at least 4 distinct hull points, got {}",
            points.len()
        )));
    }

    let list = CircularList::new(points)?;
    walk(&list, alpha)
}

fn walk(list: &CircularList, alpha: Angle) -> Result<AngleHull> {
    let mut ls = list.entry(0);
    let mut rs = list.entry(0);

    while wvt(&ls.prev(), &ls, &rs, &rs.next(), alpha) {
        rs = rs.next();
    }

    let mut rho_ss: f64;
    if ls == rs {
        rs = rs.next();
        rho_ss = 0.0;
    } else {
        rho_ss = (angle_of(rs.get(), ls.get(), ls.prev().get()) - alpha.radians()) * 2.0;
    }

    let ls_final = ls;
    let rs_final = rs;

    let mut ll = ls_final.clone();
    let mut rr = rs_final.clone();

    let mut arcs = Vec::new();

    for _ in 0..MAX_WALK_STEPS {
        let l = ll.clone();
        let r = rr.clone();
        let rho_s = rho_ss;
        let rho_e;

        if wvt(&l, &l.next(), &r, &r.next(), alpha) {
            if wvt(&l, &r, &r, &r.next(), alpha) {
                rho_e = (angle_of(r.next().get(), r.get(), l.get()) - alpha.radians()) * 2.0;
                rho_ss = angle_of(l.get(), r.next().get(), r.get()) * 2.0;
            } else {
                rho_e = 0.0;
                rho_ss = 0.0;
            }
            rr = r.next();
        } else if l.next() == r {
            rho_e = 0.0;
            rho_ss = 0.0;
            rr = r.next();
            ll = l.next();
        } else {
            rho_e = angle_of(l.next().get(), l.get(), r.get()) * 2.0;
            rho_ss = (angle_of(r.get(), l.next().get(), l.get()) - alpha.radians()) * 2.0;
            ll = l.next();
        }

        let uncut = Arc::of(l.get(), r.get(), alpha);
        let cut = uncut.cut_arc(Angle::from_rad(rho_s), Angle::from_rad(rho_e));
        arcs.push((uncut, cut));

        if ll == ls_final && rr == rs_final {
            return Ok(AngleHull { arcs });
        }
    }

    Err(EngineError::invariant(
        "angle hull walk did not close within the step budget",
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::point::Point;

    fn square_hull() -> ConvexHull {
        ConvexHull::build(&[
            Point::new(0, 0),
            Point::new(10, 0),
            Point::new(0, 10),
            Point::new(10, 10),
        ])
    }

    #[test]
    fn rejects_alpha_out_of_range() {
        assert!(generate_angle_hull(&square_hull(), Angle::from_deg(0.0)).is_err());
        assert!(generate_angle_hull(&square_hull(), Angle::from_deg(180.0)).is_err());
        assert!(generate_angle_hull(&square_hull(), Angle::from_deg(-5.0)).is_err());
    }

    #[test]
    fn rejects_small_hulls() {
        let triangle = ConvexHull::build(&[Point::new(0, 0), Point::new(5, 5), Point::new(10, 0)]);
        assert!(generate_angle_hull(&triangle, Angle::from_deg(90.0)).is_err());
    }

    #[test]
    fn square_at_90_degrees_emits_four_arcs() {
        // S1
        let hull = square_hull();
        let angle_hull = generate_angle_hull(&hull, Angle::from_deg(90.0)).unwrap();
        assert_eq!(angle_hull.len(), 4);
        assert!(angle_hull.is_closed());
    }

    #[test]
    fn arc_count_is_at_least_hull_point_count() {
        // Testable property 7 (lower bound; no duplicate-sharp-corner hull here)
        let hull = square_hull();
        let angle_hull = generate_angle_hull(&hull, Angle::from_deg(45.0)).unwrap();
        assert!(angle_hull.len() >= hull.points().len());
    }

    #[test]
    fn map_with_selects_uncut_or_cut_per_strategy() {
        let hull = square_hull();
        let angle_hull = generate_angle_hull(&hull, Angle::from_deg(90.0)).unwrap();

        let uncut_radii: Vec<f64> = angle_hull
            .map_with(CuttingStrategy::Uncut, |arc| arc.radius())
            .collect();
        let cut_radii: Vec<f64> = angle_hull
            .map_with(CuttingStrategy::Cut, |arc| arc.radius())
            .collect();

        // Cutting never changes the circle an arc lies on, only its span.
        assert_eq!(uncut_radii, cut_radii);
        assert_eq!(uncut_radii.len(), 4);
    }

    #[test]
    fn map_with_is_restartable() {
        let hull = square_hull();
        let angle_hull = generate_angle_hull(&hull, Angle::from_deg(90.0)).unwrap();

        let first_pass: Vec<f64> = angle_hull
            .map_with(CuttingStrategy::Uncut, |arc| arc.radius())
            .collect();
        let second_pass: Vec<f64> = angle_hull
            .map_with(CuttingStrategy::Uncut, |arc| arc.radius())
            .collect();
        assert_eq!(first_pass, second_pass);
    }
}
