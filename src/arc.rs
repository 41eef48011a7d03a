//! Arc geometry: the `AngleCalculator` primitives (3-point and 4-point
//! angles from vector scalar products) and the `Arc` type itself (center,
//! radius, start angle, extent angle), plus its constructor from two
//! touching points and an aperture.

use std::f64::consts::PI;

use crate::angle::Angle;
use crate::point::Point;

/// A point in the plane with `f64` coordinates, what an `Arc`'s center
/// actually is, as opposed to the integer [`Point`] the rest of the engine
/// works with.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FPoint {
    pub x: f64,
    pub y: f64,
}

impl FPoint {
    pub const fn new(x: f64, y: f64) -> Self {
        FPoint { x, y }
    }
}

fn dot(u: (f64, f64), v: (f64, f64)) -> f64 {
    u.0 * v.0 + u.1 * v.1
}

fn magnitude(u: (f64, f64)) -> f64 {
    (u.0 * u.0 + u.1 * u.1).sqrt()
}

/// `acos( u . v / (|u| |v|) )`, in `[0, π]`. `NaN` if either vector has zero
/// magnitude; callers must avoid degenerate (coincident) inputs.
fn angle_between_vectors(u: (f64, f64), v: (f64, f64)) -> f64 {
    (dot(u, v) / (magnitude(u) * magnitude(v))).acos()
}

/// The 3-point angle `angle_of(A, B, C)`: the unsigned angle at vertex `B`
/// between rays `BA` and `BC`.
pub fn angle_of(a: Point, b: Point, c: Point) -> f64 {
    let ba = (a.x as f64 - b.x as f64, a.y as f64 - b.y as f64);
    let bc = (c.x as f64 - b.x as f64, c.y as f64 - b.y as f64);
    angle_between_vectors(ba, bc)
}

/// The 4-point angle `angle_of(A, B, C, D) = angle_of(A−B, O, D−C)`: the
/// unsigned angle between vectors `AB` and `CD`, derived via vectors
/// anchored at the origin rather than a shared vertex.
pub fn angle_of4(a: Point, b: Point, c: Point, d: Point) -> f64 {
    let ab = (a.x as f64 - b.x as f64, a.y as f64 - b.y as f64);
    let dc = (d.x as f64 - c.x as f64, d.y as f64 - c.y as f64);
    angle_between_vectors(ab, dc)
}

/// A circular arc: center, radius, absolute start angle `rho`, signed
/// extent angle `beta`.
///
/// `rho` is stored exactly as computed by [`Arc::of`] or
/// [`Arc::cut_arc`], never reduced modulo `2π`. See `SPEC_FULL.md`
/// §9 for why normalization is left to the caller.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Arc {
    center: FPoint,
    radius: f64,
    rho: Angle,
    beta: Angle,
}

impl Arc {
    /// Builds the arc through touching points `a`, `b` with aperture
    /// `alpha`. Assumes `alpha` has already been validated to lie in
    /// `(0°, 180°)` by the caller (`generate_angle_hull` does this once per
    /// query rather than once per arc).
    pub fn of(a: Point, b: Point, alpha: Angle) -> Arc {
        let (ax, ay) = a.as_f64();
        let (bx, by) = b.as_f64();
        let alpha_rad = alpha.radians();

        let mx = (ax + bx) / 2.0;
        let my = (ay + by) / 2.0;

        let d = a.distance(b);
        let k = -d / (2.0 * alpha_rad.tan());
        let scale = k / d;
        let wx = (ay - by) * scale;
        let wy = (bx - ax) * scale;

        let zx = mx + wx;
        let zy = my + wy;

        let r = d / (2.0 * alpha_rad.sin());

        let mut rho = angle_between_vectors((1.0, 0.0), (ax - zx, ay - zy));
        if ay < zy {
            rho = 2.0 * PI - rho;
        }

        let beta = 2.0 * (PI - alpha_rad);

        Arc {
            center: FPoint::new(zx, zy),
            radius: r,
            rho: Angle::from_rad(rho),
            beta: Angle::from_rad(beta),
        }
    }

    /// `Arc(z, r, rho + rho_s, beta - rho_s - rho_e)`: the same arc,
    /// trimmed at both ends to (approximately) abut its neighbors instead
    /// of overlapping them.
    pub fn cut_arc(&self, rho_s: Angle, rho_e: Angle) -> Arc {
        Arc {
            center: self.center,
            radius: self.radius,
            rho: self.rho.add(rho_s),
            beta: self.beta.subtract(rho_s).subtract(rho_e),
        }
    }

    pub fn center(&self) -> FPoint {
        self.center
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    pub fn rho(&self) -> Angle {
        self.rho
    }

    pub fn beta(&self) -> Angle {
        self.beta
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn right_angle_between_perpendicular_vectors() {
        let theta = angle_of(Point::new(1, 0), Point::new(0, 0), Point::new(0, 1));
        assert_abs_diff_eq!(theta, PI / 2.0, epsilon = 1e-9);
    }

    #[test]
    fn angle_of4_matches_vector_angle() {
        // AB = (1, 0), CD = (0, 1): perpendicular.
        let theta = angle_of4(
            Point::new(1, 0),
            Point::new(0, 0),
            Point::new(5, 5),
            Point::new(5, 6),
        );
        assert_abs_diff_eq!(theta, PI / 2.0, epsilon = 1e-9);
    }

    #[test]
    fn arc_incidence_holds_for_both_touching_points() {
        // Testable property 6
        let a = Point::new(0, 0);
        let b = Point::new(10, 0);
        let alpha = Angle::from_deg(90.0);
        let arc = Arc::of(a, b, alpha);

        let (ax, ay) = a.as_f64();
        let (bx, by) = b.as_f64();
        let da = ((ax - arc.center().x).powi(2) + (ay - arc.center().y).powi(2)).sqrt();
        let db = ((bx - arc.center().x).powi(2) + (by - arc.center().y).powi(2)).sqrt();

        assert_abs_diff_eq!(da, arc.radius(), epsilon = 1e-9);
        assert_abs_diff_eq!(db, arc.radius(), epsilon = 1e-9);
    }

    #[test]
    fn cut_arc_trims_start_and_extent() {
        let arc = Arc::of(Point::new(0, 0), Point::new(10, 0), Angle::from_deg(60.0));
        let rho_s = Angle::from_rad(0.1);
        let rho_e = Angle::from_rad(0.2);
        let cut = arc.cut_arc(rho_s, rho_e);

        assert_abs_diff_eq!(cut.rho().radians(), arc.rho().radians() + 0.1, epsilon = 1e-12);
        assert_abs_diff_eq!(
            cut.beta().radians(),
            arc.beta().radians() - 0.1 - 0.2,
            epsilon = 1e-12
        );
    }
}
