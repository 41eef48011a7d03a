//! The signed shoelace-style determinant of three points.
//!
//! Only the *sign* of this value is ever consulted by the rest of the
//! engine, but the magnitude still has to survive 32-bit coordinates
//! without overflowing, so every sub-expression below is computed in `i64`.

use crate::point::Point;

/// `(Cx−Ax)(Cy+Ay) + (Bx−Cx)(By+Cy) + (Ax−Bx)(Ay+By)`.
///
/// Negative means a right turn under this engine's y-down (image)
/// orientation; zero means collinear; positive means a left turn. See
/// `SPEC_FULL.md` §9 for why this sign convention, not the textbook y-up
/// one, governs `ConvexHullPart`'s straightening and `AngleHull`'s `wvt`.
pub fn determinant(a: Point, b: Point, c: Point) -> i64 {
    let (ax, ay) = (a.x as i64, a.y as i64);
    let (bx, by) = (b.x as i64, b.y as i64);
    let (cx, cy) = (c.x as i64, c.y as i64);

    (cx - ax) * (cy + ay) + (bx - cx) * (by + cy) + (ax - bx) * (ay + by)
}
