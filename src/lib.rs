//! A convex hull and α-angle hull geometry engine.
//!
//! The engine is organized bottom-up: [`point`] and [`angle`] are the value
//! types everything else is built from; [`sorted_point_set`], [`sweep_line`],
//! [`outline`] and [`hull_part`] are the three phases that turn an unordered
//! point set into a [`convex_hull::ConvexHull`]; [`circular_list`], [`arc`]
//! and [`angle_hull`] turn a convex hull into an
//! [`angle_hull::AngleHull`]. [`io`] is the ambient, non-geometric concern of
//! getting points in and out of a file.

pub mod angle;
pub mod angle_hull;
pub mod arc;
pub mod circular_list;
pub mod convex_hull;
pub mod determinant;
pub mod error;
pub mod hull_part;
pub mod io;
pub mod outline;
pub mod point;
pub mod sorted_point_set;
pub mod sweep_line;

pub use angle::Angle;
pub use angle_hull::{generate_angle_hull, AngleHull, CuttingStrategy};
pub use arc::Arc;
pub use convex_hull::ConvexHull;
pub use error::{EngineError, Result};
pub use point::Point;
