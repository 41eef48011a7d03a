//! A radian-valued angle with a total order but no modular normalization.
//!
//! Callers that need a canonical `[0, 2π)` range must reduce it themselves;
//! see the open question recorded in `SPEC_FULL.md` §9 on why `Arc` does not
//! do this reduction on their behalf.

use std::cmp::Ordering;
use std::f64::consts::PI;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Angle {
    radians: f64,
}

impl Angle {
    pub const ZERO: Angle = Angle { radians: 0.0 };

    pub const fn from_rad(radians: f64) -> Self {
        Angle { radians }
    }

    pub fn from_deg(degrees: f64) -> Self {
        Angle::from_rad(degrees * PI / 180.0)
    }

    pub fn radians(self) -> f64 {
        self.radians
    }

    pub fn degrees(self) -> f64 {
        self.radians * 180.0 / PI
    }

    pub fn times_two(self) -> Angle {
        Angle::from_rad(self.radians * 2.0)
    }

    pub fn add(self, other: Angle) -> Angle {
        Angle::from_rad(self.radians + other.radians)
    }

    pub fn subtract(self, other: Angle) -> Angle {
        Angle::from_rad(self.radians - other.radians)
    }
}

impl Eq for Angle {}

impl PartialOrd for Angle {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Angle {
    fn cmp(&self, other: &Self) -> Ordering {
        self.radians
            .partial_cmp(&other.radians)
            .unwrap_or(Ordering::Equal)
    }
}

impl fmt::Display for Angle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} rad", self.radians)
    }
}
