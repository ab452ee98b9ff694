use std::fmt;
use std::hash::{
    Hash,
    Hasher
};

use serde::{
    Deserialize,
    Serialize
};

use crate::math::round::quantize;

/// Tolerance used by point equality, on each coordinate independently.
pub const POINT_EPSILON: f64 = 1e-9;

/// Decimal digits kept when hashing a coordinate; matches `POINT_EPSILON`.
const HASH_DIGITS: u32 = 9;

/// One (x, y) sample of a tabulated function.
///
/// Equality is epsilon-tolerant. The hash rounds both coordinates to
/// nine digits, so points that compare equal hash equal unless they sit on
/// opposite sides of a rounding boundary.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct FunctionPoint {
    x: f64,
    y: f64,
}

impl FunctionPoint {
    pub fn new(x: f64, y: f64) -> FunctionPoint {
        FunctionPoint { x, y }
    }

    pub fn x(&self) -> f64 {
        self.x
    }

    pub fn y(&self) -> f64 {
        self.y
    }

    pub fn with_x(&self, x: f64) -> FunctionPoint {
        FunctionPoint { x, y: self.y }
    }

    pub fn with_y(&self, y: f64) -> FunctionPoint {
        FunctionPoint { x: self.x, y }
    }

    /// Linear interpolation at `x` along the segment from `lhs_pt` to `rhs_pt`.
    pub fn interpolate(lhs_pt: &FunctionPoint, rhs_pt: &FunctionPoint, x: f64) -> f64 {
        lhs_pt.y + (rhs_pt.y - lhs_pt.y) * (x - lhs_pt.x) / (rhs_pt.x - lhs_pt.x)
    }
}

impl PartialEq for FunctionPoint {
    fn eq(&self, other: &FunctionPoint) -> bool {
        (self.x - other.x).abs() < POINT_EPSILON && (self.y - other.y).abs() < POINT_EPSILON
    }
}

impl Hash for FunctionPoint {
    fn hash<H: Hasher>(&self, state: &mut H) {
        quantize(self.x, HASH_DIGITS).hash(state);
        quantize(self.y, HASH_DIGITS).hash(state);
    }
}

impl From<(f64, f64)> for FunctionPoint {
    fn from((x, y): (f64, f64)) -> FunctionPoint {
        FunctionPoint::new(x, y)
    }
}

impl fmt::Display for FunctionPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}; {})", self.x, self.y)
    }
}
