use std::fmt;
use std::hash::{
    Hash,
    Hasher
};

use crate::function::function::Function;
use crate::function::functionerror::{
    FunctionError,
    Result
};
use crate::tabulated::functionpoint::FunctionPoint;
use crate::tabulated::tabulatedfunctionfactory::TabulatedFunctionType;

/// Tolerance for X ordering checks and for snapping `value` onto a sample.
pub const STORE_EPSILON: f64 = 1e-10;

/// A piecewise-linear function given by samples strictly increasing in X.
///
/// Implementations hold at least two points at all times. Mutations only
/// check the ordering against the adjacent points, so every operation is
/// O(n) at worst. Nothing here is synchronised; a single instance must not
/// be mutated from several threads at once.
///
/// Two tabulated functions are equal when their point sequences are,
/// whatever the backing store; see [`points_equal`] and [`hash_points`].
pub trait TabulatedFunction: Function + fmt::Debug + fmt::Display {
    fn function_type(&self) -> TabulatedFunctionType;

    /// Smallest point count `delete_point` leaves behind.
    fn min_points_count(&self) -> usize;

    fn points_count(&self) -> usize;

    fn point(&self, index: usize) -> Result<FunctionPoint>;

    fn point_x(&self, index: usize) -> Result<f64> {
        Ok(self.point(index)?.x())
    }

    fn point_y(&self, index: usize) -> Result<f64> {
        Ok(self.point(index)?.y())
    }

    fn set_point(&mut self, index: usize, point: FunctionPoint) -> Result<()>;

    fn set_point_x(&mut self, index: usize, x: f64) -> Result<()> {
        let point = self.point(index)?;
        self.set_point(index, point.with_x(x))
    }

    fn set_point_y(&mut self, index: usize, y: f64) -> Result<()>;

    /// Inserts `point` at the position its X dictates.
    fn add_point(&mut self, point: FunctionPoint) -> Result<()>;

    fn delete_point(&mut self, index: usize) -> Result<()>;

    /// Copies of the points, first to last. Each call starts a new pass.
    fn iter(&self) -> Box<dyn Iterator<Item = FunctionPoint> + '_>;

    fn clone_box(&self) -> Box<dyn TabulatedFunction>;

    fn points(&self) -> Vec<FunctionPoint> {
        self.iter().collect()
    }
}

// ─────────────────────────────────────────────
// Structural equality / hash
// ─────────────────────────────────────────────

pub fn points_equal<A, B>(lhs: &A, rhs: &B) -> bool
where
    A: TabulatedFunction + ?Sized,
    B: TabulatedFunction + ?Sized,
{
    lhs.points_count() == rhs.points_count()
        && lhs.iter().zip(rhs.iter()).all(|(p, q)| p == q)
}

pub fn hash_points<T, H>(function: &T, state: &mut H)
where
    T: TabulatedFunction + ?Sized,
    H: Hasher,
{
    function.points_count().hash(state);
    for point in function.iter() {
        point.hash(state);
    }
}

pub fn fmt_points<T>(function: &T, f: &mut fmt::Formatter<'_>) -> fmt::Result
where
    T: TabulatedFunction + ?Sized,
{
    write!(f, "{{")?;
    for (i, point) in function.iter().enumerate() {
        if i > 0 {
            write!(f, ", ")?;
        }
        write!(f, "{point}")?;
    }
    write!(f, "}}")
}

impl PartialEq for dyn TabulatedFunction + '_ {
    fn eq(&self, other: &Self) -> bool {
        points_equal(self, other)
    }
}

impl Hash for dyn TabulatedFunction + '_ {
    fn hash<H: Hasher>(&self, state: &mut H) {
        hash_points(self, state)
    }
}

impl Clone for Box<dyn TabulatedFunction> {
    fn clone(&self) -> Self {
        self.clone_box()
    }
}

// ─────────────────────────────────────────────
// Helpers shared by the stores
// ─────────────────────────────────────────────

pub(crate) fn check_bounds(left_x: f64, right_x: f64) -> Result<()> {
    if !left_x.is_finite() || !right_x.is_finite() {
        return Err(FunctionError::argument(format!(
            "domain borders must be finite, got [{left_x}, {right_x}]"
        )));
    }
    if left_x >= right_x {
        return Err(FunctionError::argument(format!(
            "left border {left_x} is not below right border {right_x}"
        )));
    }
    Ok(())
}

/// Evenly spaced points over `[left_x, right_x]` carrying `values`.
///
/// The last X is pinned to `right_x` so the domain matches exactly.
pub(crate) fn uniform_points(left_x: f64, right_x: f64, values: &[f64]) -> Result<Vec<FunctionPoint>> {
    check_bounds(left_x, right_x)?;
    if values.len() < 2 {
        return Err(FunctionError::argument(format!(
            "at least 2 points are required, got {}",
            values.len()
        )));
    }

    let last = values.len() - 1;
    let step = (right_x - left_x) / last as f64;
    let points: Vec<FunctionPoint> = values
        .iter()
        .enumerate()
        .map(|(i, &y)| {
            let x = if i == last { right_x } else { left_x + step * i as f64 };
            FunctionPoint::new(x, y)
        })
        .collect();
    // the grid itself must keep neighbours more than STORE_EPSILON apart
    validate_points(&points).map_err(|_| {
        FunctionError::argument(format!(
            "{} points over [{left_x}, {right_x}] are closer than {STORE_EPSILON}",
            values.len()
        ))
    })?;
    Ok(points)
}

pub(crate) fn validate_points(points: &[FunctionPoint]) -> Result<()> {
    if points.len() < 2 {
        return Err(FunctionError::argument(format!(
            "at least 2 points are required, got {}",
            points.len()
        )));
    }
    if let Some(point) = points.iter().find(|p| !p.x().is_finite()) {
        return Err(FunctionError::argument(format!("point {point} has a non-finite x")));
    }
    for pair in points.windows(2) {
        if pair[1].x() <= pair[0].x() + STORE_EPSILON {
            return Err(FunctionError::argument(format!(
                "points must be strictly increasing in x: {} then {}",
                pair[0], pair[1]
            )));
        }
    }
    Ok(())
}

/// Checks that `x` fits strictly between the neighbouring X values.
pub(crate) fn check_neighbours(prev_x: Option<f64>, next_x: Option<f64>, x: f64) -> Result<()> {
    if !x.is_finite() {
        return Err(FunctionError::order(format!("x {x} is not finite")));
    }
    if let Some(prev_x) = prev_x {
        if x <= prev_x + STORE_EPSILON {
            return Err(FunctionError::order(format!(
                "x {x} is not greater than previous x {prev_x}"
            )));
        }
    }
    if let Some(next_x) = next_x {
        if x >= next_x - STORE_EPSILON {
            return Err(FunctionError::order(format!(
                "x {x} is not less than next x {next_x}"
            )));
        }
    }
    Ok(())
}

/// Piecewise-linear value at `x`; the caller has already checked the domain.
pub(crate) fn interpolate<I>(points: I, x: f64) -> f64
where
    I: IntoIterator<Item = FunctionPoint>,
{
    let mut iter = points.into_iter();
    let Some(mut lhs) = iter.next() else {
        return f64::NAN;
    };
    if (x - lhs.x()).abs() < STORE_EPSILON {
        return lhs.y();
    }
    for rhs in iter {
        if (x - rhs.x()).abs() < STORE_EPSILON {
            return rhs.y();
        }
        if x > lhs.x() && x < rhs.x() {
            return FunctionPoint::interpolate(&lhs, &rhs, x);
        }
        lhs = rhs;
    }
    f64::NAN
}
