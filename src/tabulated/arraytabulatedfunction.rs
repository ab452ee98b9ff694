use std::fmt;
use std::hash::{
    Hash,
    Hasher
};
use std::iter::Copied;
use std::slice::Iter;

use serde::{
    Deserialize,
    Serialize
};
use tracing::debug;

use crate::function::function::Function;
use crate::function::functionerror::{
    FunctionError,
    Result
};
use crate::tabulated::functionpoint::FunctionPoint;
use crate::tabulated::tabulatedfunction::{
    STORE_EPSILON,
    TabulatedFunction,
    check_neighbours,
    fmt_points,
    hash_points,
    interpolate,
    points_equal,
    uniform_points,
    validate_points
};
use crate::tabulated::tabulatedfunctionfactory::TabulatedFunctionType;

/// Tabulated function backed by a contiguous `Vec`.
///
/// Indexed access is O(1); `add_point` and `delete_point` shift the tail.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "Vec<FunctionPoint>", into = "Vec<FunctionPoint>")]
pub struct ArrayTabulatedFunction {
    points: Vec<FunctionPoint>,
}

impl ArrayTabulatedFunction {
    pub const MIN_POINTS_COUNT: usize = 2;

    /// `points_count` evenly spaced points over `[left_x, right_x]`, all with y = 0.
    pub fn new(left_x: f64, right_x: f64, points_count: usize) -> Result<ArrayTabulatedFunction> {
        Self::with_values(left_x, right_x, &vec![0.0; points_count])
    }

    pub fn with_values(left_x: f64, right_x: f64, values: &[f64]) -> Result<ArrayTabulatedFunction> {
        let points = uniform_points(left_x, right_x, values)?;
        debug!(points_count = points.len(), left_x, right_x, "array tabulated function created");
        Ok(ArrayTabulatedFunction { points })
    }

    /// Copies `points`, which must be strictly increasing in X.
    pub fn from_points(points: &[FunctionPoint]) -> Result<ArrayTabulatedFunction> {
        validate_points(points)?;
        debug!(points_count = points.len(), "array tabulated function created from points");
        Ok(ArrayTabulatedFunction { points: points.to_vec() })
    }

    pub fn iter(&self) -> Copied<Iter<'_, FunctionPoint>> {
        self.points.iter().copied()
    }

    fn neighbours(&self, index: usize) -> (Option<f64>, Option<f64>) {
        let prev_x = index.checked_sub(1).map(|i| self.points[i].x());
        let next_x = self.points.get(index + 1).map(|p| p.x());
        (prev_x, next_x)
    }
}

impl Function for ArrayTabulatedFunction {
    fn domain_left(&self) -> f64 {
        self.points.first().map_or(f64::NAN, |p| p.x())
    }

    fn domain_right(&self) -> f64 {
        self.points.last().map_or(f64::NAN, |p| p.x())
    }

    fn value(&self, x: f64) -> f64 {
        if !(x >= self.domain_left() && x <= self.domain_right()) {
            return f64::NAN;
        }
        interpolate(self.iter(), x)
    }
}

impl TabulatedFunction for ArrayTabulatedFunction {
    fn function_type(&self) -> TabulatedFunctionType {
        TabulatedFunctionType::Array
    }

    fn min_points_count(&self) -> usize {
        Self::MIN_POINTS_COUNT
    }

    fn points_count(&self) -> usize {
        self.points.len()
    }

    fn point(&self, index: usize) -> Result<FunctionPoint> {
        FunctionError::check_index(index, self.points.len())?;
        Ok(self.points[index])
    }

    fn set_point(&mut self, index: usize, point: FunctionPoint) -> Result<()> {
        FunctionError::check_index(index, self.points.len())?;
        let (prev_x, next_x) = self.neighbours(index);
        check_neighbours(prev_x, next_x, point.x())?;
        self.points[index] = point;
        Ok(())
    }

    fn set_point_y(&mut self, index: usize, y: f64) -> Result<()> {
        FunctionError::check_index(index, self.points.len())?;
        self.points[index] = self.points[index].with_y(y);
        Ok(())
    }

    fn add_point(&mut self, point: FunctionPoint) -> Result<()> {
        let x = point.x();
        if !x.is_finite() {
            return Err(FunctionError::order(format!("x {x} is not finite")));
        }
        if let Some(existing) = self.points.iter().find(|p| (p.x() - x).abs() < STORE_EPSILON) {
            return Err(FunctionError::order(format!(
                "a point with x {} already exists",
                existing.x()
            )));
        }
        let position = self.points.partition_point(|p| p.x() < x);
        self.points.insert(position, point);
        Ok(())
    }

    fn delete_point(&mut self, index: usize) -> Result<()> {
        FunctionError::check_index(index, self.points.len())?;
        if self.points.len() <= Self::MIN_POINTS_COUNT {
            return Err(FunctionError::InvariantViolation(format!(
                "cannot delete a point: fewer than {} points would remain",
                Self::MIN_POINTS_COUNT
            )));
        }
        self.points.remove(index);
        Ok(())
    }

    fn iter(&self) -> Box<dyn Iterator<Item = FunctionPoint> + '_> {
        Box::new(ArrayTabulatedFunction::iter(self))
    }

    fn clone_box(&self) -> Box<dyn TabulatedFunction> {
        Box::new(self.clone())
    }
}

impl<T: TabulatedFunction + ?Sized> PartialEq<T> for ArrayTabulatedFunction {
    fn eq(&self, other: &T) -> bool {
        points_equal(self, other)
    }
}

impl Hash for ArrayTabulatedFunction {
    fn hash<H: Hasher>(&self, state: &mut H) {
        hash_points(self, state)
    }
}

impl fmt::Display for ArrayTabulatedFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_points(self, f)
    }
}

impl TryFrom<Vec<FunctionPoint>> for ArrayTabulatedFunction {
    type Error = FunctionError;

    fn try_from(points: Vec<FunctionPoint>) -> Result<ArrayTabulatedFunction> {
        validate_points(&points)?;
        Ok(ArrayTabulatedFunction { points })
    }
}

impl From<ArrayTabulatedFunction> for Vec<FunctionPoint> {
    fn from(function: ArrayTabulatedFunction) -> Vec<FunctionPoint> {
        function.points
    }
}

impl<'a> IntoIterator for &'a ArrayTabulatedFunction {
    type Item = FunctionPoint;
    type IntoIter = Copied<Iter<'a, FunctionPoint>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    fn parabola() -> ArrayTabulatedFunction {
        ArrayTabulatedFunction::from_points(&[
            FunctionPoint::new(0.0, 0.0),
            FunctionPoint::new(1.0, 1.0),
            FunctionPoint::new(2.0, 4.0),
        ])
        .unwrap()
    }

    #[test]
    fn builds_uniform_grid_with_zero_values() {
        let function = ArrayTabulatedFunction::new(0.0, 10.0, 3).unwrap();
        assert_eq!(function.points_count(), 3);
        assert_eq!(function.point(1).unwrap(), FunctionPoint::new(5.0, 0.0));
        assert_eq!(function.domain_left(), 0.0);
        assert_eq!(function.domain_right(), 10.0);
    }

    #[test]
    fn rejects_invalid_construction() {
        assert!(matches!(ArrayTabulatedFunction::new(0.0, 1.0, 1), Err(FunctionError::ArgumentError(_))));
        assert!(matches!(ArrayTabulatedFunction::new(1.0, 0.0, 3), Err(FunctionError::ArgumentError(_))));
        assert!(matches!(
            ArrayTabulatedFunction::from_points(&[FunctionPoint::new(1.0, 0.0), FunctionPoint::new(1.0, 1.0)]),
            Err(FunctionError::ArgumentError(_))
        ));
    }

    #[test]
    fn evaluates_by_linear_interpolation() {
        let function = parabola();
        assert_eq!(function.value(0.5), 0.5);
        assert_eq!(function.value(1.5), 2.5);
        assert_eq!(function.value(2.0), 4.0);
        assert!(function.value(-1.0).is_nan());
        assert!(function.value(2.0 + 1e-12).is_nan());
    }

    #[test]
    fn index_access_is_bounds_checked() {
        let function = parabola();
        assert_eq!(function.point_x(2).unwrap(), 2.0);
        assert_eq!(function.point_y(2).unwrap(), 4.0);
        assert!(matches!(function.point(3), Err(FunctionError::IndexOutOfRange { index: 3, count: 3 })));
        assert!(matches!(function.point_x(7), Err(FunctionError::IndexOutOfRange { .. })));
    }

    #[test]
    fn set_point_keeps_order() {
        let mut function = parabola();
        function.set_point(1, FunctionPoint::new(0.5, 7.0)).unwrap();
        assert_eq!(function.point(1).unwrap(), FunctionPoint::new(0.5, 7.0));

        assert!(matches!(function.set_point(1, FunctionPoint::new(2.0, 0.0)), Err(FunctionError::OrderViolation(_))));
        assert!(matches!(function.set_point_x(1, 0.0), Err(FunctionError::OrderViolation(_))));
        assert!(matches!(function.set_point(5, FunctionPoint::new(1.0, 0.0)), Err(FunctionError::IndexOutOfRange { .. })));

        // the outer points are only bounded on one side
        function.set_point_x(0, -100.0).unwrap();
        function.set_point_x(2, 100.0).unwrap();
        assert_eq!(function.domain_left(), -100.0);
        assert_eq!(function.domain_right(), 100.0);
    }

    #[test]
    fn set_point_y_has_no_order_constraint() {
        let mut function = parabola();
        function.set_point_y(2, -5.0).unwrap();
        assert_eq!(function.point_y(2).unwrap(), -5.0);
        assert!(function.set_point_y(3, 0.0).is_err());
    }

    #[test]
    fn add_point_inserts_in_order() {
        let mut function = parabola();
        function.add_point(FunctionPoint::new(1.5, 2.0)).unwrap();
        function.add_point(FunctionPoint::new(-1.0, 1.0)).unwrap();
        function.add_point(FunctionPoint::new(3.0, 9.0)).unwrap();
        let xs: Vec<f64> = function.iter().map(|p| p.x()).collect();
        assert_eq!(xs, vec![-1.0, 0.0, 1.0, 1.5, 2.0, 3.0]);

        assert!(matches!(
            function.add_point(FunctionPoint::new(1.0 + 1e-11, 0.0)),
            Err(FunctionError::OrderViolation(_))
        ));
        assert_eq!(function.points_count(), 6);
    }

    #[test]
    fn delete_point_stops_at_two_points() {
        let mut function = parabola();
        assert!(matches!(function.delete_point(3), Err(FunctionError::IndexOutOfRange { .. })));
        function.delete_point(1).unwrap();
        assert_eq!(function.points_count(), 2);
        assert!(matches!(function.delete_point(0), Err(FunctionError::InvariantViolation(_))));
    }

    #[test]
    fn clone_is_independent() {
        let original = parabola();
        let mut copy = original.clone();
        copy.set_point_y(0, 100.0).unwrap();
        assert_eq!(original.point_y(0).unwrap(), 0.0);
        assert_ne!(original, copy);
    }

    #[test]
    fn displays_points() {
        assert_eq!(parabola().to_string(), "{(0; 0), (1; 1), (2; 4)}");
    }

    #[test]
    fn serde_json_round_trip() {
        let function = parabola();
        let json = serde_json::to_string(&function).unwrap();
        let restored: ArrayTabulatedFunction = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, function);

        let unordered = r#"[{"x":1.0,"y":0.0},{"x":0.0,"y":0.0}]"#;
        assert!(serde_json::from_str::<ArrayTabulatedFunction>(unordered).is_err());
    }
}
