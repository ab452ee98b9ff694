#![allow(dead_code)]

use std::collections::hash_map::DefaultHasher;
use std::hash::{
    Hash,
    Hasher
};

use tabfn::tabulated::functionpoint::FunctionPoint;
use tabfn::tabulated::tabulatedfunction::TabulatedFunction;
use tabfn::tabulated::tabulatedfunctionfactory::TabulatedFunctionType;

pub fn points(raw: &[(f64, f64)]) -> Vec<FunctionPoint> {
    raw.iter().copied().map(FunctionPoint::from).collect()
}

/// `{(0,0), (1,1), (2,4)}`
pub fn parabola_points() -> Vec<FunctionPoint> {
    points(&[(0.0, 0.0), (1.0, 1.0), (2.0, 4.0)])
}

/// One store of each variant holding `points`.
pub fn both_variants(points: &[FunctionPoint]) -> Vec<Box<dyn TabulatedFunction>> {
    TabulatedFunctionType::ALL
        .iter()
        .map(|function_type| function_type.factory().create_from_points(points).unwrap())
        .collect()
}

pub fn hash_of<T: Hash + ?Sized>(value: &T) -> u64 {
    let mut hasher = DefaultHasher::new();
    value.hash(&mut hasher);
    hasher.finish()
}
