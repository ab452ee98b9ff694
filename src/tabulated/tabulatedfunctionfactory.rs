use std::fmt;
use std::str::FromStr;

use serde::{
    Deserialize,
    Serialize
};

use crate::function::functionerror::{
    FunctionError,
    Result
};
use crate::tabulated::arraytabulatedfunction::ArrayTabulatedFunction;
use crate::tabulated::functionpoint::FunctionPoint;
use crate::tabulated::linkedlisttabulatedfunction::LinkedListTabulatedFunction;
use crate::tabulated::tabulatedfunction::TabulatedFunction;

/// Creation strategy for one tabulated function variant.
pub trait TabulatedFunctionFactory: Send + Sync {
    fn create_with_count(
        &self,
        left_x: f64,
        right_x: f64,
        points_count: usize,
    ) -> Result<Box<dyn TabulatedFunction>>;

    fn create_with_values(
        &self,
        left_x: f64,
        right_x: f64,
        values: &[f64],
    ) -> Result<Box<dyn TabulatedFunction>>;

    fn create_from_points(&self, points: &[FunctionPoint]) -> Result<Box<dyn TabulatedFunction>>;
}

// ─────────────────────────────────────────────
// Factories
// ─────────────────────────────────────────────

#[derive(Debug, Clone, Copy, Default)]
pub struct ArrayTabulatedFunctionFactory;

impl TabulatedFunctionFactory for ArrayTabulatedFunctionFactory {
    fn create_with_count(&self, left_x: f64, right_x: f64, points_count: usize) -> Result<Box<dyn TabulatedFunction>> {
        Ok(Box::new(ArrayTabulatedFunction::new(left_x, right_x, points_count)?))
    }

    fn create_with_values(&self, left_x: f64, right_x: f64, values: &[f64]) -> Result<Box<dyn TabulatedFunction>> {
        Ok(Box::new(ArrayTabulatedFunction::with_values(left_x, right_x, values)?))
    }

    fn create_from_points(&self, points: &[FunctionPoint]) -> Result<Box<dyn TabulatedFunction>> {
        Ok(Box::new(ArrayTabulatedFunction::from_points(points)?))
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct LinkedListTabulatedFunctionFactory;

impl TabulatedFunctionFactory for LinkedListTabulatedFunctionFactory {
    fn create_with_count(&self, left_x: f64, right_x: f64, points_count: usize) -> Result<Box<dyn TabulatedFunction>> {
        Ok(Box::new(LinkedListTabulatedFunction::new(left_x, right_x, points_count)?))
    }

    fn create_with_values(&self, left_x: f64, right_x: f64, values: &[f64]) -> Result<Box<dyn TabulatedFunction>> {
        Ok(Box::new(LinkedListTabulatedFunction::with_values(left_x, right_x, values)?))
    }

    fn create_from_points(&self, points: &[FunctionPoint]) -> Result<Box<dyn TabulatedFunction>> {
        Ok(Box::new(LinkedListTabulatedFunction::from_points(points)?))
    }
}

// ─────────────────────────────────────────────
// TabulatedFunctionType
// ─────────────────────────────────────────────

static ARRAY_FACTORY: ArrayTabulatedFunctionFactory = ArrayTabulatedFunctionFactory;
static LINKED_LIST_FACTORY: LinkedListTabulatedFunctionFactory = LinkedListTabulatedFunctionFactory;

/// The closed set of tabulated function variants.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TabulatedFunctionType {
    #[default]
    Array,
    LinkedList,
}

impl TabulatedFunctionType {
    pub const ALL: [TabulatedFunctionType; 2] = [TabulatedFunctionType::Array, TabulatedFunctionType::LinkedList];

    pub fn factory(&self) -> &'static dyn TabulatedFunctionFactory {
        match self {
            TabulatedFunctionType::Array => &ARRAY_FACTORY,
            TabulatedFunctionType::LinkedList => &LINKED_LIST_FACTORY,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            TabulatedFunctionType::Array => "Array",
            TabulatedFunctionType::LinkedList => "LinkedList",
        }
    }
}

impl fmt::Display for TabulatedFunctionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Accepts the short and the full type names, ignoring case, dashes and underscores.
impl FromStr for TabulatedFunctionType {
    type Err = FunctionError;

    fn from_str(name: &str) -> Result<TabulatedFunctionType> {
        let normalized: String = name
            .chars()
            .filter(|c| !matches!(c, '_' | '-' | ' '))
            .flat_map(char::to_lowercase)
            .collect();
        match normalized.as_str() {
            "array" | "arraytabulatedfunction" => Ok(TabulatedFunctionType::Array),
            "linkedlist" | "linkedlisttabulatedfunction" => Ok(TabulatedFunctionType::LinkedList),
            _ => Err(FunctionError::ConstructionError {
                function_type: name.to_owned(),
                source: None,
            }),
        }
    }
}
