use tracing::{
    debug,
    info
};

use crate::configuration::Configuration;
use crate::function::function::Function;
use crate::function::functionerror::{
    FunctionError,
    Result
};
use crate::tabulated::functionpoint::FunctionPoint;
use crate::tabulated::tabulatedfunction::TabulatedFunction;
use crate::tabulated::tabulatedfunctionfactory::{
    TabulatedFunctionFactory,
    TabulatedFunctionType
};

/// Arguments for a tabulated function constructor picked at run time.
#[derive(Debug, Clone, Copy)]
pub enum TabulatedFunctionArgs<'a> {
    Count {
        left_x: f64,
        right_x: f64,
        points_count: usize,
    },
    Values {
        left_x: f64,
        right_x: f64,
        values: &'a [f64],
    },
    Points(&'a [FunctionPoint]),
}

/// Creates and tabulates functions through a selectable default variant.
///
/// Changing the variant only affects functions created afterwards.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TabulatedFunctions {
    function_type: TabulatedFunctionType,
}

impl TabulatedFunctions {
    pub fn new(function_type: TabulatedFunctionType) -> TabulatedFunctions {
        TabulatedFunctions { function_type }
    }

    pub fn from_configuration(configuration: &Configuration) -> TabulatedFunctions {
        Self::new(configuration.tabulated_function_type())
    }

    pub fn function_type(&self) -> TabulatedFunctionType {
        self.function_type
    }

    pub fn set_function_type(&mut self, function_type: TabulatedFunctionType) {
        if function_type != self.function_type {
            info!(from = %self.function_type, to = %function_type, "default tabulated function type changed");
        }
        self.function_type = function_type;
    }

    pub fn factory(&self) -> &'static dyn TabulatedFunctionFactory {
        self.function_type.factory()
    }

    pub fn create_with_count(&self, left_x: f64, right_x: f64, points_count: usize) -> Result<Box<dyn TabulatedFunction>> {
        self.factory().create_with_count(left_x, right_x, points_count)
    }

    pub fn create_with_values(&self, left_x: f64, right_x: f64, values: &[f64]) -> Result<Box<dyn TabulatedFunction>> {
        self.factory().create_with_values(left_x, right_x, values)
    }

    pub fn create_from_points(&self, points: &[FunctionPoint]) -> Result<Box<dyn TabulatedFunction>> {
        self.factory().create_from_points(points)
    }

    /// Samples `function` at `points_count` evenly spaced points of `[left_x, right_x]`.
    pub fn tabulate<F: Function + ?Sized>(
        &self,
        function: &F,
        left_x: f64,
        right_x: f64,
        points_count: usize,
    ) -> Result<Box<dyn TabulatedFunction>> {
        tabulate_as(self.function_type, function, left_x, right_x, points_count)
    }
}

/// Like [`TabulatedFunctions::tabulate`], building the given variant.
pub fn tabulate_as<F: Function + ?Sized>(
    function_type: TabulatedFunctionType,
    function: &F,
    left_x: f64,
    right_x: f64,
    points_count: usize,
) -> Result<Box<dyn TabulatedFunction>> {
    if left_x < function.domain_left() || right_x > function.domain_right() {
        return Err(FunctionError::DomainViolation {
            left: left_x,
            right: right_x,
            domain_left: function.domain_left(),
            domain_right: function.domain_right(),
        });
    }
    if points_count < 2 {
        return Err(FunctionError::argument(format!(
            "at least 2 points are required, got {points_count}"
        )));
    }

    let step = (right_x - left_x) / (points_count - 1) as f64;
    let values: Vec<f64> = (0..points_count)
        .map(|i| function.value(left_x + step * i as f64))
        .collect();
    debug!(%function_type, left_x, right_x, points_count, "function tabulated");
    function_type.factory().create_with_values(left_x, right_x, &values)
}

/// Builds the given variant, reporting any failure as a construction error.
pub fn create_of_type(
    function_type: TabulatedFunctionType,
    args: TabulatedFunctionArgs<'_>,
) -> Result<Box<dyn TabulatedFunction>> {
    let factory = function_type.factory();
    let created = match args {
        TabulatedFunctionArgs::Count { left_x, right_x, points_count } => {
            factory.create_with_count(left_x, right_x, points_count)
        }
        TabulatedFunctionArgs::Values { left_x, right_x, values } => {
            factory.create_with_values(left_x, right_x, values)
        }
        TabulatedFunctionArgs::Points(points) => factory.create_from_points(points),
    };
    created.map_err(|error| FunctionError::ConstructionError {
        function_type: function_type.to_string(),
        source: Some(Box::new(error)),
    })
}

/// [`create_of_type`] with the variant given by name.
pub fn create_by_name(name: &str, args: TabulatedFunctionArgs<'_>) -> Result<Box<dyn TabulatedFunction>> {
    create_of_type(name.parse()?, args)
}
