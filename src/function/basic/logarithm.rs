use serde::{
    Deserialize,
    Serialize
};

use crate::function::function::Function;
use crate::function::functionerror::{
    FunctionError,
    Result
};

/// Logarithm to a fixed base, defined on `[0, +inf)`.
///
/// `value(0.0)` is `-inf`; arguments below zero give NaN.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Log {
    base: f64,
}

impl Log {
    pub fn new(base: f64) -> Result<Log> {
        if !base.is_finite() || base <= 0.0 || base == 1.0 {
            return Err(FunctionError::argument(format!(
                "logarithm base must be positive, finite and not 1, got {base}"
            )));
        }
        Ok(Log { base })
    }

    pub fn natural() -> Log {
        Log { base: std::f64::consts::E }
    }

    pub fn base(&self) -> f64 {
        self.base
    }
}

impl Function for Log {
    fn domain_left(&self) -> f64 {
        0.0
    }

    fn domain_right(&self) -> f64 {
        f64::INFINITY
    }

    fn value(&self, x: f64) -> f64 {
        if x < 0.0 {
            return f64::NAN;
        }
        x.ln() / self.base.ln()
    }
}
