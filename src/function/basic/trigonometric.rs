use serde::{
    Deserialize,
    Serialize
};

use crate::function::function::Function;

// ─────────────────────────────────────────────
// Sin / Cos / Tan
// ─────────────────────────────────────────────
//
// All three are defined on the whole real line. Tan is NaN-free but
// unbounded near (k + 1/2)π, which is left to the caller.

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Sin;

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Cos;

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Tan;

impl Sin {
    pub fn new() -> Sin {
        Sin
    }
}

impl Cos {
    pub fn new() -> Cos {
        Cos
    }
}

impl Tan {
    pub fn new() -> Tan {
        Tan
    }
}

impl Function for Sin {
    fn domain_left(&self) -> f64 {
        f64::NEG_INFINITY
    }

    fn domain_right(&self) -> f64 {
        f64::INFINITY
    }

    fn value(&self, x: f64) -> f64 {
        x.sin()
    }
}

impl Function for Cos {
    fn domain_left(&self) -> f64 {
        f64::NEG_INFINITY
    }

    fn domain_right(&self) -> f64 {
        f64::INFINITY
    }

    fn value(&self, x: f64) -> f64 {
        x.cos()
    }
}

impl Function for Tan {
    fn domain_left(&self) -> f64 {
        f64::NEG_INFINITY
    }

    fn domain_right(&self) -> f64 {
        f64::INFINITY
    }

    fn value(&self, x: f64) -> f64 {
        x.tan()
    }
}


#[cfg(test)]
mod tests {
    use std::f64::consts::PI;

    use super::*;

    #[test]
    fn trigonometric_functions_cover_the_real_line() {
        for f in [&Sin as &dyn Function, &Cos, &Tan] {
            assert!(f.contains(-1e300));
            assert!(f.contains(1e300));
        }
    }

    #[test]
    fn known_values() {
        assert!((Sin.value(PI / 2.0) - 1.0).abs() < 1e-12);
        assert!((Cos.value(PI) + 1.0).abs() < 1e-12);
        assert!((Tan.value(PI / 4.0) - 1.0).abs() < 1e-12);
    }
}
