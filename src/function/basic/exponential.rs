use serde::{
    Deserialize,
    Serialize
};

use crate::function::function::Function;

/// `e^x` on the whole real line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Exp;

impl Exp {
    pub fn new() -> Exp {
        Exp
    }
}

impl Function for Exp {
    fn domain_left(&self) -> f64 {
        f64::NEG_INFINITY
    }

    fn domain_right(&self) -> f64 {
        f64::INFINITY
    }

    fn value(&self, x: f64) -> f64 {
        x.exp()
    }
}
