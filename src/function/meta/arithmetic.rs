use crate::function::function::Function;

// ─────────────────────────────────────────────
// Sum / Mult
// ─────────────────────────────────────────────
//
// Both are defined on the intersection of the operand domains. An empty
// intersection yields domain_left > domain_right; value() is NaN everywhere.

#[derive(Debug, Clone)]
pub struct Sum<F, G> {
    lhs: F,
    rhs: G,
}

impl<F: Function, G: Function> Sum<F, G> {
    pub fn new(lhs: F, rhs: G) -> Sum<F, G> {
        Sum { lhs, rhs }
    }
}

impl<F: Function, G: Function> Function for Sum<F, G> {
    fn domain_left(&self) -> f64 {
        self.lhs.domain_left().max(self.rhs.domain_left())
    }

    fn domain_right(&self) -> f64 {
        self.lhs.domain_right().min(self.rhs.domain_right())
    }

    fn value(&self, x: f64) -> f64 {
        if !self.contains(x) {
            return f64::NAN;
        }
        self.lhs.value(x) + self.rhs.value(x)
    }
}

#[derive(Debug, Clone)]
pub struct Mult<F, G> {
    lhs: F,
    rhs: G,
}

impl<F: Function, G: Function> Mult<F, G> {
    pub fn new(lhs: F, rhs: G) -> Mult<F, G> {
        Mult { lhs, rhs }
    }
}

impl<F: Function, G: Function> Function for Mult<F, G> {
    fn domain_left(&self) -> f64 {
        self.lhs.domain_left().max(self.rhs.domain_left())
    }

    fn domain_right(&self) -> f64 {
        self.lhs.domain_right().min(self.rhs.domain_right())
    }

    fn value(&self, x: f64) -> f64 {
        if !self.contains(x) {
            return f64::NAN;
        }
        self.lhs.value(x) * self.rhs.value(x)
    }
}

// ─────────────────────────────────────────────
// Power
// ─────────────────────────────────────────────

/// `f(x)^exponent`, on the domain of `f`.
#[derive(Debug, Clone)]
pub struct Power<F> {
    base: F,
    exponent: f64,
}

impl<F: Function> Power<F> {
    pub fn new(base: F, exponent: f64) -> Power<F> {
        Power { base, exponent }
    }

    pub fn exponent(&self) -> f64 {
        self.exponent
    }
}

impl<F: Function> Function for Power<F> {
    fn domain_left(&self) -> f64 {
        self.base.domain_left()
    }

    fn domain_right(&self) -> f64 {
        self.base.domain_right()
    }

    fn value(&self, x: f64) -> f64 {
        self.base.value(x).powf(self.exponent)
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::function::basic::logarithm::Log;
    use crate::function::basic::trigonometric::{
        Cos,
        Sin
    };

    #[test]
    fn sin_squared_plus_cos_squared_is_one() {
        let identity = Sum::new(Power::new(Sin, 2.0), Power::new(Cos, 2.0));
        for i in -20..20 {
            let x = i as f64 * 0.37;
            assert!((identity.value(x) - 1.0).abs() < 1e-12);
        }
    }

    #[test]
    fn domain_is_intersection() {
        let product = Mult::new(Sin, Log::natural());
        assert_eq!(product.domain_left(), 0.0);
        assert_eq!(product.domain_right(), f64::INFINITY);
        assert!(product.value(-1.0).is_nan());
        assert!((product.value(1.0)).abs() < 1e-15);
    }
}
