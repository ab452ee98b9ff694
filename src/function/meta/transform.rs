use crate::function::function::Function;

/// `outer(inner(x))`, defined where `inner` is.
#[derive(Debug, Clone)]
pub struct Composition<F, G> {
    outer: F,
    inner: G,
}

impl<F: Function, G: Function> Composition<F, G> {
    pub fn new(outer: F, inner: G) -> Composition<F, G> {
        Composition { outer, inner }
    }
}

impl<F: Function, G: Function> Function for Composition<F, G> {
    fn domain_left(&self) -> f64 {
        self.inner.domain_left()
    }

    fn domain_right(&self) -> f64 {
        self.inner.domain_right()
    }

    fn value(&self, x: f64) -> f64 {
        self.outer.value(self.inner.value(x))
    }
}

/// `scale_y * f(x / scale_x)`: stretches `f` along both axes.
///
/// A negative `scale_x` mirrors the domain, so its borders swap.
#[derive(Debug, Clone)]
pub struct Scale<F> {
    function: F,
    scale_x: f64,
    scale_y: f64,
}

impl<F: Function> Scale<F> {
    pub fn new(function: F, scale_x: f64, scale_y: f64) -> Scale<F> {
        Scale { function, scale_x, scale_y }
    }

    fn borders(&self) -> (f64, f64) {
        let left = self.function.domain_left() * self.scale_x;
        let right = self.function.domain_right() * self.scale_x;
        if self.scale_x < 0.0 {
            (right, left)
        } else {
            (left, right)
        }
    }
}

impl<F: Function> Function for Scale<F> {
    fn domain_left(&self) -> f64 {
        self.borders().0
    }

    fn domain_right(&self) -> f64 {
        self.borders().1
    }

    fn value(&self, x: f64) -> f64 {
        self.scale_y * self.function.value(x / self.scale_x)
    }
}

/// `f(x - shift_x) + shift_y`.
#[derive(Debug, Clone)]
pub struct Shift<F> {
    function: F,
    shift_x: f64,
    shift_y: f64,
}

impl<F: Function> Shift<F> {
    pub fn new(function: F, shift_x: f64, shift_y: f64) -> Shift<F> {
        Shift { function, shift_x, shift_y }
    }
}

impl<F: Function> Function for Shift<F> {
    fn domain_left(&self) -> f64 {
        self.function.domain_left() + self.shift_x
    }

    fn domain_right(&self) -> f64 {
        self.function.domain_right() + self.shift_x
    }

    fn value(&self, x: f64) -> f64 {
        self.function.value(x - self.shift_x) + self.shift_y
    }
}


#[cfg(test)]
mod tests {
    use std::f64::consts::PI;

    use super::*;
    use crate::function::basic::exponential::Exp;
    use crate::function::basic::logarithm::Log;
    use crate::function::basic::trigonometric::Sin;

    #[test]
    fn log_of_exp_is_identity() {
        let identity = Composition::new(Log::natural(), Exp);
        assert!((identity.value(2.5) - 2.5).abs() < 1e-12);
    }

    #[test]
    fn shift_moves_domain_and_values() {
        let shifted = Shift::new(Log::natural(), 1.0, 2.0);
        assert_eq!(shifted.domain_left(), 1.0);
        assert!((shifted.value(2.0) - 2.0).abs() < 1e-15);
    }

    #[test]
    fn negative_scale_mirrors_domain() {
        let mirrored = Scale::new(Log::natural(), -2.0, 3.0);
        assert_eq!(mirrored.domain_left(), f64::NEG_INFINITY);
        assert_eq!(mirrored.domain_right(), 0.0);
        assert!((mirrored.value(-2.0 * std::f64::consts::E) - 3.0).abs() < 1e-12);

        let stretched = Scale::new(Sin, 2.0, 1.0);
        assert!((stretched.value(PI) - 1.0).abs() < 1e-12);
    }
}
