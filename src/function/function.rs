
/// A real function of one variable defined on `[domain_left, domain_right]`.
///
/// `value` returns NaN for arguments outside the domain.
pub trait Function {
    fn domain_left(&self) -> f64;

    fn domain_right(&self) -> f64;

    fn value(&self, x: f64) -> f64;

    fn contains(&self, x: f64) -> bool {
        x >= self.domain_left() && x <= self.domain_right()
    }
}

impl<F: Function + ?Sized> Function for &F {
    fn domain_left(&self) -> f64 {
        (**self).domain_left()
    }

    fn domain_right(&self) -> f64 {
        (**self).domain_right()
    }

    fn value(&self, x: f64) -> f64 {
        (**self).value(x)
    }
}

impl<F: Function + ?Sized> Function for Box<F> {
    fn domain_left(&self) -> f64 {
        (**self).domain_left()
    }

    fn domain_right(&self) -> f64 {
        (**self).domain_right()
    }

    fn value(&self, x: f64) -> f64 {
        (**self).value(x)
    }
}

impl<F: Function + ?Sized> Function for std::sync::Arc<F> {
    fn domain_left(&self) -> f64 {
        (**self).domain_left()
    }

    fn domain_right(&self) -> f64 {
        (**self).domain_right()
    }

    fn value(&self, x: f64) -> f64 {
        (**self).value(x)
    }
}
