use crate::function::function::Function;
use crate::function::functionerror::{
    FunctionError,
    Result
};
use crate::function::meta::arithmetic::{
    Mult,
    Power,
    Sum
};
use crate::function::meta::transform::{
    Composition,
    Scale,
    Shift
};

// ─────────────────────────────────────────────
// Integration
// ─────────────────────────────────────────────

/// Trapezoid-rule integral of `function` over `[left, right]`.
///
/// The interval is cut into sub-intervals of width `step`; the last one is
/// clipped at `right`.
pub fn integrate<F: Function + ?Sized>(
    function: &F,
    left: f64,
    right: f64,
    step: f64,
) -> Result<f64> {
    if !step.is_finite() || step <= 0.0 {
        return Err(FunctionError::argument(format!(
            "integration step must be positive, got {step}"
        )));
    }
    if !left.is_finite() || !right.is_finite() || left > right {
        return Err(FunctionError::argument(format!(
            "invalid integration interval [{left}, {right}]"
        )));
    }
    if left < function.domain_left() || right > function.domain_right() {
        return Err(FunctionError::DomainViolation {
            left,
            right,
            domain_left: function.domain_left(),
            domain_right: function.domain_right(),
        });
    }

    // nodes come from the step index, so a step below the spacing of f64
    // around `left` still terminates
    let steps = ((right - left) / step).ceil();
    if !steps.is_finite() {
        return Err(FunctionError::argument(format!(
            "integration step {step} is too small for [{left}, {right}]"
        )));
    }
    let steps = steps as u64;

    let mut result = 0.0;
    let mut x = left;
    let mut fx = function.value(x);
    for i in 1..=steps {
        let next_x = if i == steps { right } else { (left + i as f64 * step).min(right) };
        if next_x <= x {
            continue;
        }
        let next_fx = function.value(next_x);
        result += (fx + next_fx) * (next_x - x) / 2.0;
        x = next_x;
        fx = next_fx;
    }
    Ok(result)
}

// ─────────────────────────────────────────────
// Combinators
// ─────────────────────────────────────────────

pub fn sum<F: Function, G: Function>(lhs: F, rhs: G) -> Sum<F, G> {
    Sum::new(lhs, rhs)
}

pub fn mult<F: Function, G: Function>(lhs: F, rhs: G) -> Mult<F, G> {
    Mult::new(lhs, rhs)
}

pub fn power<F: Function>(base: F, exponent: f64) -> Power<F> {
    Power::new(base, exponent)
}

pub fn composition<F: Function, G: Function>(outer: F, inner: G) -> Composition<F, G> {
    Composition::new(outer, inner)
}

pub fn scale<F: Function>(function: F, scale_x: f64, scale_y: f64) -> Scale<F> {
    Scale::new(function, scale_x, scale_y)
}

pub fn shift<F: Function>(function: F, shift_x: f64, shift_y: f64) -> Shift<F> {
    Shift::new(function, shift_x, shift_y)
}
