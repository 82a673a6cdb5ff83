use crate::autograd::backward_op::Op;
use crate::error::AutogradError;
use crate::ops::apply_unary_op;
use crate::value::Value;

/// tanh(x) = (e^{2x} - 1) / (e^{2x} + 1).
///
/// Once e^{2x} overflows the quotient would be inf/inf, so the result
/// saturates to 1.
fn tanh_forward(x: f64) -> f64 {
    let e2x = (2.0 * x).exp();
    if e2x.is_infinite() {
        1.0
    } else {
        (e2x - 1.0) / (e2x + 1.0)
    }
}

/// Applies the hyperbolic tangent.
///
/// Backward: `a` receives `(1 - out^2) * grad`.
pub fn tanh_op(a: Value<'_>) -> Result<Value<'_>, AutogradError> {
    apply_unary_op(a, tanh_forward, |input| Op::Tanh { input })
}

#[cfg(test)]
#[path = "tanh_test.rs"]
mod tests;
