use crate::autograd::backward_op::Op;
use crate::error::AutogradError;
use crate::ops::apply_unary_op;
use crate::value::Value;

/// Applies the logistic function `1 / (1 + e^{-a})`.
///
/// Backward: `a` receives `out * (1 - out) * grad`, computed from the stored
/// output rather than re-evaluated from the input.
pub fn sigmoid_op(a: Value<'_>) -> Result<Value<'_>, AutogradError> {
    apply_unary_op(a, |x| 1.0 / (1.0 + (-x).exp()), |input| Op::Sigmoid { input })
}

#[cfg(test)]
#[path = "sigmoid_test.rs"]
mod tests;
