use crate::autograd::backward_op::Op;
use crate::error::AutogradError;
use crate::ops::apply_unary_op;
use crate::value::Value;

/// Applies the Rectified Linear Unit: `max(0, a)`.
///
/// Backward: `a` receives `grad` if the output is positive, 0 otherwise. The
/// boundary `a == 0` counts as non-positive.
pub fn relu_op(a: Value<'_>) -> Result<Value<'_>, AutogradError> {
    apply_unary_op(
        a,
        |x| if x > 0.0 { x } else { 0.0 },
        |input| Op::Relu { input },
    )
}

#[cfg(test)]
#[path = "relu_test.rs"]
mod tests;
