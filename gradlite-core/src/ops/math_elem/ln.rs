use crate::autograd::backward_op::Op;
use crate::error::AutogradError;
use crate::ops::apply_unary_op;
use crate::value::Value;

/// Computes the natural logarithm (base \( e \)) of a node.
///
/// Backward: `a` receives `grad / a`.
///
/// # Errors
/// Returns `AutogradError::LogDomain` if the input is not strictly positive
/// (NaN included). No node is created in that case.
pub fn ln_op(a: Value<'_>) -> Result<Value<'_>, AutogradError> {
    let value = a.value();
    if !(value > 0.0) {
        return Err(AutogradError::LogDomain { value });
    }
    apply_unary_op(a, f64::ln, |input| Op::Ln { input })
}

#[cfg(test)]
#[path = "ln_test.rs"]
mod tests;
