use crate::autograd::backward_op::Op;
use crate::error::AutogradError;
use crate::ops::apply_unary_op;
use crate::value::Value;

/// Computes `e ** a`.
///
/// Backward: `a` receives `out * grad`, reusing the forward result.
pub fn exp_op(a: Value<'_>) -> Result<Value<'_>, AutogradError> {
    apply_unary_op(a, f64::exp, |input| Op::Exp { input })
}

#[cfg(test)]
#[path = "exp_test.rs"]
mod tests;
