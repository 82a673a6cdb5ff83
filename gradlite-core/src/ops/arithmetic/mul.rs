use crate::autograd::backward_op::Op;
use crate::error::AutogradError;
use crate::ops::apply_binary_op;
use crate::value::Value;

/// Multiplies two nodes: `a * b`.
///
/// Backward: `a` receives `b * grad`, `b` receives `a * grad`. When `a` and `b`
/// are the same node both contributions land on it, so `x * x` yields `2x`.
///
/// # Errors
/// Returns `AutogradError::GraphMismatch` if `a` and `b` belong to different graphs.
pub fn mul_op<'g>(a: Value<'g>, b: Value<'g>) -> Result<Value<'g>, AutogradError> {
    apply_binary_op(a, b, |x, y| x * y, |lhs, rhs| Op::Mul { lhs, rhs }, "mul_op")
}

#[cfg(test)]
#[path = "mul_test.rs"]
mod tests;
