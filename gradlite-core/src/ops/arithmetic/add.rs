use crate::autograd::backward_op::Op;
use crate::error::AutogradError;
use crate::ops::apply_binary_op;
use crate::value::Value;

/// Adds two nodes: `a + b`.
///
/// Backward: both operands receive the output gradient unchanged.
///
/// # Errors
/// Returns `AutogradError::GraphMismatch` if `a` and `b` belong to different graphs.
pub fn add_op<'g>(a: Value<'g>, b: Value<'g>) -> Result<Value<'g>, AutogradError> {
    apply_binary_op(a, b, |x, y| x + y, |lhs, rhs| Op::Add { lhs, rhs }, "add_op")
}

#[cfg(test)]
#[path = "add_test.rs"]
mod tests;
