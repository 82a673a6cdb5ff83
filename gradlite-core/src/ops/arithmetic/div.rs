use crate::error::AutogradError;
use crate::ops::arithmetic::{mul_op, pow_op};
use crate::ops::ensure_same_graph;
use crate::value::Value;

/// Divides two nodes, as `a * b ** -1`.
///
/// # Errors
/// - `AutogradError::GraphMismatch` if `a` and `b` belong to different graphs.
/// - `AutogradError::PowDomain` if `b` is zero.
pub fn div_op<'g>(a: Value<'g>, b: Value<'g>) -> Result<Value<'g>, AutogradError> {
    ensure_same_graph(&a, &b, "div_op")?;
    let reciprocal = pow_op(b, -1.0)?;
    mul_op(a, reciprocal)
}

#[cfg(test)]
#[path = "div_test.rs"]
mod tests;
