use crate::error::AutogradError;
use crate::ops::arithmetic::mul_op;
use crate::value::Value;

/// Negates a node, as `a * -1`.
pub fn neg_op(a: Value<'_>) -> Result<Value<'_>, AutogradError> {
    let minus_one = a.graph().leaf(-1.0);
    mul_op(a, minus_one)
}

#[cfg(test)]
#[path = "neg_test.rs"]
mod tests;
