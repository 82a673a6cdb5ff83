use crate::error::AutogradError;
use crate::ops::arithmetic::{add_op, neg_op};
use crate::ops::ensure_same_graph;
use crate::value::Value;

/// Subtracts two nodes, as `a + (-b)`.
pub fn sub_op<'g>(a: Value<'g>, b: Value<'g>) -> Result<Value<'g>, AutogradError> {
    ensure_same_graph(&a, &b, "sub_op")?;
    add_op(a, neg_op(b)?)
}

#[cfg(test)]
#[path = "sub_test.rs"]
mod tests;
