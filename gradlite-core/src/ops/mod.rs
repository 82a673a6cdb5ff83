//! # Operations Module (`ops`)
//!
//! The catalog of differentiable scalar operations. Operations are grouped into
//! submodules by category.
//!
//! ## Structure:
//!
//! - **`_op` Functions:** Each operation has a core function (`xxx_op`) that
//!   validates its inputs, computes the forward value and registers a new node
//!   in the operands' graph together with the [`Op`] tag that selects its
//!   backward rule. They return `Err` on a domain error, in which case no node
//!   is created.
//! - **Composite operations:** `neg`, `sub` and `div` are built from `mul`, `add`
//!   and `pow`, so they add more than one node to the graph.
//!
//! ## Key Submodules:
//!
//! - [`arithmetic`]: add, mul, pow, neg, sub, div.
//! - [`math_elem`]: exp, ln.
//! - [`activation`]: tanh, sigmoid, relu.
//! - [`loss`]: neg_log_loss.

use crate::autograd::backward_op::Op;
use crate::autograd::graph::NodeId;
use crate::error::AutogradError;
use crate::value::Value;

pub mod activation;
pub mod arithmetic;
pub mod loss;
pub mod math_elem;

/// Fails with [`AutogradError::GraphMismatch`] unless both handles share a graph.
pub(crate) fn ensure_same_graph(
    a: &Value<'_>,
    b: &Value<'_>,
    op_name: &str,
) -> Result<(), AutogradError> {
    if std::ptr::eq(a.graph(), b.graph()) {
        Ok(())
    } else {
        Err(AutogradError::GraphMismatch {
            operation: op_name.to_string(),
        })
    }
}

/// Applies a unary operation to a node.
///
/// # Arguments
/// * `a`: The input node.
/// * `forward`: Computes the output value from the input value.
/// * `build_op`: Builds the [`Op`] tag from the input's id.
pub(crate) fn apply_unary_op<'g, F, B>(
    a: Value<'g>,
    forward: F,
    build_op: B,
) -> Result<Value<'g>, AutogradError>
where
    F: FnOnce(f64) -> f64,
    B: FnOnce(NodeId) -> Op,
{
    let out = forward(a.value());
    let id = a.graph().push(out, build_op(a.id()))?;
    Ok(Value::from_parts(a.graph(), id))
}

/// Applies a binary operation to two nodes of the same graph.
pub(crate) fn apply_binary_op<'g, F, B>(
    a: Value<'g>,
    b: Value<'g>,
    forward: F,
    build_op: B,
    op_name: &str,
) -> Result<Value<'g>, AutogradError>
where
    F: FnOnce(f64, f64) -> f64,
    B: FnOnce(NodeId, NodeId) -> Op,
{
    ensure_same_graph(&a, &b, op_name)?;
    let out = forward(a.value(), b.value());
    let id = a.graph().push(out, build_op(a.id(), b.id()))?;
    Ok(Value::from_parts(a.graph(), id))
}
