use crate::autograd::backward_op::Op;
use crate::autograd::graph::{Graph, NodeId};
use crate::error::AutogradError;
use crate::ops::activation::{relu_op, sigmoid_op, tanh_op};
use crate::ops::arithmetic::pow_op;
use crate::ops::loss::neg_log_loss_op;
use crate::ops::math_elem::{exp_op, ln_op};
use num_traits::AsPrimitive;

mod autograd_methods;
mod traits;

/// Handle to a scalar node of a [`Graph`].
///
/// `Value` is a cheap `Copy` pair of the owning graph and the node id; the node
/// itself lives in the graph's arena. All handles of one graph share its
/// lifetime `'g`, and the graph is freed as a whole once it goes out of scope.
///
/// Combine values with the std operators (`a + b`, `a * 2.0`, `1.0 - a`, ...)
/// or the catalog methods ([`Value::pow`], [`Value::tanh`], ...), then call
/// [`Value::backward`] on the result and read [`Value::grad`] off any input.
#[derive(Clone, Copy)]
pub struct Value<'g> {
    graph: &'g Graph,
    id: NodeId,
}

impl<'g> Value<'g> {
    pub(crate) fn from_parts(graph: &'g Graph, id: NodeId) -> Self {
        Value { graph, id }
    }

    /// Returns the graph this node lives in.
    pub fn graph(&self) -> &'g Graph {
        self.graph
    }

    /// Returns the stable id of this node.
    pub fn id(&self) -> NodeId {
        self.id
    }

    /// Returns the forward value.
    pub fn value(&self) -> f64 {
        self.graph.node(self.id).value
    }

    /// Returns the accumulated gradient (0 until a backward pass reaches this node).
    pub fn grad(&self) -> f64 {
        self.graph.node(self.id).grad
    }

    /// Returns the operation that produced this node.
    pub fn op(&self) -> Op {
        self.graph.node(self.id).op
    }

    /// Returns the deduplicated operands of this node.
    pub fn parents(&self) -> Vec<Value<'g>> {
        let graph = self.graph;
        graph
            .node(self.id)
            .parents
            .iter()
            .map(|&id| Value::from_parts(graph, id))
            .collect()
    }

    pub fn is_leaf(&self) -> bool {
        self.op() == Op::Leaf
    }

    pub fn label(&self) -> Option<String> {
        self.graph.node(self.id).label.clone()
    }

    /// Attaches a display label to this node. Labels are bookkeeping only.
    pub fn set_label(&self, label: impl Into<String>) {
        self.graph.set_label(self.id, Some(label.into()));
    }

    /// `self ** exponent`. See [`pow_op`].
    pub fn pow<N: AsPrimitive<f64>>(self, exponent: N) -> Result<Value<'g>, AutogradError> {
        pow_op(self, exponent.as_())
    }

    /// `e ** self`.
    pub fn exp(self) -> Result<Value<'g>, AutogradError> {
        exp_op(self)
    }

    /// Natural logarithm. Fails with [`AutogradError::LogDomain`] for non-positive values.
    pub fn ln(self) -> Result<Value<'g>, AutogradError> {
        ln_op(self)
    }

    /// Alias of [`Value::ln`].
    pub fn log(self) -> Result<Value<'g>, AutogradError> {
        ln_op(self)
    }

    pub fn tanh(self) -> Result<Value<'g>, AutogradError> {
        tanh_op(self)
    }

    pub fn sigmoid(self) -> Result<Value<'g>, AutogradError> {
        sigmoid_op(self)
    }

    pub fn relu(self) -> Result<Value<'g>, AutogradError> {
        relu_op(self)
    }

    /// Binary cross-entropy of this probability against `label` (0 or 1).
    /// See [`neg_log_loss_op`].
    pub fn neg_log_loss<N: AsPrimitive<f64>>(self, label: N) -> Result<Value<'g>, AutogradError> {
        neg_log_loss_op(self, label.as_())
    }
}
