use crate::autograd::graph::{Node, NodeId};
use log::{trace, warn};
use std::fmt;

/// Identifies the operation that produced a node, together with the operand ids
/// its backward rule reads.
///
/// Binary variants keep both operand ids even when they are the same node
/// (`x * x`), so the rule counts each use. The deduplicated view used for graph
/// traversal is [`Op::parents`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Op {
    /// User-created input (or auto-wrapped scalar). No parents, no-op rule.
    Leaf,
    Add { lhs: NodeId, rhs: NodeId },
    Mul { lhs: NodeId, rhs: NodeId },
    /// `base ** exponent` where the exponent is a plain number, not a node.
    Pow { base: NodeId, exponent: f64 },
    Exp { input: NodeId },
    Ln { input: NodeId },
    Tanh { input: NodeId },
    Sigmoid { input: NodeId },
    Relu { input: NodeId },
    /// Binary cross-entropy of a predicted probability against a 0/1 label.
    NegLogLoss { input: NodeId, label: f64 },
}

impl Op {
    /// Returns the operand ids in the order the rule uses them, duplicates included.
    pub fn operands(&self) -> Vec<NodeId> {
        match *self {
            Op::Leaf => Vec::new(),
            Op::Add { lhs, rhs } | Op::Mul { lhs, rhs } => vec![lhs, rhs],
            Op::Pow { base, .. } => vec![base],
            Op::Exp { input }
            | Op::Ln { input }
            | Op::Tanh { input }
            | Op::Sigmoid { input }
            | Op::Relu { input }
            | Op::NegLogLoss { input, .. } => vec![input],
        }
    }

    /// Returns the operand ids deduplicated by identity, in first-use order.
    pub fn parents(&self) -> Vec<NodeId> {
        let mut parents = self.operands();
        parents.dedup();
        parents
    }

    /// Whether this op is the loss rule, which assigns instead of accumulating.
    pub fn is_loss(&self) -> bool {
        matches!(self, Op::NegLogLoss { .. })
    }
}

impl fmt::Display for Op {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Op::Leaf => Ok(()),
            Op::Add { .. } => write!(f, "+"),
            Op::Mul { .. } => write!(f, "*"),
            Op::Pow { exponent, .. } => write!(f, "**{exponent}"),
            Op::Exp { .. } => write!(f, "exp"),
            Op::Ln { .. } => write!(f, "log"),
            Op::Tanh { .. } => write!(f, "tanh"),
            Op::Sigmoid { .. } => write!(f, "sigmoid"),
            Op::Relu { .. } => write!(f, "ReLU"),
            Op::NegLogLoss { .. } => write!(f, "neg_log_loss"),
        }
    }
}

/// Applies the backward rule of node `id`, pushing its gradient into its operands.
///
/// Reads the node's own `value` and `grad` plus the recorded operand values;
/// every rule adds into the operand gradients except the loss rule, which
/// overwrites the probability's gradient with `p - y`.
pub(crate) fn propagate(nodes: &mut [Node], id: NodeId) {
    let (op, out_value, out_grad) = {
        let node = &nodes[id.index()];
        (node.op, node.value, node.grad)
    };
    trace!("propagate: node {} ({}) grad = {}", id.index(), op, out_grad);

    match op {
        Op::Leaf => {}
        Op::Add { lhs, rhs } => {
            nodes[lhs.index()].grad += out_grad;
            nodes[rhs.index()].grad += out_grad;
        }
        Op::Mul { lhs, rhs } => {
            let lhs_value = nodes[lhs.index()].value;
            let rhs_value = nodes[rhs.index()].value;
            nodes[lhs.index()].grad += rhs_value * out_grad;
            nodes[rhs.index()].grad += lhs_value * out_grad;
        }
        Op::Pow { base, exponent } => {
            let base_value = nodes[base.index()].value;
            nodes[base.index()].grad += exponent * base_value.powf(exponent - 1.0) * out_grad;
        }
        Op::Exp { input } => {
            nodes[input.index()].grad += out_value * out_grad;
        }
        Op::Ln { input } => {
            let input_value = nodes[input.index()].value;
            nodes[input.index()].grad += (1.0 / input_value) * out_grad;
        }
        Op::Tanh { input } => {
            nodes[input.index()].grad += (1.0 - out_value * out_value) * out_grad;
        }
        Op::Sigmoid { input } => {
            nodes[input.index()].grad += out_value * (1.0 - out_value) * out_grad;
        }
        Op::Relu { input } => {
            let mask = if out_value > 0.0 { 1.0 } else { 0.0 };
            nodes[input.index()].grad += mask * out_grad;
        }
        Op::NegLogLoss { input, label } => {
            let p = &mut nodes[input.index()];
            if p.grad != 0.0 {
                warn!(
                    "neg_log_loss: overwriting gradient {} of node {} (assignment, not accumulation)",
                    p.grad,
                    input.index()
                );
            }
            p.grad = p.value - label;
        }
    }
}
