use crate::autograd::backward_op::{propagate, Op};
use crate::error::AutogradError;
use crate::value::Value;
use log::{debug, trace};
use num_traits::AsPrimitive;
use std::cell::{Ref, RefCell};

/// Stable identity of a node inside its [`Graph`]: the node's arena index.
///
/// Ids are handed out in creation order, so a node can only ever point at ids
/// smaller than its own. That keeps the parent relation acyclic without any
/// cycle detection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl NodeId {
    /// Returns the arena index of this node.
    pub fn index(&self) -> usize {
        self.0
    }
}

/// A vertex of the computation graph.
#[derive(Debug, Clone)]
pub struct Node {
    /// Forward result, fixed at construction.
    pub value: f64,
    /// Gradient accumulator, written only by the backward pass.
    pub grad: f64,
    pub op: Op,
    /// Operands deduplicated by identity.
    pub parents: Vec<NodeId>,
    pub label: Option<String>,
}

/// Arena owning every node of one evaluation.
///
/// Handles ([`Value`]) borrow the graph, so the whole DAG is freed at once when
/// the graph is dropped. Interior mutability lets handles grow the arena and
/// the backward pass write gradients through shared references; the graph is
/// therefore `!Sync` and meant for a single thread.
#[derive(Debug, Default)]
pub struct Graph {
    nodes: RefCell<Vec<Node>>,
}

impl Graph {
    /// Creates an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty graph with room for `capacity` nodes.
    pub fn with_capacity(capacity: usize) -> Self {
        Graph {
            nodes: RefCell::new(Vec::with_capacity(capacity)),
        }
    }

    /// Creates a leaf node holding `value`.
    ///
    /// Accepts any primitive number (`3`, `2.5f32`, `0.1`); it is converted to `f64`.
    pub fn leaf<N: AsPrimitive<f64>>(&self, value: N) -> Value<'_> {
        self.new_leaf(value.as_(), None)
    }

    /// Creates a labeled leaf node, handy when printing or debugging a graph.
    pub fn leaf_labeled<N: AsPrimitive<f64>>(&self, value: N, label: impl Into<String>) -> Value<'_> {
        self.new_leaf(value.as_(), Some(label.into()))
    }

    fn new_leaf(&self, value: f64, label: Option<String>) -> Value<'_> {
        let mut nodes = self.nodes.borrow_mut();
        let id = NodeId(nodes.len());
        nodes.push(Node {
            value,
            grad: 0.0,
            op: Op::Leaf,
            parents: Vec::new(),
            label,
        });
        Value::from_parts(self, id)
    }

    /// Number of nodes allocated so far.
    pub fn len(&self) -> usize {
        self.nodes.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.borrow().is_empty()
    }

    /// Resets the gradient of every node in the graph to zero.
    pub fn zero_grad(&self) {
        for node in self.nodes.borrow_mut().iter_mut() {
            node.grad = 0.0;
        }
    }

    /// Allocates a node produced by `op` and wires it to the op's operands.
    ///
    /// Every operand must already exist in this graph.
    pub(crate) fn push(&self, value: f64, op: Op) -> Result<NodeId, AutogradError> {
        let mut nodes = self.nodes.borrow_mut();
        let id = NodeId(nodes.len());
        let parents = op.parents();
        if let Some(bad) = parents.iter().find(|p| p.index() >= id.index()) {
            return Err(AutogradError::InternalError(format!(
                "Operand node {} does not precede new node {}",
                bad.index(),
                id.index()
            )));
        }
        trace!("push: node {} = {} {:?} -> {}", id.index(), op, parents, value);
        nodes.push(Node {
            value,
            grad: 0.0,
            op,
            parents,
            label: None,
        });
        Ok(id)
    }

    pub(crate) fn node(&self, id: NodeId) -> Ref<'_, Node> {
        Ref::map(self.nodes.borrow(), |nodes| &nodes[id.index()])
    }

    pub(crate) fn set_label(&self, id: NodeId, label: Option<String>) {
        self.nodes.borrow_mut()[id.index()].label = label;
    }

    pub(crate) fn set_grad(&self, id: NodeId, grad: f64) {
        self.nodes.borrow_mut()[id.index()].grad = grad;
    }

    /// Runs the reverse pass from `root`.
    ///
    /// Seeds `root.grad = 1.0`, then applies every reachable node's rule in
    /// reverse topological order. A node's rule only runs after all of its
    /// consumers have added into its gradient.
    pub(crate) fn backward(&self, root: NodeId) {
        let order = topological_sort(self, root);
        debug!(
            "backward: root node {}, {} reachable of {} nodes",
            root.index(),
            order.len(),
            self.len()
        );

        let mut nodes = self.nodes.borrow_mut();
        nodes[root.index()].grad = 1.0;
        for id in order.iter().rev() {
            propagate(&mut nodes, *id);
        }
        debug!("backward: done, root value = {}", nodes[root.index()].value);
    }
}

/// Orders every node reachable from `root` so that each node comes after all
/// of its parents. Each node appears exactly once, even when reached by
/// several paths.
///
/// Depth-first, post-order: a node is appended once all of its parents have
/// been appended. Uses an explicit stack so deep chains do not exhaust the
/// call stack; the order matches the recursive formulation.
pub fn topological_sort(graph: &Graph, root: NodeId) -> Vec<NodeId> {
    let nodes = graph.nodes.borrow();
    let mut visited = vec![false; nodes.len()];
    let mut sorted_list = Vec::new();

    // (node, index of the next parent to visit)
    let mut stack: Vec<(NodeId, usize)> = vec![(root, 0)];
    visited[root.index()] = true;

    while let Some((id, next)) = stack.pop() {
        let parents = &nodes[id.index()].parents;
        match parents.get(next) {
            Some(&parent) => {
                stack.push((id, next + 1));
                if !visited[parent.index()] {
                    visited[parent.index()] = true;
                    stack.push((parent, 0));
                }
            }
            None => sorted_list.push(id),
        }
    }

    sorted_list
}

#[cfg(test)]
#[path = "graph_test.rs"]
mod tests;
