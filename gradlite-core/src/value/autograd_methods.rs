use crate::autograd::graph::topological_sort;
use crate::value::Value;

impl<'g> Value<'g> {
    /// Performs the backward pass starting from this node.
    ///
    /// Computes the gradient of this node's value with respect to every node it
    /// depends on and writes it into each node's `grad`. The terminal's own
    /// gradient is set to `1.0`; every other reachable gradient is accumulated,
    /// so call [`Graph::zero_grad`](crate::Graph::zero_grad) before running a
    /// second pass over the same graph. Nodes that do not contribute to this one
    /// are left untouched.
    pub fn backward(&self) {
        self.graph().backward(self.id());
    }

    /// Resets this node's gradient to zero.
    pub fn zero_grad(&self) {
        self.graph().set_grad(self.id(), 0.0);
    }

    /// Returns every node reachable from this one, each after all of its parents.
    /// The last element is `self`.
    pub fn topological_order(&self) -> Vec<Value<'g>> {
        let graph = self.graph();
        topological_sort(graph, self.id())
            .into_iter()
            .map(|id| Value::from_parts(graph, id))
            .collect()
    }
}
