//! # Autograd
//!
//! The graph arena, the backward rules and the reverse pass.
//!
//! - [`graph`]: [`Graph`](graph::Graph) owns every node of one evaluation; ids
//!   are arena indices. Also hosts [`topological_sort`](graph::topological_sort).
//! - [`backward_op`]: the [`Op`](backward_op::Op) tag stored on each node and the
//!   dispatch that applies its local-derivative rule.
//! - [`grad_check`]: central-difference gradient checking.

pub mod backward_op;
pub mod grad_check;
pub mod graph;

pub use backward_op::Op;
pub use graph::{topological_sort, Graph, Node, NodeId};
