//! # gradlite-core
//!
//! Reverse-mode automatic differentiation over scalar values.
//!
//! Build an expression from leaves of a [`Graph`], call [`Value::backward`] on
//! the result, then read the gradient of every contributing node:
//!
//! ```
//! use gradlite_core::Graph;
//!
//! let graph = Graph::new();
//! let x = graph.leaf(3.0);
//! let y = x * x + 2.0 * x;
//! y.backward();
//! assert_eq!(y.value(), 15.0);
//! assert_eq!(x.grad(), 8.0);
//! ```

pub mod autograd;
pub mod error;
pub mod ops;
pub mod utils;
pub mod value;

pub use autograd::backward_op::Op;
pub use autograd::graph::{Graph, NodeId};
pub use error::AutogradError;
pub use value::Value;
// Re-export traits required by public functions
pub use num_traits;
