//! # Activation Functions
//!
//! Non-linear activation functions.
//!
//! ## Currently Implemented:
//! - [`tanh`](tanh/fn.tanh_op.html): hyperbolic tangent.
//! - [`sigmoid`](sigmoid/fn.sigmoid_op.html): logistic function.
//! - [`relu`](relu/fn.relu_op.html): Rectified Linear Unit.
//!
//! Every backward rule here is expressed through the forward output, not the input.

pub mod relu;
pub mod sigmoid;
pub mod tanh;

// Re-export key functions
pub use relu::relu_op;
pub use sigmoid::sigmoid_op;
pub use tanh::tanh_op;
