//! # Loss Functions
//!
//! Loss functions quantify the difference between a prediction and the true
//! target.
//!
//! ## Currently Implemented:
//! - [`neg_log_loss`](neg_log_loss/fn.neg_log_loss_op.html): binary
//!   cross-entropy for a single probability output.

pub mod neg_log_loss;

pub use neg_log_loss::neg_log_loss_op;
