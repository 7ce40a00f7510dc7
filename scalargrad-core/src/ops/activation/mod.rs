// src/ops/activation/mod.rs

//! # Activation Functions
//!
//! Non-linearities applied to a single node. Each records the input as its
//! only operand; the backward rules are expressed in terms of the *output*
//! value stored on the node.
//!
//! ## Currently Implemented:
//! - [`tanh`](tanh/fn.tanh_op.html)
//! - [`ReLU`](relu/fn.relu_op.html): Rectified Linear Unit.
//! - [`sigmoid`](sigmoid/fn.sigmoid_op.html)

pub mod relu;
pub mod sigmoid;
pub mod tanh;

// Re-export key functions
pub use relu::relu_op;
pub use sigmoid::sigmoid_op;
pub use tanh::tanh_op;
