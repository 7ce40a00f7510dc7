//! Scalar reverse-mode automatic differentiation with a small neural network
//! library on top.
//!
//! Every scalar lives as a node of a [`Graph`] arena; [`Value`] handles combine
//! with the usual arithmetic operators and record the computation as they go.
//! [`Value::backward`] then fills in the gradient of every node the result
//! depends on.
//!
//! ```
//! use scalargrad_core::Graph;
//!
//! let graph = Graph::new();
//! let a = graph.leaf(2.0);
//! let b = graph.leaf(-3.0);
//! let c = (a * b + 10.0).tanh();
//! c.backward();
//! assert!(a.grad() < 0.0);
//! ```

pub mod autograd;
pub mod error;
pub mod model;
pub mod nn;
pub mod ops;
pub mod optim;
pub mod value;

pub use autograd::{Checkpoint, Graph, NodeId, Op};
pub use error::AutogradError;
pub use value::{Operand, Value};

// Re-export traits required by public functions/structs
pub use num_traits;
