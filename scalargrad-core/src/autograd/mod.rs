//! Autograd: the scalar computation graph and its reverse traversal.
//!
//! Nodes live in a [`Graph`] arena and are addressed by [`NodeId`]. Every
//! operator appends a new node tagged with the [`Op`] that produced it;
//! [`Graph::backward`] (or `Value::backward`) orders the nodes reachable from
//! a root consumers-first and applies each tag's local derivative rule,
//! accumulating into the operands' gradients.

pub mod backward_op;
pub mod grad_check;
pub mod graph;

pub use backward_op::Op;
pub use grad_check::{check_grad, GradCheckError};
pub use graph::{Checkpoint, Graph, NodeId};
