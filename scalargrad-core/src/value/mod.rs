//! User-facing handles to scalar nodes.
//!
//! A [`Value`] pairs a [`NodeId`] with the [`Graph`] that owns the node. It is
//! `Copy`, reads and writes the node's `data`/`grad` through the arena, and is
//! what the arithmetic operators (`+ - * /` and unary `-`) are implemented on.

use crate::autograd::backward_op::Op;
use crate::autograd::graph::{Graph, NodeId};
use crate::error::AutogradError;
use crate::ops::activation::{relu_op, sigmoid_op, tanh_op};
use crate::ops::arithmetic::{pow_op, powf_op};
use std::fmt;

mod operand;
mod overloads;

pub use operand::Operand;

/// Handle to one scalar node of a [`Graph`].
#[derive(Clone, Copy)]
pub struct Value<'g> {
    graph: &'g Graph,
    id: NodeId,
}

impl<'g> Value<'g> {
    pub(crate) fn new(graph: &'g Graph, id: NodeId) -> Self {
        Value { graph, id }
    }

    pub fn id(&self) -> NodeId {
        self.id
    }

    pub fn graph(&self) -> &'g Graph {
        self.graph
    }

    /// Forward value.
    pub fn data(&self) -> f64 {
        self.graph.nodes()[self.id.index()].data
    }

    /// Accumulated gradient; `∂root/∂self` after a backward pass from `root`.
    pub fn grad(&self) -> f64 {
        self.graph.nodes()[self.id.index()].grad
    }

    /// Overwrites the forward value, e.g. for an optimizer step.
    pub fn set_data(&self, data: f64) {
        self.graph.with_node_mut(self.id, |node| node.data = data);
    }

    pub fn set_grad(&self, grad: f64) {
        self.graph.with_node_mut(self.id, |node| node.grad = grad);
    }

    /// Operation that produced this node.
    pub fn op(&self) -> Op {
        self.graph.nodes()[self.id.index()].op
    }

    /// Nodes this one was computed from; empty for leaves.
    pub fn operands(&self) -> Vec<Value<'g>> {
        self.graph.nodes()[self.id.index()]
            .operands
            .iter()
            .map(|&id| Value::new(self.graph, id))
            .collect()
    }

    pub fn is_leaf(&self) -> bool {
        self.op() == Op::Leaf
    }

    /// Populates `grad` on every node this value depends on.
    ///
    /// Gradients accumulate across calls; a training loop calls `zero_grad`
    /// on its parameters before each backward pass.
    pub fn backward(&self) {
        self.graph.backward_from(self.id);
    }

    // --- Named operations (arithmetic goes through `std::ops`, see `overloads`) ---

    /// `self ** exponent`.
    ///
    /// # Errors
    /// Returns `AutogradError::TypeMismatch` if `exponent` is a graph node:
    /// only constant exponents are differentiable here.
    pub fn pow(self, exponent: impl Into<Operand<'g>>) -> Result<Value<'g>, AutogradError> {
        pow_op(self.graph, self.into(), exponent.into())
    }

    /// `self ** exponent` for a plain number.
    pub fn powf(self, exponent: f64) -> Value<'g> {
        powf_op(self.graph, self.into(), exponent)
    }

    pub fn tanh(self) -> Value<'g> {
        tanh_op(self.graph, self.into())
    }

    pub fn relu(self) -> Value<'g> {
        relu_op(self.graph, self.into())
    }

    pub fn sigmoid(self) -> Value<'g> {
        sigmoid_op(self.graph, self.into())
    }
}

impl fmt::Debug for Value<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Value(id={}, data={}, grad={})",
            self.id.index(),
            self.data(),
            self.grad()
        )
    }
}
