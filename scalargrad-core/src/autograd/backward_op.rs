use super::graph::{Node, NodeId};
use std::fmt;

/// The operation that produced a node.
///
/// The tag doubles as the node's backward rule: during the reverse traversal
/// [`propagate`] dispatches on it to add the node's gradient contribution onto
/// each of its operands, using only the data stored in the arena.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Op {
    /// Input, parameter or coerced constant. Propagates nothing.
    Leaf,
    /// `a + b`
    Add,
    /// `a * b`
    Mul,
    /// `a ** exponent`, with a constant exponent.
    Pow(f64),
    Tanh,
    Relu,
    Sigmoid,
}

impl Op {
    /// Number of operands a node produced by this operation holds.
    pub fn arity(&self) -> usize {
        match self {
            Op::Leaf => 0,
            Op::Add | Op::Mul => 2,
            Op::Pow(_) | Op::Tanh | Op::Relu | Op::Sigmoid => 1,
        }
    }
}

impl fmt::Display for Op {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Op::Leaf => write!(f, ""),
            Op::Add => write!(f, "+"),
            Op::Mul => write!(f, "*"),
            Op::Pow(exponent) => write!(f, "**{}", exponent),
            Op::Tanh => write!(f, "tanh"),
            Op::Relu => write!(f, "ReLU"),
            Op::Sigmoid => write!(f, "Sigmoid"),
        }
    }
}

/// Adds the gradient contribution of node `id` onto its operands.
///
/// Must only run once every consumer of `id` has already propagated into it,
/// i.e. in reverse topological order. Contributions are accumulated with
/// `+=` so an operand used twice (`a + a`) receives both.
///
/// Operand ids are always smaller than the id of the node using them, so the
/// arena can be split into the producers (`..id`) and the node itself.
pub(crate) fn propagate(nodes: &mut [Node], id: NodeId) {
    let (producers, rest) = nodes.split_at_mut(id.index());
    let out = &rest[0];
    let out_grad = out.grad;

    match out.op {
        Op::Leaf => {}
        Op::Add => {
            for operand in &out.operands {
                producers[operand.index()].grad += out_grad;
            }
        }
        Op::Mul => {
            let (a, b) = (out.operands[0].index(), out.operands[1].index());
            let (a_data, b_data) = (producers[a].data, producers[b].data);
            producers[a].grad += b_data * out_grad;
            producers[b].grad += a_data * out_grad;
        }
        Op::Pow(exponent) => {
            let base = &mut producers[out.operands[0].index()];
            base.grad += exponent * base.data.powf(exponent - 1.0) * out_grad;
        }
        Op::Tanh => {
            let t = out.data;
            producers[out.operands[0].index()].grad += (1.0 - t * t) * out_grad;
        }
        Op::Relu => {
            // Routed by the output sign: exactly zero output gets zero gradient.
            let local = if out.data > 0.0 { 1.0 } else { 0.0 };
            producers[out.operands[0].index()].grad += local * out_grad;
        }
        Op::Sigmoid => {
            let t = out.data;
            producers[out.operands[0].index()].grad += t * (1.0 - t) * out_grad;
        }
    }
}
