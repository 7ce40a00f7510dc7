//! # Scalar Operations Module (`ops`)
//!
//! Forward computation and graph recording for every operator of the engine.
//!
//! - **`_op` Functions:** Each operation has a core function (`add_op`,
//!   `tanh_op`, ...) that resolves its operands (wrapping constants as leaves),
//!   computes the forward value and appends the output node with its [`Op`]
//!   tag. `Graph` and `Value` methods, and the `std::ops` impls, all delegate
//!   here.
//! - **Backward rules** are not stored here: the [`Op`] tag recorded on the
//!   node selects the local derivative in `autograd::backward_op`.
//!
//! ## Key Submodules:
//!
//! - [`arithmetic`]: add, mul, pow (primitives) and neg, sub, div (derived).
//! - [`activation`]: tanh, relu, sigmoid.
//!
//! [`Op`]: crate::autograd::Op

use crate::autograd::backward_op::Op;
use crate::autograd::graph::Graph;
use crate::value::{Operand, Value};

pub mod activation;
pub mod arithmetic;

/// Applies a unary operation to one operand.
///
/// Resolves the operand, computes `forward(data)` and records a node tagged
/// `op` whose single operand is the input.
pub(crate) fn apply_unary_op<'g, F>(
    graph: &'g Graph,
    a: Operand<'g>,
    forward: F,
    op: Op,
) -> Value<'g>
where
    F: Fn(f64) -> f64,
{
    let a = graph.resolve(a);
    let data = forward(a.data());
    graph.push(data, op, vec![a.id()])
}

/// Applies a binary operation to two operands, left operand first.
pub(crate) fn apply_binary_op<'g, F>(
    graph: &'g Graph,
    a: Operand<'g>,
    b: Operand<'g>,
    forward: F,
    op: Op,
) -> Value<'g>
where
    F: Fn(f64, f64) -> f64,
{
    let a = graph.resolve(a);
    let b = graph.resolve(b);
    let data = forward(a.data(), b.data());
    graph.push(data, op, vec![a.id(), b.id()])
}
