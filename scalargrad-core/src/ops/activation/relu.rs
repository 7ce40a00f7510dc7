use crate::autograd::backward_op::Op;
use crate::autograd::graph::Graph;
use crate::ops::apply_unary_op;
use crate::value::{Operand, Value};

/// Rectified linear unit: `0` for negative inputs, the input otherwise.
///
/// Backward: `da += dout` when the output is strictly positive, nothing
/// otherwise. The gradient at exactly zero is therefore `0`.
pub fn relu_op<'g>(graph: &'g Graph, a: Operand<'g>) -> Value<'g> {
    apply_unary_op(graph, a, |x| if x < 0.0 { 0.0 } else { x }, Op::Relu)
}

#[cfg(test)]
#[path = "relu_test.rs"]
mod tests;
