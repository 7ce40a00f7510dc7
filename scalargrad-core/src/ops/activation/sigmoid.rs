use crate::autograd::backward_op::Op;
use crate::autograd::graph::Graph;
use crate::ops::apply_unary_op;
use crate::value::{Operand, Value};

/// Logistic sigmoid `1 / (1 + e^-x)`.
///
/// Backward: `da += t(1 - t) * dout` where `t` is the output.
pub fn sigmoid_op<'g>(graph: &'g Graph, a: Operand<'g>) -> Value<'g> {
    apply_unary_op(graph, a, |x| 1.0 / (1.0 + (-x).exp()), Op::Sigmoid)
}

#[cfg(test)]
#[path = "sigmoid_test.rs"]
mod tests;
