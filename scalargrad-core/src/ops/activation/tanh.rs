use crate::autograd::backward_op::Op;
use crate::autograd::graph::Graph;
use crate::ops::apply_unary_op;
use crate::value::{Operand, Value};

/// Hyperbolic tangent.
///
/// Backward: `da += (1 - t²) * dout` where `t` is the output.
pub fn tanh_op<'g>(graph: &'g Graph, a: Operand<'g>) -> Value<'g> {
    apply_unary_op(graph, a, f64::tanh, Op::Tanh)
}

#[cfg(test)]
#[path = "tanh_test.rs"]
mod tests;
