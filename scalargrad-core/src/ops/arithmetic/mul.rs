// scalargrad-core/src/ops/arithmetic/mul.rs

use crate::autograd::backward_op::Op;
use crate::autograd::graph::Graph;
use crate::ops::apply_binary_op;
use crate::value::{Operand, Value};

/// `a * b`. Backward: `da += b * dout`, `db += a * dout`.
pub fn mul_op<'g>(graph: &'g Graph, a: Operand<'g>, b: Operand<'g>) -> Value<'g> {
    apply_binary_op(graph, a, b, |x, y| x * y, Op::Mul)
}

#[cfg(test)]
#[path = "mul_test.rs"]
mod tests;
