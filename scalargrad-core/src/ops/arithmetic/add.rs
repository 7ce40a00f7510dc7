// scalargrad-core/src/ops/arithmetic/add.rs

use crate::autograd::backward_op::Op;
use crate::autograd::graph::Graph;
use crate::ops::apply_binary_op;
use crate::value::{Operand, Value};

/// `a + b`. Backward: both operands receive the output gradient unchanged.
pub fn add_op<'g>(graph: &'g Graph, a: Operand<'g>, b: Operand<'g>) -> Value<'g> {
    apply_binary_op(graph, a, b, |x, y| x + y, Op::Add)
}

#[cfg(test)]
#[path = "add_test.rs"]
mod tests;
