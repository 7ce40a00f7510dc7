// scalargrad-core/src/ops/arithmetic/neg.rs

use crate::autograd::graph::Graph;
use crate::ops::arithmetic::mul_op;
use crate::value::{Operand, Value};

/// `-a`, recorded as `a * -1`.
pub fn neg_op<'g>(graph: &'g Graph, a: Operand<'g>) -> Value<'g> {
    mul_op(graph, a, Operand::Constant(-1.0))
}

#[cfg(test)]
#[path = "neg_test.rs"]
mod tests;
