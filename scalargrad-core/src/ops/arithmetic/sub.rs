// scalargrad-core/src/ops/arithmetic/sub.rs

use crate::autograd::graph::Graph;
use crate::ops::arithmetic::{add_op, neg_op};
use crate::value::{Operand, Value};

/// `a - b`, recorded as `a + (-b)`.
///
/// A constant `b` is negated numerically before being wrapped, so
/// `a - 3.0` records `a + leaf(-3.0)` rather than `a + leaf(3.0) * -1`.
pub fn sub_op<'g>(graph: &'g Graph, a: Operand<'g>, b: Operand<'g>) -> Value<'g> {
    let negated = match b {
        Operand::Constant(constant) => Operand::Constant(-constant),
        Operand::Node(_) => Operand::Node(neg_op(graph, b)),
    };
    add_op(graph, a, negated)
}

#[cfg(test)]
#[path = "sub_test.rs"]
mod tests;
