// scalargrad-core/src/ops/arithmetic/div.rs

use crate::autograd::graph::Graph;
use crate::ops::arithmetic::{mul_op, powf_op};
use crate::value::{Operand, Value};

/// `a / b`, recorded as `a * b^-1`.
///
/// A constant `b` is inverted numerically (`a * leaf(1/b)`); dividing by a
/// constant zero therefore yields an infinite factor, as `f64` division does.
pub fn div_op<'g>(graph: &'g Graph, a: Operand<'g>, b: Operand<'g>) -> Value<'g> {
    let reciprocal = match b {
        Operand::Constant(constant) => Operand::Constant(constant.powf(-1.0)),
        Operand::Node(_) => Operand::Node(powf_op(graph, b, -1.0)),
    };
    mul_op(graph, a, reciprocal)
}

#[cfg(test)]
#[path = "div_test.rs"]
mod tests;
