// scalargrad-core/src/ops/arithmetic/pow.rs

use crate::autograd::backward_op::Op;
use crate::autograd::graph::Graph;
use crate::error::AutogradError;
use crate::ops::apply_unary_op;
use crate::value::{Operand, Value};

/// `base ** exponent` where the exponent must be a constant.
///
/// A node-valued exponent is rejected before anything is recorded, so a
/// failed call leaves the graph unchanged.
///
/// # Errors
/// Returns `AutogradError::TypeMismatch` if `exponent` is `Operand::Node`.
pub fn pow_op<'g>(
    graph: &'g Graph,
    base: Operand<'g>,
    exponent: Operand<'g>,
) -> Result<Value<'g>, AutogradError> {
    match exponent {
        Operand::Constant(exponent) => Ok(powf_op(graph, base, exponent)),
        Operand::Node(node) => Err(AutogradError::TypeMismatch {
            operation: "power".to_string(),
            expected: "a constant exponent".to_string(),
            actual: format!("graph node {}", node.id().index()),
        }),
    }
}

/// `base ** exponent`. Backward: `dbase += e * base^(e-1) * dout`.
pub fn powf_op<'g>(graph: &'g Graph, base: Operand<'g>, exponent: f64) -> Value<'g> {
    apply_unary_op(graph, base, |x| x.powf(exponent), Op::Pow(exponent))
}

#[cfg(test)]
#[path = "pow_test.rs"]
mod tests;
