use crate::autograd::graph::Graph;
use crate::error::AutogradError;
use crate::value::Value;
use approx::relative_eq;
use log::debug;
use thiserror::Error;

/// Error type specifically for gradient checking failures.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GradCheckError {
    #[error("Gradient check failed for input {input_index}: analytical grad {analytical_grad:?} != numerical grad {numerical_grad:?}. Difference: {difference:?}")]
    GradientMismatch {
        input_index: usize,
        analytical_grad: f64,
        numerical_grad: f64,
        difference: f64,
    },
    #[error("Forward function execution failed during gradient check: {0}")]
    ForwardPassError(AutogradError),
    #[error("Numerical gradient is NaN or infinite for input {input_index}. Details: Loss+: {loss_plus:?}, Loss-: {loss_minus:?}")]
    NumericalGradNaNOrInfinite {
        input_index: usize,
        loss_plus: f64,
        loss_minus: f64,
    },
    #[error("Analytical gradient is NaN or infinite for input {input_index}. Value: {value:?}")]
    AnalyticalGradNaNOrInfinite { input_index: usize, value: f64 },
    #[error("Finite difference step must be positive and finite, got {0:?}")]
    InvalidEpsilon(f64),
}

impl From<AutogradError> for GradCheckError {
    fn from(err: AutogradError) -> Self {
        GradCheckError::ForwardPassError(err)
    }
}

/// Checks analytical gradients against central finite differences.
///
/// `func` builds a scalar expression over one leaf per entry of `inputs`. It
/// is evaluated once on a fresh graph and differentiated with `backward`;
/// then, for every input `x_i`, it is re-evaluated at `x_i ± epsilon` and
/// `(f(x+ε) − f(x−ε)) / 2ε` is compared with the analytical gradient using
/// `tolerance` both as absolute and as relative bound.
///
/// # Errors
/// Returns the first failing input as a [`GradCheckError`].
pub fn check_grad<F>(
    func: F,
    inputs: &[f64],
    epsilon: f64,
    tolerance: f64,
) -> Result<(), GradCheckError>
where
    F: for<'g> Fn(&'g Graph, &[Value<'g>]) -> Result<Value<'g>, AutogradError>,
{
    if !(epsilon > 0.0 && epsilon.is_finite()) {
        return Err(GradCheckError::InvalidEpsilon(epsilon));
    }

    // --- Analytical gradients ---
    let analytical_grads: Vec<f64> = {
        let graph = Graph::new();
        let leaves: Vec<Value<'_>> = inputs.iter().map(|&x| graph.leaf(x)).collect();
        let output = func(&graph, &leaves)?;
        output.backward();
        leaves.iter().map(|leaf| leaf.grad()).collect()
    };

    // --- Numerical gradients ---
    for (input_index, &analytical_grad) in analytical_grads.iter().enumerate() {
        let loss_plus = evaluate_perturbed(&func, inputs, input_index, epsilon)?;
        let loss_minus = evaluate_perturbed(&func, inputs, input_index, -epsilon)?;
        let numerical_grad = (loss_plus - loss_minus) / (2.0 * epsilon);

        if !numerical_grad.is_finite() {
            return Err(GradCheckError::NumericalGradNaNOrInfinite {
                input_index,
                loss_plus,
                loss_minus,
            });
        }
        if !analytical_grad.is_finite() {
            return Err(GradCheckError::AnalyticalGradNaNOrInfinite {
                input_index,
                value: analytical_grad,
            });
        }

        debug!(
            "check_grad: input {} analytical {} numerical {}",
            input_index, analytical_grad, numerical_grad
        );
        if !relative_eq!(
            analytical_grad,
            numerical_grad,
            epsilon = tolerance,
            max_relative = tolerance
        ) {
            return Err(GradCheckError::GradientMismatch {
                input_index,
                analytical_grad,
                numerical_grad,
                difference: (analytical_grad - numerical_grad).abs(),
            });
        }
    }

    Ok(())
}

/// Evaluates `func` on a fresh graph with input `index` shifted by `delta`.
fn evaluate_perturbed<F>(
    func: &F,
    inputs: &[f64],
    index: usize,
    delta: f64,
) -> Result<f64, GradCheckError>
where
    F: for<'g> Fn(&'g Graph, &[Value<'g>]) -> Result<Value<'g>, AutogradError>,
{
    let graph = Graph::new();
    let leaves: Vec<Value<'_>> = inputs
        .iter()
        .enumerate()
        .map(|(i, &x)| graph.leaf(if i == index { x + delta } else { x }))
        .collect();
    Ok(func(&graph, &leaves)?.data())
}

#[cfg(test)]
#[path = "grad_check_test.rs"]
mod tests;
