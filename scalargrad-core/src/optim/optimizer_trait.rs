use crate::autograd::graph::Graph;
use crate::error::AutogradError;

/// Trait defining the common interface for all optimizers.
///
/// Optimizers are responsible for updating model parameters based on their
/// gradients. Parameters are held as node ids; the graph they live in is
/// passed to each call.
pub trait Optimizer {
    /// Performs a single optimization step using the accumulated gradients.
    ///
    /// # Errors
    /// Returns `AutogradError::UnknownNode` if a parameter is not in `graph`.
    fn step(&mut self, graph: &Graph) -> Result<(), AutogradError>;

    /// Clears the gradients of all parameters managed by the optimizer.
    ///
    /// Called before the backward pass of each training iteration, since the
    /// engine accumulates gradients across backward calls.
    fn zero_grad(&mut self, graph: &Graph) -> Result<(), AutogradError>;
}
