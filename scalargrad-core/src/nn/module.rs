use crate::autograd::graph::{Graph, NodeId};
use crate::error::AutogradError;
use crate::value::Operand;

/// The base trait for all neural network modules (neurons, layers, networks).
///
/// A module owns a fixed set of parameter leaves, created in a [`Graph`] at
/// construction time and referred to by [`NodeId`]. Storing ids instead of
/// [`Value`](crate::value::Value) handles keeps the module independent of any
/// borrow of the graph, so the driver can still [`Graph::truncate`] it
/// between training steps.
pub trait Module: std::fmt::Debug {
    /// Result of a forward pass, borrowing the graph it was built in.
    type Output<'g>;

    /// Performs a forward pass on `inputs`, recording the computation in
    /// `graph`.
    ///
    /// `graph` must be the graph the module was constructed in.
    ///
    /// # Errors
    /// Returns `AutogradError::DimensionMismatch` if `inputs` does not have
    /// the expected length, or `AutogradError::UnknownNode` if a parameter is
    /// not part of `graph`.
    fn forward<'g, I>(
        &self,
        graph: &'g Graph,
        inputs: &[I],
    ) -> Result<Self::Output<'g>, AutogradError>
    where
        I: Into<Operand<'g>> + Copy;

    /// Returns every learnable leaf of the module, including those of its
    /// sub-modules, in construction order.
    fn parameters(&self) -> Vec<NodeId>;

    /// Returns the parameters with hierarchical names
    /// (e.g. `"layers.0.neurons.2.bias"`).
    fn named_parameters(&self) -> Vec<(String, NodeId)>;

    fn num_parameters(&self) -> usize {
        self.parameters().len()
    }

    /// Resets the gradient of every parameter to zero.
    ///
    /// Must be called before each backward pass of a training loop: the engine
    /// accumulates gradients and never clears them itself.
    ///
    /// # Errors
    /// Returns `AutogradError::UnknownNode` if a parameter is not in `graph`.
    fn zero_grad(&self, graph: &Graph) -> Result<(), AutogradError> {
        for id in self.parameters() {
            graph.value(id)?.set_grad(0.0);
        }
        Ok(())
    }
}
