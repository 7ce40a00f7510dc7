use crate::autograd::graph::{Graph, NodeId};
use crate::error::AutogradError;
use crate::optim::optimizer_trait::Optimizer;
use log::{debug, trace};

/// Implements plain Stochastic Gradient Descent: `data -= lr * grad`.
#[derive(Debug, Clone)]
pub struct SgdOptimizer {
    params: Vec<NodeId>,
    lr: f64,
}

impl SgdOptimizer {
    /// Creates a new `SgdOptimizer`.
    ///
    /// # Arguments
    ///
    /// * `params`: The parameter leaves to optimize, typically
    ///   `module.parameters()`.
    /// * `lr`: The learning rate.
    ///
    /// # Errors
    /// Returns `AutogradError::InvalidArgument` if `lr` is negative or not
    /// finite.
    pub fn new(params: impl IntoIterator<Item = NodeId>, lr: f64) -> Result<Self, AutogradError> {
        validate_lr(lr)?;
        Ok(SgdOptimizer {
            params: params.into_iter().collect(),
            lr,
        })
    }

    pub fn lr(&self) -> f64 {
        self.lr
    }

    /// Changes the learning rate used by subsequent steps.
    ///
    /// # Errors
    /// Same conditions as [`SgdOptimizer::new`].
    pub fn set_lr(&mut self, lr: f64) -> Result<(), AutogradError> {
        validate_lr(lr)?;
        self.lr = lr;
        Ok(())
    }

    pub fn params(&self) -> &[NodeId] {
        &self.params
    }
}

fn validate_lr(lr: f64) -> Result<(), AutogradError> {
    if !lr.is_finite() || lr < 0.0 {
        return Err(AutogradError::InvalidArgument(format!(
            "learning rate must be finite and non-negative, got {}",
            lr
        )));
    }
    Ok(())
}

impl Optimizer for SgdOptimizer {
    fn step(&mut self, graph: &Graph) -> Result<(), AutogradError> {
        debug!("SgdOptimizer::step: {} params, lr {}", self.params.len(), self.lr);
        for &id in &self.params {
            let param = graph.value(id)?;
            let updated = param.data() - self.lr * param.grad();
            trace!("sgd: {:?} {} -> {}", id, param.data(), updated);
            param.set_data(updated);
        }
        Ok(())
    }

    fn zero_grad(&mut self, graph: &Graph) -> Result<(), AutogradError> {
        debug!("SgdOptimizer::zero_grad: {} params", self.params.len());
        for &id in &self.params {
            graph.value(id)?.set_grad(0.0);
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "sgd_test.rs"]
mod tests;
