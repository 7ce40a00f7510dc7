use crate::autograd::graph::{Graph, NodeId};
use crate::error::AutogradError;
use crate::nn::init::Initializer;
use crate::nn::layers::activation::Activation;
use crate::nn::module::Module;
use crate::value::{Operand, Value};
use log::debug;
use std::fmt;

/// A single unit computing `activation(bias + Σ wᵢ·xᵢ)`.
///
/// Weights and bias are leaves of the graph the neuron was created in.
#[derive(Debug, Clone)]
pub struct Neuron {
    weights: Vec<NodeId>,
    bias: Option<NodeId>,
    activation: Activation,
}

impl Neuron {
    /// Creates a tanh neuron with `input_count` weights and an optional bias.
    ///
    /// Initial values are drawn from `init`: the weights in order, then the
    /// bias.
    pub fn new<I>(graph: &Graph, input_count: usize, has_bias: bool, init: &mut I) -> Self
    where
        I: Initializer + ?Sized,
    {
        Self::with_activation(graph, input_count, has_bias, Activation::default(), init)
    }

    pub fn with_activation<I>(
        graph: &Graph,
        input_count: usize,
        has_bias: bool,
        activation: Activation,
        init: &mut I,
    ) -> Self
    where
        I: Initializer + ?Sized,
    {
        let weights: Vec<NodeId> = (0..input_count)
            .map(|_| graph.leaf(init.next_value()).id())
            .collect();
        let bias = has_bias.then(|| graph.leaf(init.next_value()).id());
        debug!(
            "Neuron::new: {} inputs, bias: {}, activation: {}",
            input_count, has_bias, activation
        );
        Neuron {
            weights,
            bias,
            activation,
        }
    }

    pub fn input_count(&self) -> usize {
        self.weights.len()
    }

    pub fn weights(&self) -> &[NodeId] {
        &self.weights
    }

    pub fn bias(&self) -> Option<NodeId> {
        self.bias
    }

    pub fn activation(&self) -> Activation {
        self.activation
    }
}

impl Module for Neuron {
    type Output<'g> = Value<'g>;

    fn forward<'g, I>(&self, graph: &'g Graph, inputs: &[I]) -> Result<Value<'g>, AutogradError>
    where
        I: Into<Operand<'g>> + Copy,
    {
        if inputs.len() != self.weights.len() {
            return Err(AutogradError::DimensionMismatch {
                expected: self.weights.len(),
                actual: inputs.len(),
            });
        }

        // The sum starts from the bias, then adds each product in order.
        let mut sum = match self.bias {
            Some(bias) => Some(graph.value(bias)?),
            None => None,
        };
        for (&weight, &input) in self.weights.iter().zip(inputs) {
            let product = graph.multiply(graph.value(weight)?, input);
            sum = Some(match sum {
                Some(partial) => partial + product,
                None => product,
            });
        }
        let pre_activation = match sum {
            Some(sum) => sum,
            None => graph.leaf(0.0),
        };

        Ok(self.activation.apply(pre_activation))
    }

    fn parameters(&self) -> Vec<NodeId> {
        self.weights.iter().copied().chain(self.bias).collect()
    }

    fn named_parameters(&self) -> Vec<(String, NodeId)> {
        let mut named: Vec<(String, NodeId)> = self
            .weights
            .iter()
            .enumerate()
            .map(|(j, &id)| (format!("weights.{}", j), id))
            .collect();
        if let Some(bias) = self.bias {
            named.push(("bias".to_string(), bias));
        }
        named
    }
}

impl fmt::Display for Neuron {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}Neuron({})", self.activation, self.weights.len())
    }
}

#[cfg(test)]
#[path = "neuron_test.rs"]
mod tests;
