use crate::autograd::graph::{Graph, NodeId};
use crate::error::AutogradError;
use crate::nn::init::Initializer;
use crate::nn::layers::neuron::Neuron;
use crate::nn::module::Module;
use crate::value::{Operand, Value};
use log::debug;
use std::fmt;

/// Output of a [`Layer`]: a single value for one-neuron layers, a vector
/// otherwise.
#[derive(Debug, Clone)]
pub enum LayerOutput<'g> {
    Scalar(Value<'g>),
    Vector(Vec<Value<'g>>),
}

impl<'g> LayerOutput<'g> {
    fn from_values(mut values: Vec<Value<'g>>) -> Self {
        if values.len() == 1 {
            if let Some(value) = values.pop() {
                return LayerOutput::Scalar(value);
            }
        }
        LayerOutput::Vector(values)
    }

    /// Views the output as a slice, one entry per neuron.
    pub fn as_slice(&self) -> &[Value<'g>] {
        match self {
            LayerOutput::Scalar(value) => std::slice::from_ref(value),
            LayerOutput::Vector(values) => values,
        }
    }

    pub fn into_vec(self) -> Vec<Value<'g>> {
        match self {
            LayerOutput::Scalar(value) => vec![value],
            LayerOutput::Vector(values) => values,
        }
    }

    /// The single value of a one-neuron layer.
    pub fn scalar(&self) -> Option<Value<'g>> {
        match self {
            LayerOutput::Scalar(value) => Some(*value),
            LayerOutput::Vector(_) => None,
        }
    }

    pub fn len(&self) -> usize {
        self.as_slice().len()
    }

    pub fn is_empty(&self) -> bool {
        self.as_slice().is_empty()
    }
}

/// A row of independent neurons reading the same inputs.
#[derive(Debug, Clone)]
pub struct Layer {
    neurons: Vec<Neuron>,
}

impl Layer {
    /// Creates `neuron_count` biased tanh neurons with `input_count` inputs
    /// each.
    pub fn new<I>(graph: &Graph, input_count: usize, neuron_count: usize, init: &mut I) -> Self
    where
        I: Initializer + ?Sized,
    {
        let neurons = (0..neuron_count)
            .map(|_| Neuron::new(graph, input_count, true, &mut *init))
            .collect();
        debug!("Layer::new: {} -> {}", input_count, neuron_count);
        Layer { neurons }
    }

    /// Builds a layer from already constructed neurons.
    ///
    /// # Errors
    /// Returns `AutogradError::DimensionMismatch` if the neurons do not all
    /// take the same number of inputs as the first one.
    pub fn from_neurons(neurons: Vec<Neuron>) -> Result<Self, AutogradError> {
        if let Some(first) = neurons.first() {
            let expected = first.input_count();
            if let Some(other) = neurons.iter().find(|n| n.input_count() != expected) {
                return Err(AutogradError::DimensionMismatch {
                    expected,
                    actual: other.input_count(),
                });
            }
        }
        Ok(Layer { neurons })
    }

    pub fn neurons(&self) -> &[Neuron] {
        &self.neurons
    }

    pub fn output_count(&self) -> usize {
        self.neurons.len()
    }
}

impl Module for Layer {
    type Output<'g> = LayerOutput<'g>;

    fn forward<'g, I>(
        &self,
        graph: &'g Graph,
        inputs: &[I],
    ) -> Result<LayerOutput<'g>, AutogradError>
    where
        I: Into<Operand<'g>> + Copy,
    {
        let values = self
            .neurons
            .iter()
            .map(|neuron| neuron.forward(graph, inputs))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(LayerOutput::from_values(values))
    }

    fn parameters(&self) -> Vec<NodeId> {
        self.neurons.iter().flat_map(|n| n.parameters()).collect()
    }

    fn named_parameters(&self) -> Vec<(String, NodeId)> {
        let mut named = Vec::new();
        for (i, neuron) in self.neurons.iter().enumerate() {
            for (name, id) in neuron.named_parameters() {
                named.push((format!("neurons.{}.{}", i, name), id));
            }
        }
        named
    }
}

impl fmt::Display for Layer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Layer of [")?;
        for (i, neuron) in self.neurons.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", neuron)?;
        }
        write!(f, "]")
    }
}

#[cfg(test)]
#[path = "layer_test.rs"]
mod tests;
