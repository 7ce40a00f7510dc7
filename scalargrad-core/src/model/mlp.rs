use crate::autograd::graph::{Graph, NodeId};
use crate::error::AutogradError;
use crate::nn::init::Initializer;
use crate::nn::layers::{Layer, LayerOutput};
use crate::nn::module::Module;
use crate::value::{Operand, Value};
use log::debug;
use std::fmt;

/// Multi-layer perceptron: layers applied in sequence.
#[derive(Debug, Clone)]
pub struct Mlp {
    layers: Vec<Layer>,
}

impl Mlp {
    /// Creates a network reading `input_count` inputs, with one tanh layer per
    /// entry of `layer_sizes`. Layer `i` reads the outputs of layer `i - 1`.
    ///
    /// # Errors
    /// Returns `AutogradError::InvalidArgument` if `layer_sizes` is empty.
    pub fn new<I>(
        graph: &Graph,
        input_count: usize,
        layer_sizes: &[usize],
        init: &mut I,
    ) -> Result<Self, AutogradError>
    where
        I: Initializer + ?Sized,
    {
        if layer_sizes.is_empty() {
            return Err(AutogradError::InvalidArgument(
                "Mlp needs at least one layer size".to_string(),
            ));
        }

        let mut layers = Vec::with_capacity(layer_sizes.len());
        let mut fan_in = input_count;
        for &size in layer_sizes {
            layers.push(Layer::new(graph, fan_in, size, &mut *init));
            fan_in = size;
        }
        let mlp = Mlp { layers };
        debug!(
            "Mlp::new: {} inputs, layers {:?}, {} parameters",
            input_count,
            layer_sizes,
            mlp.num_parameters()
        );
        Ok(mlp)
    }

    pub fn layers(&self) -> &[Layer] {
        &self.layers
    }
}

impl Module for Mlp {
    type Output<'g> = LayerOutput<'g>;

    fn forward<'g, I>(
        &self,
        graph: &'g Graph,
        inputs: &[I],
    ) -> Result<LayerOutput<'g>, AutogradError>
    where
        I: Into<Operand<'g>> + Copy,
    {
        let (first, rest) = match self.layers.split_first() {
            Some(split) => split,
            None => {
                return Err(AutogradError::InternalError(
                    "Mlp without layers".to_string(),
                ))
            }
        };
        let mut current = first.forward(graph, inputs)?;
        for layer in rest {
            let values: Vec<Value<'g>> = current.into_vec();
            current = layer.forward(graph, &values)?;
        }
        Ok(current)
    }

    fn parameters(&self) -> Vec<NodeId> {
        self.layers.iter().flat_map(|l| l.parameters()).collect()
    }

    fn named_parameters(&self) -> Vec<(String, NodeId)> {
        let mut params = Vec::new();
        for (index, layer) in self.layers.iter().enumerate() {
            for (param_name, id) in layer.named_parameters() {
                params.push((format!("layers.{}.{}", index, param_name), id));
            }
        }
        params
    }
}

impl fmt::Display for Mlp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "MLP of [")?;
        for (i, layer) in self.layers.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", layer)?;
        }
        write!(f, "]")
    }
}

#[cfg(test)]
#[path = "mlp_test.rs"]
mod tests;
