use crate::value::Value;
use std::fmt;

/// Nonlinearity applied to a neuron's weighted sum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Activation {
    #[default]
    Tanh,
    Relu,
    Sigmoid,
    /// Identity: the weighted sum is returned unchanged.
    Linear,
}

impl Activation {
    pub fn apply<'g>(self, pre_activation: Value<'g>) -> Value<'g> {
        match self {
            Activation::Tanh => pre_activation.tanh(),
            Activation::Relu => pre_activation.relu(),
            Activation::Sigmoid => pre_activation.sigmoid(),
            Activation::Linear => pre_activation,
        }
    }
}

impl fmt::Display for Activation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Activation::Tanh => "Tanh",
            Activation::Relu => "ReLU",
            Activation::Sigmoid => "Sigmoid",
            Activation::Linear => "Linear",
        };
        write!(f, "{}", name)
    }
}
