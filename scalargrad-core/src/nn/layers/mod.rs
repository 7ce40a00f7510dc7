// src/nn/layers/mod.rs
// Building blocks of a multi-layer perceptron.

pub mod activation;
pub mod layer;
pub mod neuron;

// Re-export key layer structs
pub use activation::Activation;
pub use layer::{Layer, LayerOutput};
pub use neuron::Neuron;
