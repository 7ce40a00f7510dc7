// src/nn/mod.rs
// Neural network building blocks: the Module trait, initializers, layers and losses.

pub mod init;
pub mod layers;
pub mod losses;
pub mod module; // Trait Module

// Re-export common items
pub use init::{ConstantInit, FnInit, Initializer, UniformInit};
pub use layers::{Activation, Layer, LayerOutput, Neuron};
pub use losses::{MseLoss, Reduction};
pub use module::Module;
