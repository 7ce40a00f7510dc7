// src/nn/losses/mod.rs
// Loss functions built from graph operations.

pub mod mse;

pub use mse::{MseLoss, Reduction};
