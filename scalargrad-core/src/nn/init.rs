use crate::error::AutogradError;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::{Distribution, Uniform};

/// Source of initial parameter values.
///
/// Modules draw one value per parameter, weights first and then the bias, in
/// construction order. Injecting the source keeps model construction
/// deterministic under test.
pub trait Initializer {
    fn next_value(&mut self) -> f64;
}

/// Samples parameters uniformly from `[low, high)`.
#[derive(Debug, Clone)]
pub struct UniformInit<R: Rng> {
    rng: R,
    distribution: Uniform<f64>,
}

impl<R: Rng> UniformInit<R> {
    /// Creates an initializer sampling `[low, high)` from `rng`.
    ///
    /// # Errors
    /// Returns `AutogradError::InvalidArgument` if a bound is not finite or
    /// `low >= high`.
    pub fn new(rng: R, low: f64, high: f64) -> Result<Self, AutogradError> {
        if !low.is_finite() || !high.is_finite() || low >= high {
            return Err(AutogradError::InvalidArgument(format!(
                "uniform initializer needs finite bounds with low < high, got [{}, {})",
                low, high
            )));
        }
        Ok(UniformInit {
            rng,
            distribution: Uniform::new(low, high),
        })
    }

    /// Samples `[-1, 1)`.
    pub fn symmetric(rng: R) -> Self {
        UniformInit {
            rng,
            distribution: Uniform::new(-1.0, 1.0),
        }
    }
}

impl UniformInit<StdRng> {
    /// `[-1, 1)` from a `StdRng` seeded with `seed`.
    pub fn seeded(seed: u64) -> Self {
        Self::symmetric(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> Initializer for UniformInit<R> {
    fn next_value(&mut self) -> f64 {
        self.distribution.sample(&mut self.rng)
    }
}

/// Gives every parameter the same value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConstantInit(pub f64);

impl Initializer for ConstantInit {
    fn next_value(&mut self) -> f64 {
        self.0
    }
}

/// Adapts any `FnMut() -> f64` closure.
pub struct FnInit<F>(pub F);

impl<F: FnMut() -> f64> Initializer for FnInit<F> {
    fn next_value(&mut self) -> f64 {
        (self.0)()
    }
}

// --- Tests ---
#[cfg(test)]
#[path = "init_test.rs"]
mod tests;
