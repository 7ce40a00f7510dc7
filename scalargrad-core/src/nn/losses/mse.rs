// scalargrad-core/src/nn/losses/mse.rs

use crate::autograd::graph::Graph;
use crate::error::AutogradError;
use crate::value::{Operand, Value};
use std::str::FromStr;

/// Specifies the reduction to apply to the squared errors:
/// 'mean' | 'sum'
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Reduction {
    Mean,
    #[default]
    Sum,
}

impl FromStr for Reduction {
    type Err = AutogradError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "mean" => Ok(Reduction::Mean),
            "sum" => Ok(Reduction::Sum),
            _ => Err(AutogradError::InvalidArgument(format!(
                "Unsupported reduction type: {}",
                s
            ))),
        }
    }
}

/// Squared-error loss between predictions and targets.
///
/// `Sum` gives `Σ (pred - target)²`; `Mean` divides it by the number of
/// pairs. The loss is an ordinary node, so `loss.backward()` reaches every
/// prediction (and every target that is a node).
#[derive(Debug, Clone, Copy, Default)]
pub struct MseLoss {
    reduction: Reduction,
}

impl MseLoss {
    pub fn new(reduction: Reduction) -> Self {
        MseLoss { reduction }
    }

    pub fn reduction(&self) -> Reduction {
        self.reduction
    }

    /// Records the loss over `predictions` and `targets` in `graph`.
    ///
    /// # Errors
    /// `AutogradError::DimensionMismatch` if the lengths differ,
    /// `AutogradError::InvalidArgument` if both are empty.
    pub fn calculate<'g, P, T>(
        &self,
        graph: &'g Graph,
        predictions: &[P],
        targets: &[T],
    ) -> Result<Value<'g>, AutogradError>
    where
        P: Into<Operand<'g>> + Copy,
        T: Into<Operand<'g>> + Copy,
    {
        if predictions.len() != targets.len() {
            return Err(AutogradError::DimensionMismatch {
                expected: targets.len(),
                actual: predictions.len(),
            });
        }
        if predictions.is_empty() {
            return Err(AutogradError::InvalidArgument(
                "MseLoss needs at least one prediction".to_string(),
            ));
        }

        let mut total: Option<Value<'g>> = None;
        for (&prediction, &target) in predictions.iter().zip(targets) {
            let squared = graph.subtract(prediction, target).powf(2.0);
            total = Some(match total {
                Some(total) => total + squared,
                None => squared,
            });
        }
        let total = match total {
            Some(total) => total,
            None => return Err(AutogradError::InternalError("empty loss sum".to_string())),
        };

        Ok(match self.reduction {
            Reduction::Sum => total,
            Reduction::Mean => total / predictions.len() as f64,
        })
    }
}

#[cfg(test)]
#[path = "mse_test.rs"]
mod tests;
