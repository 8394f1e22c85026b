use serde::{Deserialize, Serialize};

use crate::errors::SplitError;

fn default_min_per_class() -> usize {
    1
}

/// A split request: target lengths plus the per-class floor.
///
/// `lengths[k]` is the requested size of output split `k`; the lengths must
/// sum to the dataset size. `min_per_class_per_split` is the guaranteed
/// number of samples every split receives from every class.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SplitSpec {
    /// Requested split sizes, in output order.
    pub lengths: Vec<usize>,
    /// Guaranteed minimum samples per class in every split.
    #[serde(default = "default_min_per_class")]
    pub min_per_class_per_split: usize,
}

impl SplitSpec {
    /// Create a spec with the default per-class floor of 1.
    pub fn new(lengths: Vec<usize>) -> Self {
        Self {
            lengths,
            min_per_class_per_split: default_min_per_class(),
        }
    }

    /// Override the per-class floor. `0` disables the reservation entirely.
    pub fn with_min_per_class(mut self, min_per_class_per_split: usize) -> Self {
        self.min_per_class_per_split = min_per_class_per_split;
        self
    }

    /// Number of requested splits.
    pub fn splits(&self) -> usize {
        self.lengths.len()
    }

    /// Sum of the requested lengths.
    pub fn total(&self) -> usize {
        self.lengths.iter().sum()
    }

    /// Validate the spec against a dataset of `dataset_len` samples.
    ///
    /// Checks the total and that every length is positive; per-class
    /// feasibility is checked later, once class sizes are known.
    pub fn validate(&self, dataset_len: usize) -> Result<(), SplitError> {
        let requested = self.total();
        if requested != dataset_len {
            return Err(SplitError::LengthMismatch {
                requested,
                actual: dataset_len,
            });
        }
        for (position, &length) in self.lengths.iter().enumerate() {
            if length == 0 {
                return Err(SplitError::InvalidSplitSize {
                    position,
                    length,
                    required: 1,
                });
            }
        }
        Ok(())
    }
}

/// Ratio configuration for train/validation/test splitting.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct SplitRatios {
    /// Fraction assigned to train.
    pub train: f64,
    /// Fraction assigned to validation.
    pub validation: f64,
    /// Fraction assigned to test.
    pub test: f64,
}

impl Default for SplitRatios {
    fn default() -> Self {
        Self {
            train: 0.8,
            validation: 0.1,
            test: 0.1,
        }
    }
}

impl SplitRatios {
    /// Validate that ratios are non-negative and sum to `1.0` (within epsilon).
    pub fn normalized(self) -> Result<Self, SplitError> {
        if self.train < 0.0 || self.validation < 0.0 || self.test < 0.0 {
            return Err(SplitError::Configuration(
                "split ratios must be non-negative".to_string(),
            ));
        }
        let sum = self.train + self.validation + self.test;
        if (sum - 1.0).abs() > 1e-6 {
            return Err(SplitError::Configuration(
                "split ratios must sum to 1.0".to_string(),
            ));
        }
        Ok(self)
    }

    /// Convert ratios into concrete lengths for a dataset of `n` samples.
    ///
    /// Train and validation are rounded; test absorbs the remainder so the
    /// lengths always sum to `n` exactly.
    pub fn lengths(self, n: usize) -> Result<Vec<usize>, SplitError> {
        let ratios = self.normalized()?;
        let train = (n as f64 * ratios.train).round() as usize;
        let validation = (n as f64 * ratios.validation).round() as usize;
        let test = n.checked_sub(train + validation).ok_or_else(|| {
            SplitError::Configuration(format!(
                "rounded train/validation lengths exceed the dataset size ({n})"
            ))
        })?;
        Ok(vec![train, validation, test])
    }
}
