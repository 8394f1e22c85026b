#![doc = include_str!("../README.md")]
#![warn(missing_docs)]

/// Per-class, per-split quota allocation.
pub mod allocate;
/// Split request and ratio configuration types.
pub mod config;
/// Dataset interfaces and index views.
pub mod dataset;
/// Classwise partitioning into shuffled buckets.
pub mod partition;
/// Recombination of bucket slices into final splits.
pub mod recombine;
/// Deterministic RNG helper.
pub mod rng;
/// Splitting entry points.
pub mod split;

/// Class-balance inspection helpers.
pub mod metrics;

mod errors;

pub use allocate::allocate;
pub use config::{SplitRatios, SplitSpec};
pub use dataset::{InMemoryDataset, LabeledDataset, Subset};
pub use errors::SplitError;
pub use metrics::{ClassBalance, ClassShare, class_balance, label_counts};
pub use partition::{ClassBuckets, classwise_partition};
pub use recombine::recombine;
pub use rng::DeterministicRng;
pub use split::{
    TrainValTest, classwise_split, stratified_split, stratified_split_indices,
    train_val_test_split,
};
