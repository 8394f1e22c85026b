use thiserror::Error;

/// Error type for invalid split requests.
///
/// All variants are caller-input errors raised synchronously before any
/// partitioning work is committed; the engine never returns a partial result.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SplitError {
    /// Requested split lengths do not add up to the dataset size.
    #[error("sum of requested split lengths ({requested}) does not equal the dataset size ({actual})")]
    LengthMismatch {
        /// Sum of the requested lengths.
        requested: usize,
        /// Actual dataset size.
        actual: usize,
    },
    /// A requested split length is zero or too small to hold the per-class reservation.
    #[error("split length {length} at position {position} is below the required minimum of {required}")]
    InvalidSplitSize {
        /// Position of the offending length in the request.
        position: usize,
        /// The offending length.
        length: usize,
        /// Smallest length the request could accept at this position.
        required: usize,
    },
    /// A class is too small to give every split its guaranteed minimum.
    #[error("class '{class}' has {size} samples but needs at least {required} ({splits} splits x {min_per_class} per split)")]
    InsufficientMinorityClass {
        /// Debug rendering of the offending class label.
        class: String,
        /// Number of samples the class actually has.
        size: usize,
        /// Minimum population the class would need.
        required: usize,
        /// Number of requested splits.
        splits: usize,
        /// Guaranteed minimum per class per split.
        min_per_class: usize,
    },
    /// Invalid ratio or spec configuration.
    #[error("configuration error: {0}")]
    Configuration(String),
}
