//! Dataset interfaces and index views.
//!
//! Ownership model:
//! - `LabeledDataset` is the engine-facing interface: a length and a
//!   `(sample, label)` lookup per index. The splitter only reads labels.
//! - `Subset` is a read-only index view over a dataset; splits are built from
//!   these so no sample is ever copied or moved.

use std::fmt::Debug;
use std::hash::Hash;

/// A finite, randomly indexable collection of `(sample, label)` pairs.
///
/// The splitting engine needs only `len` and `label`; `get` exists so split
/// views can delegate full sample access to the original dataset.
pub trait LabeledDataset {
    /// Sample payload type.
    type Sample;
    /// Class label type. `Debug` is used to name the class in error reports.
    type Label: Hash + Eq + Clone + Debug;

    /// Number of samples in the dataset.
    fn len(&self) -> usize;

    /// Return the `(sample, label)` pair at `index`.
    ///
    /// Callers must keep `index < len()`; implementations may panic otherwise.
    fn get(&self, index: usize) -> (Self::Sample, Self::Label);

    /// Return only the label at `index`.
    ///
    /// Implementations that can fetch labels without materializing the sample
    /// should override this; the splitter calls it once per index.
    fn label(&self, index: usize) -> Self::Label {
        self.get(index).1
    }

    /// Whether the dataset holds no samples.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<D: LabeledDataset + ?Sized> LabeledDataset for &D {
    type Sample = D::Sample;
    type Label = D::Label;

    fn len(&self) -> usize {
        (**self).len()
    }

    fn get(&self, index: usize) -> (Self::Sample, Self::Label) {
        (**self).get(index)
    }

    fn label(&self, index: usize) -> Self::Label {
        (**self).label(index)
    }
}

/// Vec-backed dataset for in-memory corpora and tests.
#[derive(Clone, Debug, Default)]
pub struct InMemoryDataset<S, L> {
    samples: Vec<(S, L)>,
}

impl<S, L> InMemoryDataset<S, L> {
    /// Create a dataset from `(sample, label)` pairs.
    pub fn new(samples: Vec<(S, L)>) -> Self {
        Self { samples }
    }
}

impl<S, L> FromIterator<(S, L)> for InMemoryDataset<S, L> {
    fn from_iter<I: IntoIterator<Item = (S, L)>>(iter: I) -> Self {
        Self {
            samples: iter.into_iter().collect(),
        }
    }
}

impl<S, L> LabeledDataset for InMemoryDataset<S, L>
where
    S: Clone,
    L: Hash + Eq + Clone + Debug,
{
    type Sample = S;
    type Label = L;

    fn len(&self) -> usize {
        self.samples.len()
    }

    fn get(&self, index: usize) -> (S, L) {
        let (sample, label) = &self.samples[index];
        (sample.clone(), label.clone())
    }

    fn label(&self, index: usize) -> L {
        self.samples[index].1.clone()
    }
}

/// Read-only view over a subset of a dataset's indices.
///
/// Behaves as a `LabeledDataset` itself: index `i` of the view maps to index
/// `indices[i]` of the original. Views hold only the index array.
#[derive(Debug)]
pub struct Subset<'a, D> {
    dataset: &'a D,
    indices: Vec<usize>,
}

// Derived Clone would demand D: Clone; the dataset field is a shared
// reference, so views clone for any dataset.
impl<D> Clone for Subset<'_, D> {
    fn clone(&self) -> Self {
        Self {
            dataset: self.dataset,
            indices: self.indices.clone(),
        }
    }
}

impl<'a, D: LabeledDataset> Subset<'a, D> {
    /// Create a view of `dataset` restricted to `indices`.
    ///
    /// Out-of-range indices surface as panics at `get` time.
    pub fn new(dataset: &'a D, indices: Vec<usize>) -> Self {
        Self { dataset, indices }
    }

    /// Indices of the original dataset covered by this view, in view order.
    pub fn indices(&self) -> &[usize] {
        &self.indices
    }

    /// Consume the view and return its index mapping.
    pub fn into_indices(self) -> Vec<usize> {
        self.indices
    }

    /// The dataset this view borrows from.
    pub fn dataset(&self) -> &'a D {
        self.dataset
    }
}

impl<D: LabeledDataset> LabeledDataset for Subset<'_, D> {
    type Sample = D::Sample;
    type Label = D::Label;

    fn len(&self) -> usize {
        self.indices.len()
    }

    fn get(&self, index: usize) -> (Self::Sample, Self::Label) {
        self.dataset.get(self.indices[index])
    }

    fn label(&self, index: usize) -> Self::Label {
        self.dataset.label(self.indices[index])
    }
}
