//! Classwise partitioning: group dataset indices by label and shuffle each
//! bucket with the caller-supplied RNG.

use indexmap::IndexMap;
use rand::Rng;
use rand::seq::SliceRandom;
use tracing::debug;

use crate::dataset::LabeledDataset;

/// Per-class shuffled index buckets.
///
/// Built once by [`classwise_partition`] and never mutated afterwards. Bucket
/// order is the insertion order of each label's first occurrence; together the
/// buckets cover `0..dataset.len()` exactly once.
#[derive(Clone, Debug)]
pub struct ClassBuckets<L> {
    buckets: IndexMap<L, Vec<usize>>,
}

impl<L: std::hash::Hash + Eq> ClassBuckets<L> {
    /// Number of distinct classes.
    pub fn classes(&self) -> usize {
        self.buckets.len()
    }

    /// Total number of indices across all buckets.
    pub fn total(&self) -> usize {
        self.buckets.values().map(Vec::len).sum()
    }

    /// Iterate `(label, shuffled indices)` in first-occurrence order.
    pub fn iter(&self) -> impl Iterator<Item = (&L, &[usize])> {
        self.buckets
            .iter()
            .map(|(label, indices)| (label, indices.as_slice()))
    }

    /// Per-class sizes, in the same order as [`ClassBuckets::iter`].
    pub fn sizes(&self) -> IndexMap<L, usize>
    where
        L: Clone,
    {
        self.buckets
            .iter()
            .map(|(label, indices)| (label.clone(), indices.len()))
            .collect()
    }

    /// Shuffled indices for `label`, if the class exists.
    pub fn get(&self, label: &L) -> Option<&[usize]> {
        self.buckets.get(label).map(Vec::as_slice)
    }
}

/// Group dataset indices by label and shuffle each bucket independently.
///
/// Scans all indices once, so the dataset's `label` lookup is called exactly
/// `dataset.len()` times. Deterministic for a seeded `rng`; an empty dataset
/// yields an empty mapping.
pub fn classwise_partition<D, R>(dataset: &D, rng: &mut R) -> ClassBuckets<D::Label>
where
    D: LabeledDataset,
    R: Rng + ?Sized,
{
    let mut buckets: IndexMap<D::Label, Vec<usize>> = IndexMap::new();
    for index in 0..dataset.len() {
        buckets.entry(dataset.label(index)).or_default().push(index);
    }
    for indices in buckets.values_mut() {
        indices.shuffle(rng);
    }
    debug!(
        classes = buckets.len(),
        total = dataset.len(),
        "partitioned dataset into class buckets"
    );
    ClassBuckets { buckets }
}
