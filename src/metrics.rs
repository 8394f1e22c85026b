//! Class-composition inspection for datasets and produced splits.
//!
//! A [`ClassBalance`] is a snapshot of how a collection's samples spread over
//! its classes. Taking one snapshot of the source and one of each split makes
//! it easy to check that stratification held: the per-class shares of a good
//! split sit within rounding slack of the source's.

use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;

use crate::dataset::LabeledDataset;

/// One class's population within a dataset or split.
#[derive(Clone, Debug, PartialEq)]
pub struct ClassShare<L> {
    /// Class label.
    pub label: L,
    /// Number of samples carrying this label.
    pub count: usize,
    /// Fraction of the collection carrying this label.
    pub share: f64,
}

/// Class composition snapshot of a dataset or split.
///
/// Built by [`class_balance`]; entries are ordered largest class first.
#[derive(Clone, Debug, PartialEq)]
pub struct ClassBalance<L> {
    total: usize,
    per_class: Vec<ClassShare<L>>,
}

impl<L: Hash + Eq> ClassBalance<L> {
    /// Number of samples in the snapshotted collection.
    pub fn total(&self) -> usize {
        self.total
    }

    /// Number of distinct classes.
    pub fn classes(&self) -> usize {
        self.per_class.len()
    }

    /// Per-class entries, largest class first (ties by label order).
    pub fn per_class(&self) -> &[ClassShare<L>] {
        &self.per_class
    }

    /// The smallest class. Split feasibility hinges on this one.
    pub fn minority(&self) -> &ClassShare<L> {
        self.per_class.last().expect("balance has at least one class")
    }

    /// Largest class population over the smallest.
    pub fn imbalance(&self) -> f64 {
        let majority = &self.per_class[0];
        majority.count as f64 / self.minority().count as f64
    }

    /// Share of `label`, or `None` when the class is absent.
    pub fn share_of(&self, label: &L) -> Option<f64> {
        self.per_class
            .iter()
            .find(|entry| entry.label == *label)
            .map(|entry| entry.share)
    }

    /// Largest absolute per-class share difference against `other`.
    ///
    /// Returns `None` when the two snapshots do not cover the same classes —
    /// for a stratified split of its own source that already means something
    /// went wrong.
    pub fn max_share_gap(&self, other: &Self) -> Option<f64> {
        if self.per_class.len() != other.per_class.len() {
            return None;
        }
        let mut gap = 0.0f64;
        for entry in &self.per_class {
            let other_share = other.share_of(&entry.label)?;
            gap = gap.max((entry.share - other_share).abs());
        }
        Some(gap)
    }
}

/// Count samples per label with a single scan.
pub fn label_counts<D: LabeledDataset>(dataset: &D) -> HashMap<D::Label, usize> {
    let mut counts = HashMap::new();
    for index in 0..dataset.len() {
        *counts.entry(dataset.label(index)).or_insert(0) += 1;
    }
    counts
}

/// Snapshot the class composition of `dataset` (or any split view of one).
///
/// Returns `None` for an empty collection.
pub fn class_balance<D>(dataset: &D) -> Option<ClassBalance<D::Label>>
where
    D: LabeledDataset,
    D::Label: Ord,
{
    let counts = label_counts(dataset);
    if counts.is_empty() {
        return None;
    }
    let total: usize = counts.values().sum();
    let mut per_class: Vec<ClassShare<D::Label>> = counts
        .into_iter()
        .map(|(label, count)| ClassShare {
            label,
            count,
            share: count as f64 / total as f64,
        })
        .collect();
    per_class.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.label.cmp(&b.label)));
    Some(ClassBalance { total, per_class })
}
