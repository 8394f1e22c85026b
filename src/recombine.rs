//! Recombination: slice each shuffled class bucket by its allocated counts
//! and concatenate same-split slices across classes.

use std::hash::Hash;

use indexmap::IndexMap;

use crate::partition::ClassBuckets;

/// Materialize per-split index sets from buckets and an allocation.
///
/// Split `k` receives the `k`-th contiguous run of every class's shuffled
/// bucket, so the partitioner's shuffle is reused rather than redrawn and one
/// RNG pass reproduces the whole split. The outputs are pairwise disjoint and
/// their union is exactly the indices held by `buckets`.
///
/// The allocation must cover every bucket with counts summing to the bucket's
/// size, which [`crate::allocate::allocate`] guarantees.
pub fn recombine<L>(
    buckets: &ClassBuckets<L>,
    allocation: &IndexMap<L, Vec<usize>>,
    splits: usize,
) -> Vec<Vec<usize>>
where
    L: Hash + Eq,
{
    let mut outputs: Vec<Vec<usize>> = vec![Vec::new(); splits];
    for (label, indices) in buckets.iter() {
        let counts = &allocation[label];
        debug_assert_eq!(counts.len(), splits);
        debug_assert_eq!(counts.iter().sum::<usize>(), indices.len());
        let mut cursor = 0;
        for (output, &count) in outputs.iter_mut().zip(counts) {
            output.extend_from_slice(&indices[cursor..cursor + count]);
            cursor += count;
        }
    }
    outputs
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::InMemoryDataset;
    use crate::partition::classwise_partition;
    use crate::rng::DeterministicRng;

    fn two_class_dataset() -> InMemoryDataset<usize, &'static str> {
        (0..10)
            .map(|i| (i, if i < 6 { "a" } else { "b" }))
            .collect()
    }

    #[test]
    fn splits_are_disjoint_and_cover_everything() {
        let dataset = two_class_dataset();
        let mut rng = DeterministicRng::new(5);
        let buckets = classwise_partition(&dataset, &mut rng);

        let mut allocation = IndexMap::new();
        allocation.insert("a", vec![4, 2]);
        allocation.insert("b", vec![2, 2]);

        let outputs = recombine(&buckets, &allocation, 2);
        assert_eq!(outputs.len(), 2);
        assert_eq!(outputs[0].len(), 6);
        assert_eq!(outputs[1].len(), 4);

        let mut all: Vec<usize> = outputs.iter().flatten().copied().collect();
        all.sort_unstable();
        assert_eq!(all, (0..10).collect::<Vec<_>>());
    }

    #[test]
    fn split_slices_reuse_bucket_order() {
        let dataset = two_class_dataset();
        let mut rng = DeterministicRng::new(5);
        let buckets = classwise_partition(&dataset, &mut rng);

        let mut allocation = IndexMap::new();
        allocation.insert("a", vec![3, 3]);
        allocation.insert("b", vec![1, 3]);

        let outputs = recombine(&buckets, &allocation, 2);
        let a = buckets.get(&"a").unwrap();
        let b = buckets.get(&"b").unwrap();
        assert_eq!(&outputs[0][..3], &a[..3]);
        assert_eq!(outputs[0][3], b[0]);
        assert_eq!(&outputs[1][..3], &a[3..]);
        assert_eq!(&outputs[1][3..], &b[1..]);
    }

    #[test]
    fn zero_splits_yield_no_outputs() {
        let dataset: InMemoryDataset<usize, &str> = InMemoryDataset::new(Vec::new());
        let mut rng = DeterministicRng::new(0);
        let buckets = classwise_partition(&dataset, &mut rng);
        let outputs = recombine(&buckets, &IndexMap::new(), 0);
        assert!(outputs.is_empty());
    }
}
