//! Public splitting entry points: stratified splits, per-class splits, and
//! the ratio-driven train/validation/test convenience.

use rand::Rng;
use tracing::debug;

use crate::allocate::allocate;
use crate::config::{SplitRatios, SplitSpec};
use crate::dataset::{LabeledDataset, Subset};
use crate::errors::SplitError;
use crate::partition::classwise_partition;
use crate::recombine::recombine;

/// Compute stratified split index sets for `dataset`.
///
/// This is the whole engine as a pure function of `(dataset, spec, rng)`:
/// partition indices by class, allocate per-class quotas, and recombine the
/// shuffled buckets into one index set per requested split. Two calls with
/// identical inputs and identically seeded RNGs return identical outputs.
///
/// Returned index sets are pairwise disjoint and jointly cover
/// `0..dataset.len()`. Each set's per-class counts are at least
/// `spec.min_per_class_per_split`; its total may differ from the requested
/// length by at most one sample per class beyond the first.
pub fn stratified_split_indices<D, R>(
    dataset: &D,
    spec: &SplitSpec,
    rng: &mut R,
) -> Result<Vec<Vec<usize>>, SplitError>
where
    D: LabeledDataset,
    R: Rng + ?Sized,
{
    // Length checks come first so a bad request fails before any shuffling.
    spec.validate(dataset.len())?;
    let buckets = classwise_partition(dataset, rng);
    let allocation = allocate(
        &buckets.sizes(),
        &spec.lengths,
        spec.min_per_class_per_split,
    )?;
    let outputs = recombine(&buckets, &allocation, spec.splits());
    debug!(
        splits = outputs.len(),
        classes = buckets.classes(),
        total = dataset.len(),
        "stratified split complete"
    );
    Ok(outputs)
}

/// Split `dataset` into stratified [`Subset`] views.
///
/// Thin wrapper over [`stratified_split_indices`] that packages each index
/// set as a read-only sub-dataset view.
pub fn stratified_split<'a, D, R>(
    dataset: &'a D,
    spec: &SplitSpec,
    rng: &mut R,
) -> Result<Vec<Subset<'a, D>>, SplitError>
where
    D: LabeledDataset,
    R: Rng + ?Sized,
{
    let outputs = stratified_split_indices(dataset, spec, rng)?;
    Ok(outputs
        .into_iter()
        .map(|indices| Subset::new(dataset, indices))
        .collect())
}

/// Split `dataset` into one shuffled [`Subset`] per class.
///
/// Subsets appear in first-occurrence order of their labels and jointly cover
/// the dataset. Useful when callers want to build their own per-class
/// sampling on top of the partitioner.
pub fn classwise_split<'a, D, R>(dataset: &'a D, rng: &mut R) -> Vec<Subset<'a, D>>
where
    D: LabeledDataset,
    R: Rng + ?Sized,
{
    classwise_partition(dataset, rng)
        .iter()
        .map(|(_, indices)| Subset::new(dataset, indices.to_vec()))
        .collect()
}

/// Stratified train/validation/test views over one dataset.
#[derive(Debug)]
pub struct TrainValTest<'a, D> {
    /// Training view.
    pub train: Subset<'a, D>,
    /// Validation view.
    pub validation: Subset<'a, D>,
    /// Test view.
    pub test: Subset<'a, D>,
}

// Manual impl for the same reason as Subset: no D: Clone requirement.
impl<D> Clone for TrainValTest<'_, D> {
    fn clone(&self) -> Self {
        Self {
            train: self.train.clone(),
            validation: self.validation.clone(),
            test: self.test.clone(),
        }
    }
}

/// Stratified train/validation/test split driven by [`SplitRatios`].
///
/// Ratios are converted to concrete lengths (test absorbs the rounding
/// remainder) and fed through [`stratified_split`] with the given per-class
/// floor.
pub fn train_val_test_split<'a, D, R>(
    dataset: &'a D,
    ratios: SplitRatios,
    min_per_class_per_split: usize,
    rng: &mut R,
) -> Result<TrainValTest<'a, D>, SplitError>
where
    D: LabeledDataset,
    R: Rng + ?Sized,
{
    let lengths = ratios.lengths(dataset.len())?;
    let spec = SplitSpec::new(lengths).with_min_per_class(min_per_class_per_split);
    let mut outputs = stratified_split(dataset, &spec, rng)?.into_iter();
    // stratified_split returned exactly three views for a three-length spec.
    let train = outputs.next().expect("train split");
    let validation = outputs.next().expect("validation split");
    let test = outputs.next().expect("test split");
    Ok(TrainValTest {
        train,
        validation,
        test,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::InMemoryDataset;
    use crate::rng::DeterministicRng;

    fn dataset(class_sizes: &[(&'static str, usize)]) -> InMemoryDataset<usize, &'static str> {
        let mut samples = Vec::new();
        for &(label, size) in class_sizes {
            for _ in 0..size {
                samples.push((samples.len(), label));
            }
        }
        InMemoryDataset::new(samples)
    }

    #[test]
    fn length_mismatch_fails_before_partitioning() {
        let data = dataset(&[("a", 10)]);
        let spec = SplitSpec::new(vec![4, 4]);
        let err = stratified_split_indices(&data, &spec, &mut DeterministicRng::new(0)).unwrap_err();
        assert_eq!(
            err,
            SplitError::LengthMismatch {
                requested: 8,
                actual: 10,
            }
        );
    }

    #[test]
    fn split_views_delegate_to_the_source_dataset() {
        let data = dataset(&[("a", 8), ("b", 8)]);
        let spec = SplitSpec::new(vec![8, 8]);
        let splits = stratified_split(&data, &spec, &mut DeterministicRng::new(9)).unwrap();
        assert_eq!(splits.len(), 2);
        for split in &splits {
            assert_eq!(split.len(), 8);
            for i in 0..split.len() {
                let (sample, label) = split.get(i);
                assert_eq!(data.get(sample), (sample, label));
            }
        }
    }

    #[test]
    fn classwise_split_yields_one_subset_per_class() {
        let data = dataset(&[("a", 3), ("b", 5), ("c", 2)]);
        let subsets = classwise_split(&data, &mut DeterministicRng::new(2));
        assert_eq!(subsets.len(), 3);
        assert_eq!(subsets[0].len(), 3);
        assert_eq!(subsets[1].len(), 5);
        assert_eq!(subsets[2].len(), 2);
        for subset in &subsets {
            let first = subset.label(0);
            for i in 1..subset.len() {
                assert_eq!(subset.label(i), first);
            }
        }
    }

    #[test]
    fn empty_dataset_with_empty_request_yields_no_splits() {
        let data: InMemoryDataset<usize, &str> = InMemoryDataset::new(Vec::new());
        let spec = SplitSpec::new(Vec::new());
        let splits = stratified_split_indices(&data, &spec, &mut DeterministicRng::new(0)).unwrap();
        assert!(splits.is_empty());
    }

    #[test]
    fn train_val_test_covers_dataset() {
        let data = dataset(&[("a", 60), ("b", 40)]);
        let split =
            train_val_test_split(&data, SplitRatios::default(), 1, &mut DeterministicRng::new(4))
                .unwrap();
        assert_eq!(
            split.train.len() + split.validation.len() + split.test.len(),
            100
        );
        // Every output sees both classes.
        for view in [&split.train, &split.validation, &split.test] {
            let labels: Vec<&str> = (0..view.len()).map(|i| view.label(i)).collect();
            assert!(labels.contains(&"a"));
            assert!(labels.contains(&"b"));
        }
    }

    #[test]
    fn train_val_test_clones_for_non_clone_datasets() {
        struct LabelsOnly(Vec<&'static str>);

        impl LabeledDataset for LabelsOnly {
            type Sample = usize;
            type Label = &'static str;

            fn len(&self) -> usize {
                self.0.len()
            }

            fn get(&self, index: usize) -> (usize, &'static str) {
                (index, self.0[index])
            }
        }

        let labels = (0..30)
            .map(|i| if i % 3 == 0 { "b" } else { "a" })
            .collect();
        let data = LabelsOnly(labels);
        let split =
            train_val_test_split(&data, SplitRatios::default(), 1, &mut DeterministicRng::new(2))
                .unwrap();
        let copy = split.clone();
        assert_eq!(copy.train.indices(), split.train.indices());
        assert_eq!(copy.validation.indices(), split.validation.indices());
        assert_eq!(copy.test.indices(), split.test.indices());
    }

    #[test]
    fn train_val_test_rejects_bad_ratios() {
        let data = dataset(&[("a", 10)]);
        let ratios = SplitRatios {
            train: 0.5,
            validation: 0.2,
            test: 0.2,
        };
        let err =
            train_val_test_split(&data, ratios, 1, &mut DeterministicRng::new(0)).unwrap_err();
        assert!(matches!(err, SplitError::Configuration(_)));
    }
}
