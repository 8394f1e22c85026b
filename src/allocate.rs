//! Quota allocation: decide how many samples of each class go to each split.
//!
//! Every class first reserves `min_per_class_per_split` units for each split,
//! then the rest is spread with one shared proportion vector derived from the
//! requested lengths, using largest-fractional-remainder rounding. Per-class
//! totals are exact by construction; per-split totals may drift from the
//! request by at most one sample per extra class.

use std::fmt::Debug;
use std::hash::Hash;

use indexmap::IndexMap;
use tracing::debug;

use crate::errors::SplitError;

/// Compute per-class, per-split sample counts.
///
/// `class_sizes` maps each label to its population; `lengths` are the
/// requested split sizes. Returns, for each class, a vector of `lengths.len()`
/// counts summing to the class size, each at least `min_per_class_per_split`.
///
/// Fails with [`SplitError::LengthMismatch`] when the lengths do not sum to
/// the total population, [`SplitError::InvalidSplitSize`] when a length is
/// zero or cannot hold the per-class reservation, and
/// [`SplitError::InsufficientMinorityClass`] when a class is too small to
/// cover its reservation across all splits.
pub fn allocate<L>(
    class_sizes: &IndexMap<L, usize>,
    lengths: &[usize],
    min_per_class_per_split: usize,
) -> Result<IndexMap<L, Vec<usize>>, SplitError>
where
    L: Hash + Eq + Clone + Debug,
{
    let total: usize = class_sizes.values().sum();
    let requested: usize = lengths.iter().sum();
    if requested != total {
        return Err(SplitError::LengthMismatch {
            requested,
            actual: total,
        });
    }

    let splits = lengths.len();
    let classes = class_sizes.len();

    // Each split must hold the reservation for every class at once.
    let reserved_per_split = classes * min_per_class_per_split;
    let min_length = reserved_per_split.max(1);
    for (position, &length) in lengths.iter().enumerate() {
        if length < min_length {
            return Err(SplitError::InvalidSplitSize {
                position,
                length,
                required: min_length,
            });
        }
    }

    let required = splits * min_per_class_per_split;
    for (label, &size) in class_sizes {
        if size < required {
            return Err(SplitError::InsufficientMinorityClass {
                class: format!("{label:?}"),
                size,
                required,
                splits,
                min_per_class: min_per_class_per_split,
            });
        }
    }

    // Shared proportion vector over the post-reservation pool. Deriving it
    // once from the requested lengths keeps every class split with the same
    // proportions, which is what preserves overall stratification.
    let pool = total - reserved_per_split * splits;
    let fractions: Vec<f64> = lengths
        .iter()
        .map(|&length| {
            if pool == 0 {
                0.0
            } else {
                (length - reserved_per_split) as f64 / pool as f64
            }
        })
        .collect();

    let mut allocation = IndexMap::with_capacity(classes);
    for (label, &size) in class_sizes {
        let remaining = size - required;
        let counts = distribute(remaining, &fractions, min_per_class_per_split);
        debug_assert_eq!(counts.iter().sum::<usize>(), size);
        allocation.insert(label.clone(), counts);
    }
    debug!(
        classes,
        splits, total, min_per_class_per_split, "allocated per-class split quotas"
    );
    Ok(allocation)
}

/// Spread `remaining` over the splits according to `fractions` with
/// largest-fractional-remainder rounding, then add the reservation back onto
/// every slot.
///
/// Every slot gets the floor of its raw share; the leftover units go one each
/// to the slots with the largest fractional parts (earlier slots win ties).
/// Each slot's error stays below one sample, so per-split totals summed
/// across classes drift from the request by less than one sample per class.
fn distribute(remaining: usize, fractions: &[f64], reservation: usize) -> Vec<usize> {
    let mut counts: Vec<usize> = Vec::with_capacity(fractions.len());
    let mut remainders: Vec<(usize, f64)> = Vec::with_capacity(fractions.len());
    for (slot, &fraction) in fractions.iter().enumerate() {
        let raw = remaining as f64 * fraction;
        let floor = raw.floor();
        counts.push(floor as usize);
        remainders.push((slot, raw - floor));
    }
    remainders.sort_by(|a, b| b.1.total_cmp(&a.1).then(a.0.cmp(&b.0)));
    let assigned: usize = counts.iter().sum();
    let leftover = remaining.saturating_sub(assigned);
    for &(slot, _) in remainders.iter().cycle().take(leftover) {
        counts[slot] += 1;
    }
    for count in &mut counts {
        *count += reservation;
    }
    counts
}
