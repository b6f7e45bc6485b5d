use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use std::collections::HashSet;

use crate::error::SplitError;
use crate::models::{Partition, SampleId};

/// Seeded train/test splitter
///
/// Every call to [`DatasetSplitter::split`] builds its own generator from the
/// seed, so repeated calls with the same input return the same partition.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DatasetSplitter {
    train_ratio: f64,
    seed: u64,
}

impl DatasetSplitter {
    pub fn new(train_ratio: f64, seed: u64) -> Result<Self, SplitError> {
        if !(0.0..=1.0).contains(&train_ratio) {
            return Err(SplitError::InvalidRatio(train_ratio));
        }
        Ok(Self { train_ratio, seed })
    }

    pub fn train_ratio(&self) -> f64 {
        self.train_ratio
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Partition `ids`, then move every id of `must_be_in_test` that landed in
    /// train into test by swapping it with a test position.
    ///
    /// Swap targets are drawn from the same generator as the permutation.
    /// Positions already holding a required id are never picked, so an
    /// earlier swap cannot be undone by a later one.
    pub fn split(
        &self,
        ids: &[SampleId],
        must_be_in_test: &[SampleId],
    ) -> Result<Partition, SplitError> {
        let mut rng = StdRng::seed_from_u64(self.seed);

        let mut order: Vec<usize> = (0..ids.len()).collect();
        order.shuffle(&mut rng);

        let n_train = (self.train_ratio * ids.len() as f64) as usize;
        let mut train: Vec<SampleId> = order[..n_train].iter().map(|&i| ids[i].clone()).collect();
        let mut test: Vec<SampleId> = order[n_train..].iter().map(|&i| ids[i].clone()).collect();

        let required: HashSet<&SampleId> = must_be_in_test.iter().collect();
        let present = ids.iter().filter(|id| required.contains(id)).count();
        if present > test.len() {
            return Err(SplitError::TestSetTooSmall {
                required: present,
                available: test.len(),
            });
        }

        let mut locked: Vec<bool> = test.iter().map(|id| required.contains(id)).collect();
        for train_pos in 0..train.len() {
            if !required.contains(&train[train_pos]) {
                continue;
            }
            let free: Vec<usize> = (0..test.len()).filter(|&i| !locked[i]).collect();
            if free.is_empty() {
                break;
            }
            let test_pos = free[rng.gen_range(0..free.len())];
            std::mem::swap(&mut train[train_pos], &mut test[test_pos]);
            locked[test_pos] = true;
            tracing::debug!(
                id = %test[test_pos],
                swapped_out = %train[train_pos],
                "Moved required sample into test split"
            );
        }

        Ok(Partition { train, test })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(names: &[&str]) -> Vec<SampleId> {
        names.iter().map(|n| SampleId::new(*n)).collect()
    }

    fn numbered(count: usize) -> Vec<SampleId> {
        (0..count)
            .map(|i| SampleId::new(format!("ISIC_{:07}", i)))
            .collect()
    }

    #[test]
    fn test_five_ids_at_sixty_percent() {
        let splitter = DatasetSplitter::new(0.6, 42).unwrap();
        let partition = splitter.split(&ids(&["a", "b", "c", "d", "e"]), &[]).unwrap();

        assert_eq!(partition.train.len(), 3);
        assert_eq!(partition.test.len(), 2);
    }

    #[test]
    fn test_partition_is_disjoint_and_complete() {
        let all = numbered(97);
        let splitter = DatasetSplitter::new(0.8, 7).unwrap();
        let partition = splitter.split(&all, &[]).unwrap();

        assert_eq!(partition.train.len() + partition.test.len(), all.len());

        let train: HashSet<_> = partition.train.iter().collect();
        let test: HashSet<_> = partition.test.iter().collect();
        assert!(train.is_disjoint(&test));

        let union: HashSet<_> = train.union(&test).copied().collect();
        let expected: HashSet<_> = all.iter().collect();
        assert_eq!(union, expected);
    }

    #[test]
    fn test_same_seed_same_partition() {
        let all = numbered(50);
        let splitter = DatasetSplitter::new(0.7, 42).unwrap();

        let first = splitter.split(&all, &all[..3]).unwrap();
        let second = splitter.split(&all, &all[..3]).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn test_different_seed_changes_order() {
        let all = numbered(50);
        let a = DatasetSplitter::new(0.5, 1).unwrap().split(&all, &[]).unwrap();
        let b = DatasetSplitter::new(0.5, 2).unwrap().split(&all, &[]).unwrap();

        assert_ne!(a.train, b.train);
    }

    #[test]
    fn test_train_size_truncates() {
        let all = numbered(10);
        let partition = DatasetSplitter::new(0.85, 42).unwrap().split(&all, &[]).unwrap();

        assert_eq!(partition.train.len(), 8);
        assert_eq!(partition.test.len(), 2);
    }

    #[test]
    fn test_required_ids_end_in_test() {
        let all = numbered(40);
        let required = ids(&["ISIC_0000003", "ISIC_0000010", "ISIC_0000021", "ISIC_0000039"]);
        let splitter = DatasetSplitter::new(0.8, 42).unwrap();

        let plain = splitter.split(&all, &[]).unwrap();
        let enforced = splitter.split(&all, &required).unwrap();

        for id in &required {
            assert!(enforced.test.contains(id), "{} not in test", id);
        }
        assert_eq!(enforced.train.len(), plain.train.len());
        assert_eq!(enforced.test.len(), plain.test.len());
    }

    #[test]
    fn test_required_ids_fill_whole_test_split() {
        // 10 ids at 0.7 leave exactly 3 test slots for 3 required ids
        let all = numbered(10);
        let required = ids(&["ISIC_0000000", "ISIC_0000001", "ISIC_0000002"]);

        for seed in 0..20 {
            let partition = DatasetSplitter::new(0.7, seed)
                .unwrap()
                .split(&all, &required)
                .unwrap();
            let mut test = partition.test.clone();
            test.sort();
            assert_eq!(test, required, "seed {}", seed);
        }
    }

    #[test]
    fn test_unknown_required_ids_are_ignored() {
        let all = numbered(5);
        let required = ids(&["ISIC_9999999"]);
        let partition = DatasetSplitter::new(0.6, 42)
            .unwrap()
            .split(&all, &required)
            .unwrap();

        assert_eq!(partition.len(), 5);
        assert!(!partition.test.contains(&required[0]));
        assert!(!partition.train.contains(&required[0]));
    }

    #[test]
    fn test_too_many_required_ids() {
        let all = numbered(5);
        let result = DatasetSplitter::new(0.8, 42).unwrap().split(&all, &all[..2]);

        match result {
            Err(SplitError::TestSetTooSmall {
                required,
                available,
            }) => {
                assert_eq!(required, 2);
                assert_eq!(available, 1);
            }
            other => panic!("Expected TestSetTooSmall, got {:?}", other),
        }
    }

    #[test]
    fn test_empty_ids() {
        let partition = DatasetSplitter::new(0.8, 42).unwrap().split(&[], &[]).unwrap();
        assert!(partition.is_empty());
    }

    #[test]
    fn test_invalid_ratio() {
        assert!(matches!(
            DatasetSplitter::new(1.5, 42),
            Err(SplitError::InvalidRatio(_))
        ));
        assert!(DatasetSplitter::new(f64::NAN, 42).is_err());
        assert!(DatasetSplitter::new(0.0, 42).is_ok());
        assert!(DatasetSplitter::new(1.0, 42).is_ok());
    }
}
