//! Validation via repeated random shuffling
//! of the data and splitting into a training and test set.
//!
//! ```
//! use crossval::prelude::*;
//! use crossval::{ShuffleSplit, SplitSize};
//!
//! let ss = ShuffleSplit::new(3).test_size(SplitSize::Absolute(2)).seed(0);
//!
//! for fold in ss.split(10).unwrap() {
//!     assert_eq!(fold.trainset.len(), 8);
//!     assert_eq!(fold.testset.len(), 2);
//! }
//! ```

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use error::{Error, Result};

use super::split_size::{self, SplitSize};
use super::{Fold, Splitter};

/// Test set fraction when neither size is given
const DEFAULT_TEST_SIZE: f64 = 0.1;

/// Random permutation cross validation.
///
/// Each fold draws a fresh permutation of the samples; the test set is its head and the training
/// set the following `n_train` entries. Samples may appear in several test sets.
#[derive(Debug, Clone, PartialEq)]
pub struct ShuffleSplit {
    n_splits: usize,
    test_size: Option<SplitSize>,
    train_size: Option<SplitSize>,
    seed: Option<u64>,
}

impl ShuffleSplit {
    pub fn new(n_splits: usize) -> Self {
        ShuffleSplit {
            n_splits,
            test_size: None,
            train_size: None,
            seed: None,
        }
    }

    pub fn test_size(mut self, size: SplitSize) -> Self {
        self.test_size = Some(size);
        self
    }

    pub fn train_size(mut self, size: SplitSize) -> Self {
        self.train_size = Some(size);
        self
    }

    /// Fix the random number generator.
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub(crate) fn from_parts(
        n_splits: usize,
        test_size: Option<SplitSize>,
        train_size: Option<SplitSize>,
        seed: Option<u64>,
    ) -> Self {
        ShuffleSplit {
            n_splits,
            test_size,
            train_size,
            seed,
        }
    }

    /// Check parameters and return `(n_train, n_test)`.
    fn check(&self, n_samples: usize) -> Result<(usize, usize)> {
        if self.n_splits == 0 {
            return Err(Error::invalid("shuffle split requires n_splits > 0"));
        }
        split_size::resolve(n_samples, self.test_size, self.train_size, DEFAULT_TEST_SIZE)
    }
}

pub(crate) fn seeded_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => {
            debug!("no seed given, seeding from system entropy");
            StdRng::from_entropy()
        }
    }
}

/// Draw a permutation of `0..n_samples`; its head is the test set and the next `n_train` entries
/// the training set.
pub(crate) fn shuffled_fold(
    rng: &mut StdRng,
    n_samples: usize,
    n_train: usize,
    n_test: usize,
) -> Fold {
    let mut permutation: Vec<usize> = (0..n_samples).collect();
    permutation.shuffle(rng);

    let (test, rest) = permutation.split_at(n_test);
    Fold {
        trainset: rest[..n_train].to_owned(),
        testset: test.to_owned(),
    }
}

impl Splitter for ShuffleSplit {
    fn n_splits(&self, n_samples: usize) -> Result<usize> {
        self.check(n_samples)?;
        Ok(self.n_splits)
    }

    fn split<'a>(&'a self, n_samples: usize) -> Result<Box<dyn Iterator<Item = Fold> + 'a>> {
        let (n_train, n_test) = self.check(n_samples)?;

        Ok(Box::new(ShuffleSplitIter {
            n_samples,
            n_train,
            n_test,
            n_splits: self.n_splits,
            rng: seeded_rng(self.seed),
            iter: 0,
        }))
    }
}

struct ShuffleSplitIter {
    n_samples: usize,
    n_train: usize,
    n_test: usize,
    n_splits: usize,
    rng: StdRng,
    iter: usize,
}

impl Iterator for ShuffleSplitIter {
    type Item = Fold;

    fn next(&mut self) -> Option<Fold> {
        if self.iter >= self.n_splits {
            return None;
        }
        self.iter += 1;

        Some(shuffled_fold(&mut self.rng, self.n_samples, self.n_train, self.n_test))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.n_splits - self.iter;
        (n, Some(n))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use procedures::assert_disjoint;

    #[test]
    fn iteration() {
        let split = ShuffleSplit::new(4).test_size(SplitSize::Relative(0.2));
        assert_eq!(split.split(100).unwrap().count(), 4);
        assert_eq!(split.n_splits(100).unwrap(), 4);
    }

    #[test]
    fn size_split() {
        let split = ShuffleSplit::new(3).test_size(SplitSize::Absolute(2)).seed(0);

        for fold in split.split(10).unwrap() {
            assert_eq!(fold.trainset.len(), 8);
            assert_eq!(fold.testset.len(), 2);
            assert_disjoint(&fold);
        }
    }

    #[test]
    fn default_test_size() {
        for fold in ShuffleSplit::new(2).split(10).unwrap() {
            assert_eq!(fold.testset.len(), 1);
            assert_eq!(fold.trainset.len(), 9);
        }
    }

    #[test]
    fn train_size_can_leave_samples_out() {
        let split = ShuffleSplit::new(5)
            .test_size(SplitSize::Absolute(2))
            .train_size(SplitSize::Relative(0.5))
            .seed(3);

        for fold in split.split(10).unwrap() {
            assert_eq!(fold.trainset.len(), 5);
            assert_eq!(fold.testset.len(), 2);
            assert_disjoint(&fold);
        }
    }

    #[test]
    fn seed_is_reproducible() {
        let split1 = ShuffleSplit::new(3).test_size(SplitSize::Absolute(2)).seed(0);
        let split2 = ShuffleSplit::new(3).test_size(SplitSize::Absolute(2)).seed(0);

        let set1: Vec<_> = split1.split(10).unwrap().collect();
        let set2: Vec<_> = split2.split(10).unwrap().collect();
        let set3: Vec<_> = split1.split(10).unwrap().collect();

        assert_eq!(set1, set2);
        assert_eq!(set1, set3);
    }

    #[test]
    fn folds_differ_within_a_run() {
        let folds: Vec<_> = ShuffleSplit::new(2).seed(1).split(1000).unwrap().collect();
        assert!(folds[0] != folds[1]);
    }

    #[test]
    fn invalid_parameters() {
        assert!(ShuffleSplit::new(0).split(10).is_err());
        assert!(ShuffleSplit::new(3).test_size(SplitSize::Absolute(10)).split(10).is_err());
    }

    #[test]
    fn n_splits_rejects_what_split_rejects() {
        let splitters = vec![
            ShuffleSplit::new(3).test_size(SplitSize::Absolute(10)),
            ShuffleSplit::new(3).train_size(SplitSize::Relative(1.5)),
            ShuffleSplit::new(3)
                .test_size(SplitSize::Absolute(6))
                .train_size(SplitSize::Absolute(6)),
            ShuffleSplit::new(3).test_size(SplitSize::Absolute(2)),
        ];

        for ss in splitters {
            assert_eq!(ss.n_splits(10).is_err(), ss.split(10).is_err(), "{:?}", ss);
        }
        assert!(ShuffleSplit::new(3).test_size(SplitSize::Absolute(10)).n_splits(10).is_err());
    }
}
