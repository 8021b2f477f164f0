//! Single split of a data set into a training and a test set.
//!
//! ```
//! use crossval::{SplitSize, TrainTestSplit};
//!
//! let data: Vec<u32> = (1..11).collect();
//!
//! let (train, test) = TrainTestSplit::new()
//!     .train_size(SplitSize::Relative(0.8))
//!     .split_slice(&data)
//!     .unwrap();
//!
//! assert_eq!(train.len(), 8);
//! assert_eq!(test.len(), 2);
//! ```

use std::iter;

use error::Result;

use super::split_size::{self, SplitSize};
use super::shuffle_split::{seeded_rng, shuffled_fold};
use super::{Fold, Splitter};

/// Test set fraction when neither size is given
const DEFAULT_TEST_SIZE: f64 = 0.25;

#[derive(Debug, Clone, PartialEq)]
pub struct TrainTestSplit {
    test_size: Option<SplitSize>,
    train_size: Option<SplitSize>,
    shuffle: bool,
    seed: Option<u64>,
}

impl TrainTestSplit {
    /// Shuffled split with a quarter of the data in the test set.
    pub fn new() -> Self {
        TrainTestSplit {
            test_size: None,
            train_size: None,
            shuffle: true,
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

    /// Without shuffling the training set is the head of the data and the test set follows it.
    pub fn shuffle(mut self, shuffle: bool) -> Self {
        self.shuffle = shuffle;
        self
    }

    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub(crate) fn from_parts(
        test_size: Option<SplitSize>,
        train_size: Option<SplitSize>,
        shuffle: bool,
        seed: Option<u64>,
    ) -> Self {
        TrainTestSplit {
            test_size,
            train_size,
            shuffle,
            seed,
        }
    }

    /// Compute the one and only fold for `n_samples` rows.
    pub fn fold(&self, n_samples: usize) -> Result<Fold> {
        let (n_train, n_test) =
            split_size::resolve(n_samples, self.test_size, self.train_size, DEFAULT_TEST_SIZE)?;

        if !self.shuffle {
            return Ok(Fold {
                trainset: (0..n_train).collect(),
                testset: (n_train..n_train + n_test).collect(),
            });
        }

        let mut rng = seeded_rng(self.seed);
        Ok(shuffled_fold(&mut rng, n_samples, n_train, n_test))
    }

    /// Split `data` itself, returning `(train, test)` rows.
    pub fn split_slice<T: Clone>(&self, data: &[T]) -> Result<(Vec<T>, Vec<T>)> {
        Ok(self.fold(data.len())?.select(data))
    }
}

impl Default for TrainTestSplit {
    fn default() -> Self {
        TrainTestSplit::new()
    }
}

impl Splitter for TrainTestSplit {
    fn n_splits(&self, n_samples: usize) -> Result<usize> {
        split_size::resolve(n_samples, self.test_size, self.train_size, DEFAULT_TEST_SIZE)?;
        Ok(1)
    }

    fn split<'a>(&'a self, n_samples: usize) -> Result<Box<dyn Iterator<Item = Fold> + 'a>> {
        Ok(Box::new(iter::once(self.fold(n_samples)?)))
    }
}
