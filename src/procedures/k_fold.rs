//! K-fold cross validation.
//!
//! ```
//! use crossval::prelude::*;
//! use crossval::KFold;
//!
//! let kf = KFold::new(5).shuffle(true).seed(42);
//!
//! for fold in kf.split(10).unwrap() {
//!     assert_eq!(fold.testset.len(), 2);
//! }
//! ```

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use error::{Error, Result};

use super::{Fold, Splitter};

/// Split the data into `n_splits` consecutive folds, each used once as the test set.
///
/// The first `n_samples % n_splits` folds hold one sample more than the rest.
#[derive(Debug, Clone, PartialEq)]
pub struct KFold {
    n_splits: usize,
    shuffle: bool,
    seed: Option<u64>,
}

impl KFold {
    pub fn new(n_splits: usize) -> Self {
        KFold {
            n_splits,
            shuffle: false,
            seed: None,
        }
    }

    /// Shuffle the samples before cutting them into folds.
    pub fn shuffle(mut self, shuffle: bool) -> Self {
        self.shuffle = shuffle;
        self
    }

    /// Fix the seed of the shuffling. Only valid together with `shuffle(true)`.
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub(crate) fn from_parts(n_splits: usize, shuffle: bool, seed: Option<u64>) -> Self {
        KFold {
            n_splits,
            shuffle,
            seed,
        }
    }

    fn check(&self, n_samples: usize) -> Result<()> {
        if self.n_splits < 2 {
            return Err(Error::invalid(format!(
                "k-fold cross-validation requires at least two splits, got n_splits={}",
                self.n_splits
            )));
        }

        if self.n_splits > n_samples {
            return Err(Error::invalid(format!(
                "cannot have n_splits={} greater than the number of samples {}",
                self.n_splits, n_samples
            )));
        }

        if self.seed.is_some() && !self.shuffle {
            return Err(Error::invalid(
                "setting a seed has no effect since shuffle is false",
            ));
        }

        Ok(())
    }

    fn indices(&self, n_samples: usize) -> Vec<usize> {
        let mut indices: Vec<usize> = (0..n_samples).collect();

        if self.shuffle {
            let mut rng = match self.seed {
                Some(seed) => StdRng::seed_from_u64(seed),
                None => {
                    debug!("KFold: no seed given, seeding from system entropy");
                    StdRng::from_entropy()
                }
            };
            indices.shuffle(&mut rng);
        }

        indices
    }
}

impl Splitter for KFold {
    fn n_splits(&self, n_samples: usize) -> Result<usize> {
        self.check(n_samples)?;
        Ok(self.n_splits)
    }

    fn split<'a>(&'a self, n_samples: usize) -> Result<Box<dyn Iterator<Item = Fold> + 'a>> {
        self.check(n_samples)?;

        Ok(Box::new(KFoldIter {
            indices: self.indices(n_samples),
            n_splits: self.n_splits,
            iter: 0,
            start: 0,
        }))
    }
}

struct KFoldIter {
    indices: Vec<usize>,
    n_splits: usize,
    iter: usize,
    start: usize,
}

impl Iterator for KFoldIter {
    type Item = Fold;

    fn next(&mut self) -> Option<Fold> {
        if self.iter >= self.n_splits {
            return None;
        }

        let n_samples = self.indices.len();
        let mut fold_size = n_samples / self.n_splits;
        if self.iter < n_samples % self.n_splits {
            fold_size += 1;
        }

        let stop = self.start + fold_size;
        let fold = Fold::from_test_indices(n_samples, &self.indices[self.start..stop]);

        self.start = stop;
        self.iter += 1;

        Some(fold)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.n_splits - self.iter;
        (n, Some(n))
    }
}
