//! Validation procedures

mod k_fold;
mod leave_one_out;
mod leave_p_out;
mod shuffle_split;
mod split_size;
mod time_series_split;
mod train_test_split;

use std::fmt;

use display::IndexArray;
use error::Result;

pub use self::k_fold::KFold;
pub use self::leave_one_out::LeaveOneOut;
pub use self::leave_p_out::LeavePOut;
pub use self::shuffle_split::ShuffleSplit;
pub use self::split_size::SplitSize;
pub use self::time_series_split::TimeSeriesSplit;
pub use self::train_test_split::TrainTestSplit;

/// Validation procedures support iteration over cross-validation folds
pub trait Splitter {
    /// Number of folds `split` yields for a data set of `n_samples` rows.
    fn n_splits(&self, n_samples: usize) -> Result<usize>;

    /// Iterate over the folds of a data set with `n_samples` rows.
    ///
    /// Parameters are checked before the iterator is returned, so iteration itself never fails.
    fn split<'a>(&'a self, n_samples: usize) -> Result<Box<dyn Iterator<Item = Fold> + 'a>>;
}

/// A single cross-validation fold, consisting of a training set and a testing set
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Fold {
    pub trainset: Vec<usize>,
    pub testset: Vec<usize>,
}

impl Fold {
    pub fn new() -> Self {
        Fold {
            trainset: Vec::new(),
            testset: Vec::new(),
        }
    }

    /// Build a fold from its test indices; every other index in `0..n_samples` goes into the
    /// training set. Both sets come out in ascending order.
    ///
    /// Every test index must be below `n_samples`.
    pub(crate) fn from_test_indices(n_samples: usize, testset: &[usize]) -> Self {
        let mut is_test = vec![false; n_samples];
        for &i in testset {
            is_test[i] = true;
        }

        let mut fold = Fold::new();
        for (i, test) in is_test.into_iter().enumerate() {
            if test {
                fold.testset.push(i);
            } else {
                fold.trainset.push(i);
            }
        }
        fold
    }

    /// Pick the training and test rows out of `data`.
    ///
    /// # Panics
    /// Panics if an index of the fold is out of bounds for `data`, i.e. if the fold was produced
    /// for a larger data set.
    pub fn select<T: Clone>(&self, data: &[T]) -> (Vec<T>, Vec<T>) {
        let train = self.trainset.iter().map(|&i| data[i].clone()).collect();
        let test = self.testset.iter().map(|&i| data[i].clone()).collect();
        (train, test)
    }
}

/// Prints `<train> <test>` with both index sets in numpy notation.
impl fmt::Display for Fold {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} {}", IndexArray(&self.trainset), IndexArray(&self.testset))
    }
}

#[cfg(test)]
pub(crate) fn assert_disjoint(fold: &Fold) {
    use std::collections::HashSet;

    let train: HashSet<_> = fold.trainset.iter().collect();
    assert!(fold.testset.iter().all(|i| !train.contains(i)), "{:?}", fold);
}

#[test]
fn fold_from_test_indices() {
    let fold = Fold::from_test_indices(6, &[4, 1]);
    assert_eq!(fold.trainset, vec![0, 2, 3, 5]);
    assert_eq!(fold.testset, vec![1, 4]);
}

#[test]
fn fold_select_and_display() {
    let fold = Fold {
        trainset: vec![2, 0],
        testset: vec![1],
    };

    let (train, test) = fold.select(&['a', 'b', 'c']);
    assert_eq!(train, vec!['c', 'a']);
    assert_eq!(test, vec!['b']);

    assert_eq!(fold.to_string(), "[2 0] [1]");
}

#[test]
#[should_panic]
fn fold_select_out_of_bounds() {
    let fold = Fold::from_test_indices(4, &[3]);
    fold.select(&[1, 2, 3]);
}
