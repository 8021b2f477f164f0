//! Cross validation for ordered data.
//!
//! Folds are cut from the end of the data: each test set is a contiguous block, and the
//! training set is everything before it (minus an optional gap). Later folds therefore train on
//! supersets of earlier training sets.

use error::{Error, Result};

use super::{Fold, Splitter};

#[derive(Debug, Clone, PartialEq)]
pub struct TimeSeriesSplit {
    n_splits: usize,
    max_train_size: Option<usize>,
    test_size: Option<usize>,
    gap: usize,
}

impl TimeSeriesSplit {
    pub fn new(n_splits: usize) -> Self {
        TimeSeriesSplit {
            n_splits,
            max_train_size: None,
            test_size: None,
            gap: 0,
        }
    }

    /// Keep only the most recent `size` samples in each training set.
    pub fn max_train_size(mut self, size: usize) -> Self {
        self.max_train_size = Some(size);
        self
    }

    /// Number of samples per test set. Defaults to `n_samples / (n_splits + 1)`.
    pub fn test_size(mut self, size: usize) -> Self {
        self.test_size = Some(size);
        self
    }

    /// Number of samples dropped between the end of each training set and its test set.
    pub fn gap(mut self, gap: usize) -> Self {
        self.gap = gap;
        self
    }

    pub(crate) fn from_parts(
        n_splits: usize,
        max_train_size: Option<usize>,
        test_size: Option<usize>,
        gap: usize,
    ) -> Self {
        TimeSeriesSplit {
            n_splits,
            max_train_size,
            test_size,
            gap,
        }
    }

    /// Check parameters and return the test set size.
    fn check(&self, n_samples: usize) -> Result<usize> {
        if self.n_splits < 2 {
            return Err(Error::invalid(format!(
                "time series cross-validation requires at least two splits, got n_splits={}",
                self.n_splits
            )));
        }

        let n_folds = match self.n_splits.checked_add(1) {
            Some(n_folds) if n_folds <= n_samples => n_folds,
            _ => {
                return Err(Error::invalid(format!(
                    "cannot have n_splits={} plus one test fold exceed the number of samples={}",
                    self.n_splits, n_samples
                )))
            }
        };

        let test_size = self.test_size.unwrap_or_else(|| n_samples / n_folds);
        if test_size == 0 {
            return Err(Error::invalid("test_size must be positive"));
        }

        let needed = test_size
            .checked_mul(self.n_splits)
            .and_then(|n| n.checked_add(self.gap));
        if needed.map_or(true, |needed| needed >= n_samples) {
            return Err(Error::invalid(format!(
                "too many splits={} for number of samples={} with test_size={} and gap={}",
                self.n_splits, n_samples, test_size, self.gap
            )));
        }

        Ok(test_size)
    }
}

impl Splitter for TimeSeriesSplit {
    fn n_splits(&self, n_samples: usize) -> Result<usize> {
        self.check(n_samples)?;
        Ok(self.n_splits)
    }

    fn split<'a>(&'a self, n_samples: usize) -> Result<Box<dyn Iterator<Item = Fold> + 'a>> {
        let test_size = self.check(n_samples)?;
        let first_test = n_samples - self.n_splits * test_size;

        let folds = (0..self.n_splits).map(move |k| {
            let test_start = first_test + k * test_size;
            let train_end = test_start - self.gap;
            let train_start = match self.max_train_size {
                Some(max) if max < train_end => train_end - max,
                _ => 0,
            };

            Fold {
                trainset: (train_start..train_end).collect(),
                testset: (test_start..test_start + test_size).collect(),
            }
        });

        Ok(Box::new(folds))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use config::SplitterConfig;
    use procedures::assert_disjoint;

    #[test]
    fn growing_windows() {
        let folds: Vec<_> = TimeSeriesSplit::new(5).split(10).unwrap().collect();

        assert_eq!(folds.len(), 5);
        for (k, fold) in folds.iter().enumerate() {
            assert_eq!(fold.trainset, (0..5 + k).collect::<Vec<_>>());
            assert_eq!(fold.testset, vec![5 + k]);
        }
    }

    #[test]
    fn test_follows_train() {
        let splitters = vec![
            TimeSeriesSplit::new(5),
            TimeSeriesSplit::new(3).test_size(2).gap(1),
            TimeSeriesSplit::new(4).max_train_size(3),
        ];

        for tss in splitters {
            for fold in tss.split(10).unwrap() {
                assert_disjoint(&fold);
                let last_train = fold.trainset.iter().max().unwrap();
                assert!(fold.testset.iter().all(|t| t > last_train));
            }
        }
    }

    #[test]
    fn gap_and_max_train_size() {
        let folds: Vec<_> = TimeSeriesSplit::new(2)
            .test_size(2)
            .gap(1)
            .max_train_size(3)
            .split(10)
            .unwrap()
            .collect();

        assert_eq!(folds[0].trainset, vec![2, 3, 4]);
        assert_eq!(folds[0].testset, vec![6, 7]);
        assert_eq!(folds[1].trainset, vec![4, 5, 6]);
        assert_eq!(folds[1].testset, vec![8, 9]);
    }

    #[test]
    fn uneven_data() {
        let folds: Vec<_> = TimeSeriesSplit::new(3).split(11).unwrap().collect();
        assert_eq!(folds[0].trainset, (0..5).collect::<Vec<_>>());
        assert_eq!(folds[0].testset, vec![5, 6]);
        assert_eq!(folds[2].testset, vec![9, 10]);
    }

    #[test]
    fn invalid_parameters() {
        assert!(TimeSeriesSplit::new(1).split(10).is_err());
        assert!(TimeSeriesSplit::new(10).split(10).is_err());
        assert!(TimeSeriesSplit::new(3).test_size(3).split(10).is_ok());
        assert!(TimeSeriesSplit::new(3).test_size(3).gap(1).split(10).is_err());
        assert!(TimeSeriesSplit::new(3).test_size(0).split(10).is_err());
    }

    #[test]
    fn huge_parameters_are_rejected() {
        let configs = vec![
            r#"{"type": "time_series_split", "n_splits": 18446744073709551615}"#,
            r#"{"type": "time_series_split", "n_splits": 2, "test_size": 9223372036854775808}"#,
            r#"{"type": "time_series_split", "n_splits": 2, "test_size": 1, "gap": 18446744073709551615}"#,
        ];

        for json in configs {
            let splitter = SplitterConfig::from_json(json).unwrap().build();
            assert!(splitter.split(10).is_err(), "{}", json);
            assert!(splitter.n_splits(10).is_err(), "{}", json);
        }

        assert!(TimeSeriesSplit::new(usize::max_value()).split(usize::max_value()).is_err());
    }
}
