use num_traits::PrimInt;

use error::{Error, Result};

use super::{Fold, Splitter};

/// Exhaustive cross validation: every subset of `p` samples forms the test set once.
///
/// Subsets are enumerated in lexicographic order, so the number of folds grows as
/// `C(n_samples, p)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LeavePOut {
    p: usize,
}

impl LeavePOut {
    pub fn new(p: usize) -> Self {
        LeavePOut { p }
    }

    fn check(&self, n_samples: usize) -> Result<()> {
        if self.p == 0 {
            return Err(Error::invalid("p must be at least one"));
        }
        if self.p >= n_samples {
            return Err(Error::invalid(format!(
                "p={} must be strictly less than the number of samples={}",
                self.p, n_samples
            )));
        }
        Ok(())
    }
}

impl Splitter for LeavePOut {
    fn n_splits(&self, n_samples: usize) -> Result<usize> {
        self.check(n_samples)?;
        binomial(n_samples, self.p).ok_or_else(|| {
            Error::invalid(format!(
                "C({}, {}) overflows the number of splits",
                n_samples, self.p
            ))
        })
    }

    fn split<'a>(&'a self, n_samples: usize) -> Result<Box<dyn Iterator<Item = Fold> + 'a>> {
        self.check(n_samples)?;
        Ok(Box::new(Combinations {
            n: n_samples,
            current: Some((0..self.p).collect()),
        }))
    }
}

/// Lexicographic enumeration of the `p`-subsets of `0..n`
struct Combinations {
    n: usize,
    current: Option<Vec<usize>>,
}

impl Iterator for Combinations {
    type Item = Fold;

    fn next(&mut self) -> Option<Fold> {
        let current = self.current.take()?;
        let p = current.len();

        // rightmost position that can still be incremented
        let pivot = (0..p).rev().find(|&i| current[i] < self.n - p + i);

        if let Some(i) = pivot {
            let mut successor = current.clone();
            successor[i] += 1;
            for j in i + 1..p {
                successor[j] = successor[j - 1] + 1;
            }
            self.current = Some(successor);
        }

        Some(Fold::from_test_indices(self.n, &current))
    }
}

fn binomial<T: PrimInt>(n: T, k: T) -> Option<T> {
    let k = if k > n - k { n - k } else { k };

    let mut result = T::one();
    let mut i = T::zero();
    while i < k {
        result = result.checked_mul(&(n - i))? / (i + T::one());
        i = i + T::one();
    }
    Some(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use procedures::assert_disjoint;
    use std::collections::HashSet;

    #[test]
    fn all_pairs() {
        let lpo = LeavePOut::new(2);
        let folds: Vec<_> = lpo.split(10).unwrap().collect();

        assert_eq!(folds.len(), 45);
        assert_eq!(lpo.n_splits(10).unwrap(), 45);

        let mut seen = HashSet::new();
        for fold in &folds {
            assert_eq!(fold.testset.len(), 2);
            assert_eq!(fold.trainset.len(), 8);
            assert_disjoint(fold);
            assert!(seen.insert(fold.testset.clone()));
        }

        assert_eq!(folds[0].testset, vec![0, 1]);
        assert_eq!(folds[1].testset, vec![0, 2]);
        assert_eq!(folds[9].testset, vec![1, 2]);
        assert_eq!(folds[44].testset, vec![8, 9]);
    }

    #[test]
    fn p_of_three() {
        let folds: Vec<_> = LeavePOut::new(3).split(5).unwrap().collect();
        assert_eq!(folds.len(), 10);
        assert_eq!(folds.last().unwrap().testset, vec![2, 3, 4]);
    }

    #[test]
    fn binomials() {
        assert_eq!(binomial(10usize, 2), Some(45));
        assert_eq!(binomial(10usize, 8), Some(45));
        assert_eq!(binomial(5u8, 0), Some(1));
        assert_eq!(binomial(200u8, 100), None);
    }

    #[test]
    fn invalid_p() {
        assert!(LeavePOut::new(0).split(10).is_err());
        assert!(LeavePOut::new(10).split(10).is_err());
        assert!(LeavePOut::new(10).n_splits(10).is_err());
    }
}
