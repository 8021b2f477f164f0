use error::{Error, Result};

use super::{Fold, Splitter};

/// Every sample forms the test set once, on its own.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct LeaveOneOut;

impl LeaveOneOut {
    pub fn new() -> Self {
        LeaveOneOut
    }
}

impl Splitter for LeaveOneOut {
    fn n_splits(&self, n_samples: usize) -> Result<usize> {
        if n_samples < 2 {
            return Err(Error::invalid(format!(
                "cannot perform leave-one-out with n_samples={}",
                n_samples
            )));
        }
        Ok(n_samples)
    }

    fn split<'a>(&'a self, n_samples: usize) -> Result<Box<dyn Iterator<Item = Fold> + 'a>> {
        self.n_splits(n_samples)?;
        Ok(Box::new(
            (0..n_samples).map(move |i| Fold::from_test_indices(n_samples, &[i])),
        ))
    }
}
