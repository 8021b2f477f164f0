use error::{Error, Result};

/// Size of a training or test set.
///
/// In JSON an integer deserializes to `Absolute` and a float to `Relative`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SplitSize {
    /// Number of samples
    Absolute(usize),

    /// Fraction of the data set, in the open interval (0, 1)
    Relative(f64),
}

impl SplitSize {
    fn check(&self, what: &str, n_samples: usize) -> Result<()> {
        let ok = match *self {
            SplitSize::Absolute(n) => n > 0 && n < n_samples,
            SplitSize::Relative(f) => f > 0.0 && f < 1.0,
        };

        if ok {
            Ok(())
        } else {
            Err(Error::invalid(format!(
                "{}={:?} should be either positive and smaller than the number of samples {} \
                 or a float in the (0, 1) range",
                what, self, n_samples
            )))
        }
    }

    fn fraction(&self) -> Option<f64> {
        match *self {
            SplitSize::Relative(f) => Some(f),
            SplitSize::Absolute(_) => None,
        }
    }
}

/// Turn optional train and test sizes into sample counts `(n_train, n_test)`.
///
/// Relative test sizes round up and relative train sizes round down. A missing size is the
/// complement of the other one; if both are missing the test set gets `default_test` of the data.
pub(crate) fn resolve(
    n_samples: usize,
    test_size: Option<SplitSize>,
    train_size: Option<SplitSize>,
    default_test: f64,
) -> Result<(usize, usize)> {
    let test_size = match (test_size, train_size) {
        (None, None) => Some(SplitSize::Relative(default_test)),
        (test, _) => test,
    };

    if let Some(ref s) = test_size {
        s.check("test_size", n_samples)?;
    }
    if let Some(ref s) = train_size {
        s.check("train_size", n_samples)?;
    }

    if let (Some(a), Some(b)) = (
        test_size.and_then(|s| s.fraction()),
        train_size.and_then(|s| s.fraction()),
    ) {
        if a + b > 1.0 {
            return Err(Error::invalid(format!(
                "the sum of test_size and train_size = {} should be in the (0, 1) range",
                a + b
            )));
        }
    }

    let n = n_samples as f64;
    let n_test = test_size.map(|s| match s {
        SplitSize::Absolute(k) => k,
        SplitSize::Relative(f) => (f * n).ceil() as usize,
    });
    let n_train = train_size.map(|s| match s {
        SplitSize::Absolute(k) => k,
        SplitSize::Relative(f) => (f * n).floor() as usize,
    });

    let (n_train, n_test) = match (n_train, n_test) {
        (Some(train), Some(test)) => (train, test),
        (Some(train), None) => (train, n_samples.saturating_sub(train)),
        (None, Some(test)) => (n_samples.saturating_sub(test), test),
        (None, None) => unreachable!("test size is defaulted above"),
    };

    if n_train + n_test > n_samples {
        return Err(Error::invalid(format!(
            "the sum of train and test size = {} should be smaller than the number of samples {}",
            n_train + n_test,
            n_samples
        )));
    }

    if n_train == 0 {
        return Err(Error::invalid(format!(
            "with n_samples={}, test_size={:?} and train_size={:?}, the training set is empty",
            n_samples, test_size, train_size
        )));
    }

    debug!("{} samples split into {} train and {} test", n_samples, n_train, n_test);

    Ok((n_train, n_test))
}
