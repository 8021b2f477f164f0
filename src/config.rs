//! Declarative splitter configuration, e.g. for reading experiment plans from JSON.
//!
//! ```
//! use crossval::prelude::*;
//! use crossval::SplitterConfig;
//!
//! let config = SplitterConfig::from_json(r#"{"type": "leave_p_out", "p": 2}"#).unwrap();
//! assert_eq!(config.build().n_splits(10).unwrap(), 45);
//! ```

use serde_json;

use error::Result;
use procedures::{
    KFold, LeaveOneOut, LeavePOut, ShuffleSplit, SplitSize, Splitter, TimeSeriesSplit,
    TrainTestSplit,
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SplitterConfig {
    KFold {
        #[serde(default = "default_n_splits")]
        n_splits: usize,

        #[serde(default)]
        shuffle: bool,

        #[serde(default)]
        seed: Option<u64>,
    },

    LeaveOneOut,

    LeavePOut { p: usize },

    ShuffleSplit {
        #[serde(default = "default_shuffle_n_splits")]
        n_splits: usize,

        #[serde(default)]
        test_size: Option<SplitSize>,

        #[serde(default)]
        train_size: Option<SplitSize>,

        #[serde(default)]
        seed: Option<u64>,
    },

    TimeSeriesSplit {
        #[serde(default = "default_n_splits")]
        n_splits: usize,

        #[serde(default)]
        max_train_size: Option<usize>,

        #[serde(default)]
        test_size: Option<usize>,

        #[serde(default)]
        gap: usize,
    },

    TrainTestSplit {
        #[serde(default)]
        test_size: Option<SplitSize>,

        #[serde(default)]
        train_size: Option<SplitSize>,

        #[serde(default = "default_true")]
        shuffle: bool,

        #[serde(default)]
        seed: Option<u64>,
    },
}

fn default_n_splits() -> usize {
    5
}

fn default_shuffle_n_splits() -> usize {
    10
}

fn default_true() -> bool {
    true
}

impl SplitterConfig {
    pub fn from_json(s: &str) -> Result<Self> {
        Ok(serde_json::from_str(s)?)
    }

    /// Construct the configured splitter.
    pub fn build(&self) -> Box<dyn Splitter> {
        match *self {
            SplitterConfig::KFold {
                n_splits,
                shuffle,
                seed,
            } => Box::new(KFold::from_parts(n_splits, shuffle, seed)),
            SplitterConfig::LeaveOneOut => Box::new(LeaveOneOut),
            SplitterConfig::LeavePOut { p } => Box::new(LeavePOut::new(p)),
            SplitterConfig::ShuffleSplit {
                n_splits,
                test_size,
                train_size,
                seed,
            } => Box::new(ShuffleSplit::from_parts(n_splits, test_size, train_size, seed)),
            SplitterConfig::TimeSeriesSplit {
                n_splits,
                max_train_size,
                test_size,
                gap,
            } => Box::new(TimeSeriesSplit::from_parts(
                n_splits,
                max_train_size,
                test_size,
                gap,
            )),
            SplitterConfig::TrainTestSplit {
                test_size,
                train_size,
                shuffle,
                seed,
            } => Box::new(TrainTestSplit::from_parts(test_size, train_size, shuffle, seed)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json;

    #[test]
    fn defaults() {
        let config = SplitterConfig::from_json(r#"{"type": "k_fold"}"#).unwrap();
        assert_eq!(
            config,
            SplitterConfig::KFold {
                n_splits: 5,
                shuffle: false,
                seed: None,
            }
        );

        let config = SplitterConfig::from_json(r#"{"type": "time_series_split"}"#).unwrap();
        assert_eq!(config.build().n_splits(10).unwrap(), 5);

        let config = SplitterConfig::from_json(r#"{"type": "shuffle_split"}"#).unwrap();
        assert_eq!(config.build().n_splits(10).unwrap(), 10);
    }

    #[test]
    fn plan_of_six() {
        let plan = json!([
            {"type": "k_fold", "n_splits": 5},
            {"type": "k_fold", "n_splits": 5, "shuffle": true, "seed": 42},
            {"type": "leave_one_out"},
            {"type": "leave_p_out", "p": 2},
            {"type": "shuffle_split", "n_splits": 3, "test_size": 2, "seed": 0},
            {"type": "time_series_split", "n_splits": 5}
        ]);

        let plan: Vec<SplitterConfig> = serde_json::from_value(plan).unwrap();
        let counts: Vec<_> = plan
            .iter()
            .map(|config| config.build().split(10).unwrap().count())
            .collect();

        assert_eq!(counts, vec![5, 5, 10, 45, 3, 5]);
    }

    #[test]
    fn sizes_keep_their_kind() {
        let config = SplitterConfig::from_json(
            r#"{"type": "train_test_split", "train_size": 0.8, "test_size": 2}"#,
        ).unwrap();

        assert_eq!(
            config,
            SplitterConfig::TrainTestSplit {
                test_size: Some(SplitSize::Absolute(2)),
                train_size: Some(SplitSize::Relative(0.8)),
                shuffle: true,
                seed: None,
            }
        );
    }

    #[test]
    fn bad_configuration() {
        assert!(SplitterConfig::from_json(r#"{"type": "bootstrap"}"#).is_err());
        assert!(SplitterConfig::from_json(r#"{"type": "leave_p_out"}"#).is_err());

        let config = SplitterConfig::from_json(r#"{"type": "leave_p_out", "p": 12}"#).unwrap();
        assert!(config.build().split(10).is_err());
    }
}
