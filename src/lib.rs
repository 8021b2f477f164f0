//! Cross-validation splitters.
//!
//! Every strategy implements [`Splitter`](procedures/trait.Splitter.html): given the number of
//! samples in a data set it yields a sequence of [`Fold`](procedures/struct.Fold.html)s, each one
//! a pair of disjoint training and test index sets.
//!
//! ```
//! use crossval::prelude::*;
//! use crossval::KFold;
//!
//! let data: Vec<u32> = (1..11).collect();
//!
//! for fold in KFold::new(5).split(data.len()).unwrap() {
//!     let (train, test) = fold.select(&data);
//!     assert_eq!(train.len(), 8);
//!     assert_eq!(test.len(), 2);
//! }
//! ```

extern crate num_traits;
extern crate rand;
extern crate serde;
#[macro_use]
extern crate log;
#[macro_use]
extern crate serde_derive;
#[cfg_attr(test, macro_use)]
extern crate serde_json;

pub mod config;
pub mod display;
pub mod error;
pub mod procedures;

pub use config::SplitterConfig;
pub use error::{Error, Result};
pub use procedures::{
    Fold, KFold, LeaveOneOut, LeavePOut, ShuffleSplit, SplitSize, TimeSeriesSplit, TrainTestSplit,
};

pub mod prelude {
    pub use procedures::Splitter;
}
