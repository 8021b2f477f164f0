use std::error::Error as StdError;
use std::fmt;
use std::result::Result as StdResult;

use serde_json::Error as JsonError;

pub type Result<T> = StdResult<T, Error>;

#[derive(Debug)]
pub enum Error {
    /// A splitter parameter is out of range, or incompatible with the number of samples
    InvalidParameter(String),
    JsonError(JsonError),
}

impl Error {
    pub(crate) fn invalid<S: Into<String>>(msg: S) -> Self {
        Error::InvalidParameter(msg.into())
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Error::InvalidParameter(ref msg) => write!(f, "invalid parameter: {}", msg),
            Error::JsonError(ref e) => write!(f, "invalid splitter configuration: {}", e),
        }
    }
}

impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match *self {
            Error::InvalidParameter(_) => None,
            Error::JsonError(ref e) => Some(e),
        }
    }
}

impl From<JsonError> for Error {
    fn from(e: JsonError) -> Self {
        Error::JsonError(e)
    }
}
