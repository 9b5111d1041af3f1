use std::path::PathBuf;
use thiserror::Error;

use crate::methods::{AggregationKey, Method};

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    /// Log file missing or unreadable
    #[error("cannot read log {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Directory traversal failed
    #[error("cannot walk log directory: {0}")]
    Walk(#[from] walkdir::Error),

    /// A context line carried something that is not a number
    #[error("accuracy value {value:?} is not a number")]
    Accuracy { value: String },

    /// Dialect recognised but the buffer size could not be read from it
    #[error("{method} episode without a sample count in memory buffer {memory:?}")]
    SampleCount {
        method: Method,
        memory: Option<String>,
    },

    #[error("no episodes for {key}")]
    EmptySelection { key: AggregationKey },

    #[error("{key}: episode with {found} tasks, expected {expected}")]
    TaskCountMismatch {
        key: AggregationKey,
        expected: usize,
        found: usize,
    },

    #[error("t distribution: {0}")]
    Distribution(String),
}
