use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Failures while reading the item file. All of them are fatal.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("cannot read item file {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("item file {path:?} is not valid JSON: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("expected a JSON array in item file {path:?}, found {found}")]
    NotArray { path: PathBuf, found: &'static str },
}

impl LoadError {
    /// True for both malformed JSON and a wrong top-level shape.
    pub fn is_parse(&self) -> bool {
        matches!(self, LoadError::Parse { .. } | LoadError::NotArray { .. })
    }
}
