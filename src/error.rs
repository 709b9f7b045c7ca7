use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CategoriseError {
    #[error("Could not read {}", .path.display())]
    FileAccess {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Could not parse {line}: {fault}")]
    MalformedRow { line: String, fault: RowFault },

    #[error("Failed to write report")]
    Output(#[source] io::Error),
}

/// Why a statement row was rejected.
#[derive(Debug, Error, PartialEq)]
pub enum RowFault {
    #[error("missing {0}")]
    MissingField(&'static str),

    #[error("{field} is not a number: {value:?}")]
    InvalidNumber { field: &'static str, value: String },
}

impl CategoriseError {
    pub(crate) fn file_access(path: impl Into<PathBuf>, source: io::Error) -> Self {
        CategoriseError::FileAccess {
            path: path.into(),
            source,
        }
    }

    pub fn is_broken_pipe(&self) -> bool {
        matches!(self, CategoriseError::Output(e) if e.kind() == io::ErrorKind::BrokenPipe)
    }
}
