use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::DocId;

pub type Result<T> = core::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Request for document {id} failed: {source}")]
    Network {
        id: DocId,
        #[source]
        source: reqwest::Error,
    },
    #[error("Document {id} answered with HTTP status {status}")]
    HttpStatus { id: DocId, status: u16 },

    #[error("File not found: {}", .0.display())]
    NotFound(PathBuf),
    #[error("Couldn't parse {}: {reason}", .path.display())]
    Parse { path: PathBuf, reason: String },
    #[error("The selector you are trying to scrape for is invalid. Selector: {0}")]
    Selector(String),

    #[error("Io Error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Tokio Join Error, couldn't await a task! {0}")]
    RuntimeJoin(#[from] tokio::task::JoinError),

    #[error("Reqwest Error: {0}")]
    Reqwest(#[from] reqwest::Error),
}

/// Coarse classification of a failure, so a caller can tell a missing document
/// apart from a transient fetch problem.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Network,
    NotFound,
    Parse,
    Io,
    /// Building the HTTP client failed, no request was made.
    Setup,
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::Network { .. } | Error::HttpStatus { .. } => ErrorKind::Network,
            Error::Reqwest(_) => ErrorKind::Setup,
            Error::NotFound(_) => ErrorKind::NotFound,
            Error::Parse { .. } | Error::Selector(_) => ErrorKind::Parse,
            Error::Io(_) | Error::RuntimeJoin(_) => ErrorKind::Io,
        }
    }

    /// Maps a missing file onto `NotFound` and undecodable text onto `Parse`,
    /// everything else stays an io error.
    pub(crate) fn from_io(path: &Path, err: std::io::Error) -> Self {
        match err.kind() {
            std::io::ErrorKind::NotFound => Error::NotFound(path.to_path_buf()),
            std::io::ErrorKind::InvalidData => Error::Parse {
                path: path.to_path_buf(),
                reason: err.to_string(),
            },
            _ => Error::Io(err),
        }
    }
}
