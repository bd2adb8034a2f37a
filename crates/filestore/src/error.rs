use thiserror::Error;

#[derive(Debug, Error)]
pub enum FileStoreError {
    /// The service answered, but with a failure status.
    #[error("filestore returned {status}: {body}")]
    Api {
        status: reqwest::StatusCode,
        body: String,
    },

    /// The service could not be reached, or the exchange broke mid-flight.
    #[error("filestore request failed: {0}")]
    Request(#[from] reqwest::Error),
}

impl FileStoreError {
    /// Status code of a protocol-level failure, if that is what this is.
    pub fn status(&self) -> Option<reqwest::StatusCode> {
        match self {
            Self::Api { status, .. } => Some(*status),
            Self::Request(err) => err.status(),
        }
    }
}

pub type Result<T> = std::result::Result<T, FileStoreError>;
