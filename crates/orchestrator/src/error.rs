use filestore::FileStoreError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum OrchestratorError {
    /// No JSON plan could be decoded from the model output.
    #[error("failed to extract a JSON plan: {0}")]
    Extraction(#[source] serde_json::Error),

    /// A tool call named an operation outside the allow-list.
    #[error("tool not allowed by policy: {0:?}")]
    Policy(String),

    /// The filestore rejected a call or could not be reached.
    #[error("tool execution failed: {0}")]
    Execution(#[from] FileStoreError),

    /// A tool call broke the caller contract, e.g. a required argument is
    /// missing. No remote call is issued for such a defect.
    #[error("malformed tool call: {0}")]
    Contract(String),
}

impl OrchestratorError {
    pub fn contract(detail: impl Into<String>) -> Self {
        Self::Contract(detail.into())
    }

    /// Result code of a run terminated by this error.
    ///
    /// Contract violations share code 1 with execution failures, matching
    /// the original catch-all behavior; logs still tell them apart.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Execution(_) | Self::Contract(_) => 1,
            Self::Policy(_) => 2,
            Self::Extraction(_) => 3,
        }
    }
}

pub type Result<T> = std::result::Result<T, OrchestratorError>;
