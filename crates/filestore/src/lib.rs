pub mod client;
pub mod error;
pub mod types;

pub use client::{FileStoreClient, TRACE_HEADER};
pub use error::{FileStoreError, Result};
pub use types::{FileContent, FileListResponse, ListFilters};
