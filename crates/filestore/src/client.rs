use planrun_core::TraceId;
use reqwest::Client;
use serde::Serialize;
use tracing::debug;

use crate::error::{FileStoreError, Result};
use crate::types::{FileContent, FileListResponse, ListFilters};

/// Header carrying the orchestration run's trace id.
pub const TRACE_HEADER: &str = "x-trace-id";

/// Client for the filestore service.
///
/// Holds its own base URL so concurrent runs can target different
/// endpoints; nothing here is process-wide.
#[derive(Debug, Clone)]
pub struct FileStoreClient {
    base_url: String,
    client: Client,
}

#[derive(Serialize)]
struct WriteBody<'a> {
    content: &'a str,
}

impl FileStoreClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            client: Client::new(),
        }
    }

    pub fn with_client(base_url: impl Into<String>, client: Client) -> Self {
        Self {
            base_url: base_url.into(),
            client,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub async fn list_files(
        &self,
        filters: &ListFilters,
        trace: &TraceId,
    ) -> Result<FileListResponse> {
        debug!(trace_id = %trace, ?filters, "listing files");

        let response = self
            .client
            .get(format!("{}/list_files", self.base_url))
            .query(filters)
            .header(TRACE_HEADER, trace.as_str())
            .send()
            .await?;

        self.handle_response(response).await
    }

    pub async fn read_file(&self, file_path: &str, trace: &TraceId) -> Result<FileContent> {
        debug!(trace_id = %trace, file_path, "reading file");

        let response = self
            .client
            .get(format!("{}/read_file", self.base_url))
            .query(&[("file_path", file_path)])
            .header(TRACE_HEADER, trace.as_str())
            .send()
            .await?;

        self.handle_response(response).await
    }

    pub async fn write_file(&self, file_path: &str, content: &str, trace: &TraceId) -> Result<()> {
        debug!(trace_id = %trace, file_path, bytes = content.len(), "writing file");

        let response = self
            .client
            .post(format!("{}/write_file", self.base_url))
            .query(&[("file_path", file_path)])
            .json(&WriteBody { content })
            .header(TRACE_HEADER, trace.as_str())
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(FileStoreError::Api { status, body });
        }

        Ok(())
    }

    async fn handle_response<T: serde::de::DeserializeOwned>(
        &self,
        response: reqwest::Response,
    ) -> Result<T> {
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(FileStoreError::Api { status, body });
        }

        let body = response.json().await?;
        Ok(body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_creation() {
        let client = FileStoreClient::new("http://localhost:8000");
        assert_eq!(client.base_url(), "http://localhost:8000");
    }

    #[test]
    fn test_filters_builder() {
        let filters = ListFilters::default()
            .with_extensions(".txt")
            .with_max_items(3);
        assert_eq!(filters.extensions.as_deref(), Some(".txt"));
        assert_eq!(filters.max_items, Some(3));
    }
}
