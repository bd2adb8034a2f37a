//! Policy gate and dispatch for individual tool calls.

use filestore::{FileStoreClient, ListFilters};
use planrun_core::{ToolCall, ToolKind, TraceId};
use serde::Deserialize;
use serde_json::{json, Map, Value};
use tracing::{debug, info};

use crate::error::{OrchestratorError, Result};

#[derive(Debug, Deserialize)]
struct ReadArgs {
    file_path: String,
}

#[derive(Debug, Deserialize)]
struct WriteArgs {
    file_path: String,
    content: String,
}

/// Executes one allow-listed tool call against the filestore.
pub struct ToolExecutor {
    store: FileStoreClient,
}

impl ToolExecutor {
    pub fn new(store: FileStoreClient) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &FileStoreClient {
        &self.store
    }

    /// Validate the call against the allow-list and issue the remote
    /// request. An unknown tool name never reaches the wire.
    pub async fn execute(&self, call: &ToolCall, trace: &TraceId) -> Result<Value> {
        let kind = ToolKind::parse(&call.tool_name)
            .ok_or_else(|| OrchestratorError::Policy(call.tool_name.clone()))?;

        debug!(trace_id = %trace, tool = kind.as_str(), "dispatching tool call");

        let outcome = match kind {
            ToolKind::ListFiles => {
                let filters: ListFilters = decode_args(kind, &call.args)?;
                let listing = self.store.list_files(&filters, trace).await?;
                info!(
                    trace_id = %trace,
                    count = listing.files.len(),
                    "listed files"
                );
                json!({ "files": listing.files })
            }
            ToolKind::ReadFile => {
                let args: ReadArgs = decode_args(kind, &call.args)?;
                let body = self.store.read_file(&args.file_path, trace).await?;
                info!(
                    trace_id = %trace,
                    file_path = %args.file_path,
                    bytes = body.content.len(),
                    "read file"
                );
                json!({ "content": body.content })
            }
            ToolKind::WriteFile => {
                let args: WriteArgs = decode_args(kind, &call.args)?;
                self.store
                    .write_file(&args.file_path, &args.content, trace)
                    .await?;
                info!(
                    trace_id = %trace,
                    file_path = %args.file_path,
                    bytes = args.content.len(),
                    "wrote file"
                );
                json!({})
            }
        };

        Ok(outcome)
    }
}

/// Decode a call's argument map into the tool's typed arguments.
///
/// A missing required argument is a caller-contract defect, reported
/// without touching the remote service.
fn decode_args<T>(kind: ToolKind, args: &Map<String, Value>) -> Result<T>
where
    T: serde::de::DeserializeOwned,
{
    serde_json::from_value(Value::Object(args.clone()))
        .map_err(|e| OrchestratorError::contract(format!("{}: {e}", kind.as_str())))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn call(tool_name: &str, args: Value) -> ToolCall {
        serde_json::from_value(json!({"tool_name": tool_name, "args": args})).unwrap()
    }

    #[tokio::test]
    async fn test_unknown_tool_is_a_policy_error() {
        let executor = ToolExecutor::new(FileStoreClient::new("http://127.0.0.1:1"));
        let err = executor
            .execute(&call("delete_file", json!({})), &TraceId::new())
            .await
            .unwrap_err();

        assert!(matches!(err, OrchestratorError::Policy(name) if name == "delete_file"));
    }

    #[tokio::test]
    async fn test_write_without_content_is_a_contract_error() {
        // Base URL points nowhere; the argument check must fire first.
        let executor = ToolExecutor::new(FileStoreClient::new("http://127.0.0.1:1"));
        let err = executor
            .execute(
                &call("write_file", json!({"file_path": "a.txt"})),
                &TraceId::new(),
            )
            .await
            .unwrap_err();

        match err {
            OrchestratorError::Contract(detail) => {
                assert!(detail.contains("write_file"));
                assert!(detail.contains("content"));
            }
            other => panic!("expected Contract error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_read_without_file_path_is_a_contract_error() {
        let executor = ToolExecutor::new(FileStoreClient::new("http://127.0.0.1:1"));
        let err = executor
            .execute(&call("read_file", json!({})), &TraceId::new())
            .await
            .unwrap_err();

        assert!(matches!(err, OrchestratorError::Contract(_)));
    }
}
