use std::path::{Component, Path, PathBuf};

use axum::extract::{Query, State};
use axum::http::HeaderMap;
use axum::Json;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::error::AppError;
use crate::state::{AppState, ALLOWED_EXTENSIONS, MAX_FILE_SIZE_BYTES};

/// Correlation header set by callers; echoed into logs only.
pub const TRACE_HEADER: &str = "x-trace-id";

#[derive(Debug, Deserialize, ToSchema)]
pub struct ListQuery {
    pub extensions: Option<String>,
    pub max_items: Option<usize>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct FileQuery {
    pub file_path: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct FileContent {
    /// File content in UTF-8.
    pub content: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct FileListResponse {
    pub files: Vec<String>,
}

fn trace_id(headers: &HeaderMap) -> &str {
    headers
        .get(TRACE_HEADER)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("-")
}

#[utoipa::path(
    get,
    path = "/list_files",
    params(
        ("extensions" = Option<String>, Query, description = "Comma-separated suffix allow-list, e.g. \".txt,.md\""),
        ("max_items" = Option<usize>, Query, description = "Keep only the first N entries")
    ),
    responses(
        (status = 200, description = "Files under the sandbox root", body = FileListResponse)
    ),
    tag = "files"
)]
pub async fn list_files(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
    headers: HeaderMap,
) -> Result<Json<FileListResponse>, AppError> {
    let mut files = collect_files(&state.base_dir)?;
    files.sort();

    if let Some(extensions) = &query.extensions {
        // Filter entries are dotted suffixes; an entry without the leading
        // dot names no suffix and matches nothing.
        let allowed: Vec<&str> = extensions
            .split(',')
            .map(str::trim)
            .filter(|ext| ext.starts_with('.'))
            .collect();
        files.retain(|f| allowed.iter().any(|ext| f.ends_with(ext)));
    }

    if let Some(max_items) = query.max_items {
        files.truncate(max_items);
    }

    tracing::debug!(
        trace_id = trace_id(&headers),
        count = files.len(),
        "listed files"
    );

    Ok(Json(FileListResponse { files }))
}

#[utoipa::path(
    get,
    path = "/read_file",
    params(
        ("file_path" = String, Query, description = "Path relative to the sandbox root")
    ),
    responses(
        (status = 200, description = "File content", body = FileContent),
        (status = 400, description = "Path escapes the sandbox, extension disallowed, or file is not UTF-8"),
        (status = 404, description = "File not found")
    ),
    tag = "files"
)]
pub async fn read_file(
    State(state): State<AppState>,
    Query(query): Query<FileQuery>,
    headers: HeaderMap,
) -> Result<Json<FileContent>, AppError> {
    let abs_path = resolve_path(&state.base_dir, &query.file_path)?;
    validate_extension(&query.file_path)?;

    if !abs_path.is_file() {
        return Err(AppError::NotFound("File not found".to_string()));
    }

    let bytes = tokio::fs::read(&abs_path).await?;
    let content = String::from_utf8(bytes)
        .map_err(|_| AppError::BadRequest("File is not UTF-8 encoded".to_string()))?;

    tracing::debug!(
        trace_id = trace_id(&headers),
        file_path = %query.file_path,
        bytes = content.len(),
        "read file"
    );

    Ok(Json(FileContent { content }))
}

#[utoipa::path(
    post,
    path = "/write_file",
    params(
        ("file_path" = String, Query, description = "Path relative to the sandbox root")
    ),
    request_body = FileContent,
    responses(
        (status = 200, description = "File written"),
        (status = 400, description = "Path escapes the sandbox or extension disallowed"),
        (status = 413, description = "Content exceeds the size cap")
    ),
    tag = "files"
)]
pub async fn write_file(
    State(state): State<AppState>,
    Query(query): Query<FileQuery>,
    headers: HeaderMap,
    Json(body): Json<FileContent>,
) -> Result<(), AppError> {
    let abs_path = resolve_path(&state.base_dir, &query.file_path)?;
    validate_extension(&query.file_path)?;

    if body.content.len() > MAX_FILE_SIZE_BYTES {
        return Err(AppError::PayloadTooLarge(format!(
            "File size exceeds {}KB limit",
            MAX_FILE_SIZE_BYTES / 1024
        )));
    }

    if let Some(parent) = abs_path.parent() {
        tokio::fs::create_dir_all(parent).await?;
    }
    tokio::fs::write(&abs_path, &body.content).await?;

    tracing::info!(
        trace_id = trace_id(&headers),
        file_path = %query.file_path,
        bytes = body.content.len(),
        "wrote file"
    );

    Ok(())
}

/// Resolve a caller-supplied relative path inside the sandbox.
///
/// Checked lexically rather than with canonicalize so writes to paths that
/// do not exist yet get the same treatment as reads.
fn resolve_path(base_dir: &Path, file_path: &str) -> Result<PathBuf, AppError> {
    let rel = Path::new(file_path);

    let escapes = rel.is_absolute()
        || rel
            .components()
            .any(|c| matches!(c, Component::ParentDir | Component::Prefix(_)));

    if escapes {
        return Err(AppError::BadRequest("Path traversal detected".to_string()));
    }

    Ok(base_dir.join(rel))
}

fn validate_extension(file_path: &str) -> Result<(), AppError> {
    if ALLOWED_EXTENSIONS.iter().any(|ext| file_path.ends_with(ext)) {
        return Ok(());
    }

    let suffix = Path::new(file_path)
        .extension()
        .map(|e| format!(".{}", e.to_string_lossy()))
        .unwrap_or_default();

    Err(AppError::BadRequest(format!(
        "Extension {suffix:?} not allowed"
    )))
}

/// Walk the sandbox recursively, returning paths relative to `base_dir`.
fn collect_files(base_dir: &Path) -> std::io::Result<Vec<String>> {
    let mut files = Vec::new();
    let mut pending = vec![base_dir.to_path_buf()];

    while let Some(dir) = pending.pop() {
        for entry in std::fs::read_dir(&dir)? {
            let entry = entry?;
            let path = entry.path();

            if path.is_dir() {
                pending.push(path);
            } else if let Ok(rel) = path.strip_prefix(base_dir) {
                files.push(rel.display().to_string());
            }
        }
    }

    Ok(files)
}
