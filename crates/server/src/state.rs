use std::io;
use std::path::PathBuf;

/// File extensions the service will list, read, or write.
pub const ALLOWED_EXTENSIONS: &[&str] = &[".txt", ".log", ".md", ".py", ".json", ".yml", ".yaml"];

/// Hard cap on written content. 512 KiB.
pub const MAX_FILE_SIZE_BYTES: usize = 512 * 1024;

#[derive(Debug, Clone)]
pub struct AppState {
    /// Sandbox root; every served path stays underneath it.
    pub base_dir: PathBuf,
}

impl AppState {
    pub fn new(base_dir: impl Into<PathBuf>) -> io::Result<Self> {
        let base_dir = base_dir.into();
        std::fs::create_dir_all(&base_dir)?;
        Ok(Self { base_dir })
    }
}
