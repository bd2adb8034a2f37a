use serde::{Deserialize, Serialize};

/// The closed set of operations a plan is allowed to request.
///
/// Anything outside this enum is a policy violation; there is no free-form
/// string dispatch anywhere downstream.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ToolKind {
    ListFiles,
    ReadFile,
    WriteFile,
}

impl ToolKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ListFiles => "list_files",
            Self::ReadFile => "read_file",
            Self::WriteFile => "write_file",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "list_files" => Some(Self::ListFiles),
            "read_file" => Some(Self::ReadFile),
            "write_file" => Some(Self::WriteFile),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_tools() {
        assert_eq!(ToolKind::parse("list_files"), Some(ToolKind::ListFiles));
        assert_eq!(ToolKind::parse("read_file"), Some(ToolKind::ReadFile));
        assert_eq!(ToolKind::parse("write_file"), Some(ToolKind::WriteFile));
    }

    #[test]
    fn test_parse_rejects_unknown_tools() {
        assert_eq!(ToolKind::parse("delete_file"), None);
        assert_eq!(ToolKind::parse(""), None);
        assert_eq!(ToolKind::parse("LIST_FILES"), None);
    }

    #[test]
    fn test_as_str_round_trips() {
        for kind in [ToolKind::ListFiles, ToolKind::ReadFile, ToolKind::WriteFile] {
            assert_eq!(ToolKind::parse(kind.as_str()), Some(kind));
        }
    }
}
