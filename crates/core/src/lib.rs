pub mod domain;

pub use domain::{Plan, ToolCall, ToolKind, TraceId};
