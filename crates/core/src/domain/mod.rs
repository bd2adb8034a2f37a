mod plan;
mod tool;
mod trace;

pub use plan::{Plan, ToolCall};
pub use tool::ToolKind;
pub use trace::TraceId;
