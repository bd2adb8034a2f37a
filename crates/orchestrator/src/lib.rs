pub mod error;
pub mod executor;
pub mod extract;
pub mod runner;

pub use error::{OrchestratorError, Result};
pub use executor::ToolExecutor;
pub use extract::extract_plan_json;
pub use runner::Orchestrator;
