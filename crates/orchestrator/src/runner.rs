//! Drives one orchestration run: extract, decode, execute in order.

use filestore::FileStoreClient;
use planrun_core::{Plan, TraceId};
use tracing::{info, warn};

use crate::error::{OrchestratorError, Result};
use crate::executor::ToolExecutor;
use crate::extract::extract_plan_json;

pub struct Orchestrator {
    executor: ToolExecutor,
}

impl Orchestrator {
    pub fn new(store: FileStoreClient) -> Self {
        Self {
            executor: ToolExecutor::new(store),
        }
    }

    /// Run one plan from raw model output and report the result code.
    ///
    /// Codes: 0 success (including an empty plan), 1 execution failure or
    /// malformed call, 2 policy violation, 3 no JSON plan extracted.
    pub async fn run(&self, raw_output: &str) -> i32 {
        let trace = TraceId::new();

        match self.try_run(raw_output, &trace).await {
            Ok(()) => 0,
            Err(err) => {
                warn!(trace_id = %trace, error = %err, "orchestration run failed");
                err.exit_code()
            }
        }
    }

    async fn try_run(&self, raw_output: &str, trace: &TraceId) -> Result<()> {
        let value = extract_plan_json(raw_output)?;
        let plan = Plan::from_value(&value)
            .map_err(|e| OrchestratorError::contract(format!("invalid plan shape: {e}")))?;

        info!(
            trace_id = %trace,
            tool_calls = plan.tool_calls.len(),
            "executing plan"
        );

        // Strictly sequential; the first failure is terminal and later
        // calls are never attempted. Outcomes are not chained between
        // calls, so each one is dropped after logging.
        for (index, call) in plan.tool_calls.iter().enumerate() {
            self.executor.execute(call, trace).await.map_err(|err| {
                warn!(
                    trace_id = %trace,
                    index,
                    tool = %call.tool_name,
                    error = %err,
                    "tool call failed, aborting plan"
                );
                err
            })?;
        }

        info!(trace_id = %trace, "plan completed");
        Ok(())
    }
}
