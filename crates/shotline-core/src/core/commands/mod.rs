//! Command handlers: each takes a context plus a request and yields an outcome.

pub mod project;
pub mod scene;
pub mod units;

use shotline_domain::ProjectLayout;

use crate::core::config::context::CommandContext;
use crate::core::scene::StoreResult;
use crate::core::tooling::errors::{registry_error_outcome, store_error_outcome};
use crate::core::tooling::outcome::ExecutionOutcome;

/// Runs `body` against the resolved project layout, turning store errors into
/// user-facing outcomes.
pub(crate) fn with_layout(
    ctx: &CommandContext,
    body: impl FnOnce(&ProjectLayout) -> StoreResult<ExecutionOutcome>,
) -> ExecutionOutcome {
    match ctx.layout() {
        Ok(layout) => settle(body(&layout)),
        Err(err) => registry_error_outcome(&err),
    }
}

pub(crate) fn settle(result: StoreResult<ExecutionOutcome>) -> ExecutionOutcome {
    result.unwrap_or_else(|err| {
        tracing::debug!(error = %err, kind = err.kind().as_str(), "store operation failed");
        store_error_outcome(&err)
    })
}
