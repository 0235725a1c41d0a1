use std::path::PathBuf;

use anyhow::Result;
use serde_json::json;

use crate::core::config::context::{absolute, CommandContext};
use crate::core::tooling::errors::registry_error_outcome;
use crate::core::tooling::outcome::ExecutionOutcome;

#[derive(Clone, Debug)]
pub struct ProjectSetRequest {
    pub path: PathBuf,
}

#[derive(Clone, Debug, Default)]
pub struct ProjectShowRequest;

/// Registers the current project for later invocations.
///
/// # Errors
/// Returns an error if the path cannot be made absolute.
pub fn project_set(ctx: &CommandContext, request: ProjectSetRequest) -> Result<ExecutionOutcome> {
    let path = absolute(&request.path)?;
    let registry = ctx.registry();
    match registry.set(&path) {
        Ok(project) => Ok(ExecutionOutcome::success(
            format!("current project set to {}", project.display()),
            json!({
                "project": project.display().to_string(),
                "registry": registry.file().display().to_string(),
            }),
        )),
        Err(err) => Ok(registry_error_outcome(&err)),
    }
}

/// Reports the project this invocation would work in.
///
/// # Errors
/// Never fails outright; resolution problems come back as outcomes.
pub fn project_show(ctx: &CommandContext, _request: ProjectShowRequest) -> Result<ExecutionOutcome> {
    let (root, source) = match ctx.project_root() {
        Ok(resolved) => resolved,
        Err(err) => return Ok(registry_error_outcome(&err)),
    };
    let exists = ctx.fs().is_dir(&root);
    let message = if exists {
        root.display().to_string()
    } else {
        format!("{} (missing)", root.display())
    };
    Ok(ExecutionOutcome::success(
        message,
        json!({
            "project": root.display().to_string(),
            "source": source.as_str(),
            "exists": exists,
            "passthrough": true,
        }),
    ))
}
