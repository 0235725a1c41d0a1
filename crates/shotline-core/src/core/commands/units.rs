use anyhow::Result;
use serde_json::json;
use shotline_domain::AssetType;

use super::with_layout;
use crate::core::config::context::CommandContext;
use crate::core::tooling::outcome::ExecutionOutcome;

#[derive(Clone, Debug)]
pub struct AssetCreateRequest {
    pub asset_type: String,
    pub name: String,
}

#[derive(Clone, Debug)]
pub struct AssetListRequest {
    pub asset_type: String,
}

#[derive(Clone, Debug)]
pub struct ShotCreateRequest {
    pub sequence: u32,
    pub shot: u32,
}

#[derive(Clone, Debug, Default)]
pub struct ShotListRequest;

/// Creates an asset from the project's asset template.
///
/// # Errors
/// Store failures are reported through the outcome; the `Result` is kept for
/// handler uniformity.
pub fn asset_create(ctx: &CommandContext, request: AssetCreateRequest) -> Result<ExecutionOutcome> {
    Ok(with_layout(ctx, |layout| {
        let asset_type = AssetType::parse(&request.asset_type)?;
        let (unit, path) = ctx.catalog().create_asset(layout, asset_type, &request.name)?;
        Ok(ExecutionOutcome::success(
            format!("created asset {unit}"),
            json!({
                "asset_type": asset_type.as_str(),
                "name": unit.name(),
                "path": path.display().to_string(),
            }),
        ))
    }))
}

/// # Errors
/// See [`asset_create`].
pub fn asset_list(ctx: &CommandContext, request: AssetListRequest) -> Result<ExecutionOutcome> {
    Ok(with_layout(ctx, |layout| {
        let asset_type = AssetType::parse(&request.asset_type)?;
        let items = ctx.catalog().list_assets(layout, asset_type)?;
        let message = if items.is_empty() {
            format!("no {} assets", asset_type.as_str())
        } else {
            items.join("\n")
        };
        Ok(ExecutionOutcome::success(
            message,
            json!({
                "asset_type": asset_type.as_str(),
                "items": items,
                "passthrough": true,
            }),
        ))
    }))
}

/// Creates `sq<NNNN>_sh<NNNN>` from the project's shot template.
///
/// # Errors
/// See [`asset_create`].
pub fn shot_create(ctx: &CommandContext, request: ShotCreateRequest) -> Result<ExecutionOutcome> {
    Ok(with_layout(ctx, |layout| {
        let (unit, path) = ctx
            .catalog()
            .create_shot(layout, request.sequence, request.shot)?;
        Ok(ExecutionOutcome::success(
            format!("created shot {unit}"),
            json!({ "name": unit.name(), "path": path.display().to_string() }),
        ))
    }))
}

/// # Errors
/// See [`asset_create`].
pub fn shot_list(ctx: &CommandContext, _request: ShotListRequest) -> Result<ExecutionOutcome> {
    Ok(with_layout(ctx, |layout| {
        let items: Vec<String> = ctx
            .catalog()
            .list_shots(layout)?
            .into_iter()
            .map(|id| id.to_string())
            .collect();
        let message = if items.is_empty() {
            "no shots".to_string()
        } else {
            items.join("\n")
        };
        Ok(ExecutionOutcome::success(
            message,
            json!({ "items": items, "passthrough": true }),
        ))
    }))
}
