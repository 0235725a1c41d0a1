use std::path::{Path, PathBuf};

use anyhow::Result;
use serde_json::json;
use shotline_domain::{split_file_name, AssetType, GeometryDirection, ShotId, WorkUnit};
use tracing::info;

use super::{settle, with_layout};
use crate::core::config::context::{absolute, CommandContext};
use crate::core::scene::{StoreError, StoreResult};
use crate::core::tooling::errors::registry_error_outcome;
use crate::core::tooling::outcome::ExecutionOutcome;

/// Names an asset or a shot the way the command line spells it.
#[derive(Clone, Debug)]
pub enum UnitRequest {
    Asset { asset_type: String, name: String },
    Shot { shot: String },
}

impl UnitRequest {
    fn resolve(&self) -> StoreResult<WorkUnit> {
        match self {
            UnitRequest::Asset { asset_type, name } => {
                Ok(WorkUnit::asset(AssetType::parse(asset_type)?, name.as_str())?)
            }
            UnitRequest::Shot { shot } => Ok(WorkUnit::shot(shot.parse::<ShotId>()?)),
        }
    }
}

#[derive(Clone, Debug)]
pub struct OpenRequest {
    pub unit: UnitRequest,
    pub department: String,
    /// A file name inside the edit directory; ignored when the directory is empty.
    pub version: Option<String>,
}

#[derive(Clone, Debug)]
pub struct VersionsRequest {
    pub unit: UnitRequest,
    pub department: String,
}

#[derive(Clone, Debug)]
pub struct SaveRequest {
    pub scene: PathBuf,
}

#[derive(Clone, Debug)]
pub struct PublishRequest {
    pub scene: PathBuf,
}

#[derive(Clone, Debug)]
pub struct ReferenceRequest {
    pub asset_type: String,
    pub name: String,
    pub department: String,
}

#[derive(Clone, Debug)]
pub struct GeometryRequest {
    pub scene: PathBuf,
    pub direction: GeometryDirection,
}

/// Picks the edit version to open, creating the first one from the template
/// scene when the department is still empty.
///
/// # Errors
/// Store failures are reported through the outcome.
pub fn scene_open(ctx: &CommandContext, request: OpenRequest) -> Result<ExecutionOutcome> {
    Ok(with_layout(ctx, |layout| {
        let unit = request.unit.resolve()?;
        let department = unit.department(&request.department)?;
        let target =
            ctx.store()
                .resolve_open_target(layout, &unit, department, request.version.as_deref())?;
        let message = if target.created {
            format!("created {}", target.path.display())
        } else {
            target.path.display().to_string()
        };
        Ok(ExecutionOutcome::success(
            message,
            json!({
                "unit": unit.to_string(),
                "department": department.as_str(),
                "path": target.path.display().to_string(),
                "created": target.created,
            }),
        ))
    }))
}

/// # Errors
/// Store failures are reported through the outcome.
pub fn scene_versions(ctx: &CommandContext, request: VersionsRequest) -> Result<ExecutionOutcome> {
    Ok(with_layout(ctx, |layout| {
        let unit = request.unit.resolve()?;
        let department = unit.department(&request.department)?;
        let versions = ctx.store().list_edit_versions(layout, &unit, department)?;
        let items: Vec<String> = versions.iter().map(|v| v.file_name.clone()).collect();
        let message = if items.is_empty() {
            format!("no edit versions for {unit} {department}")
        } else {
            items.join("\n")
        };
        Ok(ExecutionOutcome::success(
            message,
            json!({
                "unit": unit.to_string(),
                "department": department.as_str(),
                "items": items,
                "latest": versions.last().map(|v| v.path.display().to_string()),
                "passthrough": true,
            }),
        ))
    }))
}

/// Saves `scene` as the next edit version next to it.
///
/// # Errors
/// Returns an error if the scene path cannot be made absolute.
pub fn scene_save(ctx: &CommandContext, request: SaveRequest) -> Result<ExecutionOutcome> {
    let scene = absolute(&request.scene)?;
    let root = match ctx.project_root() {
        Ok((root, _)) => root,
        Err(err) => return Ok(registry_error_outcome(&err)),
    };
    Ok(settle(save_scene(ctx, &root, &scene)))
}

fn save_scene(ctx: &CommandContext, root: &Path, scene: &Path) -> StoreResult<ExecutionOutcome> {
    require_scene(ctx, scene)?;
    let next = ctx.store().create_next_edit_version(root, scene)?;
    ctx.fs().copy(scene, &next)?;
    info!(from = %scene.display(), to = %next.display(), "saved edit version");
    Ok(ExecutionOutcome::success(
        format!("saved {}", file_name(&next)),
        json!({
            "scene": scene.display().to_string(),
            "path": next.display().to_string(),
        }),
    ))
}

/// Publishes `scene`, first moving any live publish into `backup/`.
///
/// # Errors
/// Returns an error if the scene path cannot be made absolute.
pub fn scene_publish(ctx: &CommandContext, request: PublishRequest) -> Result<ExecutionOutcome> {
    let scene = absolute(&request.scene)?;
    let root = match ctx.project_root() {
        Ok((root, _)) => root,
        Err(err) => return Ok(registry_error_outcome(&err)),
    };
    Ok(settle(publish_scene(ctx, &root, &scene)))
}

fn publish_scene(ctx: &CommandContext, root: &Path, scene: &Path) -> StoreResult<ExecutionOutcome> {
    require_scene(ctx, scene)?;
    let plan = ctx.store().publish(root, scene)?;
    ctx.fs().copy(scene, &plan.path)?;
    info!(from = %scene.display(), to = %plan.path.display(), "published scene");
    let message = match &plan.backup {
        Some(backup) => format!(
            "published {} (previous publish kept as {})",
            file_name(&plan.path),
            file_name(backup)
        ),
        None => format!("published {}", file_name(&plan.path)),
    };
    Ok(ExecutionOutcome::success(
        message,
        json!({
            "scene": scene.display().to_string(),
            "path": plan.path.display().to_string(),
            "backup": plan.backup.as_ref().map(|p| p.display().to_string()),
        }),
    ))
}

/// Locates the live publish of an asset department and the namespace a
/// reference to it should use.
///
/// # Errors
/// Store failures are reported through the outcome.
pub fn scene_reference(ctx: &CommandContext, request: ReferenceRequest) -> Result<ExecutionOutcome> {
    Ok(with_layout(ctx, |layout| {
        let unit = WorkUnit::asset(AssetType::parse(&request.asset_type)?, request.name.as_str())?;
        let department = unit.department(&request.department)?;
        let path = ctx
            .store()
            .resolve_publish_reference(layout, &unit, department)?;
        let name = file_name(&path);
        let namespace = split_file_name(&name).0.to_string();
        Ok(ExecutionOutcome::success(
            format!("{} as {namespace}", path.display()),
            json!({
                "unit": unit.to_string(),
                "department": department.as_str(),
                "path": path.display().to_string(),
                "namespace": namespace,
            }),
        ))
    }))
}

/// Prints the sculpt exchange directory of the asset owning `scene`: `input`
/// for exports, `output` for imports. The host does the geometry transfer.
///
/// # Errors
/// Returns an error if the scene path cannot be made absolute.
pub fn scene_geometry(ctx: &CommandContext, request: GeometryRequest) -> Result<ExecutionOutcome> {
    let scene = absolute(&request.scene)?;
    let root = match ctx.project_root() {
        Ok((root, _)) => root,
        Err(err) => return Ok(registry_error_outcome(&err)),
    };
    Ok(settle(geometry_dir(ctx, &root, &scene, request.direction)))
}

fn geometry_dir(
    ctx: &CommandContext,
    root: &Path,
    scene: &Path,
    direction: GeometryDirection,
) -> StoreResult<ExecutionOutcome> {
    require_scene(ctx, scene)?;
    let dir = ctx.store().geometry_exchange_dir(root, scene, direction)?;
    Ok(ExecutionOutcome::success(
        dir.display().to_string(),
        json!({
            "scene": scene.display().to_string(),
            "direction": direction.as_str(),
            "path": dir.display().to_string(),
            "exists": ctx.fs().is_dir(&dir),
            "passthrough": true,
        }),
    ))
}

fn require_scene(ctx: &CommandContext, scene: &Path) -> StoreResult<()> {
    if ctx.fs().is_file(scene) {
        Ok(())
    } else {
        Err(StoreError::NotFound {
            what: "scene",
            path: scene.to_path_buf(),
        })
    }
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default()
}
