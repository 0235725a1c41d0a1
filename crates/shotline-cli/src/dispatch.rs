use color_eyre::Result;
use shotline_core::{
    self as shotline, AssetCreateRequest, AssetListRequest, CommandContext, CommandGroup, CommandInfo,
    ExecutionOutcome, GeometryDirection, GeometryRequest, OpenRequest, ProjectSetRequest,
    ProjectShowRequest, PublishRequest, ReferenceRequest, SaveRequest, ShotCreateRequest,
    ShotListRequest, UnitRequest, VersionsRequest,
};

use crate::cli::{
    AssetCommand, AssetDepartmentArgs, CommandGroupCli, GeometryCommand, OpenCommand,
    ProjectCommand, ShotCommand, ShotDepartmentArgs, VersionsCommand,
};

pub fn dispatch_command(
    ctx: &CommandContext,
    group: &CommandGroupCli,
) -> Result<(CommandInfo, ExecutionOutcome)> {
    match group {
        CommandGroupCli::Project(cmd) => dispatch_project(ctx, cmd),
        CommandGroupCli::Asset(cmd) => dispatch_asset(ctx, cmd),
        CommandGroupCli::Shot(cmd) => dispatch_shot(ctx, cmd),
        CommandGroupCli::Open(cmd) => {
            let info = CommandInfo::new(CommandGroup::Open, "open");
            let request = match cmd {
                OpenCommand::Asset(args) => OpenRequest {
                    unit: asset_unit(&args.target),
                    department: args.target.department.clone(),
                    version: args.version.clone(),
                },
                OpenCommand::Shot(args) => OpenRequest {
                    unit: shot_unit(&args.target),
                    department: args.target.department.clone(),
                    version: args.version.clone(),
                },
            };
            core_call(info, || shotline::scene_open(ctx, request))
        }
        CommandGroupCli::Versions(cmd) => {
            let info = CommandInfo::new(CommandGroup::Versions, "versions");
            let request = match cmd {
                VersionsCommand::Asset(args) => VersionsRequest {
                    unit: asset_unit(args),
                    department: args.department.clone(),
                },
                VersionsCommand::Shot(args) => VersionsRequest {
                    unit: shot_unit(args),
                    department: args.department.clone(),
                },
            };
            core_call(info, || shotline::scene_versions(ctx, request))
        }
        CommandGroupCli::Save(args) => {
            let info = CommandInfo::new(CommandGroup::Save, "save");
            let request = SaveRequest {
                scene: args.scene.clone(),
            };
            core_call(info, || shotline::scene_save(ctx, request))
        }
        CommandGroupCli::Publish(args) => {
            let info = CommandInfo::new(CommandGroup::Publish, "publish");
            let request = PublishRequest {
                scene: args.scene.clone(),
            };
            core_call(info, || shotline::scene_publish(ctx, request))
        }
        CommandGroupCli::Reference(args) => {
            let info = CommandInfo::new(CommandGroup::Reference, "reference");
            let request = ReferenceRequest {
                asset_type: args.asset_type.clone(),
                name: args.name.clone(),
                department: args.department.clone(),
            };
            core_call(info, || shotline::scene_reference(ctx, request))
        }
        CommandGroupCli::Geometry(cmd) => {
            let (name, direction, args) = match cmd {
                GeometryCommand::Export(args) => ("export", GeometryDirection::Export, args),
                GeometryCommand::Import(args) => ("import", GeometryDirection::Import, args),
            };
            let info = CommandInfo::new(CommandGroup::Geometry, name);
            let request = GeometryRequest {
                scene: args.scene.clone(),
                direction,
            };
            core_call(info, || shotline::scene_geometry(ctx, request))
        }
    }
}

fn dispatch_project(
    ctx: &CommandContext,
    cmd: &ProjectCommand,
) -> Result<(CommandInfo, ExecutionOutcome)> {
    match cmd {
        ProjectCommand::Set(args) => {
            let info = CommandInfo::new(CommandGroup::Project, "set");
            let request = ProjectSetRequest {
                path: args.path.clone(),
            };
            core_call(info, || shotline::project_set(ctx, request))
        }
        ProjectCommand::Show => {
            let info = CommandInfo::new(CommandGroup::Project, "show");
            core_call(info, || shotline::project_show(ctx, ProjectShowRequest))
        }
    }
}

fn dispatch_asset(
    ctx: &CommandContext,
    cmd: &AssetCommand,
) -> Result<(CommandInfo, ExecutionOutcome)> {
    match cmd {
        AssetCommand::Create(args) => {
            let info = CommandInfo::new(CommandGroup::Asset, "create");
            let request = AssetCreateRequest {
                asset_type: args.asset_type.clone(),
                name: args.name.clone(),
            };
            core_call(info, || shotline::asset_create(ctx, request))
        }
        AssetCommand::List(args) => {
            let info = CommandInfo::new(CommandGroup::Asset, "list");
            let request = AssetListRequest {
                asset_type: args.asset_type.clone(),
            };
            core_call(info, || shotline::asset_list(ctx, request))
        }
    }
}

fn dispatch_shot(ctx: &CommandContext, cmd: &ShotCommand) -> Result<(CommandInfo, ExecutionOutcome)> {
    match cmd {
        ShotCommand::Create(args) => {
            let info = CommandInfo::new(CommandGroup::Shot, "create");
            let request = ShotCreateRequest {
                sequence: args.sequence,
                shot: args.shot,
            };
            core_call(info, || shotline::shot_create(ctx, request))
        }
        ShotCommand::List => {
            let info = CommandInfo::new(CommandGroup::Shot, "list");
            core_call(info, || shotline::shot_list(ctx, ShotListRequest))
        }
    }
}

fn asset_unit(args: &AssetDepartmentArgs) -> UnitRequest {
    UnitRequest::Asset {
        asset_type: args.asset_type.clone(),
        name: args.name.clone(),
    }
}

fn shot_unit(args: &ShotDepartmentArgs) -> UnitRequest {
    UnitRequest::Shot {
        shot: args.shot.clone(),
    }
}

/// Runs a handler, folding unexpected errors into a `Failure` outcome.
fn core_call<F>(info: CommandInfo, action: F) -> Result<(CommandInfo, ExecutionOutcome)>
where
    F: FnOnce() -> anyhow::Result<ExecutionOutcome>,
{
    match action() {
        Ok(outcome) => Ok((info, outcome)),
        Err(err) => {
            tracing::debug!(error = ?err, command = info.name, "command failed");
            let issues: Vec<String> = err.chain().map(std::string::ToString::to_string).collect();
            Ok((
                info,
                ExecutionOutcome::failure(
                    err.to_string(),
                    serde_json::json!({
                        "reason": "internal_error",
                        "error": err.to_string(),
                        "issues": issues,
                    }),
                ),
            ))
        }
    }
}
