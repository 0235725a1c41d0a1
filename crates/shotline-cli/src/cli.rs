use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand};

pub const SHOTLINE_HELP_TEMPLATE: &str =
    "{before-help}\nUsage:\n    {usage}\n\nGlobal options:\n{options}\n";

pub const SHOTLINE_BEFORE_HELP: &str = concat!(
    "shotline ",
    env!("CARGO_PKG_VERSION"),
    " – Versioned scenes for asset and shot pipelines\n\n",
    "\x1b[1;36mProject\x1b[0m\n",
    "  project          Register or show the current project.\n",
    "  asset / shot     Create work units from the project templates, or list them.\n\n",
    "\x1b[1;36mScenes\x1b[0m\n",
    "  open             Pick the edit version to open (creates _E_001 when empty).\n",
    "  versions         List a department's edit versions in order.\n",
    "  save             Save a scene as the next _E_ version.\n",
    "  publish          Publish a scene as _P, keeping the previous publish in backup/.\n",
    "  reference        Locate the live publish of an asset department.\n",
    "  geometry         Print an asset scene's sculpt exchange folder.\n",
);

#[derive(Parser, Debug)]
#[command(
    name = "shotline",
    author,
    version,
    propagate_version = false,
    disable_help_subcommand = true,
    before_help = SHOTLINE_BEFORE_HELP,
    help_template = SHOTLINE_HELP_TEMPLATE
)]
pub struct ShotlineCli {
    #[arg(
        short,
        long,
        help = "Suppress human output (errors still set the exit code)",
        global = true
    )]
    pub quiet: bool,
    #[arg(short, long, action = ArgAction::Count, help = "Increase logging (-vv reaches debug)", global = true)]
    pub verbose: u8,
    #[arg(long, help = "Force trace logging regardless of -v/-q", global = true)]
    pub trace: bool,
    #[arg(
        long,
        help = "Emit {status,message,details} JSON envelopes",
        global = true
    )]
    pub json: bool,
    #[arg(long, help = "Disable colored human output", global = true)]
    pub no_color: bool,
    #[arg(
        long,
        value_name = "PATH",
        help = "Project root for this invocation (overrides SHOTLINE_PROJECT and the registered project)",
        global = true
    )]
    pub project: Option<PathBuf>,
    #[command(subcommand)]
    pub command: CommandGroupCli,
}

#[derive(Subcommand, Debug)]
pub enum CommandGroupCli {
    #[command(
        about = "Register or show the current project.",
        override_usage = "shotline project <set|show>",
        subcommand
    )]
    Project(ProjectCommand),
    #[command(
        about = "Create or list assets.",
        override_usage = "shotline asset <create|list>",
        subcommand
    )]
    Asset(AssetCommand),
    #[command(
        about = "Create or list shots.",
        override_usage = "shotline shot <create|list>",
        subcommand
    )]
    Shot(ShotCommand),
    #[command(
        about = "Pick the edit version to open; an empty department gets _E_001 from the template.",
        override_usage = "shotline open <asset|shot> ... [--version FILE]",
        subcommand
    )]
    Open(OpenCommand),
    #[command(
        about = "List the edit versions of a department, oldest first.",
        override_usage = "shotline versions <asset|shot> ...",
        subcommand
    )]
    Versions(VersionsCommand),
    #[command(
        about = "Save a scene as the next edit version beside it.",
        override_usage = "shotline save <SCENE>",
        after_help = "Examples:\n  shotline save show/04_asset/character/Hero/maya/scenes/edit/modeling/hero_modeling_E_001.ma\n"
    )]
    Save(SceneArgs),
    #[command(
        about = "Publish a scene as <name>_P, moving the previous publish into backup/.",
        override_usage = "shotline publish <SCENE>",
        after_help = "Examples:\n  shotline publish show/04_asset/prop/Crate/maya/scenes/edit/rig/crate_rig_E_004.ma\n  shotline --json publish hero_modeling_E_002.ma\n"
    )]
    Publish(SceneArgs),
    #[command(
        about = "Locate the live publish of an asset department and its namespace.",
        override_usage = "shotline reference <TYPE> <NAME> <DEPARTMENT>",
        after_help = "Examples:\n  shotline reference character Hero rig\n  shotline --json reference prop Crate modeling\n"
    )]
    Reference(AssetDepartmentArgs),
    #[command(
        about = "Print the sculpt exchange folder of the asset owning a scene.",
        override_usage = "shotline geometry <export|import> <SCENE>",
        subcommand
    )]
    Geometry(GeometryCommand),
}

#[derive(Subcommand, Debug)]
pub enum ProjectCommand {
    #[command(
        about = "Record PATH as the current project.",
        override_usage = "shotline project set <PATH>",
        after_help = "Examples:\n  shotline project set /mnt/shows/forest\n"
    )]
    Set(ProjectSetArgs),
    #[command(
        about = "Print the project this invocation would use.",
        override_usage = "shotline project show"
    )]
    Show,
}

#[derive(Args, Debug)]
pub struct ProjectSetArgs {
    #[arg(value_name = "PATH")]
    pub path: PathBuf,
}

#[derive(Subcommand, Debug)]
pub enum AssetCommand {
    #[command(
        about = "Create an asset from the project's asset template.",
        override_usage = "shotline asset create <TYPE> <NAME>",
        after_help = "Types: character, FX, item, prop, set\n\nExamples:\n  shotline asset create character Hero\n"
    )]
    Create(AssetArgs),
    #[command(
        about = "List the assets of one type.",
        override_usage = "shotline asset list <TYPE>"
    )]
    List(AssetTypeArgs),
}

#[derive(Args, Debug)]
pub struct AssetTypeArgs {
    #[arg(value_name = "TYPE")]
    pub asset_type: String,
}

#[derive(Args, Debug)]
pub struct AssetArgs {
    #[arg(value_name = "TYPE")]
    pub asset_type: String,
    #[arg(value_name = "NAME")]
    pub name: String,
}

#[derive(Subcommand, Debug)]
pub enum ShotCommand {
    #[command(
        about = "Create sq<SEQUENCE>_sh<SHOT> from the project's shot template.",
        override_usage = "shotline shot create <SEQUENCE> <SHOT>",
        after_help = "Examples:\n  shotline shot create 10 30    # sq0010_sh0030\n"
    )]
    Create(ShotCreateArgs),
    #[command(about = "List the project's shots.", override_usage = "shotline shot list")]
    List,
}

#[derive(Args, Debug)]
pub struct ShotCreateArgs {
    #[arg(value_name = "SEQUENCE")]
    pub sequence: u32,
    #[arg(value_name = "SHOT")]
    pub shot: u32,
}

#[derive(Subcommand, Debug)]
pub enum OpenCommand {
    #[command(
        about = "Open an asset department.",
        override_usage = "shotline open asset <TYPE> <NAME> <DEPARTMENT> [--version FILE]",
        after_help = "Examples:\n  shotline open asset character Hero modeling\n  shotline open asset character Hero modeling --version hero_modeling_E_003.ma\n"
    )]
    Asset(OpenAssetArgs),
    #[command(
        about = "Open a shot department.",
        override_usage = "shotline open shot <SHOT> <DEPARTMENT> [--version FILE]",
        after_help = "Examples:\n  shotline open shot sq0010_sh0030 anim\n"
    )]
    Shot(OpenShotArgs),
}

#[derive(Args, Debug)]
pub struct OpenAssetArgs {
    #[command(flatten)]
    pub target: AssetDepartmentArgs,
    #[arg(long, value_name = "FILE", help = "Edit version file name to open instead of the latest")]
    pub version: Option<String>,
}

#[derive(Args, Debug)]
pub struct OpenShotArgs {
    #[command(flatten)]
    pub target: ShotDepartmentArgs,
    #[arg(long, value_name = "FILE", help = "Edit version file name to open instead of the latest")]
    pub version: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum VersionsCommand {
    #[command(override_usage = "shotline versions asset <TYPE> <NAME> <DEPARTMENT>")]
    Asset(AssetDepartmentArgs),
    #[command(override_usage = "shotline versions shot <SHOT> <DEPARTMENT>")]
    Shot(ShotDepartmentArgs),
}

#[derive(Args, Debug)]
pub struct AssetDepartmentArgs {
    #[arg(value_name = "TYPE")]
    pub asset_type: String,
    #[arg(value_name = "NAME")]
    pub name: String,
    #[arg(value_name = "DEPARTMENT")]
    pub department: String,
}

#[derive(Args, Debug)]
pub struct ShotDepartmentArgs {
    #[arg(value_name = "SHOT", help = "Shot identifier, e.g. sq0010_sh0030")]
    pub shot: String,
    #[arg(value_name = "DEPARTMENT")]
    pub department: String,
}

#[derive(Subcommand, Debug)]
pub enum GeometryCommand {
    #[command(
        about = "Folder geometry is exported to (sculpt/zbrush/input).",
        override_usage = "shotline geometry export <SCENE>",
        after_help = "Examples:\n  shotline geometry export show/04_asset/character/Hero/maya/scenes/edit/modeling/hero_modeling_E_004.ma\n"
    )]
    Export(SceneArgs),
    #[command(
        about = "Folder sculpted geometry is imported from (sculpt/zbrush/output).",
        override_usage = "shotline geometry import <SCENE>"
    )]
    Import(SceneArgs),
}

#[derive(Args, Debug)]
pub struct SceneArgs {
    #[arg(value_name = "SCENE", help = "Path of the scene currently open")]
    pub scene: PathBuf,
}
