#![deny(clippy::all)]
#![allow(
    clippy::missing_errors_doc,
    clippy::module_name_repetitions,
    clippy::must_use_candidate
)]

//! Versioned scene storage for the shotline pipeline: edit versions, the live
//! publish with its backups, and the command handlers the CLI drives.

mod core;

pub use crate::core::commands::project::{
    project_set, project_show, ProjectSetRequest, ProjectShowRequest,
};
pub use crate::core::commands::scene::{
    scene_geometry, scene_open, scene_publish, scene_reference, scene_save, scene_versions,
    GeometryRequest, OpenRequest, PublishRequest, ReferenceRequest, SaveRequest, UnitRequest,
    VersionsRequest,
};
pub use crate::core::commands::units::{
    asset_create, asset_list, shot_create, shot_list, AssetCreateRequest, AssetListRequest,
    ShotCreateRequest, ShotListRequest,
};
pub use crate::core::config::context::{CommandContext, CommandGroup, CommandInfo, ProjectSource};
pub use crate::core::config::registry::{ProjectRegistry, RegistryError, PROJECT_FILE};
pub use crate::core::config::{
    Config, GlobalOptions, DEFAULT_HOME_DIR, DEFAULT_TEMPLATE_SCENE, HOME_ENV, PROJECT_ENV,
    TEMPLATE_ENV,
};
pub use crate::core::effects::{DirEntry, FileSystem, SharedFileSystem, SystemFileSystem};
pub use crate::core::scene::{
    EditVersion, ErrorKind, OpenTarget, PublishPlan, SceneStore, StoreError, StoreResult,
    UnitCatalog,
};
pub use crate::core::tooling::errors::{
    format_status_message, registry_error_outcome, store_error_outcome, to_json_response,
};
pub use crate::core::tooling::outcome::{CommandStatus, ExecutionOutcome};
pub use shotline_domain::GeometryDirection;
