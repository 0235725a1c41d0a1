#![deny(clippy::all)]
#![allow(
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::must_use_candidate
)]

//! Naming grammar and directory layout of the shotline pipeline.
//!
//! Nothing in this crate touches the filesystem; it only knows how scene
//! files and work-unit directories are named.

pub mod error;
pub mod layout;
pub mod naming;
pub mod work_unit;

pub use error::NamingError;
pub use layout::{
    geometry_exchange_dir, normalize_lexically, publish_dir_for, GeometryDirection, ProjectLayout,
    Stage, ASSET_ROOT, ASSET_TEMPLATE, BACKUP_DIR, DCC_DIR, SCULPT_EXCHANGE_DIR, SHOT_ROOT,
    SHOT_TEMPLATE,
};
pub use naming::{
    is_publish_stem, pad_version, split_file_name, BackupName, EditName, PublishName,
    BACKUP_SEPARATOR, EDIT_SEPARATOR, PUBLISH_SUFFIX, VERSION_WIDTH,
};
pub use work_unit::{
    AssetDepartment, AssetType, Department, ShotDepartment, ShotId, WorkUnit, SHOT_DIGITS,
};
