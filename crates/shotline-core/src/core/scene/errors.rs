use std::path::{Path, PathBuf};

use shotline_domain::NamingError;

pub type StoreResult<T> = Result<T, StoreError>;

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("the {what} '{}' does not exist", .path.display())]
    NotFound { what: &'static str, path: PathBuf },
    #[error(transparent)]
    InvalidFormat(#[from] NamingError),
    #[error(
        "'{}' is not located within the {within} '{}'",
        .path.display(),
        .root.display()
    )]
    InvalidLocation {
        path: PathBuf,
        root: PathBuf,
        within: &'static str,
    },
    #[error("'{}' is not in a pipeline with edit/publish folders", .path.display())]
    InvalidPipelineLayout { path: PathBuf },
    #[error("the {what} '{}' already exists", .path.display())]
    AlreadyExists { what: &'static str, path: PathBuf },
    #[error(
        "there are multiple conflicting publish files in '{}': {}",
        .dir.display(),
        .candidates.join(", ")
    )]
    AmbiguousPublish {
        dir: PathBuf,
        candidates: Vec<String>,
    },
    #[error(transparent)]
    Io(#[from] anyhow::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    NotFound,
    InvalidFormat,
    InvalidLocation,
    InvalidPipelineLayout,
    AlreadyExists,
    AmbiguousPublish,
    Io,
}

impl ErrorKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            ErrorKind::NotFound => "not_found",
            ErrorKind::InvalidFormat => "invalid_format",
            ErrorKind::InvalidLocation => "invalid_location",
            ErrorKind::InvalidPipelineLayout => "invalid_pipeline_layout",
            ErrorKind::AlreadyExists => "already_exists",
            ErrorKind::AmbiguousPublish => "ambiguous_publish",
            ErrorKind::Io => "io",
        }
    }
}

impl StoreError {
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            StoreError::NotFound { .. } => ErrorKind::NotFound,
            StoreError::InvalidFormat(_) => ErrorKind::InvalidFormat,
            StoreError::InvalidLocation { .. } => ErrorKind::InvalidLocation,
            StoreError::InvalidPipelineLayout { .. } => ErrorKind::InvalidPipelineLayout,
            StoreError::AlreadyExists { .. } => ErrorKind::AlreadyExists,
            StoreError::AmbiguousPublish { .. } => ErrorKind::AmbiguousPublish,
            StoreError::Io(_) => ErrorKind::Io,
        }
    }

    #[must_use]
    pub fn path(&self) -> Option<&Path> {
        match self {
            StoreError::NotFound { path, .. }
            | StoreError::InvalidLocation { path, .. }
            | StoreError::InvalidPipelineLayout { path }
            | StoreError::AlreadyExists { path, .. } => Some(path),
            StoreError::AmbiguousPublish { dir, .. } => Some(dir),
            StoreError::InvalidFormat(_) | StoreError::Io(_) => None,
        }
    }

    #[must_use]
    pub fn hint(&self) -> Option<&'static str> {
        match self {
            StoreError::InvalidLocation {
                within: "project", ..
            } => Some("Run `shotline project set <PATH>` to point at the project holding this scene."),
            StoreError::InvalidLocation { .. } => {
                Some("Geometry exchange is only available for scenes inside an asset.")
            }
            StoreError::AlreadyExists { what: "edit version", .. } => Some(
                "The current scene is not the highest increment; open the latest version and retry.",
            ),
            StoreError::AmbiguousPublish { .. } => {
                Some("Keep a single `_P` file in the publish directory and move the rest to backup/.")
            }
            StoreError::InvalidFormat(NamingError::EditName { .. }) => {
                Some("Scene files are named <name>_E_<number>, e.g. hero_modeling_E_001.ma.")
            }
            _ => None,
        }
    }
}
