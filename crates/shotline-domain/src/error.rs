#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NamingError {
    #[error("the file name `{stem}` doesn't follow the format: 'name'_E_'number'")]
    EditName { stem: String },
    #[error("the publish name `{stem}` should end with '_P'")]
    PublishName { stem: String },
    #[error("`{value}` is not a shot identifier (expected sqNNNN_shNNNN)")]
    ShotId { value: String },
    #[error("unknown asset type `{value}` (expected one of: {expected})")]
    AssetType { value: String, expected: String },
    #[error("unknown {kind} department `{value}` (expected one of: {expected})")]
    Department {
        kind: &'static str,
        value: String,
        expected: String,
    },
    #[error("`{value}` must be a single directory name")]
    UnitName { value: String },
    #[error("a name is required for the {what}")]
    EmptyName { what: &'static str },
    #[error("no version number left after `{stem}`")]
    VersionOverflow { stem: String },
}

impl NamingError {
    /// The offending name or value, as the user typed or the directory listed it.
    #[must_use]
    pub fn subject(&self) -> &str {
        match self {
            NamingError::EditName { stem }
            | NamingError::PublishName { stem }
            | NamingError::VersionOverflow { stem } => stem,
            NamingError::ShotId { value }
            | NamingError::AssetType { value, .. }
            | NamingError::Department { value, .. }
            | NamingError::UnitName { value } => value,
            NamingError::EmptyName { what } => what,
        }
    }
}
