use std::fmt;
use std::str::FromStr;

use strum::{Display, EnumIter, EnumString, IntoEnumIterator, IntoStaticStr};

use crate::NamingError;

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Display, EnumString, EnumIter, IntoStaticStr,
)]
pub enum AssetType {
    #[strum(serialize = "character")]
    Character,
    #[strum(serialize = "FX")]
    Fx,
    #[strum(serialize = "item")]
    Item,
    #[strum(serialize = "prop")]
    Prop,
    #[strum(serialize = "set")]
    Set,
}

impl AssetType {
    pub fn parse(value: &str) -> Result<Self, NamingError> {
        Self::from_str(value).map_err(|_| NamingError::AssetType {
            value: value.to_string(),
            expected: join_names(Self::iter()),
        })
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        self.into()
    }
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Display, EnumString, EnumIter, IntoStaticStr,
)]
#[strum(serialize_all = "camelCase")]
pub enum AssetDepartment {
    AssetLayout,
    Cloth,
    Dressing,
    Groom,
    Lookdev,
    Modeling,
    Rig,
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Display, EnumString, EnumIter, IntoStaticStr,
)]
#[strum(serialize_all = "lowercase")]
pub enum ShotDepartment {
    Anim,
    Layout,
    Render,
}

/// A pipeline stage of a work unit. Asset and shot units have disjoint sets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Department {
    Asset(AssetDepartment),
    Shot(ShotDepartment),
}

impl Department {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Department::Asset(dept) => dept.into(),
            Department::Shot(dept) => dept.into(),
        }
    }
}

impl fmt::Display for Department {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Digits in each half of a shot identifier.
pub const SHOT_DIGITS: usize = 4;

const SHOT_NUMBER_MAX: u32 = 9999;

/// `sq<NNNN>_sh<NNNN>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ShotId {
    pub sequence: u32,
    pub shot: u32,
}

impl ShotId {
    /// Builds an identifier without range checks; callers pass numbers below 10000.
    #[must_use]
    pub const fn new(sequence: u32, shot: u32) -> Self {
        Self { sequence, shot }
    }

    /// Like [`ShotId::new`], but refuses numbers that do not fit four digits.
    pub fn checked(sequence: u32, shot: u32) -> Result<Self, NamingError> {
        if sequence > SHOT_NUMBER_MAX || shot > SHOT_NUMBER_MAX {
            return Err(NamingError::ShotId {
                value: format!("sq{sequence}_sh{shot}"),
            });
        }
        Ok(Self::new(sequence, shot))
    }
}

impl fmt::Display for ShotId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "sq{:04}_sh{:04}", self.sequence, self.shot)
    }
}

impl FromStr for ShotId {
    type Err = NamingError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let invalid = || NamingError::ShotId {
            value: value.to_string(),
        };
        let rest = value.strip_prefix("sq").ok_or_else(invalid)?;
        let (sequence, shot) = rest.split_once("_sh").ok_or_else(invalid)?;
        let digits = |part: &str| {
            if part.len() != SHOT_DIGITS || !part.bytes().all(|b| b.is_ascii_digit()) {
                return None;
            }
            part.parse::<u32>().ok()
        };
        match (digits(sequence), digits(shot)) {
            (Some(sequence), Some(shot)) => Ok(Self::new(sequence, shot)),
            _ => Err(invalid()),
        }
    }
}

/// An asset or a shot: the top-level unit that owns departments and their scenes.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum WorkUnit {
    Asset { asset_type: AssetType, name: String },
    Shot(ShotId),
}

impl WorkUnit {
    pub fn asset(asset_type: AssetType, name: impl Into<String>) -> Result<Self, NamingError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(NamingError::EmptyName { what: "asset" });
        }
        if name.contains(['/', '\\']) || name == "." || name == ".." {
            return Err(NamingError::UnitName { value: name });
        }
        Ok(WorkUnit::Asset { asset_type, name })
    }

    #[must_use]
    pub fn shot(id: ShotId) -> Self {
        WorkUnit::Shot(id)
    }

    /// Directory name of the unit: the asset name or the shot identifier.
    #[must_use]
    pub fn name(&self) -> String {
        match self {
            WorkUnit::Asset { name, .. } => name.clone(),
            WorkUnit::Shot(id) => id.to_string(),
        }
    }

    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            WorkUnit::Asset { .. } => "asset",
            WorkUnit::Shot(_) => "shot",
        }
    }

    /// Resolves a department name against the departments this kind of unit has.
    pub fn department(&self, value: &str) -> Result<Department, NamingError> {
        match self {
            WorkUnit::Asset { .. } => AssetDepartment::from_str(value)
                .map(Department::Asset)
                .map_err(|_| NamingError::Department {
                    kind: "asset",
                    value: value.to_string(),
                    expected: join_names(AssetDepartment::iter()),
                }),
            WorkUnit::Shot(_) => ShotDepartment::from_str(value)
                .map(Department::Shot)
                .map_err(|_| NamingError::Department {
                    kind: "shot",
                    value: value.to_string(),
                    expected: join_names(ShotDepartment::iter()),
                }),
        }
    }

    /// Base name of every scene in `department`, e.g. `hero_modeling`.
    #[must_use]
    pub fn scene_basename(&self, department: Department) -> String {
        format!("{}_{}", self.name().to_lowercase(), department)
    }
}

impl fmt::Display for WorkUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WorkUnit::Asset { asset_type, name } => write!(f, "{asset_type}/{name}"),
            WorkUnit::Shot(id) => write!(f, "{id}"),
        }
    }
}

fn join_names<T: fmt::Display>(items: impl Iterator<Item = T>) -> String {
    items
        .map(|item| item.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}
