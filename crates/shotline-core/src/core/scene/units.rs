use std::path::{Path, PathBuf};

use shotline_domain::{AssetType, ProjectLayout, ShotId, WorkUnit};
use tracing::info;

use super::errors::{StoreError, StoreResult};
use crate::core::effects::FileSystem;

/// Creates and lists the assets and shots of a project.
///
/// New units are copies of the project's template workspace, so every unit
/// starts with the full department tree.
pub struct UnitCatalog<'a> {
    fs: &'a dyn FileSystem,
}

impl<'a> UnitCatalog<'a> {
    pub fn new(fs: &'a dyn FileSystem) -> Self {
        Self { fs }
    }

    /// # Errors
    ///
    /// `InvalidFormat` for an empty or multi-segment name, `NotFound` when the
    /// asset directory or its template is missing, `AlreadyExists` when the
    /// asset is already there.
    pub fn create_asset(
        &self,
        layout: &ProjectLayout,
        asset_type: AssetType,
        name: &str,
    ) -> StoreResult<(WorkUnit, PathBuf)> {
        let unit = WorkUnit::asset(asset_type, name)?;
        self.require_dir("asset directory", &layout.asset_root())?;
        let path = self.scaffold(&unit, layout, &layout.asset_template())?;
        Ok((unit, path))
    }

    /// # Errors
    ///
    /// `InvalidFormat` for a number wider than four digits, `NotFound` when
    /// the shot directory or its template is missing, `AlreadyExists` when the
    /// shot is already there.
    pub fn create_shot(
        &self,
        layout: &ProjectLayout,
        sequence: u32,
        shot: u32,
    ) -> StoreResult<(WorkUnit, PathBuf)> {
        let unit = WorkUnit::shot(ShotId::checked(sequence, shot)?);
        self.require_dir("shot directory", &layout.shot_root())?;
        let path = self.scaffold(&unit, layout, &layout.shot_template())?;
        Ok((unit, path))
    }

    /// Asset names of one type, sorted.
    ///
    /// # Errors
    ///
    /// `NotFound` when the asset type directory is missing.
    pub fn list_assets(&self, layout: &ProjectLayout, asset_type: AssetType) -> StoreResult<Vec<String>> {
        let dir = layout.asset_type_dir(asset_type);
        self.require_dir("asset type directory", &dir)?;
        Ok(self
            .fs
            .list_dir(&dir)?
            .into_iter()
            .filter(|entry| entry.is_dir)
            .map(|entry| entry.name)
            .collect())
    }

    /// Shot directories, sorted; the template and stray folders are skipped.
    ///
    /// # Errors
    ///
    /// `NotFound` when the shot directory is missing.
    pub fn list_shots(&self, layout: &ProjectLayout) -> StoreResult<Vec<ShotId>> {
        let dir = layout.shot_root();
        self.require_dir("shot directory", &dir)?;
        let mut shots: Vec<ShotId> = self
            .fs
            .list_dir(&dir)?
            .into_iter()
            .filter(|entry| entry.is_dir)
            .filter_map(|entry| entry.name.parse().ok())
            .collect();
        shots.sort();
        Ok(shots)
    }

    fn scaffold(&self, unit: &WorkUnit, layout: &ProjectLayout, template: &Path) -> StoreResult<PathBuf> {
        let path = layout.work_unit_dir(unit);
        if self.fs.exists(&path) {
            return Err(StoreError::AlreadyExists {
                what: unit.kind(),
                path,
            });
        }
        self.require_dir("template workspace", template)?;
        self.fs.copy_dir_all(template, &path)?;
        info!(unit = %unit, path = %path.display(), "created {}", unit.kind());
        Ok(path)
    }

    fn require_dir(&self, what: &'static str, path: &Path) -> StoreResult<()> {
        if self.fs.is_dir(path) {
            Ok(())
        } else {
            Err(StoreError::NotFound {
                what,
                path: path.to_path_buf(),
            })
        }
    }
}
