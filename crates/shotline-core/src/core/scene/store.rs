//! Edit increments, publish snapshots, and publish backup rotation.
//!
//! The store keeps no state between calls: each operation lists the relevant
//! directory again, so changes made by other workstations are always seen.
//! Two users incrementing the same department can still race between the
//! listing and the write; the loser gets `AlreadyExists` and has to retry.

use std::path::{Component, Path, PathBuf};

use shotline_domain::{
    geometry_exchange_dir, is_publish_stem, normalize_lexically, publish_dir_for, split_file_name,
    BackupName, Department, EditName, GeometryDirection, NamingError, ProjectLayout, PublishName,
    Stage, WorkUnit, BACKUP_DIR,
};
use tracing::{debug, info};

use super::errors::{StoreError, StoreResult};
use crate::core::effects::FileSystem;

/// An edit version found on disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditVersion {
    pub path: PathBuf,
    pub file_name: String,
    pub name: EditName,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OpenTarget {
    pub path: PathBuf,
    /// `true` when the directory was empty and the first version was copied from the template.
    pub created: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublishPlan {
    /// Where the new snapshot goes; vacant when `publish` returns.
    pub path: PathBuf,
    /// Where the superseded publish was moved, if there was one.
    pub backup: Option<PathBuf>,
}

pub struct SceneStore<'a> {
    fs: &'a dyn FileSystem,
    template_scene: PathBuf,
}

impl<'a> SceneStore<'a> {
    pub fn new(fs: &'a dyn FileSystem, template_scene: impl Into<PathBuf>) -> Self {
        Self {
            fs,
            template_scene: template_scene.into(),
        }
    }

    #[must_use]
    pub fn template_scene(&self) -> &Path {
        &self.template_scene
    }

    /// Picks the scene to open in a department's edit directory.
    ///
    /// An empty directory gets a first version copied from the template scene.
    /// Otherwise `explicit_version` names the file to open, or the version with
    /// the highest number is chosen.
    ///
    /// # Errors
    ///
    /// `NotFound` when the edit directory or the template scene is missing, and
    /// when the explicit version is not a file directly inside the edit directory.
    pub fn resolve_open_target(
        &self,
        layout: &ProjectLayout,
        unit: &WorkUnit,
        department: Department,
        explicit_version: Option<&str>,
    ) -> StoreResult<OpenTarget> {
        let dir = layout.scene_dir(unit, department, Stage::Edit);
        if !self.fs.is_dir(&dir) {
            return Err(StoreError::NotFound {
                what: "scene directory",
                path: dir,
            });
        }

        let mut versions = self.edit_versions_in(&dir)?;
        let Some(latest) = versions.pop() else {
            return self.materialize_initial(&dir, unit, department);
        };

        if let Some(file_name) = explicit_version {
            let path = dir.join(file_name);
            if !is_bare_file_name(file_name) || !self.fs.is_file(&path) {
                return Err(StoreError::NotFound {
                    what: "version",
                    path,
                });
            }
            return Ok(OpenTarget {
                path,
                created: false,
            });
        }

        debug!(path = %latest.path.display(), "latest edit version");
        Ok(OpenTarget {
            path: latest.path,
            created: false,
        })
    }

    /// Names the edit version that follows `current_scene`. Nothing is written.
    ///
    /// # Errors
    ///
    /// `InvalidLocation` outside the project, `InvalidFormat` for a name that is
    /// not `<name>_E_<number>`, `AlreadyExists` when the next version is taken.
    pub fn create_next_edit_version(
        &self,
        project_root: &Path,
        current_scene: &Path,
    ) -> StoreResult<PathBuf> {
        let scene = ensure_within(project_root, current_scene)?;
        let (stem, extension) = scene_name_parts(&scene)?;
        let next = EditName::parse(stem)?.next()?;
        let path = parent_dir(&scene).join(next.file_name(extension));
        if self.fs.exists(&path) {
            return Err(StoreError::AlreadyExists {
                what: "edit version",
                path,
            });
        }
        debug!(path = %path.display(), "next edit version");
        Ok(path)
    }

    /// Frees the publish slot for `current_scene`, moving any live publish into
    /// `backup/` under the next unused number. Nothing is ever deleted.
    ///
    /// # Errors
    ///
    /// `InvalidLocation`, `InvalidPipelineLayout` when the scene is not under an
    /// `edit` directory, `InvalidFormat`, or `NotFound` for a missing publish
    /// directory.
    pub fn publish(&self, project_root: &Path, current_scene: &Path) -> StoreResult<PublishPlan> {
        let scene = ensure_within(project_root, current_scene)?;
        let publish_dir = publish_dir_for(parent_dir(&scene)).ok_or_else(|| {
            StoreError::InvalidPipelineLayout {
                path: scene.clone(),
            }
        })?;
        let (stem, extension) = scene_name_parts(&scene)?;
        let publish = EditName::parse(stem)?.publish();
        let path = publish_dir.join(publish.file_name(extension)?);

        if !self.fs.is_dir(&publish_dir) {
            return Err(StoreError::NotFound {
                what: "publish directory",
                path: publish_dir,
            });
        }

        let backup = if self.fs.exists(&path) {
            Some(self.retire_publish(&publish_dir, &publish, extension, &path)?)
        } else {
            None
        };
        Ok(PublishPlan { path, backup })
    }

    /// Finds the single live publish of a department.
    ///
    /// # Errors
    ///
    /// `NotFound` when the directory or any `_P` file is missing,
    /// `AmbiguousPublish` when more than one `_P` file is present.
    pub fn resolve_publish_reference(
        &self,
        layout: &ProjectLayout,
        unit: &WorkUnit,
        department: Department,
    ) -> StoreResult<PathBuf> {
        let dir = layout.scene_dir(unit, department, Stage::Publish);
        if !self.fs.is_dir(&dir) {
            return Err(StoreError::NotFound {
                what: "publish directory",
                path: dir,
            });
        }

        let mut publishes: Vec<_> = self
            .fs
            .list_dir(&dir)?
            .into_iter()
            .filter(|entry| entry.is_file && is_publish_stem(split_file_name(&entry.name).0))
            .collect();
        match publishes.len() {
            0 => Err(StoreError::NotFound {
                what: "publish file in",
                path: dir,
            }),
            1 => Ok(publishes.remove(0).path),
            _ => Err(StoreError::AmbiguousPublish {
                dir,
                candidates: publishes.into_iter().map(|entry| entry.name).collect(),
            }),
        }
    }

    /// Directory an asset scene swaps geometry through with the sculpting tool.
    /// Only the path is resolved; the directory may not exist yet.
    ///
    /// # Errors
    ///
    /// `InvalidLocation` outside the project or outside the asset tree,
    /// `InvalidPipelineLayout` when no asset directory precedes a `maya` segment.
    pub fn geometry_exchange_dir(
        &self,
        project_root: &Path,
        scene: &Path,
        direction: GeometryDirection,
    ) -> StoreResult<PathBuf> {
        let scene = ensure_within(project_root, scene)?;
        let layout = ProjectLayout::new(normalize_lexically(project_root));
        if !scene.starts_with(layout.asset_root()) {
            return Err(StoreError::InvalidLocation {
                path: scene,
                root: layout.asset_root(),
                within: "asset directory",
            });
        }
        let asset_dir = layout
            .asset_dir_of(&scene)
            .ok_or(StoreError::InvalidPipelineLayout { path: scene })?;
        let dir = geometry_exchange_dir(&asset_dir, direction);
        debug!(direction = direction.as_str(), dir = %dir.display(), "geometry exchange dir");
        Ok(dir)
    }

    /// Edit versions of a department in ascending version order.
    ///
    /// # Errors
    ///
    /// `NotFound` when the edit directory is missing.
    pub fn list_edit_versions(
        &self,
        layout: &ProjectLayout,
        unit: &WorkUnit,
        department: Department,
    ) -> StoreResult<Vec<EditVersion>> {
        let dir = layout.scene_dir(unit, department, Stage::Edit);
        if !self.fs.is_dir(&dir) {
            return Err(StoreError::NotFound {
                what: "scene directory",
                path: dir,
            });
        }
        self.edit_versions_in(&dir)
    }

    fn edit_versions_in(&self, dir: &Path) -> StoreResult<Vec<EditVersion>> {
        let mut versions: Vec<EditVersion> = self
            .fs
            .list_dir(dir)?
            .into_iter()
            .filter(|entry| entry.is_file)
            .filter_map(|entry| {
                let name = EditName::parse(split_file_name(&entry.name).0).ok()?;
                Some(EditVersion {
                    path: entry.path,
                    file_name: entry.name,
                    name,
                })
            })
            .collect();
        // Numeric order: `_010` sorts after `_009` whatever the padding.
        versions.sort_by(|a, b| {
            a.name
                .number
                .cmp(&b.name.number)
                .then_with(|| a.file_name.cmp(&b.file_name))
        });
        debug!(dir = %dir.display(), count = versions.len(), "listed edit versions");
        Ok(versions)
    }

    fn materialize_initial(
        &self,
        dir: &Path,
        unit: &WorkUnit,
        department: Department,
    ) -> StoreResult<OpenTarget> {
        if !self.fs.is_file(&self.template_scene) {
            return Err(StoreError::NotFound {
                what: "template scene",
                path: self.template_scene.clone(),
            });
        }
        let extension = self
            .template_scene
            .file_name()
            .and_then(|name| name.to_str())
            .map_or("", |name| split_file_name(name).1);
        let name = EditName::initial(unit.scene_basename(department));
        let path = dir.join(name.file_name(extension));
        self.fs.copy(&self.template_scene, &path)?;
        info!(path = %path.display(), "directory empty, created first edit version");
        Ok(OpenTarget {
            path,
            created: true,
        })
    }

    fn retire_publish(
        &self,
        publish_dir: &Path,
        publish: &PublishName,
        extension: &str,
        live: &Path,
    ) -> StoreResult<PathBuf> {
        let backup_dir = publish_dir.join(BACKUP_DIR);
        let has_backups = self.fs.is_dir(&backup_dir);
        let number = if has_backups {
            self.next_backup_number(&backup_dir, publish, extension)?
        } else {
            1
        };
        let dest = backup_dir.join(publish.backup(number).file_name(extension));
        if self.fs.exists(&dest) {
            return Err(StoreError::AlreadyExists {
                what: "publish backup",
                path: dest,
            });
        }
        if !has_backups {
            self.fs.create_dir_all(&backup_dir)?;
        }
        self.fs.rename(live, &dest)?;
        info!(
            from = %live.display(),
            to = %dest.display(),
            number,
            "moved superseded publish to backup"
        );
        Ok(dest)
    }

    /// `max + 1` over the backups of this publish, or 1 when there are none.
    fn next_backup_number(
        &self,
        backup_dir: &Path,
        publish: &PublishName,
        extension: &str,
    ) -> StoreResult<u32> {
        let highest = self
            .fs
            .list_dir(backup_dir)?
            .into_iter()
            .filter(|entry| entry.is_file)
            .filter_map(|entry| {
                let (stem, ext) = split_file_name(&entry.name);
                if ext != extension {
                    return None;
                }
                BackupName::parse(stem)
                    .filter(|backup| backup.base == publish.base)
                    .map(|backup| backup.number)
            })
            .max();
        match highest {
            None => Ok(1),
            Some(number) => number.checked_add(1).ok_or_else(|| {
                StoreError::InvalidFormat(NamingError::VersionOverflow {
                    stem: publish.backup(number).stem(),
                })
            }),
        }
    }
}

/// Returns `scene` with `.` and `..` resolved, provided it stays under the project root.
fn ensure_within(project_root: &Path, scene: &Path) -> StoreResult<PathBuf> {
    let root = normalize_lexically(project_root);
    let scene = normalize_lexically(scene);
    if scene.starts_with(&root) {
        Ok(scene)
    } else {
        Err(StoreError::InvalidLocation {
            path: scene,
            root,
            within: "project",
        })
    }
}

fn is_bare_file_name(value: &str) -> bool {
    let mut components = Path::new(value).components();
    matches!(
        (components.next(), components.next()),
        (Some(Component::Normal(_)), None)
    )
}

fn parent_dir(path: &Path) -> &Path {
    path.parent().unwrap_or_else(|| Path::new(""))
}

fn scene_name_parts(scene: &Path) -> StoreResult<(&str, &str)> {
    let file_name = scene
        .file_name()
        .and_then(|name| name.to_str())
        .ok_or_else(|| NamingError::EditName {
            stem: scene.display().to_string(),
        })?;
    Ok(split_file_name(file_name))
}
