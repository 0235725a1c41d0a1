//! Directory layout of a pipeline project.
//!
//! ```text
//! <root>/04_asset/<type>/<name>/maya/scenes/{edit,publish}/<department>/
//! <root>/05_shot/<sqNNNN_shNNNN>/maya/scenes/<department>/{edit,publish}/
//! <root>/04_asset/<type>/<name>/sculpt/zbrush/{input,output}/
//! ```

use std::ffi::OsStr;
use std::path::{Component, Path, PathBuf};

use crate::work_unit::{AssetType, Department, WorkUnit};

pub const ASSET_ROOT: &str = "04_asset";
pub const SHOT_ROOT: &str = "05_shot";
pub const ASSET_TEMPLATE: &str = "_template_workspace_asset";
pub const SHOT_TEMPLATE: &str = "_template_workspace_shot";
pub const BACKUP_DIR: &str = "backup";
pub const DCC_DIR: &str = "maya";
/// Where geometry is swapped with the sculpting tool, relative to the asset directory.
pub const SCULPT_EXCHANGE_DIR: &str = "sculpt/zbrush";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Edit,
    Publish,
}

impl Stage {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Stage::Edit => "edit",
            Stage::Publish => "publish",
        }
    }
}

/// Which way geometry travels between a scene and the sculpting tool.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GeometryDirection {
    Export,
    Import,
}

impl GeometryDirection {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            GeometryDirection::Export => "export",
            GeometryDirection::Import => "import",
        }
    }

    /// Exports feed the sculptor's `input`; imports read back its `output`.
    #[must_use]
    pub const fn exchange_leaf(self) -> &'static str {
        match self {
            GeometryDirection::Export => "input",
            GeometryDirection::Import => "output",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectLayout {
    root: PathBuf,
}

impl ProjectLayout {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    #[must_use]
    pub fn asset_root(&self) -> PathBuf {
        self.root.join(ASSET_ROOT)
    }

    #[must_use]
    pub fn asset_type_dir(&self, asset_type: AssetType) -> PathBuf {
        self.asset_root().join(asset_type.as_str())
    }

    #[must_use]
    pub fn asset_template(&self) -> PathBuf {
        self.asset_root().join(ASSET_TEMPLATE)
    }

    #[must_use]
    pub fn shot_root(&self) -> PathBuf {
        self.root.join(SHOT_ROOT)
    }

    #[must_use]
    pub fn shot_template(&self) -> PathBuf {
        self.shot_root().join(SHOT_TEMPLATE)
    }

    #[must_use]
    pub fn work_unit_dir(&self, unit: &WorkUnit) -> PathBuf {
        match unit {
            WorkUnit::Asset { asset_type, name } => self.asset_type_dir(*asset_type).join(name),
            WorkUnit::Shot(id) => self.shot_root().join(id.to_string()),
        }
    }

    /// Directory holding the scenes of one department at one stage.
    ///
    /// Assets nest the department under the stage; shots nest the stage under
    /// the department.
    #[must_use]
    pub fn scene_dir(&self, unit: &WorkUnit, department: Department, stage: Stage) -> PathBuf {
        let scenes = self.work_unit_dir(unit).join("maya").join("scenes");
        match unit {
            WorkUnit::Asset { .. } => scenes.join(stage.as_str()).join(department.as_str()),
            WorkUnit::Shot(_) => scenes.join(department.as_str()).join(stage.as_str()),
        }
    }

    /// The asset directory owning `scene`: the part of the path below the
    /// asset root and above the first `maya` segment.
    ///
    /// Returns `None` when the scene is not under the asset root or has no
    /// `maya` segment beneath an asset directory.
    #[must_use]
    pub fn asset_dir_of(&self, scene: &Path) -> Option<PathBuf> {
        let relative = scene.strip_prefix(self.asset_root()).ok()?;
        let dcc = OsStr::new(DCC_DIR);
        let mut dir = self.asset_root();
        let mut depth = 0;
        for component in relative.components() {
            let Component::Normal(segment) = component else {
                return None;
            };
            if segment == dcc {
                return (depth > 0).then_some(dir);
            }
            dir.push(segment);
            depth += 1;
        }
        None
    }
}

/// Directory geometry is exported to or imported from for an asset.
#[must_use]
pub fn geometry_exchange_dir(asset_dir: &Path, direction: GeometryDirection) -> PathBuf {
    asset_dir
        .join(SCULPT_EXCHANGE_DIR)
        .join(direction.exchange_leaf())
}

/// Resolves `.` and `..` segments without touching the filesystem, so
/// symlinked roots keep their spelling. `..` never climbs above the root.
#[must_use]
pub fn normalize_lexically(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match out.components().next_back() {
                Some(Component::Normal(_)) => {
                    out.pop();
                }
                Some(Component::RootDir | Component::Prefix(_)) => {}
                _ => out.push(component.as_os_str()),
            },
            other => out.push(other.as_os_str()),
        }
    }
    out
}

/// Rewrites an edit directory into its publish counterpart by replacing the
/// first `edit` segment. Returns `None` when the path has no such segment.
#[must_use]
pub fn publish_dir_for(edit_dir: &Path) -> Option<PathBuf> {
    let edit = OsStr::new(Stage::Edit.as_str());
    let mut replaced = false;
    let mut out = PathBuf::new();
    for component in edit_dir.components() {
        match component {
            Component::Normal(segment) if !replaced && segment == edit => {
                out.push(Stage::Publish.as_str());
                replaced = true;
            }
            other => out.push(other.as_os_str()),
        }
    }
    replaced.then_some(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::work_unit::ShotId;

    #[test]
    fn asset_and_shot_scene_dirs_nest_differently() {
        let layout = ProjectLayout::new("/proj");
        let asset = WorkUnit::asset(AssetType::Character, "Hero").unwrap();
        let dept = asset.department("rig").unwrap();
        assert_eq!(
            layout.scene_dir(&asset, dept, Stage::Edit),
            PathBuf::from("/proj/04_asset/character/Hero/maya/scenes/edit/rig")
        );

        let shot = WorkUnit::shot(ShotId::new(10, 20));
        let dept = shot.department("anim").unwrap();
        assert_eq!(
            layout.scene_dir(&shot, dept, Stage::Publish),
            PathBuf::from("/proj/05_shot/sq0010_sh0020/maya/scenes/anim/publish")
        );
    }

    #[test]
    fn publish_dir_replaces_only_first_edit_segment() {
        assert_eq!(
            publish_dir_for(Path::new("/proj/04_asset/prop/edit/maya/scenes/edit/modeling")),
            Some(PathBuf::from(
                "/proj/04_asset/prop/publish/maya/scenes/edit/modeling"
            ))
        );
        assert_eq!(
            publish_dir_for(Path::new("/proj/05_shot/sq0001_sh0001/maya/scenes/anim/edit")),
            Some(PathBuf::from(
                "/proj/05_shot/sq0001_sh0001/maya/scenes/anim/publish"
            ))
        );
    }

    #[test]
    fn asset_dir_stops_at_first_maya_segment() {
        let layout = ProjectLayout::new("/proj");
        let scene = Path::new("/proj/04_asset/prop/Crate/maya/scenes/edit/rig/crate_rig_E_001.ma");
        let asset_dir = layout.asset_dir_of(scene).unwrap();
        assert_eq!(asset_dir, PathBuf::from("/proj/04_asset/prop/Crate"));
        assert_eq!(
            geometry_exchange_dir(&asset_dir, GeometryDirection::Export),
            PathBuf::from("/proj/04_asset/prop/Crate/sculpt/zbrush/input")
        );
        assert_eq!(
            geometry_exchange_dir(&asset_dir, GeometryDirection::Import),
            PathBuf::from("/proj/04_asset/prop/Crate/sculpt/zbrush/output")
        );
    }

    #[test]
    fn asset_dir_needs_asset_root_and_maya_segment() {
        let layout = ProjectLayout::new("/proj");
        for scene in [
            "/proj/05_shot/sq0010_sh0010/maya/scenes/anim/edit/a_E_001.ma",
            "/proj/04_asset/prop/Crate/scenes/a_E_001.ma",
            "/proj/04_asset/maya/a_E_001.ma",
            "/elsewhere/04_asset/prop/Crate/maya/a_E_001.ma",
        ] {
            assert_eq!(layout.asset_dir_of(Path::new(scene)), None, "{scene}");
        }
    }

    #[test]
    fn lexical_normalization_drops_dot_segments() {
        assert_eq!(
            normalize_lexically(Path::new("/proj/./04_asset/../elsewhere/a.ma")),
            PathBuf::from("/proj/elsewhere/a.ma")
        );
        assert_eq!(normalize_lexically(Path::new("/../a")), PathBuf::from("/a"));
        assert_eq!(normalize_lexically(Path::new("../a/../b")), PathBuf::from("../b"));
    }

    #[test]
    fn publish_dir_requires_exact_edit_segment() {
        assert_eq!(publish_dir_for(Path::new("/proj/edits/modeling")), None);
        assert_eq!(publish_dir_for(Path::new("/proj/scenes")), None);
    }
}
