use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result};

/// One entry of a directory listing. Entries whose names are not valid UTF-8
/// are never reported: no pipeline name can match them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirEntry {
    pub name: String,
    pub path: PathBuf,
    pub is_file: bool,
    pub is_dir: bool,
}

/// The filesystem surface the pipeline needs. Every listing is fresh; nothing
/// is cached between calls.
pub trait FileSystem: Send + Sync {
    fn read_to_string(&self, path: &Path) -> Result<String>;
    fn write(&self, path: &Path, contents: &[u8]) -> Result<()>;
    fn create_dir_all(&self, path: &Path) -> Result<()>;
    fn copy(&self, src: &Path, dest: &Path) -> Result<()>;
    fn copy_dir_all(&self, src: &Path, dest: &Path) -> Result<()>;
    fn rename(&self, src: &Path, dest: &Path) -> Result<()>;
    /// Lists `path`, sorted by entry name.
    fn list_dir(&self, path: &Path) -> Result<Vec<DirEntry>>;
    fn exists(&self, path: &Path) -> bool;
    fn is_dir(&self, path: &Path) -> bool;
    fn is_file(&self, path: &Path) -> bool;
}

pub type SharedFileSystem = Arc<dyn FileSystem>;

#[derive(Debug, Default, Clone, Copy)]
pub struct SystemFileSystem;

impl SystemFileSystem {
    #[must_use]
    pub fn shared() -> SharedFileSystem {
        Arc::new(SystemFileSystem)
    }
}

impl FileSystem for SystemFileSystem {
    fn read_to_string(&self, path: &Path) -> Result<String> {
        std::fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))
    }

    fn write(&self, path: &Path, contents: &[u8]) -> Result<()> {
        std::fs::write(path, contents).with_context(|| format!("writing {}", path.display()))
    }

    fn create_dir_all(&self, path: &Path) -> Result<()> {
        std::fs::create_dir_all(path).with_context(|| format!("creating {}", path.display()))
    }

    fn copy(&self, src: &Path, dest: &Path) -> Result<()> {
        std::fs::copy(src, dest)
            .map(|_| ())
            .with_context(|| format!("copying {} to {}", src.display(), dest.display()))
    }

    fn copy_dir_all(&self, src: &Path, dest: &Path) -> Result<()> {
        self.create_dir_all(dest)?;
        for entry in self.list_dir(src)? {
            let target = dest.join(&entry.name);
            if entry.is_dir {
                self.copy_dir_all(&entry.path, &target)?;
            } else {
                self.copy(&entry.path, &target)?;
            }
        }
        Ok(())
    }

    fn rename(&self, src: &Path, dest: &Path) -> Result<()> {
        std::fs::rename(src, dest)
            .with_context(|| format!("moving {} to {}", src.display(), dest.display()))
    }

    fn list_dir(&self, path: &Path) -> Result<Vec<DirEntry>> {
        let read = std::fs::read_dir(path).with_context(|| format!("reading dir {}", path.display()))?;
        let mut entries = Vec::new();
        for entry in read {
            let entry = entry.with_context(|| format!("reading dir {}", path.display()))?;
            let Ok(name) = entry.file_name().into_string() else {
                tracing::debug!(path = %entry.path().display(), "skipping non utf-8 entry");
                continue;
            };
            let file_type = entry
                .file_type()
                .with_context(|| format!("inspecting {}", entry.path().display()))?;
            // Follow symlinks so a linked scene counts as a file.
            let (is_file, is_dir) = if file_type.is_symlink() {
                let target = entry.path();
                (target.is_file(), target.is_dir())
            } else {
                (file_type.is_file(), file_type.is_dir())
            };
            entries.push(DirEntry {
                path: entry.path(),
                name,
                is_file,
                is_dir,
            });
        }
        entries.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(entries)
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn is_dir(&self, path: &Path) -> bool {
        path.is_dir()
    }

    fn is_file(&self, path: &Path) -> bool {
        path.is_file()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn list_dir_is_sorted_and_typed() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("b.ma"), "").unwrap();
        fs::write(dir.path().join("a.ma"), "").unwrap();
        fs::create_dir(dir.path().join("backup")).unwrap();

        let entries = SystemFileSystem.list_dir(dir.path()).unwrap();
        let names: Vec<_> = entries.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, ["a.ma", "b.ma", "backup"]);
        assert!(entries[0].is_file);
        assert!(entries[2].is_dir);
    }

    #[test]
    fn copy_dir_all_creates_missing_parents() {
        let dir = tempdir().unwrap();
        let template = dir.path().join("template");
        fs::create_dir_all(template.join("maya/scenes/edit/rig")).unwrap();
        fs::write(template.join("maya/workspace.mel"), "workspace").unwrap();

        let dest = dir.path().join("04_asset/prop/crate");
        SystemFileSystem.copy_dir_all(&template, &dest).unwrap();

        assert!(dest.join("maya/scenes/edit/rig").is_dir());
        assert_eq!(
            fs::read_to_string(dest.join("maya/workspace.mel")).unwrap(),
            "workspace"
        );
    }
}
