use std::path::{Path, PathBuf};

use tracing::info;

use crate::core::effects::FileSystem;

pub const PROJECT_FILE: &str = "current_project.txt";

#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    #[error(
        "no project has been set ('{}' does not exist); run `shotline project set <PATH>` first",
        .path.display()
    )]
    Unset { path: PathBuf },
    #[error(
        "'{}' does not contain a project path; run `shotline project set <PATH>` first",
        .path.display()
    )]
    Empty { path: PathBuf },
    #[error("the project path '{}' is not a directory", .path.display())]
    NotADirectory { path: PathBuf },
    #[error(transparent)]
    Io(#[from] anyhow::Error),
}

impl RegistryError {
    #[must_use]
    pub fn reason(&self) -> &'static str {
        match self {
            RegistryError::Unset { .. } => "missing_project",
            RegistryError::Empty { .. } => "empty_project",
            RegistryError::NotADirectory { .. } => "not_a_directory",
            RegistryError::Io(_) => "io",
        }
    }
}

/// The per-user "current project": one path string in `<home>/current_project.txt`.
pub struct ProjectRegistry<'a> {
    fs: &'a dyn FileSystem,
    home: &'a Path,
}

impl<'a> ProjectRegistry<'a> {
    pub fn new(fs: &'a dyn FileSystem, home: &'a Path) -> Self {
        Self { fs, home }
    }

    #[must_use]
    pub fn file(&self) -> PathBuf {
        self.home.join(PROJECT_FILE)
    }

    /// Records `project` as the current project.
    ///
    /// # Errors
    /// `NotADirectory` when `project` is not an existing directory, `Io` when
    /// the registration file cannot be written.
    pub fn set(&self, project: &Path) -> Result<PathBuf, RegistryError> {
        if !self.fs.is_dir(project) {
            return Err(RegistryError::NotADirectory {
                path: project.to_path_buf(),
            });
        }
        self.fs.create_dir_all(self.home)?;
        let file = self.file();
        let text = project.to_string_lossy();
        self.fs.write(&file, text.as_bytes())?;
        info!(project = %text, file = %file.display(), "registered project");
        Ok(project.to_path_buf())
    }

    /// # Errors
    /// `Unset` when nothing was registered, `Empty` for a blank registration.
    pub fn get(&self) -> Result<PathBuf, RegistryError> {
        let file = self.file();
        if !self.fs.is_file(&file) {
            return Err(RegistryError::Unset { path: file });
        }
        let contents = self.fs.read_to_string(&file)?;
        let trimmed = contents.trim();
        if trimmed.is_empty() {
            return Err(RegistryError::Empty { path: file });
        }
        Ok(PathBuf::from(trimmed))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::effects::SystemFileSystem;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn set_then_get_round_trips() {
        let temp = tempdir().unwrap();
        let home = temp.path().join("cfg");
        let show = temp.path().join("show");
        fs::create_dir(&show).unwrap();

        let registry = ProjectRegistry::new(&SystemFileSystem, &home);
        assert!(matches!(registry.get(), Err(RegistryError::Unset { .. })));

        registry.set(&show).unwrap();
        assert_eq!(registry.get().unwrap(), show);
        assert!(home.join(PROJECT_FILE).is_file());
    }

    #[test]
    fn blank_registration_is_rejected() {
        let temp = tempdir().unwrap();
        fs::write(temp.path().join(PROJECT_FILE), "\n").unwrap();
        let registry = ProjectRegistry::new(&SystemFileSystem, temp.path());
        let err = registry.get().unwrap_err();
        assert_eq!(err.reason(), "empty_project");
    }

    #[test]
    fn set_requires_a_directory() {
        let temp = tempdir().unwrap();
        let registry = ProjectRegistry::new(&SystemFileSystem, temp.path());
        let err = registry.set(&temp.path().join("nowhere")).unwrap_err();
        assert!(matches!(err, RegistryError::NotADirectory { .. }));
        assert!(!temp.path().join(PROJECT_FILE).exists());
    }
}
