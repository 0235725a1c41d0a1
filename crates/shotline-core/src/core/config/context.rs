use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use anyhow::{Context, Result};
use shotline_domain::ProjectLayout;

use super::registry::{ProjectRegistry, RegistryError};
use super::settings::{Config, GlobalOptions};
use crate::core::effects::{FileSystem, SharedFileSystem};
use crate::core::scene::{SceneStore, UnitCatalog};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CommandGroup {
    Project,
    Asset,
    Shot,
    Open,
    Versions,
    Save,
    Publish,
    Reference,
    Geometry,
}

impl fmt::Display for CommandGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            CommandGroup::Project => "project",
            CommandGroup::Asset => "asset",
            CommandGroup::Shot => "shot",
            CommandGroup::Open => "open",
            CommandGroup::Versions => "versions",
            CommandGroup::Save => "save",
            CommandGroup::Publish => "publish",
            CommandGroup::Reference => "reference",
            CommandGroup::Geometry => "geometry",
        };
        f.write_str(name)
    }
}

#[derive(Clone, Copy, Debug)]
pub struct CommandInfo {
    pub group: CommandGroup,
    pub name: &'static str,
}

impl CommandInfo {
    #[must_use]
    pub const fn new(group: CommandGroup, name: &'static str) -> Self {
        Self { group, name }
    }
}

/// Where the project root of an invocation came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ProjectSource {
    Flag,
    Env,
    Registry,
}

impl ProjectSource {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            ProjectSource::Flag => "flag",
            ProjectSource::Env => "env",
            ProjectSource::Registry => "registry",
        }
    }
}

pub struct CommandContext<'a> {
    pub global: &'a GlobalOptions,
    config: Config,
    fs: SharedFileSystem,
    project_root: OnceLock<(PathBuf, ProjectSource)>,
}

impl<'a> CommandContext<'a> {
    /// Creates a context configured from the process environment.
    ///
    /// # Errors
    /// Returns an error if the configuration cannot be prepared.
    pub fn new(global: &'a GlobalOptions, fs: SharedFileSystem) -> Result<Self> {
        let config = Config::from_env()?;
        Ok(Self::with_config(global, config, fs))
    }

    #[must_use]
    pub fn with_config(global: &'a GlobalOptions, config: Config, fs: SharedFileSystem) -> Self {
        Self {
            global,
            config,
            fs,
            project_root: OnceLock::new(),
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn fs(&self) -> &dyn FileSystem {
        self.fs.as_ref()
    }

    pub fn store(&self) -> SceneStore<'_> {
        SceneStore::new(self.fs(), self.config.template_scene())
    }

    pub fn catalog(&self) -> UnitCatalog<'_> {
        UnitCatalog::new(self.fs())
    }

    pub fn registry(&self) -> ProjectRegistry<'_> {
        ProjectRegistry::new(self.fs(), self.config.home())
    }

    /// Resolves the project root: `--project`, then `SHOTLINE_PROJECT`, then
    /// the registered current project.
    ///
    /// # Errors
    /// Returns the registry error when no project is configured anywhere.
    pub fn project_root(&self) -> Result<(PathBuf, ProjectSource), RegistryError> {
        if let Some(resolved) = self.project_root.get() {
            return Ok(resolved.clone());
        }
        let (path, source) = if let Some(flag) = self.global.project.as_deref() {
            (PathBuf::from(flag), ProjectSource::Flag)
        } else if let Some(env) = self.config.project_override() {
            (env.to_path_buf(), ProjectSource::Env)
        } else {
            (self.registry().get()?, ProjectSource::Registry)
        };
        let resolved = (absolute(&path)?, source);
        let _ = self.project_root.set(resolved.clone());
        Ok(resolved)
    }

    /// # Errors
    /// Same as [`CommandContext::project_root`].
    pub fn layout(&self) -> Result<ProjectLayout, RegistryError> {
        let (root, _) = self.project_root()?;
        Ok(ProjectLayout::new(root))
    }
}

/// Anchors a user-supplied path at the working directory without touching
/// symlinks.
pub(crate) fn absolute(path: &Path) -> Result<PathBuf> {
    std::path::absolute(path).with_context(|| format!("unable to resolve {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::effects::SystemFileSystem;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn flag_beats_env_and_registry() {
        let temp = tempdir().unwrap();
        let home = temp.path().join("cfg");
        let registered = temp.path().join("registered");
        fs::create_dir_all(&registered).unwrap();
        let config = Config::new(&home, home.join("scene_template.ma"))
            .with_project(temp.path().join("from-env"));

        let global = GlobalOptions {
            project: Some(temp.path().join("from-flag").display().to_string()),
            ..GlobalOptions::default()
        };
        let ctx = CommandContext::with_config(&global, config.clone(), SystemFileSystem::shared());
        let (root, source) = ctx.project_root().unwrap();
        assert_eq!(root, temp.path().join("from-flag"));
        assert_eq!(source, ProjectSource::Flag);

        let global = GlobalOptions::default();
        let ctx = CommandContext::with_config(&global, config, SystemFileSystem::shared());
        assert_eq!(ctx.project_root().unwrap().1, ProjectSource::Env);

        let ctx = CommandContext::with_config(
            &global,
            Config::new(&home, home.join("scene_template.ma")),
            SystemFileSystem::shared(),
        );
        assert!(matches!(ctx.project_root(), Err(RegistryError::Unset { .. })));
        ctx.registry().set(&registered).unwrap();
        let (root, source) = ctx.project_root().unwrap();
        assert_eq!(root, registered);
        assert_eq!(source, ProjectSource::Registry);
    }

    #[test]
    fn group_names_render_as_subcommands() {
        assert_eq!(CommandGroup::Versions.to_string(), "versions");
        assert_eq!(CommandGroup::Reference.to_string(), "reference");
    }
}
