use std::collections::HashMap;
use std::env;
use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::{Deserialize, Serialize};

pub const HOME_ENV: &str = "SHOTLINE_HOME";
pub const PROJECT_ENV: &str = "SHOTLINE_PROJECT";
pub const TEMPLATE_ENV: &str = "SHOTLINE_SCENE_TEMPLATE";
pub const DEFAULT_HOME_DIR: &str = ".shotline";
pub const DEFAULT_TEMPLATE_SCENE: &str = "scene_template.ma";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GlobalOptions {
    pub quiet: bool,
    pub verbose: u8,
    pub trace: bool,
    pub json: bool,
    /// Project root for this invocation, taking precedence over the registered one.
    pub project: Option<String>,
}

#[derive(Debug, Clone)]
pub(crate) struct EnvSnapshot {
    vars: HashMap<String, String>,
}

impl EnvSnapshot {
    pub(crate) fn capture() -> Self {
        Self {
            vars: env::vars().collect(),
        }
    }

    /// Non-empty value of `key`.
    pub(crate) fn var(&self, key: &str) -> Option<&str> {
        self.vars
            .get(key)
            .map(String::as_str)
            .filter(|value| !value.trim().is_empty())
    }

    #[cfg(test)]
    pub(crate) fn testing(pairs: &[(&str, &str)]) -> Self {
        let vars = pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        Self { vars }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub(crate) home: PathBuf,
    pub(crate) project_override: Option<PathBuf>,
    pub(crate) template_scene: PathBuf,
}

impl Config {
    /// Builds a configuration snapshot from the current process environment.
    ///
    /// # Errors
    /// Returns an error if no home directory can be found and `SHOTLINE_HOME` is unset.
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_snapshot(&EnvSnapshot::capture())
    }

    pub(crate) fn from_snapshot(snapshot: &EnvSnapshot) -> anyhow::Result<Self> {
        let home = match snapshot.var(HOME_ENV) {
            Some(value) => PathBuf::from(value),
            None => dirs_next::home_dir()
                .context("unable to determine the home directory; set SHOTLINE_HOME")?
                .join(DEFAULT_HOME_DIR),
        };
        let template_scene = snapshot
            .var(TEMPLATE_ENV)
            .map_or_else(|| home.join(DEFAULT_TEMPLATE_SCENE), PathBuf::from);
        Ok(Self {
            project_override: snapshot.var(PROJECT_ENV).map(PathBuf::from),
            template_scene,
            home,
        })
    }

    /// Explicit configuration, for embedding hosts and tests.
    #[must_use]
    pub fn new(home: impl Into<PathBuf>, template_scene: impl Into<PathBuf>) -> Self {
        Self {
            home: home.into(),
            project_override: None,
            template_scene: template_scene.into(),
        }
    }

    #[must_use]
    pub fn with_project(mut self, project: impl Into<PathBuf>) -> Self {
        self.project_override = Some(project.into());
        self
    }

    /// Per-user directory holding the project registration.
    #[must_use]
    pub fn home(&self) -> &Path {
        &self.home
    }

    #[must_use]
    pub fn project_override(&self) -> Option<&Path> {
        self.project_override.as_deref()
    }

    #[must_use]
    pub fn template_scene(&self) -> &Path {
        &self.template_scene
    }
}
