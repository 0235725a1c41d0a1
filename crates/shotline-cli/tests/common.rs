#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use assert_cmd::assert::Assert;
use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use serde_json::Value;
use tempfile::TempDir;

pub const ASSET_DEPARTMENTS: [&str; 2] = ["modeling", "rig"];

/// A throwaway studio: a config home with a template scene and a project
/// carrying asset and shot template workspaces.
pub struct Studio {
    pub temp: TempDir,
    pub home: PathBuf,
    pub project: PathBuf,
}

impl Studio {
    pub fn new() -> Self {
        let temp = tempfile::Builder::new()
            .prefix("shotline-cli")
            .tempdir()
            .expect("tempdir");
        let home = temp.path().join("home");
        let project = temp.path().join("forest");

        let asset_scenes = project.join("04_asset/_template_workspace_asset/maya/scenes");
        for dept in ASSET_DEPARTMENTS {
            fs::create_dir_all(asset_scenes.join("edit").join(dept)).expect("asset edit dir");
            fs::create_dir_all(asset_scenes.join("publish").join(dept)).expect("asset publish dir");
        }
        let shot_scenes = project.join("05_shot/_template_workspace_shot/maya/scenes");
        fs::create_dir_all(shot_scenes.join("anim/edit")).expect("shot edit dir");
        fs::create_dir_all(shot_scenes.join("anim/publish")).expect("shot publish dir");

        fs::create_dir_all(&home).expect("home dir");
        fs::write(home.join("scene_template.ma"), "//Maya ASCII 2024 scene\n").expect("template");

        Self {
            temp,
            home,
            project,
        }
    }

    /// The binary, isolated from the caller's environment.
    pub fn cmd(&self) -> Command {
        let mut cmd = cargo_bin_cmd!("shotline");
        cmd.env("SHOTLINE_HOME", &self.home)
            .env_remove("SHOTLINE_PROJECT")
            .env_remove("SHOTLINE_SCENE_TEMPLATE")
            .env_remove("SHOTLINE_LOG")
            .env("NO_COLOR", "1");
        cmd
    }

    pub fn json(&self, args: &[&str]) -> (Assert, Value) {
        let assert = self.cmd().arg("--json").args(args).assert();
        let payload = parse_json(&assert);
        (assert, payload)
    }

    pub fn register(&self) {
        self.cmd()
            .args(["project", "set"])
            .arg(&self.project)
            .assert()
            .success();
    }

    pub fn asset_dir(&self, asset_type: &str, name: &str) -> PathBuf {
        self.project.join("04_asset").join(asset_type).join(name)
    }
}

pub fn parse_json(assert: &Assert) -> Value {
    serde_json::from_slice(&assert.get_output().stdout).expect("valid json")
}

pub fn path_detail(payload: &Value) -> PathBuf {
    PathBuf::from(payload["details"]["path"].as_str().expect("path detail"))
}

pub fn file_names(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = fs::read_dir(dir)
        .expect("read dir")
        .map(|entry| {
            entry
                .expect("dir entry")
                .file_name()
                .to_string_lossy()
                .into_owned()
        })
        .collect();
    names.sort();
    names
}
