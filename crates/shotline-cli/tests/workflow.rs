use std::fs;

mod common;

use common::{file_names, parse_json, path_detail, Studio};

#[test]
fn project_show_requires_registration() {
    let studio = Studio::new();
    let (assert, payload) = studio.json(&["project", "show"]);
    assert.code(1);
    assert_eq!(payload["status"], "user-error");
    assert_eq!(payload["details"]["reason"], "missing_project");

    studio.register();
    let assert = studio.cmd().args(["project", "show"]).assert().success();
    let stdout = String::from_utf8(assert.get_output().stdout.clone()).expect("utf8");
    assert_eq!(stdout.trim(), studio.project.display().to_string());
    assert!(studio.home.join("current_project.txt").is_file());
}

#[test]
fn asset_edit_and_publish_lineage() {
    let studio = Studio::new();
    studio.register();

    studio
        .cmd()
        .args(["asset", "create", "character", "Hero"])
        .assert()
        .success();
    let (_, listed) = studio.json(&["asset", "list", "character"]);
    assert_eq!(listed["details"]["items"], serde_json::json!(["Hero"]));

    let (assert, opened) = studio.json(&["open", "asset", "character", "Hero", "modeling"]);
    assert.success();
    assert_eq!(opened["details"]["created"], true);
    let first = path_detail(&opened);
    assert_eq!(
        first,
        studio
            .asset_dir("character", "Hero")
            .join("maya/scenes/edit/modeling/hero_modeling_E_001.ma")
    );
    assert_eq!(
        fs::read_to_string(&first).expect("first version"),
        "//Maya ASCII 2024 scene\n"
    );

    let (assert, saved) = studio.json(&["save", first.to_str().expect("utf8 path")]);
    assert.success();
    let second = path_detail(&saved);
    assert!(second.ends_with("hero_modeling_E_002.ma"));

    let (assert, stale) = studio.json(&["save", first.to_str().expect("utf8 path")]);
    assert.code(1);
    assert_eq!(stale["details"]["reason"], "already_exists");
    assert!(stale["details"]["hint"].is_string());

    let (_, reopened) = studio.json(&["open", "asset", "character", "Hero", "modeling"]);
    assert_eq!(path_detail(&reopened), second);
    assert_eq!(reopened["details"]["created"], false);

    let (assert, published) = studio.json(&["publish", second.to_str().expect("utf8 path")]);
    assert.success();
    assert!(published["details"]["backup"].is_null());
    let (_, republished) = studio.json(&["publish", second.to_str().expect("utf8 path")]);
    let backup = republished["details"]["backup"].as_str().expect("backup path");
    assert!(backup.ends_with("backup/hero_modeling_P_001.ma"), "{backup}");

    let publish_dir = studio
        .asset_dir("character", "Hero")
        .join("maya/scenes/publish/modeling");
    assert_eq!(file_names(&publish_dir), ["backup", "hero_modeling_P.ma"]);
    assert_eq!(
        file_names(&publish_dir.join("backup")),
        ["hero_modeling_P_001.ma"]
    );

    let (assert, reference) = studio.json(&["reference", "character", "Hero", "modeling"]);
    assert.success();
    assert_eq!(reference["details"]["namespace"], "hero_modeling_P");
    assert_eq!(
        path_detail(&reference),
        publish_dir.join("hero_modeling_P.ma")
    );

    let (_, versions) = studio.json(&["versions", "asset", "character", "Hero", "modeling"]);
    assert_eq!(
        versions["details"]["items"],
        serde_json::json!(["hero_modeling_E_001.ma", "hero_modeling_E_002.ma"])
    );
}

#[test]
fn shots_use_department_before_stage() {
    let studio = Studio::new();
    let project = studio.project.display().to_string();

    studio
        .cmd()
        .args(["--project", project.as_str(), "shot", "create", "10", "30"])
        .assert()
        .success();
    let (_, shots) = studio.json(&["--project", project.as_str(), "shot", "list"]);
    assert_eq!(shots["details"]["items"], serde_json::json!(["sq0010_sh0030"]));

    let (assert, opened) =
        studio.json(&["--project", project.as_str(), "open", "shot", "sq0010_sh0030", "anim"]);
    assert.success();
    assert_eq!(
        path_detail(&opened),
        studio
            .project
            .join("05_shot/sq0010_sh0030/maya/scenes/anim/edit/sq0010_sh0030_anim_E_001.ma")
    );

    let (assert, bad) = studio.json(&["--project", project.as_str(), "open", "shot", "shot30", "anim"]);
    assert.code(1);
    assert_eq!(bad["details"]["reason"], "invalid_format");
}

#[test]
fn user_errors_exit_with_one() {
    let studio = Studio::new();
    studio.register();

    let (assert, payload) = studio.json(&["asset", "create", "vehicle", "Car"]);
    assert.code(1);
    assert_eq!(payload["details"]["reason"], "invalid_format");

    let outside = studio.temp.path().join("hero_modeling_E_001.ma");
    fs::write(&outside, "").expect("outside scene");
    let (assert, payload) = studio.json(&["publish", outside.to_str().expect("utf8 path")]);
    assert.code(1);
    assert_eq!(payload["details"]["reason"], "invalid_location");

    let (assert, payload) = studio.json(&["reference", "character", "Ghost", "rig"]);
    assert.code(1);
    assert_eq!(payload["details"]["reason"], "not_found");
}

#[test]
fn human_errors_go_to_stderr() {
    let studio = Studio::new();
    studio.register();
    let assert = studio
        .cmd()
        .args(["open", "asset", "prop", "Crate", "modeling"])
        .assert()
        .code(1);
    let output = assert.get_output();
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8(output.stderr.clone()).expect("utf8");
    assert!(
        stderr.contains("✗ shotline open: the scene directory"),
        "unexpected stderr: {stderr}"
    );

    let quiet = studio
        .cmd()
        .args(["-q", "asset", "create", "prop", "Crate"])
        .assert()
        .success();
    assert!(quiet.get_output().stdout.is_empty());
}

#[test]
fn json_envelope_shape() {
    let studio = Studio::new();
    studio.register();
    let assert = studio
        .cmd()
        .args(["--json", "asset", "create", "prop", "Crate"])
        .assert()
        .success();
    let payload = parse_json(&assert);
    assert_eq!(payload["status"], "ok");
    assert_eq!(
        payload["message"],
        "shotline asset create: created asset prop/Crate"
    );
    assert!(payload["details"]["path"].is_string());
}

#[test]
fn geometry_folders_belong_to_assets() {
    let studio = Studio::new();
    studio.register();
    studio
        .cmd()
        .args(["asset", "create", "character", "Hero"])
        .assert()
        .success();
    let (_, opened) = studio.json(&["open", "asset", "character", "Hero", "modeling"]);
    let scene = path_detail(&opened);
    let scene = scene.to_str().expect("utf8 path");
    let hero = studio.asset_dir("character", "Hero");

    let assert = studio.cmd().args(["geometry", "export", scene]).assert().success();
    let stdout = String::from_utf8(assert.get_output().stdout.clone()).expect("utf8");
    assert_eq!(
        stdout.trim(),
        hero.join("sculpt/zbrush/input").display().to_string()
    );

    let (assert, imported) = studio.json(&["geometry", "import", scene]);
    assert.success();
    assert_eq!(path_detail(&imported), hero.join("sculpt/zbrush/output"));
    assert_eq!(imported["details"]["direction"], "import");
    assert_eq!(imported["details"]["exists"], false);

    studio
        .cmd()
        .args(["shot", "create", "10", "30"])
        .assert()
        .success();
    let (_, shot) = studio.json(&["open", "shot", "sq0010_sh0030", "anim"]);
    let shot_scene = path_detail(&shot);
    let (assert, refused) = studio.json(&["geometry", "export", shot_scene.to_str().expect("utf8 path")]);
    assert.code(1);
    assert_eq!(refused["details"]["reason"], "invalid_location");
}

#[test]
fn shot_numbers_are_limited_to_four_digits() {
    let studio = Studio::new();
    studio.register();
    let (assert, payload) = studio.json(&["shot", "create", "12345", "1"]);
    assert.code(1);
    assert_eq!(payload["details"]["reason"], "invalid_format");
    assert!(!studio.project.join("05_shot/sq12345_sh0001").exists());
}
