use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn voidrose(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("voidrose").expect("binary built");
    cmd.current_dir(dir.path()).env_remove("RUST_LOG");
    cmd
}

#[test]
fn render_writes_about_index() {
    let temp = TempDir::new().expect("temp dir");
    voidrose(&temp)
        .args(["render", "--out", "site"])
        .assert()
        .success()
        .stderr(predicate::str::contains("wrote page"));

    let html = std::fs::read_to_string(temp.path().join("site/about/index.html")).expect("page");
    assert!(html.starts_with("<!DOCTYPE html>"));
    assert!(html.contains("BEYOND"));
    assert!(html.contains("Tournaments"));
}

#[test]
fn render_uses_config_out_dir_and_overrides() {
    let temp = TempDir::new().expect("temp dir");
    std::fs::write(
        temp.path().join("voidrose.toml"),
        "out_dir = \"public\"\n[theme.colors]\nrosePink = \"#ff1f8f\"\n",
    )
    .expect("write config");

    voidrose(&temp).arg("render").assert().success();

    let html = std::fs::read_to_string(temp.path().join("public/about/index.html")).expect("page");
    assert!(html.contains("--color-rosePink: #ff1f8f;"));
}

#[test]
fn check_passes_on_default_theme() {
    let temp = TempDir::new().expect("temp dir");
    voidrose(&temp)
        .arg("check")
        .assert()
        .success()
        .stderr(predicate::str::contains("all classes resolve"));
}

#[test]
fn tokens_prints_theme_json() {
    let temp = TempDir::new().expect("temp dir");
    let output = voidrose(&temp).arg("tokens").output().expect("run");
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).expect("json");
    assert_eq!(json["colors"]["rosePink"], "#ff007f");
    assert_eq!(json["fonts"]["gaming"][0], "Orbitron");
    assert_eq!(json["animations"]["pulse-evil"]["duration_ms"], 3000);
}

#[test]
fn invalid_override_fails_with_context() {
    let temp = TempDir::new().expect("temp dir");
    std::fs::write(temp.path().join("bad.toml"), "[theme.colors]\nrosePink = \"pink\"\n")
        .expect("write config");

    voidrose(&temp)
        .args(["render", "--config", "bad.toml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value `pink`"));
}

#[test]
fn missing_explicit_config_fails() {
    let temp = TempDir::new().expect("temp dir");
    voidrose(&temp)
        .args(["check", "--config", "absent.toml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("absent.toml"));
}
