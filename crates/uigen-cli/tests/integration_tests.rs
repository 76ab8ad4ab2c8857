//! Integration tests for uigen-cli.
//!
//! External tools (ng, npm) are never assumed to exist on the test
//! machine; every generation run uses `--skip-tools`.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

const SPEC: &str = r#"{
    "name": "my-angular-app",
    "components": [
        {
            "name": "Register",
            "fields": [
                { "name": "email", "type": "textbox", "required": true,
                  "pattern": "^\\S+@\\S+$" },
                { "name": "country", "type": "dropdown",
                  "options": ["USA", "Canada", "India"] }
            ],
            "buttons": ["Register"]
        },
        { "name": "About", "menu_label": "About Us" }
    ],
    "menu": "horizontal",
    "footer": "All rights reserved"
}"#;

fn uigen() -> Command {
    let mut cmd = Command::cargo_bin("uigen").unwrap();
    // Keep the default config location out of the picture.
    cmd.env_remove("RUST_LOG");
    cmd
}

fn write_spec(dir: &TempDir) -> std::path::PathBuf {
    let path = dir.path().join("app.json");
    fs::write(&path, SPEC).unwrap();
    path
}

#[test]
fn help_flag() {
    uigen()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("generate"))
        .stdout(predicate::str::contains("preview"));
}

#[test]
fn version_flag() {
    uigen()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn generate_help_lists_flags() {
    uigen()
        .args(["generate", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--columns"))
        .stdout(predicate::str::contains("--no-styled"))
        .stdout(predicate::str::contains("--skip-tools"));
}

#[test]
fn generate_writes_the_project_tree() {
    let temp = TempDir::new().unwrap();
    let spec = write_spec(&temp);

    uigen()
        .current_dir(temp.path())
        .args([
            "generate",
            spec.to_str().unwrap(),
            "--skip-tools",
            "--yes",
            "--quiet",
        ])
        .assert()
        .success();

    let project = temp.path().join("my-angular-app");
    assert!(project.join("src/app/register/register.component.ts").exists());
    assert!(project.join("src/app/register/register.component.html").exists());
    assert!(project.join("src/app/about/about.component.ts").exists());
    assert!(project.join("src/app/app-routing.module.ts").exists());
    assert!(project.join("src/app/app.module.ts").exists());
    assert!(project.join("src/app/app.component.html").exists());
    assert!(project.join("src/styles.css").exists());

    let routing = fs::read_to_string(project.join("src/app/app-routing.module.ts")).unwrap();
    assert!(routing.contains("RegisterComponent"));
    assert!(routing.contains("redirectTo: '/register'"));
}

#[test]
fn generate_dry_run_writes_nothing() {
    let temp = TempDir::new().unwrap();
    let spec = write_spec(&temp);

    uigen()
        .current_dir(temp.path())
        .args([
            "generate",
            spec.to_str().unwrap(),
            "--skip-tools",
            "--yes",
            "--dry-run",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Dry run"));

    assert!(!temp.path().join("my-angular-app").exists());
}

#[test]
fn generate_dry_run_with_force_preserves_existing_project() {
    let temp = TempDir::new().unwrap();
    let spec = write_spec(&temp);
    let project = temp.path().join("my-angular-app");
    fs::create_dir(&project).unwrap();
    fs::write(project.join("precious.txt"), "keep me").unwrap();

    uigen()
        .current_dir(temp.path())
        .args([
            "generate",
            spec.to_str().unwrap(),
            "--dry-run",
            "--force",
            "--skip-tools",
            "--yes",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Dry run"));

    // A dry run must be side-effect free even with --force.
    assert!(project.join("precious.txt").exists());
}

#[test]
fn generate_missing_spec_exits_not_found() {
    let temp = TempDir::new().unwrap();

    uigen()
        .current_dir(temp.path())
        .args(["generate", "missing.json", "--yes"])
        .assert()
        .failure()
        .code(3)
        .stderr(predicate::str::contains("Specification not found"));
}

#[test]
fn generate_existing_project_fails_without_force() {
    let temp = TempDir::new().unwrap();
    let spec = write_spec(&temp);
    fs::create_dir(temp.path().join("my-angular-app")).unwrap();

    uigen()
        .current_dir(temp.path())
        .args(["generate", spec.to_str().unwrap(), "--skip-tools", "--yes"])
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("already exists"));
}

#[test]
fn generate_empty_component_list_is_a_user_error() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("empty.json");
    fs::write(&path, r#"{ "name": "empty", "components": [] }"#).unwrap();

    uigen()
        .current_dir(temp.path())
        .args(["generate", path.to_str().unwrap(), "--skip-tools", "--yes"])
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("no components"));
}

#[test]
fn preview_lists_invocations_and_artifacts() {
    let temp = TempDir::new().unwrap();
    let spec = write_spec(&temp);

    uigen()
        .current_dir(temp.path())
        .args(["preview", spec.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("ng new my-angular-app"))
        .stdout(predicate::str::contains("src/app/register/register.component.ts"))
        .stdout(predicate::str::contains("src/app/app-routing.module.ts"));

    // Preview never writes.
    assert!(!temp.path().join("my-angular-app").exists());
}

#[test]
fn preview_show_prints_one_artifact() {
    let temp = TempDir::new().unwrap();
    let spec = write_spec(&temp);

    uigen()
        .current_dir(temp.path())
        .args([
            "preview",
            spec.to_str().unwrap(),
            "--show",
            "src/app/app.component.html",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("<router-outlet></router-outlet>"))
        .stdout(predicate::str::contains("About Us"));
}

#[test]
fn preview_styled_flag_overrides_config_default() {
    let temp = TempDir::new().unwrap();
    let spec = write_spec(&temp);
    let config = temp.path().join("uigen.toml");
    fs::write(&config, "[defaults]\nstyled = false\n").unwrap();

    // styles.css only appears in styled plans.
    uigen()
        .current_dir(temp.path())
        .args([
            "--config",
            config.to_str().unwrap(),
            "preview",
            spec.to_str().unwrap(),
            "--styled",
            "--show",
            "src/styles.css",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("bootstrap"));
}

#[test]
fn preview_show_unknown_path_exits_not_found() {
    let temp = TempDir::new().unwrap();
    let spec = write_spec(&temp);

    uigen()
        .current_dir(temp.path())
        .args(["preview", spec.to_str().unwrap(), "--show", "nope.ts"])
        .assert()
        .failure()
        .code(3)
        .stderr(predicate::str::contains("No such artifact"));
}

#[test]
fn init_then_generate_round_trip() {
    let temp = TempDir::new().unwrap();

    uigen()
        .current_dir(temp.path())
        .args(["init"])
        .assert()
        .success();
    assert!(temp.path().join("app.json").exists());

    uigen()
        .current_dir(temp.path())
        .args(["generate", "app.json", "--skip-tools", "--yes", "--quiet"])
        .assert()
        .success();
    assert!(temp.path().join("my-angular-app/src/app/app.module.ts").exists());
}

#[test]
fn init_refuses_to_overwrite_without_force() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("app.json"), "{}").unwrap();

    uigen()
        .current_dir(temp.path())
        .args(["init"])
        .assert()
        .success()
        .stdout(predicate::str::contains("use --force"));

    assert_eq!(
        fs::read_to_string(temp.path().join("app.json")).unwrap(),
        "{}"
    );
}

#[test]
fn completions_bash_emits_a_script() {
    uigen()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("uigen"));
}

#[test]
fn no_styled_skips_bootstrap_artifacts() {
    let temp = TempDir::new().unwrap();
    let spec = write_spec(&temp);

    uigen()
        .current_dir(temp.path())
        .args([
            "generate",
            spec.to_str().unwrap(),
            "--no-styled",
            "--skip-tools",
            "--yes",
            "--quiet",
        ])
        .assert()
        .success();

    let project = temp.path().join("my-angular-app");
    assert!(!project.join("src/styles.css").exists());
    let markup =
        fs::read_to_string(project.join("src/app/register/register.component.html")).unwrap();
    assert!(markup.contains("custom-col-2"));
    assert!(!markup.contains("col-md-"));
}
