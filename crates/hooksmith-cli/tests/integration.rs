use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// Test harness: a fake home and a project root inside one tempdir, so
/// both scopes stay isolated from the real machine.
struct Env {
    dir: TempDir,
}

impl Env {
    fn new() -> Self {
        let dir = TempDir::new().unwrap();
        std::fs::create_dir_all(dir.path().join("home")).unwrap();
        std::fs::create_dir_all(dir.path().join("proj")).unwrap();
        Self { dir }
    }

    fn home(&self) -> std::path::PathBuf {
        self.dir.path().join("home")
    }

    fn proj(&self) -> std::path::PathBuf {
        self.dir.path().join("proj")
    }

    fn hook(&self) -> Command {
        let mut cmd = Command::cargo_bin("hook").unwrap();
        cmd.current_dir(self.proj())
            .env("HOME", self.home())
            .env("HOOK_ROOT", self.proj());
        cmd
    }

    fn user_settings(&self) -> std::path::PathBuf {
        self.home().join(".claude/settings.json")
    }

    fn built_hook(&self, name: &str) -> std::path::PathBuf {
        self.proj().join(".claude/hooks").join(name).join("hook.json")
    }
}

// ---------------------------------------------------------------------------
// hook build / validate
// ---------------------------------------------------------------------------

#[test]
fn build_formatter_then_validate() {
    let env = Env::new();

    env.hook()
        .args(["build", "--template", "formatter", "--language", "python"])
        .assert()
        .success()
        .stdout(predicate::str::contains("formatter-python"));

    let hook_file = env.built_hook("formatter-python");
    assert!(hook_file.exists());
    assert!(hook_file.with_file_name("README.md").exists());

    env.hook()
        .args(["validate", hook_file.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("is valid"));
}

#[test]
fn build_unknown_template_fails() {
    let env = Env::new();
    env.hook()
        .args(["build", "--template", "nonexistent"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown template"));
}

#[test]
fn build_rejects_shell_metacharacters_in_params() {
    let env = Env::new();
    env.hook()
        .args([
            "build",
            "--template",
            "notifier",
            "--param",
            "message=; rm -rf /",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("message"));
}

#[test]
fn validate_reports_destructive_command() {
    let env = Env::new();
    let hook_dir = env.proj().join(".claude/hooks/force-push");
    std::fs::create_dir_all(&hook_dir).unwrap();
    std::fs::write(
        hook_dir.join("hook.json"),
        serde_json::to_string_pretty(&serde_json::json!({
            "hooks": [{"type": "command", "command": "git push --force", "timeout": 10}],
            "_metadata": {
                "generated_by": "hand",
                "event_type": "PrePush",
                "hook_name": "force-push",
                "created_at": "2026-08-07T00:00:00Z"
            }
        }))
        .unwrap(),
    )
    .unwrap();

    env.hook()
        .args(["validate", hook_dir.join("hook.json").to_str().unwrap()])
        .assert()
        .failure()
        .stdout(predicate::str::contains("destructive-command"));
}

// ---------------------------------------------------------------------------
// hook install / list / uninstall
// ---------------------------------------------------------------------------

fn build_and_install(env: &Env, scope: &str) {
    env.hook()
        .args(["build", "--template", "formatter", "--language", "python"])
        .assert()
        .success();
    env.hook()
        .args([
            "install",
            env.built_hook("formatter-python").to_str().unwrap(),
            scope,
        ])
        .assert()
        .success();
}

#[test]
fn install_then_list_user_scope() {
    let env = Env::new();
    build_and_install(&env, "user");

    env.hook()
        .args(["list", "user"])
        .assert()
        .success()
        .stdout(predicate::str::contains("formatter-python"))
        .stdout(predicate::str::contains("PostToolUse"));

    // project scope is an independent document
    env.hook()
        .args(["list", "project"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No hooks installed"));
}

#[test]
fn duplicate_install_fails_without_replace() {
    let env = Env::new();
    build_and_install(&env, "user");

    env.hook()
        .args([
            "install",
            env.built_hook("formatter-python").to_str().unwrap(),
            "user",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("already installed"));

    // still exactly one entry
    let settings: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(env.user_settings()).unwrap()).unwrap();
    assert_eq!(settings["hooks"]["PostToolUse"].as_array().unwrap().len(), 1);
}

#[test]
fn install_with_replace_succeeds() {
    let env = Env::new();
    build_and_install(&env, "user");

    env.hook()
        .args([
            "install",
            env.built_hook("formatter-python").to_str().unwrap(),
            "user",
            "--replace",
        ])
        .assert()
        .success();

    let settings: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(env.user_settings()).unwrap()).unwrap();
    assert_eq!(settings["hooks"]["PostToolUse"].as_array().unwrap().len(), 1);
}

#[test]
fn uninstall_removes_the_entry() {
    let env = Env::new();
    build_and_install(&env, "user");

    env.hook()
        .args(["uninstall", "formatter-python", "user"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Uninstalled"));

    env.hook()
        .args(["list", "user"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No hooks installed"));
}

#[test]
fn uninstall_unknown_hook_fails_and_leaves_settings_alone() {
    let env = Env::new();
    build_and_install(&env, "user");
    let before = std::fs::read_to_string(env.user_settings()).unwrap();

    env.hook()
        .args(["uninstall", "missing", "user"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not installed"));

    let after = std::fs::read_to_string(env.user_settings()).unwrap();
    assert_eq!(before, after);
}

#[test]
fn corrupt_settings_fail_list_without_being_touched() {
    let env = Env::new();
    std::fs::create_dir_all(env.home().join(".claude")).unwrap();
    std::fs::write(env.user_settings(), "{not json").unwrap();

    env.hook()
        .args(["list", "user"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not valid JSON"));

    assert_eq!(
        std::fs::read_to_string(env.user_settings()).unwrap(),
        "{not json"
    );
}

// ---------------------------------------------------------------------------
// hook rollback
// ---------------------------------------------------------------------------

#[test]
fn rollback_restores_uninstalled_hook() {
    let env = Env::new();
    build_and_install(&env, "user");
    env.hook()
        .args(["uninstall", "formatter-python", "user"])
        .assert()
        .success();

    env.hook()
        .args(["rollback", "user"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Restored"));

    env.hook()
        .args(["list", "user"])
        .assert()
        .success()
        .stdout(predicate::str::contains("formatter-python"));
}

#[test]
fn rollback_without_backups_fails() {
    let env = Env::new();
    env.hook()
        .args(["rollback", "project"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("no backup"));
}

// ---------------------------------------------------------------------------
// hook templates / status
// ---------------------------------------------------------------------------

#[test]
fn templates_lists_the_catalog() {
    let env = Env::new();
    env.hook()
        .args(["templates"])
        .assert()
        .success()
        .stdout(predicate::str::contains("formatter"))
        .stdout(predicate::str::contains("security-scan"))
        .stdout(predicate::str::contains("PostToolUse"));
}

#[test]
fn templates_json_output() {
    let env = Env::new();
    let output = env.hook().args(["--json", "templates"]).assert().success();
    let stdout = String::from_utf8(output.get_output().stdout.clone()).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert!(parsed.as_array().unwrap().len() >= 5);
}

#[test]
fn status_tracks_generated_and_installed() {
    let env = Env::new();
    env.hook()
        .args(["build", "--template", "formatter", "--language", "python"])
        .assert()
        .success();

    env.hook()
        .args(["status"])
        .assert()
        .success()
        .stdout(predicate::str::contains("formatter-python"))
        .stdout(predicate::str::contains("install 'formatter-python'"));

    env.hook()
        .args([
            "install",
            env.built_hook("formatter-python").to_str().unwrap(),
            "project",
        ])
        .assert()
        .success();

    env.hook()
        .args(["status"])
        .assert()
        .success()
        .stdout(predicate::str::contains("project"))
        .stdout(predicate::str::contains("mark it tested"));
}
