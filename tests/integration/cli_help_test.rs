use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;
use tempfile::TempDir;

fn node_cmd(workspace: &TempDir) -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("onlyoffice-node"));
    cmd.current_dir(workspace.path())
        .env_remove("ONLYOFFICE_BASE_URL")
        .env_remove("ONLYOFFICE_TOKEN")
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_help_lists_node_commands() {
    let workspace = TempDir::new().unwrap();
    node_cmd(&workspace)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("NODE COMMANDS"))
        .stdout(predicate::str::contains("run"))
        .stdout(predicate::str::contains("exec"))
        .stdout(predicate::str::contains("describe"));
}

#[test]
fn test_run_help_mentions_continue_on_fail() {
    let workspace = TempDir::new().unwrap();
    node_cmd(&workspace)
        .args(["run", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--continue-on-fail"))
        .stdout(predicate::str::contains("--config"));
}

#[test]
fn test_describe_prints_node_description() {
    let workspace = TempDir::new().unwrap();
    let output = node_cmd(&workspace).arg("describe").output().unwrap();
    assert!(output.status.success());

    let description: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(description["name"], "onlyOffice");
    assert!(description["properties"].as_array().unwrap().len() > 5);
}

#[test]
fn test_describe_credentials() {
    let workspace = TempDir::new().unwrap();
    let output = node_cmd(&workspace)
        .args(["describe", "--credentials"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let description: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(description["name"], "onlyOfficeApi");
}

#[test]
fn test_exec_without_credentials_fails_with_config_error() {
    let workspace = TempDir::new().unwrap();
    node_cmd(&workspace)
        .args(["exec", "--operation", "list"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("CFG-001"));
}

#[test]
fn test_run_rejects_non_array_input() {
    let workspace = TempDir::new().unwrap();
    std::fs::write(
        workspace.path().join("onlyoffice.toml"),
        "[credentials]\nbase_url = \"http://127.0.0.1:9\"\ntoken = \"t\"\n",
    )
    .unwrap();
    node_cmd(&workspace)
        .arg("run")
        .write_stdin("42")
        .assert()
        .failure()
        .stderr(predicate::str::contains("NODE-PARAM-001"));
}

#[test]
fn test_broken_logging_config_warns_and_continues() {
    let workspace = TempDir::new().unwrap();
    let config_dir = workspace.path().join(".onlyoffice").join("config");
    std::fs::create_dir_all(&config_dir).unwrap();
    std::fs::write(config_dir.join("logging.toml"), "[logging\n").unwrap();

    node_cmd(&workspace)
        .arg("describe")
        .assert()
        .success()
        .stderr(predicate::str::contains("[WARNING] logging disabled"));
}
