use assert_cmd::Command;
use predicates::prelude::predicate;

#[test]
fn test_authors() {
    let app_name = option_env!("CARGO_PKG_NAME").unwrap_or("unknown app name");
    let app_version = option_env!("CARGO_PKG_VERSION").unwrap_or("unknown version");
    let authors = option_env!("CARGO_PKG_AUTHORS")
        .map(|v| v.replace(':', ", "))
        .unwrap_or_else(|| "unknown authors".to_string());
    let expected = format!("{} {}\n{}\n", app_name, app_version, authors);
    let mut cmd = Command::cargo_bin("carneades").unwrap();
    cmd.arg("authors").arg("--logging-level").arg("off");
    cmd.assert()
        .success()
        .stdout(predicate::eq(expected.as_str()))
        .stderr(predicate::str::is_empty());
}

#[test]
fn test_no_subcommand() {
    let mut cmd = Command::cargo_bin("carneades").unwrap();
    cmd.assert().failure().code(1);
}

#[test]
fn test_unknown_subcommand() {
    let mut cmd = Command::cargo_bin("carneades").unwrap();
    cmd.arg("foo");
    cmd.assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("error:"));
}

#[test]
fn test_help() {
    let mut cmd = Command::cargo_bin("carneades").unwrap();
    cmd.arg("help").arg("eval");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("--logging-level"));
}
