use assert_cmd::Command;

/// Helper to get a Command for the seoaudit binary.
#[allow(deprecated)]
fn seoaudit_cmd() -> Command {
    Command::cargo_bin("seoaudit").unwrap()
}

#[test]
fn help_works() {
    seoaudit_cmd().arg("--help").assert().success();
}

#[test]
fn audit_help_lists_flags() {
    seoaudit_cmd()
        .args(["audit", "--help"])
        .assert()
        .success()
        .stdout(predicates::str::contains("--min-score"))
        .stdout(predicates::str::contains("--signals"));
}
