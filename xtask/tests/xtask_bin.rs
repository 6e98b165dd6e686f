use std::process::Command;

#[test]
fn xtask_help_runs() {
    let exe = env!("CARGO_BIN_EXE_xtask");
    let output = Command::new(exe)
        .arg("help")
        .output()
        .expect("run xtask");

    assert!(output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("xtask commands"));
}

#[test]
fn explain_coverage_passes() {
    let exe = env!("CARGO_BIN_EXE_xtask");
    let output = Command::new(exe)
        .arg("explain-coverage")
        .output()
        .expect("run xtask");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("8 check IDs have explanations"));
}

#[test]
fn conform_passes_on_fixtures() {
    let exe = env!("CARGO_BIN_EXE_xtask");
    let output = Command::new(exe)
        .arg("conform")
        .output()
        .expect("run xtask");

    assert!(
        output.status.success(),
        "{}",
        String::from_utf8_lossy(&output.stderr)
    );
}

#[test]
fn unknown_command_fails() {
    let exe = env!("CARGO_BIN_EXE_xtask");
    let output = Command::new(exe)
        .arg("frobnicate")
        .output()
        .expect("run xtask");

    assert!(!output.status.success());
}
