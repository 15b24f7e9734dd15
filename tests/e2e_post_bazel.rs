use std::process::{Command, Stdio};
use tempfile::tempdir;

const LOG: &str = r#"	/cache/execroot/__main__/foo/bar.go: import of "github.com/google/uuid"
"#;

// E2E: with stdin piped the hook must never prompt or touch the workspace.
#[test]
fn e2e_piped_stdin_is_a_silent_no_op() {
    let temp = tempdir().expect("tempdir");
    let log_path = temp.path().join("bazel.log");
    std::fs::write(&log_path, LOG).expect("write log");

    let bin_path = env!("CARGO_BIN_EXE_post_bazel");
    let output = Command::new(bin_path)
        .arg(&log_path)
        .env("BUILD_WORKSPACE_DIRECTORY", temp.path())
        .env("USER_CONFIG_DIR", temp.path().join("config"))
        .env("GO_DEPS_BAZEL", "/nonexistent/bazel")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .output()
        .expect("run post_bazel");

    assert!(
        output.status.success(),
        "status={:?}\nSTDERR:\n{}",
        output.status.code(),
        String::from_utf8_lossy(&output.stderr)
    );
    assert!(output.stdout.is_empty(), "no prompt expected in a non-interactive session");
    assert!(!temp.path().join("config").exists(), "preferences must not be touched");
}

#[test]
fn e2e_missing_log_argument_is_a_usage_error() {
    let bin_path = env!("CARGO_BIN_EXE_post_bazel");
    let output = Command::new(bin_path)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .output()
        .expect("run post_bazel");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.to_lowercase().contains("usage"), "stderr: {stderr}");
}
