use std::path::Path;
use std::process::{Command, ExitStatus, Stdio};

use crate::error::{HookError, Result};

/// Exit code reported when a child was terminated by a signal.
const SIGNALED_EXIT_CODE: i32 = 1;

/// Exit code and captured output of a finished child process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubprocessResult {
    pub exit_code: i32,
    pub stdout: Vec<u8>,
    pub stderr: Vec<u8>,
}

impl SubprocessResult {
    /// True when the child exited with code 0.
    pub fn success(&self) -> bool {
        self.exit_code == 0
    }

    fn from_status(status: ExitStatus) -> Self {
        Self {
            exit_code: status.code().unwrap_or(SIGNALED_EXIT_CODE),
            stdout: Vec::new(),
            stderr: Vec::new(),
        }
    }
}

/// One Gazelle invocation: `<bazel> run --script_path=<script> <target> -- <dirs...>`.
#[derive(Debug, Clone)]
pub struct FixRequest<'a> {
    pub bazel_command: &'a str,
    pub gazelle_target: &'a str,
    pub workspace_dir: &'a Path,
    pub script_path: &'a Path,
    pub target_dirs: Vec<String>,
}

impl FixRequest<'_> {
    pub fn args(&self) -> Vec<String> {
        let mut args = vec![
            "run".to_string(),
            format!("--script_path={}", self.script_path.display()),
            self.gazelle_target.to_string(),
            "--".to_string(),
        ];
        args.extend(self.target_dirs.iter().cloned());
        args
    }

    /// Human-readable command shown on the status line (omits the script path).
    pub fn display(&self) -> String {
        format!(
            "{} run {} -- {}",
            self.bazel_command,
            self.gazelle_target,
            self.target_dirs.join(" ")
        )
    }
}

/// Runs the external fixer and the script it generates. Both calls block until the child exits.
pub trait CommandRunner {
    /// Captures stdout and stderr; a non-zero exit is not an error.
    fn run_fixer(&self, request: &FixRequest<'_>) -> Result<SubprocessResult>;

    /// Runs the generated script with inherited stdio.
    fn run_script(&self, script: &Path) -> Result<SubprocessResult>;
}

/// Spawns real processes with `std::process::Command`.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemRunner;

impl CommandRunner for SystemRunner {
    fn run_fixer(&self, request: &FixRequest<'_>) -> Result<SubprocessResult> {
        let output = Command::new(request.bazel_command)
            .args(request.args())
            .current_dir(request.workspace_dir)
            .stdin(Stdio::null())
            .output()
            .map_err(|source| HookError::Spawn {
                program: request.bazel_command.to_string(),
                source,
            })?;
        let exit_code = output.status.code().unwrap_or(SIGNALED_EXIT_CODE);
        tracing::debug!(exit_code, "fixer finished");
        Ok(SubprocessResult {
            exit_code,
            stdout: output.stdout,
            stderr: output.stderr,
        })
    }

    fn run_script(&self, script: &Path) -> Result<SubprocessResult> {
        let status = Command::new("/usr/bin/env")
            .arg("bash")
            .arg(script)
            .status()
            .map_err(|source| HookError::Spawn {
                program: "/usr/bin/env bash".to_string(),
                source,
            })?;
        tracing::debug!(code = ?status.code(), script = %script.display(), "fix script finished");
        Ok(SubprocessResult::from_status(status))
    }
}

/// Make the generated script executable for its owner and everyone else.
pub fn mark_executable(path: &Path) -> Result<()> {
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        std::fs::set_permissions(path, std::fs::Permissions::from_mode(0o755)).map_err(|e| {
            HookError::io(format!("failed to mark {} executable", path.display()), e)
        })?;
    }
    #[cfg(not(unix))]
    let _ = path;
    Ok(())
}
