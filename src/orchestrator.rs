use std::fs;
use std::io::Write;
use std::path::Path;

use crate::config::{Config, WORKSPACE_DIR_VAR};
use crate::diagnostics::{parse_problems, target_dirs};
use crate::error::{HookError, Result};
use crate::fixer::{mark_executable, CommandRunner, FixRequest};
use crate::preferences::{PreferenceStore, RememberedChoice, GAZELLE_PROMPT_PREFERENCE_KEY};
use crate::prompt::{Prompter, Response};
use crate::status;

pub const PROMPT_MESSAGE: &str = "Run gazelle to fix these packages?";

/// Why a run finished without touching the workspace.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    NonInteractive,
    NoProblems,
    RememberedNever,
    /// `always` was just saved; the fixer runs from the next build on.
    RememberedAlways,
    Declined,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Skipped(SkipReason),
    Applied,
    /// Exit code of the step that failed, returned as the hook's own.
    Failed(i32),
}

impl Outcome {
    pub fn exit_code(&self) -> i32 {
        match self {
            Outcome::Skipped(_) | Outcome::Applied => 0,
            Outcome::Failed(code) => *code,
        }
    }
}

/// One pass of the missing-import remediation flow.
///
/// Collaborators are injected so the flow can run against fakes; the binary
/// wires in the file store, a stdin prompter and [`crate::fixer::SystemRunner`].
pub struct Remediation<'a> {
    pub config: &'a Config,
    /// Whether stdin is a terminal. Nothing is prompted or run otherwise.
    pub interactive: bool,
    pub preferences: &'a mut dyn PreferenceStore,
    pub prompter: &'a mut dyn Prompter,
    pub runner: &'a dyn CommandRunner,
    pub out: &'a mut dyn Write,
    pub err: &'a mut dyn Write,
}

impl Remediation<'_> {
    pub fn run(&mut self, build_log: &Path) -> Result<Outcome> {
        if !self.interactive {
            tracing::debug!("stdin is not a terminal; skipping");
            return Ok(Outcome::Skipped(SkipReason::NonInteractive));
        }

        let raw = fs::read(build_log).map_err(|e| {
            HookError::io(format!("failed to read build log {}", build_log.display()), e)
        })?;
        let problems = parse_problems(&String::from_utf8_lossy(&raw));
        if problems.is_empty() {
            return Ok(Outcome::Skipped(SkipReason::NoProblems));
        }
        for problem in &problems {
            tracing::debug!(src = %problem.source_path, import = %problem.import_identifier, "missing import");
        }
        let targets: Vec<String> = target_dirs(&problems).into_iter().collect();

        if let Some(skip) = self.check_consent()? {
            return Ok(Outcome::Skipped(skip));
        }

        let config = self.config;
        let Some(workspace_dir) = config.workspace_dir.as_deref() else {
            writeln!(self.err, "{}", HookError::MissingEnv(WORKSPACE_DIR_VAR))
                .map_err(|e| HookError::io("failed to write to stderr", e))?;
            return Ok(Outcome::Failed(1));
        };

        // Removed on drop, whichever way this function returns.
        let script = tempfile::Builder::new()
            .prefix("gazelle-fix-")
            .suffix(".sh")
            .tempfile()
            .map_err(|e| HookError::io("failed to create fix script file", e))?
            .into_temp_path();

        let request = FixRequest {
            bazel_command: &config.bazel_command,
            gazelle_target: &config.gazelle_target,
            workspace_dir,
            script_path: &script,
            target_dirs: targets,
        };
        let command = request.display();

        self.print(&status::fixing(&command))?;
        let fixer = match self.runner.run_fixer(&request) {
            Ok(result) => result,
            Err(e) => {
                self.print(status::ERASE_LINE)?;
                return Err(e);
            }
        };
        if !fixer.success() {
            tracing::info!(exit_code = fixer.exit_code, "gazelle failed");
            self.print(status::ERASE_LINE)?;
            self.print(&format!("{}\n", status::failed(&command)))?;
            self.err
                .write_all(&fixer.stderr)
                .and_then(|_| self.err.flush())
                .map_err(|e| HookError::io("failed to write to stderr", e))?;
            return Ok(Outcome::Failed(fixer.exit_code));
        }

        mark_executable(&script)?;
        let applied = self.runner.run_script(&script)?;
        if !applied.success() {
            // Only the fixer step gets the erase-and-report treatment.
            return Ok(Outcome::Failed(applied.exit_code));
        }

        // The build itself is not retried here.
        self.print(status::ERASE_LINE)?;
        self.print(&format!("{}\n", status::applied(&command)))?;
        Ok(Outcome::Applied)
    }

    /// Consult the remembered choice, prompting when there is none.
    /// Returns the skip reason when the fixer must not run.
    fn check_consent(&mut self) -> Result<Option<SkipReason>> {
        let stored = self.preferences.get(GAZELLE_PROMPT_PREFERENCE_KEY)?;
        match stored.as_deref().and_then(RememberedChoice::from_stored) {
            Some(RememberedChoice::Never) => {
                tracing::debug!("remembered preference is never");
                return Ok(Some(SkipReason::RememberedNever));
            }
            Some(RememberedChoice::Always) => {
                tracing::debug!("remembered preference is always");
                return Ok(None);
            }
            None => {}
        }

        let response = self.prompter.ask(PROMPT_MESSAGE)?;
        let remembered = match response {
            Response::Always => Some(RememberedChoice::Always),
            Response::Never => Some(RememberedChoice::Never),
            Response::Yes | Response::No => None,
        };
        if let Some(choice) = remembered {
            self.preferences
                .set(GAZELLE_PROMPT_PREFERENCE_KEY, choice.as_str())?;
        }
        match response {
            Response::Yes => Ok(None),
            Response::Always => Ok(Some(SkipReason::RememberedAlways)),
            Response::No | Response::Never => Ok(Some(SkipReason::Declined)),
        }
    }

    fn print(&mut self, text: &str) -> Result<()> {
        self.out
            .write_all(text.as_bytes())
            .and_then(|_| self.out.flush())
            .map_err(|e| HookError::io("failed to write to stdout", e))
    }
}
