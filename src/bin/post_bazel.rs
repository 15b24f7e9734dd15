use anyhow::Result;
use clap::Parser;
use std::io::{self, IsTerminal};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

use go_deps_hook::{
    load_config, FilePreferenceStore, Remediation, SystemRunner, TerminalPrompter,
};

/// Offer to run Gazelle when a Bazel build failed on missing Go imports.
#[derive(Debug, Parser)]
#[command(name = "post_bazel", version)]
struct Cli {
    /// File holding the captured output of the finished build
    build_log: PathBuf,
}

fn init_logging() {
    let filter = EnvFilter::try_from_env("GO_DEPS_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging();

    match run(&cli) {
        Ok(0) => ExitCode::SUCCESS,
        Ok(code) => ExitCode::from(code.clamp(1, 255) as u8),
        Err(e) => {
            eprintln!("{:#}", e);
            ExitCode::from(1)
        }
    }
}

fn run(cli: &Cli) -> Result<i32> {
    let config = load_config();
    let mut preferences = FilePreferenceStore::new(&config);
    let mut prompter = TerminalPrompter::new(io::stdin().lock(), io::stdout());
    let mut out = io::stdout();
    let mut err = io::stderr();

    let mut remediation = Remediation {
        config: &config,
        interactive: io::stdin().is_terminal(),
        preferences: &mut preferences,
        prompter: &mut prompter,
        runner: &SystemRunner,
        out: &mut out,
        err: &mut err,
    };
    let outcome = remediation.run(&cli.build_log)?;
    tracing::info!(?outcome, "post-build hook finished");
    Ok(outcome.exit_code())
}
