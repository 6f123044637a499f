//! standup: daily standup summaries from git commit history
//!
//! This binary scans a local or remote repository for recent commits and
//! prints a categorized summary suitable for a status meeting.

use std::process::ExitCode;

use clap::Parser;
use standup_cli::config::Config;
use standup_cli::run::run;

fn main() -> ExitCode {
    let config = Config::parse();

    // Logs go to stderr; stdout carries only the report
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(config.log_level().into()),
        )
        .init();

    let mut stdout = std::io::stdout().lock();
    match run(&config, &mut stdout) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}
