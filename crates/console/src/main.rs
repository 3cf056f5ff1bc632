use std::io;
use std::process::ExitCode;

use anyhow::Context;

use qvault_console::{ConsoleConfig, Session, SessionEnd};

fn main() -> anyhow::Result<ExitCode> {
    qvault_observability::init();

    let config = ConsoleConfig::from_env();
    if let Some(seed) = config.seed {
        tracing::info!(seed, "using fixed RNG seed");
    }

    let mut session = Session::new(config.rng());
    let end = session
        .run(io::stdin().lock(), io::stdout().lock())
        .context("console I/O failed")?;

    println!("Program terminated.");
    Ok(match end {
        SessionEnd::Collapsed(_) => ExitCode::FAILURE,
        SessionEnd::Exited | SessionEnd::EndOfInput => ExitCode::SUCCESS,
    })
}
