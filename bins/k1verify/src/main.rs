use clap::Parser;
use color_eyre::eyre::Result;
use k1verify::cmd::MainCmd;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

fn main() -> Result<ExitCode> {
    color_eyre::install()?;

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()))
        .init();

    let cmd = MainCmd::parse();
    let verified = cmd.run()?;
    println!("{verified}");

    if cmd.exit_code && !verified {
        return Ok(ExitCode::FAILURE);
    }
    Ok(ExitCode::SUCCESS)
}
