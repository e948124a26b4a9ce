use clap::Parser;

/// `init` subcommand
#[derive(Parser, Debug)]
pub struct Cmd {}

impl Cmd {
    /// Builds the context if needed. Returns `false` if it is unavailable.
    pub fn run(&self) -> bool {
        gateway::init_context().is_some()
    }
}
