use super::{decode_hex, Error};
use clap::Parser;

/// `pubkey` subcommand
#[derive(Parser, Debug)]
pub struct Cmd {
    /// Hex encoded SEC1 public key, 33 or 65 bytes
    pubkey: String,
}

impl Cmd {
    /// Runs pubkey command.
    pub fn run(&self) -> Result<bool, Error> {
        let pubkey = decode_hex("pubkey", &self.pubkey)?;
        Ok(gateway::validate_public_key(&pubkey))
    }
}
