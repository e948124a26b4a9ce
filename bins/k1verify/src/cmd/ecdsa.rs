use super::{decode_hex, Error};
use clap::Parser;

/// `ecdsa` subcommand
///
/// The message is a digest the caller already computed; it is not hashed.
#[derive(Parser, Debug)]
pub struct Cmd {
    /// Hex encoded 32 byte message digest
    #[arg(long)]
    msg: String,
    /// Hex encoded 64 byte compact signature (`r || s`)
    #[arg(long)]
    sig: String,
    /// Hex encoded 33 byte compressed public key
    #[arg(long)]
    pubkey: String,
}

impl Cmd {
    /// Runs ecdsa command.
    pub fn run(&self) -> Result<bool, Error> {
        let msg = decode_hex("msg", &self.msg)?;
        let sig = decode_hex("sig", &self.sig)?;
        let pubkey = decode_hex("pubkey", &self.pubkey)?;
        Ok(gateway::verify_ecdsa(&msg, &sig, &pubkey))
    }
}
