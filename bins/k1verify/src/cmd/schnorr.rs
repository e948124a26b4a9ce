use super::{decode_hex, Error};
use clap::Parser;

/// `schnorr` subcommand
#[derive(Parser, Debug)]
pub struct Cmd {
    /// Hex encoded 64 byte BIP-340 signature
    #[arg(long)]
    sig: String,
    /// Hex encoded message of any length, possibly empty
    #[arg(long, default_value = "")]
    msg: String,
    /// Hex encoded 32 byte x-only public key
    #[arg(long)]
    pubkey: String,
}

impl Cmd {
    /// Runs schnorr command.
    pub fn run(&self) -> Result<bool, Error> {
        let sig = decode_hex("sig", &self.sig)?;
        let msg = decode_hex("msg", &self.msg)?;
        let pubkey = decode_hex("pubkey", &self.pubkey)?;
        Ok(gateway::verify_schnorr(&sig, &msg, &pubkey))
    }
}
