pub mod ecdsa;
pub mod init;
pub mod pubkey;
pub mod schnorr;

use clap::{Parser, Subcommand};
use tracing::debug;

/// Verifies secp256k1 public keys and signatures given as hex.
#[derive(Parser, Debug)]
#[command(version, about)]
pub struct MainCmd {
    /// Exit with status 1 when the result is `false`
    #[arg(long, global = true)]
    pub exit_code: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Build the verification context and report whether it is available
    Init(init::Cmd),
    /// Check that a 33 or 65 byte public key is a valid curve point
    Pubkey(pubkey::Cmd),
    /// Verify a compact ECDSA signature over a 32 byte digest
    Ecdsa(ecdsa::Cmd),
    /// Verify a BIP-340 Schnorr signature over a message of any length
    Schnorr(schnorr::Cmd),
}

/// Errors raised before anything reaches the gateway.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// An argument could not be decoded.
    #[error("`{arg}` is not valid hex: {source}")]
    InvalidHex {
        /// Name of the argument.
        arg: &'static str,
        /// Decoder failure.
        source: hex::FromHexError,
    },
}

impl MainCmd {
    /// Runs the selected subcommand and returns its result.
    pub fn run(&self) -> Result<bool, Error> {
        match &self.command {
            Command::Init(cmd) => Ok(cmd.run()),
            Command::Pubkey(cmd) => cmd.run(),
            Command::Ecdsa(cmd) => cmd.run(),
            Command::Schnorr(cmd) => cmd.run(),
        }
    }
}

/// Decodes a hex argument, with or without a `0x` prefix.
///
/// The decoded length is not checked here; that is left to the gateway.
pub(crate) fn decode_hex(arg: &'static str, value: &str) -> Result<Vec<u8>, Error> {
    let bytes = hex::decode(value.trim().trim_start_matches("0x"))
        .map_err(|source| Error::InvalidHex { arg, source })?;
    debug!(arg, len = bytes.len(), "decoded argument");
    Ok(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    const G_COMPRESSED: &str =
        "0279be667ef9dcbbac55a06295ce870b07029bfcdb2dce28d959f2815b16f81798";
    // BIP-340 test vector 1
    const BIP340_PUBKEY: &str = "dff1d77f2a671c5f36183726db2341be58feae1da2deced843240f7b502ba659";
    const BIP340_MSG: &str = "243f6a8885a308d313198a2e03707344a4093822299f31d0082efa98ec4e6c89";
    const BIP340_SIG: &str = "6896bd60eeae296db48a229ff71dfe071bde413e6d43f917dc8dcf8c78de33418906d11ac976abccb20b091292bff4ea897efcb639ea871cfa95f6de339e4b0a";

    fn run(args: &[&str]) -> Result<bool, Error> {
        MainCmd::try_parse_from(std::iter::once("k1verify").chain(args.iter().copied()))
            .unwrap()
            .run()
    }

    #[test]
    fn test_init() {
        assert!(run(&["init"]).unwrap());
    }

    #[rstest]
    #[case::generator(G_COMPRESSED, true)]
    #[case::prefixed("0x0279be667ef9dcbbac55a06295ce870b07029bfcdb2dce28d959f2815b16f81798", true)]
    #[case::bad_prefix("0579be667ef9dcbbac55a06295ce870b07029bfcdb2dce28d959f2815b16f81798", false)]
    #[case::too_short("0279be667ef9dcbbac55a06295ce870b07029bfcdb2dce28d959f2815b16f817", false)]
    #[case::empty("", false)]
    fn test_pubkey(#[case] pubkey: &str, #[case] expected: bool) {
        assert_eq!(run(&["pubkey", pubkey]).unwrap(), expected);
    }

    #[test]
    fn test_schnorr_vector() {
        let args = ["schnorr", "--sig", BIP340_SIG, "--msg", BIP340_MSG, "--pubkey", BIP340_PUBKEY];
        assert!(run(&args).unwrap());

        let tampered = format!("{}00", &BIP340_MSG[..62]);
        let args = ["schnorr", "--sig", BIP340_SIG, "--msg", tampered.as_str(), "--pubkey", BIP340_PUBKEY];
        assert!(!run(&args).unwrap());
    }

    #[test]
    fn test_schnorr_empty_message_is_accepted_as_input() {
        // signature covers a 32 byte message, not the empty one
        let args = ["schnorr", "--sig", BIP340_SIG, "--msg", "", "--pubkey", BIP340_PUBKEY];
        assert!(!run(&args).unwrap());
    }

    #[test]
    fn test_schnorr_empty_message_verifies() {
        let key = k256::schnorr::SigningKey::from_bytes(&[0x2a; 32]).unwrap();
        let sig = hex::encode(key.sign_raw(&[], &[0; 32]).unwrap().to_bytes());
        let pubkey = hex::encode(key.verifying_key().to_bytes());

        let args = ["schnorr", "--sig", sig.as_str(), "--pubkey", pubkey.as_str()];
        assert!(run(&args).unwrap());
        let args = ["schnorr", "--sig", sig.as_str(), "--msg", "", "--pubkey", pubkey.as_str()];
        assert!(run(&args).unwrap());
        let args = ["schnorr", "--sig", sig.as_str(), "--msg", "00", "--pubkey", pubkey.as_str()];
        assert!(!run(&args).unwrap());
    }

    #[test]
    fn test_ecdsa_rejects_wrong_lengths() {
        let sig = "00".repeat(64);
        let args = ["ecdsa", "--msg", "00", "--sig", sig.as_str(), "--pubkey", G_COMPRESSED];
        assert!(!run(&args).unwrap());
    }

    #[test]
    fn test_invalid_hex_is_an_error() {
        let err = run(&["pubkey", "zz"]).unwrap_err();
        assert!(matches!(err, Error::InvalidHex { arg: "pubkey", .. }));
    }

    #[test]
    fn test_exit_code_flag_is_global() {
        let cmd = MainCmd::try_parse_from(["k1verify", "pubkey", "--exit-code", "00"]).unwrap();
        assert!(cmd.exit_code);
    }
}
