//! Curve backends.
//!
//! Depending on enabled features, a different library does the curve work:
//! * [`secp256k1`](https://crates.io/crates/secp256k1) - bindings to `libsecp256k1`, the C implementation used in bitcoin core.
//!   It is enabled by default.
//! * [`k256`](https://crates.io/crates/k256) - maintained pure rust lib, used when the `secp256k1` feature is off.
//!
//! Both are reached through [`CurveBackend`], and [`VerificationContext`] names the one selected.
use crate::ContextError;

/// Verification-only operations the gateway needs from a curve library.
///
/// Implementations hold whatever state the library needs for verification and
/// nothing for signing or key generation. Parsing returns `None` on any
/// malformed encoding and verification returns `false` on any failure; the
/// gateway decides how to report it.
pub trait CurveBackend: Send + Sync + Sized + 'static {
    /// Parsed SEC1 public key.
    type PublicKey;
    /// Parsed compact ECDSA signature.
    type Signature;
    /// Parsed BIP-340 x-only public key.
    type XOnlyPublicKey;

    /// Builds a verification-only context.
    fn create() -> Result<Self, ContextError>;

    /// Parses a 33 byte compressed or 65 byte uncompressed public key.
    fn parse_public_key(&self, bytes: &[u8]) -> Option<Self::PublicKey>;

    /// Parses a compact `r || s` ECDSA signature.
    fn parse_compact_signature(&self, bytes: &[u8; 64]) -> Option<Self::Signature>;

    /// Parses a BIP-340 x-only public key.
    fn parse_xonly_public_key(&self, bytes: &[u8; 32]) -> Option<Self::XOnlyPublicKey>;

    /// Verifies an ECDSA signature over a prehashed 32 byte message.
    fn verify_ecdsa(
        &self,
        msg: &[u8; 32],
        sig: &Self::Signature,
        pubkey: &Self::PublicKey,
    ) -> bool;

    /// Verifies a BIP-340 signature over a message of any length.
    fn verify_schnorr(&self, sig: &[u8; 64], msg: &[u8], pubkey: &Self::XOnlyPublicKey) -> bool;
}

cfg_if::cfg_if! {
    if #[cfg(feature = "secp256k1")] {
        mod bitcoin_secp256k1;
        pub use bitcoin_secp256k1::Secp256k1Backend;

        /// Context type of the selected backend.
        pub type VerificationContext = Secp256k1Backend;
    } else {
        /// Context type of the selected backend.
        pub type VerificationContext = K256Backend;
    }
}

// k256 stays compiled in both configurations as the reference backend.
mod k256;
pub use self::k256::K256Backend;
