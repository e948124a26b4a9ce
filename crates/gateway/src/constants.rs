//! Buffer lengths accepted at the verification boundary.

/// Message digest length in bytes, as signed by ECDSA.
pub const MESSAGE_HASH_LENGTH: usize = 32;

/// Compact signature length in bytes (r || s for ECDSA, R.x || s for Schnorr).
pub const SIGNATURE_LENGTH: usize = 64;

/// secp256k1 public key length in bytes (compressed).
pub const PUBKEY_COMPRESSED_LENGTH: usize = 33;

/// secp256k1 public key length in bytes (uncompressed).
pub const PUBKEY_UNCOMPRESSED_LENGTH: usize = 65;

/// BIP-340 x-only public key length in bytes.
pub const XONLY_PUBKEY_LENGTH: usize = 32;
