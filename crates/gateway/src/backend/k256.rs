//! k256 backend. More about it in [`crate::backend`].
use super::CurveBackend;
use crate::{
    constants::{PUBKEY_COMPRESSED_LENGTH, PUBKEY_UNCOMPRESSED_LENGTH},
    ContextError,
};
use k256::{
    ecdsa::{signature::hazmat::PrehashVerifier, Signature, VerifyingKey},
    schnorr,
};

/// Pure rust backend. `k256` keeps its precomputed tables in statics, so the
/// context itself carries no state.
#[derive(Clone, Copy, Debug, Default)]
pub struct K256Backend;

impl CurveBackend for K256Backend {
    type PublicKey = VerifyingKey;
    type Signature = Signature;
    type XOnlyPublicKey = schnorr::VerifyingKey;

    fn create() -> Result<Self, ContextError> {
        Ok(Self)
    }

    /// Accepts the same tags as `secp256k1_ec_pubkey_parse`: `0x02`/`0x03` on
    /// 33 bytes, `0x04` and the hybrid `0x06`/`0x07` on 65 bytes. `k256` alone
    /// would also take the compact `0x05` tag and refuse hybrid keys.
    fn parse_public_key(&self, bytes: &[u8]) -> Option<VerifyingKey> {
        let tag = *bytes.first()?;
        match (bytes.len(), tag) {
            (PUBKEY_COMPRESSED_LENGTH, 0x02 | 0x03) | (PUBKEY_UNCOMPRESSED_LENGTH, 0x04) => {
                VerifyingKey::from_sec1_bytes(bytes).ok()
            }
            (PUBKEY_UNCOMPRESSED_LENGTH, 0x06 | 0x07) => {
                // hybrid tag carries the parity of y
                if bytes[PUBKEY_UNCOMPRESSED_LENGTH - 1] & 1 != tag & 1 {
                    return None;
                }
                let mut sec1 = [0u8; PUBKEY_UNCOMPRESSED_LENGTH];
                sec1.copy_from_slice(bytes);
                sec1[0] = 0x04;
                VerifyingKey::from_sec1_bytes(&sec1).ok()
            }
            _ => None,
        }
    }

    fn parse_compact_signature(&self, bytes: &[u8; 64]) -> Option<Signature> {
        Signature::from_slice(bytes).ok()
    }

    fn parse_xonly_public_key(&self, bytes: &[u8; 32]) -> Option<schnorr::VerifyingKey> {
        schnorr::VerifyingKey::from_bytes(bytes).ok()
    }

    fn verify_ecdsa(&self, msg: &[u8; 32], sig: &Signature, pubkey: &VerifyingKey) -> bool {
        pubkey.verify_prehash(msg, sig).is_ok()
    }

    fn verify_schnorr(&self, sig: &[u8; 64], msg: &[u8], pubkey: &schnorr::VerifyingKey) -> bool {
        // Rejects `r >= p` and `s >= n` before verification.
        let Ok(sig) = schnorr::Signature::try_from(&sig[..]) else {
            return false;
        };
        pubkey.verify_raw(msg, &sig).is_ok()
    }
}
