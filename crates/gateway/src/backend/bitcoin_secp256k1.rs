//! bitcoin_secp256k1 backend. More about it in [`crate::backend`].
use super::CurveBackend;
use crate::ContextError;
use core::fmt;
use secp256k1::{ecdsa, schnorr, Message, PublicKey, Secp256k1, VerifyOnly, XOnlyPublicKey};

/// `libsecp256k1` context created with verification capability only.
pub struct Secp256k1Backend {
    secp: Secp256k1<VerifyOnly>,
}

impl fmt::Debug for Secp256k1Backend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Secp256k1Backend").finish_non_exhaustive()
    }
}

impl CurveBackend for Secp256k1Backend {
    type PublicKey = PublicKey;
    type Signature = ecdsa::Signature;
    type XOnlyPublicKey = XOnlyPublicKey;

    fn create() -> Result<Self, ContextError> {
        Ok(Self {
            secp: Secp256k1::verification_only(),
        })
    }

    fn parse_public_key(&self, bytes: &[u8]) -> Option<PublicKey> {
        PublicKey::from_slice(bytes).ok()
    }

    fn parse_compact_signature(&self, bytes: &[u8; 64]) -> Option<ecdsa::Signature> {
        ecdsa::Signature::from_compact(bytes).ok()
    }

    fn parse_xonly_public_key(&self, bytes: &[u8; 32]) -> Option<XOnlyPublicKey> {
        XOnlyPublicKey::from_slice(bytes).ok()
    }

    fn verify_ecdsa(&self, msg: &[u8; 32], sig: &ecdsa::Signature, pubkey: &PublicKey) -> bool {
        let msg = Message::from_digest(*msg);
        // libsecp256k1 only accepts lower-S signatures here.
        self.secp.verify_ecdsa(&msg, sig, pubkey).is_ok()
    }

    fn verify_schnorr(&self, sig: &[u8; 64], msg: &[u8], pubkey: &XOnlyPublicKey) -> bool {
        // Can fail only if the input is not exact length.
        let Ok(sig) = schnorr::Signature::from_slice(sig) else {
            return false;
        };
        self.secp.verify_schnorr(&sig, msg, pubkey).is_ok()
    }
}
