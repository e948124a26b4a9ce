//! Boolean verification entry points.
//!
//! Every operation has the same shape: check buffer lengths, acquire the
//! shared context, parse each buffer, verify, and collapse the outcome to a
//! `bool`. Length checks always run before the context is touched or any
//! buffer is parsed.
//!
//! Each operation comes in three flavours:
//! * `validate_public_key` / `verify_ecdsa` / `verify_schnorr` return `bool` and
//!   are what the foreign boundary calls.
//! * `try_*` return the [`VerifyError`] that caused a rejection.
//! * `*_with` take the context provider explicitly.
use crate::{
    constants::{
        MESSAGE_HASH_LENGTH, PUBKEY_COMPRESSED_LENGTH, PUBKEY_UNCOMPRESSED_LENGTH,
        SIGNATURE_LENGTH, XONLY_PUBKEY_LENGTH,
    },
    context::get_context,
    BufferKind, ContextError, CurveBackend, VerifyError,
};
use tracing::trace;

/// Checks that `pubkey` is a well formed compressed (33 byte) or uncompressed
/// (65 byte) secp256k1 point. No signature is verified.
pub fn validate_public_key(pubkey: &[u8]) -> bool {
    outcome(try_validate_public_key(pubkey))
}

/// Verifies a compact ECDSA signature over a caller supplied 32 byte digest
/// under a 33 byte compressed public key. The message is not hashed here.
pub fn verify_ecdsa(msg32: &[u8], sig64: &[u8], pubkey33: &[u8]) -> bool {
    outcome(try_verify_ecdsa(msg32, sig64, pubkey33))
}

/// Verifies a BIP-340 signature over `msg`, which may have any length, under a
/// 32 byte x-only public key.
pub fn verify_schnorr(sig64: &[u8], msg: &[u8], pubkey32: &[u8]) -> bool {
    outcome(try_verify_schnorr(sig64, msg, pubkey32))
}

/// Fallible form of [`validate_public_key`].
pub fn try_validate_public_key(pubkey: &[u8]) -> Result<(), VerifyError> {
    validate_public_key_with(get_context, pubkey)
}

/// Fallible form of [`verify_ecdsa`].
pub fn try_verify_ecdsa(msg32: &[u8], sig64: &[u8], pubkey33: &[u8]) -> Result<(), VerifyError> {
    verify_ecdsa_with(get_context, msg32, sig64, pubkey33)
}

/// Fallible form of [`verify_schnorr`].
pub fn try_verify_schnorr(sig64: &[u8], msg: &[u8], pubkey32: &[u8]) -> Result<(), VerifyError> {
    verify_schnorr_with(get_context, sig64, msg, pubkey32)
}

/// [`try_validate_public_key`] against the context returned by `context`.
///
/// `context` is only called once the length check has passed.
pub fn validate_public_key_with<'c, B: CurveBackend>(
    context: impl FnOnce() -> Result<&'c B, ContextError>,
    pubkey: &[u8],
) -> Result<(), VerifyError> {
    if !matches!(
        pubkey.len(),
        PUBKEY_COMPRESSED_LENGTH | PUBKEY_UNCOMPRESSED_LENGTH
    ) {
        return Err(shape(BufferKind::PublicKey, pubkey));
    }

    let backend = context()?;
    backend
        .parse_public_key(pubkey)
        .map(drop)
        .ok_or(VerifyError::Encoding(BufferKind::PublicKey))
}

/// [`try_verify_ecdsa`] against the context returned by `context`.
///
/// All three lengths are checked before `context` is called.
pub fn verify_ecdsa_with<'c, B: CurveBackend>(
    context: impl FnOnce() -> Result<&'c B, ContextError>,
    msg32: &[u8],
    sig64: &[u8],
    pubkey33: &[u8],
) -> Result<(), VerifyError> {
    let msg = fixed::<MESSAGE_HASH_LENGTH>(BufferKind::MessageHash, msg32)?;
    let sig = fixed::<SIGNATURE_LENGTH>(BufferKind::Signature, sig64)?;
    // Compressed only, matching the on-chain encoding.
    let pubkey = fixed::<PUBKEY_COMPRESSED_LENGTH>(BufferKind::PublicKey, pubkey33)?;

    let backend = context()?;
    let pubkey = backend
        .parse_public_key(pubkey)
        .ok_or(VerifyError::Encoding(BufferKind::PublicKey))?;
    let sig = backend
        .parse_compact_signature(sig)
        .ok_or(VerifyError::Encoding(BufferKind::Signature))?;

    if backend.verify_ecdsa(msg, &sig, &pubkey) {
        Ok(())
    } else {
        Err(VerifyError::Cryptographic)
    }
}

/// [`try_verify_schnorr`] against the context returned by `context`.
///
/// Signature and key lengths are checked before `context` is called. `msg`
/// is unconstrained.
pub fn verify_schnorr_with<'c, B: CurveBackend>(
    context: impl FnOnce() -> Result<&'c B, ContextError>,
    sig64: &[u8],
    msg: &[u8],
    pubkey32: &[u8],
) -> Result<(), VerifyError> {
    let sig = fixed::<SIGNATURE_LENGTH>(BufferKind::Signature, sig64)?;
    let pubkey = fixed::<XONLY_PUBKEY_LENGTH>(BufferKind::XOnlyPublicKey, pubkey32)?;

    let backend = context()?;
    let pubkey = backend
        .parse_xonly_public_key(pubkey)
        .ok_or(VerifyError::Encoding(BufferKind::XOnlyPublicKey))?;

    if backend.verify_schnorr(sig, msg, &pubkey) {
        Ok(())
    } else {
        Err(VerifyError::Cryptographic)
    }
}

#[inline]
fn fixed<const N: usize>(buffer: BufferKind, bytes: &[u8]) -> Result<&[u8; N], VerifyError> {
    bytes.try_into().map_err(|_| shape(buffer, bytes))
}

#[inline]
fn shape(buffer: BufferKind, bytes: &[u8]) -> VerifyError {
    VerifyError::Shape {
        buffer,
        len: bytes.len(),
    }
}

fn outcome(res: Result<(), VerifyError>) -> bool {
    match res {
        Ok(()) => true,
        Err(err) => {
            trace!(%err, "verification rejected");
            false
        }
    }
}
