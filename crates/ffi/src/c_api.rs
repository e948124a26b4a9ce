//! C ABI entry points.
//!
//! Every buffer is passed as a `(pointer, length)` pair. Lengths are checked
//! before any view over the memory is formed, and no view outlives the call.
use crate::{boundary, RawBuffer};
use core::{ffi::c_void, ptr};
use gateway::constants::{
    MESSAGE_HASH_LENGTH, PUBKEY_COMPRESSED_LENGTH, PUBKEY_UNCOMPRESSED_LENGTH, SIGNATURE_LENGTH,
    XONLY_PUBKEY_LENGTH,
};

/// Builds the process-wide verification context if needed and returns its
/// address as an opaque handle, or null if it could not be built.
///
/// The handle stays valid for the life of the process and must not be freed.
#[no_mangle]
pub extern "C" fn secp256k1_gateway_init_context() -> *const c_void {
    boundary(ptr::null(), || {
        gateway::init_context().map_or(ptr::null(), |ctx| ptr::from_ref(ctx).cast())
    })
}

/// Returns `true` if `pubkey` is a valid 33 or 65 byte SEC1 public key.
///
/// # Safety
///
/// `pubkey` must be null or point to `pubkey_len` readable bytes.
#[no_mangle]
pub unsafe extern "C" fn secp256k1_gateway_is_valid_pubkey(
    pubkey: *const u8,
    pubkey_len: usize,
) -> bool {
    if !matches!(
        pubkey_len,
        PUBKEY_COMPRESSED_LENGTH | PUBKEY_UNCOMPRESSED_LENGTH
    ) {
        return false;
    }

    boundary(false, || {
        // SAFETY: forwarded caller contract.
        let Some(pubkey) = (unsafe { RawBuffer::from_raw(pubkey, pubkey_len) }) else {
            return false;
        };
        gateway::validate_public_key(pubkey.as_slice())
    })
}

/// Verifies a compact ECDSA signature over a 32 byte digest under a 33 byte
/// compressed public key.
///
/// # Safety
///
/// Each pointer must be null or point to the matching number of readable bytes.
#[no_mangle]
pub unsafe extern "C" fn secp256k1_gateway_ecdsa_verify(
    msg32: *const u8,
    msg32_len: usize,
    sig64: *const u8,
    sig64_len: usize,
    pubkey33: *const u8,
    pubkey33_len: usize,
) -> bool {
    if msg32_len != MESSAGE_HASH_LENGTH
        || sig64_len != SIGNATURE_LENGTH
        || pubkey33_len != PUBKEY_COMPRESSED_LENGTH
    {
        return false;
    }

    boundary(false, || {
        // SAFETY: forwarded caller contract.
        let views = unsafe {
            (
                RawBuffer::from_raw(msg32, msg32_len),
                RawBuffer::from_raw(sig64, sig64_len),
                RawBuffer::from_raw(pubkey33, pubkey33_len),
            )
        };
        let (Some(msg), Some(sig), Some(pubkey)) = views else {
            return false;
        };
        gateway::verify_ecdsa(msg.as_slice(), sig.as_slice(), pubkey.as_slice())
    })
}

/// Verifies a BIP-340 signature over a message of any length under a 32 byte
/// x-only public key. `msg` may be null when `msg_len` is zero.
///
/// # Safety
///
/// Each pointer must be null or point to the matching number of readable bytes.
#[no_mangle]
pub unsafe extern "C" fn secp256k1_gateway_schnorr_verify(
    sig64: *const u8,
    sig64_len: usize,
    msg: *const u8,
    msg_len: usize,
    pubkey32: *const u8,
    pubkey32_len: usize,
) -> bool {
    if sig64_len != SIGNATURE_LENGTH || pubkey32_len != XONLY_PUBKEY_LENGTH {
        return false;
    }

    boundary(false, || {
        // SAFETY: forwarded caller contract.
        let views = unsafe {
            (
                RawBuffer::from_raw(sig64, sig64_len),
                RawBuffer::from_raw(msg, msg_len),
                RawBuffer::from_raw(pubkey32, pubkey32_len),
            )
        };
        let (Some(sig), Some(msg), Some(pubkey)) = views else {
            return false;
        };
        gateway::verify_schnorr(sig.as_slice(), msg.as_slice(), pubkey.as_slice())
    })
}
