//! JNI entry points for `scalus.crypto.Secp256k1Context` and
//! `scalus.crypto.NativeSecp256k1`.
//!
//! Array lengths are read and checked before any elements are borrowed.
//! Elements are borrowed with [`ReleaseMode::NoCopyBack`] and released by the
//! [`AutoElements`] guard when it drops, so every exit path, including a borrow
//! failing after an earlier one succeeded, gives the views back to the JVM.
use crate::boundary;
use core::{ptr, slice};
use gateway::constants::{
    MESSAGE_HASH_LENGTH, PUBKEY_COMPRESSED_LENGTH, PUBKEY_UNCOMPRESSED_LENGTH, SIGNATURE_LENGTH,
    XONLY_PUBKEY_LENGTH,
};
use jni::{
    objects::{AutoElements, JByteArray, JClass, ReleaseMode},
    sys::{jboolean, jbyte, jlong, JNI_FALSE, JNI_TRUE},
    JNIEnv,
};

/// `Secp256k1Context.secp256k1_init_context()`: address of the process-wide
/// context, or `0` if it is unavailable. The managed side keeps `-1` for a
/// library that failed to load.
#[no_mangle]
pub extern "system" fn Java_scalus_crypto_Secp256k1Context_secp256k1_1init_1context<'local>(
    _env: JNIEnv<'local>,
    _class: JClass<'local>,
) -> jlong {
    boundary(0, || context_handle(gateway::init_context()))
}

/// `NativeSecp256k1.isValidPubKey(byte[])`.
#[no_mangle]
pub extern "system" fn Java_scalus_crypto_NativeSecp256k1_isValidPubKey<'local>(
    mut env: JNIEnv<'local>,
    _class: JClass<'local>,
    pubkey: JByteArray<'local>,
) -> jboolean {
    to_jboolean(boundary(false, || is_valid_pubkey(&mut env, &pubkey)))
}

/// `NativeSecp256k1.ecdsaVerify(byte[], byte[], byte[])`.
#[no_mangle]
pub extern "system" fn Java_scalus_crypto_NativeSecp256k1_ecdsaVerify<'local>(
    mut env: JNIEnv<'local>,
    _class: JClass<'local>,
    msg32: JByteArray<'local>,
    sig64: JByteArray<'local>,
    pubkey33: JByteArray<'local>,
) -> jboolean {
    to_jboolean(boundary(false, || {
        ecdsa_verify(&mut env, &msg32, &sig64, &pubkey33)
    }))
}

/// `NativeSecp256k1.schnorrVerify(byte[], byte[], byte[])`.
#[no_mangle]
pub extern "system" fn Java_scalus_crypto_NativeSecp256k1_schnorrVerify<'local>(
    mut env: JNIEnv<'local>,
    _class: JClass<'local>,
    sig64: JByteArray<'local>,
    msg: JByteArray<'local>,
    pubkey32: JByteArray<'local>,
) -> jboolean {
    to_jboolean(boundary(false, || {
        schnorr_verify(&mut env, &sig64, &msg, &pubkey32)
    }))
}

fn is_valid_pubkey(env: &mut JNIEnv<'_>, pubkey: &JByteArray<'_>) -> bool {
    if !matches!(
        array_len(env, pubkey),
        Some(PUBKEY_COMPRESSED_LENGTH | PUBKEY_UNCOMPRESSED_LENGTH)
    ) {
        return false;
    }

    let Some(pubkey) = borrow(env, pubkey) else {
        return false;
    };
    gateway::validate_public_key(as_bytes(&pubkey))
}

fn ecdsa_verify(
    env: &mut JNIEnv<'_>,
    msg32: &JByteArray<'_>,
    sig64: &JByteArray<'_>,
    pubkey33: &JByteArray<'_>,
) -> bool {
    if array_len(env, msg32) != Some(MESSAGE_HASH_LENGTH)
        || array_len(env, sig64) != Some(SIGNATURE_LENGTH)
        || array_len(env, pubkey33) != Some(PUBKEY_COMPRESSED_LENGTH)
    {
        return false;
    }

    let Some(views) = borrow_each([msg32, sig64, pubkey33], |array| borrow(env, array)) else {
        return false;
    };
    let [msg, sig, pubkey] = views.as_slice() else {
        return false;
    };
    gateway::verify_ecdsa(as_bytes(msg), as_bytes(sig), as_bytes(pubkey))
}

fn schnorr_verify(
    env: &mut JNIEnv<'_>,
    sig64: &JByteArray<'_>,
    msg: &JByteArray<'_>,
    pubkey32: &JByteArray<'_>,
) -> bool {
    if array_len(env, sig64) != Some(SIGNATURE_LENGTH)
        || array_len(env, pubkey32) != Some(XONLY_PUBKEY_LENGTH)
    {
        return false;
    }
    let Some(msg_len) = array_len(env, msg) else {
        return false;
    };

    let Some(views) = borrow_each([sig64, pubkey32], |array| borrow(env, array)) else {
        return false;
    };
    let [sig, pubkey] = views.as_slice() else {
        return false;
    };
    // Some JVMs hand out a null pointer for an empty array, which the borrow
    // reports as an error; an empty message needs no view.
    if msg_len == 0 {
        return gateway::verify_schnorr(as_bytes(sig), &[], as_bytes(pubkey));
    }
    let Some(msg) = borrow(env, msg) else {
        return false;
    };
    gateway::verify_schnorr(as_bytes(sig), as_bytes(&msg), as_bytes(pubkey))
}

/// Length of a Java array, `None` for a null reference or a failed lookup.
fn array_len(env: &JNIEnv<'_>, array: &JByteArray<'_>) -> Option<usize> {
    if array.is_null() {
        return None;
    }
    env.get_array_length(array)
        .ok()
        .and_then(|len| usize::try_from(len).ok())
}

/// Borrows `arrays` in order and stops at the first failure: a failed borrow
/// may leave a Java exception pending, and no further JNI call is allowed then.
/// Views taken before the failure are released as the partial `Vec` drops.
fn borrow_each<A, G>(
    arrays: impl IntoIterator<Item = A>,
    borrow: impl FnMut(A) -> Option<G>,
) -> Option<Vec<G>> {
    arrays.into_iter().map(borrow).collect()
}

fn borrow<'local, 'other, 'array>(
    env: &mut JNIEnv<'local>,
    array: &'array JByteArray<'other>,
) -> Option<AutoElements<'local, 'other, 'array, jbyte>> {
    // SAFETY: the elements are only read, and nothing else touches the array
    // through JNI while the guard is alive.
    unsafe { env.get_array_elements(array, ReleaseMode::NoCopyBack) }.ok()
}

fn as_bytes<'a>(elements: &'a AutoElements<'_, '_, '_, jbyte>) -> &'a [u8] {
    let elements: &[jbyte] = elements;
    // SAFETY: `jbyte` is `i8`, which has the size and alignment of `u8`.
    unsafe { slice::from_raw_parts(elements.as_ptr().cast::<u8>(), elements.len()) }
}

fn context_handle<C>(ctx: Option<&C>) -> jlong {
    ctx.map_or(0, |ctx| ptr::from_ref(ctx) as usize as jlong)
}

fn to_jboolean(value: bool) -> jboolean {
    if value {
        JNI_TRUE
    } else {
        JNI_FALSE
    }
}
