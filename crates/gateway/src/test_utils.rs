//! Reference signatures produced with `k256`, independent of the selected backend.
use k256::{
    ecdsa::{signature::hazmat::PrehashSigner, Signature, SigningKey},
    schnorr,
};

/// Compressed secp256k1 generator point.
pub(crate) const G_COMPRESSED: [u8; 33] = [
    0x02, 0x79, 0xbe, 0x66, 0x7e, 0xf9, 0xdc, 0xbb, 0xac, 0x55, 0xa0, 0x62, 0x95, 0xce, 0x87,
    0x0b, 0x07, 0x02, 0x9b, 0xfc, 0xdb, 0x2d, 0xce, 0x28, 0xd9, 0x59, 0xf2, 0x81, 0x5b, 0x16,
    0xf8, 0x17, 0x98,
];

/// Uncompressed secp256k1 generator point.
pub(crate) const G_UNCOMPRESSED: [u8; 65] = [
    0x04, 0x79, 0xbe, 0x66, 0x7e, 0xf9, 0xdc, 0xbb, 0xac, 0x55, 0xa0, 0x62, 0x95, 0xce, 0x87,
    0x0b, 0x07, 0x02, 0x9b, 0xfc, 0xdb, 0x2d, 0xce, 0x28, 0xd9, 0x59, 0xf2, 0x81, 0x5b, 0x16,
    0xf8, 0x17, 0x98, 0x48, 0x3a, 0xda, 0x77, 0x26, 0xa3, 0xc4, 0x65, 0x5d, 0xa4, 0xfb, 0xfc,
    0x0e, 0x11, 0x08, 0xa8, 0xfd, 0x17, 0xb4, 0x48, 0xa6, 0x85, 0x54, 0x19, 0x9c, 0x47, 0xd0,
    0x8f, 0xfb, 0x10, 0xd4, 0xb8,
];

/// secp256k1 group order, big endian.
const CURVE_ORDER: [u8; 32] = [
    0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff,
    0xfe, 0xba, 0xae, 0xdc, 0xe6, 0xaf, 0x48, 0xa0, 0x3b, 0xbf, 0xd2, 0x5e, 0x8c, 0xd0, 0x36,
    0x41, 0x41,
];

const DEFAULT_KEY: [u8; 32] = [0x11; 32];

/// The gateway never hashes ECDSA messages; any 32 bytes are a digest.
fn digest(tag: &[u8]) -> [u8; 32] {
    let mut out = [0u8; 32];
    let len = tag.len().min(32);
    out[..len].copy_from_slice(&tag[..len]);
    out[31] ^= 0xa5;
    out
}

/// `(digest, compact signature, compressed key)` signed by the default key.
pub(crate) fn ecdsa_triple(tag: &[u8]) -> ([u8; 32], [u8; 64], [u8; 33]) {
    ecdsa_triple_with_key(&DEFAULT_KEY, tag)
}

pub(crate) fn ecdsa_triple_with_key(secret: &[u8; 32], tag: &[u8]) -> ([u8; 32], [u8; 64], [u8; 33]) {
    let key = SigningKey::from_slice(secret).unwrap();
    let msg = digest(tag);
    let sig: Signature = key.sign_prehash(&msg).unwrap();
    let pubkey = key.verifying_key().to_encoded_point(true);
    (
        msg,
        sig.to_bytes().as_slice().try_into().unwrap(),
        pubkey.as_bytes().try_into().unwrap(),
    )
}

pub(crate) fn ecdsa_uncompressed_key(secret: &[u8; 32]) -> [u8; 65] {
    let key = SigningKey::from_slice(secret).unwrap();
    key.verifying_key()
        .to_encoded_point(false)
        .as_bytes()
        .try_into()
        .unwrap()
}

/// `(signature, x-only key)` over `msg` with zeroed auxiliary randomness.
pub(crate) fn schnorr_triple(msg: &[u8]) -> ([u8; 64], [u8; 32]) {
    let key = schnorr::SigningKey::from_bytes(&DEFAULT_KEY).unwrap();
    let sig = key.sign_raw(msg, &[0u8; 32]).unwrap();
    (
        sig.to_bytes(),
        key.verifying_key().to_bytes().as_slice().try_into().unwrap(),
    )
}

pub(crate) fn flip_bit<const N: usize>(bytes: &[u8; N], bit: usize) -> [u8; N] {
    let mut out = *bytes;
    out[bit / 8] ^= 1 << (bit % 8);
    out
}

/// Replaces `s` with `n - s`, the malleated twin of a compact signature.
pub(crate) fn negate_s(sig: &[u8; 64]) -> [u8; 64] {
    let mut out = *sig;
    let mut borrow = 0i16;
    for i in (0..32).rev() {
        let mut diff = CURVE_ORDER[i] as i16 - sig[32 + i] as i16 - borrow;
        borrow = (diff < 0) as i16;
        if diff < 0 {
            diff += 256;
        }
        out[32 + i] = diff as u8;
    }
    out
}
