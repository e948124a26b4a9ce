//! # secp256k1-gateway
//!
//! secp256k1 public key validation, ECDSA and BIP-340 Schnorr verification
//! behind a boolean-only boundary, backed by one process-wide verification
//! context.
//!
//! Malformed input, failed parsing, a failed verification equation and a
//! missing context all produce `false`; nothing panics or errors across the
//! boolean entry points.
#![cfg_attr(not(test), warn(unused_crate_dependencies))]

pub mod backend;
pub mod constants;
pub mod context;
pub mod error;
pub mod gateway;

#[cfg(test)]
mod test_utils;

pub use backend::{CurveBackend, K256Backend, VerificationContext};
pub use context::{context_state, get_context, init_context, ContextCell, ContextState};
pub use error::{BufferKind, ContextError, VerifyError};
pub use gateway::{
    try_validate_public_key, try_verify_ecdsa, try_verify_schnorr, validate_public_key,
    validate_public_key_with, verify_ecdsa, verify_ecdsa_with, verify_schnorr,
    verify_schnorr_with,
};

#[cfg(feature = "secp256k1")]
pub use backend::Secp256k1Backend;
