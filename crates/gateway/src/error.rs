//! Rejection reasons for the verification gateway.
//!
//! These never cross the boolean boundary: [`crate::verify_ecdsa`] and friends
//! collapse every variant to `false`. They exist so the `try_*` entry points,
//! logs and tests can tell the reasons apart.
use core::fmt;

/// Which caller buffer a rejection refers to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BufferKind {
    /// Compressed or uncompressed SEC1 public key.
    PublicKey,
    /// BIP-340 x-only public key.
    XOnlyPublicKey,
    /// 32-byte ECDSA message digest.
    MessageHash,
    /// 64-byte compact signature.
    Signature,
}

impl fmt::Display for BufferKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::PublicKey => "public key",
            Self::XOnlyPublicKey => "x-only public key",
            Self::MessageHash => "message hash",
            Self::Signature => "signature",
        };
        f.write_str(s)
    }
}

/// The process-wide verification context could not be built.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ContextError {
    /// The curve library panicked while building the context.
    #[error("verification context construction panicked")]
    Panicked,
    /// The backend refused to build a context.
    #[error("verification context unavailable: {0}")]
    Unavailable(String),
}

/// Why a verification call returned `false`.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum VerifyError {
    /// Buffer length does not match the shape the operation expects.
    #[error("{buffer} has invalid length {len}")]
    Shape {
        /// Offending buffer.
        buffer: BufferKind,
        /// Length that was supplied.
        len: usize,
    },
    /// Buffer has the right length but does not decode.
    #[error("{0} is not a valid encoding")]
    Encoding(BufferKind),
    /// Everything decoded but the verification equation does not hold.
    #[error("signature verification failed")]
    Cryptographic,
    /// No verification context is available.
    #[error(transparent)]
    Context(#[from] ContextError),
}

impl VerifyError {
    /// Returns `true` if the input was rejected on length alone.
    pub fn is_shape(&self) -> bool {
        matches!(self, Self::Shape { .. })
    }
}
