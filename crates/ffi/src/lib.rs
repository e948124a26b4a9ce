//! # secp256k1-gateway-ffi
//!
//! Foreign entry points over [`gateway`]: a C ABI and, with the `jni` feature,
//! the native methods of the managed runtime bindings.
//!
//! No entry point unwinds into its caller. A panic below the boundary is
//! caught and reported as a failed verification.
#![cfg_attr(not(test), warn(unused_crate_dependencies))]

pub mod buffer;
pub mod c_api;
#[cfg(feature = "jni")]
pub mod java;

pub use buffer::RawBuffer;
pub use c_api::*;

use std::panic::{self, AssertUnwindSafe};
use tracing::error;

/// Runs `f`, returning `fallback` if it panics.
///
/// Nothing the gateway shares is left half-updated by a panic: the context is
/// either fully constructed or absent.
pub(crate) fn boundary<T>(fallback: T, f: impl FnOnce() -> T) -> T {
    panic::catch_unwind(AssertUnwindSafe(f)).unwrap_or_else(|_| {
        error!("panic caught at the foreign boundary");
        fallback
    })
}
