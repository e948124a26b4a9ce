//! # k1verify
//!
//! Runs the secp256k1 gateway operations from the command line and prints
//! `true` or `false`.
pub mod cmd;
