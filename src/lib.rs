//! Recovery of a secret from Lagrange shares diluted with decoys
//!
//! Every threshold-sized subset of the shares is interpolated at zero with
//! exact rational arithmetic, and the positive integer produced most often
//! is taken as the secret.

#[cfg(feature = "cli")]
pub mod cli;
pub mod codec;
pub mod combinations;
pub mod commands;
pub mod domain;
pub mod interpolate;
pub mod rational;
pub mod selector;
pub mod wasm;

pub use selector::{analyze, recover_secret};
