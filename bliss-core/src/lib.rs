//! Core primitives shared by the BLISS-B signature crates.
//!
//! This crate carries the pieces of the engine that do not depend on a
//! particular parameter profile:
//!
//! - [`Error`] / [`Result`]: the error vocabulary of the whole workspace
//! - [`Entropy`]: the deterministic SHA3-512 entropy stream
//! - [`Sampler`]: discrete Gaussian samplers over the integers, including
//!   the constant-time and split variants used by the hardened signing path
//! - [`traits::Signer`]: the signature-scheme trait implemented by the
//!   per-profile marker types in `bliss-b`

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(unsafe_code)]
#![warn(missing_docs, clippy::pedantic)]
#![allow(
    clippy::many_single_char_names,
    clippy::similar_names,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_possible_wrap,
    clippy::module_name_repetitions
)]

mod entropy;
mod error;
mod sampler;
mod tables;

pub mod traits;

pub use entropy::{Entropy, SEED_LEN};
pub use error::{Error, Result};
pub use sampler::Sampler;
