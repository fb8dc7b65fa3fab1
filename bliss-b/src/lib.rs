//! BLISS-B (Bimodal Lattice Signature Scheme) Implementation
//!
//! This crate provides a pure Rust implementation of the BLISS-B digital
//! signature scheme over the ring R_q = Z_q[x]/(x^n + 1), with the
//! deterministic SHA3-512 entropy stream and discrete Gaussian samplers
//! from `bliss-core`.
//!
//! # Supported Parameter Profiles
//!
//! | Version | Profile | n | q | Secret Key | Public Key |
//! |---------|-----------|-----|-------|------------|------------|
//! | 0 | BLISS-B-0 | 256 | 7681 | 193 bytes | 417 bytes |
//! | 1 | BLISS-B-I | 512 | 12289 | 385 bytes | 897 bytes |
//! | 2 | BLISS-B-II | 512 | 12289 | 385 bytes | 897 bytes |
//! | 3 | BLISS-B-III | 512 | 12289 | 385 bytes | 897 bytes |
//! | 4 | BLISS-B-IV | 512 | 12289 | 385 bytes | 897 bytes |
//!
//! Signatures are Huffman-compressed and therefore variable-length.
//!
//! # Example
//!
//! ```ignore
//! use bliss_b::{BlissB1, Entropy, Signer};
//!
//! let mut entropy = Entropy::new(&seed)?;
//! let (sk, pk) = BlissB1::keygen(&mut entropy)?;
//!
//! let message = b"Hello, lattice world!";
//! let signature = BlissB1::sign(&sk, message, &mut entropy)?;
//!
//! assert!(BlissB1::verify(&pk, message, &signature).is_ok());
//! ```
//!
//! # Security Note
//!
//! BLISS predates the NIST post-quantum standards and its Gaussian
//! rejection sampling is a known side-channel target; the hardened signing
//! path reduces but does not eliminate that exposure. Prefer ML-DSA for
//! new designs.

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

#[cfg(not(feature = "std"))]
extern crate alloc;

mod huffman_tables;
mod key;
mod ntt;
mod ntt_tables;
mod sign;
mod variants;

pub mod huffman;
pub mod params;
pub mod poly;

pub use key::{PrivateKey, PublicKey};
pub use params::{get_param, BlissBParam};
pub use sign::Signature;
pub use variants::{BlissB0, BlissB1, BlissB2, BlissB3, BlissB4};

pub use bliss_core::traits::Signer;
pub use bliss_core::{Entropy, Error, Result, Sampler, SEED_LEN};
