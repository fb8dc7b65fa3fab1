//! # Bliss
//!
//! A pure Rust implementation of the BLISS-B lattice-based signature
//! scheme.
//!
//! ## Features
//!
//! - `std` (default): Enable standard library support
//!
//! ## Example
//!
//! ```ignore
//! use bliss::bliss_b::{BlissB1, Entropy};
//! use bliss::traits::Signer;
//!
//! let mut entropy = Entropy::new(&seed)?;
//! let (sk, pk) = BlissB1::keygen(&mut entropy)?;
//! let sig = BlissB1::sign(&sk, message, &mut entropy)?;
//! BlissB1::verify(&pk, message, &sig)?;
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

pub use bliss_core::{Entropy, Error, Result};

/// Core traits for signature schemes.
pub mod traits {
    pub use bliss_core::traits::Signer;
}

/// The BLISS-B signature scheme.
pub mod bliss_b {
    pub use ::bliss_b::*;
}
