//! Property-based tests for BLISS-B using proptest.
//!
//! These tests verify fundamental properties across random seeds:
//! - Roundtrip: sign followed by verify succeeds
//! - Transform: INTT inverts NTT on random ring elements
//! - Sparsity: uniform polynomials have the exact coefficient counts
//! - Encoding: serialization round trips bit for bit
//! - Tampered message: verification of a modified message fails

use proptest::prelude::*;

use bliss_b::poly::{uniform_poly, Poly};
use bliss_b::{Entropy, PrivateKey, Signature};

/// Arbitrary 64-byte entropy seeds.
fn arb_seed() -> impl Strategy<Value = [u8; 64]> {
    prop::collection::vec(any::<u8>(), 64).prop_map(|v| {
        let mut seed = [0u8; 64];
        seed.copy_from_slice(&v);
        seed
    })
}

/// Arbitrary messages (0-256 bytes).
fn arb_message() -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(any::<u8>(), 0..256)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(8))]

    /// Sign then verify succeeds, for a random version each run.
    #[test]
    fn roundtrip(seed in arb_seed(), message in arb_message(), version in 0u8..5) {
        let mut e = Entropy::new(&seed).unwrap();
        let key = PrivateKey::generate(version, &mut e).unwrap();
        let pk = key.public_key();
        let sig = key.sign(&message, &mut e).unwrap();
        prop_assert!(pk.verify(&message, &sig).is_ok());
    }

    /// Verification with a tampered message fails.
    #[test]
    fn tampered_message_fails(
        seed in arb_seed(),
        message in arb_message(),
        flip_pos in 0usize..256,
        version in 0u8..5,
    ) {
        prop_assume!(!message.is_empty());
        let mut e = Entropy::new(&seed).unwrap();
        let key = PrivateKey::generate(version, &mut e).unwrap();
        let pk = key.public_key();
        let sig = key.sign(&message, &mut e).unwrap();

        let mut tampered = message.clone();
        let pos = flip_pos % tampered.len();
        tampered[pos] ^= 0xFF;
        prop_assert!(pk.verify(&tampered, &sig).is_err());
    }

    /// Signature encoding round trips bit for bit.
    #[test]
    fn signature_encoding_roundtrip(seed in arb_seed(), version in 0u8..5) {
        let mut e = Entropy::new(&seed).unwrap();
        let key = PrivateKey::generate(version, &mut e).unwrap();
        let sig = key.sign(b"encoding", &mut e).unwrap();
        let blob = sig.serialize().unwrap();
        let back = Signature::deserialize(&blob).unwrap();
        prop_assert_eq!(blob, back.serialize().unwrap());
    }

    /// Private-key encoding round trips and reconstructs the same public
    /// element.
    #[test]
    fn private_key_encoding_roundtrip(seed in arb_seed(), version in 0u8..5) {
        let mut e = Entropy::new(&seed).unwrap();
        let key = PrivateKey::generate(version, &mut e).unwrap();
        let blob = key.serialize().unwrap();
        let back = PrivateKey::deserialize(&blob).unwrap();
        prop_assert_eq!(blob, back.serialize().unwrap());
        prop_assert_eq!(
            key.public_key().serialize().unwrap(),
            back.public_key().serialize().unwrap()
        );
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(16))]

    /// INTT(NTT(p)) = p for random ring elements of every profile.
    #[test]
    fn ntt_roundtrip(seed in arb_seed(), version in 0u8..5) {
        let mut e = Entropy::new(&seed).unwrap();
        let mut p = Poly::new(version).unwrap();
        let q = p.param().q;
        let n = p.param().n as usize;
        let coeffs: Vec<i32> = (0..n).map(|_| (e.uint16() as u32 % q) as i32).collect();
        p.set_coeffs(&coeffs).unwrap();
        let round = p.ntt().intt();
        prop_assert_eq!(round.coeffs(), p.coeffs());
    }

    /// Uniform polynomials carry exactly nz1 ones and nz2 twos.
    #[test]
    fn uniform_poly_exact_sparsity(seed in arb_seed(), version in 0u8..5) {
        let mut e = Entropy::new(&seed).unwrap();
        let p = uniform_poly(version, &mut e).unwrap();
        let ones = p.coeffs().iter().filter(|&&c| c.abs() == 1).count() as u32;
        let twos = p.coeffs().iter().filter(|&&c| c.abs() == 2).count() as u32;
        prop_assert_eq!(ones, p.param().nz1);
        prop_assert_eq!(twos, p.param().nz2);
        prop_assert!(p.coeffs().iter().all(|&c| c.abs() <= 2));
    }

    /// NTT-domain inversion is a pointwise inverse when it exists.
    #[test]
    fn ntt_inversion(seed in arb_seed()) {
        let mut e = Entropy::new(&seed).unwrap();
        let mut p = Poly::new(1).unwrap();
        let coeffs: Vec<i32> = (0..512).map(|_| (e.uint16() % 12289) as i32).collect();
        p.set_coeffs(&coeffs).unwrap();
        let t = p.ntt();
        if let Ok(inv) = t.invert_as_ntt() {
            let mut prod = t.clone();
            prod.mul_mod_q(&inv).unwrap();
            prop_assert!(prod.coeffs().iter().all(|&c| c == 1));
        }
    }
}
