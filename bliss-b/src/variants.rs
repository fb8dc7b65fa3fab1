//! Per-profile marker types implementing the [`Signer`] trait.

use rand_core::CryptoRng;

use crate::key::{PrivateKey, PublicKey};
use crate::sign::Signature;
use bliss_core::traits::Signer;
use bliss_core::{Entropy, Result};

/// Generate the marker type and trait impl for one parameter profile.
macro_rules! define_variant {
    (
        $(#[$doc:meta])*
        $name:ident, version: $version:expr, sk_size: $sk_size:expr, pk_size: $pk_size:expr
    ) => {
        $(#[$doc])*
        pub struct $name;

        impl Signer for $name {
            type SigningKey = PrivateKey;
            type VerificationKey = PublicKey;
            type Signature = Signature;

            const SIGNING_KEY_SIZE: usize = $sk_size;
            const VERIFICATION_KEY_SIZE: usize = $pk_size;

            fn keygen(entropy: &mut Entropy) -> Result<(PrivateKey, PublicKey)> {
                let sk = PrivateKey::generate($version, entropy)?;
                let pk = sk.public_key();
                Ok((sk, pk))
            }

            fn sign(sk: &PrivateKey, message: &[u8], entropy: &mut Entropy) -> Result<Signature> {
                sk.sign(message, entropy)
            }

            fn sign_against_side_channel(
                sk: &PrivateKey,
                message: &[u8],
                entropy: &mut Entropy,
            ) -> Result<Signature> {
                sk.sign_against_side_channel(message, entropy)
            }

            fn verify(pk: &PublicKey, message: &[u8], signature: &Signature) -> Result<()> {
                pk.verify(message, signature)
            }
        }

        impl $name {
            /// Generate a key pair with an entropy stream seeded from the
            /// provided RNG.
            ///
            /// # Errors
            /// Propagates key-generation failures.
            pub fn keygen_with_rng(
                rng: &mut impl CryptoRng,
            ) -> Result<(PrivateKey, PublicKey)> {
                let mut entropy = Entropy::from_rng(rng)?;
                Self::keygen(&mut entropy)
            }
        }
    };
}

define_variant! {
    /// BLISS-B-0: the toy profile with n = 256, q = 7681.
    BlissB0, version: 0, sk_size: 193, pk_size: 417
}

define_variant! {
    /// BLISS-B-I: n = 512, q = 12289, targeting 128-bit classical security.
    BlissB1, version: 1, sk_size: 385, pk_size: 897
}

define_variant! {
    /// BLISS-B-II: the compact variant of B-I (smaller signatures, same
    /// key distribution).
    BlissB2, version: 2, sk_size: 385, pk_size: 897
}

define_variant! {
    /// BLISS-B-III: n = 512, targeting 160-bit classical security.
    BlissB3, version: 3, sk_size: 385, pk_size: 897
}

define_variant! {
    /// BLISS-B-IV: n = 512, targeting 192-bit classical security.
    BlissB4, version: 4, sk_size: 385, pk_size: 897
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_seed() -> [u8; 64] {
        core::array::from_fn(|i| (i % 8) as u8)
    }

    #[test]
    fn trait_round_trip() {
        let mut e = Entropy::new(&test_seed()).unwrap();
        let (sk, pk) = BlissB1::keygen(&mut e).unwrap();
        let sig = BlissB1::sign(&sk, b"trait api", &mut e).unwrap();
        BlissB1::verify(&pk, b"trait api", &sig).unwrap();
    }

    #[test]
    fn declared_sizes_match_serialization() {
        let mut e = Entropy::new(&test_seed()).unwrap();
        let (sk, pk) = BlissB0::keygen(&mut e).unwrap();
        assert_eq!(sk.serialize().unwrap().len(), BlissB0::SIGNING_KEY_SIZE);
        assert_eq!(pk.serialize().unwrap().len(), BlissB0::VERIFICATION_KEY_SIZE);

        let mut e = Entropy::new(&test_seed()).unwrap();
        let (sk, pk) = BlissB4::keygen(&mut e).unwrap();
        assert_eq!(sk.serialize().unwrap().len(), BlissB4::SIGNING_KEY_SIZE);
        assert_eq!(pk.serialize().unwrap().len(), BlissB4::VERIFICATION_KEY_SIZE);
    }

    #[test]
    fn keygen_with_rng_produces_working_keys() {
        let mut rng = rand::rng();
        let (sk, pk) = BlissB2::keygen_with_rng(&mut rng).unwrap();
        let mut e = Entropy::from_rng(&mut rng).unwrap();
        let sig = sk.sign(b"rng seeded", &mut e).unwrap();
        pk.verify(b"rng seeded", &sig).unwrap();
    }
}
