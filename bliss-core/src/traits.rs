//! Signature-scheme trait.

use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::{Entropy, Result};

/// Digital signature trait for deterministic, entropy-driven schemes.
///
/// Unlike RNG-driven schemes, every randomized operation takes an explicit
/// [`Entropy`] stream: the same seed yields the same keys and the same
/// signatures byte for byte. Callers wanting fresh randomness build the
/// stream with [`Entropy::from_rng`].
///
/// # Example
///
/// ```ignore
/// use bliss_b::{BlissB1, Entropy};
/// use bliss_core::traits::Signer;
///
/// let mut entropy = Entropy::new(&seed)?;
/// let (sk, pk) = BlissB1::keygen(&mut entropy)?;
/// let sig = BlissB1::sign(&sk, message, &mut entropy)?;
/// BlissB1::verify(&pk, message, &sig)?;
/// ```
pub trait Signer {
    /// Signing key (private key).
    type SigningKey: Zeroize + ZeroizeOnDrop;

    /// Verification key (public key).
    type VerificationKey: Clone;

    /// Signature produced by signing.
    type Signature: Clone;

    /// Serialized signing key size in bytes.
    const SIGNING_KEY_SIZE: usize;

    /// Serialized verification key size in bytes.
    const VERIFICATION_KEY_SIZE: usize;

    /// Generate a new key pair from the entropy stream.
    ///
    /// # Errors
    /// Key generation may fail if no invertible secret polynomial is found
    /// within the attempt budget.
    fn keygen(entropy: &mut Entropy) -> Result<(Self::SigningKey, Self::VerificationKey)>;

    /// Sign a message.
    ///
    /// # Errors
    /// Signing fails only on the arithmetic impossibility of the rejection
    /// step; restarts are internal.
    fn sign(
        sk: &Self::SigningKey,
        message: &[u8],
        entropy: &mut Entropy,
    ) -> Result<Self::Signature>;

    /// Sign a message through the side-channel-hardened path.
    ///
    /// # Errors
    /// Same failure surface as [`Self::sign`].
    fn sign_against_side_channel(
        sk: &Self::SigningKey,
        message: &[u8],
        entropy: &mut Entropy,
    ) -> Result<Self::Signature>;

    /// Verify a signature.
    ///
    /// # Errors
    /// `Ok(())` if the signature is valid; otherwise the error names the
    /// reject reason (version mismatch, norm bound, challenge mismatch).
    fn verify(
        pk: &Self::VerificationKey,
        message: &[u8],
        signature: &Self::Signature,
    ) -> Result<()>;
}
