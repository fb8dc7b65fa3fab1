//! BLISS-B key pairs: generation, extraction, binary encodings.
//!
//! The private key holds the sparse secret pair (s1, s2) together with the
//! public ring element a = NTT(-s2/s1 mod q), cached so signing never
//! recomputes it. The public key is an independent read-only copy of a; a
//! is never mutated after generation.

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::huffman::{BitPacker, BitUnpacker};
use crate::params::{get_param, BlissBParam};
use crate::poly::{uniform_poly, Poly};
use bliss_core::{Entropy, Error, Result};

/// Attempts at drawing an invertible f before key generation gives up.
const KEYGEN_ATTEMPTS: u32 = 4;

/// BLISS-B private key.
pub struct PrivateKey {
    pub(crate) s1: Poly,
    pub(crate) s2: Poly,
    pub(crate) a: Poly,
}

/// BLISS-B public key: the ring element a in NTT domain.
#[derive(Clone)]
pub struct PublicKey {
    pub(crate) a: Poly,
}

/// Derive the cached public element a = NTT(-s2/s1 mod q).
///
/// `t` must be NTT(s2). Fails when NTT(s1) has a zero entry.
fn derive_a(t: &Poly, s1: &Poly) -> Result<Poly> {
    let u = s1.ntt().invert_as_ntt()?;
    let mut t = t.clone();
    t.mul_mod_q(&u)?;
    let mut t = t.intt();
    t.scalar_mul_mod_q(-1);
    Ok(t.ntt())
}

impl PrivateKey {
    /// Generate a key pair for a parameter version.
    ///
    /// Draws g, sets s2 = 2g - 1, then tries up to four times to draw an
    /// invertible f; the key is (s1, s2) = (f, 2g - 1) with the cached
    /// a = NTT(-s2/s1).
    ///
    /// # Errors
    /// [`Error::UnknownVersion`], or
    /// [`Error::RejectionBudgetExceeded`] after four non-invertible draws.
    pub fn generate(version: u8, entropy: &mut Entropy) -> Result<Self> {
        let mut s2 = uniform_poly(version, entropy)?;
        s2.scalar_mul(2);
        s2.data[0] -= 1;

        let t = s2.ntt();
        for _ in 0..KEYGEN_ATTEMPTS {
            let s1 = uniform_poly(version, entropy)?;
            match derive_a(&t, &s1) {
                Ok(a) => return Ok(PrivateKey { s1, s2, a }),
                Err(Error::NonInvertible) => {}
                Err(e) => return Err(e),
            }
        }
        s2.zeroize();
        Err(Error::RejectionBudgetExceeded {
            attempts: KEYGEN_ATTEMPTS,
        })
    }

    /// Extract the public key as an independent copy of a.
    #[must_use]
    pub fn public_key(&self) -> PublicKey {
        PublicKey { a: self.a.clone() }
    }

    /// The parameter profile of this key.
    #[must_use]
    pub fn param(&self) -> &'static BlissBParam {
        self.s1.param()
    }

    /// Serialize: `[version | 3-bit symbols]`.
    ///
    /// s1 coefficients map through +2, s2 through its halved form: the
    /// leading coefficient stores (s2[0] + 1)/2 + 2 and the rest s2[i]/2 + 2,
    /// undoing the 2g - 1 construction.
    ///
    /// # Errors
    /// Packer overflow cannot occur for valid keys; errors propagate.
    pub fn serialize(&self) -> Result<Vec<u8>> {
        let n = self.param().n as usize;
        let mut packer = BitPacker::new();
        for i in 0..n {
            packer.write_bits((self.s1.data[i] + 2) as u64, 3)?;
        }
        packer.write_bits(((self.s2.data[0] + 1) / 2 + 2) as u64, 3)?;
        for i in 1..n {
            packer.write_bits((self.s2.data[i] / 2 + 2) as u64, 3)?;
        }
        let mut out = Vec::with_capacity(1 + packer.data().len());
        out.push(self.param().version);
        out.extend_from_slice(packer.data());
        Ok(out)
    }

    /// Deserialize a private key and recompute the cached a.
    ///
    /// # Errors
    /// [`Error::MalformedEncoding`] for truncated data or out-of-range
    /// symbols, [`Error::UnknownVersion`] for a bad version byte,
    /// [`Error::NonInvertible`] when the stored s1 has no inverse.
    pub fn deserialize(data: &[u8]) -> Result<Self> {
        let &version = data
            .first()
            .ok_or(Error::MalformedEncoding("empty private key"))?;
        let param = get_param(version)?;
        let n = param.n as usize;

        let mut unpacker = BitUnpacker::new(&data[1..], 6 * param.n)?;
        let mut s1 = Poly::zero(param);
        let mut s2 = Poly::zero(param);
        for i in 0..n {
            let bits = unpacker.read_bits(3)?;
            if bits > 4 {
                return Err(Error::MalformedEncoding("private key symbol out of range"));
            }
            s1.data[i] = bits as i32 - 2;
        }
        let bits = unpacker.read_bits(3)?;
        if bits > 4 {
            return Err(Error::MalformedEncoding("private key symbol out of range"));
        }
        s2.data[0] = (bits as i32 - 2) * 2 - 1;
        for i in 1..n {
            let bits = unpacker.read_bits(3)?;
            if bits > 4 {
                return Err(Error::MalformedEncoding("private key symbol out of range"));
            }
            s2.data[i] = (bits as i32 - 2) * 2;
        }

        let t = s2.ntt();
        let a = derive_a(&t, &s1)?;
        Ok(PrivateKey { s1, s2, a })
    }
}

impl Zeroize for PrivateKey {
    fn zeroize(&mut self) {
        self.s1.zeroize();
        self.s2.zeroize();
        // a is public data but clearing it costs nothing
        self.a.zeroize();
    }
}

impl Drop for PrivateKey {
    fn drop(&mut self) {
        self.zeroize();
    }
}

impl ZeroizeOnDrop for PrivateKey {}

impl PublicKey {
    /// The parameter profile of this key.
    #[must_use]
    pub fn param(&self) -> &'static BlissBParam {
        self.a.param()
    }

    /// Serialize: `[version | q_bits x n of a]`.
    ///
    /// # Errors
    /// Packer overflow cannot occur for valid keys; errors propagate.
    pub fn serialize(&self) -> Result<Vec<u8>> {
        let param = self.param();
        let mut packer = BitPacker::new();
        for &c in self.a.coeffs() {
            packer.write_bits(c as u64, param.q_bits)?;
        }
        let mut out = Vec::with_capacity(1 + packer.data().len());
        out.push(param.version);
        out.extend_from_slice(packer.data());
        Ok(out)
    }

    /// Deserialize a public key.
    ///
    /// # Errors
    /// [`Error::MalformedEncoding`] for truncated data or coefficients
    /// outside [0, q), [`Error::UnknownVersion`] for a bad version byte.
    pub fn deserialize(data: &[u8]) -> Result<Self> {
        let &version = data
            .first()
            .ok_or(Error::MalformedEncoding("empty public key"))?;
        let param = get_param(version)?;
        let mut unpacker = BitUnpacker::new(&data[1..], param.q_bits * param.n)?;
        let mut a = Poly::zero(param);
        for i in 0..param.n as usize {
            let bits = unpacker.read_bits(param.q_bits)?;
            if bits >= u64::from(param.q) {
                return Err(Error::MalformedEncoding("public key coefficient out of range"));
            }
            a.data[i] = bits as i32;
        }
        Ok(PublicKey { a })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_seed() -> [u8; 64] {
        core::array::from_fn(|i| (i % 8) as u8)
    }

    #[test]
    fn generate_works_for_all_versions() {
        for v in 0..5u8 {
            let mut e = Entropy::new(&test_seed()).unwrap();
            let key = PrivateKey::generate(v, &mut e).unwrap();
            assert_eq!(key.param().version, v);
            // s1 keeps the sparse shape
            let ones = key.s1.coeffs().iter().filter(|&&c| c.abs() == 1).count() as u32;
            assert_eq!(ones, key.param().nz1);
            // s2 = 2g - 1: odd constant coefficient, even elsewhere
            assert_eq!(key.s2.coeffs()[0].rem_euclid(2), 1);
            assert!(key.s2.coeffs()[1..].iter().all(|&c| c % 2 == 0));
        }
    }

    /// Golden first coefficients of a for the byte-i%8 seed, captured from
    /// the reference computation.
    #[test]
    fn keygen_golden_vectors() {
        let mut e = Entropy::new(&test_seed()).unwrap();
        let key = PrivateKey::generate(0, &mut e).unwrap();
        assert_eq!(&key.a.coeffs()[..4], &[577, 2776, 2803, 5310]);
        assert_eq!(&key.s1.coeffs()[..8], &[0, -1, 1, 1, 0, -1, 0, 1]);

        let mut e = Entropy::new(&test_seed()).unwrap();
        let key = PrivateKey::generate(1, &mut e).unwrap();
        assert_eq!(&key.a.coeffs()[..4], &[1397, 9309, 4062, 5554]);
    }

    /// a must satisfy a * s1 = -s2 in R_q; this is the identity the whole
    /// protocol stands on.
    #[test]
    fn public_element_relation() {
        let mut e = Entropy::new(&test_seed()).unwrap();
        let key = PrivateKey::generate(1, &mut e).unwrap();
        let prod = key.s1.multiply_ntt(&key.a).unwrap();
        let q = key.param().q as i32;
        for (p, s) in prod.coeffs().iter().zip(key.s2.coeffs()) {
            assert_eq!((p + s).rem_euclid(q), 0);
        }
    }

    #[test]
    fn private_key_round_trip() {
        for v in 0..5u8 {
            let mut e = Entropy::new(&test_seed()).unwrap();
            let key = PrivateKey::generate(v, &mut e).unwrap();
            let blob = key.serialize().unwrap();
            let back = PrivateKey::deserialize(&blob).unwrap();
            assert_eq!(key.s1.coeffs(), back.s1.coeffs());
            assert_eq!(key.s2.coeffs(), back.s2.coeffs());
            assert_eq!(key.a.coeffs(), back.a.coeffs());
            // expected sizes: 1 + 6n/8
            assert_eq!(blob.len(), 1 + 6 * key.param().n as usize / 8);
        }
    }

    #[test]
    fn public_key_round_trip() {
        for v in 0..5u8 {
            let mut e = Entropy::new(&test_seed()).unwrap();
            let key = PrivateKey::generate(v, &mut e).unwrap();
            let pk = key.public_key();
            let blob = pk.serialize().unwrap();
            let back = PublicKey::deserialize(&blob).unwrap();
            assert_eq!(pk.a.coeffs(), back.a.coeffs());
            let param = key.param();
            let want = 1 + ((param.q_bits * param.n + 7) / 8) as usize;
            assert_eq!(blob.len(), want);
        }
    }

    #[test]
    fn deserialize_rejects_garbage() {
        assert!(PrivateKey::deserialize(&[]).is_err());
        assert!(PrivateKey::deserialize(&[9]).is_err());
        assert!(PrivateKey::deserialize(&[0, 1, 2]).is_err());
        assert!(PublicKey::deserialize(&[7, 0, 0]).is_err());
        // all-ones symbols are out of the [0, 4] range
        let bad = [&[0u8][..], &[0xFFu8; 192][..]].concat();
        assert!(matches!(
            PrivateKey::deserialize(&bad),
            Err(Error::MalformedEncoding(_))
        ));
    }
}
