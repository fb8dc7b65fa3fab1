//! The five BLISS-B parameter profiles.
//!
//! Profiles are immutable static data; everything else in the crate takes a
//! `&'static BlissBParam` and reads from it. Versions 1..=4 correspond to
//! the classical BLISS-B I..IV security levels; version 0 is the toy
//! profile with n = 256.

use crate::huffman::HuffmanCode;
use crate::huffman_tables;
use crate::ntt_tables;
use bliss_core::{Error, Result};

/// One immutable BLISS-B parameter profile.
pub struct BlissBParam {
    /// Profile version in {0, 1, 2, 3, 4}.
    pub version: u8,
    /// Ring degree, a power of two.
    pub n: u32,
    /// Odd prime modulus of the ring.
    pub q: u32,
    /// ceil(log2 n).
    pub n_bits: u32,
    /// ceil(log2 q).
    pub q_bits: u32,
    /// Dropped low bits in the signature compression.
    pub d: u32,
    /// Reduced modulus 2q / 2^d of the compressed half.
    pub modp: u32,
    /// Challenge Hamming weight.
    pub kappa: u32,
    /// Max allowed infinity norm of a signature.
    pub binf: u32,
    /// Max allowed squared L2 norm of a signature.
    pub bl2: u32,
    /// Count of +-1 coefficients in the secret polynomials.
    pub nz1: u32,
    /// Count of +-2 coefficients in the secret polynomials.
    pub nz2: u32,
    /// Huffman z2 alphabet half-width, 1 + (binf >> d).
    pub nbz2: u32,
    /// Gaussian standard deviation.
    pub sigma: u32,
    /// Bernoulli table row count.
    pub ell: u32,
    /// Bernoulli table precision in bits, a multiple of 8.
    pub prec: u32,
    /// GreedySC squared-norm ceiling for the rejection step.
    pub m: u32,
    /// 2^-1 mod q, the lift factor from R_q into R_2q used by signing.
    pub one_q2: u32,
    /// Powers of the primitive 2n-th root of unity, psi^i mod q.
    pub psi: &'static [i32],
    /// Inverse-transform table, (-n^-1 psi^i) mod q.
    pub r_psi: &'static [i32],
    /// Huffman codebook for signature compression.
    pub code: &'static HuffmanCode,
}

/// BLISS-B-0 (toy, n = 256).
static BLISS_B_0: BlissBParam = BlissBParam {
    version: 0,
    n: 256,
    q: 7681,
    n_bits: 8,
    q_bits: 13,
    d: 5,
    modp: 480,
    kappa: 12,
    binf: 530,
    bl2: 2492 * 2492,
    nz1: 141,
    nz2: 39,
    nbz2: 17,
    sigma: 100,
    ell: 20,
    prec: 128,
    m: 17929,
    one_q2: 3841,
    psi: &ntt_tables::PSI_256,
    r_psi: &ntt_tables::RPSI_256,
    code: &huffman_tables::HUFFMAN_B0,
};

/// BLISS-B-I (128-bit classical security target).
static BLISS_B_1: BlissBParam = BlissBParam {
    version: 1,
    n: 512,
    q: 12289,
    n_bits: 9,
    q_bits: 14,
    d: 10,
    modp: 24,
    kappa: 23,
    binf: 2100,
    bl2: 12872 * 12872,
    nz1: 154,
    nz2: 0,
    nbz2: 3,
    sigma: 215,
    ell: 22,
    prec: 128,
    m: 17918,
    one_q2: 6145,
    psi: &ntt_tables::PSI_512,
    r_psi: &ntt_tables::RPSI_512,
    code: &huffman_tables::HUFFMAN_B1,
};

/// BLISS-B-II (compact variant of B-I).
static BLISS_B_2: BlissBParam = BlissBParam {
    version: 2,
    n: 512,
    q: 12289,
    n_bits: 9,
    q_bits: 14,
    d: 10,
    modp: 24,
    kappa: 23,
    binf: 1563,
    bl2: 11074 * 11074,
    nz1: 154,
    nz2: 0,
    nbz2: 2,
    sigma: 107,
    ell: 22,
    prec: 128,
    m: 17918,
    one_q2: 6145,
    psi: &ntt_tables::PSI_512,
    r_psi: &ntt_tables::RPSI_512,
    code: &huffman_tables::HUFFMAN_B2,
};

/// BLISS-B-III (160-bit classical security target).
static BLISS_B_3: BlissBParam = BlissBParam {
    version: 3,
    n: 512,
    q: 12289,
    n_bits: 9,
    q_bits: 14,
    d: 9,
    modp: 48,
    kappa: 30,
    binf: 1760,
    bl2: 10206 * 10206,
    nz1: 216,
    nz2: 16,
    nbz2: 4,
    sigma: 250,
    ell: 23,
    prec: 128,
    m: 42271,
    one_q2: 6145,
    psi: &ntt_tables::PSI_512,
    r_psi: &ntt_tables::RPSI_512,
    code: &huffman_tables::HUFFMAN_B3,
};

/// BLISS-B-IV (192-bit classical security target).
static BLISS_B_4: BlissBParam = BlissBParam {
    version: 4,
    n: 512,
    q: 12289,
    n_bits: 9,
    q_bits: 14,
    d: 8,
    modp: 96,
    kappa: 39,
    binf: 1613,
    bl2: 9901 * 9901,
    nz1: 231,
    nz2: 31,
    nbz2: 7,
    sigma: 271,
    ell: 23,
    prec: 128,
    m: 69577,
    one_q2: 6145,
    psi: &ntt_tables::PSI_512,
    r_psi: &ntt_tables::RPSI_512,
    code: &huffman_tables::HUFFMAN_B4,
};

/// Look up the parameter profile for a version.
///
/// # Errors
/// [`Error::UnknownVersion`] for versions outside {0, 1, 2, 3, 4}.
pub fn get_param(version: u8) -> Result<&'static BlissBParam> {
    match version {
        0 => Ok(&BLISS_B_0),
        1 => Ok(&BLISS_B_1),
        2 => Ok(&BLISS_B_2),
        3 => Ok(&BLISS_B_3),
        4 => Ok(&BLISS_B_4),
        _ => Err(Error::UnknownVersion { version }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_versions_resolve() {
        for v in 0..5u8 {
            let p = get_param(v).unwrap();
            assert_eq!(p.version, v);
            assert_eq!(p.psi.len(), p.n as usize);
            assert_eq!(p.r_psi.len(), p.n as usize);
            assert!(p.n.is_power_of_two());
            assert_eq!(p.modp, (2 * p.q) >> p.d);
            assert_eq!(p.one_q2, (p.q + 1) / 2);
            // 2^-1 mod q really is an inverse of 2
            assert_eq!(2 * p.one_q2 % p.q, 1);
        }
        assert!(matches!(
            get_param(5),
            Err(Error::UnknownVersion { version: 5 })
        ));
    }

    #[test]
    fn psi_tables_are_consistent() {
        for v in [0u8, 1] {
            let p = get_param(v).unwrap();
            let q = i64::from(p.q);
            let psi = i64::from(p.psi[1]);
            // psi^n = -1 mod q, psi^i chains multiplicatively
            let mut acc = 1i64;
            for i in 0..p.n as usize {
                assert_eq!(i64::from(p.psi[i]), acc);
                acc = acc * psi % q;
            }
            assert_eq!(acc, q - 1);
        }
    }

    #[test]
    fn huffman_alphabet_matches_profile() {
        for v in 0..5u8 {
            let p = get_param(v).unwrap();
            let nbz1 = (p.binf >> 8) + 1;
            let want = nbz1 * (2 * p.nbz2 - 1);
            assert_eq!(p.code.code.len(), want as usize);
        }
    }
}
