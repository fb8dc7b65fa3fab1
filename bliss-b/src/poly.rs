//! Polynomial arithmetic in R_q = Z_q[x]/(x^n + 1).
//!
//! One concrete container serves both coefficient-domain polynomials and
//! their NTT images; the two differ only in how the operations are
//! sequenced, so each operation documents the domain it expects. Raw
//! (unreduced) integer ops and mod-q ops coexist: raw values must be
//! reduced before mixing with reduced arrays.
//!
//! Coefficients are `i32`, wide enough for 2 q^2 intermediates at both
//! shipped moduli; norms and inner products accumulate in `i64`.

#[cfg(not(feature = "std"))]
use alloc::{vec, vec::Vec};

use zeroize::Zeroize;

use crate::params::{get_param, BlissBParam};
use bliss_core::{Entropy, Error, Result, Sampler};

/// A polynomial (or NTT image) over the ring of a parameter profile.
pub struct Poly {
    pub(crate) data: Vec<i32>,
    pub(crate) param: &'static BlissBParam,
}

/// Reduce into [0, m).
#[inline]
pub(crate) fn num_mod(a: i32, m: i32) -> i32 {
    let r = a % m;
    if r < 0 {
        r + m
    } else {
        r
    }
}

#[inline]
pub(crate) fn add_mod(a: i32, b: i32, q: i32) -> i32 {
    let r = a + b;
    if r >= q {
        r - q
    } else {
        r
    }
}

#[inline]
pub(crate) fn sub_mod(a: i32, b: i32, q: i32) -> i32 {
    let r = a - b;
    if r < 0 {
        r + q
    } else {
        r
    }
}

/// Product reduced into [0, q); safe for arbitrary i32 operands.
#[inline]
pub(crate) fn mul_mod(a: i32, b: i32, q: i32) -> i32 {
    let r = (i64::from(a) * i64::from(b)) % i64::from(q);
    if r < 0 {
        (r + i64::from(q)) as i32
    } else {
        r as i32
    }
}

/// Square-and-multiply exponentiation mod q.
pub(crate) fn exp_mod(a: i32, e: u32, q: i32) -> i32 {
    let mut base = num_mod(a, q);
    let mut exp = e;
    let mut acc = 1i32;
    while exp > 0 {
        if exp & 1 == 1 {
            acc = mul_mod(acc, base, q);
        }
        base = mul_mod(base, base, q);
        exp >>= 1;
    }
    acc
}

impl Poly {
    /// Zero polynomial for a version.
    ///
    /// # Errors
    /// [`Error::UnknownVersion`] for versions outside {0, 1, 2, 3, 4}.
    pub fn new(version: u8) -> Result<Self> {
        Ok(Self::zero(get_param(version)?))
    }

    /// Zero polynomial for a resolved profile.
    #[must_use]
    pub fn zero(param: &'static BlissBParam) -> Self {
        Poly {
            data: vec![0i32; param.n as usize],
            param,
        }
    }

    /// The profile this polynomial belongs to.
    #[must_use]
    pub fn param(&self) -> &'static BlissBParam {
        self.param
    }

    /// Coefficient view.
    #[must_use]
    pub fn coeffs(&self) -> &[i32] {
        &self.data
    }

    /// Replace the coefficients.
    ///
    /// # Errors
    /// [`Error::ParameterMismatch`] when the slice length differs from n.
    pub fn set_coeffs(&mut self, data: &[i32]) -> Result<()> {
        if data.len() != self.data.len() {
            return Err(Error::ParameterMismatch);
        }
        self.data.copy_from_slice(data);
        Ok(())
    }

    fn check_same(&self, rh: &Poly) -> Result<()> {
        if self.param.n != rh.param.n || self.param.q != rh.param.q {
            return Err(Error::ParameterMismatch);
        }
        Ok(())
    }

    // ---------------------------------------------------------------
    // raw integer ops
    // ---------------------------------------------------------------

    /// Element-wise sum, no reduction.
    ///
    /// # Errors
    /// [`Error::ParameterMismatch`] across profiles.
    pub fn add(&self, rh: &Poly) -> Result<Poly> {
        self.check_same(rh)?;
        let mut r = Poly::zero(self.param);
        for i in 0..self.data.len() {
            r.data[i] = self.data[i] + rh.data[i];
        }
        Ok(r)
    }

    /// Element-wise difference, no reduction.
    ///
    /// # Errors
    /// [`Error::ParameterMismatch`] across profiles.
    pub fn sub(&self, rh: &Poly) -> Result<Poly> {
        self.check_same(rh)?;
        let mut r = Poly::zero(self.param);
        for i in 0..self.data.len() {
            r.data[i] = self.data[i] - rh.data[i];
        }
        Ok(r)
    }

    /// Element-wise product, no reduction.
    ///
    /// # Errors
    /// [`Error::ParameterMismatch`] across profiles.
    pub fn mul(&self, rh: &Poly) -> Result<Poly> {
        self.check_same(rh)?;
        let mut r = Poly::zero(self.param);
        for i in 0..self.data.len() {
            r.data[i] = self.data[i] * rh.data[i];
        }
        Ok(r)
    }

    /// In-place element-wise sum, no reduction.
    ///
    /// # Errors
    /// [`Error::ParameterMismatch`] across profiles.
    pub fn inc(&mut self, rh: &Poly) -> Result<()> {
        self.check_same(rh)?;
        for i in 0..self.data.len() {
            self.data[i] += rh.data[i];
        }
        Ok(())
    }

    /// In-place scalar multiply, no reduction.
    pub fn scalar_mul(&mut self, k: i32) {
        for c in &mut self.data {
            *c *= k;
        }
    }

    // ---------------------------------------------------------------
    // mod-q ops
    // ---------------------------------------------------------------

    /// Element-wise sum reduced into [0, q). Operands must already be in
    /// [0, q).
    ///
    /// # Errors
    /// [`Error::ParameterMismatch`] across profiles.
    pub fn add_mod_q(&self, rh: &Poly) -> Result<Poly> {
        self.check_same(rh)?;
        let q = self.param.q as i32;
        let mut r = Poly::zero(self.param);
        for i in 0..self.data.len() {
            r.data[i] = add_mod(self.data[i], rh.data[i], q);
        }
        Ok(r)
    }

    /// Element-wise difference reduced into [0, q). Operands must already
    /// be in [0, q).
    ///
    /// # Errors
    /// [`Error::ParameterMismatch`] across profiles.
    pub fn sub_mod_q(&self, rh: &Poly) -> Result<Poly> {
        self.check_same(rh)?;
        let q = self.param.q as i32;
        let mut r = Poly::zero(self.param);
        for i in 0..self.data.len() {
            r.data[i] = sub_mod(self.data[i], rh.data[i], q);
        }
        Ok(r)
    }

    /// In-place element-wise product reduced into [0, q).
    ///
    /// # Errors
    /// [`Error::ParameterMismatch`] across profiles.
    pub fn mul_mod_q(&mut self, rh: &Poly) -> Result<()> {
        self.check_same(rh)?;
        let q = self.param.q as i32;
        for i in 0..self.data.len() {
            self.data[i] = mul_mod(self.data[i], rh.data[i], q);
        }
        Ok(())
    }

    /// In-place scalar multiply reduced into [0, q).
    pub fn scalar_mul_mod_q(&mut self, k: i32) {
        let q = self.param.q as i32;
        for c in &mut self.data {
            *c = mul_mod(*c, k, q);
        }
    }

    /// Element-wise exponentiation mod q by square-and-multiply.
    #[must_use]
    pub fn exp_mod_q(&self, e: u32) -> Poly {
        let q = self.param.q as i32;
        let mut r = Poly::zero(self.param);
        for i in 0..self.data.len() {
            r.data[i] = exp_mod(self.data[i], e, q);
        }
        r
    }

    /// In-place reduction of every coefficient into [0, q).
    pub fn bound_q(&mut self) {
        let q = self.param.q as i32;
        for c in &mut self.data {
            *c = num_mod(*c, q);
        }
    }

    /// In-place reduction of every coefficient into [0, 2q).
    pub fn mod_2q(&mut self) {
        let q2 = 2 * self.param.q as i32;
        for c in &mut self.data {
            *c = num_mod(*c, q2);
        }
    }

    /// In-place reduction of every coefficient into [0, p).
    pub fn mod_p(&mut self) {
        let p = self.param.modp as i32;
        for c in &mut self.data {
            *c = num_mod(*c, p);
        }
    }

    // ---------------------------------------------------------------
    // norms
    // ---------------------------------------------------------------

    /// Squared L2 norm.
    #[must_use]
    pub fn norm2(&self) -> i64 {
        self.data
            .iter()
            .map(|&c| i64::from(c) * i64::from(c))
            .sum()
    }

    /// Infinity norm, max |coefficient|.
    #[must_use]
    pub fn max_norm(&self) -> i32 {
        self.data.iter().map(|&c| c.abs()).max().unwrap_or(0)
    }

    /// Inner product, no modulus.
    ///
    /// # Errors
    /// [`Error::ParameterMismatch`] across profiles.
    pub fn inner_product(&self, rh: &Poly) -> Result<i64> {
        self.check_same(rh)?;
        Ok(self
            .data
            .iter()
            .zip(&rh.data)
            .map(|(&a, &b)| i64::from(a) * i64::from(b))
            .sum())
    }

    // ---------------------------------------------------------------
    // signature compression helpers
    // ---------------------------------------------------------------

    /// Round-to-nearest drop of the d low bits: (c + 2^(d-1)) >> d.
    /// Coefficients must be non-negative.
    #[must_use]
    pub fn drop_bits(&self) -> Poly {
        let d = self.param.d;
        let half = 1i32 << (d - 1);
        let mut r = Poly::zero(self.param);
        for i in 0..self.data.len() {
            r.data[i] = (self.data[i] + half) >> d;
        }
        r
    }

    /// Scale every coefficient by 2^d.
    #[must_use]
    pub fn mul_2d(&self) -> Poly {
        let d = self.param.d;
        let mut r = Poly::zero(self.param);
        for i in 0..self.data.len() {
            r.data[i] = self.data[i] << d;
        }
        r
    }

    /// Coerce every coefficient into [-p/2, p/2) by a single +-p step.
    /// Coefficients must lie in [-p, p].
    #[must_use]
    pub fn bound_by_p(&self) -> Poly {
        let p = self.param.modp as i32;
        let mut r = Poly::zero(self.param);
        for i in 0..self.data.len() {
            let c = self.data[i];
            r.data[i] = if c < -p / 2 {
                c + p
            } else if c >= p / 2 {
                c - p
            } else {
                c
            };
        }
        r
    }

}

impl Clone for Poly {
    fn clone(&self) -> Self {
        Poly {
            data: self.data.clone(),
            param: self.param,
        }
    }
}

impl Zeroize for Poly {
    fn zeroize(&mut self) {
        self.data.zeroize();
    }
}

// ---------------------------------------------------------------
// random polynomial constructors
// ---------------------------------------------------------------

/// Uniform sparse polynomial with exactly nz1 coefficients in {-1, +1} and
/// nz2 in {-2, +2}, all others zero.
///
/// Each candidate draws one 16-bit word: the high 15 bits select the index,
/// the low bit the sign. A +-1 lands only on a coefficient that is still
/// even (i.e. zero at this stage), a +-2 only on one with both low bits
/// clear; rejected draws do not advance the quota, so the counts are exact.
///
/// # Errors
/// [`Error::UnknownVersion`] for versions outside {0, 1, 2, 3, 4}.
pub fn uniform_poly(version: u8, entropy: &mut Entropy) -> Result<Poly> {
    let mut p = Poly::new(version)?;
    let n = p.param.n;
    let v = &mut p.data;

    let mut i = 0u32;
    while i < p.param.nz1 {
        let x = entropy.uint16();
        let j = (u32::from(x >> 1) % n) as usize;
        let mask = -(1 ^ (v[j] & 1));
        i += (mask & 1) as u32;
        v[j] += ((i32::from(x & 1) << 1) - 1) & mask;
    }

    let mut i = 0u32;
    while i < p.param.nz2 {
        let x = entropy.uint16();
        let j = (u32::from(x >> 1) % n) as usize;
        let mask = -(1 ^ ((v[j] & 1) | ((v[j] & 2) >> 1)));
        i += (mask & 1) as u32;
        v[j] += ((i32::from(x & 1) << 2) - 2) & mask;
    }

    Ok(p)
}

/// Gaussian polynomial: one independent `sample_gauss` per coefficient.
///
/// # Errors
/// [`Error::UnknownVersion`] for versions outside {0, 1, 2, 3, 4}.
pub fn gauss_poly(version: u8, sampler: &Sampler, entropy: &mut Entropy) -> Result<Poly> {
    let mut p = Poly::new(version)?;
    for c in &mut p.data {
        *c = sampler.sample_gauss(entropy);
    }
    Ok(p)
}

/// Alpha half of the split Gaussian polynomial (constant-time draws).
///
/// # Errors
/// [`Error::UnknownVersion`] for versions outside {0, 1, 2, 3, 4}.
pub fn gauss_poly_alpha(version: u8, sampler: &Sampler, entropy: &mut Entropy) -> Result<Poly> {
    let mut p = Poly::new(version)?;
    for c in &mut p.data {
        *c = sampler.sample_gauss_ct_alpha(entropy);
    }
    Ok(p)
}

/// Beta half of the split Gaussian polynomial (constant-time draws).
///
/// # Errors
/// [`Error::UnknownVersion`] for versions outside {0, 1, 2, 3, 4}.
pub fn gauss_poly_beta(version: u8, sampler: &Sampler, entropy: &mut Entropy) -> Result<Poly> {
    let mut p = Poly::new(version)?;
    for c in &mut p.data {
        *c = sampler.sample_gauss_ct_beta(entropy);
    }
    Ok(p)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_seed() -> [u8; 64] {
        core::array::from_fn(|i| (i % 8) as u8)
    }

    #[test]
    fn add_sub_round_trip() {
        let mut a = Poly::new(1).unwrap();
        let mut b = Poly::new(1).unwrap();
        a.data[0] = 100;
        a.data[511] = -7;
        b.data[0] = 42;
        b.data[511] = 12289;
        let c = a.add(&b).unwrap();
        assert_eq!(c.data[0], 142);
        assert_eq!(c.data[511], 12282);
        let d = c.sub(&b).unwrap();
        assert_eq!(d.data[0], a.data[0]);
        assert_eq!(d.data[511], a.data[511]);
    }

    #[test]
    fn cross_version_ops_fail() {
        let a = Poly::new(0).unwrap();
        let b = Poly::new(1).unwrap();
        assert!(matches!(a.add(&b), Err(Error::ParameterMismatch)));
        assert!(matches!(a.inner_product(&b), Err(Error::ParameterMismatch)));
    }

    #[test]
    fn mod_q_ops_reduce() {
        let mut a = Poly::new(0).unwrap();
        let mut b = Poly::new(0).unwrap();
        a.data[0] = 7680;
        b.data[0] = 5;
        assert_eq!(a.add_mod_q(&b).unwrap().data[0], 4);
        assert_eq!(b.sub_mod_q(&a).unwrap().data[0], 6);
        a.mul_mod_q(&b).unwrap();
        assert_eq!(a.data[0], num_mod(7680 * 5, 7681));

        let mut c = Poly::new(0).unwrap();
        c.data[0] = -1;
        c.data[1] = 7681 + 3;
        c.bound_q();
        assert_eq!(&c.data[..2], &[7680, 3]);
    }

    #[test]
    fn exp_mod_q_matches_pow() {
        let mut a = Poly::new(0).unwrap();
        a.data[0] = 3;
        a.data[1] = 7680; // -1 mod q
        let r = a.exp_mod_q(5);
        assert_eq!(r.data[0], 243);
        assert_eq!(r.data[1], 7680); // (-1)^5 = -1
        assert_eq!(r.data[2], 0);
    }

    #[test]
    fn norms() {
        let mut a = Poly::new(0).unwrap();
        a.data[0] = -3;
        a.data[1] = 4;
        assert_eq!(a.norm2(), 25);
        assert_eq!(a.max_norm(), 4);
        let b = a.clone();
        assert_eq!(a.inner_product(&b).unwrap(), 25);
    }

    #[test]
    fn drop_bits_rounds_to_nearest() {
        let mut a = Poly::new(0).unwrap(); // d = 5
        a.data[0] = 15; // + 16 -> 31 >> 5 = 0
        a.data[1] = 16; // + 16 -> 32 >> 5 = 1
        a.data[2] = 479;
        let r = a.drop_bits();
        assert_eq!(r.data[0], 0);
        assert_eq!(r.data[1], 1);
        assert_eq!(r.data[2], 15);
        // mul_2d is the approximate inverse
        assert_eq!(r.mul_2d().data[1], 32);
    }

    #[test]
    fn bound_by_p_centers() {
        let mut a = Poly::new(1).unwrap(); // p = 24
        a.data[0] = 23;
        a.data[1] = -13;
        a.data[2] = 11;
        let r = a.bound_by_p();
        assert_eq!(r.data[0], -1);
        assert_eq!(r.data[1], 11);
        assert_eq!(r.data[2], 11);
    }

    #[test]
    fn mod_2q_handles_negatives() {
        let mut a = Poly::new(1).unwrap();
        a.data[0] = -1;
        a.data[1] = 2 * 12289;
        a.mod_2q();
        assert_eq!(a.data[0], 2 * 12289 - 1);
        assert_eq!(a.data[1], 0);
    }

    #[test]
    fn uniform_poly_exact_counts() {
        for v in 0..5u8 {
            let mut e = Entropy::new(&test_seed()).unwrap();
            let p = uniform_poly(v, &mut e).unwrap();
            let ones = p.data.iter().filter(|&&c| c.abs() == 1).count() as u32;
            let twos = p.data.iter().filter(|&&c| c.abs() == 2).count() as u32;
            let zeros = p.data.iter().filter(|&&c| c == 0).count() as u32;
            assert_eq!(ones, p.param.nz1, "version {v}");
            assert_eq!(twos, p.param.nz2, "version {v}");
            assert_eq!(zeros, p.param.n - p.param.nz1 - p.param.nz2);
        }
    }

    #[test]
    fn gauss_poly_plausible_deviation() {
        let p = get_param(1).unwrap();
        let s = Sampler::new(p.sigma, p.ell, p.prec).unwrap();
        let mut e = Entropy::new(&test_seed()).unwrap();
        let poly = gauss_poly(1, &s, &mut e).unwrap();
        let dev = ((poly.norm2() as f64) / 512.0).sqrt();
        assert!((dev - 215.0).abs() < 40.0, "deviation = {dev}");
    }
}
