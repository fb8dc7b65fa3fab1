//! Negacyclic Number Theoretic Transform.
//!
//! The forward transform pre-multiplies the coefficients by the psi powers
//! and runs an in-place iterative transform (bit-reversal shuffle, then
//! butterflies whose twiddles are read straight out of the psi table at
//! stride j * l). The inverse runs the same transform, scales by the r_psi
//! table (which carries the 1/n factor) and finishes with the index flip
//! that undoes the negacyclic twist: reverse positions 1..n-1 and negate
//! position 0 mod q.
//!
//! All transform arithmetic stays in [0, q).

use crate::poly::{add_mod, mul_mod, sub_mod, Poly};
use bliss_core::{Error, Result};

/// In-place iterative transform over data already reduced into [0, q).
fn fft(v: &mut [i32], param: &crate::params::BlissBParam) {
    let n = param.n as usize;
    let q = param.q as i32;
    let psi = param.psi;

    // bit-reversal shuffle
    let mut j = n >> 1;
    for i in 1..n - 1 {
        if i < j {
            v.swap(i, j);
        }
        let mut k = n;
        loop {
            k >>= 1;
            j ^= k;
            if j & k != 0 {
                break;
            }
        }
    }

    // butterflies; twiddle for column j at stage stride l is psi[j * l]
    let mut l = n;
    let mut i = 1;
    while i < n {
        let i2 = i << 1;
        let mut k = 0;
        while k < n {
            let tmp = v[k + i];
            v[k + i] = sub_mod(v[k], tmp, q);
            v[k] = add_mod(v[k], tmp, q);
            k += i2;
        }
        for j in 1..i {
            let y = psi[j * l];
            let mut k = j;
            while k < n {
                let tmp = mul_mod(v[k + i], y, q);
                v[k + i] = sub_mod(v[k], tmp, q);
                v[k] = add_mod(v[k], tmp, q);
                k += i2;
            }
        }
        l >>= 1;
        i <<= 1;
    }
}

impl Poly {
    /// Forward NTT. Accepts any coefficient range; the result is the NTT
    /// image with entries in [0, q).
    #[must_use]
    pub fn ntt(&self) -> Poly {
        let q = self.param.q as i32;
        let mut r = Poly::zero(self.param);
        for i in 0..self.data.len() {
            r.data[i] = mul_mod(self.data[i], self.param.psi[i], q);
        }
        fft(&mut r.data, self.param);
        r
    }

    /// Inverse NTT. Input must be an NTT image in [0, q); the result is the
    /// coefficient-domain polynomial in [0, q).
    #[must_use]
    pub fn intt(&self) -> Poly {
        let n = self.data.len();
        let q = self.param.q as i32;
        let mut r = self.clone();
        fft(&mut r.data, self.param);
        for i in 0..n {
            r.data[i] = mul_mod(r.data[i], self.param.r_psi[i], q);
        }
        // undo the negacyclic twist
        r.data[1..n].reverse();
        r.data[0] = (q - r.data[0]) % q;
        r
    }

    /// Pointwise inversion of an NTT image by Fermat exponentiation.
    ///
    /// # Errors
    /// [`Error::NonInvertible`] if any entry is zero mod q.
    pub fn invert_as_ntt(&self) -> Result<Poly> {
        let q = self.param.q as i32;
        if self.data.iter().any(|&c| c % q == 0) {
            return Err(Error::NonInvertible);
        }
        Ok(self.exp_mod_q(self.param.q - 2))
    }

    /// Ring product of a coefficient-domain polynomial with an NTT-domain
    /// operand: INTT(NTT(self) ⊙ rhs).
    ///
    /// # Errors
    /// [`Error::ParameterMismatch`] across profiles.
    pub fn multiply_ntt(&self, rh_ntt: &Poly) -> Result<Poly> {
        let mut t = self.ntt();
        t.mul_mod_q(rh_ntt)?;
        Ok(t.intt())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::get_param;

    /// Deterministic pseudo-random coefficients without an RNG dependency.
    fn fill(p: &mut Poly, seed: u64) {
        let mut state = seed | 1;
        let q = p.param().q;
        for i in 0..p.coeffs().len() {
            state = state.wrapping_mul(6_364_136_223_846_793_005).wrapping_add(1);
            p.data[i] = ((state >> 33) % u64::from(q)) as i32;
        }
    }

    #[test]
    fn intt_inverts_ntt_for_all_versions() {
        for v in 0..5u8 {
            let mut p = Poly::new(v).unwrap();
            fill(&mut p, u64::from(v) + 7);
            let round = p.ntt().intt();
            assert_eq!(round.coeffs(), p.coeffs(), "version {v}");
        }
    }

    #[test]
    fn ntt_reduces_arbitrary_input() {
        let mut p = Poly::new(0).unwrap();
        p.data[0] = -5;
        p.data[1] = 3 * 7681 + 2;
        let t = p.ntt();
        assert!(t.coeffs().iter().all(|&c| (0..7681).contains(&c)));
        let mut expect = Poly::new(0).unwrap();
        expect.data[0] = 7676;
        expect.data[1] = 2;
        assert_eq!(t.coeffs(), p.ntt().coeffs());
        assert_eq!(t.intt().coeffs(), expect.coeffs());
    }

    #[test]
    fn multiply_ntt_matches_schoolbook_negacyclic() {
        let param = get_param(0).unwrap();
        let n = param.n as usize;
        let q = i64::from(param.q);
        let mut a = Poly::new(0).unwrap();
        let mut b = Poly::new(0).unwrap();
        fill(&mut a, 11);
        fill(&mut b, 13);

        let mut want = vec![0i64; n];
        for i in 0..n {
            for j in 0..n {
                let s = i64::from(a.coeffs()[i]) * i64::from(b.coeffs()[j]);
                let k = i + j;
                if k >= n {
                    want[k - n] = (want[k - n] - s).rem_euclid(q);
                } else {
                    want[k] = (want[k] + s).rem_euclid(q);
                }
            }
        }

        let b_ntt = b.ntt();
        let got = a.multiply_ntt(&b_ntt).unwrap();
        for i in 0..n {
            assert_eq!(i64::from(got.coeffs()[i]), want[i], "index {i}");
        }
    }

    #[test]
    fn invert_as_ntt_gives_pointwise_inverse() {
        let mut p = Poly::new(1).unwrap();
        fill(&mut p, 99);
        let t = p.ntt();
        if let Ok(inv) = t.invert_as_ntt() {
            let mut prod = t.clone();
            prod.mul_mod_q(&inv).unwrap();
            assert!(prod.coeffs().iter().all(|&c| c == 1));
        }
    }

    #[test]
    fn zero_entries_are_not_invertible() {
        let p = Poly::new(1).unwrap(); // all zeros
        assert!(matches!(p.invert_as_ntt(), Err(Error::NonInvertible)));
    }
}
