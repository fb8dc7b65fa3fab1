//! Discrete Gaussian samplers over the integers.
//!
//! The sampler composes three layers:
//!
//! 1. `sample_ber`: Bernoulli on a fixed probability stored as a big-endian
//!    fixed-point fraction, decided by byte-wise comparison against the
//!    entropy stream.
//! 2. Bernoulli on exp(-x/(2 sigma^2)) by walking the bits of x against a
//!    precomputed table of exp(-2^i/(2 sigma^2)) rows, and Bernoulli on
//!    1/cosh(x/(2 sigma^2)) built on top of it.
//! 3. The full Gaussian: a binary Gaussian sample stretched by k_sigma =
//!    ceil(sigma * sqrt(2 ln 2)), corrected by a Bernoulli-exp acceptance.
//!
//! The `_ct` variants never short-circuit on input-dependent bits: the
//! Bernoulli-exp table walk visits every row and folds the row outcomes in
//! arithmetically, and the final sign application is a constant-time
//! conditional negate.

use subtle::{Choice, ConditionallyNegatable};

use crate::tables;
use crate::{Entropy, Error, Result};

/// One (table, k-sigma) bundle; the main sampler and the two split
/// sub-samplers each carry one.
#[derive(Clone, Copy)]
struct SubSampler {
    ell: u32,
    k_sigma: u32,
    k_sigma_bits: u32,
    ctable: &'static [u8],
}

/// Discrete Gaussian sampler for one parameter profile.
///
/// The sampler holds only immutable table references; all randomness is
/// drawn from the [`Entropy`] passed to each call, so a sampler may be
/// shared read-only while entropy streams stay exclusive.
pub struct Sampler {
    columns: usize,
    main: SubSampler,
    alpha: SubSampler,
    beta: SubSampler,
}

impl Sampler {
    /// Build a sampler for deviation `sigma` with an `ell`-row, `prec`-bit
    /// Bernoulli table, resolving the split sub-samplers for the
    /// side-channel-hardened path.
    ///
    /// # Errors
    /// [`Error::SamplerTableError`] if no embedded table matches the
    /// requested combination.
    pub fn new(sigma: u32, ell: u32, prec: u32) -> Result<Self> {
        let main = Self::resolve(sigma, ell, prec)?;
        let (sigma_a, ell_a, sigma_b, ell_b) =
            tables::split_sigma(sigma).ok_or(Error::SamplerTableError { sigma, ell, prec })?;
        let alpha = Self::resolve(sigma_a, ell_a, prec)?;
        let beta = Self::resolve(sigma_b, ell_b, prec)?;
        Ok(Sampler {
            columns: (prec / 8) as usize,
            main,
            alpha,
            beta,
        })
    }

    fn resolve(sigma: u32, ell: u32, prec: u32) -> Result<SubSampler> {
        let t = tables::lookup(sigma, ell, prec)
            .ok_or(Error::SamplerTableError { sigma, ell, prec })?;
        Ok(SubSampler {
            ell,
            k_sigma: t.k_sigma,
            k_sigma_bits: t.k_sigma_bits,
            ctable: t.table,
        })
    }

    /// Bernoulli trial with success probability `p / 2^(8 len(p))`, where
    /// `p` is read as a big-endian fixed-point fraction. Compares entropy
    /// bytes against the fraction bytes, deciding at the first difference.
    pub(crate) fn sample_ber(&self, entropy: &mut Entropy, p: &[u8]) -> bool {
        for &pi in p {
            let uc = entropy.byte();
            if uc < pi {
                return true;
            }
            if uc > pi {
                return false;
            }
        }
        true
    }

    fn row<'a>(&self, sub: &'a SubSampler, i: usize) -> &'a [u8] {
        &sub.ctable[i * self.columns..(i + 1) * self.columns]
    }

    /// exp(-x/(2 sigma^2)) Bernoulli: one table-row trial per set bit of x,
    /// top row first, short-circuiting on the first failure.
    fn ber_exp(&self, entropy: &mut Entropy, x: u64, sub: &SubSampler) -> bool {
        let mut ri = sub.ell - 1;
        let mut mask = 1u64 << ri;
        while mask > 0 {
            if x & mask != 0 && !self.sample_ber(entropy, self.row(sub, ri as usize)) {
                return false;
            }
            mask >>= 1;
            ri = ri.wrapping_sub(1);
        }
        true
    }

    /// Constant-time exp(-x/(2 sigma^2)) Bernoulli: walks every table row
    /// regardless of x and folds the outcomes in arithmetically, so the
    /// table access pattern does not depend on the argument.
    fn ber_exp_ct(&self, entropy: &mut Entropy, x: u64, sub: &SubSampler) -> bool {
        let mut ret = 1u64;
        let mut xi = x;
        for i in 0..sub.ell as usize {
            let bit = u64::from(self.sample_ber(entropy, self.row(sub, i)));
            ret *= 1 - (xi & 1) + bit * (xi & 1);
            xi >>= 1;
        }
        ret != 0
    }

    fn ber_cosh(&self, entropy: &mut Entropy, x: i64, sub: &SubSampler, ct: bool) -> bool {
        let x2 = x.unsigned_abs() << 1;
        loop {
            let accept = if ct {
                self.ber_exp_ct(entropy, x2, sub)
            } else {
                self.ber_exp(entropy, x2, sub)
            };
            if accept {
                return true;
            }
            if !entropy.bit() {
                let again = if ct {
                    self.ber_exp_ct(entropy, x2, sub)
                } else {
                    self.ber_exp(entropy, x2, sub)
                };
                if !again {
                    return false;
                }
            }
        }
    }

    /// Bernoulli trial with success probability exp(-x/(2 sigma^2)).
    pub fn sample_ber_exp(&self, entropy: &mut Entropy, x: u32) -> bool {
        self.ber_exp(entropy, u64::from(x), &self.main)
    }

    /// Constant-time variant of [`Self::sample_ber_exp`].
    pub fn sample_ber_exp_ct(&self, entropy: &mut Entropy, x: u32) -> bool {
        self.ber_exp_ct(entropy, u64::from(x), &self.main)
    }

    /// Bernoulli trial with success probability 1/cosh(x/(2 sigma^2));
    /// x may be negative.
    pub fn sample_ber_cosh(&self, entropy: &mut Entropy, x: i64) -> bool {
        self.ber_cosh(entropy, x, &self.main, false)
    }

    /// Constant-time variant of [`Self::sample_ber_cosh`].
    pub fn sample_ber_cosh_ct(&self, entropy: &mut Entropy, x: i64) -> bool {
        self.ber_cosh(entropy, x, &self.main, true)
    }

    /// Sample the discrete binary Gaussian (sigma = sqrt(1/(2 ln 2))).
    ///
    /// Draw a bit; on 1 return 0. Otherwise for i = 1..=16 draw 2i-1 bits:
    /// all-zeros accepts i, the all-but-last-zero pattern moves on to i+1,
    /// anything else restarts.
    pub fn sample_binary_gauss(&self, entropy: &mut Entropy) -> u32 {
        'restart: loop {
            if entropy.bit() {
                return 0;
            }
            for i in 1..=16u32 {
                let u = entropy.bits(2 * i - 1);
                if u == 0 {
                    return i;
                }
                if u != 1 {
                    continue 'restart;
                }
            }
            return 0;
        }
    }

    fn gauss(&self, entropy: &mut Entropy, sub: &SubSampler, ct: bool) -> i32 {
        let k_sigma = sub.k_sigma;
        loop {
            let x = self.sample_binary_gauss(entropy);
            let y = loop {
                let y = entropy.bits(sub.k_sigma_bits);
                if y < k_sigma {
                    break y;
                }
            };
            let e = u64::from(y) * u64::from(y + 2 * k_sigma * x);
            let u = entropy.bit();
            if (x | y) != 0 || u {
                let accept = if ct {
                    self.ber_exp_ct(entropy, e, sub)
                } else {
                    self.ber_exp(entropy, e, sub)
                };
                if accept {
                    let mut val = (k_sigma * x + y) as i32;
                    if ct {
                        val.conditional_negate(Choice::from(u8::from(!u)));
                    } else if !u {
                        val = -val;
                    }
                    return val;
                }
            }
        }
    }

    /// Sample the discrete Gaussian on Z with the profile deviation.
    pub fn sample_gauss(&self, entropy: &mut Entropy) -> i32 {
        self.gauss(entropy, &self.main, false)
    }

    /// Constant-time variant of [`Self::sample_gauss`].
    pub fn sample_gauss_ct(&self, entropy: &mut Entropy) -> i32 {
        self.gauss(entropy, &self.main, true)
    }

    /// Constant-time Gaussian with the alpha split deviation.
    pub fn sample_gauss_ct_alpha(&self, entropy: &mut Entropy) -> i32 {
        self.gauss(entropy, &self.alpha, true)
    }

    /// Constant-time Gaussian with the beta split deviation.
    pub fn sample_gauss_ct_beta(&self, entropy: &mut Entropy) -> i32 {
        self.gauss(entropy, &self.beta, true)
    }

    /// One constant-time draw from each split sub-sampler; the sum is
    /// distributed close to the full-deviation Gaussian.
    pub fn sample_gauss_ct_split(&self, entropy: &mut Entropy) -> (i32, i32) {
        let a = self.sample_gauss_ct_alpha(entropy);
        let b = self.sample_gauss_ct_beta(entropy);
        (a, b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_seed() -> [u8; 64] {
        core::array::from_fn(|i| (i % 8) as u8)
    }

    fn sampler() -> Sampler {
        // BLISS-B-4 shape
        Sampler::new(271, 23, 128).unwrap()
    }

    #[test]
    fn unknown_combination_is_rejected() {
        assert!(matches!(
            Sampler::new(99, 20, 128),
            Err(Error::SamplerTableError {
                sigma: 99,
                ell: 20,
                prec: 128
            })
        ));
        assert!(Sampler::new(271, 23, 64).is_err());
    }

    #[test]
    fn all_profile_shapes_resolve() {
        for (sigma, ell) in [(100, 20), (215, 22), (107, 22), (250, 23), (271, 23)] {
            assert!(Sampler::new(sigma, ell, 128).is_ok());
        }
    }

    /// sample_ber on the all-128 fraction (p = 0.50196..) has empirical
    /// mean 1/2 within a generous tolerance.
    #[test]
    fn sample_ber_half_mean() {
        let s = sampler();
        let mut e = Entropy::new(&test_seed()).unwrap();
        let p = [128u8; 16];
        let n = 1_000_000u32;
        let mut hits = 0u32;
        for _ in 0..n {
            if s.sample_ber(&mut e, &p) {
                hits += 1;
            }
        }
        let mean = f64::from(hits) / f64::from(n);
        assert!((mean - 0.5).abs() < 0.005, "mean = {mean}");
    }

    #[test]
    fn ber_exp_zero_always_accepts() {
        let s = sampler();
        let mut e = Entropy::new(&test_seed()).unwrap();
        for _ in 0..100 {
            assert!(s.sample_ber_exp(&mut e, 0));
        }
    }

    #[test]
    fn ber_exp_mean_tracks_exponential() {
        let s = sampler();
        let mut e = Entropy::new(&test_seed()).unwrap();
        // x = 2 sigma^2 -> acceptance exp(-1)
        let x = 2 * 271 * 271;
        let n = 20_000;
        let mut hits = 0u32;
        for _ in 0..n {
            if s.sample_ber_exp(&mut e, x) {
                hits += 1;
            }
        }
        let mean = f64::from(hits) / f64::from(n);
        assert!((mean - (-1.0f64).exp()).abs() < 0.02, "mean = {mean}");

        // the constant-time walk realizes the same probability
        let mut hits = 0u32;
        for _ in 0..n {
            if s.sample_ber_exp_ct(&mut e, x) {
                hits += 1;
            }
        }
        let mean = f64::from(hits) / f64::from(n);
        assert!((mean - (-1.0f64).exp()).abs() < 0.02, "ct mean = {mean}");
    }

    #[test]
    fn binary_gauss_stays_small() {
        let s = sampler();
        let mut e = Entropy::new(&test_seed()).unwrap();
        for _ in 0..10_000 {
            assert!(s.sample_binary_gauss(&mut e) <= 16);
        }
    }

    #[test]
    fn gauss_empirical_deviation() {
        let s = sampler();
        let mut e = Entropy::new(&test_seed()).unwrap();
        let n = 20_000;
        let mut sum2 = 0f64;
        for _ in 0..n {
            let v = f64::from(s.sample_gauss(&mut e));
            sum2 += v * v;
        }
        let dev = (sum2 / f64::from(n)).sqrt();
        assert!((dev - 271.0).abs() < 10.0, "deviation = {dev}");
    }

    #[test]
    fn gauss_ct_empirical_deviation() {
        let s = sampler();
        let mut e = Entropy::new(&test_seed()).unwrap();
        let n = 20_000;
        let mut sum2 = 0f64;
        for _ in 0..n {
            let v = f64::from(s.sample_gauss_ct(&mut e));
            sum2 += v * v;
        }
        let dev = (sum2 / f64::from(n)).sqrt();
        assert!((dev - 271.0).abs() < 10.0, "deviation = {dev}");
    }

    #[test]
    fn split_sum_approximates_full_deviation() {
        let s = sampler();
        let mut e = Entropy::new(&test_seed()).unwrap();
        let n = 20_000;
        let mut sum2 = 0f64;
        for _ in 0..n {
            let (a, b) = s.sample_gauss_ct_split(&mut e);
            let v = f64::from(a + b);
            sum2 += v * v;
        }
        let dev = (sum2 / f64::from(n)).sqrt();
        assert!((dev - 271.0).abs() < 12.0, "deviation = {dev}");
    }

    #[test]
    fn cosh_zero_always_accepts() {
        let s = sampler();
        let mut e = Entropy::new(&test_seed()).unwrap();
        for _ in 0..100 {
            assert!(s.sample_ber_cosh(&mut e, 0));
            assert!(s.sample_ber_cosh_ct(&mut e, 0));
        }
    }

    #[test]
    fn cosh_is_sign_symmetric_in_distribution() {
        let s = sampler();
        let x = i64::from(271 * 271);
        let n = 20_000;
        let mut e = Entropy::new(&test_seed()).unwrap();
        let pos: u32 = (0..n).map(|_| u32::from(s.sample_ber_cosh(&mut e, x))).sum();
        let mut e = Entropy::new(&test_seed()).unwrap();
        let neg: u32 = (0..n).map(|_| u32::from(s.sample_ber_cosh(&mut e, -x))).sum();
        // identical entropy stream and |x| means identical decisions
        assert_eq!(pos, neg);
    }
}
