//! Error types for the BLISS-B workspace.

use core::fmt;

/// Result type alias using [`Error`].
pub type Result<T> = core::result::Result<T, Error>;

/// Errors that can occur during key generation, signing, verification or
/// (de)serialization.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    /// Parameter version outside {0, 1, 2, 3, 4}.
    UnknownVersion {
        /// The rejected version byte.
        version: u8,
    },

    /// Entropy seed shorter than the required 64 bytes.
    SeedTooShort {
        /// Required seed length in bytes.
        expected: usize,
        /// Actual seed length provided.
        actual: usize,
    },

    /// Binary operation on polynomials from different parameter profiles.
    ParameterMismatch,

    /// An NTT-domain element has a zero coefficient and cannot be inverted.
    NonInvertible,

    /// Key generation failed to draw an invertible polynomial within its
    /// attempt budget.
    RejectionBudgetExceeded {
        /// Number of attempts made.
        attempts: u32,
    },

    /// A serialized structure is truncated or carries an invalid field.
    MalformedEncoding(&'static str),

    /// The Huffman stream could not be encoded or decoded.
    HuffmanError(&'static str),

    /// No embedded Bernoulli table exists for the requested sampler shape.
    SamplerTableError {
        /// Requested standard deviation.
        sigma: u32,
        /// Requested table row count.
        ell: u32,
        /// Requested fixed-point precision in bits.
        prec: u32,
    },

    /// A signature was checked against a key from a different profile.
    VersionMismatch {
        /// Version of the verifying key.
        key: u8,
        /// Version of the signature.
        signature: u8,
    },

    /// A norm bound was exceeded. Carries the name of the quantity, its
    /// value and the bound it violated. Doubles as the fatal signing error
    /// when the GreedySC output norm reaches M.
    NormTooLarge {
        /// Name of the offending quantity.
        name: &'static str,
        /// Observed value.
        value: i64,
        /// Violated bound.
        bound: i64,
    },

    /// Recomputed challenge indices do not match the signature.
    ChallengeMismatch,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::UnknownVersion { version } => {
                write!(f, "unknown parameter version {version}")
            }
            Error::SeedTooShort { expected, actual } => {
                write!(f, "seed too short: need {expected} bytes, got {actual}")
            }
            Error::ParameterMismatch => write!(f, "mismatched polynomial parameters"),
            Error::NonInvertible => write!(f, "polynomial is not invertible"),
            Error::RejectionBudgetExceeded { attempts } => {
                write!(f, "no invertible polynomial after {attempts} attempts")
            }
            Error::MalformedEncoding(what) => write!(f, "malformed encoding: {what}"),
            Error::HuffmanError(what) => write!(f, "huffman error: {what}"),
            Error::SamplerTableError { sigma, ell, prec } => {
                write!(
                    f,
                    "no sampler table for sigma = {sigma}, ell = {ell}, prec = {prec}"
                )
            }
            Error::VersionMismatch { key, signature } => {
                write!(
                    f,
                    "mismatched signature version: key is {key}, signature is {signature}"
                )
            }
            Error::NormTooLarge { name, value, bound } => {
                write!(f, "{name} = {value} > {bound}")
            }
            Error::ChallengeMismatch => write!(f, "challenge indices mismatch"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_the_offending_values() {
        let e = Error::NormTooLarge {
            name: "max norm of z1",
            value: 12345,
            bound: 10000,
        };
        let s = format!("{e}");
        assert!(s.contains("12345"));
        assert!(s.contains("10000"));

        let e = Error::SamplerTableError {
            sigma: 99,
            ell: 20,
            prec: 128,
        };
        assert!(format!("{e}").contains("sigma = 99"));
    }
}
