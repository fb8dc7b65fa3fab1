//! Precomputed Bernoulli tables for the discrete Gaussian samplers.
//!
//! One entry per supported (sigma, ell, prec) combination. Row i of a table
//! is exp(-2^i / (2 sigma^2)) as a prec-bit big-endian fixed-point fraction,
//! prec/8 bytes per row, ell rows flat. The k-sigma column carries
//! ceil(sigma * sqrt(2 ln 2)) and its bit width for the binary-Gaussian
//! composition.

/// Bernoulli table entry for one (sigma, ell, prec) combination.
pub(crate) struct GaussTable {
    pub(crate) sigma: u32,
    pub(crate) ell: u32,
    pub(crate) prec: u32,
    pub(crate) k_sigma: u32,
    pub(crate) k_sigma_bits: u32,
    pub(crate) table: &'static [u8],
}

/// Look up the embedded table for a (sigma, ell, prec) combination.
pub(crate) fn lookup(sigma: u32, ell: u32, prec: u32) -> Option<&'static GaussTable> {
    GAUSS_TABLES.iter().find(|t| t.sigma == sigma && t.ell == ell && t.prec == prec)
}

/// Split deviations for the side-channel-hardened sampler pair, keyed by the
/// profile sigma: (sigma, alpha sigma, alpha ell, beta sigma, beta ell) with
/// alpha^2 + beta^2 ~= sigma^2.
pub(crate) fn split_sigma(sigma: u32) -> Option<(u32, u32, u32, u32)> {
    SIGMA_SPLITS
        .iter()
        .find(|s| s.0 == sigma)
        .map(|s| (s.1, s.2, s.3, s.4))
}

static SIGMA_SPLITS: [(u32, u32, u32, u32, u32); 5] = [
    (100, 60, 18, 80, 19),
    (215, 129, 20, 172, 21),
    (107, 64, 18, 86, 19),
    (250, 150, 20, 200, 21),
    (271, 163, 21, 217, 22),
];

#[rustfmt::skip]
static CTABLE_60_18: [u8; 288] = [
    0xff, 0xf6, 0xe5, 0xfe, 0x30, 0x10, 0x79, 0x40, 0xfa, 0x19, 0x49, 0xac, 0x6c, 0x38, 0x29, 0x9b,
    0xff, 0xed, 0xcc, 0x4f, 0x36, 0xe5, 0xef, 0x99, 0x5d, 0xc4, 0x14, 0x48, 0x5e, 0x4b, 0xc6, 0x4b,
    0xff, 0xdb, 0x99, 0xe9, 0xbd, 0x18, 0x11, 0x12, 0x8e, 0x50, 0x5b, 0x29, 0x55, 0x61, 0x9a, 0x9b,
    0xff, 0xb7, 0x39, 0x00, 0x59, 0x28, 0xb2, 0xa0, 0xb3, 0x27, 0x60, 0x74, 0x06, 0xce, 0xae, 0x36,
    0xff, 0x6e, 0x86, 0xb1, 0x3c, 0xcf, 0xb3, 0xbf, 0xc5, 0x41, 0x76, 0xe6, 0x9f, 0xd2, 0x60, 0xf7,
    0xfe, 0xdd, 0x60, 0x0d, 0x1e, 0x54, 0x10, 0xf5, 0x19, 0x9b, 0x45, 0x97, 0x00, 0x63, 0xbd, 0x4e,
    0xfd, 0xbc, 0x0a, 0x09, 0x02, 0xdf, 0x06, 0x36, 0xca, 0xd7, 0xaf, 0xdb, 0x6d, 0x6b, 0xa9, 0x8f,
    0xfb, 0x7d, 0x35, 0xf4, 0x8d, 0x4d, 0xbe, 0x64, 0x0d, 0x9b, 0x34, 0x79, 0xcc, 0x3e, 0x65, 0x00,
    0xf7, 0x0e, 0xc5, 0x0b, 0x49, 0x47, 0x9d, 0x63, 0xfb, 0x6a, 0xba, 0x2a, 0x95, 0xd0, 0x18, 0x35,
    0xee, 0x6d, 0x81, 0x15, 0xec, 0x4e, 0x94, 0xd3, 0xbf, 0x74, 0xc6, 0x40, 0x1b, 0x0d, 0x98, 0x82,
    0xde, 0x0f, 0xca, 0xdb, 0xf1, 0x24, 0x71, 0xac, 0x45, 0x50, 0xf6, 0x46, 0x8e, 0x66, 0xf0, 0x21,
    0xc0, 0x9f, 0x64, 0xce, 0xdc, 0xc1, 0x4c, 0xf0, 0x15, 0x4c, 0x87, 0xf8, 0x1d, 0xdb, 0x65, 0x90,
    0x90, 0xef, 0x7a, 0x74, 0xab, 0xca, 0x6f, 0x24, 0xbb, 0xbd, 0x72, 0x3c, 0xe2, 0x1d, 0xee, 0x69,
    0x52, 0x0e, 0x49, 0xc9, 0x21, 0xaf, 0xe9, 0xed, 0xee, 0x77, 0x79, 0x09, 0x29, 0xa9, 0xac, 0x74,
    0x1a, 0x4d, 0x28, 0x11, 0x00, 0xd8, 0xb4, 0x56, 0x40, 0xe0, 0x7b, 0x6c, 0xb6, 0xde, 0x58, 0xf4,
    0x02, 0xb3, 0xc3, 0x64, 0x94, 0xab, 0xd8, 0x62, 0xd6, 0x34, 0x3f, 0x47, 0xe9, 0x84, 0x6c, 0x84,
    0x00, 0x07, 0x4d, 0x48, 0x66, 0x1c, 0xf9, 0xb4, 0x6d, 0xcf, 0x23, 0x25, 0xa2, 0x0d, 0x21, 0x68,
    0x00, 0x00, 0x00, 0x35, 0x51, 0x4a, 0x37, 0x7c, 0xaf, 0x1c, 0x1b, 0x23, 0xa6, 0x40, 0xd7, 0x78,
];

#[rustfmt::skip]
static CTABLE_64_18: [u8; 288] = [
    0xff, 0xf8, 0x00, 0x1f, 0xff, 0xaa, 0xab, 0x55, 0x54, 0x44, 0x45, 0xb0, 0x59, 0x65, 0x97, 0xf9,
    0xff, 0xf0, 0x00, 0x7f, 0xfd, 0x55, 0x5f, 0xff, 0xdd, 0xde, 0x38, 0xe2, 0xbe, 0x2d, 0x82, 0xd5,
    0xff, 0xe0, 0x01, 0xff, 0xea, 0xab, 0x55, 0x51, 0x11, 0x27, 0xd2, 0x15, 0x22, 0xf2, 0x29, 0x5b,
    0xff, 0xc0, 0x07, 0xff, 0x55, 0x5f, 0xff, 0x77, 0x7d, 0x27, 0x9e, 0x7b, 0x87, 0xac, 0xec, 0xdf,
    0xff, 0x80, 0x1f, 0xfa, 0xab, 0x55, 0x44, 0x45, 0xb0, 0x41, 0x05, 0xb0, 0x43, 0xe8, 0xf4, 0x8d,
    0xff, 0x00, 0x7f, 0xd5, 0x5f, 0xfd, 0xde, 0x38, 0xd6, 0x8f, 0x08, 0xc2, 0x57, 0xe0, 0xce, 0x3f,
    0xfe, 0x01, 0xfe, 0xab, 0x55, 0x11, 0x27, 0xcb, 0xfe, 0x5f, 0x89, 0x99, 0x4c, 0x44, 0x21, 0x6f,
    0xfc, 0x07, 0xf5, 0x5f, 0xf7, 0x7d, 0x24, 0x93, 0xe8, 0x85, 0xee, 0xaa, 0x75, 0x6a, 0xd5, 0x23,
    0xf8, 0x1f, 0xab, 0x54, 0x45, 0xae, 0xbc, 0x8a, 0x58, 0x05, 0x5f, 0xcb, 0xbb, 0x13, 0x9a, 0xe8,
    0xf0, 0x7d, 0x5f, 0xde, 0x38, 0x15, 0x1e, 0x72, 0xf1, 0x8f, 0xf0, 0x30, 0x49, 0xac, 0x5d, 0x7e,
    0xe1, 0xeb, 0x51, 0x27, 0x6c, 0x11, 0x0c, 0x3c, 0x3e, 0xb1, 0x26, 0x9f, 0x2f, 0x5d, 0x4a, 0xfa,
    0xc7, 0x5f, 0x7c, 0xf5, 0x64, 0x10, 0x57, 0x43, 0x41, 0x5c, 0xbc, 0x9d, 0x63, 0x68, 0xf3, 0xb9,
    0x9b, 0x45, 0x97, 0xe3, 0x7c, 0xb0, 0x4f, 0xf3, 0xd6, 0x75, 0xa3, 0x55, 0x30, 0xcd, 0xd7, 0x67,
    0x5e, 0x2d, 0x58, 0xd8, 0xb3, 0xbc, 0xdf, 0x1a, 0xba, 0xde, 0xc7, 0x82, 0x90, 0x54, 0xf9, 0x0d,
    0x22, 0xa5, 0x55, 0x47, 0x7f, 0x03, 0x97, 0x3f, 0xb6, 0xed, 0xd5, 0xc2, 0x5a, 0x05, 0x2a, 0xe3,
    0x04, 0xb0, 0x55, 0x6e, 0x08, 0x4f, 0x3d, 0x1d, 0xfa, 0x2b, 0xc0, 0x4c, 0xb0, 0xab, 0x88, 0xf5,
    0x00, 0x15, 0xfc, 0x21, 0x04, 0x10, 0x27, 0xac, 0xbb, 0xfc, 0xd4, 0x67, 0x80, 0xfe, 0xe7, 0x1e,
    0x00, 0x00, 0x01, 0xe3, 0x55, 0xbb, 0xae, 0xe8, 0x5c, 0xad, 0xa6, 0x5f, 0x73, 0xf3, 0x2e, 0x88,
];

#[rustfmt::skip]
static CTABLE_80_19: [u8; 304] = [
    0xff, 0xfa, 0xe1, 0x54, 0xc9, 0x6f, 0x91, 0xec, 0x8a, 0x48, 0x5b, 0x80, 0x67, 0xee, 0xf6, 0xd1,
    0xff, 0xf5, 0xc2, 0xc3, 0xc9, 0x3b, 0xd8, 0xc9, 0x2b, 0xb4, 0x2d, 0xaf, 0xc5, 0xa0, 0x2b, 0x09,
    0xff, 0xeb, 0x85, 0xf0, 0x69, 0xd1, 0xb9, 0x28, 0x9a, 0x0a, 0xcb, 0x02, 0xd2, 0xd0, 0x88, 0x3d,
    0xff, 0xd7, 0x0d, 0x84, 0x20, 0x45, 0xc5, 0xa3, 0x52, 0xc9, 0x62, 0x23, 0x8a, 0xec, 0x23, 0xd7,
    0xff, 0xae, 0x21, 0x94, 0xec, 0xef, 0xe4, 0x65, 0xb9, 0x5a, 0x2b, 0x08, 0x71, 0x6c, 0x57, 0x83,
    0xff, 0x5c, 0x5d, 0x58, 0x5a, 0xdf, 0xba, 0xd5, 0xcb, 0x17, 0x15, 0x9c, 0xb0, 0x3d, 0xa4, 0xe7,
    0xfe, 0xb9, 0x23, 0x49, 0x3e, 0x94, 0x57, 0x89, 0x5c, 0x13, 0xd1, 0x15, 0x70, 0xeb, 0x99, 0xad,
    0xfd, 0x73, 0xe7, 0xe9, 0x5c, 0xe7, 0xec, 0x2c, 0x67, 0x14, 0x13, 0x6a, 0x88, 0xe4, 0x8b, 0x0b,
    0xfa, 0xee, 0x4c, 0xdd, 0x6f, 0x62, 0xdb, 0x92, 0xbf, 0xbd, 0xd9, 0x1f, 0xdd, 0xfa, 0xad, 0x14,
    0xf5, 0xf6, 0x4b, 0xf3, 0x80, 0x5c, 0x6a, 0x57, 0x16, 0xe0, 0x6e, 0xdf, 0xd6, 0x77, 0xfc, 0xc9,
    0xec, 0x51, 0x5a, 0x56, 0x22, 0x34, 0x29, 0xfa, 0x27, 0x46, 0xff, 0xfe, 0x27, 0x60, 0x99, 0xd0,
    0xda, 0x26, 0x18, 0x69, 0x19, 0x72, 0x7f, 0x6f, 0x75, 0xd9, 0xc0, 0x62, 0x6e, 0x12, 0x9f, 0x08,
    0xb9, 0xe4, 0xe7, 0x3e, 0x40, 0xde, 0x6e, 0xf3, 0x04, 0x26, 0xd7, 0xed, 0xc5, 0x1b, 0xee, 0xbc,
    0x86, 0xfc, 0xa2, 0xe4, 0xb1, 0x86, 0x70, 0xc5, 0xc5, 0x47, 0xd1, 0x38, 0x82, 0x8d, 0x87, 0x48,
    0x47, 0x2d, 0x73, 0xd8, 0x83, 0xbc, 0x7b, 0xb7, 0xe9, 0x31, 0xf0, 0xed, 0x18, 0x2a, 0xde, 0x0d,
    0x13, 0xca, 0x3e, 0x54, 0x07, 0x9d, 0x1a, 0x5d, 0x6b, 0x04, 0x22, 0x72, 0xc4, 0x0f, 0xb6, 0x2e,
    0x01, 0x87, 0xa5, 0x06, 0xe4, 0xea, 0x25, 0x1c, 0x91, 0x68, 0x04, 0xa2, 0x16, 0xc4, 0x88, 0xe7,
    0x00, 0x02, 0x57, 0x29, 0x85, 0x71, 0x26, 0x82, 0xb8, 0xc6, 0xa4, 0xc7, 0xce, 0x97, 0x14, 0xed,
    0x00, 0x00, 0x00, 0x05, 0x7a, 0x53, 0x55, 0x33, 0x86, 0x04, 0xd6, 0x97, 0x9f, 0xf0, 0x68, 0xf7,
];

#[rustfmt::skip]
static CTABLE_86_19: [u8; 304] = [
    0xff, 0xfb, 0x91, 0xd4, 0x5f, 0x1b, 0x9b, 0x80, 0x36, 0x4d, 0x43, 0xb0, 0x67, 0x81, 0x40, 0xd0,
    0xff, 0xf7, 0x23, 0xbc, 0x5e, 0xfd, 0xc3, 0xd7, 0x48, 0xce, 0xb2, 0x9c, 0xf4, 0x91, 0xb6, 0x81,
    0xff, 0xee, 0x47, 0xc7, 0x3f, 0xb9, 0xe6, 0x6b, 0xd7, 0xfe, 0x20, 0x2b, 0x95, 0x56, 0xdd, 0xda,
    0xff, 0xdc, 0x90, 0xc8, 0x7b, 0x8e, 0xf7, 0x20, 0x89, 0x82, 0xf4, 0x7b, 0x53, 0x0e, 0x22, 0xc1,
    0xff, 0xb9, 0x26, 0x78, 0x90, 0x9d, 0x56, 0x0d, 0xb2, 0xe8, 0xaa, 0xfc, 0x6d, 0xe1, 0xd9, 0x5e,
    0xff, 0x72, 0x60, 0x8c, 0xd0, 0x22, 0x78, 0x8c, 0x44, 0xf6, 0x38, 0x60, 0xe3, 0xa2, 0x63, 0x69,
    0xfe, 0xe5, 0x0f, 0x72, 0xa8, 0x77, 0xf4, 0x68, 0xf7, 0xa5, 0x05, 0x47, 0x81, 0x74, 0xcd, 0xe6,
    0xfd, 0xcb, 0x57, 0x9c, 0x2a, 0x5e, 0x12, 0xb4, 0x17, 0x8e, 0x27, 0x36, 0x24, 0x5f, 0x8d, 0xdd,
    0xfb, 0x9b, 0x8c, 0xae, 0xbb, 0x64, 0xa6, 0x39, 0x3a, 0x8c, 0x89, 0x27, 0x5d, 0x02, 0xe7, 0xeb,
    0xf7, 0x4a, 0x64, 0x62, 0x4c, 0x5d, 0xde, 0x0e, 0xdd, 0xe9, 0x3b, 0x60, 0x77, 0x49, 0x26, 0x6e,
    0xee, 0xe0, 0xa3, 0x53, 0xdf, 0x8e, 0x3a, 0x2c, 0xf4, 0xf1, 0xda, 0x6e, 0x82, 0x16, 0x71, 0xf4,
    0xde, 0xe6, 0x74, 0xce, 0x2e, 0xa7, 0x97, 0x3b, 0x3d, 0xa6, 0x6a, 0xd5, 0x76, 0x17, 0x3e, 0x37,
    0xc2, 0x14, 0x82, 0x0b, 0xb0, 0xb1, 0xff, 0xc5, 0x7c, 0xa5, 0x23, 0x98, 0x2b, 0xcf, 0x12, 0x2f,
    0x93, 0x23, 0x16, 0xbe, 0x4b, 0xb1, 0x43, 0x74, 0xb8, 0xcb, 0x8c, 0xc3, 0xda, 0x88, 0xbf, 0x73,
    0x54, 0x91, 0x50, 0xed, 0xc4, 0xfb, 0x88, 0x67, 0x67, 0x3d, 0xd4, 0x9b, 0x72, 0x52, 0x85, 0x70,
    0x1b, 0xef, 0xaf, 0x98, 0xd0, 0x33, 0xae, 0x67, 0xe7, 0x70, 0xd7, 0x8f, 0xc2, 0x03, 0xa0, 0x95,
    0x03, 0x0c, 0x6f, 0x73, 0x93, 0xb1, 0xef, 0x28, 0x1f, 0xf9, 0x21, 0xd1, 0xba, 0x5e, 0x8a, 0xa5,
    0x00, 0x09, 0x4b, 0x37, 0x58, 0xd1, 0x72, 0x8b, 0xb0, 0xfa, 0x54, 0x41, 0x84, 0xd0, 0x37, 0x7d,
    0x00, 0x00, 0x00, 0x56, 0x5f, 0xfd, 0xb8, 0xbc, 0x0f, 0xc0, 0x2d, 0x6e, 0xea, 0x8d, 0xb7, 0x20,
];

#[rustfmt::skip]
static CTABLE_100_20: [u8; 320] = [
    0xff, 0xfc, 0xb9, 0x29, 0x00, 0xfa, 0x52, 0xf8, 0x31, 0x15, 0x23, 0x87, 0x2e, 0xb2, 0x87, 0xc6,
    0xff, 0xf9, 0x72, 0x5c, 0xbe, 0x98, 0xe8, 0x18, 0xe6, 0x82, 0xfd, 0x9b, 0xae, 0xee, 0x2a, 0x1d,
    0xff, 0xf2, 0xe4, 0xe4, 0x6f, 0x36, 0x1f, 0x2e, 0xd6, 0x2d, 0xb3, 0x19, 0x3d, 0x87, 0x03, 0x1f,
    0xff, 0xe5, 0xca, 0x74, 0xa2, 0x17, 0xc6, 0x60, 0xf3, 0x7e, 0xec, 0x9d, 0x96, 0x01, 0xa3, 0x11,
    0xff, 0xcb, 0x97, 0x98, 0x2f, 0xb1, 0xa0, 0xae, 0xdf, 0xc9, 0x5d, 0xde, 0x2e, 0x87, 0x42, 0xfb,
    0xff, 0x97, 0x39, 0xea, 0xf4, 0x24, 0x64, 0x8d, 0x6e, 0x89, 0xe2, 0x44, 0x97, 0xc3, 0x48, 0xcc,
    0xff, 0x2e, 0x9e, 0xb7, 0x72, 0xa6, 0xfb, 0x9b, 0xd1, 0x33, 0x4a, 0x0f, 0x18, 0x12, 0xfe, 0xf9,
    0xfe, 0x5d, 0xe8, 0xae, 0xe2, 0xbc, 0xd2, 0x3e, 0x13, 0x6c, 0x8f, 0xfb, 0x21, 0xd0, 0xe9, 0xa0,
    0xfc, 0xbe, 0x7c, 0x2d, 0xec, 0x7c, 0xe0, 0xd3, 0x2e, 0x35, 0xc8, 0xa9, 0x32, 0x3e, 0x24, 0xa6,
    0xf9, 0x87, 0x92, 0x36, 0xf9, 0xfd, 0x69, 0x53, 0x74, 0x9c, 0x95, 0x55, 0x3e, 0x97, 0x8d, 0xb4,
    0xf3, 0x39, 0x02, 0x3a, 0x7b, 0xcd, 0x61, 0x1c, 0xe6, 0x08, 0x29, 0x9a, 0xd3, 0x31, 0xb9, 0xb7,
    0xe7, 0x15, 0x46, 0xed, 0x05, 0x17, 0xff, 0x1d, 0xa6, 0x05, 0x63, 0x65, 0x42, 0x66, 0xe2, 0xcd,
    0xd0, 0x97, 0x67, 0xc4, 0x75, 0xba, 0x9e, 0x92, 0xea, 0x87, 0x7c, 0x2a, 0x62, 0xd4, 0x1b, 0x05,
    0xa9, 0xf6, 0x62, 0x2a, 0xd3, 0x21, 0xd1, 0x56, 0x75, 0xed, 0xfc, 0x46, 0x9a, 0x0f, 0xd0, 0xbd,
    0x70, 0xd7, 0x3a, 0xbd, 0x5a, 0xb5, 0x3c, 0x32, 0x53, 0x5e, 0x82, 0xab, 0x20, 0x34, 0xcc, 0x17,
    0x31, 0xbd, 0x08, 0x59, 0x66, 0xe7, 0x4a, 0x40, 0x54, 0x80, 0x59, 0xcc, 0xb4, 0x50, 0xbf, 0x06,
    0x09, 0xa9, 0xe8, 0xc7, 0x8d, 0xac, 0x31, 0x97, 0x6e, 0x28, 0xae, 0x0a, 0x15, 0x1c, 0x6c, 0x2a,
    0x00, 0x5d, 0x63, 0x23, 0x33, 0x19, 0x75, 0x2b, 0xc9, 0xad, 0x01, 0x7c, 0xf9, 0xec, 0xe1, 0x31,
    0x00, 0x00, 0x22, 0x11, 0x2d, 0xf7, 0x5e, 0xdb, 0xd5, 0x99, 0x96, 0xdf, 0x93, 0xcc, 0x07, 0xcc,
    0x00, 0x00, 0x00, 0x00, 0x04, 0x88, 0x91, 0x5c, 0xd8, 0x4d, 0xe4, 0x50, 0xa2, 0xed, 0xc8, 0x03,
];

#[rustfmt::skip]
static CTABLE_107_22: [u8; 352] = [
    0xff, 0xfd, 0x23, 0x52, 0x8e, 0x9b, 0x09, 0xcb, 0x9f, 0x25, 0x1f, 0x7a, 0xbd, 0x7e, 0x73, 0x4d,
    0xff, 0xfa, 0x46, 0xad, 0x4e, 0x26, 0x69, 0x93, 0x12, 0xf4, 0xd4, 0xcf, 0x9a, 0x00, 0x09, 0x1c,
    0xff, 0xf4, 0x8d, 0x7b, 0x5f, 0xb0, 0x65, 0x68, 0xec, 0x87, 0x53, 0x63, 0xe0, 0x4e, 0xcf, 0x70,
    0xff, 0xe9, 0x1b, 0x79, 0xca, 0x00, 0xf5, 0x25, 0xbe, 0x33, 0xe6, 0x47, 0xc3, 0x24, 0x5e, 0x29,
    0xff, 0xd2, 0x38, 0xff, 0xa7, 0x12, 0x88, 0xac, 0x37, 0xa2, 0xd5, 0xe9, 0x5f, 0xf1, 0xa9, 0xd2,
    0xff, 0xa4, 0x7a, 0x2e, 0xde, 0xf5, 0xdf, 0x15, 0xb1, 0x22, 0x7c, 0x64, 0x25, 0xc6, 0xce, 0xa7,
    0xff, 0x49, 0x15, 0x16, 0x26, 0x8c, 0x32, 0x8a, 0x45, 0xd9, 0xdb, 0xad, 0xcb, 0xaa, 0x46, 0x9a,
    0xfe, 0x92, 0xac, 0xdf, 0x29, 0x29, 0xec, 0xe1, 0xf0, 0x35, 0x24, 0xe5, 0xa2, 0x4b, 0x06, 0x86,
    0xfd, 0x27, 0x63, 0x14, 0x78, 0xf6, 0xc7, 0xbb, 0x9e, 0x58, 0x32, 0xfb, 0xc4, 0xa6, 0x29, 0xcc,
    0xfa, 0x56, 0xdf, 0xe5, 0xcd, 0xad, 0x79, 0x2b, 0xb0, 0x57, 0x2e, 0x92, 0x7d, 0x79, 0x45, 0xaa,
    0xf4, 0xcd, 0xca, 0xc8, 0x07, 0xef, 0x2b, 0xd4, 0x94, 0x78, 0xf0, 0x87, 0xbd, 0x6b, 0xfc, 0xcc,
    0xea, 0x18, 0xef, 0xfb, 0xb4, 0x1c, 0xe9, 0x6b, 0x44, 0x9b, 0x3e, 0x83, 0x51, 0x96, 0x35, 0x3e,
    0xd6, 0x11, 0x99, 0x26, 0x05, 0x6e, 0x91, 0xec, 0x88, 0xc9, 0x59, 0x58, 0xed, 0xb1, 0x6f, 0x0c,
    0xb3, 0x01, 0x6d, 0x41, 0x43, 0xc0, 0x0c, 0xca, 0x9d, 0x78, 0x5b, 0x4c, 0xcb, 0x92, 0x41, 0xc4,
    0x7d, 0x2a, 0xfe, 0xcb, 0x4d, 0xe1, 0xbd, 0xb8, 0x76, 0x24, 0xaa, 0x5f, 0xcf, 0x22, 0xb4, 0xeb,
    0x3d, 0x33, 0x04, 0x0b, 0x22, 0x5c, 0x11, 0x58, 0xf4, 0x15, 0x12, 0x95, 0x99, 0xdf, 0xcd, 0x59,
    0x0e, 0xa1, 0x5a, 0x17, 0xea, 0xdf, 0xea, 0x82, 0x26, 0xd4, 0x26, 0x3e, 0x6f, 0x46, 0x34, 0x1b,
    0x00, 0xd6, 0x0b, 0x8d, 0x0f, 0x7a, 0xbe, 0xac, 0xb0, 0x91, 0xce, 0x47, 0x68, 0x44, 0x16, 0x21,
    0x00, 0x00, 0xb2, 0xf7, 0x50, 0x5b, 0x4e, 0x45, 0x63, 0x3f, 0xb2, 0x5e, 0x6f, 0x07, 0xdb, 0x2e,
    0x00, 0x00, 0x00, 0x00, 0x7d, 0x1c, 0xda, 0xab, 0x22, 0x42, 0xb9, 0x66, 0x34, 0x40, 0x3e, 0xae,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x3d, 0x25, 0x30, 0xcb, 0xaf, 0xac, 0x90, 0x66,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
];

#[rustfmt::skip]
static CTABLE_129_20: [u8; 320] = [
    0xff, 0xfe, 0x07, 0xea, 0x2f, 0xae, 0xfb, 0x17, 0xad, 0xb7, 0xa5, 0xb7, 0xfb, 0xf2, 0xc4, 0x76,
    0xff, 0xfc, 0x0f, 0xd8, 0x3f, 0xf3, 0xdc, 0x4a, 0x35, 0x90, 0x9f, 0x27, 0xfc, 0x11, 0xa2, 0x97,
    0xff, 0xf8, 0x1f, 0xc0, 0x02, 0x20, 0xc7, 0x20, 0x18, 0x1d, 0xf0, 0x04, 0xce, 0x65, 0x28, 0x1b,
    0xff, 0xf0, 0x3f, 0xbe, 0x0c, 0x31, 0x7c, 0xba, 0xdf, 0xa3, 0x5b, 0x74, 0xec, 0xd0, 0x03, 0xd7,
    0xff, 0xe0, 0x80, 0x74, 0x30, 0x80, 0x8a, 0x5c, 0x9d, 0x58, 0x8f, 0x37, 0x49, 0xc8, 0x39, 0xf9,
    0xff, 0xc1, 0x04, 0xc8, 0x84, 0x69, 0x59, 0xd3, 0x2b, 0x94, 0x3d, 0xff, 0x4f, 0x9d, 0x9f, 0x2f,
    0xff, 0x82, 0x19, 0x0f, 0xae, 0x38, 0x68, 0xfe, 0x95, 0x20, 0xcc, 0x55, 0x68, 0xd2, 0x0a, 0x3c,
    0xff, 0x04, 0x70, 0x0a, 0xb3, 0x75, 0x63, 0x72, 0xb5, 0x55, 0x8e, 0x7f, 0xbc, 0x7b, 0x30, 0xa7,
    0xfe, 0x09, 0xd7, 0x49, 0x02, 0xe2, 0xd5, 0x42, 0xda, 0xd3, 0x9f, 0x16, 0x6b, 0xeb, 0x86, 0xce,
    0xfc, 0x17, 0x87, 0x95, 0xb9, 0xe8, 0x0a, 0xcf, 0x50, 0x8b, 0x92, 0x94, 0x36, 0xc1, 0x57, 0xda,
    0xf8, 0x3e, 0x55, 0x18, 0x6a, 0xb7, 0x7e, 0x9e, 0xc2, 0x57, 0xaf, 0xe2, 0x54, 0x1f, 0xfe, 0xfe,
    0xf0, 0xb8, 0xd4, 0x0c, 0xa2, 0xe0, 0x6f, 0x66, 0xf6, 0x69, 0xaa, 0x74, 0x1e, 0x67, 0x24, 0xa1,
    0xe2, 0x5b, 0x13, 0x09, 0x33, 0x33, 0xe1, 0xe4, 0x97, 0x36, 0x23, 0x06, 0x50, 0xac, 0xcd, 0xef,
    0xc8, 0x24, 0xee, 0x02, 0xc8, 0x5c, 0x5f, 0xa8, 0x8a, 0xea, 0x9d, 0x5d, 0x94, 0x97, 0x4c, 0x51,
    0x9c, 0x79, 0xb9, 0x38, 0x27, 0x21, 0xdc, 0x05, 0xc0, 0x94, 0xff, 0x99, 0x20, 0xb3, 0x9c, 0x20,
    0x5f, 0xa4, 0x93, 0x9d, 0x0c, 0xc8, 0x77, 0x09, 0x14, 0xf1, 0x8c, 0xbc, 0x10, 0x79, 0xe3, 0xbe,
    0x23, 0xbb, 0x8f, 0x5c, 0x05, 0xd2, 0xe6, 0x38, 0x28, 0x67, 0xf3, 0x44, 0x0c, 0x96, 0xfd, 0x33,
    0x04, 0xfc, 0xd2, 0x9d, 0xea, 0x50, 0x1c, 0xa5, 0x7e, 0x01, 0x94, 0x9f, 0xe2, 0x17, 0xdb, 0xc4,
    0x00, 0x18, 0xe0, 0x44, 0x43, 0x7f, 0x44, 0x72, 0x3d, 0x79, 0x52, 0xe9, 0x34, 0x9a, 0xbc, 0x1e,
    0x00, 0x00, 0x02, 0x6a, 0xd1, 0x44, 0x30, 0x2f, 0x7a, 0x9b, 0xac, 0x1d, 0x4d, 0x19, 0x68, 0x5f,
];

#[rustfmt::skip]
static CTABLE_150_20: [u8; 320] = [
    0xff, 0xfe, 0x8b, 0x2d, 0x57, 0xc1, 0x05, 0x39, 0xf1, 0xbf, 0xa8, 0x43, 0xe9, 0x99, 0x34, 0x69,
    0xff, 0xfd, 0x16, 0x5c, 0xce, 0x76, 0xf0, 0xc3, 0x62, 0x35, 0x0f, 0x84, 0x94, 0x07, 0xc1, 0xe3,
    0xff, 0xfa, 0x2c, 0xc2, 0x18, 0xb5, 0x1f, 0xde, 0x9d, 0x38, 0x15, 0xd7, 0xc8, 0x5c, 0xd7, 0x79,
    0xff, 0xf4, 0x59, 0xa6, 0x20, 0x24, 0x62, 0xe7, 0x73, 0xdc, 0x16, 0x9f, 0xed, 0x5c, 0x13, 0x94,
    0xff, 0xe8, 0xb3, 0xd3, 0xf8, 0x1a, 0xb0, 0x8c, 0xa2, 0x03, 0xa1, 0x3c, 0xd9, 0x28, 0x12, 0x7d,
    0xff, 0xd1, 0x69, 0xc6, 0xb6, 0xc8, 0xf8, 0x90, 0x69, 0x00, 0x4d, 0x08, 0x6c, 0x97, 0xec, 0x9c,
    0xff, 0xa2, 0xdc, 0x07, 0xc2, 0x4f, 0x6f, 0x85, 0xaa, 0x43, 0x60, 0xab, 0xe4, 0x08, 0xa6, 0x74,
    0xff, 0x45, 0xd9, 0xf2, 0xac, 0x09, 0x82, 0xea, 0x29, 0xe0, 0x0b, 0x7c, 0x82, 0xce, 0xf3, 0x6f,
    0xfe, 0x8c, 0x3b, 0x40, 0xa9, 0x18, 0xfd, 0xa0, 0xe7, 0x30, 0x2f, 0xa2, 0x5c, 0x74, 0x43, 0x99,
    0xfd, 0x1a, 0x92, 0x65, 0x2b, 0xfd, 0x68, 0xe7, 0x33, 0xd9, 0x77, 0x8d, 0x11, 0xc8, 0xe3, 0x1f,
    0xfa, 0x3d, 0x88, 0x1e, 0x09, 0x37, 0x5e, 0xfb, 0x14, 0x9d, 0xf8, 0x22, 0x43, 0x28, 0x20, 0x41,
    0xf4, 0x9c, 0x3c, 0xa4, 0xd0, 0xb0, 0x77, 0x36, 0xa6, 0x26, 0x55, 0x53, 0x72, 0xbc, 0x40, 0x3b,
    0xe9, 0xba, 0x32, 0xf4, 0x25, 0x0c, 0x66, 0x40, 0x3b, 0x6d, 0x28, 0xa2, 0xda, 0x2d, 0xba, 0x11,
    0xd5, 0x64, 0x78, 0x2e, 0x80, 0x5a, 0xaf, 0x74, 0xfe, 0x73, 0xa6, 0x67, 0xb9, 0xcb, 0xba, 0x43,
    0xb1, 0xe0, 0x57, 0x6b, 0x7e, 0x56, 0xcf, 0x99, 0x28, 0x42, 0xc9, 0x6f, 0x4e, 0xbe, 0xef, 0xa5,
    0x7b, 0x97, 0xfd, 0x7b, 0xbe, 0xab, 0x5f, 0xfe, 0xf1, 0xb8, 0x04, 0x9c, 0x61, 0x4d, 0xb5, 0xfd,
    0x3b, 0xab, 0x67, 0xd1, 0xec, 0x31, 0x6f, 0x19, 0xbd, 0x76, 0xf9, 0x7d, 0x87, 0x50, 0x45, 0x20,
    0x0d, 0xe8, 0x74, 0x9e, 0x9f, 0x6a, 0xeb, 0x73, 0x93, 0xc1, 0x40, 0xd1, 0x70, 0x7d, 0x5f, 0x61,
    0x00, 0xc1, 0x6e, 0xeb, 0xb0, 0xd1, 0xf0, 0x76, 0x8f, 0x1e, 0xcc, 0x8d, 0xac, 0x20, 0x3f, 0x66,
    0x00, 0x00, 0x92, 0x28, 0x6f, 0x70, 0x01, 0x7f, 0x18, 0xfa, 0x7f, 0xe7, 0x30, 0x31, 0x61, 0x74,
];

#[rustfmt::skip]
static CTABLE_163_21: [u8; 336] = [
    0xff, 0xfe, 0xc4, 0x46, 0x18, 0x98, 0x2e, 0x34, 0xa0, 0xe5, 0x24, 0xb7, 0x2a, 0xad, 0xeb, 0x84,
    0xff, 0xfd, 0x88, 0x8d, 0xb6, 0x93, 0x62, 0xe3, 0x05, 0x4e, 0x84, 0x21, 0x65, 0x08, 0xb5, 0x78,
    0xff, 0xfb, 0x11, 0x21, 0x82, 0xab, 0x5e, 0xc0, 0xf2, 0xec, 0xf1, 0x98, 0x78, 0xa0, 0x6a, 0x4c,
    0xff, 0xf6, 0x22, 0x5b, 0x5b, 0x2d, 0x1a, 0x8d, 0xe7, 0xc6, 0xf2, 0xe5, 0x4a, 0x08, 0x19, 0x65,
    0xff, 0xec, 0x45, 0x18, 0x0b, 0xd3, 0x7a, 0x67, 0xaa, 0x0f, 0x75, 0x86, 0x75, 0x88, 0x0f, 0x34,
    0xff, 0xd8, 0x8b, 0xb5, 0x5e, 0x8b, 0x14, 0x66, 0x6c, 0x1b, 0x08, 0xf6, 0xb0, 0x54, 0xe7, 0x5e,
    0xff, 0xb1, 0x1d, 0x7f, 0x60, 0xa7, 0x12, 0x80, 0x53, 0xf0, 0xca, 0x3f, 0x2d, 0xc6, 0xae, 0x55,
    0xff, 0x62, 0x53, 0x4d, 0x90, 0x16, 0x99, 0x2a, 0x21, 0x20, 0xef, 0x22, 0xc3, 0x02, 0x7f, 0x12,
    0xfe, 0xc5, 0x07, 0xb8, 0x67, 0x8a, 0xb9, 0x5d, 0xd8, 0x43, 0xdc, 0xbf, 0xb4, 0x22, 0xcd, 0xa6,
    0xfd, 0x8b, 0x92, 0xf6, 0xcf, 0x82, 0x3d, 0xd6, 0x1b, 0x04, 0x07, 0x8e, 0xa3, 0x8c, 0xa6, 0xd8,
    0xfb, 0x1d, 0x2c, 0x94, 0xc2, 0x8b, 0x38, 0x4c, 0x5c, 0xf2, 0x3d, 0xdf, 0xc4, 0x9a, 0x85, 0x75,
    0xf6, 0x52, 0x38, 0xbe, 0xd6, 0xf4, 0x8d, 0x41, 0xdf, 0xba, 0xb9, 0x7f, 0x79, 0xc3, 0x97, 0x4f,
    0xed, 0x02, 0x1f, 0x77, 0x2b, 0xf3, 0xc0, 0x73, 0xdd, 0x7a, 0x75, 0x91, 0x53, 0x91, 0x52, 0x11,
    0xdb, 0x6c, 0xee, 0x47, 0x29, 0x1c, 0x16, 0x44, 0x76, 0xa8, 0xf9, 0xb2, 0x54, 0x5e, 0x7a, 0x35,
    0xbc, 0x13, 0x8e, 0x07, 0xaa, 0x29, 0x22, 0x03, 0xfa, 0x5e, 0xe2, 0x9c, 0x9b, 0xbe, 0xd6, 0x3e,
    0x8a, 0x2c, 0xba, 0x19, 0xa5, 0xdc, 0x2d, 0x11, 0x45, 0x69, 0x74, 0xad, 0xce, 0xe6, 0xd0, 0x45,
    0x4a, 0x94, 0x40, 0x74, 0x26, 0xeb, 0xab, 0xdb, 0xde, 0xb9, 0x03, 0xbe, 0x0c, 0x0d, 0xa3, 0xb6,
    0x15, 0xba, 0x0b, 0x1d, 0xbd, 0x07, 0x88, 0x02, 0xf4, 0x68, 0xfa, 0xae, 0xcb, 0x69, 0x89, 0xd7,
    0x01, 0xd8, 0x0d, 0x07, 0x08, 0xb5, 0x7c, 0xf5, 0x25, 0x5d, 0x92, 0x66, 0x6e, 0x02, 0x3a, 0xaa,
    0x00, 0x03, 0x66, 0x70, 0x0a, 0x99, 0xd4, 0x50, 0xb0, 0xe3, 0x5c, 0xb8, 0xa7, 0xad, 0x27, 0x69,
    0x00, 0x00, 0x00, 0x0b, 0x8f, 0x9d, 0xb9, 0x16, 0xd6, 0x1e, 0x99, 0xe9, 0xe7, 0x83, 0x26, 0xaa,
];

#[rustfmt::skip]
static CTABLE_172_21: [u8; 336] = [
    0xff, 0xfe, 0xe4, 0x73, 0x40, 0xaf, 0x88, 0x2f, 0xfe, 0xa1, 0xae, 0xee, 0x8f, 0xba, 0x63, 0xea,
    0xff, 0xfd, 0xc8, 0xe7, 0xbb, 0x6f, 0x8c, 0xbd, 0xb5, 0x25, 0x78, 0x78, 0xa1, 0xf8, 0xa3, 0x53,
    0xff, 0xfb, 0x91, 0xd4, 0x5f, 0x1b, 0x9b, 0x80, 0x36, 0x4d, 0x43, 0xb0, 0x67, 0x81, 0x40, 0xd0,
    0xff, 0xf7, 0x23, 0xbc, 0x5e, 0xfd, 0xc3, 0xd7, 0x48, 0xce, 0xb2, 0x9c, 0xf4, 0x91, 0xb6, 0x81,
    0xff, 0xee, 0x47, 0xc7, 0x3f, 0xb9, 0xe6, 0x6b, 0xd7, 0xfe, 0x20, 0x2b, 0x95, 0x56, 0xdd, 0xda,
    0xff, 0xdc, 0x90, 0xc8, 0x7b, 0x8e, 0xf7, 0x20, 0x89, 0x82, 0xf4, 0x7b, 0x53, 0x0e, 0x22, 0xc1,
    0xff, 0xb9, 0x26, 0x78, 0x90, 0x9d, 0x56, 0x0d, 0xb2, 0xe8, 0xaa, 0xfc, 0x6d, 0xe1, 0xd9, 0x5e,
    0xff, 0x72, 0x60, 0x8c, 0xd0, 0x22, 0x78, 0x8c, 0x44, 0xf6, 0x38, 0x60, 0xe3, 0xa2, 0x63, 0x69,
    0xfe, 0xe5, 0x0f, 0x72, 0xa8, 0x77, 0xf4, 0x68, 0xf7, 0xa5, 0x05, 0x47, 0x81, 0x74, 0xcd, 0xe6,
    0xfd, 0xcb, 0x57, 0x9c, 0x2a, 0x5e, 0x12, 0xb4, 0x17, 0x8e, 0x27, 0x36, 0x24, 0x5f, 0x8d, 0xdd,
    0xfb, 0x9b, 0x8c, 0xae, 0xbb, 0x64, 0xa6, 0x39, 0x3a, 0x8c, 0x89, 0x27, 0x5d, 0x02, 0xe7, 0xeb,
    0xf7, 0x4a, 0x64, 0x62, 0x4c, 0x5d, 0xde, 0x0e, 0xdd, 0xe9, 0x3b, 0x60, 0x77, 0x49, 0x26, 0x6e,
    0xee, 0xe0, 0xa3, 0x53, 0xdf, 0x8e, 0x3a, 0x2c, 0xf4, 0xf1, 0xda, 0x6e, 0x82, 0x16, 0x71, 0xf4,
    0xde, 0xe6, 0x74, 0xce, 0x2e, 0xa7, 0x97, 0x3b, 0x3d, 0xa6, 0x6a, 0xd5, 0x76, 0x17, 0x3e, 0x37,
    0xc2, 0x14, 0x82, 0x0b, 0xb0, 0xb1, 0xff, 0xc5, 0x7c, 0xa5, 0x23, 0x98, 0x2b, 0xcf, 0x12, 0x2f,
    0x93, 0x23, 0x16, 0xbe, 0x4b, 0xb1, 0x43, 0x74, 0xb8, 0xcb, 0x8c, 0xc3, 0xda, 0x88, 0xbf, 0x73,
    0x54, 0x91, 0x50, 0xed, 0xc4, 0xfb, 0x88, 0x67, 0x67, 0x3d, 0xd4, 0x9b, 0x72, 0x52, 0x85, 0x70,
    0x1b, 0xef, 0xaf, 0x98, 0xd0, 0x33, 0xae, 0x67, 0xe7, 0x70, 0xd7, 0x8f, 0xc2, 0x03, 0xa0, 0x95,
    0x03, 0x0c, 0x6f, 0x73, 0x93, 0xb1, 0xef, 0x28, 0x1f, 0xf9, 0x21, 0xd1, 0xba, 0x5e, 0x8a, 0xa5,
    0x00, 0x09, 0x4b, 0x37, 0x58, 0xd1, 0x72, 0x8b, 0xb0, 0xfa, 0x54, 0x41, 0x84, 0xd0, 0x37, 0x7d,
    0x00, 0x00, 0x00, 0x56, 0x5f, 0xfd, 0xb8, 0xbc, 0x0f, 0xc0, 0x2d, 0x6e, 0xea, 0x8d, 0xb7, 0x20,
];

#[rustfmt::skip]
static CTABLE_200_21: [u8; 336] = [
    0xff, 0xff, 0x2e, 0x49, 0x3e, 0x8d, 0x41, 0xfa, 0x95, 0x26, 0x9e, 0x28, 0x2e, 0x5d, 0xd3, 0x50,
    0xff, 0xfe, 0x5c, 0x93, 0x28, 0xe6, 0x6e, 0x4a, 0x25, 0xe6, 0x7a, 0x6d, 0x30, 0x90, 0x23, 0xa3,
    0xff, 0xfc, 0xb9, 0x29, 0x00, 0xfa, 0x52, 0xf8, 0x31, 0x15, 0x23, 0x87, 0x2e, 0xb2, 0x87, 0xc6,
    0xff, 0xf9, 0x72, 0x5c, 0xbe, 0x98, 0xe8, 0x18, 0xe6, 0x82, 0xfd, 0x9b, 0xae, 0xee, 0x2a, 0x1d,
    0xff, 0xf2, 0xe4, 0xe4, 0x6f, 0x36, 0x1f, 0x2e, 0xd6, 0x2d, 0xb3, 0x19, 0x3d, 0x87, 0x03, 0x1f,
    0xff, 0xe5, 0xca, 0x74, 0xa2, 0x17, 0xc6, 0x60, 0xf3, 0x7e, 0xec, 0x9d, 0x96, 0x01, 0xa3, 0x11,
    0xff, 0xcb, 0x97, 0x98, 0x2f, 0xb1, 0xa0, 0xae, 0xdf, 0xc9, 0x5d, 0xde, 0x2e, 0x87, 0x42, 0xfb,
    0xff, 0x97, 0x39, 0xea, 0xf4, 0x24, 0x64, 0x8d, 0x6e, 0x89, 0xe2, 0x44, 0x97, 0xc3, 0x48, 0xcc,
    0xff, 0x2e, 0x9e, 0xb7, 0x72, 0xa6, 0xfb, 0x9b, 0xd1, 0x33, 0x4a, 0x0f, 0x18, 0x12, 0xfe, 0xf9,
    0xfe, 0x5d, 0xe8, 0xae, 0xe2, 0xbc, 0xd2, 0x3e, 0x13, 0x6c, 0x8f, 0xfb, 0x21, 0xd0, 0xe9, 0xa0,
    0xfc, 0xbe, 0x7c, 0x2d, 0xec, 0x7c, 0xe0, 0xd3, 0x2e, 0x35, 0xc8, 0xa9, 0x32, 0x3e, 0x24, 0xa6,
    0xf9, 0x87, 0x92, 0x36, 0xf9, 0xfd, 0x69, 0x53, 0x74, 0x9c, 0x95, 0x55, 0x3e, 0x97, 0x8d, 0xb4,
    0xf3, 0x39, 0x02, 0x3a, 0x7b, 0xcd, 0x61, 0x1c, 0xe6, 0x08, 0x29, 0x9a, 0xd3, 0x31, 0xb9, 0xb7,
    0xe7, 0x15, 0x46, 0xed, 0x05, 0x17, 0xff, 0x1d, 0xa6, 0x05, 0x63, 0x65, 0x42, 0x66, 0xe2, 0xcd,
    0xd0, 0x97, 0x67, 0xc4, 0x75, 0xba, 0x9e, 0x92, 0xea, 0x87, 0x7c, 0x2a, 0x62, 0xd4, 0x1b, 0x05,
    0xa9, 0xf6, 0x62, 0x2a, 0xd3, 0x21, 0xd1, 0x56, 0x75, 0xed, 0xfc, 0x46, 0x9a, 0x0f, 0xd0, 0xbd,
    0x70, 0xd7, 0x3a, 0xbd, 0x5a, 0xb5, 0x3c, 0x32, 0x53, 0x5e, 0x82, 0xab, 0x20, 0x34, 0xcc, 0x17,
    0x31, 0xbd, 0x08, 0x59, 0x66, 0xe7, 0x4a, 0x40, 0x54, 0x80, 0x59, 0xcc, 0xb4, 0x50, 0xbf, 0x06,
    0x09, 0xa9, 0xe8, 0xc7, 0x8d, 0xac, 0x31, 0x97, 0x6e, 0x28, 0xae, 0x0a, 0x15, 0x1c, 0x6c, 0x2a,
    0x00, 0x5d, 0x63, 0x23, 0x33, 0x19, 0x75, 0x2b, 0xc9, 0xad, 0x01, 0x7c, 0xf9, 0xec, 0xe1, 0x31,
    0x00, 0x00, 0x22, 0x11, 0x2d, 0xf7, 0x5e, 0xdb, 0xd5, 0x99, 0x96, 0xdf, 0x93, 0xcc, 0x07, 0xcc,
];

#[rustfmt::skip]
static CTABLE_215_22: [u8; 352] = [
    0xff, 0xff, 0x4a, 0x87, 0x0f, 0x75, 0x55, 0x62, 0xd3, 0x9f, 0x5d, 0xa4, 0x96, 0x12, 0x16, 0x7a,
    0xff, 0xfe, 0x95, 0x0e, 0x9f, 0x8e, 0xe8, 0x0c, 0x20, 0x85, 0x3a, 0x66, 0x82, 0xaf, 0xce, 0x7c,
    0xff, 0xfd, 0x2a, 0x1f, 0x41, 0xad, 0x58, 0x6e, 0xd2, 0x0c, 0x45, 0xec, 0x10, 0x82, 0xd7, 0x6d,
    0xff, 0xfa, 0x54, 0x46, 0x8d, 0x8d, 0x6c, 0x2b, 0x6b, 0x58, 0xe3, 0x9a, 0x4e, 0x66, 0x30, 0xdb,
    0xff, 0xf4, 0xa8, 0xad, 0x43, 0x8a, 0x96, 0x0c, 0x4b, 0x41, 0x7c, 0x83, 0x25, 0x53, 0x45, 0x54,
    0xff, 0xe9, 0x51, 0xdb, 0x25, 0xfa, 0xb5, 0x04, 0xc5, 0x6c, 0xaf, 0xd6, 0xd4, 0xe1, 0x47, 0xa7,
    0xff, 0xd2, 0xa5, 0xb8, 0xb0, 0xc1, 0x00, 0x9f, 0xab, 0x1f, 0x0f, 0x18, 0x0e, 0xc5, 0xdd, 0x79,
    0xff, 0xa5, 0x53, 0x7a, 0x3e, 0x6a, 0x14, 0xfa, 0x77, 0x25, 0x49, 0x80, 0x33, 0x0c, 0x3e, 0xa2,
    0xff, 0x4a, 0xc7, 0x12, 0x3f, 0x24, 0x49, 0x62, 0x5a, 0x27, 0xd4, 0x98, 0x95, 0x00, 0x34, 0x01,
    0xfe, 0x96, 0x0e, 0x6e, 0x0b, 0x24, 0x2a, 0xa3, 0xb7, 0x3b, 0x93, 0xd0, 0x9c, 0x3d, 0xdb, 0xdf,
    0xfd, 0x2e, 0x1c, 0x97, 0x47, 0xe1, 0x0b, 0x84, 0x5f, 0xaf, 0xa0, 0xa5, 0x40, 0xc4, 0x79, 0x72,
    0xfa, 0x64, 0x2c, 0xd1, 0x4d, 0xa2, 0x16, 0xc2, 0xe2, 0xe2, 0xab, 0xf4, 0x56, 0x03, 0x8a, 0x44,
    0xf4, 0xe7, 0xce, 0xbb, 0xd6, 0xfd, 0xd8, 0xe5, 0xfd, 0x6b, 0x09, 0x75, 0xfd, 0x44, 0x75, 0x06,
    0xea, 0x4a, 0xb3, 0xfc, 0xcf, 0xc4, 0xbb, 0x68, 0x2e, 0x9d, 0xc7, 0x63, 0x6d, 0x5e, 0x0a, 0x3e,
    0xd6, 0x6c, 0xa6, 0xd6, 0xb8, 0x87, 0x48, 0x8d, 0x9f, 0x77, 0xc8, 0x47, 0x70, 0xfc, 0xa4, 0x56,
    0xb3, 0x99, 0xd5, 0x0c, 0x2e, 0x69, 0x0a, 0xda, 0x77, 0x62, 0x87, 0x47, 0x90, 0x57, 0x8e, 0x2c,
    0x7e, 0x00, 0x7c, 0x5f, 0x62, 0xc3, 0xa4, 0x8b, 0xaa, 0x68, 0xf7, 0x19, 0x58, 0x51, 0xe1, 0x94,
    0x3e, 0x04, 0x7a, 0x6e, 0x21, 0xa5, 0x21, 0x31, 0x76, 0x75, 0x1f, 0x7a, 0x21, 0x39, 0xc4, 0x0e,
    0x0f, 0x06, 0x2b, 0x61, 0x66, 0x4a, 0x30, 0xaf, 0x50, 0xe4, 0x17, 0x64, 0x21, 0x2b, 0x28, 0x95,
    0x00, 0xe1, 0xb9, 0x3b, 0x79, 0xe7, 0x5a, 0x9a, 0x6d, 0x25, 0x83, 0xc2, 0xa4, 0x5c, 0xb6, 0xb3,
    0x00, 0x00, 0xc7, 0x07, 0x20, 0x93, 0x4c, 0xaf, 0x0f, 0x17, 0x55, 0x9a, 0xc1, 0xce, 0x5a, 0x66,
    0x00, 0x00, 0x00, 0x00, 0x9a, 0xbc, 0x14, 0xd7, 0xcd, 0x6b, 0x82, 0xf6, 0x06, 0x26, 0xda, 0xa3,
];

#[rustfmt::skip]
static CTABLE_217_22: [u8; 352] = [
    0xff, 0xff, 0x4d, 0xdb, 0x75, 0x6b, 0x2e, 0x0a, 0x02, 0x7c, 0xb7, 0xfa, 0x25, 0xaa, 0x73, 0x98,
    0xff, 0xfe, 0x9b, 0xb7, 0x66, 0xcd, 0x32, 0x02, 0x3d, 0xd3, 0x5a, 0x8e, 0xce, 0x5b, 0x8a, 0x36,
    0xff, 0xfd, 0x37, 0x70, 0xbd, 0x74, 0x62, 0xb0, 0x50, 0xd2, 0x1c, 0x35, 0x70, 0xf0, 0x91, 0xe0,
    0xff, 0xfa, 0x6e, 0xe9, 0x3a, 0x45, 0xf7, 0xb4, 0xa5, 0xf5, 0x7f, 0x21, 0x25, 0xc3, 0x16, 0xc8,
    0xff, 0xf4, 0xdd, 0xf1, 0x71, 0xaa, 0x76, 0xb0, 0xf0, 0xf3, 0x23, 0x92, 0xba, 0x5d, 0x1a, 0xe1,
    0xff, 0xe9, 0xbc, 0x5e, 0xd5, 0x1d, 0x07, 0x5e, 0x47, 0xa8, 0x97, 0xcd, 0xa2, 0xeb, 0x4d, 0xce,
    0xff, 0xd3, 0x7a, 0xad, 0x5b, 0xcb, 0x2f, 0xa9, 0x11, 0xed, 0x83, 0x59, 0xcc, 0x79, 0xeb, 0x14,
    0xff, 0xa6, 0xfd, 0x18, 0xd1, 0x6d, 0xca, 0xc6, 0x3d, 0x60, 0x5d, 0xf2, 0xd9, 0x57, 0xdf, 0xdc,
    0xff, 0x4e, 0x19, 0x24, 0xa7, 0xa2, 0x64, 0xb4, 0xda, 0x13, 0xe2, 0xcd, 0x9d, 0x57, 0x9c, 0xe5,
    0xfe, 0x9c, 0xad, 0xea, 0x5a, 0xc3, 0xd9, 0x92, 0xf3, 0xc5, 0x6d, 0xd0, 0x9d, 0xac, 0x1b, 0xbb,
    0xfd, 0x3b, 0x49, 0x01, 0x77, 0xe1, 0xd7, 0xa7, 0x89, 0x1d, 0x87, 0x76, 0xcc, 0xab, 0x0c, 0xe0,
    0xfa, 0x7e, 0x3c, 0x07, 0xa2, 0x73, 0x7c, 0xbb, 0x81, 0x22, 0x8a, 0x99, 0xb6, 0x6c, 0x8d, 0xbe,
    0xf5, 0x1a, 0xcb, 0x7e, 0x0e, 0xe1, 0x0d, 0xad, 0x6c, 0xa9, 0xa9, 0x74, 0x85, 0x23, 0x24, 0x80,
    0xea, 0xac, 0x4c, 0x4d, 0x3f, 0xd6, 0xf3, 0x90, 0x4b, 0x4e, 0xb5, 0x33, 0x7f, 0xb8, 0x8c, 0x24,
    0xd7, 0x1f, 0x6f, 0x73, 0xd7, 0x40, 0xb3, 0x52, 0x2b, 0x68, 0xc6, 0xe6, 0xcd, 0xaa, 0x7a, 0x12,
    0xb4, 0xc5, 0xd1, 0x10, 0xc2, 0x22, 0x77, 0xf4, 0xa7, 0x70, 0x9c, 0x7d, 0xe1, 0x94, 0xb7, 0x9a,
    0x7f, 0xa6, 0xc6, 0xda, 0xff, 0x87, 0x9f, 0xd1, 0xc9, 0x64, 0xc9, 0xcf, 0x8f, 0x87, 0xef, 0xb7,
    0x3f, 0xa6, 0xe5, 0xf3, 0xc8, 0x03, 0x73, 0x13, 0x67, 0x27, 0x5c, 0x02, 0x73, 0xab, 0x42, 0x17,
    0x0f, 0xd3, 0x91, 0xfd, 0x03, 0x27, 0x23, 0x18, 0x48, 0xa1, 0xb7, 0x90, 0xfe, 0xcd, 0xb7, 0x0f,
    0x00, 0xfa, 0x79, 0xf5, 0xa0, 0xb2, 0x60, 0x42, 0x43, 0xb1, 0x7f, 0x2c, 0xa0, 0x60, 0xc9, 0x89,
    0x00, 0x00, 0xf5, 0x12, 0x6d, 0xd7, 0xf9, 0xf9, 0x9a, 0xb6, 0x8e, 0x1c, 0x94, 0x14, 0x9d, 0xc8,
    0x00, 0x00, 0x00, 0x00, 0xea, 0x9c, 0x47, 0x93, 0x05, 0xf8, 0x8a, 0x4f, 0x90, 0xc7, 0x85, 0x70,
];

#[rustfmt::skip]
static CTABLE_250_23: [u8; 368] = [
    0xff, 0xff, 0x79, 0xc8, 0x66, 0x29, 0x7d, 0x6f, 0xd3, 0xa6, 0xdd, 0xe2, 0xef, 0x65, 0x20, 0x43,
    0xff, 0xfe, 0xf3, 0x91, 0x12, 0xb1, 0x3b, 0xff, 0xae, 0x9a, 0xdf, 0xf5, 0x1d, 0x70, 0xc4, 0x6e,
    0xff, 0xfd, 0xe7, 0x23, 0x3e, 0xda, 0xe8, 0xed, 0x13, 0x41, 0xc9, 0xc0, 0x85, 0xd7, 0x30, 0x2a,
    0xff, 0xfb, 0xce, 0x4a, 0xe3, 0x92, 0xf9, 0x02, 0x00, 0x9b, 0x6d, 0x8e, 0xac, 0x49, 0x11, 0xb1,
    0xff, 0xf7, 0x9c, 0xa7, 0x5e, 0x75, 0xaa, 0x6f, 0x2b, 0x27, 0xfd, 0x28, 0x14, 0xbd, 0x97, 0x10,
    0xff, 0xef, 0x39, 0x95, 0x19, 0x03, 0x19, 0x24, 0x22, 0x95, 0x6a, 0x62, 0x46, 0x25, 0x82, 0x6c,
    0xff, 0xde, 0x74, 0x43, 0x99, 0x2c, 0x9b, 0xd8, 0x6f, 0x9d, 0x33, 0x55, 0xde, 0x9d, 0x5f, 0xa3,
    0xff, 0xbc, 0xec, 0xec, 0x85, 0x31, 0xdc, 0x81, 0x6f, 0xf8, 0xd3, 0x69, 0xa3, 0xea, 0x61, 0xb5,
    0xff, 0x79, 0xeb, 0x6c, 0x08, 0x01, 0xe6, 0x9f, 0x82, 0xf8, 0x38, 0x90, 0xd6, 0x1a, 0x62, 0xb7,
    0xfe, 0xf4, 0x1d, 0x11, 0x9c, 0x92, 0xdf, 0x88, 0x08, 0xf7, 0xde, 0xcd, 0xd1, 0xee, 0x25, 0x17,
    0xfd, 0xe9, 0x52, 0x76, 0x5f, 0x92, 0xea, 0x3b, 0x7f, 0x06, 0xcd, 0x6c, 0x03, 0x99, 0x92, 0xa4,
    0xfb, 0xd7, 0x01, 0xa5, 0x2e, 0xf2, 0x68, 0x5e, 0x56, 0x8d, 0x16, 0xcb, 0x0e, 0x0f, 0x6d, 0x8c,
    0xf7, 0xbf, 0x51, 0xcd, 0xad, 0x86, 0xe8, 0xc7, 0xbe, 0x15, 0x55, 0x02, 0x86, 0xb3, 0xf6, 0x9e,
    0xef, 0xc2, 0xbe, 0xd6, 0x0f, 0xe7, 0x11, 0x8f, 0x89, 0xd9, 0xa1, 0xc6, 0x23, 0x58, 0x7d, 0x54,
    0xe0, 0x8d, 0x34, 0x79, 0x7c, 0x63, 0xff, 0x9a, 0x36, 0x50, 0x9b, 0x22, 0x2e, 0xb0, 0x08, 0x5d,
    0xc4, 0xf7, 0x69, 0xb7, 0x72, 0x43, 0x99, 0xa4, 0xe1, 0xbc, 0x30, 0xcb, 0xe1, 0xac, 0xb3, 0x8f,
    0x97, 0x8b, 0xc8, 0xfe, 0x12, 0x9e, 0x00, 0xe6, 0xf9, 0x82, 0xf5, 0x76, 0x17, 0xa3, 0x34, 0xce,
    0x59, 0xb6, 0x33, 0x6f, 0x9b, 0xac, 0x95, 0xe5, 0x49, 0x78, 0xbb, 0xa1, 0x35, 0xbb, 0x07, 0x5d,
    0x1f, 0x70, 0x31, 0x70, 0xc7, 0x45, 0x02, 0x4d, 0xb1, 0x28, 0x34, 0x1a, 0x1c, 0xe1, 0x04, 0x96,
    0x03, 0xdc, 0x5d, 0x24, 0x9c, 0x7d, 0x70, 0xe8, 0x37, 0x42, 0xdd, 0xc7, 0x58, 0x4a, 0xa8, 0xed,
    0x00, 0x0e, 0xe7, 0xdf, 0x14, 0x7b, 0x87, 0x2f, 0x07, 0x64, 0x24, 0xa8, 0x72, 0x8e, 0x2f, 0x15,
    0x00, 0x00, 0x00, 0xde, 0x2e, 0x6a, 0x96, 0xde, 0x67, 0xf4, 0xba, 0xf4, 0x24, 0xc7, 0xc6, 0x26,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0xc0, 0xd4, 0x89, 0x48, 0x24, 0x55, 0x82, 0xe7, 0xac, 0x55,
];

#[rustfmt::skip]
static CTABLE_271_23: [u8; 368] = [
    0xff, 0xff, 0x8d, 0xc7, 0x29, 0xa1, 0xae, 0x33, 0x19, 0x81, 0x10, 0x2e, 0xc4, 0x4c, 0x9b, 0x52,
    0xff, 0xff, 0x1b, 0x8e, 0x86, 0x3a, 0x07, 0xf0, 0xb0, 0xa2, 0x3a, 0xce, 0x2b, 0xb1, 0x47, 0x61,
    0xff, 0xfe, 0x37, 0x1d, 0xd8, 0x4e, 0x63, 0x16, 0xbd, 0xd1, 0x76, 0x15, 0xa0, 0x5f, 0xdc, 0x57,
    0xff, 0xfc, 0x6e, 0x3e, 0xe0, 0x03, 0x3b, 0x60, 0x56, 0x62, 0x8c, 0xd3, 0x53, 0x22, 0xfe, 0xbc,
    0xff, 0xf8, 0xdc, 0x8a, 0x7d, 0x89, 0x8e, 0x9a, 0xde, 0x5f, 0x9b, 0x6b, 0xd1, 0xa1, 0x3f, 0x02,
    0xff, 0xf1, 0xb9, 0x47, 0xf0, 0x69, 0x97, 0x4c, 0xd6, 0x08, 0xdd, 0x37, 0x2d, 0x15, 0xd0, 0xfa,
    0xff, 0xe3, 0x73, 0x5b, 0xb0, 0x7e, 0x0f, 0xe9, 0xca, 0x15, 0xc6, 0x99, 0x7e, 0x1c, 0xba, 0xc5,
    0xff, 0xc6, 0xe9, 0xe6, 0x72, 0x31, 0xa4, 0xac, 0x2e, 0xcc, 0xb3, 0xfe, 0x5a, 0x5a, 0x15, 0x28,
    0xff, 0x8d, 0xe0, 0x87, 0xbd, 0xac, 0xd6, 0x29, 0x81, 0x79, 0xc6, 0x19, 0xaa, 0x70, 0xf1, 0x72,
    0xff, 0x1b, 0xf3, 0xef, 0x86, 0x53, 0x16, 0xf2, 0xa9, 0x44, 0x64, 0x10, 0xc7, 0x0b, 0xd0, 0x19,
    0xfe, 0x38, 0xb3, 0x04, 0x8a, 0x90, 0x76, 0x5c, 0x17, 0x96, 0x91, 0x34, 0x58, 0x5a, 0x2c, 0x7b,
    0xfc, 0x74, 0x8f, 0xcb, 0xd2, 0x22, 0xa3, 0xed, 0x2c, 0x21, 0xa7, 0x01, 0x59, 0xbf, 0x39, 0xb8,
    0xf8, 0xf5, 0xb0, 0x2b, 0xe7, 0x2f, 0xf9, 0x29, 0x20, 0x62, 0x0a, 0x5c, 0xa8, 0x3a, 0xfe, 0x33,
    0xf2, 0x1c, 0xf1, 0x1f, 0xbd, 0x31, 0xd9, 0xfc, 0x08, 0xf3, 0xcc, 0xb8, 0xb2, 0x87, 0x0a, 0x2c,
    0xe4, 0xfa, 0xbb, 0x25, 0xa3, 0xc0, 0x69, 0x2f, 0x6a, 0x60, 0xdd, 0xda, 0x7d, 0xbe, 0x5a, 0x8f,
    0xcc, 0xcf, 0x92, 0xed, 0x1a, 0x02, 0x91, 0xed, 0xbe, 0x20, 0x94, 0x0d, 0x16, 0xa4, 0xd7, 0xd1,
    0xa3, 0xdb, 0x7a, 0x78, 0xd1, 0x37, 0x75, 0xfe, 0xff, 0x57, 0x49, 0x5e, 0x5f, 0xf7, 0x29, 0x5a,
    0x68, 0xe1, 0x3a, 0x20, 0x9f, 0xb9, 0xf5, 0x94, 0x46, 0xe3, 0x4b, 0xe2, 0x90, 0x50, 0xfc, 0x2e,
    0x2a, 0xf7, 0xc5, 0x61, 0xbc, 0x52, 0xa8, 0xf2, 0xbd, 0xaa, 0x64, 0x87, 0x3c, 0xab, 0x0f, 0xa2,
    0x07, 0x36, 0x3c, 0x92, 0x8c, 0x94, 0x18, 0x19, 0x23, 0xd9, 0x0a, 0x7b, 0x88, 0x4a, 0xc8, 0xfe,
    0x00, 0x34, 0x02, 0xcd, 0x9f, 0xd8, 0x6d, 0x95, 0x9b, 0xfa, 0x93, 0xa5, 0x2c, 0x97, 0x02, 0xf1,
    0x00, 0x00, 0x0a, 0x91, 0x23, 0x90, 0xcb, 0x95, 0x4a, 0xeb, 0xc4, 0xf0, 0xa7, 0xda, 0x61, 0x17,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x6f, 0xa9, 0x10, 0x9e, 0xdf, 0x32, 0x89, 0xc6, 0xce, 0xc2, 0xb4,
];

static GAUSS_TABLES: [GaussTable; 15] = [
    GaussTable { sigma: 60, ell: 18, prec: 128, k_sigma: 71, k_sigma_bits: 7, table: &CTABLE_60_18 },
    GaussTable { sigma: 64, ell: 18, prec: 128, k_sigma: 76, k_sigma_bits: 7, table: &CTABLE_64_18 },
    GaussTable { sigma: 80, ell: 19, prec: 128, k_sigma: 95, k_sigma_bits: 7, table: &CTABLE_80_19 },
    GaussTable { sigma: 86, ell: 19, prec: 128, k_sigma: 102, k_sigma_bits: 7, table: &CTABLE_86_19 },
    GaussTable { sigma: 100, ell: 20, prec: 128, k_sigma: 118, k_sigma_bits: 7, table: &CTABLE_100_20 },
    GaussTable { sigma: 107, ell: 22, prec: 128, k_sigma: 126, k_sigma_bits: 7, table: &CTABLE_107_22 },
    GaussTable { sigma: 129, ell: 20, prec: 128, k_sigma: 152, k_sigma_bits: 8, table: &CTABLE_129_20 },
    GaussTable { sigma: 150, ell: 20, prec: 128, k_sigma: 177, k_sigma_bits: 8, table: &CTABLE_150_20 },
    GaussTable { sigma: 163, ell: 21, prec: 128, k_sigma: 192, k_sigma_bits: 8, table: &CTABLE_163_21 },
    GaussTable { sigma: 172, ell: 21, prec: 128, k_sigma: 203, k_sigma_bits: 8, table: &CTABLE_172_21 },
    GaussTable { sigma: 200, ell: 21, prec: 128, k_sigma: 236, k_sigma_bits: 8, table: &CTABLE_200_21 },
    GaussTable { sigma: 215, ell: 22, prec: 128, k_sigma: 254, k_sigma_bits: 8, table: &CTABLE_215_22 },
    GaussTable { sigma: 217, ell: 22, prec: 128, k_sigma: 256, k_sigma_bits: 8, table: &CTABLE_217_22 },
    GaussTable { sigma: 250, ell: 23, prec: 128, k_sigma: 295, k_sigma_bits: 9, table: &CTABLE_250_23 },
    GaussTable { sigma: 271, ell: 23, prec: 128, k_sigma: 320, k_sigma_bits: 9, table: &CTABLE_271_23 },
];
