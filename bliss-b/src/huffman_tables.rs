//! Precomputed Huffman codebooks for signature compression.
//!
//! One codebook per parameter profile, over the alphabet
//! (|z1| >> 8) * (2 * nbz2 - 1) + z2 + nbz2 - 1. Codes were built offline
//! from the per-profile coefficient distributions (z1 Gaussian with the
//! profile sigma, z2 the rounding residue of the bit drop); the decode
//! graph walks left on 0 and right on 1 with -1 sentinels on non-leaves.

use crate::huffman::{HuffmanCode, Node, Pair};

#[rustfmt::skip]
static CODE_B0: [Pair; 99] = [
    Pair { code: 0x2d059, bits: 18 }, Pair { code: 0xb414, bits: 16 }, Pair { code: 0x76ce, bits: 15 }, Pair { code: 0x1db0, bits: 13 },
    Pair { code: 0xeda, bits: 12 }, Pair { code: 0x2d2, bits: 10 }, Pair { code: 0x16b, bits: 9 }, Pair { code: 0xeb, bits: 8 },
    Pair { code: 0x5b, bits: 7 }, Pair { code: 0x2c, bits: 6 }, Pair { code: 0x10, bits: 5 }, Pair { code: 0x17, bits: 5 },
    Pair { code: 0xa, bits: 4 }, Pair { code: 0xc, bits: 4 }, Pair { code: 0xf, bits: 4 }, Pair { code: 0x2, bits: 3 },
    Pair { code: 0x3, bits: 3 }, Pair { code: 0x1, bits: 3 }, Pair { code: 0x0, bits: 3 }, Pair { code: 0xd, bits: 4 },
    Pair { code: 0x9, bits: 4 }, Pair { code: 0x1c, bits: 5 }, Pair { code: 0x11, bits: 5 }, Pair { code: 0x77, bits: 7 },
    Pair { code: 0x74, bits: 7 }, Pair { code: 0xec, bits: 8 }, Pair { code: 0x1d4, bits: 9 }, Pair { code: 0x2d1, bits: 10 },
    Pair { code: 0xedb, bits: 12 }, Pair { code: 0x1683, bits: 13 }, Pair { code: 0x76cd, bits: 15 }, Pair { code: 0xb415, bits: 16 },
    Pair { code: 0x2d058, bits: 18 }, Pair { code: 0xb4178b, bits: 24 }, Pair { code: 0x2d05e0, bits: 22 }, Pair { code: 0x1682f3, bits: 21 },
    Pair { code: 0xb417b, bits: 20 }, Pair { code: 0x5a0be, bits: 19 }, Pair { code: 0x1682e, bits: 17 }, Pair { code: 0xed98, bits: 16 },
    Pair { code: 0x76cf, bits: 15 }, Pair { code: 0x1680, bits: 13 }, Pair { code: 0x1db2, bits: 13 }, Pair { code: 0xb4e, bits: 12 },
    Pair { code: 0x5a1, bits: 11 }, Pair { code: 0x76b, bits: 11 }, Pair { code: 0x76e, bits: 11 }, Pair { code: 0x2d4, bits: 10 },
    Pair { code: 0x3ab, bits: 10 }, Pair { code: 0x3b4, bits: 10 }, Pair { code: 0x3aa, bits: 10 }, Pair { code: 0x2d5, bits: 10 },
    Pair { code: 0x76f, bits: 11 }, Pair { code: 0x76a, bits: 11 }, Pair { code: 0x5a6, bits: 11 }, Pair { code: 0xb4f, bits: 12 },
    Pair { code: 0x1db1, bits: 13 }, Pair { code: 0x1681, bits: 13 }, Pair { code: 0x2d04, bits: 14 }, Pair { code: 0xed99, bits: 16 },
    Pair { code: 0x1682d, bits: 17 }, Pair { code: 0x5a0bf, bits: 19 }, Pair { code: 0xb417a, bits: 20 }, Pair { code: 0x1682f2, bits: 21 },
    Pair { code: 0x2d05e1, bits: 22 }, Pair { code: 0xb4178a, bits: 24 }, Pair { code: 0x2d05e26055, bits: 38 }, Pair { code: 0x1682f1302b, bits: 37 },
    Pair { code: 0x2d05e2604, bits: 34 }, Pair { code: 0xb4178980, bits: 32 }, Pair { code: 0xb4178982, bits: 32 }, Pair { code: 0x5a0bc4c3, bits: 31 },
    Pair { code: 0x2d05e262, bits: 30 }, Pair { code: 0x1682f13e, bits: 29 }, Pair { code: 0xb417899, bits: 28 }, Pair { code: 0x5a0bc4e, bits: 27 },
    Pair { code: 0x2d05e20, bits: 26 }, Pair { code: 0x2d05e34, bits: 26 }, Pair { code: 0x1682f12, bits: 25 }, Pair { code: 0x1682f18, bits: 25 },
    Pair { code: 0x1682f1b, bits: 25 }, Pair { code: 0x1682f1e, bits: 25 }, Pair { code: 0x1682f1f, bits: 25 }, Pair { code: 0x1682f1d, bits: 25 },
    Pair { code: 0x1682f1c, bits: 25 }, Pair { code: 0x1682f19, bits: 25 }, Pair { code: 0x1682f11, bits: 25 }, Pair { code: 0x2d05e35, bits: 26 },
    Pair { code: 0x2d05e21, bits: 26 }, Pair { code: 0x5a0bc4d, bits: 27 }, Pair { code: 0xb41789e, bits: 28 }, Pair { code: 0x1682f13f, bits: 29 },
    Pair { code: 0x2d05e263, bits: 30 }, Pair { code: 0x5a0bc4c2, bits: 31 }, Pair { code: 0xb4178983, bits: 32 }, Pair { code: 0x1682f1303, bits: 33 },
    Pair { code: 0x5a0bc4c0b, bits: 35 }, Pair { code: 0xb41789814, bits: 36 }, Pair { code: 0x2d05e26054, bits: 38 },
];
#[rustfmt::skip]
static NODE_B0: [Node; 197] = [
    Node { left: 1, right: 8, index: -1 }, Node { left: 2, right: 5, index: -1 }, Node { left: 3, right: 4, index: -1 }, Node { left: -1, right: -1, index: 18 },
    Node { left: -1, right: -1, index: 17 }, Node { left: 6, right: 7, index: -1 }, Node { left: -1, right: -1, index: 15 }, Node { left: -1, right: -1, index: 16 },
    Node { left: 9, right: 146, index: -1 }, Node { left: 10, right: 15, index: -1 }, Node { left: 11, right: 14, index: -1 }, Node { left: 12, right: 13, index: -1 },
    Node { left: -1, right: -1, index: 10 }, Node { left: -1, right: -1, index: 22 }, Node { left: -1, right: -1, index: 20 }, Node { left: 16, right: 17, index: -1 },
    Node { left: -1, right: -1, index: 12 }, Node { left: 18, right: 145, index: -1 }, Node { left: 19, right: 20, index: -1 }, Node { left: -1, right: -1, index: 9 },
    Node { left: 21, right: 144, index: -1 }, Node { left: 22, right: 139, index: -1 }, Node { left: 23, right: 132, index: -1 }, Node { left: 24, right: 131, index: -1 },
    Node { left: 25, right: 130, index: -1 }, Node { left: 26, right: 29, index: -1 }, Node { left: 27, right: 28, index: -1 }, Node { left: -1, right: -1, index: 41 },
    Node { left: -1, right: -1, index: 57 }, Node { left: 30, right: 129, index: -1 }, Node { left: 31, right: 32, index: -1 }, Node { left: -1, right: -1, index: 58 },
    Node { left: 33, right: 36, index: -1 }, Node { left: 34, right: 35, index: -1 }, Node { left: -1, right: -1, index: 1 }, Node { left: -1, right: -1, index: 31 },
    Node { left: 37, right: 42, index: -1 }, Node { left: 38, right: 41, index: -1 }, Node { left: 39, right: 40, index: -1 }, Node { left: -1, right: -1, index: 32 },
    Node { left: -1, right: -1, index: 0 }, Node { left: -1, right: -1, index: 60 }, Node { left: 43, right: 44, index: -1 }, Node { left: -1, right: -1, index: 38 },
    Node { left: 45, right: 126, index: -1 }, Node { left: 46, right: 123, index: -1 }, Node { left: 47, right: 120, index: -1 }, Node { left: 48, right: 51, index: -1 },
    Node { left: 49, right: 50, index: -1 }, Node { left: -1, right: -1, index: 34 }, Node { left: -1, right: -1, index: 64 }, Node { left: 52, right: 103, index: -1 },
    Node { left: 53, right: 100, index: -1 }, Node { left: 54, right: 59, index: -1 }, Node { left: 55, right: 58, index: -1 }, Node { left: 56, right: 57, index: -1 },
    Node { left: -1, right: -1, index: 76 }, Node { left: -1, right: -1, index: 88 }, Node { left: -1, right: -1, index: 86 }, Node { left: 60, right: 61, index: -1 },
    Node { left: -1, right: -1, index: 78 }, Node { left: 62, right: 93, index: -1 }, Node { left: 63, right: 92, index: -1 }, Node { left: 64, right: 91, index: -1 },
    Node { left: 65, right: 88, index: -1 }, Node { left: 66, right: 85, index: -1 }, Node { left: 67, right: 82, index: -1 }, Node { left: 68, right: 69, index: -1 },
    Node { left: -1, right: -1, index: 69 }, Node { left: 70, right: 81, index: -1 }, Node { left: 71, right: 72, index: -1 }, Node { left: -1, right: -1, index: 68 },
    Node { left: 73, right: 80, index: -1 }, Node { left: 74, right: 75, index: -1 }, Node { left: -1, right: -1, index: 97 }, Node { left: 76, right: 79, index: -1 },
    Node { left: 77, right: 78, index: -1 }, Node { left: -1, right: -1, index: 98 }, Node { left: -1, right: -1, index: 66 }, Node { left: -1, right: -1, index: 67 },
    Node { left: -1, right: -1, index: 96 }, Node { left: -1, right: -1, index: 95 }, Node { left: 83, right: 84, index: -1 }, Node { left: -1, right: -1, index: 70 },
    Node { left: -1, right: -1, index: 94 }, Node { left: 86, right: 87, index: -1 }, Node { left: -1, right: -1, index: 93 }, Node { left: -1, right: -1, index: 71 },
    Node { left: 89, right: 90, index: -1 }, Node { left: -1, right: -1, index: 72 }, Node { left: -1, right: -1, index: 92 }, Node { left: -1, right: -1, index: 74 },
    Node { left: -1, right: -1, index: 89 }, Node { left: 94, right: 95, index: -1 }, Node { left: -1, right: -1, index: 75 }, Node { left: 96, right: 97, index: -1 },
    Node { left: -1, right: -1, index: 90 }, Node { left: 98, right: 99, index: -1 }, Node { left: -1, right: -1, index: 73 }, Node { left: -1, right: -1, index: 91 },
    Node { left: 101, right: 102, index: -1 }, Node { left: -1, right: -1, index: 65 }, Node { left: -1, right: -1, index: 33 }, Node { left: 104, right: 113, index: -1 },
    Node { left: 105, right: 108, index: -1 }, Node { left: 106, right: 107, index: -1 }, Node { left: -1, right: -1, index: 79 }, Node { left: -1, right: -1, index: 85 },
    Node { left: 109, right: 112, index: -1 }, Node { left: 110, right: 111, index: -1 }, Node { left: -1, right: -1, index: 77 }, Node { left: -1, right: -1, index: 87 },
    Node { left: -1, right: -1, index: 80 }, Node { left: 114, right: 117, index: -1 }, Node { left: 115, right: 116, index: -1 }, Node { left: -1, right: -1, index: 84 },
    Node { left: -1, right: -1, index: 83 }, Node { left: 118, right: 119, index: -1 }, Node { left: -1, right: -1, index: 81 }, Node { left: -1, right: -1, index: 82 },
    Node { left: 121, right: 122, index: -1 }, Node { left: -1, right: -1, index: 63 }, Node { left: -1, right: -1, index: 35 }, Node { left: 124, right: 125, index: -1 },
    Node { left: -1, right: -1, index: 62 }, Node { left: -1, right: -1, index: 36 }, Node { left: 127, right: 128, index: -1 }, Node { left: -1, right: -1, index: 37 },
    Node { left: -1, right: -1, index: 61 }, Node { left: -1, right: -1, index: 29 }, Node { left: -1, right: -1, index: 44 }, Node { left: -1, right: -1, index: 27 },
    Node { left: 133, right: 134, index: -1 }, Node { left: -1, right: -1, index: 5 }, Node { left: 135, right: 136, index: -1 }, Node { left: -1, right: -1, index: 54 },
    Node { left: 137, right: 138, index: -1 }, Node { left: -1, right: -1, index: 43 }, Node { left: -1, right: -1, index: 55 }, Node { left: 140, right: 143, index: -1 },
    Node { left: 141, right: 142, index: -1 }, Node { left: -1, right: -1, index: 47 }, Node { left: -1, right: -1, index: 51 }, Node { left: -1, right: -1, index: 6 },
    Node { left: -1, right: -1, index: 8 }, Node { left: -1, right: -1, index: 11 }, Node { left: 147, right: 150, index: -1 }, Node { left: 148, right: 149, index: -1 },
    Node { left: -1, right: -1, index: 13 }, Node { left: -1, right: -1, index: 19 }, Node { left: 151, right: 196, index: -1 }, Node { left: 152, right: 153, index: -1 },
    Node { left: -1, right: -1, index: 21 }, Node { left: 154, right: 163, index: -1 }, Node { left: 155, right: 156, index: -1 }, Node { left: -1, right: -1, index: 24 },
    Node { left: 157, right: 162, index: -1 }, Node { left: 158, right: 159, index: -1 }, Node { left: -1, right: -1, index: 26 }, Node { left: 160, right: 161, index: -1 },
    Node { left: -1, right: -1, index: 50 }, Node { left: -1, right: -1, index: 48 }, Node { left: -1, right: -1, index: 7 }, Node { left: 164, right: 195, index: -1 },
    Node { left: 165, right: 166, index: -1 }, Node { left: -1, right: -1, index: 25 }, Node { left: 167, right: 172, index: -1 }, Node { left: 168, right: 169, index: -1 },
    Node { left: -1, right: -1, index: 49 }, Node { left: 170, right: 171, index: -1 }, Node { left: -1, right: -1, index: 53 }, Node { left: -1, right: -1, index: 45 },
    Node { left: 173, right: 192, index: -1 }, Node { left: 174, right: 189, index: -1 }, Node { left: 175, right: 178, index: -1 }, Node { left: 176, right: 177, index: -1 },
    Node { left: -1, right: -1, index: 3 }, Node { left: -1, right: -1, index: 56 }, Node { left: 179, right: 180, index: -1 }, Node { left: -1, right: -1, index: 42 },
    Node { left: 181, right: 186, index: -1 }, Node { left: 182, right: 185, index: -1 }, Node { left: 183, right: 184, index: -1 }, Node { left: -1, right: -1, index: 39 },
    Node { left: -1, right: -1, index: 59 }, Node { left: -1, right: -1, index: 30 }, Node { left: 187, right: 188, index: -1 }, Node { left: -1, right: -1, index: 2 },
    Node { left: -1, right: -1, index: 40 }, Node { left: 190, right: 191, index: -1 }, Node { left: -1, right: -1, index: 4 }, Node { left: -1, right: -1, index: 28 },
    Node { left: 193, right: 194, index: -1 }, Node { left: -1, right: -1, index: 46 }, Node { left: -1, right: -1, index: 52 }, Node { left: -1, right: -1, index: 23 },
    Node { left: -1, right: -1, index: 14 },
];
pub(crate) static HUFFMAN_B0: HuffmanCode =
    HuffmanCode { code: &CODE_B0, node: &NODE_B0 };

#[rustfmt::skip]
static CODE_B1: [Pair; 45] = [
    Pair { code: 0x95, bits: 8 }, Pair { code: 0x7, bits: 3 }, Pair { code: 0x0, bits: 1 }, Pair { code: 0x6, bits: 3 },
    Pair { code: 0x48, bits: 7 }, Pair { code: 0x253, bits: 10 }, Pair { code: 0x8, bits: 4 }, Pair { code: 0x5, bits: 3 },
    Pair { code: 0x13, bits: 5 }, Pair { code: 0x128, bits: 9 }, Pair { code: 0x948, bits: 12 }, Pair { code: 0x93, bits: 8 },
    Pair { code: 0x4b, bits: 7 }, Pair { code: 0x92, bits: 8 }, Pair { code: 0x949, bits: 12 }, Pair { code: 0x94ab, bits: 16 },
    Pair { code: 0x1294, bits: 13 }, Pair { code: 0x94b, bits: 12 }, Pair { code: 0x252b, bits: 14 }, Pair { code: 0x4a54, bits: 15 },
    Pair { code: 0x12954b, bits: 21 }, Pair { code: 0x252a8, bits: 18 }, Pair { code: 0x12955, bits: 17 }, Pair { code: 0x4a553, bits: 19 },
    Pair { code: 0x94aa4, bits: 20 }, Pair { code: 0x12954ae9, bits: 29 }, Pair { code: 0x94aa50, bits: 24 }, Pair { code: 0x4a552a, bits: 23 },
    Pair { code: 0x12954af, bits: 25 }, Pair { code: 0x12954aea, bits: 29 }, Pair { code: 0x4a552bac, bits: 31 }, Pair { code: 0x252a95a, bits: 26 },
    Pair { code: 0x94aa51, bits: 24 }, Pair { code: 0x4a552bb, bits: 27 }, Pair { code: 0x4a552baf, bits: 31 }, Pair { code: 0x4a552bad, bits: 31 },
    Pair { code: 0x252a95b, bits: 26 }, Pair { code: 0x94aa52, bits: 24 }, Pair { code: 0x252a958, bits: 26 }, Pair { code: 0x252a95d0, bits: 30 },
    Pair { code: 0x4a552bae, bits: 31 }, Pair { code: 0x252a95c, bits: 26 }, Pair { code: 0x94aa53, bits: 24 }, Pair { code: 0x252a959, bits: 26 },
    Pair { code: 0x252a95d1, bits: 30 },
];
#[rustfmt::skip]
static NODE_B1: [Node; 89] = [
    Node { left: 1, right: 2, index: -1 }, Node { left: -1, right: -1, index: 2 }, Node { left: 3, right: 86, index: -1 }, Node { left: 4, right: 85, index: -1 },
    Node { left: 5, right: 6, index: -1 }, Node { left: -1, right: -1, index: 6 }, Node { left: 7, right: 84, index: -1 }, Node { left: 8, right: 13, index: -1 },
    Node { left: 9, right: 10, index: -1 }, Node { left: -1, right: -1, index: 4 }, Node { left: 11, right: 12, index: -1 }, Node { left: -1, right: -1, index: 13 },
    Node { left: -1, right: -1, index: 11 }, Node { left: 14, right: 83, index: -1 }, Node { left: 15, right: 82, index: -1 }, Node { left: 16, right: 17, index: -1 },
    Node { left: -1, right: -1, index: 9 }, Node { left: 18, right: 81, index: -1 }, Node { left: 19, right: 22, index: -1 }, Node { left: 20, right: 21, index: -1 },
    Node { left: -1, right: -1, index: 10 }, Node { left: -1, right: -1, index: 14 }, Node { left: 23, right: 80, index: -1 }, Node { left: 24, right: 25, index: -1 },
    Node { left: -1, right: -1, index: 16 }, Node { left: 26, right: 79, index: -1 }, Node { left: 27, right: 28, index: -1 }, Node { left: -1, right: -1, index: 19 },
    Node { left: 29, right: 78, index: -1 }, Node { left: 30, right: 77, index: -1 }, Node { left: 31, right: 32, index: -1 }, Node { left: -1, right: -1, index: 21 },
    Node { left: 33, right: 76, index: -1 }, Node { left: 34, right: 35, index: -1 }, Node { left: -1, right: -1, index: 24 }, Node { left: 36, right: 75, index: -1 },
    Node { left: 37, right: 44, index: -1 }, Node { left: 38, right: 41, index: -1 }, Node { left: 39, right: 40, index: -1 }, Node { left: -1, right: -1, index: 26 },
    Node { left: -1, right: -1, index: 32 }, Node { left: 42, right: 43, index: -1 }, Node { left: -1, right: -1, index: 37 }, Node { left: -1, right: -1, index: 42 },
    Node { left: 45, right: 46, index: -1 }, Node { left: -1, right: -1, index: 27 }, Node { left: 47, right: 54, index: -1 }, Node { left: 48, right: 51, index: -1 },
    Node { left: 49, right: 50, index: -1 }, Node { left: -1, right: -1, index: 38 }, Node { left: -1, right: -1, index: 43 }, Node { left: 52, right: 53, index: -1 },
    Node { left: -1, right: -1, index: 31 }, Node { left: -1, right: -1, index: 36 }, Node { left: 55, right: 74, index: -1 }, Node { left: 56, right: 57, index: -1 },
    Node { left: -1, right: -1, index: 41 }, Node { left: 58, right: 73, index: -1 }, Node { left: 59, right: 64, index: -1 }, Node { left: 60, right: 63, index: -1 },
    Node { left: 61, right: 62, index: -1 }, Node { left: -1, right: -1, index: 39 }, Node { left: -1, right: -1, index: 44 }, Node { left: -1, right: -1, index: 25 },
    Node { left: 65, right: 66, index: -1 }, Node { left: -1, right: -1, index: 29 }, Node { left: 67, right: 70, index: -1 }, Node { left: 68, right: 69, index: -1 },
    Node { left: -1, right: -1, index: 30 }, Node { left: -1, right: -1, index: 35 }, Node { left: 71, right: 72, index: -1 }, Node { left: -1, right: -1, index: 40 },
    Node { left: -1, right: -1, index: 34 }, Node { left: -1, right: -1, index: 33 }, Node { left: -1, right: -1, index: 28 }, Node { left: -1, right: -1, index: 20 },
    Node { left: -1, right: -1, index: 23 }, Node { left: -1, right: -1, index: 22 }, Node { left: -1, right: -1, index: 15 }, Node { left: -1, right: -1, index: 18 },
    Node { left: -1, right: -1, index: 17 }, Node { left: -1, right: -1, index: 5 }, Node { left: -1, right: -1, index: 0 }, Node { left: -1, right: -1, index: 12 },
    Node { left: -1, right: -1, index: 8 }, Node { left: -1, right: -1, index: 7 }, Node { left: 87, right: 88, index: -1 }, Node { left: -1, right: -1, index: 3 },
    Node { left: -1, right: -1, index: 1 },
];
pub(crate) static HUFFMAN_B1: HuffmanCode =
    HuffmanCode { code: &CODE_B1, node: &NODE_B1 };

#[rustfmt::skip]
static CODE_B2: [Pair; 21] = [
    Pair { code: 0x3, bits: 3 }, Pair { code: 0x1, bits: 1 }, Pair { code: 0x0, bits: 2 }, Pair { code: 0x13, bits: 6 },
    Pair { code: 0x5, bits: 4 }, Pair { code: 0x8, bits: 5 }, Pair { code: 0x93, bits: 9 }, Pair { code: 0x25, bits: 7 },
    Pair { code: 0x48, bits: 8 }, Pair { code: 0x1250, bits: 14 }, Pair { code: 0x496, bits: 12 }, Pair { code: 0x1254, bits: 14 },
    Pair { code: 0x1251, bits: 14 }, Pair { code: 0x497, bits: 12 }, Pair { code: 0x1255, bits: 14 }, Pair { code: 0x1252, bits: 14 },
    Pair { code: 0x248, bits: 11 }, Pair { code: 0x1256, bits: 14 }, Pair { code: 0x1253, bits: 14 }, Pair { code: 0x249, bits: 11 },
    Pair { code: 0x1257, bits: 14 },
];
#[rustfmt::skip]
static NODE_B2: [Node; 41] = [
    Node { left: 1, right: 40, index: -1 }, Node { left: 2, right: 3, index: -1 }, Node { left: -1, right: -1, index: 2 }, Node { left: 4, right: 39, index: -1 },
    Node { left: 5, right: 38, index: -1 }, Node { left: 6, right: 7, index: -1 }, Node { left: -1, right: -1, index: 5 }, Node { left: 8, right: 37, index: -1 },
    Node { left: 9, right: 36, index: -1 }, Node { left: 10, right: 11, index: -1 }, Node { left: -1, right: -1, index: 8 }, Node { left: 12, right: 35, index: -1 },
    Node { left: 13, right: 16, index: -1 }, Node { left: 14, right: 15, index: -1 }, Node { left: -1, right: -1, index: 16 }, Node { left: -1, right: -1, index: 19 },
    Node { left: 17, right: 32, index: -1 }, Node { left: 18, right: 25, index: -1 }, Node { left: 19, right: 22, index: -1 }, Node { left: 20, right: 21, index: -1 },
    Node { left: -1, right: -1, index: 9 }, Node { left: -1, right: -1, index: 12 }, Node { left: 23, right: 24, index: -1 }, Node { left: -1, right: -1, index: 15 },
    Node { left: -1, right: -1, index: 18 }, Node { left: 26, right: 29, index: -1 }, Node { left: 27, right: 28, index: -1 }, Node { left: -1, right: -1, index: 11 },
    Node { left: -1, right: -1, index: 14 }, Node { left: 30, right: 31, index: -1 }, Node { left: -1, right: -1, index: 17 }, Node { left: -1, right: -1, index: 20 },
    Node { left: 33, right: 34, index: -1 }, Node { left: -1, right: -1, index: 10 }, Node { left: -1, right: -1, index: 13 }, Node { left: -1, right: -1, index: 6 },
    Node { left: -1, right: -1, index: 7 }, Node { left: -1, right: -1, index: 3 }, Node { left: -1, right: -1, index: 4 }, Node { left: -1, right: -1, index: 0 },
    Node { left: -1, right: -1, index: 1 },
];
pub(crate) static HUFFMAN_B2: HuffmanCode =
    HuffmanCode { code: &CODE_B2, node: &NODE_B2 };

#[rustfmt::skip]
static CODE_B3: [Pair; 49] = [
    Pair { code: 0x377, bits: 10 }, Pair { code: 0x1a, bits: 5 }, Pair { code: 0x7, bits: 3 }, Pair { code: 0x2, bits: 2 },
    Pair { code: 0x0, bits: 2 }, Pair { code: 0xd, bits: 5 }, Pair { code: 0x1b8, bits: 9 }, Pair { code: 0x6e7, bits: 11 },
    Pair { code: 0x18, bits: 6 }, Pair { code: 0x7, bits: 4 }, Pair { code: 0x2, bits: 3 }, Pair { code: 0xc, bits: 4 },
    Pair { code: 0x6f, bits: 7 }, Pair { code: 0x6e8, bits: 11 }, Pair { code: 0x1b91, bits: 13 }, Pair { code: 0x376, bits: 10 },
    Pair { code: 0x6c, bits: 7 }, Pair { code: 0x19, bits: 6 }, Pair { code: 0x6d, bits: 7 }, Pair { code: 0x375, bits: 10 },
    Pair { code: 0x1b92, bits: 13 }, Pair { code: 0x3726b, bits: 18 }, Pair { code: 0x1b90, bits: 13 }, Pair { code: 0x6e5, bits: 11 },
    Pair { code: 0x6e9, bits: 11 }, Pair { code: 0x6e6, bits: 11 }, Pair { code: 0x3727, bits: 14 }, Pair { code: 0x1b934, bits: 17 },
    Pair { code: 0x6e4d57, bits: 23 }, Pair { code: 0x6e4d4, bits: 19 }, Pair { code: 0xdc98, bits: 16 }, Pair { code: 0xdc9b, bits: 16 },
    Pair { code: 0xdc99, bits: 16 }, Pair { code: 0xdc9ab, bits: 20 }, Pair { code: 0x3726a8, bits: 22 }, Pair { code: 0x6e4d52a, bits: 27 },
    Pair { code: 0xdc9aa4, bits: 24 }, Pair { code: 0x6e4d53, bits: 23 }, Pair { code: 0x3726aa, bits: 22 }, Pair { code: 0x6e4d56, bits: 23 },
    Pair { code: 0x1b9354b, bits: 25 }, Pair { code: 0x6e4d52b, bits: 27 }, Pair { code: 0xdc9aa534, bits: 32 }, Pair { code: 0x3726a94c, bits: 30 },
    Pair { code: 0x1b9354a7, bits: 29 }, Pair { code: 0x6e4d528, bits: 27 }, Pair { code: 0xdc9aa52, bits: 28 }, Pair { code: 0x6e4d529b, bits: 31 },
    Pair { code: 0xdc9aa535, bits: 32 },
];
#[rustfmt::skip]
static NODE_B3: [Node; 97] = [
    Node { left: 1, right: 12, index: -1 }, Node { left: 2, right: 3, index: -1 }, Node { left: -1, right: -1, index: 4 }, Node { left: 4, right: 5, index: -1 },
    Node { left: -1, right: -1, index: 10 }, Node { left: 6, right: 11, index: -1 }, Node { left: 7, right: 10, index: -1 }, Node { left: 8, right: 9, index: -1 },
    Node { left: -1, right: -1, index: 8 }, Node { left: -1, right: -1, index: 17 }, Node { left: -1, right: -1, index: 5 }, Node { left: -1, right: -1, index: 9 },
    Node { left: 13, right: 14, index: -1 }, Node { left: -1, right: -1, index: 3 }, Node { left: 15, right: 96, index: -1 }, Node { left: 16, right: 17, index: -1 },
    Node { left: -1, right: -1, index: 11 }, Node { left: 18, right: 19, index: -1 }, Node { left: -1, right: -1, index: 1 }, Node { left: 20, right: 23, index: -1 },
    Node { left: 21, right: 22, index: -1 }, Node { left: -1, right: -1, index: 16 }, Node { left: -1, right: -1, index: 18 }, Node { left: 24, right: 95, index: -1 },
    Node { left: 25, right: 86, index: -1 }, Node { left: 26, right: 27, index: -1 }, Node { left: -1, right: -1, index: 6 }, Node { left: 28, right: 83, index: -1 },
    Node { left: 29, right: 82, index: -1 }, Node { left: 30, right: 33, index: -1 }, Node { left: 31, right: 32, index: -1 }, Node { left: -1, right: -1, index: 22 },
    Node { left: -1, right: -1, index: 14 }, Node { left: 34, right: 35, index: -1 }, Node { left: -1, right: -1, index: 20 }, Node { left: 36, right: 81, index: -1 },
    Node { left: 37, right: 40, index: -1 }, Node { left: 38, right: 39, index: -1 }, Node { left: -1, right: -1, index: 30 }, Node { left: -1, right: -1, index: 32 },
    Node { left: 41, right: 80, index: -1 }, Node { left: 42, right: 43, index: -1 }, Node { left: -1, right: -1, index: 27 }, Node { left: 44, right: 79, index: -1 },
    Node { left: 45, right: 46, index: -1 }, Node { left: -1, right: -1, index: 29 }, Node { left: 47, right: 78, index: -1 }, Node { left: 48, right: 73, index: -1 },
    Node { left: 49, right: 50, index: -1 }, Node { left: -1, right: -1, index: 34 }, Node { left: 51, right: 72, index: -1 }, Node { left: 52, right: 53, index: -1 },
    Node { left: -1, right: -1, index: 36 }, Node { left: 54, right: 71, index: -1 }, Node { left: 55, right: 68, index: -1 }, Node { left: 56, right: 57, index: -1 },
    Node { left: -1, right: -1, index: 45 }, Node { left: 58, right: 59, index: -1 }, Node { left: -1, right: -1, index: 46 }, Node { left: 60, right: 67, index: -1 },
    Node { left: 61, right: 62, index: -1 }, Node { left: -1, right: -1, index: 43 }, Node { left: 63, right: 66, index: -1 }, Node { left: 64, right: 65, index: -1 },
    Node { left: -1, right: -1, index: 42 }, Node { left: -1, right: -1, index: 48 }, Node { left: -1, right: -1, index: 47 }, Node { left: -1, right: -1, index: 44 },
    Node { left: 69, right: 70, index: -1 }, Node { left: -1, right: -1, index: 35 }, Node { left: -1, right: -1, index: 41 }, Node { left: -1, right: -1, index: 40 },
    Node { left: -1, right: -1, index: 37 }, Node { left: 74, right: 75, index: -1 }, Node { left: -1, right: -1, index: 38 }, Node { left: 76, right: 77, index: -1 },
    Node { left: -1, right: -1, index: 39 }, Node { left: -1, right: -1, index: 28 }, Node { left: -1, right: -1, index: 33 }, Node { left: -1, right: -1, index: 21 },
    Node { left: -1, right: -1, index: 31 }, Node { left: -1, right: -1, index: 26 }, Node { left: -1, right: -1, index: 23 }, Node { left: 84, right: 85, index: -1 },
    Node { left: -1, right: -1, index: 25 }, Node { left: -1, right: -1, index: 7 }, Node { left: 87, right: 92, index: -1 }, Node { left: 88, right: 91, index: -1 },
    Node { left: 89, right: 90, index: -1 }, Node { left: -1, right: -1, index: 13 }, Node { left: -1, right: -1, index: 24 }, Node { left: -1, right: -1, index: 19 },
    Node { left: 93, right: 94, index: -1 }, Node { left: -1, right: -1, index: 15 }, Node { left: -1, right: -1, index: 0 }, Node { left: -1, right: -1, index: 12 },
    Node { left: -1, right: -1, index: 2 },
];
pub(crate) static HUFFMAN_B3: HuffmanCode =
    HuffmanCode { code: &CODE_B3, node: &NODE_B3 };

#[rustfmt::skip]
static CODE_B4: [Pair; 91] = [
    Pair { code: 0x1328, bits: 14 }, Pair { code: 0x130, bits: 10 }, Pair { code: 0xf0, bits: 8 }, Pair { code: 0x3e, bits: 6 },
    Pair { code: 0xd, bits: 4 }, Pair { code: 0x4, bits: 3 }, Pair { code: 0x0, bits: 2 }, Pair { code: 0x5, bits: 3 },
    Pair { code: 0xc, bits: 4 }, Pair { code: 0x3f, bits: 6 }, Pair { code: 0xf1, bits: 8 }, Pair { code: 0x27d, bits: 11 },
    Pair { code: 0x1329, bits: 14 }, Pair { code: 0x4f9e, bits: 16 }, Pair { code: 0x4f8, bits: 12 }, Pair { code: 0x9d, bits: 9 },
    Pair { code: 0x79, bits: 7 }, Pair { code: 0xf, bits: 5 }, Pair { code: 0x5, bits: 4 }, Pair { code: 0xe, bits: 4 },
    Pair { code: 0x6, bits: 4 }, Pair { code: 0xe, bits: 5 }, Pair { code: 0x7a, bits: 7 }, Pair { code: 0x9e, bits: 9 },
    Pair { code: 0x4cb, bits: 12 }, Pair { code: 0x4f9f, bits: 16 }, Pair { code: 0x13e6c, bits: 18 }, Pair { code: 0x132b, bits: 14 },
    Pair { code: 0x263, bits: 11 }, Pair { code: 0x9a, bits: 9 }, Pair { code: 0x23, bits: 7 }, Pair { code: 0x7b, bits: 7 },
    Pair { code: 0x12, bits: 6 }, Pair { code: 0x10, bits: 6 }, Pair { code: 0x22, bits: 7 }, Pair { code: 0x9b, bits: 9 },
    Pair { code: 0x264, bits: 11 }, Pair { code: 0x132a, bits: 14 }, Pair { code: 0x13e6d, bits: 18 }, Pair { code: 0x9f20a, bits: 21 },
    Pair { code: 0x13e43, bits: 18 }, Pair { code: 0x27c9, bits: 15 }, Pair { code: 0x4c4, bits: 12 }, Pair { code: 0x273, bits: 11 },
    Pair { code: 0x133, bits: 10 }, Pair { code: 0x13f, bits: 10 }, Pair { code: 0x138, bits: 10 }, Pair { code: 0x272, bits: 11 },
    Pair { code: 0x4c5, bits: 12 }, Pair { code: 0x27ca, bits: 15 }, Pair { code: 0x13e42, bits: 18 }, Pair { code: 0x9f20b, bits: 21 },
    Pair { code: 0x27c83f6, bits: 27 }, Pair { code: 0x27c83e, bits: 23 }, Pair { code: 0x27c80, bits: 19 }, Pair { code: 0x13e6e, bits: 18 },
    Pair { code: 0x4f9a, bits: 16 }, Pair { code: 0x27cb, bits: 15 }, Pair { code: 0x27ce, bits: 15 }, Pair { code: 0x27cc, bits: 15 },
    Pair { code: 0x4f91, bits: 16 }, Pair { code: 0x13e6f, bits: 18 }, Pair { code: 0x27c81, bits: 19 }, Pair { code: 0x27c831, bits: 23 },
    Pair { code: 0x27c83f7, bits: 27 }, Pair { code: 0x4f907e82, bits: 32 }, Pair { code: 0x9f20fd4, bits: 29 }, Pair { code: 0x13e41f8, bits: 26 },
    Pair { code: 0x4f907f, bits: 24 }, Pair { code: 0x13e41e, bits: 22 }, Pair { code: 0x9f20d, bits: 21 }, Pair { code: 0x4f904, bits: 20 },
    Pair { code: 0x9f20e, bits: 21 }, Pair { code: 0x13e419, bits: 22 }, Pair { code: 0x27c830, bits: 23 }, Pair { code: 0x13e41f9, bits: 26 },
    Pair { code: 0x9f20fd1, bits: 29 }, Pair { code: 0x4f907e83, bits: 32 }, Pair { code: 0x4f907e814, bits: 36 }, Pair { code: 0x13e41fa04, bits: 34 },
    Pair { code: 0x9f20fd03, bits: 33 }, Pair { code: 0x27c83f42, bits: 31 }, Pair { code: 0x13e41faf, bits: 30 }, Pair { code: 0x9f20fd5, bits: 29 },
    Pair { code: 0x4f907e9, bits: 28 }, Pair { code: 0x9f20fd6, bits: 29 }, Pair { code: 0x13e41fae, bits: 30 }, Pair { code: 0x27c83f43, bits: 31 },
    Pair { code: 0x4f907e80, bits: 32 }, Pair { code: 0x27c83f40b, bits: 35 }, Pair { code: 0x4f907e815, bits: 36 },
];
#[rustfmt::skip]
static NODE_B4: [Node; 181] = [
    Node { left: 1, right: 158, index: -1 }, Node { left: 2, right: 3, index: -1 }, Node { left: -1, right: -1, index: 6 }, Node { left: 4, right: 153, index: -1 },
    Node { left: 5, right: 152, index: -1 }, Node { left: 6, right: 11, index: -1 }, Node { left: 7, right: 8, index: -1 }, Node { left: -1, right: -1, index: 33 },
    Node { left: 9, right: 10, index: -1 }, Node { left: -1, right: -1, index: 34 }, Node { left: -1, right: -1, index: 30 }, Node { left: 12, right: 13, index: -1 },
    Node { left: -1, right: -1, index: 32 }, Node { left: 14, right: 39, index: -1 }, Node { left: 15, right: 36, index: -1 }, Node { left: 16, right: 23, index: -1 },
    Node { left: 17, right: 18, index: -1 }, Node { left: -1, right: -1, index: 1 }, Node { left: 19, right: 22, index: -1 }, Node { left: 20, right: 21, index: -1 },
    Node { left: -1, right: -1, index: 42 }, Node { left: -1, right: -1, index: 48 }, Node { left: -1, right: -1, index: 28 }, Node { left: 24, right: 35, index: -1 },
    Node { left: 25, right: 26, index: -1 }, Node { left: -1, right: -1, index: 36 }, Node { left: 27, right: 34, index: -1 }, Node { left: 28, right: 31, index: -1 },
    Node { left: 29, right: 30, index: -1 }, Node { left: -1, right: -1, index: 0 }, Node { left: -1, right: -1, index: 12 }, Node { left: 32, right: 33, index: -1 },
    Node { left: -1, right: -1, index: 37 }, Node { left: -1, right: -1, index: 27 }, Node { left: -1, right: -1, index: 24 }, Node { left: -1, right: -1, index: 44 },
    Node { left: 37, right: 38, index: -1 }, Node { left: -1, right: -1, index: 29 }, Node { left: -1, right: -1, index: 35 }, Node { left: 40, right: 47, index: -1 },
    Node { left: 41, right: 46, index: -1 }, Node { left: 42, right: 43, index: -1 }, Node { left: -1, right: -1, index: 46 }, Node { left: 44, right: 45, index: -1 },
    Node { left: -1, right: -1, index: 47 }, Node { left: -1, right: -1, index: 43 }, Node { left: -1, right: -1, index: 15 }, Node { left: 48, right: 49, index: -1 },
    Node { left: -1, right: -1, index: 23 }, Node { left: 50, right: 151, index: -1 }, Node { left: 51, right: 150, index: -1 }, Node { left: 52, right: 53, index: -1 },
    Node { left: -1, right: -1, index: 14 }, Node { left: 54, right: 133, index: -1 }, Node { left: 55, right: 130, index: -1 }, Node { left: 56, right: 129, index: -1 },
    Node { left: 57, right: 128, index: -1 }, Node { left: 58, right: 125, index: -1 }, Node { left: 59, right: 62, index: -1 }, Node { left: 60, right: 61, index: -1 },
    Node { left: -1, right: -1, index: 54 }, Node { left: -1, right: -1, index: 62 }, Node { left: 63, right: 68, index: -1 }, Node { left: 64, right: 65, index: -1 },
    Node { left: -1, right: -1, index: 71 }, Node { left: 66, right: 67, index: -1 }, Node { left: -1, right: -1, index: 39 }, Node { left: -1, right: -1, index: 51 },
    Node { left: 69, right: 76, index: -1 }, Node { left: 70, right: 75, index: -1 }, Node { left: 71, right: 74, index: -1 }, Node { left: 72, right: 73, index: -1 },
    Node { left: -1, right: -1, index: 74 }, Node { left: -1, right: -1, index: 63 }, Node { left: -1, right: -1, index: 73 }, Node { left: -1, right: -1, index: 70 },
    Node { left: 77, right: 78, index: -1 }, Node { left: -1, right: -1, index: 72 }, Node { left: 79, right: 80, index: -1 }, Node { left: -1, right: -1, index: 69 },
    Node { left: 81, right: 82, index: -1 }, Node { left: -1, right: -1, index: 53 }, Node { left: 83, right: 124, index: -1 }, Node { left: 84, right: 87, index: -1 },
    Node { left: 85, right: 86, index: -1 }, Node { left: -1, right: -1, index: 67 }, Node { left: -1, right: -1, index: 75 }, Node { left: 88, right: 121, index: -1 },
    Node { left: 89, right: 112, index: -1 }, Node { left: 90, right: 111, index: -1 }, Node { left: 91, right: 110, index: -1 }, Node { left: 92, right: 107, index: -1 },
    Node { left: 93, right: 104, index: -1 }, Node { left: 94, right: 95, index: -1 }, Node { left: -1, right: -1, index: 88 }, Node { left: 96, right: 103, index: -1 },
    Node { left: 97, right: 98, index: -1 }, Node { left: -1, right: -1, index: 79 }, Node { left: 99, right: 102, index: -1 }, Node { left: 100, right: 101, index: -1 },
    Node { left: -1, right: -1, index: 78 }, Node { left: -1, right: -1, index: 90 }, Node { left: -1, right: -1, index: 89 }, Node { left: -1, right: -1, index: 80 },
    Node { left: 105, right: 106, index: -1 }, Node { left: -1, right: -1, index: 65 }, Node { left: -1, right: -1, index: 77 }, Node { left: 108, right: 109, index: -1 },
    Node { left: -1, right: -1, index: 81 }, Node { left: -1, right: -1, index: 87 }, Node { left: -1, right: -1, index: 76 }, Node { left: -1, right: -1, index: 84 },
    Node { left: 113, right: 116, index: -1 }, Node { left: 114, right: 115, index: -1 }, Node { left: -1, right: -1, index: 66 }, Node { left: -1, right: -1, index: 83 },
    Node { left: 117, right: 118, index: -1 }, Node { left: -1, right: -1, index: 85 }, Node { left: 119, right: 120, index: -1 }, Node { left: -1, right: -1, index: 86 },
    Node { left: -1, right: -1, index: 82 }, Node { left: 122, right: 123, index: -1 }, Node { left: -1, right: -1, index: 52 }, Node { left: -1, right: -1, index: 64 },
    Node { left: -1, right: -1, index: 68 }, Node { left: 126, right: 127, index: -1 }, Node { left: -1, right: -1, index: 50 }, Node { left: -1, right: -1, index: 40 },
    Node { left: -1, right: -1, index: 60 }, Node { left: -1, right: -1, index: 41 }, Node { left: 131, right: 132, index: -1 }, Node { left: -1, right: -1, index: 49 },
    Node { left: -1, right: -1, index: 57 }, Node { left: 134, right: 145, index: -1 }, Node { left: 135, right: 136, index: -1 }, Node { left: -1, right: -1, index: 59 },
    Node { left: 137, right: 138, index: -1 }, Node { left: -1, right: -1, index: 56 }, Node { left: 139, right: 142, index: -1 }, Node { left: 140, right: 141, index: -1 },
    Node { left: -1, right: -1, index: 26 }, Node { left: -1, right: -1, index: 38 }, Node { left: 143, right: 144, index: -1 }, Node { left: -1, right: -1, index: 55 },
    Node { left: -1, right: -1, index: 61 }, Node { left: 146, right: 147, index: -1 }, Node { left: -1, right: -1, index: 58 }, Node { left: 148, right: 149, index: -1 },
    Node { left: -1, right: -1, index: 13 }, Node { left: -1, right: -1, index: 25 }, Node { left: -1, right: -1, index: 11 }, Node { left: -1, right: -1, index: 45 },
    Node { left: -1, right: -1, index: 18 }, Node { left: 154, right: 155, index: -1 }, Node { left: -1, right: -1, index: 20 }, Node { left: 156, right: 157, index: -1 },
    Node { left: -1, right: -1, index: 21 }, Node { left: -1, right: -1, index: 17 }, Node { left: 159, right: 162, index: -1 }, Node { left: 160, right: 161, index: -1 },
    Node { left: -1, right: -1, index: 5 }, Node { left: -1, right: -1, index: 7 }, Node { left: 163, right: 166, index: -1 }, Node { left: 164, right: 165, index: -1 },
    Node { left: -1, right: -1, index: 8 }, Node { left: -1, right: -1, index: 4 }, Node { left: 167, right: 168, index: -1 }, Node { left: -1, right: -1, index: 19 },
    Node { left: 169, right: 178, index: -1 }, Node { left: 170, right: 175, index: -1 }, Node { left: 171, right: 174, index: -1 }, Node { left: 172, right: 173, index: -1 },
    Node { left: -1, right: -1, index: 2 }, Node { left: -1, right: -1, index: 10 }, Node { left: -1, right: -1, index: 16 }, Node { left: 176, right: 177, index: -1 },
    Node { left: -1, right: -1, index: 22 }, Node { left: -1, right: -1, index: 31 }, Node { left: 179, right: 180, index: -1 }, Node { left: -1, right: -1, index: 3 },
    Node { left: -1, right: -1, index: 9 },
];
pub(crate) static HUFFMAN_B4: HuffmanCode =
    HuffmanCode { code: &CODE_B4, node: &NODE_B4 };
