// -*- mode: rust; -*-
//
// This file is part of gls127.
// See LICENSE for licensing information.

//! Arithmetic on scalars (integers mod the group order).
//!
//! The prime-order subgroup of the curve has order
//! \\( q = 2\^{252} - \mathtt{Q\\_FOLD} \\), a 252-bit prime.  A
//! [`Scalar`] holds a 256-bit little-endian integer in four `u64` limbs.
//!
//! # Masking
//!
//! The multiplication drivers expect scalars in a canonical *masked*
//! form: bits 252 and above cleared, bit 0 cleared.  [`Scalar::masked`]
//! produces this form from arbitrary limbs.  Masking guarantees the
//! endomorphism decomposition yields sub-scalars that fit in 128 bits,
//! and the dropped low bit is re-encoded through the recoding's `lsb`
//! output.
//!
//! # Decomposition and recoding
//!
//! [`Scalar::split`] writes a masked scalar as
//! \\( k \equiv \pm k\_0 \pm k\_1 \lambda \pmod q \\) with
//! \\( |k\_0|, |k\_1| < 2\^{126} \\), using exact rounded division by
//! the short lattice basis derived from \\( q = s\^2 + t\^2 \\).
//! [`Scalar::recode_pair`] then converts the pair into the regular
//! signed-digit form consumed by the multiplication loop: every column
//! of the first word contributes a \\( \pm 1 \\) digit, every column of
//! the second contributes \\( 0 \\) or a digit matching the first's
//! sign, and the top digit is always \\( +1 \\).
//!
//! All scalar plumbing is constant time; only the digit *values* depend
//! on secrets, never addresses or branches.

use core::fmt::Debug;

use subtle::Choice;
use subtle::ConditionallySelectable;
use subtle::ConstantTimeEq;

#[cfg(feature = "rand_core")]
use rand_core::CryptoRngCore;

#[cfg(feature = "zeroize")]
use zeroize::Zeroize;

use crate::constants;

/// The `Scalar` struct holds an integer \\(s\\) in four little-endian
/// 64-bit limbs.
#[derive(Copy, Clone, Default, Eq, PartialEq)]
pub struct Scalar(pub(crate) [u64; 4]);

impl Debug for Scalar {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "Scalar(0x{:016x}{:016x}{:016x}{:016x})",
            self.0[3], self.0[2], self.0[1], self.0[0]
        )
    }
}

impl ConstantTimeEq for Scalar {
    fn ct_eq(&self, other: &Scalar) -> Choice {
        self.0[0].ct_eq(&other.0[0])
            & self.0[1].ct_eq(&other.0[1])
            & self.0[2].ct_eq(&other.0[2])
            & self.0[3].ct_eq(&other.0[3])
    }
}

#[cfg(feature = "zeroize")]
impl Zeroize for Scalar {
    fn zeroize(&mut self) {
        self.0.zeroize();
    }
}

/// A 64×64→128 bit product.
#[inline(always)]
fn m(x: u64, y: u64) -> u128 {
    (x as u128) * (y as u128)
}

/// Accumulate `a * (b0 + 2^64 b1)` into `acc` at limb `offset`,
/// rippling the carry to the end of the buffer.  The caller guarantees
/// the true value fits.
#[inline(always)]
fn mac2(acc: &mut [u64], offset: usize, a: u64, b0: u64, b1: u64) {
    let t = m(a, b0) + acc[offset] as u128;
    acc[offset] = t as u64;
    let t = m(a, b1) + acc[offset + 1] as u128 + (t >> 64);
    acc[offset + 1] = t as u64;
    let mut carry = (t >> 64) as u64;
    for limb in acc[offset + 2..].iter_mut() {
        let (d, c) = limb.overflowing_add(carry);
        *limb = d;
        carry = c as u64;
    }
}

/// Schoolbook 4×4 limb multiplication into 8 limbs.
fn mul_wide(a: &[u64; 4], b: &[u64; 4]) -> [u64; 8] {
    let mut z = [0u64; 8];
    for i in 0..4 {
        let mut carry = 0u64;
        for j in 0..4 {
            let t = m(a[i], b[j]) + z[i + j] as u128 + carry as u128;
            z[i + j] = t as u64;
            carry = (t >> 64) as u64;
        }
        z[i + 4] = carry;
    }
    z
}

/// One folding step of the reduction mod \\(q = 2\^{252} - c\\):
/// rewrite \\(v = v\_1 2\^{252} + v\_0\\) as \\(v\_1 c + v\_0\\).
fn fold252(z: &[u64; 8]) -> [u64; 8] {
    // v1 = z >> 252, at most five limbs
    let t = [
        (z[3] >> 60) | (z[4] << 4),
        (z[4] >> 60) | (z[5] << 4),
        (z[5] >> 60) | (z[6] << 4),
        (z[6] >> 60) | (z[7] << 4),
        z[7] >> 60,
    ];
    // w = v0 + v1 * Q_FOLD
    let mut w = [z[0], z[1], z[2], z[3] & MASK60, 0, 0, 0, 0];
    for (i, &ti) in t.iter().enumerate() {
        mac2(&mut w, i, ti, Q_FOLD_LIMBS[0], Q_FOLD_LIMBS[1]);
    }
    w
}

/// Subtract q if the 4-limb value is not smaller, in constant time.
fn conditional_sub_q(r: &mut [u64; 4]) {
    let mut diff = [0u64; 4];
    let mut borrow = 0u64;
    for i in 0..4 {
        let (d, b1) = r[i].overflowing_sub(constants::Q.0[i]);
        let (d, b2) = d.overflowing_sub(borrow);
        diff[i] = d;
        borrow = (b1 | b2) as u64;
    }
    let keep = Choice::from(borrow as u8);
    for i in 0..4 {
        r[i] = u64::conditional_select(&diff[i], &r[i], keep);
    }
}

/// `Choice(1)` iff the 4-limb value is at least q.
fn ge_q(v: &[u64; 4]) -> Choice {
    let mut borrow = 0u64;
    for i in 0..4 {
        let (d, b1) = v[i].overflowing_sub(constants::Q.0[i]);
        let (_, b2) = d.overflowing_sub(borrow);
        borrow = (b1 | b2) as u64;
    }
    !Choice::from(borrow as u8)
}

const MASK60: u64 = (1u64 << 60) - 1;
const Q_FOLD_LIMBS: [u64; 2] = [
    constants::Q_FOLD as u64,
    (constants::Q_FOLD >> 64) as u64,
];

/// Exact `round(x * e / q)` for `x < q` and `e < 2^127`.
///
/// Following the usual trick for moduli just under a power of two:
/// with \\(z = xe + (q-1)/2\\), the answer is \\(\lfloor z/q \rfloor\\),
/// and two folding steps plus one comparison pin the quotient down
/// because each fold strips a factor of \\(2\^{252}/c\\) off the excess.
fn mul_div_q_rounded(x: &[u64; 4], e: u128) -> u128 {
    let e0 = e as u64;
    let e1 = (e >> 64) as u64;

    // z = x * e + (q - 1)/2, at most 380 bits
    let mut z = [
        constants::HALF_Q[0],
        constants::HALF_Q[1],
        constants::HALF_Q[2],
        constants::HALF_Q[3],
        0,
        0,
    ];
    for i in 0..4 {
        mac2(&mut z, i, x[i], e0, e1);
    }

    let z1 = ((z[3] >> 60) as u128) | ((z[4] as u128) << 4) | ((z[5] as u128) << 68);

    // w = z0 + z1 * Q_FOLD < 2^254
    let mut w = [z[0], z[1], z[2], z[3] & MASK60];
    mac2(&mut w, 0, z1 as u64, Q_FOLD_LIMBS[0], Q_FOLD_LIMBS[1]);
    mac2(&mut w, 1, (z1 >> 64) as u64, Q_FOLD_LIMBS[0], Q_FOLD_LIMBS[1]);

    let w1 = w[3] >> 60;

    // v = w0 + w1 * Q_FOLD < 2q
    let mut v = [w[0], w[1], w[2], w[3] & MASK60];
    mac2(&mut v, 0, w1, Q_FOLD_LIMBS[0], Q_FOLD_LIMBS[1]);

    let extra = ge_q(&v);
    z1 + w1 as u128 + extra.unwrap_u8() as u128
}

impl Scalar {
    /// The scalar zero.
    pub const ZERO: Scalar = Scalar([0, 0, 0, 0]);

    /// The scalar one.
    pub const ONE: Scalar = Scalar([1, 0, 0, 0]);

    /// Construct a `Scalar` from 32 little-endian bytes.  No reduction
    /// is performed; multiplication drivers mask their inputs.
    pub fn from_bytes(bytes: &[u8; 32]) -> Scalar {
        let mut limbs = [0u64; 4];
        for (i, limb) in limbs.iter_mut().enumerate() {
            let mut chunk = [0u8; 8];
            chunk.copy_from_slice(&bytes[i * 8..(i + 1) * 8]);
            *limb = u64::from_le_bytes(chunk);
        }
        Scalar(limbs)
    }

    /// Serialize to 32 little-endian bytes.
    pub fn to_bytes(&self) -> [u8; 32] {
        let mut bytes = [0u8; 32];
        for (i, limb) in self.0.iter().enumerate() {
            bytes[i * 8..(i + 1) * 8].copy_from_slice(&limb.to_le_bytes());
        }
        bytes
    }

    /// Construct from raw little-endian limbs.
    pub const fn from_limbs(limbs: [u64; 4]) -> Scalar {
        Scalar(limbs)
    }

    /// Generate a masked scalar from a cryptographically secure RNG.
    #[cfg(feature = "rand_core")]
    pub fn random<R: CryptoRngCore + ?Sized>(rng: &mut R) -> Scalar {
        let mut bytes = [0u8; 32];
        rng.fill_bytes(&mut bytes);
        Scalar::from_bytes(&bytes).masked()
    }

    /// The canonical masked form: bits 252..256 cleared so the value is
    /// below \\(2\^{252}\\), and bit 0 cleared.  The drivers recover the
    /// even/odd structure through the recoding's `lsb` flag.
    pub fn masked(&self) -> Scalar {
        Scalar([
            self.0[0] & !1,
            self.0[1],
            self.0[2],
            self.0[3] & 0x0fff_ffff_ffff_ffff,
        ])
    }

    /// Compute \\( x y + z \bmod q \\).
    ///
    /// Schoolbook 4×4 multiplication into eight limbs, then three
    /// \\(2\^{252}\\)-folds by `Q_FOLD` bring the value under
    /// \\(2\^{253}\\); at most two conditional subtractions of q finish
    /// the reduction.  Constant time throughout.
    pub fn mul_add(x: &Scalar, y: &Scalar, z: &Scalar) -> Scalar {
        let mut t = mul_wide(&x.0, &y.0);

        // t += z
        let mut carry = 0u64;
        for (i, limb) in t.iter_mut().enumerate() {
            let zi = if i < 4 { z.0[i] } else { 0 };
            let t1 = *limb as u128 + zi as u128 + carry as u128;
            *limb = t1 as u64;
            carry = (t1 >> 64) as u64;
        }

        let t = fold252(&t);
        let t = fold252(&t);
        let t = fold252(&t);
        debug_assert!(t[4..].iter().all(|&w| w == 0));

        let mut r = [t[0], t[1], t[2], t[3]];
        conditional_sub_q(&mut r);
        conditional_sub_q(&mut r);
        Scalar(r)
    }

    /// Decompose a masked scalar against the endomorphism eigenvalue
    /// \\( \lambda \\): returns \\((|k\_0|, s\_0, |k\_1|, s\_1)\\) such
    /// that \\( k \equiv (-1)^{s\_0} |k\_0| + (-1)^{s\_1} |k\_1| \lambda
    /// \pmod q \\), with both magnitudes below \\(2\^{126}\\).
    ///
    /// This is Babai rounding against the orthogonal basis
    /// \\( (s, -t), (t, s) \\) of the kernel lattice, where
    /// \\( s\^2 + t\^2 = q \\) and \\( \lambda = s/t \bmod q \\).
    pub(crate) fn split(&self) -> (u128, Choice, u128, Choice) {
        // Reduce below q; masked scalars are below 2^252 < 2q.
        let mut ki = self.0;
        conditional_sub_q(&mut ki);

        let d = mul_div_q_rounded(&ki, constants::SPLIT_S);
        let c = mul_div_q_rounded(&ki, constants::SPLIT_T);

        // Only the low 128 bits matter: the results are small.
        let klow = ki[0] as u128 | ((ki[1] as u128) << 64);
        let k0 = klow
            .wrapping_sub(d.wrapping_mul(constants::SPLIT_S))
            .wrapping_sub(c.wrapping_mul(constants::SPLIT_T));
        let k1 = d
            .wrapping_mul(constants::SPLIT_T)
            .wrapping_sub(c.wrapping_mul(constants::SPLIT_S));

        let s0 = Choice::from((k0 >> 127) as u8);
        let s1 = Choice::from((k1 >> 127) as u8);
        let n0 = u128::conditional_select(&k0, &k0.wrapping_neg(), s0);
        let n1 = u128::conditional_select(&k1, &k1.wrapping_neg(), s1);
        (n0, s0, n1, s1)
    }

    /// Regular signed-digit recoding of a sub-scalar pair over 128
    /// columns.
    ///
    /// Returns `(u, v, lsb)`:
    ///
    /// * bit `i` of `u` gives the sign of column `i`'s digit of the
    ///   first scalar (`1` is \\(+1\\), `0` is \\(-1\\)); bit 127 is
    ///   always set;
    /// * bit `i` of `v` tells whether the second scalar contributes at
    ///   column `i`, with the sign of `u`'s digit there;
    /// * the digits of `u` encode `a | 1`, and `lsb` is set iff `a` was
    ///   even — the caller compensates by subtracting the first base
    ///   point once.
    ///
    /// Requires `b < 2^127`.
    pub(crate) fn recode_pair(a: u128, b: u128) -> (u128, u128, Choice) {
        debug_assert!(b < 1 << 127);
        let lsb = Choice::from(((a & 1) ^ 1) as u8);

        // a|1 = sum of digits (2 u_i - 1) 2^i  <=>  u = (a|1 - 1)/2 + 2^127
        let u = ((a | 1) >> 1).wrapping_add(1 << 127);

        // Greedy from the least significant end: the parity of the
        // remainder forces each presence bit, and a borrow is pushed up
        // whenever the matched sign is negative.
        let mut v = 0u128;
        let mut r = b;
        for i in 0..128 {
            let vb = r & 1;
            v |= vb << i;
            r = (r >> 1) + (vb & (((u >> i) & 1) ^ 1));
        }
        debug_assert_eq!(r, 0);

        (u, v, lsb)
    }

    /// Comb recoding of an odd scalar below \\(2\^{252}\\) for the
    /// fixed-base tables (parameters w = 8, v = 2, e = 16, d = 32).
    ///
    /// Returns 32 seven-bit row digits (one per column) and the 32-bit
    /// sign word: the scalar equals
    /// \\( \sum\_{j=0}\^{31} \sigma\_j 2\^j (1 + \sum\_{r=1}\^{7}
    /// u\_{j,r} 2\^{32 r}) \\) with \\( \sigma\_j = \pm 1 \\) per the
    /// sign word and \\( u\_{j,r} \\) the digit bits.  Bit 31 of the
    /// sign word is always set.
    pub(crate) fn comb_recode(&self) -> ([u8; 32], u32) {
        debug_assert_eq!(self.0[0] & 1, 1);
        debug_assert_eq!(self.0[3] >> 60, 0);

        // Low 32 bits become the per-column sign word.
        let alpha = self.0[0] as u32;
        let sigma = ((alpha - 1) >> 1).wrapping_add(1 << 31);

        // Remaining 220 bits feed rows 1..7, with the same borrow rule
        // as recode_pair, cycling through the columns row by row.
        let mut r = [
            (self.0[0] >> 32) | (self.0[1] << 32),
            (self.0[1] >> 32) | (self.0[2] << 32),
            (self.0[2] >> 32) | (self.0[3] << 32),
            self.0[3] >> 32,
        ];
        let mut digits = [0u8; 32];
        for idx in 0..224 {
            let col = idx & 31;
            let row = (idx >> 5) as u8;
            let bit = (r[0] & 1) as u8;
            digits[col] |= bit << row;

            let add = bit as u64 & (((sigma >> col) & 1) ^ 1) as u64;
            r[0] = (r[0] >> 1) | (r[1] << 63);
            r[1] = (r[1] >> 1) | (r[2] << 63);
            r[2] = (r[2] >> 1) | (r[3] << 63);
            r[3] >>= 1;
            let (d, c) = r[0].overflowing_add(add);
            r[0] = d;
            let (d, c) = r[1].overflowing_add(c as u64);
            r[1] = d;
            let (d, c) = r[2].overflowing_add(c as u64);
            r[2] = d;
            r[3] = r[3].wrapping_add(c as u64);
        }
        debug_assert_eq!(r, [0u64; 4]);

        (digits, sigma)
    }
}

// ------------------------------------------------------------------------
// Tests
// ------------------------------------------------------------------------

#[cfg(test)]
mod test {
    use super::*;
    use rand::{rngs::StdRng, Rng, SeedableRng};

    fn random_masked(rng: &mut StdRng) -> Scalar {
        Scalar(rng.gen::<[u64; 4]>()).masked()
    }

    /// Big-integer helper: value of a scalar as four limbs.
    fn to_big(s: &Scalar) -> [u64; 4] {
        s.0
    }

    #[test]
    fn mask_clears_expected_bits() {
        let s = Scalar([u64::MAX; 4]).masked();
        assert_eq!(s.0[0] & 1, 0);
        assert_eq!(s.0[3] >> 60, 0);
        assert_eq!(s.0[1], u64::MAX);
    }

    #[test]
    fn mul_add_known_vector() {
        let x = Scalar([
            0xFB8A86C9E6022515,
            0xD97FE1124FD8CC92,
            0x782777E7572BA130,
            0x0A64E21CF80B9B64,
        ]);
        let y = Scalar([
            0xEC7442A2DDA82CE0,
            0x85F16DA062E80241,
            0x21309454C67D3636,
            0xE9296E5F048E01CC,
        ]);
        let z = Scalar([
            0x140A07B4AD54B996,
            0x5B73600FD51C45CD,
            0xC83C13EF9A0A3AC3,
            0x003445C52BC607CF,
        ]);
        let r = Scalar::mul_add(&x, &y, &z);
        assert_eq!(
            to_big(&r),
            [
                0x9A5FC58C4E29F36E,
                0x0A03DAB8CF16D699,
                0x6F161E3B5D31BBCE,
                0x063D680741CBB9A1,
            ]
        );
    }

    #[test]
    fn mul_add_saturated_vector() {
        let x = Scalar([u64::MAX; 4]);
        let mut y = constants::Q;
        y.0[0] -= 1;
        let z = y;
        let r = Scalar::mul_add(&x, &y, &z);
        assert_eq!(
            to_big(&r),
            [
                0xB851F71EBA7E1BF5,
                0x08875560CEA50510,
                0xFFFFFFFFFFFFFFFA,
                0x0FFFFFFFFFFFFFFF,
            ]
        );
    }

    #[test]
    fn mul_add_identities() {
        let mut rng = StdRng::seed_from_u64(0x5ca1);
        for _ in 0..32 {
            let x = random_masked(&mut rng);
            assert_eq!(
                Scalar::mul_add(&x, &Scalar::ONE, &Scalar::ZERO).to_bytes(),
                Scalar::mul_add(&Scalar::ONE, &x, &Scalar::ZERO).to_bytes()
            );
            // q * x + x == x (mod q)
            let qx = Scalar::mul_add(&constants::Q, &x, &x);
            let x_red = Scalar::mul_add(&x, &Scalar::ONE, &Scalar::ZERO);
            assert_eq!(qx.to_bytes(), x_red.to_bytes());
        }
    }

    #[test]
    fn lambda_is_a_square_root_of_minus_one() {
        // λ² + 1 ≡ 0 (mod q)
        let r = Scalar::mul_add(&constants::LAMBDA, &constants::LAMBDA, &Scalar::ONE);
        assert_eq!(r, Scalar::ZERO);
    }

    /// Reconstruct a recoded pair by the digit rule: sign digits
    /// \\( \pm 1 \\) from `u`, matched-sign presence from `v`.
    fn reconstruct(u: u128, v: u128, lsb: Choice) -> (u128, u128) {
        let mut a = 0i128;
        let mut b = 0i128;
        for i in (0..128).rev() {
            let du: i128 = if (u >> i) & 1 == 1 { 1 } else { -1 };
            a = 2 * a + du;
            b = 2 * b + if (v >> i) & 1 == 1 { du } else { 0 };
        }
        let a = (a as u128).wrapping_sub(lsb.unwrap_u8() as u128);
        (a, b as u128)
    }

    #[test]
    fn recode_round_trip_vectors() {
        // Pairs exercising both parities of the first scalar.
        let vectors: [(u128, u128); 2] = [
            (
                0x1af9f9557b981a24_b25a5d1c138484e7,
                0x13b714e78886c7d5_585c40764421b75f,
            ),
            (
                0x018c0a3ded0f112e_7907e0549ac3793e,
                0x15b63bfe365757d5_abf9db0384d24c26,
            ),
        ];
        for &(a, b) in vectors.iter() {
            let (u, v, lsb) = Scalar::recode_pair(a, b);
            assert_eq!(u >> 127, 1);
            assert_eq!(reconstruct(u, v, lsb), (a, b));
        }
    }

    #[test]
    fn recode_round_trip_random() {
        let mut rng = StdRng::seed_from_u64(0x5ca2);
        for _ in 0..500 {
            let a = rng.gen::<u128>() >> 2;
            let b = rng.gen::<u128>() >> 2;
            let (u, v, lsb) = Scalar::recode_pair(a, b);
            assert_eq!(u >> 127, 1);
            assert_eq!(reconstruct(u, v, lsb), (a, b));
        }
        // a = 0 must also survive (decomposition can produce it)
        let (u, v, lsb) = Scalar::recode_pair(0, 5);
        assert_eq!(reconstruct(u, v, lsb), (0, 5));
    }

    #[test]
    fn split_magnitudes_and_congruence() {
        let mut rng = StdRng::seed_from_u64(0x5ca3);
        for _ in 0..200 {
            let k = random_masked(&mut rng);
            let (n0, s0, n1, s1) = k.split();
            assert!(n0 < 1 << 126);
            assert!(n1 < 1 << 126);

            // check k ≡ ±n0 ± n1·λ (mod q) with scalar arithmetic
            let sc = |n: u128| Scalar([n as u64, (n >> 64) as u64, 0, 0]);
            let neg = |x: &Scalar| {
                // q - x for x < q
                let mut r = constants::Q.0;
                let mut borrow = 0u64;
                for i in 0..4 {
                    let (d, b1) = r[i].overflowing_sub(x.0[i]);
                    let (d, b2) = d.overflowing_sub(borrow);
                    r[i] = d;
                    borrow = (b1 | b2) as u64;
                }
                assert_eq!(borrow, 0);
                let mut s = Scalar(r);
                conditional_sub_q(&mut s.0);
                s
            };
            let mut t0 = sc(n0);
            if bool::from(s0) {
                t0 = neg(&t0);
            }
            let mut t1 = sc(n1);
            if bool::from(s1) {
                t1 = neg(&t1);
            }
            let sum = Scalar::mul_add(&t1, &constants::LAMBDA, &t0);
            let k_red = Scalar::mul_add(&k, &Scalar::ONE, &Scalar::ZERO);
            assert_eq!(sum.to_bytes(), k_red.to_bytes());
        }
    }

    #[test]
    fn comb_recode_reconstructs() {
        let mut rng = StdRng::seed_from_u64(0x5ca4);
        for _ in 0..100 {
            let mut k = random_masked(&mut rng);
            k.0[0] |= 1;
            let (digits, sigma) = k.comb_recode();
            assert_eq!(sigma >> 31, 1);

            // value = Σ_j σ_j 2^j (1 + Σ_r u_{j,r} 2^{32 r}), computed in
            // 4-limb two's complement
            let mut acc = [0u64; 4];
            for col in 0..32 {
                let mut contrib = [1u64, 0, 0, 0];
                for row in 0..7u32 {
                    if (digits[col] >> row) & 1 == 1 {
                        // add 2^{32(row+1)}
                        let bit = 32 * (row as usize + 1);
                        contrib[bit / 64] = contrib[bit / 64].wrapping_add(1 << (bit % 64));
                    }
                }
                // shift by col
                let mut shifted = [0u64; 4];
                for i in 0..4 {
                    shifted[i] = contrib[i] << col;
                    if i > 0 && col > 0 {
                        shifted[i] |= contrib[i - 1] >> (64 - col);
                    }
                }
                let negate = (sigma >> col) & 1 == 0;
                let mut carry = 0u64;
                for i in 0..4 {
                    let term = if negate { !shifted[i] } else { shifted[i] };
                    let extra = if negate && i == 0 { 1 } else { 0 };
                    let t = acc[i] as u128 + term as u128 + carry as u128 + extra as u128;
                    acc[i] = t as u64;
                    carry = (t >> 64) as u64;
                }
            }
            assert_eq!(acc, k.0);
        }
    }

    #[test]
    fn bytes_round_trip() {
        let mut rng = StdRng::seed_from_u64(0x5ca5);
        for _ in 0..16 {
            let s = Scalar(rng.gen::<[u64; 4]>());
            assert_eq!(Scalar::from_bytes(&s.to_bytes()), s);
        }
    }
}
