// -*- mode: rust; -*-
//
// This file is part of gls127.
// See LICENSE for licensing information.

//! Field arithmetic modulo \\(p = 2\^{127} - 1\\).
//!
//! An [`Fp`] carries its value in a single `u128`. Because \\(p\\) is a
//! Mersenne prime, reduction is a matter of folding bits at and above
//! position 127 back into the low bits (\\(2\^{127} \equiv 1\\),
//! \\(2\^{128} \equiv 2\\)). Arithmetic is *lazy*: results of `add`,
//! `sub`, `mul` and friends are only guaranteed to fit in 128 bits, not
//! to be canonical. [`Fp::reduce`] produces the unique representative in
//! \\([0, p)\\) and is applied before serializing or comparing.
//!
//! All operations run in constant time; branchless selection is done
//! through [`subtle`].

use core::ops::{Add, Mul, Neg, Sub};

use subtle::Choice;
use subtle::ConditionallySelectable;
use subtle::ConstantTimeEq;

#[cfg(feature = "zeroize")]
use zeroize::Zeroize;

/// An element of the field \\( \mathbb Z / (2\^{127} - 1) \\), in lazily
/// reduced form: any 128-bit value, congruence is what matters.
#[derive(Copy, Clone, Default)]
pub(crate) struct Fp(pub(crate) u128);

impl core::fmt::Debug for Fp {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "Fp(0x{:032x})", self.reduce().0)
    }
}

impl ConstantTimeEq for Fp {
    /// Test equality between two `Fp`s.  Since the internal
    /// representation is not canonical, both sides are completely
    /// reduced before comparison.
    fn ct_eq(&self, other: &Fp) -> Choice {
        self.reduce().0.ct_eq(&other.reduce().0)
    }
}

impl PartialEq for Fp {
    fn eq(&self, other: &Fp) -> bool {
        self.ct_eq(other).into()
    }
}

impl Eq for Fp {}

impl ConditionallySelectable for Fp {
    fn conditional_select(a: &Fp, b: &Fp, choice: Choice) -> Fp {
        Fp(u128::conditional_select(&a.0, &b.0, choice))
    }
}

#[cfg(feature = "zeroize")]
impl Zeroize for Fp {
    fn zeroize(&mut self) {
        self.0.zeroize();
    }
}

impl<'a, 'b> Add<&'b Fp> for &'a Fp {
    type Output = Fp;
    fn add(self, rhs: &'b Fp) -> Fp {
        // Fold the carry out of the 128-bit sum back in as 2^128 = 2.
        // A second carry can only appear when the first folded sum was
        // within 2 of 2^128, so the last fold cannot carry again.
        let (s, c1) = self.0.overflowing_add(rhs.0);
        let (s, c2) = s.overflowing_add((c1 as u128) << 1);
        Fp(s.wrapping_add((c2 as u128) << 1))
    }
}

define_add_variants!(LHS = Fp, RHS = Fp, Output = Fp);

impl<'a, 'b> Sub<&'b Fp> for &'a Fp {
    type Output = Fp;
    fn sub(self, rhs: &'b Fp) -> Fp {
        // Mirror image of addition: a borrow out of the 128-bit
        // difference is repaid as 2.
        let (d, b1) = self.0.overflowing_sub(rhs.0);
        let (d, b2) = d.overflowing_sub((b1 as u128) << 1);
        Fp(d.wrapping_sub((b2 as u128) << 1))
    }
}

define_sub_variants!(LHS = Fp, RHS = Fp, Output = Fp);

impl<'a, 'b> Mul<&'b Fp> for &'a Fp {
    type Output = Fp;
    fn mul(self, rhs: &'b Fp) -> Fp {
        let (lo, hi) = mul_wide(self.0, rhs.0);
        fold_wide(lo, hi)
    }
}

define_mul_variants!(LHS = Fp, RHS = Fp, Output = Fp);

impl<'a> Neg for &'a Fp {
    type Output = Fp;
    fn neg(self) -> Fp {
        &Fp::ZERO - self
    }
}

impl Neg for Fp {
    type Output = Fp;
    fn neg(self) -> Fp {
        -&self
    }
}

/// Schoolbook 2x2 limb product, returning the 256-bit result as
/// `(low, high)` halves.
#[inline(always)]
fn mul_wide(x: u128, y: u128) -> (u128, u128) {
    let x0 = x as u64 as u128;
    let x1 = (x >> 64) as u64 as u128;
    let y0 = y as u64 as u128;
    let y1 = (y >> 64) as u64 as u128;

    let z0 = x0 * y0;
    let z3 = x1 * y1;
    let (mid, mc) = (x0 * y1).overflowing_add(x1 * y0);

    let (lo, c) = z0.overflowing_add(mid << 64);
    // hi = floor(x*y / 2^128) < 2^128, so these adds cannot overflow.
    let hi = z3 + (mid >> 64) + ((mc as u128) << 64) + (c as u128);
    (lo, hi)
}

/// Reduce a 256-bit value `lo + 2^128 * hi` into a lazy 128-bit residue
/// using \\(2\^{128} \equiv 2 \pmod p\\).
#[inline(always)]
fn fold_wide(lo: u128, hi: u128) -> Fp {
    let top = hi >> 127;
    let (s, c1) = lo.overflowing_add(hi << 1);
    let (s, c2) = s.overflowing_add((c1 as u128 + top) << 1);
    Fp(s.wrapping_add((c2 as u128) << 1))
}

impl Fp {
    pub(crate) const ZERO: Fp = Fp(0);
    pub(crate) const ONE: Fp = Fp(1);

    /// The prime \\(p = 2\^{127} - 1\\).
    pub(crate) const MODULUS: u128 = (1u128 << 127) - 1;

    /// Construct a field element from a small constant.
    #[allow(dead_code)]
    pub(crate) const fn from_u32(k: u32) -> Fp {
        Fp(k as u128)
    }

    /// Completely reduce to the canonical representative in \\([0, p)\\).
    ///
    /// Folding the top bit twice brings the value to at most \\(p\\);
    /// the final conditional selection maps \\(p\\) itself to zero.
    pub(crate) fn reduce(&self) -> Fp {
        let r = (self.0 & Fp::MODULUS) + (self.0 >> 127);
        let r = (r & Fp::MODULUS) + (r >> 127);
        Fp(u128::conditional_select(&r, &0, r.ct_eq(&Fp::MODULUS)))
    }

    /// Squaring; saves two limb products over the generic multiply.
    pub(crate) fn square(&self) -> Fp {
        let x0 = self.0 as u64 as u128;
        let x1 = (self.0 >> 64) as u64 as u128;

        let z0 = x0 * x0;
        let z3 = x1 * x1;
        let cross = x0 * x1;
        let mid = cross << 1;
        let mc = cross >> 127;

        let (lo, c) = z0.overflowing_add(mid << 64);
        let hi = z3 + (mid >> 64) + (mc << 64) + (c as u128);
        fold_wide(lo, hi)
    }

    /// Compute `self^(2^k)` by successive squarings.
    pub(crate) fn pow2k(&self, k: u32) -> Fp {
        debug_assert!(k > 0);
        let mut z = self.square();
        for _ in 1..k {
            z = z.square();
        }
        z
    }

    /// Multiply by a small public constant.
    pub(crate) fn mul_small(&self, k: u32) -> Fp {
        let a = (self.0 as u64 as u128) * k as u128;
        let b = ((self.0 >> 64) as u64 as u128) * k as u128;
        // a + 2*(b >> 64) < 2^97: folding the high limb product first
        // keeps every intermediate inside 128 bits.
        let (s, c1) = (a + ((b >> 64) << 1)).overflowing_add(b << 64);
        let (s, c2) = s.overflowing_add((c1 as u128) << 1);
        Fp(s.wrapping_add((c2 as u128) << 1))
    }

    /// Test whether this element is congruent to zero.
    pub(crate) fn is_zero(&self) -> Choice {
        self.reduce().0.ct_eq(&0)
    }

    /// True iff the raw representation is already canonical.
    #[cfg(test)]
    pub(crate) fn is_in_field(&self) -> bool {
        self.0 < Fp::MODULUS
    }

    /// Raise to \\(2\^{125} - 1\\), a helper for `invert`.
    ///
    /// Runs of ones are assembled by the usual shift-and-join ladder:
    /// squaring k times shifts the exponent left by k, multiplying
    /// joins two runs.
    #[rustfmt::skip] // keep alignment of explanatory comments
    fn pow_ones125(&self) -> Fp {
        let ones2   = &self.square() * self;                //  2 ones
        let ones3   = &ones2.pow2k(1) * self;               //  3 ones
        let ones6   = &ones3.pow2k(3) * &ones3;             //  6 ones
        let ones12  = &ones6.pow2k(6) * &ones6;             // 12 ones
        let ones15  = &ones12.pow2k(3) * &ones3;            // 15 ones
        let ones30  = &ones15.pow2k(15) * &ones15;          // 30 ones
        let ones31  = &ones30.pow2k(1) * self;              // 31 ones
        let ones62  = &ones31.pow2k(31) * &ones31;          // 62 ones
        let ones124 = &ones62.pow2k(62) * &ones62;          // 124 ones
        &ones124.pow2k(1) * self                            // 125 ones
    }

    /// Fermat inversion: `self^(p - 2)`.  Since
    /// \\(p - 2 = 2\^{127} - 3 = (2\^{125} - 1) \cdot 4 + 1\\), two
    /// squarings and one multiply finish the chain. The inverse of zero
    /// is zero.
    pub(crate) fn invert(&self) -> Fp {
        &self.pow_ones125().pow2k(2) * self
    }

    /// Serialize the canonical representative to 16 little-endian bytes.
    /// The top bit of the last byte is always zero.
    pub(crate) fn to_bytes(self) -> [u8; 16] {
        self.reduce().0.to_le_bytes()
    }

    /// Parse 16 little-endian bytes, ignoring the top bit.  Any 127-bit
    /// payload is accepted; the single non-canonical one (\\(p\\) itself)
    /// is reported through the companion flag of
    /// [`from_bytes_checked`](Fp::from_bytes_checked).
    pub(crate) fn from_bytes(bytes: &[u8; 16]) -> Fp {
        Fp(u128::from_le_bytes(*bytes) & Fp::MODULUS)
    }

    /// Parse as [`from_bytes`](Fp::from_bytes), also reporting whether
    /// the masked payload was canonical.
    pub(crate) fn from_bytes_checked(bytes: &[u8; 16]) -> (Fp, Choice) {
        let x = Fp::from_bytes(bytes);
        let canonical = !x.0.ct_eq(&Fp::MODULUS);
        (x, canonical)
    }
}

// ------------------------------------------------------------------------
// Tests
// ------------------------------------------------------------------------

#[cfg(test)]
mod test {
    use super::*;
    use subtle::ConditionallyNegatable;

    /// Boundary values exercising every carry path.
    const EDGES: &[u128] = &[
        0,
        1,
        2,
        0xffff_ffff_ffff_ffff,
        1 << 64,
        (1 << 64) + 1,
        Fp::MODULUS - 1,
        Fp::MODULUS,
        Fp::MODULUS + 1,
        u128::MAX - 1,
        u128::MAX,
    ];

    const CR1: u128 = 0x6541AA8FCD8C4C65_09744238EF199911;
    const CR2: u128 = 0x5281A3886F35ED6F_D204049593D4A1D1;
    const CX3: u128 = 0x3F42AC9208EEFF87_B766E7802FB7635F;

    fn canon(x: u128) -> u128 {
        (x % Fp::MODULUS) as u128
    }

    #[test]
    fn reduce_is_canonical() {
        for &x in EDGES {
            let r = Fp(x).reduce();
            assert!(r.is_in_field());
            assert_eq!(r.0, canon(x));
        }
    }

    #[test]
    fn add_sub_neg() {
        for &x in EDGES {
            for &y in EDGES {
                let s = &Fp(x) + &Fp(y);
                assert_eq!(s.reduce().0, (canon(x) + canon(y)) % Fp::MODULUS);
                let d = &Fp(x) - &Fp(y);
                assert_eq!(
                    d.reduce().0,
                    (canon(x) + Fp::MODULUS - canon(y)) % Fp::MODULUS
                );
                // sub(add(x, y), y) == x
                assert_eq!(&s - &Fp(y), Fp(x));
            }
            assert_eq!((-&Fp(x)).reduce().0, (Fp::MODULUS - canon(x)) % Fp::MODULUS);
        }
    }

    #[test]
    fn mul_matches_wide_reference() {
        // 256-bit schoolbook reference reduced with num-free arithmetic:
        // (x * y) mod p via 64-bit chunks of the wide product.
        fn ref_mul(x: u128, y: u128) -> u128 {
            let (lo, hi) = super::mul_wide(x, y);
            let mut acc = canon(lo);
            // 2^128 ≡ 2 (mod p)
            let mut pow = 2u128;
            let mut h = hi;
            while h != 0 {
                if h & 1 == 1 {
                    acc = (acc + pow) % Fp::MODULUS;
                }
                pow = (pow << 1) % Fp::MODULUS;
                h >>= 1;
            }
            acc
        }
        for &x in EDGES {
            for &y in EDGES {
                assert_eq!((&Fp(x) * &Fp(y)).reduce().0, ref_mul(x, y));
            }
        }
    }

    #[test]
    fn square_matches_mul() {
        for &x in EDGES {
            assert_eq!(Fp(x).square(), &Fp(x) * &Fp(x));
        }
        assert_eq!(Fp(CR1).square(), &Fp(CR1) * &Fp(CR1));
    }

    #[test]
    fn mul_small_matches_mul() {
        for &x in EDGES {
            for &k in &[0u32, 1, 2, 109, 0xffff_ffff] {
                assert_eq!(Fp(x).mul_small(k), &Fp(x) * &Fp::from_u32(k));
            }
        }
    }

    #[test]
    fn invert_round_trips() {
        for &x in EDGES {
            let inv = Fp(x).invert();
            if bool::from(Fp(x).is_zero()) {
                assert!(bool::from(inv.is_zero()));
            } else {
                assert_eq!(&inv * &Fp(x), Fp::ONE);
            }
        }
    }

    #[test]
    fn exponentiation_vector() {
        // Left-to-right square-and-multiply over the 127 exponent bits.
        let mut r = Fp::ONE;
        let mut seen = false;
        for i in (0..127).rev() {
            if seen {
                r = r.square();
            }
            if (CR2 >> i) & 1 == 1 {
                r = &r * &Fp(CR1);
                seen = true;
            }
        }
        assert_eq!(r.reduce().0, CX3);
    }

    #[test]
    fn bytes_round_trip() {
        for &x in EDGES {
            let bytes = Fp(x).to_bytes();
            assert_eq!(bytes[15] >> 7, 0);
            assert_eq!(Fp::from_bytes(&bytes).0, canon(x));
        }
        // from_bytes masks the top bit
        let mut b = [0xffu8; 16];
        assert_eq!(Fp::from_bytes(&b).0, Fp::MODULUS);
        let (_, canonical) = Fp::from_bytes_checked(&b);
        assert!(!bool::from(canonical));
        b[15] = 0x7f;
        let (x, canonical) = Fp::from_bytes_checked(&b);
        assert_eq!(x.0, Fp::MODULUS);
        assert!(!bool::from(canonical));
    }

    #[test]
    fn conditional_ops() {
        let a = Fp(CR1);
        let mut r = Fp(CR2);

        r.conditional_assign(&a, Choice::from(0));
        assert_eq!(r, Fp(CR2));
        r.conditional_assign(&a, Choice::from(1));
        assert_eq!(r, Fp(CR1));

        let mut n = Fp(CR1);
        n.conditional_negate(Choice::from(0));
        assert_eq!(n, Fp(CR1));
        n.conditional_negate(Choice::from(1));
        assert_eq!(n, -&Fp(CR1));
    }
}
