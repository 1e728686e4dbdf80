// -*- mode: rust; -*-
//
// This file is part of gls127.
// See LICENSE for licensing information.

//! Group operations on the extension-field Edwards curve.
//!
//! ## Point types
//!
//! [`AffinePoint`] is the external representation \\((x, y)\\), the form
//! points take on the wire (64 bytes, see
//! [`to_bytes`](AffinePoint::to_bytes)).  [`EdwardsPoint`] is the
//! extended \\((X : Y : Z : T)\\) representation used on the hot path,
//! with the invariant \\(XY = TZ\\) maintained by every operation.
//!
//! ## Scalar multiplication
//!
//! * [`AffinePoint::mul_gen`] multiplies the fixed generator using two
//!   baked 128-entry comb tables: one doubling and two mixed additions
//!   per column, sixteen columns.
//! * [`AffinePoint::mul`] multiplies an arbitrary point: the scalar is
//!   decomposed along the GLS endomorphism \\( \psi \\) into two
//!   half-length parts, which are recoded and walked two columns at a
//!   time against an 8-entry table of \\( \\{P, \psi(P)\\} \\)
//!   combinations.
//! * [`AffinePoint::simul`] computes \\(k\_1 P + k\_2 Q\\) with two
//!   tables sharing one doubling chain.
//!
//! All three expect *masked* scalars (see
//! [`Scalar::masked`](crate::scalar::Scalar::masked)) and return plain
//! \\(kP\\).
//!
//! ## Validity
//!
//! Nothing here checks that inputs satisfy the curve equation: operating
//! on an invalid point yields a deterministic but meaningless result.
//! Callers validate untrusted data with
//! [`is_on_curve`](AffinePoint::is_on_curve) before multiplying.

#![allow(non_snake_case)]

use core::fmt::Debug;
use core::ops::{Add, Neg, Sub};

use subtle::Choice;
use subtle::ConditionallyNegatable;
use subtle::ConditionallySelectable;
use subtle::ConstantTimeEq;
use subtle::CtOption;

use crate::constants;
use crate::curve_models::{AffineNielsPoint, ProjectiveNielsPoint, ProjectivePoint};
use crate::fp::Fp;
use crate::fp2::Fp2;
use crate::scalar::Scalar;
use crate::traits::Identity;
use crate::window::{self, LookupTable};

// ------------------------------------------------------------------------
// Affine points
// ------------------------------------------------------------------------

/// A point \\((x, y)\\) on the curve in affine coordinates.
#[derive(Copy, Clone, Eq, PartialEq)]
pub struct AffinePoint {
    pub(crate) x: Fp2,
    pub(crate) y: Fp2,
}

impl Debug for AffinePoint {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "AffinePoint{{\n\tx: {:?},\n\ty: {:?}\n}}", &self.x, &self.y)
    }
}

impl Identity for AffinePoint {
    fn identity() -> AffinePoint {
        AffinePoint {
            x: Fp2::ZERO,
            y: Fp2::ONE,
        }
    }
}

impl<'a> Neg for &'a AffinePoint {
    type Output = AffinePoint;

    fn neg(self) -> AffinePoint {
        AffinePoint {
            x: -&self.x,
            y: self.y,
        }
    }
}

impl Neg for AffinePoint {
    type Output = AffinePoint;

    fn neg(self) -> AffinePoint {
        -&self
    }
}

impl ConditionallySelectable for AffinePoint {
    fn conditional_select(a: &AffinePoint, b: &AffinePoint, choice: Choice) -> AffinePoint {
        AffinePoint {
            x: Fp2::conditional_select(&a.x, &b.x, choice),
            y: Fp2::conditional_select(&a.y, &b.y, choice),
        }
    }
}

impl AffinePoint {
    /// Expand to extended coordinates: \\((x, y, xy, 1)\\).
    pub fn to_extended(&self) -> EdwardsPoint {
        EdwardsPoint {
            X: self.x,
            Y: self.y,
            Z: Fp2::ONE,
            T: &self.x * &self.y,
        }
    }

    /// Cache for mixed readdition.
    pub(crate) fn as_affine_niels(&self) -> AffineNielsPoint {
        AffineNielsPoint {
            x: self.x,
            y: self.y,
            td: (&self.x * &self.y).mul_by_curve_d(),
        }
    }

    /// The GLS endomorphism
    /// \\( \psi(x, y) = (w \cdot \bar x, \bar y) \\), where the bar is
    /// conjugation in \\( \mathbb F\_{p\^2} \\) and \\(w =
    /// u\^{(p-1)/2}\\).  On the prime-order subgroup \\( \psi \\) acts
    /// as multiplication by \\( \lambda \\) and \\( \psi\^2 = -1 \\).
    pub(crate) fn psi(&self) -> AffinePoint {
        AffinePoint {
            x: &constants::PSI * &self.x.conjugate(),
            y: self.y.conjugate(),
        }
    }

    /// Check the curve equation \\(a x\^2 + y\^2 = 1 + d x\^2 y\^2\\).
    ///
    /// The library itself never calls this on secret data; it is the
    /// validation hook for untrusted deserialized points.
    pub fn is_on_curve(&self) -> Choice {
        let xx = self.x.square();
        let yy = self.y.square();
        let lhs = &(&constants::EDWARDS_A * &xx) + &yy;
        let rhs = &Fp2::ONE + &(&constants::EDWARDS_D * &(&xx * &yy));
        lhs.ct_eq(&rhs)
    }

    /// Serialize to 64 bytes: \\(x\\) then \\(y\\), each as the two
    /// base-field components in order, each component 16 bytes
    /// little-endian with the top bit clear.
    pub fn to_bytes(&self) -> [u8; 64] {
        let mut bytes = [0u8; 64];
        bytes[0..16].copy_from_slice(&self.x.c0.to_bytes());
        bytes[16..32].copy_from_slice(&self.x.c1.to_bytes());
        bytes[32..48].copy_from_slice(&self.y.c0.to_bytes());
        bytes[48..64].copy_from_slice(&self.y.c1.to_bytes());
        bytes
    }

    /// Deserialize 64 bytes written by [`to_bytes`](AffinePoint::to_bytes).
    ///
    /// The top bit of each 16-byte component is forced to zero; the
    /// result is `None` only when a masked component is the
    /// non-canonical value \\(p\\).  Curve membership is *not* checked.
    pub fn from_bytes(bytes: &[u8; 64]) -> CtOption<AffinePoint> {
        let chunk = |range: core::ops::Range<usize>| -> [u8; 16] {
            let mut buf = [0u8; 16];
            buf.copy_from_slice(&bytes[range]);
            buf
        };
        let (xc0, v0) = Fp::from_bytes_checked(&chunk(0..16));
        let (xc1, v1) = Fp::from_bytes_checked(&chunk(16..32));
        let (yc0, v2) = Fp::from_bytes_checked(&chunk(32..48));
        let (yc1, v3) = Fp::from_bytes_checked(&chunk(48..64));
        let point = AffinePoint {
            x: Fp2 { c0: xc0, c1: xc1 },
            y: Fp2 { c0: yc0, c1: yc1 },
        };
        CtOption::new(point, v0 & v1 & v2 & v3)
    }

    /// Fixed-base multiplication: \\(k \cdot G\\) for the curve
    /// generator \\(G\\) and a masked scalar \\(k\\).
    ///
    /// Uses the signed Lim–Lee comb over the two baked tables: the odd
    /// companion \\(k + 1\\) is recoded into 32 sign/digit columns, the
    /// main loop runs one doubling and two mixed additions per column
    /// pair, and a final subtraction of \\(G\\) removes the parity
    /// adjustment (masked scalars are always even, so this step is
    /// unconditional).
    ///
    /// With `constant_time` unset, table lookups index directly instead
    /// of scanning; outputs are identical, so the flag is safe for
    /// public scalars only.
    pub fn mul_gen(scalar: &Scalar, constant_time: bool) -> AffinePoint {
        let k = scalar.masked();
        let m = Scalar::from_limbs([k.0[0] | 1, k.0[1], k.0[2], k.0[3]]);
        let (digits, sigma) = m.comb_recode();

        let select = |table: &[AffineNielsPoint; 128], col: usize| -> AffineNielsPoint {
            let sign = Choice::from(((sigma >> col) & 1) as u8);
            window::select_comb(table, digits[col], sign, constant_time)
        };

        // Columns 15 and 31 seed the accumulator; then one doubling and
        // two mixed additions per remaining column.
        let mut r = (&EdwardsPoint::identity() + &select(&constants::GEN_TABLE_0, 15)).as_extended();
        r = (&r + &select(&constants::GEN_TABLE_1, 31)).as_extended();
        for col in (0..15).rev() {
            r = r.as_projective().double().as_extended();
            r = (&r + &select(&constants::GEN_TABLE_0, col)).as_extended();
            r = (&r + &select(&constants::GEN_TABLE_1, col + 16)).as_extended();
        }
        r = (&r - &constants::GENERATOR.as_affine_niels()).as_extended();
        r.to_affine()
    }

    /// Variable-base multiplication: \\(k \cdot P\\) for a masked
    /// scalar \\(k\\), in constant time.
    ///
    /// The scalar is split along the endomorphism as
    /// \\(k \equiv \pm n\_0 \pm n\_1 \lambda\\); the signs are folded
    /// into the base points \\(P\\) and \\( \psi(P) \\) up front, so the
    /// main loop only ever sees nonnegative sub-scalars.
    pub fn mul(&self, scalar: &Scalar) -> AffinePoint {
        let k = scalar.masked();
        let (n0, s0, n1, s1) = k.split();

        let mut p0 = *self;
        p0.x.conditional_negate(s0);
        let mut q0 = self.psi();
        q0.x.conditional_negate(s1);

        let pe = p0.to_extended();
        let table = LookupTable::from_points(&pe, &q0.to_extended());
        let (u, v, lsb) = Scalar::recode_pair(n0, n1);

        let mut r = (&EdwardsPoint::identity() + &table.select(u, v, 126)).as_extended();
        for col in (0..=124).rev().step_by(2) {
            let twice = r.as_projective().double();
            let four = twice.as_projective().double();
            r = four.as_extended();
            r = (&r + &table.select(u, v, col as u32)).as_extended();
        }

        // The recoded digits encode n0 | 1; pay back the low bit when
        // n0 was even.
        let corrected = (&r - &pe.as_projective_niels()).as_extended();
        r.conditional_assign(&corrected, lsb);
        r.to_affine()
    }

    /// Simultaneous double-base multiplication:
    /// \\(k\_1 P + k\_2 Q\\) for masked scalars, in constant time.
    ///
    /// Both scalars are endomorphism-split, giving four sub-scalars and
    /// two 8-entry tables that share a single doubling chain.
    pub fn simul(k1: &Scalar, p: &AffinePoint, k2: &Scalar, q: &AffinePoint) -> AffinePoint {
        let (n0, s0, n1, s1) = k1.masked().split();
        let (m0, t0, m1, t1) = k2.masked().split();

        let mut p0 = *p;
        p0.x.conditional_negate(s0);
        let mut p1 = p.psi();
        p1.x.conditional_negate(s1);
        let mut q0 = *q;
        q0.x.conditional_negate(t0);
        let mut q1 = q.psi();
        q1.x.conditional_negate(t1);

        let pe = p0.to_extended();
        let qe = q0.to_extended();
        let table_p = LookupTable::from_points(&pe, &p1.to_extended());
        let table_q = LookupTable::from_points(&qe, &q1.to_extended());
        let (up, vp, lp) = Scalar::recode_pair(n0, n1);
        let (uq, vq, lq) = Scalar::recode_pair(m0, m1);

        let mut r = (&EdwardsPoint::identity() + &table_p.select(up, vp, 126)).as_extended();
        r = (&r + &table_q.select(uq, vq, 126)).as_extended();
        for col in (0..=124).rev().step_by(2) {
            let twice = r.as_projective().double();
            let four = twice.as_projective().double();
            r = four.as_extended();
            r = (&r + &table_p.select(up, vp, col as u32)).as_extended();
            r = (&r + &table_q.select(uq, vq, col as u32)).as_extended();
        }

        let corrected = (&r - &pe.as_projective_niels()).as_extended();
        r.conditional_assign(&corrected, lp);
        let corrected = (&r - &qe.as_projective_niels()).as_extended();
        r.conditional_assign(&corrected, lq);
        r.to_affine()
    }
}

// ------------------------------------------------------------------------
// Extended points
// ------------------------------------------------------------------------

/// An `EdwardsPoint` is a point on the curve in extended coordinates
/// \\((X : Y : Z : T)\\) with \\(x = X/Z\\), \\(y = Y/Z\\),
/// \\(xy = T/Z\\).
#[derive(Copy, Clone)]
pub struct EdwardsPoint {
    pub(crate) X: Fp2,
    pub(crate) Y: Fp2,
    pub(crate) Z: Fp2,
    pub(crate) T: Fp2,
}

impl Identity for EdwardsPoint {
    fn identity() -> EdwardsPoint {
        EdwardsPoint {
            X: Fp2::ZERO,
            Y: Fp2::ONE,
            Z: Fp2::ONE,
            T: Fp2::ZERO,
        }
    }
}

impl Debug for EdwardsPoint {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "EdwardsPoint{{\n\tX: {:?},\n\tY: {:?},\n\tZ: {:?},\n\tT: {:?}\n}}",
            &self.X, &self.Y, &self.Z, &self.T
        )
    }
}

impl ConstantTimeEq for EdwardsPoint {
    fn ct_eq(&self, other: &EdwardsPoint) -> Choice {
        // x = x' iff (X Z') Z = (X' Z) Z', and likewise for y; comparing
        // cross-multiplied coordinates avoids the inversions.
        (&self.X * &other.Z).ct_eq(&(&other.X * &self.Z))
            & (&self.Y * &other.Z).ct_eq(&(&other.Y * &self.Z))
    }
}

impl PartialEq for EdwardsPoint {
    fn eq(&self, other: &EdwardsPoint) -> bool {
        self.ct_eq(other).into()
    }
}

impl Eq for EdwardsPoint {}

impl ConditionallySelectable for EdwardsPoint {
    fn conditional_select(a: &EdwardsPoint, b: &EdwardsPoint, choice: Choice) -> EdwardsPoint {
        EdwardsPoint {
            X: Fp2::conditional_select(&a.X, &b.X, choice),
            Y: Fp2::conditional_select(&a.Y, &b.Y, choice),
            Z: Fp2::conditional_select(&a.Z, &b.Z, choice),
            T: Fp2::conditional_select(&a.T, &b.T, choice),
        }
    }
}

impl EdwardsPoint {
    /// Drop down to the projective model. Free.
    pub(crate) const fn as_projective(&self) -> ProjectivePoint {
        ProjectivePoint {
            X: self.X,
            Y: self.Y,
            Z: self.Z,
        }
    }

    /// Cache for readdition, with the \\(d \cdot T\\) product
    /// precomputed.
    pub(crate) fn as_projective_niels(&self) -> ProjectiveNielsPoint {
        ProjectiveNielsPoint {
            X: self.X,
            Y: self.Y,
            Z: self.Z,
            Td: self.T.mul_by_curve_d(),
        }
    }

    /// Normalize to affine coordinates, at the cost of one field
    /// inversion.
    pub fn to_affine(&self) -> AffinePoint {
        let zinv = self.Z.invert();
        AffinePoint {
            x: &self.X * &zinv,
            y: &self.Y * &zinv,
        }
    }

    /// Add this point to itself.
    pub fn double(&self) -> EdwardsPoint {
        self.as_projective().double().as_extended()
    }

    /// Compute \\([2\^k] P \\) by successive doublings. Requires \\( k > 0 \\).
    pub fn mul_by_pow_2(&self, k: u32) -> EdwardsPoint {
        debug_assert!(k > 0);
        let mut s = self.as_projective();
        for _ in 0..(k - 1) {
            s = s.double().as_projective();
        }
        // Unroll the last iteration to go directly to extended form.
        s.double().as_extended()
    }
}

impl<'a, 'b> Add<&'b EdwardsPoint> for &'a EdwardsPoint {
    type Output = EdwardsPoint;
    fn add(self, other: &'b EdwardsPoint) -> EdwardsPoint {
        (self + &other.as_projective_niels()).as_extended()
    }
}

define_add_variants!(
    LHS = EdwardsPoint,
    RHS = EdwardsPoint,
    Output = EdwardsPoint
);

impl<'a, 'b> Sub<&'b EdwardsPoint> for &'a EdwardsPoint {
    type Output = EdwardsPoint;
    fn sub(self, other: &'b EdwardsPoint) -> EdwardsPoint {
        (self - &other.as_projective_niels()).as_extended()
    }
}

define_sub_variants!(
    LHS = EdwardsPoint,
    RHS = EdwardsPoint,
    Output = EdwardsPoint
);

impl<'a> Neg for &'a EdwardsPoint {
    type Output = EdwardsPoint;

    fn neg(self) -> EdwardsPoint {
        EdwardsPoint {
            X: -(&self.X),
            Y: self.Y,
            Z: self.Z,
            T: -(&self.T),
        }
    }
}

impl Neg for EdwardsPoint {
    type Output = EdwardsPoint;

    fn neg(self) -> EdwardsPoint {
        -&self
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

    /// Plain double-and-add over all 256 scalar bits, processing the
    /// point as a mixed addend.  The yardstick for the windowed paths.
    fn ref_mul(k: &Scalar, p: &AffinePoint) -> AffinePoint {
        let pn = p.as_affine_niels();
        let mut r = EdwardsPoint::identity();
        for i in (0..256).rev() {
            r = r.double();
            if (k.0[i / 64] >> (i % 64)) & 1 == 1 {
                r = (&r + &pn).as_extended();
            }
        }
        r.to_affine()
    }

    #[test]
    fn generators_are_valid() {
        assert!(bool::from(constants::GENERATOR.is_on_curve()));
        assert!(bool::from(constants::GENERATOR_PSI.is_on_curve()));
        assert!(bool::from(AffinePoint::identity().is_on_curve()));
    }

    #[test]
    fn psi_of_generator_matches_constant() {
        assert_eq!(constants::GENERATOR.psi(), constants::GENERATOR_PSI);
    }

    #[test]
    fn psi_squares_to_negation() {
        let mut rng = StdRng::seed_from_u64(0xed1);
        for _ in 0..8 {
            let p = AffinePoint::mul_gen(&random_masked(&mut rng), true);
            let twice = p.psi().psi();
            assert_eq!(twice, -&p);
            assert!(bool::from(p.psi().is_on_curve()));
        }
    }

    #[test]
    fn affine_expand_round_trip() {
        let mut rng = StdRng::seed_from_u64(0xed2);
        for _ in 0..8 {
            let p = AffinePoint::mul_gen(&random_masked(&mut rng), true);
            assert_eq!(p.to_extended().to_affine(), p);
        }
    }

    #[test]
    fn extended_invariant_holds() {
        let mut rng = StdRng::seed_from_u64(0xed3);
        let g = constants::GENERATOR.to_extended();
        let mut r = g;
        for _ in 0..16 {
            let k = random_masked(&mut rng);
            r = (&r + &AffinePoint::mul_gen(&k, true).to_extended()).to_affine().to_extended();
            let s = r.double();
            assert_eq!(&s.X * &s.Y, &s.T * &s.Z);
        }
    }

    #[test]
    fn mul_gen_matches_reference() {
        let mut rng = StdRng::seed_from_u64(0xed4);
        for _ in 0..24 {
            let k = random_masked(&mut rng);
            let fast = AffinePoint::mul_gen(&k, true);
            let slow = ref_mul(&k, &constants::GENERATOR);
            assert_eq!(fast, slow);
        }
    }

    #[test]
    fn mul_gen_ct_flag_is_output_invariant() {
        let mut rng = StdRng::seed_from_u64(0xed5);
        for _ in 0..24 {
            let k = random_masked(&mut rng);
            let ct = AffinePoint::mul_gen(&k, true);
            let vt = AffinePoint::mul_gen(&k, false);
            assert_eq!(ct.to_bytes(), vt.to_bytes());
        }
    }

    #[test]
    fn mul_matches_mul_gen_on_the_generator() {
        let mut rng = StdRng::seed_from_u64(0xed6);
        for _ in 0..16 {
            let k = random_masked(&mut rng);
            let a = AffinePoint::mul_gen(&k, true);
            let b = constants::GENERATOR.mul(&k);
            assert_eq!(a.to_bytes(), b.to_bytes());
        }
    }

    #[test]
    fn mul_matches_reference_on_other_points() {
        let mut rng = StdRng::seed_from_u64(0xed7);
        // random base points of odd order
        for _ in 0..8 {
            let base = AffinePoint::mul_gen(&random_masked(&mut rng), true);
            let k = random_masked(&mut rng);
            assert_eq!(base.mul(&k), ref_mul(&k, &base));
        }
    }

    #[test]
    fn mul_handles_degenerate_scalars() {
        let zero = Scalar::ZERO;
        assert_eq!(AffinePoint::mul_gen(&zero, true), AffinePoint::identity());
        assert_eq!(constants::GENERATOR.mul(&zero), AffinePoint::identity());

        let two = Scalar::from_limbs([2, 0, 0, 0]);
        let doubled = constants::GENERATOR.to_extended().double().to_affine();
        assert_eq!(constants::GENERATOR.mul(&two), doubled);
        assert_eq!(AffinePoint::mul_gen(&two, true), doubled);
    }

    #[test]
    fn simul_matches_separate_muls() {
        let mut rng = StdRng::seed_from_u64(0xed8);
        let g = constants::GENERATOR;
        let eg = constants::GENERATOR_PSI;
        for _ in 0..12 {
            let k1 = random_masked(&mut rng);
            let k2 = random_masked(&mut rng);
            let combined = AffinePoint::simul(&k1, &g, &k2, &eg);
            let separate = (&g.mul(&k1).to_extended() + &eg.mul(&k2).to_extended()).to_affine();
            assert_eq!(combined.to_bytes(), separate.to_bytes());
        }
    }

    #[test]
    fn mul_gen_known_answers() {
        let vectors: [([u64; 4], &str); 3] = [
            (
                [2, 0, 0, 0],
                "589356eabaa75248e26f83d31db1ac0991347d218469e69b16bf7f4c8f0c3c07\
                 a1e3019da9ae3f2a5a8b133325c9a06374be036fe042e90d279bd777ab80763e",
            ),
            (
                [
                    0x13579BDF2468ACE0,
                    0x123456789ABCDEF0,
                    0x00000000DEADBEEF,
                    0xD6931A0C8C4C4C65,
                ],
                "227b848f8e7f2b9290b235d263ede161ded2f981781e563a8b68411810c57e70\
                 0f02e57bfde568711e6a81672387e658e9e370d8d6d2cfc68d9b51c1f2133a49",
            ),
            (
                [u64::MAX, u64::MAX, u64::MAX, u64::MAX],
                "d83ad44186b4df8af8154c07e1625e2d92b0c37b4fea200b20f00b67ae19a501\
                 78675e8a61e27f04c0840b5272753b63448dd165df3313f9e3d49d60aa4d5c66",
            ),
        ];
        for (limbs, expected) in vectors.iter() {
            let k = Scalar::from_limbs(*limbs).masked();
            let r = AffinePoint::mul_gen(&k, true);
            assert_eq!(hex::encode(r.to_bytes()), expected.replace(' ', ""));
        }
    }

    #[test]
    fn simul_known_answer() {
        let k1 = Scalar::from_limbs([
            0x8796A5B4C3D2E1F0,
            0x0F1E2D3C4B5A6978,
            0xFEDCBA9876543210,
            0x123456789ABCDEF0,
        ])
        .masked();
        let k2 = Scalar::from_limbs([
            0x5A5A5A5A5A5A5A5A,
            0xA5A5A5A5A5A5A5A5,
            0x123456789ABCDEF0,
            0x0FEDCBA987654321,
        ])
        .masked();
        let r = AffinePoint::simul(
            &k1,
            &constants::GENERATOR,
            &k2,
            &constants::GENERATOR_PSI,
        );
        assert_eq!(
            hex::encode(r.to_bytes()),
            "57d89c6a630bac8a9d6168bf4ed448654373e6d2b60bd7188571815c174ee831\
             abf9e3aae84915c30d0d022deaf53d1d267eaaca2d42e1bbae47a0111e983c13"
        );
    }

    #[test]
    fn serialization_round_trip() {
        let mut rng = StdRng::seed_from_u64(0xed9);
        for _ in 0..8 {
            let p = AffinePoint::mul_gen(&random_masked(&mut rng), true);
            let bytes = p.to_bytes();
            // top bit of every component is clear on the wire
            for chunk in [15usize, 31, 47, 63] {
                assert_eq!(bytes[chunk] >> 7, 0);
            }
            let q = AffinePoint::from_bytes(&bytes).unwrap();
            assert_eq!(p, q);
        }
    }

    #[test]
    fn deserialization_rejects_non_canonical() {
        // a component equal to p (after top-bit masking) is refused
        let mut bytes = AffinePoint::identity().to_bytes();
        for b in bytes[0..16].iter_mut() {
            *b = 0xff;
        }
        assert!(bool::from(AffinePoint::from_bytes(&bytes).is_none()));
        bytes[15] = 0x7f;
        assert!(bool::from(AffinePoint::from_bytes(&bytes).is_none()));
    }

    /// Re-derive sampled comb table entries from the closed form
    /// \\(2^{16 v} (1 + Σ u_i 2^{32 (i+1)}) G\\) and compare with the
    /// baked constants.
    #[test]
    fn comb_tables_match_derivation() {
        let g = constants::GENERATOR;
        for &u in &[0u8, 1, 2, 3, 5, 8, 21, 42, 64, 85, 107, 127] {
            let mut m = Scalar::from_limbs([1, 0, 0, 0]);
            for i in 0..7 {
                if (u >> i) & 1 == 1 {
                    let bit = 32 * (i + 1);
                    m.0[bit / 64] |= 1 << (bit % 64);
                }
            }
            let entry0 = ref_mul(&m, &g);
            assert_eq!(entry0.as_affine_niels(), constants::GEN_TABLE_0[u as usize]);

            let entry1 = entry0.to_extended().mul_by_pow_2(16).to_affine();
            assert_eq!(entry1.as_affine_niels(), constants::GEN_TABLE_1[u as usize]);
        }
    }
}
