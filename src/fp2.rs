// -*- mode: rust; -*-
//
// This file is part of gls127.
// See LICENSE for licensing information.

//! Arithmetic over the quadratic extension field
//! \\( \mathbb F\_{p\^2} = \mathbb F\_p\[i\] / (i\^2 + 1) \\).
//!
//! An element is a pair `c0 + c1·i` of [`Fp`] values.  On top of the
//! generic ring operations this module provides the cheap fixed
//! multiplications the curve constants call for: `u = 2 + i` costs only
//! additions, and the curve's `d = 109·u` adds one small-constant
//! multiply per component.

use core::ops::{Add, Mul, Neg, Sub};

use subtle::Choice;
use subtle::ConditionallySelectable;
use subtle::ConstantTimeEq;

#[cfg(feature = "zeroize")]
use zeroize::Zeroize;

use crate::fp::Fp;

/// An element of \\( \mathbb F\_{p\^2} \\), `c0 + c1·i` with
/// \\( i\^2 = -1 \\).
#[derive(Copy, Clone, Debug, Default)]
pub(crate) struct Fp2 {
    pub(crate) c0: Fp,
    pub(crate) c1: Fp,
}

impl ConstantTimeEq for Fp2 {
    fn ct_eq(&self, other: &Fp2) -> Choice {
        self.c0.ct_eq(&other.c0) & self.c1.ct_eq(&other.c1)
    }
}

impl PartialEq for Fp2 {
    fn eq(&self, other: &Fp2) -> bool {
        self.ct_eq(other).into()
    }
}

impl Eq for Fp2 {}

impl ConditionallySelectable for Fp2 {
    fn conditional_select(a: &Fp2, b: &Fp2, choice: Choice) -> Fp2 {
        Fp2 {
            c0: Fp::conditional_select(&a.c0, &b.c0, choice),
            c1: Fp::conditional_select(&a.c1, &b.c1, choice),
        }
    }
}

#[cfg(feature = "zeroize")]
impl Zeroize for Fp2 {
    fn zeroize(&mut self) {
        self.c0.zeroize();
        self.c1.zeroize();
    }
}

impl<'a, 'b> Add<&'b Fp2> for &'a Fp2 {
    type Output = Fp2;
    fn add(self, rhs: &'b Fp2) -> Fp2 {
        Fp2 {
            c0: &self.c0 + &rhs.c0,
            c1: &self.c1 + &rhs.c1,
        }
    }
}

define_add_variants!(LHS = Fp2, RHS = Fp2, Output = Fp2);

impl<'a, 'b> Sub<&'b Fp2> for &'a Fp2 {
    type Output = Fp2;
    fn sub(self, rhs: &'b Fp2) -> Fp2 {
        Fp2 {
            c0: &self.c0 - &rhs.c0,
            c1: &self.c1 - &rhs.c1,
        }
    }
}

define_sub_variants!(LHS = Fp2, RHS = Fp2, Output = Fp2);

impl<'a, 'b> Mul<&'b Fp2> for &'a Fp2 {
    type Output = Fp2;
    fn mul(self, rhs: &'b Fp2) -> Fp2 {
        // (a + bi)(c + di) = (ac - bd) + (ad + bc)i
        let ac = &self.c0 * &rhs.c0;
        let bd = &self.c1 * &rhs.c1;
        let ad = &self.c0 * &rhs.c1;
        let bc = &self.c1 * &rhs.c0;
        Fp2 {
            c0: &ac - &bd,
            c1: &ad + &bc,
        }
    }
}

define_mul_variants!(LHS = Fp2, RHS = Fp2, Output = Fp2);

impl<'a> Neg for &'a Fp2 {
    type Output = Fp2;
    fn neg(self) -> Fp2 {
        Fp2 {
            c0: -&self.c0,
            c1: -&self.c1,
        }
    }
}

impl Neg for Fp2 {
    type Output = Fp2;
    fn neg(self) -> Fp2 {
        -&self
    }
}

impl Fp2 {
    pub(crate) const ZERO: Fp2 = Fp2 {
        c0: Fp::ZERO,
        c1: Fp::ZERO,
    };
    pub(crate) const ONE: Fp2 = Fp2 {
        c0: Fp::ONE,
        c1: Fp::ZERO,
    };

    /// Squaring: \\((a + bi)\^2 = (a+b)(a-b) + 2ab \cdot i\\), two base
    /// field multiplications.
    pub(crate) fn square(&self) -> Fp2 {
        let ab = &self.c0 * &self.c1;
        Fp2 {
            c0: &(&self.c0 + &self.c1) * &(&self.c0 - &self.c1),
            c1: &ab + &ab,
        }
    }

    /// The conjugate \\(a - bi\\), which is also the Frobenius map
    /// \\(x \mapsto x\^p\\) on this field.
    pub(crate) fn conjugate(&self) -> Fp2 {
        Fp2 {
            c0: self.c0,
            c1: -&self.c1,
        }
    }

    /// Inversion through the norm:
    /// \\((a + bi)\^{-1} = (a - bi) / (a\^2 + b\^2)\\).
    /// The inverse of zero is zero.
    pub(crate) fn invert(&self) -> Fp2 {
        let norm_inv = (&self.c0.square() + &self.c1.square()).invert();
        Fp2 {
            c0: &self.c0 * &norm_inv,
            c1: -&(&self.c1 * &norm_inv),
        }
    }

    /// Multiply by the non-residue \\(u = 2 + i\\):
    /// \\((2 + i)(a + bi) = (2a - b) + (a + 2b)i\\).  Additions only.
    pub(crate) fn mul_by_u(&self) -> Fp2 {
        let a2 = &self.c0 + &self.c0;
        let b2 = &self.c1 + &self.c1;
        Fp2 {
            c0: &a2 - &self.c1,
            c1: &self.c0 + &b2,
        }
    }

    /// Multiply by the curve constant \\(a = -u\\).
    pub(crate) fn mul_by_curve_a(&self) -> Fp2 {
        -&self.mul_by_u()
    }

    /// Multiply by the curve constant \\(d = 109 u\\).
    pub(crate) fn mul_by_curve_d(&self) -> Fp2 {
        let t = self.mul_by_u();
        Fp2 {
            c0: t.c0.mul_small(109),
            c1: t.c1.mul_small(109),
        }
    }

    pub(crate) fn is_zero(&self) -> Choice {
        self.c0.is_zero() & self.c1.is_zero()
    }
}

// ------------------------------------------------------------------------
// Tests
// ------------------------------------------------------------------------

#[cfg(test)]
mod test {
    use super::*;
    use rand::{rngs::StdRng, Rng, SeedableRng};

    fn random_fp2(rng: &mut StdRng) -> Fp2 {
        Fp2 {
            c0: Fp(rng.gen::<u128>()),
            c1: Fp(rng.gen::<u128>()),
        }
    }

    #[test]
    fn mul_square_agree() {
        let mut rng = StdRng::seed_from_u64(0x2b5);
        for _ in 0..64 {
            let x = random_fp2(&mut rng);
            assert_eq!(x.square(), &x * &x);
        }
    }

    #[test]
    fn invert_round_trips() {
        let mut rng = StdRng::seed_from_u64(0x2b6);
        for _ in 0..32 {
            let x = random_fp2(&mut rng);
            assert_eq!(&x * &x.invert(), Fp2::ONE);
        }
        assert_eq!(Fp2::ZERO.invert(), Fp2::ZERO);
    }

    #[test]
    fn conjugation_is_involutive_and_multiplicative() {
        let mut rng = StdRng::seed_from_u64(0x2b7);
        for _ in 0..32 {
            let x = random_fp2(&mut rng);
            let y = random_fp2(&mut rng);
            assert_eq!(x.conjugate().conjugate(), x);
            assert_eq!((&x * &y).conjugate(), &x.conjugate() * &y.conjugate());
            // norm lands in the base field
            let n = &x * &x.conjugate();
            assert!(bool::from(n.c1.is_zero()));
        }
    }

    #[test]
    fn fixed_constant_multiplies() {
        use crate::constants;

        let u = Fp2 {
            c0: Fp(2),
            c1: Fp(1),
        };
        let mut rng = StdRng::seed_from_u64(0x2b8);
        for _ in 0..32 {
            let x = random_fp2(&mut rng);
            assert_eq!(x.mul_by_u(), &x * &u);
            assert_eq!(x.mul_by_curve_a(), &constants::EDWARDS_A * &x);
            assert_eq!(x.mul_by_curve_d(), &constants::EDWARDS_D * &x);
        }
    }
}
