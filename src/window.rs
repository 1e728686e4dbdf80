// -*- mode: rust; -*-
//
// This file is part of gls127.
// See LICENSE for licensing information.

//! Code for fixed- and dynamic-window functionality

#![allow(non_snake_case)]

use subtle::Choice;
use subtle::ConditionallyNegatable;
use subtle::ConditionallySelectable;
use subtle::ConstantTimeEq;

use crate::curve_models::{AffineNielsPoint, ProjectiveNielsPoint};
use crate::edwards::EdwardsPoint;
use crate::traits::Identity;

/// An 8-entry table of combinations of two points \\(P, Q\\), built on
/// the fly for the double-scalar loop:
///
/// ```text
/// [3P, 3P+Q, 3P+2Q, 3P+3Q, P, P-Q, P+2Q, P+Q]
/// ```
///
/// Two adjacent columns of a recoded scalar pair address one entry, with
/// the sign of the selection carried separately; all sixteen digit
/// patterns of a column pair land on some entry or its negation.  The
/// whole table sums to \\(16P + 8Q\\).
#[derive(Copy, Clone)]
pub(crate) struct LookupTable(pub(crate) [ProjectiveNielsPoint; 8]);

impl LookupTable {
    /// Fill the table from extended points \\(P\\) and \\(Q\\).
    pub(crate) fn from_points(P: &EdwardsPoint, Q: &EdwardsPoint) -> LookupTable {
        let Pn = P.as_projective_niels();
        let Qn = Q.as_projective_niels();
        let P2 = P.as_projective().double().as_extended();
        let P3 = (&P2 + &Pn).as_extended();
        let Q2 = Q.as_projective().double().as_extended();
        let Q2n = Q2.as_projective_niels();
        let Q3n = (&Q2 + &Qn).as_extended().as_projective_niels();

        LookupTable([
            P3.as_projective_niels(),
            (&P3 + &Qn).as_extended().as_projective_niels(),
            (&P3 + &Q2n).as_extended().as_projective_niels(),
            (&P3 + &Q3n).as_extended().as_projective_niels(),
            Pn,
            (P - &Qn).as_extended().as_projective_niels(),
            (P + &Q2n).as_extended().as_projective_niels(),
            (P + &Qn).as_extended().as_projective_niels(),
        ])
    }

    /// Constant-time selection for the recoded column pair
    /// `(col + 1, col)` of the sign word `u` and presence word `v`.
    ///
    /// With `a = (u >> col) & 3` and `b = (v >> col) & 3`, the entry
    /// index is `(((a >> 1) ^ a) & 1) << 2 | b` and the result is
    /// negated unless bit 1 of `a` is set.  Every entry is touched
    /// regardless of the index.
    pub(crate) fn select(&self, u: u128, v: u128, col: u32) -> ProjectiveNielsPoint {
        let a = ((u >> col) & 3) as u8;
        let b = ((v >> col) & 3) as u8;
        let index = ((((a >> 1) ^ a) & 1) << 2) | b;

        let mut r = ProjectiveNielsPoint::identity();
        for (j, entry) in self.0.iter().enumerate() {
            r.conditional_assign(entry, (j as u8).ct_eq(&index));
        }
        r.conditional_negate(!Choice::from(a >> 1));
        r
    }
}

/// Select entry `index` of a 128-entry comb table, negating when `sign`
/// is unset.
///
/// The constant-time path scans the whole table; the variable-time path
/// (public scalars only) indexes it directly and branches on the sign.
/// Both return identical values.
pub(crate) fn select_comb(
    table: &[AffineNielsPoint; 128],
    index: u8,
    sign: Choice,
    constant_time: bool,
) -> AffineNielsPoint {
    debug_assert!(index < 128);
    if constant_time {
        let mut r = AffineNielsPoint::identity();
        for (j, entry) in table.iter().enumerate() {
            r.conditional_assign(entry, (j as u8).ct_eq(&index));
        }
        r.conditional_negate(!sign);
        r
    } else if sign.into() {
        table[index as usize]
    } else {
        -&table[index as usize]
    }
}

// ------------------------------------------------------------------------
// Tests
// ------------------------------------------------------------------------

#[cfg(test)]
mod test {
    use super::*;
    use crate::constants;

    fn table_entry_equals(entry: &ProjectiveNielsPoint, expected: &EdwardsPoint) -> bool {
        let via_identity = (&EdwardsPoint::identity() + entry).as_extended();
        via_identity == *expected
    }

    /// The truth table of §two-bit × two-bit selection: for each
    /// `(a, b)` input pattern, the selected entry and its sign.
    #[test]
    fn select_truth_table() {
        let g = constants::GENERATOR.to_extended();
        let eg = constants::GENERATOR_PSI.to_extended();
        let table = LookupTable::from_points(&g, &eg);

        // (a, b) -> expected entry; sign is + iff a & 2 != 0
        let expected: [(u8, u8, usize); 16] = [
            (0, 0, 0),
            (0, 1, 1),
            (0, 2, 2),
            (0, 3, 3),
            (1, 0, 4),
            (1, 1, 5),
            (1, 2, 6),
            (1, 3, 7),
            (2, 0, 4),
            (2, 1, 5),
            (2, 2, 6),
            (2, 3, 7),
            (3, 0, 0),
            (3, 1, 1),
            (3, 2, 2),
            (3, 3, 3),
        ];
        for &(a, b, entry) in expected.iter() {
            let selected = table.select(a as u128, b as u128, 0);
            let want = if a & 2 != 0 {
                table.0[entry]
            } else {
                -&table.0[entry]
            };
            let want_pt = (&EdwardsPoint::identity() + &want).as_extended();
            let got_pt = (&EdwardsPoint::identity() + &selected).as_extended();
            assert_eq!(got_pt, want_pt, "select({}, {})", a, b);
        }
    }

    /// The table built from (P, Q) must sum to 16P + 8Q.
    #[test]
    fn table_sums_to_16p_8q() {
        let g = constants::GENERATOR.to_extended();
        let eg = constants::GENERATOR_PSI.to_extended();
        let table = LookupTable::from_points(&g, &eg);

        let mut sum = EdwardsPoint::identity();
        for entry in table.0.iter() {
            sum = (&sum + entry).as_extended();
        }
        let expected = (&g.mul_by_pow_2(4) + &eg.mul_by_pow_2(3).as_projective_niels())
            .as_extended();
        assert_eq!(sum, expected);
    }

    #[test]
    fn entry_contents() {
        let g = constants::GENERATOR.to_extended();
        let eg = constants::GENERATOR_PSI.to_extended();
        let table = LookupTable::from_points(&g, &eg);

        let p3 = (&g.double() + &g.as_projective_niels()).as_extended();
        assert!(table_entry_equals(&table.0[0], &p3));
        assert!(table_entry_equals(&table.0[4], &g));
        let p_plus_q = (&g + &eg.as_projective_niels()).as_extended();
        assert!(table_entry_equals(&table.0[7], &p_plus_q));
        let p_minus_q = (&g - &eg.as_projective_niels()).as_extended();
        assert!(table_entry_equals(&table.0[5], &p_minus_q));
    }

    #[test]
    fn comb_select_ct_matches_vartime() {
        for &idx in &[0u8, 1, 2, 63, 127] {
            for &sign in &[0u8, 1] {
                let ct = select_comb(&constants::GEN_TABLE_0, idx, Choice::from(sign), true);
                let vt = select_comb(&constants::GEN_TABLE_0, idx, Choice::from(sign), false);
                assert!(ct == vt);
            }
        }
    }
}
