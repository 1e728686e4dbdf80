// -*- mode: rust; -*-
//
// This file is part of gls127.
// See LICENSE for licensing information.

//! Curve and scalar constants, and the precomputed generator tables.
//!
//! The comb tables hold, for table \\(v \in \\{0, 1\\}\\) and index
//! \\(u \in [0, 128)\\), the affine cache of
//! \\( 2\^{16 v} (1 + u\_0 2\^{32} + u\_1 2\^{64} + \cdots +
//! u\_6 2\^{224}) \cdot G \\).  They are embedded read-only data; a test
//! re-derives sampled entries from the closed form.

use crate::curve_models::AffineNielsPoint;
use crate::edwards::AffinePoint;
use crate::fp::Fp;
use crate::fp2::Fp2;
use crate::scalar::Scalar;

/// The twisted Edwards constant \\(a = -(2 + i)\\).
pub(crate) const EDWARDS_A: Fp2 = Fp2 {
    c0: Fp(0x7ffffffffffffffffffffffffffffffd),
    c1: Fp(0x7ffffffffffffffffffffffffffffffe),
};

/// The twisted Edwards constant \\(d = 109 (2 + i)\\).
pub(crate) const EDWARDS_D: Fp2 = Fp2 {
    c0: Fp(0x000000000000000000000000000000da),
    c1: Fp(0x0000000000000000000000000000006d),
};

/// The endomorphism coefficient \\(w = u\^{(p-1)/2}\\):
/// \\( \psi(x, y) = (w \bar x, \bar y) \\).
pub(crate) const PSI: Fp2 = Fp2 {
    c0: Fp(0x260cf396b12ccde796a54b277c21f476),
    c1: Fp(0x4c19e72d62599bcf2d4a964ef843e8ec),
};

/// The generator \\(G = (i, y)\\) of the prime-order subgroup: the
/// smallest-\\(x\\) point of order exactly \\(q\\), with the
/// lexicographically smaller \\(y\\).
pub const GENERATOR: AffinePoint = AffinePoint {
    x: Fp2 {
        c0: Fp(0x00000000000000000000000000000000),
        c1: Fp(0x00000000000000000000000000000001),
    },
    y: Fp2 {
        c0: Fp(0x1ad2c9cb60a070627c18a1cc75ec9eb8),
        c1: Fp(0x6529cbc26d4c4c36309d8a88706f875a),
    },
};

/// The endomorphism image \\( \psi(G) = \lambda G \\), the second fixed
/// base used by tests and double-base callers.
pub const GENERATOR_PSI: AffinePoint = AffinePoint {
    x: Fp2 {
        c0: Fp(0x4c19e72d62599bcf2d4a964ef843e8ec),
        c1: Fp(0x59f30c694ed33218695ab4d883de0b89),
    },
    y: Fp2 {
        c0: Fp(0x1ad2c9cb60a070627c18a1cc75ec9eb8),
        c1: Fp(0x1ad6343d92b3b3c9cf6275778f9078a5),
    },
};

/// The subgroup order \\(q = 2\^{252} - \\)[`Q_FOLD`], a 252-bit prime.
pub const Q: Scalar = Scalar([
    0xCE9B68E3B09E01A5,
    0xA6261414C0DC87D3,
    0xFFFFFFFFFFFFFFFF,
    0x0FFFFFFFFFFFFFFF,
]);

/// \\(2\^{252} - q\\): the folding constant of the reduction mod q.
pub(crate) const Q_FOLD: u128 = 0x59d9ebeb3f23782c3164971c4f61fe5b;

/// \\((q - 1)/2\\), the rounding offset of the exact division in the
/// scalar decomposition.
pub(crate) const HALF_Q: [u64; 4] = [
    0xE74DB471D84F00D2,
    0xD3130A0A606E43E9,
    0xFFFFFFFFFFFFFFFF,
    0x07FFFFFFFFFFFFFF,
];

/// \\(s\\) and \\(t\\) with \\(s\^2 + t\^2 = q\\) and
/// \\( \lambda = s / t \bmod q \\); note \\(t = 2\^{126} - 1\\).  The
/// decomposition lattice is spanned by \\((s, -t)\\) and \\((t, s)\\).
pub(crate) const SPLIT_S: u128 = 0x62d2cf00a287a526;
/// See [`SPLIT_S`].
pub(crate) const SPLIT_T: u128 = 0x3fffffffffffffffffffffffffffffff;

/// The endomorphism eigenvalue \\( \lambda = \sqrt{-1} \bmod q \\)
/// matching \\( \psi \\) on the subgroup.
pub const LAMBDA: Scalar = Scalar([
    0x02A20BCBF3110C16,
    0xFDFE4F77E2479207,
    0x4F56B7F3344BD41C,
    0x013DEF7FF97DF1E5,
]);

/// Comb table 0: entries \\((1 + \sum u\_i 2\^{32 (i+1)}) G\\).
pub(crate) static GEN_TABLE_0: [AffineNielsPoint; 128] = [
    AffineNielsPoint {
        x: Fp2 { c0: Fp(0x00000000000000000000000000000000), c1: Fp(0x00000000000000000000000000000001) },
        y: Fp2 { c0: Fp(0x1ad2c9cb60a070627c18a1cc75ec9eb8), c1: Fp(0x6529cbc26d4c4c36309d8a88706f875a) },
        td: Fp2 { c0: Fp(0x6ea890d6c8b73febc35b23c20b472840), c1: Fp(0x44b41567bf2340caf9e5cc048c028735) },
    },
    AffineNielsPoint {
        x: Fp2 { c0: Fp(0x0f890ce21efa92474aae5b97c0e000b1), c1: Fp(0x2d5865c50d6799d14996eeb120b6025f) },
        y: Fp2 { c0: Fp(0x74995f1faaad74e4cffa4025002acf5d), c1: Fp(0x269e4e0b33245b925028db9492e19cb3) },
        td: Fp2 { c0: Fp(0x2cfa52624f59e471e21b69fd94c8a2ca), c1: Fp(0x5205986c896b76d1f07800efb4cc10aa) },
    },
    AffineNielsPoint {
        x: Fp2 { c0: Fp(0x0ef419fff8368564f28d1bc17bbacd17), c1: Fp(0x6e5f0b427f96fb89bb637273f6a4035e) },
        y: Fp2 { c0: Fp(0x13a8827bf072b74ad6351c578a2cb0ff), c1: Fp(0x698a2648153aaf07cc635305f4c7d0fa) },
        td: Fp2 { c0: Fp(0x5614d9a1273a9dcbf884e78c63b72ae5), c1: Fp(0x1900cdbbea336a665d5255fdd8c7e1f3) },
    },
    AffineNielsPoint {
        x: Fp2 { c0: Fp(0x63465846d6e211c9ec8551ace6e50164), c1: Fp(0x1c65fd63608fabfafb39e6533ffdc196) },
        y: Fp2 { c0: Fp(0x5e536f5c037d0735fe0edb7ef406d573), c1: Fp(0x539e574ab74d70b3718dffd9de3c6239) },
        td: Fp2 { c0: Fp(0x4c7f3bb0eb2e9786501299fdb847ba6c), c1: Fp(0x48a25a04d5b49eea0a146eb36de9ed3e) },
    },
    AffineNielsPoint {
        x: Fp2 { c0: Fp(0x57d89e7a80f4c56132449d601d9b5015), c1: Fp(0x5412355681f4155c402393050d04d122) },
        y: Fp2 { c0: Fp(0x02ea817adbdb0731f6310ea7aae1976c), c1: Fp(0x277bff3a718723c2da25b818bb43edfe) },
        td: Fp2 { c0: Fp(0x086d80a9ab6ad4ddc4eb908476c0856e), c1: Fp(0x5e4a69fbca9bc1935a5bc2ecae39d277) },
    },
    AffineNielsPoint {
        x: Fp2 { c0: Fp(0x46298d1317bf31d1db5f5bc3e9863f66), c1: Fp(0x05d48459d68dd16ff2fb9f973e21ae71) },
        y: Fp2 { c0: Fp(0x15ff1d923c7a5beb0dae86125d70f65e), c1: Fp(0x4c3697f6f23cc2506e8dae3360386ba5) },
        td: Fp2 { c0: Fp(0x43dbe48f6212968711fc2ee9525f3897), c1: Fp(0x1eae025b747b64f1ab048b18393c3c95) },
    },
    AffineNielsPoint {
        x: Fp2 { c0: Fp(0x081db1bea5e4609d3c45c6183489f123), c1: Fp(0x129d6170731aa50650c0bd50c6bdad8b) },
        y: Fp2 { c0: Fp(0x4871e0cee1e009d3929400d566d8540e), c1: Fp(0x1e00379d10173586d45708275668752f) },
        td: Fp2 { c0: Fp(0x540957889a55195f10c7eeff5ebf2694), c1: Fp(0x667f40318383e0bc69458e03444846d1) },
    },
    AffineNielsPoint {
        x: Fp2 { c0: Fp(0x1ca848a5a606840a7e7087485e770dad), c1: Fp(0x15695ca79b86ba2d4c4137cc96f4f57f) },
        y: Fp2 { c0: Fp(0x20a976776fdb5abd83873ac87956a0f0), c1: Fp(0x3e70c04f9dc64133592cab722b287031) },
        td: Fp2 { c0: Fp(0x253611edde1307b72ea6857bec500805), c1: Fp(0x31b688820a34590c09efe377f17278d4) },
    },
    AffineNielsPoint {
        x: Fp2 { c0: Fp(0x31a2d5060ae4e2a8d61a62dc09c39bbd), c1: Fp(0x047ab55c2f278515c520471a4815899f) },
        y: Fp2 { c0: Fp(0x6743aa61965fdea5f26ad55b9d645f11), c1: Fp(0x48f17329f7832deba736d5ae267da548) },
        td: Fp2 { c0: Fp(0x17cafb2f1f1159219ef9f1b666e27ab2), c1: Fp(0x22f2328a3116d12a0d0570ad8e467aa4) },
    },
    AffineNielsPoint {
        x: Fp2 { c0: Fp(0x33a4e026fa393f097f532bc2c4a6de79), c1: Fp(0x6a9a6c5b2ee52ad44b4f8fad8f7c571d) },
        y: Fp2 { c0: Fp(0x5a3ab1f3e54567e2bdd2449e3dba58d0), c1: Fp(0x589677cd16fe5dceafdad5f53729bbb3) },
        td: Fp2 { c0: Fp(0x1a1a6d3066e8a151aa4afe5bf069991d), c1: Fp(0x00e82da8b566e880b4d3f0523e66aa0d) },
    },
    AffineNielsPoint {
        x: Fp2 { c0: Fp(0x4f4dc36deb16c912c1b47a2f7b05883f), c1: Fp(0x6996e7e03a7ca24e5597269a8d76130c) },
        y: Fp2 { c0: Fp(0x72dc362c1785f064f574b819358e780a), c1: Fp(0x55c6d108a8b38a06e4e4754607018e18) },
        td: Fp2 { c0: Fp(0x55976f38a6e26c8e73f7ecacc0433b68), c1: Fp(0x0611f59e5cb08d21a10eacaa0a3e8d6d) },
    },
    AffineNielsPoint {
        x: Fp2 { c0: Fp(0x72ef74be6a3d8ee9c8a6d03184655fc1), c1: Fp(0x5afb7b1fd2fa7fd386fd887e546d77a4) },
        y: Fp2 { c0: Fp(0x53ffc043e5f1dea25a5106a43e5ede46), c1: Fp(0x1e55902bc408fe6f01d49700f1a45599) },
        td: Fp2 { c0: Fp(0x1f3d795fbb7eea53aca8db7cee5d0c91), c1: Fp(0x41a9d2e80525f908541efa98684c4cc9) },
    },
    AffineNielsPoint {
        x: Fp2 { c0: Fp(0x17416eba5194f460d9e019dec6b5aa9b), c1: Fp(0x7e9a8a5f37e7a03cc8af5ba13c01016d) },
        y: Fp2 { c0: Fp(0x326165b68ea4896faec3716fc74d3c6b), c1: Fp(0x53d502bab0794ce9be3aec4bd69ed77a) },
        td: Fp2 { c0: Fp(0x74b291aba657fa5431c815ebec4f60cc), c1: Fp(0x626228d75c9abdedc64574eb8f9553f8) },
    },
    AffineNielsPoint {
        x: Fp2 { c0: Fp(0x39faf68892fbc8e455f5086c081333df), c1: Fp(0x5231eefb5a45566fe60f6ce6a50d056d) },
        y: Fp2 { c0: Fp(0x322d702d310a590dfbe39ac59e37307c), c1: Fp(0x09bf2336053100d4ad7d2d61ac4e292d) },
        td: Fp2 { c0: Fp(0x2fc23dda16e1328b28ab232bc63e16e6), c1: Fp(0x507eb7234d98ba80635cf7f14dff40a1) },
    },
    AffineNielsPoint {
        x: Fp2 { c0: Fp(0x0e136140d7adb88eacdc2c88cb03b950), c1: Fp(0x176d42f1eded6ba0ba62b853b14a0164) },
        y: Fp2 { c0: Fp(0x4c26fae2de3192e5581f04d232bb9bfe), c1: Fp(0x6617a56e2d7e5609b0d75500c112b201) },
        td: Fp2 { c0: Fp(0x36846133bd20dcf5ece9aac5a21ea882), c1: Fp(0x3ee6e9bb49ba12b1d853ddc249b285bd) },
    },
    AffineNielsPoint {
        x: Fp2 { c0: Fp(0x4e8d558181b80714318434a81911a53c), c1: Fp(0x62877e889a49a0c317da97ad9ecbb9bf) },
        y: Fp2 { c0: Fp(0x4f16fde5cfc5ced8c2217a832727b05b), c1: Fp(0x089f9ec079e1fe9145dc9d997630240b) },
        td: Fp2 { c0: Fp(0x7a09bd56f8418bb9d5318aeb1c8dea57), c1: Fp(0x4419e1dcc1be79b1b5af0b181b40ad6f) },
    },
    AffineNielsPoint {
        x: Fp2 { c0: Fp(0x5a709e3daf7ae74fefe9897e68dec289), c1: Fp(0x02288903d2662e238875ee011e90798a) },
        y: Fp2 { c0: Fp(0x28ebc62e3e4d215a8a5d02f451f7f669), c1: Fp(0x4fa5d1fd9a8a20324bcc3735c3c882e4) },
        td: Fp2 { c0: Fp(0x24ab0c97bbf637843b54b718c75c94a2), c1: Fp(0x217f3337e5e42f37bc1768436c70a0d4) },
    },
    AffineNielsPoint {
        x: Fp2 { c0: Fp(0x67090d856f01699da8fdd3271f377684), c1: Fp(0x3678c9fa9d77743d9bea275ea5431903) },
        y: Fp2 { c0: Fp(0x43d9d74bfd98103d5f04147277824bc8), c1: Fp(0x0e05ea70bcee2df63b9c8ad6ce807f4d) },
        td: Fp2 { c0: Fp(0x4726bf097251ea0aaecfa4ac641b0d1c), c1: Fp(0x08ec65ff63b6db6f95bed26fb9238b60) },
    },
    AffineNielsPoint {
        x: Fp2 { c0: Fp(0x1f344f0e60e8e6f161816b68be4187d3), c1: Fp(0x2e411c097704b8861dde2830acb917f8) },
        y: Fp2 { c0: Fp(0x696b010539597a57b9f49bae2231b346), c1: Fp(0x19c3f8541a8a6becd4e21f2e3cbdb5da) },
        td: Fp2 { c0: Fp(0x757323e48eb6fea86855f9cd83eabacd), c1: Fp(0x4b39222ff4a2b9e5680bb547fdbd5a73) },
    },
    AffineNielsPoint {
        x: Fp2 { c0: Fp(0x6de09e1b5650b42ddebd920c584792ed), c1: Fp(0x027596f1f57c950f555680f36805d0a2) },
        y: Fp2 { c0: Fp(0x2d0efd818c2567d26ec49784ec31d594), c1: Fp(0x2910bb2ccccedfdff81b4696b41b73f3) },
        td: Fp2 { c0: Fp(0x1a2b53b07f7ca936114cb1dc94fb9c38), c1: Fp(0x20fbddcd4ec57c3f66d4b1fb457e7137) },
    },
    AffineNielsPoint {
        x: Fp2 { c0: Fp(0x4c7cf550ee4f4121d57433574a1c90dc), c1: Fp(0x02db0f47c5b49cbaab0998176eed1d1a) },
        y: Fp2 { c0: Fp(0x5879a123265197f77565541a99d876d6), c1: Fp(0x378be206c297a4b58c9c562f80d4ec5f) },
        td: Fp2 { c0: Fp(0x4761cfb090867e2e5a6861c3b59427bb), c1: Fp(0x677cb8fb0821dc17da63e379853e33bb) },
    },
    AffineNielsPoint {
        x: Fp2 { c0: Fp(0x2fc9d2aa507509d4b5759a791f9ac16d), c1: Fp(0x2f1f07a85e637d767c70ace5b018df14) },
        y: Fp2 { c0: Fp(0x35edba7308b3ef8a2fb3d8b11709fc2e), c1: Fp(0x2255e36e475f7ca0587fef07731735c9) },
        td: Fp2 { c0: Fp(0x34f6695e14863f9b6ba843f34cf91e81), c1: Fp(0x6052a744f7aaebf609ef891749aa534a) },
    },
    AffineNielsPoint {
        x: Fp2 { c0: Fp(0x5ca8bfe92d3188ef588d18834b5af356), c1: Fp(0x2d64c8adf109742e815b56e60d564066) },
        y: Fp2 { c0: Fp(0x6e0feabc0f242bd839c4a8efeda6ebbf), c1: Fp(0x2537b1ffae60944e45c61a37b1a57dbd) },
        td: Fp2 { c0: Fp(0x0087dbf633e07a531d8d93b243c3465a), c1: Fp(0x3888a357dde89f0b8915f309da5a583b) },
    },
    AffineNielsPoint {
        x: Fp2 { c0: Fp(0x58930ced5daf5ad27b30f0dd701302c9), c1: Fp(0x1d269a76bbceabf0eb42228a4366136d) },
        y: Fp2 { c0: Fp(0x2d192c3d737be2d5ccbc66fffe8ba20d), c1: Fp(0x5a4d73c64e27423801566ca7891ec5ad) },
        td: Fp2 { c0: Fp(0x4262141e3e29a38cb3a1168db45b2cf3), c1: Fp(0x03804325db8a03065f2b2f9ce5d6cc54) },
    },
    AffineNielsPoint {
        x: Fp2 { c0: Fp(0x6b8b63670884a5391ad93077c89b6abb), c1: Fp(0x46cea4d3c4ef561f69c14ef1132e7385) },
        y: Fp2 { c0: Fp(0x55c728a0a317649b1468b3ba99108034), c1: Fp(0x5de3461812a57ebe3c6571f49696f42d) },
        td: Fp2 { c0: Fp(0x288abe50189c75fed5296a344d865059), c1: Fp(0x7b60d97885838d55b35c2b9d6fbd1a24) },
    },
    AffineNielsPoint {
        x: Fp2 { c0: Fp(0x762867aecc77a7bba58da938ea2b22ae), c1: Fp(0x6d5b126775a9c06aa3428e2821e3ca42) },
        y: Fp2 { c0: Fp(0x553939e79a8d70115850bf776e1d0c11), c1: Fp(0x0f145ad00e94dca37fd4cb1a3a485f9c) },
        td: Fp2 { c0: Fp(0x497a74d384063212258f85c3ed0e6d18), c1: Fp(0x1710d87b6126581a865a1c9518a2073b) },
    },
    AffineNielsPoint {
        x: Fp2 { c0: Fp(0x3ef66aaab93874b395873ae86b3c60cf), c1: Fp(0x7a27dac0c53cb90f8eb17b05582e434b) },
        y: Fp2 { c0: Fp(0x6ae45181036a5c12738e919e0d6d04ea), c1: Fp(0x7c3516425f5dffb55bd871f26882b809) },
        td: Fp2 { c0: Fp(0x49efaa52a2b23472265d6baa33b8bf2c), c1: Fp(0x3cb8bdcc2e15d0c66ff99eea175fcd1b) },
    },
    AffineNielsPoint {
        x: Fp2 { c0: Fp(0x43764081bf20f8287945e59b6ff3f68f), c1: Fp(0x027e58e921c573ab6f5ae7f2e1c6ddd7) },
        y: Fp2 { c0: Fp(0x4528d0bbcd3b37160d05e128248e92d6), c1: Fp(0x59c9f575fcfb88dacd4ed8c8a074a104) },
        td: Fp2 { c0: Fp(0x00fef8a5e7959557f814f168d18d1caf), c1: Fp(0x2896123523dfb1ec6ef12d10857c47e2) },
    },
    AffineNielsPoint {
        x: Fp2 { c0: Fp(0x638138b72b0c34af98f29af1919df172), c1: Fp(0x2dfb981f95ca98fd53b39f9c90ddf457) },
        y: Fp2 { c0: Fp(0x5400f53973b6ed21de7128dd8db077c1), c1: Fp(0x2a9b097e954735c1a2bf16126056b01c) },
        td: Fp2 { c0: Fp(0x3e9ffe406eff1e8bf21e6ddf75ac4ae3), c1: Fp(0x29ac53d2d9e04ea3918d6736ecf7c3ec) },
    },
    AffineNielsPoint {
        x: Fp2 { c0: Fp(0x2842085d5c8269309f4d09f0b3efdb9b), c1: Fp(0x3c172c06aa4afd669fc6549476ab8e8e) },
        y: Fp2 { c0: Fp(0x7dc853bb58baec7ec3e5c451a32948f4), c1: Fp(0x2046e1a014c08d6813629eb69421887f) },
        td: Fp2 { c0: Fp(0x01aa3f367560c45ce1f1fd334b942f65), c1: Fp(0x07bd17d43e163fbb1bd1b2c421b2632a) },
    },
    AffineNielsPoint {
        x: Fp2 { c0: Fp(0x3c9673988e4af2d62dfd902e9419759b), c1: Fp(0x450ba15207fac13e5cb5faec1b015c6f) },
        y: Fp2 { c0: Fp(0x2e8b697a9a298965584ce55465fba0fd), c1: Fp(0x39c8b75a5ddc5717e9953aafd7d4604d) },
        td: Fp2 { c0: Fp(0x77f7f2b2f98231916a9b5c0a9d1f2a3a), c1: Fp(0x44e0407411002cbb7698a6babc3be2e8) },
    },
    AffineNielsPoint {
        x: Fp2 { c0: Fp(0x5606c3677f84db1ab316711b03ce1f35), c1: Fp(0x3a438dc98c7ae20ca56da29cf6c6e50d) },
        y: Fp2 { c0: Fp(0x0266625962af5cb63d7028d023a6d254), c1: Fp(0x62cb28804352a6a5493b634c4b4ba18c) },
        td: Fp2 { c0: Fp(0x106e6a710a8ef31903da3a506b4f5470), c1: Fp(0x63642e55b6682ca606121ca31183b869) },
    },
    AffineNielsPoint {
        x: Fp2 { c0: Fp(0x4820031ef7bcb207298001c7cd3194df), c1: Fp(0x26b8c0dab90a772f5f5f2a7549006eec) },
        y: Fp2 { c0: Fp(0x10993e1d2acf9f572a7674d8512cf488), c1: Fp(0x3c52f0733194c26909afda37277f23cc) },
        td: Fp2 { c0: Fp(0x3215a1e42f99ab9b36bd787a01e93035), c1: Fp(0x1f4b5707aaf7865886e8a1ed1ff6e9b5) },
    },
    AffineNielsPoint {
        x: Fp2 { c0: Fp(0x590b3794b1f8066cf260bc523860ffb1), c1: Fp(0x033679e8f3ffd68d2484145c707e2990) },
        y: Fp2 { c0: Fp(0x087a5bb4e5df8a22701043e288b39fb9), c1: Fp(0x48e1c7981b07242992e947b4a5ee2436) },
        td: Fp2 { c0: Fp(0x7cefaf437c67110b007be06999bf34b5), c1: Fp(0x7d1c7b4a21b7e94c352e1c57c789136a) },
    },
    AffineNielsPoint {
        x: Fp2 { c0: Fp(0x07cc92a1144078134b5421115c148d9b), c1: Fp(0x070b1e8119912901ddc0e09c8bfa9f5e) },
        y: Fp2 { c0: Fp(0x49ae2304d984bd09b00291fe0ca627e7), c1: Fp(0x7bd4f09d8afc28aa728354965fa71088) },
        td: Fp2 { c0: Fp(0x76fdad08ad3ff71f8d9e9b517b132fd7), c1: Fp(0x1ae77e281326b00f4abf9b3108e7f10a) },
    },
    AffineNielsPoint {
        x: Fp2 { c0: Fp(0x2cf53cb22c4b0807a2d8024f1a2fe491), c1: Fp(0x10ed682df03ec316f138096c4eae011b) },
        y: Fp2 { c0: Fp(0x15cb5c958d58042cbb8cb4b0e74681f1), c1: Fp(0x485b206e80fbff14b0c5b05050ab2426) },
        td: Fp2 { c0: Fp(0x6dd0bb205b9777d60593adf6470df5fc), c1: Fp(0x450bb662bab048af6a845afea093c0b8) },
    },
    AffineNielsPoint {
        x: Fp2 { c0: Fp(0x7d735a9a0095d7cc605a3fc3f9e48bee), c1: Fp(0x02a0474cf916a7333069fcf482a78be2) },
        y: Fp2 { c0: Fp(0x51b58378e9ef92b5e9f71d68f51213a3), c1: Fp(0x3289e290e3a184cbc3050f672bbb487c) },
        td: Fp2 { c0: Fp(0x7f5a84db7388c1b093aaa47aa61a5afd), c1: Fp(0x0abfdf0e2447d351088de08b8c962b65) },
    },
    AffineNielsPoint {
        x: Fp2 { c0: Fp(0x089c7fe7af049f3028cb7fa314ea0175), c1: Fp(0x45aea722fea0aa10e73ad15677f0b602) },
        y: Fp2 { c0: Fp(0x1d787e4b053f397af8999dc1d6f55f9c), c1: Fp(0x6c504ca5d97615aeefe53d330b390e4c) },
        td: Fp2 { c0: Fp(0x6bd1ac02f55c6ef224fd4d416bd8c8ca), c1: Fp(0x31a22585b5180b9518fa2ad28771572c) },
    },
    AffineNielsPoint {
        x: Fp2 { c0: Fp(0x153d0c76f287794a139fa38bba8583eb), c1: Fp(0x3d9d1fa9d16d150e89853c088d9adde6) },
        y: Fp2 { c0: Fp(0x49336f31e8669fa7ab02d318aebd0e60), c1: Fp(0x5eb998b5c4b19f8cd6f3ff2caf5ee66d) },
        td: Fp2 { c0: Fp(0x6300f9fe3349c426ea45d59723efc620), c1: Fp(0x6b1ed43406687381958af225df62fe11) },
    },
    AffineNielsPoint {
        x: Fp2 { c0: Fp(0x4873400a7ed5f8194710058d82ae8128), c1: Fp(0x0fbba6409d191cff400470b107c9ed38) },
        y: Fp2 { c0: Fp(0x52ae481bb5b93822a60948ebebfaed45), c1: Fp(0x5c3b2945a4124e4e656f5e53e735cef6) },
        td: Fp2 { c0: Fp(0x01f110a07b63094ba7ab959ad786da54), c1: Fp(0x40e923adfc7d4f636e1fbefa83533208) },
    },
    AffineNielsPoint {
        x: Fp2 { c0: Fp(0x6f3a043699d8bd50b4fb053dbc503261), c1: Fp(0x34561be1cd57116adc7e05f52ca15cab) },
        y: Fp2 { c0: Fp(0x198d98db000b88eb78173278cad8e37d), c1: Fp(0x61ead5e32865e4f0c318c13bbae2b57e) },
        td: Fp2 { c0: Fp(0x3dae7f929e49c26c3924997188cb1dc5), c1: Fp(0x2f2eeeb49d3a1586d2640d0f9449aff3) },
    },
    AffineNielsPoint {
        x: Fp2 { c0: Fp(0x2f0552ef3c85ac1bc9d288e7961ca152), c1: Fp(0x7c07edd6b03526f994554824f6236fe8) },
        y: Fp2 { c0: Fp(0x58efa5bfd995a7bbf724214f7b2e7bf4), c1: Fp(0x32b493f482cb0459fcde5488644d4e76) },
        td: Fp2 { c0: Fp(0x1125ebb6761519e8e8e2b45bd4a4e5d5), c1: Fp(0x0ba7d537579d5a6918ba3fe29bb81d30) },
    },
    AffineNielsPoint {
        x: Fp2 { c0: Fp(0x182787f254fe5e304cf9a21acfdd9937), c1: Fp(0x6bb7183b6cd368054aef7d9b81b0852d) },
        y: Fp2 { c0: Fp(0x2ca26d8ab18065f6f88c468c42f13c7c), c1: Fp(0x45c78cee8b411d29ceaf15687f517e56) },
        td: Fp2 { c0: Fp(0x6dd0fff9af19912a34687a51f8c67f7a), c1: Fp(0x6f0bec142cc8fecd67e05bfa7b9c827d) },
    },
    AffineNielsPoint {
        x: Fp2 { c0: Fp(0x6485e38107813b86a75312345605749e), c1: Fp(0x60cd87cbf787e4e9663a76170e89001d) },
        y: Fp2 { c0: Fp(0x01622a10460bdc052d6a0d726c7d49c5), c1: Fp(0x77337cc072800c2d0a4999fe738a1aab) },
        td: Fp2 { c0: Fp(0x35460cb340b3df8f91a40b58a3c2c2f1), c1: Fp(0x0b1c9ecb5ac37fd4b7a4bd51fb87b37c) },
    },
    AffineNielsPoint {
        x: Fp2 { c0: Fp(0x12686c642c7a8c7ae506f02e2494e3eb), c1: Fp(0x6e27c5d1b18d96b08eb4ca9e8685f17b) },
        y: Fp2 { c0: Fp(0x3de16e4da173b8b19486bdb33ff7c603), c1: Fp(0x5b35489c174f39e9c5f8168d692f860d) },
        td: Fp2 { c0: Fp(0x267a3addb66dcb181b217c2297772e3a), c1: Fp(0x77ef939e94c9088798490daaaf293ab8) },
    },
    AffineNielsPoint {
        x: Fp2 { c0: Fp(0x5b93172514901e36e791e72782498df0), c1: Fp(0x064054de1ebf7421cc5f39f8fe459af8) },
        y: Fp2 { c0: Fp(0x06d0e67817658b43e7d5dda5373e1410), c1: Fp(0x551f2183b388fc99d072400762a1c84b) },
        td: Fp2 { c0: Fp(0x2c801edafbbe42a4ac8131b2a226d346), c1: Fp(0x1dbee9f02dd9d6afbc84592963d95496) },
    },
    AffineNielsPoint {
        x: Fp2 { c0: Fp(0x0d067e60a3b107359d98eda5ae3cee3d), c1: Fp(0x613e33010d1488fc52136001b9bfd7f4) },
        y: Fp2 { c0: Fp(0x05eaa5c455ada20de4a1d28c4a03c76a), c1: Fp(0x4d5a166e04984e1db5559f0feae0c676) },
        td: Fp2 { c0: Fp(0x365d540634b9d3b30b2abbee72572e97), c1: Fp(0x3ed3b9f711699547cbce4936771bdda3) },
    },
    AffineNielsPoint {
        x: Fp2 { c0: Fp(0x1afef14e248f5cd549fde346806729f8), c1: Fp(0x07da62b409b84d91bad3bc97b3574df2) },
        y: Fp2 { c0: Fp(0x4b03b7d533115627ff5f24ebb5609389), c1: Fp(0x6aff69b96c10c84265a49350cbc9199f) },
        td: Fp2 { c0: Fp(0x21eb8a39b4002cc63bd7d9b92aacdf29), c1: Fp(0x7a06f39b66a76ce04a237a20253aa782) },
    },
    AffineNielsPoint {
        x: Fp2 { c0: Fp(0x0083f5bdc52c68bdb3bd4108941f64ec), c1: Fp(0x456290238e5682aeaf79400a7582f41d) },
        y: Fp2 { c0: Fp(0x78e592ccdcf69dbc0bb84da355ae58b7), c1: Fp(0x71943de037cb38c0eb1e108afb83249e) },
        td: Fp2 { c0: Fp(0x7dc50af829dd4232605658d4696c9a9f), c1: Fp(0x58fe27791ac42fbb81946c743ad3174a) },
    },
    AffineNielsPoint {
        x: Fp2 { c0: Fp(0x094e86e3a896898dedfd09c17dcd7008), c1: Fp(0x09d69cfd01bd48395a7963c20321d05d) },
        y: Fp2 { c0: Fp(0x4e59fb169852e7509fe57c067a556ded), c1: Fp(0x7aa27b0510c10edd63a0733687dd8acf) },
        td: Fp2 { c0: Fp(0x0f2d22aec7b915da993600bd3d50b334), c1: Fp(0x7b01d606e2384b71174357da7a7411e8) },
    },
    AffineNielsPoint {
        x: Fp2 { c0: Fp(0x0b502c8e33ae9f663a7ffe68a74757de), c1: Fp(0x5902bc8aa8926875f1004102f505d0fa) },
        y: Fp2 { c0: Fp(0x02050e06f5468c064f294de2ef1cd7b8), c1: Fp(0x2c0bab27bc236c2b2a0ee8a5fcdf6e5d) },
        td: Fp2 { c0: Fp(0x0d6482ba3ac2958c120ca65ceac80bfc), c1: Fp(0x73feb9fdb0c75a4764a83940c1ebe808) },
    },
    AffineNielsPoint {
        x: Fp2 { c0: Fp(0x23578891a11a442d9591f6498193a024), c1: Fp(0x15d752415c6eb5b863a729a8a99cb286) },
        y: Fp2 { c0: Fp(0x55028b1cb2def91a3ea2f525f312ffb7), c1: Fp(0x32df609a0964d08635d4b35ea62ccb61) },
        td: Fp2 { c0: Fp(0x352369de679e708362c1a4907e97f7b5), c1: Fp(0x7563c5da3d34fb9e82befbc8d008ed6b) },
    },
    AffineNielsPoint {
        x: Fp2 { c0: Fp(0x01510cece624214d53e65f899c905d43), c1: Fp(0x121b0dd622248080885f91ab5c6685d1) },
        y: Fp2 { c0: Fp(0x01c50e8fa5feb5637b090122cd610097), c1: Fp(0x7c8616bb8e43e7c57dbf244e4166d10b) },
        td: Fp2 { c0: Fp(0x07cfc00ad9deff60a25c366b3e2a3409), c1: Fp(0x6799a3930265cf479f118f065019bb4c) },
    },
    AffineNielsPoint {
        x: Fp2 { c0: Fp(0x790e72bd3d13963888062ac20402505e), c1: Fp(0x0d1101f13459a1ee513b309e7980727d) },
        y: Fp2 { c0: Fp(0x05fceeb26d1ce04291f9854ea7bb17bd), c1: Fp(0x45715b0c04bfafbcb59762956a8518bd) },
        td: Fp2 { c0: Fp(0x3d9c122cafce46b3f6e05d00727876c0), c1: Fp(0x083982c0416c3a62b05917d6c7616709) },
    },
    AffineNielsPoint {
        x: Fp2 { c0: Fp(0x1474e4d93a000563189973433f192889), c1: Fp(0x7b0393dc8f267790480dc3eaaecebaa5) },
        y: Fp2 { c0: Fp(0x7f883ea2fc177d77ec1161eca53ce205), c1: Fp(0x3f4768cd8c748ddfeb5dee9ea7a2407d) },
        td: Fp2 { c0: Fp(0x0ab39e0d877a73a9d06acc56b9a748b5), c1: Fp(0x616bd5ab11430541d5594bfd282aa831) },
    },
    AffineNielsPoint {
        x: Fp2 { c0: Fp(0x35e79b38acd31138e8f42cb62c0a58fc), c1: Fp(0x080643693002965f263c4454729adc34) },
        y: Fp2 { c0: Fp(0x2e1856cd1820003cc9089a38286522a2), c1: Fp(0x5c27c1f0a1324609f5c9081479156b91) },
        td: Fp2 { c0: Fp(0x7f64cb081b658488ed99343457c1cc8d), c1: Fp(0x37050d096fa0d62308153ebf7659b708) },
    },
    AffineNielsPoint {
        x: Fp2 { c0: Fp(0x2a7bb0ddc9d2d729d63018d7281fd794), c1: Fp(0x7652a011412bc0bfc20a376262ea5958) },
        y: Fp2 { c0: Fp(0x397d0cadf19b61449f7a1621952aee17), c1: Fp(0x38911bc4c93a26bfea869fb848990909) },
        td: Fp2 { c0: Fp(0x109c1a9c9f314968da64b1524b198f1d), c1: Fp(0x215d2630a3523d8240b9f66a4cc6533d) },
    },
    AffineNielsPoint {
        x: Fp2 { c0: Fp(0x001330494627ebf7d986e284f9338665), c1: Fp(0x0782f7a8f7fdfbf719f56d05c3936cff) },
        y: Fp2 { c0: Fp(0x14e08353b98f224828f9f902827e984e), c1: Fp(0x5e165b67baf3d74ad53846de71f22107) },
        td: Fp2 { c0: Fp(0x08550b8b54cb64e15d2e93c7cfa967ff), c1: Fp(0x3bb8b0cc4b94c6f5005f33ec109b5ba3) },
    },
    AffineNielsPoint {
        x: Fp2 { c0: Fp(0x148cc68fea5ac9e6fa35606d5904eb73), c1: Fp(0x5d6aaa447e121f6535b5db5cb6067b59) },
        y: Fp2 { c0: Fp(0x33e6e2b682f869e84b36a82690e283ec), c1: Fp(0x5768381e6f562101c12fa5b71c917b31) },
        td: Fp2 { c0: Fp(0x57f3ee5fcf0d69a7fef538ae05a7578b), c1: Fp(0x1c9a77701f6db0050f8ec5cd7c0e96bb) },
    },
    AffineNielsPoint {
        x: Fp2 { c0: Fp(0x2e4b5c4587f65bedf0ac856fbace697d), c1: Fp(0x1c547edde1c401c13f4dabab7ca312f3) },
        y: Fp2 { c0: Fp(0x30ae76041dca877318c54ab229ca9c85), c1: Fp(0x214e9aa4f9083b5fef6c6cfe17195e09) },
        td: Fp2 { c0: Fp(0x5fdb062d6fbba2d80a474a560da12fea), c1: Fp(0x24e5e73d02ff8189d9b133db250b8408) },
    },
    AffineNielsPoint {
        x: Fp2 { c0: Fp(0x5cc57e3e4b452a6d5e69b995c8842575), c1: Fp(0x3e1b29b52cda9f965520cee98780ae70) },
        y: Fp2 { c0: Fp(0x0ff04a2abcd05ceeb3ff678e801ecc68), c1: Fp(0x00b555b231652167a08eba57403fbda4) },
        td: Fp2 { c0: Fp(0x70ac89f9a4a0ec586a595dd149373c6f), c1: Fp(0x3cc920b36107580d6b03fa728bbf1166) },
    },
    AffineNielsPoint {
        x: Fp2 { c0: Fp(0x5d3c8dc7c53ae2752c80f2a539a9c09f), c1: Fp(0x7fbaa32666142bbdf683c95fd0e5b418) },
        y: Fp2 { c0: Fp(0x735e55c94e9f14409b379da6b267f154), c1: Fp(0x3cf7d2417308940aae5e0b4424108106) },
        td: Fp2 { c0: Fp(0x61077f09df077fce20fd198d34bedca1), c1: Fp(0x4a86d362e8d0c67e60edce8469e2ce58) },
    },
    AffineNielsPoint {
        x: Fp2 { c0: Fp(0x217428735de8dcf14d903ec127e4a08a), c1: Fp(0x6cf1ce91929ba87e390e48dfa9fd7e7c) },
        y: Fp2 { c0: Fp(0x59354eb65d436f4ae178d0b6c1a07c4a), c1: Fp(0x07e13b093d0b2c7f1e4beab9f3d61714) },
        td: Fp2 { c0: Fp(0x74e1092109222432614c9d013fe52d21), c1: Fp(0x7f800f3d9c97f25eadb1f688d33529e3) },
    },
    AffineNielsPoint {
        x: Fp2 { c0: Fp(0x52f8ab1412301e634e4df169bb13aab1), c1: Fp(0x48ae819100d6d3a8af09f09c89280ee6) },
        y: Fp2 { c0: Fp(0x47288c6cf0413a3aa2246454d4a1e04f), c1: Fp(0x633840e7d1be3d99e129994f66cda995) },
        td: Fp2 { c0: Fp(0x67df2e0b4f32117d745eac682ff7a5ca), c1: Fp(0x124808372d539266d8d68d84a854cffb) },
    },
    AffineNielsPoint {
        x: Fp2 { c0: Fp(0x3f06e4c1c143f783b278602ca36a4ecf), c1: Fp(0x0ce2ebba15620335ac9174c806a30a73) },
        y: Fp2 { c0: Fp(0x0e0f8c04c066facf9c1421afdc7fcabf), c1: Fp(0x07f39a8ef3d9d47e3e242df2db6f57a0) },
        td: Fp2 { c0: Fp(0x6b2aa6f80333cb37f3a32cea773dce61), c1: Fp(0x07872195d7db395a38904e1eb36acd27) },
    },
    AffineNielsPoint {
        x: Fp2 { c0: Fp(0x70949e88cdc04729824099084500d692), c1: Fp(0x1525173271edec924874c09e87ebba56) },
        y: Fp2 { c0: Fp(0x5c5ccdf463b3b5cc025a5ed4dae368ca), c1: Fp(0x24f0d246107278103d7b852d9e8c194a) },
        td: Fp2 { c0: Fp(0x051dc251f5df977fb57904cd84ba7702), c1: Fp(0x0be559d12cd816b40bb399571cc1b6de) },
    },
    AffineNielsPoint {
        x: Fp2 { c0: Fp(0x67ed24211dcef167478c6ece1bf324e7), c1: Fp(0x34e564864a5db853ffa4bf523796f6e0) },
        y: Fp2 { c0: Fp(0x02d845b42cdcf49744befbb7c47d1861), c1: Fp(0x09c82cef9ebb071483c0f34510452aa2) },
        td: Fp2 { c0: Fp(0x30790347f7bbcd1c5206563062449bd2), c1: Fp(0x13fd7ece2031cb013905b3cc906bef88) },
    },
    AffineNielsPoint {
        x: Fp2 { c0: Fp(0x7d527d650c5733ee2b5b37c7214213e6), c1: Fp(0x74110a8f7b7bb3d086cc7f659fa085be) },
        y: Fp2 { c0: Fp(0x1676987b41becd4ce6914eedc8bbeaed), c1: Fp(0x261390e72280390bb8cdde3218ece426) },
        td: Fp2 { c0: Fp(0x0785cd7d939fd923c9d459c7c85b475d), c1: Fp(0x388d97aecdf0459c8a0b03accac4265f) },
    },
    AffineNielsPoint {
        x: Fp2 { c0: Fp(0x556aa214a8a5554a6621fa0a86c2b36d), c1: Fp(0x11d1348eab63e46ceaa4f3670f3f76c9) },
        y: Fp2 { c0: Fp(0x3bc7b945ecd52fca8982cadb2681d0b8), c1: Fp(0x38e625c9a12ed90b5f63c97c087d34aa) },
        td: Fp2 { c0: Fp(0x1613ee0f2aa9f9899190b58b7dcf7e36), c1: Fp(0x4476d74060f45fc7b7f60828fdd52d73) },
    },
    AffineNielsPoint {
        x: Fp2 { c0: Fp(0x0af3456a9456f3221dfe70197b6ab79e), c1: Fp(0x4755586e01a84208e176da68f8bb384b) },
        y: Fp2 { c0: Fp(0x7ebd70e57d63a9653ef43b1177b2af55), c1: Fp(0x759f4be090b2573291e08b1d2694e5d7) },
        td: Fp2 { c0: Fp(0x6ca0b94af29db496fca034a0d2f7fa16), c1: Fp(0x4e9320c025daa1122dcd8ddf02e24cd8) },
    },
    AffineNielsPoint {
        x: Fp2 { c0: Fp(0x7c7e5473c4c9c2a150819910452e0761), c1: Fp(0x6d1f47d5eb8e91ed93b16c440d734037) },
        y: Fp2 { c0: Fp(0x2168b3248d592ea9fedd25471c4eaf6a), c1: Fp(0x1899c63aadb7572360843940e71246d5) },
        td: Fp2 { c0: Fp(0x5f7da2b3d5850ea415ff2ae430c80e50), c1: Fp(0x1a03eafdf99c525d6685151378dc62af) },
    },
    AffineNielsPoint {
        x: Fp2 { c0: Fp(0x1e6e7b17c3a1b8c0847e27c950f23d8a), c1: Fp(0x1a092bb500c11ce9cc27c5ea65c9ceea) },
        y: Fp2 { c0: Fp(0x190564a4498a22f3fb37b8ff9c58d895), c1: Fp(0x4c9b96abee873191e702f4ec3c02d0ca) },
        td: Fp2 { c0: Fp(0x31d3cae8b7aa9ac2eee09be89862d532), c1: Fp(0x3f7708f1cc3c7a8b1062f9e3e8d7b2e4) },
    },
    AffineNielsPoint {
        x: Fp2 { c0: Fp(0x2f2aec9cca1d5f0feeb3e3eed431deaf), c1: Fp(0x2b2ccdabf7a6416f151e40b26eb08edd) },
        y: Fp2 { c0: Fp(0x078d229fe759b455382bd0ca68e3ea89), c1: Fp(0x054b315e9f3b72ebdf29fb4389d19d8e) },
        td: Fp2 { c0: Fp(0x7f309b1a828cb9da628a6707b2f25713), c1: Fp(0x35d8d1993fa11a6dd2e380d70fb22041) },
    },
    AffineNielsPoint {
        x: Fp2 { c0: Fp(0x2630508dd25f44d764d53fcbd641b360), c1: Fp(0x5ce8b342bfc3876d119f38af6b4ec6d0) },
        y: Fp2 { c0: Fp(0x7d5235b63140aa614802ced3e719c6b1), c1: Fp(0x10f9726b70f2a4421cff23d2dbfaf25e) },
        td: Fp2 { c0: Fp(0x60983158bd8205d66160032647001d2c), c1: Fp(0x6ff68abd6dbf64e011d5b67e1b533fb7) },
    },
    AffineNielsPoint {
        x: Fp2 { c0: Fp(0x6fa0a4dd02d4b85a8987097b87057deb), c1: Fp(0x6640acfa0cfb61eb735b4acf1ddedcee) },
        y: Fp2 { c0: Fp(0x185839b8d50ad7f251357d16e0a9b5f2), c1: Fp(0x3249fcfa906a42de5aeca5216b6f7cb5) },
        td: Fp2 { c0: Fp(0x0f8575a022e3876cc9a8ce876488bfe5), c1: Fp(0x1e89f12be0fc24e08024916c9fef6c89) },
    },
    AffineNielsPoint {
        x: Fp2 { c0: Fp(0x07711927f94e5c6e7d57f4e3b48b9f80), c1: Fp(0x45229f2c869a8eac0d29e0f697d5d047) },
        y: Fp2 { c0: Fp(0x370e2373341e9f411f863e83a7a1310d), c1: Fp(0x40fb4f03490266305b5d916d1589aaea) },
        td: Fp2 { c0: Fp(0x2b9d95e2854e6516734740f4638ae1c9), c1: Fp(0x6e7d7695cb633e3750ee2a36831d367f) },
    },
    AffineNielsPoint {
        x: Fp2 { c0: Fp(0x7299ce8b0a31315ecd192d593e50cabb), c1: Fp(0x68fc1c389c197afaca1f2da5a099467d) },
        y: Fp2 { c0: Fp(0x237da554212c4aeeadd5595d5fbdc9ff), c1: Fp(0x4b42c69e389c522b7b6f1432e3a10cd0) },
        td: Fp2 { c0: Fp(0x42127169901fc652d3cf8c9cc927955c), c1: Fp(0x4842d77d4ca4f071c907daa2792e105c) },
    },
    AffineNielsPoint {
        x: Fp2 { c0: Fp(0x50739f2a24a2b9ce0c299be8fbf72681), c1: Fp(0x48c0c3aab8454847ef340f6b362198fe) },
        y: Fp2 { c0: Fp(0x6639a2cc55767cafbdfaffe2f883fee3), c1: Fp(0x7b541ca50f4dca9dbb24ff0d4aeb6054) },
        td: Fp2 { c0: Fp(0x732482147d8a1d4b5a0735254cd74097), c1: Fp(0x7475d1614c443151a1724c4f1a8770ba) },
    },
    AffineNielsPoint {
        x: Fp2 { c0: Fp(0x4f7eae49c117592304a70d6b800834f3), c1: Fp(0x279e43246a340e24ca2b894232269bf1) },
        y: Fp2 { c0: Fp(0x2d9f97131755b29793c7288aebefd841), c1: Fp(0x1352e080390f81d02777cc09007e636d) },
        td: Fp2 { c0: Fp(0x648761f48b1484cf72137db64caa0254), c1: Fp(0x2d3092481c58e2b263a17ecca216a98a) },
    },
    AffineNielsPoint {
        x: Fp2 { c0: Fp(0x114eeea3b74e7be9be6fe82df3ba06fc), c1: Fp(0x2892e0d0ba96fc4f5d04d892a0d3e958) },
        y: Fp2 { c0: Fp(0x071b76d11ddc78fce8c939841f00740a), c1: Fp(0x7712a759b2329f5f9bdba3be112d97ef) },
        td: Fp2 { c0: Fp(0x31469f8f0f7c2e93399f37e693ca0f36), c1: Fp(0x05b301d4788d28944f6025b7455275d0) },
    },
    AffineNielsPoint {
        x: Fp2 { c0: Fp(0x3bd707fcb3cbc1b4f61ec20e86221bf6), c1: Fp(0x7e58b277b55bed993edb47164338318b) },
        y: Fp2 { c0: Fp(0x57881ab869c09f2e476f9fb11d607745), c1: Fp(0x1647b58d6671b6d9d051a6f528d3be4c) },
        td: Fp2 { c0: Fp(0x62fdbde3d05c2e28abfc714fdbc5f789), c1: Fp(0x54d66884ffcca7aac6a258a4c6037112) },
    },
    AffineNielsPoint {
        x: Fp2 { c0: Fp(0x69dcebfb29dff69c71acdd838ad2a620), c1: Fp(0x42bd3e2c3b0d356d5e9b04c7b14735c7) },
        y: Fp2 { c0: Fp(0x11137e1ed733a79f0c209b82707c8a1b), c1: Fp(0x68b06d9b4a1c5237f8d023ab2b369816) },
        td: Fp2 { c0: Fp(0x0859e525f7d0c09c9b49860a83acdf5c), c1: Fp(0x031772ea8294387ba38d5863457f62d3) },
    },
    AffineNielsPoint {
        x: Fp2 { c0: Fp(0x1e0fe31a28d89890125113d339745f62), c1: Fp(0x0faceca2b98690d67cff01b1ec6569f2) },
        y: Fp2 { c0: Fp(0x1a8e36fd5dbfb66cd5a41d12ffd364ee), c1: Fp(0x28bf53860c248ab4fc9167de79977021) },
        td: Fp2 { c0: Fp(0x3241e3808e5af3f0b616f78810a50c56), c1: Fp(0x6a80206b2b9ce13206a976e9e5c56ba0) },
    },
    AffineNielsPoint {
        x: Fp2 { c0: Fp(0x724083175b24a72bfa04c6942aa815e6), c1: Fp(0x20439d1b6d8f768984afefb5ca22269e) },
        y: Fp2 { c0: Fp(0x019a98d95c02a502decc884153c922fe), c1: Fp(0x645e718a44f92f725745541dd8a91494) },
        td: Fp2 { c0: Fp(0x382d51dfa683e6f65c5d833764620b10), c1: Fp(0x323f4eb3bdd02f3e56313c4b1cbe9fda) },
    },
    AffineNielsPoint {
        x: Fp2 { c0: Fp(0x076a291f4085b06aecc9749606d03e23), c1: Fp(0x07529b0d9f83f69179b187b1058ef5f8) },
        y: Fp2 { c0: Fp(0x730c6cf4058846c94e04660055cb3c96), c1: Fp(0x6605f72653f1beae974efa1f30f64223) },
        td: Fp2 { c0: Fp(0x613477a981eae419a81a090f60048de0), c1: Fp(0x6381a7652ba10d63a77a8786898277e4) },
    },
    AffineNielsPoint {
        x: Fp2 { c0: Fp(0x0ad866b753aa2a2c1945a59ea1df537e), c1: Fp(0x26bba3cf7f5307eeafc39ade60fdd7f9) },
        y: Fp2 { c0: Fp(0x759a1a2980345530ced82b85d623da57), c1: Fp(0x202219a5229b2eadbcc2e491a6277f6e) },
        td: Fp2 { c0: Fp(0x7de377850709497c372b061c642b6437), c1: Fp(0x0fd4a94e7c6da4d9fb2cca88b72beda7) },
    },
    AffineNielsPoint {
        x: Fp2 { c0: Fp(0x2c494437b958f28f690b74b2725ade1c), c1: Fp(0x44dc6ec0be1ad16e520f2e8fcbecf688) },
        y: Fp2 { c0: Fp(0x7e53d40a5918c5af7324c47716c655b9), c1: Fp(0x72862bd813f8b5db2e0bb39e0a03ce10) },
        td: Fp2 { c0: Fp(0x4b44b7b17de5f948714eca2444a1364a), c1: Fp(0x02bc78356fc4981ba2706022a17d016e) },
    },
    AffineNielsPoint {
        x: Fp2 { c0: Fp(0x692a0495a4aa91b19de82b757ed8a2a8), c1: Fp(0x0a9d2245c7863857e63cf06352627d67) },
        y: Fp2 { c0: Fp(0x2ebba6fd64402dc7df68278aae4996a3), c1: Fp(0x0dfcaa2b905318292f86f2fc72fa3d4f) },
        td: Fp2 { c0: Fp(0x6eeafa6900d7114b31e4ca2033a6c376), c1: Fp(0x41860f5f80f8e0b851ec486e3d535070) },
    },
    AffineNielsPoint {
        x: Fp2 { c0: Fp(0x7aa297780840d9c2bc0657801f935f67), c1: Fp(0x31baf2ce40799d18e12d61aa574ea0b8) },
        y: Fp2 { c0: Fp(0x745d81e3de4d3a0a14db9083cd731b13), c1: Fp(0x58851123c38e9091d1d38863256f114e) },
        td: Fp2 { c0: Fp(0x2a0cc9d1b4cc72cc9714c156005c5b2a), c1: Fp(0x40361084dfa84154af48277fbfd971da) },
    },
    AffineNielsPoint {
        x: Fp2 { c0: Fp(0x7ab087d19c72392825df45a2346fe346), c1: Fp(0x5b4fe8e792dbdfb779ff2aa367382663) },
        y: Fp2 { c0: Fp(0x60bad0f570b39b68f8dcaa7a73321b2f), c1: Fp(0x631758df761c17ed0aedec6ef0301a6d) },
        td: Fp2 { c0: Fp(0x773cf777a2a829a9186259da5c84c7f5), c1: Fp(0x6f05ec2dd1b47bf871d7a1ca0936e485) },
    },
    AffineNielsPoint {
        x: Fp2 { c0: Fp(0x51fa8770865cefa2bbc10ed024164bf6), c1: Fp(0x088d83c66683dd35eac48d2f3c8b0292) },
        y: Fp2 { c0: Fp(0x02d7f1078eda75669672e602bade9864), c1: Fp(0x47a6dadb2736ca59cbc7c4d77c8e9872) },
        td: Fp2 { c0: Fp(0x13e28c6cc453a1242337dff50dc28dd8), c1: Fp(0x15edb64a77c2b896107b9ba3f1212619) },
    },
    AffineNielsPoint {
        x: Fp2 { c0: Fp(0x10be9e23a7edf732df6450d6fae0c171), c1: Fp(0x3fd6faf63332f973d6ac6b778f3ffaa8) },
        y: Fp2 { c0: Fp(0x5bb79679185e2eeb35fb8b1972786e1c), c1: Fp(0x75c4f0428955897aca8a71a9a547cfc0) },
        td: Fp2 { c0: Fp(0x322b318f9b3a79507d2f3e930d333fdd), c1: Fp(0x1ec4eda5a2b273e4f481134360bb95f3) },
    },
    AffineNielsPoint {
        x: Fp2 { c0: Fp(0x6f3cb32128753e07a39e18613dc130b3), c1: Fp(0x616f58f4ba28bb2ecd52d5158c0c26cb) },
        y: Fp2 { c0: Fp(0x3e1b5cb3172decf7cd8d29fe1450a638), c1: Fp(0x5b4963a3a8052eca55425115410a9236) },
        td: Fp2 { c0: Fp(0x6ecc1a01f7575e6ae9983ce48410cc02), c1: Fp(0x5ac0e563ce4a9725e992259fba78382e) },
    },
    AffineNielsPoint {
        x: Fp2 { c0: Fp(0x76de65ae581d2e33b92596d5262f25c0), c1: Fp(0x564315c3254f1f56f7e4f07bb24dc264) },
        y: Fp2 { c0: Fp(0x514337f21aca535926cac6c38fb7f5cf), c1: Fp(0x2c3ba7cd609ded63041fe974f1547bd8) },
        td: Fp2 { c0: Fp(0x6e807ad503d6791faa4f7671602a7922), c1: Fp(0x4fcac497850b9ddea69bfcba27656086) },
    },
    AffineNielsPoint {
        x: Fp2 { c0: Fp(0x6de4744af491966601359dcca8c650f7), c1: Fp(0x43a529c63192c00049d198f5d321a4fc) },
        y: Fp2 { c0: Fp(0x5ac01c42c35ff3e7294ce5f67cf4d63f), c1: Fp(0x079595126ca11c493d3626b087d1d7f9) },
        td: Fp2 { c0: Fp(0x1b6c28cec346e478a4edbb86c6101424), c1: Fp(0x5ef07f3319d671ab5d1f2d43ecca9ae1) },
    },
    AffineNielsPoint {
        x: Fp2 { c0: Fp(0x57fcd61e3f607271d74d6475cccfaf47), c1: Fp(0x298c9d3edf082a41b99ea7d8936d43eb) },
        y: Fp2 { c0: Fp(0x3670b5d2b75d698e5320fb9fbe13c5f2), c1: Fp(0x1f4da802024c04276e10601532d40cee) },
        td: Fp2 { c0: Fp(0x5193dfaade309f388b852d6686ccad65), c1: Fp(0x78c0f21964436cbaad1096ed874cc6bb) },
    },
    AffineNielsPoint {
        x: Fp2 { c0: Fp(0x190c31c52ac2d71185e669e3a9671cc7), c1: Fp(0x78712299da96fea7cae08e16802cb3f3) },
        y: Fp2 { c0: Fp(0x5be3f9c1b76b9255fd7f280f7faa821d), c1: Fp(0x75370219a1be19960fe7b1c83a612370) },
        td: Fp2 { c0: Fp(0x5fe5a6cdf518dfba9350c52e8420ab9e), c1: Fp(0x2d20ab4e6c87af42140bc5da7cfb54e5) },
    },
    AffineNielsPoint {
        x: Fp2 { c0: Fp(0x5bead08d1a323c918dc4e6f115732afd), c1: Fp(0x6049acef519cfcbeafb0f9e0313a2bc3) },
        y: Fp2 { c0: Fp(0x0ae58a39bcc334e51d1c41d66d39c7da), c1: Fp(0x2f7f7759646edc44edab6e4a77dee929) },
        td: Fp2 { c0: Fp(0x7c0b3a6a1a0bde1f2bfc23aefd265c78), c1: Fp(0x3002016fa22400053367a312c8e2372e) },
    },
    AffineNielsPoint {
        x: Fp2 { c0: Fp(0x0ea4682a4a99f133a8b694cdb3c6d9cc), c1: Fp(0x02ea0de1ba8def12fad6157daf7ba537) },
        y: Fp2 { c0: Fp(0x192a84f743841d700dd9d35e0a4c364e), c1: Fp(0x67544c0e43538a7e01cf8324d2072205) },
        td: Fp2 { c0: Fp(0x3040b4dfa53887b8625b85ad669258e3), c1: Fp(0x633f3f277a6f0837d19aedb2c84f3af8) },
    },
    AffineNielsPoint {
        x: Fp2 { c0: Fp(0x41967412420255b7c361159a41bdc3b6), c1: Fp(0x4829d0782d70fc423659c17f91a2f0c5) },
        y: Fp2 { c0: Fp(0x58e82b738047690c2722fa694500ffda), c1: Fp(0x190d64376859de507e344dc91c3892ee) },
        td: Fp2 { c0: Fp(0x1dfa5693b388858b2569112496c366bd), c1: Fp(0x66e467b5301e0757e59983e6ff8066b0) },
    },
    AffineNielsPoint {
        x: Fp2 { c0: Fp(0x51118196c8bf438bcf943f45fabde8da), c1: Fp(0x1c968be37b2a48ffc1926e2f2ac48212) },
        y: Fp2 { c0: Fp(0x6c1290eb87b2f1249ff610d681df3905), c1: Fp(0x14539619a334a96fe9f1c09a324d2e37) },
        td: Fp2 { c0: Fp(0x254b063cdcdcbeae7118e32991664808), c1: Fp(0x4ed537bb6d5bc6ae9a8aef68eb7baa91) },
    },
    AffineNielsPoint {
        x: Fp2 { c0: Fp(0x2e70fe8550cd09107a79271a6d424a41), c1: Fp(0x349e7d9ecc9ea9536d27bbcfe07dc0cf) },
        y: Fp2 { c0: Fp(0x66857babefcc9edce588538ff6771c25), c1: Fp(0x04385ddc06998e347293ec276f210f5c) },
        td: Fp2 { c0: Fp(0x4f759bebef52aaf6d7f822899853afe6), c1: Fp(0x4548de9523372fed49e7681be06d772c) },
    },
    AffineNielsPoint {
        x: Fp2 { c0: Fp(0x7faa4e1456cf58c3b46d691dfd66011c), c1: Fp(0x381ffbf6b3ad2ec21581ee234b35cef8) },
        y: Fp2 { c0: Fp(0x088d9b5fff815a9b848074f95a5d1db7), c1: Fp(0x52647d8e7ea16ed27b77a442ecaadf2b) },
        td: Fp2 { c0: Fp(0x4c3b0efeca714078a768a3740ba0eec9), c1: Fp(0x22df2d52475f8ffe8ae22fb921ea548a) },
    },
    AffineNielsPoint {
        x: Fp2 { c0: Fp(0x666c4f5e097be2eefe7d25833efa8d1e), c1: Fp(0x189d69593ac98d536f4061e2ea41a2b9) },
        y: Fp2 { c0: Fp(0x4467342da7ef481aa928d93d5f96f76c), c1: Fp(0x02b0b3f678e0d8175d7bfb50c409ddfd) },
        td: Fp2 { c0: Fp(0x19ccf2959d09929b37d1e826e5f1c270), c1: Fp(0x3f7d02b5a0f23fe08d0fd07f67b82f6d) },
    },
    AffineNielsPoint {
        x: Fp2 { c0: Fp(0x7ace159379b509b6585ddb6eb4fd6b0f), c1: Fp(0x400e17a6fac8a4861f849aca543dd96c) },
        y: Fp2 { c0: Fp(0x4f29af93044729900b60c10ce901258b), c1: Fp(0x44088ec57a82d1476a6fd78a0e23ada9) },
        td: Fp2 { c0: Fp(0x669f727dc251b2a81378d3f66f2f3e4b), c1: Fp(0x5af268d64c63f824a8b769f721e94b58) },
    },
    AffineNielsPoint {
        x: Fp2 { c0: Fp(0x30ab6bb60cc879c4b0ae08bf2faa3d0a), c1: Fp(0x7392a747d82ef63a8fc15591a74ecd96) },
        y: Fp2 { c0: Fp(0x69da2be50ade5e072840a62af9fc94fd), c1: Fp(0x40b7c7c2bad84015d6339e5cadd9b7df) },
        td: Fp2 { c0: Fp(0x0f89648c20354cd001279cb80678cf9c), c1: Fp(0x1b1914bbf17737a0bac37b940807ed92) },
    },
    AffineNielsPoint {
        x: Fp2 { c0: Fp(0x4e757a24412625babaf33154b2c2d915), c1: Fp(0x2482efe2bb3b7079c897fcc7d5ea1987) },
        y: Fp2 { c0: Fp(0x27fd22fde838f2375ee2214744f9a662), c1: Fp(0x1e1e42e114774cb0fdd7ffcc6ec53180) },
        td: Fp2 { c0: Fp(0x08a2dd3219ab40945a9e66f5e3f23a59), c1: Fp(0x561f885be3126acf7b60990bff0179f3) },
    },
    AffineNielsPoint {
        x: Fp2 { c0: Fp(0x285219cc18b4fb11254e93cba02d8873), c1: Fp(0x578e5f18dcdf4d3368763460df4c69ef) },
        y: Fp2 { c0: Fp(0x6a83a0ecf565ac233b2b039d0781040b), c1: Fp(0x14be963d98e4bbdbff3aaf0c4f838ba8) },
        td: Fp2 { c0: Fp(0x729d20cf1d06f189343fab9a385eb521), c1: Fp(0x31a729137147cb4485bba1d5921eafac) },
    },
    AffineNielsPoint {
        x: Fp2 { c0: Fp(0x471d6fa53e0bc128feb61e6ad9b550b3), c1: Fp(0x697946d005801faa3e63aa7413184912) },
        y: Fp2 { c0: Fp(0x50978bde2185abd53e2c20e3dfe2cfba), c1: Fp(0x511c788590e3f7d767a3d27b73d9b780) },
        td: Fp2 { c0: Fp(0x2315ff96a4053a9be76b9ce812319f00), c1: Fp(0x42183445c330edf51efdac6efa5f2233) },
    },
    AffineNielsPoint {
        x: Fp2 { c0: Fp(0x54fbd2ed2010ae497c8bf9c6bc7faca7), c1: Fp(0x23353b4c0596c01f555454268b123a1c) },
        y: Fp2 { c0: Fp(0x712ec8f6c9027a919e3b01c84b2edcc4), c1: Fp(0x51259b36dc6a04a388bf0070ff0e7a38) },
        td: Fp2 { c0: Fp(0x276277729f2cfec07a49c7bd374491d3), c1: Fp(0x714de7a9ac4f4039260895fa5ea21ae2) },
    },
    AffineNielsPoint {
        x: Fp2 { c0: Fp(0x27995a7701891e407109b0e61214550c), c1: Fp(0x233a365a64635ce42662ae2509ad5458) },
        y: Fp2 { c0: Fp(0x21d713e94667f33c8a24a4e6e4202df4), c1: Fp(0x064020355a86d51d44badb8c2af28af8) },
        td: Fp2 { c0: Fp(0x3b32b597f731a5f902640e19b5e92049), c1: Fp(0x04034b21c22c193c155a99b6ba6820e8) },
    },
    AffineNielsPoint {
        x: Fp2 { c0: Fp(0x58de7b1a6c6b073ebe106dabf976fea5), c1: Fp(0x5e5f9c37ec0cb74e81b060a4d217e626) },
        y: Fp2 { c0: Fp(0x4e324a7409692656320f5ff5d238337d), c1: Fp(0x461dddd4bcab1aa541d43b1cdd8b8b21) },
        td: Fp2 { c0: Fp(0x417339796dca37226fa027cef331b616), c1: Fp(0x0e76859b7288ff9e200f6b4cea499828) },
    },
    AffineNielsPoint {
        x: Fp2 { c0: Fp(0x47efb26117639c778b0ed17209892ba4), c1: Fp(0x0c06d4e1e26a0c2e5a68bd3b4117a178) },
        y: Fp2 { c0: Fp(0x0b1d35e85f2ecc56915be66ee635c38e), c1: Fp(0x308cffaa626d17bf24fc1b9275876e02) },
        td: Fp2 { c0: Fp(0x11447ae9587509ad9b3fc4022759bfe6), c1: Fp(0x206d0eb80aae0711b542b57bef57811d) },
    },
    AffineNielsPoint {
        x: Fp2 { c0: Fp(0x47f2a1fe71d134c56dee45ce9eb82ffa), c1: Fp(0x1aa946a52482fa7345637fee43de7ad8) },
        y: Fp2 { c0: Fp(0x199a12fa671367bc34a3f67faf3c8adf), c1: Fp(0x606df8b910f7c37aff83dcf45148b3f9) },
        td: Fp2 { c0: Fp(0x1dfc55917f4b55f521fd1394d7bce687), c1: Fp(0x496c0101a1c5ca1dc7c49708224507fa) },
    },
    AffineNielsPoint {
        x: Fp2 { c0: Fp(0x58fb2dd220cbae582e83dae7a9c24bb2), c1: Fp(0x1f9ab65335e53189c7ebcfea10172beb) },
        y: Fp2 { c0: Fp(0x67f5cdad2d49ba63cfae7ee2c6f5e3c5), c1: Fp(0x0e0cd30a98a639db4fb23bdb6f3c219a) },
        td: Fp2 { c0: Fp(0x470db54ec28d99e9cd1c12438179b53b), c1: Fp(0x248a0b614920ca0367495fc5bc908cc8) },
    },
    AffineNielsPoint {
        x: Fp2 { c0: Fp(0x1cdd0de5c2e4f0bdbe901e2ebe861dc9), c1: Fp(0x6906199a6ca15d220a45ec73d96df18f) },
        y: Fp2 { c0: Fp(0x1e9759dde94a93f128223dcc9b890b0e), c1: Fp(0x03192769245d941bceeba0e5cf7a7d55) },
        td: Fp2 { c0: Fp(0x5a67864026e11770deeeb0af9864117c), c1: Fp(0x7ea9cf747cf9f8bc9e9a0030372bbe19) },
    },
    AffineNielsPoint {
        x: Fp2 { c0: Fp(0x00631c7369a5349ffc9492318da226cc), c1: Fp(0x0e2e4511053a9459babf6d9416cb3620) },
        y: Fp2 { c0: Fp(0x0187a12b11352dd5acae365f97009bc1), c1: Fp(0x5659e5549f990bbc19af13f0282b90e8) },
        td: Fp2 { c0: Fp(0x7c313d587e6b8931c57ebf8de341d98a), c1: Fp(0x79daec787f3c04119ca3d7656d9da632) },
    },
    AffineNielsPoint {
        x: Fp2 { c0: Fp(0x45b8e12cb7e54b1a6062df4cb077f5b1), c1: Fp(0x1087d989d2f7a618eaed96d84910a626) },
        y: Fp2 { c0: Fp(0x11afa968f0f71da614241f3f0e7fdf4e), c1: Fp(0x40648344678bc7b7f42c2a686e661e05) },
        td: Fp2 { c0: Fp(0x63568b98d720231bf10fbad36a319f50), c1: Fp(0x68130ea331ab97eb1559b14a5922ce03) },
    },
    AffineNielsPoint {
        x: Fp2 { c0: Fp(0x13bb2cd6eb73b3fa6334d5361fc96fea), c1: Fp(0x6f1f52c7ede055576301176037f22499) },
        y: Fp2 { c0: Fp(0x09652dc249c4e928a7f6c81b1d8973ea), c1: Fp(0x75664e064489aecde354e2b98b104199) },
        td: Fp2 { c0: Fp(0x2b90306266988e187df1902e29ecad28), c1: Fp(0x4a5e60c4865d86cf99c405202fae5894) },
    },
    AffineNielsPoint {
        x: Fp2 { c0: Fp(0x27151d7c00a4b1b4947123b2b75c34f8), c1: Fp(0x4fd598abe9b0336d2f9cecf94d18a92a) },
        y: Fp2 { c0: Fp(0x288d417256fe5ee769b7dd31ad81c7c3), c1: Fp(0x28211f378e32b35951fbdf9902dc6955) },
        td: Fp2 { c0: Fp(0x432ab92b14b8def911b540f3b5a3588e), c1: Fp(0x4853cc4aa8ff81ae4abbb6ad4b0fdef1) },
    },
    AffineNielsPoint {
        x: Fp2 { c0: Fp(0x5f753da38f7edffb9fd4e0cd2487234d), c1: Fp(0x48ad32066c70721bc7301ad16e3bf0a1) },
        y: Fp2 { c0: Fp(0x288f3227b68f7d01f829323555064df0), c1: Fp(0x4da706261c39854f9a7457955fac9526) },
        td: Fp2 { c0: Fp(0x35bc4054aa11d66101d53470372c8763), c1: Fp(0x0db4dfebab29617da7a995d1691978b7) },
    },
    AffineNielsPoint {
        x: Fp2 { c0: Fp(0x20f00fb51035e51bcf4e842b222dbac6), c1: Fp(0x39b7e91b88e8788af3f627d9f9090756) },
        y: Fp2 { c0: Fp(0x656ce0f1cf0fd46c5997727a0e78ec80), c1: Fp(0x3da21882693b47d8ec4128c8946434c5) },
        td: Fp2 { c0: Fp(0x46f4b1b9f76215eff2f04d7565ffa71c), c1: Fp(0x4a63df47e01e5086c060f22e50baa212) },
    },
    AffineNielsPoint {
        x: Fp2 { c0: Fp(0x46992202d1d746b9446e667bf3ed3ef6), c1: Fp(0x596829541b9e953597b726440736a34b) },
        y: Fp2 { c0: Fp(0x78a3ac116f80bec524bd2892387719e8), c1: Fp(0x650cb1abc6e1675b21e50921e16d906f) },
        td: Fp2 { c0: Fp(0x457345bc3525b36b4d1f0ad2e29ccbbf), c1: Fp(0x6247574ce20a56e4f709cbde082f46cc) },
    },
    AffineNielsPoint {
        x: Fp2 { c0: Fp(0x3e9450a76c9309309ff7334ba78df26a), c1: Fp(0x4334fe1a7ab73354dc9e3e8d9601abc6) },
        y: Fp2 { c0: Fp(0x45b08a2b90bdd7876d1478c903fcc0c2), c1: Fp(0x6de814dd926bcf98a4d6a5e9cf605707) },
        td: Fp2 { c0: Fp(0x44713010332cd1ebe4fd8d1f3d3641ac), c1: Fp(0x611d3b466fabd3b5e442a2ad230ffe98) },
    },
    AffineNielsPoint {
        x: Fp2 { c0: Fp(0x21ca895b723dfc3b38c7996be7493d87), c1: Fp(0x6790d578292049c8311be58c8768c608) },
        y: Fp2 { c0: Fp(0x2d94daf7f317261853adef70906bb124), c1: Fp(0x37237762aad586968a69bc2aa96c9e74) },
        td: Fp2 { c0: Fp(0x2cf8b4cedc66f3816a91a1335d35fc49), c1: Fp(0x5b73e6c57fca8e23ed8f667501e04ea4) },
    },
    AffineNielsPoint {
        x: Fp2 { c0: Fp(0x13710eaaf6a601bd7cb8988ec8276516), c1: Fp(0x34381afc6ae8fd7fd121c4301653c9c1) },
        y: Fp2 { c0: Fp(0x171cca2aa812d46f080267a8b0f877a8), c1: Fp(0x4a50dcba8dfef8e5c9504de478743043) },
        td: Fp2 { c0: Fp(0x5fe4dab6372b6b479e8b2270b3aa396c), c1: Fp(0x0f9d303b2e15aed65ff8b64533bad177) },
    },
    AffineNielsPoint {
        x: Fp2 { c0: Fp(0x418283f4318808adfbedef60bd1b72ce), c1: Fp(0x33f5784e884394429e0aa7b95b615eda) },
        y: Fp2 { c0: Fp(0x7ced2188c6e6a5d1796c9be868085c59), c1: Fp(0x073c1d6dbe248c91f6b9d62676b2b81c) },
        td: Fp2 { c0: Fp(0x27f7e528c28ff0eded5c016af4393a71), c1: Fp(0x3dd557108cd88d3ebc0c74b75754d28e) },
    },
    AffineNielsPoint {
        x: Fp2 { c0: Fp(0x6118a902f24af33f54d102821aad5a7a), c1: Fp(0x5f490522021c6e8d012c88fc0dc5d6e4) },
        y: Fp2 { c0: Fp(0x5c4fe75c2fc667c1c92f4453bce5bee4), c1: Fp(0x3652e2f10e60f22bc516c019007d8a55) },
        td: Fp2 { c0: Fp(0x2a4c6328385944e54db430680f117c97), c1: Fp(0x1ced61e3fcac6af9bf4ac41b74649442) },
    },];

/// Comb table 1: the same entries multiplied by \\(2\^{16}\\).
pub(crate) static GEN_TABLE_1: [AffineNielsPoint; 128] = [
    AffineNielsPoint {
        x: Fp2 { c0: Fp(0x77feaacf9c56dd8c56e3984356fd2750), c1: Fp(0x20831d13e8002a50238e1198ff73846c) },
        y: Fp2 { c0: Fp(0x68477586f14d9fc98ad205c65ea3e962), c1: Fp(0x1f703d73808a4b9d0d40f8fce50f5f4b) },
        td: Fp2 { c0: Fp(0x221e6aed8c42864823c3713e42bcca1d), c1: Fp(0x73623f8f6f8cc340d3785c546d226959) },
    },
    AffineNielsPoint {
        x: Fp2 { c0: Fp(0x3bccdb00fc2604d47bae22b72a4f9416), c1: Fp(0x552ba4eac8aafe90e045915bb54f0668) },
        y: Fp2 { c0: Fp(0x7be263fa9c3047175feb2d62ea197b01), c1: Fp(0x7fb1cc96f91ea51ba7ca7fcdf5f0fe3c) },
        td: Fp2 { c0: Fp(0x59efd59b7d2425581577d67ab67b9a98), c1: Fp(0x3071c649190739d8899137dee667ae11) },
    },
    AffineNielsPoint {
        x: Fp2 { c0: Fp(0x1f8a7e96824f819874cf654f69fce904), c1: Fp(0x19e946b4001d70c80156260bb6eb9564) },
        y: Fp2 { c0: Fp(0x6ed0582ef83cfb8a7b83b582d77cbebd), c1: Fp(0x7fce05c1403ba5f3c5d0bcedc41eb88d) },
        td: Fp2 { c0: Fp(0x0eb2922fd15a1789f6dedcfdacb259cd), c1: Fp(0x1fa2aa701c9fc3445ceef6f2b9bb1e66) },
    },
    AffineNielsPoint {
        x: Fp2 { c0: Fp(0x002b8c5f0de08f2ca638e568034b8d31), c1: Fp(0x26d82931750b3fd0c9644d30b67adb61) },
        y: Fp2 { c0: Fp(0x291b27411bf1399e92e136c022cc9503), c1: Fp(0x3d54db30af0d4e3683aac8eb935a1297) },
        td: Fp2 { c0: Fp(0x17609daba56924126b346b5fcf1ea201), c1: Fp(0x245a67e3188b4a1e35281b8d8ac3044d) },
    },
    AffineNielsPoint {
        x: Fp2 { c0: Fp(0x2e984f7a413377958adf780bada2db43), c1: Fp(0x0b0218ab64f1bbbd8645642e66383ece) },
        y: Fp2 { c0: Fp(0x62cb7137c6a505fc85c33b9586e42a58), c1: Fp(0x517dd847888dac09ee06b4357945d865) },
        td: Fp2 { c0: Fp(0x0b4b21c6dbd3b68b881fe889d7aa1a60), c1: Fp(0x15544c99696e0825efd7cd8bc9f5f729) },
    },
    AffineNielsPoint {
        x: Fp2 { c0: Fp(0x45fd82b478f87102efccdb5263c83443), c1: Fp(0x11fbc93945b2b3443d86e9fb256e1784) },
        y: Fp2 { c0: Fp(0x0fd7b81e4c7f8cb57e6d40f0514115f0), c1: Fp(0x5a49eb8c010fa21315b8f84256357739) },
        td: Fp2 { c0: Fp(0x28d9ce79b98a0ae17a5ce41d39f24776), c1: Fp(0x4e71307b7e6d060676687bbc0667abe2) },
    },
    AffineNielsPoint {
        x: Fp2 { c0: Fp(0x0cd48530a66a57c9fe824419b04c0a87), c1: Fp(0x7215e4780823de0b09e36441ff9eb113) },
        y: Fp2 { c0: Fp(0x29bcc12c501f5972ddd49fa50276b03c), c1: Fp(0x1add8cb054e569f89f2f457047e55060) },
        td: Fp2 { c0: Fp(0x0efb2c57f1293c04bf699d1416eb0548), c1: Fp(0x7412bbc9a66fb9ec15a679bdfe1d63f3) },
    },
    AffineNielsPoint {
        x: Fp2 { c0: Fp(0x19550d574a7b24c85f48d3bc89ffef33), c1: Fp(0x0d451e94d1aa1fcd085060b5f96ef726) },
        y: Fp2 { c0: Fp(0x25858b251a2279fead35e839376f605f), c1: Fp(0x0e2fe4c6b4f8361eca0071b5551eaa5e) },
        td: Fp2 { c0: Fp(0x5933e96c425f35ae9c7c17ae0ee73d26), c1: Fp(0x0890ce0f3ecff78f060da571fd46aab5) },
    },
    AffineNielsPoint {
        x: Fp2 { c0: Fp(0x2075887dbf2c6a69c008006ea6bf2029), c1: Fp(0x63563ca1c48cd535e5931383d34a6885) },
        y: Fp2 { c0: Fp(0x2bb4c1dcf482ff44648a8d539a2569f1), c1: Fp(0x5abb793312a1eb28d28d01603303b36e) },
        td: Fp2 { c0: Fp(0x019328926d96b869af70a996dcc43462), c1: Fp(0x3c5748204494242a7408e0f9277938b5) },
    },
    AffineNielsPoint {
        x: Fp2 { c0: Fp(0x2de60ab784a81832e8c03c12234d01de), c1: Fp(0x50f7a76dbabe3d71cf234df29a89f899) },
        y: Fp2 { c0: Fp(0x398faf7f682475e6048f864513536ee0), c1: Fp(0x25a48365e12c8396f08422e1cabcfd94) },
        td: Fp2 { c0: Fp(0x70562ff9f738adb0592fa379110104c3), c1: Fp(0x3be9b4704c700c1da89ca821887764c1) },
    },
    AffineNielsPoint {
        x: Fp2 { c0: Fp(0x5122349deaeb04232cc1ddc075eb1fcc), c1: Fp(0x66994d88ccb38e5de0eda70ed7193a8a) },
        y: Fp2 { c0: Fp(0x7335996df6d5de5131238a0c00c7fce2), c1: Fp(0x70a35f209f0affcf0a0a35bb9094a956) },
        td: Fp2 { c0: Fp(0x19c8708186d7ce040852e528b1072c7f), c1: Fp(0x5b01c0ef04b767610508b683716a6fb6) },
    },
    AffineNielsPoint {
        x: Fp2 { c0: Fp(0x31032a5b51fe09a9d3a2b99598e1ba42), c1: Fp(0x2dfed62b6c34c9d74afeae05ab93a4d0) },
        y: Fp2 { c0: Fp(0x29b2db35d1691a014f7e3c1080a59692), c1: Fp(0x456c171f136b2b461cd834ffe0234e4b) },
        td: Fp2 { c0: Fp(0x0f458a6423c6b07c989be05f148cf6b0), c1: Fp(0x72b1e355ee5cc0457eb376a07f0b53d1) },
    },
    AffineNielsPoint {
        x: Fp2 { c0: Fp(0x2db0814a76f8848f2cae0033d6f75ec6), c1: Fp(0x4413e64f46872ed1b7a2458288fc3418) },
        y: Fp2 { c0: Fp(0x1b578a41e89ae2b5e74eec761bc07090), c1: Fp(0x2866488aae80680080d5064e2877fa52) },
        td: Fp2 { c0: Fp(0x71fc9fcd8241e789741b977dec9e5eda), c1: Fp(0x755f304654b5fef06bd318a3bc4eed9c) },
    },
    AffineNielsPoint {
        x: Fp2 { c0: Fp(0x7c04724397fa4a5eacb861ee77d96b83), c1: Fp(0x4d47fcb66456aebf7d7f31b660cd9713) },
        y: Fp2 { c0: Fp(0x2239bb3889bd57e41e0540eb5dac0d94), c1: Fp(0x56e4df613d403ecaa1fd3187a3edd88e) },
        td: Fp2 { c0: Fp(0x16e891e4879915cb508deea2365c5a74), c1: Fp(0x557abb3ef41083f1e220dd30ee08579c) },
    },
    AffineNielsPoint {
        x: Fp2 { c0: Fp(0x2ee131e452d01cfe702b82420b7242ff), c1: Fp(0x6d607b5dae1c3b4010d39fe6d3c7cf4c) },
        y: Fp2 { c0: Fp(0x20cd3f32f402653e9e2a083578c30478), c1: Fp(0x0741bcb81300829fc04966f6d564fbba) },
        td: Fp2 { c0: Fp(0x0da352ca52114d6be7ba0653f68ab789), c1: Fp(0x3acf55cb3915d821d3b334aa7a658281) },
    },
    AffineNielsPoint {
        x: Fp2 { c0: Fp(0x577d38d816dede12c178eac69ee319b3), c1: Fp(0x195a25c699063cb145704d35c4d6c0d0) },
        y: Fp2 { c0: Fp(0x6ca51532365c3c6b6080747f2ab4740a), c1: Fp(0x1f0ec1bfaed324f96aece4764e70a4dd) },
        td: Fp2 { c0: Fp(0x6806cba4d7adbd77b05771e3cfbe7de7), c1: Fp(0x6a45d9dea2ec57475544c4cae3454e2c) },
    },
    AffineNielsPoint {
        x: Fp2 { c0: Fp(0x392949b5b7e08562eee19ea229da73e3), c1: Fp(0x68d14be549134bc13dc857816abd60f9) },
        y: Fp2 { c0: Fp(0x06f4f958fdd1432cb1ce1f39c55df542), c1: Fp(0x71f6039ce0aa5a4987d3b9568c3b3edd) },
        td: Fp2 { c0: Fp(0x4fbf47fb1408e6237c70a5936b593ca4), c1: Fp(0x57d0d96b507f17d06b2c152ded192e2c) },
    },
    AffineNielsPoint {
        x: Fp2 { c0: Fp(0x3b076badcc90db7b46abf88e32a10b71), c1: Fp(0x1baae2e16b2ad66377d4f07ed36ab759) },
        y: Fp2 { c0: Fp(0x278d92b9a11ef0d97b6bab79fdf4daac), c1: Fp(0x5b28b79cfb7d2822a59180e09b7aa8fa) },
        td: Fp2 { c0: Fp(0x16e7ae290712985aca710739044fdc6b), c1: Fp(0x32d3c5f9a3de4a2f47b7136dedaf3664) },
    },
    AffineNielsPoint {
        x: Fp2 { c0: Fp(0x5cf2cd3919fc18d0c8e2e99f5b1d6583), c1: Fp(0x45b4125ad7355eca502710b0ba621305) },
        y: Fp2 { c0: Fp(0x7e7bc36e7bb4a7f9cdcdbb11b03c489d), c1: Fp(0x1528afbb543548a88e047ce0faa83fc6) },
        td: Fp2 { c0: Fp(0x598b262afc47f3f4e4ff736f2d98f2a4), c1: Fp(0x6d6d5ac0cd8c15d7f31b19893bac41b6) },
    },
    AffineNielsPoint {
        x: Fp2 { c0: Fp(0x085f3ce6ed0be4369e6fe600cf3b36f8), c1: Fp(0x5e57e0cc249af1e03b1313fcee749a69) },
        y: Fp2 { c0: Fp(0x2493a9d4518bf9788e263ca45cf39c87), c1: Fp(0x74acc861e4e66c50709dd470d1137587) },
        td: Fp2 { c0: Fp(0x18917801f63bec1a537b5a0cb37463df), c1: Fp(0x47cc35f6089f445612e69c8f3d35428c) },
    },
    AffineNielsPoint {
        x: Fp2 { c0: Fp(0x77c5bcadc3a28ccdb7a8e3170bad6cf2), c1: Fp(0x19451f91d370122dd29972b73370a88e) },
        y: Fp2 { c0: Fp(0x6a13468a8ef404011388a0c0ff7cb26e), c1: Fp(0x6149eb8556e21be181a1ccbabebb3b8f) },
        td: Fp2 { c0: Fp(0x26c5fea38a991d5317f52aca947f242f), c1: Fp(0x7ff3503f8ce8bf7844311c938a4e0ba1) },
    },
    AffineNielsPoint {
        x: Fp2 { c0: Fp(0x51cbf844b70f297700aad3a130669b0a), c1: Fp(0x7cdf81e4f035a37eb48b0a95ac0f1e93) },
        y: Fp2 { c0: Fp(0x32e7d812c8696b75bf254bf29523ff29), c1: Fp(0x16cc2cff39dc9ef18a4fea45bd839d6e) },
        td: Fp2 { c0: Fp(0x705f364d89b51962f3f6e1f9b56628b4), c1: Fp(0x60adb69ec1955d550815a174cb13a8cc) },
    },
    AffineNielsPoint {
        x: Fp2 { c0: Fp(0x1603369a658ad0f3a163f09922bf1056), c1: Fp(0x179434bfe45d6e404eef737993235536) },
        y: Fp2 { c0: Fp(0x26eeac3e53aab3ece065d4f9fb8a56af), c1: Fp(0x1dace9d24deefe9e657a056c52badac9) },
        td: Fp2 { c0: Fp(0x67c318c7616d692d5634f19772e33908), c1: Fp(0x14c235597d08971e1aac8ebdac5129c6) },
    },
    AffineNielsPoint {
        x: Fp2 { c0: Fp(0x0c95a80bf5541e7dd78dc3ba249f8613), c1: Fp(0x3a460720bc0186e28c078d92fa3c92be) },
        y: Fp2 { c0: Fp(0x0d8f4e12cbf7e0410e29ab626e9a2659), c1: Fp(0x6a01a90f62eb36bb2c9947cfd8ece243) },
        td: Fp2 { c0: Fp(0x4132b11d809fa95fcaafbd785427efb3), c1: Fp(0x22d7e9d6b6623abe5f26b3209a64b69f) },
    },
    AffineNielsPoint {
        x: Fp2 { c0: Fp(0x7721739acc412918b5d8c2ad0dabc9b5), c1: Fp(0x01c5925ea3d9884427baaa02196269db) },
        y: Fp2 { c0: Fp(0x7a905304cd10e9a0b928e459b59db4eb), c1: Fp(0x112a5fd7870a503b6523d991c7cc77fb) },
        td: Fp2 { c0: Fp(0x2a4bd2e08b00647e325400cbd126e0f9), c1: Fp(0x3cdb43cb0ecc4028664d974f9f1eb2f2) },
    },
    AffineNielsPoint {
        x: Fp2 { c0: Fp(0x1fa00793a7b813363f4ae33656f6a364), c1: Fp(0x186c13ebcca48fa1f08c1059c717e9d8) },
        y: Fp2 { c0: Fp(0x4ac060fdc9a8e0bdbbebff39098eba78), c1: Fp(0x3e81834e6f6ad36741e2746e20c7010b) },
        td: Fp2 { c0: Fp(0x1fa2b594cfac8af4dde2d06c788f524f), c1: Fp(0x0c800af8b94b19fbf6efa607e617f507) },
    },
    AffineNielsPoint {
        x: Fp2 { c0: Fp(0x1401dccba90c42044bed2787539ee297), c1: Fp(0x59ec0ab41b9dbcd99364374bd8a9fd4b) },
        y: Fp2 { c0: Fp(0x2baf22f558eb5933ccf9faaf1ff3122e), c1: Fp(0x1b88df23897083638520f46aff1534c9) },
        td: Fp2 { c0: Fp(0x7067000fdd646c4a82730e7912fd1f5e), c1: Fp(0x346db57a83e1a3247429ca80669c334a) },
    },
    AffineNielsPoint {
        x: Fp2 { c0: Fp(0x1810be442c751995255461654024fdae), c1: Fp(0x5430a1b56cc2a4295784e2bb836fa835) },
        y: Fp2 { c0: Fp(0x3f4c6e57569ad044415c7a5d544255b5), c1: Fp(0x56f9ba7a5af49214db81d67518bfa3fb) },
        td: Fp2 { c0: Fp(0x2a314fc5b22006e7e9e53442debbdc6e), c1: Fp(0x25e903433954517a92339edf7afc1d3d) },
    },
    AffineNielsPoint {
        x: Fp2 { c0: Fp(0x54db8d0ca1177584f427c37b3b9bd8aa), c1: Fp(0x4bf1b46f3a6b3bd6d15ba1cd58136070) },
        y: Fp2 { c0: Fp(0x4ed8bb55ade87676b25d516c4cb8b890), c1: Fp(0x76ecaf8a1129c644628c948488facdea) },
        td: Fp2 { c0: Fp(0x4e4707eb2b919c42fe5eb077b412c80f), c1: Fp(0x66e8e882c3249bb02ca50410c04c41d2) },
    },
    AffineNielsPoint {
        x: Fp2 { c0: Fp(0x65973ff5f9f172b7963121a9997811e8), c1: Fp(0x1c5aa1b3b5db20e994de30069f70f823) },
        y: Fp2 { c0: Fp(0x3e8ba8778e08e111c0415815b0dd2ff5), c1: Fp(0x17f5c29fb204d18d2b7c9dff71fa4b1f) },
        td: Fp2 { c0: Fp(0x35896420783c6039a55d961669b1f593), c1: Fp(0x03b664e5d02c28b396e5b230734d4043) },
    },
    AffineNielsPoint {
        x: Fp2 { c0: Fp(0x4d5a846e64c45f846cd135d6fd09be1a), c1: Fp(0x34350cfc6ac54e34342039a208f8ad1c) },
        y: Fp2 { c0: Fp(0x51cb8709207a8ebc3c9909c608cb048c), c1: Fp(0x5180c6a898689e551391ec287337873b) },
        td: Fp2 { c0: Fp(0x402bc39531083e5ac1c68ac8e0597d4f), c1: Fp(0x6f3b67560a344b0afbf7a9b78bfc86dd) },
    },
    AffineNielsPoint {
        x: Fp2 { c0: Fp(0x133996c71e835b924a5cd5095731baeb), c1: Fp(0x7a06a72bdcd90b8558f21e9f0edc6c35) },
        y: Fp2 { c0: Fp(0x38fc5ebc94ea2858a21c97b12c0aa801), c1: Fp(0x0f7be5b7752ed8b5fd96d59c69217ec0) },
        td: Fp2 { c0: Fp(0x5a35077a009ce2fa50e64fe4b64a264c), c1: Fp(0x2c6d823436e87b98dc5ae0106d95eea2) },
    },
    AffineNielsPoint {
        x: Fp2 { c0: Fp(0x1b1e094e86de5babf3a4d47be6145c98), c1: Fp(0x25af061b1d91a526b497709967f342ce) },
        y: Fp2 { c0: Fp(0x7e73d6336507b43a05266d13a1d336ed), c1: Fp(0x44e1d1699d55d4c923b36c1f669cd59f) },
        td: Fp2 { c0: Fp(0x3745ae62e1a004d412b9cd404db5f576), c1: Fp(0x34e3bdbcb5149da2df971170e907eda2) },
    },
    AffineNielsPoint {
        x: Fp2 { c0: Fp(0x791a2da92a39d02bcaa6dc980bde2506), c1: Fp(0x2102d1284ef0a735fa6b7c4b09dfdc53) },
        y: Fp2 { c0: Fp(0x01742745aec77932c6799ce98aed1124), c1: Fp(0x35c40390115e2a3a31f98095d570be76) },
        td: Fp2 { c0: Fp(0x6028aa3e3fa87ba9de5dc4a84276dcf9), c1: Fp(0x5c0c9d1a7fc43a090779fb1b889bfa1c) },
    },
    AffineNielsPoint {
        x: Fp2 { c0: Fp(0x3ebf6d7fd511e3efef17995c50735eb3), c1: Fp(0x3b95d8a9058ee2c4da9c11564a4d8fc7) },
        y: Fp2 { c0: Fp(0x3b6981012498832f59a1d24ec0c5e375), c1: Fp(0x486a565a61996344cf14990fbf39989e) },
        td: Fp2 { c0: Fp(0x6de9d057d5863a2c69def1ecf958acc0), c1: Fp(0x5331439ddc00c24d1ba448f725b4fd9d) },
    },
    AffineNielsPoint {
        x: Fp2 { c0: Fp(0x3a781e7b61399825671acd9338f93e07), c1: Fp(0x5a7b49ec27091a1bba080a73e8073156) },
        y: Fp2 { c0: Fp(0x312a4aa5aff27ef174f238f09aa83d65), c1: Fp(0x6e9570e292b138044621e72ae5fdc476) },
        td: Fp2 { c0: Fp(0x6eef26cfff720db30a426fbb9fd319d9), c1: Fp(0x512d6dd23671306ce0d1dc6a04ed1216) },
    },
    AffineNielsPoint {
        x: Fp2 { c0: Fp(0x12515bb233ba4e501acd86a6b83a6b17), c1: Fp(0x06cc4c3048fc66ce32c791a650d81650) },
        y: Fp2 { c0: Fp(0x2d4addb70f3b742172445fd1dba002b9), c1: Fp(0x1af9a4f188a9854887ca060e421af578) },
        td: Fp2 { c0: Fp(0x1f963c94f03a97dd8d752e86a56ec066), c1: Fp(0x7706b4dcac7fa303c6915f7700085199) },
    },
    AffineNielsPoint {
        x: Fp2 { c0: Fp(0x6790a606c256a449dfbbb1bf77ef41d7), c1: Fp(0x7cc34fbf5e0a3755da3ddc20e4614604) },
        y: Fp2 { c0: Fp(0x4da9b31aa8ff3376d3b629760c0b5c24), c1: Fp(0x11c29ba5b090dda395d8bfabcad426ab) },
        td: Fp2 { c0: Fp(0x2771e553484eb0dc4828e38809798168), c1: Fp(0x4d6aaae7457d67ebdbb43657693a2d58) },
    },
    AffineNielsPoint {
        x: Fp2 { c0: Fp(0x3a47affa2712397cd1255e286a46d350), c1: Fp(0x5fb507936444f2a86368087b8aa3a9c5) },
        y: Fp2 { c0: Fp(0x08b8df48a3f78367dbf85427454dd300), c1: Fp(0x01e3a69814557168db60a19ac11fd8b3) },
        td: Fp2 { c0: Fp(0x0f5189822d3f4ffdc9bd462539e72658), c1: Fp(0x090b23b528e83579be5f745cd4088b8b) },
    },
    AffineNielsPoint {
        x: Fp2 { c0: Fp(0x4f176d9c1ca98fa76ab48d40208df753), c1: Fp(0x60b3c25b595216895d3ffdcb3d230cb9) },
        y: Fp2 { c0: Fp(0x78f1983f751f7cf4b218541886ce3169), c1: Fp(0x2219bc26bdf5cc932959f75fcd883d0b) },
        td: Fp2 { c0: Fp(0x0648c7845608649adcad7202b0ef8a13), c1: Fp(0x61f53dfca49ab64eb608d3baa8eed538) },
    },
    AffineNielsPoint {
        x: Fp2 { c0: Fp(0x4e376dbb82f84782ff99d9e0e7081a25), c1: Fp(0x2d57d3f52a18902e7d862cdcb2920962) },
        y: Fp2 { c0: Fp(0x03b06e651a2755a51c7024b5958ade05), c1: Fp(0x4cdb49d04480af478e39b42c17594da6) },
        td: Fp2 { c0: Fp(0x148b8debf9ce8481fbfeec0cde6b9898), c1: Fp(0x4c51648f51d92c70b577c5eece1b8caf) },
    },
    AffineNielsPoint {
        x: Fp2 { c0: Fp(0x1b3750e9c9f9f671b3a7a559a0dab277), c1: Fp(0x7854f53ea191c7a9b8d3b17130d6b788) },
        y: Fp2 { c0: Fp(0x5312dea1bc4ee61f90838f31a1c5f65f), c1: Fp(0x222d8583cee73d271c65b1b74ee565f3) },
        td: Fp2 { c0: Fp(0x2746cef3bca6a819645f7f3fdd935e02), c1: Fp(0x22e886c0a884473c9415a10cc11f0609) },
    },
    AffineNielsPoint {
        x: Fp2 { c0: Fp(0x569b4ca762d0ab42751632166cad793a), c1: Fp(0x32beffa04d6ad5c9942b447e835a4561) },
        y: Fp2 { c0: Fp(0x10b0358bdf48adf136e20451f8558d07), c1: Fp(0x6b07fd7e7c835cd1374be160785aa88e) },
        td: Fp2 { c0: Fp(0x2fbe28b53cc91869bf995f3a8c9ca737), c1: Fp(0x42b49cd22f7647b59caed233fc08accd) },
    },
    AffineNielsPoint {
        x: Fp2 { c0: Fp(0x19154cccfd7365cfb8136e9d01972b5c), c1: Fp(0x185228de6c4852c9ab28a1e173bb1cf1) },
        y: Fp2 { c0: Fp(0x747064bd51581e3d0cf68ab6cee95564), c1: Fp(0x18e2c13cf980c0dd87444fd3eef5152c) },
        td: Fp2 { c0: Fp(0x2c72e169193bfb09bdd0846346b29f62), c1: Fp(0x021977ae18f48764182c80895b635672) },
    },
    AffineNielsPoint {
        x: Fp2 { c0: Fp(0x34a5f3fd474836da00902b5ebddd8568), c1: Fp(0x15babd8ef323aa88f8e37ffc68537ca9) },
        y: Fp2 { c0: Fp(0x3de2064c9a02664f6add8b4f3c87e1ef), c1: Fp(0x53c88bbae8fbb1cbd2a7b186b9796af5) },
        td: Fp2 { c0: Fp(0x7cace674a2e7f95f8636024b060b869a), c1: Fp(0x7d0c0391e07ff2b038ebd30c254b7fb2) },
    },
    AffineNielsPoint {
        x: Fp2 { c0: Fp(0x0f1be91729553782a7b935e5425a30d0), c1: Fp(0x2875c3b90cad79e6179fca5a5de35b7a) },
        y: Fp2 { c0: Fp(0x092f64e1242ba4381c3f3128d2c3d0c8), c1: Fp(0x61f25872d95bb9007d9395ba2f814032) },
        td: Fp2 { c0: Fp(0x2af6ece3fa86097d8ed3a079cf055ea5), c1: Fp(0x40a8353cb1d0f31115e9a0f991c53732) },
    },
    AffineNielsPoint {
        x: Fp2 { c0: Fp(0x673eebdf38347307a59b974a32be3967), c1: Fp(0x6deb5bc79d8236b8d0a3faeb59a46f7a) },
        y: Fp2 { c0: Fp(0x5619e17111e59e92b0ca4094936a8d24), c1: Fp(0x39f088c0a0620d0a719d6126e718b5b6) },
        td: Fp2 { c0: Fp(0x49190106e9ec32f56dc5655c4a1b6d3c), c1: Fp(0x07d3b4d0e2c37ce6b1fc1adf8cef5541) },
    },
    AffineNielsPoint {
        x: Fp2 { c0: Fp(0x68766a5148fb9656bde3cb16960d3b78), c1: Fp(0x2d973625cffe9ce7096c8521c45e34bc) },
        y: Fp2 { c0: Fp(0x05c3f375005675bb69dfb883f2179438), c1: Fp(0x0576d162e8aa339c2a6ef9aada7a68a1) },
        td: Fp2 { c0: Fp(0x5a545d932bd37e7dbe2890175820c0a7), c1: Fp(0x23e3262ecf2a32b3acfef43ceff1b4fe) },
    },
    AffineNielsPoint {
        x: Fp2 { c0: Fp(0x1fa301eb2146583ffb621208da19b9e9), c1: Fp(0x382d94e7b1d0cbca5d391f8576b6012e) },
        y: Fp2 { c0: Fp(0x49bbfda0c743a652fbb0eaed1f5a73c7), c1: Fp(0x14e7bc74289611663d921726d672610f) },
        td: Fp2 { c0: Fp(0x54fe8770177d6a909759e644c59188d2), c1: Fp(0x6f563baa010d08dd227d61d3d27eb191) },
    },
    AffineNielsPoint {
        x: Fp2 { c0: Fp(0x3ddc48caaa0f542846271acfa4201af3), c1: Fp(0x60627925be2e682a7ccc7b8cbabca4f2) },
        y: Fp2 { c0: Fp(0x30e7662946c2c050e29da6e2ade99db1), c1: Fp(0x24db3cf7197b6867176082d57d8d56ef) },
        td: Fp2 { c0: Fp(0x68fc754e6f1e5150b1fd198d9941162f), c1: Fp(0x16d132c99e242e0a1fe252530e374804) },
    },
    AffineNielsPoint {
        x: Fp2 { c0: Fp(0x3f2f7cccfa756b5640ffdf6e9d9a5345), c1: Fp(0x15694847b4e216d6142de97cbd0b3599) },
        y: Fp2 { c0: Fp(0x5a73db136748f70be754507409af8d24), c1: Fp(0x3b718b2caa1de0b843af3929606dfc74) },
        td: Fp2 { c0: Fp(0x6b29c0916b45bb72e24474016f383f74), c1: Fp(0x0781571a487a9ab728a4d61f484c341e) },
    },
    AffineNielsPoint {
        x: Fp2 { c0: Fp(0x1f7c57c6bd1de8c0122a38740346b5e8), c1: Fp(0x55a4510f54bcb72e89e5c0132fb1823d) },
        y: Fp2 { c0: Fp(0x2c31a6391d19d0d6d7f26797660ba590), c1: Fp(0x2f2e1e28ba4034e9d32329b8af8b75c8) },
        td: Fp2 { c0: Fp(0x66c9fdc0f973e56952cd1ac07a8150f9), c1: Fp(0x3ebdccf8e720d25fc81726ba63929069) },
    },
    AffineNielsPoint {
        x: Fp2 { c0: Fp(0x2a829f6f7c937eadbf3b3dca0c806c6a), c1: Fp(0x5b7ff7ba89ec52108bd4949d0d48a041) },
        y: Fp2 { c0: Fp(0x38f5fcf75485f27dfd2e935378e7cd76), c1: Fp(0x02304172c1b7dfe3121cd1560fc11995) },
        td: Fp2 { c0: Fp(0x530f81e222f78afbf953f557ce0a58a8), c1: Fp(0x79ee89c11c24e09bc5ef8b2db858fced) },
    },
    AffineNielsPoint {
        x: Fp2 { c0: Fp(0x43770761ca5dfc158187eec173c04504), c1: Fp(0x352bdc8d7cbdcfa76949e0cdbc328485) },
        y: Fp2 { c0: Fp(0x3726ff6e1ddb396a177475122bb9ff42), c1: Fp(0x500a1e3ee383310ffab638c29c487747) },
        td: Fp2 { c0: Fp(0x7473a4193f290b3d92d3eab747e69443), c1: Fp(0x002aa01470df6d516e5008e26299d08d) },
    },
    AffineNielsPoint {
        x: Fp2 { c0: Fp(0x4e0d7aecf126bc79d52c201e85c9d33a), c1: Fp(0x567dfd3093a995be8d74f91d22f36ba7) },
        y: Fp2 { c0: Fp(0x726c848b3b00c762c7663269217f70c7), c1: Fp(0x1e4556c08f3f32c97294691a05474d4b) },
        td: Fp2 { c0: Fp(0x10d0e109a52b1f66511244182f7d3b84), c1: Fp(0x7eac46edab34791eae72282d932ebedf) },
    },
    AffineNielsPoint {
        x: Fp2 { c0: Fp(0x1b167b2ee617c72cd9506c339e517943), c1: Fp(0x37105a9a2f2840f6b34ea9bdc2179fcf) },
        y: Fp2 { c0: Fp(0x3729fe32b0a76b7df16912b137f4733a), c1: Fp(0x0747b18f7cb87289d3d5ddb1b405a561) },
        td: Fp2 { c0: Fp(0x0f292feb78ca3e28f333cf76322141a9), c1: Fp(0x146b0acf8f9520314a7d6a0af136264c) },
    },
    AffineNielsPoint {
        x: Fp2 { c0: Fp(0x6d629688ca0f944e140ac2b63c0db86e), c1: Fp(0x2d32c6bd0f30d2fda0336f04b60ae1b6) },
        y: Fp2 { c0: Fp(0x3f52c970c8e681d421000abaa399faad), c1: Fp(0x0f09433106cfd6feeb7504ec97ee7c52) },
        td: Fp2 { c0: Fp(0x4dcc86f30e5d89f5be0757ca2f5d38f6), c1: Fp(0x65ef9544ea6612d7b28f564db4535f93) },
    },
    AffineNielsPoint {
        x: Fp2 { c0: Fp(0x34dc2fa4eade57e34cc5ad999ce11834), c1: Fp(0x023df43b308b75cd33caa69105d68e62) },
        y: Fp2 { c0: Fp(0x2e0e4d0b744777e412bd6be2ebaf9287), c1: Fp(0x06c39f4c9a9c86fbf36b13fda5ed53c5) },
        td: Fp2 { c0: Fp(0x76e950fe746ff365c66568ee877880b6), c1: Fp(0x3819210214f0dd452a8e1f2b22ac601a) },
    },
    AffineNielsPoint {
        x: Fp2 { c0: Fp(0x6ab63e63ef7235ba43cd26157b065cce), c1: Fp(0x0b17055dc2252374c2ed8e9ec1aafb46) },
        y: Fp2 { c0: Fp(0x2408b33354a6e3305acde3749755db7b), c1: Fp(0x16ad07d3ca26b32128c24ba8441f65dd) },
        td: Fp2 { c0: Fp(0x62d2098219ebbdc34f43c54474469e22), c1: Fp(0x2de7301e8f127073af1a0ad9c5d89845) },
    },
    AffineNielsPoint {
        x: Fp2 { c0: Fp(0x42e623a7840bebd01932d765b695fe83), c1: Fp(0x708042511718d2a4eaff010bf4e1e937) },
        y: Fp2 { c0: Fp(0x0c8c24fe41446be8e2a98f3107748e33), c1: Fp(0x73aa98507a1c289e4e2aff4629dc8ec3) },
        td: Fp2 { c0: Fp(0x6f82360d08d2a4da8c021ab186bf8bb1), c1: Fp(0x07eecac36bee6dbb956040688921e348) },
    },
    AffineNielsPoint {
        x: Fp2 { c0: Fp(0x716e9a15ce0a5a9d40478d5ec2936c59), c1: Fp(0x193468beeaa8dc014c16ad94d564c051) },
        y: Fp2 { c0: Fp(0x054075cda7f0c3a866898151aed96cfc), c1: Fp(0x7785c2acd0e72460cc121382dd217453) },
        td: Fp2 { c0: Fp(0x5bee9688064e53fbe1536274b841de77), c1: Fp(0x5adf500662bcb88e5632cf2017b71699) },
    },
    AffineNielsPoint {
        x: Fp2 { c0: Fp(0x6fdea24cc369054ec7a411d23d909049), c1: Fp(0x4e0a2bdc19f71a24b75370dc9b3587dc) },
        y: Fp2 { c0: Fp(0x649918a16be76e3f692f2cea0c99b295), c1: Fp(0x053b1e708323afb8b241771ab427869d) },
        td: Fp2 { c0: Fp(0x5bb4950de6751d646d0f880090a0f6a2), c1: Fp(0x353f8dc13e4a8d95d3491410505f7a83) },
    },
    AffineNielsPoint {
        x: Fp2 { c0: Fp(0x518cc2787af8ef8788d8899f4536ce32), c1: Fp(0x304303293ee2fa49722f80ba6eeefa5b) },
        y: Fp2 { c0: Fp(0x4c1c3824c7c9cda7f889b861b9d24243), c1: Fp(0x40bb08922b9cfefdd6a129aee7d4fc32) },
        td: Fp2 { c0: Fp(0x45d1b48780f3e8d8ea009b5c4557547d), c1: Fp(0x4dc6552838727b5e24ae8ded918c3f55) },
    },
    AffineNielsPoint {
        x: Fp2 { c0: Fp(0x431bf73c79c7b66bcf25b1b998c82321), c1: Fp(0x5fa9029ef1ca7566d9bcecf83d9e7530) },
        y: Fp2 { c0: Fp(0x1a80ff84e9bc095d7b8d30f4c7082a2f), c1: Fp(0x12481acfd96e097f3ad135a7b40b55a3) },
        td: Fp2 { c0: Fp(0x28058dd9efd2de7883d37a6da831bd6d), c1: Fp(0x2a7dc1bc5a23d3fda2c47f5bd12e4915) },
    },
    AffineNielsPoint {
        x: Fp2 { c0: Fp(0x70f7dfec30f432ef7489df272d3b4d0c), c1: Fp(0x4a1de5bbd57959715c5d14dfef281667) },
        y: Fp2 { c0: Fp(0x1f510ad3ab5ae356d4a0c68a267a02ff), c1: Fp(0x1b01c98e6c5595520d5cc08f919a27e7) },
        td: Fp2 { c0: Fp(0x32cbe08a36efc7248f61878dcc6fef7a), c1: Fp(0x25d513c93a511c03afd858d73f8e89ae) },
    },
    AffineNielsPoint {
        x: Fp2 { c0: Fp(0x12fca40c8aa2a6c7dd1a538719e3c536), c1: Fp(0x41f409a0f5d9ce9bce4c94c30c89ce45) },
        y: Fp2 { c0: Fp(0x1bbcb95c59da4cf82bbd684cb536b27d), c1: Fp(0x23b838e4c9225719ba6cbc6afedd02b1) },
        td: Fp2 { c0: Fp(0x01091eb92b49e8ab0c4f39e2f4bca6e2), c1: Fp(0x71aaaadfdba828a6120681f69c6e71e3) },
    },
    AffineNielsPoint {
        x: Fp2 { c0: Fp(0x4542f350b7cb57b0af61ad342b6a880d), c1: Fp(0x579bcae1de1bfd2381a34eeabf8c3536) },
        y: Fp2 { c0: Fp(0x3c28d1660cbcc08444a4460161502368), c1: Fp(0x6202b7d01936cf91a17bd273a46dbcab) },
        td: Fp2 { c0: Fp(0x1d088f1d48c67d8c9d2147699b4638d9), c1: Fp(0x0200f73707d6a6bf43dee0e5897248e4) },
    },
    AffineNielsPoint {
        x: Fp2 { c0: Fp(0x3391bcddb4d1f51acd14fba48cb28c06), c1: Fp(0x3304aa4434229b55fc928e5116959a69) },
        y: Fp2 { c0: Fp(0x7eb0de36ec636b41a17e830a8d6571c5), c1: Fp(0x377f24f6f09df45885a63cbe1add5e88) },
        td: Fp2 { c0: Fp(0x3ec87f38b4234d6d4cd9769e60bbd204), c1: Fp(0x6689036818834171dfdadfbbf6976006) },
    },
    AffineNielsPoint {
        x: Fp2 { c0: Fp(0x605f724488cf610a019de1648628c00a), c1: Fp(0x6908bcb0177cda399eac9cffeb006fe3) },
        y: Fp2 { c0: Fp(0x03b47910de3818868c1ab6ec103c53cf), c1: Fp(0x76f183dc27abbc2bb5d5025179230ac0) },
        td: Fp2 { c0: Fp(0x4c8dc68d3a6437da55ee2e2c8abeffa7), c1: Fp(0x4e5874dc7c41e6e4aff8bbc920f88a39) },
    },
    AffineNielsPoint {
        x: Fp2 { c0: Fp(0x317d33da1b6001e4fc76ce9c88df180a), c1: Fp(0x21df9e37d81910227acb5192295f0d3f) },
        y: Fp2 { c0: Fp(0x2141c1b1510f8796db51c87b2757a1f0), c1: Fp(0x4e06c37c2c807a813dabe26a35d7b5fc) },
        td: Fp2 { c0: Fp(0x0cfefe7f0b88378fac8d18731f49fbe3), c1: Fp(0x0fbd8e84cc520d6d69b590475de1b272) },
    },
    AffineNielsPoint {
        x: Fp2 { c0: Fp(0x644d6632da83aaf06eb4fc816498deb5), c1: Fp(0x7b7afd2e5aac76d4f34f3d0393a0ff46) },
        y: Fp2 { c0: Fp(0x6d8de81b082ea267b6884e4a95fee708), c1: Fp(0x5a5b7cecb900b880edcc77f827c24d04) },
        td: Fp2 { c0: Fp(0x5a22eb32eb08f00bad1ff4819e2f67cc), c1: Fp(0x48073cb704aa2509e363a1c9edc8d288) },
    },
    AffineNielsPoint {
        x: Fp2 { c0: Fp(0x7cc2f644e1213dfbf8120bf2f4abd4ec), c1: Fp(0x711857a9525c25e2c6fcda8a76daa2e7) },
        y: Fp2 { c0: Fp(0x4720461937641adee483e9ad0db9aefc), c1: Fp(0x096fef38975a3dabb30dce2480d178f6) },
        td: Fp2 { c0: Fp(0x7608922007941742fade6d9f8603067b), c1: Fp(0x01ca347d6b72bc87b686338da7ba67c9) },
    },
    AffineNielsPoint {
        x: Fp2 { c0: Fp(0x3abe1d4abebedb36a8af606954bfdfb0), c1: Fp(0x4dfcaf688a627a0c00c773e286877150) },
        y: Fp2 { c0: Fp(0x78b2e19a1cbede66ee3de67b57b002e5), c1: Fp(0x2b4b2d0241e1c101621844b5b3e2ed24) },
        td: Fp2 { c0: Fp(0x699f55df4fceed3410fdad6ef6f83fc2), c1: Fp(0x004b84a82dcb21122f700ccc5cad0249) },
    },
    AffineNielsPoint {
        x: Fp2 { c0: Fp(0x5233c0ba46cafe9673ec750c14d98e74), c1: Fp(0x54ff11f0fce5181b63e2f8b1a92ed957) },
        y: Fp2 { c0: Fp(0x187adae8da01204fd9659c48ff342c89), c1: Fp(0x7ce76de452fe4f46f66059d57fa45382) },
        td: Fp2 { c0: Fp(0x57b0934993957f0772603c1cae8e83f2), c1: Fp(0x2492fd9c7c02ec826b764bd2c37dc083) },
    },
    AffineNielsPoint {
        x: Fp2 { c0: Fp(0x2b692940c7bd630043c3b8e80bacf94f), c1: Fp(0x0d4747df20cd9dfd32108c765380b597) },
        y: Fp2 { c0: Fp(0x28ca837d95ac2c880ad6aee0e905038b), c1: Fp(0x5d844aeea03ffe6da6611c695054be00) },
        td: Fp2 { c0: Fp(0x1abb6296666040debe48ec63831a265b), c1: Fp(0x48cdacfa1a40511a7cb0ffc8e9ed872e) },
    },
    AffineNielsPoint {
        x: Fp2 { c0: Fp(0x641d6fdafe0f434b5fc4dd30aa9c0ff9), c1: Fp(0x4df4072a362328e31eb1f5a27d0c68ec) },
        y: Fp2 { c0: Fp(0x61e13574f9a6f26269ed8afd4b00fa76), c1: Fp(0x439f2a11f22a0d7d42ecec8382ccf9cc) },
        td: Fp2 { c0: Fp(0x728217b7a808029e04c0db9fd1454b6f), c1: Fp(0x0b0dcfac74aedb4b9409d767f00251a4) },
    },
    AffineNielsPoint {
        x: Fp2 { c0: Fp(0x3f8133eea1f99a088c3d1ab3b33f99cd), c1: Fp(0x1aef5497d705d704a0e8f58a46196c92) },
        y: Fp2 { c0: Fp(0x59bf5a1df6c5cca6e4d91469e6c805b3), c1: Fp(0x2837d1496233eef76ff4a881f8819b1c) },
        td: Fp2 { c0: Fp(0x3c71aa06a0541737b98def13fb065fee), c1: Fp(0x704ef6a9c4b944190c0ce66d1f2675a7) },
    },
    AffineNielsPoint {
        x: Fp2 { c0: Fp(0x4912f73ef58455b2e35523c69ed12e94), c1: Fp(0x01e5ba259d2d023c9984222deaf820c6) },
        y: Fp2 { c0: Fp(0x3a225ec6fa21c315cbbf28656076c6a6), c1: Fp(0x3b666a38f6d8621255c969452ad1a3a9) },
        td: Fp2 { c0: Fp(0x429f34df90bbb11a130625910a92c64d), c1: Fp(0x35073c79bc75e5d6b49e21079334770b) },
    },
    AffineNielsPoint {
        x: Fp2 { c0: Fp(0x6d20150063ab97e419498ca78f504c1a), c1: Fp(0x3bd2802ad387a36a37bbdae4d5a638a5) },
        y: Fp2 { c0: Fp(0x5de3794aedb29d78c9b2e34db67b859c), c1: Fp(0x61537555c2721f8df6b7b9d8455dab76) },
        td: Fp2 { c0: Fp(0x0c23f82cc4710aa96d521045d171fb85), c1: Fp(0x5c8def3b997514c15fe947fd71bc107c) },
    },
    AffineNielsPoint {
        x: Fp2 { c0: Fp(0x3cab15285c31a10d1f7f554fddd462a3), c1: Fp(0x366a61c7340beb25e75f8da6933942f6) },
        y: Fp2 { c0: Fp(0x7be8b169f1a728ff61b20b500c6a247f), c1: Fp(0x6a34578a02ed77594d7674420d799354) },
        td: Fp2 { c0: Fp(0x115373c3ba7c542f16046c0e4f0df510), c1: Fp(0x0812e8e1003e11dcecad2e65355185a5) },
    },
    AffineNielsPoint {
        x: Fp2 { c0: Fp(0x4cbb2c7a4c2c9a4bf4981aab100490c6), c1: Fp(0x348cc4629eab3153e911a98b970500cf) },
        y: Fp2 { c0: Fp(0x5a7f26a9019013e7d7c80ddca30c9005), c1: Fp(0x08b2704d1bec2c10c6817ab873174f3e) },
        td: Fp2 { c0: Fp(0x119bf2b9dba83cf8778f52917e38518b), c1: Fp(0x74fcd2d4b75d61c0cc08a80fb91c6c2e) },
    },
    AffineNielsPoint {
        x: Fp2 { c0: Fp(0x445a85b00bfa08ac7ee2809b50b367b4), c1: Fp(0x6c3d9b03f453473b46d2eef0407098e2) },
        y: Fp2 { c0: Fp(0x536a0720450c34419c833306ddf2981b), c1: Fp(0x15998454b52c9105d258a4d7344dfded) },
        td: Fp2 { c0: Fp(0x40e6c1a6c63cf2b907bfb3383f796e0a), c1: Fp(0x7c24b69deb63bff31d4831ee35c6a5bb) },
    },
    AffineNielsPoint {
        x: Fp2 { c0: Fp(0x73aafe1472b470ab99116228c8e9d7b5), c1: Fp(0x6ac442aaaed3654f0867b75f876c3ab5) },
        y: Fp2 { c0: Fp(0x41b0bf88476b9694e68fd14cf49b3e89), c1: Fp(0x6b2b2b5b5d76e6e1187912011c6d5ff9) },
        td: Fp2 { c0: Fp(0x356a91dfd444592f977c2804c6da598b), c1: Fp(0x6514bc7b3ddcc95a5dc282df9784d2ff) },
    },
    AffineNielsPoint {
        x: Fp2 { c0: Fp(0x4ad330606180e27310870eee399094aa), c1: Fp(0x14afda179c2419a11c8d000c565d3ff5) },
        y: Fp2 { c0: Fp(0x2a6f517960333f9c041f6b0537e2c25f), c1: Fp(0x44b1c44ad2e7ef2071f7bdf97edcd773) },
        td: Fp2 { c0: Fp(0x248b052190b7939bda76e6913a9f6e3d), c1: Fp(0x7e6b8098fc705342824969e8decc29c6) },
    },
    AffineNielsPoint {
        x: Fp2 { c0: Fp(0x2eb3490404cce55bfaa343ec2cee27af), c1: Fp(0x45d8b3284056bd0a681c4efb6cd34c1b) },
        y: Fp2 { c0: Fp(0x332f97f61892e876b4b2c4236196d62a), c1: Fp(0x524ec1a472e074e3bb7db2286f1fa6ae) },
        td: Fp2 { c0: Fp(0x305c4f3f337f10ceb027d63b54a2508e), c1: Fp(0x4a5cc2a3a7d4a7e70ab2efeddba5ef76) },
    },
    AffineNielsPoint {
        x: Fp2 { c0: Fp(0x4200653b00c363f0e7441e80856b9ccb), c1: Fp(0x33c862b2587cadf2af9784be36a049f6) },
        y: Fp2 { c0: Fp(0x0de92a5d49c0bb911f4f4b475dfe60a5), c1: Fp(0x7f3cd22d987a8744fdc7a67a9184568d) },
        td: Fp2 { c0: Fp(0x62082b0229fe3118f20a4227503b108a), c1: Fp(0x7e7c87af09d8b37a87ddb2dd39b81493) },
    },
    AffineNielsPoint {
        x: Fp2 { c0: Fp(0x2cfa8a35fdc393cfc7ec3e44cee44744), c1: Fp(0x31d8016ef604aea1e3793905adc04522) },
        y: Fp2 { c0: Fp(0x3ab64b2e6c4120a146768329f966ab49), c1: Fp(0x62528e817adbd32f98a33cc5c0d5ed2e) },
        td: Fp2 { c0: Fp(0x293d1b26c522c3402ff5f607705d14e4), c1: Fp(0x60594f5ede29647d24e31acc9b613050) },
    },
    AffineNielsPoint {
        x: Fp2 { c0: Fp(0x664575e66dc983abf0c9a4e91545c33d), c1: Fp(0x135735ccf490d0f9c6f3257c5146f533) },
        y: Fp2 { c0: Fp(0x77c7ac00ccde0915a41436836d5f9c43), c1: Fp(0x3ea07f10af5bb738dd13d8b23fc177db) },
        td: Fp2 { c0: Fp(0x4e1f67af7e34308fab1a6ac812da3760), c1: Fp(0x1da718e42c7abd1607a56a3dde1b8cf7) },
    },
    AffineNielsPoint {
        x: Fp2 { c0: Fp(0x080119afdb621ca710c6496f8de2f7af), c1: Fp(0x5a70507f440c1260037d61a90e0f0039) },
        y: Fp2 { c0: Fp(0x7682667168ddca7b2504422f936ba946), c1: Fp(0x0bc619b202e63dca7fa67d1107bbab2e) },
        td: Fp2 { c0: Fp(0x403b5add648a8c04f5beeeeace52c9f5), c1: Fp(0x16ec3d144d971b69ffb1b7750bdfc225) },
    },
    AffineNielsPoint {
        x: Fp2 { c0: Fp(0x2a30cbe462cbdd4f78d18ab42fbf3f51), c1: Fp(0x24c2df5817228cd74cce83d1a3b0d14f) },
        y: Fp2 { c0: Fp(0x111122bae6dec7a450bee8738883c108), c1: Fp(0x6d4180381dac88f5326d2d52fc706f2c) },
        td: Fp2 { c0: Fp(0x6d4106666c16744eb6da33bd050ec325), c1: Fp(0x0f8c6e917dfd4d25dcad5f8985d21e36) },
    },
    AffineNielsPoint {
        x: Fp2 { c0: Fp(0x160bb3bde90423d4136afa054dbe78a3), c1: Fp(0x476802aef8b6685e8aeddd800ddfc118) },
        y: Fp2 { c0: Fp(0x7222e1a8519e3d8ee569a3d0f34d1ba9), c1: Fp(0x1b78dea97055b6b54a663c76993a9bef) },
        td: Fp2 { c0: Fp(0x4c0fba50f40115a9053635920184459f), c1: Fp(0x611eeb1af76200633a078cec173a11c6) },
    },
    AffineNielsPoint {
        x: Fp2 { c0: Fp(0x53287ccc53841af105e54663687af793), c1: Fp(0x0f68f7128c5192e4a5aee1c144c3f03d) },
        y: Fp2 { c0: Fp(0x4a7e71158f3b874c103db39d9c01ed30), c1: Fp(0x58b14b4d9bbd467583265a641e89e528) },
        td: Fp2 { c0: Fp(0x75fb078f1a5f0f19bc7f12a6c5366656), c1: Fp(0x37b2b41d8647f0f244391262dc2e7fb7) },
    },
    AffineNielsPoint {
        x: Fp2 { c0: Fp(0x320e680f28e61a098afdddd06373c27e), c1: Fp(0x6c3288cf8d9f06660354fc84e36e8043) },
        y: Fp2 { c0: Fp(0x5e690e6a59664188dd4566db90f006c2), c1: Fp(0x4f7149b0eb82add6ecafab54fa8730fe) },
        td: Fp2 { c0: Fp(0x5df5a87d97f66da9244c8fe7db1f8178), c1: Fp(0x174092610a86d280b6454cfe60829c9a) },
    },
    AffineNielsPoint {
        x: Fp2 { c0: Fp(0x4335f7ffeaac88bd1d4bde5a38c9e862), c1: Fp(0x1ff9ad04d9f6605c7e18922a06e2d341) },
        y: Fp2 { c0: Fp(0x27958486db6181e2509c94bde51fcef6), c1: Fp(0x7d503ec3e4d80ff200d4712aa4a71e88) },
        td: Fp2 { c0: Fp(0x1b600228939dfa2717fe9f4360bc3f68), c1: Fp(0x1db69efd62ebf0aeb2ac7283b5db504c) },
    },
    AffineNielsPoint {
        x: Fp2 { c0: Fp(0x1e08a78eee35fd62f47c12364f3fcaee), c1: Fp(0x732986fa95a265b8a1d9563308e2e542) },
        y: Fp2 { c0: Fp(0x77ee8fe7e55def565704424f0f2f82e8), c1: Fp(0x54418126f7b03108bb0d0f5609a81ac1) },
        td: Fp2 { c0: Fp(0x6cf57e6b1b010b89d6dc645d997d882c), c1: Fp(0x45909da7abcd771642d3de4b34c15bec) },
    },
    AffineNielsPoint {
        x: Fp2 { c0: Fp(0x577d89c3b19405207e81085788ce3b92), c1: Fp(0x6ec447631f280ed478ff8e9c10b10efa) },
        y: Fp2 { c0: Fp(0x471e590ad59a4bbc59648d8f05d4effb), c1: Fp(0x0138a64ce2bea938b747ee77fa4f0888) },
        td: Fp2 { c0: Fp(0x4b39743a62a1467680557712bae4044e), c1: Fp(0x422bec44ee5a02bbc4700b3859f5ff5d) },
    },
    AffineNielsPoint {
        x: Fp2 { c0: Fp(0x6e4818f6eba5e44698dcabfd15f95d04), c1: Fp(0x0b9362097a988721b19b637c7ef55123) },
        y: Fp2 { c0: Fp(0x34418ed2ef1930f8a23a0c91c0fa3559), c1: Fp(0x359c6ed0b09c79408a528cbc85f4e119) },
        td: Fp2 { c0: Fp(0x797c79bd4f8978089045143b9fafac44), c1: Fp(0x02f9335d20d4fa4b65db67e8c82118cb) },
    },
    AffineNielsPoint {
        x: Fp2 { c0: Fp(0x502bbc02d9a0542a1e9ccecb2455939b), c1: Fp(0x15bdc7e0c2b5b122561c187b8ec30523) },
        y: Fp2 { c0: Fp(0x4e6972b9bd897a24d80c1b1211918f84), c1: Fp(0x52e5da49664eacc93697369f8b85ce86) },
        td: Fp2 { c0: Fp(0x42911981b5b76974a40fc950fe5ccfb5), c1: Fp(0x31d356bacc63a66e0088e29a3ed24748) },
    },
    AffineNielsPoint {
        x: Fp2 { c0: Fp(0x08877539120ab2c5b75037907852c79e), c1: Fp(0x505ad2877fa409280a62e3384a5c9637) },
        y: Fp2 { c0: Fp(0x656eec6bef82c829b7d059c8322bdb85), c1: Fp(0x7aec72f1860cd9750383a2094c2c97ba) },
        td: Fp2 { c0: Fp(0x5b3f2fac679526ac38c2e9279ddee6a9), c1: Fp(0x45d3b13063633cf78cf655d825fba2ff) },
    },
    AffineNielsPoint {
        x: Fp2 { c0: Fp(0x302fc597e7921867474f54370888be6e), c1: Fp(0x6c55241ebb23d035333208ce2e677988) },
        y: Fp2 { c0: Fp(0x6686e25970bd4b73444fc8cab660ff5a), c1: Fp(0x2ba158b724ddbf4893d03d39f041a36f) },
        td: Fp2 { c0: Fp(0x36163b6855b0d4ca947c84ae5e629a9c), c1: Fp(0x5d198740bf8f96e07a1b79a9fec6d390) },
    },
    AffineNielsPoint {
        x: Fp2 { c0: Fp(0x6c417ac1a3432fc4eff0f712ca505da7), c1: Fp(0x6bddae7d12cf93927e1238418c4527ec) },
        y: Fp2 { c0: Fp(0x20d00ef4ceb93ee7f6b89fcc524f69bd), c1: Fp(0x23b2cc071e0b4b4cd3cb755b2a581c9b) },
        td: Fp2 { c0: Fp(0x2515d7b79e053280de7ba43ebd75bdb4), c1: Fp(0x2884e2dca6ab9218d650b74d23a5480f) },
    },
    AffineNielsPoint {
        x: Fp2 { c0: Fp(0x37afcd41e86c30b3b2eeda43bd156ace), c1: Fp(0x4493737d643439458f2fe22a240c89c4) },
        y: Fp2 { c0: Fp(0x1cffd138cbacc633615eb193f6ee4359), c1: Fp(0x4127fb05d1e5a8475fa0a3427abcb757) },
        td: Fp2 { c0: Fp(0x5ad720256bd265de62b2f17a0edbc099), c1: Fp(0x56c0ad1a9e27d462b053c77a490c5f6f) },
    },
    AffineNielsPoint {
        x: Fp2 { c0: Fp(0x21365060a1c7ccf182cb609ebbc49de7), c1: Fp(0x747a51922f3a1857d6d2392ed05639a6) },
        y: Fp2 { c0: Fp(0x2ce55ec1d2251526a8d5ebb55b70385d), c1: Fp(0x72776489bfb82cdb3140a86d3b1932de) },
        td: Fp2 { c0: Fp(0x65a74833b9fd4011eb175f5b23930b03), c1: Fp(0x49818c2efb70ed1ec9a1b9282c124526) },
    },
    AffineNielsPoint {
        x: Fp2 { c0: Fp(0x1d71e2e9dc0825966e95647c8439fb28), c1: Fp(0x01bc1432a352aa01431159d090d052e1) },
        y: Fp2 { c0: Fp(0x418dc69d1bd27962618f4d23b8644a82), c1: Fp(0x1f14b3c38d53a2be8d5a916205b22099) },
        td: Fp2 { c0: Fp(0x708e2f5ad78d6f96e24122c6ac168b27), c1: Fp(0x4a9ba3b346681f192841164ace8123fa) },
    },
    AffineNielsPoint {
        x: Fp2 { c0: Fp(0x62f5cb56176ff28b27a302e727b3a30a), c1: Fp(0x04b8801a4c9369174679adfd1df2a0d6) },
        y: Fp2 { c0: Fp(0x5ef5b6eca7950a3a9f3581d703bf612e), c1: Fp(0x595dcd8908718063bfda3478ae926fe2) },
        td: Fp2 { c0: Fp(0x71e082b7363997d0aba4b5ddeeaa5fd6), c1: Fp(0x0246fa543772da4bd94b3a4f173b9ef0) },
    },
    AffineNielsPoint {
        x: Fp2 { c0: Fp(0x394ef27aeedc9d9048812d927a8e5c28), c1: Fp(0x0502e43044aa6c671b00c0c1ba844deb) },
        y: Fp2 { c0: Fp(0x55d60cdd7e079e5a8b8eff3556c935eb), c1: Fp(0x5dbe5ebcd2c7b2a0bdbbd6565e657231) },
        td: Fp2 { c0: Fp(0x0a2ef3db3da390c700753408266cadc7), c1: Fp(0x4fc07ea7d6143ee9d790424388dd8c11) },
    },
    AffineNielsPoint {
        x: Fp2 { c0: Fp(0x7e4be787469132ad0c86c8d12fd8efbf), c1: Fp(0x483c34c4ee8ff32a9f04b47a2708a639) },
        y: Fp2 { c0: Fp(0x4d3bccafb8e67792f2712d3a4a603b65), c1: Fp(0x6b532953c51d13bc1e1282fee85ce21f) },
        td: Fp2 { c0: Fp(0x79efe4ebbcf5dceab2535f38845004db), c1: Fp(0x4544bab28e0b2bb1771b138a8c0d45c3) },
    },
    AffineNielsPoint {
        x: Fp2 { c0: Fp(0x17c446dc365db67b4e88931f09c07ced), c1: Fp(0x546c9ffc2466901935141245bd82d883) },
        y: Fp2 { c0: Fp(0x32771abb3b289a5760d6220c1f087f5b), c1: Fp(0x0cae81b744668ed9a6484756ff2b9db2) },
        td: Fp2 { c0: Fp(0x50b2a13f71e0e1a14df160c0484fce0c), c1: Fp(0x3e0309e2eae36282f56558990c9479cf) },
    },
    AffineNielsPoint {
        x: Fp2 { c0: Fp(0x766ab13f506464530053159773ef65bc), c1: Fp(0x7b578edd72b655945a80f997348ee809) },
        y: Fp2 { c0: Fp(0x5f8cf9700e19c3a2212b13c3ce0a7cf1), c1: Fp(0x01a6f5f68249a926de41e6f26f8d9073) },
        td: Fp2 { c0: Fp(0x223fef4b41b21d4c7b99c5351565b46f), c1: Fp(0x4b0eb44e3972dceaed918f5f1d25118f) },
    },
    AffineNielsPoint {
        x: Fp2 { c0: Fp(0x24c16a8f07061aa3965abe9440193227), c1: Fp(0x7a0b4e5b75424746cfa7ff3d64e15da0) },
        y: Fp2 { c0: Fp(0x00431723b9390b0a14cf9fa35bf45a83), c1: Fp(0x068353530358d14389db45efa31fa948) },
        td: Fp2 { c0: Fp(0x0252fe08112909a7d2ee470a8776bcae), c1: Fp(0x6bb721263917496c015ea8e7e6784f4e) },
    },
    AffineNielsPoint {
        x: Fp2 { c0: Fp(0x6ad93ff3ad205064f487e9b5adee3c78), c1: Fp(0x79b6e07684b4ffaadc76c6f353debb46) },
        y: Fp2 { c0: Fp(0x19c1a03083c4e8782d15fb6b3e05c477), c1: Fp(0x76fb8a683ac3f54f8d94c3217f1af4da) },
        td: Fp2 { c0: Fp(0x2501cfae0a214e4122940b9807540457), c1: Fp(0x52bf696f6b5532d5cd9951b03558d028) },
    },
    AffineNielsPoint {
        x: Fp2 { c0: Fp(0x1fce3400fdbba9dff202e8750c4d30b7), c1: Fp(0x795c104c2ed290a520cc06d9763d3e9c) },
        y: Fp2 { c0: Fp(0x470a971284f6e811e6d25edd97f25339), c1: Fp(0x5cc12d2e8df5e1895cfcd21a1ccdd8a2) },
        td: Fp2 { c0: Fp(0x6509f4a57364726c5cafc4ffcd008559), c1: Fp(0x34145da3b065aa32eb4af695a6ed5219) },
    },
    AffineNielsPoint {
        x: Fp2 { c0: Fp(0x24d9c435d090045494973f649eab8f73), c1: Fp(0x2152dbba720a9ecb70248142d93c6eaf) },
        y: Fp2 { c0: Fp(0x06c728aa1469a443b52035769f14bd33), c1: Fp(0x297689e2629f9b4501698b639cef1ada) },
        td: Fp2 { c0: Fp(0x1df954314fdeb53fb4bd7474f538f30e), c1: Fp(0x47beb53dcb4b2a32304a0821c42e812b) },
    },
    AffineNielsPoint {
        x: Fp2 { c0: Fp(0x05aa8925b00634153a56b70c8d28d92c), c1: Fp(0x2b25a82c1a7ccb6929b6a64c77106394) },
        y: Fp2 { c0: Fp(0x3af76021690f23719eb7a6fb958650a6), c1: Fp(0x5ef4548f67932404ec9694fbc439d7b5) },
        td: Fp2 { c0: Fp(0x76667166f66a003b5b75a19679d5621f), c1: Fp(0x269746c2652c988246b0398a24111d17) },
    },
    AffineNielsPoint {
        x: Fp2 { c0: Fp(0x095143f02039813afe8e958bb3ac29b4), c1: Fp(0x3ac97771092b21da9e1a02e96037d73b) },
        y: Fp2 { c0: Fp(0x461576e8532bd45590ea3ba69d3e8977), c1: Fp(0x6331f1fc8d141856a994f5db4e691d74) },
        td: Fp2 { c0: Fp(0x5b5058238839802157509d942266b295), c1: Fp(0x778e54fc55f851a901f441987ea16f98) },
    },
    AffineNielsPoint {
        x: Fp2 { c0: Fp(0x5672d2d939d92b70e68314253e21625e), c1: Fp(0x0a225947c19a64e806ea709cc1b536dd) },
        y: Fp2 { c0: Fp(0x725ec8b5ece6f6f635d47817b12fb7f5), c1: Fp(0x4986c70830ee98c6425c97b0208a59a6) },
        td: Fp2 { c0: Fp(0x1fedd87827fe6cf5b40138c7c55a4941), c1: Fp(0x359f1eab49ab264a0b5b53be56f2f32d) },
    },
    AffineNielsPoint {
        x: Fp2 { c0: Fp(0x4fdefc7d7486121d3b493cb17c99ed28), c1: Fp(0x3a49755036127f826147e18025942b7f) },
        y: Fp2 { c0: Fp(0x7b5f1439716ea5ab539937f882f7f7be), c1: Fp(0x4f5e2e2959a8f2c22c6e02ee3aa88fb0) },
        td: Fp2 { c0: Fp(0x2c024a27512c51bea159436e2cc1a9be), c1: Fp(0x3626e692b1725e515931ab2ac415f65d) },
    },
    AffineNielsPoint {
        x: Fp2 { c0: Fp(0x5a0d4d6421216a63e4e5a90c2d6b189d), c1: Fp(0x5b2825838abf35136e76d147f512efea) },
        y: Fp2 { c0: Fp(0x31def95a0efc83cb14fd0ce66c2353c0), c1: Fp(0x5c07daa4252d400ca62852fa8bdb4b9c) },
        td: Fp2 { c0: Fp(0x30b29a23bf1ce2b88e930a42c6878abe), c1: Fp(0x3ebc4dfa0ab767a138f6ac3af3cd1c80) },
    },
    AffineNielsPoint {
        x: Fp2 { c0: Fp(0x10c1d9d74de9d83e4bd08d7bbca8ef62), c1: Fp(0x1436cb421caeac6bf8f59fd0788a0045) },
        y: Fp2 { c0: Fp(0x009da5fadf14cb8f882a540d86b997c2), c1: Fp(0x7eb821ae58cbd706c41a29152f2d38ee) },
        td: Fp2 { c0: Fp(0x094789e2eb3e71f80c946b6efddc2b20), c1: Fp(0x0dea74dd3554d67c6e4b54de522e3f8d) },
    },
    AffineNielsPoint {
        x: Fp2 { c0: Fp(0x0b211270de54353aeecb56f07f9ab09a), c1: Fp(0x0035687ced671e492d112e066f617906) },
        y: Fp2 { c0: Fp(0x26d1601381bd5ac46ad0d00698cc354d), c1: Fp(0x23d45c709a1c8e9138fbc67f86a8d7eb) },
        td: Fp2 { c0: Fp(0x1cbbc6b250d3e8548a0c7a2930b52edb), c1: Fp(0x1bf0ae2855f8a194a1061fb5fd6713ff) },
    },
    AffineNielsPoint {
        x: Fp2 { c0: Fp(0x176f0b00b41cc3dfd003495e033bbe6a), c1: Fp(0x0bf6d809c6f2303ddaefbc8d022510de) },
        y: Fp2 { c0: Fp(0x4016c193941ee6c07e30f0504f9bf3e4), c1: Fp(0x066e5310fb4ac789b6beee1b73049071) },
        td: Fp2 { c0: Fp(0x05cc7c80ba245ff5aad06f5df18a68a4), c1: Fp(0x2422de1e70ccffc16ed4fa0727d63a49) },
    },
    AffineNielsPoint {
        x: Fp2 { c0: Fp(0x562f3d1302c3b5e53c16fc415655fca7), c1: Fp(0x1b8bec6d1c35ee09081f6134b8fc6e87) },
        y: Fp2 { c0: Fp(0x3743c350740a300d940ef0cdf061ff9b), c1: Fp(0x160d44a39a9b4c2939865af3d0e8f1ec) },
        td: Fp2 { c0: Fp(0x5abe135d79e8106bb1f8a7670fab72b0), c1: Fp(0x5381893d9626dfc6ea3c6e9bac118611) },
    },
    AffineNielsPoint {
        x: Fp2 { c0: Fp(0x5e418652d6ee7ad89f07f7973644725c), c1: Fp(0x43b9ddb3f3683f13b1f34801f198eb09) },
        y: Fp2 { c0: Fp(0x179435135b2ca2388562805aace998b5), c1: Fp(0x6e8607a93a79d0654a0d2ac0eb50b4fe) },
        td: Fp2 { c0: Fp(0x74471887e08dba45a820eeeed69c1f11), c1: Fp(0x20ede677ba5acab92cc49583e58eec2b) },
    },
    AffineNielsPoint {
        x: Fp2 { c0: Fp(0x753cb21e4ae5c622186e2f7122dad1be), c1: Fp(0x7bd27d8a9cdfffc3522e18e5a97d05dd) },
        y: Fp2 { c0: Fp(0x303c78428f7057a9bc909a45d9fbe6cc), c1: Fp(0x575e600550c70f08d18df2b3cce6e0be) },
        td: Fp2 { c0: Fp(0x04ef5ab134e125ca7e8e484620c67fe4), c1: Fp(0x691f910d03e648174c0994b956acf7fa) },
    },
    AffineNielsPoint {
        x: Fp2 { c0: Fp(0x656e230caf7113a1e104050e5c3d4f72), c1: Fp(0x1b88b386b084cf839dcfc9db8ab2556c) },
        y: Fp2 { c0: Fp(0x25cc33c8b57b97a586d90ec0e03148a8), c1: Fp(0x538802b7669c2a791985049a162856a2) },
        td: Fp2 { c0: Fp(0x6049b722c7a3ea04b62ffadd54742107), c1: Fp(0x2eb8c65ecc82dfd553df5161af0e9baa) },
    },
    AffineNielsPoint {
        x: Fp2 { c0: Fp(0x6426b4025c21e68f27bfe0c6cd7410b8), c1: Fp(0x3cc8a520ab53fd989fac16ba83e1dc56) },
        y: Fp2 { c0: Fp(0x7188b2c025cafc8027a7b081b3d528ac), c1: Fp(0x5e4d57510d552b50b3d22052c6b9b759) },
        td: Fp2 { c0: Fp(0x34f1a60443a1487cb1e09f44984e7f35), c1: Fp(0x002db1f565fa84afc093dc2de870e75b) },
    },
    AffineNielsPoint {
        x: Fp2 { c0: Fp(0x1df05e5911c7ef5631b326a09eaa807b), c1: Fp(0x25353ff8d5dada5d15a581dedf84406c) },
        y: Fp2 { c0: Fp(0x71aa14fa5d135e672fc8a2d8dfa48093), c1: Fp(0x1b06cd87dafd51016ee8cab9bf61f2e7) },
        td: Fp2 { c0: Fp(0x30fc382eb3d0537ef67eab505b52d24c), c1: Fp(0x34c0a707b48bcb6f7c9c2585c97ceb3a) },
    },
    AffineNielsPoint {
        x: Fp2 { c0: Fp(0x0d3be2c81104a773eb592fa72018f165), c1: Fp(0x52c5827b3d29c5f2e350b676e6028c64) },
        y: Fp2 { c0: Fp(0x568dd9bfb154bfee52372d4126f61f31), c1: Fp(0x37b29bb81d884f7a84be91e69e251c71) },
        td: Fp2 { c0: Fp(0x610307576e818526df0ff727bfd93072), c1: Fp(0x157e4a95fb60613d61a88639746d658a) },
    },];
