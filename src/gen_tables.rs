// -*- mode: rust; -*-
//
// This file is part of ted127-gls.
// See LICENSE for licensing information.

//! Precomputed comb tables for fixed-base scalar multiplication.
//!
//! Table `v` at index `u` holds the affine point
//! \\( 2^{16 v} (1 + u_0 2^{32} + u_1 2^{64} + \\cdots + u_6 2^{224}) B \\)
//! where \\(u_j\\) is bit `j` of `u` and `B` is the basepoint.  The tables
//! are regenerated online and cross-checked by the test suite.

use crate::edwards::AffinePoint;
use crate::fp::Fp;
use crate::fp2::Fp2;

/// Comb multiples table 0 of the basepoint.
pub(crate) static GEN_TABLE_0: [AffinePoint; 128] = [
    AffinePoint {
        x: Fp2 { c0: Fp(0x12c8124feb812eda257df51cb10d46b9), c1: Fp(0x35af79d0729c323734e5d78f601b4825) },
        y: Fp2 { c0: Fp(0x51f898119f270c3c1407a368945ff792), c1: Fp(0x0b8a275703b201b95d39e8d40d624e20) },
    },
    AffinePoint {
        x: Fp2 { c0: Fp(0x4985e819ad53cad419acc42fac6d883d), c1: Fp(0x7fa79dbfc4cdcdfd3bfe81d079510be2) },
        y: Fp2 { c0: Fp(0x3539e5d97c29ea08a2a1854f93864060), c1: Fp(0x0a45b51b4734ee26990465a8b7d131f3) },
    },
    AffinePoint {
        x: Fp2 { c0: Fp(0x440326f81f0cad01089704b3e9a5ecff), c1: Fp(0x5a0abda8c6cf32c1f40b4f2a1d32bb92) },
        y: Fp2 { c0: Fp(0x765cde62f947ff52ef8a1fb0c4c9b9cb), c1: Fp(0x52b0841d1206f5973441c3db22438353) },
    },
    AffinePoint {
        x: Fp2 { c0: Fp(0x27682e018e5b3442d2e62a38dac147e3), c1: Fp(0x127a12b4b48f5d03a4f7af3ebe0a162e) },
        y: Fp2 { c0: Fp(0x7a84fb9dd2b8768ddf1e78cae1b5aa6b), c1: Fp(0x05cedf654911afcfd4f724a455e8b68a) },
    },
    AffinePoint {
        x: Fp2 { c0: Fp(0x7354fbb55496dc112aad88d9f4a85312), c1: Fp(0x3d738da5ea75884c1c9cbfc4cbdacc88) },
        y: Fp2 { c0: Fp(0x306a4f57edca2c1f53e09ae9a2cb7566), c1: Fp(0x665ee90bbcae0df8dcf5b1a07d5c8e00) },
    },
    AffinePoint {
        x: Fp2 { c0: Fp(0x4f93555d5bb300af49fca36a04042276), c1: Fp(0x2cd752a5ebb8f1524facf8d68278c9a4) },
        y: Fp2 { c0: Fp(0x6b7c34feb43d85d43cdf60f08ee38d4a), c1: Fp(0x2a7ad030a7e0001d410a80db5586d44a) },
    },
    AffinePoint {
        x: Fp2 { c0: Fp(0x425a094c0b720f612d3abcb621db1195), c1: Fp(0x24cd04ceb27de6d0daae382c6680eb1e) },
        y: Fp2 { c0: Fp(0x7950d02d65dd4812416e43e65974a24a), c1: Fp(0x0b89bcdfb773829c39f870c913c09de7) },
    },
    AffinePoint {
        x: Fp2 { c0: Fp(0x597f9f28a0f2ddf68a9ab896a4325c18), c1: Fp(0x699e2243837fbec9403519f7dcfd000c) },
        y: Fp2 { c0: Fp(0x424e079e6a0c7a66173fc5cb2cc128d4), c1: Fp(0x2b38ad7abd3f4cc77e0e706b075bd6c8) },
    },
    AffinePoint {
        x: Fp2 { c0: Fp(0x7825ed733ea232f8aaf1a81f05ec2ebb), c1: Fp(0x272a0c1d91155027bf742b9d63198948) },
        y: Fp2 { c0: Fp(0x20a375e761ecab93f7a045247f0904df), c1: Fp(0x3e5d431667dcb190d5598032f4abafaf) },
    },
    AffinePoint {
        x: Fp2 { c0: Fp(0x45ff5b067fcc6406f32a7b0f3c499da5), c1: Fp(0x213c78b9a6f291eb76ce317fbcd73a78) },
        y: Fp2 { c0: Fp(0x1b3c1788e7ed7ab1392d8fd80c10fb14), c1: Fp(0x437e2f16c66def65d1e7e23dc1e48ee9) },
    },
    AffinePoint {
        x: Fp2 { c0: Fp(0x156a9a30828dc803ba9e9fa48a6cff90), c1: Fp(0x70d5edbfd1c2f085258f833334a3e336) },
        y: Fp2 { c0: Fp(0x600a9f548d6669123852a2e2126f0c1c), c1: Fp(0x0643967664b589b8654673e8f569b7b2) },
    },
    AffinePoint {
        x: Fp2 { c0: Fp(0x2f7cc1edb1aefe735abcd481de519744), c1: Fp(0x7e4f82d3eac0a89d88653e4b8b64a410) },
        y: Fp2 { c0: Fp(0x714dc6387058ca6bf103e8120299402e), c1: Fp(0x2ed3b67d9796375f65b3701ea30c9687) },
    },
    AffinePoint {
        x: Fp2 { c0: Fp(0x2344493d08c8a7a01480e4a25026c7b0), c1: Fp(0x6019160af7b4b438f23e8a03826125e2) },
        y: Fp2 { c0: Fp(0x4afdba6da1091a06af923f8fa0169372), c1: Fp(0x4005e6505d1ab38f5a65592019c7d504) },
    },
    AffinePoint {
        x: Fp2 { c0: Fp(0x716e7c9571dadfcde77c59a32939cd6c), c1: Fp(0x311b4cb1055ab16ca7fc9b8516429e6f) },
        y: Fp2 { c0: Fp(0x2c538f1053b30b5a6e46850780e9e684), c1: Fp(0x78fc907126d5df386e98edef0ba364e8) },
    },
    AffinePoint {
        x: Fp2 { c0: Fp(0x49bd50fdb349ad99051c150d8ac01556), c1: Fp(0x52d3c00e851cd5c47a6cc48732cc5f8a) },
        y: Fp2 { c0: Fp(0x119e8ffeda87ded8ad798718883bb879), c1: Fp(0x40b584e16b688aff71d6b2728af661a3) },
    },
    AffinePoint {
        x: Fp2 { c0: Fp(0x11cad4e75e6e7121996602c370d0a1ee), c1: Fp(0x3f6ca4262e6793212f7a124d88efe0f4) },
        y: Fp2 { c0: Fp(0x6dfc498636f64bd4075f33986cc06b09), c1: Fp(0x31031bea170e08e25fcf876b4492962d) },
    },
    AffinePoint {
        x: Fp2 { c0: Fp(0x4e18d817de4a8527bdb2f80343ef6e53), c1: Fp(0x3aeefe8172bbf8fd495d74e8eacb3801) },
        y: Fp2 { c0: Fp(0x49670ed78787ef4741054df21f6be80b), c1: Fp(0x21a6aa5547a39ce2c9262754aa6d4ddc) },
    },
    AffinePoint {
        x: Fp2 { c0: Fp(0x77773267c2a82a4ab4e838dbe0d5287c), c1: Fp(0x3b29a4d3ff0e3a9150960085caf0e9f5) },
        y: Fp2 { c0: Fp(0x3685093e94950e9b73aa143609279b94), c1: Fp(0x5d15f93a6a76bd281c8e6642368aa2ad) },
    },
    AffinePoint {
        x: Fp2 { c0: Fp(0x56e25f613ffdb46d4cb3c1ab608998e2), c1: Fp(0x4da7a3432c9a6a4c0d2170ac39223a9d) },
        y: Fp2 { c0: Fp(0x11b7c60d6cd19907e12c4b198e65a784), c1: Fp(0x5d5c6608ddfdadcd67a791445f02f974) },
    },
    AffinePoint {
        x: Fp2 { c0: Fp(0x259ddb4311c6d2e25ffeb8079769d390), c1: Fp(0x4ee6d753321a648da072ffec3e5332f0) },
        y: Fp2 { c0: Fp(0x0d2220aeb19807f9e4240fcb02f203ce), c1: Fp(0x519915315653b0329a6787c1eba39098) },
    },
    AffinePoint {
        x: Fp2 { c0: Fp(0x6c0449394a50bfb8bf49143bebefdae5), c1: Fp(0x1c458d135e4067316a8827c25949258d) },
        y: Fp2 { c0: Fp(0x20356297c16b16fd14d3a65ed8271074), c1: Fp(0x46bc5937698947b4088fdea7b7c9815d) },
    },
    AffinePoint {
        x: Fp2 { c0: Fp(0x1374f266fcd7b5fe20641ec6f7f39d12), c1: Fp(0x6941a26b8ae33dd3b077c894ed975233) },
        y: Fp2 { c0: Fp(0x68a7351aa545f03640d576d63d0dae76), c1: Fp(0x17a11fec1f7c7ed8890d42b6a830e062) },
    },
    AffinePoint {
        x: Fp2 { c0: Fp(0x3f0ccb0332a225d9ceaba2356523f625), c1: Fp(0x6a3e540b342b7e3c55d62f24081d8612) },
        y: Fp2 { c0: Fp(0x4a911680e2787a1fc80ece42533ab524), c1: Fp(0x1f3857fe38e051cea20496941a69288e) },
    },
    AffinePoint {
        x: Fp2 { c0: Fp(0x5bbeafc2590632199be28f7d3fa5f814), c1: Fp(0x345c80c9fd981c13d639fec56faa3c56) },
        y: Fp2 { c0: Fp(0x6c88c0dec2347f3655499006a1b7e318), c1: Fp(0x19e5ca9d37d56a7a7400b6e07bb1fe98) },
    },
    AffinePoint {
        x: Fp2 { c0: Fp(0x6de2266ea69a458f2f3a3a738d545ecf), c1: Fp(0x7afaa4f42672e9a12598100f050fc1cd) },
        y: Fp2 { c0: Fp(0x6702f52bdf9b183543daec9970143536), c1: Fp(0x374c76dfb475bb12edf3d7c67cc05fd1) },
    },
    AffinePoint {
        x: Fp2 { c0: Fp(0x7db5e2c24116f2dd66684c79a9845ebe), c1: Fp(0x33f854b5a1cda26626426b7e77ef734a) },
        y: Fp2 { c0: Fp(0x27fe87fe0879c65d635ac85cda931453), c1: Fp(0x6fff85cf312d0c513cc948f6dffa34cf) },
    },
    AffinePoint {
        x: Fp2 { c0: Fp(0x3e99d1ecbbf6d677e2ab62df9de52ca6), c1: Fp(0x6a53bfd597a7baac91248a30749bb1af) },
        y: Fp2 { c0: Fp(0x4e989516e7c7331adc59cb9b4bfa9660), c1: Fp(0x28b6fda41291cefaafa42d018f1b8ba2) },
    },
    AffinePoint {
        x: Fp2 { c0: Fp(0x70d3d8c70f71fe320183d97d0698c967), c1: Fp(0x78b1a6a4565003aeba13544984261190) },
        y: Fp2 { c0: Fp(0x66a67bc60bfe395a89e632606cff3ae1), c1: Fp(0x2cafa85f1a7e3f62ddf6b64596ab00f3) },
    },
    AffinePoint {
        x: Fp2 { c0: Fp(0x50b6d306046f6865a079610e85e813fe), c1: Fp(0x4f13f493b5b324068703f3a5a11e01f3) },
        y: Fp2 { c0: Fp(0x33eb7718220f93c9434b7074db322dc5), c1: Fp(0x4b6f782db4854ea04177215fd1cccc50) },
    },
    AffinePoint {
        x: Fp2 { c0: Fp(0x67f8777d0521f31bfa87d6a6bfde04ee), c1: Fp(0x2d3ceb632ce37036a65fcb80aa34990d) },
        y: Fp2 { c0: Fp(0x5324039c161d95d04c1da4f067882ede), c1: Fp(0x4662635ddc16682435c80434681a5643) },
    },
    AffinePoint {
        x: Fp2 { c0: Fp(0x6438434c1947d71ca9fbf59093258e16), c1: Fp(0x6fa3b028658f6152a955516e8b788c4b) },
        y: Fp2 { c0: Fp(0x4e8c70f9d1e00ea89cf93c97cf5f6ad6), c1: Fp(0x7211f6e8a64db26276fde5c3039f57a7) },
    },
    AffinePoint {
        x: Fp2 { c0: Fp(0x5f5730485b7ac282da8d1ea5b0ddac18), c1: Fp(0x094dfec42c74b1076f39ceb505f27a2b) },
        y: Fp2 { c0: Fp(0x2866967a538954027c24df42bca4bf87), c1: Fp(0x46b71033aa38a449e5a21511500ae6cc) },
    },
    AffinePoint {
        x: Fp2 { c0: Fp(0x4c132c90b602d89710b2dd7a5b9c2b59), c1: Fp(0x556f099f678a29e4063a4ce4c33b7cd3) },
        y: Fp2 { c0: Fp(0x3515b34a27f5d485dc653231f117a29b), c1: Fp(0x640d952935c8b12a8caf3070570b34a3) },
    },
    AffinePoint {
        x: Fp2 { c0: Fp(0x2b2fa8694575d8749b0d5e00a3f2479b), c1: Fp(0x00a260708a30a9b46acd0d75ecd93300) },
        y: Fp2 { c0: Fp(0x4d32addefad98049bf5533b7094f5cd0), c1: Fp(0x549a950018664bf4b8eafac99fc5b800) },
    },
    AffinePoint {
        x: Fp2 { c0: Fp(0x3cce93e6901ae4870122ad4ed3dbd8b6), c1: Fp(0x6a230e2fb3b722199e2ad9d810d8e850) },
        y: Fp2 { c0: Fp(0x00d74ec7f8319c2a9c5fce06bc7415b7), c1: Fp(0x091cac4cdbaa095f227d0af5ffe61387) },
    },
    AffinePoint {
        x: Fp2 { c0: Fp(0x6f95f02cc958092fd07a0522b0277582), c1: Fp(0x1a8328ded532156ed9cda64dafeff3c1) },
        y: Fp2 { c0: Fp(0x6276fe984283bd428d3338e143211876), c1: Fp(0x5262299153ad40eda2f0c0c500c1531b) },
    },
    AffinePoint {
        x: Fp2 { c0: Fp(0x45efa3c45db2207cba87391db45fabf5), c1: Fp(0x7b6c70b0b75273131dbef6a2e626a57e) },
        y: Fp2 { c0: Fp(0x2be4ec3c9965b0f6d1d7f6f0d7cc7e81), c1: Fp(0x302957e535828ad61a75c3bbcb242e6c) },
    },
    AffinePoint {
        x: Fp2 { c0: Fp(0x13cb382f874c1c41d138b36928b57df2), c1: Fp(0x16d8aa5bde6a512ea4f102efd631f3b0) },
        y: Fp2 { c0: Fp(0x4c56bb6f8f79b843e687e2179880fe1b), c1: Fp(0x6525a9676e291e517deaeec2bd09d8a8) },
    },
    AffinePoint {
        x: Fp2 { c0: Fp(0x2e3fd509cc5dbedf89f5382cca6c5f62), c1: Fp(0x1d37d20d3019464a5930614680a6ed29) },
        y: Fp2 { c0: Fp(0x3963b41ab80a12d6b8bec66bd1144a45), c1: Fp(0x0ec79bb2955e29089272ecefaf082359) },
    },
    AffinePoint {
        x: Fp2 { c0: Fp(0x3a39e655478c26347fa7480b1abaf648), c1: Fp(0x7c2ec3176388c06669b58d8200c197d9) },
        y: Fp2 { c0: Fp(0x60d9a818526e289350d8acccfc6a043a), c1: Fp(0x7e721d4acaa50c1f2f18406a59fac3d7) },
    },
    AffinePoint {
        x: Fp2 { c0: Fp(0x24526cbd1fd25100c16c215b67a099cf), c1: Fp(0x4b9875f6c33ff7e82689b0b8ec685a8b) },
        y: Fp2 { c0: Fp(0x5af2ac3808cd60a89fadebb8b04796d4), c1: Fp(0x458a6b5d00ab4a3cc84e00e20514dd7a) },
    },
    AffinePoint {
        x: Fp2 { c0: Fp(0x2bf63746752a178615301a744cebb204), c1: Fp(0x5be7b9d9a94dfea322cb2dfda758fde4) },
        y: Fp2 { c0: Fp(0x1ebddf8e31b8ef46b53188efe981a786), c1: Fp(0x3e557bfd10f9c3f141d3b185c8b7b921) },
    },
    AffinePoint {
        x: Fp2 { c0: Fp(0x7fc304ffa5979a07cab15debfbd3c0d7), c1: Fp(0x4b2c684ebbdc325b387d26d256c7a71d) },
        y: Fp2 { c0: Fp(0x264c4735656392b5cb5c74740ac91bd3), c1: Fp(0x3ce0ad8be99693153c1056b61f1e892c) },
    },
    AffinePoint {
        x: Fp2 { c0: Fp(0x133c6f48817dbed1bd7dcde4d243bf91), c1: Fp(0x670fa40e4cfc214ce4e940bfb0ef4cde) },
        y: Fp2 { c0: Fp(0x47919543be37989d22efb325a92cef92), c1: Fp(0x1aeb6b1e9a4eaef565021973bd398c74) },
    },
    AffinePoint {
        x: Fp2 { c0: Fp(0x4368c106d16b8dc69e650ec838ba64ec), c1: Fp(0x1b30b5363b324e18c8a6bf3fb67008f5) },
        y: Fp2 { c0: Fp(0x75ab9f3fb4d8af67f3e226818fd34f8d), c1: Fp(0x4059d0ffdc9eb5257cffd0740d196c33) },
    },
    AffinePoint {
        x: Fp2 { c0: Fp(0x2c8e27a0ca88c3ab729b84f720537176), c1: Fp(0x3f5ebf5a124f30d541cb872339d0339d) },
        y: Fp2 { c0: Fp(0x636ef6dae1b6b38ff61a54240f6e0ee8), c1: Fp(0x7dd9ba52a7384b1968db672f37942d6b) },
    },
    AffinePoint {
        x: Fp2 { c0: Fp(0x6addd237bd075182a2d5db4c26e8e179), c1: Fp(0x3246b52b60bab7a37401da6c898c8779) },
        y: Fp2 { c0: Fp(0x4a7de69a7cc664e93da6c1798c9dbcf5), c1: Fp(0x2488bccda4f3d78c1ddf2af9c32d176a) },
    },
    AffinePoint {
        x: Fp2 { c0: Fp(0x48c9d3715a737431d7b72bfcdc07879a), c1: Fp(0x5b1e48004bf00bebeec40fab42ef4ffa) },
        y: Fp2 { c0: Fp(0x31bcd651fbf08b010e91496bb9363a9d), c1: Fp(0x5309a8acc8a3c59cf03b1207dc8b38c8) },
    },
    AffinePoint {
        x: Fp2 { c0: Fp(0x4444a7ec2b6262b35c2fd72a8607aec1), c1: Fp(0x5ca28754bf5ec6e2a29cd2a2eeff7370) },
        y: Fp2 { c0: Fp(0x44004c51a967c83c272f68d06ce4b899), c1: Fp(0x63720103015ee6dde4c1c30fa03f757f) },
    },
    AffinePoint {
        x: Fp2 { c0: Fp(0x445ba3d3d885b417aede75c2edad1cee), c1: Fp(0x4bd0b1c9a5624bbb47e63412172c9d26) },
        y: Fp2 { c0: Fp(0x3038223c0aec5d0346dec0ef23af58f6), c1: Fp(0x64ee7d8f0e09c1e1e0f1d65d8abd3738) },
    },
    AffinePoint {
        x: Fp2 { c0: Fp(0x1893dfd1a6c7c8ec7530612c6d11792b), c1: Fp(0x2431240559aa6353562a46699146007d) },
        y: Fp2 { c0: Fp(0x17cf11f0067d37596d4ae3544732a409), c1: Fp(0x42fd22f3892dac24957a8debcc5a0e61) },
    },
    AffinePoint {
        x: Fp2 { c0: Fp(0x56618e661b5f480dd798952d084e6153), c1: Fp(0x441e0eb0153b6544c4e903821f1e9cd3) },
        y: Fp2 { c0: Fp(0x2a52f878f1c41af0b4c86bc8439f2e73), c1: Fp(0x633424db3be0fef6bd8175167e699fe5) },
    },
    AffinePoint {
        x: Fp2 { c0: Fp(0x1a61f63582ac4ebf144e8d0a15fe2aa7), c1: Fp(0x7f3f210140812d349b70d4aa2a79fda2) },
        y: Fp2 { c0: Fp(0x792aa1c553fc7abf17b0399b07472fb8), c1: Fp(0x7c84a482e8c9338329f06b73d409a557) },
    },
    AffinePoint {
        x: Fp2 { c0: Fp(0x1db9e1543e44566edc04f2ae35fc064e), c1: Fp(0x459926ed5d511f686cdad84f358ced03) },
        y: Fp2 { c0: Fp(0x01e9d9b46fa35e2dd70e07e6181c806e), c1: Fp(0x785e58fd37f23b0cf6f42d1a33a91d78) },
    },
    AffinePoint {
        x: Fp2 { c0: Fp(0x002a1dfe5c0f172b10418fad7bd57f69), c1: Fp(0x4b7834481f2d231523922b984ac6cc33) },
        y: Fp2 { c0: Fp(0x6b1c37cacbce4c743e0f8fbc3c7061dd), c1: Fp(0x33b6bc39706e585d330660b71a5e26ce) },
    },
    AffinePoint {
        x: Fp2 { c0: Fp(0x7df1dd2f75a951b022c1642e2ea2cf46), c1: Fp(0x1b621e05bb019e79f1ff91886dfe2c34) },
        y: Fp2 { c0: Fp(0x30a53e8e8ead75decb9e7d7f75ab2569), c1: Fp(0x2b4c9d271ccbf57dc779612a9a640dbf) },
    },
    AffinePoint {
        x: Fp2 { c0: Fp(0x03b035d645afbf37f88d4f8cab197b51), c1: Fp(0x2f2961c0079c36b3f8d64ca73d14aeed) },
        y: Fp2 { c0: Fp(0x2f04a4af140eafff2c07fa50f5b7ed24), c1: Fp(0x6b6c83b1c9c419de7fb38b8965d6f951) },
    },
    AffinePoint {
        x: Fp2 { c0: Fp(0x2f52ee1f36e3f8d2a310e3c08f8bf61a), c1: Fp(0x0101296f0113bfa010052451b3079565) },
        y: Fp2 { c0: Fp(0x794cf17fabb6c7783af22b08cd63b600), c1: Fp(0x09bcba3d3c4a336ad00b2672f69f5e84) },
    },
    AffinePoint {
        x: Fp2 { c0: Fp(0x6a16e69ddc4596a194c57f4e2162cf64), c1: Fp(0x1110ab52c325fe1c2e843dbed1e3fd79) },
        y: Fp2 { c0: Fp(0x004ae9106d2969bb690edd92f1e39bec), c1: Fp(0x3733d3308e0c41c1d45cd1937421f2d7) },
    },
    AffinePoint {
        x: Fp2 { c0: Fp(0x7555c13c7d1b4e8fe64791ccd0ef0ec2), c1: Fp(0x30daec11b71bd97220e77076fb0dd1a9) },
        y: Fp2 { c0: Fp(0x47bf87b3f145e6b8cffa0f07a650eb0f), c1: Fp(0x1ad363a86d4a448cbc89a30cb7d19b71) },
    },
    AffinePoint {
        x: Fp2 { c0: Fp(0x241d2fcbc25357e5daf59c3ff338d22c), c1: Fp(0x55f4205dedd6982825e20f838439fe3b) },
        y: Fp2 { c0: Fp(0x003f7ea8bec1c7f4335d417bf0221008), c1: Fp(0x49256a0562fb757308aa2209cf762844) },
    },
    AffinePoint {
        x: Fp2 { c0: Fp(0x7d466aab14a3d051e08991cb9d8c080b), c1: Fp(0x3f5856073b6f7b4f03352bf6188bd709) },
        y: Fp2 { c0: Fp(0x519b6da7b8b4fd7fe4d80ae072383089), c1: Fp(0x4cc44ad2755f377825ad6994df291260) },
    },
    AffinePoint {
        x: Fp2 { c0: Fp(0x36487b9080fa0e55533334a8da042d44), c1: Fp(0x66d035bc538c3690c761e8d4557ac55f) },
        y: Fp2 { c0: Fp(0x70a5ad32d761681f3084576657ded210), c1: Fp(0x1f898df8966d975d67909f18a1d363eb) },
    },
    AffinePoint {
        x: Fp2 { c0: Fp(0x04797d8c582920b6d22e2154129ba86c), c1: Fp(0x656cacb3aa2e73fde8e11ae7dacfd27f) },
        y: Fp2 { c0: Fp(0x4ffb0ba2acc6cfb036e842c4a3f6bc97), c1: Fp(0x5670f4993ad0a59830b3aba960f5c2a2) },
    },
    AffinePoint {
        x: Fp2 { c0: Fp(0x1d53dce73e9f2d205796ee8a16ddbf08), c1: Fp(0x43eba8d44921e1fef15150d6055842b2) },
        y: Fp2 { c0: Fp(0x1174f2ab746496460b9ed4c3e2634a77), c1: Fp(0x233fb67fb1b0d92d138631e1c0a69379) },
    },
    AffinePoint {
        x: Fp2 { c0: Fp(0x3fe8ad12fe0cec219ff836ce1266f312), c1: Fp(0x574cae1179c3a59acd339a178893cfdd) },
        y: Fp2 { c0: Fp(0x4e5b779862674d66a7cd08f36d5e5423), c1: Fp(0x4c8f25878cd7b4aa3963891fd66541f5) },
    },
    AffinePoint {
        x: Fp2 { c0: Fp(0x589004caa6f9d4499c379e98fd3e2903), c1: Fp(0x30604d058767c1f9b641bdade6136879) },
        y: Fp2 { c0: Fp(0x434bdab88f17e6b9c4adff3e6be01f7e), c1: Fp(0x27c020d81c64e7fa578ed13bc419dd9c) },
    },
    AffinePoint {
        x: Fp2 { c0: Fp(0x65f5db33a7f12238c18254b4265f9216), c1: Fp(0x69c13641d8e455ccad18ccefe7deaaa2) },
        y: Fp2 { c0: Fp(0x755a4a8e82dd3a114cb400b0a066d882), c1: Fp(0x3b6002fb64e58df356d139303495af0a) },
    },
    AffinePoint {
        x: Fp2 { c0: Fp(0x10e844362570c4318324225d657fe95e), c1: Fp(0x5abc5b30f1d7cc8d94af843c44e5ad67) },
        y: Fp2 { c0: Fp(0x58248ba50cbf37267a9e9beca7085728), c1: Fp(0x3563d4e76b5dce565d87845dea76de6e) },
    },
    AffinePoint {
        x: Fp2 { c0: Fp(0x272ec2f3640ac6c2fb855f0a52050c75), c1: Fp(0x787fd83189785e9a7cbbb26c21a93123) },
        y: Fp2 { c0: Fp(0x53f89696ed5a78841a4968152050e1e6), c1: Fp(0x5523b55d426fd81bae3162db2b03681a) },
    },
    AffinePoint {
        x: Fp2 { c0: Fp(0x3f0351b5f6e0488abddb55c55cb3b4d2), c1: Fp(0x36605732e473bffc76e07c484e3c4d7f) },
        y: Fp2 { c0: Fp(0x3b541724204c7a5d4e6e6f5bb95b8679), c1: Fp(0x4c8f106627879329edeeb73b19ecee91) },
    },
    AffinePoint {
        x: Fp2 { c0: Fp(0x4d4dab006a25d7d4d5163ca6b9591001), c1: Fp(0x342f85f4807a459c343fb28cbb704c70) },
        y: Fp2 { c0: Fp(0x1cb7b81f3db87595ca6c39b8172ae2b2), c1: Fp(0x5bd79da642e6077d8c260f479c416c87) },
    },
    AffinePoint {
        x: Fp2 { c0: Fp(0x649c483f18e33a66b7b00350b56fe43f), c1: Fp(0x37928c4fef37d5b21afdc9463fe25997) },
        y: Fp2 { c0: Fp(0x745876a71e42cca6f97649f5223b788d), c1: Fp(0x031c9bf8d1b5e5c76a5c656c7ea93a63) },
    },
    AffinePoint {
        x: Fp2 { c0: Fp(0x7c0b7632e239f260a239c3ebe0ec5361), c1: Fp(0x3348ca513f4c11c181f916ab0a66fe40) },
        y: Fp2 { c0: Fp(0x79a6186049e8c42a22cdc3fb2c7e7605), c1: Fp(0x59151caaa10011fbbe894d4f51dc5ed7) },
    },
    AffinePoint {
        x: Fp2 { c0: Fp(0x46ce8de6bbdb4d43678bb463f50c6b77), c1: Fp(0x1332f457d2e8e9629c4e36ec35bc025e) },
        y: Fp2 { c0: Fp(0x60b40c322fa38b882d7d69ecdca63c2f), c1: Fp(0x0524c71ffe1acbf2bc278a383f31a9e6) },
    },
    AffinePoint {
        x: Fp2 { c0: Fp(0x4ed363476108d98bcf0c4d91b88966f5), c1: Fp(0x47ac2333cdab844fc2de5c96b064fbd6) },
        y: Fp2 { c0: Fp(0x1ef5534398157771ab3b464add699dee), c1: Fp(0x6201a7cce3670b9417eb4e87f0da5c32) },
    },
    AffinePoint {
        x: Fp2 { c0: Fp(0x42ebb9bc77cd81ec0a9dba14023b06f4), c1: Fp(0x0b6df382da2b80f48062586cff2f6374) },
        y: Fp2 { c0: Fp(0x1fcf5638bf45135e4374fd97f32f107d), c1: Fp(0x655907b7cca87a9ec30a7e3607dd005f) },
    },
    AffinePoint {
        x: Fp2 { c0: Fp(0x224de23c6489863693d10d116e70a1ae), c1: Fp(0x74d9b6e297314ab5ed4588a72349d029) },
        y: Fp2 { c0: Fp(0x508e4fb468555ea3ce319581d903fb30), c1: Fp(0x2164113801c1030031d23917dda37422) },
    },
    AffinePoint {
        x: Fp2 { c0: Fp(0x2a1006b845dccc50742536f8096f47a5), c1: Fp(0x590fd90e59dbedc2fa1a87cba772aa07) },
        y: Fp2 { c0: Fp(0x1cf5ce1f753a80b59c3c964c9fc2d773), c1: Fp(0x30015fee92a7d0e5670c779b54746e3e) },
    },
    AffinePoint {
        x: Fp2 { c0: Fp(0x33dd81dc8574e09bf682042e54628051), c1: Fp(0x01b1ee5a1aa3a96af83ae7108fec2771) },
        y: Fp2 { c0: Fp(0x5dda995b6deaf24362f7b63926bcb6b2), c1: Fp(0x56eb66852220eac458991ae44156dec1) },
    },
    AffinePoint {
        x: Fp2 { c0: Fp(0x6cedb9ed0e83b9a92e87e8bbdb2f842c), c1: Fp(0x4c5fe4267fb82462490fd47a5034f4fa) },
        y: Fp2 { c0: Fp(0x56cbfec63e258e3aa7a68830bb504ee2), c1: Fp(0x206f8c91308bfb944ad97a896d80af4a) },
    },
    AffinePoint {
        x: Fp2 { c0: Fp(0x731092e5ecc17fc52ddc6294aafa874d), c1: Fp(0x6fe1dec7d1590c997b230e7bed95820a) },
        y: Fp2 { c0: Fp(0x7d1405cd97c7a9fc4290099136690216), c1: Fp(0x162f5e4762bfb822c630c7154c1177bd) },
    },
    AffinePoint {
        x: Fp2 { c0: Fp(0x7b5ad388767698ecc8e7f359f54c3f88), c1: Fp(0x3c6701155c0dad1253c4e49b8eadf61e) },
        y: Fp2 { c0: Fp(0x066a1d525bbe594b484621d23c9ef337), c1: Fp(0x660f5f873ea72bd0141ff4b96da77abe) },
    },
    AffinePoint {
        x: Fp2 { c0: Fp(0x1235307cea3e3312002b3303ac24feb1), c1: Fp(0x24509e24ae3c35f1475e902d40877da6) },
        y: Fp2 { c0: Fp(0x4f34ee6e76f3a831f3400984cd6f1939), c1: Fp(0x409810e3b6ca2c913e07b8b30f60a836) },
    },
    AffinePoint {
        x: Fp2 { c0: Fp(0x5b54222698d4443ed722db9f7f8e06c8), c1: Fp(0x279ceb58ca808ba81d452e8ce444d18d) },
        y: Fp2 { c0: Fp(0x404d514d05ff09f5f7b53e28d09334b7), c1: Fp(0x432fbbf43bd8bf2fa6cb4c2519d95746) },
    },
    AffinePoint {
        x: Fp2 { c0: Fp(0x2cc98f0cd872acc61fd61b302808f5ca), c1: Fp(0x17aa710be2e1f3b8a104d6e702fc80b1) },
        y: Fp2 { c0: Fp(0x1e0479cdaf49c382fedbfe47367b3dae), c1: Fp(0x1c9024aeec4eafdaf5d0a1735219e513) },
    },
    AffinePoint {
        x: Fp2 { c0: Fp(0x650fd05bc00ea26a05e1f92724b88d32), c1: Fp(0x2b0c543b3402be623c5f0c00e83afa51) },
        y: Fp2 { c0: Fp(0x088d92a7ddcb673652ee0451fa1a4042), c1: Fp(0x6155a5f3782afddbc86bddec0666be71) },
    },
    AffinePoint {
        x: Fp2 { c0: Fp(0x4358452e83e84e3ae74ca28b6e4b4565), c1: Fp(0x5f893e3db835be032624892a500d9f58) },
        y: Fp2 { c0: Fp(0x5bfcff821fd71ede0952844f14356d93), c1: Fp(0x118eaf9e6a8b3139a0b9c50d653e9a8e) },
    },
    AffinePoint {
        x: Fp2 { c0: Fp(0x05ff527f4b59a7e3d024e08c24488f06), c1: Fp(0x50cc7b4b8fc15940cedfb4d8ab4171be) },
        y: Fp2 { c0: Fp(0x1eb6751895bedb7851b230a194c37c97), c1: Fp(0x305ced44e1616f3f7fef48f5104ac15e) },
    },
    AffinePoint {
        x: Fp2 { c0: Fp(0x4494700d77228147bf75a9cabb0e3439), c1: Fp(0x48c02048a4d76906258897ed4c04dbab) },
        y: Fp2 { c0: Fp(0x54e99a7f15336367772bdc654a48ba58), c1: Fp(0x039a254bae93e1bb97f8a8c71473d590) },
    },
    AffinePoint {
        x: Fp2 { c0: Fp(0x697be60810de93f5f7ee23c4c3f23bb2), c1: Fp(0x0e4b42b915eeba90fc050c43258c3a59) },
        y: Fp2 { c0: Fp(0x2191614d1fa933624941145f8a1d0f36), c1: Fp(0x3c984a840858a25cbc53c0a2100de592) },
    },
    AffinePoint {
        x: Fp2 { c0: Fp(0x5dc98a340264ccb2f9782b028fab839c), c1: Fp(0x32d74963d111c6412c11f584876885e7) },
        y: Fp2 { c0: Fp(0x18c7880a8ee4eb276be520ea3db48de0), c1: Fp(0x679703409c23863c9de95f95e76d9b05) },
    },
    AffinePoint {
        x: Fp2 { c0: Fp(0x48eb186260ecd7050613008d73605cda), c1: Fp(0x6f13775a2294c6dd9601b23ef30a5367) },
        y: Fp2 { c0: Fp(0x3c252622e62a88b13209dca16eb763d7), c1: Fp(0x08102135faff577bd19a60e0e97ff3e1) },
    },
    AffinePoint {
        x: Fp2 { c0: Fp(0x00598dea7b65e27a71056afb1f0e9608), c1: Fp(0x7ac226cbeb42d8f662ed1510fb7d946d) },
        y: Fp2 { c0: Fp(0x6414210d18e950b96af97735328903f0), c1: Fp(0x37656c2746da15f9d52a500edb2a1457) },
    },
    AffinePoint {
        x: Fp2 { c0: Fp(0x51afa97f17462e8db113057775b48684), c1: Fp(0x1cca1d63f3ba84517ae118a82f5303c9) },
        y: Fp2 { c0: Fp(0x24697d1cb458e2d82cb1acb4cb83bba5), c1: Fp(0x53034ecc404ab4126c61ddf09934faf7) },
    },
    AffinePoint {
        x: Fp2 { c0: Fp(0x1f201fd47467a7bd386a606fd2fb5271), c1: Fp(0x4caedaf66e4b160cadc7bb8e65861d43) },
        y: Fp2 { c0: Fp(0x26ba097fcd6cf61504daf3fadec3dd90), c1: Fp(0x63da5331721e0758aebae28688917825) },
    },
    AffinePoint {
        x: Fp2 { c0: Fp(0x35b8dcf09b8420e2dfebce28c5ce5955), c1: Fp(0x740e99f1691b8f7149a4a8a6a8036781) },
        y: Fp2 { c0: Fp(0x735a015ffe072dc0b2bb42b2ecd9134a), c1: Fp(0x4ae1c1e9c498d7b0a3cefc8bbd529d78) },
    },
    AffinePoint {
        x: Fp2 { c0: Fp(0x1ded9bbc806bb30fded7926d689f859c), c1: Fp(0x03630c6520bb4be1e092bc514dd59035) },
        y: Fp2 { c0: Fp(0x533f39c7b46a4e1d0a285f92b5717280), c1: Fp(0x07a7eed9dfca2f601a1675e37584ce68) },
    },
    AffinePoint {
        x: Fp2 { c0: Fp(0x3e58f03e091325f9a1c8afd50cf6da38), c1: Fp(0x7ae5c4fd9da9168ac297667e5dc2db8a) },
        y: Fp2 { c0: Fp(0x6c48c04ac8f684f87b8981c4d69a5fcc), c1: Fp(0x2f92bad284f26102fc4feaf9bfbe0e08) },
    },
    AffinePoint {
        x: Fp2 { c0: Fp(0x308ccd191a0e46eefa7d49f0ef8eccd1), c1: Fp(0x4a698ade566fc806d69a23d25f357c5a) },
        y: Fp2 { c0: Fp(0x0d718d43911dba2e05dd08fd19e04b46), c1: Fp(0x556673b4c045d6266a8bc492a2e097d2) },
    },
    AffinePoint {
        x: Fp2 { c0: Fp(0x40d328d466602e5d79862f80a3e636c3), c1: Fp(0x4c71d317a22923000f66b699948c7041) },
        y: Fp2 { c0: Fp(0x16030baa3aefb11d9c4a336b4d131a4e), c1: Fp(0x4c30bc5025f4e6b55d5802781a8441f2) },
    },
    AffinePoint {
        x: Fp2 { c0: Fp(0x53f9fef4a154173aa613899c9de79681), c1: Fp(0x5a0541b6645e3a54cf69b0536901c09e) },
        y: Fp2 { c0: Fp(0x0b86088a8a292f782c7037afbb84ac5e), c1: Fp(0x3fb8f98059866f45e1e573ada09e638e) },
    },
    AffinePoint {
        x: Fp2 { c0: Fp(0x47575f2b44add9a5be423c61b0e9beb8), c1: Fp(0x1356e8a4cba788b5c533b9baca0cafd2) },
        y: Fp2 { c0: Fp(0x31542b00ea84f736071618a7233c210c), c1: Fp(0x026a74e1e8add8b333a805810622fa45) },
    },
    AffinePoint {
        x: Fp2 { c0: Fp(0x2ce63f2a4a2bb3ddcb0d1010ca40e4ad), c1: Fp(0x2504f4795e705dd9953f65be33add98c) },
        y: Fp2 { c0: Fp(0x78619cb007e8ddcd4ab0e14a3d50e651), c1: Fp(0x59d3221a68ec81011821cf5a9eda6a8d) },
    },
    AffinePoint {
        x: Fp2 { c0: Fp(0x2d090e9a7e65adcb68bf8b79f0c8d906), c1: Fp(0x532b25f4a74b7f0f1efa58c4d6f3dca1) },
        y: Fp2 { c0: Fp(0x7bb47138922937c0226925d32f423005), c1: Fp(0x099eafdd34c800762301cb42889d893c) },
    },
    AffinePoint {
        x: Fp2 { c0: Fp(0x77ae2d2ec8241361384dc5bd7eb7c7d4), c1: Fp(0x3d67bcc126868cc9590a9ea115cfaade) },
        y: Fp2 { c0: Fp(0x4f8799cc6aac3b256ed760be66a2b2c5), c1: Fp(0x1626130442900bc736bc23d8faf824c1) },
    },
    AffinePoint {
        x: Fp2 { c0: Fp(0x49255e7c13b32276d5711830be911b46), c1: Fp(0x142c549380753aa524b34e17c6243054) },
        y: Fp2 { c0: Fp(0x4e2ffe6fc8753dd7af5785081f8d9de7), c1: Fp(0x6f98af880e4deb782b6ac5a0e30febd3) },
    },
    AffinePoint {
        x: Fp2 { c0: Fp(0x7b9c5bc164f1295accb93e270d77ae32), c1: Fp(0x5920f7a75fcb1548aab4c0ffcbb136c3) },
        y: Fp2 { c0: Fp(0x0cee71bdf4a8f07eca0a03f4c68faec5), c1: Fp(0x0d3c945d0aec727edcc347f15ca16681) },
    },
    AffinePoint {
        x: Fp2 { c0: Fp(0x1e9f84af98ba697bec79c5d218fd5c92), c1: Fp(0x3b56d98424de303e4d08e0759d8684c7) },
        y: Fp2 { c0: Fp(0x6f34a30d4fea23e6ee64b65c6db1daeb), c1: Fp(0x3e15430a2b73be96130b61bc39145d7c) },
    },
    AffinePoint {
        x: Fp2 { c0: Fp(0x794a0e4fed57e7263c6dd2e16bb4c8b6), c1: Fp(0x087ccaf03e293d6967241ac4e98d5074) },
        y: Fp2 { c0: Fp(0x68a3ee3ca074fb14426f91bd18b364a2), c1: Fp(0x6e970055b76633793b9e32c329255fc6) },
    },
    AffinePoint {
        x: Fp2 { c0: Fp(0x7b4cb799cd478c7400f3609451f78574), c1: Fp(0x3d178c5f8dc77548baf4f13002935c49) },
        y: Fp2 { c0: Fp(0x008849d7bdd1ad8e477010e276326430), c1: Fp(0x2b5c66216dcb388abb07e9e400efde05) },
    },
    AffinePoint {
        x: Fp2 { c0: Fp(0x18d4972a6f5f1dab5a7e1abfbb52ff0e), c1: Fp(0x4a42e94c4c2d8617f68982cc51681174) },
        y: Fp2 { c0: Fp(0x05e84aa69e0b63f8c5245acd9263faa2), c1: Fp(0x760d45ac6729e98603195c03b9892303) },
    },
    AffinePoint {
        x: Fp2 { c0: Fp(0x74b99a896ca5c6094ba2ad840ec3cc3d), c1: Fp(0x3f486bcd731feaec29bd44d3cefdc2c9) },
        y: Fp2 { c0: Fp(0x0b8ded2fb04adc8d491a2bee363fe86e), c1: Fp(0x03f785378c9856b64da14a2df5b84933) },
    },
    AffinePoint {
        x: Fp2 { c0: Fp(0x349947cebf8cecaa6fbca3038e020c3f), c1: Fp(0x1a30763fc8f80b4b9eb1371702673159) },
        y: Fp2 { c0: Fp(0x707c5d941e3d80516f4656ca098e3923), c1: Fp(0x76799028d8837005aa8d811afab6b160) },
    },
    AffinePoint {
        x: Fp2 { c0: Fp(0x56dbd2a39e196cc4fe9d426ca450a2b2), c1: Fp(0x4ef118e153ad45589f96d2397b6fbd09) },
        y: Fp2 { c0: Fp(0x6f3db35e43372565c8c6124210a7be73), c1: Fp(0x38cf6b71806ca4e1977f4913a8801795) },
    },
    AffinePoint {
        x: Fp2 { c0: Fp(0x5f8d23eed69300a1ccf9b1ac1d608376), c1: Fp(0x00d73ac60fbc57fcbbcf8e5fe8fb9ee3) },
        y: Fp2 { c0: Fp(0x01a7054bf88c88e1117618f8f186b296), c1: Fp(0x6d1bbe02bb53b15bb91a9c20f3433499) },
    },
    AffinePoint {
        x: Fp2 { c0: Fp(0x5e363e1d29bdbab01b011b5c2dac9cc8), c1: Fp(0x33df647d5ee02240f3d61e776f563828) },
        y: Fp2 { c0: Fp(0x6d9d261462591987f91a09b436bad37a), c1: Fp(0x7fc6e982eba6afa7de16fc51aa50cb64) },
    },
    AffinePoint {
        x: Fp2 { c0: Fp(0x6cb3a42a13a732ed9955f2eea8ad53cd), c1: Fp(0x763bd19aaa77275707781f049d46a592) },
        y: Fp2 { c0: Fp(0x466d9c9df15abe481a98cf9a2c510ef6), c1: Fp(0x36c5e68f9c1ebe917d16922838f96011) },
    },
    AffinePoint {
        x: Fp2 { c0: Fp(0x1c83a20deb7a0daa73790bf6669a7bdc), c1: Fp(0x3e49cbffe23937916ac4f623c1f0ecaf) },
        y: Fp2 { c0: Fp(0x1402d18ca98888a9e3c778287fc90133), c1: Fp(0x1b25c5d3aafe7d5e88c36c050f579c4c) },
    },
    AffinePoint {
        x: Fp2 { c0: Fp(0x1b17019c9769ef66db0147435cdbb9d9), c1: Fp(0x434b88c9bde7d56482cdf0da7a024ad5) },
        y: Fp2 { c0: Fp(0x029e92ee2e16d1fc076fa446d948cf5d), c1: Fp(0x70c9e3f0cc9695a55e2573d8824d10e1) },
    },
    AffinePoint {
        x: Fp2 { c0: Fp(0x28dcd927692e115d6fd2d1f1de262d9f), c1: Fp(0x6a2204e8c0825945d74d0aaf0722d04c) },
        y: Fp2 { c0: Fp(0x56a5c4adbdc703e2e56729b505858ccd), c1: Fp(0x20b04bfeda9acb3161c663fe2b7a87fe) },
    },
    AffinePoint {
        x: Fp2 { c0: Fp(0x2303f4c89730e3bbe5cbf7c7b296132c), c1: Fp(0x502db3d08da5270bb2cc0de228ab52f1) },
        y: Fp2 { c0: Fp(0x7ef71e6efe1d3eaeff898280409df751), c1: Fp(0x3d91b9dd510448afc254ef8837e51f5d) },
    },
    AffinePoint {
        x: Fp2 { c0: Fp(0x3d62c2c596c31774ecf5236db61a52fb), c1: Fp(0x7f0195de463d11b336f6e975e20bd33e) },
        y: Fp2 { c0: Fp(0x7aef61425de05206e6951c89be4fb226), c1: Fp(0x1ae9c31840366a9ee1c216d6d39c1f02) },
    },
    AffinePoint {
        x: Fp2 { c0: Fp(0x7a1bf230def9ae4dd0d57b414fef0282), c1: Fp(0x5cd39da6a2070b9feaa9f44ce8ede15f) },
        y: Fp2 { c0: Fp(0x42a3cd42fd65c6bfe416220b11fe536d), c1: Fp(0x04e2f9b1ea56c5b9d2d82bf130437ad0) },
    },
    AffinePoint {
        x: Fp2 { c0: Fp(0x0c301a36b0a2a8f801aef0f49ea16ae1), c1: Fp(0x10bfc393969bd4d46be56d39424cacd8) },
        y: Fp2 { c0: Fp(0x3e2cb9e50858244e0bb2dc8bc9d48ae3), c1: Fp(0x73d055d80041059290fec4be9c7f33de) },
    },
    AffinePoint {
        x: Fp2 { c0: Fp(0x1218514e6c693ad7ed8f829dced0137f), c1: Fp(0x475faed4a36ac46b7b0d397bfd52fc73) },
        y: Fp2 { c0: Fp(0x144cb03c60fd9df9273096b40150d034), c1: Fp(0x034729fe41740f64ea8602a0338e4319) },
    },
    AffinePoint {
        x: Fp2 { c0: Fp(0x40339d9ae6430d0bd8651733dd49cd3b), c1: Fp(0x4fb6efe9266912799e36e7bbaaccfbc7) },
        y: Fp2 { c0: Fp(0x27b33494a7bf9588aa6fe2270915f978), c1: Fp(0x46f6ceef481ea38d50069af68c7652b4) },
    },
    AffinePoint {
        x: Fp2 { c0: Fp(0x29c92df33b4a6e9773979a6f1c344fc5), c1: Fp(0x38be8bc5bda9b0779e2e75f95b48a586) },
        y: Fp2 { c0: Fp(0x015dd46b7f17ea69205e9bfbd11e7d18), c1: Fp(0x6a3f253d1ff3ffa18baa271d2a20d9a4) },
    },
];

/// Comb multiples table 1, pre-doubled 16 times of the basepoint.
pub(crate) static GEN_TABLE_1: [AffinePoint; 128] = [
    AffinePoint {
        x: Fp2 { c0: Fp(0x4a321156de274a2977ccddf02ba3b002), c1: Fp(0x21d893f3ab4286c2d27e20fa438a8c22) },
        y: Fp2 { c0: Fp(0x0283d6ac909717c7d94e60fed5fa108f), c1: Fp(0x2bc8736fbb6a7b733f67a28e328d6081) },
    },
    AffinePoint {
        x: Fp2 { c0: Fp(0x010188bad46d6a65b42f936f1d18cc82), c1: Fp(0x0b3f7e21b92556d51fe655ec1fe6fb8d) },
        y: Fp2 { c0: Fp(0x58bd91138240f0c2b37359c729cabcf7), c1: Fp(0x3a583f396cf9c8864400dfba405fc17c) },
    },
    AffinePoint {
        x: Fp2 { c0: Fp(0x682cf5dc35e79f7042d826a3fef20e43), c1: Fp(0x5be0de42eed0fbb1076614295f487249) },
        y: Fp2 { c0: Fp(0x777ecee910d06e0dc7c2a50fb510a7b9), c1: Fp(0x452b495c02ad90409fa05fd01943a4ba) },
    },
    AffinePoint {
        x: Fp2 { c0: Fp(0x0ffdc714feb9c46de3fde013c29e3aa9), c1: Fp(0x2bc0fd683de8f44d523433bc908777e1) },
        y: Fp2 { c0: Fp(0x07261c97d66aaaed07241d95cc4fd020), c1: Fp(0x6e02f58b37c62feedfbd99c7991ecc6a) },
    },
    AffinePoint {
        x: Fp2 { c0: Fp(0x19dd1ac44514bcb559661fce1c6ff447), c1: Fp(0x1b98835c85b3445546deadac83f29966) },
        y: Fp2 { c0: Fp(0x7e0113b04b526c6ac14ac82410eabdfa), c1: Fp(0x565722172de5b5de4cb6867f9284743f) },
    },
    AffinePoint {
        x: Fp2 { c0: Fp(0x19f06e9a0ac7210c12ba237ac935bda1), c1: Fp(0x6fbfa7e13c2ab994e3de5984b0e79cbf) },
        y: Fp2 { c0: Fp(0x5144c920eb8dc44621656aa3521b91be), c1: Fp(0x7ae2634241fb9711251a2283180393b7) },
    },
    AffinePoint {
        x: Fp2 { c0: Fp(0x46d125105805617711d47ac04d78ac83), c1: Fp(0x582b70560ceed4ea3a50f075a471daf4) },
        y: Fp2 { c0: Fp(0x69938e98391f2b485ef69cf33ded4898), c1: Fp(0x0ac523832d4d8b49f6efdc62a6064993) },
    },
    AffinePoint {
        x: Fp2 { c0: Fp(0x363c4eba9013c5d3e256082110a21b68), c1: Fp(0x6311d13af0449dc907ebc6de613284d7) },
        y: Fp2 { c0: Fp(0x4fae8bc877e67f3dd5e9170f5e3dda3b), c1: Fp(0x7e9f87d5cd4d253066043ddb49e92e65) },
    },
    AffinePoint {
        x: Fp2 { c0: Fp(0x57740aab499170bbba8aa02993128743), c1: Fp(0x33596704a647abfb2c3e43fc064c5164) },
        y: Fp2 { c0: Fp(0x6a58f601a24b0e9483a86b9aa5383250), c1: Fp(0x083d822deecc58a92ebbd8b544d29bb5) },
    },
    AffinePoint {
        x: Fp2 { c0: Fp(0x4fc46eb93e4d5a945d73665c66a12f91), c1: Fp(0x24e1dab6bddc80ac6b4befa17b52d367) },
        y: Fp2 { c0: Fp(0x1c44fa8b23df22aa82aa249b7de440ea), c1: Fp(0x794afbedf91a4d31a34336975c92ac62) },
    },
    AffinePoint {
        x: Fp2 { c0: Fp(0x1ff77534817a5b2e233318643dcbd0ca), c1: Fp(0x2f584168a04bef45780206f1fbc8c4a3) },
        y: Fp2 { c0: Fp(0x4b6dc2fa6d698e1e185f3e6d3b006ae6), c1: Fp(0x5d053b13b581034b3a415f6ec1379eaa) },
    },
    AffinePoint {
        x: Fp2 { c0: Fp(0x660887809662f0a580ec3f269751d02f), c1: Fp(0x1df24cb8d055df63180887d5eff2949d) },
        y: Fp2 { c0: Fp(0x18d48fa20010255361c46120d6c5a108), c1: Fp(0x644e05efa5aed42aebf6288da4f99683) },
    },
    AffinePoint {
        x: Fp2 { c0: Fp(0x03082543782162330650ba5726bafcb4), c1: Fp(0x36e0b20c513068ac909f5630f4a64794) },
        y: Fp2 { c0: Fp(0x23aad0736f9e48f4589c4be431028f77), c1: Fp(0x68bbfdc387fa50a812c86381bfc8d8f2) },
    },
    AffinePoint {
        x: Fp2 { c0: Fp(0x3b0728f3ee0396f1150013bba828d709), c1: Fp(0x0e6399c1f57174976143c77256d6f164) },
        y: Fp2 { c0: Fp(0x415e481799ceea0941aa5c0a217df4f6), c1: Fp(0x5ebbdc4d99188779a3ecd4a6d636f875) },
    },
    AffinePoint {
        x: Fp2 { c0: Fp(0x7db403749849d5925ac2123ee8d6bc06), c1: Fp(0x1feaaa0de9255fb7986af556d6fa06f2) },
        y: Fp2 { c0: Fp(0x138fee5aad9cc29d61f9f2b06d8a67dc), c1: Fp(0x1e5fba20211505ffbcb17dcf21831fb7) },
    },
    AffinePoint {
        x: Fp2 { c0: Fp(0x13db763a33935764ee6e97485077ea0b), c1: Fp(0x684c3e0dababe9319cc7db8c4e1ccc6e) },
        y: Fp2 { c0: Fp(0x3f789406ca277b0a393bf0ea35ccc6eb), c1: Fp(0x6505bee0666902b6d0a0844749237682) },
    },
    AffinePoint {
        x: Fp2 { c0: Fp(0x16a21f565459ea7f3cdd281b7e11ddd9), c1: Fp(0x6610662907b5884a824cf991704b37d7) },
        y: Fp2 { c0: Fp(0x0a3dc0bf98a941f8aa5e50d978b32bd2), c1: Fp(0x17b47c754e98af026bbc7ca4dbd91444) },
    },
    AffinePoint {
        x: Fp2 { c0: Fp(0x4ab006e33a608ca7edc3e91d5b6c23c3), c1: Fp(0x44fb92297476488cca8c2cded4a942c6) },
        y: Fp2 { c0: Fp(0x3d172846ede778d79b202c35cbc14ec9), c1: Fp(0x066caf629e432f6ca1f72ba809378fe1) },
    },
    AffinePoint {
        x: Fp2 { c0: Fp(0x7391f579869b44be907570cc666a3902), c1: Fp(0x77235192617dc823f7db1761d8ede068) },
        y: Fp2 { c0: Fp(0x3d6ce741f6a3a2ff7c839ac8279d06d8), c1: Fp(0x4740c076119d2e167ef377a483c80617) },
    },
    AffinePoint {
        x: Fp2 { c0: Fp(0x0ec80c23c969512df8cb09735fa0b878), c1: Fp(0x1702c021ccb092a9ef996bebb4b2dd3e) },
        y: Fp2 { c0: Fp(0x2840068a3182e9611cfaebea331ca701), c1: Fp(0x5245d87528fbd9ad5cff4d68ada114de) },
    },
    AffinePoint {
        x: Fp2 { c0: Fp(0x11a0e8b672e7d58bf628190478c1c962), c1: Fp(0x62d06dcbf90cff25bdee47bf2a048953) },
        y: Fp2 { c0: Fp(0x7ca0b69543d0c8bfee82a932d0d08318), c1: Fp(0x046096e0c023f720a9413940ec57a5c8) },
    },
    AffinePoint {
        x: Fp2 { c0: Fp(0x266b9cade8fa2600b314776142d40faf), c1: Fp(0x18358ad0336737ade6e27d3129b28850) },
        y: Fp2 { c0: Fp(0x1422265f342b0451229b8c55156bcfa9), c1: Fp(0x7b64bc059e578fbcdebd99653b740ab5) },
    },
    AffinePoint {
        x: Fp2 { c0: Fp(0x4f85a4a1ed81ac8df0d5453e6144d98d), c1: Fp(0x036e469a87a800dbe2a7989270a8de11) },
        y: Fp2 { c0: Fp(0x52f7808241d7824f9fff6a1019cd3c4d), c1: Fp(0x0a764fa5fab21637c42e3324f17d8c60) },
    },
    AffinePoint {
        x: Fp2 { c0: Fp(0x2c69ed152fe03aa1e105d96b731339b0), c1: Fp(0x15d5f423277fbbba96cfbed42232bc31) },
        y: Fp2 { c0: Fp(0x2596d2b0d2bcc7cb0d09a08e85b20e2b), c1: Fp(0x7dfdae33f68252e5008f60a802bce314) },
    },
    AffinePoint {
        x: Fp2 { c0: Fp(0x1ce16381a366eb227a4eb0cc9738a85d), c1: Fp(0x796dd663be436ec2c884af31b6fcb4e4) },
        y: Fp2 { c0: Fp(0x27e58b519ed75871d1c0f2f88253686f), c1: Fp(0x7e33ddf916476b8e9032a20b74686789) },
    },
    AffinePoint {
        x: Fp2 { c0: Fp(0x005127dc53fffea5826120c43c7d4fe0), c1: Fp(0x34fbe92acbc24818ad777b50cf545780) },
        y: Fp2 { c0: Fp(0x2c257efdd725d3e22e2424e98ee5dbe1), c1: Fp(0x7ad272f287816636fdc721488fbdd0b8) },
    },
    AffinePoint {
        x: Fp2 { c0: Fp(0x3e0927e52a79bbab420f20b496c9cb39), c1: Fp(0x18f77b196d52ecb66aa33e97f11f467e) },
        y: Fp2 { c0: Fp(0x584677105b210fc60f93abfb116d83fb), c1: Fp(0x7d2745b22088aff64eb6def8c0c5d97c) },
    },
    AffinePoint {
        x: Fp2 { c0: Fp(0x6332454ac005e5003574a4c7e23ce5a2), c1: Fp(0x732b58102fa7f0f162cfc4fe88866cf8) },
        y: Fp2 { c0: Fp(0x77d94a7b685b45f735318d1a88b2fe74), c1: Fp(0x5151515d1e3c4e7264010e055d821d82) },
    },
    AffinePoint {
        x: Fp2 { c0: Fp(0x5f1dbb9f92279d3c2411f6e5e2bb936d), c1: Fp(0x690a9b8f08a9adf7c69e4247c1a2efd5) },
        y: Fp2 { c0: Fp(0x47c9a888569f00072a9fc0520d3fff37), c1: Fp(0x199f563e1daaeb9a7a706c8964283b24) },
    },
    AffinePoint {
        x: Fp2 { c0: Fp(0x6b4da6a63ad69abe3191ec09437e67ce), c1: Fp(0x72544690320ff2aa76d843925320d713) },
        y: Fp2 { c0: Fp(0x3d3176bac5c0e7ba93c74b4798e7c9cf), c1: Fp(0x2904263d4d069d27e1fa92fb6e2786b3) },
    },
    AffinePoint {
        x: Fp2 { c0: Fp(0x3a0eb57f15a279c321895484116db26e), c1: Fp(0x57309e9f65f7fc1bbafd90de65c780fc) },
        y: Fp2 { c0: Fp(0x668472bae1d16ef47dffac7c552b552f), c1: Fp(0x1657629636f8fcbd0bd81897c959d90b) },
    },
    AffinePoint {
        x: Fp2 { c0: Fp(0x738189f3df428cfce8728063eadc0bee), c1: Fp(0x268cfcad8cc7e3f3961d8907e1738a8a) },
        y: Fp2 { c0: Fp(0x433a290f7c83d1b9bd083bba5a9914b8), c1: Fp(0x5a1dcac2326111b821f8ef8b23fe4e02) },
    },
    AffinePoint {
        x: Fp2 { c0: Fp(0x3e81c0a81fe542d194dc57db92a2b041), c1: Fp(0x02e3c5ffb2394da20c9363d9fd70fa9d) },
        y: Fp2 { c0: Fp(0x220acbc6792312efb503cbc4fd56237e), c1: Fp(0x455379cf4c3c00ab92132af0b3382b8e) },
    },
    AffinePoint {
        x: Fp2 { c0: Fp(0x01863564d1a99cdd42adedac17e26496), c1: Fp(0x5074addb49ca1ea875c33c2296dbaa87) },
        y: Fp2 { c0: Fp(0x648af72cddfc1393d270baef43c73d3c), c1: Fp(0x7508edd3f916738a5c324ca23a2eeab5) },
    },
    AffinePoint {
        x: Fp2 { c0: Fp(0x5d2ecb707284e49b03a119a6df368a0f), c1: Fp(0x0f8e8bb9beb3ddc1cb6f1df6182fd63c) },
        y: Fp2 { c0: Fp(0x72cf458416d28cf9663b31bc103c5a97), c1: Fp(0x020064eee3dd2eda5be0bd3e82c1eba3) },
    },
    AffinePoint {
        x: Fp2 { c0: Fp(0x0d272cfaa80206b4c52d913688653fae), c1: Fp(0x539846bae8265fa9ce4162629cc519ee) },
        y: Fp2 { c0: Fp(0x30bcedd31788191560179226f42ad89b), c1: Fp(0x039f8dc248d93ddfe4fd4768311ef696) },
    },
    AffinePoint {
        x: Fp2 { c0: Fp(0x0e83ca4641532ab21285383cec7441ab), c1: Fp(0x53191f504977ee5fa67fac4aec90d9b0) },
        y: Fp2 { c0: Fp(0x32fbe17565440d9617b2110129f78884), c1: Fp(0x562e874c0c3cbd73a6c51bb12508101e) },
    },
    AffinePoint {
        x: Fp2 { c0: Fp(0x14d2ba5714a0bead01836e82851a5d3f), c1: Fp(0x1f2b755261b6d3ee4c3a518c438d3f0c) },
        y: Fp2 { c0: Fp(0x3c543e9444b45451b0488dd3f0db37f8), c1: Fp(0x00307a9dbf73e821be40bf73b8bd6210) },
    },
    AffinePoint {
        x: Fp2 { c0: Fp(0x3df9eb776b5a7462a2eaecc3e4238bab), c1: Fp(0x2d500abcde95d4f1ac239e07b885eb82) },
        y: Fp2 { c0: Fp(0x2673dae0893f54fde29d7a7ad9370dc0), c1: Fp(0x54b72fa8e5b4c59771a81d6e567f92d9) },
    },
    AffinePoint {
        x: Fp2 { c0: Fp(0x602c29f320b514ed052bb15d47b99e3f), c1: Fp(0x548fddd78c19ab8343b3f495bf5c26d1) },
        y: Fp2 { c0: Fp(0x71049945a767eec84593643208a3962d), c1: Fp(0x18e8fca21fe4ade413cbb8aabca04786) },
    },
    AffinePoint {
        x: Fp2 { c0: Fp(0x1d0d629e8a7af64fb02667b7905e99e3), c1: Fp(0x5259a7c11fb4a067d4d2c3f878ca6efb) },
        y: Fp2 { c0: Fp(0x1c2695312f012a78de74333a87716810), c1: Fp(0x647be72ae4e2b585a585365bc198caba) },
    },
    AffinePoint {
        x: Fp2 { c0: Fp(0x21473e22cd2a55093df7d97d93388212), c1: Fp(0x5faac722ea9c667d8b2c774d6ebcedc1) },
        y: Fp2 { c0: Fp(0x1edc8e97066085c6f3b71be1ee139088), c1: Fp(0x1bbc102f100028ebd3490bd78d4a9d14) },
    },
    AffinePoint {
        x: Fp2 { c0: Fp(0x6be733c574c0708664de83e3bc919db7), c1: Fp(0x02c383f16aded98d442a4df6dc0403ce) },
        y: Fp2 { c0: Fp(0x7be5568a260ceb0ce8e5f7d86bd29f42), c1: Fp(0x38c2f81d26676bd2dc0492bb11837972) },
    },
    AffinePoint {
        x: Fp2 { c0: Fp(0x343f7b496248367aef5b8989c112bf7f), c1: Fp(0x7e39aa0141c8d40af5734459beefb6ec) },
        y: Fp2 { c0: Fp(0x5e657b3a5e36f20c9df7101ee9a7fe66), c1: Fp(0x2a3921fc6b3f9a0644aaad178fc69198) },
    },
    AffinePoint {
        x: Fp2 { c0: Fp(0x299c43854ec9af432fa49ffef569608b), c1: Fp(0x6ca628498b11a8c363083b7af945f5e7) },
        y: Fp2 { c0: Fp(0x307e541072e58ede82f1ceaeb6b0ba7b), c1: Fp(0x5eecd05acd16c92e97fdf559ce0130da) },
    },
    AffinePoint {
        x: Fp2 { c0: Fp(0x5ce402dc48a5fee0d30f788d8b25265e), c1: Fp(0x04526c0b2a9944b3e98e2b14ec078ff1) },
        y: Fp2 { c0: Fp(0x04b3190defe6ee2a11c9cc8251d69f44), c1: Fp(0x0f51de0adb5c123945bfcc5d0d9ee658) },
    },
    AffinePoint {
        x: Fp2 { c0: Fp(0x4a46ee4b0cf226c84af37c3614e749a5), c1: Fp(0x1caa38ea041befe87df9d64dbd3695f3) },
        y: Fp2 { c0: Fp(0x28b518e20a24d34b5ead248a680ff92f), c1: Fp(0x56b42c18458ca2b16576adc1c652d229) },
    },
    AffinePoint {
        x: Fp2 { c0: Fp(0x283c40d148333d49ff2803751e53b794), c1: Fp(0x1b49a5ac79c39753e3622a41955c7b68) },
        y: Fp2 { c0: Fp(0x2fb385e8cdd50e21f46c3bb8679de06e), c1: Fp(0x0fdd38a25eb1331fccef9455a20ec02a) },
    },
    AffinePoint {
        x: Fp2 { c0: Fp(0x0378924b5f481f4fc47f9eac0e495d9a), c1: Fp(0x340b5f05cc7a92e3ffcffd4673dce9a9) },
        y: Fp2 { c0: Fp(0x41d07da0a9ffe250c145460feeca77b4), c1: Fp(0x3dc3dbe6cf5af9318d56a29c922ce65b) },
    },
    AffinePoint {
        x: Fp2 { c0: Fp(0x2b61b71ea800a9814218fb22835580dd), c1: Fp(0x4b803049736afc42c85a20fbc7fe4134) },
        y: Fp2 { c0: Fp(0x0e59f42e9f0540900d7e7613c8e5610c), c1: Fp(0x1ea51fce21eec63e21cd92ee79b59587) },
    },
    AffinePoint {
        x: Fp2 { c0: Fp(0x2eb3ea6634848577d0ebeb8eadc730d6), c1: Fp(0x0bf6b6b678579a529ceb04f689f6e2f3) },
        y: Fp2 { c0: Fp(0x1575b763b2b493f77cefcc7d378fe531), c1: Fp(0x7c5ac6c272b976c4b40f7b57814be659) },
    },
    AffinePoint {
        x: Fp2 { c0: Fp(0x1c7699f50fa656a67bf00c331f7c7879), c1: Fp(0x3ee8810f309b3f32aaeaf1799c0ea8f5) },
        y: Fp2 { c0: Fp(0x6dd11411b7ea72e71dc7ef3d63842e8e), c1: Fp(0x40d10e8ecb08c2986273cfd6db80073b) },
    },
    AffinePoint {
        x: Fp2 { c0: Fp(0x5e5f7dfc072aca38c5d30ae530c16eee), c1: Fp(0x4141491428f00ae6fcc1ab28c0aa6755) },
        y: Fp2 { c0: Fp(0x5556307d6fa3189eba6b17090fe0f9ae), c1: Fp(0x6a520a7a1a89a763991937699565027c) },
    },
    AffinePoint {
        x: Fp2 { c0: Fp(0x062daa1b34f8aa05e4d7c876263fa468), c1: Fp(0x7e661860cbd87f8a1a84b63d4cd3ddaf) },
        y: Fp2 { c0: Fp(0x2319ffbc239b6f500bcd44121cb62cf9), c1: Fp(0x12e56cbb9cf9058df7898f26a81bae91) },
    },
    AffinePoint {
        x: Fp2 { c0: Fp(0x145f1427dfe61789ef3ef194ddde4201), c1: Fp(0x64bd5fde572c4bfd10dbaa5789c6c005) },
        y: Fp2 { c0: Fp(0x6d6d7ea675145e344edf020623ac808e), c1: Fp(0x524686f733ff5a770db35b100bbf423e) },
    },
    AffinePoint {
        x: Fp2 { c0: Fp(0x77a6f05d33d7c3986c324162ed8de4a3), c1: Fp(0x7e571710751b3683de2a29ac2c82e5e2) },
        y: Fp2 { c0: Fp(0x34cc076e8039558264155b43802a4ed1), c1: Fp(0x28438c3f3e342dfea4e96c2058435258) },
    },
    AffinePoint {
        x: Fp2 { c0: Fp(0x51017fd36d9e9fa5086785559480b62d), c1: Fp(0x32bbc5887260e7d64af23393684591bd) },
        y: Fp2 { c0: Fp(0x48bb0e33c222a85047d99827b59261d4), c1: Fp(0x78b07f0b8c4e644d2c236fdea23949c4) },
    },
    AffinePoint {
        x: Fp2 { c0: Fp(0x7c497ebf3af616585f68718b2d254bd7), c1: Fp(0x0fa85379d6d45f6b6d6c057af67c3e3b) },
        y: Fp2 { c0: Fp(0x6e01141976fc4fb691b16be802349a68), c1: Fp(0x6661a81f43f845890dfaa6c213a09a81) },
    },
    AffinePoint {
        x: Fp2 { c0: Fp(0x405d28ababeb78a3d0db1d75c4846ecf), c1: Fp(0x6a6ee12b3561221a76783f08de4d7f82) },
        y: Fp2 { c0: Fp(0x19bc7344071c1cef948934e019a3bf8e), c1: Fp(0x2606851b6ce9483ffecd693f672b72a8) },
    },
    AffinePoint {
        x: Fp2 { c0: Fp(0x7487743eec5bf22ca9f225f90cfd0e79), c1: Fp(0x0f79bafe307e19d93f23c0027c922429) },
        y: Fp2 { c0: Fp(0x603627ad6773c39cae95cb9c144b361c), c1: Fp(0x4e4df1e0116f3f373cbeaee37d684c7a) },
    },
    AffinePoint {
        x: Fp2 { c0: Fp(0x2ded25772739e859a40a4dc2ea2e1e30), c1: Fp(0x5b8b0d89bab59c7a7cbd40fed197a8e5) },
        y: Fp2 { c0: Fp(0x4ce1d42f2b7d1ccca0b398cb15f5b20b), c1: Fp(0x5455edc0de1399c0ee25022316c0b369) },
    },
    AffinePoint {
        x: Fp2 { c0: Fp(0x6774b43415cfc71b3e7d26b965fd445f), c1: Fp(0x674c3045dd285b73f1e8916f51876213) },
        y: Fp2 { c0: Fp(0x57712e4fa560349f8d0211f4dee6cef9), c1: Fp(0x497f3d77f321471b530247f5196a64dc) },
    },
    AffinePoint {
        x: Fp2 { c0: Fp(0x76eb7ec6042aba4da7610ceee28aa567), c1: Fp(0x12d8ef6383fd4d398b3b443c164a1875) },
        y: Fp2 { c0: Fp(0x50e930318c351e0d070deda79f08274c), c1: Fp(0x789af4651896ea699ab29de8326a5724) },
    },
    AffinePoint {
        x: Fp2 { c0: Fp(0x3eb0892096a89cfa0d54a257527dc2d6), c1: Fp(0x357bc8c2e771dbbf8fd74cba9ef5763d) },
        y: Fp2 { c0: Fp(0x4464ae4222f5f91c10c670cb5f45e5cb), c1: Fp(0x4398660356148c5e880cf0cdca1a3d7a) },
    },
    AffinePoint {
        x: Fp2 { c0: Fp(0x4ed5a5981626f8ca25b2c15c597bf68f), c1: Fp(0x0e6f415b5d06d131884e815208d95a55) },
        y: Fp2 { c0: Fp(0x5f0eb07458b3f732035e31d7364b7ee9), c1: Fp(0x04ff623204ab2117f359e8ea1b74001d) },
    },
    AffinePoint {
        x: Fp2 { c0: Fp(0x4c768756efc43092a5897657bc4b1d77), c1: Fp(0x5c23b8e0adab09a217f9e26f04972437) },
        y: Fp2 { c0: Fp(0x3647ae762e9182573cf689d277051c46), c1: Fp(0x50b937de87af9f991b402d9c6b5ee4fc) },
    },
    AffinePoint {
        x: Fp2 { c0: Fp(0x476e387505b50ab584bcee7974dbcb11), c1: Fp(0x0ea6501c8fc6a9ef0e6e6313f86ad158) },
        y: Fp2 { c0: Fp(0x20648616e73565118bbaf8d7b42b06fd), c1: Fp(0x5259d38fb64628ab3463f9dae99b5ea1) },
    },
    AffinePoint {
        x: Fp2 { c0: Fp(0x5bf9c0024445dde417a3392713503773), c1: Fp(0x5501b7ed305abea88f9002eeadf22873) },
        y: Fp2 { c0: Fp(0x0ad2248fc1f77ec0394a37ebb9d02bc4), c1: Fp(0x49a53d0099610e44c3860df098de4d46) },
    },
    AffinePoint {
        x: Fp2 { c0: Fp(0x250941c232adc7c2b564da0135e1d5cb), c1: Fp(0x6b45f89ad947215b3557d4681984fb91) },
        y: Fp2 { c0: Fp(0x6bae8841cbe28c96d13378869d5d06dc), c1: Fp(0x5a770e2ae62c78fec1328f5ce0288caa) },
    },
    AffinePoint {
        x: Fp2 { c0: Fp(0x6489240b80e0131deb6ed39762176ef4), c1: Fp(0x41735860c2c15d29b61d80cf4736faeb) },
        y: Fp2 { c0: Fp(0x4d1b8e36b6fb5847c7dc44c071dfda06), c1: Fp(0x190ddea813908823324dda0b7d598212) },
    },
    AffinePoint {
        x: Fp2 { c0: Fp(0x3696bfb2e3990768ff00265550fb6b89), c1: Fp(0x3e527401d2011fae57ed80ea187ce04b) },
        y: Fp2 { c0: Fp(0x34b68480a1ca1b5a093cf0c64f7df006), c1: Fp(0x531dae59b2448ee8dbda7c7c1501bf11) },
    },
    AffinePoint {
        x: Fp2 { c0: Fp(0x14ac7fd36444fbf639e3a241001ca1a7), c1: Fp(0x4f96824cf2f4b327db44ddc513fbc580) },
        y: Fp2 { c0: Fp(0x5c97008217e4b990ab49c1c0f4475274), c1: Fp(0x1b47b242f8e4a318d3bc784c7d31968c) },
    },
    AffinePoint {
        x: Fp2 { c0: Fp(0x3acada9eb7ee1ff24423c45686923405), c1: Fp(0x33cb69f89b58e2e353ab1fd78557a4bc) },
        y: Fp2 { c0: Fp(0x584867792f25e54b150f1490d74e08a5), c1: Fp(0x0cc23766fb791c705bf2b364b564713a) },
    },
    AffinePoint {
        x: Fp2 { c0: Fp(0x473b7b0d84adc90af7f7dd42e6d83f25), c1: Fp(0x14ccae194c2100a1fae40ff30151007c) },
        y: Fp2 { c0: Fp(0x3ef53b4a5976aba2e03d71838b1350d7), c1: Fp(0x507561e67b9c489ab27d7a6a300e5452) },
    },
    AffinePoint {
        x: Fp2 { c0: Fp(0x59bb4e98f1ac2a76fafb4c78346423b0), c1: Fp(0x25a9e35c315ba6301bbcab8ab5cca923) },
        y: Fp2 { c0: Fp(0x231bc0ef00c56736025ceaea17af1c16), c1: Fp(0x17d2d19ce653e20432dbecd2fe6c135c) },
    },
    AffinePoint {
        x: Fp2 { c0: Fp(0x1953d5d5b1acee72d6439def17d03358), c1: Fp(0x242b394562fa83432972b3d69133a2e3) },
        y: Fp2 { c0: Fp(0x7996fef45bf9c00bc5fac4a87993377b), c1: Fp(0x056bde5de2d582248e8c147d39a1d3ba) },
    },
    AffinePoint {
        x: Fp2 { c0: Fp(0x089b84ac0094b4c9c92a84be7c1f83f5), c1: Fp(0x75f0342f6dd9fa685791d73744be412e) },
        y: Fp2 { c0: Fp(0x2f18fddb9e5657bb17d3ad9b7decb544), c1: Fp(0x578dc8316c04948e430c0e031d53d3a7) },
    },
    AffinePoint {
        x: Fp2 { c0: Fp(0x6b52ad95a9c4334d468c8dbe70e5959f), c1: Fp(0x6c1daf43fd020307cab9a3e56abe1347) },
        y: Fp2 { c0: Fp(0x46f8b4ff2364de93ba103882a4fde3dc), c1: Fp(0x112854ecdcf842f11e8c33496824c074) },
    },
    AffinePoint {
        x: Fp2 { c0: Fp(0x7ec7b3b388d442f99bce6dc36d5bdff0), c1: Fp(0x71bb36681fab59684ba0214d91722ecb) },
        y: Fp2 { c0: Fp(0x550630ba0c3ef4e8178004858ba1b137), c1: Fp(0x0a7eb621013cab9f2fe51ef2c28d768c) },
    },
    AffinePoint {
        x: Fp2 { c0: Fp(0x51f0c40753dbfcd3ee74dc50a449e2d6), c1: Fp(0x29d48f1bfad7f1e698f1ad3f3787ab1b) },
        y: Fp2 { c0: Fp(0x603144ad9a47c5a2b7cf752dcfe8dbcb), c1: Fp(0x1f71b5d047aef6aeb096cbc7a198240f) },
    },
    AffinePoint {
        x: Fp2 { c0: Fp(0x5d430935a5fc13107d9261be38855759), c1: Fp(0x4fabcc398a2fa26d687757d96c5ed5ec) },
        y: Fp2 { c0: Fp(0x1ea7a3512e60c6b48e7583e72b9772f1), c1: Fp(0x4eb40d5e10b4704de5884340d6d02d73) },
    },
    AffinePoint {
        x: Fp2 { c0: Fp(0x08ad842675a76e9ed9108e2485c02740), c1: Fp(0x5c88ce456e573e4c63e76d2440d0a8c1) },
        y: Fp2 { c0: Fp(0x582b18a369c8e9eb779b9747b3a42e0b), c1: Fp(0x21884cb8f47886d71f5009d092752880) },
    },
    AffinePoint {
        x: Fp2 { c0: Fp(0x2118b63b066169d7dabeed5cef70bc35), c1: Fp(0x27229fb5449126f70fd73e2bd7de24dc) },
        y: Fp2 { c0: Fp(0x04a585ad1674c2f190a488b37b22b148), c1: Fp(0x4b5edc682ab92f34875a8d1d0743d646) },
    },
    AffinePoint {
        x: Fp2 { c0: Fp(0x37857be7a5145181768c0f288b79811c), c1: Fp(0x46c0111b443a0702dd4574e6389ceb10) },
        y: Fp2 { c0: Fp(0x50e87330e00d9f361f79f5e735a93714), c1: Fp(0x645569c94b5db43b68bea744f87be4d8) },
    },
    AffinePoint {
        x: Fp2 { c0: Fp(0x2f2fdbecebf52bd2275887d3ca37efe4), c1: Fp(0x67d5f570b84b44dea49912fc20fcd093) },
        y: Fp2 { c0: Fp(0x0d49ba8dba9af38cc0cd9c89af4acfd2), c1: Fp(0x4684530018e3138cdf313248209ee8d1) },
    },
    AffinePoint {
        x: Fp2 { c0: Fp(0x08e3966bb9b2fbd4122caa4bb79011ed), c1: Fp(0x3c73cee1afd504ac8b647b4199454a32) },
        y: Fp2 { c0: Fp(0x204ec5b29e38184c4622a76c9532f2e6), c1: Fp(0x5a08ec146046afbb66482f0e7b8ae392) },
    },
    AffinePoint {
        x: Fp2 { c0: Fp(0x3bb537027a5740855a86820998ba1ae2), c1: Fp(0x0b4522c5172eb0e729df0041e0081b0f) },
        y: Fp2 { c0: Fp(0x560d8e8701f417f5b288bb2ae8bf6c8c), c1: Fp(0x420b95a26518d9b74bd6b6d6a499935d) },
    },
    AffinePoint {
        x: Fp2 { c0: Fp(0x7eb25edd2c123e8e6ba80c40c361f038), c1: Fp(0x6f09581879f2e7d4884d75c5270757b0) },
        y: Fp2 { c0: Fp(0x11ecf3d56ced5a481dd57d661e9dc7bf), c1: Fp(0x751860d148fbff18e4385c466ffa67c7) },
    },
    AffinePoint {
        x: Fp2 { c0: Fp(0x711402e331ab6c10ea3621feaecf68f9), c1: Fp(0x012e33832687717097a755e870ac114d) },
        y: Fp2 { c0: Fp(0x3725c0beaee181111f623246a4041ba8), c1: Fp(0x334f685be50bfb94b65fef877bc8f5df) },
    },
    AffinePoint {
        x: Fp2 { c0: Fp(0x192e72cd34cd53efc6c15918364c50b7), c1: Fp(0x3ffe6d411002684e77b4a8c763fc08c2) },
        y: Fp2 { c0: Fp(0x59eca2ba6a465349205a3f4d0ac04a51), c1: Fp(0x090d821228cf30f10e0f006e27fc4d90) },
    },
    AffinePoint {
        x: Fp2 { c0: Fp(0x324ec517781a0b69ec72752678d5128e), c1: Fp(0x0a7d1d28472b5ec4971a1c4e4588a1a2) },
        y: Fp2 { c0: Fp(0x68d726ad20f0ec72a45e2e23ae93c8f7), c1: Fp(0x51fd5e7042c6db3ecc8fdba8caf8a1d0) },
    },
    AffinePoint {
        x: Fp2 { c0: Fp(0x07a5f67771d443e2e0096ffdc84b9a8a), c1: Fp(0x791f80dd29c395bdc982fdcf7c6e1a02) },
        y: Fp2 { c0: Fp(0x7e5299e2b8e334b4291ecfebb680ed96), c1: Fp(0x53142f69d9552108985e4850218dfd8d) },
    },
    AffinePoint {
        x: Fp2 { c0: Fp(0x485ff620e70197f5a5e302d190604e0c), c1: Fp(0x3baf023fd553ef4453f538b51d24c14d) },
        y: Fp2 { c0: Fp(0x36b6c57c5276a1f781d784d79fdb6030), c1: Fp(0x48ea0e1f227994110397984f3edfc9b2) },
    },
    AffinePoint {
        x: Fp2 { c0: Fp(0x3f2cadad2bac583171aba531e9dfe23a), c1: Fp(0x58826750367021aaa54ef1357d87d15e) },
        y: Fp2 { c0: Fp(0x70faedb88a2ccc8b87753cc6e393ea31), c1: Fp(0x7c55bbcb15aee2a0f2bef04f94071cd8) },
    },
    AffinePoint {
        x: Fp2 { c0: Fp(0x592ac4336b2854d116eb87c18777ab31), c1: Fp(0x44d2e05379e9ddee7459a0451c464ed6) },
        y: Fp2 { c0: Fp(0x6d3a144688723a25567d4ffaf4633bd5), c1: Fp(0x0aaff4e131b85f333356de18683282e3) },
    },
    AffinePoint {
        x: Fp2 { c0: Fp(0x738b7fd59265e61f3dc80dd1a4ac14fe), c1: Fp(0x1c40e16bcce0a7157045ef1fe97896da) },
        y: Fp2 { c0: Fp(0x40b1476591bc05ec427faec278632497), c1: Fp(0x58f6abb14e44d9a29a2a0c7807ec4f3f) },
    },
    AffinePoint {
        x: Fp2 { c0: Fp(0x051319252b0bce54b56653eef39337c2), c1: Fp(0x3f60d9f671b689ab2876cd876d1dac36) },
        y: Fp2 { c0: Fp(0x2ef233256aa5475c3c145fd9a393c814), c1: Fp(0x0a19ba78ad71e6ade7013ee23f997873) },
    },
    AffinePoint {
        x: Fp2 { c0: Fp(0x5202b6ab478751bbe3ed8eb086c1104f), c1: Fp(0x323228d12649e8739d052266ead630d7) },
        y: Fp2 { c0: Fp(0x66291960cb15927d6db3aa6d98974e48), c1: Fp(0x311a0df99c780fc454ecb1f6222f981a) },
    },
    AffinePoint {
        x: Fp2 { c0: Fp(0x45281766d6d0135670b46f9aabe1a6ba), c1: Fp(0x04b927fee4be34222652b0c23296d968) },
        y: Fp2 { c0: Fp(0x4b5ff27d9ee58f8e421d0756cc27d1b6), c1: Fp(0x196b447f315ebb287d6dfe2e66d2e5aa) },
    },
    AffinePoint {
        x: Fp2 { c0: Fp(0x75441d357efa3e72f5b82f8e4c587237), c1: Fp(0x70c0711549655e2344cb4cc08e900cc1) },
        y: Fp2 { c0: Fp(0x52211563ee78d93501089de649b68ab3), c1: Fp(0x592cd9df8753a087a45b0b12a13964ff) },
    },
    AffinePoint {
        x: Fp2 { c0: Fp(0x5c395b6cd457dff8fe4bdc6e69d4c951), c1: Fp(0x73b6cf7c50cc324c5ba7a85bb2e0f560) },
        y: Fp2 { c0: Fp(0x0529da6f7a5ab9a19f9785e6b817e1fa), c1: Fp(0x17f3512b6a0e8044f4d8af37b9c497e2) },
    },
    AffinePoint {
        x: Fp2 { c0: Fp(0x7d05d45ede63a29757706ef8170ff6fc), c1: Fp(0x3d0b11b69c49580b0b704d8cadbf65da) },
        y: Fp2 { c0: Fp(0x0d59d9d56473b083143860dca920ca8a), c1: Fp(0x75f2bf2619a3ef1dd759d1cf4c4178ca) },
    },
    AffinePoint {
        x: Fp2 { c0: Fp(0x1d42e10282c24204abd82c403113b49e), c1: Fp(0x1af12d8ebc25fb04ec746be9d494f7b1) },
        y: Fp2 { c0: Fp(0x7ac5d00347e2b9a1c192f9a3778e49c8), c1: Fp(0x3c7d4e55d99f80144ba6902841d7a188) },
    },
    AffinePoint {
        x: Fp2 { c0: Fp(0x492b48d07643eaaca3ac3c88069e5fb8), c1: Fp(0x3ad58519b684c7b1227002a57065c6f4) },
        y: Fp2 { c0: Fp(0x602ae7bfd119fb1ab860ef318cafaec1), c1: Fp(0x2739f79556703bf915a59a200113ccb8) },
    },
    AffinePoint {
        x: Fp2 { c0: Fp(0x221db428f894e5845444ac90e7f76ca7), c1: Fp(0x4f3bfa47e54c4e5af1dcaf12af110477) },
        y: Fp2 { c0: Fp(0x6e1d5ec932cdc58db28af0bcaa071e0b), c1: Fp(0x64947309e78d22b4af0d3d94a7489bb5) },
    },
    AffinePoint {
        x: Fp2 { c0: Fp(0x5f560bfd4f99bf7e559beef5e3c8dac7), c1: Fp(0x46f69df7d1d7bd70772ff7d97630a164) },
        y: Fp2 { c0: Fp(0x24c25138c2fee18bc2512172afb5e5ea), c1: Fp(0x157565e42aa72ac152d938c2821f0162) },
    },
    AffinePoint {
        x: Fp2 { c0: Fp(0x6865cccd0576864ecca2ceb83e341013), c1: Fp(0x3cc194bc5043f14f4b143edde3b09827) },
        y: Fp2 { c0: Fp(0x5dff6d8bab71fa7695e5d6ab15833693), c1: Fp(0x050268dec30f6515482d8a697c8ffe8b) },
    },
    AffinePoint {
        x: Fp2 { c0: Fp(0x0dc07d64bb7071062ae61972c23fe2e7), c1: Fp(0x5a48ed731eead19f9395e7a1b153fe69) },
        y: Fp2 { c0: Fp(0x054f6476ccb0dee9edf1821338f1e54b), c1: Fp(0x4dfbe1283ad57fc016ff0010020fac76) },
    },
    AffinePoint {
        x: Fp2 { c0: Fp(0x2ad06840af30f1887d092578bfa20640), c1: Fp(0x3363eebbd65f9a7c83b4674b188714e8) },
        y: Fp2 { c0: Fp(0x7f71c2b316ea05eba10ae9312d5ccff9), c1: Fp(0x667b047a13e9dbdde667189109f3a8a9) },
    },
    AffinePoint {
        x: Fp2 { c0: Fp(0x1f5fc04968445f05856a431244f76386), c1: Fp(0x476527f35bba30584ec9234d062f436d) },
        y: Fp2 { c0: Fp(0x701a31679ec7c1096b6b0f06c2f55146), c1: Fp(0x437b6a99729b4ef28e2d12f7a1d62230) },
    },
    AffinePoint {
        x: Fp2 { c0: Fp(0x0a622bf98f98dec1e1b5f4c672890201), c1: Fp(0x7aff93129eea3af9d47633c19c2cad2d) },
        y: Fp2 { c0: Fp(0x11f85c330769bbeca1921cb0987344b4), c1: Fp(0x36500bd3599bb32057f88c8c726512d0) },
    },
    AffinePoint {
        x: Fp2 { c0: Fp(0x3b60941d52642a5e76208d85f06e9f2d), c1: Fp(0x14b2376c1cb9d50245c96fd387de4400) },
        y: Fp2 { c0: Fp(0x6e600daa913ef31f394da9ee9ffd1ce8), c1: Fp(0x6aab71206f304bc800654abbeac452a1) },
    },
    AffinePoint {
        x: Fp2 { c0: Fp(0x45d3fd537facd2f92c01937f6ea275f0), c1: Fp(0x224f128d7027d2edaa53f7d3b49eabb3) },
        y: Fp2 { c0: Fp(0x7166211fa34d66a090b05958f79f08c7), c1: Fp(0x2a9f86241360aaacc679a1a66d1a66e1) },
    },
    AffinePoint {
        x: Fp2 { c0: Fp(0x5207f3b1f137d59bac48f560ddbdf996), c1: Fp(0x33da5da8833602a34ceeda425df6199e) },
        y: Fp2 { c0: Fp(0x465e708513e6ec70641a18fbdceae8d9), c1: Fp(0x6362c291c91a48f0bd7cba5514fb7adf) },
    },
    AffinePoint {
        x: Fp2 { c0: Fp(0x2d42691e69a864c8c1c07e9f1beca698), c1: Fp(0x00722b0781eee77539112df10d7bdb3b) },
        y: Fp2 { c0: Fp(0x521270b10fdc69e98f6f824360ac85f4), c1: Fp(0x0a0dd8ea3d8d24b900c1e2a795470513) },
    },
    AffinePoint {
        x: Fp2 { c0: Fp(0x09797b196a25a519dc343076b83f12da), c1: Fp(0x25d0d5246d22a35feeb82680fc8bf265) },
        y: Fp2 { c0: Fp(0x5b9b1e5441fd550c0f54a41605bcaef9), c1: Fp(0x4b539ae08f47f4014f39ea673da6a345) },
    },
    AffinePoint {
        x: Fp2 { c0: Fp(0x2d65057f25a88d4f2701964fb28bcfa3), c1: Fp(0x6db1af13669403ed11f9d35ca7a9beb0) },
        y: Fp2 { c0: Fp(0x4f10fe6d1c04660a55904959628325aa), c1: Fp(0x48d4715aed3922cd2fd2a0c900245a8a) },
    },
    AffinePoint {
        x: Fp2 { c0: Fp(0x17d7c663ed9ecbb4a69a1c89dcae34bd), c1: Fp(0x14564ecf7d528137e5d35f518686627e) },
        y: Fp2 { c0: Fp(0x2918edcb4e4e8a488c48b1ac9766da34), c1: Fp(0x2f5224bfca28198b302256705103f9b6) },
    },
    AffinePoint {
        x: Fp2 { c0: Fp(0x779304d7ed437343d76ad2a09f85a183), c1: Fp(0x6ac9b9275837d679272cc770a680b206) },
        y: Fp2 { c0: Fp(0x568c84a39312e18adba3f38f767b1041), c1: Fp(0x33d204ab84925f1a39e4047293096c00) },
    },
    AffinePoint {
        x: Fp2 { c0: Fp(0x24495562335055d27acff8fbc2a8ce69), c1: Fp(0x06c4484a721a2f456cdbb995e34ce84c) },
        y: Fp2 { c0: Fp(0x18c3730d8d8d3d02392560e6d9bd5825), c1: Fp(0x7451e1823728590d112fe0ae683b8d16) },
    },
    AffinePoint {
        x: Fp2 { c0: Fp(0x152840da2c0a28492aeda20f7904cdb5), c1: Fp(0x44ce0f4152ed1f64ad0bf46b14848be6) },
        y: Fp2 { c0: Fp(0x6161f22a080f6e6bdbaecee066151f3f), c1: Fp(0x0ce18351ab741c9c960c560f2f5f4fb2) },
    },
    AffinePoint {
        x: Fp2 { c0: Fp(0x0af085f934971a2c50b9f9fcc361e971), c1: Fp(0x2961d395a98c9d48963ea2c051c8186e) },
        y: Fp2 { c0: Fp(0x1c02f622e120d160e5b68f286412f003), c1: Fp(0x4799122c74e99449744231e103c18b98) },
    },
    AffinePoint {
        x: Fp2 { c0: Fp(0x77f0daddd649ffa8678fcbe0c707507b), c1: Fp(0x268d17acd57ce9bf2ac753232770b7e2) },
        y: Fp2 { c0: Fp(0x5cb196d5ba2523d0c091a8bcc059174a), c1: Fp(0x5a880e67730dd40264427f4914026630) },
    },
    AffinePoint {
        x: Fp2 { c0: Fp(0x5ef381a98ed2ff6b196b76eddfacd3b8), c1: Fp(0x3f2f069646ed7c15f05bb365948458fc) },
        y: Fp2 { c0: Fp(0x55aaa3796258359060405ef88796cf43), c1: Fp(0x56986e1dcdd4134fabce0a0d865a5f73) },
    },
    AffinePoint {
        x: Fp2 { c0: Fp(0x38ac038ab8975a398875059139e59c09), c1: Fp(0x684142ef853b20c9dcf93ed86e378ff9) },
        y: Fp2 { c0: Fp(0x18daa9ccd7ff57a6b9f961d11611ea26), c1: Fp(0x3605669eb392731029a434d56ca2909d) },
    },
    AffinePoint {
        x: Fp2 { c0: Fp(0x1d568dd328a47f0169b0dcd504dae20d), c1: Fp(0x1aff60930fde09f2a4e5a02f15982b6c) },
        y: Fp2 { c0: Fp(0x66d5eee5614691afe952d038701ddbdd), c1: Fp(0x1eaaeeac04d6199202ee109ce7f791d1) },
    },
    AffinePoint {
        x: Fp2 { c0: Fp(0x26f79938cae3a5fa5a9d812f94e9e337), c1: Fp(0x34945f9d079dd230a2909706a20d1f73) },
        y: Fp2 { c0: Fp(0x3c59fb58b213809976523e579c92f2d0), c1: Fp(0x131955fb05bec86a5333e7aad7af91c5) },
    },
    AffinePoint {
        x: Fp2 { c0: Fp(0x79af6ae19022aa75374509f0d6cb812f), c1: Fp(0x19e9447a05f009ef05f8b7da6e4b984f) },
        y: Fp2 { c0: Fp(0x190092cee34b49a1d8b26cec41a6e25d), c1: Fp(0x4524fcb126c6920963ff96af2fcfb13d) },
    },
];

