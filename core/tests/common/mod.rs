// Shared test oracle: every algorithm must satisfy the same contract.
#![allow(dead_code)]

use pwcrypto_core::algorithms::{
    Algorithm, Argon2Crypto, NullCrypto, Pbkdf2Crypto, SaltedDigest, ScryptCrypto, Verdict,
};
use pwcrypto_core::crypto::HashFunction;

pub const MATCH: Verdict = Verdict::matched(false);
pub const MATCH_UPGRADE: Verdict = Verdict::matched(true);

/// Cheap parameter sets so the suite stays fast in debug builds.
pub fn fast_pbkdf2() -> Pbkdf2Crypto {
    Pbkdf2Crypto::with_options(64, 32, 16, vec![HashFunction::Sha512, HashFunction::Sha256, HashFunction::Sha1])
}

pub fn fast_scrypt() -> ScryptCrypto {
    ScryptCrypto::with_options(16, 16, 1, 1, 32)
}

pub fn fast_argon2() -> Argon2Crypto {
    Argon2Crypto::with_options(16, 1, 64, 1, 32)
}

pub fn all_fast_algorithms() -> Vec<Box<dyn Algorithm>> {
    vec![
        Box::new(NullCrypto::new()),
        Box::new(SaltedDigest::sha1()),
        Box::new(SaltedDigest::sha256()),
        Box::new(fast_pbkdf2()),
        Box::new(fast_scrypt()),
        Box::new(fast_argon2()),
    ]
}

pub fn run_crypto_tests(alg: &dyn Algorithm) {
    assert!(!alg.id().is_empty());
    assert!(!alg.id().contains('|'), "id must not contain the separator");

    let h = alg.hash("test").unwrap();
    assert!(!h.is_empty());
    assert!(!h.contains('\n'));

    assert_eq!(alg.check("test", &h).unwrap(), MATCH, "{} round trip", alg.id());
    assert_eq!(alg.check("bad", &h).unwrap(), Verdict::MISMATCH, "{} negative", alg.id());

    // Leading character is the digest (or plaintext for null); any change there must not verify.
    let mut corrupted = h.clone().into_bytes();
    corrupted[0] = if corrupted[0] == b'0' { b'1' } else { b'0' };
    let corrupted = String::from_utf8(corrupted).unwrap();
    assert_eq!(
        alg.check("test", &corrupted).unwrap(),
        Verdict::MISMATCH,
        "{} corrupted digest",
        alg.id()
    );
}
