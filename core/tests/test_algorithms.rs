mod common;

use common::{all_fast_algorithms, fast_pbkdf2, run_crypto_tests, MATCH, MATCH_UPGRADE};
use proptest::prelude::*;
use pwcrypto_core::algorithms::{Algorithm, NullCrypto, SaltedDigest, Verdict};
use pwcrypto_core::types::PwCryptoError;

#[test]
fn every_algorithm_satisfies_contract() {
    for alg in all_fast_algorithms() {
        run_crypto_tests(alg.as_ref());
    }
}

#[test]
fn verdict_upgrade_implies_valid() {
    assert!(!Verdict::MISMATCH.valid());
    assert!(!Verdict::MISMATCH.must_upgrade());
    assert_eq!(Verdict::default(), Verdict::MISMATCH);

    let stale = Verdict::matched(true);
    assert!(stale.valid() && stale.must_upgrade());
    let fresh = Verdict::matched(false);
    assert!(fresh.valid() && !fresh.must_upgrade());
}

#[test]
fn ids_are_stable() {
    let ids: Vec<&str> = all_fast_algorithms().iter().map(|a| a.id()).collect();
    assert_eq!(ids, ["null", "sha1", "sha256", "pbkdf2", "Scrypt", "argon2"]);
}

#[test]
fn salted_algorithms_use_fresh_salts() {
    for alg in all_fast_algorithms().iter().filter(|a| a.id() != "null") {
        let h1 = alg.hash("same-password").unwrap();
        let h2 = alg.hash("same-password").unwrap();
        assert_ne!(h1, h2, "{} reused a salt", alg.id());
    }
}

#[test]
fn empty_and_unicode_plaintexts_round_trip() {
    for alg in all_fast_algorithms() {
        for p in ["", "パスワード🔐", "with|bar", "  spaced  "] {
            let h = alg.hash(p).unwrap();
            assert_eq!(alg.check(p, &h).unwrap(), MATCH, "{} {:?}", alg.id(), p);
        }
    }
}

// --- Null ---

#[test]
fn null_payload_is_plaintext() {
    let alg = NullCrypto::new();
    assert_eq!(alg.hash("secret").unwrap(), "secret");
    assert_eq!(alg.check("secret", "secret").unwrap(), MATCH);
    assert_eq!(alg.check("secret", "Secret").unwrap(), Verdict::MISMATCH);
    assert_eq!(alg.check("secret", "secret ").unwrap(), Verdict::MISMATCH);
}

// --- Salted SHA-1 / SHA-256 ---

#[test]
fn salted_payload_layout() {
    let alg = SaltedDigest::sha256().with_salt_len(8);
    let h = alg.hash("pw").unwrap();
    let fields: Vec<&str> = h.split('|').collect();
    assert_eq!(fields.len(), 2);
    assert_eq!(fields[0].len(), 64);
    assert_eq!(fields[1].len(), 16);
    assert!(h.bytes().all(|b| b == b'|' || b.is_ascii_digit() || (b'a'..=b'f').contains(&b)));
}

#[test]
fn salted_sha1_known_vector() {
    // SHA-1("" || "abc")
    let payload = "a9993e364706816aba3e25717850c26c9cd0d89d|";
    let current = SaltedDigest::sha1().with_salt_len(0);
    assert_eq!(current.check("abc", payload).unwrap(), MATCH);

    // Default salt length is 32, so an empty salt is stale.
    assert_eq!(SaltedDigest::sha1().check("abc", payload).unwrap(), MATCH_UPGRADE);
    assert_eq!(SaltedDigest::sha1().check("abd", payload).unwrap(), Verdict::MISMATCH);
}

#[test]
fn salted_digest_does_not_cross_verify() {
    let h = SaltedDigest::sha1().hash("pw").unwrap();
    // Same field count, wrong digest length for SHA-256.
    assert_eq!(SaltedDigest::sha256().check("pw", &h).unwrap(), Verdict::MISMATCH);
}

#[test]
fn salted_upgrade_on_salt_len() {
    let old = SaltedDigest::sha256().with_salt_len(16);
    let h = old.hash("pw").unwrap();
    assert_eq!(SaltedDigest::sha256().check("pw", &h).unwrap(), MATCH_UPGRADE);
    assert_eq!(old.check("pw", &h).unwrap(), MATCH);
}

#[test]
fn salted_malformed_payloads() {
    let alg = SaltedDigest::sha256();
    for payload in [
        "",
        "abcd",
        "abcd|ef|01",
        "zz|00",
        "abc|00",
        "ABCD|00",
        "abcd|0g",
    ] {
        let err = alg.check("pw", payload).unwrap_err();
        assert!(
            matches!(err, PwCryptoError::MalformedPayload { algorithm: "sha256", .. }),
            "{payload:?} gave {err:?}"
        );
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn prop_salted_round_trip(p in ".*") {
        let alg = SaltedDigest::sha256();
        let h = alg.hash(&p).unwrap();
        prop_assert_eq!(alg.check(&p, &h).unwrap(), MATCH);
    }

    #[test]
    fn prop_salted_negative(p1 in ".*", p2 in ".*") {
        prop_assume!(p1 != p2);
        let alg = SaltedDigest::sha1();
        let h = alg.hash(&p1).unwrap();
        prop_assert_eq!(alg.check(&p2, &h).unwrap(), Verdict::MISMATCH);
    }

    #[test]
    fn prop_pbkdf2_negative(p1 in "[ -~]{0,24}", p2 in "[ -~]{0,24}") {
        prop_assume!(p1 != p2);
        let alg = fast_pbkdf2();
        let h = alg.hash(&p1).unwrap();
        prop_assert_eq!(alg.check(&p2, &h).unwrap(), Verdict::MISMATCH);
    }

    // Flipping any digest nibble never yields a match.
    #[test]
    fn prop_corrupt_digest_never_matches(idx in 0usize..64, nibble in 0u8..16) {
        let alg = SaltedDigest::sha256();
        let h = alg.hash("pw").unwrap();
        let mut bytes = h.into_bytes();
        let replacement = b"0123456789abcdef"[nibble as usize];
        prop_assume!(bytes[idx] != replacement);
        bytes[idx] = replacement;
        let tampered = String::from_utf8(bytes).unwrap();
        prop_assert_eq!(alg.check("pw", &tampered).unwrap(), Verdict::MISMATCH);
    }
}
