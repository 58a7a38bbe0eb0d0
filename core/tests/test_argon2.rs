mod common;

use common::{fast_argon2, MATCH, MATCH_UPGRADE};
use pwcrypto_core::algorithms::{Algorithm, Argon2Crypto, Verdict};
use pwcrypto_core::types::PwCryptoError;

#[test]
fn recommended_options() {
    let alg = Argon2Crypto::new();
    assert_eq!(alg.salt_len(), 32);
    assert_eq!(alg.time(), 2);
    assert_eq!(alg.memory(), 256 * 1024);
    assert_eq!(alg.threads(), 4);
    assert_eq!(alg.key_len(), 32);
}

#[test]
fn payload_layout() {
    let h = fast_argon2().hash("pw").unwrap();
    let fields: Vec<&str> = h.split('|').collect();
    assert_eq!(fields.len(), 6);
    assert_eq!(fields[0].len(), 64);
    assert_eq!(fields[1].len(), 32);
    assert_eq!(&fields[2..], ["1", "64", "1", "32"]);
}

#[test]
fn stale_parameters_flag_upgrade() {
    let h = fast_argon2().hash("pw").unwrap();

    let stronger = [
        Argon2Crypto::with_options(16, 2, 64, 1, 32),
        Argon2Crypto::with_options(16, 1, 128, 1, 32),
        Argon2Crypto::with_options(16, 1, 64, 2, 32),
        Argon2Crypto::with_options(16, 1, 64, 1, 64),
        Argon2Crypto::with_options(32, 1, 64, 1, 32),
    ];
    for current in stronger {
        assert_eq!(current.check("pw", &h).unwrap(), MATCH_UPGRADE, "{current:?}");
    }
    assert_eq!(fast_argon2().check("pw", &h).unwrap(), MATCH);
    assert_eq!(fast_argon2().check("pW", &h).unwrap(), Verdict::MISMATCH);
}

#[test]
fn short_salt_is_rejected() {
    let err = Argon2Crypto::with_options(4, 1, 64, 1, 32).hash("pw").unwrap_err();
    assert!(matches!(err, PwCryptoError::InvalidParameters { algorithm: "argon2", .. }));

    // A stored payload with a 4-byte salt cannot be re-derived.
    let payload = format!("{}|00112233|1|64|1|32", "ab".repeat(32));
    let err = fast_argon2().check("pw", &payload).unwrap_err();
    assert!(matches!(err, PwCryptoError::MalformedPayload { algorithm: "argon2", .. }));
}

#[test]
fn threads_out_of_range_is_malformed() {
    let h = fast_argon2().hash("pw").unwrap();
    let tampered = h.replacen("|1|64|1|32", "|1|64|256|32", 1);
    assert_ne!(tampered, h);
    let err = fast_argon2().check("pw", &tampered).unwrap_err();
    assert!(err.is_malformed());
}

#[test]
fn zero_threads_is_malformed() {
    let h = fast_argon2().hash("pw").unwrap();
    let tampered = h.replacen("|1|64|1|32", "|1|64|0|32", 1);
    let err = fast_argon2().check("pw", &tampered).unwrap_err();
    assert!(err.is_malformed());
}

#[test]
fn oversized_stored_cost_is_malformed() {
    let dk = "ab".repeat(32);
    let salt = "00".repeat(16);
    for (time, memory) in [("1", "4294967295"), ("1", "2097152"), ("4294967295", "64")] {
        let payload = format!("{dk}|{salt}|{time}|{memory}|1|32");
        let err = fast_argon2().check("pw", &payload).unwrap_err();
        assert!(
            matches!(err, PwCryptoError::MalformedPayload { algorithm: "argon2", .. }),
            "{payload} gave {err:?}"
        );
    }
}

#[test]
fn own_configuration_raises_the_ceiling() {
    // 65 passes is above the fixed time ceiling but is this instance's own setting.
    let heavy = Argon2Crypto::with_options(16, 65, 8, 1, 32);
    let h = heavy.hash("pw").unwrap();
    assert_eq!(heavy.check("pw", &h).unwrap(), MATCH);
    assert!(fast_argon2().check("pw", &h).unwrap_err().is_malformed());
}
