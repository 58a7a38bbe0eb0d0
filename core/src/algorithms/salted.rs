//! algorithms/salted.rs
//! Single-pass salted digests: `hex(H(salt || plaintext))|hex(salt)`.
//!
//! Only SHA-1 and SHA-256 are exposed, under the ids `sha1` and `sha256`.
//! Both are legacy formats kept verifiable for migration; prefer a KDF for
//! new hashes.

use tracing::trace;

use crate::algorithms::{Algorithm, Verdict};
use crate::constants::{algorithm_ids, DEFAULT_SALTED_DIGEST_SALT_LEN};
use crate::crypto::HashFunction;
use crate::types::PwCryptoError;
use crate::utils::{ct_eq, decode_hex, random_salt, split_fields};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SaltedDigest {
    id: &'static str,
    hash_fn: HashFunction,
    salt_len: usize,
}

impl SaltedDigest {
    /// Salted SHA-1 with recommended salt length.
    pub fn sha1() -> Self {
        Self {
            id: algorithm_ids::SHA1,
            hash_fn: HashFunction::Sha1,
            salt_len: DEFAULT_SALTED_DIGEST_SALT_LEN,
        }
    }

    /// Salted SHA-256 with recommended salt length.
    pub fn sha256() -> Self {
        Self {
            id: algorithm_ids::SHA256,
            hash_fn: HashFunction::Sha256,
            salt_len: DEFAULT_SALTED_DIGEST_SALT_LEN,
        }
    }

    pub fn with_salt_len(mut self, salt_len: usize) -> Self {
        self.salt_len = salt_len;
        self
    }

    pub fn hash_function(&self) -> HashFunction {
        self.hash_fn
    }

    pub fn salt_len(&self) -> usize {
        self.salt_len
    }

    fn digest(&self, salt: &[u8], plaintext: &str) -> Vec<u8> {
        self.hash_fn.digest(&[salt, plaintext.as_bytes()])
    }
}

impl Algorithm for SaltedDigest {
    fn id(&self) -> &'static str {
        self.id
    }

    fn hash(&self, plaintext: &str) -> Result<String, PwCryptoError> {
        let salt = random_salt(self.salt_len)?;
        let digest = self.digest(&salt, plaintext);
        trace!(algorithm = self.id, salt_len = self.salt_len, "minted salted digest");
        Ok(format!("{}|{}", hex::encode(digest), hex::encode(salt)))
    }

    fn check(&self, plaintext: &str, payload: &str) -> Result<Verdict, PwCryptoError> {
        let [digest_hex, salt_hex] = split_fields::<2>(self.id, payload)?;
        let expected = decode_hex(self.id, "digest", digest_hex)?;
        let salt = decode_hex(self.id, "salt", salt_hex)?;

        let actual = self.digest(&salt, plaintext);
        Ok(Verdict::from_comparison(
            ct_eq(&actual, &expected),
            salt.len() != self.salt_len,
        ))
    }
}
