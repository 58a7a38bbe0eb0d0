//! algorithms/pbkdf2.rs
//! PBKDF2-HMAC with a configurable, ordered list of accepted inner hash
//! functions.
//!
//! Payload: `derived_hex|salt_hex|iterations|key_len|hash_fn_code`
//!
//! Position 0 of the accepted list is preferred and used for every new hash.
//! The remaining entries are accepted for verification only and flag the
//! hash for upgrade. A payload naming a known function that is absent from
//! the list is a non-match, so several legacy configurations can be probed
//! without raising errors.

use tracing::{debug, trace};

use crate::algorithms::{Algorithm, Verdict};
use crate::constants::{algorithm_ids, pbkdf2_defaults};
use crate::crypto::HashFunction;
use crate::types::PwCryptoError;
use crate::utils::{ct_eq, decode_hex, parse_decimal, random_salt, split_fields};

const ID: &str = algorithm_ids::PBKDF2;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Pbkdf2Crypto {
    iterations: u32,
    key_len: usize,
    salt_len: usize,
    hash_fns: Vec<HashFunction>,
}

impl Default for Pbkdf2Crypto {
    fn default() -> Self {
        Self::new()
    }
}

impl Pbkdf2Crypto {
    /// Recommended options: 8192 iterations, 32-byte key, 24-byte salt,
    /// accepting SHA-512 (preferred), SHA-256 and SHA-1.
    pub fn new() -> Self {
        Self::with_options(
            pbkdf2_defaults::ITERATIONS,
            pbkdf2_defaults::KEY_LEN,
            pbkdf2_defaults::SALT_LEN,
            vec![HashFunction::Sha512, HashFunction::Sha256, HashFunction::Sha1],
        )
    }

    /// First entry of `hash_fns` is the preferred one.
    pub fn with_options(
        iterations: u32,
        key_len: usize,
        salt_len: usize,
        hash_fns: Vec<HashFunction>,
    ) -> Self {
        Self {
            iterations,
            key_len,
            salt_len,
            hash_fns,
        }
    }

    pub fn iterations(&self) -> u32 {
        self.iterations
    }

    pub fn key_len(&self) -> usize {
        self.key_len
    }

    pub fn salt_len(&self) -> usize {
        self.salt_len
    }

    pub fn hash_functions(&self) -> &[HashFunction] {
        &self.hash_fns
    }

    pub fn preferred_hash_function(&self) -> Option<HashFunction> {
        self.hash_fns.first().copied()
    }

    fn derive(
        hash_fn: HashFunction,
        plaintext: &str,
        salt: &[u8],
        iterations: u32,
        key_len: usize,
    ) -> Vec<u8> {
        let mut out = vec![0u8; key_len];
        hash_fn.pbkdf2(plaintext.as_bytes(), salt, iterations, &mut out);
        out
    }
}

impl Algorithm for Pbkdf2Crypto {
    fn id(&self) -> &'static str {
        ID
    }

    fn hash(&self, plaintext: &str) -> Result<String, PwCryptoError> {
        let hash_fn = self
            .preferred_hash_function()
            .ok_or_else(|| PwCryptoError::invalid_params(ID, "no hash functions supplied"))?;
        if self.iterations == 0 {
            return Err(PwCryptoError::invalid_params(ID, "iterations must be at least 1"));
        }
        if self.key_len == 0 {
            return Err(PwCryptoError::invalid_params(ID, "key length must be at least 1"));
        }

        let salt = random_salt(self.salt_len)?;
        let derived = Self::derive(hash_fn, plaintext, &salt, self.iterations, self.key_len);
        trace!(iterations = self.iterations, hash_fn = hash_fn.name(), "minted pbkdf2 hash");

        Ok(format!(
            "{}|{}|{}|{}|{}",
            hex::encode(derived),
            hex::encode(salt),
            self.iterations,
            self.key_len,
            hash_fn
        ))
    }

    fn check(&self, plaintext: &str, payload: &str) -> Result<Verdict, PwCryptoError> {
        let [derived_hex, salt_hex, iter_field, key_len_field, hash_fn_field] =
            split_fields::<5>(ID, payload)?;

        let expected = decode_hex(ID, "derived key", derived_hex)?;
        let salt = decode_hex(ID, "salt", salt_hex)?;
        let iterations: u32 = parse_decimal(ID, "iterations", iter_field)?;
        let key_len: usize = parse_decimal(ID, "key length", key_len_field)?;
        let hash_fn = HashFunction::parse(hash_fn_field)
            .map_err(|e| PwCryptoError::malformed(ID, e.to_string()))?;

        if iterations == 0 {
            return Err(PwCryptoError::malformed(ID, "iterations must be at least 1"));
        }
        if key_len == 0 || key_len != expected.len() {
            return Err(PwCryptoError::malformed(ID, "key length disagrees with derived key"));
        }

        if !self.hash_fns.contains(&hash_fn) {
            debug!(hash_fn = hash_fn.name(), "pbkdf2 hash function not accepted");
            return Ok(Verdict::MISMATCH);
        }

        let actual = Self::derive(hash_fn, plaintext, &salt, iterations, key_len);
        let stale = salt.len() != self.salt_len
            || iterations != self.iterations
            || key_len != self.key_len
            || Some(hash_fn) != self.preferred_hash_function();

        Ok(Verdict::from_comparison(ct_eq(&actual, &expected), stale))
    }
}
