//! algorithms/argon2.rs
//! Argon2id (version 0x13).
//!
//! Payload: `derived_hex|salt_hex|time|memory|threads|key_len`
//!
//! Memory is in KiB. The primitive requires a salt of at least 8 bytes and
//! a key of at least 4 bytes; payloads below those limits are malformed.
//! Memory and time above both the fixed ceilings and this instance's own
//! settings are malformed as well.

use ::argon2::{Algorithm as Argon2Variant, Argon2, Params, Version};
use tracing::trace;

use crate::algorithms::{Algorithm, Verdict};
use crate::constants::{algorithm_ids, argon2_defaults, payload_limits};
use crate::types::PwCryptoError;
use crate::utils::{ct_eq, decode_hex, parse_decimal, random_salt, split_fields};

const ID: &str = algorithm_ids::ARGON2;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Argon2Crypto {
    salt_len: usize,
    time: u32,
    memory: u32,
    threads: u8,
    key_len: u32,
}

impl Default for Argon2Crypto {
    fn default() -> Self {
        Self::new()
    }
}

impl Argon2Crypto {
    /// Recommended options: 32-byte salt, time 2, 256 MiB, 4 threads, 32-byte key.
    pub fn new() -> Self {
        Self::with_options(
            argon2_defaults::SALT_LEN,
            argon2_defaults::TIME,
            argon2_defaults::MEMORY,
            argon2_defaults::THREADS,
            argon2_defaults::KEY_LEN,
        )
    }

    pub fn with_options(salt_len: usize, time: u32, memory: u32, threads: u8, key_len: u32) -> Self {
        Self {
            salt_len,
            time,
            memory,
            threads,
            key_len,
        }
    }

    pub fn salt_len(&self) -> usize {
        self.salt_len
    }

    pub fn time(&self) -> u32 {
        self.time
    }

    pub fn memory(&self) -> u32 {
        self.memory
    }

    pub fn threads(&self) -> u8 {
        self.threads
    }

    pub fn key_len(&self) -> u32 {
        self.key_len
    }

    fn derive(
        plaintext: &str,
        salt: &[u8],
        time: u32,
        memory: u32,
        threads: u8,
        key_len: u32,
    ) -> Result<Vec<u8>, String> {
        let out_len = key_len as usize;
        let params = Params::new(memory, time, u32::from(threads), Some(out_len))
            .map_err(|e| e.to_string())?;
        let ctx = Argon2::new(Argon2Variant::Argon2id, Version::V0x13, params);

        let mut out = vec![0u8; out_len];
        ctx.hash_password_into(plaintext.as_bytes(), salt, &mut out)
            .map_err(|e| e.to_string())?;
        Ok(out)
    }
}

impl Algorithm for Argon2Crypto {
    fn id(&self) -> &'static str {
        ID
    }

    fn hash(&self, plaintext: &str) -> Result<String, PwCryptoError> {
        let salt = random_salt(self.salt_len)?;
        let derived = Self::derive(plaintext, &salt, self.time, self.memory, self.threads, self.key_len)
            .map_err(|reason| PwCryptoError::invalid_params(ID, reason))?;
        trace!(time = self.time, memory = self.memory, threads = self.threads, "minted argon2 hash");

        Ok(format!(
            "{}|{}|{}|{}|{}|{}",
            hex::encode(derived),
            hex::encode(salt),
            self.time,
            self.memory,
            self.threads,
            self.key_len
        ))
    }

    fn check(&self, plaintext: &str, payload: &str) -> Result<Verdict, PwCryptoError> {
        let [derived_hex, salt_hex, time_field, memory_field, threads_field, key_len_field] =
            split_fields::<6>(ID, payload)?;

        let expected = decode_hex(ID, "derived key", derived_hex)?;
        let salt = decode_hex(ID, "salt", salt_hex)?;
        let time: u32 = parse_decimal(ID, "time", time_field)?;
        let memory: u32 = parse_decimal(ID, "memory", memory_field)?;
        let threads: u8 = parse_decimal(ID, "threads", threads_field)?;
        let key_len: u32 = parse_decimal(ID, "key length", key_len_field)?;

        if key_len as usize != expected.len() {
            return Err(PwCryptoError::malformed(ID, "key length disagrees with derived key"));
        }
        if memory > payload_limits::ARGON2_MAX_MEMORY.max(self.memory)
            || time > payload_limits::ARGON2_MAX_TIME.max(self.time)
        {
            return Err(PwCryptoError::malformed(ID, "cost parameters exceed ceiling"));
        }

        let actual = Self::derive(plaintext, &salt, time, memory, threads, key_len)
            .map_err(|reason| PwCryptoError::malformed(ID, reason))?;
        let stale = salt.len() != self.salt_len
            || time != self.time
            || memory != self.memory
            || threads != self.threads
            || key_len != self.key_len;

        Ok(Verdict::from_comparison(ct_eq(&actual, &expected), stale))
    }
}
